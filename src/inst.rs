use crate::alu::AluOp;
use crate::mem::Mem;
use std::fmt;

pub const LDI: u8 = 0b1000_0010;
pub const PRN: u8 = 0b0100_0111;
pub const HLT: u8 = 0b0000_0001;
pub const MUL: u8 = 0b1010_0010;
pub const ADD: u8 = 0b1010_0000;
pub const PUSH: u8 = 0b0100_0101;
pub const POP: u8 = 0b0100_0110;
pub const CALL: u8 = 0b0101_0000;
pub const RET: u8 = 0b0001_0001;
pub const CMP: u8 = 0b1010_0111;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Opcode {
    Ldi,
    Prn,
    Hlt,
    Mul,
    Add,
    Push,
    Pop,
    Call,
    Ret,
    Cmp,
}

impl Opcode {
    pub fn from_byte(ir: u8) -> Option<Opcode> {
        let opcode = match ir {
            LDI => Opcode::Ldi,
            PRN => Opcode::Prn,
            HLT => Opcode::Hlt,
            MUL => Opcode::Mul,
            ADD => Opcode::Add,
            PUSH => Opcode::Push,
            POP => Opcode::Pop,
            CALL => Opcode::Call,
            RET => Opcode::Ret,
            CMP => Opcode::Cmp,
            _ => return None,
        };
        Some(opcode)
    }

    pub fn byte(self) -> u8 {
        match self {
            Opcode::Ldi => LDI,
            Opcode::Prn => PRN,
            Opcode::Hlt => HLT,
            Opcode::Mul => MUL,
            Opcode::Add => ADD,
            Opcode::Push => PUSH,
            Opcode::Pop => POP,
            Opcode::Call => CALL,
            Opcode::Ret => RET,
            Opcode::Cmp => CMP,
        }
    }

    /// Control transfers that write PC themselves and skip the default advance.
    pub fn sets_pc(self) -> bool {
        matches!(self, Opcode::Call | Opcode::Ret)
    }

    pub fn alu_op(self) -> Option<AluOp> {
        match self {
            Opcode::Add => Some(AluOp::Add),
            Opcode::Mul => Some(AluOp::Mul),
            Opcode::Cmp => Some(AluOp::Cmp),
            _ => None,
        }
    }

    pub fn mnemonic(self) -> &'static str {
        match self {
            Opcode::Ldi => "LDI",
            Opcode::Prn => "PRN",
            Opcode::Hlt => "HLT",
            Opcode::Mul => "MUL",
            Opcode::Add => "ADD",
            Opcode::Push => "PUSH",
            Opcode::Pop => "POP",
            Opcode::Call => "CALL",
            Opcode::Ret => "RET",
            Opcode::Cmp => "CMP",
        }
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mnemonic())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Instruction {
    pub opcode: Opcode,
    pub operand_count: u8,
}

impl Instruction {
    pub fn decode(ir: u8) -> Option<Instruction> {
        Opcode::from_byte(ir).map(|opcode| Instruction {
            opcode,
            operand_count: ir >> 6,
        })
    }

    /// Bytes occupied by the instruction, i.e. the default PC advance.
    pub fn size(&self) -> u8 {
        self.operand_count + 1
    }

    /// ALU-class instructions carry bit 5 in their encoding.
    pub fn is_alu(&self) -> bool {
        self.opcode.byte() & 0b0010_0000 != 0
    }
}

/// Renders the instruction at `pc` the way a listing would show it.
pub fn disassemble(mem: &Mem, pc: u8) -> String {
    let ir = mem.read(pc);
    let a = mem.read(pc.wrapping_add(1));
    let b = mem.read(pc.wrapping_add(2));
    match Instruction::decode(ir) {
        Some(inst) => match inst.opcode {
            Opcode::Ldi => format!("LDI R{},{}", a, b),
            Opcode::Hlt | Opcode::Ret => inst.opcode.to_string(),
            op if inst.operand_count == 1 => format!("{} R{}", op, a),
            op => format!("{} R{},R{}", op, a, b),
        },
        None => format!(".byte {:#04x}", ir),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn operand_count_comes_from_top_bits() {
        let cases = [
            (LDI, 2),
            (PRN, 1),
            (HLT, 0),
            (MUL, 2),
            (ADD, 2),
            (PUSH, 1),
            (POP, 1),
            (CALL, 1),
            (RET, 0),
            (CMP, 2),
        ];
        for &(byte, count) in cases.iter() {
            let inst = Instruction::decode(byte).unwrap();
            assert_eq!(inst.operand_count, count, "{}", inst.opcode);
            assert_eq!(inst.size(), count + 1);
            assert_eq!(inst.opcode.byte(), byte);
        }
    }

    #[test]
    fn alu_marker_matches_alu_ops() {
        for byte in 0..=255u8 {
            if let Some(inst) = Instruction::decode(byte) {
                assert_eq!(inst.is_alu(), inst.opcode.alu_op().is_some());
            }
        }
    }

    #[test]
    fn only_call_and_ret_set_pc() {
        let setters: Vec<Opcode> = (0..=255u8)
            .filter_map(Opcode::from_byte)
            .filter(|op| op.sets_pc())
            .collect();
        assert_eq!(setters, vec![Opcode::Ret, Opcode::Call]);
    }

    #[test]
    fn unknown_bytes_do_not_decode() {
        assert_eq!(Instruction::decode(0x00), None);
        assert_eq!(Instruction::decode(0xff), None);
        assert_eq!((0..=255u8).filter_map(Opcode::from_byte).count(), 10);
    }

    #[test]
    fn disassembles_operands() {
        let mut mem = Mem::default();
        mem.load(&[LDI, 0, 8, PRN, 0, MUL, 0, 1, HLT, 0xff]).unwrap();
        assert_eq!(disassemble(&mem, 0), "LDI R0,8");
        assert_eq!(disassemble(&mem, 3), "PRN R0");
        assert_eq!(disassemble(&mem, 5), "MUL R0,R1");
        assert_eq!(disassemble(&mem, 8), "HLT");
        assert_eq!(disassemble(&mem, 9), ".byte 0xff");
    }
}
