use crate::alu::Flags;
use crate::error::{Error, Result};
use crate::inst::{disassemble, Instruction, Opcode};
use crate::mem::Mem;
use log::{debug, trace};
use std::io::Write;

pub const NUM_REGS: usize = 8;
/// Register holding the stack pointer.
pub const SP: usize = 7;
/// SP value for an empty stack.
pub const STACK_TOP: u8 = 0xF4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    Running,
    Halted,
}

pub struct Core {
    pub mem: Mem,
    pub reg: [u8; NUM_REGS],
    pub pc: u8,
    pub flags: Flags,
    pub state: State,
    pub cycle_count: usize,
}

impl Default for Core {
    fn default() -> Self {
        Self::new()
    }
}

impl Core {
    pub fn new() -> Core {
        let mut core = Core {
            mem: Default::default(),
            reg: [0; NUM_REGS],
            pc: 0,
            flags: Flags::default(),
            state: State::Running,
            cycle_count: 0,
        };
        core.init();
        core
    }

    pub fn init(&mut self) {
        self.mem.clear();
        self.reg = [0; NUM_REGS];
        self.reg[SP] = STACK_TOP;
        self.pc = 0;
        self.flags.clear();
        self.state = State::Running;
        self.cycle_count = 0;
    }

    pub fn load(&mut self, program: &[u8]) -> Result<()> {
        self.mem.load(program)?;
        debug!("loaded {} bytes", program.len());
        Ok(())
    }

    /// Runs until HLT. Output of PRN goes to `out`.
    pub fn run<W: Write>(&mut self, out: &mut W) -> Result<()> {
        while self.state == State::Running {
            self.step(out)?;
        }
        Ok(())
    }

    pub fn step<W: Write>(&mut self, out: &mut W) -> Result<State> {
        if self.state == State::Halted {
            return Ok(State::Halted);
        }

        let pc = self.pc;
        let ir = self.mem.read(pc);
        let operand_a = self.mem.read(pc.wrapping_add(1));
        let operand_b = self.mem.read(pc.wrapping_add(2));

        trace!(
            "{:02X} | IR: {:02X} operandA: {:02X} operandB: {:02X} | {}",
            pc,
            ir,
            operand_a,
            operand_b,
            disassemble(&self.mem, pc)
        );

        let inst = match Instruction::decode(ir) {
            Some(inst) => inst,
            None => return Err(Error::UnknownInstruction { opcode: ir, pc }),
        };

        match inst.opcode {
            _ if inst.is_alu() => {
                let a = self.reg_index(operand_a)?;
                let b = self.reg_index(operand_b)?;
                match inst.opcode.alu_op() {
                    Some(op) => op.apply(&mut self.reg, a, b, &mut self.flags),
                    None => unreachable!("{} carries the ALU marker", inst.opcode),
                }
            }
            Opcode::Add | Opcode::Mul | Opcode::Cmp => {
                unreachable!("{} is missing the ALU marker", inst.opcode)
            }
            Opcode::Ldi => {
                let a = self.reg_index(operand_a)?;
                self.reg[a] = operand_b;
            }
            Opcode::Prn => {
                let a = self.reg_index(operand_a)?;
                writeln!(out, "{}", self.reg[a])?;
            }
            Opcode::Push => {
                let a = self.reg_index(operand_a)?;
                self.push(self.reg[a]);
            }
            Opcode::Pop => {
                let a = self.reg_index(operand_a)?;
                self.reg[a] = self.pop();
            }
            Opcode::Call => {
                let a = self.reg_index(operand_a)?;
                self.push(pc.wrapping_add(2));
                self.pc = self.reg[a];
            }
            Opcode::Ret => {
                self.pc = self.pop();
            }
            Opcode::Hlt => {
                self.state = State::Halted;
                debug!("halted at {:02x} after {} cycles", pc, self.cycle_count + 1);
            }
        }

        if !inst.opcode.sets_pc() {
            self.pc = self.pc.wrapping_add(inst.size());
        }

        self.cycle_count += 1;
        Ok(self.state)
    }

    fn push(&mut self, val: u8) {
        self.reg[SP] = self.reg[SP].wrapping_sub(1);
        self.mem.write(self.reg[SP], val);
    }

    fn pop(&mut self) -> u8 {
        let val = self.mem.read(self.reg[SP]);
        self.reg[SP] = self.reg[SP].wrapping_add(1);
        val
    }

    fn reg_index(&self, operand: u8) -> Result<usize> {
        if (operand as usize) < NUM_REGS {
            Ok(operand as usize)
        } else {
            Err(Error::BadRegister {
                index: operand,
                pc: self.pc,
            })
        }
    }

    pub fn dump<W: Write>(&self, w: &mut W) -> Result<()> {
        writeln!(w, "Cycle count: {}", self.cycle_count)?;
        writeln!(w, "PC: {:02x}  FL: {:08b}", self.pc, self.flags.bits())?;
        writeln!(w, "Register state:")?;
        for (i, &val) in self.reg.iter().enumerate() {
            writeln!(w, " R{}: {:02x} ({})", i, val, val)?;
        }
        Ok(())
    }
}
