use crate::core::NUM_REGS;
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AluOp {
    Add,
    Mul,
    Cmp,
}

/// Condition codes written by `Cmp`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Flags {
    pub equal: bool,
    pub less: bool,
    pub greater: bool,
}

impl Flags {
    /// Packs the flags as `00000LGE`.
    pub fn bits(&self) -> u8 {
        ((self.less as u8) << 2) | ((self.greater as u8) << 1) | (self.equal as u8)
    }

    pub fn clear(&mut self) {
        *self = Flags::default();
    }
}

impl AluOp {
    /// Applies the operation to registers `a` and `b`. Both indices must
    /// already be known to be in range.
    pub fn apply(self, reg: &mut [u8; NUM_REGS], a: usize, b: usize, flags: &mut Flags) {
        let rhs = reg[b];
        match self {
            AluOp::Add => reg[a] = reg[a].wrapping_add(rhs),
            AluOp::Mul => reg[a] = reg[a].wrapping_mul(rhs),
            AluOp::Cmp => {
                flags.clear();
                match reg[a].cmp(&rhs) {
                    Ordering::Equal => flags.equal = true,
                    Ordering::Less => flags.less = true,
                    Ordering::Greater => flags.greater = true,
                }
            }
        }
    }
}
