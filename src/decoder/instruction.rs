//! The decoded `Instruction` record (§3 of the spec).

use std::fmt;

use super::{mnemonic::Mnemonic, operand::Operand};

/// One fully decoded instruction.
///
/// `operand_right` is `None` for the unary jump/loop mnemonics.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Instruction {
    pub operator: Mnemonic,
    pub operand_left: Operand,
    pub operand_right: Option<Operand>,
    /// 0 for 8-bit operands, 1 for 16-bit. Always 0 for jumps/loops.
    pub w: u8,
    /// Total encoded length in bytes.
    pub size: u8,
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.operand_right {
            Some(right) => write!(f, "{} {}, {}", self.operator, self.operand_left, right),
            None => write!(f, "{} {}", self.operator, self.operand_left),
        }
    }
}
