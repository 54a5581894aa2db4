//! Instruction format classification.
//!
//! The 7-bit opcode (bits 0-6) alone determines which of the five base
//! instruction formats a word uses. Classification is a closed mapping:
//! any opcode outside the table is `Unknown`, which is a valid terminal
//! result rather than an error.

use std::fmt;

use serde::Serialize;

use crate::rv32i::opcodes;

/// The five base instruction format families, plus `Unknown`.
///
/// Each format has a distinct operand field layout; the format is decided
/// solely by the opcode, before any other field is extracted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Format {
    /// Register-register format (rd, rs1, rs2, funct3, funct7).
    R,
    /// Immediate format (rd, rs1, 12-bit immediate).
    I,
    /// Store format (rs1, rs2, split 12-bit immediate).
    S,
    /// Branch format (rs1, rs2, split 13-bit immediate).
    #[serde(rename = "SB")]
    Sb,
    /// Jump format (rd, split 21-bit immediate).
    #[serde(rename = "UJ")]
    Uj,
    /// Opcode not in the classifier table.
    Unknown,
}

impl Format {
    /// Classifies a 7-bit opcode into its instruction format.
    ///
    /// The mapping is exact and closed: 0x33 is R; 0x13, 0x03, and 0x67 are
    /// I; 0x23 is S; 0x63 is SB; 0x6F is UJ; everything else is `Unknown`.
    pub const fn classify(opcode: u32) -> Self {
        match opcode {
            opcodes::OP_REG => Self::R,
            opcodes::OP_IMM | opcodes::OP_LOAD | opcodes::OP_JALR => Self::I,
            opcodes::OP_STORE => Self::S,
            opcodes::OP_BRANCH => Self::Sb,
            opcodes::OP_JAL => Self::Uj,
            _ => Self::Unknown,
        }
    }

    /// Returns the conventional name of this format.
    pub const fn name(self) -> &'static str {
        match self {
            Self::R => "R",
            Self::I => "I",
            Self::S => "S",
            Self::Sb => "SB",
            Self::Uj => "UJ",
            Self::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
