//! Decoded instruction structures and operation mnemonics.
//!
//! Defines the output side of the decoder: the closed set of operation
//! mnemonics this decoder resolves, and the per-format record carrying the
//! operand fields that format actually encodes. A decoded instruction is a
//! plain value owned by the caller; it has no lifecycle beyond the decode
//! call that produced it.

use std::fmt;

use serde::Serialize;

use crate::format::Format;

/// Operation mnemonics resolved from `funct3`/`funct7` sub-codes.
///
/// One variant per recognized (format, funct3\[, funct7\]) combination.
/// Combinations outside this set decode with `operation: None`; the raw
/// function codes are still reported so the caller can see exactly what
/// failed to match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    /// Register-register addition.
    Add,
    /// Register-register subtraction.
    Sub,
    /// Shift left logical.
    Sll,
    /// Set less than (signed).
    Slt,
    /// Set less than unsigned.
    Sltu,
    /// Bitwise exclusive OR.
    Xor,
    /// Shift right logical.
    Srl,
    /// Shift right arithmetic.
    Sra,
    /// Bitwise OR.
    Or,
    /// Bitwise AND.
    And,
    /// Add immediate.
    Addi,
    /// Shift left logical immediate.
    Slli,
    /// Set less than immediate (signed).
    Slti,
    /// Set less than immediate unsigned.
    Sltiu,
    /// Bitwise exclusive OR immediate.
    Xori,
    /// Bitwise OR immediate.
    Ori,
    /// Bitwise AND immediate.
    Andi,
    /// Shift right logical immediate.
    Srli,
    /// Shift right arithmetic immediate.
    Srai,
    /// Store byte.
    Sb,
    /// Store halfword.
    Sh,
    /// Store word.
    Sw,
    /// Branch if equal.
    Beq,
    /// Branch if not equal.
    Bne,
    /// Branch if less than (signed).
    Blt,
    /// Branch if greater or equal (signed).
    Bge,
    /// Jump and link.
    Jal,
}

impl Operation {
    /// Returns the assembly mnemonic for this operation.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Sub => "sub",
            Self::Sll => "sll",
            Self::Slt => "slt",
            Self::Sltu => "sltu",
            Self::Xor => "xor",
            Self::Srl => "srl",
            Self::Sra => "sra",
            Self::Or => "or",
            Self::And => "and",
            Self::Addi => "addi",
            Self::Slli => "slli",
            Self::Slti => "slti",
            Self::Sltiu => "sltiu",
            Self::Xori => "xori",
            Self::Ori => "ori",
            Self::Andi => "andi",
            Self::Srli => "srli",
            Self::Srai => "srai",
            Self::Sb => "sb",
            Self::Sh => "sh",
            Self::Sw => "sw",
            Self::Beq => "beq",
            Self::Bne => "bne",
            Self::Blt => "blt",
            Self::Bge => "bge",
            Self::Jal => "jal",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mnemonic())
    }
}

/// A decoded instruction: one variant per format, carrying exactly the
/// operand fields that format encodes.
///
/// Every 32-bit word decodes to exactly one variant. `Unknown` carries the
/// raw opcode for diagnostics; the other variants carry `operation: None`
/// when the opcode was recognized but the function codes matched no entry
/// in that format's table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "format")]
pub enum DecodedInstruction {
    /// Register-register instruction (opcode 0x33).
    R {
        /// Resolved operation, if the (funct3, funct7) pair matched.
        operation: Option<Operation>,
        /// Destination register index.
        rd: u32,
        /// First source register index.
        rs1: u32,
        /// Second source register index.
        rs2: u32,
        /// Raw funct3 field, reported even when the operation matched.
        funct3: u32,
        /// Raw funct7 field, reported even when the operation matched.
        funct7: u32,
    },

    /// Immediate instruction (opcodes 0x13, 0x03, 0x67).
    I {
        /// Resolved operation, if funct3 (and funct7 for shifts) matched.
        operation: Option<Operation>,
        /// Destination register index.
        rd: u32,
        /// First source register index.
        rs1: u32,
        /// Sign-extended 12-bit immediate.
        ///
        /// Shift instructions report the full sign-extended field here, not
        /// the 5-bit shift amount.
        imm: i32,
    },

    /// Store instruction (opcode 0x23).
    S {
        /// Resolved operation, if funct3 matched.
        operation: Option<Operation>,
        /// Base address register index.
        rs1: u32,
        /// Source data register index.
        rs2: u32,
        /// Sign-extended 12-bit immediate, reassembled from its split fields.
        imm: i32,
    },

    /// Conditional branch instruction (opcode 0x63).
    #[serde(rename = "SB")]
    Sb {
        /// Resolved operation, if funct3 matched.
        operation: Option<Operation>,
        /// First comparison register index.
        rs1: u32,
        /// Second comparison register index.
        rs2: u32,
        /// Sign-extended 13-bit branch offset; bit 0 is always zero.
        imm: i32,
    },

    /// Unconditional jump instruction (opcode 0x6F).
    #[serde(rename = "UJ")]
    Uj {
        /// Resolved operation; always JAL for this opcode.
        operation: Operation,
        /// Destination (link) register index.
        rd: u32,
        /// Sign-extended 21-bit jump offset; bit 0 is always zero.
        imm: i32,
    },

    /// Opcode outside the classifier table.
    ///
    /// A terminal classification, not an error: no operand extraction is
    /// attempted, and the raw opcode is carried for diagnostic display.
    Unknown {
        /// The unrecognized 7-bit opcode.
        opcode: u32,
    },
}

impl DecodedInstruction {
    /// Returns the format family this instruction decoded as.
    pub const fn format(&self) -> Format {
        match self {
            Self::R { .. } => Format::R,
            Self::I { .. } => Format::I,
            Self::S { .. } => Format::S,
            Self::Sb { .. } => Format::Sb,
            Self::Uj { .. } => Format::Uj,
            Self::Unknown { .. } => Format::Unknown,
        }
    }

    /// Returns the resolved operation, if any.
    ///
    /// `None` for `Unknown` words and for recognized formats whose
    /// function codes matched no table entry.
    pub const fn operation(&self) -> Option<Operation> {
        match self {
            Self::R { operation, .. }
            | Self::I { operation, .. }
            | Self::S { operation, .. }
            | Self::Sb { operation, .. } => *operation,
            Self::Uj { operation, .. } => Some(*operation),
            Self::Unknown { .. } => None,
        }
    }
}
