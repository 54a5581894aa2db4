//! RISC-V Base Integer (I) Opcodes.
//!
//! Defines the major opcodes (bits 6-0) for the recognized subset of the
//! base integer instruction set. The opcode alone determines the
//! instruction format: R, I, S, SB, or UJ.

/// Load instructions (LB, LH, LW, etc.) — I-type.
pub const OP_LOAD: u32 = 0b0000011;

/// Immediate arithmetic instructions (ADDI, ANDI, SLLI, etc.) — I-type.
pub const OP_IMM: u32 = 0b0010011;

/// Store instructions (SB, SH, SW) — S-type.
pub const OP_STORE: u32 = 0b0100011;

/// Register-Register arithmetic (ADD, SUB, SLL, etc.) — R-type.
pub const OP_REG: u32 = 0b0110011;

/// Conditional Branch instructions (BEQ, BNE, etc.) — SB-type.
pub const OP_BRANCH: u32 = 0b1100011;

/// Jump and Link Register (JALR) — I-type.
pub const OP_JALR: u32 = 0b1100111;

/// Jump and Link (JAL) — UJ-type.
pub const OP_JAL: u32 = 0b1101111;
