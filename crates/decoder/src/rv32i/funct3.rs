//! RISC-V Base Integer (I) Function Codes (funct3).
//!
//! The `funct3` field (bits 14-12) distinguishes between instructions sharing
//! the same major opcode (e.g. SB vs SH, BEQ vs BNE, ADD vs SLT).

/// Add / Subtract (register) or Add Immediate.
pub const ADD_SUB: u32 = 0b000;
/// Shift Left Logical (register or immediate).
pub const SLL: u32 = 0b001;
/// Set Less Than (signed, register or immediate).
pub const SLT: u32 = 0b010;
/// Set Less Than Unsigned (register or immediate).
pub const SLTU: u32 = 0b011;
/// Bitwise XOR (register or immediate).
pub const XOR: u32 = 0b100;
/// Shift Right Logical / Arithmetic (register or immediate).
pub const SRL_SRA: u32 = 0b101;
/// Bitwise OR (register or immediate).
pub const OR: u32 = 0b110;
/// Bitwise AND (register or immediate).
pub const AND: u32 = 0b111;

/// Store Byte.
pub const SB: u32 = 0b000;
/// Store Halfword.
pub const SH: u32 = 0b001;
/// Store Word.
pub const SW: u32 = 0b010;

/// Branch Equal.
pub const BEQ: u32 = 0b000;
/// Branch Not Equal.
pub const BNE: u32 = 0b001;
/// Branch Less Than (signed).
pub const BLT: u32 = 0b100;
/// Branch Greater or Equal (signed).
pub const BGE: u32 = 0b101;
