//! RISC-V Base Integer Instruction Set (RV32I) encoding tables.
//!
//! Defines the constants this decoder recognizes, organized the way the
//! encoding splits them:
//!
//! - `opcodes`: Major opcodes (bits 6-0) selecting the instruction format.
//! - `funct3`: Minor opcodes distinguishing instructions within a major opcode.
//! - `funct7`: Additional opcode bits disambiguating R-type and shift instructions.

/// Function code 3 definitions for base integer operations.
pub mod funct3;

/// Function code 7 definitions for base integer operations.
pub mod funct7;

/// Base integer instruction set opcodes.
pub mod opcodes;
