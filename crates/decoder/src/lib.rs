//! RISC-V base integer instruction decoder library.
//!
//! This crate decodes 32-bit RV32I instruction encodings into a structured
//! description, with the following:
//! 1. **Bits:** Bit-field extraction and two's-complement sign extension.
//! 2. **Format:** Classification of the 7-bit opcode into the R/I/S/SB/UJ families.
//! 3. **Decode:** Per-format field extraction, immediate reassembly, and
//!    mnemonic resolution from `funct3`/`funct7` sub-codes.
//! 4. **ISA tables:** Opcode and function-code constants for the recognized subset.
//!
//! Decoding is a pure function of the input word: [`decode`] never fails,
//! never blocks, and keeps no state between calls. Unrecognized opcodes and
//! unmatched `funct3`/`funct7` combinations are represented in the result
//! rather than raised as errors.

/// Bit-field extraction and sign extension over 32-bit words.
pub mod bits;
/// Decoding logic for all recognized instruction formats.
pub mod decode;
/// Instruction format classification by opcode.
pub mod format;
/// Decoded instruction structure and operation mnemonics.
pub mod instruction;
/// Opcode and function-code constants for the RV32I subset.
pub mod rv32i;

/// Main entry point; decodes a 32-bit word into a [`DecodedInstruction`].
pub use crate::decode::decode;
/// Instruction format family; classified from the 7-bit opcode.
pub use crate::format::Format;
/// Decoded output record; one variant per instruction format.
pub use crate::instruction::DecodedInstruction;
/// Operation mnemonic resolved from `funct3`/`funct7` sub-codes.
pub use crate::instruction::Operation;
