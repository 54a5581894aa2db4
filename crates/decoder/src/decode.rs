//! RISC-V Instruction Decoder.
//!
//! This module turns a raw 32-bit instruction encoding into a structured
//! [`DecodedInstruction`]. It classifies the word by opcode, extracts the
//! operand fields that format carries, reassembles split immediates with
//! sign extension, and resolves the operation mnemonic from the
//! `funct3`/`funct7` function codes.
//!
//! Decoding is total: every 32-bit word maps to exactly one result, with
//! unrecognized opcodes and unmatched function codes represented in the
//! output rather than raised as errors.

use tracing::trace;

use crate::bits::{InstructionBits, extract, sign_extend};
use crate::format::Format;
use crate::instruction::{DecodedInstruction, Operation};
use crate::rv32i::{funct3, funct7};

/// Total number of bits in the I-type immediate (bits 20-31, sign-extended).
const I_IMM_BITS: u32 = 12;

/// Total number of bits in the S-type immediate (split, sign-extended).
const S_IMM_BITS: u32 = 12;

/// Bit position of the high immediate piece in the reassembled S-type immediate.
const S_IMM_HIGH_POS: u32 = 5;

/// Total number of bits in the SB-type immediate (13 bits, sign-extended).
///
/// SB-type format: `imm[12] | imm[10:5] | rs2 | rs1 | funct3 | imm[4:1] | imm[11] | opcode`
/// Bit 0 of the reassembled immediate is always zero: branch targets are
/// 2-byte aligned.
const SB_IMM_BITS: u32 = 13;

/// Bit position of bit 12 in the reassembled SB-type immediate.
const SB_IMM_12_POS: u32 = 12;
/// Bit position of bit 11 in the reassembled SB-type immediate.
const SB_IMM_11_POS: u32 = 11;
/// Bit position of bits 10-5 in the reassembled SB-type immediate.
const SB_IMM_10_5_POS: u32 = 5;
/// Bit position of bits 4-1 in the reassembled SB-type immediate.
const SB_IMM_4_1_POS: u32 = 1;

/// Total number of bits in the UJ-type immediate (21 bits, sign-extended).
///
/// UJ-type format: `imm[20] | imm[10:1] | imm[11] | imm[19:12] | rd | opcode`
/// Bit 0 of the reassembled immediate is always zero.
const UJ_IMM_BITS: u32 = 21;

/// Bit position of bit 20 in the reassembled UJ-type immediate.
const UJ_IMM_20_POS: u32 = 20;
/// Bit position of bits 19-12 in the reassembled UJ-type immediate.
const UJ_IMM_19_12_POS: u32 = 12;
/// Bit position of bit 11 in the reassembled UJ-type immediate.
const UJ_IMM_11_POS: u32 = 11;
/// Bit position of bits 10-1 in the reassembled UJ-type immediate.
const UJ_IMM_10_1_POS: u32 = 1;

/// Decodes a 32-bit RISC-V instruction into its structured form.
///
/// Classifies the word by its 7-bit opcode and dispatches to the decoder
/// for that format. Words whose opcode is outside the classifier table
/// decode to [`DecodedInstruction::Unknown`] carrying the raw opcode; no
/// operand extraction is attempted for them.
///
/// This function is a pure function of `inst`: it never fails, keeps no
/// state between calls, and is safe to call concurrently.
pub fn decode(inst: u32) -> DecodedInstruction {
    let opcode = inst.opcode();

    match Format::classify(opcode) {
        Format::R => decode_r_type(inst),
        Format::I => decode_i_type(inst),
        Format::S => decode_s_type(inst),
        Format::Sb => decode_sb_type(inst),
        Format::Uj => decode_uj_type(inst),
        Format::Unknown => {
            trace!(opcode, "unrecognized opcode");
            DecodedInstruction::Unknown { opcode }
        }
    }
}

/// Decodes an R-type (register-register) instruction.
///
/// All raw fields are reported regardless of whether the operation matched,
/// so unmatched function codes remain diagnosable.
fn decode_r_type(inst: u32) -> DecodedInstruction {
    let funct3 = inst.funct3();
    let funct7 = inst.funct7();

    DecodedInstruction::R {
        operation: r_type_operation(funct3, funct7),
        rd: inst.rd(),
        rs1: inst.rs1(),
        rs2: inst.rs2(),
        funct3,
        funct7,
    }
}

/// Decodes an I-type (immediate) instruction.
///
/// The immediate occupies bits 20-31 and is sign-extended from 12 bits.
/// Shift instructions report the full sign-extended field as their
/// immediate, not the 5-bit shift amount.
fn decode_i_type(inst: u32) -> DecodedInstruction {
    let imm = extract(inst, 20, 12);

    DecodedInstruction::I {
        operation: i_type_operation(inst),
        rd: inst.rd(),
        rs1: inst.rs1(),
        imm: sign_extend(imm, I_IMM_BITS),
    }
}

/// Decodes an S-type (store) instruction.
///
/// The 12-bit immediate is split across bits 7-11 (low) and 25-31 (high)
/// and reassembled before sign extension.
fn decode_s_type(inst: u32) -> DecodedInstruction {
    let imm_low = extract(inst, 7, 5);
    let imm_high = extract(inst, 25, 7);
    let imm = (imm_high << S_IMM_HIGH_POS) | imm_low;

    DecodedInstruction::S {
        operation: s_type_operation(inst.funct3()),
        rs1: inst.rs1(),
        rs2: inst.rs2(),
        imm: sign_extend(imm, S_IMM_BITS),
    }
}

/// Decodes an SB-type (conditional branch) instruction.
///
/// The 13-bit immediate is scattered across four fields of the encoding;
/// bit 0 is never encoded and is always zero in the result.
fn decode_sb_type(inst: u32) -> DecodedInstruction {
    let imm_11 = extract(inst, 7, 1);
    let imm_4_1 = extract(inst, 8, 4);
    let imm_10_5 = extract(inst, 25, 6);
    let imm_12 = extract(inst, 31, 1);

    let imm = (imm_12 << SB_IMM_12_POS)
        | (imm_11 << SB_IMM_11_POS)
        | (imm_10_5 << SB_IMM_10_5_POS)
        | (imm_4_1 << SB_IMM_4_1_POS);

    DecodedInstruction::Sb {
        operation: sb_type_operation(inst.funct3()),
        rs1: inst.rs1(),
        rs2: inst.rs2(),
        imm: sign_extend(imm, SB_IMM_BITS),
    }
}

/// Decodes a UJ-type (unconditional jump) instruction.
///
/// Opcode 0x6F has a single operation, JAL. The 21-bit immediate is
/// scattered across four fields; bit 0 is always zero.
fn decode_uj_type(inst: u32) -> DecodedInstruction {
    let imm_19_12 = extract(inst, 12, 8);
    let imm_11 = extract(inst, 20, 1);
    let imm_10_1 = extract(inst, 21, 10);
    let imm_20 = extract(inst, 31, 1);

    let imm = (imm_20 << UJ_IMM_20_POS)
        | (imm_19_12 << UJ_IMM_19_12_POS)
        | (imm_11 << UJ_IMM_11_POS)
        | (imm_10_1 << UJ_IMM_10_1_POS);

    DecodedInstruction::Uj {
        operation: Operation::Jal,
        rd: inst.rd(),
        imm: sign_extend(imm, UJ_IMM_BITS),
    }
}

/// Resolves an R-type operation from its (funct3, funct7) pair.
///
/// The table is exact and closed; any pair outside it yields `None`.
const fn r_type_operation(f3: u32, f7: u32) -> Option<Operation> {
    match (f3, f7) {
        (funct3::ADD_SUB, funct7::DEFAULT) => Some(Operation::Add),
        (funct3::ADD_SUB, funct7::SUB) => Some(Operation::Sub),
        (funct3::SLL, funct7::DEFAULT) => Some(Operation::Sll),
        (funct3::SLT, funct7::DEFAULT) => Some(Operation::Slt),
        (funct3::SLTU, funct7::DEFAULT) => Some(Operation::Sltu),
        (funct3::XOR, funct7::DEFAULT) => Some(Operation::Xor),
        (funct3::SRL_SRA, funct7::DEFAULT) => Some(Operation::Srl),
        (funct3::SRL_SRA, funct7::SRA) => Some(Operation::Sra),
        (funct3::OR, funct7::DEFAULT) => Some(Operation::Or),
        (funct3::AND, funct7::DEFAULT) => Some(Operation::And),
        _ => None,
    }
}

/// Resolves an I-type operation from funct3.
///
/// funct3 5 is ambiguous between SRLI and SRAI and is disambiguated by
/// funct7: zero selects SRLI, and every nonzero value selects SRAI. The
/// nonzero rule is deliberately that broad; it is not restricted to 0x20.
fn i_type_operation(inst: u32) -> Option<Operation> {
    match inst.funct3() {
        funct3::ADD_SUB => Some(Operation::Addi),
        funct3::SLL => Some(Operation::Slli),
        funct3::SLT => Some(Operation::Slti),
        funct3::SLTU => Some(Operation::Sltiu),
        funct3::XOR => Some(Operation::Xori),
        funct3::SRL_SRA => {
            if inst.funct7() == funct7::DEFAULT {
                Some(Operation::Srli)
            } else {
                Some(Operation::Srai)
            }
        }
        funct3::OR => Some(Operation::Ori),
        funct3::AND => Some(Operation::Andi),
        _ => None,
    }
}

/// Resolves an S-type operation from funct3.
const fn s_type_operation(f3: u32) -> Option<Operation> {
    match f3 {
        funct3::SB => Some(Operation::Sb),
        funct3::SH => Some(Operation::Sh),
        funct3::SW => Some(Operation::Sw),
        _ => None,
    }
}

/// Resolves an SB-type operation from funct3.
///
/// Only the signed comparisons are in the table; the unsigned variants
/// (funct3 6 and 7) and funct3 2/3 resolve to `None`.
const fn sb_type_operation(f3: u32) -> Option<Operation> {
    match f3 {
        funct3::BEQ => Some(Operation::Beq),
        funct3::BNE => Some(Operation::Bne),
        funct3::BLT => Some(Operation::Blt),
        funct3::BGE => Some(Operation::Bge),
        _ => None,
    }
}
