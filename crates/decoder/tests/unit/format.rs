//! # Format Classification Tests
//!
//! This module verifies the opcode-to-format mapping: each opcode in the
//! classifier table selects its format, and every other opcode classifies
//! as `Unknown` without error.

use rstest::rstest;

use rvdec_core::Format;
use rvdec_core::rv32i::opcodes;

/// Every opcode in the table classifies to its format.
#[rstest]
#[case::op_reg(opcodes::OP_REG, Format::R)]
#[case::op_imm(opcodes::OP_IMM, Format::I)]
#[case::op_load(opcodes::OP_LOAD, Format::I)]
#[case::op_jalr(opcodes::OP_JALR, Format::I)]
#[case::op_store(opcodes::OP_STORE, Format::S)]
#[case::op_branch(opcodes::OP_BRANCH, Format::Sb)]
#[case::op_jal(opcodes::OP_JAL, Format::Uj)]
fn classify_known_opcodes(#[case] opcode: u32, #[case] expected: Format) {
    assert_eq!(Format::classify(opcode), expected);
}

/// Opcodes outside the table classify as `Unknown`.
#[rstest]
#[case(0x00)]
#[case(0x77)]
#[case(0x3B)]
#[case(0x7F)]
fn classify_unknown_opcodes(#[case] opcode: u32) {
    assert_eq!(Format::classify(opcode), Format::Unknown);
}

/// Every 7-bit opcode classifies to exactly one format, and only the seven
/// table entries classify to a known one.
#[test]
fn classify_is_total_over_opcodes() {
    let known = [
        opcodes::OP_REG,
        opcodes::OP_IMM,
        opcodes::OP_LOAD,
        opcodes::OP_JALR,
        opcodes::OP_STORE,
        opcodes::OP_BRANCH,
        opcodes::OP_JAL,
    ];
    for opcode in 0..0x80 {
        let format = Format::classify(opcode);
        if known.contains(&opcode) {
            assert_ne!(format, Format::Unknown, "opcode {opcode:#x}");
        } else {
            assert_eq!(format, Format::Unknown, "opcode {opcode:#x}");
        }
    }
}

/// Format names render the conventional family labels.
#[test]
fn format_display_names() {
    assert_eq!(Format::R.to_string(), "R");
    assert_eq!(Format::I.to_string(), "I");
    assert_eq!(Format::S.to_string(), "S");
    assert_eq!(Format::Sb.to_string(), "SB");
    assert_eq!(Format::Uj.to_string(), "UJ");
    assert_eq!(Format::Unknown.to_string(), "Unknown");
}
