//! Property-based tests for the decode engine.
//!
//! These tests verify invariants that must hold for all 32-bit inputs:
//! - Decoding never panics and always yields exactly one format
//! - Deterministic decoding (same input → same output)
//! - Extraction results fit their field width
//! - Sign extension has exact two's-complement semantics
//! - Reassembled branch and jump immediates keep their alignment

use proptest::prelude::*;

use rvdec_core::bits::{extract, sign_extend};
use rvdec_core::{DecodedInstruction, Format, decode};

proptest! {
    /// Decoding arbitrary words never panics, and the result's format is
    /// one of the six classifications.
    #[test]
    fn decode_is_total(word in any::<u32>()) {
        let decoded = decode(word);
        let format = decoded.format();
        prop_assert!(matches!(
            format,
            Format::R | Format::I | Format::S | Format::Sb | Format::Uj | Format::Unknown
        ));
    }

    /// Decoding is deterministic: the same word always produces the same
    /// result, with no state carried between calls.
    #[test]
    fn decode_is_deterministic(word in any::<u32>()) {
        prop_assert_eq!(decode(word), decode(word));
    }

    /// An extracted field always fits in its length: the result is
    /// strictly less than 2^length.
    #[test]
    fn extract_fits_field_width(word in any::<u32>(), start in 0u32..32, length in 1u32..32) {
        prop_assume!(start + length <= 32);
        let field = extract(word, start, length);
        prop_assert!(u64::from(field) < (1u64 << length));
    }

    /// The extracted field equals the integer formed by bits
    /// start..start+length of the word.
    #[test]
    fn extract_matches_bit_arithmetic(word in any::<u32>(), start in 0u32..32, length in 1u32..=32) {
        prop_assume!(start + length <= 32);
        let field = extract(word, start, length);
        let expected = (u64::from(word) >> start) & ((1u64 << length) - 1);
        prop_assert_eq!(u64::from(field), expected);
    }

    /// Sign extension matches the arithmetic definition: values with the
    /// field's sign bit clear are unchanged, values with it set come back
    /// as value - 2^width.
    #[test]
    fn sign_extend_twos_complement(value in any::<u32>(), width in 1u32..=31) {
        let field = value & ((1 << width) - 1);
        let extended = i64::from(sign_extend(field, width));
        let expected = if field >> (width - 1) == 0 {
            i64::from(field)
        } else {
            i64::from(field) - (1i64 << width)
        };
        prop_assert_eq!(extended, expected);
    }

    /// Branch and jump immediates are always even: bit 0 is never encoded
    /// and reassembly leaves it zero.
    #[test]
    fn branch_and_jump_immediates_are_even(word in any::<u32>()) {
        match decode(word) {
            DecodedInstruction::Sb { imm, .. } | DecodedInstruction::Uj { imm, .. } => {
                prop_assert_eq!(imm % 2, 0);
            }
            _ => {}
        }
    }

    /// The decoded format agrees with classifying the word's opcode
    /// directly.
    #[test]
    fn format_matches_opcode_classification(word in any::<u32>()) {
        prop_assert_eq!(decode(word).format(), Format::classify(word & 0x7F));
    }

    /// Unknown results carry exactly the low seven bits of the word.
    #[test]
    fn unknown_carries_opcode(word in any::<u32>()) {
        if let DecodedInstruction::Unknown { opcode } = decode(word) {
            prop_assert_eq!(opcode, word & 0x7F);
        }
    }
}
