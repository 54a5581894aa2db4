//! Bit-field extraction and sign extension.
//!
//! Provides the two primitives every format decoder is built from: extracting
//! a contiguous, right-aligned bit range from a 32-bit word, and widening a
//! narrow field to a full signed integer with exact two's-complement
//! semantics. Both are pure functions with no state.

/// Total width of a RISC-V instruction in bits.
pub const WORD_WIDTH: u32 = 32;

/// Extracts bits `[start, start + length)` of `word`, right-aligned.
///
/// All bits above the extracted range are zero in the result, so the return
/// value is always strictly less than `2^length`.
///
/// # Panics
///
/// Panics if `length` is zero or `start + length` exceeds 32. Violating the
/// bounds is a bug in the caller (a format decoder asking for a field that
/// does not exist), not a property of the input word, so it fails fast
/// instead of silently wrapping.
#[inline]
pub const fn extract(word: u32, start: u32, length: u32) -> u32 {
    assert!(
        length >= 1 && start + length <= WORD_WIDTH,
        "field bounds must satisfy 1 <= length and start + length <= 32"
    );
    let aligned = word >> start;
    if length == WORD_WIDTH {
        aligned
    } else {
        aligned & ((1 << length) - 1)
    }
}

/// Sign extends a `bit_width`-wide field to a 32-bit signed integer.
///
/// Bit `bit_width - 1` of `value` is the sign bit of the field. If it is set,
/// it is replicated into all higher bits of the result; otherwise `value` is
/// returned unchanged. Implemented as a shift-left / arithmetic-shift-right
/// pair, which gives exact two's-complement semantics: a field with its sign
/// bit set decodes to `value - 2^bit_width`.
///
/// # Panics
///
/// Panics if `bit_width` is zero or exceeds 32.
#[inline]
pub const fn sign_extend(value: u32, bit_width: u32) -> i32 {
    assert!(
        bit_width >= 1 && bit_width <= WORD_WIDTH,
        "bit_width must be in 1..=32"
    );
    let shift = WORD_WIDTH - bit_width;
    ((value as i32) << shift) >> shift
}

/// Trait for extracting the standard instruction fields from an encoded word.
///
/// The field positions are fixed across all formats that carry them, so the
/// accessors live on the raw word rather than on any decoded structure.
pub trait InstructionBits {
    /// Extracts the opcode field (bits 0-6).
    ///
    /// The opcode determines the instruction format and drives all
    /// subsequent field extraction.
    fn opcode(&self) -> u32;

    /// Extracts the destination register field (bits 7-11).
    ///
    /// Returns the 5-bit register index (0-31).
    fn rd(&self) -> u32;

    /// Extracts the first source register field (bits 15-19).
    ///
    /// Returns the 5-bit register index (0-31).
    fn rs1(&self) -> u32;

    /// Extracts the second source register field (bits 20-24).
    ///
    /// Returns the 5-bit register index (0-31).
    fn rs2(&self) -> u32;

    /// Extracts the funct3 field (bits 12-14).
    ///
    /// Used to distinguish between operations sharing the same opcode.
    fn funct3(&self) -> u32;

    /// Extracts the funct7 field (bits 25-31).
    ///
    /// Used to distinguish between standard and alternate encodings
    /// (e.g. ADD vs SUB, SRL vs SRA).
    fn funct7(&self) -> u32;
}

impl InstructionBits for u32 {
    #[inline]
    fn opcode(&self) -> u32 {
        extract(*self, 0, 7)
    }

    #[inline]
    fn rd(&self) -> u32 {
        extract(*self, 7, 5)
    }

    #[inline]
    fn rs1(&self) -> u32 {
        extract(*self, 15, 5)
    }

    #[inline]
    fn rs2(&self) -> u32 {
        extract(*self, 20, 5)
    }

    #[inline]
    fn funct3(&self) -> u32 {
        extract(*self, 12, 3)
    }

    #[inline]
    fn funct7(&self) -> u32 {
        extract(*self, 25, 7)
    }
}
