//! # Decoder Unit Tests
//!
//! This module contains unit tests for the decode engine. It covers bit
//! extraction, sign extension, opcode classification, per-format decoding,
//! and properties that must hold for every 32-bit input.



/// Opcode-to-format classification tests.
pub mod format;

/// Property-based tests over all 32-bit inputs.
pub mod properties;
