//! Shared test infrastructure for decoder tests.

/// Instruction encoding builders (construct raw 32-bit words).
pub mod builder;
