//! RISC-V instruction decoder CLI.
//!
//! This binary is the interactive front end for the `rvdec-core` decode
//! engine. It performs:
//! 1. **Input:** Reads 32-character binary literals, one instruction per line,
//!    from stdin (interactive loop) or from command-line arguments.
//! 2. **Parsing:** Converts each literal to a 32-bit word, most-significant
//!    bit first (character 0 is bit 31). Malformed lines are reported to
//!    stderr and skipped; the loop continues.
//! 3. **Display:** Prints one line per field of the resolved format, with a
//!    blank line between results, or one JSON object per line with `--json`.

use std::io::{self, BufRead};

use clap::Parser;
use thiserror::Error;
use tracing_subscriber::EnvFilter;

use rvdec_core::{DecodedInstruction, decode};

/// Number of binary digits in an encoded instruction literal.
const WORD_BITS: usize = 32;

#[derive(Parser, Debug)]
#[command(
    name = "rvdec",
    author,
    version,
    about = "RISC-V base integer instruction decoder",
    long_about = "Decode 32-bit RISC-V base integer instructions given as 32-character binary literals.\n\nWith no arguments, reads one instruction per line from stdin until end-of-input.\n\nExamples:\n  rvdec 00000000110001011000010100110011\n  echo 11111111111100000000000010010011 | rvdec --json"
)]
struct Cli {
    /// Instructions as 32-character binary literals; reads stdin when absent.
    words: Vec<String>,

    /// Emit each decoded instruction as a single JSON object per line.
    #[arg(long)]
    json: bool,
}

/// Errors produced while parsing a binary instruction literal.
///
/// These are input errors, never fatal: the caller reports them and moves
/// on to the next line.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
enum ParseError {
    /// The literal did not contain exactly 32 digits.
    #[error("expected 32 binary digits, found {0}")]
    BadLength(usize),

    /// The literal contained a character other than '0' or '1'.
    #[error("invalid character {found:?} at index {index}; expected '0' or '1'")]
    BadCharacter {
        /// Zero-based index of the offending character.
        index: usize,
        /// The character found there.
        found: char,
    },
}

/// Parses a 32-character binary literal into an instruction word.
///
/// The literal is read most-significant bit first: the character at index 0
/// becomes bit 31 of the word. Surrounding whitespace is ignored.
fn parse_word(line: &str) -> Result<u32, ParseError> {
    let digits = line.trim();
    let count = digits.chars().count();
    if count != WORD_BITS {
        return Err(ParseError::BadLength(count));
    }

    let mut word: u32 = 0;
    for (index, found) in digits.chars().enumerate() {
        let bit = match found {
            '0' => 0,
            '1' => 1,
            _ => return Err(ParseError::BadCharacter { index, found }),
        };
        word = (word << 1) | bit;
    }
    Ok(word)
}

/// Renders a decoded instruction as the field-per-line text block.
///
/// Each format prints its own field set: the format name, the operation when
/// one matched, then registers and function codes or the immediate. Store
/// and immediate formats also show the immediate's raw encoding in hex;
/// unknown opcodes print a single diagnostic line carrying the opcode.
fn render(decoded: &DecodedInstruction) -> Vec<String> {
    let mut lines = Vec::new();

    if let DecodedInstruction::Unknown { opcode } = decoded {
        lines.push(format!("Unknown instruction type (opcode={opcode:#x})"));
        return lines;
    }

    lines.push(format!("Instruction Type: {}", decoded.format()));
    if let Some(operation) = decoded.operation() {
        lines.push(format!("Operation: {operation}"));
    }

    match *decoded {
        DecodedInstruction::R {
            rd,
            rs1,
            rs2,
            funct3,
            funct7,
            ..
        } => {
            lines.push(format!("Rs1: x{rs1}"));
            lines.push(format!("Rs2: x{rs2}"));
            lines.push(format!("Rd: x{rd}"));
            lines.push(format!("Funct3: {funct3}"));
            lines.push(format!("Funct7: {funct7}"));
        }
        DecodedInstruction::I { rd, rs1, imm, .. } => {
            lines.push(format!("Rs1: x{rs1}"));
            lines.push(format!("Rd: x{rd}"));
            lines.push(format!("Immediate: {imm} (or 0x{:X})", imm & 0xFFF));
        }
        DecodedInstruction::S { rs1, rs2, imm, .. } => {
            lines.push(format!("Rs1: x{rs1}"));
            lines.push(format!("Rs2: x{rs2}"));
            lines.push(format!("Immediate: {imm} (or 0x{:X})", imm & 0xFFF));
        }
        DecodedInstruction::Sb { rs1, rs2, imm, .. } => {
            lines.push(format!("Rs1: x{rs1}"));
            lines.push(format!("Rs2: x{rs2}"));
            lines.push(format!("Immediate: {imm}"));
        }
        DecodedInstruction::Uj { rd, imm, .. } => {
            lines.push(format!("Rd: x{rd}"));
            lines.push(format!("Immediate: {imm} (or 0x{:X})", imm & 0xFFFFF));
        }
        DecodedInstruction::Unknown { .. } => {}
    }

    lines
}

/// Parses, decodes, and prints one instruction literal.
///
/// Parse failures go to stderr; the caller decides whether to continue.
fn run_word(input: &str, json: bool) {
    match parse_word(input) {
        Ok(word) => {
            let decoded = decode(word);
            if json {
                match serde_json::to_string(&decoded) {
                    Ok(line) => println!("{line}"),
                    Err(err) => eprintln!("error: failed to serialize result: {err}"),
                }
            } else {
                for line in render(&decoded) {
                    println!("{line}");
                }
                println!();
            }
        }
        Err(err) => eprintln!("error: {err}"),
    }
}

/// Reads instruction literals from stdin until end-of-input.
///
/// Blank lines are skipped; malformed lines are reported and skipped. The
/// prompt is suppressed in JSON mode to keep the output stream clean.
fn run_interactive(json: bool) {
    let stdin = io::stdin();
    if !json {
        println!("Enter an instruction:");
    }

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(err) => {
                eprintln!("error: failed to read input: {err}");
                break;
            }
        };

        if line.trim().is_empty() {
            continue;
        }
        run_word(&line, json);

        if !json {
            println!("Enter an instruction:");
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    if cli.words.is_empty() {
        run_interactive(cli.json);
    } else {
        for word in &cli.words {
            run_word(word, cli.json);
        }
    }
}
