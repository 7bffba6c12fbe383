//! Fixed symbol table mapping lowercase letters to mark codes.
//!
//! # Scope
//! The table is the only piece of configuration the encoder consumes. It is
//! immutable after construction and shared read-only across all workers.
//!
//! # Invariants
//! - Exactly one code per letter in `a..=z`.
//! - Every code is non-empty and contains only the two marks (`.` and `-`).
//! - `max_code_len` is the true maximum over all 26 codes; the capacity
//!   estimator's safety argument depends on it.
//!
//! Lookups outside `a..=z` return `None` rather than panicking; the encoder
//! turns that into a fatal configuration error with the offending byte.

use std::fmt;

/// Dot mark byte (`.`).
pub const DOT: u8 = b'.';
/// Dash mark byte (`-`).
pub const DASH: u8 = b'-';

/// Number of symbols in the input alphabet (`a..=z`).
pub const ALPHABET_LEN: usize = 26;

/// The standard international Morse alphabet, `a` through `z`.
const MORSE_CODES: [&str; ALPHABET_LEN] = [
    ".-", "-...", "-.-.", "-..", ".", "..-.", "--.", "....", "..", ".---", "-.-", ".-..", "--",
    "-.", "---", ".--.", "--.-", ".-.", "...", "-", "..-", "...-", ".--", "-..-", "-.--", "--..",
];

/// Errors from symbol table construction.
#[derive(Debug)]
#[non_exhaustive]
pub enum SymbolTableError {
    /// A code string was empty.
    EmptyCode { symbol: char },
    /// A code string contained a byte other than the two marks.
    InvalidMark { symbol: char, byte: u8 },
}

impl fmt::Display for SymbolTableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyCode { symbol } => write!(f, "empty code for symbol '{symbol}'"),
            Self::InvalidMark { symbol, byte } => {
                write!(f, "code for symbol '{symbol}' contains non-mark byte 0x{byte:02x}")
            }
        }
    }
}

impl std::error::Error for SymbolTableError {}

/// Immutable mapping from input symbol to output code string.
///
/// Construct via [`SymbolTable::morse`] for the standard table or
/// [`SymbolTable::new`] for a custom one. The longest code length is
/// computed once at construction and reused by the capacity estimator
/// and partitioner.
#[derive(Clone, Debug)]
pub struct SymbolTable {
    codes: [&'static str; ALPHABET_LEN],
    max_code_len: usize,
}

impl SymbolTable {
    /// The standard international Morse table.
    #[must_use]
    pub fn morse() -> Self {
        // MORSE_CODES is a compile-time constant known to satisfy the
        // invariants; the debug assertion guards against edits to it.
        let table = Self::from_codes(MORSE_CODES);
        debug_assert!(Self::validate(&MORSE_CODES).is_ok());
        table
    }

    /// Builds a table from custom codes, one per letter `a..=z` in order.
    ///
    /// # Errors
    /// - `EmptyCode` if any code is empty.
    /// - `InvalidMark` if any code contains a byte other than `.` or `-`.
    pub fn new(codes: [&'static str; ALPHABET_LEN]) -> Result<Self, SymbolTableError> {
        Self::validate(&codes)?;
        Ok(Self::from_codes(codes))
    }

    fn validate(codes: &[&'static str; ALPHABET_LEN]) -> Result<(), SymbolTableError> {
        for (i, code) in codes.iter().enumerate() {
            let symbol = (b'a' + i as u8) as char;
            if code.is_empty() {
                return Err(SymbolTableError::EmptyCode { symbol });
            }
            if let Some(byte) = code.bytes().find(|&b| b != DOT && b != DASH) {
                return Err(SymbolTableError::InvalidMark { symbol, byte });
            }
        }
        Ok(())
    }

    fn from_codes(codes: [&'static str; ALPHABET_LEN]) -> Self {
        let max_code_len = codes.iter().map(|c| c.len()).max().unwrap_or(0);
        Self { codes, max_code_len }
    }

    /// Looks up the code for an input byte.
    ///
    /// Returns `None` for any byte outside `a..=z`; callers treat that as
    /// a fatal configuration error, not a skippable one.
    #[inline]
    #[must_use]
    pub fn code(&self, byte: u8) -> Option<&'static [u8]> {
        if byte.is_ascii_lowercase() {
            Some(self.codes[(byte - b'a') as usize].as_bytes())
        } else {
            None
        }
    }

    /// Length of the longest code in the table.
    ///
    /// This is the expansion factor behind every worst-case size bound.
    #[inline]
    #[must_use]
    pub const fn max_code_len(&self) -> usize {
        self.max_code_len
    }
}
