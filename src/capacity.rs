//! Worst-case capacity estimation for the output arena.
//!
//! The encoder allocates exactly once, before any encoding happens, so the
//! bound must hold for every possible input: each symbol expands to at most
//! `max_code_len` marks, and each string gets one terminator byte. The bound
//! is deliberately not tight; the unused arena tail is accepted in exchange
//! for skipping a sizing pass.
//!
//! The partitioner derives chunk offsets from the *same* per-item bound, so
//! a worker's actual writes can never reach the next chunk's region. That
//! shared bound function is the entire no-overlap argument; do not compute
//! offsets any other way.

use crate::corpus::Corpus;
use crate::table::SymbolTable;

/// Worst-case encoded size of a single input, terminator included.
#[inline]
#[must_use]
pub fn worst_case_len(input_len: usize, max_code_len: usize) -> usize {
    input_len
        .checked_mul(max_code_len)
        .and_then(|n| n.checked_add(1))
        .expect("worst-case size overflows usize")
}

/// Upper bound on the total arena size for the whole corpus.
///
/// Actual usage is always ≤ this bound; equality only when every input
/// symbol maps to a code of the maximum length.
#[must_use]
pub fn estimate(corpus: &Corpus, table: &SymbolTable) -> usize {
    let max = table.max_code_len();
    corpus.iter().map(|word| worst_case_len(word.len(), max)).sum()
}
