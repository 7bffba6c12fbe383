//! Read-only analyses over the encoded corpus.
//!
//! All three scans are pure functions over `(&Corpus, &EncodedCorpus)`.
//! They run after the encode barrier, never mutate either corpus, and are
//! mutually independent. "Not found" is a normal outcome (`None` or an
//! empty vec), distinct from any failure mode.

use memchr::memchr_iter;

use crate::corpus::Corpus;
use crate::encoder::EncodedCorpus;

/// Returns the index of the first encoded string containing `min_run`
/// consecutive occurrences of `mark`, or `None`.
///
/// The running count resets on any other byte, so only unbroken runs
/// qualify. Only the first qualifying string in corpus order is reported.
///
/// # Panics
/// If `min_run == 0`.
#[must_use]
pub fn find_first_run(encoded: &EncodedCorpus, mark: u8, min_run: usize) -> Option<usize> {
    assert!(min_run > 0, "min_run must be at least 1");

    for (index, string) in encoded.iter().enumerate() {
        let mut run = 0;
        for &byte in string {
            if byte == mark {
                run += 1;
                if run >= min_run {
                    return Some(index);
                }
            } else {
                run = 0;
            }
        }
    }
    None
}

/// Returns the first encoded value that occurs at least `min_occurrences`
/// times, or `None`.
///
/// "First" means first in lexicographic order, not corpus order: the scan
/// sorts (value, original-index) pairs and walks adjacent runs, so among
/// equally-repeated values the lexicographically smallest wins. The
/// canonical index is never reordered.
///
/// `min_occurrences` values of 0 and 1 are equivalent: every value occurs
/// at least once, so both return the lexicographically smallest value (or
/// `None` on an empty corpus).
#[must_use]
pub fn find_first_repeated(encoded: &EncodedCorpus, min_occurrences: usize) -> Option<&[u8]> {
    let mut sorted: Vec<(&[u8], usize)> = encoded.iter().enumerate().map(|(i, s)| (s, i)).collect();
    sorted.sort_unstable();

    let needed = min_occurrences.max(1);
    let mut run_start = 0;
    for i in 0..sorted.len() {
        if sorted[i].0 != sorted[run_start].0 {
            run_start = i;
        }
        if i - run_start + 1 >= needed {
            return Some(sorted[run_start].0);
        }
    }
    None
}

/// Collects up to `max_results` corpus indices whose *input* length is at
/// least `min_input_len` and whose *encoded* string contains equal counts
/// of `mark_a` and `mark_b`.
///
/// Indices are returned in ascending order; collection stops as soon as
/// `max_results` matches are found.
#[must_use]
pub fn find_balanced(
    corpus: &Corpus,
    encoded: &EncodedCorpus,
    max_results: usize,
    min_input_len: usize,
    mark_a: u8,
    mark_b: u8,
) -> Vec<usize> {
    debug_assert_eq!(corpus.len(), encoded.len());

    let mut matches = Vec::with_capacity(max_results.min(corpus.len()));
    if max_results == 0 {
        return matches;
    }
    for index in 0..corpus.len() {
        if corpus.get(index).len() < min_input_len {
            continue;
        }
        let string = encoded.get(index);
        let count_a = memchr_iter(mark_a, string).count();
        let count_b = memchr_iter(mark_b, string).count();
        if count_a == count_b {
            matches.push(index);
            if matches.len() == max_results {
                break;
            }
        }
    }
    matches
}
