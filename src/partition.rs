//! Static work partitioning for the encode phase.
//!
//! # Chunk semantics
//!
//! - `start`: first input index owned by the chunk
//! - `count`: number of inputs owned (contiguous from `start`)
//! - `arena_offset`: where the chunk's first output byte lands
//!
//! Chunks partition `[0, N)` exactly: contiguous, non-overlapping, union
//! covering every index. Each chunk gets `⌊N/W⌋` inputs except the last,
//! which absorbs the remainder, so boundaries are deterministic for a given
//! `(N, W)` pair.
//!
//! `arena_offset` is the cumulative worst-case bound of all inputs assigned
//! to earlier chunks. A worker's write cursor advances by at most the
//! per-item bound for each item it encodes, so it can never cross into the
//! region that starts at the next chunk's offset. This is conservative:
//! real offsets would usually be smaller, and the gap between a chunk's last
//! written byte and the next chunk's offset is simply left unused.

use crate::capacity::worst_case_len;
use crate::corpus::Corpus;
use crate::table::SymbolTable;

/// One worker's assignment: an input index range and an output offset.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct WorkChunk {
    /// First input index owned by this chunk.
    pub start: usize,
    /// Number of inputs owned.
    pub count: usize,
    /// Byte offset of this chunk's region in the output arena.
    pub arena_offset: usize,
}

impl WorkChunk {
    /// Exclusive end of the owned input index range.
    #[inline]
    #[must_use]
    pub const fn end(&self) -> usize {
        self.start + self.count
    }
}

/// Splits the corpus into `workers` contiguous chunks with precomputed
/// arena offsets.
///
/// `workers` is clamped to at least 1. When `workers > N` the leading
/// chunks are empty and the last chunk owns all inputs; the partition is
/// still exact.
#[must_use]
pub fn partition(corpus: &Corpus, table: &SymbolTable, workers: usize) -> Vec<WorkChunk> {
    let n = corpus.len();
    let w = workers.max(1);
    let per_chunk = n / w;
    let max = table.max_code_len();

    let mut chunks = Vec::with_capacity(w);
    let mut offset = 0;
    for k in 0..w {
        let start = k * per_chunk;
        let count = if k == w - 1 { n - start } else { per_chunk };
        chunks.push(WorkChunk { start, count, arena_offset: offset });
        for i in start..start + count {
            offset += worst_case_len(corpus.get(i).len(), max);
        }
    }

    debug_assert_eq!(chunks.last().map(WorkChunk::end), Some(n));
    chunks
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capacity::estimate;

    fn words(n: usize) -> Vec<String> {
        (0..n).map(|i| "abc"[..(i % 3) + 1].to_string()).collect()
    }

    fn check_exact_partition(chunks: &[WorkChunk], n: usize) {
        assert_eq!(chunks[0].start, 0);
        for pair in chunks.windows(2) {
            assert_eq!(pair[0].end(), pair[1].start);
            assert!(pair[0].arena_offset <= pair[1].arena_offset);
        }
        assert_eq!(chunks.last().unwrap().end(), n);
    }

    #[test]
    fn even_split() {
        let corpus = Corpus::from_lines(&words(8));
        let chunks = partition(&corpus, &SymbolTable::morse(), 4);
        assert_eq!(chunks.len(), 4);
        for chunk in &chunks {
            assert_eq!(chunk.count, 2);
        }
        check_exact_partition(&chunks, 8);
    }

    #[test]
    fn last_chunk_absorbs_remainder() {
        let corpus = Corpus::from_lines(&words(10));
        let chunks = partition(&corpus, &SymbolTable::morse(), 3);
        assert_eq!(chunks.len(), 3);
        assert_eq!(chunks[0].count, 3);
        assert_eq!(chunks[1].count, 3);
        assert_eq!(chunks[2].count, 4);
        check_exact_partition(&chunks, 10);
    }

    #[test]
    fn more_workers_than_inputs() {
        let corpus = Corpus::from_lines(&words(2));
        let chunks = partition(&corpus, &SymbolTable::morse(), 5);
        assert_eq!(chunks.len(), 5);
        assert_eq!(chunks[4].count, 2);
        for chunk in &chunks[..4] {
            assert_eq!(chunk.count, 0);
        }
        check_exact_partition(&chunks, 2);
    }

    #[test]
    fn single_worker_owns_everything() {
        let corpus = Corpus::from_lines(&words(7));
        let chunks = partition(&corpus, &SymbolTable::morse(), 1);
        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0], WorkChunk { start: 0, count: 7, arena_offset: 0 });
    }

    #[test]
    fn zero_workers_clamped_to_one() {
        let corpus = Corpus::from_lines(&words(3));
        let chunks = partition(&corpus, &SymbolTable::morse(), 0);
        assert_eq!(chunks.len(), 1);
    }

    #[test]
    fn offsets_use_cumulative_worst_case_bound() {
        let table = SymbolTable::morse();
        let corpus = Corpus::from_lines(&["ab", "c", "defg", "h"]);
        let chunks = partition(&corpus, &table, 2);
        // Chunk 0 owns "ab" and "c": (2*4+1) + (1*4+1) = 14.
        assert_eq!(chunks[0].arena_offset, 0);
        assert_eq!(chunks[1].arena_offset, 14);
    }

    #[test]
    fn final_offset_plus_last_chunk_bound_equals_estimate() {
        let table = SymbolTable::morse();
        let corpus = Corpus::from_lines(&words(23));
        for workers in [1, 2, 7, 23, 40] {
            let chunks = partition(&corpus, &table, workers);
            let last = chunks.last().unwrap();
            let last_bound: usize = (last.start..last.end())
                .map(|i| crate::capacity::worst_case_len(corpus.get(i).len(), table.max_code_len()))
                .sum();
            assert_eq!(last.arena_offset + last_bound, estimate(&corpus, &table));
        }
    }

    #[test]
    fn empty_corpus_yields_empty_chunks() {
        let corpus = Corpus::from_lines::<&str>(&[]);
        let chunks = partition(&corpus, &SymbolTable::morse(), 4);
        assert_eq!(chunks.len(), 4);
        for chunk in &chunks {
            assert_eq!(chunk.count, 0);
            assert_eq!(chunk.arena_offset, 0);
        }
    }
}
