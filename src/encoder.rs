//! Parallel lookup-and-copy encoder over a single preallocated arena.
//!
//! # Engine flow
//!
//! ```text
//! Corpus ──► partition() ──► [WorkChunk; W]
//!                                │
//!   arena = vec![0; estimate()]  │  split_at_mut per chunk
//!                                ▼
//!            worker 0   worker 1   ...   worker W-1
//!            (&mut region, &mut spans, read-only inputs)
//!                                │
//!                             join all
//!                                ▼
//!                         EncodedCorpus (read-only)
//! ```
//!
//! # Invariants
//! - Each worker owns a disjoint `&mut [u8]` arena region and a disjoint
//!   `&mut [Span]` slice; the borrow checker enforces the disjointness that
//!   the offset math promises. No locks, no atomics.
//! - A worker's cursor never leaves its region: each item advances the
//!   cursor by at most the same per-item bound the partitioner used for the
//!   region size. A violation is a defect and is asserted, not returned.
//! - The join of all workers is the only synchronization point. After it,
//!   the arena and index are immutable for the rest of the run.
//!
//! # Failure modes
//! - An input byte with no table entry fails the whole encode with
//!   `EncodeError::UnmappableByte`. Nothing is silently skipped; downstream
//!   scans assume every encoded string is fully formed.

use std::fmt;
use std::thread;

use crate::capacity::estimate;
use crate::corpus::{Corpus, Span};
use crate::partition::{partition, WorkChunk};
use crate::table::SymbolTable;

/// Terminator byte written after each encoded string.
///
/// The span index is authoritative for lengths; the terminator exists so
/// the arena layout matches the per-item bound (`len × max + 1`).
const TERMINATOR: u8 = 0;

/// Errors from the encode phase.
#[derive(Debug)]
#[non_exhaustive]
pub enum EncodeError {
    /// An input byte has no symbol-table entry. Fatal: the corpus is
    /// outside the configured alphabet.
    UnmappableByte {
        /// The offending byte.
        byte: u8,
        /// Corpus index of the word containing it.
        line: usize,
    },
}

impl fmt::Display for EncodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnmappableByte { byte, line } => {
                write!(f, "unmappable byte 0x{byte:02x} in word {line}")
            }
        }
    }
}

impl std::error::Error for EncodeError {}

/// The encoded corpus: worst-case-sized arena + index, aligned 1:1 with
/// the input corpus. Immutable once constructed.
#[derive(Clone, Debug)]
pub struct EncodedCorpus {
    arena: Box<[u8]>,
    spans: Vec<Span>,
}

impl EncodedCorpus {
    /// Number of encoded strings (equal to the input corpus length).
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.spans.len()
    }

    /// True if nothing was encoded.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    /// Encoded string `index` as mark bytes (terminator excluded).
    ///
    /// # Panics
    /// If `index >= len()`.
    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> &[u8] {
        let span = self.spans[index];
        &self.arena[span.start..span.end()]
    }

    /// Iterates over encoded strings in corpus order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &[u8]> + '_ {
        self.spans.iter().map(|span| &self.arena[span.start..span.end()])
    }

    /// Span of encoded string `index` within the arena.
    #[inline]
    #[must_use]
    pub fn span(&self, index: usize) -> Span {
        self.spans[index]
    }

    /// Total arena size, including unused worst-case slack.
    #[inline]
    #[must_use]
    pub fn arena_len(&self) -> usize {
        self.arena.len()
    }

    /// Content bytes actually written (marks plus terminators).
    ///
    /// `arena_len() - bytes_used()` is the internal fragmentation cost of
    /// the one-pass sizing strategy.
    #[must_use]
    pub fn bytes_used(&self) -> usize {
        self.spans.iter().map(|span| span.len + 1).sum()
    }
}

/// Encodes the corpus with `workers` parallel tasks.
///
/// Partitions the inputs statically, allocates the arena once at the
/// worst-case size, and gives each worker exclusive ownership of its chunk's
/// arena region and index slice. All workers are joined before this function
/// returns; the result is fully formed and read-only.
///
/// The per-string output values are identical for every worker count; only
/// the absolute arena placement differs.
///
/// # Errors
/// `EncodeError::UnmappableByte` if any input byte is outside the table's
/// alphabet. The first failing worker's error is returned.
pub fn encode(
    corpus: &Corpus,
    table: &SymbolTable,
    workers: usize,
) -> Result<EncodedCorpus, EncodeError> {
    let chunks = partition(corpus, table, workers);
    let total = estimate(corpus, table);
    let mut arena = vec![0u8; total];
    let mut spans = vec![Span::default(); corpus.len()];

    if chunks.len() == 1 {
        // No point paying a thread spawn for a single chunk.
        encode_chunk(corpus, table, &chunks[0], &mut arena, &mut spans)?;
    } else {
        run_workers(corpus, table, &chunks, total, &mut arena, &mut spans)?;
    }

    Ok(EncodedCorpus { arena: arena.into_boxed_slice(), spans })
}

/// Single-cursor encoder. Same output values as [`encode`] with any worker
/// count; useful as a reference path and for tiny corpora.
///
/// # Errors
/// Same as [`encode`].
pub fn encode_serial(corpus: &Corpus, table: &SymbolTable) -> Result<EncodedCorpus, EncodeError> {
    encode(corpus, table, 1)
}

/// Carves the arena and span index into per-chunk exclusive regions and
/// runs one scoped worker per chunk.
fn run_workers(
    corpus: &Corpus,
    table: &SymbolTable,
    chunks: &[WorkChunk],
    arena_len: usize,
    arena: &mut [u8],
    spans: &mut [Span],
) -> Result<(), EncodeError> {
    // Region k spans [chunk[k].arena_offset, chunk[k+1].arena_offset); the
    // last region runs to the arena end. Successive split_at_mut calls turn
    // those half-open ranges into disjoint &mut slices.
    let mut regions = Vec::with_capacity(chunks.len());
    let mut arena_rest = arena;
    let mut spans_rest = spans;
    for (k, chunk) in chunks.iter().enumerate() {
        let region_end = chunks.get(k + 1).map_or(arena_len, |next| next.arena_offset);
        let (region, rest) =
            std::mem::take(&mut arena_rest).split_at_mut(region_end - chunk.arena_offset);
        arena_rest = rest;
        let (span_slice, rest) = std::mem::take(&mut spans_rest).split_at_mut(chunk.count);
        spans_rest = rest;
        regions.push((chunk, region, span_slice));
    }

    thread::scope(|scope| {
        let mut handles = Vec::with_capacity(regions.len());
        for (chunk, region, span_slice) in regions {
            let builder = thread::Builder::new().name(format!("smoosh-worker-{}", chunk.start));
            let handle = builder
                .spawn_scoped(scope, move || encode_chunk(corpus, table, chunk, region, span_slice))
                .expect("failed to spawn encode worker");
            handles.push(handle);
        }
        for handle in handles {
            match handle.join() {
                Ok(result) => result?,
                Err(payload) => std::panic::resume_unwind(payload),
            }
        }
        Ok(())
    })
}

/// Sequential lookup-and-copy over one chunk's inputs.
///
/// `region` starts at the chunk's arena offset; recorded spans are absolute.
fn encode_chunk(
    corpus: &Corpus,
    table: &SymbolTable,
    chunk: &WorkChunk,
    region: &mut [u8],
    spans: &mut [Span],
) -> Result<(), EncodeError> {
    debug_assert_eq!(spans.len(), chunk.count);

    let mut cursor = 0;
    for (slot, line) in spans.iter_mut().zip(chunk.start..chunk.end()) {
        let word = corpus.get(line);
        let start = cursor;
        for &byte in word {
            let code = table
                .code(byte)
                .ok_or(EncodeError::UnmappableByte { byte, line })?;
            region[cursor..cursor + code.len()].copy_from_slice(code);
            cursor += code.len();
        }
        // Cursor stays inside the region because every item advances it by
        // at most the per-item bound the region was sized with.
        assert!(cursor < region.len(), "encode cursor crossed its chunk region");
        region[cursor] = TERMINATOR;
        cursor += 1;
        *slot = Span { start: chunk.arena_offset + start, len: cursor - 1 - start };
    }
    Ok(())
}
