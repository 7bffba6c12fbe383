//! Batch smooshed-Morse transliteration over a single output arena.
//!
//! ## Scope
//! This crate encodes a list of lowercase words into "smooshed" Morse (no
//! separators between letters) and runs analytical scans over the result.
//! The transliteration itself is a table lookup; the point of the design is
//! the memory layout and the parallel write phase:
//! - every output string lives in one contiguous arena, addressed through a
//!   span index, allocated once at a worst-case size;
//! - the packing work is statically partitioned across a fixed worker pool
//!   with zero shared mutable state during the write phase.
//!
//! ## Key invariants
//! - The worst-case bound is a true upper bound: actual usage ≤ the single
//!   upfront allocation, always.
//! - Chunk offsets come from the same per-item bound as the allocation, so
//!   no worker's cursor can reach the next worker's region.
//! - The join of all workers is the only synchronization point; afterwards
//!   the encoded corpus is immutable.
//! - Scans never mutate either corpus; "not found" is a value, not an error.
//!
//! ## Pipeline flow
//! `Corpus (load) -> estimate + partition -> parallel encode -> join -> scans`
//!
//! ## Notable entry points
//! - [`Corpus`]: input words in one arena with a span index.
//! - [`SymbolTable`]: the fixed letter-to-marks mapping.
//! - [`encode`] / [`encode_serial`]: the write phase.
//! - [`find_first_run`], [`find_first_repeated`], [`find_balanced`]: the
//!   read phase.

pub mod capacity;
pub mod corpus;
pub mod encoder;
pub mod partition;
pub mod scan;
pub mod table;

pub use corpus::{Corpus, CorpusLoadError, Span};
pub use encoder::{encode, encode_serial, EncodeError, EncodedCorpus};
pub use partition::{partition, WorkChunk};
pub use scan::{find_balanced, find_first_repeated, find_first_run};
pub use table::{SymbolTable, SymbolTableError, DASH, DOT};
