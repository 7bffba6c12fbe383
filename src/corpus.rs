//! Line store: the input corpus as one arena plus a span index.
//!
//! # Scope
//! Holds all input words in a single contiguous allocation. Each word is
//! addressed through a validated `(start, len)` span rather than a pointer,
//! so every slice handed out is bounds-checked once, at construction.
//!
//! # Invariants
//! - Spans never overlap and never reach outside the arena.
//! - Span order is input order; index `i` is word `i` for the whole run.
//! - The corpus is immutable after load. Downstream stages only ever take
//!   `&Corpus`.
//!
//! # Failure modes
//! - An unreadable source aborts the load with `CorpusLoadError::Io`; there
//!   is no partial corpus, because the encoder assumes all N entries exist.

use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

use memchr::memchr_iter;

/// Byte range of one logical string inside an arena.
///
/// `len` excludes any terminator; the span is the source of truth for
/// string length.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Span {
    /// Offset of the first byte within the arena.
    pub start: usize,
    /// Number of content bytes.
    pub len: usize,
}

impl Span {
    /// Exclusive end offset.
    #[inline]
    #[must_use]
    pub const fn end(&self) -> usize {
        self.start + self.len
    }
}

/// Errors from corpus loading.
#[derive(Debug)]
#[non_exhaustive]
pub enum CorpusLoadError {
    /// The source could not be read.
    Io(io::Error),
}

impl fmt::Display for CorpusLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "failed to read corpus: {err}"),
        }
    }
}

impl std::error::Error for CorpusLoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
        }
    }
}

impl From<io::Error> for CorpusLoadError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

/// The input corpus: one byte arena, one span per input line.
///
/// Line terminators are stripped during load; empty lines are retained as
/// empty entries so indices stay aligned with the source.
#[derive(Clone, Debug)]
pub struct Corpus {
    arena: Box<[u8]>,
    spans: Vec<Span>,
}

impl Corpus {
    /// Loads a newline-delimited word list from a file.
    ///
    /// Strips `\n` and `\r` terminators. A final line without a trailing
    /// newline is kept.
    ///
    /// # Errors
    /// `CorpusLoadError::Io` if the file cannot be read.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CorpusLoadError> {
        let raw = fs::read(path)?;
        Ok(Self::from_raw(&raw))
    }

    /// Builds a corpus from in-memory lines. Intended for tests and
    /// embedding callers that already hold the words.
    #[must_use]
    pub fn from_lines<S: AsRef<str>>(lines: &[S]) -> Self {
        let total: usize = lines.iter().map(|l| l.as_ref().len()).sum();
        let mut arena = Vec::with_capacity(total);
        let mut spans = Vec::with_capacity(lines.len());
        for line in lines {
            let bytes = line.as_ref().as_bytes();
            spans.push(Span { start: arena.len(), len: bytes.len() });
            arena.extend_from_slice(bytes);
        }
        Self { arena: arena.into_boxed_slice(), spans }
    }

    /// Splits raw bytes on `\n`, stripping a trailing `\r` per line.
    fn from_raw(raw: &[u8]) -> Self {
        // One pass to count lines so both allocations are exact.
        let mut line_count = memchr_iter(b'\n', raw).count();
        let trailing = !raw.is_empty() && !raw.ends_with(b"\n");
        if trailing {
            line_count += 1;
        }

        let mut arena = Vec::with_capacity(raw.len());
        let mut spans = Vec::with_capacity(line_count);

        let mut line_start = 0;
        for nl in memchr_iter(b'\n', raw) {
            let mut line = &raw[line_start..nl];
            if line.ends_with(b"\r") {
                line = &line[..line.len() - 1];
            }
            spans.push(Span { start: arena.len(), len: line.len() });
            arena.extend_from_slice(line);
            line_start = nl + 1;
        }
        if trailing {
            let mut line = &raw[line_start..];
            if line.ends_with(b"\r") {
                line = &line[..line.len() - 1];
            }
            spans.push(Span { start: arena.len(), len: line.len() });
            arena.extend_from_slice(line);
        }

        Self { arena: arena.into_boxed_slice(), spans }
    }

    /// Number of words.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.spans.len()
    }

    /// True if the corpus holds no words.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    /// Word `index` as bytes.
    ///
    /// # Panics
    /// If `index >= len()`.
    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> &[u8] {
        let span = self.spans[index];
        &self.arena[span.start..span.end()]
    }

    /// Iterates over all words in input order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &[u8]> + '_ {
        self.spans.iter().map(|span| &self.arena[span.start..span.end()])
    }

    /// Total content bytes across all words.
    #[inline]
    #[must_use]
    pub fn total_bytes(&self) -> usize {
        self.arena.len()
    }
}
