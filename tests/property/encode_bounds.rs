//! Property tests for the encode phase.
//!
//! The partitioning scheme's safety argument is checked directly: spans
//! stay inside the arena, never overlap, never exceed the per-item bound,
//! and the per-string values are independent of the worker count.

use proptest::prelude::*;

use smoosh_rs::{encode, encode_serial, partition, Corpus, SymbolTable};

fn word_strategy() -> impl Strategy<Value = String> {
    // Lowercase-only words, including the empty word; lengths past the
    // chunk-remainder edge cases but small enough to keep cases fast.
    "[a-z]{0,24}"
}

fn corpus_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(word_strategy(), 0..80)
}

proptest! {
    #[test]
    fn encoded_lengths_respect_the_per_item_bound(words in corpus_strategy()) {
        let corpus = Corpus::from_lines(&words);
        let table = SymbolTable::morse();
        let encoded = encode_serial(&corpus, &table).unwrap();

        for i in 0..corpus.len() {
            prop_assert!(encoded.get(i).len() <= corpus.get(i).len() * table.max_code_len());
        }
    }

    #[test]
    fn spans_stay_in_bounds_and_never_overlap(
        words in corpus_strategy(),
        workers in prop_oneof![Just(1usize), Just(2), Just(7), (1usize..64)],
    ) {
        let corpus = Corpus::from_lines(&words);
        let table = SymbolTable::morse();
        let encoded = encode(&corpus, &table, workers).unwrap();

        let mut spans: Vec<_> = (0..encoded.len()).map(|i| encoded.span(i)).collect();
        for span in &spans {
            // +1: the terminator byte must also fit.
            prop_assert!(span.end() + 1 <= encoded.arena_len());
        }
        spans.sort_by_key(|s| s.start);
        for pair in spans.windows(2) {
            prop_assert!(pair[0].end() + 1 <= pair[1].start);
        }
        prop_assert!(encoded.bytes_used() <= encoded.arena_len());

        // Every span also stays inside its own chunk's region: that is the
        // mechanism behind the global disjointness checked above. The
        // partition is deterministic, so recomputing it here sees the same
        // chunk boundaries the encoder used.
        let chunks = partition(&corpus, &table, workers);
        for (k, chunk) in chunks.iter().enumerate() {
            let region_end = chunks
                .get(k + 1)
                .map_or(encoded.arena_len(), |next| next.arena_offset);
            for i in chunk.start..chunk.end() {
                let span = encoded.span(i);
                prop_assert!(span.start >= chunk.arena_offset);
                prop_assert!(span.end() + 1 <= region_end);
            }
        }
    }

    #[test]
    fn worker_count_never_changes_the_values(
        words in corpus_strategy(),
        workers in 1usize..64,
    ) {
        let corpus = Corpus::from_lines(&words);
        let table = SymbolTable::morse();

        let reference = encode_serial(&corpus, &table).unwrap();
        let encoded = encode(&corpus, &table, workers).unwrap();

        prop_assert_eq!(encoded.len(), reference.len());
        for i in 0..reference.len() {
            prop_assert_eq!(encoded.get(i), reference.get(i));
        }
    }

    #[test]
    fn every_word_round_trips_through_the_table(words in corpus_strategy()) {
        // Naive reference: concatenate per-letter codes with a plain String.
        let corpus = Corpus::from_lines(&words);
        let table = SymbolTable::morse();
        let encoded = encode_serial(&corpus, &table).unwrap();

        for (i, word) in words.iter().enumerate() {
            let mut expected = Vec::new();
            for byte in word.bytes() {
                expected.extend_from_slice(table.code(byte).unwrap());
            }
            prop_assert_eq!(encoded.get(i), &expected[..]);
        }
    }
}
