//! Property tests for the scan engine against naive reference models.

use proptest::prelude::*;

use smoosh_rs::{
    encode_serial, find_balanced, find_first_repeated, find_first_run, Corpus, SymbolTable, DASH,
    DOT,
};

fn corpus_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-z]{0,12}", 0..60)
}

/// Longest run of `mark` in `s`, computed the obvious way.
fn longest_run(s: &[u8], mark: u8) -> usize {
    let mut best = 0;
    let mut run = 0;
    for &b in s {
        if b == mark {
            run += 1;
            best = best.max(run);
        } else {
            run = 0;
        }
    }
    best
}

proptest! {
    #[test]
    fn first_run_matches_naive_model(
        words in corpus_strategy(),
        min_run in 1usize..8,
        use_dash in any::<bool>(),
    ) {
        let mark = if use_dash { DASH } else { DOT };
        let corpus = Corpus::from_lines(&words);
        let encoded = encode_serial(&corpus, &SymbolTable::morse()).unwrap();

        let expected = (0..encoded.len()).find(|&i| longest_run(encoded.get(i), mark) >= min_run);
        prop_assert_eq!(find_first_run(&encoded, mark, min_run), expected);
    }

    #[test]
    fn repeated_matches_naive_multiset_model(
        words in corpus_strategy(),
        min_occurrences in 2usize..5,
    ) {
        let corpus = Corpus::from_lines(&words);
        let encoded = encode_serial(&corpus, &SymbolTable::morse()).unwrap();

        // Naive model: count every value, then take the lexicographically
        // smallest one that reaches the threshold.
        let mut values: Vec<&[u8]> = encoded.iter().collect();
        values.sort_unstable();
        let expected = values
            .chunk_by(|a, b| a == b)
            .find(|group| group.len() >= min_occurrences)
            .map(|group| group[0]);

        prop_assert_eq!(find_first_repeated(&encoded, min_occurrences), expected);
    }

    #[test]
    fn balanced_matches_naive_filter_model(
        words in corpus_strategy(),
        max_results in 0usize..8,
        min_input_len in 0usize..10,
    ) {
        let corpus = Corpus::from_lines(&words);
        let encoded = encode_serial(&corpus, &SymbolTable::morse()).unwrap();

        let expected: Vec<usize> = (0..corpus.len())
            .filter(|&i| {
                let s = encoded.get(i);
                corpus.get(i).len() >= min_input_len
                    && s.iter().filter(|&&b| b == DASH).count()
                        == s.iter().filter(|&&b| b == DOT).count()
            })
            .take(max_results)
            .collect();

        prop_assert_eq!(
            find_balanced(&corpus, &encoded, max_results, min_input_len, DASH, DOT),
            expected
        );
    }
}
