//! Property-based tests for the edit distance and the lookup.
//!
//! The bounded, banded edit distance is checked against a plain full-matrix
//! optimal string alignment distance, and the three verbosity levels are checked
//! against each other on random dictionaries.

use std::cmp::min;
use std::collections::HashSet;
use std::mem;

use linspell_rs::{
    Dictionary, LookupConfig, SuggestItem, UNBOUNDED, Verbosity, damerau_levenshtein_osa, lookup,
};
use proptest::prelude::*;

/// Unbounded optimal string alignment distance, full matrix, no shortcuts.
fn reference_osa(a: &str, b: &str) -> usize {
    let b_chars: Vec<char> = b.chars().collect();
    let b_len = b_chars.len();

    let mut prev_two_distances: Vec<usize> = (0..b_len + 1).collect();
    let mut prev_distances: Vec<usize> = (0..b_len + 1).collect();
    let mut curr_distances: Vec<usize> = vec![0; b_len + 1];

    let mut prev_a_char = char::MAX;

    for (i, a_char) in a.chars().enumerate() {
        curr_distances[0] = i + 1;

        for (j, &b_char) in b_chars.iter().enumerate() {
            let cost = usize::from(a_char != b_char);
            curr_distances[j + 1] = min(
                curr_distances[j] + 1,
                min(prev_distances[j + 1] + 1, prev_distances[j] + cost),
            );
            if i > 0
                && j > 0
                && a_char != b_char
                && a_char == b_chars[j - 1]
                && b_char == prev_a_char
            {
                curr_distances[j + 1] = min(curr_distances[j + 1], prev_two_distances[j - 1] + 1);
            }
        }

        mem::swap(&mut prev_two_distances, &mut prev_distances);
        mem::swap(&mut prev_distances, &mut curr_distances);
        prev_a_char = a_char;
    }

    prev_distances[b_len]
}

fn terms(suggestions: &[SuggestItem]) -> Vec<&str> {
    suggestions.iter().map(|s| s.term.as_str()).collect()
}

fn dictionary_strategy() -> impl Strategy<Value = Dictionary> {
    prop::collection::vec(("[abcd]{1,7}", 1u64..100), 0..40)
        .prop_map(|entries| entries.into_iter().collect())
}

#[test]
fn reference_sanity() {
    assert_eq!(3, reference_osa("CA", "ABC"));
    assert_eq!(1, reference_osa("ab", "ba"));
    assert_eq!(3, reference_osa("kitten", "sitting"));
    assert_eq!(4, reference_osa("", "abcd"));
}

proptest! {
    #[test]
    fn bounded_distance_matches_reference(
        a in "[abcd]{0,10}",
        b in "[abcd]{0,10}",
        max_distance in 0usize..8,
    ) {
        let expected = reference_osa(&a, &b);
        let actual = damerau_levenshtein_osa(&a, &b, max_distance);
        if a.is_empty() || b.is_empty() || expected <= max_distance {
            prop_assert_eq!(Some(expected), actual);
        } else {
            prop_assert_eq!(None, actual);
        }
    }

    #[test]
    fn bounded_distance_matches_reference_unicode(
        a in "[aéł部分]{0,8}",
        b in "[aéł部分]{0,8}",
        max_distance in 0usize..5,
    ) {
        let expected = reference_osa(&a, &b);
        let actual = damerau_levenshtein_osa(&a, &b, max_distance);
        if a.is_empty() || b.is_empty() || expected <= max_distance {
            prop_assert_eq!(Some(expected), actual);
        } else {
            prop_assert_eq!(None, actual);
        }
    }

    #[test]
    fn unbounded_distance_matches_reference(a in "\\PC{0,12}", b in "\\PC{0,12}") {
        prop_assert_eq!(Some(reference_osa(&a, &b)), damerau_levenshtein_osa(&a, &b, UNBOUNDED));
    }

    #[test]
    fn distance_identity(a in "\\PC{0,20}", max_distance in 0usize..4) {
        prop_assert_eq!(Some(0), damerau_levenshtein_osa(&a, &a, max_distance));
    }

    #[test]
    fn distance_symmetry(a in "[abc]{0,10}", b in "[abc]{0,10}") {
        prop_assert_eq!(
            damerau_levenshtein_osa(&a, &b, UNBOUNDED),
            damerau_levenshtein_osa(&b, &a, UNBOUNDED)
        );
    }

    #[test]
    fn distance_to_empty(s in "\\PC{0,20}", max_distance in 0usize..4) {
        let len = s.chars().count();
        prop_assert_eq!(Some(len), damerau_levenshtein_osa("", &s, max_distance));
        prop_assert_eq!(Some(len), damerau_levenshtein_osa(&s, "", max_distance));
    }

    #[test]
    fn all_returns_every_term_within_max_distance(
        dictionary in dictionary_strategy(),
        input in "[abcd]{0,7}",
        max_distance in 0usize..4,
    ) {
        let config = LookupConfig::default()
            .with_max_distance(max_distance)
            .with_verbosity(Verbosity::All);
        let all = lookup(&input, &config, &dictionary);

        let expected: HashSet<&str> = dictionary
            .iter()
            .filter(|(term, _)| reference_osa(&input, term) <= max_distance)
            .map(|(term, _)| term)
            .collect();
        prop_assert_eq!(expected, terms(&all).into_iter().collect::<HashSet<_>>());

        for suggestion in &all {
            prop_assert_eq!(reference_osa(&input, &suggestion.term), suggestion.distance);
            prop_assert_eq!(dictionary.get(&suggestion.term), Some(suggestion.count));
        }
        prop_assert!(all.windows(2).all(|w| w[0].cmp_rank(&w[1]).is_lt()));
    }

    #[test]
    fn closest_is_all_at_smallest_distance(
        dictionary in dictionary_strategy(),
        input in "[abcd]{0,7}",
        max_distance in 0usize..4,
    ) {
        let config = LookupConfig::default().with_max_distance(max_distance);
        let all = lookup(&input, &config.with_verbosity(Verbosity::All), &dictionary);
        let closest = lookup(&input, &config.with_verbosity(Verbosity::Closest), &dictionary);

        match all.first() {
            None => prop_assert!(closest.is_empty()),
            Some(best) => {
                let expected: Vec<&str> = all
                    .iter()
                    .filter(|s| s.distance == best.distance)
                    .map(|s| s.term.as_str())
                    .collect();
                prop_assert_eq!(expected, terms(&closest));
            }
        }
    }

    #[test]
    fn top_is_prefix_of_closest(
        dictionary in dictionary_strategy(),
        input in "[abcd]{0,7}",
        max_distance in 0usize..4,
        top_results_limit in 1usize..6,
    ) {
        let config = LookupConfig::new(max_distance, Verbosity::Top, top_results_limit).unwrap();
        let top = lookup(&input, &config, &dictionary);
        let closest = lookup(&input, &config.with_verbosity(Verbosity::Closest), &dictionary);

        let n = min(top_results_limit, closest.len());
        prop_assert_eq!(terms(&closest[..n]), terms(&top));
        for (t, c) in top.iter().zip(&closest) {
            prop_assert_eq!(t.distance, c.distance);
            prop_assert_eq!(t.count, c.count);
        }
    }
}
