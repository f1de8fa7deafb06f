//! Scenario and property tests for the prefix trie.

use std::collections::{HashMap, HashSet};

use proptest::prelude::*;
use test_case::test_case;

use super::test_utils::{stations_trie, words_strategy};
use crate::data_structures::{normalize, PrefixMatches, PrefixTrie};

fn char_set(chars: &[char]) -> HashSet<char> {
    chars.iter().copied().collect()
}

/// Last spelling registered for each normalized word.
fn last_spellings(words: &[String]) -> HashMap<String, String> {
    words
        .iter()
        .map(|w| (normalize(w), w.clone()))
        .collect()
}

#[test]
fn test_stations_prefix() {
    let trie = stations_trie();
    let result = trie.from_prefix("dart");

    assert_eq!(result.matches, vec!["Dartford", "Dartmouth"]);
    assert_eq!(char_set(&result.next_chars), HashSet::from(['m', 'f']));
}

#[test]
fn test_stations_prefix_space() {
    let trie = stations_trie();
    assert_eq!(
        trie.from_prefix("liverpool"),
        PrefixMatches {
            matches: vec!["Liverpool".to_string(), "Liverpool Line Street".to_string()],
            next_chars: vec![' '],
        }
    );
}

#[test_case("zzzz" ; "unknown branch")]
#[test_case("dartx" ; "diverges after a match")]
#[test_case("Victoriaa" ; "longer than any word")]
fn test_stations_wrong_prefix(prefix: &str) {
    let trie = stations_trie();
    assert_eq!(trie.from_prefix(prefix), PrefixMatches::default());
}

#[test_case("d", &["Derby", "Dartford", "Dartmouth"], &['e', 'a'] ; "single letter")]
#[test_case("L", &["Liverpool", "London Bridge", "Liverpool Line Street"], &['i', 'o'] ; "upper case prefix")]
#[test_case("victoria", &["Victoria"], &[] ; "whole word")]
#[test_case("tower ", &["Tower Hill"], &['h'] ; "trailing space")]
fn test_stations_matches(prefix: &str, matches: &[&str], next_chars: &[char]) {
    let trie = stations_trie();
    let result = trie.from_prefix(prefix);

    assert_eq!(result.matches, matches);
    assert_eq!(char_set(&result.next_chars), char_set(next_chars));
}

#[test]
fn test_stations_word_exists() {
    let trie = stations_trie();

    assert!(trie.word_exists("liverpool line street"));
    assert!(!trie.word_exists_with_case("liverpool line street", false));
    assert!(trie.word_exists_with_case("Liverpool Line Street", false));
    assert!(!trie.word_exists("liverpool line"));
    assert!(!trie.word_exists("Liverpool Line Streets"));
}

#[test]
fn test_stations_all_words() {
    let trie = stations_trie();
    let result = trie.from_prefix("");

    assert_eq!(result.matches.len(), 10);
    assert_eq!(result.matches.first().map(String::as_str), Some("Derby"));
    assert_eq!(
        result.matches.last().map(String::as_str),
        Some("Liverpool Line Street")
    );
    assert_eq!(char_set(&result.next_chars), HashSet::from(['d', 't', 'l', 'p', 'e', 'v']));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    // Property: registering the same words again changes no answer
    #[test]
    fn prop_reinsertion_is_idempotent(words in words_strategy()) {
        let mut trie: PrefixTrie = words.iter().collect();
        let nodes = trie.node_count();
        let before: Vec<PrefixMatches> = words.iter().map(|w| trie.from_prefix(&w[..1])).collect();

        trie.add_words(&words);

        prop_assert_eq!(trie.node_count(), nodes);
        for (word, expected) in words.iter().zip(before) {
            prop_assert_eq!(trie.from_prefix(&word[..1]), expected);
            prop_assert!(trie.word_exists(word));
        }
    }

    // Property: a match for a prefix is a match for every shorter prefix
    #[test]
    fn prop_prefix_monotonicity(words in words_strategy()) {
        let trie: PrefixTrie = words.iter().collect();

        for word in &words {
            let normalized = normalize(word);
            let mut longer: Option<HashSet<String>> = None;
            for end in (0..=normalized.len()).rev() {
                let matches: HashSet<String> =
                    trie.from_prefix(&normalized[..end]).matches.into_iter().collect();
                if let Some(longer) = &longer {
                    prop_assert!(matches.is_superset(longer));
                }
                longer = Some(matches);
            }
        }
    }

    // Property: lookups ignore case unless asked not to
    #[test]
    fn prop_case_insensitive_lookup(words in words_strategy()) {
        let trie: PrefixTrie = words.iter().collect();

        for (normalized, label) in last_spellings(&words) {
            prop_assert!(trie.word_exists(&label.to_uppercase()));
            prop_assert!(trie.word_exists(&normalized));
            prop_assert!(trie.word_exists_with_case(&label, false));

            let upper = label.to_uppercase();
            if upper != label {
                prop_assert!(!trie.word_exists_with_case(&upper, false));
            }
        }
    }

    // Property: matches are ordered by length and all extend the prefix
    #[test]
    fn prop_matches_sorted_and_consistent(words in words_strategy()) {
        let trie: PrefixTrie = words.iter().collect();
        let labels: HashSet<String> = last_spellings(&words).into_values().collect();

        let everything = trie.from_prefix("");
        prop_assert_eq!(everything.matches.iter().cloned().collect::<HashSet<_>>(), labels);

        for word in &words {
            let prefix = normalize(&word[..1]);
            let result = trie.from_prefix(&prefix);

            let lengths: Vec<usize> = result.matches.iter().map(|m| m.chars().count()).collect();
            prop_assert!(lengths.windows(2).all(|pair| pair[0] <= pair[1]));

            let mut expected_next = HashSet::new();
            for label in &result.matches {
                let normalized = normalize(label);
                prop_assert!(normalized.starts_with(&prefix));
                if let Some(c) = normalized[prefix.len()..].chars().next() {
                    expected_next.insert(c);
                }
            }
            prop_assert_eq!(char_set(&result.next_chars), expected_next);
            prop_assert_eq!(result.next_chars.len(), char_set(&result.next_chars).len());
        }
    }
}
