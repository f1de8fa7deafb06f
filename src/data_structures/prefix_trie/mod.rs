// Copyright (c) 2025 Niihau Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Prefix Trie Implementation
//!
//! This module provides a case-insensitive trie for autocomplete. Words are
//! indexed by their lowercased form while the original spelling is kept and
//! returned to callers. A prefix query returns every registered word under the
//! prefix, shortest first, together with the characters that can extend the
//! prefix toward at least one of them.
//!
//! # Example
//!
//! ```
//! use niihau_lib::data_structures::PrefixTrie;
//!
//! let mut trie = PrefixTrie::new();
//! trie.add_words(["Liverpool", "Liverpool Line Street", "London Bridge"]);
//!
//! let result = trie.from_prefix("liverpool");
//! assert_eq!(result.matches, vec!["Liverpool", "Liverpool Line Street"]);
//! assert_eq!(result.next_chars, vec![' ']);
//!
//! assert!(trie.word_exists("LONDON BRIDGE"));
//! assert!(!trie.word_exists_with_case("LONDON BRIDGE", false));
//! ```
//!
//! The trie is built once through `&mut self` and queried through `&self`.
//! Queries never mutate, so a finished trie can be shared between threads
//! behind an `Arc` without further locking.

mod error;
mod node;

use std::fmt;

use fnv::FnvBuildHasher;
use hashbrown::{HashMap, HashSet};
use serde::{Deserialize, Serialize};

pub use error::{PrefixTrieError, PrefixTrieResult};
pub use node::{NodeId, TrieNode};

/// Result of a prefix query.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrefixMatches {
    /// Original spellings of the matching words, ordered by length
    pub matches: Vec<String>,

    /// Characters that extend the prefix toward at least one match
    pub next_chars: Vec<char>,
}

impl PrefixMatches {
    /// Returns `true` when nothing matched the prefix.
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }
}

/// Lowercases a word for indexing and comparison.
pub fn normalize(word: &str) -> String {
    word.to_lowercase()
}

/// Case-insensitive prefix trie with arena-backed nodes.
///
/// Key features:
/// * Case-insensitive indexing with the original spelling preserved
/// * Autocomplete results sorted by length, ties broken alphabetically
/// * Next-character suggestions for the current prefix
/// * Append-only: words are never removed
#[derive(Debug)]
pub struct PrefixTrie {
    /// All nodes; index 0 is the root
    nodes: Vec<TrieNode>,

    /// Number of distinct registered words
    word_count: usize,
}

impl PrefixTrie {
    /// Creates a new empty `PrefixTrie`.
    pub fn new() -> Self {
        Self {
            nodes: vec![TrieNode::root()],
            word_count: 0,
        }
    }

    /// Registers a word.
    ///
    /// The existing path is reused for as long as it matches the normalized
    /// word; the remaining characters are appended as a fresh chain. The final
    /// node becomes terminal and stores `word` verbatim, replacing any spelling
    /// stored by an earlier insertion of the same normalized word.
    ///
    /// The empty string is a legal word and marks the root itself.
    pub fn add_word(&mut self, word: &str) {
        let normalized = normalize(word);
        let mut chars = normalized.chars();
        let mut current = NodeId::ROOT;
        let mut first_missing = None;

        for c in chars.by_ref() {
            match self.node(current).child(c) {
                Some(next) => current = next,
                None => {
                    first_missing = Some(c);
                    break;
                }
            }
        }

        for c in first_missing.into_iter().chain(chars) {
            current = self.push_child(current, c);
        }

        let node = &mut self.nodes[current.index()];
        if !node.is_terminal {
            self.word_count += 1;
        }
        node.mark_terminal(word, &normalized);

        tracing::trace!(word = %word, node = current.index(), "Registered word");
    }

    /// Registers every word in order.
    pub fn add_words<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let before = self.node_count();
        let mut added = 0usize;
        for word in words {
            self.add_word(word.as_ref());
            added += 1;
        }
        tracing::debug!(
            added,
            new_nodes = self.node_count() - before,
            "Registered word batch"
        );
    }

    /// Finds all registered words under `prefix`.
    ///
    /// An unknown prefix yields an empty result. The empty prefix searches
    /// every branch below the root, so a registered empty word is never
    /// returned as a match.
    pub fn from_prefix(&self, prefix: &str) -> PrefixMatches {
        let prefix_norm = normalize(prefix);

        let top = match self.walk(&prefix_norm) {
            Some(node) => node,
            None => return PrefixMatches::default(),
        };

        let mut frontier: Vec<NodeId> = if top == NodeId::ROOT {
            self.node(top).children.values().copied().collect()
        } else {
            vec![top]
        };

        // label -> normalized form
        let mut found: HashMap<&str, &str, FnvBuildHasher> = HashMap::default();
        while let Some(id) = frontier.pop() {
            let node = self.node(id);
            frontier.extend(node.children.values().copied());

            if node.is_leaf() || node.is_terminal {
                if let (Some(label), Some(normalized)) =
                    (node.label.as_deref(), node.normalized_form.as_deref())
                {
                    found.entry(label).or_insert(normalized);
                }
            }
        }

        let mut ordered: Vec<(&str, &str)> = found.into_iter().collect();
        ordered.sort_by(|(a, _), (b, _)| {
            a.chars()
                .count()
                .cmp(&b.chars().count())
                .then_with(|| a.cmp(b))
        });

        let next_chars = next_chars(&ordered, &prefix_norm);
        let matches: Vec<String> = ordered.into_iter().map(|(label, _)| label.to_string()).collect();

        tracing::debug!(prefix = %prefix, matches = matches.len(), "Prefix query");

        PrefixMatches {
            matches,
            next_chars,
        }
    }

    /// Checks whether `word` is registered, ignoring case.
    pub fn word_exists(&self, word: &str) -> bool {
        self.word_exists_with_case(word, true)
    }

    /// Checks whether `word` is registered.
    ///
    /// A node along the walk matches when its stored spelling equals `word`
    /// exactly or, with `ignore_case`, when its normalized form equals the
    /// normalized `word`. The root is never examined, so the empty word never
    /// exists.
    pub fn word_exists_with_case(&self, word: &str, ignore_case: bool) -> bool {
        let normalized = normalize(word);
        let mut current = NodeId::ROOT;

        for c in normalized.chars() {
            current = match self.node(current).child(c) {
                Some(next) => next,
                None => return false,
            };

            let node = self.node(current);
            if node.label.as_deref() == Some(word) {
                return true;
            }
            if ignore_case && node.normalized_form.as_deref() == Some(normalized.as_str()) {
                return true;
            }
        }

        false
    }

    /// Number of distinct registered words.
    pub fn len(&self) -> usize {
        self.word_count
    }

    /// Returns `true` if no word has been registered.
    pub fn is_empty(&self) -> bool {
        self.word_count == 0
    }

    /// Number of nodes created so far, not counting the root.
    pub fn node_count(&self) -> usize {
        self.nodes.len() - 1
    }

    fn node(&self, id: NodeId) -> &TrieNode {
        &self.nodes[id.index()]
    }

    fn walk(&self, normalized: &str) -> Option<NodeId> {
        normalized
            .chars()
            .try_fold(NodeId::ROOT, |id, c| self.node(id).child(c))
    }

    fn push_child(&mut self, parent: NodeId, c: char) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(TrieNode::with_char(c));
        self.nodes[parent.index()].children.insert(c, id);
        id
    }
}

/// First character after the prefix in each match, deduplicated in order of appearance.
fn next_chars(ordered: &[(&str, &str)], prefix_norm: &str) -> Vec<char> {
    let mut seen: HashSet<char, FnvBuildHasher> = HashSet::default();
    ordered
        .iter()
        .filter_map(|(_, normalized)| {
            normalized
                .split_once(prefix_norm)
                .and_then(|(_, rest)| rest.chars().next())
        })
        .filter(|c| seen.insert(*c))
        .collect()
}

impl Default for PrefixTrie {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for PrefixTrie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<trie with {} nodes>", self.node_count())
    }
}

impl<S: AsRef<str>> Extend<S> for PrefixTrie {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        self.add_words(iter);
    }
}

impl<S: AsRef<str>> FromIterator<S> for PrefixTrie {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut trie = Self::new();
        trie.add_words(iter);
        trie
    }
}
