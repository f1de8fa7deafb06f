//! Data structures for Niihau.
//!
//! This module contains the prefix trie that backs autocomplete queries.
//! All implementations adhere to the project requirements:
//! - No unsafe code
//! - Build once, then read from any number of threads
//! - Cache-aware, arena-backed node storage

pub mod prefix_trie;

// Re-export common data structures
pub use prefix_trie::{normalize, PrefixMatches, PrefixTrie, PrefixTrieError, PrefixTrieResult};
