//! Niihau Library
//!
//! This library contains the components behind the `niihau` autocomplete
//! tool: the case-insensitive prefix trie, word list loading, the JSON request
//! layer, configuration, and error types. The binary is a thin shell around
//! them, but the library can also be used as a dependency by other projects.
//!
//! # Architecture
//!
//! - A trie is built once from a word list, then queried read-only
//! - Typed operations cannot fail; untyped arguments are checked at the
//!   request boundary
//! - An unknown prefix or word is an ordinary empty answer, never an error

pub mod config;
pub mod data_structures;
pub mod error;
pub mod protocol;
pub mod word_list;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

pub use data_structures::{PrefixMatches, PrefixTrie};

/// Version information for Niihau.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
