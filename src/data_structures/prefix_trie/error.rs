// Copyright (c) 2025 Niihau Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Error types for the prefix trie.
//!
//! The typed API of [`PrefixTrie`](super::PrefixTrie) cannot fail. These errors
//! are raised where arguments arrive untyped, before any mutation or traversal.
//! An unknown prefix or word is never an error.

/// Errors that can occur when calling trie operations with untyped arguments.
#[derive(Debug, thiserror::Error, PartialEq, Eq, Clone)]
pub enum PrefixTrieError {
    /// A mandatory argument is absent or null.
    #[error("'{name}' cannot be null")]
    MissingArgument {
        /// Name of the argument.
        name: String,
    },

    /// An argument has the wrong shape.
    #[error("'{name}' needs to be {expected}, got {found}")]
    InvalidType {
        /// Name of the argument.
        name: String,
        /// Description of the accepted type.
        expected: &'static str,
        /// Description of the received type.
        found: &'static str,
    },
}

impl PrefixTrieError {
    /// Shorthand for [`PrefixTrieError::MissingArgument`].
    pub fn missing(name: impl Into<String>) -> Self {
        Self::MissingArgument { name: name.into() }
    }

    /// Shorthand for [`PrefixTrieError::InvalidType`].
    pub fn invalid_type(name: impl Into<String>, expected: &'static str, found: &'static str) -> Self {
        Self::InvalidType {
            name: name.into(),
            expected,
            found,
        }
    }

    /// Stable machine-readable name of the error kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MissingArgument { .. } => "missing_argument",
            Self::InvalidType { .. } => "invalid_type",
        }
    }
}

/// Result type for prefix trie argument handling.
pub type PrefixTrieResult<T> = Result<T, PrefixTrieError>;
