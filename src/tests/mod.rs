//! Test modules for Niihau.
//!
//! This module contains the crate-level testing infrastructure:
//! - Scenario tests for the prefix trie over fixed word sets
//! - Property-based tests using proptest
//! - Configuration and error handling tests
//! - Test fixtures and utilities

pub mod error_tests;
pub mod prefix_trie_tests;

pub use test_utils::{word_strategy, words_strategy, TestFixture, STATIONS};
