//! Tests for the error module.
//!
//! This module contains tests for error handling and error types.

use crate::data_structures::PrefixTrieError;
use crate::error::protocol::ProtocolError;
use crate::error::{
    report_error, set_error_reporter, ErrorContext, ErrorReporter, NiihauError,
    TracingErrorReporter,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Test that error context can be created and displayed properly.
#[test]
fn test_error_context_display() {
    let error = NiihauError::Custom("test error".to_string());
    let context = ErrorContext::new(error, "test_component").with_details("additional details");

    let display_string = format!("{context}");
    assert!(display_string.contains("test error"));
    assert!(display_string.contains("test_component"));
    assert!(display_string.contains("additional details"));
}

/// Test that nested errors convert and display correctly.
#[test]
fn test_nested_errors() {
    let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let niihau_error = NiihauError::from(io_error);
    assert!(format!("{niihau_error}").contains("file not found"));

    let trie_error: NiihauError = PrefixTrieError::missing("prefix").into();
    assert_eq!(trie_error.to_string(), "Trie error: 'prefix' cannot be null");

    let protocol_error: NiihauError = ProtocolError::MethodNotFound("remove".into()).into();
    assert_eq!(
        protocol_error.to_string(),
        "Protocol error: Method not found: remove"
    );
}

/// Mock error reporter for testing.
#[derive(Debug, Default)]
struct MockErrorReporter {
    reported_count: AtomicUsize,
}

impl ErrorReporter for MockErrorReporter {
    fn report(&self, _context: ErrorContext) {
        self.reported_count.fetch_add(1, Ordering::SeqCst);
    }
}

/// Test that the global error reporter works correctly.
#[test]
fn test_global_error_reporter() {
    let reporter = Arc::new(MockErrorReporter::default());
    set_error_reporter(reporter.clone());

    let context = ErrorContext::new(NiihauError::Custom("test error".to_string()), "test_component");
    report_error(context);

    assert!(reporter.reported_count.load(Ordering::SeqCst) >= 1);
}

/// Test that the default tracing error reporter can be used.
#[test]
fn test_tracing_error_reporter() {
    let reporter = TracingErrorReporter;
    let context = ErrorContext::new(NiihauError::Custom("test error".to_string()), "test_component");

    // Just make sure this doesn't panic
    reporter.report(context);
}
