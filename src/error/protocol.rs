//! Protocol error module.
//!
//! This module defines error types that may occur while decoding and
//! dispatching requests against the trie.

use thiserror::Error;

/// Errors that can occur during protocol operations.
#[derive(Error, Debug)]
pub enum ProtocolError {
    /// The line is not valid JSON.
    #[error("Parse error: {0}")]
    Parse(String),

    /// The JSON is not a valid request object.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// The request names an unknown method.
    #[error("Method not found: {0}")]
    MethodNotFound(String),
}
