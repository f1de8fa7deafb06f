// Copyright (c) 2025 Niihau Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Request and response types for the trie protocol.
//!
//! The envelope follows JSON-RPC 2.0 conventions (method, params, id, error
//! object with numeric code) without requiring the `jsonrpc` version field.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

use crate::data_structures::PrefixTrieError;
use crate::error::protocol::ProtocolError;
use crate::error::NiihauError;

/// Request identifier, echoed back in the response.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(untagged)]
pub enum Id {
    /// String identifier
    String(String),

    /// Numeric identifier
    Number(i64),

    /// Null identifier, also used when the request could not be read
    Null,
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Id::String(s) => write!(f, "{}", s),
            Id::Number(n) => write!(f, "{}", n),
            Id::Null => write!(f, "null"),
        }
    }
}

/// A request to run one trie operation.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Request {
    /// Name of the operation
    pub method: String,

    /// Arguments, either named (object) or positional (array)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub params: Option<Value>,

    /// Request identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Id>,
}

impl Request {
    /// Creates a new request.
    pub fn new(method: impl Into<String>, params: Option<Value>, id: Option<Id>) -> Self {
        Self {
            method: method.into(),
            params,
            id,
        }
    }

    /// Checks the envelope before dispatch.
    pub fn validate(&self) -> Result<(), ProtocolError> {
        if self.method.is_empty() {
            return Err(ProtocolError::InvalidRequest("Method cannot be empty".to_string()));
        }

        if let Some(ref params) = self.params {
            if !params.is_object() && !params.is_array() && !params.is_null() {
                return Err(ProtocolError::InvalidRequest(
                    "Params must be an object, array, or null".to_string(),
                ));
            }
        }

        Ok(())
    }
}

/// Numeric error codes carried in [`ErrorObject::code`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Invalid JSON was received.
    ParseError = -32700,

    /// The JSON is not a valid request object.
    InvalidRequest = -32600,

    /// The method does not exist.
    MethodNotFound = -32601,

    /// Missing or mistyped argument.
    InvalidParams = -32602,

    /// Internal error.
    InternalError = -32603,
}

impl ErrorCode {
    /// Returns the integer error code.
    pub fn code(&self) -> i32 {
        *self as i32
    }
}

/// Error object returned in place of a result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorObject {
    /// The error code
    pub code: i32,

    /// A short description of the error
    pub message: String,

    /// Additional information about the error
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl ErrorObject {
    /// Creates a new error object.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code: code.code(),
            message: message.into(),
            data: None,
        }
    }

    /// Creates a new error object with additional data.
    pub fn with_data(code: ErrorCode, message: impl Into<String>, data: Value) -> Self {
        Self {
            code: code.code(),
            message: message.into(),
            data: Some(data),
        }
    }
}

impl From<&PrefixTrieError> for ErrorObject {
    fn from(err: &PrefixTrieError) -> Self {
        Self::with_data(
            ErrorCode::InvalidParams,
            err.to_string(),
            serde_json::json!({ "kind": err.kind() }),
        )
    }
}

impl From<&NiihauError> for ErrorObject {
    fn from(err: &NiihauError) -> Self {
        match err {
            NiihauError::Trie(trie_err) => trie_err.into(),
            NiihauError::Protocol(ProtocolError::Parse(msg)) => {
                Self::new(ErrorCode::ParseError, msg.clone())
            }
            NiihauError::Protocol(ProtocolError::InvalidRequest(msg)) => {
                Self::new(ErrorCode::InvalidRequest, msg.clone())
            }
            NiihauError::Protocol(ProtocolError::MethodNotFound(method)) => Self::new(
                ErrorCode::MethodNotFound,
                format!("Method not found: {method}"),
            ),
            other => Self::new(ErrorCode::InternalError, other.to_string()),
        }
    }
}

/// Response to a single request. Exactly one of `result` and `error` is set.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Response {
    /// Operation output, if successful
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,

    /// Error, if the operation failed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorObject>,

    /// Identifier of the request this answers
    pub id: Id,
}

impl Response {
    /// Creates a successful response.
    pub fn success(id: Id, result: Value) -> Self {
        Self {
            result: Some(result),
            error: None,
            id,
        }
    }

    /// Creates an error response.
    pub fn error(id: Id, error: ErrorObject) -> Self {
        Self {
            result: None,
            error: Some(error),
            id,
        }
    }

    /// Returns true if this response contains a successful result.
    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }
}
