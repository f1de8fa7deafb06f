// Copyright (c) 2025 Niihau Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Argument extraction for untyped request parameters.
//!
//! A null or absent argument is reported as
//! [`PrefixTrieError::MissingArgument`]; the type is only checked once a value
//! is present.

use serde_json::Value;

use crate::data_structures::{PrefixTrieError, PrefixTrieResult};

/// Borrowed view over request parameters, named or positional.
#[derive(Debug, Clone, Copy)]
pub struct Params<'a> {
    inner: Option<&'a Value>,
}

impl<'a> Params<'a> {
    /// Wraps the `params` member of a request.
    pub fn new(inner: Option<&'a Value>) -> Self {
        Self { inner }
    }

    /// Looks an argument up by name in an object, or by position in an array.
    pub fn get(&self, position: usize, name: &str) -> Option<&'a Value> {
        match self.inner {
            Some(Value::Object(map)) => map.get(name),
            Some(Value::Array(items)) => items.get(position),
            _ => None,
        }
    }

    /// A mandatory string argument.
    pub fn require_str(&self, position: usize, name: &str) -> PrefixTrieResult<&'a str> {
        expect_str(self.get(position, name), name)
    }

    /// A mandatory list argument.
    pub fn require_list(&self, position: usize, name: &str) -> PrefixTrieResult<&'a [Value]> {
        match self.get(position, name) {
            None | Some(Value::Null) => Err(PrefixTrieError::missing(name)),
            Some(Value::Array(items)) => Ok(items.as_slice()),
            Some(other) => Err(PrefixTrieError::invalid_type(name, "a list", type_name(other))),
        }
    }

    /// An optional boolean argument; absent or null yields `default`.
    pub fn optional_bool(&self, position: usize, name: &str, default: bool) -> PrefixTrieResult<bool> {
        match self.get(position, name) {
            None | Some(Value::Null) => Ok(default),
            Some(Value::Bool(flag)) => Ok(*flag),
            Some(other) => Err(PrefixTrieError::invalid_type(name, "a boolean", type_name(other))),
        }
    }
}

/// Checks that `value` is present and a string.
pub fn expect_str<'a>(value: Option<&'a Value>, name: &str) -> PrefixTrieResult<&'a str> {
    match value {
        None | Some(Value::Null) => Err(PrefixTrieError::missing(name)),
        Some(Value::String(s)) => Ok(s.as_str()),
        Some(other) => Err(PrefixTrieError::invalid_type(name, "a string", type_name(other))),
    }
}

/// Human-readable JSON type, used in error messages.
pub fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
