// Copyright (c) 2025 Niihau Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Request dispatch against an owned [`PrefixTrie`].

use serde_json::{json, Value};

use super::args::{expect_str, Params};
use super::types::{ErrorObject, Id, Request, Response};
use crate::data_structures::PrefixTrie;
use crate::error::protocol::ProtocolError;
use crate::error::{NiihauError, NiihauResult};

/// Dispatches requests to the trie operations.
///
/// Supported methods:
/// * `add_word` — `word`
/// * `add_words` — `words`
/// * `from_prefix` — `prefix`
/// * `word_exists` — `word`, `ignore_case` (optional)
#[derive(Debug)]
pub struct TrieHandler {
    trie: PrefixTrie,
    default_ignore_case: bool,
}

impl TrieHandler {
    /// Creates a handler around an existing trie.
    pub fn new(trie: PrefixTrie) -> Self {
        Self {
            trie,
            default_ignore_case: true,
        }
    }

    /// Sets the `ignore_case` value used when a request omits it.
    pub fn with_default_ignore_case(mut self, ignore_case: bool) -> Self {
        self.default_ignore_case = ignore_case;
        self
    }

    /// The trie behind this handler.
    pub fn trie(&self) -> &PrefixTrie {
        &self.trie
    }

    /// Decodes one JSON line and handles it.
    pub fn handle_line(&mut self, line: &str) -> Response {
        match decode_request(line) {
            Ok(request) => self.handle(request),
            Err(err) => {
                tracing::debug!(error = %err, "Rejected request line");
                Response::error(Id::Null, ErrorObject::from(&NiihauError::from(err)))
            }
        }
    }

    /// Handles a decoded request.
    pub fn handle(&mut self, request: Request) -> Response {
        let id = request.id.clone().unwrap_or(Id::Null);

        let outcome = request
            .validate()
            .map_err(NiihauError::from)
            .and_then(|()| self.dispatch(&request));

        match outcome {
            Ok(result) => Response::success(id, result),
            Err(err) => {
                tracing::debug!(method = %request.method, %id, error = %err, "Request failed");
                Response::error(id, ErrorObject::from(&err))
            }
        }
    }

    fn dispatch(&mut self, request: &Request) -> NiihauResult<Value> {
        let params = Params::new(request.params.as_ref());

        match request.method.as_str() {
            "add_word" => {
                let word = params.require_str(0, "word")?;
                self.trie.add_word(word);
                Ok(Value::Null)
            }
            "add_words" => {
                let words = params.require_list(0, "words")?;
                // Entries before a bad one stay inserted.
                for (index, entry) in words.iter().enumerate() {
                    let word = expect_str(Some(entry), &format!("words[{index}]"))?;
                    self.trie.add_word(word);
                }
                Ok(json!({ "added": words.len() }))
            }
            "from_prefix" => {
                let prefix = params.require_str(0, "prefix")?;
                Ok(serde_json::to_value(self.trie.from_prefix(prefix))?)
            }
            "word_exists" => {
                let word = params.require_str(0, "word")?;
                let ignore_case = params.optional_bool(1, "ignore_case", self.default_ignore_case)?;
                Ok(Value::Bool(self.trie.word_exists_with_case(word, ignore_case)))
            }
            other => Err(ProtocolError::MethodNotFound(other.to_string()).into()),
        }
    }
}

impl Default for TrieHandler {
    fn default() -> Self {
        Self::new(PrefixTrie::new())
    }
}

/// Parses a request line.
pub fn decode_request(line: &str) -> Result<Request, ProtocolError> {
    let value: Value =
        serde_json::from_str(line).map_err(|e| ProtocolError::Parse(e.to_string()))?;

    if !value.is_object() {
        return Err(ProtocolError::InvalidRequest(
            "Request must be a JSON object".to_string(),
        ));
    }

    serde_json::from_value(value).map_err(|e| ProtocolError::InvalidRequest(e.to_string()))
}
