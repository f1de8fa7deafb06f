//! Protocol module for Niihau.
//!
//! This module exposes the trie operations over JSON requests, one request per
//! line. Arguments arrive untyped, so this is where a missing argument and an
//! argument of the wrong type are told apart.
//!
//! ```
//! use niihau_lib::protocol::TrieHandler;
//!
//! let mut handler = TrieHandler::default();
//! handler.handle_line(r#"{"method": "add_words", "params": {"words": ["Derby", "Dartford"]}}"#);
//!
//! let response = handler.handle_line(r#"{"method": "from_prefix", "params": {"prefix": "d"}, "id": 1}"#);
//! let line = serde_json::to_string(&response).unwrap();
//! assert_eq!(line, r#"{"result":{"matches":["Derby","Dartford"],"next_chars":["e","a"]},"id":1}"#);
//! ```

pub mod args;
pub mod handler;
pub mod types;

pub use handler::{decode_request, TrieHandler};
pub use types::{ErrorCode, ErrorObject, Id, Request, Response};
