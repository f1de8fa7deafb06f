//! Word list configuration module.
//!
//! This module defines where the word list registered at startup comes from.

use super::{ConfigResult, Validate};
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Word list configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WordsConfig {
    /// Word list loaded at startup (one word per line); none starts empty
    pub path: Option<PathBuf>,
}

impl Validate for WordsConfig {
    fn validate(&self) -> ConfigResult<()> {
        if let Some(path) = &self.path {
            if path.as_os_str().is_empty() {
                return Err(ConfigError::ValidationError(
                    "words.path cannot be empty".to_string(),
                ));
            }
        }
        Ok(())
    }
}
