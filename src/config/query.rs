//! Query configuration module.

use super::{ConfigResult, Validate};
use serde::{Deserialize, Serialize};

/// Defaults applied to queries that do not say otherwise.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryConfig {
    /// Whether existence checks ignore case unless told otherwise
    pub ignore_case: bool,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self { ignore_case: true }
    }
}

impl Validate for QueryConfig {
    fn validate(&self) -> ConfigResult<()> {
        Ok(())
    }
}
