//! # Guard configuration

use crate::error::{self, Result};
use serde::{Deserialize, Serialize};

/// Settings for a [`LibraryGuard`](crate::LibraryGuard)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GuardConfig {
    /// Name of the guarded library, attached to log events
    pub library: String,
    /// Allow `initialize` again after `teardown`
    pub allow_reinitialize: bool,
}

impl Default for GuardConfig {
    fn default() -> Self {
        Self {
            library: "library".to_string(),
            allow_reinitialize: false,
        }
    }
}

impl GuardConfig {
    /// Create a config for the named library
    pub fn new(library: impl Into<String>) -> Self {
        Self {
            library: library.into(),
            ..Self::default()
        }
    }

    /// Builder: allow re-initialization after teardown
    pub fn with_reinitialize(mut self, allow: bool) -> Self {
        self.allow_reinitialize = allow;
        self
    }

    /// Parse a config from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(error::config_invalid)
    }
}
