//! Engine configuration
//!
//! Settings are read from an optional `tdd-assert.toml`:
//!
//! ```toml
//! [assert]
//! require_assertions = true
//! catch_panics = true
//! ```
//!
//! Every field has a default, so an empty file is a valid config.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Config filename looked up by [`Config::discover`]
pub const CONFIG_FILE: &str = "tdd-assert.toml";

/// Top-level configuration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Assertion engine settings
    #[serde(default)]
    pub assert: AssertConfig,
}

/// Assertion engine settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssertConfig {
    /// `run_case` fails a body that made no assertions
    #[serde(default = "default_true")]
    pub require_assertions: bool,
    /// `throws`/`does_not_throw` treat a panic as a raised error
    ///
    /// The process panic hook is left in place, so a captured panic still
    /// prints its "thread ... panicked at" report to stderr.
    #[serde(default = "default_true")]
    pub catch_panics: bool,
}

const fn default_true() -> bool {
    true
}

impl Default for AssertConfig {
    fn default() -> Self {
        Self {
            require_assertions: default_true(),
            catch_panics: default_true(),
        }
    }
}

impl Config {
    /// Parse config from TOML text
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Load config from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&text)?;
        log::debug!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Load `tdd-assert.toml` from `dir`, or defaults if there is none
    pub fn discover(dir: &Path) -> Result<Self, ConfigError> {
        let path = dir.join(CONFIG_FILE);
        if path.is_file() {
            Self::load(&path)
        } else {
            log::debug!("no {CONFIG_FILE} in {}, using defaults", dir.display());
            Ok(Self::default())
        }
    }

    /// Serialize to TOML text
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string(self)?)
    }
}
