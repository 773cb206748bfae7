//! Error types raised by the assertion engine
//!
//! `AssertionError` is the only error produced by a failed assertion.
//! `PanicError` stands in for a panic captured by `throws`/`does_not_throw`,
//! and `ConfigError` covers loading configuration from disk.

use std::path::PathBuf;

use thiserror::Error;

/// A declared display name for an error type
///
/// Used by [`ErrorType::declared`](crate::ErrorType::declared) to build the
/// "Expected thrown error to be instance of {name}." message.
pub trait ErrorName {
    /// The display name of the error type
    const NAME: &'static str;
}

/// Raised by every failed assertion and by [`Assert::fail`](crate::Assert::fail)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct AssertionError {
    message: String,
}

impl AssertionError {
    /// Create an assertion error with the given message
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The failure message
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The error's name tag, always `"AssertionError"`
    #[must_use]
    pub const fn name(&self) -> &'static str {
        Self::NAME
    }
}

impl ErrorName for AssertionError {
    const NAME: &'static str = "AssertionError";
}

/// A panic captured while invoking a callable inside `throws`/`does_not_throw`
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct PanicError {
    message: String,
}

impl PanicError {
    /// Create a panic error from a panic message
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Build from a `catch_unwind` payload
    ///
    /// `panic!` payloads are `&'static str` or `String`; anything else gets a
    /// generic message.
    #[must_use]
    pub fn from_payload(payload: &(dyn std::any::Any + Send)) -> Self {
        let message = payload
            .downcast_ref::<&str>()
            .map(|s| (*s).to_string())
            .or_else(|| payload.downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "panic with non-string payload".to_string());
        Self { message }
    }

    /// The panic message
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl ErrorName for PanicError {
    const NAME: &'static str = "PanicError";
}

/// Errors that can occur when loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("failed to read config {path}: {source}")]
    Io {
        /// Path that was read
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid TOML or has wrong field types
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    /// Config could not be serialized
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Result of a single assertion
pub type AssertResult = Result<(), AssertionError>;
