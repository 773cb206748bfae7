//! tdd-assert - A minimal assertion library for TDD-style test runners
//!
//! This library provides boolean, equality, and error-throwing assertions that
//! fail with a distinguishable [`AssertionError`], plus an assertion counter
//! that catches test cases which pass without checking anything.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod config;
pub mod engine;
pub mod error;
pub mod format;
pub mod output;
pub mod throws;
pub mod value;

pub use config::Config;
pub use engine::Assert;
pub use error::{AssertResult, AssertionError, ConfigError, ErrorName, PanicError};
pub use format::format_message;
pub use throws::{ErrorType, Expected};
pub use value::{Object, Value, loosely_equal, strictly_equal};
