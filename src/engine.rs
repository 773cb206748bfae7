//! The assertion engine
//!
//! [`Assert`] owns the assertion counter and exposes every assertion. A test
//! adapter creates one per test run (or per case) and calls [`Assert::reset`]
//! between cases, or uses [`Assert::run_case`] which does both.
//!
//! Every assertion goes through one primitive that bumps the counter whether
//! or not the condition holds, so [`Assert::asserted`] can tell a body that
//! checked something from one that silently passed.
//!
//! # Examples
//!
//! ```
//! use tdd_assert::Assert;
//!
//! let a = Assert::new();
//! a.equal(5, "5", None).unwrap();
//! assert!(a.strict_equal(5, "5", None).is_err());
//!
//! a.throws(|| Err(anyhow::anyhow!("Foo")), "Foo", None).unwrap();
//! a.does_not_throw(|| Ok(()), None).unwrap();
//!
//! a.asserted(None).unwrap();
//! assert_eq!(a.count(), 4);
//! ```

use std::cell::Cell;
use std::collections::HashMap;

use crate::config::{AssertConfig, Config};
use crate::error::{AssertResult, AssertionError};
use crate::format::format_message;
use crate::throws::{Expected, capture};
use crate::value::{Value, loosely_equal, strictly_equal};

const MSG_TRUTHY: &str = "Expected value to be truthy.";
const MSG_ASSERTED: &str = "Expected one or more assertions.";
const MSG_TRUE: &str = "Expected value to be true.";
const MSG_FALSE: &str = "Expected value to be false.";
const MSG_EQUAL: &str = "Expected values to be equal.";
const MSG_NOT_EQUAL: &str = "Expected values not to be equal.";
const MSG_STRICT_EQUAL: &str = "Expected values to be strictly equal.";
const MSG_NOT_STRICT_EQUAL: &str = "Expected values not to be strictly equal.";
const MSG_THROWN: &str = "Expected error to be thrown.";
const MSG_INSTANCE_OF: &str = "Expected thrown error to be instance of {name}.";
const MSG_ERROR_MESSAGE: &str = "Expected error message to be '{msg}'.";
const MSG_NOT_THROW: &str = "Expected not to throw an error.";

/// Override message if given and non-empty, else the default
fn pick<'a>(message: Option<&'a str>, default: &'a str) -> &'a str {
    message.filter(|m| !m.is_empty()).unwrap_or(default)
}

/// Assertion context holding the assertion counter
///
/// The counter lives in a `Cell`, so assertions take `&self` and a callable
/// handed to [`Assert::throws`] may itself assert on the same instance.
/// `Assert` is not `Sync`; use one instance per test thread.
#[derive(Debug, Default)]
pub struct Assert {
    count: Cell<usize>,
    config: AssertConfig,
}

impl Assert {
    /// Create an engine with default settings and a zero counter
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an engine with the given configuration
    #[must_use]
    pub const fn with_config(config: &Config) -> Self {
        Self {
            count: Cell::new(0),
            config: config.assert,
        }
    }

    /// Active settings
    #[must_use]
    pub const fn config(&self) -> &AssertConfig {
        &self.config
    }

    /// Assertions evaluated since the last reset, failed ones included
    #[must_use]
    pub const fn count(&self) -> usize {
        self.count.get()
    }

    fn check(&self, condition: bool, message: &str) -> AssertResult {
        let n = self.count.get() + 1;
        self.count.set(n);
        log::trace!("assertion #{n}: {}", if condition { "pass" } else { "fail" });

        if condition {
            Ok(())
        } else {
            log::debug!("assertion failed: {message}");
            Err(AssertionError::new(message))
        }
    }

    // === Assertion tracking ===

    /// Fails if no assertions were made since the last reset
    pub fn asserted(&self, message: Option<&str>) -> AssertResult {
        self.check(self.count.get() > 0, pick(message, MSG_ASSERTED))
    }

    /// Set the counter back to zero
    pub fn reset(&self) {
        log::trace!("reset assertion count (was {})", self.count.get());
        self.count.set(0);
    }

    // === Basic asserts ===

    /// Fails unless `value` is truthy
    pub fn ok(&self, value: impl Into<Value>, message: Option<&str>) -> AssertResult {
        self.check(value.into().is_truthy(), pick(message, MSG_TRUTHY))
    }

    /// Always fails with `message`
    ///
    /// Does not count as an assertion.
    pub fn fail(&self, message: &str) -> AssertResult {
        log::debug!("explicit failure: {message}");
        Err(AssertionError::new(message))
    }

    // === Boolean asserts ===

    /// Fails unless `value` is exactly `true`
    pub fn is_true(&self, value: impl Into<Value>, message: Option<&str>) -> AssertResult {
        let value: Value = value.into();
        let holds = matches!(value, Value::Bool(true));
        self.check(holds, pick(message, MSG_TRUE))
    }

    /// Fails unless `value` is exactly `false`
    pub fn is_false(&self, value: impl Into<Value>, message: Option<&str>) -> AssertResult {
        let value: Value = value.into();
        let holds = matches!(value, Value::Bool(false));
        self.check(holds, pick(message, MSG_FALSE))
    }

    // === Equality asserts ===

    /// Fails unless the values are loosely equal
    pub fn equal(
        &self,
        actual: impl Into<Value>,
        expected: impl Into<Value>,
        message: Option<&str>,
    ) -> AssertResult {
        let holds = loosely_equal(&actual.into(), &expected.into());
        self.check(holds, pick(message, MSG_EQUAL))
    }

    /// Fails if the values are loosely equal
    pub fn not_equal(
        &self,
        actual: impl Into<Value>,
        expected: impl Into<Value>,
        message: Option<&str>,
    ) -> AssertResult {
        let holds = !loosely_equal(&actual.into(), &expected.into());
        self.check(holds, pick(message, MSG_NOT_EQUAL))
    }

    /// Fails unless the values are strictly equal
    pub fn strict_equal(
        &self,
        actual: impl Into<Value>,
        expected: impl Into<Value>,
        message: Option<&str>,
    ) -> AssertResult {
        let holds = strictly_equal(&actual.into(), &expected.into());
        self.check(holds, pick(message, MSG_STRICT_EQUAL))
    }

    /// Fails if the values are strictly equal
    pub fn not_strict_equal(
        &self,
        actual: impl Into<Value>,
        expected: impl Into<Value>,
        message: Option<&str>,
    ) -> AssertResult {
        let holds = !strictly_equal(&actual.into(), &expected.into());
        self.check(holds, pick(message, MSG_NOT_STRICT_EQUAL))
    }

    // === Error asserts ===

    /// Fails unless `method` raises an error matching `expected`
    ///
    /// Raising nothing fails without counting. A type or message expectation
    /// counts as one assertion; [`Expected::Any`] counts nothing.
    pub fn throws<F>(
        &self,
        method: F,
        expected: impl Into<Expected>,
        message: Option<&str>,
    ) -> AssertResult
    where
        F: FnOnce() -> anyhow::Result<()>,
    {
        let Some(ex) = capture(method, self.config.catch_panics) else {
            return self.fail(pick(message, MSG_THROWN));
        };

        match expected.into() {
            Expected::Type(error_type) => {
                let default = format_message(
                    MSG_INSTANCE_OF,
                    &HashMap::from([("name", error_type.display_name())]),
                );
                self.check(error_type.matches(&ex), pick(message, &default))
            }
            Expected::Message(text) => {
                let default = format_message(MSG_ERROR_MESSAGE, &HashMap::from([("msg", &text)]));
                self.strict_equal(ex.to_string(), &text, Some(pick(message, &default)))
            }
            Expected::Any => Ok(()),
        }
    }

    /// Fails if `method` raises an error
    pub fn does_not_throw<F>(&self, method: F, message: Option<&str>) -> AssertResult
    where
        F: FnOnce() -> anyhow::Result<()>,
    {
        match capture(method, self.config.catch_panics) {
            Some(_) => self.fail(pick(message, MSG_NOT_THROW)),
            None => Ok(()),
        }
    }

    // === Test-case adapter ===

    /// Run one test case body against a freshly reset counter
    ///
    /// Errors from `body` propagate unchanged. When `require_assertions` is
    /// set, a body that made no assertions fails with
    /// "Expected one or more assertions.".
    pub fn run_case<F>(&self, body: F) -> anyhow::Result<()>
    where
        F: FnOnce(&Self) -> anyhow::Result<()>,
    {
        self.reset();
        body(self)?;
        if self.config.require_assertions {
            self.asserted(None)?;
        }
        Ok(())
    }
}
