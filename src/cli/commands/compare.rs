//! Compare command - evaluate loose/strict equality of two operands

use std::path::Path;

use tdd_assert::output::{AssertionOutcome, CompareResult, OutputMode};
use tdd_assert::{Assert, Value};

use super::load_config;
use crate::cli::app::EqualityAssertion;

/// Parse an operand: `undefined`, a JSON literal, or else a raw string
pub fn parse_operand(text: &str) -> Value {
    if text == "undefined" {
        return Value::Undefined;
    }
    serde_json::from_str::<serde_json::Value>(text)
        .map_or_else(|_| Value::from(text), Value::from)
}

/// Compare two operands and optionally assert on them
pub fn compare(
    left: &str,
    right: &str,
    assertion: Option<EqualityAssertion>,
    message: Option<&str>,
    config_path: Option<&Path>,
    output_mode: OutputMode,
) -> anyhow::Result<()> {
    let left = parse_operand(left);
    let right = parse_operand(right);
    log::debug!("comparing {} {left} with {} {right}", left.kind(), right.kind());

    let mut result = CompareResult::new(&left, &right);

    let failure = match assertion {
        Some(which) => {
            let (config, _) = load_config(config_path)?;
            let engine = Assert::with_config(&config);
            let outcome = match which {
                EqualityAssertion::Equal => engine.equal(&left, &right, message),
                EqualityAssertion::NotEqual => engine.not_equal(&left, &right, message),
                EqualityAssertion::StrictEqual => engine.strict_equal(&left, &right, message),
                EqualityAssertion::NotStrictEqual => {
                    engine.not_strict_equal(&left, &right, message)
                }
            };
            result.assertion = Some(AssertionOutcome {
                name: which.name().to_string(),
                passed: outcome.is_ok(),
                message: outcome.as_ref().err().map(ToString::to_string),
            });
            outcome.err()
        }
        None => None,
    };

    result.render(output_mode);

    match failure {
        Some(err) => Err(err.into()),
        None => Ok(()),
    }
}
