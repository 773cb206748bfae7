//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use colored::Colorize;
use serde::Serialize;

use crate::config::Config;
use crate::value::{Value, loosely_equal, strictly_equal};

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Description of one operand
#[derive(Debug, Serialize)]
pub struct Operand {
    /// String form of the value
    pub display: String,
    /// Kind name (`number`, `string`, ...)
    pub kind: String,
    /// Whether the value is truthy
    pub truthy: bool,
    /// Numeric value, `None` for objects and for `NaN`
    pub number: Option<f64>,
}

impl From<&Value> for Operand {
    fn from(value: &Value) -> Self {
        Self {
            display: value.to_string(),
            kind: value.kind().to_string(),
            truthy: value.is_truthy(),
            number: value.to_number().filter(|n| !n.is_nan()),
        }
    }
}

/// Result of comparing two values
#[derive(Debug, Serialize)]
pub struct CompareResult {
    /// Left operand
    pub left: Operand,
    /// Right operand
    pub right: Operand,
    /// Loose equality outcome
    pub loose: bool,
    /// Strict equality outcome
    pub strict: bool,
    /// Assertion that was evaluated, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assertion: Option<AssertionOutcome>,
}

/// Outcome of an assertion evaluated by the CLI
#[derive(Debug, Serialize)]
pub struct AssertionOutcome {
    /// Assertion name (e.g., "strict-equal")
    pub name: String,
    /// Whether it passed
    pub passed: bool,
    /// Failure message when it did not pass
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl CompareResult {
    /// Compare two values
    #[must_use]
    pub fn new(left: &Value, right: &Value) -> Self {
        Self {
            left: left.into(),
            right: right.into(),
            loose: loosely_equal(left, right),
            strict: strictly_equal(left, right),
            assertion: None,
        }
    }

    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        for (label, op) in [("left", &self.left), ("right", &self.right)] {
            println!("{label:>6}: {} ({}, {})", op.display, op.kind, truthy_label(op.truthy));
        }
        println!();
        println!("  loose: {}", yes_no(self.loose));
        println!(" strict: {}", yes_no(self.strict));

        if let Some(outcome) = &self.assertion {
            println!();
            if outcome.passed {
                println!("{} {}", "PASS".green().bold(), outcome.name);
            } else {
                println!(
                    "{} {}: {}",
                    "FAIL".red().bold(),
                    outcome.name,
                    outcome.message.as_deref().unwrap_or_default()
                );
            }
        }
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}

fn yes_no(flag: bool) -> colored::ColoredString {
    if flag { "yes".green() } else { "no".red() }
}

const fn truthy_label(truthy: bool) -> &'static str {
    if truthy { "truthy" } else { "falsy" }
}

/// Result of formatting a message template
#[derive(Debug, Serialize)]
pub struct FormatResult {
    /// The template
    pub template: String,
    /// The formatted message
    pub message: String,
}

impl FormatResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => println!("{}", self.message),
            OutputMode::Json => {
                println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
            }
        }
    }
}

/// Effective configuration and where it came from
#[derive(Debug, Serialize)]
pub struct ConfigResult {
    /// Config file that was loaded, `None` for defaults
    pub source: Option<String>,
    /// The effective config
    pub config: Config,
}

impl ConfigResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => {
                println!("# source: {}", self.source.as_deref().unwrap_or("(defaults)"));
                print!("{}", self.config.to_toml_string().unwrap_or_default());
            }
            OutputMode::Json => {
                println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
            }
        }
    }
}
