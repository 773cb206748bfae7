//! Format command - fill a message template from key=value pairs

use std::collections::HashMap;

use anyhow::Context;
use tdd_assert::format_message;
use tdd_assert::output::{FormatResult, OutputMode};

/// Format `template` with values from `pairs`
pub fn format(template: &str, pairs: &[String], output_mode: OutputMode) -> anyhow::Result<()> {
    let data = pairs
        .iter()
        .map(|pair| {
            pair.split_once('=')
                .with_context(|| format!("expected key=value, got '{pair}'"))
        })
        .collect::<anyhow::Result<HashMap<_, _>>>()?;

    let result = FormatResult {
        template: template.to_string(),
        message: format_message(template, &data),
    };
    result.render(output_mode);
    Ok(())
}
