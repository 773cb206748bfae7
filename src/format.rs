//! Placeholder formatting for default failure messages
//!
//! Templates use `{name}` placeholders that are looked up in a map. There is
//! no escaping of literal braces and no nesting.

use std::collections::HashMap;
use std::fmt::Display;
use std::hash::BuildHasher;
use std::sync::LazyLock;

use regex::{Captures, Regex};

/// Replacement text for a placeholder with no entry in the map
pub const MISSING: &str = "undefined";

static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{(.*?)\}").expect("placeholder pattern is valid"));

/// Replace every `{name}` in `text` with the string form of `data[name]`
///
/// # Examples
///
/// ```
/// use std::collections::HashMap;
/// use tdd_assert::format_message;
///
/// let data = HashMap::from([("name", "TypeError")]);
/// assert_eq!(
///     format_message("Expected thrown error to be instance of {name}.", &data),
///     "Expected thrown error to be instance of TypeError."
/// );
/// ```
#[must_use]
pub fn format_message<V: Display, S: BuildHasher>(
    text: &str,
    data: &HashMap<&str, V, S>,
) -> String {
    PLACEHOLDER
        .replace_all(text, |caps: &Captures<'_>| {
            data.get(&caps[1])
                .map_or_else(|| MISSING.to_string(), ToString::to_string)
        })
        .into_owned()
}
