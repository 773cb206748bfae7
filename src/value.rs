//! Dynamic values compared by the equality assertions
//!
//! A [`Value`] is one of a closed set of kinds: undefined, null, boolean,
//! number, string, or an object with reference identity. Loose equality
//! reproduces the coercion rules of dynamically typed test code explicitly
//! instead of relying on any host operator.
//!
//! # Examples
//!
//! ```
//! use tdd_assert::{Value, loosely_equal, strictly_equal};
//!
//! assert!(loosely_equal(&Value::from(5), &Value::from("5")));
//! assert!(!strictly_equal(&Value::from(5), &Value::from("5")));
//! assert!(loosely_equal(&Value::Null, &Value::Undefined));
//! ```

use std::fmt;
use std::rc::Rc;

/// String form of a plain object when converted to a primitive
pub const OBJECT_TAG: &str = "[object Object]";

/// An object with reference identity
///
/// Clones share identity; every constructor creates a distinct one. Each
/// object carries the string it converts to when compared with a primitive.
#[derive(Debug, Clone)]
pub struct Object(Rc<str>);

impl Object {
    /// Create a plain object with a fresh identity
    #[must_use]
    pub fn new() -> Self {
        Self::with_primitive(OBJECT_TAG)
    }

    /// Create an object that converts to `primitive`
    ///
    /// Arrays use this with their elements joined by `,`.
    #[must_use]
    pub fn with_primitive(primitive: impl Into<String>) -> Self {
        Self(Rc::from(primitive.into()))
    }

    /// String the object converts to when compared with a primitive
    #[must_use]
    pub fn primitive(&self) -> &str {
        &self.0
    }

    /// Whether two handles refer to the same object
    #[must_use]
    pub fn same(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Default for Object {
    fn default() -> Self {
        Self::new()
    }
}

/// A value handed to an assertion
#[derive(Debug, Clone, Default)]
pub enum Value {
    /// The absent-value marker
    #[default]
    Undefined,
    /// The explicit null marker
    Null,
    /// A boolean
    Bool(bool),
    /// A number (integers are represented exactly up to 2^53)
    Number(f64),
    /// A string
    String(String),
    /// An object, compared by identity
    Object(Object),
}

impl Value {
    /// Name of the value's kind
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Undefined => "undefined",
            Self::Null => "null",
            Self::Bool(_) => "boolean",
            Self::Number(_) => "number",
            Self::String(_) => "string",
            Self::Object(_) => "object",
        }
    }

    /// Whether the value counts as true in a boolean context
    ///
    /// Falsy: undefined, null, false, 0, -0, NaN and the empty string.
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Undefined | Self::Null => false,
            Self::Bool(b) => *b,
            Self::Number(n) => *n != 0.0 && !n.is_nan(),
            Self::String(s) => !s.is_empty(),
            Self::Object(_) => true,
        }
    }

    /// Numeric value of a primitive, `None` for objects
    #[must_use]
    pub fn to_number(&self) -> Option<f64> {
        match self {
            Self::Undefined => Some(f64::NAN),
            Self::Null => Some(0.0),
            Self::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
            Self::Number(n) => Some(*n),
            Self::String(s) => Some(string_to_number(s)),
            Self::Object(_) => None,
        }
    }
}

/// Strict equality: same kind and same value, no coercion
///
/// Numbers follow IEEE comparison, so `NaN` never equals itself and
/// `0` equals `-0`. Objects are equal only to themselves.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn strictly_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Undefined, Value::Undefined) | (Value::Null, Value::Null) => true,
        (Value::Bool(x), Value::Bool(y)) => x == y,
        (Value::Number(x), Value::Number(y)) => x == y,
        (Value::String(x), Value::String(y)) => x == y,
        (Value::Object(x), Value::Object(y)) => x.same(y),
        _ => false,
    }
}

/// Loose equality with type coercion between primitives
///
/// An object compared with a number or string is converted to its
/// [primitive](Object::primitive) string first.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn loosely_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        _ if a.kind() == b.kind() => strictly_equal(a, b),
        (Value::Null | Value::Undefined, Value::Null | Value::Undefined) => true,
        (Value::Null | Value::Undefined, _) | (_, Value::Null | Value::Undefined) => false,
        (Value::Number(n), Value::String(s)) | (Value::String(s), Value::Number(n)) => {
            *n == string_to_number(s)
        }
        (Value::Bool(x), other) | (other, Value::Bool(x)) => {
            loosely_equal(&Value::Number(if *x { 1.0 } else { 0.0 }), other)
        }
        (Value::Object(o), prim @ (Value::Number(_) | Value::String(_)))
        | (prim @ (Value::Number(_) | Value::String(_)), Value::Object(o)) => {
            loosely_equal(&Value::String(o.primitive().to_string()), prim)
        }
        _ => false,
    }
}

/// Numeric value of a string
///
/// Surrounding whitespace (see [`is_js_whitespace`]) is ignored and an empty
/// string is `0`. Accepts
/// decimal literals, `Infinity` with an optional sign, and unsigned
/// `0x`/`0o`/`0b` literals. Anything else is `NaN`.
fn string_to_number(s: &str) -> f64 {
    let s = s.trim_matches(is_js_whitespace);
    if s.is_empty() {
        return 0.0;
    }

    match s {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }

    for (prefix, radix) in [("0x", 16), ("0X", 16), ("0o", 8), ("0O", 8), ("0b", 2), ("0B", 2)] {
        if let Some(digits) = s.strip_prefix(prefix) {
            return parse_radix(digits, radix);
        }
    }

    // Rust accepts "inf" and "nan" spellings that are not numeric literals here
    if s.chars().any(|c| c.is_ascii_alphabetic() && c != 'e' && c != 'E') {
        return f64::NAN;
    }
    s.parse::<f64>().unwrap_or(f64::NAN)
}

/// Whitespace and line terminators trimmed from numeric strings
///
/// Narrower than [`char::is_whitespace`]: U+0085 is not included, U+FEFF is.
const fn is_js_whitespace(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n'
            | '\u{000B}'
            | '\u{000C}'
            | '\r'
            | ' '
            | '\u{00A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

fn parse_radix(digits: &str, radix: u32) -> f64 {
    if digits.is_empty() {
        return f64::NAN;
    }
    digits
        .chars()
        .try_fold(0.0_f64, |acc, c| {
            c.to_digit(radix).map(|d| acc.mul_add(f64::from(radix), f64::from(d)))
        })
        .unwrap_or(f64::NAN)
}

/// Shortest string that reads back as `n`
///
/// Magnitudes of at least 1e21 or below 1e-6 use exponent form with an
/// explicit exponent sign, e.g. `1e+21` and `1.5e-7`.
fn number_to_string(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n.is_infinite() {
        let text = if n > 0.0 { "Infinity" } else { "-Infinity" };
        text.to_string()
    } else if n == 0.0 {
        // covers -0
        "0".to_string()
    } else if n.abs() >= 1e21 || n.abs() < 1e-6 {
        let text = format!("{n:e}");
        match text.split_once('e') {
            Some((mantissa, exp)) if !exp.starts_with('-') => format!("{mantissa}e+{exp}"),
            _ => text,
        }
    } else {
        n.to_string()
    }
}

/// Element string form used when joining an array
fn join_element(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::Null => String::new(),
        serde_json::Value::Bool(b) => b.to_string(),
        serde_json::Value::Number(n) => number_to_string(n.as_f64().unwrap_or(f64::NAN)),
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Array(items) => join_array(items),
        serde_json::Value::Object(_) => OBJECT_TAG.to_string(),
    }
}

fn join_array(items: &[serde_json::Value]) -> String {
    items.iter().map(join_element).collect::<Vec<_>>().join(",")
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Undefined => write!(f, "undefined"),
            Self::Null => write!(f, "null"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Number(n) => write!(f, "{}", number_to_string(*n)),
            Self::String(s) => write!(f, "{s}"),
            Self::Object(o) => write!(f, "{}", o.primitive()),
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

macro_rules! impl_from_lossless {
    ($($t:ty),*) => {
        $(impl From<$t> for Value {
            fn from(value: $t) -> Self {
                Self::Number(f64::from(value))
            }
        })*
    };
}

impl_from_lossless!(i8, i16, i32, u8, u16, u32, f32, f64);

macro_rules! impl_from_wide {
    ($($t:ty),*) => {
        $(impl From<$t> for Value {
            #[allow(clippy::cast_precision_loss)]
            fn from(value: $t) -> Self {
                Self::Number(value as f64)
            }
        })*
    };
}

impl_from_wide!(i64, u64, isize, usize);

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<&String> for Value {
    fn from(value: &String) -> Self {
        Self::String(value.clone())
    }
}

impl From<()> for Value {
    fn from((): ()) -> Self {
        Self::Undefined
    }
}

impl From<Object> for Value {
    fn from(value: Object) -> Self {
        Self::Object(value)
    }
}

impl From<&Object> for Value {
    fn from(value: &Object) -> Self {
        Self::Object(value.clone())
    }
}

impl From<&Self> for Value {
    fn from(value: &Self) -> Self {
        value.clone()
    }
}

impl<T: Into<Self>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Self::Null,
            serde_json::Value::Bool(b) => Self::Bool(b),
            serde_json::Value::Number(n) => Self::Number(n.as_f64().unwrap_or(f64::NAN)),
            serde_json::Value::String(s) => Self::String(s),
            serde_json::Value::Array(items) => {
                Self::Object(Object::with_primitive(join_array(&items)))
            }
            serde_json::Value::Object(_) => Self::Object(Object::new()),
        }
    }
}
