//! Expectations for error-throwing assertions
//!
//! A callable "throws" when it returns `Err` or, if panics are caught, when it
//! panics. [`Expected`] describes what the raised error must look like.

use std::any::type_name;
use std::borrow::Cow;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};

use crate::error::{ErrorName, PanicError};

/// Identifies an error type that a raised error must be an instance of
#[derive(Clone)]
pub struct ErrorType {
    name: Option<Cow<'static, str>>,
    repr: &'static str,
    matches: fn(&anyhow::Error) -> bool,
}

fn is_instance<E>(err: &anyhow::Error) -> bool
where
    E: fmt::Display + fmt::Debug + Send + Sync + 'static,
{
    err.is::<E>()
}

impl ErrorType {
    /// Error type `E`, shown by its Rust type path
    #[must_use]
    pub fn of<E>() -> Self
    where
        E: fmt::Display + fmt::Debug + Send + Sync + 'static,
    {
        Self {
            name: None,
            repr: type_name::<E>(),
            matches: is_instance::<E>,
        }
    }

    /// Error type `E`, shown by its declared [`ErrorName::NAME`]
    #[must_use]
    pub fn declared<E>() -> Self
    where
        E: ErrorName + fmt::Display + fmt::Debug + Send + Sync + 'static,
    {
        Self::of::<E>().named(E::NAME)
    }

    /// Override the display name
    #[must_use]
    pub fn named(mut self, name: impl Into<Cow<'static, str>>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Declared name if present, otherwise the type path
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(self.repr)
    }

    /// Whether `err` is an instance of this type
    ///
    /// Sees through context added with `anyhow::Context`.
    #[must_use]
    pub fn matches(&self, err: &anyhow::Error) -> bool {
        (self.matches)(err)
    }
}

impl fmt::Debug for ErrorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ErrorType")
            .field("name", &self.display_name())
            .finish_non_exhaustive()
    }
}

/// What a raised error must satisfy
#[derive(Debug, Clone, Default)]
pub enum Expected {
    /// Any raised error
    #[default]
    Any,
    /// An instance of the given error type
    Type(ErrorType),
    /// An error whose message is exactly this string
    Message(String),
}

impl From<ErrorType> for Expected {
    fn from(value: ErrorType) -> Self {
        Self::Type(value)
    }
}

impl From<&str> for Expected {
    fn from(value: &str) -> Self {
        Self::Message(value.to_string())
    }
}

impl From<String> for Expected {
    fn from(value: String) -> Self {
        Self::Message(value)
    }
}

impl<T: Into<Self>> From<Option<T>> for Expected {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Any, Into::into)
    }
}

/// Invoke `method` and return the error it raised, if any
///
/// With `catch_panics`, a panic is converted into a [`PanicError`]; otherwise
/// it keeps unwinding. The panic hook still runs and reports to stderr.
pub(crate) fn capture<F>(method: F, catch_panics: bool) -> Option<anyhow::Error>
where
    F: FnOnce() -> anyhow::Result<()>,
{
    let outcome = if catch_panics {
        panic::catch_unwind(AssertUnwindSafe(method)).unwrap_or_else(|payload| {
            let err = PanicError::from_payload(payload.as_ref());
            log::debug!("caught panic: {err}");
            Err(err.into())
        })
    } else {
        method()
    };

    outcome.err().inspect(|err| log::debug!("callable raised: {err}"))
}
