//! Tests for the error-throwing assertions

use std::any::type_name;

use anyhow::{Context, anyhow};
use tdd_assert::{Assert, AssertionError, Config, ErrorType, Expected, PanicError};

use crate::common::{CustomError, TypeError, err};

fn raise(msg: &str) -> anyhow::Result<()> {
    Err(anyhow!(msg.to_string()))
}

fn type_error(msg: &str) -> anyhow::Result<()> {
    Err(TypeError(msg.to_string()).into())
}

// =============================================================================
// throws()
// =============================================================================

#[test]
fn throws_passes_when_anything_is_raised() {
    let a = Assert::new();
    a.throws(|| raise("Foo"), Expected::Any, None).unwrap();
    assert_eq!(a.count(), 0);
}

#[test]
fn throws_passes_for_matching_message() {
    let a = Assert::new();
    a.throws(|| raise("Foo"), "Foo", None).unwrap();
    assert_eq!(a.count(), 1);
}

#[test]
fn throws_passes_for_matching_type() {
    let a = Assert::new();
    a.throws(|| type_error("Foo"), ErrorType::declared::<TypeError>(), None)
        .unwrap();
    assert_eq!(a.count(), 1);
}

#[test]
fn throws_fails_with_default_message_when_nothing_raised() {
    err(
        Assert::new().throws(|| Ok(()), Expected::Any, None),
        "Expected error to be thrown.",
    );
}

#[test]
fn throws_fails_with_override_when_nothing_raised() {
    let a = Assert::new();
    err(a.throws(|| Ok(()), "Foo", Some("Bar")), "Bar");
    assert_eq!(a.count(), 0);
}

#[test]
fn throws_fails_with_override_for_wrong_message() {
    err(Assert::new().throws(|| raise("Baz"), "Foo", Some("Bar")), "Bar");
}

#[test]
fn throws_fails_with_default_message_for_wrong_message() {
    err(
        Assert::new().throws(|| raise("Baz"), "Foo", None),
        "Expected error message to be 'Foo'.",
    );
}

#[test]
fn throws_fails_with_declared_name_for_wrong_type() {
    err(
        Assert::new().throws(|| raise("Baz"), ErrorType::declared::<TypeError>(), None),
        "Expected thrown error to be instance of TypeError.",
    );
}

#[test]
fn throws_fails_with_type_path_for_undeclared_type() {
    let expected = format!(
        "Expected thrown error to be instance of {}.",
        type_name::<CustomError>()
    );
    err(
        Assert::new().throws(|| raise("Baz"), ErrorType::of::<CustomError>(), None),
        &expected,
    );
}

#[test]
fn throws_uses_explicit_name() {
    err(
        Assert::new().throws(
            || raise("Baz"),
            ErrorType::of::<CustomError>().named("CustomError"),
            None,
        ),
        "Expected thrown error to be instance of CustomError.",
    );
}

#[test]
fn throws_wrong_type_is_counted() {
    let a = Assert::new();
    assert!(a.throws(|| raise("Baz"), ErrorType::of::<TypeError>(), None).is_err());
    assert_eq!(a.count(), 1);
}

#[test]
fn throws_type_check_sees_through_context() {
    Assert::new()
        .throws(
            || type_error("inner").context("while loading"),
            ErrorType::of::<TypeError>(),
            None,
        )
        .unwrap();
}

#[test]
fn throws_message_check_uses_outer_message() {
    Assert::new()
        .throws(
            || type_error("inner").context("while loading"),
            "while loading",
            None,
        )
        .unwrap();
}

#[test]
fn throws_catches_nested_assertion_error() {
    let a = Assert::new();
    a.throws(
        || {
            a.ok(false, Some("nested"))?;
            Ok(())
        },
        ErrorType::declared::<AssertionError>(),
        None,
    )
    .unwrap();
    assert_eq!(a.count(), 2);
}

#[test]
fn throws_accepts_optional_expectation() {
    let a = Assert::new();
    a.throws(|| raise("Foo"), Some("Foo"), None).unwrap();
    a.throws(|| raise("Foo"), None::<&str>, None).unwrap();
}

// =============================================================================
// Panics
// =============================================================================

#[test]
fn throws_treats_panic_as_raised() {
    Assert::new()
        .throws(|| panic!("boom"), ErrorType::declared::<PanicError>(), None)
        .unwrap();
}

#[test]
fn throws_matches_panic_message() {
    Assert::new()
        .throws(|| panic!("boom {}", 42), "boom 42", None)
        .unwrap();
}

#[test]
#[should_panic(expected = "boom")]
fn panics_propagate_when_not_caught() {
    let config = Config::from_toml_str("[assert]\ncatch_panics = false\n").unwrap();
    let _ = Assert::with_config(&config).throws(|| panic!("boom"), Expected::Any, None);
}

#[test]
fn does_not_throw_fails_on_panic() {
    err(
        Assert::new().does_not_throw(|| panic!("boom"), None),
        "Expected not to throw an error.",
    );
}

// =============================================================================
// does_not_throw()
// =============================================================================

#[test]
fn does_not_throw_passes_when_nothing_raised() {
    let a = Assert::new();
    a.does_not_throw(|| Ok(()), None).unwrap();
    assert_eq!(a.count(), 0);
}

#[test]
fn does_not_throw_fails_with_override() {
    err(Assert::new().does_not_throw(|| raise("Foo"), Some("Msg")), "Msg");
}

#[test]
fn does_not_throw_fails_with_default_message() {
    err(
        Assert::new().does_not_throw(|| raise("Foo"), None),
        "Expected not to throw an error.",
    );
}
