//! Unit tests for the Try<A, E> type.
//!
//! Try represents a computation that either succeeded or failed with a
//! typed error:
//! - `Success(A)`: the computed value
//! - `Failure(E)`: the error
//!
//! Transformation is success-biased: a pipeline short-circuits on the
//! first failure and preserves that error unchanged.

#![cfg(feature = "data")]

use std::cell::Cell;

use monars::data::{Maybe, Try};
use rstest::rstest;

// =============================================================================
// Basic Construction and Type Checking
// =============================================================================

#[rstest]
fn try_success_is_success() {
    let value: Try<i32, String> = Try::Success(42);
    assert!(value.is_success());
    assert!(!value.is_failure());
}

#[rstest]
fn try_failure_is_failure() {
    let value: Try<i32, String> = Try::Failure("boom".to_string());
    assert!(value.is_failure());
    assert!(!value.is_success());
}

// =============================================================================
// Projection into Maybe
// =============================================================================

#[rstest]
fn success_projection_drops_the_error_side() {
    let succeeded: Try<i32, String> = Try::Success(42);
    assert_eq!(succeeded.success(), Maybe::Valued(42));

    let failed: Try<i32, String> = Try::Failure("boom".to_string());
    assert_eq!(failed.success(), Maybe::Empty);
}

#[rstest]
fn failure_projection_drops_the_success_side() {
    let failed: Try<i32, String> = Try::Failure("boom".to_string());
    assert_eq!(failed.failure(), Maybe::Valued("boom".to_string()));

    let succeeded: Try<i32, String> = Try::Success(42);
    assert_eq!(succeeded.failure(), Maybe::Empty);
}

#[rstest]
fn reference_projections_keep_the_original_usable() {
    let succeeded: Try<String, i32> = Try::Success("payload".to_string());

    assert_eq!(
        succeeded.success_ref().map(|text| text.len()),
        Maybe::Valued(7)
    );
    assert_eq!(succeeded.failure_ref(), Maybe::Empty);
    assert!(succeeded.is_success());
}

// =============================================================================
// Mapping Operations
// =============================================================================

#[rstest]
fn map_transforms_only_success() {
    let succeeded: Try<i32, String> = Try::Success(21);
    assert_eq!(succeeded.map(|n| n * 2), Try::Success(42));

    let failed: Try<i32, String> = Try::Failure("boom".to_string());
    assert_eq!(failed.map(|n| n * 2), Try::Failure("boom".to_string()));
}

#[rstest]
fn map_skips_the_function_for_failure() {
    let evaluations = Cell::new(0);
    let failed: Try<i32, &str> = Try::Failure("boom");

    let result = failed.map(|n| {
        evaluations.set(evaluations.get() + 1);
        n * 2
    });

    assert_eq!(result, Try::Failure("boom"));
    assert_eq!(evaluations.get(), 0);
}

#[rstest]
fn flat_map_short_circuits_on_the_first_failure() {
    let parse = |raw: &str| -> Try<i32, String> {
        raw.parse::<i32>()
            .map_err(|_| format!("bad number: {}", raw))
            .into()
    };
    let check_positive = |n: i32| {
        if n > 0 {
            Try::Success(n)
        } else {
            Try::Failure(format!("not positive: {}", n))
        }
    };

    assert_eq!(parse("42").flat_map(check_positive), Try::Success(42));
    assert_eq!(
        parse("-3").flat_map(check_positive),
        Try::Failure("not positive: -3".to_string())
    );
    assert_eq!(
        parse("x").flat_map(check_positive),
        Try::Failure("bad number: x".to_string())
    );
}

// =============================================================================
// Fold and Fallbacks
// =============================================================================

#[rstest]
fn fold_selects_exactly_one_branch() {
    let succeeded: Try<i32, String> = Try::Success(42);
    let described = succeeded.fold(
        |n| format!("succeeded with {}", n),
        |error| format!("failed with {}", error),
    );
    assert_eq!(described, "succeeded with 42");

    let failed: Try<i32, String> = Try::Failure("boom".to_string());
    let described = failed.fold(
        |n| format!("succeeded with {}", n),
        |error| format!("failed with {}", error),
    );
    assert_eq!(described, "failed with boom");
}

#[rstest]
fn get_or_else_hands_the_error_to_the_handler() {
    let succeeded: Try<i32, String> = Try::Success(42);
    assert_eq!(succeeded.get_or_else(|error| error.len() as i32), 42);

    let failed: Try<i32, String> = Try::Failure("boom".to_string());
    assert_eq!(failed.get_or_else(|error| error.len() as i32), 4);
}

#[rstest]
fn get_or_else_skips_the_handler_on_success() {
    let evaluations = Cell::new(0);
    let succeeded: Try<i32, &str> = Try::Success(42);

    let value = succeeded.get_or_else(|_| {
        evaluations.set(evaluations.get() + 1);
        0
    });

    assert_eq!(value, 42);
    assert_eq!(evaluations.get(), 0);
}

// =============================================================================
// Unwrap Operations
// =============================================================================

#[rstest]
fn unwrap_success_returns_the_value() {
    let succeeded: Try<i32, String> = Try::Success(42);
    assert_eq!(succeeded.unwrap_success(), 42);
}

#[rstest]
#[should_panic(expected = "called `Try::unwrap_success()` on a `Failure` value")]
fn unwrap_success_panics_on_failure() {
    let failed: Try<i32, String> = Try::Failure("boom".to_string());
    let _ = failed.unwrap_success();
}

#[rstest]
fn unwrap_failure_returns_the_error() {
    let failed: Try<i32, String> = Try::Failure("boom".to_string());
    assert_eq!(failed.unwrap_failure(), "boom".to_string());
}

#[rstest]
#[should_panic(expected = "called `Try::unwrap_failure()` on a `Success` value")]
fn unwrap_failure_panics_on_success() {
    let succeeded: Try<i32, String> = Try::Success(42);
    let _ = succeeded.unwrap_failure();
}

// =============================================================================
// Conversions
// =============================================================================

#[rstest]
fn result_conversion_roundtrip() {
    let ok: Result<i32, String> = Ok(42);
    let fallible: Try<i32, String> = ok.into();
    let back: Result<i32, String> = fallible.into();
    assert_eq!(back, Ok(42));

    let err: Result<i32, String> = Err("boom".to_string());
    let fallible: Try<i32, String> = err.into();
    let back: Result<i32, String> = fallible.into();
    assert_eq!(back, Err("boom".to_string()));
}

#[rstest]
fn question_mark_interop_through_result() {
    fn parse_and_double(raw: &str) -> Result<i32, String> {
        let parsed: Try<i32, String> = raw
            .parse::<i32>()
            .map_err(|error| error.to_string())
            .into();
        let value: i32 = Result::from(parsed)?;
        Ok(value * 2)
    }

    assert_eq!(parse_and_double("21"), Ok(42));
    assert!(parse_and_double("x").is_err());
}

// =============================================================================
// Debug Formatting
// =============================================================================

#[rstest]
fn debug_formatting_names_the_variants() {
    assert_eq!(format!("{:?}", Try::<i32, &str>::Success(1)), "Success(1)");
    assert_eq!(
        format!("{:?}", Try::<i32, &str>::Failure("boom")),
        "Failure(\"boom\")"
    );
}
