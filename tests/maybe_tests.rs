//! Unit tests for the Maybe<A> type.
//!
//! Maybe represents a value that is either present or absent:
//! - `Valued(A)`: contains a value of type A
//! - `Empty`: contains nothing
//!
//! Absence flows through transformation untouched and is only
//! eliminated by fold, get_or_else, or a pattern match.

#![cfg(feature = "data")]

use std::cell::Cell;
use std::collections::HashSet;

use monars::data::{Maybe, Try};
use rstest::rstest;

// =============================================================================
// Basic Construction and Type Checking
// =============================================================================

#[rstest]
fn maybe_valued_is_valued() {
    let value: Maybe<i32> = Maybe::Valued(42);
    assert!(value.is_valued());
    assert!(!value.is_empty());
}

#[rstest]
fn maybe_empty_is_empty() {
    let value: Maybe<i32> = Maybe::Empty;
    assert!(value.is_empty());
    assert!(!value.is_valued());
}

#[rstest]
fn from_option_collapses_none() {
    assert_eq!(Maybe::from_option(Some(42)), Maybe::Valued(42));
    assert_eq!(Maybe::from_option(None::<i32>), Maybe::Empty);
}

#[rstest]
fn a_valued_none_is_still_valued() {
    // Container emptiness is not payload nullity
    let wrapped: Maybe<Option<i32>> = Maybe::Valued(None);
    assert!(wrapped.is_valued());
    assert_ne!(wrapped, Maybe::Empty);
}

#[rstest]
fn default_is_empty() {
    let value: Maybe<String> = Maybe::default();
    assert_eq!(value, Maybe::Empty);
}

// =============================================================================
// Reference Extraction
// =============================================================================

#[rstest]
fn as_ref_keeps_the_original_usable() {
    let value: Maybe<String> = Maybe::Valued("hello".to_string());
    let length = value.as_ref().map(|text| text.len());

    assert_eq!(length, Maybe::Valued(5));
    assert_eq!(value, Maybe::Valued("hello".to_string()));
}

#[rstest]
fn value_ref_exposes_an_optional_reference() {
    let value: Maybe<i32> = Maybe::Valued(42);
    assert_eq!(value.value_ref(), Some(&42));

    let empty: Maybe<i32> = Maybe::Empty;
    assert_eq!(empty.value_ref(), None);
}

// =============================================================================
// Value Extraction
// =============================================================================

#[rstest]
fn into_option_preserves_the_payload() {
    let value: Maybe<String> = Maybe::Valued("payload".to_string());
    assert_eq!(value.into_option(), Some("payload".to_string()));

    let empty: Maybe<String> = Maybe::Empty;
    assert_eq!(empty.into_option(), None);
}

#[rstest]
fn unwrap_valued_returns_the_value() {
    let value: Maybe<i32> = Maybe::Valued(42);
    assert_eq!(value.unwrap_valued(), 42);
}

#[rstest]
#[should_panic(expected = "called `Maybe::unwrap_valued()` on an `Empty` value")]
fn unwrap_valued_panics_on_empty() {
    let empty: Maybe<i32> = Maybe::Empty;
    let _ = empty.unwrap_valued();
}

// =============================================================================
// Mapping Operations
// =============================================================================

#[rstest]
fn map_transforms_only_valued() {
    assert_eq!(Maybe::Valued(21).map(|n| n * 2), Maybe::Valued(42));
    assert_eq!(Maybe::<i32>::Empty.map(|n| n * 2), Maybe::Empty);
}

#[rstest]
fn map_can_change_the_value_type() {
    let length = Maybe::Valued("hello".to_string()).map(|text| text.len());
    assert_eq!(length, Maybe::Valued(5));
}

#[rstest]
fn map_skips_the_function_for_empty() {
    let evaluations = Cell::new(0);
    let result = Maybe::<i32>::Empty.map(|n| {
        evaluations.set(evaluations.get() + 1);
        n * 2
    });

    assert_eq!(result, Maybe::Empty);
    assert_eq!(evaluations.get(), 0);
}

#[rstest]
fn flat_map_flattens_nested_absence() {
    let half = |n: i32| {
        if n % 2 == 0 {
            Maybe::Valued(n / 2)
        } else {
            Maybe::Empty
        }
    };

    assert_eq!(Maybe::Valued(8).flat_map(half), Maybe::Valued(4));
    assert_eq!(Maybe::Valued(7).flat_map(half), Maybe::Empty);
    assert_eq!(Maybe::Empty.flat_map(half), Maybe::Empty);
}

#[rstest]
fn flat_map_chains_short_circuit() {
    let evaluations = Cell::new(0);
    let traced = |n: i32| {
        evaluations.set(evaluations.get() + 1);
        Maybe::Valued(n + 1)
    };

    let result = Maybe::Valued(0)
        .flat_map(traced)
        .flat_map(|_| Maybe::<i32>::Empty)
        .flat_map(traced);

    assert_eq!(result, Maybe::Empty);
    assert_eq!(evaluations.get(), 1);
}

#[rstest]
fn filter_keeps_only_satisfying_values() {
    assert_eq!(Maybe::Valued(42).filter(|n| *n > 0), Maybe::Valued(42));
    assert_eq!(Maybe::Valued(42).filter(|n| *n > 100), Maybe::Empty);
    assert_eq!(Maybe::<i32>::Empty.filter(|n| *n > 0), Maybe::Empty);
}

#[rstest]
fn filter_never_invokes_the_predicate_for_empty() {
    let evaluations = Cell::new(0);
    let result = Maybe::<i32>::Empty.filter(|_| {
        evaluations.set(evaluations.get() + 1);
        true
    });

    assert_eq!(result, Maybe::Empty);
    assert_eq!(evaluations.get(), 0);
}

// =============================================================================
// Fold and Fallbacks
// =============================================================================

#[rstest]
fn fold_selects_the_valued_branch() {
    let described = Maybe::Valued(42).fold(|n| format!("got {}", n), || "nothing".to_string());
    assert_eq!(described, "got 42");
}

#[rstest]
fn fold_selects_the_empty_branch() {
    let described = Maybe::<i32>::Empty.fold(|n| format!("got {}", n), || "nothing".to_string());
    assert_eq!(described, "nothing");
}

#[rstest]
fn fold_invokes_exactly_one_branch() {
    let valued_calls = Cell::new(0);
    let empty_calls = Cell::new(0);

    Maybe::Valued(1).fold(
        |_| valued_calls.set(valued_calls.get() + 1),
        || empty_calls.set(empty_calls.get() + 1),
    );

    assert_eq!(valued_calls.get(), 1);
    assert_eq!(empty_calls.get(), 0);
}

#[rstest]
fn get_or_else_is_lazy_in_the_fallback() {
    let evaluations = Cell::new(0);
    let fallback = || {
        evaluations.set(evaluations.get() + 1);
        0
    };

    assert_eq!(Maybe::Valued(42).get_or_else(fallback), 42);
    assert_eq!(evaluations.get(), 0);

    assert_eq!(Maybe::Empty.get_or_else(fallback), 0);
    assert_eq!(evaluations.get(), 1);
}

#[rstest]
fn get_or_default_uses_the_type_default() {
    assert_eq!(Maybe::Valued(42).get_or_default(), 42);
    assert_eq!(Maybe::<i32>::Empty.get_or_default(), 0);
    assert_eq!(Maybe::<String>::Empty.get_or_default(), String::new());
}

// =============================================================================
// Bridging into Try
// =============================================================================

#[rstest]
fn to_try_turns_presence_into_success() {
    let result: Try<i32, String> = Maybe::Valued(42).to_try(|| "missing".to_string());
    assert_eq!(result, Try::Success(42));
}

#[rstest]
fn to_try_turns_absence_into_the_computed_error() {
    let result: Try<i32, String> = Maybe::Empty.to_try(|| "missing".to_string());
    assert_eq!(result, Try::Failure("missing".to_string()));
}

#[rstest]
fn to_try_is_lazy_in_the_error() {
    let evaluations = Cell::new(0);
    let result: Try<i32, &str> = Maybe::Valued(42).to_try(|| {
        evaluations.set(evaluations.get() + 1);
        "missing"
    });

    assert_eq!(result, Try::Success(42));
    assert_eq!(evaluations.get(), 0);
}

// =============================================================================
// Conversions
// =============================================================================

#[rstest]
fn option_conversion_roundtrip() {
    let maybe: Maybe<i32> = Some(42).into();
    let option: Option<i32> = maybe.into();
    assert_eq!(option, Some(42));

    let maybe: Maybe<i32> = None.into();
    let option: Option<i32> = maybe.into();
    assert_eq!(option, None);
}

#[rstest]
fn question_mark_interop_through_option() {
    fn first_even(values: &[i32]) -> Option<i32> {
        let found: Maybe<i32> =
            Maybe::from_option(values.iter().copied().find(|n| n % 2 == 0));
        let value = found.into_option()?;
        Some(value * 10)
    }

    assert_eq!(first_even(&[1, 3, 4]), Some(40));
    assert_eq!(first_even(&[1, 3, 5]), None);
}

// =============================================================================
// Ordering, Equality, and Hashing
// =============================================================================

#[rstest]
fn empty_orders_before_any_valued() {
    assert!(Maybe::<i32>::Empty < Maybe::Valued(i32::MIN));
    assert!(Maybe::Valued(1) < Maybe::Valued(2));

    let mut values = vec![Maybe::Valued(2), Maybe::Empty, Maybe::Valued(1)];
    values.sort();
    assert_eq!(
        values,
        vec![Maybe::Empty, Maybe::Valued(1), Maybe::Valued(2)]
    );
}

#[rstest]
fn hashing_distinguishes_empty_from_valued() {
    let mut set = HashSet::new();
    set.insert(Maybe::<i32>::Empty);
    set.insert(Maybe::Valued(1));
    set.insert(Maybe::Valued(1));

    assert_eq!(set.len(), 2);
}

// =============================================================================
// Debug Formatting
// =============================================================================

#[rstest]
fn debug_formatting_names_the_variants() {
    assert_eq!(format!("{:?}", Maybe::Valued("x")), "Valued(\"x\")");
    assert_eq!(format!("{:?}", Maybe::<i32>::Empty), "Empty");
    assert_eq!(
        format!("{:?}", Maybe::Valued(Maybe::Valued(1))),
        "Valued(Valued(1))"
    );
}

// =============================================================================
// Copy Semantics
// =============================================================================

#[rstest]
fn copyable_payloads_make_the_maybe_copyable() {
    let value: Maybe<i32> = Maybe::Valued(42);
    let copied = value;

    // Both bindings remain usable
    assert_eq!(value, copied);
}
