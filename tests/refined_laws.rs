//! Property-based tests for the sign-refined numeric wrappers.
//!
//! The wrappers promise exactly one thing: a checked constructor
//! produces a value precisely when the ordering predicate against zero
//! holds, and the wrapped value is always the input, never an
//! adjustment of it.

#![cfg(feature = "refined")]

use monars::refined::{NonNegative, NonPositive, Positive, Refinable};
use proptest::prelude::*;

// =============================================================================
// Acceptance Laws
// =============================================================================

proptest! {
    /// `Positive::new(v)` is `Valued` exactly when `v > 0`.
    #[test]
    fn prop_positive_accepts_iff_above_zero(value in any::<i64>()) {
        prop_assert_eq!(Positive::new(value).is_valued(), value > 0);
    }

    /// `NonNegative::new(v)` is `Valued` exactly when `v >= 0`.
    #[test]
    fn prop_non_negative_accepts_iff_at_least_zero(value in any::<i64>()) {
        prop_assert_eq!(NonNegative::new(value).is_valued(), value >= 0);
    }

    /// `NonPositive::new(v)` is `Valued` exactly when `v <= 0`.
    #[test]
    fn prop_non_positive_accepts_iff_at_most_zero(value in any::<i64>()) {
        prop_assert_eq!(NonPositive::new(value).is_valued(), value <= 0);
    }

    /// Float acceptance follows the same comparisons, which rejects
    /// `NaN` for every wrapper because no ordering predicate holds.
    #[test]
    fn prop_float_acceptance_follows_the_comparison(value in any::<f64>()) {
        prop_assert_eq!(Positive::new(value).is_valued(), value > 0.0);
        prop_assert_eq!(NonNegative::new(value).is_valued(), value >= 0.0);
        prop_assert_eq!(NonPositive::new(value).is_valued(), value <= 0.0);
    }
}

// =============================================================================
// Preservation Laws
// =============================================================================

proptest! {
    /// An accepted value is wrapped verbatim, never clamped.
    #[test]
    fn prop_checked_construction_preserves_the_value(value in any::<i64>()) {
        if let monars::data::Maybe::Valued(wrapped) = Positive::new(value) {
            prop_assert_eq!(wrapped.into_inner(), value);
        }

        if let monars::data::Maybe::Valued(wrapped) = NonNegative::new(value) {
            prop_assert_eq!(wrapped.into_inner(), value);
        }

        if let monars::data::Maybe::Valued(wrapped) = NonPositive::new(value) {
            prop_assert_eq!(wrapped.into_inner(), value);
        }
    }

    /// Unchecked construction wraps any input untouched.
    #[test]
    fn prop_unchecked_construction_wraps_verbatim(value in any::<i64>()) {
        prop_assert_eq!(Positive::new_unchecked(value).into_inner(), value);
        prop_assert_eq!(NonNegative::new_unchecked(value).into_inner(), value);
        prop_assert_eq!(NonPositive::new_unchecked(value).into_inner(), value);
    }
}

// =============================================================================
// Coherence Laws
// =============================================================================

proptest! {
    /// The postfix `Refinable` methods agree with the constructors.
    #[test]
    fn prop_postfix_refinement_agrees_with_constructors(value in any::<i64>()) {
        prop_assert_eq!(value.to_positive(), Positive::new(value));
        prop_assert_eq!(value.to_non_negative(), NonNegative::new(value));
        prop_assert_eq!(value.to_non_positive(), NonPositive::new(value));
    }

    /// Ordering on wrapped values matches ordering on the inner values.
    #[test]
    fn prop_ordering_matches_the_inner_ordering(
        left in 1..=i64::MAX,
        right in 1..=i64::MAX,
    ) {
        let wrapped_left = Positive::new_unchecked(left);
        let wrapped_right = Positive::new_unchecked(right);

        prop_assert_eq!(wrapped_left.cmp(&wrapped_right), left.cmp(&right));
    }

    /// Display output matches the inner value's output.
    #[test]
    fn prop_display_matches_the_inner_value(value in 1..=i64::MAX) {
        prop_assert_eq!(Positive::new_unchecked(value).to_string(), value.to_string());
    }
}
