//! Sign refinements over fixed-point decimals.
//!
//! Wires [`rust_decimal::Decimal`] into the refinement machinery and
//! provides the decimal counterparts of the integer aliases. Decimal
//! comparisons are exact, so the usual float caveats do not apply:
//! `0.0` and `-0.0` are the same decimal zero.
//!
//! # Examples
//!
//! ```rust
//! use monars::refined::{Positive, PositiveDecimal};
//! use rust_decimal::Decimal;
//!
//! let price = PositiveDecimal::new(Decimal::new(1999, 2));
//! assert_eq!(
//!     price.map(Positive::into_inner).map(|d| d.to_string()),
//!     monars::data::Maybe::Valued("19.99".to_string())
//! );
//! ```

use rust_decimal::Decimal;

use crate::refined::{NonNegative, NonPositive, Positive, Zero};

impl Zero for Decimal {
    const ZERO: Self = Decimal::ZERO;
}

/// A positive [`Decimal`] (strictly greater than zero).
pub type PositiveDecimal = Positive<Decimal>;

/// A non-negative [`Decimal`] (zero or greater).
pub type NonNegativeDecimal = NonNegative<Decimal>;

/// A non-positive [`Decimal`] (zero or less).
pub type NonPositiveDecimal = NonPositive<Decimal>;
