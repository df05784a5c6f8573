//! Refinement wrappers that carry a numeric invariant in the type.
//!
//! A refinement narrows an existing numeric type to the subset
//! satisfying a predicate. Construction is the only gate: once a value
//! is wrapped, every later read can rely on the predicate without
//! re-checking it.
//!
//! - [`Positive`]: strictly greater than zero
//! - [`NonNegative`]: zero or greater
//! - [`NonPositive`]: zero or less
//!
//! Checked construction returns [`Maybe`](crate::data::Maybe) and
//! rejects out-of-range input instead of clamping it. Unchecked
//! construction is available for input that has already been validated.
//! The [`Refinable`] extension trait provides the same constructors as
//! postfix methods, and [`Zero`] anchors the predicates so refinements
//! extend to any ordered numeric type.
//!
//! # Examples
//!
//! ```rust
//! use monars::data::Maybe;
//! use monars::refined::{NonNegativeInt, PositiveInt, Refinable};
//!
//! let stock = PositiveInt::new(12);
//! assert!(stock.is_valued());
//!
//! // Refused outright rather than silently adjusted
//! assert_eq!(PositiveInt::new(0), Maybe::Empty);
//! assert_eq!(NonNegativeInt::new(-3), Maybe::Empty);
//!
//! // Postfix style
//! let reserved = 4.to_non_negative();
//! assert!(reserved.is_valued());
//! ```

mod numeric;
mod zero;

#[cfg(feature = "decimal")]
mod decimal;

pub use numeric::{
    NonNegative, NonNegativeInt, NonPositive, NonPositiveInt, Positive, PositiveInt, Refinable,
};
pub use zero::Zero;

#[cfg(feature = "decimal")]
pub use decimal::{NonNegativeDecimal, NonPositiveDecimal, PositiveDecimal};
