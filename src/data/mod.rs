//! Core value types for explicit optionality and fallible computation.
//!
//! This module provides the value types the rest of the library is
//! built around:
//!
//! - [`Maybe`]: a value that is either present or absent
//! - [`Try`]: a computation that succeeded or failed with a typed error
//! - [`Unit`]: a single-valued type carrying no information
//!
//! # Examples
//!
//! ## Optional Values
//!
//! ```rust
//! use monars::data::Maybe;
//!
//! let half = |n: i32| {
//!     if n % 2 == 0 {
//!         Maybe::Valued(n / 2)
//!     } else {
//!         Maybe::Empty
//!     }
//! };
//!
//! assert_eq!(Maybe::Valued(8).flat_map(half), Maybe::Valued(4));
//! assert_eq!(Maybe::Valued(7).flat_map(half), Maybe::Empty);
//! ```
//!
//! ## Fallible Computation
//!
//! ```rust
//! use monars::data::Try;
//!
//! let parsed: Try<i32, String> = "42"
//!     .parse::<i32>()
//!     .map_err(|error| error.to_string())
//!     .into();
//!
//! assert_eq!(parsed.map(|n| n * 2), Try::Success(84));
//! ```

mod fallible;
mod maybe;
mod unit;

pub use fallible::Try;
pub use maybe::{Maybe, MaybeIter};
pub use unit::Unit;
