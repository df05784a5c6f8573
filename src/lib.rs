//! # monars
//!
//! Functional primitives for Rust centred on explicit optionality and
//! typed fallible computation.
//!
//! ## Overview
//!
//! This library provides a small set of value types and adapters for
//! writing pipeline-style code over plain Rust values:
//!
//! - **Core Data**: [`Maybe`](data::Maybe) for optional values,
//!   [`Try`](data::Try) for fallible computation, [`Unit`](data::Unit)
//!   for "no information"
//! - **Refined Numerics**: [`Positive`](refined::Positive),
//!   [`NonNegative`](refined::NonNegative), and
//!   [`NonPositive`](refined::NonPositive) wrappers whose constructors
//!   reject out-of-range values instead of clamping them
//! - **Adapters**: combinators that lift `bool`, `&str`, [`Option`],
//!   maps, and side-effecting closures into the core types
//!
//! ## Feature Flags
//!
//! - `data`: core value types (`Maybe`, `Try`, `Unit`)
//! - `refined`: refinement wrappers over numeric primitives
//! - `adapt`: adapter traits for `bool`, `&str`, `Option`, and maps
//! - `async`: `_async` variants of the combinators
//! - `decimal`: refinement aliases over [`rust_decimal::Decimal`]
//! - `serde`: serialization support for the core and refined types
//! - `full`: enable all features
//!
//! ## Example
//!
//! ```rust
//! use monars::prelude::*;
//!
//! let price = 250.to_positive().map(Positive::into_inner);
//! assert_eq!(price, Maybe::Valued(250));
//!
//! let discounted = price
//!     .filter(|amount| *amount >= 100)
//!     .map(|amount| amount - 100)
//!     .get_or_else(|| 0);
//! assert_eq!(discounted, 150);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use monars::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "data")]
    pub use crate::data::*;

    #[cfg(feature = "refined")]
    pub use crate::refined::*;

    #[cfg(feature = "adapt")]
    pub use crate::adapt::*;
}

#[cfg(feature = "data")]
pub mod data;

#[cfg(feature = "refined")]
pub mod refined;

#[cfg(feature = "adapt")]
pub mod adapt;
