//! The [`Unit`] type: a single-valued type carrying no information.
//!
//! [`Unit`] is the library's counterpart to `()`. Unlike `()`, it is an
//! ordinary named struct, so it can be returned from adapted closures,
//! carried inside [`Maybe`](crate::data::Maybe) or
//! [`Try`](crate::data::Try), and printed. Every `Unit` equals every
//! other `Unit`.
//!
//! # Examples
//!
//! ```rust
//! use monars::data::Unit;
//!
//! assert_eq!(Unit, Unit);
//! assert_eq!(Unit.to_string(), "()");
//! assert_eq!(Unit::from(()), Unit);
//! ```

use std::fmt;

/// A type with exactly one value, carrying no information.
///
/// `Unit` is zero-sized and freely copyable. It exists so that APIs
/// which must produce *some* value can do so without inventing a
/// meaningless payload.
///
/// # Examples
///
/// ```rust
/// use monars::data::{Maybe, Unit};
///
/// let confirmation: Maybe<Unit> = Maybe::Valued(Unit);
/// assert!(confirmation.is_valued());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Unit;

impl fmt::Display for Unit {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("()")
    }
}

/// Converts `()` into [`Unit`].
impl From<()> for Unit {
    #[inline]
    fn from((): ()) -> Self {
        Self
    }
}

/// Converts [`Unit`] into `()`.
impl From<Unit> for () {
    #[inline]
    fn from(_: Unit) -> Self {}
}

static_assertions::assert_eq_size!(Unit, ());
static_assertions::assert_impl_all!(Unit: Send, Sync, Copy);

// ===== Tests =====
