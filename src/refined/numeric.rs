//! Sign-refined numeric wrappers.
//!
//! This module provides three newtype wrappers that narrow a numeric
//! type by its sign:
//!
//! - [`Positive`]: strictly greater than zero
//! - [`NonNegative`]: zero or greater
//! - [`NonPositive`]: zero or less
//!
//! Each wrapper has a checked constructor returning
//! [`Maybe`](crate::data::Maybe) and an unchecked constructor that
//! wraps the value as given. The checked constructors reject
//! out-of-range input as `Empty`; they never clamp. Because every
//! predicate is an ordering comparison against
//! [`Zero::ZERO`](crate::refined::Zero), float `NaN` input fails all
//! three and is always rejected.
//!
//! The wrapped value is reachable only through [`Positive::into_inner`]
//! and [`Positive::as_inner`] (and their siblings); there is no mutable
//! access, so a refined value cannot drift out of range after
//! construction.
//!
//! # Examples
//!
//! ```rust
//! use monars::data::Maybe;
//! use monars::refined::{Positive, Refinable};
//!
//! let quantity = Positive::new(3);
//! assert_eq!(quantity.map(Positive::into_inner), Maybe::Valued(3));
//!
//! // Rejected, not clamped
//! assert_eq!(Positive::new(0), Maybe::Empty);
//! assert_eq!(Positive::new(-3), Maybe::Empty);
//!
//! // Postfix refinement via the Refinable extension trait
//! assert_eq!(7.to_positive().map(Positive::into_inner), Maybe::Valued(7));
//! ```

use std::fmt;

use crate::data::Maybe;
use crate::refined::Zero;

// =============================================================================
// Positive Wrapper
// =============================================================================

/// A value known to be strictly greater than zero.
///
/// # Examples
///
/// ```rust
/// use monars::data::Maybe;
/// use monars::refined::Positive;
///
/// let valid = Positive::new(42);
/// assert_eq!(valid.map(Positive::into_inner), Maybe::Valued(42));
///
/// let invalid = Positive::new(-42);
/// assert_eq!(invalid, Maybe::Empty);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Positive<A>(A);

impl<A> Positive<A> {
    /// Creates a `Positive` if the value is strictly greater than zero.
    ///
    /// Out-of-range input (including float `NaN`) is rejected as
    /// `Empty`, never clamped.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monars::data::Maybe;
    /// use monars::refined::Positive;
    ///
    /// assert!(Positive::new(1).is_valued());
    /// assert_eq!(Positive::new(0), Maybe::Empty);
    /// assert_eq!(Positive::new(-1), Maybe::Empty);
    /// ```
    #[must_use]
    #[inline]
    pub fn new(value: A) -> Maybe<Self>
    where
        A: Zero + PartialOrd,
    {
        if value > A::ZERO {
            Maybe::Valued(Self(value))
        } else {
            Maybe::Empty
        }
    }

    /// Wraps the value without checking the predicate.
    ///
    /// The caller is responsible for the value actually being positive.
    /// This exists for inputs that have already been validated, such as
    /// literals and values recovered from a trusted store.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monars::refined::Positive;
    ///
    /// let quantity = Positive::new_unchecked(3);
    /// assert_eq!(quantity.into_inner(), 3);
    /// ```
    #[must_use]
    #[inline]
    pub const fn new_unchecked(value: A) -> Self {
        Self(value)
    }

    /// Consumes the `Positive` and returns the inner value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monars::refined::Positive;
    ///
    /// let quantity = Positive::new_unchecked(3);
    /// assert_eq!(quantity.into_inner(), 3);
    /// ```
    #[inline]
    pub fn into_inner(self) -> A {
        self.0
    }

    /// Returns a reference to the inner value.
    #[inline]
    pub const fn as_inner(&self) -> &A {
        &self.0
    }
}

impl<A: fmt::Display> fmt::Display for Positive<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(formatter)
    }
}

// =============================================================================
// NonNegative Wrapper
// =============================================================================

/// A value known to be zero or greater.
///
/// # Examples
///
/// ```rust
/// use monars::data::Maybe;
/// use monars::refined::NonNegative;
///
/// assert!(NonNegative::new(0).is_valued());
/// assert!(NonNegative::new(42).is_valued());
/// assert_eq!(NonNegative::new(-1), Maybe::Empty);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NonNegative<A>(A);

impl<A> NonNegative<A> {
    /// Creates a `NonNegative` if the value is zero or greater.
    ///
    /// Out-of-range input (including float `NaN`) is rejected as
    /// `Empty`, never clamped.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monars::data::Maybe;
    /// use monars::refined::NonNegative;
    ///
    /// assert!(NonNegative::new(0).is_valued());
    /// assert_eq!(NonNegative::new(-1), Maybe::Empty);
    /// ```
    #[must_use]
    #[inline]
    pub fn new(value: A) -> Maybe<Self>
    where
        A: Zero + PartialOrd,
    {
        if value >= A::ZERO {
            Maybe::Valued(Self(value))
        } else {
            Maybe::Empty
        }
    }

    /// Wraps the value without checking the predicate.
    ///
    /// The caller is responsible for the value actually being zero or
    /// greater.
    #[must_use]
    #[inline]
    pub const fn new_unchecked(value: A) -> Self {
        Self(value)
    }

    /// Consumes the `NonNegative` and returns the inner value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monars::refined::NonNegative;
    ///
    /// let balance = NonNegative::new_unchecked(0);
    /// assert_eq!(balance.into_inner(), 0);
    /// ```
    #[inline]
    pub fn into_inner(self) -> A {
        self.0
    }

    /// Returns a reference to the inner value.
    #[inline]
    pub const fn as_inner(&self) -> &A {
        &self.0
    }
}

impl<A: fmt::Display> fmt::Display for NonNegative<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(formatter)
    }
}

// =============================================================================
// NonPositive Wrapper
// =============================================================================

/// A value known to be zero or less.
///
/// # Examples
///
/// ```rust
/// use monars::data::Maybe;
/// use monars::refined::NonPositive;
///
/// assert!(NonPositive::new(0).is_valued());
/// assert!(NonPositive::new(-42).is_valued());
/// assert_eq!(NonPositive::new(1), Maybe::Empty);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NonPositive<A>(A);

impl<A> NonPositive<A> {
    /// Creates a `NonPositive` if the value is zero or less.
    ///
    /// Out-of-range input (including float `NaN`) is rejected as
    /// `Empty`, never clamped.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monars::data::Maybe;
    /// use monars::refined::NonPositive;
    ///
    /// assert!(NonPositive::new(0).is_valued());
    /// assert_eq!(NonPositive::new(1), Maybe::Empty);
    /// ```
    #[must_use]
    #[inline]
    pub fn new(value: A) -> Maybe<Self>
    where
        A: Zero + PartialOrd,
    {
        if value <= A::ZERO {
            Maybe::Valued(Self(value))
        } else {
            Maybe::Empty
        }
    }

    /// Wraps the value without checking the predicate.
    ///
    /// The caller is responsible for the value actually being zero or
    /// less.
    #[must_use]
    #[inline]
    pub const fn new_unchecked(value: A) -> Self {
        Self(value)
    }

    /// Consumes the `NonPositive` and returns the inner value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monars::refined::NonPositive;
    ///
    /// let adjustment = NonPositive::new_unchecked(-5);
    /// assert_eq!(adjustment.into_inner(), -5);
    /// ```
    #[inline]
    pub fn into_inner(self) -> A {
        self.0
    }

    /// Returns a reference to the inner value.
    #[inline]
    pub const fn as_inner(&self) -> &A {
        &self.0
    }
}

impl<A: fmt::Display> fmt::Display for NonPositive<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(formatter)
    }
}

// =============================================================================
// Refinable Extension Trait
// =============================================================================

/// Postfix refinement for numeric values.
///
/// `Refinable` is implemented for every `Copy` type with a [`Zero`] and
/// an ordering, so refinement reads left to right at the end of an
/// expression instead of wrapping it.
///
/// # Examples
///
/// ```rust
/// use monars::data::Maybe;
/// use monars::refined::{Positive, Refinable};
///
/// assert_eq!(42.to_positive().map(Positive::into_inner), Maybe::Valued(42));
/// assert_eq!((-42).to_positive(), Maybe::Empty);
/// assert!(0.to_non_negative().is_valued());
/// ```
pub trait Refinable: Zero + PartialOrd + Copy {
    /// Refines into a [`Positive`] if strictly greater than zero.
    #[inline]
    fn to_positive(self) -> Maybe<Positive<Self>> {
        Positive::new(self)
    }

    /// Wraps into a [`Positive`] without checking the predicate.
    #[inline]
    fn to_positive_unchecked(self) -> Positive<Self> {
        Positive::new_unchecked(self)
    }

    /// Refines into a [`NonNegative`] if zero or greater.
    #[inline]
    fn to_non_negative(self) -> Maybe<NonNegative<Self>> {
        NonNegative::new(self)
    }

    /// Wraps into a [`NonNegative`] without checking the predicate.
    #[inline]
    fn to_non_negative_unchecked(self) -> NonNegative<Self> {
        NonNegative::new_unchecked(self)
    }

    /// Refines into a [`NonPositive`] if zero or less.
    #[inline]
    fn to_non_positive(self) -> Maybe<NonPositive<Self>> {
        NonPositive::new(self)
    }

    /// Wraps into a [`NonPositive`] without checking the predicate.
    #[inline]
    fn to_non_positive_unchecked(self) -> NonPositive<Self> {
        NonPositive::new_unchecked(self)
    }
}

impl<A: Zero + PartialOrd + Copy> Refinable for A {}

// =============================================================================
// Integer Aliases
// =============================================================================

/// A positive `i32` (strictly greater than zero).
pub type PositiveInt = Positive<i32>;

/// A non-negative `i32` (zero or greater).
pub type NonNegativeInt = NonNegative<i32>;

/// A non-positive `i32` (zero or less).
pub type NonPositiveInt = NonPositive<i32>;

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<A: serde::Serialize> serde::Serialize for Positive<A> {
    /// Serializes transparently as the inner value.
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.0.serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, A> serde::Deserialize<'de> for Positive<A>
where
    A: serde::Deserialize<'de> + Zero + PartialOrd,
{
    /// Deserializes the inner value and re-checks the predicate,
    /// rejecting input that is not strictly greater than zero.
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = A::deserialize(deserializer)?;
        Self::new(value).fold(Ok, || {
            Err(serde::de::Error::custom("expected a value greater than zero"))
        })
    }
}

#[cfg(feature = "serde")]
impl<A: serde::Serialize> serde::Serialize for NonNegative<A> {
    /// Serializes transparently as the inner value.
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.0.serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, A> serde::Deserialize<'de> for NonNegative<A>
where
    A: serde::Deserialize<'de> + Zero + PartialOrd,
{
    /// Deserializes the inner value and re-checks the predicate,
    /// rejecting input below zero.
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = A::deserialize(deserializer)?;
        Self::new(value).fold(Ok, || {
            Err(serde::de::Error::custom("expected a value of at least zero"))
        })
    }
}

#[cfg(feature = "serde")]
impl<A: serde::Serialize> serde::Serialize for NonPositive<A> {
    /// Serializes transparently as the inner value.
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.0.serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, A> serde::Deserialize<'de> for NonPositive<A>
where
    A: serde::Deserialize<'de> + Zero + PartialOrd,
{
    /// Deserializes the inner value and re-checks the predicate,
    /// rejecting input above zero.
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = A::deserialize(deserializer)?;
        Self::new(value).fold(Ok, || {
            Err(serde::de::Error::custom("expected a value of at most zero"))
        })
    }
}

static_assertions::assert_impl_all!(PositiveInt: Send, Sync, Copy, Ord);
static_assertions::assert_impl_all!(Positive<f64>: Send, Sync, Copy);
