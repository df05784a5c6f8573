//! Maybe type - a value that is either present or absent.
//!
//! This module provides the `Maybe<A>` type, which represents a value
//! that is either `Valued(A)` or `Empty`. It plays the same role as
//! [`Option`], but as a library-owned type it can carry the combinators
//! the rest of this crate is built on:
//!
//! - Pipeline-style transformation (`map`, `flat_map`, `filter`)
//! - Explicit elimination (`fold`, `get_or_else`)
//! - Bridging into typed fallible computation (`to_try`)
//!
//! `Maybe` converts losslessly to and from [`Option`] in both
//! directions, so it interoperates with any std-flavoured API.
//!
//! # Examples
//!
//! ```rust
//! use monars::data::Maybe;
//!
//! // Creating Maybe values
//! let valued: Maybe<i32> = Maybe::Valued(42);
//! let empty: Maybe<i32> = Maybe::Empty;
//!
//! // Pattern matching
//! match valued {
//!     Maybe::Valued(n) => println!("Got value: {}", n),
//!     Maybe::Empty => println!("Got nothing"),
//! }
//!
//! // Using fold to handle both cases
//! let described = empty.fold(
//!     |n| format!("Value: {}", n),
//!     || "No value".to_string(),
//! );
//! assert_eq!(described, "No value");
//! ```

use std::fmt;
use std::iter::FusedIterator;

#[cfg(feature = "async")]
use std::future::Future;

use crate::data::Try;

/// A value that is either present or absent.
///
/// `Maybe<A>` represents a value that is either `Valued(A)` or `Empty`.
/// Absence is an ordinary value: it flows through `map` and `flat_map`
/// untouched and is only eliminated by `fold`, `get_or_else`, or a
/// pattern match.
///
/// `Empty` orders before any `Valued` value.
///
/// # Type Parameters
///
/// * `A` - The type of the contained value
///
/// # Examples
///
/// ```rust
/// use monars::data::Maybe;
///
/// let valued: Maybe<i32> = Maybe::Valued(42);
/// let empty: Maybe<i32> = Maybe::Empty;
///
/// // Map over the contained value
/// let doubled = valued.map(|x| x * 2);
/// assert_eq!(doubled, Maybe::Valued(84));
///
/// // Empty propagates unchanged
/// let still_empty = empty.map(|x| x * 2);
/// assert_eq!(still_empty, Maybe::Empty);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Maybe<A> {
    /// The absent variant, carrying no value.
    Empty,
    /// The present variant, carrying a value.
    Valued(A),
}

impl<A> Maybe<A> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Builds a `Maybe` from an `Option`, collapsing `None` into `Empty`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monars::data::Maybe;
    ///
    /// assert_eq!(Maybe::from_option(Some(42)), Maybe::Valued(42));
    /// assert_eq!(Maybe::from_option(None::<i32>), Maybe::Empty);
    /// ```
    #[inline]
    pub fn from_option(option: Option<A>) -> Self {
        match option {
            Some(value) => Self::Valued(value),
            None => Self::Empty,
        }
    }

    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if this is a `Valued` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monars::data::Maybe;
    ///
    /// let valued: Maybe<i32> = Maybe::Valued(42);
    /// assert!(valued.is_valued());
    ///
    /// let empty: Maybe<i32> = Maybe::Empty;
    /// assert!(!empty.is_valued());
    /// ```
    #[inline]
    pub const fn is_valued(&self) -> bool {
        matches!(self, Self::Valued(_))
    }

    /// Returns `true` if this is an `Empty` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monars::data::Maybe;
    ///
    /// let empty: Maybe<i32> = Maybe::Empty;
    /// assert!(empty.is_empty());
    ///
    /// let valued: Maybe<i32> = Maybe::Valued(42);
    /// assert!(!valued.is_empty());
    /// ```
    #[inline]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    // =========================================================================
    // Reference Extraction (Non-consuming)
    // =========================================================================

    /// Converts from `&Maybe<A>` to `Maybe<&A>`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monars::data::Maybe;
    ///
    /// let text: Maybe<String> = Maybe::Valued("hello".to_string());
    /// let length = text.as_ref().map(|s| s.len());
    /// assert_eq!(length, Maybe::Valued(5));
    ///
    /// // `text` is still usable afterwards
    /// assert!(text.is_valued());
    /// ```
    #[inline]
    pub const fn as_ref(&self) -> Maybe<&A> {
        match self {
            Self::Valued(value) => Maybe::Valued(value),
            Self::Empty => Maybe::Empty,
        }
    }

    /// Returns a reference to the contained value if present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monars::data::Maybe;
    ///
    /// let valued: Maybe<i32> = Maybe::Valued(42);
    /// assert_eq!(valued.value_ref(), Some(&42));
    ///
    /// let empty: Maybe<i32> = Maybe::Empty;
    /// assert_eq!(empty.value_ref(), None);
    /// ```
    #[inline]
    pub const fn value_ref(&self) -> Option<&A> {
        match self {
            Self::Valued(value) => Some(value),
            Self::Empty => None,
        }
    }

    // =========================================================================
    // Value Extraction (Consuming)
    // =========================================================================

    /// Converts the `Maybe` into an `Option<A>`, consuming the maybe.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monars::data::Maybe;
    ///
    /// let valued: Maybe<i32> = Maybe::Valued(42);
    /// assert_eq!(valued.into_option(), Some(42));
    ///
    /// let empty: Maybe<i32> = Maybe::Empty;
    /// assert_eq!(empty.into_option(), None);
    /// ```
    #[inline]
    pub fn into_option(self) -> Option<A> {
        match self {
            Self::Valued(value) => Some(value),
            Self::Empty => None,
        }
    }

    /// Returns the contained value, consuming the maybe.
    ///
    /// # Panics
    ///
    /// Panics if this is an `Empty` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monars::data::Maybe;
    ///
    /// let valued: Maybe<i32> = Maybe::Valued(42);
    /// assert_eq!(valued.unwrap_valued(), 42);
    /// ```
    #[inline]
    pub fn unwrap_valued(self) -> A {
        match self {
            Self::Valued(value) => value,
            Self::Empty => panic!("called `Maybe::unwrap_valued()` on an `Empty` value"),
        }
    }

    // =========================================================================
    // Mapping Operations
    // =========================================================================

    /// Applies a function to the contained value if present.
    ///
    /// If this is `Valued(a)`, returns `Valued(function(a))`.
    /// If this is `Empty`, returns `Empty` without invoking the function.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monars::data::Maybe;
    ///
    /// let valued: Maybe<i32> = Maybe::Valued(42);
    /// assert_eq!(valued.map(|x| x * 2), Maybe::Valued(84));
    ///
    /// let empty: Maybe<i32> = Maybe::Empty;
    /// assert_eq!(empty.map(|x| x * 2), Maybe::Empty);
    /// ```
    #[inline]
    pub fn map<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(A) -> B,
    {
        match self {
            Self::Valued(value) => Maybe::Valued(function(value)),
            Self::Empty => Maybe::Empty,
        }
    }

    /// Applies a `Maybe`-producing function to the contained value and
    /// flattens the result.
    ///
    /// If this is `Valued(a)`, returns `function(a)`.
    /// If this is `Empty`, returns `Empty` without invoking the function.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monars::data::Maybe;
    ///
    /// let half = |n: i32| {
    ///     if n % 2 == 0 {
    ///         Maybe::Valued(n / 2)
    ///     } else {
    ///         Maybe::Empty
    ///     }
    /// };
    ///
    /// assert_eq!(Maybe::Valued(8).flat_map(half), Maybe::Valued(4));
    /// assert_eq!(Maybe::Valued(7).flat_map(half), Maybe::Empty);
    /// assert_eq!(Maybe::Empty.flat_map(half), Maybe::Empty);
    /// ```
    #[inline]
    pub fn flat_map<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(A) -> Maybe<B>,
    {
        match self {
            Self::Valued(value) => function(value),
            Self::Empty => Maybe::Empty,
        }
    }

    /// Keeps the contained value only if it satisfies the predicate.
    ///
    /// If this is `Valued(a)` and `predicate(&a)` is `true`, returns
    /// `Valued(a)`. Otherwise returns `Empty`. The predicate is never
    /// invoked for `Empty`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monars::data::Maybe;
    ///
    /// let valued: Maybe<i32> = Maybe::Valued(42);
    /// assert_eq!(valued.filter(|n| *n > 0), Maybe::Valued(42));
    /// assert_eq!(valued.filter(|n| *n > 100), Maybe::Empty);
    ///
    /// let empty: Maybe<i32> = Maybe::Empty;
    /// assert_eq!(empty.filter(|n| *n > 0), Maybe::Empty);
    /// ```
    #[inline]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&A) -> bool,
    {
        match self {
            Self::Valued(value) if predicate(&value) => Self::Valued(value),
            _ => Self::Empty,
        }
    }

    // =========================================================================
    // Fold Operations
    // =========================================================================

    /// Eliminates the `Maybe` by applying one of two functions.
    ///
    /// Exactly one of the two functions is invoked: `valued_function`
    /// for `Valued`, `empty_function` for `Empty`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monars::data::Maybe;
    ///
    /// let valued: Maybe<i32> = Maybe::Valued(42);
    /// let described = valued.fold(|n| format!("Value: {}", n), || "No value".to_string());
    /// assert_eq!(described, "Value: 42");
    ///
    /// let empty: Maybe<i32> = Maybe::Empty;
    /// let described = empty.fold(|n| format!("Value: {}", n), || "No value".to_string());
    /// assert_eq!(described, "No value");
    /// ```
    #[inline]
    pub fn fold<B, F, G>(self, valued_function: F, empty_function: G) -> B
    where
        F: FnOnce(A) -> B,
        G: FnOnce() -> B,
    {
        match self {
            Self::Valued(value) => valued_function(value),
            Self::Empty => empty_function(),
        }
    }

    /// Returns the contained value, or computes a fallback.
    ///
    /// The fallback is only invoked when this is `Empty`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monars::data::Maybe;
    ///
    /// let valued: Maybe<i32> = Maybe::Valued(42);
    /// assert_eq!(valued.get_or_else(|| 0), 42);
    ///
    /// let empty: Maybe<i32> = Maybe::Empty;
    /// assert_eq!(empty.get_or_else(|| 0), 0);
    /// ```
    #[inline]
    pub fn get_or_else<F>(self, fallback: F) -> A
    where
        F: FnOnce() -> A,
    {
        match self {
            Self::Valued(value) => value,
            Self::Empty => fallback(),
        }
    }

    // =========================================================================
    // Conversion Operations
    // =========================================================================

    /// Converts into a [`Try`], turning absence into a typed error.
    ///
    /// If this is `Valued(a)`, returns `Success(a)`. If this is `Empty`,
    /// returns `Failure(error_function())`. The error function is only
    /// invoked when this is `Empty`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monars::data::{Maybe, Try};
    ///
    /// let valued: Maybe<i32> = Maybe::Valued(42);
    /// assert_eq!(valued.to_try(|| "missing"), Try::Success(42));
    ///
    /// let empty: Maybe<i32> = Maybe::Empty;
    /// assert_eq!(empty.to_try(|| "missing"), Try::Failure("missing"));
    /// ```
    #[inline]
    pub fn to_try<E, F>(self, error_function: F) -> Try<A, E>
    where
        F: FnOnce() -> E,
    {
        match self {
            Self::Valued(value) => Try::Success(value),
            Self::Empty => Try::Failure(error_function()),
        }
    }
}

// =============================================================================
// Default-based Operations
// =============================================================================

impl<A: Default> Maybe<A> {
    /// Returns the contained value, or the type's default if `Empty`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monars::data::Maybe;
    ///
    /// let valued: Maybe<i32> = Maybe::Valued(42);
    /// assert_eq!(valued.get_or_default(), 42);
    ///
    /// let empty: Maybe<String> = Maybe::Empty;
    /// assert_eq!(empty.get_or_default(), String::new());
    /// ```
    #[inline]
    pub fn get_or_default(self) -> A {
        match self {
            Self::Valued(value) => value,
            Self::Empty => A::default(),
        }
    }
}

// =============================================================================
// Async Operations
// =============================================================================

#[cfg(feature = "async")]
impl<A> Maybe<A> {
    /// Applies an async function to the contained value if present.
    ///
    /// If this is `Empty`, the function is never invoked and no future
    /// is awaited.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// use monars::data::Maybe;
    ///
    /// #[tokio::main]
    /// async fn main() {
    ///     let doubled = Maybe::Valued(21).map_async(|n| async move { n * 2 }).await;
    ///     assert_eq!(doubled, Maybe::Valued(42));
    /// }
    /// ```
    pub async fn map_async<B, F, Fut>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(A) -> Fut,
        Fut: Future<Output = B>,
    {
        match self {
            Self::Valued(value) => Maybe::Valued(function(value).await),
            Self::Empty => Maybe::Empty,
        }
    }

    /// Applies an async `Maybe`-producing function to the contained
    /// value and flattens the result.
    ///
    /// If this is `Empty`, the function is never invoked and no future
    /// is awaited.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// use monars::data::Maybe;
    ///
    /// #[tokio::main]
    /// async fn main() {
    ///     let found = Maybe::Valued(7)
    ///         .flat_map_async(|n| async move {
    ///             if n > 0 { Maybe::Valued(n * 10) } else { Maybe::Empty }
    ///         })
    ///         .await;
    ///     assert_eq!(found, Maybe::Valued(70));
    /// }
    /// ```
    pub async fn flat_map_async<B, F, Fut>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(A) -> Fut,
        Fut: Future<Output = Maybe<B>>,
    {
        match self {
            Self::Valued(value) => function(value).await,
            Self::Empty => Maybe::Empty,
        }
    }

    /// Eliminates the `Maybe` by awaiting one of two async functions.
    ///
    /// Exactly one of the two futures is created and awaited.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// use monars::data::Maybe;
    ///
    /// #[tokio::main]
    /// async fn main() {
    ///     let empty: Maybe<i32> = Maybe::Empty;
    ///     let described = empty
    ///         .fold_async(
    ///             |n| async move { format!("Value: {}", n) },
    ///             || async { "No value".to_string() },
    ///         )
    ///         .await;
    ///     assert_eq!(described, "No value");
    /// }
    /// ```
    pub async fn fold_async<B, F, G, FutValued, FutEmpty>(
        self,
        valued_function: F,
        empty_function: G,
    ) -> B
    where
        F: FnOnce(A) -> FutValued,
        G: FnOnce() -> FutEmpty,
        FutValued: Future<Output = B>,
        FutEmpty: Future<Output = B>,
    {
        match self {
            Self::Valued(value) => valued_function(value).await,
            Self::Empty => empty_function().await,
        }
    }
}

// =============================================================================
// Debug Implementation
// =============================================================================

impl<A: fmt::Debug> fmt::Debug for Maybe<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Valued(value) => formatter.debug_tuple("Valued").field(value).finish(),
            Self::Empty => formatter.write_str("Empty"),
        }
    }
}

// =============================================================================
// Default Implementation
// =============================================================================

impl<A> Default for Maybe<A> {
    /// Returns [`Maybe::Empty`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monars::data::Maybe;
    ///
    /// let empty: Maybe<i32> = Maybe::default();
    /// assert!(empty.is_empty());
    /// ```
    #[inline]
    fn default() -> Self {
        Self::Empty
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<A> From<Option<A>> for Maybe<A> {
    /// Converts an `Option` to a `Maybe`.
    ///
    /// `Some(a)` becomes `Valued(a)`, and `None` becomes `Empty`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monars::data::Maybe;
    ///
    /// let valued: Maybe<i32> = Some(42).into();
    /// assert_eq!(valued, Maybe::Valued(42));
    ///
    /// let empty: Maybe<i32> = None.into();
    /// assert_eq!(empty, Maybe::Empty);
    /// ```
    #[inline]
    fn from(option: Option<A>) -> Self {
        Self::from_option(option)
    }
}

impl<A> From<Maybe<A>> for Option<A> {
    /// Converts a `Maybe` to an `Option`.
    ///
    /// `Valued(a)` becomes `Some(a)`, and `Empty` becomes `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monars::data::Maybe;
    ///
    /// let valued: Maybe<i32> = Maybe::Valued(42);
    /// let option: Option<i32> = valued.into();
    /// assert_eq!(option, Some(42));
    /// ```
    #[inline]
    fn from(maybe: Maybe<A>) -> Self {
        maybe.into_option()
    }
}

// =============================================================================
// Iterator Support
// =============================================================================

/// A consuming iterator over the zero or one values of a [`Maybe`].
///
/// Created by [`Maybe::into_iter`]. Yields the contained value exactly
/// once for `Valued`, and nothing at all for `Empty`.
#[derive(Debug, Clone)]
pub struct MaybeIter<A> {
    remaining: Option<A>,
}

impl<A> Iterator for MaybeIter<A> {
    type Item = A;

    #[inline]
    fn next(&mut self) -> Option<A> {
        self.remaining.take()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = usize::from(self.remaining.is_some());
        (remaining, Some(remaining))
    }
}

impl<A> DoubleEndedIterator for MaybeIter<A> {
    #[inline]
    fn next_back(&mut self) -> Option<A> {
        self.remaining.take()
    }
}

impl<A> ExactSizeIterator for MaybeIter<A> {}

impl<A> FusedIterator for MaybeIter<A> {}

impl<A> IntoIterator for Maybe<A> {
    type Item = A;
    type IntoIter = MaybeIter<A>;

    /// Returns an iterator yielding the contained value zero or one times.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monars::data::Maybe;
    ///
    /// let collected: Vec<i32> = Maybe::Valued(42).into_iter().collect();
    /// assert_eq!(collected, vec![42]);
    ///
    /// let empty: Maybe<i32> = Maybe::Empty;
    /// assert_eq!(empty.into_iter().count(), 0);
    /// ```
    #[inline]
    fn into_iter(self) -> MaybeIter<A> {
        MaybeIter {
            remaining: self.into_option(),
        }
    }
}

impl<'a, A> IntoIterator for &'a Maybe<A> {
    type Item = &'a A;
    type IntoIter = MaybeIter<&'a A>;

    /// Returns an iterator borrowing the contained value zero or one
    /// times, leaving the `Maybe` usable afterwards.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monars::data::Maybe;
    ///
    /// let maybe = Maybe::Valued("payload".to_string());
    /// let borrowed: Vec<&String> = (&maybe).into_iter().collect();
    /// assert_eq!(borrowed.len(), 1);
    /// assert!(maybe.is_valued());
    /// ```
    #[inline]
    fn into_iter(self) -> MaybeIter<&'a A> {
        MaybeIter {
            remaining: self.value_ref(),
        }
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<A: serde::Serialize> serde::Serialize for Maybe<A> {
    /// Serializes exactly like `Option`: `Empty` as a unit/null value,
    /// `Valued(a)` as `a` itself.
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.value_ref().serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, A: serde::Deserialize<'de>> serde::Deserialize<'de> for Maybe<A> {
    /// Deserializes exactly like `Option`, collapsing null into `Empty`.
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        Option::<A>::deserialize(deserializer).map(Self::from_option)
    }
}

static_assertions::assert_impl_all!(Maybe<i32>: Send, Sync, Copy);
static_assertions::assert_impl_all!(Maybe<String>: Clone, Ord);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_maybe_valued_construction() {
        let value: Maybe<i32> = Maybe::Valued(42);
        assert!(value.is_valued());
        assert!(!value.is_empty());
    }

    #[rstest]
    fn test_maybe_empty_construction() {
        let value: Maybe<i32> = Maybe::Empty;
        assert!(value.is_empty());
        assert!(!value.is_valued());
    }

    #[rstest]
    fn test_option_conversion_roundtrip() {
        let some: Option<i32> = Some(42);
        let maybe: Maybe<i32> = some.into();
        let option: Option<i32> = maybe.into();
        assert_eq!(option, Some(42));

        let none: Option<i32> = None;
        let maybe: Maybe<i32> = none.into();
        let option: Option<i32> = maybe.into();
        assert_eq!(option, None);
    }

    #[rstest]
    fn test_empty_orders_before_valued() {
        assert!(Maybe::<i32>::Empty < Maybe::Valued(i32::MIN));
        assert!(Maybe::Valued(1) < Maybe::Valued(2));
    }

    #[rstest]
    fn test_debug_formatting() {
        assert_eq!(format!("{:?}", Maybe::Valued(42)), "Valued(42)");
        assert_eq!(format!("{:?}", Maybe::<i32>::Empty), "Empty");
    }
}
