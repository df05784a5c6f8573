//! Try type - a computation that succeeded or failed with a typed error.
//!
//! This module provides the `Try<A, E>` type, which represents a
//! computation that is either a `Success(A)` or a `Failure(E)`. It
//! plays the same role as [`Result`], but as a library-owned type it
//! carries this crate's combinator vocabulary and converts losslessly
//! to and from [`Result`] in both directions.
//!
//! `Try` is success-biased: `map` and `flat_map` transform the success
//! value and pass failures through untouched. A failure is only
//! handled by `fold`, `get_or_else`, or a pattern match.
//!
//! The module is named `fallible` because `try` is a reserved keyword.
//!
//! # Examples
//!
//! ```rust
//! use monars::data::Try;
//!
//! fn checked_div(dividend: i32, divisor: i32) -> Try<i32, String> {
//!     if divisor == 0 {
//!         Try::Failure("division by zero".to_string())
//!     } else {
//!         Try::Success(dividend / divisor)
//!     }
//! }
//!
//! let result = checked_div(84, 2).map(|n| n + 1);
//! assert_eq!(result, Try::Success(43));
//!
//! let failed = checked_div(84, 0).map(|n| n + 1);
//! assert_eq!(failed, Try::Failure("division by zero".to_string()));
//! ```

use std::fmt;

#[cfg(feature = "async")]
use std::future::Future;

use crate::data::Maybe;

/// A computation that succeeded or failed with a typed error.
///
/// `Try<A, E>` represents a value that is either `Success(A)` or
/// `Failure(E)`. Transformation is success-biased: a `Failure` flows
/// through `map` and `flat_map` unchanged, so a pipeline short-circuits
/// on the first failure and preserves that error.
///
/// # Type Parameters
///
/// * `A` - The type of the success value
/// * `E` - The type of the failure value
///
/// # Examples
///
/// ```rust
/// use monars::data::Try;
///
/// let success: Try<i32, String> = Try::Success(42);
/// let failure: Try<i32, String> = Try::Failure("error".to_string());
///
/// // Map over the success value
/// assert_eq!(success.map(|x| x * 2), Try::Success(84));
///
/// // Failures pass through unchanged
/// assert_eq!(failure.map(|x| x * 2), Try::Failure("error".to_string()));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Try<A, E> {
    /// The success variant, carrying the computed value.
    Success(A),
    /// The failure variant, carrying the error.
    Failure(E),
}

impl<A, E> Try<A, E> {
    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if this is a `Success` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monars::data::Try;
    ///
    /// let success: Try<i32, String> = Try::Success(42);
    /// assert!(success.is_success());
    ///
    /// let failure: Try<i32, String> = Try::Failure("error".to_string());
    /// assert!(!failure.is_success());
    /// ```
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns `true` if this is a `Failure` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monars::data::Try;
    ///
    /// let failure: Try<i32, String> = Try::Failure("error".to_string());
    /// assert!(failure.is_failure());
    ///
    /// let success: Try<i32, String> = Try::Success(42);
    /// assert!(!success.is_failure());
    /// ```
    #[inline]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    // =========================================================================
    // Projection (Consuming)
    // =========================================================================

    /// Converts the `Try` into a [`Maybe`] of the success value.
    ///
    /// Returns `Valued(a)` if this is `Success(a)`, otherwise `Empty`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monars::data::{Maybe, Try};
    ///
    /// let success: Try<i32, String> = Try::Success(42);
    /// assert_eq!(success.success(), Maybe::Valued(42));
    ///
    /// let failure: Try<i32, String> = Try::Failure("error".to_string());
    /// assert_eq!(failure.success(), Maybe::Empty);
    /// ```
    #[inline]
    pub fn success(self) -> Maybe<A> {
        match self {
            Self::Success(value) => Maybe::Valued(value),
            Self::Failure(_) => Maybe::Empty,
        }
    }

    /// Converts the `Try` into a [`Maybe`] of the failure value.
    ///
    /// Returns `Valued(e)` if this is `Failure(e)`, otherwise `Empty`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monars::data::{Maybe, Try};
    ///
    /// let failure: Try<i32, String> = Try::Failure("error".to_string());
    /// assert_eq!(failure.failure(), Maybe::Valued("error".to_string()));
    ///
    /// let success: Try<i32, String> = Try::Success(42);
    /// assert_eq!(success.failure(), Maybe::Empty);
    /// ```
    #[inline]
    pub fn failure(self) -> Maybe<E> {
        match self {
            Self::Success(_) => Maybe::Empty,
            Self::Failure(error) => Maybe::Valued(error),
        }
    }

    // =========================================================================
    // Projection (Non-consuming)
    // =========================================================================

    /// Returns a [`Maybe`] referencing the success value if present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monars::data::{Maybe, Try};
    ///
    /// let success: Try<i32, String> = Try::Success(42);
    /// assert_eq!(success.success_ref(), Maybe::Valued(&42));
    ///
    /// let failure: Try<i32, String> = Try::Failure("error".to_string());
    /// assert_eq!(failure.success_ref(), Maybe::Empty);
    /// ```
    #[inline]
    pub const fn success_ref(&self) -> Maybe<&A> {
        match self {
            Self::Success(value) => Maybe::Valued(value),
            Self::Failure(_) => Maybe::Empty,
        }
    }

    /// Returns a [`Maybe`] referencing the failure value if present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monars::data::{Maybe, Try};
    ///
    /// let failure: Try<i32, String> = Try::Failure("error".to_string());
    /// assert_eq!(failure.failure_ref(), Maybe::Valued(&"error".to_string()));
    ///
    /// let success: Try<i32, String> = Try::Success(42);
    /// assert_eq!(success.failure_ref(), Maybe::Empty);
    /// ```
    #[inline]
    pub const fn failure_ref(&self) -> Maybe<&E> {
        match self {
            Self::Success(_) => Maybe::Empty,
            Self::Failure(error) => Maybe::Valued(error),
        }
    }

    // =========================================================================
    // Mapping Operations
    // =========================================================================

    /// Applies a function to the success value if present.
    ///
    /// If this is `Success(a)`, returns `Success(function(a))`.
    /// If this is `Failure(e)`, returns `Failure(e)` unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monars::data::Try;
    ///
    /// let success: Try<i32, String> = Try::Success(42);
    /// assert_eq!(success.map(|x| x * 2), Try::Success(84));
    ///
    /// let failure: Try<i32, String> = Try::Failure("error".to_string());
    /// assert_eq!(failure.map(|x| x * 2), Try::Failure("error".to_string()));
    /// ```
    #[inline]
    pub fn map<B, F>(self, function: F) -> Try<B, E>
    where
        F: FnOnce(A) -> B,
    {
        match self {
            Self::Success(value) => Try::Success(function(value)),
            Self::Failure(error) => Try::Failure(error),
        }
    }

    /// Applies a `Try`-producing function to the success value and
    /// flattens the result.
    ///
    /// If this is `Success(a)`, returns `function(a)`.
    /// If this is `Failure(e)`, returns `Failure(e)` without invoking
    /// the function, so a pipeline keeps its first failure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monars::data::Try;
    ///
    /// let checked_half = |n: i32| {
    ///     if n % 2 == 0 {
    ///         Try::Success(n / 2)
    ///     } else {
    ///         Try::Failure(format!("{} is odd", n))
    ///     }
    /// };
    ///
    /// let result: Try<i32, String> = Try::Success(8).flat_map(checked_half);
    /// assert_eq!(result, Try::Success(4));
    ///
    /// let failed: Try<i32, String> = Try::Success(7).flat_map(checked_half);
    /// assert_eq!(failed, Try::Failure("7 is odd".to_string()));
    /// ```
    #[inline]
    pub fn flat_map<B, F>(self, function: F) -> Try<B, E>
    where
        F: FnOnce(A) -> Try<B, E>,
    {
        match self {
            Self::Success(value) => function(value),
            Self::Failure(error) => Try::Failure(error),
        }
    }

    // =========================================================================
    // Fold Operations
    // =========================================================================

    /// Eliminates the `Try` by applying one of two functions.
    ///
    /// Exactly one of the two functions is invoked: `success_function`
    /// for `Success`, `failure_function` for `Failure`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monars::data::Try;
    ///
    /// let success: Try<i32, String> = Try::Success(42);
    /// let described = success.fold(
    ///     |n| format!("succeeded with {}", n),
    ///     |error| format!("failed with {}", error),
    /// );
    /// assert_eq!(described, "succeeded with 42");
    /// ```
    #[inline]
    pub fn fold<T, F, G>(self, success_function: F, failure_function: G) -> T
    where
        F: FnOnce(A) -> T,
        G: FnOnce(E) -> T,
    {
        match self {
            Self::Success(value) => success_function(value),
            Self::Failure(error) => failure_function(error),
        }
    }

    /// Returns the success value, or computes one from the failure.
    ///
    /// The handler is only invoked when this is `Failure`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monars::data::Try;
    ///
    /// let success: Try<i32, &str> = Try::Success(42);
    /// assert_eq!(success.get_or_else(|_| 0), 42);
    ///
    /// let failure: Try<i32, &str> = Try::Failure("boom");
    /// assert_eq!(failure.get_or_else(|error| error.len() as i32), 4);
    /// ```
    #[inline]
    pub fn get_or_else<F>(self, handler: F) -> A
    where
        F: FnOnce(E) -> A,
    {
        match self {
            Self::Success(value) => value,
            Self::Failure(error) => handler(error),
        }
    }

    // =========================================================================
    // Unwrap Operations
    // =========================================================================

    /// Returns the success value, consuming the try.
    ///
    /// # Panics
    ///
    /// Panics if this is a `Failure` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monars::data::Try;
    ///
    /// let success: Try<i32, String> = Try::Success(42);
    /// assert_eq!(success.unwrap_success(), 42);
    /// ```
    #[inline]
    pub fn unwrap_success(self) -> A {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => panic!("called `Try::unwrap_success()` on a `Failure` value"),
        }
    }

    /// Returns the failure value, consuming the try.
    ///
    /// # Panics
    ///
    /// Panics if this is a `Success` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monars::data::Try;
    ///
    /// let failure: Try<i32, String> = Try::Failure("error".to_string());
    /// assert_eq!(failure.unwrap_failure(), "error".to_string());
    /// ```
    #[inline]
    pub fn unwrap_failure(self) -> E {
        match self {
            Self::Success(_) => panic!("called `Try::unwrap_failure()` on a `Success` value"),
            Self::Failure(error) => error,
        }
    }
}

// =============================================================================
// Async Operations
// =============================================================================

#[cfg(feature = "async")]
impl<A, E> Try<A, E> {
    /// Applies an async function to the success value if present.
    ///
    /// If this is `Failure`, the function is never invoked and no
    /// future is awaited.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// use monars::data::Try;
    ///
    /// #[tokio::main]
    /// async fn main() {
    ///     let success: Try<i32, String> = Try::Success(21);
    ///     let doubled = success.map_async(|n| async move { n * 2 }).await;
    ///     assert_eq!(doubled, Try::Success(42));
    /// }
    /// ```
    pub async fn map_async<B, F, Fut>(self, function: F) -> Try<B, E>
    where
        F: FnOnce(A) -> Fut,
        Fut: Future<Output = B>,
    {
        match self {
            Self::Success(value) => Try::Success(function(value).await),
            Self::Failure(error) => Try::Failure(error),
        }
    }

    /// Applies an async `Try`-producing function to the success value
    /// and flattens the result.
    ///
    /// If this is `Failure`, the function is never invoked and no
    /// future is awaited.
    pub async fn flat_map_async<B, F, Fut>(self, function: F) -> Try<B, E>
    where
        F: FnOnce(A) -> Fut,
        Fut: Future<Output = Try<B, E>>,
    {
        match self {
            Self::Success(value) => function(value).await,
            Self::Failure(error) => Try::Failure(error),
        }
    }

    /// Eliminates the `Try` by awaiting one of two async functions.
    ///
    /// Exactly one of the two futures is created and awaited.
    pub async fn fold_async<T, F, G, FutSuccess, FutFailure>(
        self,
        success_function: F,
        failure_function: G,
    ) -> T
    where
        F: FnOnce(A) -> FutSuccess,
        G: FnOnce(E) -> FutFailure,
        FutSuccess: Future<Output = T>,
        FutFailure: Future<Output = T>,
    {
        match self {
            Self::Success(value) => success_function(value).await,
            Self::Failure(error) => failure_function(error).await,
        }
    }
}

// =============================================================================
// Debug Implementation
// =============================================================================

impl<A: fmt::Debug, E: fmt::Debug> fmt::Debug for Try<A, E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success(value) => formatter.debug_tuple("Success").field(value).finish(),
            Self::Failure(error) => formatter.debug_tuple("Failure").field(error).finish(),
        }
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<A, E> From<Result<A, E>> for Try<A, E> {
    /// Converts a `Result` to a `Try`.
    ///
    /// `Ok(a)` becomes `Success(a)`, and `Err(e)` becomes `Failure(e)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monars::data::Try;
    ///
    /// let ok: Result<i32, String> = Ok(42);
    /// let fallible: Try<i32, String> = ok.into();
    /// assert_eq!(fallible, Try::Success(42));
    ///
    /// let err: Result<i32, String> = Err("error".to_string());
    /// let fallible: Try<i32, String> = err.into();
    /// assert_eq!(fallible, Try::Failure("error".to_string()));
    /// ```
    #[inline]
    fn from(result: Result<A, E>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(error) => Self::Failure(error),
        }
    }
}

impl<A, E> From<Try<A, E>> for Result<A, E> {
    /// Converts a `Try` to a `Result`.
    ///
    /// `Success(a)` becomes `Ok(a)`, and `Failure(e)` becomes `Err(e)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monars::data::Try;
    ///
    /// let success: Try<i32, String> = Try::Success(42);
    /// let result: Result<i32, String> = success.into();
    /// assert_eq!(result, Ok(42));
    /// ```
    #[inline]
    fn from(fallible: Try<A, E>) -> Self {
        match fallible {
            Try::Success(value) => Ok(value),
            Try::Failure(error) => Err(error),
        }
    }
}

static_assertions::assert_impl_all!(Try<i32, String>: Send, Sync, Clone);
