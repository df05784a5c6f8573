//! Combinators that lift `bool` into the core value types.
//!
//! A raw `bool` forces an immediate `if`; the [`BoolExt`] extension
//! trait lets a condition flow into a pipeline instead. Every
//! combinator takes its branches as closures and evaluates only the
//! branch that is actually selected.
//!
//! # Examples
//!
//! ```rust
//! use monars::adapt::BoolExt;
//! use monars::data::Maybe;
//!
//! let age = 34;
//! let discount = (age >= 65).map_true(|| 0.2);
//! assert_eq!(discount, Maybe::Empty);
//! ```

#[cfg(feature = "async")]
use std::future::Future;

use crate::data::{Maybe, Try, Unit};

/// Pipeline combinators for `bool`.
///
/// All combinators are lazy in their branches: a closure argument is
/// invoked only when its branch is selected, and at most once.
pub trait BoolExt {
    /// Material implication with a lazily evaluated consequent.
    ///
    /// Returns `true` when this is `false` (vacuous truth) without
    /// invoking the consequent; otherwise returns `consequent()`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monars::adapt::BoolExt;
    ///
    /// let logged_in = false;
    /// let can_edit = || false;
    ///
    /// // A rule about logged-in users holds vacuously for guests
    /// assert!(logged_in.implies(can_edit));
    /// assert!(!true.implies(|| false));
    /// assert!(true.implies(|| true));
    /// ```
    fn implies<F>(self, consequent: F) -> bool
    where
        F: FnOnce() -> bool;

    /// Produces a value when `true`, otherwise `Empty`.
    ///
    /// The function is only invoked when this is `true`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monars::adapt::BoolExt;
    /// use monars::data::Maybe;
    ///
    /// assert_eq!(true.map_true(|| 42), Maybe::Valued(42));
    /// assert_eq!(false.map_true(|| 42), Maybe::Empty);
    /// ```
    fn map_true<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce() -> B;

    /// Produces a [`Maybe`] when `true`, otherwise `Empty`.
    ///
    /// Unlike [`map_true`](BoolExt::map_true), the function itself may
    /// decline by returning `Empty`. It is only invoked when this is
    /// `true`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monars::adapt::BoolExt;
    /// use monars::data::Maybe;
    ///
    /// let lookup = || Maybe::Valued("cached");
    /// assert_eq!(true.flat_map_true(lookup), Maybe::Valued("cached"));
    /// assert_eq!(false.flat_map_true(lookup), Maybe::Empty);
    /// assert_eq!(true.flat_map_true(|| Maybe::<&str>::Empty), Maybe::Empty);
    /// ```
    fn flat_map_true<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce() -> Maybe<B>;

    /// Eliminates the `bool` by invoking one of two functions.
    ///
    /// Exactly one of the two functions is invoked.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monars::adapt::BoolExt;
    ///
    /// let label = true.fold(|| "enabled", || "disabled");
    /// assert_eq!(label, "enabled");
    /// ```
    fn fold<B, F, G>(self, true_function: F, false_function: G) -> B
    where
        F: FnOnce() -> B,
        G: FnOnce() -> B;

    /// Converts `true` into `Valued(Unit)` and `false` into `Empty`.
    ///
    /// Useful as the head of a pipeline that should only proceed when
    /// a condition holds.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monars::adapt::BoolExt;
    /// use monars::data::{Maybe, Unit};
    ///
    /// let input = "hello";
    /// let greeting = (!input.is_empty())
    ///     .guard()
    ///     .map(|_| format!("{}, world", input));
    /// assert_eq!(greeting, Maybe::Valued("hello, world".to_string()));
    /// ```
    fn guard(self) -> Maybe<Unit>;

    /// Converts into a [`Try`], turning `false` into a typed error.
    ///
    /// Returns `Success(true)` when this is `true`, otherwise
    /// `Failure(error_function())`. The error function is only invoked
    /// when this is `false`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monars::adapt::BoolExt;
    /// use monars::data::Try;
    ///
    /// let checked: Try<bool, &str> = (2 + 2 == 4).to_try(|| "arithmetic is broken");
    /// assert_eq!(checked, Try::Success(true));
    ///
    /// let failed: Try<bool, &str> = false.to_try(|| "condition not met");
    /// assert_eq!(failed, Try::Failure("condition not met"));
    /// ```
    fn to_try<E, F>(self, error_function: F) -> Try<bool, E>
    where
        F: FnOnce() -> E;

    /// Converts into a [`Try`] with a computed success value.
    ///
    /// Exactly one of the two functions is invoked: `success_function`
    /// when this is `true`, `error_function` when this is `false`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monars::adapt::BoolExt;
    /// use monars::data::Try;
    ///
    /// let port: Try<u16, String> = true.to_try_with(|| 8080, || "no port".to_string());
    /// assert_eq!(port, Try::Success(8080));
    /// ```
    fn to_try_with<A, E, F, G>(self, success_function: F, error_function: G) -> Try<A, E>
    where
        F: FnOnce() -> A,
        G: FnOnce() -> E;

    /// Async variant of [`map_true`](BoolExt::map_true).
    ///
    /// The function is only invoked, and its future only awaited, when
    /// this is `true`.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// use monars::adapt::BoolExt;
    /// use monars::data::Maybe;
    ///
    /// #[tokio::main]
    /// async fn main() {
    ///     let fetched = true.map_true_async(|| async { 42 }).await;
    ///     assert_eq!(fetched, Maybe::Valued(42));
    /// }
    /// ```
    #[cfg(feature = "async")]
    fn map_true_async<B, F, Fut>(self, function: F) -> impl Future<Output = Maybe<B>>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = B>;

    /// Async variant of [`flat_map_true`](BoolExt::flat_map_true).
    ///
    /// The function is only invoked, and its future only awaited, when
    /// this is `true`.
    #[cfg(feature = "async")]
    fn flat_map_true_async<B, F, Fut>(self, function: F) -> impl Future<Output = Maybe<B>>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Maybe<B>>;

    /// Async variant of [`fold`](BoolExt::fold).
    ///
    /// Exactly one of the two futures is created and awaited.
    #[cfg(feature = "async")]
    fn fold_async<B, F, G, FutTrue, FutFalse>(
        self,
        true_function: F,
        false_function: G,
    ) -> impl Future<Output = B>
    where
        F: FnOnce() -> FutTrue,
        G: FnOnce() -> FutFalse,
        FutTrue: Future<Output = B>,
        FutFalse: Future<Output = B>;

    /// Async variant of [`to_try_with`](BoolExt::to_try_with).
    ///
    /// Exactly one of the two futures is created and awaited.
    #[cfg(feature = "async")]
    fn to_try_with_async<A, E, F, G, FutSuccess, FutFailure>(
        self,
        success_function: F,
        error_function: G,
    ) -> impl Future<Output = Try<A, E>>
    where
        F: FnOnce() -> FutSuccess,
        G: FnOnce() -> FutFailure,
        FutSuccess: Future<Output = A>,
        FutFailure: Future<Output = E>;
}

impl BoolExt for bool {
    #[inline]
    fn implies<F>(self, consequent: F) -> bool
    where
        F: FnOnce() -> bool,
    {
        !self || consequent()
    }

    #[inline]
    fn map_true<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce() -> B,
    {
        if self {
            Maybe::Valued(function())
        } else {
            Maybe::Empty
        }
    }

    #[inline]
    fn flat_map_true<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce() -> Maybe<B>,
    {
        if self { function() } else { Maybe::Empty }
    }

    #[inline]
    fn fold<B, F, G>(self, true_function: F, false_function: G) -> B
    where
        F: FnOnce() -> B,
        G: FnOnce() -> B,
    {
        if self { true_function() } else { false_function() }
    }

    #[inline]
    fn guard(self) -> Maybe<Unit> {
        if self { Maybe::Valued(Unit) } else { Maybe::Empty }
    }

    #[inline]
    fn to_try<E, F>(self, error_function: F) -> Try<bool, E>
    where
        F: FnOnce() -> E,
    {
        if self {
            Try::Success(true)
        } else {
            Try::Failure(error_function())
        }
    }

    #[inline]
    fn to_try_with<A, E, F, G>(self, success_function: F, error_function: G) -> Try<A, E>
    where
        F: FnOnce() -> A,
        G: FnOnce() -> E,
    {
        if self {
            Try::Success(success_function())
        } else {
            Try::Failure(error_function())
        }
    }

    #[cfg(feature = "async")]
    fn map_true_async<B, F, Fut>(self, function: F) -> impl Future<Output = Maybe<B>>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = B>,
    {
        async move {
            if self {
                Maybe::Valued(function().await)
            } else {
                Maybe::Empty
            }
        }
    }

    #[cfg(feature = "async")]
    fn flat_map_true_async<B, F, Fut>(self, function: F) -> impl Future<Output = Maybe<B>>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Maybe<B>>,
    {
        async move {
            if self {
                function().await
            } else {
                Maybe::Empty
            }
        }
    }

    #[cfg(feature = "async")]
    fn fold_async<B, F, G, FutTrue, FutFalse>(
        self,
        true_function: F,
        false_function: G,
    ) -> impl Future<Output = B>
    where
        F: FnOnce() -> FutTrue,
        G: FnOnce() -> FutFalse,
        FutTrue: Future<Output = B>,
        FutFalse: Future<Output = B>,
    {
        async move {
            if self {
                true_function().await
            } else {
                false_function().await
            }
        }
    }

    #[cfg(feature = "async")]
    fn to_try_with_async<A, E, F, G, FutSuccess, FutFailure>(
        self,
        success_function: F,
        error_function: G,
    ) -> impl Future<Output = Try<A, E>>
    where
        F: FnOnce() -> FutSuccess,
        G: FnOnce() -> FutFailure,
        FutSuccess: Future<Output = A>,
        FutFailure: Future<Output = E>,
    {
        async move {
            if self {
                Try::Success(success_function().await)
            } else {
                Try::Failure(error_function().await)
            }
        }
    }
}
