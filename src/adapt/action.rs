//! Adapters that turn side-effecting closures into [`Unit`]-returning
//! functions.
//!
//! APIs built around this crate's value types expect every function to
//! produce a value. A closure run purely for its effect produces `()`,
//! and a closure whose result is irrelevant produces clutter. These
//! adapters wrap either kind into a function returning [`Unit`].
//!
//! A single generic parameter stands for the whole argument list: a
//! closure over several values takes them as one tuple.
//!
//! # Examples
//!
//! ```rust
//! use monars::adapt::unitized;
//! use monars::data::Unit;
//!
//! let mut audit = Vec::new();
//! let mut record = unitized(|entry: &str| audit.push(entry.to_string()));
//!
//! assert_eq!(record("created"), Unit);
//! assert_eq!(record("deleted"), Unit);
//!
//! drop(record);
//! assert_eq!(audit.len(), 2);
//! ```

use crate::data::Unit;

/// Wraps a zero-argument side effect into a function returning [`Unit`].
///
/// # Examples
///
/// ```rust
/// use monars::adapt::unitized0;
/// use monars::data::Unit;
///
/// let mut count = 0;
/// let mut tick = unitized0(|| count += 1);
///
/// assert_eq!(tick(), Unit);
/// assert_eq!(tick(), Unit);
///
/// drop(tick);
/// assert_eq!(count, 2);
/// ```
pub fn unitized0<F>(mut action: F) -> impl FnMut() -> Unit
where
    F: FnMut(),
{
    move || {
        action();
        Unit
    }
}

/// Wraps a side effect over one argument into a function returning
/// [`Unit`].
///
/// The argument may be a tuple, which adapts closures over any number
/// of values.
///
/// # Examples
///
/// ```rust
/// use monars::adapt::unitized;
/// use monars::data::Unit;
///
/// let mut total = 0;
/// let mut accumulate = unitized(|(amount, factor): (i32, i32)| total += amount * factor);
///
/// accumulate((2, 3));
/// accumulate((4, 1));
///
/// drop(accumulate);
/// assert_eq!(total, 10);
/// ```
pub fn unitized<A, F>(mut action: F) -> impl FnMut(A) -> Unit
where
    F: FnMut(A),
{
    move |argument| {
        action(argument);
        Unit
    }
}

/// Wraps a closure whose result is irrelevant into a function returning
/// [`Unit`], discarding the original result.
///
/// # Examples
///
/// ```rust
/// use monars::adapt::discarding;
/// use monars::data::Unit;
///
/// let mut seen = Vec::new();
/// let mut observe = discarding(|value: i32| {
///     seen.push(value);
///     value * 2
/// });
///
/// // The doubled value is discarded
/// assert_eq!(observe(5), Unit);
///
/// drop(observe);
/// assert_eq!(seen, vec![5]);
/// ```
pub fn discarding<A, B, F>(mut function: F) -> impl FnMut(A) -> Unit
where
    F: FnMut(A) -> B,
{
    move |argument| {
        let _ = function(argument);
        Unit
    }
}
