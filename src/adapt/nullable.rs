//! Postfix conversion from [`Option`] into [`Maybe`].
//!
//! [`Maybe`] already converts from `Option` via [`From`], but at the
//! end of a method chain the `From` form forces the reader backwards:
//! `Maybe::from(collection.first())`. The [`OptionExt`] extension trait
//! keeps the conversion where it happens.
//!
//! # Examples
//!
//! ```rust
//! use monars::adapt::OptionExt;
//! use monars::data::Maybe;
//!
//! let numbers = vec![1, 2, 3];
//! let head = numbers.first().into_maybe().map(|n| n * 10);
//! assert_eq!(head, Maybe::Valued(10));
//! ```

use crate::data::Maybe;

/// Postfix conversion from `Option` into [`Maybe`].
pub trait OptionExt<A> {
    /// Converts the `Option` into a [`Maybe`], consuming it.
    ///
    /// `Some(a)` becomes `Valued(a)`, and `None` becomes `Empty`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monars::adapt::OptionExt;
    /// use monars::data::Maybe;
    ///
    /// assert_eq!(Some(42).into_maybe(), Maybe::Valued(42));
    /// assert_eq!(None::<i32>.into_maybe(), Maybe::Empty);
    /// ```
    fn into_maybe(self) -> Maybe<A>;

    /// Views the `Option`'s content as a [`Maybe`] of references.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monars::adapt::OptionExt;
    /// use monars::data::Maybe;
    ///
    /// let config: Option<String> = Some("debug".to_string());
    /// let length = config.as_maybe().map(|mode| mode.len());
    /// assert_eq!(length, Maybe::Valued(5));
    ///
    /// // `config` is still usable afterwards
    /// assert!(config.is_some());
    /// ```
    fn as_maybe(&self) -> Maybe<&A>;
}

impl<A> OptionExt<A> for Option<A> {
    #[inline]
    fn into_maybe(self) -> Maybe<A> {
        Maybe::from_option(self)
    }

    #[inline]
    fn as_maybe(&self) -> Maybe<&A> {
        Maybe::from_option(self.as_ref())
    }
}
