//! Parsing adapters that report absence instead of errors.
//!
//! [`str::parse`] returns a `Result` whose error type varies by target.
//! At call sites that only care whether the input was usable, that
//! error is noise. [`ParseMaybe`] folds any parse failure into
//! [`Maybe::Empty`], keeping the pipeline uniform.
//!
//! # Examples
//!
//! ```rust
//! use monars::adapt::ParseMaybe;
//! use monars::data::Maybe;
//!
//! let port = "8080".parse_maybe::<u16>().get_or_else(|| 80);
//! assert_eq!(port, 8080);
//!
//! assert_eq!("eighty".parse_maybe::<u16>(), Maybe::Empty);
//! ```

use std::fmt;
use std::str::FromStr;

use crate::data::Maybe;

/// Parsing into [`Maybe`] for string slices.
pub trait ParseMaybe {
    /// Parses into any [`FromStr`] target, collapsing errors to `Empty`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monars::adapt::ParseMaybe;
    /// use monars::data::Maybe;
    ///
    /// assert_eq!("42".parse_maybe::<i32>(), Maybe::Valued(42));
    /// assert_eq!("2.5".parse_maybe::<f64>(), Maybe::Valued(2.5));
    /// assert_eq!("true".parse_maybe::<bool>(), Maybe::Valued(true));
    /// assert_eq!("not a number".parse_maybe::<i32>(), Maybe::Empty);
    /// assert_eq!("".parse_maybe::<i32>(), Maybe::Empty);
    /// ```
    fn parse_maybe<T>(&self) -> Maybe<T>
    where
        T: FromStr;

    /// Parses a textual enumeration, accepting only spellings of a
    /// single variant name.
    ///
    /// On top of [`parse_maybe`](ParseMaybe::parse_maybe), two guards
    /// apply:
    ///
    /// - input containing a comma is rejected outright, since a
    ///   comma-separated list names several values rather than one
    /// - the parsed value must print back (via [`Display`](fmt::Display))
    ///   as the input, compared case-insensitively, which rejects
    ///   spellings the parser tolerates but the type cannot reproduce,
    ///   such as numeric discriminants or short aliases
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::fmt;
    /// use std::str::FromStr;
    /// use monars::adapt::ParseMaybe;
    /// use monars::data::Maybe;
    ///
    /// #[derive(Debug, PartialEq)]
    /// enum Channel {
    ///     Alpha,
    ///     Beta,
    /// }
    ///
    /// impl FromStr for Channel {
    ///     type Err = ();
    ///
    ///     fn from_str(candidate: &str) -> Result<Self, ()> {
    ///         match candidate.to_ascii_lowercase().as_str() {
    ///             "alpha" | "a" | "0" => Ok(Channel::Alpha),
    ///             "beta" | "b" | "1" => Ok(Channel::Beta),
    ///             _ => Err(()),
    ///         }
    ///     }
    /// }
    ///
    /// impl fmt::Display for Channel {
    ///     fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
    ///         match self {
    ///             Channel::Alpha => formatter.write_str("Alpha"),
    ///             Channel::Beta => formatter.write_str("Beta"),
    ///         }
    ///     }
    /// }
    ///
    /// // Variant names round-trip, in any case
    /// assert_eq!("alpha".parse_enum::<Channel>(), Maybe::Valued(Channel::Alpha));
    /// assert_eq!("BETA".parse_enum::<Channel>(), Maybe::Valued(Channel::Beta));
    ///
    /// // The parser accepts "a" and "0", but neither is how Alpha prints
    /// assert_eq!("a".parse_enum::<Channel>(), Maybe::Empty);
    /// assert_eq!("0".parse_enum::<Channel>(), Maybe::Empty);
    ///
    /// // Lists name several values, not one
    /// assert_eq!("Alpha,Beta".parse_enum::<Channel>(), Maybe::Empty);
    /// ```
    fn parse_enum<E>(&self) -> Maybe<E>
    where
        E: FromStr + fmt::Display;
}

impl ParseMaybe for str {
    #[inline]
    fn parse_maybe<T>(&self) -> Maybe<T>
    where
        T: FromStr,
    {
        Maybe::from_option(self.parse().ok())
    }

    fn parse_enum<E>(&self) -> Maybe<E>
    where
        E: FromStr + fmt::Display,
    {
        if self.contains(',') {
            return Maybe::Empty;
        }

        self.parse_maybe::<E>()
            .filter(|parsed| parsed.to_string().eq_ignore_ascii_case(self))
    }
}
