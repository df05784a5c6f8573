//! Adapters that lift plain Rust values into the core types.
//!
//! Each adapter bridges one everyday surface into the
//! [`Maybe`](crate::data::Maybe)/[`Try`](crate::data::Try) vocabulary:
//!
//! - [`BoolExt`]: pipeline combinators for `bool`
//! - [`ParseMaybe`]: parsing `&str` without caring about the error
//! - [`OptionExt`]: postfix conversion from [`Option`]
//! - [`MaybeLookup`]: map lookups that land in `Maybe`
//! - [`unitized0`], [`unitized`], [`discarding`]: side-effecting
//!   closures as [`Unit`](crate::data::Unit)-returning functions
//!
//! # Examples
//!
//! ```rust
//! use std::collections::HashMap;
//! use monars::adapt::{BoolExt, MaybeLookup, ParseMaybe};
//! use monars::data::Maybe;
//!
//! let mut limits: HashMap<String, String> = HashMap::new();
//! limits.insert("max-retries".to_string(), "5".to_string());
//!
//! let retries = limits
//!     .lookup("max-retries")
//!     .flat_map(|raw| raw.parse_maybe::<u32>())
//!     .filter(|count| *count <= 10)
//!     .get_or_else(|| 3);
//! assert_eq!(retries, 5);
//!
//! let throttled = (retries > 4).map_true(|| "slow down");
//! assert_eq!(throttled, Maybe::Valued("slow down"));
//! ```

mod action;
mod boolean;
mod lookup;
mod nullable;
mod parse;

pub use action::{discarding, unitized, unitized0};
pub use boolean::BoolExt;
pub use lookup::MaybeLookup;
pub use nullable::OptionExt;
pub use parse::ParseMaybe;
