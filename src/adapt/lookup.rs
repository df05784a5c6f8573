//! Map lookups that land directly in [`Maybe`].
//!
//! The std map getters return `Option<&V>`, which forces a conversion
//! before the value can join a [`Maybe`] pipeline. [`MaybeLookup`]
//! performs the lookup and the conversion in one step, keeping the
//! borrowed-key flexibility of [`HashMap::get`] and [`BTreeMap::get`].
//!
//! # Examples
//!
//! ```rust
//! use std::collections::HashMap;
//! use monars::adapt::MaybeLookup;
//! use monars::data::Maybe;
//!
//! let mut headers: HashMap<String, String> = HashMap::new();
//! headers.insert("content-type".to_string(), "text/plain".to_string());
//!
//! // A String-keyed map looked up by &str
//! let charset = headers
//!     .lookup("content-type")
//!     .map(|value| value.starts_with("text/"));
//! assert_eq!(charset, Maybe::Valued(true));
//! ```

use std::borrow::Borrow;
use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

use crate::data::Maybe;

/// Key lookup returning [`Maybe`] instead of [`Option`].
///
/// The key parameter `Q` follows the same [`Borrow`] pattern as the
/// std map getters, so an owned-key map can be queried with a borrowed
/// key.
pub trait MaybeLookup<Q: ?Sized> {
    /// The value type stored in the collection.
    type Value;

    /// Looks up a key, returning a reference to its value if present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use monars::adapt::MaybeLookup;
    /// use monars::data::Maybe;
    ///
    /// let mut scores: BTreeMap<String, i32> = BTreeMap::new();
    /// scores.insert("alice".to_string(), 10);
    ///
    /// assert_eq!(scores.lookup("alice"), Maybe::Valued(&10));
    /// assert_eq!(scores.lookup("bob"), Maybe::Empty);
    /// ```
    fn lookup(&self, key: &Q) -> Maybe<&Self::Value>;

    /// Looks up a key, cloning the value out if present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::collections::HashMap;
    /// use monars::adapt::MaybeLookup;
    /// use monars::data::Maybe;
    ///
    /// let mut scores: HashMap<&str, i32> = HashMap::new();
    /// scores.insert("alice", 10);
    ///
    /// assert_eq!(scores.lookup_cloned("alice"), Maybe::Valued(10));
    /// ```
    fn lookup_cloned(&self, key: &Q) -> Maybe<Self::Value>
    where
        Self::Value: Clone,
    {
        self.lookup(key).map(Clone::clone)
    }
}

impl<K, V, Q, S> MaybeLookup<Q> for HashMap<K, V, S>
where
    K: Borrow<Q> + Eq + Hash,
    Q: ?Sized + Eq + Hash,
    S: BuildHasher,
{
    type Value = V;

    #[inline]
    fn lookup(&self, key: &Q) -> Maybe<&V> {
        Maybe::from_option(self.get(key))
    }
}

impl<K, V, Q> MaybeLookup<Q> for BTreeMap<K, V>
where
    K: Borrow<Q> + Ord,
    Q: ?Sized + Ord,
{
    type Value = V;

    #[inline]
    fn lookup(&self, key: &Q) -> Maybe<&V> {
        Maybe::from_option(self.get(key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn sample_hash_map() -> HashMap<String, i32> {
        let mut map = HashMap::new();
        map.insert("one".to_string(), 1);
        map.insert("two".to_string(), 2);
        map
    }

    fn sample_btree_map() -> BTreeMap<i32, &'static str> {
        let mut map = BTreeMap::new();
        map.insert(1, "one");
        map.insert(2, "two");
        map
    }

    #[rstest]
    fn hash_map_lookup_hits_and_misses() {
        let map = sample_hash_map();
        assert_eq!(map.lookup("one"), Maybe::Valued(&1));
        assert_eq!(map.lookup("three"), Maybe::Empty);
    }

    #[rstest]
    fn hash_map_lookup_accepts_borrowed_keys() {
        let map = sample_hash_map();
        let owned_key = "two".to_string();
        assert_eq!(map.lookup(owned_key.as_str()), Maybe::Valued(&2));
        assert_eq!(map.lookup(&owned_key), Maybe::Valued(&2));
    }

    #[rstest]
    fn btree_map_lookup_hits_and_misses() {
        let map = sample_btree_map();
        assert_eq!(map.lookup(&1), Maybe::Valued(&"one"));
        assert_eq!(map.lookup(&9), Maybe::Empty);
    }

    #[rstest]
    fn lookup_cloned_detaches_from_the_map() {
        let mut map = sample_hash_map();
        let cloned = map.lookup_cloned("one");
        map.clear();
        assert_eq!(cloned, Maybe::Valued(1));
        assert_eq!(map.lookup_cloned("one"), Maybe::Empty);
    }

    #[rstest]
    fn lookup_flows_into_a_pipeline() {
        let map = sample_btree_map();
        let shouted = map.lookup(&2).map(|name| name.to_uppercase());
        assert_eq!(shouted, Maybe::Valued("TWO".to_string()));
    }
}
