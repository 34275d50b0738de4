//! Read-only views over an [`OrderedMap`]
//!
//! A view borrows the map, so it always reflects the map's current contents
//! and can be iterated any number of times. The map cannot be modified while
//! a view or one of its iterators is alive.

use super::iter::{Iter, Keys, Values};
use super::map::OrderedMap;
use std::borrow::Borrow;
use std::fmt;
use std::hash::{BuildHasher, Hash};

fn write_list<I, F>(f: &mut fmt::Formatter<'_>, items: I, mut write_item: F) -> fmt::Result
where
    I: Iterator,
    F: FnMut(&mut fmt::Formatter<'_>, I::Item) -> fmt::Result,
{
    f.write_str("[")?;
    for (i, item) in items.enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write_item(f, item)?;
    }
    f.write_str("]")
}

/// View over the keys, in insertion order
pub struct KeysView<'a, K, V, S> {
    map: &'a OrderedMap<K, V, S>,
}

impl<'a, K, V, S> KeysView<'a, K, V, S> {
    pub(super) fn new(map: &'a OrderedMap<K, V, S>) -> Self {
        Self { map }
    }

    /// Fresh iterator over the keys
    pub fn iter(&self) -> Keys<'a, K, V> {
        Keys::new(self.map.iter())
    }

    /// Number of keys
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// O(1) key membership
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q> + Hash + Eq,
        Q: Hash + Eq + ?Sized,
        S: BuildHasher,
    {
        self.map.contains_key(key)
    }
}

impl<K, V, S> Clone for KeysView<'_, K, V, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K, V, S> Copy for KeysView<'_, K, V, S> {}

impl<'a, K, V, S> IntoIterator for KeysView<'a, K, V, S> {
    type Item = &'a K;
    type IntoIter = Keys<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K: fmt::Display, V, S> fmt::Display for KeysView<'_, K, V, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_list(f, self.iter(), |f, key| write!(f, "{}", key))
    }
}

impl<K: fmt::Debug, V, S> fmt::Debug for KeysView<'_, K, V, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// View over the values, in insertion order of their keys
pub struct ValuesView<'a, K, V, S> {
    map: &'a OrderedMap<K, V, S>,
}

impl<'a, K, V, S> ValuesView<'a, K, V, S> {
    pub(super) fn new(map: &'a OrderedMap<K, V, S>) -> Self {
        Self { map }
    }

    /// Fresh iterator over the values
    pub fn iter(&self) -> Values<'a, K, V> {
        Values::new(self.map.iter())
    }

    /// Number of values
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Linear search for `value`
    pub fn contains(&self, value: &V) -> bool
    where
        V: PartialEq,
    {
        self.iter().any(|v| v == value)
    }
}

impl<K, V, S> Clone for ValuesView<'_, K, V, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K, V, S> Copy for ValuesView<'_, K, V, S> {}

impl<'a, K, V, S> IntoIterator for ValuesView<'a, K, V, S> {
    type Item = &'a V;
    type IntoIter = Values<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K, V: fmt::Display, S> fmt::Display for ValuesView<'_, K, V, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_list(f, self.iter(), |f, value| write!(f, "{}", value))
    }
}

impl<K, V: fmt::Debug, S> fmt::Debug for ValuesView<'_, K, V, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// View over `(key, value)` pairs, in insertion order
pub struct ItemsView<'a, K, V, S> {
    map: &'a OrderedMap<K, V, S>,
}

impl<'a, K, V, S> ItemsView<'a, K, V, S> {
    pub(super) fn new(map: &'a OrderedMap<K, V, S>) -> Self {
        Self { map }
    }

    /// Fresh iterator over the pairs
    pub fn iter(&self) -> Iter<'a, K, V> {
        self.map.iter()
    }

    /// Number of pairs
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Whether `key` is present and maps to `value`
    pub fn contains<Q>(&self, key: &Q, value: &V) -> bool
    where
        K: Borrow<Q> + Hash + Eq,
        Q: Hash + Eq + ?Sized,
        V: PartialEq,
        S: BuildHasher,
    {
        self.map.get(key).map_or(false, |v| v == value)
    }
}

impl<K, V, S> Clone for ItemsView<'_, K, V, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K, V, S> Copy for ItemsView<'_, K, V, S> {}

impl<'a, K, V, S> IntoIterator for ItemsView<'a, K, V, S> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K: fmt::Display, V: fmt::Display, S> fmt::Display for ItemsView<'_, K, V, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_list(f, self.iter(), |f, (key, value)| {
            write!(f, "({}, {})", key, value)
        })
    }
}

impl<K: fmt::Debug, V: fmt::Debug, S> fmt::Debug for ItemsView<'_, K, V, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use crate::OrderedMap;

    #[test]
    fn test_views_are_restartable() {
        let map = OrderedMap::from([("name", 1), ("age", 2)]);
        let keys = map.keys();
        let first: Vec<_> = keys.iter().collect();
        let second: Vec<_> = keys.into_iter().collect();
        assert_eq!(first, second);
        assert_eq!(keys.len(), 2);
    }

    #[test]
    fn test_view_membership() {
        let map = OrderedMap::from([("a", 1), ("b", 2)]);
        assert!(map.keys().contains("a"));
        assert!(!map.keys().contains("z"));
        assert!(map.values().contains(&2));
        assert!(!map.values().contains(&3));
        assert!(map.items().contains("b", &2));
        assert!(!map.items().contains("b", &1));
    }

    #[test]
    fn test_view_display() {
        let map = OrderedMap::from([(1, 10), (2, 20)]);
        assert_eq!(map.keys().to_string(), "[1, 2]");
        assert_eq!(map.values().to_string(), "[10, 20]");
        assert_eq!(map.items().to_string(), "[(1, 10), (2, 20)]");
        assert_eq!(format!("{:?}", map.items()), "[(1, 10), (2, 20)]");
    }

    #[test]
    fn test_empty_views() {
        let map: OrderedMap<i32, i32> = OrderedMap::new();
        assert!(map.keys().is_empty());
        assert!(map.values().is_empty());
        assert!(map.items().is_empty());
        assert_eq!(map.keys().to_string(), "[]");
    }
}
