//! OrderedMap - insertion-ordered hash table
//!
//! Entries live in a slot vector in first-insertion order. A power-of-two
//! bucket array holds the head of a collision chain per bucket, and each live
//! slot links to the next slot of its chain, so lookup costs one hash plus a
//! short chain walk.
//!
//! Removing an entry unlinks its slot and leaves a tombstone behind, which
//! keeps every other entry at its position. Tombstones at the tail are popped
//! right away; the rest are squeezed out by compaction, which preserves order.

use super::entry::{Entry, OccupiedEntry, VacantEntry};
use super::iter::{IntoIter, Iter, IterMut, ValuesMut};
use super::views::{ItemsView, KeysView, ValuesView};
use crate::config::{Config, OrderedMapConfig};
use crate::error::{DictupleError, Result};
use std::borrow::Borrow;
use std::fmt;
use std::hash::{BuildHasher, Hash, Hasher};
use std::mem;
use std::ops::{BitOr, Index};

/// End of a collision chain
pub(super) const TAIL: usize = usize::MAX;

/// One position in insertion order
#[derive(Clone)]
pub(super) struct Slot<K, V> {
    /// Cached hash of the key
    pub(super) hash: u64,
    /// Next slot in the same bucket chain
    pub(super) link: usize,
    /// `None` marks a tombstone
    pub(super) entry: Option<(K, V)>,
}

/// Insertion-ordered hash map
///
/// Keys are unique; re-inserting an existing key overwrites its value in place
/// without moving it. Iteration always follows first-insertion order.
///
/// # Examples
///
/// ```rust
/// use dictuple::OrderedMap;
///
/// let mut map = OrderedMap::new();
/// map.insert("a", 1);
/// map.insert("b", 2);
/// map.insert("a", 3);
///
/// let items: Vec<_> = map.iter().map(|(k, v)| (*k, *v)).collect();
/// assert_eq!(items, vec![("a", 3), ("b", 2)]);
/// ```
#[derive(Clone)]
pub struct OrderedMap<K, V, S = ahash::RandomState> {
    pub(super) slots: Vec<Slot<K, V>>,
    buckets: Vec<usize>,
    hash_builder: S,
    len: usize,
    max_load: usize,
    config: OrderedMapConfig,
}

impl<K, V> OrderedMap<K, V, ahash::RandomState> {
    /// Creates an empty map with the default configuration
    pub fn new() -> Self {
        Self::with_config(OrderedMapConfig::default())
    }

    /// Creates an empty map able to hold `capacity` entries without growing
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_config(OrderedMapConfig::with_capacity(capacity))
    }

    /// Creates an empty map with a custom configuration
    pub fn with_config(config: OrderedMapConfig) -> Self {
        Self::with_config_and_hasher(config, ahash::RandomState::new())
    }
}

impl<K, V, S> OrderedMap<K, V, S> {
    /// Creates an empty map with a custom hasher
    pub fn with_hasher(hash_builder: S) -> Self {
        Self::with_config_and_hasher(OrderedMapConfig::default(), hash_builder)
    }

    /// Creates an empty map with a custom configuration and hasher
    ///
    /// An invalid configuration is replaced by the default one.
    pub fn with_config_and_hasher(config: OrderedMapConfig, hash_builder: S) -> Self {
        let config = match config.validate() {
            Ok(()) => config,
            Err(e) => {
                log::warn!("Ignoring invalid ordered map configuration: {}", e);
                OrderedMapConfig::default()
            }
        };

        let bucket_count = config.buckets_for(config.initial_capacity);
        Self {
            slots: Vec::with_capacity(config.initial_capacity),
            buckets: vec![TAIL; bucket_count],
            hash_builder,
            len: 0,
            max_load: config.max_load(bucket_count),
            config,
        }
    }

    /// Number of live entries
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of entries the map can hold before its index grows
    pub fn capacity(&self) -> usize {
        self.max_load
    }

    /// Number of buckets in the hash index
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Number of tombstones awaiting compaction
    pub fn tombstone_count(&self) -> usize {
        self.slots.len() - self.len
    }

    /// The configuration this map was built with
    pub fn config(&self) -> &OrderedMapConfig {
        &self.config
    }

    /// The map's hasher
    pub fn hasher(&self) -> &S {
        &self.hash_builder
    }

    /// Iterates over `(key, value)` pairs in insertion order
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter::new(&self.slots, self.len)
    }

    /// Iterates over `(key, mutable value)` pairs in insertion order
    pub fn iter_mut(&mut self) -> IterMut<'_, K, V> {
        IterMut::new(&mut self.slots, self.len)
    }

    /// Live view of the keys
    pub fn keys(&self) -> KeysView<'_, K, V, S> {
        KeysView::new(self)
    }

    /// Live view of the values
    pub fn values(&self) -> ValuesView<'_, K, V, S> {
        ValuesView::new(self)
    }

    /// Live view of the `(key, value)` pairs
    pub fn items(&self) -> ItemsView<'_, K, V, S> {
        ItemsView::new(self)
    }

    /// Iterates over mutable values in insertion order
    pub fn values_mut(&mut self) -> ValuesMut<'_, K, V> {
        ValuesMut::new(self.iter_mut())
    }

    /// Oldest remaining entry
    pub fn first(&self) -> Option<(&K, &V)> {
        self.iter().next()
    }

    /// Most recently inserted remaining entry
    pub fn last(&self) -> Option<(&K, &V)> {
        self.iter().next_back()
    }

    /// Removes all entries; keeps the allocated buckets
    pub fn clear(&mut self) {
        self.slots.clear();
        self.buckets.fill(TAIL);
        self.len = 0;
    }

    /// Key and value of a slot known to be live
    pub(super) fn pair_at(&self, index: usize) -> (&K, &V) {
        match &self.slots[index].entry {
            Some((key, value)) => (key, value),
            None => unreachable!("slot {} is a tombstone", index),
        }
    }

    /// Key and mutable value of a slot known to be live
    pub(super) fn pair_at_mut(&mut self, index: usize) -> (&K, &mut V) {
        match &mut self.slots[index].entry {
            Some((key, value)) => (&*key, value),
            None => unreachable!("slot {} is a tombstone", index),
        }
    }

    fn bucket_index(&self, hash: u64) -> usize {
        (hash as usize) & (self.buckets.len() - 1)
    }

    /// Rebuilds every chain for the current bucket array
    fn relink(&mut self) {
        self.buckets.fill(TAIL);
        let mask = self.buckets.len() - 1;
        for (index, slot) in self.slots.iter_mut().enumerate() {
            if slot.entry.is_some() {
                let bucket = (slot.hash as usize) & mask;
                slot.link = self.buckets[bucket];
                self.buckets[bucket] = index;
            } else {
                slot.link = TAIL;
            }
        }
    }

    fn resize_buckets(&mut self, bucket_count: usize) {
        log::trace!(
            "Resizing ordered map index from {} to {} buckets ({} entries)",
            self.buckets.len(),
            bucket_count,
            self.len
        );
        self.buckets = vec![TAIL; bucket_count];
        self.max_load = self.config.max_load(bucket_count);
        self.relink();
    }

    /// Removes all tombstones without changing the order of live entries
    pub fn compact(&mut self) {
        let tombstones = self.tombstone_count();
        if tombstones == 0 {
            return;
        }
        log::debug!(
            "Compacting ordered map: {} tombstones, {} live entries",
            tombstones,
            self.len
        );
        self.slots.retain(|slot| slot.entry.is_some());
        self.relink();
    }

    /// Unlinks slot `index` from its collision chain
    fn unlink(&mut self, index: usize) {
        let bucket = self.bucket_index(self.slots[index].hash);
        let next = self.slots[index].link;
        if self.buckets[bucket] == index {
            self.buckets[bucket] = next;
        } else {
            let mut link = self.buckets[bucket];
            while link != TAIL {
                if self.slots[link].link == index {
                    self.slots[link].link = next;
                    break;
                }
                link = self.slots[link].link;
            }
        }
        self.slots[index].link = TAIL;
    }

    /// Tombstones slot `index` and returns its entry
    pub(super) fn remove_slot(&mut self, index: usize) -> Option<(K, V)> {
        self.unlink(index);
        let removed = self.slots[index].entry.take();
        if removed.is_some() {
            self.len -= 1;
        }

        // Trailing tombstones are on no chain; drop them so the last slot stays live.
        while matches!(self.slots.last(), Some(slot) if slot.entry.is_none()) {
            self.slots.pop();
        }
        if self.config.should_compact(self.tombstone_count(), self.len) {
            self.compact();
        }
        removed
    }

    /// Removes and returns the most recently inserted remaining entry
    ///
    /// Fails with [`DictupleError::EmptyContainer`] when the map is empty.
    pub fn pop_last(&mut self) -> Result<(K, V)> {
        match self.slots.len().checked_sub(1) {
            Some(index) => self
                .remove_slot(index)
                .ok_or_else(|| DictupleError::empty_container("pop_last")),
            None => Err(DictupleError::empty_container("pop_last")),
        }
    }

    /// Keeps only the entries for which `keep` returns true, preserving order
    pub fn retain<F>(&mut self, mut keep: F)
    where
        F: FnMut(&K, &mut V) -> bool,
    {
        let before = self.len;
        for slot in &mut self.slots {
            if let Some((key, value)) = slot.entry.as_mut() {
                if !keep(key, value) {
                    slot.entry = None;
                    self.len -= 1;
                }
            }
        }
        if self.len != before {
            self.compact();
        }
    }
}

impl<K, V, S> OrderedMap<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    fn hash_key<Q>(&self, key: &Q) -> u64
    where
        Q: Hash + ?Sized,
    {
        let mut hasher = self.hash_builder.build_hasher();
        key.hash(&mut hasher);
        hasher.finish()
    }

    /// Slot index of `key`, if present
    fn find<Q>(&self, hash: u64, key: &Q) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        let mut link = self.buckets[self.bucket_index(hash)];
        while link != TAIL {
            let slot = &self.slots[link];
            if slot.hash == hash {
                if let Some((k, _)) = &slot.entry {
                    if k.borrow() == key {
                        return Some(link);
                    }
                }
            }
            link = slot.link;
        }
        None
    }

    fn find_key<Q>(&self, key: &Q) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.find(self.hash_key(key), key)
    }

    /// Appends a new entry at the end of the iteration order
    pub(super) fn push_new(&mut self, hash: u64, key: K, value: V) -> usize {
        if self.len >= self.max_load {
            self.resize_buckets(self.buckets.len() * 2);
        }
        let index = self.slots.len();
        let bucket = self.bucket_index(hash);
        self.slots.push(Slot {
            hash,
            link: self.buckets[bucket],
            entry: Some((key, value)),
        });
        self.buckets[bucket] = index;
        self.len += 1;
        index
    }

    /// Inserts a new key at the end, or overwrites the value of an existing
    /// key in place. Returns the previous value, if any.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        let hash = self.hash_key(&key);
        match self.find(hash, &key) {
            Some(index) => Some(mem::replace(self.pair_at_mut(index).1, value)),
            None => {
                self.push_new(hash, key, value);
                None
            }
        }
    }

    /// Inserts every pair in order; later pairs win on key collisions
    pub fn update_many<I>(&mut self, pairs: I)
    where
        I: IntoIterator<Item = (K, V)>,
    {
        let pairs = pairs.into_iter();
        self.reserve(pairs.size_hint().0);
        for (key, value) in pairs {
            self.insert(key, value);
        }
    }

    /// Reserves room for at least `additional` more entries
    pub fn reserve(&mut self, additional: usize) {
        let wanted = self.len.saturating_add(additional);
        if wanted > self.max_load {
            let bucket_count = self.config.buckets_for(wanted);
            if bucket_count > self.buckets.len() {
                self.resize_buckets(bucket_count);
            }
        }
        self.slots.reserve(additional);
    }

    /// Reference to the value for `key`
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.find_key(key).map(|index| self.pair_at(index).1)
    }

    /// Key and value stored for `key`
    pub fn get_key_value<Q>(&self, key: &Q) -> Option<(&K, &V)>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.find_key(key).map(|index| self.pair_at(index))
    }

    /// Mutable reference to the value for `key`
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        match self.find_key(key) {
            Some(index) => Some(self.pair_at_mut(index).1),
            None => None,
        }
    }

    /// Value for `key`, failing with [`DictupleError::KeyNotFound`] if absent
    pub fn try_get<Q>(&self, key: &Q) -> Result<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + fmt::Debug + ?Sized,
    {
        self.get(key).ok_or_else(|| DictupleError::key_not_found(key))
    }

    /// Mutable value for `key`, failing with [`DictupleError::KeyNotFound`] if absent
    pub fn try_get_mut<Q>(&mut self, key: &Q) -> Result<&mut V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + fmt::Debug + ?Sized,
    {
        match self.find_key(key) {
            Some(index) => Ok(self.pair_at_mut(index).1),
            None => Err(DictupleError::key_not_found(key)),
        }
    }

    /// Value for `key`, or `fallback` if absent. Never fails.
    pub fn get_or<'a, Q>(&'a self, key: &Q, fallback: &'a V) -> &'a V
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.get(key).unwrap_or(fallback)
    }

    /// Returns the value for `key`, first inserting `fallback` at the end if
    /// the key is absent
    pub fn set_default(&mut self, key: K, fallback: V) -> &mut V {
        self.entry(key).or_insert(fallback)
    }

    /// O(1) membership test
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.find_key(key).is_some()
    }

    /// Removes `key` and returns its value
    ///
    /// Fails with [`DictupleError::KeyNotFound`] if the key is absent.
    pub fn remove<Q>(&mut self, key: &Q) -> Result<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + fmt::Debug + ?Sized,
    {
        self.remove_entry(key).map(|(_, value)| value)
    }

    /// Removes `key` and returns the stored key and value
    pub fn remove_entry<Q>(&mut self, key: &Q) -> Result<(K, V)>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + fmt::Debug + ?Sized,
    {
        self.find_key(key)
            .and_then(|index| self.remove_slot(index))
            .ok_or_else(|| DictupleError::key_not_found(key))
    }

    /// Removes `key` and returns its value, or `default` if absent
    pub fn pop_or<Q>(&mut self, key: &Q, default: V) -> V
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.find_key(key)
            .and_then(|index| self.remove_slot(index))
            .map_or(default, |(_, value)| value)
    }

    /// Entry for in-place insertion or update
    pub fn entry(&mut self, key: K) -> Entry<'_, K, V, S> {
        let hash = self.hash_key(&key);
        match self.find(hash, &key) {
            Some(index) => Entry::Occupied(OccupiedEntry::new(self, index)),
            None => Entry::Vacant(VacantEntry::new(self, key, hash)),
        }
    }

    /// New map holding the pairs of `self` followed by those of `other`;
    /// `other`'s values win on shared keys. Neither input is modified.
    pub fn merge(&self, other: &Self) -> Self
    where
        K: Clone,
        V: Clone,
        S: Clone,
    {
        let mut merged = self.clone();
        merged.update_many(other.iter().map(|(k, v)| (k.clone(), v.clone())));
        merged
    }

    /// New map with keys and values swapped
    ///
    /// When several keys share a value the last of them wins, stored at the
    /// position where that value first appeared. Values must be hashable,
    /// which the `V: Hash + Eq` bound checks at compile time.
    pub fn invert(&self) -> OrderedMap<V, K, S>
    where
        K: Clone,
        V: Hash + Eq + Clone,
        S: Clone,
    {
        let mut inverted = OrderedMap::with_config_and_hasher(
            OrderedMapConfig {
                initial_capacity: self.len,
                ..self.config.clone()
            },
            self.hash_builder.clone(),
        );
        for (key, value) in self.iter() {
            inverted.insert(value.clone(), key.clone());
        }
        inverted
    }
}

impl<K, V, S> Default for OrderedMap<K, V, S>
where
    S: Default,
{
    fn default() -> Self {
        Self::with_config_and_hasher(OrderedMapConfig::default(), S::default())
    }
}

impl<K, V, S> fmt::Debug for OrderedMap<K, V, S>
where
    K: fmt::Debug,
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

/// Renders as `{k1: v1, k2: v2}` in insertion order
impl<K, V, S> fmt::Display for OrderedMap<K, V, S>
where
    K: fmt::Display,
    V: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (key, value)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}: {}", key, value)?;
        }
        f.write_str("}")
    }
}

/// Equality ignores order, like Python dictionaries
impl<K, V, S> PartialEq for OrderedMap<K, V, S>
where
    K: Hash + Eq,
    V: PartialEq,
    S: BuildHasher,
{
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .all(|(key, value)| other.get(key).map_or(false, |v| v == value))
    }
}

impl<K, V, S> Eq for OrderedMap<K, V, S>
where
    K: Hash + Eq,
    V: Eq,
    S: BuildHasher,
{
}

impl<K, Q, V, S> Index<&Q> for OrderedMap<K, V, S>
where
    K: Borrow<Q> + Hash + Eq,
    Q: Hash + Eq + ?Sized,
    S: BuildHasher,
{
    type Output = V;

    /// # Panics
    ///
    /// Panics if the key is absent; use [`OrderedMap::try_get`] to handle that case.
    fn index(&self, key: &Q) -> &V {
        match self.get(key) {
            Some(value) => value,
            None => panic!("key not found in OrderedMap"),
        }
    }
}

impl<K, V, S> FromIterator<(K, V)> for OrderedMap<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher + Default,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::default();
        map.update_many(iter);
        map
    }
}

impl<K, V, S> Extend<(K, V)> for OrderedMap<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        self.update_many(iter);
    }
}

impl<K, V, const N: usize> From<[(K, V); N]> for OrderedMap<K, V, ahash::RandomState>
where
    K: Hash + Eq,
{
    fn from(pairs: [(K, V); N]) -> Self {
        let mut map = Self::with_capacity(N);
        map.update_many(pairs);
        map
    }
}

impl<K, V, S> IntoIterator for OrderedMap<K, V, S> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self.slots, self.len)
    }
}

impl<'a, K, V, S> IntoIterator for &'a OrderedMap<K, V, S> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, K, V, S> IntoIterator for &'a mut OrderedMap<K, V, S> {
    type Item = (&'a K, &'a mut V);
    type IntoIter = IterMut<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

/// `&a | &b` is [`OrderedMap::merge`]
impl<K, V, S> BitOr<&OrderedMap<K, V, S>> for &OrderedMap<K, V, S>
where
    K: Hash + Eq + Clone,
    V: Clone,
    S: BuildHasher + Clone,
{
    type Output = OrderedMap<K, V, S>;

    fn bitor(self, rhs: &OrderedMap<K, V, S>) -> Self::Output {
        self.merge(rhs)
    }
}
