//! Entry API for [`OrderedMap`]

use super::map::OrderedMap;
use std::hash::{BuildHasher, Hash};

/// A view into a single key of an [`OrderedMap`], present or not
pub enum Entry<'a, K, V, S> {
    /// The key is present
    Occupied(OccupiedEntry<'a, K, V, S>),
    /// The key is absent
    Vacant(VacantEntry<'a, K, V, S>),
}

impl<'a, K, V, S> Entry<'a, K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    /// The entry's key
    pub fn key(&self) -> &K {
        match self {
            Entry::Occupied(entry) => entry.key(),
            Entry::Vacant(entry) => entry.key(),
        }
    }

    /// Value for the key, inserting `default` at the end if absent
    pub fn or_insert(self, default: V) -> &'a mut V {
        match self {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => entry.insert(default),
        }
    }

    /// Like [`Entry::or_insert`], computing the default lazily
    pub fn or_insert_with<F: FnOnce() -> V>(self, default: F) -> &'a mut V {
        match self {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => entry.insert(default()),
        }
    }

    /// Like [`Entry::or_insert`] with `V::default()`
    pub fn or_default(self) -> &'a mut V
    where
        V: Default,
    {
        self.or_insert_with(V::default)
    }

    /// Applies `f` to the value if the key is present
    pub fn and_modify<F: FnOnce(&mut V)>(self, f: F) -> Self {
        match self {
            Entry::Occupied(mut entry) => {
                f(entry.get_mut());
                Entry::Occupied(entry)
            }
            Entry::Vacant(entry) => Entry::Vacant(entry),
        }
    }
}

/// A present key
pub struct OccupiedEntry<'a, K, V, S> {
    map: &'a mut OrderedMap<K, V, S>,
    index: usize,
}

impl<'a, K, V, S> OccupiedEntry<'a, K, V, S> {
    pub(super) fn new(map: &'a mut OrderedMap<K, V, S>, index: usize) -> Self {
        Self { map, index }
    }

    /// The stored key
    pub fn key(&self) -> &K {
        self.map.pair_at(self.index).0
    }

    /// The stored value
    pub fn get(&self) -> &V {
        self.map.pair_at(self.index).1
    }

    /// Mutable access to the stored value
    pub fn get_mut(&mut self) -> &mut V {
        self.map.pair_at_mut(self.index).1
    }

    /// Converts into a mutable reference bound to the map's lifetime
    pub fn into_mut(self) -> &'a mut V {
        self.map.pair_at_mut(self.index).1
    }

    /// Replaces the value in place and returns the old one
    pub fn insert(&mut self, value: V) -> V {
        std::mem::replace(self.get_mut(), value)
    }

    /// Removes the entry and returns its value
    pub fn remove(self) -> V {
        self.remove_entry().1
    }

    /// Removes the entry and returns the stored key and value
    pub fn remove_entry(self) -> (K, V) {
        match self.map.remove_slot(self.index) {
            Some(pair) => pair,
            None => unreachable!("occupied entry at tombstone slot {}", self.index),
        }
    }
}

/// An absent key
pub struct VacantEntry<'a, K, V, S> {
    map: &'a mut OrderedMap<K, V, S>,
    key: K,
    hash: u64,
}

impl<'a, K, V, S> VacantEntry<'a, K, V, S> {
    pub(super) fn new(map: &'a mut OrderedMap<K, V, S>, key: K, hash: u64) -> Self {
        Self { map, key, hash }
    }

    /// The key that would be inserted
    pub fn key(&self) -> &K {
        &self.key
    }

    /// Takes back ownership of the key
    pub fn into_key(self) -> K {
        self.key
    }
}

impl<'a, K, V, S> VacantEntry<'a, K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    /// Inserts `value` at the end of the map
    pub fn insert(self, value: V) -> &'a mut V {
        let index = self.map.push_new(self.hash, self.key, value);
        self.map.pair_at_mut(index).1
    }
}
