//! Serde support: an [`OrderedMap`] serializes as a map in insertion order

use super::map::OrderedMap;
use crate::config::OrderedMapConfig;
use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::hash::{BuildHasher, Hash};
use std::marker::PhantomData;

/// Cap on preallocation from an untrusted size hint
const MAX_PREALLOCATED: usize = 4096;

impl<K, V, S> Serialize for OrderedMap<K, V, S>
where
    K: Serialize,
    V: Serialize,
{
    fn serialize<Ser: Serializer>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error> {
        serializer.collect_map(self.iter())
    }
}

struct OrderedMapVisitor<K, V, S> {
    marker: PhantomData<fn() -> OrderedMap<K, V, S>>,
}

impl<'de, K, V, S> Visitor<'de> for OrderedMapVisitor<K, V, S>
where
    K: Deserialize<'de> + Hash + Eq,
    V: Deserialize<'de>,
    S: BuildHasher + Default,
{
    type Value = OrderedMap<K, V, S>;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a map")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let capacity = access.size_hint().unwrap_or(0).min(MAX_PREALLOCATED);
        let mut map =
            OrderedMap::with_config_and_hasher(OrderedMapConfig::with_capacity(capacity), S::default());
        while let Some((key, value)) = access.next_entry()? {
            map.insert(key, value);
        }
        Ok(map)
    }
}

impl<'de, K, V, S> Deserialize<'de> for OrderedMap<K, V, S>
where
    K: Deserialize<'de> + Hash + Eq,
    V: Deserialize<'de>,
    S: BuildHasher + Default,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(OrderedMapVisitor {
            marker: PhantomData,
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::OrderedMap;

    #[test]
    fn test_json_keeps_insertion_order() {
        let mut map = OrderedMap::new();
        map.insert("zeta".to_string(), 1);
        map.insert("alpha".to_string(), 2);
        map.insert("mid".to_string(), 3);

        let json = serde_json::to_string(&map).unwrap();
        assert_eq!(json, r#"{"zeta":1,"alpha":2,"mid":3}"#);

        let back: OrderedMap<String, i32> = serde_json::from_str(&json).unwrap();
        let keys: Vec<_> = back.keys().iter().cloned().collect();
        assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_duplicate_json_keys_keep_first_position() {
        let map: OrderedMap<String, i32> = serde_json::from_str(r#"{"a":1,"b":2,"a":3}"#).unwrap();
        assert_eq!(map.to_string(), "{a: 3, b: 2}");
    }
}
