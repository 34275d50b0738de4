//! Property-based testing for OrderedMap and FixedTuple
//!
//! OrderedMap is checked against a naive `Vec<(K, V)>` model that keeps
//! pairs in first-insertion order; FixedTuple is checked against `Vec`.

use dictuple::{FixedTuple, OrderedMap, OrderedMapConfig};
use proptest::prelude::*;

// =============================================================================
// PROPERTY TEST GENERATORS
// =============================================================================

/// Generate sequences of map operations
#[derive(Debug, Clone)]
pub enum ContainerOp<K, V> {
    Insert(K, V),
    Remove(K),
    Get(K),
    PopLast,
    Compact,
    Clear,
}

/// Keys come from a small range so that overwrites and removals hit often
fn container_ops_strategy() -> impl Strategy<Value = Vec<ContainerOp<u8, i32>>> {
    let key = 0u8..32;
    prop::collection::vec(
        prop_oneof![
            6 => (key.clone(), any::<i32>()).prop_map(|(k, v)| ContainerOp::Insert(k, v)),
            3 => key.clone().prop_map(ContainerOp::Remove),
            2 => key.prop_map(ContainerOp::Get),
            1 => Just(ContainerOp::PopLast),
            1 => Just(ContainerOp::Compact),
            1 => Just(ContainerOp::Clear),
        ],
        0..400,
    )
}

fn config_strategy() -> impl Strategy<Value = OrderedMapConfig> {
    (0usize..64, 0.1f32..=1.0, any::<bool>(), 0.0f32..2.0, 0usize..16).prop_map(
        |(initial_capacity, load_factor, enable_auto_compaction, compaction_ratio, min)| {
            OrderedMapConfig {
                initial_capacity,
                load_factor,
                enable_auto_compaction,
                compaction_ratio,
                min_compaction_tombstones: min,
            }
        },
    )
}

/// Reference model: insertion-ordered association list
#[derive(Default)]
struct ModelMap {
    pairs: Vec<(u8, i32)>,
}

impl ModelMap {
    fn insert(&mut self, key: u8, value: i32) -> Option<i32> {
        match self.pairs.iter_mut().find(|(k, _)| *k == key) {
            Some((_, v)) => Some(std::mem::replace(v, value)),
            None => {
                self.pairs.push((key, value));
                None
            }
        }
    }

    fn remove(&mut self, key: u8) -> Option<i32> {
        let index = self.pairs.iter().position(|(k, _)| *k == key)?;
        Some(self.pairs.remove(index).1)
    }

    fn get(&self, key: u8) -> Option<&i32> {
        self.pairs.iter().find(|(k, _)| *k == key).map(|(_, v)| v)
    }
}

fn pairs_of(map: &OrderedMap<u8, i32>) -> Vec<(u8, i32)> {
    map.iter().map(|(k, v)| (*k, *v)).collect()
}

// =============================================================================
// ORDEREDMAP PROPERTY TESTS
// =============================================================================

proptest! {
    #[test]
    fn prop_ordered_map_vs_model(
        config in config_strategy(),
        ops in container_ops_strategy()
    ) {
        let mut map = OrderedMap::with_config(config);
        let mut model = ModelMap::default();

        for op in ops {
            match op {
                ContainerOp::Insert(k, v) => {
                    prop_assert_eq!(map.insert(k, v), model.insert(k, v));
                }
                ContainerOp::Remove(k) => {
                    prop_assert_eq!(map.remove(&k).ok(), model.remove(k));
                    // Removed keys are gone
                    prop_assert!(!map.contains_key(&k));
                }
                ContainerOp::Get(k) => {
                    prop_assert_eq!(map.get(&k), model.get(k));
                }
                ContainerOp::PopLast => {
                    prop_assert_eq!(map.pop_last().ok(), model.pairs.pop());
                }
                ContainerOp::Compact => {
                    map.compact();
                    prop_assert_eq!(map.tombstone_count(), 0);
                }
                ContainerOp::Clear => {
                    map.clear();
                    model.pairs.clear();
                }
            }

            // Invariant: same pairs in the same order
            prop_assert_eq!(map.len(), model.pairs.len());
            prop_assert_eq!(map.is_empty(), model.pairs.is_empty());
            prop_assert_eq!(pairs_of(&map), model.pairs.clone());
        }

        // Reverse iteration mirrors forward iteration
        let mut backwards: Vec<(u8, i32)> = map.iter().rev().map(|(k, v)| (*k, *v)).collect();
        backwards.reverse();
        prop_assert_eq!(backwards, model.pairs);
    }

    #[test]
    fn prop_overwrite_keeps_position(
        keys in prop::collection::vec(any::<u8>(), 1..100),
        pick in any::<prop::sample::Index>(),
        value in any::<i32>()
    ) {
        let mut map: OrderedMap<u8, i32> = keys.iter().map(|&k| (k, 0)).collect();
        let before: Vec<u8> = map.keys().iter().copied().collect();

        let key = before[pick.index(before.len())];
        map.insert(key, value);

        let after: Vec<u8> = map.keys().iter().copied().collect();
        prop_assert_eq!(before, after);
        prop_assert_eq!(map.get(&key), Some(&value));
    }

    #[test]
    fn prop_merge_precedence(
        left in prop::collection::vec((0u8..40, any::<i32>()), 0..60),
        right in prop::collection::vec((0u8..40, any::<i32>()), 0..60)
    ) {
        let a: OrderedMap<u8, i32> = left.into_iter().collect();
        let b: OrderedMap<u8, i32> = right.into_iter().collect();
        let merged = a.merge(&b);

        for (k, v) in merged.iter() {
            let expected = b.get(k).or_else(|| a.get(k));
            prop_assert_eq!(Some(v), expected);
        }
        prop_assert!(merged.len() >= a.len().max(b.len()));
        prop_assert!(merged.len() <= a.len() + b.len());

        // Keys of `a` keep their relative order at the front
        let prefix: Vec<u8> = merged.keys().iter().take(a.len()).copied().collect();
        let a_keys: Vec<u8> = a.keys().iter().copied().collect();
        prop_assert_eq!(prefix, a_keys);
    }

    #[test]
    fn prop_auto_compaction_bounds_tombstones(
        count in 1usize..300,
        removals in prop::collection::vec(any::<prop::sample::Index>(), 0..300)
    ) {
        let config = OrderedMapConfig::default();
        let mut map = OrderedMap::with_config(config.clone());
        for i in 0..count {
            map.insert(i, i);
        }
        for index in removals {
            if map.is_empty() {
                break;
            }
            let key = *map.keys().iter().nth(index.index(map.len())).unwrap();
            map.remove(&key).unwrap();

            let tombstones = map.tombstone_count();
            prop_assert!(
                tombstones < config.min_compaction_tombstones
                    || tombstones as f64 <= map.len() as f64 * config.compaction_ratio as f64
            );
        }

        let keys: Vec<usize> = map.keys().iter().copied().collect();
        prop_assert!(keys.windows(2).all(|w| w[0] < w[1]));
    }
}

// =============================================================================
// FIXEDTUPLE PROPERTY TESTS
// =============================================================================

proptest! {
    #[test]
    fn prop_full_slice_is_identity(
        elements in prop::collection::vec(any::<i32>(), 0..100)
    ) {
        let tuple = FixedTuple::from(elements.clone());
        prop_assert_eq!(tuple.slice(None, None, None).unwrap(), tuple.clone());

        let mut reversed = elements;
        reversed.reverse();
        prop_assert_eq!(tuple.slice(None, None, Some(-1)).unwrap().into_vec(), reversed);
    }

    #[test]
    fn prop_slice_matches_stepping(
        elements in prop::collection::vec(any::<i16>(), 0..60),
        start in -80isize..80,
        stop in -80isize..80,
        step in 1isize..6
    ) {
        let tuple = FixedTuple::from(elements.clone());
        let len = elements.len() as isize;
        let clamp = |i: isize| if i < 0 { (i + len).max(0) } else { i.min(len) };
        let (lo, hi) = (clamp(start), clamp(stop));

        let expected: Vec<i16> = if lo < hi {
            elements[lo as usize..hi as usize]
                .iter()
                .step_by(step as usize)
                .copied()
                .collect()
        } else {
            Vec::new()
        };
        let sliced = tuple.slice(Some(start), Some(stop), Some(step)).unwrap();
        prop_assert_eq!(sliced.into_vec(), expected);
    }

    #[test]
    fn prop_empty_concat_is_identity(
        elements in prop::collection::vec(any::<i32>(), 0..100)
    ) {
        let tuple = FixedTuple::from(elements);
        let empty = FixedTuple::empty();
        prop_assert_eq!(tuple.concat(&empty), tuple.clone());
        prop_assert_eq!(empty.concat(&tuple), tuple);
    }

    #[test]
    fn prop_repeat_scales_counts(
        elements in prop::collection::vec(0u8..5, 0..40),
        times in 0i64..8,
        needle in 0u8..5
    ) {
        let tuple = FixedTuple::from(elements);
        let repeated = tuple.repeat(times).unwrap();
        prop_assert_eq!(repeated.len(), tuple.len() * times as usize);
        prop_assert_eq!(repeated.count(&needle), tuple.count(&needle) * times as usize);
    }

    #[test]
    fn prop_comparison_matches_slices(
        left in prop::collection::vec(0i32..4, 0..8),
        right in prop::collection::vec(0i32..4, 0..8)
    ) {
        let a = FixedTuple::from(left.clone());
        let b = FixedTuple::from(right.clone());
        prop_assert_eq!(a.compare(&b), left.cmp(&right));
        prop_assert_eq!(a.compare(&b), b.compare(&a).reverse());
        prop_assert_eq!(a.try_compare(&b).unwrap(), left.cmp(&right));
    }

    #[test]
    fn prop_negative_index_mirrors_positive(
        elements in prop::collection::vec(any::<i32>(), 1..50),
        pick in any::<prop::sample::Index>()
    ) {
        let tuple = FixedTuple::from(elements.clone());
        let i = pick.index(elements.len());
        let negative = i as isize - elements.len() as isize;
        prop_assert_eq!(tuple.get(i as isize).unwrap(), &elements[i]);
        prop_assert_eq!(tuple.get(negative).unwrap(), &elements[i]);
    }
}
