//! Integration tests for OrderedMap
//!
//! Exercises the public map API end to end: ordering under insert, overwrite
//! and removal, views, entries, merge and inversion, dynamic values and
//! configuration driven compaction.

use dictuple::{Config, DictupleError, Key, OrderedMap, OrderedMapConfig, Value};

fn student() -> OrderedMap<Key, Value> {
    let mut map = OrderedMap::new();
    map.insert(Key::from("name"), Value::from("Ali"));
    map.insert(Key::from("age"), Value::from(20));
    map.insert(Key::from("grade"), Value::from("A"));
    map
}

#[test]
fn test_insertion_order_survives_overwrite() {
    let mut map = student();
    let old = map.insert(Key::from("age"), Value::from(21));
    assert_eq!(old, Some(Value::from(20)));
    assert_eq!(map.to_string(), "{'name': 'Ali', 'age': 21, 'grade': 'A'}");

    // A removed key re-enters at the end
    map.remove(&Key::from("name")).unwrap();
    map.insert(Key::from("name"), Value::from("Sara"));
    let keys: Vec<String> = map.keys().iter().map(|k| k.to_string()).collect();
    assert_eq!(keys, ["'age'", "'grade'", "'name'"]);
}

#[test]
fn test_lookup_failures() {
    let mut map = student();
    assert_eq!(
        map.try_get(&Key::from("phone")),
        Err(DictupleError::KeyNotFound {
            key: "'phone'".to_string()
        })
    );
    assert!(matches!(
        map.remove(&Key::from("phone")),
        Err(DictupleError::KeyNotFound { .. })
    ));
    assert_eq!(map.len(), 3);

    let fallback = Value::from("N/A");
    assert_eq!(map.get_or(&Key::from("phone"), &fallback), &fallback);
    assert_eq!(map.pop_or(&Key::from("phone"), Value::None), Value::None);
}

#[test]
fn test_set_default_only_inserts_once() {
    let mut map = student();
    map.set_default(Key::from("city"), Value::from("Tehran"));
    map.set_default(Key::from("city"), Value::from("Shiraz"));
    assert_eq!(map[&Key::from("city")], Value::from("Tehran"));
    assert_eq!(map.last().map(|(k, _)| k.clone()), Some(Key::from("city")));
}

#[test]
fn test_pop_last_drains_in_reverse() {
    let mut map: OrderedMap<i32, &str> = [(1, "a"), (2, "b"), (3, "c")].into();
    assert_eq!(map.pop_last().unwrap(), (3, "c"));
    assert_eq!(map.pop_last().unwrap(), (2, "b"));
    assert_eq!(map.pop_last().unwrap(), (1, "a"));
    assert!(matches!(
        map.pop_last(),
        Err(DictupleError::EmptyContainer { .. })
    ));
}

#[test]
fn test_views_reflect_later_changes() {
    let mut map: OrderedMap<&str, i32> = OrderedMap::new();
    map.insert("a", 1);
    assert_eq!(map.keys().len(), 1);

    map.insert("b", 2);
    map.insert("c", 3);
    let keys = map.keys();
    let values = map.values();
    let items = map.items();
    assert_eq!(keys.to_string(), "[a, b, c]");
    assert_eq!(values.iter().sum::<i32>(), 6);
    assert!(items.contains("b", &2));
    assert!(!items.contains("b", &3));
    assert!(values.contains(&3));
}

#[test]
fn test_entry_counting() {
    let text = "red blue red green blue red";
    let mut counts: OrderedMap<&str, usize> = OrderedMap::new();
    for word in text.split_whitespace() {
        *counts.entry(word).or_insert(0) += 1;
    }
    assert_eq!(counts.to_string(), "{red: 3, blue: 2, green: 1}");
}

#[test]
fn test_merge_precedence_and_inputs_untouched() {
    let a: OrderedMap<&str, i32> = [("x", 1), ("y", 2)].into();
    let b: OrderedMap<&str, i32> = [("y", 20), ("z", 30)].into();

    let merged = a.merge(&b);
    assert_eq!(merged.to_string(), "{x: 1, y: 20, z: 30}");
    assert_eq!(&a | &b, merged);
    assert_eq!(a.len(), 2);
    assert_eq!(b.len(), 2);
}

#[test]
fn test_invert_last_key_wins() {
    let map: OrderedMap<&str, i32> = [("a", 1), ("b", 2), ("c", 1)].into();
    let inverted = map.invert();
    assert_eq!(inverted.to_string(), "{1: c, 2: b}");
}

#[test]
fn test_dynamic_invert_rejects_unhashable() {
    let mut map = student();
    map.insert(Key::from("skills"), Value::from(vec!["Python"]));
    assert!(matches!(
        map.try_invert(),
        Err(DictupleError::Unhashable { type_name: "list" })
    ));
    assert_eq!(map.len(), 4);

    map.remove(&Key::from("skills")).unwrap();
    let inverted = map.try_invert().unwrap();
    assert_eq!(inverted[&Key::from(20)], Value::from("age"));
}

#[test]
fn test_nested_lookup() {
    let mut ali = OrderedMap::new();
    ali.insert(Key::from("age"), Value::from(20));
    let mut students = OrderedMap::new();
    students.insert(Key::from("ali"), Value::from(ali));
    let root = Value::from(students);

    let age = root
        .lookup(&Key::from("ali"))
        .and_then(|v| v.lookup(&Key::from("age")))
        .unwrap();
    assert_eq!(age, &Value::from(20));
    assert!(root.lookup(&Key::from("reza")).is_err());
}

#[test]
fn test_numeric_keys_unify() {
    let mut map: OrderedMap<Key, Value> = OrderedMap::new();
    map.insert(Key::from(1), Value::from("int"));
    map.insert(Key::from(1.0), Value::from("float"));
    assert_eq!(map.len(), 1);
    assert_eq!(map.to_string(), "{1: 'float'}");
}

#[test]
fn test_equality_ignores_order() {
    let a: OrderedMap<&str, i32> = [("x", 1), ("y", 2)].into();
    let b: OrderedMap<&str, i32> = [("y", 2), ("x", 1)].into();
    assert_eq!(a, b);
    let keys_a: Vec<_> = a.keys().iter().copied().collect();
    let keys_b: Vec<_> = b.keys().iter().copied().collect();
    assert_ne!(keys_a, keys_b);
}

#[test]
fn test_auto_compaction_keeps_order() {
    let config = OrderedMapConfig {
        min_compaction_tombstones: 4,
        compaction_ratio: 0.5,
        ..OrderedMapConfig::memory_preset()
    };
    let mut map = OrderedMap::with_config(config);
    for i in 0..20 {
        map.insert(i, i * 10);
    }
    for i in (0..20).step_by(2) {
        map.remove(&i).unwrap();
    }

    assert_eq!(map.len(), 10);
    assert!(map.tombstone_count() < 10);
    let keys: Vec<i32> = map.keys().iter().copied().collect();
    assert_eq!(keys, (1..20).step_by(2).collect::<Vec<_>>());
    for i in (1..20).step_by(2) {
        assert_eq!(map.get(&i), Some(&(i * 10)));
    }
}

#[test]
fn test_realtime_preset_never_auto_compacts() {
    let mut map = OrderedMap::with_config(OrderedMapConfig::realtime_preset());
    for i in 0..100 {
        map.insert(i, ());
    }
    for i in 0..99 {
        map.remove(&i).unwrap();
    }
    assert_eq!(map.tombstone_count(), 99);

    map.compact();
    assert_eq!(map.tombstone_count(), 0);
    assert!(map.contains_key(&99));
}

#[test]
fn test_serde_round_trip_keeps_order() {
    let map: OrderedMap<String, i32> = [("b".to_string(), 2), ("a".to_string(), 1)].into();
    let json = serde_json::to_string(&map).unwrap();
    assert_eq!(json, r#"{"b":2,"a":1}"#);
    let back: OrderedMap<String, i32> = serde_json::from_str(&json).unwrap();
    let keys: Vec<&String> = back.keys().iter().collect();
    assert_eq!(keys, ["b", "a"]);
}

#[test]
fn test_retain_and_clear() {
    let mut map: OrderedMap<i32, i32> = (0..10).map(|i| (i, i * i)).collect();
    map.retain(|_, v| *v % 2 == 0);
    assert_eq!(map.to_string(), "{0: 0, 2: 4, 4: 16, 6: 36, 8: 64}");
    assert_eq!(map.tombstone_count(), 0);

    map.clear();
    assert!(map.is_empty());
    assert_eq!(map.first(), None);
}
