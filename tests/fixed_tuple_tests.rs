//! Integration tests for FixedTuple and NamedTuple

use dictuple::{tuple, DictupleError, FixedTuple, Key, OrderedMap, Slice, TupleSchema, Value};
use std::cmp::Ordering;

#[test]
fn test_indexing_and_slicing() {
    let numbers = FixedTuple::pack([10, 20, 30, 40, 50]);
    assert_eq!(*numbers.get(0).unwrap(), 10);
    assert_eq!(*numbers.get(-1).unwrap(), 50);
    assert!(matches!(
        numbers.get(5),
        Err(DictupleError::IndexOutOfRange { index: 5, len: 5 })
    ));
    assert!(numbers.get(-6).is_err());

    assert_eq!(numbers.slice(Some(1), Some(4), None).unwrap().to_string(), "(20, 30, 40)");
    assert_eq!(numbers.slice(None, None, Some(2)).unwrap().to_string(), "(10, 30, 50)");
    assert_eq!(numbers.slice(Some(-2), None, None).unwrap().to_string(), "(40, 50)");
    assert_eq!(numbers.slice_with(Slice::reversed()).unwrap(), numbers.reversed());
    // Out-of-range bounds clamp instead of failing
    assert!(numbers.slice(Some(10), Some(20), None).unwrap().is_empty());
    assert!(matches!(
        numbers.slice(None, None, Some(0)),
        Err(DictupleError::InvalidArgument { .. })
    ));
}

#[test]
fn test_immutability() {
    let point = tuple!(3, 4);
    assert_eq!(
        point.set(0, Value::from(5)),
        Err(DictupleError::ImmutableMutation {
            operation: "item assignment"
        })
    );
    assert!(point.append(Value::from(5)).is_err());
    assert!(point.delete(0).is_err());
    assert_eq!(point.to_string(), "(3, 4)");
}

#[test]
fn test_copies_leave_tuple_unchanged() {
    let record = tuple!(1, vec![2, 3]);
    let mut items = record.to_vec();
    if let Some(list) = items[1].as_list_mut() {
        list.push(Value::from(4));
    }
    assert_eq!(FixedTuple::from(items).to_string(), "(1, [2, 3, 4])");
    assert_eq!(record.to_string(), "(1, [2, 3])");
}

#[test]
fn test_unpacking() {
    let record = tuple!("Ali", 20, "Tehran");
    let [name, age, city] = record.unpack_exact::<3>().unwrap();
    assert_eq!(name.as_str(), Some("Ali"));
    assert_eq!(age.as_int(), Some(20));
    assert_eq!(city.to_string(), "'Tehran'");

    let numbers = FixedTuple::pack([1, 2, 3, 4, 5]);
    let ([first, second], rest) = numbers.unpack::<2>().unwrap();
    assert_eq!((*first, *second), (1, 2));
    assert_eq!(rest, &[3, 4, 5]);

    assert_eq!(
        numbers.unpack_exact::<2>(),
        Err(DictupleError::ArityMismatch {
            expected: "2".to_string(),
            actual: 5
        })
    );
    assert!(matches!(
        FixedTuple::<i32>::empty().unpack::<1>(),
        Err(DictupleError::ArityMismatch { .. })
    ));
}

#[test]
fn test_search_methods() {
    let numbers = FixedTuple::pack([1, 2, 3, 2, 4, 2, 5]);
    assert_eq!(numbers.count(&2), 3);
    assert_eq!(numbers.count(&9), 0);
    assert_eq!(numbers.index_of(&2).unwrap(), 1);
    assert_eq!(numbers.index_of_from(&2, 2).unwrap(), 3);
    assert_eq!(numbers.index_of_from(&2, -2).unwrap(), 5);
    assert_eq!(
        numbers.index_of(&10).unwrap_err().to_string(),
        "Value not found: 10"
    );
    assert!(numbers.contains(&5));
}

#[test]
fn test_concat_and_repeat() {
    let a = FixedTuple::pack([1, 2]);
    let b = FixedTuple::pack([3]);
    assert_eq!((&a + &b).to_string(), "(1, 2, 3)");
    assert_eq!(a.concat(&FixedTuple::empty()), a);

    assert_eq!(a.repeat(3).unwrap().to_string(), "(1, 2, 1, 2, 1, 2)");
    assert!(a.repeat(0).unwrap().is_empty());
    assert!(matches!(
        a.repeat(-1),
        Err(DictupleError::InvalidArgument { .. })
    ));
}

#[test]
fn test_lexicographic_comparison() {
    let short = FixedTuple::pack([1, 2]);
    let long = FixedTuple::pack([1, 2, 0]);
    let bigger = FixedTuple::pack([1, 3]);
    assert_eq!(short.compare(&long), Ordering::Less);
    assert_eq!(long.compare(&bigger), Ordering::Less);
    assert!(short < bigger);

    let mixed = tuple!(1, "a");
    let other = tuple!(1, 2);
    assert!(matches!(
        mixed.try_compare(&other),
        Err(DictupleError::Unorderable { .. })
    ));
    assert_eq!(tuple!(1, 2.5).try_compare(&tuple!(1, 3)), Ok(Ordering::Less));
}

#[test]
fn test_display_forms() {
    assert_eq!(tuple!().to_string(), "()");
    assert_eq!(tuple!(42).to_string(), "(42,)");
    assert_eq!(FixedTuple::pack([1.5, 2.0]).to_string(), "(1.5, 2)");
    assert_eq!(tuple!(Value::None, 1.0).to_string(), "(None, 1.0)");
}

#[test]
fn test_tuples_as_map_keys() {
    let mut distances: OrderedMap<Key, Value> = OrderedMap::new();
    let tehran_shiraz = Key::from(FixedTuple::pack([Key::from("Tehran"), Key::from("Shiraz")]));
    distances.insert(tehran_shiraz.clone(), Value::from(935));

    assert_eq!(distances[&tehran_shiraz], Value::from(935));
    assert_eq!(distances.to_string(), "{('Tehran', 'Shiraz'): 935}");

    // Tuples holding lists are not hashable
    let unhashable = Value::from(tuple!(1, vec![2]));
    assert!(matches!(
        unhashable.to_key(),
        Err(DictupleError::Unhashable { .. })
    ));
}

#[test]
fn test_named_tuples() {
    let point = TupleSchema::new("Point", ["x", "y"]).unwrap();
    let p = point.instantiate([3, 4]).unwrap();
    assert_eq!(*p.field("x").unwrap(), 3);
    assert_eq!(*p.get(-1).unwrap(), 4);
    assert_eq!(p.to_string(), "Point(x=3, y=4)");
    assert!(matches!(
        p.field("z"),
        Err(DictupleError::KeyNotFound { .. })
    ));

    let map = p.to_map();
    assert_eq!(map.to_string(), "{x: 3, y: 4}");

    let other = TupleSchema::new("Vector", ["dx", "dy"]).unwrap();
    assert_eq!(p, other.instantiate([3, 4]).unwrap());

    assert!(matches!(
        point.instantiate([1, 2, 3]),
        Err(DictupleError::ArityMismatch { .. })
    ));
    assert!(TupleSchema::new("Bad", ["a", "a"]).is_err());
}
