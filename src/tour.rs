//! Annotated walkthroughs of [`OrderedMap`] and [`FixedTuple`]
//!
//! Each tour writes its sections to a caller-supplied [`fmt::Write`] sink;
//! the library itself never prints.
//!
//! ```rust
//! let mut out = String::new();
//! dictuple::tour::tuple_tour(&mut out).unwrap();
//! assert!(out.contains("Count of 2 in (1, 2, 3, 2, 4, 2, 5): 3"));
//! ```

use crate::error::Result;
use crate::ordered_map::OrderedMap;
use crate::tuple::{FixedTuple, Slice, TupleSchema};
use crate::value::{Key, Value};
use std::cmp::Ordering;
use std::fmt::{self, Write};

const MAP_COMPARISON: &str = "\
Comparison:
Lists: Ordered, indexed by numbers [0,1,2...]
Tuples: Immutable, ordered, indexed by numbers
Ordered maps: Key-value pairs, mutable, indexed by keys
Sets: Unordered, unique elements, no key-value pairs
";

const MAP_NOTES: &str = "
KEY POINTS ABOUT ORDERED MAPS:
1. Maps are MUTABLE (can be modified)
2. Keys must be hashable (strings, numbers, tuples)
3. Values can be ANY type (int, str, list, nested map, etc.)
4. Duplicate keys are not allowed; a later value overwrites the earlier one in place
5. Iteration follows first-insertion order
6. Lookup, insertion and removal are O(1) on average
7. Use a.merge(&b) to merge maps; b wins on shared keys
8. Use &a | &b as shorthand for a.merge(&b)
";

const TUPLE_NOTES: &str = "
TUPLES vs LISTS:
================
TUPLES:
  - Immutable (cannot change after creation)
  - Created with FixedTuple::pack or tuple!
  - Can be used as map keys
  - Only have count() and index_of() for searching
  - Better for protecting data

LISTS:
  - Mutable (can be changed)
  - Created with vec![]
  - Cannot be used as map keys
  - Have many methods (push, remove, sort, etc.)
  - Better for data manipulation

WHEN TO USE TUPLES:
  - When data should not be modified
  - As map keys
  - For function return values (multiple values)
  - To protect data from accidental changes
";

const TUPLE_SUMMARY: &str = "
TUPLE OPERATIONS SUMMARY:
=========================
Indexing:       t.get(index)
Slicing:        t.slice(start, stop, step)
Length:         t.len()
Concatenation:  &t1 + &t2
Repetition:     t.repeat(n)
Membership:     t.contains(&element)
Iteration:      for item in &t
Unpacking:      let [a, b, c] = t.unpack_exact::<3>()?
Count:          t.count(&element)
Index:          t.index_of(&element)
Conversion:     FixedTuple::from_sequence(iterable)
";

/// Map with string keys, in the given order
fn dict<const N: usize>(pairs: [(&str, Value); N]) -> OrderedMap<Key, Value> {
    pairs
        .into_iter()
        .map(|(key, value)| (Key::from(key), value))
        .collect()
}

fn key(name: &str) -> Key {
    Key::from(name)
}

fn list<T: fmt::Display>(items: &[T]) -> String {
    let rendered: Vec<String> = items.iter().map(ToString::to_string).collect();
    format!("[{}]", rendered.join(", "))
}

/// Walkthrough of map creation, access, mutation, deletion, views,
/// iteration, membership, nesting, comprehensions and common idioms
pub fn dictionary_tour<W: Write + ?Sized>(out: &mut W) -> Result<()> {
    map_basics(out)?;
    map_methods(out)?;
    map_nesting_and_comprehensions(out)?;
    map_practical_examples(out)?;
    out.write_str(MAP_COMPARISON)?;
    writeln!(out)?;
    out.write_str(MAP_NOTES)?;
    Ok(())
}

fn map_basics<W: Write + ?Sized>(out: &mut W) -> Result<()> {
    let mut student = dict([
        ("name", "Ali".into()),
        ("age", 20.into()),
        ("gpa", 3.8.into()),
    ]);
    let person = dict([
        ("name", "Sara".into()),
        ("age", 25.into()),
        ("city", "Karachi".into()),
    ]);
    let scores: OrderedMap<Key, Value> = [("math", 95), ("english", 88), ("science", 92)]
        .into_iter()
        .map(|(subject, score)| (key(subject), Value::from(score)))
        .collect();
    let empty: OrderedMap<Key, Value> = OrderedMap::new();

    writeln!(out, "Dictionary Examples:")?;
    writeln!(out, "student: {}", student)?;
    writeln!(out, "person: {}", person)?;
    writeln!(out, "scores: {}", scores)?;
    writeln!(out, "empty: {}", empty)?;
    writeln!(out)?;

    writeln!(out, "Student name: {}", student.try_get(&key("name"))?.plain())?;
    let (none, zero, not_found) = (Value::None, Value::from(0), Value::from("Not found"));
    writeln!(
        out,
        "Age: {}, GPA: {}, Email: {}",
        student.get_or(&key("age"), &none).plain(),
        student.get_or(&key("gpa"), &zero).plain(),
        student.get_or(&key("email"), &not_found).plain()
    )?;
    writeln!(out)?;

    student.insert(key("email"), "ali@example.com".into());
    student.insert(key("grade"), "A".into());
    student.insert(key("age"), 21.into());
    student.update_many([
        (key("city"), Value::from("Islamabad")),
        (key("phone"), Value::from("03001234567")),
    ]);
    writeln!(out, "After modifications:")?;
    writeln!(out, "student: {}", student)?;
    writeln!(out)?;

    student.remove(&key("phone"))?;
    let email = student.remove(&key("email"))?;
    writeln!(out, "Removed email: {}", email.plain())?;
    let (last_key, last_value) = student.pop_last()?;
    writeln!(
        out,
        "Removed item: {}",
        FixedTuple::pack([Value::from(last_key), last_value])
    )?;
    let mut test_dict = dict([("a", 1.into()), ("b", 2.into())]);
    test_dict.clear();
    writeln!(out, "Cleared dictionary: {}", test_dict)?;
    writeln!(out)?;
    Ok(())
}

fn map_methods<W: Write + ?Sized>(out: &mut W) -> Result<()> {
    let mut car = dict([
        ("brand", "Toyota".into()),
        ("model", "Camry".into()),
        ("year", 2022.into()),
        ("color", "white".into()),
    ]);
    writeln!(out, "Keys: dict_keys({})", car.keys())?;
    writeln!(out, "Values: dict_values({})", car.values())?;
    writeln!(out, "Items: dict_items({})", car.items())?;

    let car_copy = car.clone();
    let price = car.set_default(key("price"), 50000.into());
    writeln!(out, "Price: {}", price)?;
    writeln!(out, "After setdefault: {}", car)?;
    writeln!(out, "Copy is unchanged: {}", car_copy)?;
    writeln!(out)?;

    writeln!(out, "Iterating through dictionary:")?;
    let book = dict([
        ("title", "Python Basics".into()),
        ("author", "John Doe".into()),
        ("pages", 350.into()),
    ]);
    writeln!(out, "Keys:")?;
    for k in book.keys() {
        writeln!(out, "  {}", k.plain())?;
    }
    writeln!(out, "Values:")?;
    for v in book.values() {
        writeln!(out, "  {}", v.plain())?;
    }
    writeln!(out, "Key-Value pairs:")?;
    for (k, v) in book.items() {
        writeln!(out, "  {}: {}", k.plain(), v.plain())?;
    }
    writeln!(out)?;

    if book.contains_key(&key("title")) {
        writeln!(out, "'title' key exists in book dictionary")?;
    }
    if !book.contains_key(&key("price")) {
        writeln!(out, "'price' key does not exist in book dictionary")?;
    }
    writeln!(out)?;
    Ok(())
}

fn map_nesting_and_comprehensions<W: Write + ?Sized>(out: &mut W) -> Result<()> {
    let employee = |name: &str, salary: i64| {
        Value::from(dict([("name", name.into()), ("salary", salary.into())]))
    };
    let company = dict([
        ("name", "Tech Corp".into()),
        ("location", "Lahore".into()),
        (
            "employees",
            Value::from(dict([
                ("emp1", employee("Ahmed", 50000)),
                ("emp2", employee("Fatima", 55000)),
                ("emp3", employee("Hassan", 52000)),
            ])),
        ),
    ]);
    writeln!(out, "Nested dictionary:")?;
    writeln!(out, "Company: {}", company.try_get(&key("name"))?.plain())?;
    let first_employee = company
        .try_get(&key("employees"))?
        .lookup(&key("emp1"))?
        .lookup(&key("name"))?;
    writeln!(out, "First employee: {}", first_employee.plain())?;
    writeln!(out)?;

    let squares: OrderedMap<i64, i64> = (1..=5).map(|x| (x, x * x)).collect();
    writeln!(out, "Squares: {}", squares)?;

    let mut even_squares: OrderedMap<i64, i64> = (1..=10).map(|x| (x, x * x)).collect();
    even_squares.retain(|x, _| x % 2 == 0);
    writeln!(out, "Even squares: {}", even_squares)?;

    let names = ["Ali", "Sara", "Ahmed"];
    let ages = [20, 22, 21];
    let people: OrderedMap<Key, Value> = names
        .iter()
        .zip(ages)
        .map(|(name, age)| (key(name), Value::from(age)))
        .collect();
    writeln!(out, "People: {}", people)?;
    writeln!(out)?;
    Ok(())
}

fn map_practical_examples<W: Write + ?Sized>(out: &mut W) -> Result<()> {
    let mut char_count: OrderedMap<Key, i64> = OrderedMap::new();
    for c in "hello world".chars().filter(|c| *c != ' ') {
        *char_count.entry(Key::from(c.to_string())).or_insert(0) += 1;
    }
    writeln!(out, "Character count: {}", char_count)?;

    let dict1 = dict([("a", 1.into()), ("b", 2.into())]);
    let dict2 = dict([("c", 3.into()), ("d", 4.into())]);
    writeln!(out, "Merged dictionary: {}", &dict1 | &dict2)?;

    let original = dict([("apple", "fruit".into()), ("carrot", "vegetable".into())]);
    writeln!(out, "Inverted: {}", original.try_invert()?)?;
    writeln!(out)?;
    Ok(())
}

/// Walkthrough of tuple creation, indexing, slicing, unpacking, searching,
/// iteration, concatenation, nesting, immutability, conversion, packing,
/// comparison and practical uses
pub fn tuple_tour<W: Write + ?Sized>(out: &mut W) -> Result<()> {
    let fruits = crate::tuple!("apple", "banana", "orange", "mango");
    let numbers = crate::tuple!(1, 2, 3, 4, 5);

    tuple_creation_and_access(out, &fruits, &numbers)?;
    tuple_methods(out, &fruits)?;
    tuple_operations(out, &numbers)?;
    tuple_practical_examples(out)?;
    out.write_str(TUPLE_NOTES)?;
    out.write_str(TUPLE_SUMMARY)?;
    Ok(())
}

fn tuple_creation_and_access<W: Write + ?Sized>(
    out: &mut W,
    fruits: &FixedTuple<Value>,
    numbers: &FixedTuple<Value>,
) -> Result<()> {
    let mixed = crate::tuple!(1, "hello", 3.14, true, Value::None);
    let coordinates = FixedTuple::pack([10, 20, 30]);
    let person = crate::tuple!("Ali", 25, "Islamabad");
    let from_list = FixedTuple::from(vec![1, 2, 3, 4]);
    let from_string: FixedTuple<Value> = "ABC".chars().map(Value::from).collect();
    let single = crate::tuple!(42);
    let single_wrong = Value::from(42);
    let empty = crate::tuple!();

    writeln!(out, "Tuple Examples:")?;
    writeln!(out, "fruits: {}", fruits)?;
    writeln!(out, "numbers: {}", numbers)?;
    writeln!(out, "mixed: {}", mixed)?;
    writeln!(out, "coordinates: {}", coordinates)?;
    writeln!(out, "tuple from list: {}", from_list)?;
    writeln!(out, "tuple from string: {}", from_string)?;
    writeln!(out, "single element tuple: {}", single)?;
    writeln!(out, "empty tuple: {}", empty)?;
    writeln!(
        out,
        "Type of single: {}, Type of single_wrong: {}",
        Value::from(single).type_name(),
        single_wrong.type_name()
    )?;
    writeln!(out)?;

    writeln!(out, "Accessing elements:")?;
    writeln!(out, "First fruit: {}", fruits.get(0)?.plain())?;
    writeln!(out, "Last fruit: {}", fruits.get(-1)?.plain())?;
    writeln!(out, "Second fruit: {}", fruits.get(1)?.plain())?;
    writeln!(out)?;

    writeln!(out, "Slicing examples:")?;
    writeln!(out, "First three fruits: {}", fruits.slice(Some(0), Some(3), None)?)?;
    writeln!(out, "From index 1 to end: {}", fruits.slice(Some(1), None, None)?)?;
    writeln!(out, "All except last: {}", fruits.slice(None, Some(-1), None)?)?;
    writeln!(out, "Every second element: {}", fruits.slice(None, None, Some(2))?)?;
    writeln!(out, "Reversed: {}", fruits.slice_with(Slice::reversed())?)?;
    writeln!(out)?;

    let [x, y, z] = coordinates.unpack_exact::<3>()?;
    writeln!(out, "Unpacked coordinates - x: {}, y: {}, z: {}", x, y, z)?;
    let ([a, b], rest) = numbers.unpack::<2>()?;
    writeln!(out, "a: {}, b: {}, rest: {}", a, b, list(rest))?;
    let [name, age, city] = person.unpack_exact::<3>()?;
    writeln!(
        out,
        "Name: {}, Age: {}, City: {}",
        name.plain(),
        age.plain(),
        city.plain()
    )?;
    writeln!(out)?;
    Ok(())
}

fn tuple_methods<W: Write + ?Sized>(out: &mut W, fruits: &FixedTuple<Value>) -> Result<()> {
    let sample = FixedTuple::pack([1, 2, 3, 2, 4, 2, 5]);
    writeln!(out, "Count of 2 in {}: {}", sample, sample.count(&2))?;
    writeln!(out, "Index of first 2: {}", sample.index_of(&2)?)?;
    match sample.index_of_from(&2, 2) {
        Ok(index) => writeln!(out, "Index of 2 starting from index 2: {}", index)?,
        Err(_) => writeln!(out, "Element not found")?,
    }
    if let Err(e) = sample.index_of(&10) {
        writeln!(out, "Error: {}", e)?;
    }
    writeln!(out)?;

    writeln!(out, "Length of fruits: {}", fruits.len())?;
    if fruits.contains(&Value::from("apple")) {
        writeln!(out, "'apple' is in fruits tuple")?;
    }
    if !fruits.contains(&Value::from("grape")) {
        writeln!(out, "'grape' is not in fruits tuple")?;
    }
    writeln!(out)?;

    writeln!(out, "Iterating through tuple:")?;
    let colors = FixedTuple::pack(["red", "green", "blue", "yellow"]);
    writeln!(out, "Colors:")?;
    for color in &colors {
        writeln!(out, "  {}", color)?;
    }
    writeln!(out, "\nColors with index:")?;
    for (index, color) in colors.iter().enumerate() {
        writeln!(out, "  {}: {}", index, color)?;
    }
    writeln!(out)?;
    Ok(())
}

fn tuple_operations<W: Write + ?Sized>(out: &mut W, numbers: &FixedTuple<Value>) -> Result<()> {
    let tuple1 = FixedTuple::pack([1, 2, 3]);
    let tuple2 = FixedTuple::pack([4, 5, 6]);
    writeln!(
        out,
        "Concatenation: {} + {} = {}",
        tuple1,
        tuple2,
        &tuple1 + &tuple2
    )?;
    let pair = crate::tuple!("a", "b");
    writeln!(out, "Repetition: {} * 3 = {}", pair, pair.repeat(3)?)?;
    writeln!(out)?;

    let nested = FixedTuple::pack([
        FixedTuple::pack([1, 2]),
        FixedTuple::pack([3, 4]),
        FixedTuple::pack([5, 6]),
    ]);
    writeln!(out, "Nested tuple: {}", nested)?;
    writeln!(out, "First inner tuple: {}", nested.get(0)?)?;
    writeln!(out, "First element of first inner tuple: {}", nested.get(0)?.get(0)?)?;
    let matrix = FixedTuple::pack([
        crate::tuple!(1, 2, 3),
        crate::tuple!("a", "b", "c"),
        crate::tuple!(true, false, Value::None),
    ]);
    writeln!(out, "Matrix: {}", matrix)?;
    writeln!(out, "Element [1][2]: {}", matrix.get(1)?.get(2)?.plain())?;
    writeln!(out)?;

    writeln!(out, "Demonstrating immutability:")?;
    if let Err(e) = numbers.set(0, Value::from(10)) {
        writeln!(out, "Error: Cannot modify tuple - {}", e)?;
    }
    if let Err(e) = numbers.append(Value::from(6)) {
        writeln!(out, "Error: Cannot append to tuple - {}", e)?;
    }
    if let Err(e) = numbers.delete(0) {
        writeln!(out, "Error: Cannot delete from tuple - {}", e)?;
    }
    writeln!(out, "Tuples are immutable - they cannot be changed after creation!")?;
    writeln!(out)?;

    let my_list = vec![10, 20, 30, 40];
    writeln!(out, "List: {}", list(&my_list))?;
    writeln!(out, "Converted to tuple: {}", FixedTuple::from(my_list))?;
    let my_tuple = FixedTuple::pack([100, 200, 300]);
    writeln!(out, "Tuple: {}", my_tuple)?;
    writeln!(out, "Converted to list: {}", list(&my_tuple.to_vec()))?;
    writeln!(out)?;

    let (name, age, city) = ("Ahmed", 25, "Karachi");
    let person_info = FixedTuple::<Value>::from((name, age, city));
    writeln!(out, "Packed tuple: {}", person_info)?;
    let [n, a, c] = person_info.unpack_exact::<3>()?;
    writeln!(
        out,
        "Unpacked - Name: {}, Age: {}, City: {}",
        n.plain(),
        a.plain(),
        c.plain()
    )?;
    writeln!(out)?;

    let tuple_a = FixedTuple::pack([1, 2, 3]);
    let tuple_b = FixedTuple::pack([1, 2, 4]);
    let tuple_c = FixedTuple::pack([1, 2, 3]);
    writeln!(out, "Tuple comparison:")?;
    writeln!(
        out,
        "{} == {}: {}",
        tuple_a,
        tuple_c,
        Value::from(tuple_a == tuple_c)
    )?;
    writeln!(
        out,
        "{} < {}: {}",
        tuple_a,
        tuple_b,
        Value::from(tuple_a.compare(&tuple_b) == Ordering::Less)
    )?;
    writeln!(
        out,
        "{} > {}: {}",
        tuple_b,
        tuple_a,
        Value::from(tuple_b > tuple_a)
    )?;
    writeln!(out)?;
    Ok(())
}

fn user_info() -> (&'static str, i64, &'static str) {
    ("Ali", 25, "ali@example.com")
}

fn tuple_practical_examples<W: Write + ?Sized>(out: &mut W) -> Result<()> {
    let user = FixedTuple::<Value>::from(user_info());
    writeln!(out, "User info: {}", user)?;
    let (username, user_age, email) = user_info();
    writeln!(out, "Username: {}, Age: {}, Email: {}", username, user_age, email)?;

    let coordinates_map: OrderedMap<FixedTuple<i64>, Value> = OrderedMap::from([
        (FixedTuple::pack([0, 0]), Value::from("origin")),
        (FixedTuple::pack([1, 1]), Value::from("diagonal")),
        (FixedTuple::pack([5, 10]), Value::from("point_A")),
    ]);
    writeln!(out, "\nCoordinates mapping: {}", coordinates_map)?;
    writeln!(
        out,
        "Value at (0, 0): {}",
        coordinates_map.try_get(&FixedTuple::pack([0, 0]))?.plain()
    )?;

    let students: Vec<FixedTuple<Key>> = [("Ali", 85), ("Sara", 90), ("Ahmed", 85), ("Fatima", 88)]
        .into_iter()
        .map(|(name, score)| FixedTuple::pack([Key::from(name), Key::from(score)]))
        .collect();
    writeln!(out, "\nOriginal: {}", list(&students))?;
    let mut sorted = students.clone();
    sorted.sort_by_key(|student| FixedTuple::pack([student[1].clone(), student[0].clone()]));
    writeln!(out, "Sorted by score then name: {}", list(&sorted))?;

    let point = TupleSchema::new("Point", ["x", "y", "z"])?;
    let p = point.instantiate([1, 2, 3])?;
    writeln!(out, "\nNamed tuple: {}", p)?;
    writeln!(
        out,
        "Access by attribute: x={}, y={}, z={}",
        p.field("x")?,
        p.field("y")?,
        p.field("z")?
    )?;
    writeln!(out)?;
    Ok(())
}
