//! Value - any dynamic value, hashable or not

use super::key::Key;
use super::number::{cmp_int_float, format_float};
use super::repr::{write_str_literal, Plain};
use crate::error::{DictupleError, Result};
use crate::ordered_map::OrderedMap;
use crate::tuple::FixedTuple;
use std::cmp::Ordering;
use std::fmt;
use std::hash::BuildHasher;

/// A dynamic value as held by mixed dictionaries and tuples
///
/// Unlike [`Key`], a `Value` may contain lists and maps, so it is neither
/// hashable nor totally ordered. Values of different kinds, and unequal maps,
/// are unordered (`partial_cmp` returns `None`). `Float(NaN)` is not equal to
/// itself.
///
/// ```rust
/// use dictuple::{Key, OrderedMap, Value};
///
/// let mut person = OrderedMap::new();
/// person.insert(Key::from("name"), Value::from("Ali"));
/// person.insert(Key::from("skills"), Value::from(vec!["Python", "Rust"]));
///
/// let value = Value::from(person);
/// assert_eq!(value.to_string(), "{'name': 'Ali', 'skills': ['Python', 'Rust']}");
/// assert!(value.to_key().is_err());
/// ```
#[derive(Clone)]
pub enum Value {
    /// `None`
    None,
    /// `True` / `False`
    Bool(bool),
    /// Integer
    Int(i64),
    /// Floating point number
    Float(f64),
    /// Text
    Str(String),
    /// Immutable tuple
    Tuple(FixedTuple<Value>),
    /// Mutable list
    List(Vec<Value>),
    /// Nested ordered map
    Map(OrderedMap<Key, Value>),
}

impl Value {
    /// Python type name
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::None => "NoneType",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Str(_) => "str",
            Value::Tuple(_) => "tuple",
            Value::List(_) => "list",
            Value::Map(_) => "dict",
        }
    }

    /// Converts to a map key
    ///
    /// Lists and maps, and tuples containing them, fail with
    /// [`DictupleError::Unhashable`].
    pub fn to_key(&self) -> Result<Key> {
        match self {
            Value::None => Ok(Key::None),
            Value::Bool(b) => Ok(Key::Bool(*b)),
            Value::Int(i) => Ok(Key::Int(*i)),
            Value::Float(x) => Ok(Key::Float(*x)),
            Value::Str(s) => Ok(Key::Str(s.clone())),
            Value::Tuple(t) => t
                .iter()
                .map(Value::to_key)
                .collect::<Result<FixedTuple<Key>>>()
                .map(Key::Tuple),
            Value::List(_) | Value::Map(_) => Err(DictupleError::unhashable(self.type_name())),
        }
    }

    /// Check for `None`
    pub fn is_none(&self) -> bool {
        matches!(self, Value::None)
    }

    /// The boolean, for `Bool` values
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// The integer, for `Int` values
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// The number as a float, for `Int` and `Float` values
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Int(i) => Some(*i as f64),
            Value::Float(x) => Some(*x),
            _ => None,
        }
    }

    /// The text, for `Str` values
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    /// The tuple, for `Tuple` values
    pub fn as_tuple(&self) -> Option<&FixedTuple<Value>> {
        match self {
            Value::Tuple(t) => Some(t),
            _ => None,
        }
    }

    /// The list, for `List` values
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    /// Mutable list, for `List` values
    pub fn as_list_mut(&mut self) -> Option<&mut Vec<Value>> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    /// The nested map, for `Map` values
    pub fn as_map(&self) -> Option<&OrderedMap<Key, Value>> {
        match self {
            Value::Map(map) => Some(map),
            _ => None,
        }
    }

    /// Mutable nested map, for `Map` values
    pub fn as_map_mut(&mut self) -> Option<&mut OrderedMap<Key, Value>> {
        match self {
            Value::Map(map) => Some(map),
            _ => None,
        }
    }

    /// Subscript into a nested map: `company["employees"]["emp1"]`
    ///
    /// Fails with [`DictupleError::KeyNotFound`] for a missing key and
    /// [`DictupleError::InvalidArgument`] when `self` is not a map.
    pub fn lookup(&self, key: &Key) -> Result<&Value> {
        match self {
            Value::Map(map) => map.try_get(key),
            other => Err(DictupleError::invalid_argument(format!(
                "'{}' value is not subscriptable by key",
                other.type_name()
            ))),
        }
    }

    /// Renders text without quotes
    pub fn plain(&self) -> Plain<'_, Value> {
        Plain(self)
    }
}

impl fmt::Display for Plain<'_, Value> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Value::Str(s) => f.write_str(s),
            other => fmt::Display::fmt(other, f),
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::None, Value::None) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::Int(a), Value::Float(b)) | (Value::Float(b), Value::Int(a)) => {
                !b.is_nan() && cmp_int_float(*a, *b) == Ordering::Equal
            }
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Tuple(a), Value::Tuple(b)) => a == b,
            (Value::List(a), Value::List(b)) => a == b,
            (Value::Map(a), Value::Map(b)) => a == b,
            _ => false,
        }
    }
}

impl PartialOrd for Value {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Value::None, Value::None) => Some(Ordering::Equal),
            (Value::Bool(a), Value::Bool(b)) => a.partial_cmp(b),
            (Value::Int(a), Value::Int(b)) => a.partial_cmp(b),
            (Value::Float(a), Value::Float(b)) => a.partial_cmp(b),
            (Value::Int(a), Value::Float(b)) if !b.is_nan() => Some(cmp_int_float(*a, *b)),
            (Value::Float(a), Value::Int(b)) if !a.is_nan() => {
                Some(cmp_int_float(*b, *a).reverse())
            }
            (Value::Str(a), Value::Str(b)) => a.partial_cmp(b),
            (Value::Tuple(a), Value::Tuple(b)) => a.try_compare(b).ok(),
            (Value::List(a), Value::List(b)) => a.partial_cmp(b),
            (Value::Map(a), Value::Map(b)) if a == b => Some(Ordering::Equal),
            _ => None,
        }
    }
}

/// Python `repr`: `'text'`, `[1, 2]`, `{'k': v}`, `(1,)`
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::None => f.write_str("None"),
            Value::Bool(true) => f.write_str("True"),
            Value::Bool(false) => f.write_str("False"),
            Value::Int(i) => write!(f, "{}", i),
            Value::Float(x) => f.write_str(&format_float(*x)),
            Value::Str(s) => write_str_literal(f, s),
            Value::Tuple(t) => write!(f, "{}", t),
            Value::List(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                f.write_str("]")
            }
            Value::Map(map) => write!(f, "{}", map),
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl Default for Value {
    fn default() -> Self {
        Value::None
    }
}

impl From<Key> for Value {
    fn from(key: Key) -> Self {
        match key {
            Key::None => Value::None,
            Key::Bool(b) => Value::Bool(b),
            Key::Int(i) => Value::Int(i),
            Key::Float(x) => Value::Float(x),
            Key::Str(s) => Value::Str(s),
            Key::Tuple(t) => Value::Tuple(t.into_iter().map(Value::from).collect()),
        }
    }
}

impl TryFrom<Value> for Key {
    type Error = DictupleError;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::None => Ok(Key::None),
            Value::Bool(b) => Ok(Key::Bool(b)),
            Value::Int(i) => Ok(Key::Int(i)),
            Value::Float(x) => Ok(Key::Float(x)),
            Value::Str(s) => Ok(Key::Str(s)),
            Value::Tuple(t) => t
                .into_iter()
                .map(Key::try_from)
                .collect::<Result<FixedTuple<Key>>>()
                .map(Key::Tuple),
            other => Err(DictupleError::unhashable(other.type_name())),
        }
    }
}

impl From<()> for Value {
    fn from(_: ()) -> Self {
        Value::None
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

macro_rules! impl_from_int {
    ($($int:ty),+) => {
        $(
            impl From<$int> for Value {
                fn from(i: $int) -> Self {
                    Value::Int(i64::from(i))
                }
            }
        )+
    };
}

impl_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<f32> for Value {
    fn from(x: f32) -> Self {
        Value::Float(f64::from(x))
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Float(x)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<char> for Value {
    fn from(c: char) -> Self {
        Value::Str(c.to_string())
    }
}

impl From<FixedTuple<Value>> for Value {
    fn from(t: FixedTuple<Value>) -> Self {
        Value::Tuple(t)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::List(items.into_iter().map(Into::into).collect())
    }
}

impl From<OrderedMap<Key, Value>> for Value {
    fn from(map: OrderedMap<Key, Value>) -> Self {
        Value::Map(map)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::None, Into::into)
    }
}

impl<S> OrderedMap<Key, Value, S>
where
    S: BuildHasher + Clone,
{
    /// Swaps keys and values, checking at runtime that every value is hashable
    ///
    /// Fails with [`DictupleError::Unhashable`] on the first list or map value;
    /// `self` is never modified. Duplicate values resolve as in
    /// [`OrderedMap::invert`].
    pub fn try_invert(&self) -> Result<OrderedMap<Key, Value, S>> {
        let mut inverted = OrderedMap::with_config_and_hasher(
            crate::config::OrderedMapConfig {
                initial_capacity: self.len(),
                ..self.config().clone()
            },
            self.hasher().clone(),
        );
        for (key, value) in self.iter() {
            inverted.insert(value.to_key()?, Value::from(key.clone()));
        }
        Ok(inverted)
    }
}
