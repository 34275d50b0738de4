//! Key - the hashable subset of the value model

use super::number::{cmp_floats, cmp_int_float, exact_int, format_float};
use super::repr::{write_str_literal, Plain};
use crate::tuple::FixedTuple;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// A hashable dynamic value, usable as an [`OrderedMap`](crate::OrderedMap) key
///
/// Numbers compare by value across `Int` and `Float`, so `Int(1)` and
/// `Float(1.0)` are the same key. `NaN` equals itself here so that `Key` can
/// be `Eq`. Values of different kinds order by kind:
/// `None < Bool < number < Str < Tuple`.
#[derive(Clone)]
pub enum Key {
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
    /// Tuple of keys
    Tuple(FixedTuple<Key>),
}

impl Key {
    /// Python type name
    pub fn type_name(&self) -> &'static str {
        match self {
            Key::None => "NoneType",
            Key::Bool(_) => "bool",
            Key::Int(_) => "int",
            Key::Float(_) => "float",
            Key::Str(_) => "str",
            Key::Tuple(_) => "tuple",
        }
    }

    fn rank(&self) -> u8 {
        match self {
            Key::None => 0,
            Key::Bool(_) => 1,
            Key::Int(_) | Key::Float(_) => 2,
            Key::Str(_) => 3,
            Key::Tuple(_) => 4,
        }
    }

    /// The text, for `Str` keys
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Key::Str(s) => Some(s),
            _ => None,
        }
    }

    /// The integer, for `Int` keys
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Key::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Renders text without quotes
    pub fn plain(&self) -> Plain<'_, Key> {
        Plain(self)
    }
}

impl fmt::Display for Plain<'_, Key> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Key::Str(s) => f.write_str(s),
            other => fmt::Display::fmt(other, f),
        }
    }
}

impl Ord for Key {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Key::None, Key::None) => Ordering::Equal,
            (Key::Bool(a), Key::Bool(b)) => a.cmp(b),
            (Key::Int(a), Key::Int(b)) => a.cmp(b),
            (Key::Float(a), Key::Float(b)) => cmp_floats(*a, *b),
            (Key::Int(a), Key::Float(b)) => cmp_int_float(*a, *b),
            (Key::Float(a), Key::Int(b)) => cmp_int_float(*b, *a).reverse(),
            (Key::Str(a), Key::Str(b)) => a.cmp(b),
            (Key::Tuple(a), Key::Tuple(b)) => a.cmp(b),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

impl PartialOrd for Key {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Key {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Key {}

impl Hash for Key {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            Key::None => state.write_u8(0),
            Key::Bool(b) => {
                state.write_u8(1);
                b.hash(state);
            }
            Key::Int(i) => {
                state.write_u8(2);
                i.hash(state);
            }
            // Integral floats hash like the equal Int
            Key::Float(f) => match exact_int(*f) {
                Some(i) => {
                    state.write_u8(2);
                    i.hash(state);
                }
                None if f.is_nan() => state.write_u8(3),
                None => {
                    state.write_u8(4);
                    f.to_bits().hash(state);
                }
            },
            Key::Str(s) => {
                state.write_u8(5);
                s.hash(state);
            }
            Key::Tuple(t) => {
                state.write_u8(6);
                t.hash(state);
            }
        }
    }
}

/// Python `repr`: `None`, `True`, `42`, `3.14`, `'text'`, `(1, 2)`
impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::None => f.write_str("None"),
            Key::Bool(true) => f.write_str("True"),
            Key::Bool(false) => f.write_str("False"),
            Key::Int(i) => write!(f, "{}", i),
            Key::Float(x) => f.write_str(&format_float(*x)),
            Key::Str(s) => write_str_literal(f, s),
            Key::Tuple(t) => write!(f, "{}", t),
        }
    }
}

impl fmt::Debug for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl From<bool> for Key {
    fn from(b: bool) -> Self {
        Key::Bool(b)
    }
}

impl From<i32> for Key {
    fn from(i: i32) -> Self {
        Key::Int(i64::from(i))
    }
}

impl From<i64> for Key {
    fn from(i: i64) -> Self {
        Key::Int(i)
    }
}

impl From<f64> for Key {
    fn from(x: f64) -> Self {
        Key::Float(x)
    }
}

impl From<&str> for Key {
    fn from(s: &str) -> Self {
        Key::Str(s.to_string())
    }
}

impl From<String> for Key {
    fn from(s: String) -> Self {
        Key::Str(s)
    }
}

impl From<FixedTuple<Key>> for Key {
    fn from(t: FixedTuple<Key>) -> Self {
        Key::Tuple(t)
    }
}
