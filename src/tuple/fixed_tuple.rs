//! FixedTuple - immutable fixed-length sequence

use super::slice::Slice;
use crate::error::{normalize_index, DictupleError, Result};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Index};
use std::slice;

/// Immutable, ordered, fixed-length sequence
///
/// The element storage is set once at construction and never changes, so a
/// `FixedTuple` of hashable elements is itself hashable and may be used as a
/// map key. Equality, ordering and hashing are elementwise and lexicographic.
///
/// # Examples
///
/// ```rust
/// use dictuple::FixedTuple;
///
/// let numbers = FixedTuple::pack([0, 1, 2, 3, 4, 5, 6, 7, 8, 9]);
/// assert_eq!(*numbers.get(-1).unwrap(), 9);
///
/// let evens = numbers.slice(None, None, Some(2)).unwrap();
/// assert_eq!(evens.to_string(), "(0, 2, 4, 6, 8)");
///
/// let ([first, second], rest) = numbers.unpack::<2>().unwrap();
/// assert_eq!((*first, *second, rest.len()), (0, 1, 8));
/// ```
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct FixedTuple<T> {
    items: Box<[T]>,
}

impl<T> FixedTuple<T> {
    /// The empty tuple `()`
    pub fn empty() -> Self {
        Self {
            items: Box::new([]),
        }
    }

    /// Packs a fixed number of values into a tuple
    pub fn pack<const N: usize>(items: [T; N]) -> Self {
        Self {
            items: Box::new(items),
        }
    }

    /// Builds a tuple from any finite sequence, preserving its order
    pub fn from_sequence<I: IntoIterator<Item = T>>(items: I) -> Self {
        items.into_iter().collect()
    }

    /// Number of elements
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Borrows the elements as a slice
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Iterates over the elements in order
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Converts into a vector without copying
    pub fn into_vec(self) -> Vec<T> {
        self.items.into_vec()
    }

    /// Element at `index`; negative indices count from the end
    pub fn get(&self, index: isize) -> Result<&T> {
        normalize_index(index, self.items.len()).map(|i| &self.items[i])
    }

    /// Unpacks the first `N` elements, returning the rest as a slice
    ///
    /// This is star-unpacking: `first, second, *rest = t`. Fails with
    /// [`DictupleError::ArityMismatch`] when the tuple has fewer than `N`
    /// elements.
    pub fn unpack<const N: usize>(&self) -> Result<([&T; N], &[T])> {
        if self.items.len() < N {
            return Err(DictupleError::arity_mismatch(
                format!("at least {}", N),
                self.items.len(),
            ));
        }
        let (head, rest) = self.items.split_at(N);
        Ok((std::array::from_fn(|i| &head[i]), rest))
    }

    /// Unpacks into exactly `N` bindings
    pub fn unpack_exact<const N: usize>(&self) -> Result<[&T; N]> {
        if self.items.len() != N {
            return Err(DictupleError::arity_mismatch(N.to_string(), self.items.len()));
        }
        Ok(std::array::from_fn(|i| &self.items[i]))
    }

    /// Tuples cannot be modified; always fails with
    /// [`DictupleError::ImmutableMutation`]
    pub fn set(&self, _index: isize, _value: T) -> Result<()> {
        Err(DictupleError::immutable_mutation("item assignment"))
    }

    /// Tuples cannot grow; always fails with [`DictupleError::ImmutableMutation`]
    pub fn append(&self, _value: T) -> Result<()> {
        Err(DictupleError::immutable_mutation("append"))
    }

    /// Tuples cannot shrink; always fails with [`DictupleError::ImmutableMutation`]
    pub fn delete(&self, _index: isize) -> Result<()> {
        Err(DictupleError::immutable_mutation("item deletion"))
    }

    /// Lexicographic comparison
    pub fn compare(&self, other: &Self) -> Ordering
    where
        T: Ord,
    {
        self.cmp(other)
    }
}

impl<T: PartialEq> FixedTuple<T> {
    /// Number of elements equal to `value`
    pub fn count(&self, value: &T) -> usize {
        self.items.iter().filter(|item| *item == value).count()
    }

    /// Whether any element equals `value`
    pub fn contains(&self, value: &T) -> bool {
        self.items.contains(value)
    }

    /// Position of the first element equal to `value`
    pub fn index_of(&self, value: &T) -> Result<usize>
    where
        T: fmt::Debug,
    {
        self.index_of_from(value, 0)
    }

    /// Position of the first element equal to `value` at or after `start`
    ///
    /// A negative `start` counts from the end; out-of-range starts are clamped.
    pub fn index_of_from(&self, value: &T, start: isize) -> Result<usize>
    where
        T: fmt::Debug,
    {
        let len = self.items.len();
        let start = if start < 0 {
            len.saturating_sub(start.unsigned_abs())
        } else {
            (start as usize).min(len)
        };
        self.items[start..]
            .iter()
            .position(|item| item == value)
            .map(|offset| start + offset)
            .ok_or_else(|| DictupleError::value_not_found(value))
    }

    /// Lexicographic comparison for partially ordered elements
    ///
    /// The first unequal pair decides; if that pair has no ordering the
    /// result is [`DictupleError::Unorderable`]. A proper prefix sorts first.
    pub fn try_compare(&self, other: &Self) -> Result<Ordering>
    where
        T: PartialOrd + fmt::Debug,
    {
        for (left, right) in self.items.iter().zip(other.items.iter()) {
            match left.partial_cmp(right) {
                Some(Ordering::Equal) => continue,
                Some(ordering) => return Ok(ordering),
                None if left == right => continue,
                None => return Err(DictupleError::unorderable(left, right)),
            }
        }
        Ok(self.items.len().cmp(&other.items.len()))
    }
}

impl<T: Clone> FixedTuple<T> {
    /// New tuple from the positions selected by `start:stop:step`
    pub fn slice(
        &self,
        start: Option<isize>,
        stop: Option<isize>,
        step: Option<isize>,
    ) -> Result<Self> {
        self.slice_with(Slice::new(start, stop, step))
    }

    /// New tuple from the positions selected by `slice`
    pub fn slice_with(&self, slice: Slice) -> Result<Self> {
        let range = slice.resolve(self.items.len())?;
        Ok(range.positions().map(|i| self.items[i].clone()).collect())
    }

    /// Elements of `self` followed by those of `other`
    pub fn concat(&self, other: &Self) -> Self {
        self.items.iter().chain(other.items.iter()).cloned().collect()
    }

    /// The elements repeated `times` times
    ///
    /// A negative count is an [`DictupleError::InvalidArgument`].
    pub fn repeat(&self, times: i64) -> Result<Self> {
        let times = usize::try_from(times).map_err(|_| {
            DictupleError::invalid_argument(format!("repeat count cannot be negative: {}", times))
        })?;
        if self.items.len().checked_mul(times).is_none() {
            return Err(DictupleError::invalid_argument(format!(
                "repeat count too large: {}",
                times
            )));
        }
        Ok((0..times).flat_map(|_| self.items.iter().cloned()).collect())
    }

    /// Copies the elements into a vector
    pub fn to_vec(&self) -> Vec<T> {
        self.items.to_vec()
    }

    /// New tuple with the elements in reverse order
    pub fn reversed(&self) -> Self {
        self.items.iter().rev().cloned().collect()
    }
}

impl<T> Index<usize> for FixedTuple<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.items[index]
    }
}

impl<T> AsRef<[T]> for FixedTuple<T> {
    fn as_ref(&self) -> &[T] {
        &self.items
    }
}

impl<T> From<Vec<T>> for FixedTuple<T> {
    fn from(items: Vec<T>) -> Self {
        Self {
            items: items.into_boxed_slice(),
        }
    }
}

impl<T> From<Box<[T]>> for FixedTuple<T> {
    fn from(items: Box<[T]>) -> Self {
        Self { items }
    }
}

impl<T, const N: usize> From<[T; N]> for FixedTuple<T> {
    fn from(items: [T; N]) -> Self {
        Self::pack(items)
    }
}

impl<T> FromIterator<T> for FixedTuple<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T> IntoIterator for FixedTuple<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_vec().into_iter()
    }
}

impl<'a, T> IntoIterator for &'a FixedTuple<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// `&a + &b` is [`FixedTuple::concat`]
impl<T: Clone> Add<&FixedTuple<T>> for &FixedTuple<T> {
    type Output = FixedTuple<T>;

    fn add(self, rhs: &FixedTuple<T>) -> FixedTuple<T> {
        self.concat(rhs)
    }
}

fn write_tuple<T, F>(f: &mut fmt::Formatter<'_>, items: &[T], write_item: F) -> fmt::Result
where
    F: Fn(&mut fmt::Formatter<'_>, &T) -> fmt::Result,
{
    f.write_str("(")?;
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write_item(f, item)?;
    }
    if items.len() == 1 {
        f.write_str(",")?;
    }
    f.write_str(")")
}

/// Renders as `(a, b)`; a single element keeps its trailing comma: `(a,)`
impl<T: fmt::Display> fmt::Display for FixedTuple<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_tuple(f, &self.items, |f, item| write!(f, "{}", item))
    }
}

impl<T: fmt::Debug> fmt::Debug for FixedTuple<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_tuple(f, &self.items, |f, item| write!(f, "{:?}", item))
    }
}

impl<T: Serialize> Serialize for FixedTuple<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_seq(self.items.iter())
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for FixedTuple<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        Vec::<T>::deserialize(deserializer).map(Self::from)
    }
}
