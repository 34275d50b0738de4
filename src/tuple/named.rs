//! Named tuples: a [`FixedTuple`] whose positions also have field names

use super::fixed_tuple::FixedTuple;
use crate::error::{DictupleError, Result};
use crate::ordered_map::OrderedMap;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// Type name and field names shared by every [`NamedTuple`] built from it
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TupleSchema {
    name: String,
    fields: Box<[String]>,
}

impl TupleSchema {
    /// Creates a schema; field names must be non-empty and unique
    ///
    /// ```rust
    /// use dictuple::TupleSchema;
    ///
    /// let point = TupleSchema::new("Point", ["x", "y", "z"]).unwrap();
    /// let p = point.instantiate([1, 2, 3]).unwrap();
    /// assert_eq!(*p.field("y").unwrap(), 2);
    /// assert_eq!(p.to_string(), "Point(x=1, y=2, z=3)");
    /// ```
    pub fn new<N, I, F>(name: N, fields: I) -> Result<Arc<Self>>
    where
        N: Into<String>,
        I: IntoIterator<Item = F>,
        F: Into<String>,
    {
        let fields: Box<[String]> = fields.into_iter().map(Into::into).collect();
        for (i, field) in fields.iter().enumerate() {
            if field.is_empty() {
                return Err(DictupleError::invalid_argument(format!(
                    "field name at position {} is empty",
                    i
                )));
            }
            if fields[..i].contains(field) {
                return Err(DictupleError::invalid_argument(format!(
                    "duplicate field name: {}",
                    field
                )));
            }
        }
        Ok(Arc::new(Self {
            name: name.into(),
            fields,
        }))
    }

    /// Type name used when rendering instances
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Field names in positional order
    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    /// Number of fields
    pub fn arity(&self) -> usize {
        self.fields.len()
    }

    /// Position of `field`
    pub fn position(&self, field: &str) -> Option<usize> {
        self.fields.iter().position(|f| f == field)
    }

    /// Builds an instance; `values` must supply exactly one value per field
    pub fn instantiate<T, I>(self: &Arc<Self>, values: I) -> Result<NamedTuple<T>>
    where
        I: IntoIterator<Item = T>,
    {
        NamedTuple::new(Arc::clone(self), values)
    }
}

/// A tuple whose elements can also be read by field name
///
/// Comparison and hashing look at the values only, so a named tuple equals
/// another with the same values regardless of schema.
#[derive(Debug, Clone)]
pub struct NamedTuple<T> {
    schema: Arc<TupleSchema>,
    values: FixedTuple<T>,
}

impl<T> NamedTuple<T> {
    /// Builds an instance of `schema`
    pub fn new<I>(schema: Arc<TupleSchema>, values: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
    {
        let values = FixedTuple::from_sequence(values);
        if values.len() != schema.arity() {
            return Err(DictupleError::arity_mismatch(
                schema.arity().to_string(),
                values.len(),
            ));
        }
        Ok(Self { schema, values })
    }

    /// The shared schema
    pub fn schema(&self) -> &Arc<TupleSchema> {
        &self.schema
    }

    /// The values as a plain tuple
    pub fn values(&self) -> &FixedTuple<T> {
        &self.values
    }

    /// Drops the field names
    pub fn into_tuple(self) -> FixedTuple<T> {
        self.values
    }

    /// Number of fields
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if the schema has no fields
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Value of `field`, failing with [`DictupleError::KeyNotFound`] for
    /// unknown names
    pub fn field(&self, field: &str) -> Result<&T> {
        self.schema
            .position(field)
            .map(|i| &self.values[i])
            .ok_or_else(|| DictupleError::key_not_found(field))
    }

    /// Value at `index`; negative indices count from the end
    pub fn get(&self, index: isize) -> Result<&T> {
        self.values.get(index)
    }

    /// Iterates over the values in field order
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.values.iter()
    }

    /// Field name to value map, in field order
    pub fn to_map(&self) -> OrderedMap<String, T>
    where
        T: Clone,
    {
        self.schema
            .fields()
            .iter()
            .cloned()
            .zip(self.values.iter().cloned())
            .collect()
    }
}

impl<T: PartialEq> PartialEq for NamedTuple<T> {
    fn eq(&self, other: &Self) -> bool {
        self.values == other.values
    }
}

impl<T: Eq> Eq for NamedTuple<T> {}

impl<T: Hash> Hash for NamedTuple<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.values.hash(state);
    }
}

impl<T: PartialOrd> PartialOrd for NamedTuple<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.values.partial_cmp(&other.values)
    }
}

impl<T: Ord> Ord for NamedTuple<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.values.cmp(&other.values)
    }
}

/// Renders as `Name(field=value, ...)`
impl<T: fmt::Display> fmt::Display for NamedTuple<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.schema.name())?;
        for (i, (field, value)) in self.schema.fields().iter().zip(self.values.iter()).enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}={}", field, value)?;
        }
        f.write_str(")")
    }
}
