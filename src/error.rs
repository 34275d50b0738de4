//! Error handling for the dictuple library
//!
//! Every fallible container operation returns [`Result<T>`] carrying a
//! [`DictupleError`]. All errors are local to the call that produced them and
//! leave the receiving container unchanged.

use std::fmt;
use thiserror::Error;

/// Main error type for the dictuple library
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DictupleError {
    /// Lookup or removal of a key that is not in the map
    #[error("Key not found: {key}")]
    KeyNotFound {
        /// Debug rendering of the missing key
        key: String,
    },

    /// Positional access outside `[-len, len - 1]`
    #[error("Index out of range: index {index}, length {len}")]
    IndexOutOfRange {
        /// The requested (possibly negative) index
        index: isize,
        /// Length of the sequence
        len: usize,
    },

    /// Linear search that found nothing
    #[error("Value not found: {value}")]
    ValueNotFound {
        /// Debug rendering of the value searched for
        value: String,
    },

    /// Unpacking into a different number of bindings than available
    #[error("Arity mismatch: expected {expected} values, got {actual}")]
    ArityMismatch {
        /// Human readable expectation, e.g. `3` or `at least 2`
        expected: String,
        /// Number of values actually available
        actual: usize,
    },

    /// Removal from an empty container
    #[error("Empty container: {container}")]
    EmptyContainer {
        /// Name of the operation or container that was empty
        container: &'static str,
    },

    /// Argument outside its valid domain (zero slice step, negative repeat count)
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// Description of the invalid argument
        message: String,
    },

    /// Attempt to modify a FixedTuple after construction
    #[error("Immutable mutation: FixedTuple does not support {operation}")]
    ImmutableMutation {
        /// The rejected operation
        operation: &'static str,
    },

    /// A value that cannot be used as a map key
    #[error("Unhashable value of type '{type_name}'")]
    Unhashable {
        /// Type name of the offending value
        type_name: &'static str,
    },

    /// Two values without a natural ordering between them
    #[error("Unorderable values: {left} and {right}")]
    Unorderable {
        /// Debug rendering of the left operand
        left: String,
        /// Debug rendering of the right operand
        right: String,
    },

    /// Configuration or parameter errors
    #[error("Invalid configuration: {message}")]
    Configuration {
        /// Configuration error message
        message: String,
    },

    /// The caller-supplied output sink rejected a write
    #[error("Output sink error")]
    Sink(#[from] fmt::Error),
}

impl DictupleError {
    /// Create a key not found error
    pub fn key_not_found<K: fmt::Debug + ?Sized>(key: &K) -> Self {
        Self::KeyNotFound { key: format!("{:?}", key) }
    }

    /// Create an index out of range error
    pub fn index_out_of_range(index: isize, len: usize) -> Self {
        Self::IndexOutOfRange { index, len }
    }

    /// Create a value not found error
    pub fn value_not_found<T: fmt::Debug + ?Sized>(value: &T) -> Self {
        Self::ValueNotFound { value: format!("{:?}", value) }
    }

    /// Create an arity mismatch error
    pub fn arity_mismatch<S: Into<String>>(expected: S, actual: usize) -> Self {
        Self::ArityMismatch { expected: expected.into(), actual }
    }

    /// Create an empty container error
    pub fn empty_container(container: &'static str) -> Self {
        Self::EmptyContainer { container }
    }

    /// Create an invalid argument error
    pub fn invalid_argument<S: Into<String>>(message: S) -> Self {
        Self::InvalidArgument { message: message.into() }
    }

    /// Create an immutable mutation error
    pub fn immutable_mutation(operation: &'static str) -> Self {
        Self::ImmutableMutation { operation }
    }

    /// Create an unhashable value error
    pub fn unhashable(type_name: &'static str) -> Self {
        Self::Unhashable { type_name }
    }

    /// Create an unorderable values error
    pub fn unorderable<L: fmt::Debug + ?Sized, R: fmt::Debug + ?Sized>(left: &L, right: &R) -> Self {
        Self::Unorderable {
            left: format!("{:?}", left),
            right: format!("{:?}", right),
        }
    }

    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration { message: message.into() }
    }

    /// Get the error category for logging
    pub fn category(&self) -> &'static str {
        match self {
            Self::KeyNotFound { .. } => "key",
            Self::IndexOutOfRange { .. } => "index",
            Self::ValueNotFound { .. } => "value",
            Self::ArityMismatch { .. } => "arity",
            Self::EmptyContainer { .. } => "empty",
            Self::InvalidArgument { .. } => "argument",
            Self::ImmutableMutation { .. } => "immutable",
            Self::Unhashable { .. } => "hash",
            Self::Unorderable { .. } => "order",
            Self::Configuration { .. } => "config",
            Self::Sink(_) => "sink",
        }
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, DictupleError>;

/// Resolve a possibly negative index against `len`
///
/// Negative indices count from the end, so `-1` is the last element. Anything
/// outside `[-len, len - 1]` is an [`DictupleError::IndexOutOfRange`].
#[inline]
pub fn normalize_index(index: isize, len: usize) -> Result<usize> {
    let resolved = if index < 0 {
        len.checked_sub(index.unsigned_abs())
    } else {
        Some(index as usize)
    };
    match resolved {
        Some(i) if i < len => Ok(i),
        _ => Err(DictupleError::index_out_of_range(index, len)),
    }
}
