//! # Dictuple: Insertion-Ordered Maps and Immutable Tuples
//!
//! This crate provides two small container abstractions with Python-like
//! semantics, plus a dynamic value model so heterogeneous data can live in
//! both of them.
//!
//! ## Key Features
//!
//! - **OrderedMap**: Hash map that iterates in first-insertion order with
//!   average O(1) insert, lookup and removal
//! - **FixedTuple**: Immutable fixed-length sequence with negative indexing,
//!   `start:stop:step` slicing, unpacking and lexicographic comparison
//! - **NamedTuple**: Tuples whose positions also have field names
//! - **Dynamic Values**: Hashable [`Key`] and general [`Value`] types that
//!   render like Python literals
//! - **Tours**: Annotated walkthroughs written to any `fmt::Write` sink
//!
//! ## Quick Start
//!
//! ```rust
//! use dictuple::{tuple, FixedTuple, Key, OrderedMap, Value};
//!
//! // Insertion-ordered map; overwrites keep their position
//! let mut student = OrderedMap::new();
//! student.insert(Key::from("name"), Value::from("Ali"));
//! student.insert(Key::from("age"), Value::from(20));
//! student.insert(Key::from("name"), Value::from("Sara"));
//! assert_eq!(student.to_string(), "{'name': 'Sara', 'age': 20}");
//!
//! // Immutable tuples with Python slicing
//! let numbers = FixedTuple::pack([1, 2, 3, 4, 5]);
//! assert_eq!(numbers.slice(None, None, Some(-1)).unwrap().to_string(), "(5, 4, 3, 2, 1)");
//! assert!(numbers.set(0, 10).is_err());
//!
//! // Mixed tuples
//! let mixed = tuple!(1, "hello", 3.14, true);
//! assert_eq!(mixed.to_string(), "(1, 'hello', 3.14, True)");
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod ordered_map;
pub mod tour;
pub mod tuple;
pub mod value;

// Re-export core types
pub use config::{Config, OrderedMapConfig};
pub use error::{DictupleError, Result};
pub use ordered_map::{Entry, ItemsView, KeysView, OrderedMap, ValuesView};
pub use tuple::{FixedTuple, NamedTuple, Slice, TupleSchema};
pub use value::{Key, Value};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the library (currently just logs the version)
pub fn init() {
    log::debug!("Initializing dictuple v{}", VERSION);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_functionality() {
        init();
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_version_info() {
        let parts: Vec<&str> = VERSION.split('.').collect();
        assert!(parts.len() >= 2);
    }

    #[test]
    fn test_re_exports() {
        let _map = OrderedMap::<Key, Value>::new();
        let _tuple = FixedTuple::<Value>::empty();
        let _slice = Slice::full();
        let _config = OrderedMapConfig::default();
        let err = DictupleError::empty_container("pop_last");
        assert_eq!(err.category(), "empty");
    }

    #[test]
    fn test_multiple_init_calls() {
        init();
        init();
    }

    #[test]
    fn test_tuple_as_map_key_with_nested_values() {
        let mut grid: OrderedMap<FixedTuple<i64>, Value> = OrderedMap::new();
        grid.insert(FixedTuple::pack([0, 0]), Value::from("origin"));
        grid.insert(
            FixedTuple::pack([1, 1]),
            Value::from(tuple!("diagonal", vec![1, 1])),
        );
        assert_eq!(
            grid.to_string(),
            "{(0, 0): 'origin', (1, 1): ('diagonal', [1, 1])}"
        );
    }
}
