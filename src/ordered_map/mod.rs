//! Insertion-ordered hash map
//!
//! [`OrderedMap`] keeps its entries in the order their keys were first
//! inserted. Updating an existing key changes its value without moving it;
//! removing a key and inserting it again puts it at the end.
//!
//! # Examples
//!
//! ```rust
//! use dictuple::OrderedMap;
//!
//! let mut student = OrderedMap::new();
//! student.insert("name", "Ali".to_string());
//! student.insert("age", "20".to_string());
//! student.insert("grade", "A".to_string());
//!
//! student.remove("age").unwrap();
//! student.insert("age", "21".to_string());
//!
//! let keys: Vec<_> = student.keys().iter().copied().collect();
//! assert_eq!(keys, vec!["name", "grade", "age"]);
//! ```

mod entry;
mod iter;
mod map;
mod serde_impl;
mod views;

pub use entry::{Entry, OccupiedEntry, VacantEntry};
pub use iter::{IntoIter, Iter, IterMut, Keys, Values, ValuesMut};
pub use map::OrderedMap;
pub use views::{ItemsView, KeysView, ValuesView};
