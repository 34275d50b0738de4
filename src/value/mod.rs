//! Dynamic value model
//!
//! [`Key`] is the hashable, totally ordered subset usable as a map key;
//! [`Value`] adds lists and nested maps. Both render like Python literals.

mod dynamic;
mod key;
mod number;
mod repr;

pub use dynamic::Value;
pub use key::Key;
pub use repr::Plain;
