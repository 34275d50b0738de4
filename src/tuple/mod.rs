//! Immutable tuples
//!
//! * [`FixedTuple`] - fixed-length sequence with Python tuple semantics
//! * [`Slice`] - `start:stop:step` bounds used by [`FixedTuple::slice_with`]
//! * [`NamedTuple`] / [`TupleSchema`] - tuples with named fields
//! * [`tuple!`](crate::tuple!) - packs mixed values into a `FixedTuple<Value>`

mod fixed_tuple;
mod macros;
mod named;
mod slice;

pub use fixed_tuple::FixedTuple;
pub use named::{NamedTuple, TupleSchema};
pub use slice::{Slice, SliceRange};
