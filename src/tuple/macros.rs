//! Packing heterogeneous values into a `FixedTuple<Value>`

use super::fixed_tuple::FixedTuple;
use crate::value::Value;

/// Packs heterogeneous values into a [`FixedTuple<Value>`](crate::FixedTuple)
///
/// Each argument is converted with `Value::from`.
///
/// ```rust
/// use dictuple::tuple;
///
/// let mixed = tuple!(1, "hello", 3.14, true);
/// assert_eq!(mixed.to_string(), "(1, 'hello', 3.14, True)");
///
/// let single = tuple!(42);
/// assert_eq!(single.to_string(), "(42,)");
/// assert!(tuple!().is_empty());
/// ```
#[macro_export]
macro_rules! tuple {
    () => {
        $crate::FixedTuple::<$crate::Value>::empty()
    };
    ($($item:expr),+ $(,)?) => {
        $crate::FixedTuple::<$crate::Value>::pack([$($crate::Value::from($item)),+])
    };
}

macro_rules! impl_from_native_tuple {
    ($($name:ident),+) => {
        impl<$($name),+> From<($($name,)+)> for FixedTuple<Value>
        where
            $($name: Into<Value>,)+
        {
            #[allow(non_snake_case)]
            fn from(($($name,)+): ($($name,)+)) -> Self {
                FixedTuple::pack([$($name.into()),+])
            }
        }
    };
}

impl_from_native_tuple!(A);
impl_from_native_tuple!(A, B);
impl_from_native_tuple!(A, B, C);
impl_from_native_tuple!(A, B, C, D);
impl_from_native_tuple!(A, B, C, D, E);
impl_from_native_tuple!(A, B, C, D, E, F);
impl_from_native_tuple!(A, B, C, D, E, F, G);
impl_from_native_tuple!(A, B, C, D, E, F, G, H);
