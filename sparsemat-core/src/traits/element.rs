//! Matrix element type constraints
//!
//! Only signed integers are supported. Elementwise steps are checked so
//! overflow surfaces as an error instead of wrapping. Products are formed in
//! a wider integer type and narrowed once, after accumulation.

use core::fmt::{Debug, Display};
use core::str::FromStr;

/// Trait for types that can be stored as matrix elements
///
/// Elements must be copyable, comparable, printable in the text format and
/// parseable from it.
pub trait MatrixElement: Copy + Eq + Debug + Display + FromStr + Sized {
    /// The additive identity; never stored in a sparse matrix
    fn zero() -> Self;

    fn is_zero(self) -> bool {
        self == Self::zero()
    }

    fn checked_add(self, rhs: Self) -> Option<Self>;

    fn checked_sub(self, rhs: Self) -> Option<Self>;

    fn checked_mul(self, rhs: Self) -> Option<Self>;

    fn checked_neg(self) -> Option<Self>;

    /// Accumulator type for sums of products
    type Wide: WideInteger;

    /// Exact product in the wide type; `None` only if it does not fit there
    fn widening_mul(self, rhs: Self) -> Option<Self::Wide>;

    /// Convert an accumulated value back, `None` if out of range
    fn narrow(wide: Self::Wide) -> Option<Self>;
}

/// Signed integer used to accumulate products
pub trait WideInteger: Copy + Eq + Debug {
    fn zero() -> Self;

    /// Wrapping addition plus whether it wrapped
    fn overflowing_add(self, rhs: Self) -> (Self, bool);

    fn is_negative(self) -> bool;
}

macro_rules! impl_wide_integer {
    ($($ty:ty),*) => {
        $(
            impl WideInteger for $ty {
                fn zero() -> Self {
                    0
                }

                fn overflowing_add(self, rhs: Self) -> (Self, bool) {
                    <$ty>::overflowing_add(self, rhs)
                }

                fn is_negative(self) -> bool {
                    self < 0
                }
            }
        )*
    };
}

impl_wide_integer!(i64, i128);

macro_rules! impl_matrix_element {
    ($($ty:ty => $wide:ty),*) => {
        $(
            impl MatrixElement for $ty {
                type Wide = $wide;

                fn zero() -> Self {
                    0
                }

                fn checked_add(self, rhs: Self) -> Option<Self> {
                    <$ty>::checked_add(self, rhs)
                }

                fn checked_sub(self, rhs: Self) -> Option<Self> {
                    <$ty>::checked_sub(self, rhs)
                }

                fn checked_mul(self, rhs: Self) -> Option<Self> {
                    <$ty>::checked_mul(self, rhs)
                }

                fn checked_neg(self) -> Option<Self> {
                    <$ty>::checked_neg(self)
                }

                fn widening_mul(self, rhs: Self) -> Option<$wide> {
                    <$wide>::checked_mul(self as $wide, rhs as $wide)
                }

                fn narrow(wide: $wide) -> Option<Self> {
                    <$ty>::try_from(wide).ok()
                }
            }
        )*
    };
}

// i128 has no wider type: its products must fit in i128 themselves
impl_matrix_element!(i32 => i64, i64 => i128, i128 => i128);
