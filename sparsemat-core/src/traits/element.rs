//! Matrix element type constraints
//!
//! Only signed integers can be stored. Arithmetic goes through the checked
//! operations so that overflow surfaces as an error instead of wrapping.

use core::fmt::{Debug, Display};
use core::hash::Hash;
use core::str::FromStr;

/// Trait for types that can be stored as matrix elements
///
/// Implemented for the primitive signed integers. The additive identity is
/// exposed as [`MatrixElement::ZERO`]; it is never stored in a matrix.
pub trait MatrixElement:
    Copy + Eq + Hash + Debug + Display + FromStr + Send + Sync + 'static
{
    /// Additive identity
    const ZERO: Self;

    /// Whether this value is the additive identity
    fn is_zero(self) -> bool {
        self == Self::ZERO
    }

    /// Checked addition, `None` on overflow
    fn checked_add(self, rhs: Self) -> Option<Self>;

    /// Checked subtraction, `None` on overflow
    fn checked_sub(self, rhs: Self) -> Option<Self>;

    /// Checked multiplication, `None` on overflow
    fn checked_mul(self, rhs: Self) -> Option<Self>;

    /// Lossless conversion into the `i128` accumulator used by multiply
    fn widen(self) -> i128;

    /// Range-checked conversion back from the accumulator
    fn narrow(wide: i128) -> Option<Self>;
}

macro_rules! impl_matrix_element {
    ($($t:ty),* $(,)?) => {
        $(
            impl MatrixElement for $t {
                const ZERO: Self = 0;

                #[inline]
                fn checked_add(self, rhs: Self) -> Option<Self> {
                    <$t>::checked_add(self, rhs)
                }

                #[inline]
                fn checked_sub(self, rhs: Self) -> Option<Self> {
                    <$t>::checked_sub(self, rhs)
                }

                #[inline]
                fn checked_mul(self, rhs: Self) -> Option<Self> {
                    <$t>::checked_mul(self, rhs)
                }

                #[inline]
                fn widen(self) -> i128 {
                    self as i128
                }

                #[inline]
                fn narrow(wide: i128) -> Option<Self> {
                    <$t>::try_from(wide).ok()
                }
            }
        )*
    };
}

impl_matrix_element!(i8, i16, i32, i64, i128, isize);
