//! Numeric element bound for matrix entries.

use std::fmt::Debug;

use num_traits::{One, WrappingAdd, WrappingMul, WrappingSub, Zero};

/// Scalar type a [`Matrix`](crate::Matrix) can hold.
///
/// Every multiplier goes through the `ring_*` methods rather than the
/// operators. Integers use wrapping arithmetic, so Strassen's intermediate
/// sums and differences may leave the type's range and still produce the
/// exact product whenever that product fits. This also makes unsigned
/// types safe with Strassen. Floats use plain IEEE arithmetic.
pub trait Element: Copy + Send + Sync + PartialEq + Debug + Zero + One + 'static {
    /// `self + rhs` in the element ring.
    fn ring_add(self, rhs: Self) -> Self;

    /// `self - rhs` in the element ring.
    fn ring_sub(self, rhs: Self) -> Self;

    /// `self * rhs` in the element ring.
    fn ring_mul(self, rhs: Self) -> Self;
}

macro_rules! wrapping_element {
    ($($t:ty)*) => {$(
        impl Element for $t {
            #[inline]
            fn ring_add(self, rhs: Self) -> Self {
                WrappingAdd::wrapping_add(&self, &rhs)
            }

            #[inline]
            fn ring_sub(self, rhs: Self) -> Self {
                WrappingSub::wrapping_sub(&self, &rhs)
            }

            #[inline]
            fn ring_mul(self, rhs: Self) -> Self {
                WrappingMul::wrapping_mul(&self, &rhs)
            }
        }
    )*};
}

macro_rules! float_element {
    ($($t:ty)*) => {$(
        impl Element for $t {
            #[inline]
            fn ring_add(self, rhs: Self) -> Self {
                self + rhs
            }

            #[inline]
            fn ring_sub(self, rhs: Self) -> Self {
                self - rhs
            }

            #[inline]
            fn ring_mul(self, rhs: Self) -> Self {
                self * rhs
            }
        }
    )*};
}

wrapping_element!(i8 i16 i32 i64 i128 isize u8 u16 u32 u64 u128 usize);
float_element!(f32 f64);
