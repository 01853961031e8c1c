//! Array-backed vector of `N` lanes.
//!
//! [`Vector`] is the reference backend for the lane contract: every operation
//! in [`crate::simd::emulation`] accepts it, and the std operators delegate to
//! the engine so `a + b` and `arithmetic::add(&a, &b)` are the same loop.

use std::ops::{
    Add, AddAssign, BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Div,
    DivAssign, Index, Mul, MulAssign, Neg, Not, Rem, RemAssign, Shl, ShlAssign, Shr, ShrAssign,
    Sub, SubAssign,
};

use crate::error::{alignment_error, length_error, Result};
use crate::simd::element::{Element, FloatElement, IntElement};
use crate::simd::emulation::{arithmetic, bitwise, convert, math, shuffle, transcendental};
use crate::simd::fallback::{Mask, SwizzleMask};
use crate::simd::traits::{FloatVec, Packable, SimdMath, SimdVec};

/// `N` lanes of `T`, stored contiguously in lane order.
#[derive(Copy, Clone, Debug, PartialEq)]
#[repr(C)]
pub struct Vector<T: Element, const N: usize> {
    lanes: [T; N],
}

impl<T: Element, const N: usize> Vector<T, N> {
    #[inline(always)]
    pub fn to_array(&self) -> [T; N] {
        self.lanes
    }

    #[inline(always)]
    pub fn as_slice(&self) -> &[T] {
        &self.lanes
    }

    /// Loads from a slice that must start on a [`SimdVec::ALIGNMENT`] boundary.
    ///
    /// # Errors
    ///
    /// [`SimdError::LengthMismatch`](crate::SimdError::LengthMismatch) if
    /// `src` is shorter than `N`, and
    /// [`SimdError::Misaligned`](crate::SimdError::Misaligned) if it is not
    /// aligned.
    pub fn try_load_aligned(src: &[T]) -> Result<Self> {
        if src.len() < N {
            return Err(length_error(N, src.len()));
        }
        if !Self::is_aligned(src.as_ptr()) {
            return Err(alignment_error(src.as_ptr(), Self::ALIGNMENT));
        }

        let mut vector = Self::default();
        vector.load(src);
        Ok(vector)
    }

    /// Stores into a slice that must start on a [`SimdVec::ALIGNMENT`] boundary.
    pub fn try_store_aligned(&self, dst: &mut [T]) -> Result<()> {
        if dst.len() < N {
            return Err(length_error(N, dst.len()));
        }
        if !Self::is_aligned(dst.as_ptr()) {
            return Err(alignment_error(dst.as_ptr(), Self::ALIGNMENT));
        }

        self.store(dst);
        Ok(())
    }

    /// Converts every lane to `U`, failing if any lane is not representable.
    pub fn cast<U: Element>(&self) -> Result<Vector<U, N>> {
        convert::cast(self)
    }

    /// Permutes lanes through a validated descriptor.
    #[inline(always)]
    pub fn swizzle(&self, descriptor: &SwizzleMask<N>) -> Self {
        shuffle::swizzle(descriptor.as_slice(), self)
    }
}

impl<T: Element, const N: usize> SimdVec for Vector<T, N> {
    type Scalar = T;
    type Mask = Mask<N>;

    const LANES: usize = N;
    const ALIGNMENT: usize = (std::mem::size_of::<T>() * N).next_power_of_two();

    #[inline(always)]
    fn splat(value: T) -> Self {
        Self { lanes: [value; N] }
    }

    #[inline(always)]
    fn extract(&self, index: usize) -> T {
        debug_assert!(index < N, "lane {index} out of range for {N} lanes");
        self.lanes[index]
    }

    #[inline(always)]
    fn insert(&mut self, index: usize, value: T) -> &mut Self {
        debug_assert!(index < N, "lane {index} out of range for {N} lanes");
        self.lanes[index] = value;
        self
    }

    #[inline(always)]
    fn load(&mut self, src: &[T]) -> &mut Self {
        self.lanes.copy_from_slice(&src[..N]);
        self
    }

    #[inline(always)]
    fn store(&self, dst: &mut [T]) {
        dst[..N].copy_from_slice(&self.lanes);
    }
}

macro_rules! impl_packable {
    ($($n:literal => $half:literal),* $(,)?) => {$(
        impl<T: Element> Packable for Vector<T, $n> {
            type Half = Vector<T, $half>;
        }
    )*};
}

impl_packable!(2 => 1, 4 => 2, 8 => 4, 16 => 8, 32 => 16, 64 => 32, 128 => 64);

impl<const N: usize> FloatVec for Vector<f32, N> {
    type IntVec = Vector<i32, N>;
    type BitsVec = Vector<u32, N>;
}

impl<const N: usize> FloatVec for Vector<f64, N> {
    type IntVec = Vector<i64, N>;
    type BitsVec = Vector<u64, N>;
}

// ================================================================================================
// CONVERSIONS
// ================================================================================================

impl<T: Element, const N: usize> Default for Vector<T, N> {
    fn default() -> Self {
        Self::splat(T::default())
    }
}

impl<T: Element, const N: usize> From<[T; N]> for Vector<T, N> {
    #[inline(always)]
    fn from(lanes: [T; N]) -> Self {
        Self { lanes }
    }
}

impl<T: Element, const N: usize> From<Vector<T, N>> for [T; N] {
    #[inline(always)]
    fn from(vector: Vector<T, N>) -> Self {
        vector.lanes
    }
}

/// Builds a vector from a slice of exactly `N` elements.
impl<T: Element, const N: usize> TryFrom<&[T]> for Vector<T, N> {
    type Error = crate::SimdError;

    fn try_from(src: &[T]) -> Result<Self> {
        if src.len() != N {
            return Err(length_error(N, src.len()));
        }
        let mut vector = Self::default();
        vector.load(src);
        Ok(vector)
    }
}

impl<T: Element, const N: usize> Index<usize> for Vector<T, N> {
    type Output = T;

    #[inline(always)]
    fn index(&self, index: usize) -> &T {
        &self.lanes[index]
    }
}

// ================================================================================================
// OPERATORS
// ================================================================================================

macro_rules! impl_binary_op {
    (
        $bound:path;
        $op:ident::$method:ident, $op_assign:ident::$method_assign:ident
        => $module:ident::{$plain:ident, $scalar:ident, $plain_assign:ident, $scalar_assign:ident}
    ) => {
        impl<T: $bound, const N: usize> $op for Vector<T, N> {
            type Output = Self;

            #[inline(always)]
            fn $method(self, rhs: Self) -> Self {
                $module::$plain(&self, &rhs)
            }
        }

        impl<T: $bound, const N: usize> $op<T> for Vector<T, N> {
            type Output = Self;

            #[inline(always)]
            fn $method(self, rhs: T) -> Self {
                $module::$scalar(&self, rhs)
            }
        }

        impl<T: $bound, const N: usize> $op_assign for Vector<T, N> {
            #[inline(always)]
            fn $method_assign(&mut self, rhs: Self) {
                $module::$plain_assign(self, &rhs);
            }
        }

        impl<T: $bound, const N: usize> $op_assign<T> for Vector<T, N> {
            #[inline(always)]
            fn $method_assign(&mut self, rhs: T) {
                $module::$scalar_assign(self, rhs);
            }
        }
    };
}

impl_binary_op!(Element; Add::add, AddAssign::add_assign
    => arithmetic::{add, add_scalar, add_assign, add_scalar_assign});
impl_binary_op!(Element; Sub::sub, SubAssign::sub_assign
    => arithmetic::{sub, sub_scalar, sub_assign, sub_scalar_assign});
impl_binary_op!(Element; Mul::mul, MulAssign::mul_assign
    => arithmetic::{mul, mul_scalar, mul_assign, mul_scalar_assign});
impl_binary_op!(Element; Div::div, DivAssign::div_assign
    => arithmetic::{div, div_scalar, div_assign, div_scalar_assign});
impl_binary_op!(Element; Rem::rem, RemAssign::rem_assign
    => arithmetic::{rem, rem_scalar, rem_assign, rem_scalar_assign});

impl_binary_op!(IntElement; BitAnd::bitand, BitAndAssign::bitand_assign
    => bitwise::{band, band_scalar, band_assign, band_scalar_assign});
impl_binary_op!(IntElement; BitOr::bitor, BitOrAssign::bitor_assign
    => bitwise::{bor, bor_scalar, bor_assign, bor_scalar_assign});
impl_binary_op!(IntElement; BitXor::bitxor, BitXorAssign::bitxor_assign
    => bitwise::{bxor, bxor_scalar, bxor_assign, bxor_scalar_assign});
impl_binary_op!(IntElement; Shl::shl, ShlAssign::shl_assign
    => bitwise::{shl, shl_scalar, shl_assign, shl_scalar_assign});
impl_binary_op!(IntElement; Shr::shr, ShrAssign::shr_assign
    => bitwise::{shr, shr_scalar, shr_assign, shr_scalar_assign});

impl<T: Element, const N: usize> Neg for Vector<T, N> {
    type Output = Self;

    #[inline(always)]
    fn neg(self) -> Self {
        arithmetic::neg(&self)
    }
}

impl<T: IntElement, const N: usize> Not for Vector<T, N> {
    type Output = Self;

    #[inline(always)]
    fn not(self) -> Self {
        bitwise::bnot(&self)
    }
}

// ================================================================================================
// MATH
// ================================================================================================

impl<T: FloatElement, const N: usize> SimdMath for Vector<T, N> {
    type Output = Self;

    #[inline(always)]
    fn abs(&self) -> Self {
        math::abs(self)
    }

    #[inline(always)]
    fn sqrt(&self) -> Self {
        math::sqrt(self)
    }

    #[inline(always)]
    fn rsqrt(&self) -> Self {
        math::rsqrt(self)
    }

    #[inline(always)]
    fn floor(&self) -> Self {
        math::floor(self)
    }

    #[inline(always)]
    fn ceil(&self) -> Self {
        math::ceil(self)
    }

    #[inline(always)]
    fn round(&self) -> Self {
        math::round(self)
    }

    #[inline(always)]
    fn sin(&self) -> Self {
        transcendental::sin(self)
    }

    #[inline(always)]
    fn cos(&self) -> Self {
        transcendental::cos(self)
    }

    #[inline(always)]
    fn tan(&self) -> Self {
        transcendental::tan(self)
    }

    #[inline(always)]
    fn exp(&self) -> Self {
        transcendental::exp(self)
    }

    #[inline(always)]
    fn ln(&self) -> Self {
        transcendental::log(self)
    }

    #[inline(always)]
    fn pow(&self, exponent: &Self) -> Self {
        math::pow(self, exponent)
    }
}
