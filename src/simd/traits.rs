//! Lane contracts and the consumer-facing traits.
//!
//! The emulation engine in [`crate::simd::emulation`] is written purely in
//! terms of [`SimdVec`] and [`SimdMask`]: a fixed lane count, indexed
//! read and write, and bulk load/store to a contiguous buffer. Any backend
//! that satisfies those contracts gets the whole operation catalog for free
//! and may override individual operations with native instructions.

use std::fmt::Debug;

use crate::simd::element::{Element, FloatElement};

/// Per-lane boolean selector paired with a vector of the same length.
pub trait SimdMask: Sized + Clone + Debug {
    /// Number of lanes.
    const LANES: usize;

    /// Number of lanes.
    #[inline(always)]
    fn length(&self) -> usize {
        Self::LANES
    }

    /// Broadcasts `value` to every lane.
    fn splat(value: bool) -> Self;

    /// Reads lane `index`.
    fn extract(&self, index: usize) -> bool;

    /// Writes lane `index`.
    fn insert(&mut self, index: usize, value: bool) -> &mut Self;
}

/// Fixed-length vector of scalar lanes.
pub trait SimdVec: Sized + Clone + Debug {
    /// Lane type.
    type Scalar: Element;
    /// Mask type with the same lane count.
    type Mask: SimdMask;

    /// Number of lanes.
    const LANES: usize;
    /// Alignment in bytes required by the aligned load/store forms.
    const ALIGNMENT: usize;

    /// Number of lanes.
    #[inline(always)]
    fn length(&self) -> usize {
        Self::LANES
    }

    /// Broadcasts `value` to every lane.
    fn splat(value: Self::Scalar) -> Self;

    /// Reads lane `index`.
    fn extract(&self, index: usize) -> Self::Scalar;

    /// Writes lane `index`.
    fn insert(&mut self, index: usize, value: Self::Scalar) -> &mut Self;

    /// Copies the first `LANES` scalars of `src` into the vector, lane order
    /// matching memory order.
    fn load(&mut self, src: &[Self::Scalar]) -> &mut Self;

    /// Copies the lanes into the first `LANES` scalars of `dst`.
    fn store(&self, dst: &mut [Self::Scalar]);

    /// Checks if a pointer meets [`SimdVec::ALIGNMENT`].
    #[inline(always)]
    fn is_aligned(ptr: *const Self::Scalar) -> bool {
        (ptr as usize) % Self::ALIGNMENT == 0
    }
}

/// Vectors with a canonical half-length counterpart.
///
/// Lanes `[0, N/2)` form the low half and `[N/2, N)` the high half.
pub trait Packable: SimdVec {
    /// Vector of `LANES / 2` lanes of the same scalar type.
    type Half: SimdVec<Scalar = Self::Scalar>;
}

/// Float vectors paired with same-width integer vectors.
pub trait FloatVec: SimdVec
where
    Self::Scalar: FloatElement,
{
    /// Signed integer counterpart, produced by `trunc`.
    type IntVec: SimdVec<Scalar = <Self::Scalar as FloatElement>::Int>;
    /// Unsigned counterpart holding raw IEEE-754 bit patterns.
    type BitsVec: SimdVec<Scalar = <Self::Scalar as FloatElement>::Bits>;
}

/// Element-wise mathematical functions.
///
/// Implemented for fallback vectors (returning a vector of the same type)
/// and for float slices (returning a freshly allocated `Vec`).
pub trait SimdMath {
    type Output;

    fn abs(&self) -> Self::Output;

    fn sqrt(&self) -> Self::Output;

    /// `1 / sqrt(x)`, computed exactly rather than approximated.
    fn rsqrt(&self) -> Self::Output;

    fn floor(&self) -> Self::Output;

    fn ceil(&self) -> Self::Output;

    fn round(&self) -> Self::Output;

    fn sin(&self) -> Self::Output;

    fn cos(&self) -> Self::Output;

    fn tan(&self) -> Self::Output;

    fn exp(&self) -> Self::Output;

    fn ln(&self) -> Self::Output;

    fn pow(&self, exponent: &Self) -> Self::Output;
}

/// Multi-threaded versions of the [`SimdMath`] kernels for large inputs.
pub trait ParallelMath {
    type Output;

    fn par_abs(&self) -> Self::Output;

    fn par_sqrt(&self) -> Self::Output;

    fn par_sin(&self) -> Self::Output;

    fn par_cos(&self) -> Self::Output;

    fn par_exp(&self) -> Self::Output;

    fn par_ln(&self) -> Self::Output;
}

pub trait SimdAdd<Rhs = Self> {
    type Output;

    fn simd_add(self, rhs: Rhs) -> Self::Output;
    fn par_simd_add(self, rhs: Rhs) -> Self::Output;
    fn scalar_add(self, rhs: Rhs) -> Self::Output;
}
