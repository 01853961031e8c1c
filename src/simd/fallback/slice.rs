//! Slice operations on top of the emulation engine.
//!
//! Slices are cut into [`SLICE_LANES`]-wide [`Vector`]s. The last partial
//! chunk is loaded through a mask into a padded vector, computed like any
//! other and stored back through the same mask, so every element of the
//! input goes through the same kernel.
//!
//! # Available Operations
//!
//! - [`SimdMath`] for `[f32]` and `[f64]`: single-threaded kernels.
//! - [`ParallelMath`]: the same kernels spread over rayon's thread pool with
//!   [`par_chunks_mut`](rayon::slice::ParallelSliceMut::par_chunks_mut);
//!   inputs up to [`PARALLEL_SIMD_THRESHOLD`] elements stay sequential.
//! - [`SimdAdd`] for numeric slices: scalar, vectorized and parallel
//!   element-wise addition.
//!
//! # Usage Examples
//!
//! ```rust
//! use lanewise::{SimdAdd, SimdMath};
//!
//! let angles: Vec<f32> = (0..1000).map(|i| i as f32 * 0.01).collect();
//! let cosines = angles.as_slice().cos();
//! assert!((cosines[0] - 1.0).abs() < 1e-6);
//!
//! let a = vec![1i32; 100];
//! let b = vec![2i32; 100];
//! assert_eq!(a.as_slice().simd_add(b.as_slice()), vec![3; 100]);
//! ```

use rayon::prelude::*;

use crate::simd::element::{Element, FloatElement};
use crate::simd::emulation::{arithmetic, math, memory, transcendental};
use crate::simd::fallback::{Mask, Vector};
use crate::simd::traits::{ParallelMath, SimdAdd, SimdMath, SimdVec};
use crate::{PARALLEL_CHUNK_SIZE, PARALLEL_SIMD_THRESHOLD, SLICE_LANES};

type Lanes<T> = Vector<T, SLICE_LANES>;

// ================================================================================================
// CHUNK DRIVERS
// ================================================================================================

/// Applies `f` to `src` one vector at a time, writing into `dst`.
#[inline(always)]
fn unary_into<T, F>(src: &[T], dst: &mut [T], f: &F)
where
    T: Element,
    F: Fn(&Lanes<T>) -> Lanes<T>,
{
    debug_assert_eq!(src.len(), dst.len());

    let mut src_chunks = src.chunks_exact(SLICE_LANES);
    let mut dst_chunks = dst.chunks_exact_mut(SLICE_LANES);
    let mut v = Lanes::<T>::default();

    for (s, d) in (&mut src_chunks).zip(&mut dst_chunks) {
        v.load(s);
        f(&v).store(d);
    }

    let tail = src_chunks.remainder();
    if !tail.is_empty() {
        let mask = Mask::first(tail.len());
        let mut v = Lanes::<T>::splat(T::one());
        memory::load_masked(&mask, &mut v, tail);
        memory::store_masked(&mask, &f(&v), dst_chunks.into_remainder());
    }
}

/// Applies `f` lane-wise to `a` and `b`, writing into `dst`.
#[inline(always)]
fn binary_into<T, F>(a: &[T], b: &[T], dst: &mut [T], f: &F)
where
    T: Element,
    F: Fn(&Lanes<T>, &Lanes<T>) -> Lanes<T>,
{
    debug_assert_eq!(a.len(), b.len());
    debug_assert_eq!(a.len(), dst.len());

    let mut a_chunks = a.chunks_exact(SLICE_LANES);
    let mut b_chunks = b.chunks_exact(SLICE_LANES);
    let mut dst_chunks = dst.chunks_exact_mut(SLICE_LANES);
    let mut va = Lanes::<T>::default();
    let mut vb = Lanes::<T>::default();

    for ((sa, sb), d) in (&mut a_chunks).zip(&mut b_chunks).zip(&mut dst_chunks) {
        va.load(sa);
        vb.load(sb);
        f(&va, &vb).store(d);
    }

    let (tail_a, tail_b) = (a_chunks.remainder(), b_chunks.remainder());
    if !tail_a.is_empty() {
        let mask = Mask::first(tail_a.len());
        let mut va = Lanes::<T>::splat(T::one());
        let mut vb = Lanes::<T>::splat(T::one());
        memory::load_masked(&mask, &mut va, tail_a);
        memory::load_masked(&mask, &mut vb, tail_b);
        memory::store_masked(&mask, &f(&va, &vb), dst_chunks.into_remainder());
    }
}

#[inline(always)]
fn unary<T, F>(a: &[T], f: F) -> Vec<T>
where
    T: Element,
    F: Fn(&Lanes<T>) -> Lanes<T>,
{
    let mut out = vec![T::zero(); a.len()];
    unary_into(a, &mut out, &f);
    out
}

/// Chunk length for rayon, kept a multiple of the vector width.
#[inline(always)]
fn parallel_chunk_size() -> usize {
    ((PARALLEL_CHUNK_SIZE / SLICE_LANES) * SLICE_LANES).max(SLICE_LANES)
}

#[inline(always)]
fn par_unary<T, F>(a: &[T], f: F) -> Vec<T>
where
    T: Element,
    F: Fn(&Lanes<T>) -> Lanes<T> + Sync,
{
    if a.len() <= PARALLEL_SIMD_THRESHOLD {
        log::trace!("{} elements at or below the parallel threshold, running sequentially", a.len());
        return unary(a, f);
    }

    let chunk_size = parallel_chunk_size();
    log::trace!("splitting {} elements into chunks of {chunk_size}", a.len());

    let mut out = vec![T::zero(); a.len()];
    out.par_chunks_mut(chunk_size)
        .enumerate()
        .for_each(|(chunk_idx, dst)| {
            let start = chunk_idx * chunk_size;
            unary_into(&a[start..start + dst.len()], dst, &f);
        });
    out
}

// ================================================================================================
// MATH
// ================================================================================================

/// Element-wise math on float slices, returning a new `Vec`.
///
/// Transcendental functions use the polynomial kernels, so results match the
/// vector forms bit for bit rather than the host `libm`.
///
/// ```rust
/// use lanewise::SimdMath;
///
/// let data = vec![1.0f64, 4.0, 9.0];
/// assert_eq!(data.as_slice().sqrt(), vec![1.0, 2.0, 3.0]);
/// ```
impl<T: FloatElement> SimdMath for [T] {
    type Output = Vec<T>;

    fn abs(&self) -> Self::Output {
        unary(self, math::abs)
    }

    fn sqrt(&self) -> Self::Output {
        unary(self, math::sqrt)
    }

    fn rsqrt(&self) -> Self::Output {
        unary(self, math::rsqrt)
    }

    fn floor(&self) -> Self::Output {
        unary(self, math::floor)
    }

    fn ceil(&self) -> Self::Output {
        unary(self, math::ceil)
    }

    fn round(&self) -> Self::Output {
        unary(self, math::round)
    }

    fn sin(&self) -> Self::Output {
        unary(self, transcendental::sin)
    }

    fn cos(&self) -> Self::Output {
        unary(self, transcendental::cos)
    }

    fn tan(&self) -> Self::Output {
        unary(self, transcendental::tan)
    }

    fn exp(&self) -> Self::Output {
        unary(self, transcendental::exp)
    }

    fn ln(&self) -> Self::Output {
        unary(self, transcendental::log)
    }

    /// # Panics
    ///
    /// Panics if the slices have different lengths.
    fn pow(&self, exponent: &Self) -> Self::Output {
        assert_eq!(self.len(), exponent.len(), "Vectors must be the same length");

        let mut out = vec![T::zero(); self.len()];
        binary_into(self, exponent, &mut out, &math::pow);
        out
    }
}

impl<T: FloatElement> ParallelMath for [T] {
    type Output = Vec<T>;

    fn par_abs(&self) -> Self::Output {
        par_unary(self, math::abs)
    }

    fn par_sqrt(&self) -> Self::Output {
        par_unary(self, math::sqrt)
    }

    fn par_sin(&self) -> Self::Output {
        par_unary(self, transcendental::sin)
    }

    fn par_cos(&self) -> Self::Output {
        par_unary(self, transcendental::cos)
    }

    fn par_exp(&self) -> Self::Output {
        par_unary(self, transcendental::exp)
    }

    fn par_ln(&self) -> Self::Output {
        par_unary(self, transcendental::log)
    }
}

// ================================================================================================
// ADDITION
// ================================================================================================

#[inline(always)]
fn check_operands<T>(a: &[T], b: &[T]) {
    assert!(
        !a.is_empty() & !b.is_empty(),
        "Size can't be empty (size zero)"
    );
    assert_eq!(a.len(), b.len(), "Vectors must be the same length");
}

/// Element-wise addition of two numeric slices.
///
/// All three methods produce the same values (integer lanes wrap); they
/// differ only in how the work is scheduled.
///
/// # Panics
///
/// Panics if either slice is empty or the lengths differ.
impl<'b, T: Element> SimdAdd<&'b [T]> for &[T] {
    type Output = Vec<T>;

    fn simd_add(self, rhs: &'b [T]) -> Self::Output {
        check_operands(self, rhs);

        let mut out = vec![T::zero(); self.len()];
        binary_into(self, rhs, &mut out, &arithmetic::add);
        out
    }

    fn par_simd_add(self, rhs: &'b [T]) -> Self::Output {
        check_operands(self, rhs);

        if self.len() <= PARALLEL_SIMD_THRESHOLD {
            log::trace!("{} elements at or below the parallel threshold, running sequentially", self.len());
            return self.simd_add(rhs);
        }

        let chunk_size = parallel_chunk_size();
        log::trace!("splitting {} elements into chunks of {chunk_size}", self.len());

        let mut out = vec![T::zero(); self.len()];
        out.par_chunks_mut(chunk_size)
            .enumerate()
            .for_each(|(chunk_idx, dst)| {
                let start = chunk_idx * chunk_size;
                let end = start + dst.len();
                binary_into(&self[start..end], &rhs[start..end], dst, &arithmetic::add);
            });
        out
    }

    fn scalar_add(self, rhs: &'b [T]) -> Self::Output {
        check_operands(self, rhs);

        self.iter().zip(rhs).map(|(&x, &y)| x.lane_add(y)).collect()
    }
}

impl<'b, T: Element> SimdAdd<&'b [T]> for Vec<T> {
    type Output = Vec<T>;

    fn simd_add(self, rhs: &'b [T]) -> Self::Output {
        self.as_slice().simd_add(rhs)
    }

    fn par_simd_add(self, rhs: &'b [T]) -> Self::Output {
        self.as_slice().par_simd_add(rhs)
    }

    fn scalar_add(self, rhs: &'b [T]) -> Self::Output {
        self.as_slice().scalar_add(rhs)
    }
}
