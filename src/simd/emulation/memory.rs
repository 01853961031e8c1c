//! Load, store, gather and scatter.
//!
//! Memory is addressed through slices, so an out-of-bounds index panics at
//! the slice access instead of reading foreign memory. Alignment of the
//! `*_aligned` forms is a precondition checked in debug builds only.
//!
//! Scatter with repeated indices writes lanes in order `0..N`, so the highest
//! lane targeting a location wins.

use num::NumCast;

use crate::simd::element::IntElement;
use crate::simd::traits::{SimdMask, SimdVec};

// ================================================================================================
// LOAD / STORE
// ================================================================================================

/// Copies `V::LANES` contiguous scalars from `src` into `dst`.
#[inline(always)]
pub fn load<'a, V: SimdVec>(dst: &'a mut V, src: &[V::Scalar]) -> &'a mut V {
    debug_assert!(src.len() >= V::LANES, "load needs {} elements", V::LANES);
    dst.load(src)
}

/// [`load`] from a buffer aligned to [`SimdVec::ALIGNMENT`].
#[inline(always)]
pub fn load_aligned<'a, V: SimdVec>(dst: &'a mut V, src: &[V::Scalar]) -> &'a mut V {
    debug_assert!(
        V::is_aligned(src.as_ptr()),
        "aligned load from a pointer not aligned to {} bytes",
        V::ALIGNMENT
    );
    load(dst, src)
}

/// Copies only the active lanes from `src`; inactive lanes of `dst` are untouched.
#[inline(always)]
pub fn load_masked<'a, V: SimdVec>(mask: &V::Mask, dst: &'a mut V, src: &[V::Scalar]) -> &'a mut V {
    for i in 0..V::LANES {
        if mask.extract(i) {
            dst.insert(i, src[i]);
        }
    }
    dst
}

/// Masked form of [`load_aligned`].
#[inline(always)]
pub fn load_aligned_masked<'a, V: SimdVec>(
    mask: &V::Mask,
    dst: &'a mut V,
    src: &[V::Scalar],
) -> &'a mut V {
    debug_assert!(
        V::is_aligned(src.as_ptr()),
        "aligned load from a pointer not aligned to {} bytes",
        V::ALIGNMENT
    );
    load_masked(mask, dst, src)
}

/// Copies every lane of `src` into the first `V::LANES` scalars of `dst`.
#[inline(always)]
pub fn store<V: SimdVec>(src: &V, dst: &mut [V::Scalar]) {
    debug_assert!(dst.len() >= V::LANES, "store needs {} elements", V::LANES);
    src.store(dst);
}

/// [`store`] to a buffer aligned to [`SimdVec::ALIGNMENT`].
#[inline(always)]
pub fn store_aligned<V: SimdVec>(src: &V, dst: &mut [V::Scalar]) {
    debug_assert!(
        V::is_aligned(dst.as_ptr()),
        "aligned store to a pointer not aligned to {} bytes",
        V::ALIGNMENT
    );
    store(src, dst);
}

/// Writes only the active lanes; the rest of `dst` is untouched.
#[inline(always)]
pub fn store_masked<V: SimdVec>(mask: &V::Mask, src: &V, dst: &mut [V::Scalar]) {
    for i in 0..V::LANES {
        if mask.extract(i) {
            dst[i] = src.extract(i);
        }
    }
}

/// Masked form of [`store_aligned`].
#[inline(always)]
pub fn store_aligned_masked<V: SimdVec>(mask: &V::Mask, src: &V, dst: &mut [V::Scalar]) {
    debug_assert!(
        V::is_aligned(dst.as_ptr()),
        "aligned store to a pointer not aligned to {} bytes",
        V::ALIGNMENT
    );
    store_masked(mask, src, dst);
}

// ================================================================================================
// GATHER
// ================================================================================================

/// Converts an index lane to a slice offset.
///
/// # Panics
///
/// Panics if the lane is negative or does not fit in `usize`.
#[inline(always)]
fn lane_index<I: IntElement>(value: I) -> usize {
    match <usize as NumCast>::from(value) {
        Some(index) => index,
        None => panic!("index lane {value:?} is not a valid offset"),
    }
}

#[inline(always)]
fn gather_with<'a, V, F>(mask: Option<&V::Mask>, dst: &'a mut V, base: &[V::Scalar], mut offset: F) -> &'a mut V
where
    V: SimdVec,
    F: FnMut(usize) -> usize,
{
    for i in 0..V::LANES {
        if mask.map_or(true, |m| m.extract(i)) {
            dst.insert(i, base[offset(i)]);
        }
    }
    dst
}

/// `dst[i] = base[i * stride]`.
#[inline(always)]
pub fn gather_stride<'a, V: SimdVec>(dst: &'a mut V, base: &[V::Scalar], stride: usize) -> &'a mut V {
    gather_with(None, dst, base, |i| i * stride)
}

/// Masked form of [`gather_stride`]; inactive lanes are neither read nor written.
#[inline(always)]
pub fn gather_stride_masked<'a, V: SimdVec>(
    mask: &V::Mask,
    dst: &'a mut V,
    base: &[V::Scalar],
    stride: usize,
) -> &'a mut V {
    gather_with(Some(mask), dst, base, |i| i * stride)
}

/// `dst[i] = base[indices[i]]`.
#[inline(always)]
pub fn gather_indices<'a, V: SimdVec>(dst: &'a mut V, base: &[V::Scalar], indices: &[usize]) -> &'a mut V {
    debug_assert!(indices.len() >= V::LANES);
    gather_with(None, dst, base, |i| indices[i])
}

/// Masked form of [`gather_indices`].
#[inline(always)]
pub fn gather_indices_masked<'a, V: SimdVec>(
    mask: &V::Mask,
    dst: &'a mut V,
    base: &[V::Scalar],
    indices: &[usize],
) -> &'a mut V {
    gather_with(Some(mask), dst, base, |i| indices[i])
}

/// `dst[i] = base[indices[i]]` with the offsets held in an integer vector.
#[inline(always)]
pub fn gather_vector<'a, V, I>(dst: &'a mut V, base: &[V::Scalar], indices: &I) -> &'a mut V
where
    V: SimdVec,
    I: SimdVec,
    I::Scalar: IntElement,
{
    debug_assert_eq!(V::LANES, I::LANES);
    gather_with(None, dst, base, |i| lane_index(indices.extract(i)))
}

/// Masked form of [`gather_vector`].
#[inline(always)]
pub fn gather_vector_masked<'a, V, I>(
    mask: &V::Mask,
    dst: &'a mut V,
    base: &[V::Scalar],
    indices: &I,
) -> &'a mut V
where
    V: SimdVec,
    I: SimdVec,
    I::Scalar: IntElement,
{
    debug_assert_eq!(V::LANES, I::LANES);
    gather_with(Some(mask), dst, base, |i| lane_index(indices.extract(i)))
}

// ================================================================================================
// SCATTER
// ================================================================================================

#[inline(always)]
fn scatter_with<V, F>(mask: Option<&V::Mask>, src: &V, base: &mut [V::Scalar], mut offset: F)
where
    V: SimdVec,
    F: FnMut(usize) -> usize,
{
    for i in 0..V::LANES {
        if mask.map_or(true, |m| m.extract(i)) {
            base[offset(i)] = src.extract(i);
        }
    }
}

/// `base[i * stride] = src[i]`.
#[inline(always)]
pub fn scatter_stride<V: SimdVec>(src: &V, base: &mut [V::Scalar], stride: usize) {
    scatter_with(None, src, base, |i| i * stride);
}

/// Masked form of [`scatter_stride`]; inactive lanes leave memory untouched.
#[inline(always)]
pub fn scatter_stride_masked<V: SimdVec>(mask: &V::Mask, src: &V, base: &mut [V::Scalar], stride: usize) {
    scatter_with(Some(mask), src, base, |i| i * stride);
}

/// `base[indices[i]] = src[i]`.
#[inline(always)]
pub fn scatter_indices<V: SimdVec>(src: &V, base: &mut [V::Scalar], indices: &[usize]) {
    debug_assert!(indices.len() >= V::LANES);
    scatter_with(None, src, base, |i| indices[i]);
}

/// Masked form of [`scatter_indices`].
#[inline(always)]
pub fn scatter_indices_masked<V: SimdVec>(
    mask: &V::Mask,
    src: &V,
    base: &mut [V::Scalar],
    indices: &[usize],
) {
    scatter_with(Some(mask), src, base, |i| indices[i]);
}

/// `base[indices[i]] = src[i]` with the offsets held in an integer vector.
#[inline(always)]
pub fn scatter_vector<V, I>(src: &V, base: &mut [V::Scalar], indices: &I)
where
    V: SimdVec,
    I: SimdVec,
    I::Scalar: IntElement,
{
    debug_assert_eq!(V::LANES, I::LANES);
    scatter_with(None, src, base, |i| lane_index(indices.extract(i)));
}

/// Masked form of [`scatter_vector`].
#[inline(always)]
pub fn scatter_vector_masked<V, I>(mask: &V::Mask, src: &V, base: &mut [V::Scalar], indices: &I)
where
    V: SimdVec,
    I: SimdVec,
    I::Scalar: IntElement,
{
    debug_assert_eq!(V::LANES, I::LANES);
    scatter_with(Some(mask), src, base, |i| lane_index(indices.extract(i)));
}
