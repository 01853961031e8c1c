//! Scalar emulation of the SIMD operation catalog.
//!
//! Every function here is generic over the lane contracts in
//! [`crate::simd::traits`] and computes each lane independently with a plain
//! loop, so the results are the reference semantics every native backend has
//! to reproduce bit for bit.
//!
//! # Operation families
//!
//! Each element-wise operation `op` comes as a family:
//!
//! | Form | Result |
//! |------|--------|
//! | `op(a, b)` | `r[i] = op(a[i], b[i])` |
//! | `op_scalar(a, s)` | `r[i] = op(a[i], s)` |
//! | `op_masked(m, a, b)` | `r[i] = if m[i] { op(a[i], b[i]) } else { a[i] }` |
//! | `op_scalar_masked(m, a, s)` | as above with `s` broadcast |
//! | `op_assign(a, b)` and friends | same lanes, written back into `a` |
//!
//! The assigning forms return `&mut V` so calls can be chained. Inactive
//! lanes of a masked form always keep the first operand's value.
//!
//! # Modules
//!
//! - [`arithmetic`]: add, sub, mul, div, rem, rcp, neg, inc/dec, min/max,
//!   blend, fused multiply family
//! - [`bitwise`]: and, or, xor, not, and-not, shifts and rotates
//! - [`logical`]: boolean algebra on masks
//! - [`compare`]: mask-producing comparisons, `is_exact`, `unique`
//! - [`memory`]: load/store, gather/scatter
//! - [`shuffle`]: pack/unpack, swizzle, sort
//! - [`reduce`]: horizontal folds
//! - [`math`]: abs, sqrt, rounding, copysign, classification
//! - [`transcendental`]: sin, cos, sincos, tan, exp, log
//! - [`saturate`]: clamping add/sub
//! - [`convert`]: lane casts and bit reinterpretation

use crate::simd::traits::{SimdMask, SimdVec};

/// Generates the eight-function family of a binary element-wise operation.
macro_rules! binary_family {
    (
        $bound:path;
        $(#[$meta:meta])*
        $plain:ident, $scalar:ident, $masked:ident, $scalar_masked:ident,
        $assign:ident, $scalar_assign:ident, $masked_assign:ident, $scalar_masked_assign:ident
        => |$x:ident, $y:ident| $body:expr
    ) => {
        $(#[$meta])*
        #[inline(always)]
        pub fn $plain<V>(a: &V, b: &V) -> V
        where
            V: SimdVec,
            V::Scalar: $bound,
        {
            $crate::simd::emulation::zip(a, b, |$x, $y| $body)
        }

        #[doc = concat!("Broadcast-scalar form of [`", stringify!($plain), "`].")]
        #[inline(always)]
        pub fn $scalar<V>(a: &V, b: V::Scalar) -> V
        where
            V: SimdVec,
            V::Scalar: $bound,
        {
            $crate::simd::emulation::map(a, |$x| {
                let $y = b;
                $body
            })
        }

        #[doc = concat!("Masked form of [`", stringify!($plain), "`]; inactive lanes keep `a`.")]
        #[inline(always)]
        pub fn $masked<V>(mask: &V::Mask, a: &V, b: &V) -> V
        where
            V: SimdVec,
            V::Scalar: $bound,
        {
            $crate::simd::emulation::zip_masked(mask, a, b, |$x, $y| $body)
        }

        #[doc = concat!("Masked form of [`", stringify!($scalar), "`]; inactive lanes keep `a`.")]
        #[inline(always)]
        pub fn $scalar_masked<V>(mask: &V::Mask, a: &V, b: V::Scalar) -> V
        where
            V: SimdVec,
            V::Scalar: $bound,
        {
            $crate::simd::emulation::map_masked(mask, a, |$x| {
                let $y = b;
                $body
            })
        }

        #[doc = concat!("In-place form of [`", stringify!($plain), "`].")]
        #[inline(always)]
        pub fn $assign<'a, V>(a: &'a mut V, b: &V) -> &'a mut V
        where
            V: SimdVec,
            V::Scalar: $bound,
        {
            $crate::simd::emulation::update_zip(a, b, |$x, $y| $body)
        }

        #[doc = concat!("In-place form of [`", stringify!($scalar), "`].")]
        #[inline(always)]
        pub fn $scalar_assign<V>(a: &mut V, b: V::Scalar) -> &mut V
        where
            V: SimdVec,
            V::Scalar: $bound,
        {
            $crate::simd::emulation::update(a, |$x| {
                let $y = b;
                $body
            })
        }

        #[doc = concat!("In-place form of [`", stringify!($masked), "`].")]
        #[inline(always)]
        pub fn $masked_assign<'a, V>(mask: &V::Mask, a: &'a mut V, b: &V) -> &'a mut V
        where
            V: SimdVec,
            V::Scalar: $bound,
        {
            $crate::simd::emulation::update_zip_masked(mask, a, b, |$x, $y| $body)
        }

        #[doc = concat!("In-place form of [`", stringify!($scalar_masked), "`].")]
        #[inline(always)]
        pub fn $scalar_masked_assign<'a, V>(mask: &V::Mask, a: &'a mut V, b: V::Scalar) -> &'a mut V
        where
            V: SimdVec,
            V::Scalar: $bound,
        {
            $crate::simd::emulation::update_masked(mask, a, |$x| {
                let $y = b;
                $body
            })
        }
    };
}

/// Generates the four-function family of a unary element-wise operation.
macro_rules! unary_family {
    (
        $bound:path;
        $(#[$meta:meta])*
        $plain:ident, $masked:ident, $assign:ident, $masked_assign:ident
        => |$x:ident| $body:expr
    ) => {
        $(#[$meta])*
        #[inline(always)]
        pub fn $plain<V>(a: &V) -> V
        where
            V: SimdVec,
            V::Scalar: $bound,
        {
            $crate::simd::emulation::map(a, |$x| $body)
        }

        #[doc = concat!("Masked form of [`", stringify!($plain), "`]; inactive lanes keep their input.")]
        #[inline(always)]
        pub fn $masked<V>(mask: &V::Mask, a: &V) -> V
        where
            V: SimdVec,
            V::Scalar: $bound,
        {
            $crate::simd::emulation::map_masked(mask, a, |$x| $body)
        }

        #[doc = concat!("In-place form of [`", stringify!($plain), "`].")]
        #[inline(always)]
        pub fn $assign<V>(a: &mut V) -> &mut V
        where
            V: SimdVec,
            V::Scalar: $bound,
        {
            $crate::simd::emulation::update(a, |$x| $body)
        }

        #[doc = concat!("In-place form of [`", stringify!($masked), "`].")]
        #[inline(always)]
        pub fn $masked_assign<'a, V>(mask: &V::Mask, a: &'a mut V) -> &'a mut V
        where
            V: SimdVec,
            V::Scalar: $bound,
        {
            $crate::simd::emulation::update_masked(mask, a, |$x| $body)
        }
    };
}

pub mod arithmetic;
pub mod bitwise;
pub mod compare;
pub mod convert;
pub mod logical;
pub mod math;
pub mod memory;
pub mod reduce;
pub mod saturate;
pub mod shuffle;
pub mod transcendental;

// ================================================================================================
// LANE LOOPS
// ================================================================================================

#[inline(always)]
pub(crate) fn map<V, F>(a: &V, mut f: F) -> V
where
    V: SimdVec,
    F: FnMut(V::Scalar) -> V::Scalar,
{
    let mut result = a.clone();
    for i in 0..V::LANES {
        result.insert(i, f(a.extract(i)));
    }
    result
}

#[inline(always)]
pub(crate) fn zip<V, F>(a: &V, b: &V, mut f: F) -> V
where
    V: SimdVec,
    F: FnMut(V::Scalar, V::Scalar) -> V::Scalar,
{
    let mut result = a.clone();
    for i in 0..V::LANES {
        result.insert(i, f(a.extract(i), b.extract(i)));
    }
    result
}

#[inline(always)]
pub(crate) fn map_masked<V, F>(mask: &V::Mask, a: &V, mut f: F) -> V
where
    V: SimdVec,
    F: FnMut(V::Scalar) -> V::Scalar,
{
    let mut result = a.clone();
    for i in 0..V::LANES {
        if mask.extract(i) {
            result.insert(i, f(a.extract(i)));
        }
    }
    result
}

#[inline(always)]
pub(crate) fn zip_masked<V, F>(mask: &V::Mask, a: &V, b: &V, mut f: F) -> V
where
    V: SimdVec,
    F: FnMut(V::Scalar, V::Scalar) -> V::Scalar,
{
    let mut result = a.clone();
    for i in 0..V::LANES {
        if mask.extract(i) {
            result.insert(i, f(a.extract(i), b.extract(i)));
        }
    }
    result
}

#[inline(always)]
pub(crate) fn update<V, F>(a: &mut V, mut f: F) -> &mut V
where
    V: SimdVec,
    F: FnMut(V::Scalar) -> V::Scalar,
{
    for i in 0..V::LANES {
        let value = f(a.extract(i));
        a.insert(i, value);
    }
    a
}

#[inline(always)]
pub(crate) fn update_masked<'a, V, F>(mask: &V::Mask, a: &'a mut V, mut f: F) -> &'a mut V
where
    V: SimdVec,
    F: FnMut(V::Scalar) -> V::Scalar,
{
    for i in 0..V::LANES {
        if mask.extract(i) {
            let value = f(a.extract(i));
            a.insert(i, value);
        }
    }
    a
}

#[inline(always)]
pub(crate) fn update_zip<'a, V, F>(a: &'a mut V, b: &V, mut f: F) -> &'a mut V
where
    V: SimdVec,
    F: FnMut(V::Scalar, V::Scalar) -> V::Scalar,
{
    for i in 0..V::LANES {
        let value = f(a.extract(i), b.extract(i));
        a.insert(i, value);
    }
    a
}

#[inline(always)]
pub(crate) fn update_zip_masked<'a, V, F>(mask: &V::Mask, a: &'a mut V, b: &V, mut f: F) -> &'a mut V
where
    V: SimdVec,
    F: FnMut(V::Scalar, V::Scalar) -> V::Scalar,
{
    for i in 0..V::LANES {
        if mask.extract(i) {
            let value = f(a.extract(i), b.extract(i));
            a.insert(i, value);
        }
    }
    a
}

/// Builds a mask from a per-lane predicate.
#[inline(always)]
pub(crate) fn predicate<V, F>(a: &V, mut f: F) -> V::Mask
where
    V: SimdVec,
    F: FnMut(V::Scalar) -> bool,
{
    debug_assert_eq!(V::LANES, <V::Mask as SimdMask>::LANES);

    let mut mask = V::Mask::splat(false);
    for i in 0..V::LANES {
        mask.insert(i, f(a.extract(i)));
    }
    mask
}

/// Builds a mask from a per-lane relation between two vectors.
#[inline(always)]
pub(crate) fn relation<V, F>(a: &V, b: &V, mut f: F) -> V::Mask
where
    V: SimdVec,
    F: FnMut(V::Scalar, V::Scalar) -> bool,
{
    debug_assert_eq!(V::LANES, <V::Mask as SimdMask>::LANES);

    let mut mask = V::Mask::splat(false);
    for i in 0..V::LANES {
        mask.insert(i, f(a.extract(i), b.extract(i)));
    }
    mask
}
