//! Pack/unpack between a vector and its halves, swizzle and sort.

use crate::simd::element::Element;
use crate::simd::traits::{Packable, SimdVec};

// ================================================================================================
// PACK / UNPACK
// ================================================================================================

#[inline(always)]
fn half_lanes<V: Packable>() -> usize {
    debug_assert_eq!(<V::Half as SimdVec>::LANES * 2, V::LANES);
    <V::Half as SimdVec>::LANES
}

/// Sets the low half of `dst` from `lo` and the high half from `hi`.
#[inline(always)]
pub fn pack<'a, V: Packable>(dst: &'a mut V, lo: &V::Half, hi: &V::Half) -> &'a mut V {
    pack_low(dst, lo);
    pack_high(dst, hi)
}

/// Sets lanes `[0, N/2)` of `dst`; the high half is untouched.
#[inline(always)]
pub fn pack_low<'a, V: Packable>(dst: &'a mut V, lo: &V::Half) -> &'a mut V {
    for i in 0..half_lanes::<V>() {
        dst.insert(i, lo.extract(i));
    }
    dst
}

/// Sets lanes `[N/2, N)` of `dst`; the low half is untouched.
#[inline(always)]
pub fn pack_high<'a, V: Packable>(dst: &'a mut V, hi: &V::Half) -> &'a mut V {
    let half = half_lanes::<V>();
    for i in 0..half {
        dst.insert(half + i, hi.extract(i));
    }
    dst
}

/// Splits `src` into its low and high halves.
#[inline(always)]
pub fn unpack<V: Packable>(src: &V, lo: &mut V::Half, hi: &mut V::Half) {
    unpack_low(src, lo);
    unpack_high(src, hi);
}

/// Copies lanes `[0, N/2)` of `src` into `dst`.
#[inline(always)]
pub fn unpack_low<'a, V: Packable>(src: &V, dst: &'a mut V::Half) -> &'a mut V::Half {
    for i in 0..half_lanes::<V>() {
        dst.insert(i, src.extract(i));
    }
    dst
}

/// Copies lanes `[N/2, N)` of `src` into `dst`.
#[inline(always)]
pub fn unpack_high<'a, V: Packable>(src: &V, dst: &'a mut V::Half) -> &'a mut V::Half {
    let half = half_lanes::<V>();
    for i in 0..half {
        dst.insert(i, src.extract(half + i));
    }
    dst
}

// ================================================================================================
// SWIZZLE
// ================================================================================================

/// `result[i] = src[descriptor[i]]`.
///
/// Indices may repeat. Each must be below `V::LANES`.
#[inline(always)]
pub fn swizzle<V: SimdVec>(descriptor: &[usize], src: &V) -> V {
    debug_assert!(descriptor.len() >= V::LANES);
    let mut result = src.clone();
    for (i, &lane) in descriptor.iter().take(V::LANES).enumerate() {
        debug_assert!(lane < V::LANES, "swizzle index {lane} out of range for {} lanes", V::LANES);
        result.insert(i, src.extract(lane));
    }
    result
}

/// In-place form of [`swizzle`], reading from a snapshot of `a`.
#[inline(always)]
pub fn swizzle_assign<'a, V: SimdVec>(descriptor: &[usize], a: &'a mut V) -> &'a mut V {
    let snapshot = a.clone();
    *a = swizzle(descriptor, &snapshot);
    a
}

// ================================================================================================
// SORT
// ================================================================================================

#[inline(always)]
fn sorted<V: SimdVec>(a: &V, descending: bool) -> V {
    let mut lanes: Vec<V::Scalar> = (0..V::LANES).map(|i| a.extract(i)).collect();
    lanes.sort_by(|x, y| {
        let order = x.lane_cmp(y);
        if descending {
            order.reverse()
        } else {
            order
        }
    });

    let mut result = a.clone();
    result.load(&lanes);
    result
}

/// Lanes sorted from smallest to largest.
///
/// Floats use IEEE-754 total order, so positive NaN lanes end up last.
#[inline(always)]
pub fn sort_ascending<V: SimdVec>(a: &V) -> V {
    sorted(a, false)
}

/// Lanes sorted from largest to smallest.
#[inline(always)]
pub fn sort_descending<V: SimdVec>(a: &V) -> V {
    sorted(a, true)
}

/// In-place form of [`sort_ascending`].
#[inline(always)]
pub fn sort_ascending_assign<V: SimdVec>(a: &mut V) -> &mut V {
    *a = sorted(a, false);
    a
}

/// In-place form of [`sort_descending`].
#[inline(always)]
pub fn sort_descending_assign<V: SimdVec>(a: &mut V) -> &mut V {
    *a = sorted(a, true);
    a
}
