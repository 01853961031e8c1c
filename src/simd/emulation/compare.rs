//! Comparisons.
//!
//! Comparisons are never masked themselves: they are the primitives masks are
//! built from. Floats compare with IEEE semantics, so a NaN lane is unequal to
//! everything and fails every ordering test.

use crate::simd::element::Element;
use crate::simd::emulation::{predicate, relation};
use crate::simd::traits::SimdVec;

macro_rules! comparison {
    ($(#[$meta:meta])* $plain:ident, $scalar:ident => |$x:ident, $y:ident| $body:expr) => {
        $(#[$meta])*
        #[inline(always)]
        pub fn $plain<V: SimdVec>(a: &V, b: &V) -> V::Mask {
            relation(a, b, |$x, $y| $body)
        }

        #[doc = concat!("Broadcast-scalar form of [`", stringify!($plain), "`].")]
        #[inline(always)]
        pub fn $scalar<V: SimdVec>(a: &V, b: V::Scalar) -> V::Mask {
            predicate(a, |$x| {
                let $y = b;
                $body
            })
        }
    };
}

comparison! {
    /// Lane-wise `a == b`.
    is_equal, is_equal_scalar => |x, y| x == y
}

comparison! {
    /// Lane-wise `a != b`.
    is_not_equal, is_not_equal_scalar => |x, y| x != y
}

comparison! {
    /// Lane-wise `a > b`.
    is_greater, is_greater_scalar => |x, y| x > y
}

comparison! {
    /// Lane-wise `a >= b`.
    is_greater_equal, is_greater_equal_scalar => |x, y| x >= y
}

comparison! {
    /// Lane-wise `a < b`.
    is_lesser, is_lesser_scalar => |x, y| x < y
}

comparison! {
    /// Lane-wise `a <= b`.
    is_lesser_equal, is_lesser_equal_scalar => |x, y| x <= y
}

/// Tolerance comparison: lane `i` is set iff `b[i] - margin[i] < a[i] < b[i] + margin[i]`.
///
/// Both bounds are strict, so a difference equal to the margin is rejected.
#[inline(always)]
pub fn is_equal_in_range<V: SimdVec>(a: &V, b: &V, margin: &V) -> V::Mask {
    let mut i = 0;
    relation(a, b, |x, y| {
        let m = margin.extract(i);
        i += 1;
        x.lane_within(y, m)
    })
}

/// [`is_equal_in_range`] with one margin for every lane.
#[inline(always)]
pub fn is_equal_in_range_scalar<V: SimdVec>(a: &V, b: &V, margin: V::Scalar) -> V::Mask {
    relation(a, b, |x, y| x.lane_within(y, margin))
}

/// True iff every lane of `a` equals the same lane of `b`.
#[inline(always)]
pub fn is_exact<V: SimdVec>(a: &V, b: &V) -> bool {
    (0..V::LANES).all(|i| a.extract(i) == b.extract(i))
}

/// True iff no two lanes hold equal values.
///
/// Pairwise scan, stopping at the first duplicate.
#[inline(always)]
pub fn unique<V: SimdVec>(a: &V) -> bool {
    for i in 0..V::LANES {
        let x = a.extract(i);
        for j in i + 1..V::LANES {
            if x == a.extract(j) {
                return false;
            }
        }
    }
    true
}
