//! Boolean algebra on masks.
//!
//! These mirror the bitwise library for [`SimdMask`] lanes. Masked forms keep
//! lane `a[i]` where the gating mask is clear.

use crate::simd::traits::SimdMask;

#[inline(always)]
fn combine<M, F>(mask: Option<&M>, a: &M, b: &M, mut f: F) -> M
where
    M: SimdMask,
    F: FnMut(bool, bool) -> bool,
{
    let mut result = a.clone();
    for i in 0..M::LANES {
        if mask.map_or(true, |m| m.extract(i)) {
            result.insert(i, f(a.extract(i), b.extract(i)));
        }
    }
    result
}

macro_rules! mask_binary {
    (
        $(#[$meta:meta])*
        $plain:ident, $masked:ident, $assign:ident, $masked_assign:ident
        => |$x:ident, $y:ident| $body:expr
    ) => {
        $(#[$meta])*
        #[inline(always)]
        pub fn $plain<M: SimdMask>(a: &M, b: &M) -> M {
            combine(None, a, b, |$x, $y| $body)
        }

        #[doc = concat!("Masked form of [`", stringify!($plain), "`]; inactive lanes keep `a`.")]
        #[inline(always)]
        pub fn $masked<M: SimdMask>(mask: &M, a: &M, b: &M) -> M {
            combine(Some(mask), a, b, |$x, $y| $body)
        }

        #[doc = concat!("In-place form of [`", stringify!($plain), "`].")]
        #[inline(always)]
        pub fn $assign<'a, M: SimdMask>(a: &'a mut M, b: &M) -> &'a mut M {
            *a = combine(None, a, b, |$x, $y| $body);
            a
        }

        #[doc = concat!("In-place form of [`", stringify!($masked), "`].")]
        #[inline(always)]
        pub fn $masked_assign<'a, M: SimdMask>(mask: &M, a: &'a mut M, b: &M) -> &'a mut M {
            *a = combine(Some(mask), a, b, |$x, $y| $body);
            a
        }
    };
}

mask_binary! {
    /// Lane-wise logical AND.
    land, land_masked, land_assign, land_masked_assign => |x, y| x && y
}

mask_binary! {
    /// Lane-wise logical OR.
    lor, lor_masked, lor_assign, lor_masked_assign => |x, y| x || y
}

mask_binary! {
    /// Lane-wise logical XOR.
    lxor, lxor_masked, lxor_assign, lxor_masked_assign => |x, y| x != y
}

mask_binary! {
    /// Lane-wise `!a && b`.
    landnot, landnot_masked, landnot_assign, landnot_masked_assign => |x, y| !x && y
}

/// Lane-wise logical NOT.
#[inline(always)]
pub fn lnot<M: SimdMask>(a: &M) -> M {
    combine(None, a, a, |x, _| !x)
}

/// Masked form of [`lnot`]; inactive lanes keep their input.
#[inline(always)]
pub fn lnot_masked<M: SimdMask>(mask: &M, a: &M) -> M {
    combine(Some(mask), a, a, |x, _| !x)
}

/// In-place form of [`lnot`].
#[inline(always)]
pub fn lnot_assign<M: SimdMask>(a: &mut M) -> &mut M {
    *a = lnot(a);
    a
}

/// In-place form of [`lnot_masked`].
#[inline(always)]
pub fn lnot_masked_assign<'a, M: SimdMask>(mask: &M, a: &'a mut M) -> &'a mut M {
    *a = lnot_masked(mask, a);
    a
}
