//! Element-wise arithmetic.
//!
//! Integer add, sub, mul and neg wrap on overflow; div and rem truncate toward
//! zero and trap on a zero divisor. Float lanes follow IEEE-754.

use num::One;

use crate::simd::element::Element;
use crate::simd::emulation::{map, map_masked, update, update_masked, zip_masked};
use crate::simd::traits::{SimdMask, SimdVec};

binary_family! {
    Element;
    /// Lane-wise `a + b`.
    add, add_scalar, add_masked, add_scalar_masked,
    add_assign, add_scalar_assign, add_masked_assign, add_scalar_masked_assign
    => |x, y| x.lane_add(y)
}

binary_family! {
    Element;
    /// Lane-wise `a - b`.
    sub, sub_scalar, sub_masked, sub_scalar_masked,
    sub_assign, sub_scalar_assign, sub_masked_assign, sub_scalar_masked_assign
    => |x, y| x.lane_sub(y)
}

binary_family! {
    Element;
    /// Lane-wise `b - a` (subtract-from); the assigning forms store into `a`.
    subfrom, subfrom_scalar, subfrom_masked, subfrom_scalar_masked,
    subfrom_assign, subfrom_scalar_assign, subfrom_masked_assign, subfrom_scalar_masked_assign
    => |x, y| y.lane_sub(x)
}

binary_family! {
    Element;
    /// Lane-wise `a * b`.
    mul, mul_scalar, mul_masked, mul_scalar_masked,
    mul_assign, mul_scalar_assign, mul_masked_assign, mul_scalar_masked_assign
    => |x, y| x.lane_mul(y)
}

binary_family! {
    Element;
    /// Lane-wise `a / b`.
    ///
    /// # Panics
    ///
    /// Integer lanes trap on a zero divisor.
    div, div_scalar, div_masked, div_scalar_masked,
    div_assign, div_scalar_assign, div_masked_assign, div_scalar_masked_assign
    => |x, y| x.lane_div(y)
}

binary_family! {
    Element;
    /// Lane-wise `a % b`.
    ///
    /// # Panics
    ///
    /// Integer lanes trap on a zero divisor.
    rem, rem_scalar, rem_masked, rem_scalar_masked,
    rem_assign, rem_scalar_assign, rem_masked_assign, rem_scalar_masked_assign
    => |x, y| x.lane_rem(y)
}

binary_family! {
    Element;
    /// Lane-wise maximum; when either lane is NaN the second operand wins.
    max, max_scalar, max_masked, max_scalar_masked,
    max_assign, max_scalar_assign, max_masked_assign, max_scalar_masked_assign
    => |x, y| if x > y { x } else { y }
}

binary_family! {
    Element;
    /// Lane-wise minimum; when either lane is NaN the second operand wins.
    min, min_scalar, min_masked, min_scalar_masked,
    min_assign, min_scalar_assign, min_masked_assign, min_scalar_masked_assign
    => |x, y| if x < y { x } else { y }
}

unary_family! {
    Element;
    /// Lane-wise negation.
    neg, neg_masked, neg_assign, neg_masked_assign
    => |x| x.lane_neg()
}

// ================================================================================================
// RECIPROCAL
// ================================================================================================

/// Lane-wise `1 / a`.
#[inline(always)]
pub fn rcp<V>(a: &V) -> V
where
    V: SimdVec,
{
    map(a, |x| V::Scalar::one().lane_div(x))
}

/// Lane-wise `b / a`.
#[inline(always)]
pub fn rcp_scalar<V>(a: &V, b: V::Scalar) -> V
where
    V: SimdVec,
{
    map(a, |x| b.lane_div(x))
}

/// Masked form of [`rcp`].
#[inline(always)]
pub fn rcp_masked<V>(mask: &V::Mask, a: &V) -> V
where
    V: SimdVec,
{
    map_masked(mask, a, |x| V::Scalar::one().lane_div(x))
}

/// Masked form of [`rcp_scalar`].
#[inline(always)]
pub fn rcp_scalar_masked<V>(mask: &V::Mask, a: &V, b: V::Scalar) -> V
where
    V: SimdVec,
{
    map_masked(mask, a, |x| b.lane_div(x))
}

/// In-place form of [`rcp`].
#[inline(always)]
pub fn rcp_assign<V>(a: &mut V) -> &mut V
where
    V: SimdVec,
{
    update(a, |x| V::Scalar::one().lane_div(x))
}

/// In-place form of [`rcp_scalar`].
#[inline(always)]
pub fn rcp_scalar_assign<V>(a: &mut V, b: V::Scalar) -> &mut V
where
    V: SimdVec,
{
    update(a, |x| b.lane_div(x))
}

/// In-place form of [`rcp_masked`].
#[inline(always)]
pub fn rcp_masked_assign<'a, V>(mask: &V::Mask, a: &'a mut V) -> &'a mut V
where
    V: SimdVec,
{
    update_masked(mask, a, |x| V::Scalar::one().lane_div(x))
}

/// In-place form of [`rcp_scalar_masked`].
#[inline(always)]
pub fn rcp_scalar_masked_assign<'a, V>(mask: &V::Mask, a: &'a mut V, b: V::Scalar) -> &'a mut V
where
    V: SimdVec,
{
    update_masked(mask, a, |x| b.lane_div(x))
}

// ================================================================================================
// INCREMENT / DECREMENT
// ================================================================================================

/// Postfix increment: adds one to every lane and returns the old value.
#[inline(always)]
pub fn postinc<V: SimdVec>(a: &mut V) -> V {
    let old = a.clone();
    update(a, |x| x.lane_add(V::Scalar::one()));
    old
}

/// Prefix increment: adds one to every lane and returns the updated vector.
#[inline(always)]
pub fn preinc<V: SimdVec>(a: &mut V) -> &mut V {
    update(a, |x| x.lane_add(V::Scalar::one()))
}

/// Postfix decrement: subtracts one from every lane and returns the old value.
#[inline(always)]
pub fn postdec<V: SimdVec>(a: &mut V) -> V {
    let old = a.clone();
    update(a, |x| x.lane_sub(V::Scalar::one()));
    old
}

/// Prefix decrement: subtracts one from every lane and returns the updated vector.
#[inline(always)]
pub fn predec<V: SimdVec>(a: &mut V) -> &mut V {
    update(a, |x| x.lane_sub(V::Scalar::one()))
}

/// Masked form of [`postinc`].
#[inline(always)]
pub fn postinc_masked<V: SimdVec>(mask: &V::Mask, a: &mut V) -> V {
    let old = a.clone();
    update_masked(mask, a, |x| x.lane_add(V::Scalar::one()));
    old
}

/// Masked form of [`preinc`].
#[inline(always)]
pub fn preinc_masked<'a, V: SimdVec>(mask: &V::Mask, a: &'a mut V) -> &'a mut V {
    update_masked(mask, a, |x| x.lane_add(V::Scalar::one()))
}

/// Masked form of [`postdec`].
#[inline(always)]
pub fn postdec_masked<V: SimdVec>(mask: &V::Mask, a: &mut V) -> V {
    let old = a.clone();
    update_masked(mask, a, |x| x.lane_sub(V::Scalar::one()));
    old
}

/// Masked form of [`predec`].
#[inline(always)]
pub fn predec_masked<'a, V: SimdVec>(mask: &V::Mask, a: &'a mut V) -> &'a mut V {
    update_masked(mask, a, |x| x.lane_sub(V::Scalar::one()))
}

// ================================================================================================
// BLEND / FUSED MULTIPLY
// ================================================================================================

/// Selects `b[i]` where `mask[i]` is set and `a[i]` elsewhere.
#[inline(always)]
pub fn blend<V: SimdVec>(mask: &V::Mask, a: &V, b: &V) -> V {
    zip_masked(mask, a, b, |_, y| y)
}

/// Selects `b` where `mask[i]` is set and `a[i]` elsewhere.
#[inline(always)]
pub fn blend_scalar<V: SimdVec>(mask: &V::Mask, a: &V, b: V::Scalar) -> V {
    map_masked(mask, a, |_| b)
}

#[inline(always)]
fn ternary<V, F>(a: &V, b: &V, c: &V, mut f: F) -> V
where
    V: SimdVec,
    F: FnMut(V::Scalar, V::Scalar, V::Scalar) -> V::Scalar,
{
    let mut result = a.clone();
    for i in 0..V::LANES {
        result.insert(i, f(a.extract(i), b.extract(i), c.extract(i)));
    }
    result
}

#[inline(always)]
fn ternary_masked<V, F>(mask: &V::Mask, a: &V, b: &V, c: &V, mut f: F) -> V
where
    V: SimdVec,
    F: FnMut(V::Scalar, V::Scalar, V::Scalar) -> V::Scalar,
{
    let mut result = a.clone();
    for i in 0..V::LANES {
        if mask.extract(i) {
            result.insert(i, f(a.extract(i), b.extract(i), c.extract(i)));
        }
    }
    result
}

/// Lane-wise `a * b + c`, rounded after each step.
#[inline(always)]
pub fn fmuladd<V: SimdVec>(a: &V, b: &V, c: &V) -> V {
    ternary(a, b, c, |x, y, z| x.lane_mul(y).lane_add(z))
}

/// Lane-wise `a * b - c`.
#[inline(always)]
pub fn fmulsub<V: SimdVec>(a: &V, b: &V, c: &V) -> V {
    ternary(a, b, c, |x, y, z| x.lane_mul(y).lane_sub(z))
}

/// Lane-wise `(a + b) * c`.
#[inline(always)]
pub fn faddmul<V: SimdVec>(a: &V, b: &V, c: &V) -> V {
    ternary(a, b, c, |x, y, z| x.lane_add(y).lane_mul(z))
}

/// Lane-wise `(a - b) * c`.
#[inline(always)]
pub fn fsubmul<V: SimdVec>(a: &V, b: &V, c: &V) -> V {
    ternary(a, b, c, |x, y, z| x.lane_sub(y).lane_mul(z))
}

/// Masked form of [`fmuladd`]; inactive lanes keep `a`.
#[inline(always)]
pub fn fmuladd_masked<V: SimdVec>(mask: &V::Mask, a: &V, b: &V, c: &V) -> V {
    ternary_masked(mask, a, b, c, |x, y, z| x.lane_mul(y).lane_add(z))
}

/// Masked form of [`fmulsub`]; inactive lanes keep `a`.
#[inline(always)]
pub fn fmulsub_masked<V: SimdVec>(mask: &V::Mask, a: &V, b: &V, c: &V) -> V {
    ternary_masked(mask, a, b, c, |x, y, z| x.lane_mul(y).lane_sub(z))
}

/// Masked form of [`faddmul`]; inactive lanes keep `a`.
#[inline(always)]
pub fn faddmul_masked<V: SimdVec>(mask: &V::Mask, a: &V, b: &V, c: &V) -> V {
    ternary_masked(mask, a, b, c, |x, y, z| x.lane_add(y).lane_mul(z))
}

/// Masked form of [`fsubmul`]; inactive lanes keep `a`.
#[inline(always)]
pub fn fsubmul_masked<V: SimdVec>(mask: &V::Mask, a: &V, b: &V, c: &V) -> V {
    ternary_masked(mask, a, b, c, |x, y, z| x.lane_sub(y).lane_mul(z))
}
