//! Simple math and float classification.
//!
//! `abs`, `sign` and `copysign` branch on the lane's sign instead of touching
//! the sign bit, so they work unchanged for integer lanes.

use std::num::FpCategory;

use num::{Float, Zero};

use crate::simd::element::{Element, FloatElement};
use crate::simd::emulation::predicate;
use crate::simd::traits::{FloatVec, SimdVec};

#[inline(always)]
fn abs_lane<T: Element>(x: T) -> T {
    if x < T::zero() {
        x.lane_neg()
    } else {
        x
    }
}

/// Three-way sign: `1` for positive, `-1` for negative, the input otherwise.
#[inline(always)]
fn sign_lane<T: Element>(x: T) -> T {
    if x > T::zero() {
        T::one()
    } else if x < T::zero() {
        T::zero().lane_sub(T::one())
    } else {
        x
    }
}

unary_family! {
    Element;
    /// Lane-wise absolute value; `MIN` wraps to itself for signed integers.
    abs, abs_masked, abs_assign, abs_masked_assign
    => |x| abs_lane(x)
}

unary_family! {
    Element;
    /// Lane-wise three-way sign. Zero and NaN lanes are returned unchanged.
    sign, sign_masked, sign_assign, sign_masked_assign
    => |x| sign_lane(x)
}

binary_family! {
    Element;
    /// `|a| * sign(b)` per lane; a zero `b` yields zero.
    copysign, copysign_scalar, copysign_masked, copysign_scalar_masked,
    copysign_assign, copysign_scalar_assign, copysign_masked_assign, copysign_scalar_masked_assign
    => |x, y| abs_lane(x).lane_mul(sign_lane(y))
}

unary_family! {
    FloatElement;
    /// Lane-wise square root; negative lanes give NaN.
    sqrt, sqrt_masked, sqrt_assign, sqrt_masked_assign
    => |x| x.sqrt()
}

unary_family! {
    FloatElement;
    /// Lane-wise `1 / sqrt(a)`, computed exactly.
    rsqrt, rsqrt_masked, rsqrt_assign, rsqrt_masked_assign
    => |x| x.sqrt().recip()
}

unary_family! {
    FloatElement;
    /// Rounds half away from zero.
    round, round_masked, round_assign, round_masked_assign
    => |x| x.round()
}

unary_family! {
    FloatElement;
    floor, floor_masked, floor_assign, floor_masked_assign
    => |x| x.floor()
}

unary_family! {
    FloatElement;
    ceil, ceil_masked, ceil_assign, ceil_masked_assign
    => |x| x.ceil()
}

binary_family! {
    FloatElement;
    /// Lane-wise `a` raised to `b`.
    pow, pow_scalar, pow_masked, pow_scalar_masked,
    pow_assign, pow_scalar_assign, pow_masked_assign, pow_scalar_masked_assign
    => |x, y| x.powf(y)
}

/// Truncates toward zero into the paired integer vector.
///
/// Out-of-range lanes saturate, NaN becomes zero.
#[inline(always)]
pub fn trunc<V>(a: &V) -> V::IntVec
where
    V: FloatVec,
    V::Scalar: FloatElement,
{
    debug_assert_eq!(V::LANES, <V::IntVec as SimdVec>::LANES);
    let mut result = V::IntVec::splat(Zero::zero());
    for i in 0..V::LANES {
        result.insert(i, a.extract(i).trunc_to_int());
    }
    result
}

// ================================================================================================
// CLASSIFICATION
// ================================================================================================

macro_rules! classify {
    ($($(#[$meta:meta])* $name:ident => |$x:ident| $body:expr;)*) => {$(
        $(#[$meta])*
        #[inline(always)]
        pub fn $name<V>(a: &V) -> V::Mask
        where
            V: SimdVec,
            V::Scalar: FloatElement,
        {
            predicate(a, |$x| $body)
        }
    )*};
}

classify! {
    /// Set for lanes that are neither infinite nor NaN.
    is_finite => |x| x.is_finite();
    /// Set for `±inf` lanes.
    is_inf => |x| x.is_infinite();
    is_nan => |x| x.is_nan();
    /// Set for normal lanes (not zero, subnormal, infinite or NaN).
    is_normal => |x| x.is_normal();
    is_subnormal => |x| x.classify() == FpCategory::Subnormal;
    /// Set for `+0` and `-0`.
    is_zero => |x| x.is_zero();
    is_zero_or_subnormal => |x| matches!(x.classify(), FpCategory::Zero | FpCategory::Subnormal);
}
