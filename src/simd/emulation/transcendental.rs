//! Polynomial transcendental functions.
//!
//! Each lane goes through the per-precision kernels in [`crate::simd::math`]
//! (Cody–Waite reduction, Horner-evaluated minimax polynomials), so results
//! do not depend on the host `libm`. Masked forms return the input value in
//! inactive lanes.

use crate::simd::element::FloatElement;
use crate::simd::traits::{SimdMask, SimdVec};

unary_family! {
    FloatElement;
    /// Lane-wise sine.
    sin, sin_masked, sin_assign, sin_masked_assign
    => |x| x.poly_sin()
}

unary_family! {
    FloatElement;
    /// Lane-wise cosine.
    cos, cos_masked, cos_assign, cos_masked_assign
    => |x| x.poly_cos()
}

unary_family! {
    FloatElement;
    /// Lane-wise tangent, `sin / cos` from one shared reduction.
    tan, tan_masked, tan_assign, tan_masked_assign
    => |x| {
        let (s, c) = x.poly_sincos();
        s / c
    }
}

unary_family! {
    FloatElement;
    /// Lane-wise `e^a`. Saturates to `+inf` above `ln(MAX)` and to `0` below
    /// `ln(MIN_POSITIVE)`.
    exp, exp_masked, exp_assign, exp_masked_assign
    => |x| x.poly_exp()
}

unary_family! {
    FloatElement;
    /// Lane-wise natural logarithm. Non-positive lanes give NaN.
    log, log_masked, log_assign, log_masked_assign
    => |x| x.poly_log()
}

/// Sine and cosine of every lane, sharing one range reduction per lane.
#[inline(always)]
pub fn sincos<V>(a: &V) -> (V, V)
where
    V: SimdVec,
    V::Scalar: FloatElement,
{
    let mut s = a.clone();
    let mut c = a.clone();
    for i in 0..V::LANES {
        let (sin, cos) = a.extract(i).poly_sincos();
        s.insert(i, sin);
        c.insert(i, cos);
    }
    (s, c)
}

/// Masked form of [`sincos`]; inactive lanes of both results hold the input.
#[inline(always)]
pub fn sincos_masked<V>(mask: &V::Mask, a: &V) -> (V, V)
where
    V: SimdVec,
    V::Scalar: FloatElement,
{
    let (s, c) = sincos(a);
    let mut s_out = a.clone();
    let mut c_out = a.clone();
    for i in 0..V::LANES {
        if mask.extract(i) {
            s_out.insert(i, s.extract(i));
            c_out.insert(i, c.extract(i));
        }
    }
    (s_out, c_out)
}

/// `ln` spelled the way the slice layer and `std` spell it.
#[inline(always)]
pub fn ln<V>(a: &V) -> V
where
    V: SimdVec,
    V::Scalar: FloatElement,
{
    log(a)
}

/// Masked form of [`ln`].
#[inline(always)]
pub fn ln_masked<V>(mask: &V::Mask, a: &V) -> V
where
    V: SimdVec,
    V::Scalar: FloatElement,
{
    log_masked(mask, a)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simd::fallback::{Mask, Vector};
    use std::f64::consts::PI;

    #[test]
    fn sin_cos_match_std_over_ten_pi() {
        for k in -1000..=1000 {
            let x = k as f64 * 10.0 * PI / 1000.0;
            let v = Vector::from([x, -x, x * 0.5, x * 0.25]);
            let s = sin(&v);
            let c = cos(&v);
            for i in 0..4 {
                let lane = v.extract(i);
                assert!((s.extract(i) - lane.sin()).abs() < 1e-12, "sin({lane})");
                assert!((c.extract(i) - lane.cos()).abs() < 1e-12, "cos({lane})");
            }
        }
    }

    #[test]
    fn masked_transcendentals_pass_input_through() {
        let a = Vector::from([0.0f32, 1.0, 2.0, 3.0]);
        let mask = Mask::from([true, false, true, false]);

        let e = exp_masked(&mask, &a);
        assert_eq!(e.extract(0), 1.0);
        assert_eq!(e.extract(1), 1.0);
        assert_eq!(e.extract(3), 3.0);

        let (s, c) = sincos_masked(&mask, &a);
        assert_eq!(s.extract(1), 1.0);
        assert_eq!(c.extract(3), 3.0);
        assert_eq!(c.extract(0), 1.0);
    }

    #[test]
    fn tan_is_sin_over_cos() {
        let a = Vector::from([0.0f64, 0.5, -1.0, 1.2]);
        let t = tan(&a);
        for i in 0..4 {
            let x = a.extract(i);
            assert!((t.extract(i) - x.tan()).abs() < 1e-12);
        }
    }

    #[test]
    fn log_domain_edges() {
        let a = Vector::from([0.0f64, -1.0, f64::INFINITY, 1.0]);
        let l = log(&a);
        assert!(l.extract(0).is_nan());
        assert!(l.extract(1).is_nan());
        assert!(l.extract(1).is_sign_positive());
        assert_eq!(l.extract(2), f64::INFINITY);
        assert_eq!(l.extract(3), 0.0);
        assert_eq!(ln(&a).extract(3), 0.0);
    }
}
