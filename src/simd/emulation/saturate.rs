//! Saturating add and subtract.
//!
//! The overflow tests are rearranged so the bound itself never overflows:
//! `a + b` saturates when `a > MAX - b` (b positive) or `a < MIN - b`
//! (b negative), and `a - b` when `a < MIN + b` or `a > MAX + b`.

use crate::simd::element::Element;
use crate::simd::traits::SimdVec;

#[inline(always)]
fn add_sat<T: Element>(a: T, b: T) -> T {
    if b > T::zero() && a > T::LANE_MAX.lane_sub(b) {
        T::LANE_MAX
    } else if b < T::zero() && a < T::LANE_MIN.lane_sub(b) {
        T::LANE_MIN
    } else {
        a.lane_add(b)
    }
}

#[inline(always)]
fn sub_sat<T: Element>(a: T, b: T) -> T {
    if b > T::zero() && a < T::LANE_MIN.lane_add(b) {
        T::LANE_MIN
    } else if b < T::zero() && a > T::LANE_MAX.lane_add(b) {
        T::LANE_MAX
    } else {
        a.lane_sub(b)
    }
}

binary_family! {
    Element;
    /// Lane-wise `a + b` clamped to the lane type's range.
    add_saturated, add_saturated_scalar, add_saturated_masked, add_saturated_scalar_masked,
    add_saturated_assign, add_saturated_scalar_assign, add_saturated_masked_assign,
    add_saturated_scalar_masked_assign
    => |x, y| add_sat(x, y)
}

binary_family! {
    Element;
    /// Lane-wise `a - b` clamped to the lane type's range.
    sub_saturated, sub_saturated_scalar, sub_saturated_masked, sub_saturated_scalar_masked,
    sub_saturated_assign, sub_saturated_scalar_assign, sub_saturated_masked_assign,
    sub_saturated_scalar_masked_assign
    => |x, y| sub_sat(x, y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simd::fallback::{Mask, Vector};

    #[test]
    fn signed_bytes_clamp_both_ways() {
        let a = Vector::from([127i8, -128, 5, 100]);
        let b = Vector::from([1i8, -1, 10, 100]);
        assert_eq!(add_saturated(&a, &b).to_array(), [127, -128, 15, 127]);

        let c = Vector::from([-128i8, 127, 5, -100]);
        let d = Vector::from([1i8, -1, 10, 100]);
        assert_eq!(sub_saturated(&c, &d).to_array(), [-128, 127, -5, -128]);
    }

    #[test]
    fn unsigned_bytes_clamp() {
        let a = Vector::from([255u8, 250, 3, 0]);
        assert_eq!(add_saturated_scalar(&a, 10).to_array(), [255, 255, 13, 10]);
        assert_eq!(sub_saturated_scalar(&a, 10).to_array(), [245, 240, 0, 0]);
    }

    #[test]
    fn matches_std_saturating_ops() {
        for a in i16::MIN..=i16::MAX {
            if a % 97 != 0 {
                continue;
            }
            for b in [i16::MIN, -300, -1, 0, 1, 300, i16::MAX] {
                let va = Vector::from([a; 4]);
                assert_eq!(add_saturated_scalar(&va, b).extract(0), a.saturating_add(b));
                assert_eq!(sub_saturated_scalar(&va, b).extract(0), a.saturating_sub(b));
            }
        }
    }

    #[test]
    fn masked_assign_keeps_inactive_lanes() {
        let mut a = Vector::from([120i8, 120, 120, 120]);
        let mask = Mask::from([true, false, true, false]);
        add_saturated_scalar_masked_assign(&mask, &mut a, 20);
        assert_eq!(a.to_array(), [127, 120, 127, 120]);
    }
}
