//! Scalar lane types.
//!
//! Every vector lane holds one [`Element`]: a signed or unsigned integer of
//! 8/16/32/64 bits, or an IEEE-754 `f32`/`f64`. The trait carries the
//! *native* per-lane arithmetic the emulation engine must reproduce:
//! wraparound for integer add/sub/mul/neg, truncating division, and plain
//! IEEE arithmetic for floats.
//!
//! [`IntElement`] adds the bit-level operations (shift counts, rotates and
//! bitwise logic through [`num::PrimInt`]), and [`FloatElement`] adds the bit
//! casts and the polynomial kernels from [`crate::simd::math`].

use std::cmp::Ordering;
use std::fmt::Debug;

use num::{Float, Num, NumCast, PrimInt};

use crate::simd::math;

/// A scalar type that can occupy a vector lane.
pub trait Element:
    Copy + Default + PartialEq + PartialOrd + Debug + Send + Sync + 'static + Num + NumCast
{
    /// Width of the type in bits.
    const BITS: u32;
    /// Smallest representable value, used as the saturation floor.
    const LANE_MIN: Self;
    /// Largest representable value, used as the saturation ceiling.
    const LANE_MAX: Self;
    /// Identity element of a `max` fold (`-inf` for floats).
    const LOWEST: Self;
    /// Identity element of a `min` fold (`+inf` for floats).
    const HIGHEST: Self;

    /// Native addition (wraps on integer overflow).
    fn lane_add(self, rhs: Self) -> Self;
    /// Native subtraction (wraps on integer overflow).
    fn lane_sub(self, rhs: Self) -> Self;
    /// Native multiplication (wraps on integer overflow).
    fn lane_mul(self, rhs: Self) -> Self;
    /// Native division, truncating toward zero for integers.
    ///
    /// # Panics
    ///
    /// Integer division by zero traps, as does signed `MIN / -1`.
    fn lane_div(self, rhs: Self) -> Self;
    /// Native remainder with the sign of the dividend.
    ///
    /// # Panics
    ///
    /// Integer remainder by zero traps, as does signed `MIN % -1`.
    fn lane_rem(self, rhs: Self) -> Self;
    /// Native negation (wraps for `MIN` and for unsigned types).
    fn lane_neg(self) -> Self;

    /// Total order over lane values.
    ///
    /// Floats follow IEEE-754 `totalOrder`: `-NaN < -inf < ... < -0 < +0 <
    /// ... < +inf < +NaN`.
    fn lane_cmp(&self, other: &Self) -> Ordering;

    /// True iff `center - margin < self < center + margin` over the real
    /// numbers. The bounds are never formed in the lane type, so integer
    /// lanes near `MIN`/`MAX` compare correctly.
    fn lane_within(self, center: Self, margin: Self) -> bool;
}

/// Integer lanes.
pub trait IntElement: Element + PrimInt {
    /// Shifts left by `count` bits.
    ///
    /// Counts at or above the bit width are a precondition violation, caught
    /// by a debug assertion.
    fn lane_shl(self, count: u32) -> Self;

    /// Shifts right by `count` bits (arithmetic for signed types).
    fn lane_shr(self, count: u32) -> Self;

    /// Interprets the lane value as a shift or rotate amount.
    #[inline(always)]
    fn shift_count(self) -> u32 {
        <u32 as NumCast>::from(self).unwrap_or(u32::MAX)
    }
}

/// Floating-point lanes.
pub trait FloatElement: Element + Float {
    /// Unsigned integer with the same bit width.
    type Bits: IntElement;
    /// Signed integer with the same bit width, the result type of `trunc`.
    type Int: IntElement;

    /// Raw IEEE-754 bit pattern.
    fn to_lane_bits(self) -> Self::Bits;
    /// Builds a value from its raw IEEE-754 bit pattern.
    fn from_lane_bits(bits: Self::Bits) -> Self;
    /// Truncates toward zero into the paired integer type (saturating).
    fn trunc_to_int(self) -> Self::Int;

    /// Polynomial sine.
    fn poly_sin(self) -> Self;
    /// Polynomial cosine.
    fn poly_cos(self) -> Self;
    /// Polynomial sine and cosine sharing one range reduction.
    fn poly_sincos(self) -> (Self, Self);
    /// Polynomial natural exponential.
    fn poly_exp(self) -> Self;
    /// Polynomial natural logarithm.
    fn poly_log(self) -> Self;
}

macro_rules! impl_int_element {
    ($($t:ty),* $(,)?) => {$(
        impl Element for $t {
            const BITS: u32 = <$t>::BITS;
            const LANE_MIN: Self = <$t>::MIN;
            const LANE_MAX: Self = <$t>::MAX;
            const LOWEST: Self = <$t>::MIN;
            const HIGHEST: Self = <$t>::MAX;

            #[inline(always)]
            fn lane_add(self, rhs: Self) -> Self {
                self.wrapping_add(rhs)
            }

            #[inline(always)]
            fn lane_sub(self, rhs: Self) -> Self {
                self.wrapping_sub(rhs)
            }

            #[inline(always)]
            fn lane_mul(self, rhs: Self) -> Self {
                self.wrapping_mul(rhs)
            }

            #[inline(always)]
            fn lane_div(self, rhs: Self) -> Self {
                self / rhs
            }

            #[inline(always)]
            fn lane_rem(self, rhs: Self) -> Self {
                self % rhs
            }

            #[inline(always)]
            fn lane_neg(self) -> Self {
                self.wrapping_neg()
            }

            #[inline(always)]
            fn lane_cmp(&self, other: &Self) -> Ordering {
                self.cmp(other)
            }

            #[inline(always)]
            fn lane_within(self, center: Self, margin: Self) -> bool {
                // Every supported integer fits in i128, so the difference is exact.
                let diff = (self as i128 - center as i128).abs();
                diff < margin as i128
            }
        }

        impl IntElement for $t {
            #[inline(always)]
            fn lane_shl(self, count: u32) -> Self {
                debug_assert!(
                    count < <$t>::BITS,
                    "shift count {count} out of range for {}",
                    stringify!($t)
                );
                self.wrapping_shl(count)
            }

            #[inline(always)]
            fn lane_shr(self, count: u32) -> Self {
                debug_assert!(
                    count < <$t>::BITS,
                    "shift count {count} out of range for {}",
                    stringify!($t)
                );
                self.wrapping_shr(count)
            }
        }
    )*};
}

impl_int_element!(i8, i16, i32, i64, u8, u16, u32, u64);

macro_rules! impl_float_element {
    ($t:ident, $bits:ty, $int:ty) => {
        impl Element for $t {
            const BITS: u32 = <$bits>::BITS;
            const LANE_MIN: Self = $t::MIN;
            const LANE_MAX: Self = $t::MAX;
            const LOWEST: Self = $t::NEG_INFINITY;
            const HIGHEST: Self = $t::INFINITY;

            #[inline(always)]
            fn lane_add(self, rhs: Self) -> Self {
                self + rhs
            }

            #[inline(always)]
            fn lane_sub(self, rhs: Self) -> Self {
                self - rhs
            }

            #[inline(always)]
            fn lane_mul(self, rhs: Self) -> Self {
                self * rhs
            }

            #[inline(always)]
            fn lane_div(self, rhs: Self) -> Self {
                self / rhs
            }

            #[inline(always)]
            fn lane_rem(self, rhs: Self) -> Self {
                self % rhs
            }

            #[inline(always)]
            fn lane_neg(self) -> Self {
                -self
            }

            #[inline(always)]
            fn lane_cmp(&self, other: &Self) -> Ordering {
                self.total_cmp(other)
            }

            #[inline(always)]
            fn lane_within(self, center: Self, margin: Self) -> bool {
                center - margin < self && self < center + margin
            }
        }

        impl FloatElement for $t {
            type Bits = $bits;
            type Int = $int;

            #[inline(always)]
            fn to_lane_bits(self) -> $bits {
                self.to_bits()
            }

            #[inline(always)]
            fn from_lane_bits(bits: $bits) -> Self {
                $t::from_bits(bits)
            }

            #[inline(always)]
            fn trunc_to_int(self) -> $int {
                self as $int
            }

            #[inline(always)]
            fn poly_sin(self) -> Self {
                math::$t::sin(self)
            }

            #[inline(always)]
            fn poly_cos(self) -> Self {
                math::$t::cos(self)
            }

            #[inline(always)]
            fn poly_sincos(self) -> (Self, Self) {
                math::$t::sincos(self)
            }

            #[inline(always)]
            fn poly_exp(self) -> Self {
                math::$t::exp(self)
            }

            #[inline(always)]
            fn poly_log(self) -> Self {
                math::$t::log(self)
            }
        }
    };
}

impl_float_element!(f32, u32, i32);
impl_float_element!(f64, u64, i64);
