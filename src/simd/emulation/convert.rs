//! Lane-wise conversions.
//!
//! [`cast`] converts values and fails on any lane the target type cannot
//! represent. [`to_bits`] and [`from_bits`] reinterpret IEEE-754 bit patterns
//! without changing them.

use num::{NumCast, Zero};

use crate::error::{validation_error, Result};
use crate::simd::element::FloatElement;
use crate::simd::traits::{FloatVec, SimdVec};

/// Converts every lane of `a` to the scalar type of `W`.
///
/// Float to integer conversion truncates toward zero. A lane that is out of
/// range for the target (or NaN going to an integer) is an error.
pub fn cast<V, W>(a: &V) -> Result<W>
where
    V: SimdVec,
    W: SimdVec,
{
    debug_assert_eq!(V::LANES, W::LANES);

    let mut result = W::splat(Zero::zero());
    for i in 0..V::LANES {
        let lane = a.extract(i);
        match <W::Scalar as NumCast>::from(lane) {
            Some(value) => {
                result.insert(i, value);
            }
            None => {
                return Err(validation_error(format!(
                    "lane {i} value {lane:?} is not representable as {}",
                    std::any::type_name::<W::Scalar>()
                )))
            }
        }
    }
    Ok(result)
}

/// Raw IEEE-754 bit pattern of every lane.
#[inline(always)]
pub fn to_bits<V>(a: &V) -> V::BitsVec
where
    V: FloatVec,
    V::Scalar: FloatElement,
{
    let mut result = V::BitsVec::splat(Zero::zero());
    for i in 0..V::LANES {
        result.insert(i, a.extract(i).to_lane_bits());
    }
    result
}

/// Builds a float vector from raw IEEE-754 bit patterns.
#[inline(always)]
pub fn from_bits<V>(bits: &V::BitsVec) -> V
where
    V: FloatVec,
    V::Scalar: FloatElement,
{
    let mut result = V::splat(Zero::zero());
    for i in 0..V::LANES {
        result.insert(i, <V::Scalar as FloatElement>::from_lane_bits(bits.extract(i)));
    }
    result
}
