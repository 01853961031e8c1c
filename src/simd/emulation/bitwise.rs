//! Bitwise logic, shifts and rotates on integer lanes.
//!
//! Shift amounts are per-lane (vector form) or uniform (scalar form) and are
//! not masked to the bit width: a count at or above the lane width violates
//! the precondition and trips a debug assertion. Rotate amounts may be any
//! value; the rotation wraps around the lane width.

use num::PrimInt;

use crate::simd::element::IntElement;
use crate::simd::traits::SimdVec;

binary_family! {
    IntElement;
    /// Lane-wise `a & b`.
    band, band_scalar, band_masked, band_scalar_masked,
    band_assign, band_scalar_assign, band_masked_assign, band_scalar_masked_assign
    => |x, y| x & y
}

binary_family! {
    IntElement;
    /// Lane-wise `a | b`.
    bor, bor_scalar, bor_masked, bor_scalar_masked,
    bor_assign, bor_scalar_assign, bor_masked_assign, bor_scalar_masked_assign
    => |x, y| x | y
}

binary_family! {
    IntElement;
    /// Lane-wise `a ^ b`.
    bxor, bxor_scalar, bxor_masked, bxor_scalar_masked,
    bxor_assign, bxor_scalar_assign, bxor_masked_assign, bxor_scalar_masked_assign
    => |x, y| x ^ y
}

binary_family! {
    IntElement;
    /// Lane-wise `!a & b`.
    bandnot, bandnot_scalar, bandnot_masked, bandnot_scalar_masked,
    bandnot_assign, bandnot_scalar_assign, bandnot_masked_assign, bandnot_scalar_masked_assign
    => |x, y| !x & y
}

unary_family! {
    IntElement;
    /// Lane-wise `!a`.
    bnot, bnot_masked, bnot_assign, bnot_masked_assign
    => |x| !x
}

binary_family! {
    IntElement;
    /// Lane-wise `a << b`.
    shl, shl_scalar, shl_masked, shl_scalar_masked,
    shl_assign, shl_scalar_assign, shl_masked_assign, shl_scalar_masked_assign
    => |x, y| x.lane_shl(y.shift_count())
}

binary_family! {
    IntElement;
    /// Lane-wise `a >> b`, arithmetic for signed lanes.
    shr, shr_scalar, shr_masked, shr_scalar_masked,
    shr_assign, shr_scalar_assign, shr_masked_assign, shr_scalar_masked_assign
    => |x, y| x.lane_shr(y.shift_count())
}

binary_family! {
    IntElement;
    /// Lane-wise rotate left by `b` bits.
    rotl, rotl_scalar, rotl_masked, rotl_scalar_masked,
    rotl_assign, rotl_scalar_assign, rotl_masked_assign, rotl_scalar_masked_assign
    => |x, y| x.rotate_left(y.shift_count())
}

binary_family! {
    IntElement;
    /// Lane-wise rotate right by `b` bits.
    rotr, rotr_scalar, rotr_masked, rotr_scalar_masked,
    rotr_assign, rotr_scalar_assign, rotr_masked_assign, rotr_scalar_masked_assign
    => |x, y| x.rotate_right(y.shift_count())
}
