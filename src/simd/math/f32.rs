//! Single-precision kernels.
//!
//! Accuracy over the primary domain (|x| ≤ 10π for the periodic functions):
//! absolute error below `1e-6` for sin/cos, a few ULP for exp and log.
//!
//! Outside that domain the three-part π/4 reduction loses bits as |x| grows.
//! Once `|x|·4/π` passes `u32::MAX` (|x| above about `3.4e9`) the octant
//! count saturates, and sin/cos are no longer meaningful.

use super::horner;

// ============================================================================
// Range reduction
// ============================================================================

/// 4/π
const FOPI: f32 = 1.27323954473516;

/// π/4 split in three parts; `DP1` and `DP2` carry few enough mantissa bits
/// that `j·DP1` and `j·DP2` stay exact for the reduction counts in range.
const DP1: f32 = 0.78515625;
const DP2: f32 = 2.4187564849853515625e-4;
const DP3: f32 = 3.77489497744594108e-8;

/// Reduces `x ≥ 0` to `z ∈ [-π/4, π/4]` and an even octant count `j`.
#[inline(always)]
fn reduce(x: f32) -> (f32, u32) {
    let j = ((x * FOPI) as u32).wrapping_add(1) & !1;
    let y = j as f32;
    let z = ((x - y * DP1) - y * DP2) - y * DP3;
    (z, j)
}

// ============================================================================
// Sine / cosine
// ============================================================================

const SIN_COEFFS: [f32; 3] = [-1.9515295891e-4, 8.3321608736e-3, -1.6666654611e-1];

const COS_COEFFS: [f32; 3] = [2.443315711809948e-5, -1.388731625493765e-3, 4.166664568298827e-2];

#[inline(always)]
fn sin_poly(z: f32, zz: f32) -> f32 {
    z + z * zz * horner(zz, &SIN_COEFFS)
}

#[inline(always)]
fn cos_poly(zz: f32) -> f32 {
    1.0 - 0.5 * zz + zz * zz * horner(zz, &COS_COEFFS)
}

/// Sine with Cody–Waite reduction.
#[inline(always)]
pub fn sin(x: f32) -> f32 {
    if x.is_infinite() {
        return f32::NAN;
    }

    let (z, j) = reduce(x.abs());
    let zz = z * z;

    let y = if j & 2 != 0 {
        cos_poly(zz)
    } else {
        sin_poly(z, zz)
    };

    if (j & 4 != 0) != x.is_sign_negative() {
        -y
    } else {
        y
    }
}

/// Cosine with Cody–Waite reduction.
#[inline(always)]
pub fn cos(x: f32) -> f32 {
    if x.is_infinite() {
        return f32::NAN;
    }

    let (z, j) = reduce(x.abs());
    let zz = z * z;

    // cos(x) = sin(x + π/2): shift the octant back by two
    let j = j.wrapping_sub(2);

    let y = if j & 2 != 0 {
        cos_poly(zz)
    } else {
        sin_poly(z, zz)
    };

    if !j & 4 != 0 {
        -y
    } else {
        y
    }
}

/// Sine and cosine from a single reduction.
#[inline(always)]
pub fn sincos(x: f32) -> (f32, f32) {
    if x.is_infinite() {
        return (f32::NAN, f32::NAN);
    }

    let (z, j) = reduce(x.abs());
    let zz = z * z;

    let s = sin_poly(z, zz);
    let c = cos_poly(zz);

    let (sin, cos) = if j & 2 != 0 { (c, s) } else { (s, c) };

    let sin = if (j & 4 != 0) != x.is_sign_negative() {
        -sin
    } else {
        sin
    };

    let cos = if !j.wrapping_sub(2) & 4 != 0 { -cos } else { cos };

    (sin, cos)
}

// ============================================================================
// Exponential
// ============================================================================

/// ln(f32::MAX): larger inputs overflow to +∞.
const EXP_HI: f32 = 88.72283905206835;
/// ln(f32::MIN_POSITIVE): smaller inputs flush to 0.
const EXP_LO: f32 = -87.33654475055310898657;

const LOG2E: f32 = std::f32::consts::LOG2_E;

/// ln 2 split in two parts.
const LN2_HI: f32 = 0.693359375;
const LN2_LO: f32 = -2.12194440e-4;

const EXP_COEFFS: [f32; 6] = [
    1.9875691500e-4,
    1.3981999507e-3,
    8.3334519073e-3,
    4.1665795894e-2,
    1.6666665459e-1,
    5.0000001201e-1,
];

/// 2^n for n in [-126, 127], built from the exponent field.
#[inline(always)]
fn pow2i(n: i32) -> f32 {
    f32::from_bits(((n + 127) as u32) << 23)
}

/// Natural exponential.
#[inline(always)]
pub fn exp(x: f32) -> f32 {
    if x.is_nan() {
        return x;
    }
    if x > EXP_HI {
        return f32::INFINITY;
    }
    if x < EXP_LO {
        return 0.0;
    }

    let z = (x * LOG2E + 0.5).floor();
    let r = x - z * LN2_HI - z * LN2_LO;
    let rr = r * r;

    let p = horner(r, &EXP_COEFFS) * rr + r + 1.0;

    let n = z as i32;
    if n > 127 {
        // 2^128 has no normal encoding; scale in two steps
        p * 2.0 * pow2i(n - 1)
    } else {
        p * pow2i(n)
    }
}

// ============================================================================
// Logarithm
// ============================================================================

const SQRTHF: f32 = std::f32::consts::FRAC_1_SQRT_2;

const LOG_COEFFS: [f32; 9] = [
    7.0376836292e-2,
    -1.1514610310e-1,
    1.1676998740e-1,
    -1.2420140846e-1,
    1.4249322787e-1,
    -1.6668057665e-1,
    2.0000714765e-1,
    -2.4999993993e-1,
    3.3333331174e-1,
];

/// 2^25, lifts subnormals into the normal range.
const SUBNORMAL_SCALE: f32 = 33554432.0;

/// Splits `x > 0` into `m ∈ [0.5, 1)` and `e` with `x = m·2^e`.
#[inline(always)]
fn frexp(x: f32) -> (f32, i32) {
    let (x, shift) = if x < f32::MIN_POSITIVE {
        (x * SUBNORMAL_SCALE, 25)
    } else {
        (x, 0)
    };

    let bits = x.to_bits();
    let e = ((bits >> 23) & 0xff) as i32 - 126 - shift;
    let m = f32::from_bits((bits & 0x807f_ffff) | 0x3f00_0000);
    (m, e)
}

/// Natural logarithm.
///
/// Non-positive inputs return NaN, `+∞` returns `+∞`.
#[inline(always)]
pub fn log(x: f32) -> f32 {
    if x.is_nan() {
        return x;
    }
    if x <= 0.0 {
        return f32::NAN;
    }
    if x == f32::INFINITY {
        return x;
    }

    let (m, e) = frexp(x);
    let (f, e) = if m < SQRTHF {
        (m + m - 1.0, e - 1)
    } else {
        (m - 1.0, e)
    };
    let e = e as f32;

    let ff = f * f;
    let mut y = horner(f, &LOG_COEFFS) * f * ff;
    y += LN2_LO * e;
    y -= 0.5 * ff;

    f + y + LN2_HI * e
}
