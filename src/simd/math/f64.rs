//! Double-precision kernels.
//!
//! Accuracy over the primary domain (|x| ≤ 10π for the periodic functions):
//! absolute error below `1e-12` for sin/cos, relative error around `1e-15`
//! for exp and log.
//!
//! Outside that domain the three-part π/4 reduction loses bits as |x| grows.
//! Once `|x|·4/π` passes `u64::MAX` (|x| above about `1.4e19`) the octant
//! count saturates, and sin/cos are no longer meaningful.

use super::horner;

// ============================================================================
// Range reduction
// ============================================================================

/// 4/π
const FOPI: f64 = 1.27323954473516268615;

/// π/4 split in three parts for extended-precision subtraction.
const DP1: f64 = 7.85398125648498535156e-1;
const DP2: f64 = 3.77489470793079817668e-8;
const DP3: f64 = 2.69515142907905952645e-15;

/// Reduces `x ≥ 0` to `z ∈ [-π/4, π/4]` and an even octant count `j`.
#[inline(always)]
fn reduce(x: f64) -> (f64, u64) {
    let j = ((x * FOPI) as u64).wrapping_add(1) & !1;
    let y = j as f64;
    let z = ((x - y * DP1) - y * DP2) - y * DP3;
    (z, j)
}

// ============================================================================
// Sine / cosine
// ============================================================================

const SIN_COEFFS: [f64; 6] = [
    1.58962301576546568060e-10,
    -2.50507477628578072866e-8,
    2.75573136213857245213e-6,
    -1.98412698295895385996e-4,
    8.33333333332211858878e-3,
    -1.66666666666666307295e-1,
];

const COS_COEFFS: [f64; 6] = [
    -1.13585365213876817300e-11,
    2.08757008419747316778e-9,
    -2.75573141792967388112e-7,
    2.48015872888517045348e-5,
    -1.38888888888730564116e-3,
    4.16666666666665929218e-2,
];

#[inline(always)]
fn sin_poly(z: f64, zz: f64) -> f64 {
    z + z * zz * horner(zz, &SIN_COEFFS)
}

#[inline(always)]
fn cos_poly(zz: f64) -> f64 {
    1.0 - 0.5 * zz + zz * zz * horner(zz, &COS_COEFFS)
}

/// Sine with Cody–Waite reduction.
#[inline(always)]
pub fn sin(x: f64) -> f64 {
    if x.is_infinite() {
        return f64::NAN;
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
pub fn cos(x: f64) -> f64 {
    if x.is_infinite() {
        return f64::NAN;
    }

    let (z, j) = reduce(x.abs());
    let zz = z * z;

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
pub fn sincos(x: f64) -> (f64, f64) {
    if x.is_infinite() {
        return (f64::NAN, f64::NAN);
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

/// ln(f64::MAX): larger inputs overflow to +∞.
const EXP_HI: f64 = 7.09782712893383996843e2;
/// ln(f64::MIN_POSITIVE): smaller inputs flush to 0.
const EXP_LO: f64 = -7.08396418532264106224e2;

const LOG2E: f64 = std::f64::consts::LOG2_E;

/// ln 2 split in two parts.
const LN2_HI: f64 = 6.93145751953125e-1;
const LN2_LO: f64 = 1.42860682030941723212e-6;

const EXP_P: [f64; 3] = [
    1.26177193074810590878e-4,
    3.02994407707441961300e-2,
    9.99999999999999999910e-1,
];

const EXP_Q: [f64; 4] = [
    3.00198505138664455042e-6,
    2.52448340349684104192e-3,
    2.27265548208155028766e-1,
    2.00000000000000000009e0,
];

/// 2^n for n in [-1022, 1023], built from the exponent field.
#[inline(always)]
fn pow2i(n: i64) -> f64 {
    f64::from_bits(((n + 1023) as u64) << 52)
}

/// Natural exponential.
#[inline(always)]
pub fn exp(x: f64) -> f64 {
    if x.is_nan() {
        return x;
    }
    if x > EXP_HI {
        return f64::INFINITY;
    }
    if x < EXP_LO {
        return 0.0;
    }

    let z = (x * LOG2E + 0.5).floor();
    let r = x - z * LN2_HI - z * LN2_LO;
    let rr = r * r;

    // e^r = 1 + 2·r·P(r²) / (Q(r²) - r·P(r²))
    let px = r * horner(rr, &EXP_P);
    let p = 1.0 + 2.0 * (px / (horner(rr, &EXP_Q) - px));

    let n = z as i64;
    if n > 1023 {
        p * 2.0 * pow2i(n - 1)
    } else {
        p * pow2i(n)
    }
}

// ============================================================================
// Logarithm
// ============================================================================

const SQRTH: f64 = std::f64::consts::FRAC_1_SQRT_2;

const LN2_LOG_HI: f64 = 0.693359375;
const LN2_LOG_LO: f64 = -2.121944400546905827679e-4;

const LOG_P: [f64; 6] = [
    1.01875663804580931796e-4,
    4.97494994976747001425e-1,
    4.70579119878881725854e0,
    1.44989225341610930846e1,
    1.79368678507819816313e1,
    7.70838733755885391666e0,
];

const LOG_Q: [f64; 6] = [
    1.0,
    1.12873587189167450590e1,
    4.52279145837532221105e1,
    8.29875266912776603211e1,
    7.11544750618563894466e1,
    2.31251620126765340583e1,
];

/// 2^54, lifts subnormals into the normal range.
const SUBNORMAL_SCALE: f64 = 18014398509481984.0;

/// Splits `x > 0` into `m ∈ [0.5, 1)` and `e` with `x = m·2^e`.
#[inline(always)]
fn frexp(x: f64) -> (f64, i64) {
    let (x, shift) = if x < f64::MIN_POSITIVE {
        (x * SUBNORMAL_SCALE, 54)
    } else {
        (x, 0)
    };

    let bits = x.to_bits();
    let e = ((bits >> 52) & 0x7ff) as i64 - 1022 - shift;
    let m = f64::from_bits((bits & 0x800f_ffff_ffff_ffff) | 0x3fe0_0000_0000_0000);
    (m, e)
}

/// Natural logarithm.
///
/// Non-positive inputs return NaN, `+∞` returns `+∞`.
#[inline(always)]
pub fn log(x: f64) -> f64 {
    if x.is_nan() {
        return x;
    }
    if x <= 0.0 {
        return f64::NAN;
    }
    if x == f64::INFINITY {
        return x;
    }

    let (m, e) = frexp(x);
    let (f, e) = if m < SQRTH {
        (m + m - 1.0, e - 1)
    } else {
        (m - 1.0, e)
    };
    let e = e as f64;

    let ff = f * f;
    let mut y = f * (ff * horner(f, &LOG_P) / horner(f, &LOG_Q));
    y += LN2_LOG_LO * e;
    y -= 0.5 * ff;

    f + y + LN2_LOG_HI * e
}
