//! Polynomial kernels for the transcendental functions.
//!
//! Each precision is calibrated independently: [`f32`] and [`f64`] hold
//! their own Cody–Waite split constants and minimax coefficients.
//!
//! # Function Reference
//!
//! | Function | Reduction | Approximation | Special values |
//! |----------|-----------|---------------|----------------|
//! | `sin`, `cos`, `sincos` | `j = trunc(\|x\|·4/π)` forced even, three-part π/4 | sin/cos minimax on \|x'\| ≤ π/4 | ±∞ → NaN |
//! | `exp` | `z = round(x·log2 e)`, two-part ln 2 | `f32`: degree-6 Horner, `f64`: P(x²)/Q(x²) | above ceiling → +∞, below floor → 0 |
//! | `log` | IEEE exponent split, mantissa in [√½, √2) | `f32`: degree-8 Horner, `f64`: P(f)/Q(f) | ≤ 0 → NaN, +∞ → +∞ |
//!
//! The 2^z scale of `exp` and the mantissa/exponent split of `log` are built
//! directly from bit patterns with `to_bits`/`from_bits`.
//!
//! # References
//!
//! - Cody, W. J. and Waite, W. "Software Manual for the Elementary Functions" (1980)
//! - Moshier, S. L. "Methods and Programs for Mathematical Functions" (1989)

#[allow(clippy::excessive_precision)]
pub mod f32;

#[allow(clippy::excessive_precision)]
pub mod f64;

/// Evaluates `c[0]·xⁿ + c[1]·xⁿ⁻¹ + … + c[n]` with Horner's scheme.
#[inline(always)]
pub(crate) fn horner<F: num::Float>(x: F, coefficients: &[F]) -> F {
    coefficients
        .iter()
        .fold(F::zero(), |acc, &coefficient| acc * x + coefficient)
}
