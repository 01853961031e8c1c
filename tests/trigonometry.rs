//! Precision comparison tests between the polynomial and standard library
//! sine, cosine and tangent.
//!
//! Inputs cover exact multiples of pi, the range reduction boundaries and a
//! seeded random sweep over `[-10 pi, 10 pi]`.

use std::f64::consts::PI;

use lanewise::simd::emulation::transcendental::{cos, sin, sincos};
use lanewise::{SimdMath, SimdVec, Vector};

fn max_abs_error_f64(scalar: &[f64], simd: &[f64]) -> f64 {
    scalar
        .iter()
        .zip(simd)
        .map(|(s, v)| (s - v).abs())
        .fold(0.0, f64::max)
}

fn max_abs_error_f32(scalar: &[f32], simd: &[f32]) -> f32 {
    scalar
        .iter()
        .zip(simd)
        .map(|(s, v)| (s - v).abs())
        .fold(0.0, f32::max)
}

#[test]
fn test_sin_cos_precision_comparison() {
    let test_cases = [
        // Multiples of pi/2
        vec![0.0f64, PI / 2.0, PI, 3.0 * PI / 2.0, 2.0 * PI],
        // Negative side
        vec![-PI / 4.0, -PI / 2.0, -PI, -2.5],
        // Octant boundaries
        vec![PI / 4.0, 3.0 * PI / 4.0, 5.0 * PI / 4.0, 7.0 * PI / 4.0],
        // Near the end of the tested range
        vec![9.5 * PI, -9.75 * PI, 10.0 * PI, -10.0 * PI],
        // Tiny values
        vec![1e-9, -1e-9, 1e-5, 1e-3],
    ];

    for (i, test_case) in test_cases.iter().enumerate() {
        println!("Testing case {}: {:?}", i + 1, test_case);

        let scalar_sin: Vec<f64> = test_case.iter().map(|x| x.sin()).collect();
        let scalar_cos: Vec<f64> = test_case.iter().map(|x| x.cos()).collect();
        let simd_sin = test_case.sin();
        let simd_cos = test_case.cos();

        assert_eq!(scalar_sin.len(), simd_sin.len(), "Result vectors have different lengths");

        let sin_error = max_abs_error_f64(&scalar_sin, &simd_sin);
        let cos_error = max_abs_error_f64(&scalar_cos, &simd_cos);
        println!("  Max sin error: {sin_error:.2e}, Max cos error: {cos_error:.2e}");

        assert!(sin_error < 1e-12, "sin error {sin_error:.2e} too large in case {}", i + 1);
        assert!(cos_error < 1e-12, "cos error {cos_error:.2e} too large in case {}", i + 1);
    }
}

#[test]
fn test_random_sweep_f64() {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    let mut rng = StdRng::seed_from_u64(12345);
    let inputs: Vec<f64> = (0..10_000)
        .map(|_| rng.random_range(-10.0 * PI..=10.0 * PI))
        .collect();

    let scalar: Vec<f64> = inputs.iter().map(|x| x.sin()).collect();
    let simd = inputs.sin();
    let error = max_abs_error_f64(&scalar, &simd);
    println!("f64 sin max error over {} samples: {error:.2e}", inputs.len());
    assert!(error < 1e-12);

    let scalar: Vec<f64> = inputs.iter().map(|x| x.cos()).collect();
    let simd_cos = inputs.cos();
    let error = max_abs_error_f64(&scalar, &simd_cos);
    println!("f64 cos max error over {} samples: {error:.2e}", inputs.len());
    assert!(error < 1e-12);

    let identity = simd
        .iter()
        .zip(&simd_cos)
        .map(|(s, c)| (s * s + c * c - 1.0).abs())
        .fold(0.0, f64::max);
    println!("f64 sin^2 + cos^2 max deviation: {identity:.2e}");
    assert!(identity < 1e-11);
}

#[test]
fn test_random_sweep_f32() {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    let mut rng = StdRng::seed_from_u64(54321);
    let bound = 10.0 * std::f32::consts::PI;
    let inputs: Vec<f32> = (0..10_000).map(|_| rng.random_range(-bound..=bound)).collect();

    let scalar: Vec<f32> = inputs.iter().map(|x| x.sin()).collect();
    let simd = inputs.sin();
    let error = max_abs_error_f32(&scalar, &simd);
    println!("f32 sin max error: {error:.2e}");
    assert!(error < 1e-6);

    let scalar: Vec<f32> = inputs.iter().map(|x| x.cos()).collect();
    let simd_cos = inputs.cos();
    let error = max_abs_error_f32(&scalar, &simd_cos);
    println!("f32 cos max error: {error:.2e}");
    assert!(error < 1e-6);

    // Squared in f64 so the check sees kernel error, not f32 rounding.
    let identity = simd
        .iter()
        .zip(&simd_cos)
        .map(|(&s, &c)| (f64::from(s).powi(2) + f64::from(c).powi(2) - 1.0).abs())
        .fold(0.0, f64::max);
    println!("f32 sin^2 + cos^2 max deviation: {identity:.2e}");
    assert!(identity < 5e-6);
}

#[test]
fn test_sincos_matches_separate_calls() {
    let v = Vector::from([0.3f64, -1.7, 4.0, 25.0, -31.0, 0.0, 1e-7, 2.0]);
    let (s, c) = sincos(&v);

    assert_eq!(s, sin(&v));
    assert_eq!(c, cos(&v));

    for i in 0..8 {
        let identity = s.extract(i) * s.extract(i) + c.extract(i) * c.extract(i);
        assert!((identity - 1.0).abs() < 1e-14, "sin^2 + cos^2 = {identity} at lane {i}");
    }
}

#[test]
fn test_tan_precision() {
    let inputs: Vec<f64> = (-40..=40).map(|k| k as f64 * 0.037).collect();
    let scalar: Vec<f64> = inputs.iter().map(|x| x.tan()).collect();
    let simd = inputs.tan();

    for ((x, s), v) in inputs.iter().zip(&scalar).zip(&simd) {
        let relative_error = if *s != 0.0 { ((s - v) / s).abs() } else { (s - v).abs() };
        assert!(relative_error < 1e-12, "tan({x}): scalar {s}, simd {v}");
    }
}

#[test]
fn test_special_values() {
    let special = vec![f64::NAN, f64::INFINITY, f64::NEG_INFINITY, 0.0, -0.0];
    let s = special.sin();
    let c = special.cos();

    assert!(s[0].is_nan() && s[1].is_nan() && s[2].is_nan());
    assert!(c[0].is_nan() && c[1].is_nan() && c[2].is_nan());
    assert_eq!(s[3], 0.0);
    assert_eq!(c[3], 1.0);
    assert_eq!(c[4], 1.0);
}
