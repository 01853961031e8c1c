//! The parallel slice paths must agree element for element with the
//! sequential ones, on both sides of the parallel threshold.

use lanewise::{ParallelMath, SimdAdd, SimdMath, PARALLEL_SIMD_THRESHOLD};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const SIZES: &[usize] = &[1, 7, 8, 9, 1_000, PARALLEL_SIMD_THRESHOLD, PARALLEL_SIMD_THRESHOLD + 13];

fn random_vec(len: usize, low: f64, high: f64, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..len).map(|_| rng.random_range(low..=high)).collect()
}

#[test]
fn test_parallel_matches_sequential() {
    for &size in SIZES {
        println!("Testing size {size}");
        let data = random_vec(size, -20.0, 20.0, size as u64);
        let positive: Vec<f64> = data.iter().map(|x| x.abs() + 1e-3).collect();

        assert_eq!(data.par_abs(), data.abs(), "abs, size {size}");
        assert_eq!(data.par_sin(), data.sin(), "sin, size {size}");
        assert_eq!(data.par_cos(), data.cos(), "cos, size {size}");
        assert_eq!(data.par_exp(), data.exp(), "exp, size {size}");
        assert_eq!(positive.par_sqrt(), positive.sqrt(), "sqrt, size {size}");
        assert_eq!(positive.par_ln(), positive.ln(), "ln, size {size}");
    }
}

#[test]
fn test_parallel_f32_against_std() {
    let mut rng = StdRng::seed_from_u64(12345);
    let size = PARALLEL_SIMD_THRESHOLD * 2 + 3;
    let data: Vec<f32> = (0..size).map(|_| rng.random_range(0.5..=100.0)).collect();

    let roots = data.par_sqrt();
    let logs = data.par_ln();
    assert_eq!(roots.len(), size);

    for ((x, r), l) in data.iter().zip(&roots).zip(&logs) {
        assert_eq!(*r, x.sqrt());
        assert!((l - x.ln()).abs() <= 1e-6 * x.ln().abs().max(1.0), "ln({x}) = {l}");
    }
}

#[test]
fn test_addition_paths_agree() {
    for &size in SIZES {
        let a = random_vec(size, -1e3, 1e3, 1);
        let b = random_vec(size, -1e3, 1e3, 2);

        let scalar = a.as_slice().scalar_add(b.as_slice());
        assert_eq!(a.as_slice().simd_add(b.as_slice()), scalar, "simd_add, size {size}");
        assert_eq!(a.clone().par_simd_add(b.as_slice()), scalar, "par_simd_add, size {size}");
    }
}

#[test]
fn test_integer_addition_wraps() {
    let size = PARALLEL_SIMD_THRESHOLD + 5;
    let a = vec![i16::MAX; size];
    let b = vec![1i16; size];

    let sum = a.as_slice().par_simd_add(b.as_slice());
    assert!(sum.iter().all(|&x| x == i16::MIN));
}

#[test]
#[should_panic(expected = "Vectors must be the same length")]
fn test_addition_length_mismatch() {
    let a = vec![1.0f32; 10];
    let b = vec![1.0f32; 9];
    let _ = a.as_slice().simd_add(b.as_slice());
}

#[test]
#[should_panic(expected = "Size can't be empty")]
fn test_addition_empty_input() {
    let a: Vec<f64> = Vec::new();
    let _ = a.as_slice().simd_add(a.as_slice());
}

#[test]
fn test_pow_slices() {
    let base = vec![2.0f64, 3.0, 4.0, 10.0, 0.5, 9.0, 1.0, 8.0, 16.0];
    let exponent = vec![2.0f64, 2.0, 0.5, 3.0, -1.0, 0.5, 100.0, 1.0, 0.25];
    let result = base.pow(&exponent);

    let expected: Vec<f64> = base.iter().zip(&exponent).map(|(b, e)| b.powf(*e)).collect();
    assert_eq!(result, expected);
}
