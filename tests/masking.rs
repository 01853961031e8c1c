//! Every masked form must equal the unmasked result in active lanes and the
//! first operand in inactive lanes, and every assigning form must equal its
//! value-returning counterpart.

use lanewise::simd::emulation::{arithmetic, bitwise, math, saturate, transcendental};
use lanewise::{Mask, SimdVec, Vector};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const SAMPLES: usize = 100;

fn random_mask(rng: &mut StdRng) -> Mask<8> {
    Mask::from(std::array::from_fn(|_| rng.random::<bool>()))
}

fn random_f64(rng: &mut StdRng) -> Vector<f64, 8> {
    Vector::from(std::array::from_fn(|_| rng.random_range(0.1..=10.0)))
}

fn random_i32(rng: &mut StdRng) -> Vector<i32, 8> {
    Vector::from(std::array::from_fn(|_| rng.random_range(-1000..=1000)))
}

fn assert_masking_law<V: SimdVec + std::fmt::Debug>(mask: &Mask<8>, a: &V, full: &V, masked: &V) {
    for i in 0..8 {
        let expected = if mask[i] { full.extract(i) } else { a.extract(i) };
        assert!(
            masked.extract(i) == expected,
            "lane {i}: masked {masked:?}, full {full:?}, input {a:?}"
        );
    }
}

#[test]
fn test_binary_float_operations() {
    let mut rng = StdRng::seed_from_u64(12345);

    for _ in 0..SAMPLES {
        let mask = random_mask(&mut rng);
        let a = random_f64(&mut rng);
        let b = random_f64(&mut rng);

        assert_masking_law(&mask, &a, &arithmetic::add(&a, &b), &arithmetic::add_masked(&mask, &a, &b));
        assert_masking_law(&mask, &a, &arithmetic::sub(&a, &b), &arithmetic::sub_masked(&mask, &a, &b));
        assert_masking_law(&mask, &a, &arithmetic::mul(&a, &b), &arithmetic::mul_masked(&mask, &a, &b));
        assert_masking_law(&mask, &a, &arithmetic::div(&a, &b), &arithmetic::div_masked(&mask, &a, &b));
        assert_masking_law(&mask, &a, &arithmetic::max(&a, &b), &arithmetic::max_masked(&mask, &a, &b));
        assert_masking_law(&mask, &a, &math::pow(&a, &b), &math::pow_masked(&mask, &a, &b));
        assert_masking_law(
            &mask,
            &a,
            &arithmetic::mul_scalar(&a, 2.5),
            &arithmetic::mul_scalar_masked(&mask, &a, 2.5),
        );

        let mut in_place = a;
        arithmetic::add_masked_assign(&mask, &mut in_place, &b);
        assert_eq!(in_place, arithmetic::add_masked(&mask, &a, &b));
    }
}

#[test]
fn test_unary_float_operations() {
    let mut rng = StdRng::seed_from_u64(54321);

    for _ in 0..SAMPLES {
        let mask = random_mask(&mut rng);
        let a = random_f64(&mut rng);

        assert_masking_law(&mask, &a, &math::sqrt(&a), &math::sqrt_masked(&mask, &a));
        assert_masking_law(&mask, &a, &math::floor(&a), &math::floor_masked(&mask, &a));
        assert_masking_law(&mask, &a, &transcendental::sin(&a), &transcendental::sin_masked(&mask, &a));
        assert_masking_law(&mask, &a, &transcendental::exp(&a), &transcendental::exp_masked(&mask, &a));
        assert_masking_law(&mask, &a, &transcendental::log(&a), &transcendental::log_masked(&mask, &a));
        assert_masking_law(&mask, &a, &arithmetic::rcp(&a), &arithmetic::rcp_masked(&mask, &a));

        let mut in_place = a;
        transcendental::cos_masked_assign(&mask, &mut in_place);
        assert_eq!(in_place, transcendental::cos_masked(&mask, &a));
    }
}

#[test]
fn test_integer_operations() {
    let mut rng = StdRng::seed_from_u64(777);

    for _ in 0..SAMPLES {
        let mask = random_mask(&mut rng);
        let a = random_i32(&mut rng);
        let b = random_i32(&mut rng);
        let counts: Vector<i32, 8> = Vector::from(std::array::from_fn(|_| rng.random_range(0..31)));

        assert_masking_law(&mask, &a, &bitwise::band(&a, &b), &bitwise::band_masked(&mask, &a, &b));
        assert_masking_law(&mask, &a, &bitwise::bxor(&a, &b), &bitwise::bxor_masked(&mask, &a, &b));
        assert_masking_law(&mask, &a, &bitwise::shl(&a, &counts), &bitwise::shl_masked(&mask, &a, &counts));
        assert_masking_law(&mask, &a, &bitwise::rotr(&a, &counts), &bitwise::rotr_masked(&mask, &a, &counts));
        assert_masking_law(
            &mask,
            &a,
            &saturate::sub_saturated(&a, &b),
            &saturate::sub_saturated_masked(&mask, &a, &b),
        );
        assert_masking_law(&mask, &a, &math::abs(&a), &math::abs_masked(&mask, &a));
        assert_masking_law(&mask, &a, &bitwise::bnot(&a), &bitwise::bnot_masked(&mask, &a));

        let mut in_place = a;
        bitwise::bor_scalar_masked_assign(&mask, &mut in_place, 0x55);
        assert_eq!(in_place, bitwise::bor_scalar_masked(&mask, &a, 0x55));
    }
}

#[test]
fn test_blend_and_fused_operations() {
    let mut rng = StdRng::seed_from_u64(2024);

    for _ in 0..SAMPLES {
        let mask = random_mask(&mut rng);
        let a = random_i32(&mut rng);
        let b = random_i32(&mut rng);
        let c = random_i32(&mut rng);

        let blended = arithmetic::blend(&mask, &a, &b);
        for i in 0..8 {
            let expected = if mask[i] { b.extract(i) } else { a.extract(i) };
            assert_eq!(blended.extract(i), expected);
        }

        assert_masking_law(
            &mask,
            &a,
            &arithmetic::fmuladd(&a, &b, &c),
            &arithmetic::fmuladd_masked(&mask, &a, &b, &c),
        );
        assert_masking_law(
            &mask,
            &a,
            &arithmetic::fsubmul(&a, &b, &c),
            &arithmetic::fsubmul_masked(&mask, &a, &b, &c),
        );
    }
}

#[test]
fn test_increment_forms() {
    let mask = Mask::from([true, false, true, false, true, false, true, false]);
    let mut v = Vector::from([0i32, 1, 2, 3, 4, 5, 6, 7]);

    let before = arithmetic::postinc_masked(&mask, &mut v);
    assert_eq!(before.to_array(), [0, 1, 2, 3, 4, 5, 6, 7]);
    assert_eq!(v.to_array(), [1, 1, 3, 3, 5, 5, 7, 7]);

    arithmetic::predec(&mut v);
    assert_eq!(v.to_array(), [0, 0, 2, 2, 4, 4, 6, 6]);
}
