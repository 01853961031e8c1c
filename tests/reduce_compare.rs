//! Horizontal reductions, comparisons and mask algebra.

use lanewise::simd::emulation::{compare, logical, reduce};
use lanewise::{Mask, SimdMask, SimdVec, Vector};

#[test]
fn test_reductions() {
    let v = Vector::from([3i32, -1, 4, 1, -5, 9, 2, 6]);

    assert_eq!(reduce::reduce_add(&v), 19);
    assert_eq!(reduce::reduce_mul(&v), 6480);
    assert_eq!(reduce::reduce_max(&v), 9);
    assert_eq!(reduce::reduce_min(&v), -5);
    assert_eq!(reduce::index_max(&v), 5);
    assert_eq!(reduce::index_min(&v), 4);
    assert_eq!(reduce::reduce_add_seeded(100, &v), 119);

    let bits = Vector::from([0b1110u8, 0b0111, 0b0110, 0b1111]);
    assert_eq!(reduce::reduce_band(&bits), 0b0110);
    assert_eq!(reduce::reduce_bor(&bits), 0b1111);
    assert_eq!(reduce::reduce_bxor(&bits), 0b1110 ^ 0b0111 ^ 0b0110 ^ 0b1111);
}

#[test]
fn test_masked_reductions_seed_from_identity() {
    let v = Vector::from([2.0f64, 3.0, 5.0, 7.0]);
    let mask = Mask::from([false, true, false, true]);
    let none = Mask::<4>::splat(false);

    assert_eq!(reduce::reduce_add_masked(&mask, &v), 10.0);
    assert_eq!(reduce::reduce_mul_masked(&mask, &v), 21.0);
    assert_eq!(reduce::reduce_max_masked(&mask, &v), 7.0);
    assert_eq!(reduce::reduce_min_masked(&mask, &v), 3.0);

    assert_eq!(reduce::reduce_add_masked(&none, &v), 0.0);
    assert_eq!(reduce::reduce_mul_masked(&none, &v), 1.0);
    assert_eq!(reduce::reduce_max_masked(&none, &v), f64::NEG_INFINITY);
    assert_eq!(reduce::reduce_min_masked(&none, &v), f64::INFINITY);

    let ints = Vector::from([0xf0u8, 0x3c, 0xff, 0x0f]);
    assert_eq!(reduce::reduce_band_masked(&Mask::<4>::splat(false), &ints), 0xff);
    assert_eq!(reduce::reduce_band_masked(&Mask::from([true, true, false, false]), &ints), 0x30);

    assert_eq!(reduce::index_max_masked(&mask, &v), Some(3));
    assert_eq!(reduce::index_min_masked(&mask, &v), Some(1));
    assert_eq!(reduce::index_max_masked(&none, &v), None);
}

#[test]
fn test_sum_of_large_vector_wraps() {
    let v = Vector::<u8, 16>::splat(200);
    assert_eq!(reduce::reduce_add(&v), 200u8.wrapping_mul(16));
}

#[test]
fn test_comparisons() {
    let a = Vector::from([1.0f32, 2.0, 3.0, f32::NAN]);
    let b = Vector::from([1.0f32, 1.0, 4.0, f32::NAN]);

    assert_eq!(compare::is_equal(&a, &b).to_array(), [true, false, false, false]);
    assert_eq!(compare::is_not_equal(&a, &b).to_array(), [false, true, true, true]);
    assert_eq!(compare::is_greater(&a, &b).to_array(), [false, true, false, false]);
    assert_eq!(compare::is_lesser_equal(&a, &b).to_array(), [true, false, true, false]);
    assert_eq!(compare::is_greater_equal_scalar(&a, 2.0).to_array(), [false, true, true, false]);
    assert!(!compare::is_exact(&a, &a));
    assert!(compare::is_exact(&Vector::from([1u8, 2]), &Vector::from([1u8, 2])));
}

#[test]
fn test_is_equal_in_range_is_strict() {
    let a = Vector::from([10i32, 12, 8, 15]);
    let b = Vector::splat(10i32);

    assert_eq!(
        compare::is_equal_in_range_scalar(&a, &b, 2).to_array(),
        [true, false, false, false]
    );
    assert_eq!(
        compare::is_equal_in_range(&a, &b, &Vector::from([1, 3, 3, 6])).to_array(),
        [true, true, true, true]
    );
}

#[test]
fn test_is_equal_in_range_at_integer_limits() {
    let a = Vector::from([0u8, 255, 3, 3]);
    let b = Vector::from([0u8, 250, 3, 3]);
    assert_eq!(
        compare::is_equal_in_range_scalar(&a, &b, 10).to_array(),
        [true, true, true, true]
    );
    assert_eq!(
        compare::is_equal_in_range(&a, &b, &Vector::from([1, 5, 255, 0])).to_array(),
        [true, false, true, false]
    );

    let a = Vector::from([i8::MIN, i8::MAX, i8::MAX, i8::MIN]);
    let b = Vector::from([-125i8, 125, i8::MIN, i8::MAX]);
    assert_eq!(
        compare::is_equal_in_range_scalar(&a, &b, 5).to_array(),
        [true, true, false, false]
    );
    assert_eq!(
        compare::is_equal_in_range_scalar(&a, &b, i8::MAX).to_array(),
        [true, true, false, false]
    );
}

#[test]
fn test_unique() {
    assert!(compare::unique(&Vector::from([1u8, 2, 3, 4, 5, 6, 7, 8])));
    assert!(!compare::unique(&Vector::from([1u8, 2, 3, 4, 5, 6, 7, 1])));
    assert!(!compare::unique(&Vector::from([0.0f64, -0.0])));
}

#[test]
fn test_mask_algebra() {
    let a = Mask::from([true, true, false, false]);
    let b = Mask::from([true, false, true, false]);
    let gate = Mask::from([false, true, true, true]);

    assert_eq!(logical::land(&a, &b).to_array(), [true, false, false, false]);
    assert_eq!(logical::landnot(&a, &b).to_array(), [false, false, true, false]);
    assert_eq!(logical::lor_masked(&gate, &a, &b).to_array(), [true, true, true, false]);
    assert_eq!(logical::lnot_masked(&gate, &a).to_array(), [true, false, true, true]);

    assert!(!reduce::reduce_land(&a));
    assert!(reduce::reduce_lor(&a));
    assert!(!reduce::reduce_lxor(&a));
    assert!(reduce::reduce_lxor(&Mask::from([true, true, true, false])));
    assert!(reduce::reduce_land_masked(&Mask::from([true, true, false, false]), &a));

    let mut c = a;
    logical::lxor_assign(&mut c, &b);
    assert_eq!(c, a ^ b);
    assert_eq!(c.length(), 4);
}

#[test]
fn test_reference_values() {
    let v = Vector::from([1u32, 2, 3, 4, 5, 6, 7, 8]);
    assert_eq!(reduce::reduce_add(&v), 36);
    assert_eq!(reduce::reduce_mul(&v), 40320);
    assert_eq!((reduce::reduce_max(&v), reduce::index_max(&v)), (8, 7));
    assert_eq!((reduce::reduce_min(&v), reduce::index_min(&v)), (1, 0));

    let five = Vector::from([5.0f64]);
    assert!(compare::is_equal_in_range_scalar(&five, &five, 0.1)[0]);
    assert!(!compare::is_equal_in_range_scalar(&Vector::from([5.2f64]), &five, 0.1)[0]);

    assert!(compare::unique(&Vector::from([1, 2, 3, 4])));
    assert!(!compare::unique(&Vector::from([1, 2, 2, 4])));
}

#[test]
fn test_index_ties_pick_first_lane() {
    let v = Vector::from([4i8, 9, 1, 9, 1, 0, 9, 0]);
    assert_eq!(reduce::index_max(&v), 1);
    assert_eq!(reduce::index_min(&v), 5);
}
