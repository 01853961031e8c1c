//! Horizontal reductions.
//!
//! Every reduction comes in three forms:
//!
//! - `reduce_op(a)` seeds from lane 0 and folds lanes `1..N` left to right;
//! - `reduce_op_seeded(seed, a)` folds all lanes onto an external seed, for
//!   chaining across several vectors;
//! - `reduce_op_masked(mask, a)` folds only the active lanes onto the
//!   operation's identity, so an all-clear mask returns the identity.
//!
//! Float `min`/`max` folds keep the accumulator only when it compares
//! strictly better, so a NaN lane replaces the running value the same way
//! the element-wise [`max`](crate::simd::emulation::arithmetic::max) does.

use num::{One, Zero};

use crate::simd::element::{Element, IntElement};
use crate::simd::traits::{SimdMask, SimdVec};

#[inline(always)]
fn fold<V, F>(seed: V::Scalar, a: &V, start: usize, mut f: F) -> V::Scalar
where
    V: SimdVec,
    F: FnMut(V::Scalar, V::Scalar) -> V::Scalar,
{
    (start..V::LANES).fold(seed, |acc, i| f(acc, a.extract(i)))
}

#[inline(always)]
fn fold_masked<V, F>(mask: &V::Mask, identity: V::Scalar, a: &V, mut f: F) -> V::Scalar
where
    V: SimdVec,
    F: FnMut(V::Scalar, V::Scalar) -> V::Scalar,
{
    (0..V::LANES)
        .filter(|&i| mask.extract(i))
        .fold(identity, |acc, i| f(acc, a.extract(i)))
}

macro_rules! reduction {
    (
        $bound:path;
        $(#[$meta:meta])*
        $plain:ident, $seeded:ident, $masked:ident;
        identity = $identity:expr;
        |$acc:ident, $x:ident| $body:expr
    ) => {
        $(#[$meta])*
        #[inline(always)]
        pub fn $plain<V>(a: &V) -> V::Scalar
        where
            V: SimdVec,
            V::Scalar: $bound,
        {
            fold(a.extract(0), a, 1, |$acc, $x| $body)
        }

        #[doc = concat!("[`", stringify!($plain), "`] folded onto an external seed.")]
        #[inline(always)]
        pub fn $seeded<V>(seed: V::Scalar, a: &V) -> V::Scalar
        where
            V: SimdVec,
            V::Scalar: $bound,
        {
            fold(seed, a, 0, |$acc, $x| $body)
        }

        #[doc = concat!("[`", stringify!($plain), "`] over the active lanes, seeded with the identity.")]
        #[inline(always)]
        pub fn $masked<V>(mask: &V::Mask, a: &V) -> V::Scalar
        where
            V: SimdVec,
            V::Scalar: $bound,
        {
            let identity: V::Scalar = $identity;
            fold_masked(mask, identity, a, |$acc, $x| $body)
        }
    };
}

reduction! {
    Element;
    /// Sum of all lanes (wrapping for integers).
    reduce_add, reduce_add_seeded, reduce_add_masked;
    identity = V::Scalar::zero();
    |acc, x| acc.lane_add(x)
}

reduction! {
    Element;
    /// Product of all lanes (wrapping for integers).
    reduce_mul, reduce_mul_seeded, reduce_mul_masked;
    identity = V::Scalar::one();
    |acc, x| acc.lane_mul(x)
}

reduction! {
    Element;
    /// Largest lane value.
    reduce_max, reduce_max_seeded, reduce_max_masked;
    identity = <V::Scalar as Element>::LOWEST;
    |acc, x| if acc > x { acc } else { x }
}

reduction! {
    Element;
    /// Smallest lane value.
    reduce_min, reduce_min_seeded, reduce_min_masked;
    identity = <V::Scalar as Element>::HIGHEST;
    |acc, x| if acc < x { acc } else { x }
}

reduction! {
    IntElement;
    /// Bitwise AND of all lanes.
    reduce_band, reduce_band_seeded, reduce_band_masked;
    identity = !V::Scalar::zero();
    |acc, x| acc & x
}

reduction! {
    IntElement;
    /// Bitwise OR of all lanes.
    reduce_bor, reduce_bor_seeded, reduce_bor_masked;
    identity = V::Scalar::zero();
    |acc, x| acc | x
}

reduction! {
    IntElement;
    /// Bitwise XOR of all lanes.
    reduce_bxor, reduce_bxor_seeded, reduce_bxor_masked;
    identity = V::Scalar::zero();
    |acc, x| acc ^ x
}

// ================================================================================================
// INDEX REDUCTIONS
// ================================================================================================

#[inline(always)]
fn index_by<V, F>(a: &V, mask: Option<&V::Mask>, mut better: F) -> Option<usize>
where
    V: SimdVec,
    F: FnMut(V::Scalar, V::Scalar) -> bool,
{
    let mut best: Option<(usize, V::Scalar)> = None;
    for i in 0..V::LANES {
        if !mask.map_or(true, |m| m.extract(i)) {
            continue;
        }
        let x = a.extract(i);
        match best {
            Some((_, current)) if !better(x, current) => {}
            _ => best = Some((i, x)),
        }
    }
    best.map(|(i, _)| i)
}

/// Position of the largest lane; ties go to the lowest index.
#[inline(always)]
pub fn index_max<V: SimdVec>(a: &V) -> usize {
    index_by(a, None, |x, best| x > best).unwrap_or(0)
}

/// Position of the smallest lane; ties go to the lowest index.
#[inline(always)]
pub fn index_min<V: SimdVec>(a: &V) -> usize {
    index_by(a, None, |x, best| x < best).unwrap_or(0)
}

/// [`index_max`] over the active lanes, `None` when no lane is active.
#[inline(always)]
pub fn index_max_masked<V: SimdVec>(mask: &V::Mask, a: &V) -> Option<usize> {
    index_by(a, Some(mask), |x, best| x > best)
}

/// [`index_min`] over the active lanes, `None` when no lane is active.
#[inline(always)]
pub fn index_min_masked<V: SimdVec>(mask: &V::Mask, a: &V) -> Option<usize> {
    index_by(a, Some(mask), |x, best| x < best)
}

// ================================================================================================
// MASK REDUCTIONS
// ================================================================================================

/// True iff every lane is set.
#[inline(always)]
pub fn reduce_land<M: SimdMask>(mask: &M) -> bool {
    (0..M::LANES).all(|i| mask.extract(i))
}

/// True iff any lane is set.
#[inline(always)]
pub fn reduce_lor<M: SimdMask>(mask: &M) -> bool {
    (0..M::LANES).any(|i| mask.extract(i))
}

/// True iff an odd number of lanes are set.
#[inline(always)]
pub fn reduce_lxor<M: SimdMask>(mask: &M) -> bool {
    (0..M::LANES).fold(false, |acc, i| acc != mask.extract(i))
}

/// [`reduce_land`] over the lanes selected by `gate`; `true` when none are.
#[inline(always)]
pub fn reduce_land_masked<M: SimdMask>(gate: &M, mask: &M) -> bool {
    (0..M::LANES).filter(|&i| gate.extract(i)).all(|i| mask.extract(i))
}

/// [`reduce_lor`] over the lanes selected by `gate`; `false` when none are.
#[inline(always)]
pub fn reduce_lor_masked<M: SimdMask>(gate: &M, mask: &M) -> bool {
    (0..M::LANES).filter(|&i| gate.extract(i)).any(|i| mask.extract(i))
}

/// [`reduce_lxor`] over the lanes selected by `gate`.
#[inline(always)]
pub fn reduce_lxor_masked<M: SimdMask>(gate: &M, mask: &M) -> bool {
    (0..M::LANES)
        .filter(|&i| gate.extract(i))
        .fold(false, |acc, i| acc != mask.extract(i))
}
