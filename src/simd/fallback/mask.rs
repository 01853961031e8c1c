//! Array-backed masks and swizzle descriptors.

use std::ops::{BitAnd, BitOr, BitXor, Index, Not};

use crate::error::{lane_index_error, Result};
use crate::simd::emulation::logical;
use crate::simd::traits::SimdMask;

// ================================================================================================
// MASK
// ================================================================================================

/// `N` boolean lanes gating a [`Vector`](super::Vector) of the same length.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Mask<const N: usize> {
    lanes: [bool; N],
}

impl<const N: usize> Mask<N> {
    /// Mask with the first `count` lanes set, used for slice tails.
    #[inline(always)]
    pub fn first(count: usize) -> Self {
        debug_assert!(count <= N);
        Self {
            lanes: std::array::from_fn(|i| i < count),
        }
    }

    #[inline(always)]
    pub fn to_array(&self) -> [bool; N] {
        self.lanes
    }

    /// True iff every lane is set.
    #[inline(always)]
    pub fn all(&self) -> bool {
        self.lanes.iter().all(|&lane| lane)
    }

    /// True iff at least one lane is set.
    #[inline(always)]
    pub fn any(&self) -> bool {
        self.lanes.iter().any(|&lane| lane)
    }

    /// Number of set lanes.
    #[inline(always)]
    pub fn count(&self) -> usize {
        self.lanes.iter().filter(|&&lane| lane).count()
    }
}

impl<const N: usize> SimdMask for Mask<N> {
    const LANES: usize = N;

    #[inline(always)]
    fn splat(value: bool) -> Self {
        Self { lanes: [value; N] }
    }

    #[inline(always)]
    fn extract(&self, index: usize) -> bool {
        debug_assert!(index < N, "lane {index} out of range for {N} lanes");
        self.lanes[index]
    }

    #[inline(always)]
    fn insert(&mut self, index: usize, value: bool) -> &mut Self {
        debug_assert!(index < N, "lane {index} out of range for {N} lanes");
        self.lanes[index] = value;
        self
    }
}

impl<const N: usize> Default for Mask<N> {
    fn default() -> Self {
        Self::splat(false)
    }
}

impl<const N: usize> From<[bool; N]> for Mask<N> {
    #[inline(always)]
    fn from(lanes: [bool; N]) -> Self {
        Self { lanes }
    }
}

impl<const N: usize> Index<usize> for Mask<N> {
    type Output = bool;

    #[inline(always)]
    fn index(&self, index: usize) -> &bool {
        &self.lanes[index]
    }
}

impl<const N: usize> BitAnd for Mask<N> {
    type Output = Self;

    #[inline(always)]
    fn bitand(self, rhs: Self) -> Self {
        logical::land(&self, &rhs)
    }
}

impl<const N: usize> BitOr for Mask<N> {
    type Output = Self;

    #[inline(always)]
    fn bitor(self, rhs: Self) -> Self {
        logical::lor(&self, &rhs)
    }
}

impl<const N: usize> BitXor for Mask<N> {
    type Output = Self;

    #[inline(always)]
    fn bitxor(self, rhs: Self) -> Self {
        logical::lxor(&self, &rhs)
    }
}

impl<const N: usize> Not for Mask<N> {
    type Output = Self;

    #[inline(always)]
    fn not(self) -> Self {
        logical::lnot(&self)
    }
}

// ================================================================================================
// SWIZZLE DESCRIPTOR
// ================================================================================================

/// Validated lane indices for [`swizzle`](crate::simd::emulation::shuffle::swizzle).
///
/// Indices may repeat but each is below `N`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct SwizzleMask<const N: usize> {
    indices: [usize; N],
}

impl<const N: usize> SwizzleMask<N> {
    /// Checks every index against the lane count.
    pub fn try_new(indices: [usize; N]) -> Result<Self> {
        match indices.iter().find(|&&index| index >= N) {
            Some(&index) => Err(lane_index_error(index, N)),
            None => Ok(Self { indices }),
        }
    }

    /// The identity permutation.
    pub fn identity() -> Self {
        Self {
            indices: std::array::from_fn(|i| i),
        }
    }

    /// The lane-order reversal.
    pub fn reverse() -> Self {
        Self {
            indices: std::array::from_fn(|i| N - 1 - i),
        }
    }

    #[inline(always)]
    pub fn as_slice(&self) -> &[usize] {
        &self.indices
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SimdError;

    #[test]
    fn mask_helpers() {
        let m = Mask::from([true, false, true, true]);
        assert!(!m.all());
        assert!(m.any());
        assert_eq!(m.count(), 3);
        assert!(Mask::<4>::splat(true).all());
        assert!(!Mask::<4>::default().any());
        assert_eq!(Mask::<4>::first(2).to_array(), [true, true, false, false]);
    }

    #[test]
    fn mask_operators() {
        let a = Mask::from([true, true, false, false]);
        let b = Mask::from([true, false, true, false]);
        assert_eq!((a & b).to_array(), [true, false, false, false]);
        assert_eq!((a | b).to_array(), [true, true, true, false]);
        assert_eq!((a ^ b).to_array(), [false, true, true, false]);
        assert_eq!((!a).to_array(), [false, false, true, true]);
        assert!(a[0] && !a[3]);
    }

    #[test]
    fn swizzle_mask_validation() {
        assert!(SwizzleMask::try_new([3, 2, 0, 0]).is_ok());
        assert_eq!(
            SwizzleMask::try_new([0, 4, 1, 2]),
            Err(SimdError::InvalidLaneIndex { index: 4, lanes: 4 })
        );
        assert_eq!(SwizzleMask::<4>::reverse().as_slice(), &[3, 2, 1, 0]);
        assert_eq!(SwizzleMask::<3>::identity().as_slice(), &[0, 1, 2]);
    }
}
