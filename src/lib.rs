//! Portable SIMD vectors with bit-exact scalar emulation.
//!
//! `lanewise` models a "vector of `N` scalars" through a small lane contract
//! ([`SimdVec`], [`SimdMask`]) and implements the full operation catalog on
//! top of it as generic lane loops in [`simd::emulation`]: arithmetic,
//! comparisons, bitwise logic, shifts and rotates, reductions,
//! gather/scatter, pack/unpack, saturating arithmetic and polynomial
//! transcendentals. Every operation comes with masked and in-place forms.
//!
//! [`Vector`] is the array-backed reference backend. The slice layer runs
//! the same kernels over arbitrary-length `f32`/`f64` slices, optionally on
//! rayon's thread pool.
//!
//! # Usage
//!
//! ```rust
//! use lanewise::simd::emulation::{arithmetic, reduce, saturate};
//! use lanewise::{Mask, SimdVec, Vector};
//!
//! let a = Vector::from([1u32, 2, 3, 4, 5, 6, 7, 8]);
//! assert_eq!(reduce::reduce_add(&a), 36);
//!
//! let mask = Mask::from([true, false, true, false, true, false, true, false]);
//! let b = arithmetic::add_scalar_masked(&mask, &a, 10);
//! assert_eq!(b.to_array(), [11, 2, 13, 4, 15, 6, 17, 8]);
//!
//! let bytes = Vector::from([127i8, -128, 5, 0]);
//! let sat = saturate::add_saturated(&bytes, &Vector::splat(1));
//! assert_eq!(sat.to_array(), [127, -127, 6, 1]);
//! ```
//!
//! # Preconditions
//!
//! Hot-path operations return plain values. Misaligned aligned accesses,
//! out-of-range swizzle indices and oversized shift counts are caught by
//! debug assertions only; integer division by zero panics. The checked
//! constructors on [`Vector`] and [`SwizzleMask`] report problems through
//! [`SimdError`].

pub mod error;
pub mod simd;

pub use error::{Result, SimdError};
pub use simd::element::{Element, FloatElement, IntElement};
pub use simd::fallback::{Mask, SwizzleMask, Vector};
pub use simd::traits::{
    FloatVec, Packable, ParallelMath, SimdAdd, SimdMask, SimdMath, SimdVec,
};

// ================================================================================================
// SLICE LAYER TUNING
// ================================================================================================

/// Vector width, in lanes, used by the slice layer.
pub const SLICE_LANES: usize = 8;

/// Slices at or below this length are processed on the calling thread.
pub const PARALLEL_SIMD_THRESHOLD: usize = 262_144;

/// Elements per rayon task in the parallel slice paths.
pub const PARALLEL_CHUNK_SIZE: usize = 16_384;
