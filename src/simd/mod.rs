//! Vector types, the lane contract and the emulation engine.
//!
//! - [`traits`]: the contract a backend satisfies and the consumer traits.
//! - [`element`]: the scalar lane types.
//! - [`emulation`]: the generic operation catalog, one lane loop per call.
//! - [`math`]: per-precision polynomial kernels used by the transcendentals.
//! - [`fallback`]: the array-backed reference backend and the slice layer.

pub mod element;
pub mod emulation;
pub mod fallback;
pub mod math;
pub mod traits;

pub use traits::{FloatVec, Packable, ParallelMath, SimdAdd, SimdMask, SimdMath, SimdVec};
