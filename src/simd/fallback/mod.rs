//! Portable reference backend.
//!
//! [`Vector`] and [`Mask`] store their lanes in plain arrays and implement
//! the lane contract directly, so the emulation engine is the whole
//! implementation. Any `N` works; [`Packable`](crate::simd::traits::Packable)
//! is provided for the power-of-two widths from 2 to 128 lanes.

mod mask;
pub mod slice;
mod vector;

pub use mask::{Mask, SwizzleMask};
pub use vector::Vector;
