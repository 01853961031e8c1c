//! Error types for the checked lanewise entry points.
//!
//! The per-lane operations never return errors: their preconditions are
//! checked with `debug_assert!` only. The fallible constructors on the
//! fallback backend (slice conversion, aligned load/store, swizzle
//! descriptors, lane casts) report problems through [`SimdError`].

use std::fmt;

/// Errors reported by the checked construction paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimdError {
    /// A slice did not hold the number of elements a vector needs.
    LengthMismatch {
        /// Number of elements the vector requires.
        expected: usize,
        /// Number of elements that were provided.
        actual: usize,
    },
    /// A pointer passed to an aligned access was not aligned.
    Misaligned {
        /// Address of the first element.
        address: usize,
        /// Required alignment in bytes.
        alignment: usize,
    },
    /// A swizzle descriptor referenced a lane outside the vector.
    InvalidLaneIndex {
        /// The offending lane index.
        index: usize,
        /// Number of lanes in the vector.
        lanes: usize,
    },
    /// Input validation error.
    ValidationError {
        /// Human-readable error message.
        message: String,
    },
}

impl fmt::Display for SimdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimdError::LengthMismatch { expected, actual } => write!(
                f,
                "Length mismatch: expected {} elements, got {}",
                expected, actual
            ),
            SimdError::Misaligned { address, alignment } => write!(
                f,
                "Misaligned access: address {:#x} is not aligned to {} bytes",
                address, alignment
            ),
            SimdError::InvalidLaneIndex { index, lanes } => write!(
                f,
                "Invalid lane index: {} (vector has {} lanes)",
                index, lanes
            ),
            SimdError::ValidationError { message } => {
                write!(f, "Validation error: {}", message)
            }
        }
    }
}

impl std::error::Error for SimdError {}

/// Result type alias for lanewise operations.
pub type Result<T> = std::result::Result<T, SimdError>;

/// Creates a length mismatch error.
pub fn length_error(expected: usize, actual: usize) -> SimdError {
    log::debug!("rejecting slice of {actual} elements, {expected} required");
    SimdError::LengthMismatch { expected, actual }
}

/// Creates a misalignment error.
pub fn alignment_error<T>(ptr: *const T, alignment: usize) -> SimdError {
    let address = ptr as usize;
    log::debug!("rejecting address {address:#x}, {alignment}-byte alignment required");
    SimdError::Misaligned { address, alignment }
}

/// Creates an invalid lane index error.
pub fn lane_index_error(index: usize, lanes: usize) -> SimdError {
    log::debug!("rejecting lane index {index} for a {lanes}-lane vector");
    SimdError::InvalidLaneIndex { index, lanes }
}

/// Creates a validation error.
pub fn validation_error(message: impl Into<String>) -> SimdError {
    let message = message.into();
    log::debug!("validation failed: {message}");
    SimdError::ValidationError { message }
}
