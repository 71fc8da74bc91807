//! Error types for halation-filter.

use thiserror::Error;

/// Errors from filter input validation.
///
/// Color arithmetic itself never fails: overflow and sign spill in multiply
/// and noise are part of those filters' contract, not errors.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum FilterError {
    /// Input planes that must align have different dimensions.
    #[error("invalid dimensions: expected {expected:?}, got {actual:?}")]
    InvalidDimensions {
        /// Dimensions of the plane that sets the output size.
        expected: (u32, u32),
        /// Dimensions of the mismatched plane.
        actual: (u32, u32),
    },

    /// A scalar parameter is outside its usable range.
    #[error("invalid parameter {name}: {value}")]
    InvalidParameter {
        /// Parameter name as it appears in the operation signature.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },
}
