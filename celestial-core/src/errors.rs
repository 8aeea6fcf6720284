//! Error types shared by the celestial crates.
//!
//! Almost nothing on the numeric path fails: angles wrap, declinations clamp
//! and degenerate vectors turn into NaN. [`AstroError`] covers the places where
//! a caller hands in something we refuse to work with, such as an observer
//! location off the globe, or data that cannot be read.
//!
//! | Variant | Use Case |
//! |---------|----------|
//! | [`MathError`](AstroError::MathError) | Non-finite or out-of-range input |
//! | [`DataError`](AstroError::DataError) | Reading or parsing external data |
//! | [`CalculationError`](AstroError::CalculationError) | Algorithm failures |
//!
//! ```
//! use celestial_core::{AstroError, MathErrorKind};
//!
//! fn checked_latitude(deg: f64) -> Result<f64, AstroError> {
//!     if !(-90.0..=90.0).contains(&deg) {
//!         return Err(AstroError::math_error(
//!             "checked_latitude",
//!             MathErrorKind::OutOfRange,
//!             "latitude outside [-90, 90]",
//!         ));
//!     }
//!     Ok(deg)
//! }
//!
//! assert!(checked_latitude(91.0).is_err());
//! ```

use thiserror::Error;

/// Classification of mathematical errors.
#[derive(Debug, Clone, PartialEq)]
pub enum MathErrorKind {
    /// Input value is invalid for the operation.
    InvalidInput,
    /// Result is NaN or infinity.
    NotFinite,
    /// Value outside valid domain (e.g., latitude > 90°).
    OutOfRange,
}

#[derive(Error, Debug)]
pub enum AstroError {
    /// Numerical input rejected by a constructor or conversion.
    #[error("Math error in {operation} ({kind:?}): {message}")]
    MathError {
        operation: String,
        kind: MathErrorKind,
        message: String,
    },

    /// Data access failure (file I/O, parsing).
    #[error("Data error ({source_name} - {operation}): {message}")]
    DataError {
        source_name: String,
        operation: String,
        message: String,
    },

    #[error("Calculation error in {context}: {message}")]
    CalculationError { context: String, message: String },
}

/// Convenience alias for `Result<T, AstroError>`.
pub type AstroResult<T> = Result<T, AstroError>;

impl AstroError {
    pub fn math_error(operation: &str, kind: MathErrorKind, reason: &str) -> Self {
        Self::MathError {
            operation: operation.to_string(),
            kind,
            message: reason.to_string(),
        }
    }

    pub fn data_error(source_name: &str, operation: &str, reason: &str) -> Self {
        Self::DataError {
            source_name: source_name.to_string(),
            operation: operation.to_string(),
            message: reason.to_string(),
        }
    }

    pub fn calculation_error(context: &str, reason: &str) -> Self {
        Self::CalculationError {
            context: context.to_string(),
            message: reason.to_string(),
        }
    }

    /// True for failures a caller can retry with different data.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::DataError { .. })
    }
}
