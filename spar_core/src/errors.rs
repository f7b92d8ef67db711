//! # Error Types
//!
//! Structured error types for spar_core. Each variant carries enough context
//! for a caller (CLI, dashboard, or script) to report exactly which input was
//! rejected and why.
//!
//! ## Example
//!
//! ```rust
//! use spar_core::errors::{CalcError, CalcResult};
//!
//! fn validate_span(span_m: f64) -> CalcResult<()> {
//!     if span_m <= 0.0 {
//!         return Err(CalcError::invalid_input(
//!             "span_m",
//!             span_m.to_string(),
//!             "Span must be positive",
//!         ));
//!     }
//!     Ok(())
//! }
//!
//! assert!(validate_span(-1.0).is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for spar_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for calculation operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// Tube cross-section is physically impossible (zero or negative wall).
    #[error("Invalid geometry for '{spar}': OD {outer_diameter_mm} mm, ID {inner_diameter_mm} mm - {reason}")]
    InvalidGeometry {
        spar: String,
        outer_diameter_mm: f64,
        inner_diameter_mm: f64,
        reason: String,
    },

    /// An input value is invalid (out of range, non-finite, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// A CSV table could not be parsed
    #[error("CSV format error on line {line}: {reason}")]
    CsvFormat { line: usize, reason: String },

    /// File I/O error
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },
}

impl CalcError {
    /// Create an InvalidGeometry error
    pub fn invalid_geometry(
        spar: impl Into<String>,
        outer_diameter_mm: f64,
        inner_diameter_mm: f64,
        reason: impl Into<String>,
    ) -> Self {
        CalcError::InvalidGeometry {
            spar: spar.into(),
            outer_diameter_mm,
            inner_diameter_mm,
            reason: reason.into(),
        }
    }

    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a CsvFormat error
    pub fn csv_format(line: usize, reason: impl Into<String>) -> Self {
        CalcError::CsvFormat {
            line,
            reason: reason.into(),
        }
    }

    /// Create a FileError
    pub fn file_error(operation: impl Into<String>, path: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a SerializationError
    pub fn serialization(reason: impl Into<String>) -> Self {
        CalcError::SerializationError {
            reason: reason.into(),
        }
    }

    /// True when the error came from validating user input rather than I/O
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            CalcError::InvalidGeometry { .. } | CalcError::InvalidInput { .. }
        )
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidGeometry { .. } => "INVALID_GEOMETRY",
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::CsvFormat { .. } => "CSV_FORMAT",
            CalcError::FileError { .. } => "FILE_ERROR",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
        }
    }
}
