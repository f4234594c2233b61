//! Error types for the cafe operations engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur across payroll and costing.

use thiserror::Error;

/// The main error type for the cafe operations engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use cafe_ops::error::OpsError;
///
/// let error = OpsError::ConfigNotFound {
///     path: "/missing/file.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/file.yaml");
/// ```
#[derive(Debug, Error)]
pub enum OpsError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Referenced employee id does not exist.
    #[error("Employee not found: {id}")]
    EmployeeNotFound {
        /// The employee id that was not found.
        id: String,
    },

    /// Referenced material id does not exist.
    #[error("Material not found: {id}")]
    MaterialNotFound {
        /// The material id that was not found.
        id: String,
    },

    /// Input was rejected before any write took place.
    #[error("Validation failed: {message}")]
    Validation {
        /// A human-readable reason for the rejection.
        message: String,
    },

    /// A material carries a zero or negative package size, which would
    /// divide by zero on the measured costing path.
    #[error("Invalid package size for material '{material_id}': {package_size}")]
    InvalidPackageSize {
        /// The offending material id.
        material_id: String,
        /// The stored package size.
        package_size: String,
    },
}

impl OpsError {
    /// Shorthand for an [`OpsError::Validation`] with the given reason.
    pub fn validation(message: impl Into<String>) -> Self {
        OpsError::Validation {
            message: message.into(),
        }
    }
}

/// A type alias for Results that return OpsError.
pub type OpsResult<T> = Result<T, OpsError>;
