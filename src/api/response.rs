//! Response types for the cafe operations API.
//!
//! This module defines the error response structures, the HTTP mapping
//! for engine errors, and the employee view that never exposes the
//! stored credential.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::OpsError;
use crate::models::{AttendanceStatus, Employee, Role};

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }

    /// Creates an invalid credentials response.
    pub fn invalid_credentials() -> Self {
        Self::new("INVALID_CREDENTIALS", "Invalid employee id or password")
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<OpsError> for ApiErrorResponse {
    fn from(error: OpsError) -> Self {
        match error {
            OpsError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            OpsError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            OpsError::EmployeeNotFound { id } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::new("EMPLOYEE_NOT_FOUND", format!("Employee not found: {}", id)),
            },
            OpsError::MaterialNotFound { id } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::new("MATERIAL_NOT_FOUND", format!("Material not found: {}", id)),
            },
            OpsError::Validation { message } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::validation_error(message),
            },
            OpsError::InvalidPackageSize {
                material_id,
                package_size,
            } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "INVALID_PACKAGE_SIZE",
                    format!("Invalid package size for material '{}'", material_id),
                    format!("Stored package size is {}", package_size),
                ),
            },
        }
    }
}

/// An employee as exposed over the API. The stored credential is never
/// serialized.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeView {
    /// Unique identifier for the employee.
    pub id: String,
    /// Display name.
    pub name: String,
    /// The employee's role.
    pub role: Role,
    /// Optional override for the role's default daily rate.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_rate: Option<Decimal>,
}

impl From<Employee> for EmployeeView {
    fn from(employee: Employee) -> Self {
        Self {
            id: employee.id,
            name: employee.name,
            role: employee.role,
            custom_rate: employee.custom_rate,
        }
    }
}

/// Response body for a toggle request: the new state for the day, with
/// `status: null` meaning the day is untracked again.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToggleResponse {
    /// The employee whose mark was toggled.
    pub employee_id: String,
    /// The toggled date.
    pub date: NaiveDate,
    /// The state after the toggle.
    pub status: Option<AttendanceStatus>,
}
