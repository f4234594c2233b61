//! Request types for the cafe operations API.
//!
//! This module defines the JSON request structures and the boundary
//! validation that turns loosely-shaped form input into the engine's
//! strict domain types.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

use crate::costing::UsageMeasure;
use crate::error::{OpsError, OpsResult};
use crate::models::Role;
use crate::store::{EmployeeUpdate, MaterialUpdate};

/// Distinguishes an absent field from an explicit `null`, so a partial
/// update can clear an optional value.
fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Request body for `POST /login`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    /// The employee attempting to log in.
    pub employee_id: String,
    /// The presented password, if any.
    #[serde(default)]
    pub password: Option<String>,
}

/// Request body for `POST /employees`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateEmployeeRequest {
    /// Display name.
    pub name: String,
    /// The employee's role.
    pub role: Role,
    /// Optional override for the role's default daily rate.
    #[serde(default)]
    pub custom_rate: Option<Decimal>,
    /// Optional login credential.
    #[serde(default)]
    pub password: Option<String>,
}

/// Request body for `PUT /employees/{id}`. Omitted fields are left
/// unchanged; an explicit `"custom_rate": null` clears the override.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateEmployeeRequest {
    /// New display name.
    #[serde(default)]
    pub name: Option<String>,
    /// New role.
    #[serde(default)]
    pub role: Option<Role>,
    /// New password.
    #[serde(default)]
    pub password: Option<String>,
    /// New custom rate, or explicit null to clear it.
    #[serde(default, deserialize_with = "double_option")]
    pub custom_rate: Option<Option<Decimal>>,
}

impl From<UpdateEmployeeRequest> for EmployeeUpdate {
    fn from(req: UpdateEmployeeRequest) -> Self {
        EmployeeUpdate {
            name: req.name,
            role: req.role,
            password: req.password,
            custom_rate: req.custom_rate,
        }
    }
}

/// Request body for `POST /attendance/toggle`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToggleAttendanceRequest {
    /// The employee whose day is clicked.
    pub employee_id: String,
    /// The clicked calendar date.
    pub date: NaiveDate,
}

/// Request body for `POST /advances`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdvanceRequest {
    /// The employee requesting the advance.
    pub employee_id: String,
    /// The requested amount.
    pub amount: Decimal,
}

/// Query parameters for `GET /payroll/{employee_id}`.
#[derive(Debug, Clone, Deserialize)]
pub struct PayrollQuery {
    /// Target calendar year.
    pub year: i32,
    /// Target month, 1-12.
    pub month: u32,
}

impl PayrollQuery {
    /// Rejects out-of-range months before the calculator sees them.
    pub fn validate(&self) -> OpsResult<()> {
        if !(1..=12).contains(&self.month) {
            return Err(OpsError::validation(format!(
                "month must be between 1 and 12, got {}",
                self.month
            )));
        }
        Ok(())
    }
}

/// Request body for `POST /materials`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateMaterialRequest {
    /// Display name.
    pub name: String,
    /// Unit of measure.
    pub unit: String,
    /// The quantity one package covers. Defaults to 1.
    #[serde(default)]
    pub package_size: Option<Decimal>,
    /// Monetary cost of one package.
    pub package_price: Decimal,
}

impl CreateMaterialRequest {
    /// Validates the catalog constraints: package size at least 1,
    /// non-negative price.
    pub fn validate(&self) -> OpsResult<()> {
        if let Some(size) = self.package_size {
            if size < Decimal::ONE {
                return Err(OpsError::validation("package_size must be at least 1"));
            }
        }
        if self.package_price < Decimal::ZERO {
            return Err(OpsError::validation("package_price must not be negative"));
        }
        Ok(())
    }
}

/// Request body for `PUT /materials/{id}`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateMaterialRequest {
    /// New display name.
    #[serde(default)]
    pub name: Option<String>,
    /// New unit of measure.
    #[serde(default)]
    pub unit: Option<String>,
    /// New package size.
    #[serde(default)]
    pub package_size: Option<Decimal>,
    /// New package price.
    #[serde(default)]
    pub package_price: Option<Decimal>,
}

impl UpdateMaterialRequest {
    /// Validates the same catalog constraints as creation.
    pub fn validate(&self) -> OpsResult<()> {
        if let Some(size) = self.package_size {
            if size < Decimal::ONE {
                return Err(OpsError::validation("package_size must be at least 1"));
            }
        }
        if let Some(price) = self.package_price {
            if price < Decimal::ZERO {
                return Err(OpsError::validation("package_price must not be negative"));
            }
        }
        Ok(())
    }
}

impl From<UpdateMaterialRequest> for MaterialUpdate {
    fn from(req: UpdateMaterialRequest) -> Self {
        MaterialUpdate {
            name: req.name,
            unit: req.unit,
            package_size: req.package_size,
            package_price: req.package_price,
        }
    }
}

/// Request body for `POST /usage`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogUsageRequest {
    /// The material drawn from.
    pub material_id: String,
    /// The calendar date of the usage.
    pub date: NaiveDate,
    /// Number of whole packages. Mutually exclusive with `weight`.
    #[serde(default)]
    pub quantity: Option<Decimal>,
    /// Raw weight/volume in the base unit. Mutually exclusive with
    /// `quantity`.
    #[serde(default)]
    pub weight: Option<Decimal>,
    /// The employee logging the usage.
    #[serde(default)]
    pub logged_by: Option<String>,
}

impl LogUsageRequest {
    /// Resolves the explicit costing measure. Exactly one of `quantity`
    /// and `weight` must be set; anything else is a validation error
    /// rather than a guess.
    pub fn measure(&self) -> OpsResult<UsageMeasure> {
        match (self.quantity, self.weight) {
            (Some(quantity), None) => Ok(UsageMeasure::Packages(quantity)),
            (None, Some(weight)) => Ok(UsageMeasure::Measured(weight)),
            (Some(_), Some(_)) => Err(OpsError::validation(
                "provide either quantity or weight, not both",
            )),
            (None, None) => Err(OpsError::validation(
                "either quantity or weight is required",
            )),
        }
    }
}

/// Query parameters for `GET /reports`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReportQuery {
    /// Inclusive start of the date range.
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    /// Inclusive end of the date range.
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
}
