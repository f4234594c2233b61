//! Employee model and related types.
//!
//! This module defines the Employee struct and Role enum for representing
//! staff members in the cafe operations system.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The closed set of staff roles.
///
/// The role determines the default daily pay rate (looked up from
/// configuration) and whether payroll is computed at all: managers are
/// excluded from the salary calculator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Drink preparation staff.
    Bartender,
    /// Floor/serving staff.
    Server,
    /// Manager. Not part of payroll; pay is not modeled.
    Manager,
}

impl Role {
    /// Returns the role's identifier as used in configuration files.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Bartender => "bartender",
            Role::Server => "server",
            Role::Manager => "manager",
        }
    }
}

/// Represents a staff member.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier for the employee.
    pub id: String,
    /// Display name.
    pub name: String,
    /// The employee's role.
    pub role: Role,
    /// Optional override for the role's default daily rate.
    #[serde(default)]
    pub custom_rate: Option<Decimal>,
    /// Plaintext login credential. Whether it is checked at login is a
    /// per-role configuration policy.
    #[serde(default)]
    pub password: Option<String>,
}

impl Employee {
    /// Returns true if the employee holds the manager role.
    ///
    /// # Examples
    ///
    /// ```
    /// use cafe_ops::models::{Employee, Role};
    ///
    /// let manager = Employee {
    ///     id: "m1".to_string(),
    ///     name: "Quan Ly".to_string(),
    ///     role: Role::Manager,
    ///     custom_rate: None,
    ///     password: Some("admin".to_string()),
    /// };
    /// assert!(manager.is_manager());
    /// ```
    pub fn is_manager(&self) -> bool {
        self.role == Role::Manager
    }
}
