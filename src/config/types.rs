//! Configuration types for the cafe operations engine.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files: the role rate table
//! and the payroll/credential policy knobs.

use rust_decimal::Decimal;
use serde::Deserialize;
use std::collections::HashMap;

use crate::models::Role;

/// Pay information for a single role.
#[derive(Debug, Clone, Deserialize)]
pub struct RoleRate {
    /// Human-readable label for the role.
    pub label: String,
    /// The role's default daily rate.
    pub daily_rate: Decimal,
}

/// Role configuration file structure (`roles.yaml`).
#[derive(Debug, Clone, Deserialize)]
pub struct RolesConfig {
    /// Map of role to its label and default daily rate.
    pub roles: HashMap<Role, RoleRate>,
    /// Currency tag attached to payroll summaries (e.g., "VND").
    pub currency: String,
}

/// Bonus day rules applied on top of worked days.
#[derive(Debug, Clone, Deserialize)]
pub struct BonusPolicy {
    /// Month length that triggers the long-month bonus.
    pub long_month_days: u32,
    /// Bonus days granted when the month has `long_month_days` days.
    pub long_month_bonus_days: u32,
    /// Bonus days granted for a month with zero off days and at least
    /// one worked day.
    pub full_attendance_bonus_days: u32,
}

/// Advance cap policy.
#[derive(Debug, Clone, Deserialize)]
pub struct AdvancePolicy {
    /// Fraction of the value of worked days (bonus days excluded) that
    /// may be advanced within the month.
    pub max_ratio: Decimal,
}

/// Per-role credential policy.
///
/// One deployment checked passwords for managers only, another for every
/// role; the policy makes that a configuration choice instead of a code
/// branch.
#[derive(Debug, Clone, Deserialize)]
pub struct CredentialPolicy {
    /// Roles mapped to whether login requires a password check.
    pub require: HashMap<Role, bool>,
}

/// Policy configuration file structure (`policies.yaml`).
#[derive(Debug, Clone, Deserialize)]
pub struct PolicyConfig {
    /// Bonus day rules.
    pub bonus: BonusPolicy,
    /// Advance cap policy.
    pub advance: AdvancePolicy,
    /// Per-role credential policy.
    pub credentials: CredentialPolicy,
}

/// The complete cafe configuration loaded from YAML files.
#[derive(Debug, Clone)]
pub struct CafeConfig {
    roles: RolesConfig,
    policies: PolicyConfig,
}

impl CafeConfig {
    /// Creates a new CafeConfig from its component parts.
    pub fn new(roles: RolesConfig, policies: PolicyConfig) -> Self {
        Self { roles, policies }
    }

    /// Returns the default daily rate for a role, if configured.
    pub fn daily_rate(&self, role: Role) -> Option<Decimal> {
        self.roles.roles.get(&role).map(|r| r.daily_rate)
    }

    /// Returns the human-readable label for a role, if configured.
    pub fn role_label(&self, role: Role) -> Option<&str> {
        self.roles.roles.get(&role).map(|r| r.label.as_str())
    }

    /// Returns the currency tag.
    pub fn currency(&self) -> &str {
        &self.roles.currency
    }

    /// Returns the bonus day rules.
    pub fn bonus(&self) -> &BonusPolicy {
        &self.policies.bonus
    }

    /// Returns the advance cap ratio.
    pub fn advance_ratio(&self) -> Decimal {
        self.policies.advance.max_ratio
    }

    /// Returns true if login for this role must present a matching
    /// password. Roles absent from the policy default to not requiring
    /// one.
    pub fn requires_credential(&self, role: Role) -> bool {
        self.policies
            .credentials
            .require
            .get(&role)
            .copied()
            .unwrap_or(false)
    }
}
