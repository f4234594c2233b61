//! Advance request validation.
//!
//! Validate-then-write: an advance is appended only after the amount has
//! been checked against the employee's remaining limit for the current
//! month. No partial effect occurs on rejection.

use chrono::{DateTime, Datelike, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::config::CafeConfig;
use crate::error::{OpsError, OpsResult};
use crate::models::Advance;
use crate::payroll::calculate_salary;
use crate::store::OpsStore;

/// Validates and records a cash advance for the month containing `now`.
///
/// Rejections, all surfaced before any write:
/// - non-positive amount;
/// - unknown employee;
/// - an employee outside payroll (manager role), who has no advance
///   limit to draw against;
/// - an amount exceeding the remaining advance limit computed by the
///   salary calculator for the current month.
///
/// On success the advance is appended with the `now` timestamp and
/// returned.
pub fn request_advance(
    employee_id: &str,
    amount: Decimal,
    now: DateTime<Utc>,
    store: &dyn OpsStore,
    config: &CafeConfig,
) -> OpsResult<Advance> {
    if amount <= Decimal::ZERO {
        return Err(OpsError::validation("advance amount must be positive"));
    }

    if store.employee(employee_id).is_none() {
        return Err(OpsError::EmployeeNotFound {
            id: employee_id.to_string(),
        });
    }

    let summary = calculate_salary(employee_id, now.year(), now.month(), store, config)
        .ok_or_else(|| OpsError::validation("payroll is not tracked for this employee"))?;

    if amount > summary.remaining_advance_limit {
        return Err(OpsError::validation(format!(
            "advance of {amount} exceeds remaining limit of {}",
            summary.remaining_advance_limit
        )));
    }

    let advance = Advance {
        id: Uuid::new_v4(),
        employee_id: employee_id.to_string(),
        amount,
        date: now,
    };
    store.insert_advance(advance.clone());
    Ok(advance)
}
