//! Attendance toggle state machine.
//!
//! A day cycles through three states on repeated clicks:
//! untracked -> WORKED -> OFF -> untracked. Future dates cannot be
//! marked; past dates of any age may be freely toggled.

use chrono::NaiveDate;

use crate::error::{OpsError, OpsResult};
use crate::models::AttendanceStatus;
use crate::store::OpsStore;

/// Returns the state that follows `current` in the toggle cycle.
pub fn next_attendance_state(current: Option<AttendanceStatus>) -> Option<AttendanceStatus> {
    match current {
        None => Some(AttendanceStatus::Worked),
        Some(AttendanceStatus::Worked) => Some(AttendanceStatus::Off),
        Some(AttendanceStatus::Off) => None,
    }
}

/// Advances the attendance state for one (employee, date) pair.
///
/// Returns the new state (`None` meaning the day is untracked again).
/// Rejects with a validation error — leaving the stored state untouched —
/// when `date` is strictly later than `today`. Rejects with
/// `EmployeeNotFound` for an unknown employee.
pub fn toggle_attendance(
    employee_id: &str,
    date: NaiveDate,
    today: NaiveDate,
    store: &dyn OpsStore,
) -> OpsResult<Option<AttendanceStatus>> {
    if store.employee(employee_id).is_none() {
        return Err(OpsError::EmployeeNotFound {
            id: employee_id.to_string(),
        });
    }
    if date > today {
        return Err(OpsError::validation(format!(
            "cannot mark attendance for future date {date}"
        )));
    }

    let next = next_attendance_state(store.attendance_mark(employee_id, date));
    match next {
        Some(status) => store.set_attendance_mark(employee_id, date, status),
        None => store.clear_attendance_mark(employee_id, date),
    }
    Ok(next)
}
