//! Attendance and payroll calculation.
//!
//! This module contains the monthly salary calculator, the attendance
//! toggle state machine, and the advance request validator. All three
//! read records through the [`crate::store::OpsStore`] port; only the
//! toggle and the advance validator write, and only after validation.

mod advance;
mod attendance;
mod salary;

pub use advance::request_advance;
pub use attendance::{next_attendance_state, toggle_attendance};
pub use salary::{calculate_salary, days_in_month};
