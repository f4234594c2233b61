//! Attendance mark model.
//!
//! A mark maps an (employee, calendar date) pair to a status. The absence
//! of a mark is itself a state: the day is untracked.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The status recorded for a tracked day.
///
/// There is deliberately no third variant; an untracked day is represented
/// by the absence of a mark, not by a status value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AttendanceStatus {
    /// The employee worked this day.
    Worked,
    /// The employee took this day off.
    Off,
}

/// A single attendance record as exchanged with storage and the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceMark {
    /// The employee the mark belongs to.
    pub employee_id: String,
    /// The calendar date of the mark.
    pub date: NaiveDate,
    /// The recorded status.
    pub status: AttendanceStatus,
}
