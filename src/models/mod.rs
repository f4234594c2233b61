//! Core data models for the cafe operations engine.
//!
//! This module contains all the domain models used throughout the engine.

mod advance;
mod attendance;
mod employee;
mod material;
mod payroll_summary;
mod usage;

pub use advance::Advance;
pub use attendance::{AttendanceMark, AttendanceStatus};
pub use employee::{Employee, Role};
pub use material::Material;
pub use payroll_summary::PayrollSummary;
pub use usage::UsageEvent;
