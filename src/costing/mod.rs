//! Inventory usage costing.
//!
//! This module contains the per-event cost computation over the material
//! catalog and the date-ranged usage report.

mod report;
mod usage;

pub use report::{UsageReportRow, usage_report};
pub use usage::{UsageMeasure, log_usage, usage_cost};
