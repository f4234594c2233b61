//! Usage reporting.
//!
//! Joins usage events with their material catalog entries for a
//! date-ranged cost report, newest first.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::UsageEvent;
use crate::store::OpsStore;

/// One row of the usage report: the event plus its material's catalog
/// fields at report time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UsageReportRow {
    /// The usage event, with its snapshotted cost.
    #[serde(flatten)]
    pub event: UsageEvent,
    /// The material's display name.
    pub material_name: String,
    /// The material's unit of measure.
    pub unit: String,
    /// The material's current package size.
    pub package_size: Decimal,
    /// The material's current package price. Historical rows keep their
    /// own `total_cost` even when this has since changed.
    pub package_price: Decimal,
}

/// Builds the usage report for an optional inclusive date range.
///
/// Rows are ordered newest first. Events whose material no longer
/// resolves are skipped; the store forbids deleting referenced materials,
/// so in practice every row joins.
pub fn usage_report(
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
    store: &dyn OpsStore,
) -> Vec<UsageReportRow> {
    store
        .usage_between(start, end)
        .into_iter()
        .filter_map(|event| {
            let material = store.material(&event.material_id)?;
            Some(UsageReportRow {
                event,
                material_name: material.name,
                unit: material.unit,
                package_size: material.package_size,
                package_price: material.package_price,
            })
        })
        .collect()
}
