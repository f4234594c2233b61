//! Usage event model.
//!
//! A usage event logs a draw from the materials inventory. The monetary
//! cost is computed once at insertion time and stored on the event; later
//! catalog price changes never alter historical events.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A logged draw from inventory with its snapshotted cost.
///
/// Exactly one of `quantity` (whole packages) or `weight` (raw amount in
/// the material's base unit) is set, reflecting which costing formula
/// produced `total_cost`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UsageEvent {
    /// Unique identifier for the event.
    pub id: Uuid,
    /// The material drawn from.
    pub material_id: String,
    /// The calendar date of the usage.
    pub date: NaiveDate,
    /// Number of whole packages, when costed by package count.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<Decimal>,
    /// Raw weight/volume in the base unit, when costed proportionally.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<Decimal>,
    /// The cost computed at insertion time, rounded to a whole currency
    /// unit. Immutable once stored.
    pub total_cost: Decimal,
    /// The employee who logged the usage, if known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logged_by: Option<String>,
}
