//! Advance model.
//!
//! An advance is cash paid out against future wages. Records are
//! append-only; they disappear only when the owning employee is deleted.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single cash advance against future wages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Advance {
    /// Unique identifier for the advance.
    pub id: Uuid,
    /// The employee the advance was paid to.
    pub employee_id: String,
    /// The amount paid out. Always positive; validated before insertion.
    pub amount: Decimal,
    /// When the advance was paid out.
    pub date: DateTime<Utc>,
}
