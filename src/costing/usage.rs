//! Material usage costing.
//!
//! Two mutually exclusive cost formulas, selected by an explicit
//! [`UsageMeasure`] rather than inferred from which form field happened
//! to be filled:
//!
//! - by package count: `cost = quantity * package_price`;
//! - by raw weight/volume: `cost = weight / package_size * package_price`.

use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};
use uuid::Uuid;

use crate::error::{OpsError, OpsResult};
use crate::models::{Material, UsageEvent};
use crate::store::OpsStore;

/// The explicit costing choice for one usage event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UsageMeasure {
    /// A number of whole packages, costed at the package price.
    Packages(Decimal),
    /// A raw weight/volume in the material's base unit, costed as a
    /// proportional draw from a package of known size.
    Measured(Decimal),
}

impl UsageMeasure {
    fn value(&self) -> Decimal {
        match self {
            UsageMeasure::Packages(v) | UsageMeasure::Measured(v) => *v,
        }
    }
}

/// Computes the cost of one usage event against a material's catalog
/// entry, rounded to the nearest whole currency unit.
///
/// Rejects a non-positive measure, and guards the measured path against a
/// zero or negative `package_size` before dividing.
pub fn usage_cost(material: &Material, measure: UsageMeasure) -> OpsResult<Decimal> {
    if measure.value() <= Decimal::ZERO {
        return Err(OpsError::validation(
            "usage quantity or weight must be positive",
        ));
    }

    let cost = match measure {
        UsageMeasure::Packages(quantity) => quantity * material.package_price,
        UsageMeasure::Measured(weight) => {
            if material.package_size <= Decimal::ZERO {
                return Err(OpsError::InvalidPackageSize {
                    material_id: material.id.clone(),
                    package_size: material.package_size.to_string(),
                });
            }
            weight / material.package_size * material.package_price
        }
    };

    Ok(cost.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero))
}

/// Validates and records a usage event.
///
/// Resolves the material, computes the cost via [`usage_cost`], and
/// appends the event with the cost snapshotted on it. Later changes to
/// the material's price never alter the stored event.
pub fn log_usage(
    material_id: &str,
    date: NaiveDate,
    measure: UsageMeasure,
    logged_by: Option<String>,
    store: &dyn OpsStore,
) -> OpsResult<UsageEvent> {
    let material = store
        .material(material_id)
        .ok_or_else(|| OpsError::MaterialNotFound {
            id: material_id.to_string(),
        })?;

    let total_cost = usage_cost(&material, measure)?;

    let (quantity, weight) = match measure {
        UsageMeasure::Packages(q) => (Some(q), None),
        UsageMeasure::Measured(w) => (None, Some(w)),
    };

    let event = UsageEvent {
        id: Uuid::new_v4(),
        material_id: material.id,
        date,
        quantity,
        weight,
        total_cost,
        logged_by,
    };
    store.insert_usage(event.clone());
    Ok(event)
}
