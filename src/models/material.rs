//! Material catalog model.
//!
//! A material is purchased in packages: `package_size` is the quantity of
//! the base unit one package covers, and `package_price` is the cost of
//! one package. Usage proportional to the package yields a proportional
//! cost.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A material catalog entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Material {
    /// Unique identifier for the material.
    pub id: String,
    /// Display name (e.g., "Tra Lai").
    pub name: String,
    /// Unit of measure: a mass/volume unit ("g", "ml") or a count unit
    /// such as "bag", "box", "bottle" or "piece".
    pub unit: String,
    /// The quantity of the unit one package price covers. Defaults to 1.
    #[serde(default = "default_package_size")]
    pub package_size: Decimal,
    /// Monetary cost of one package.
    pub package_price: Decimal,
}

fn default_package_size() -> Decimal {
    Decimal::ONE
}
