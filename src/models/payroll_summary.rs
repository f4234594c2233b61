//! Payroll summary model.
//!
//! The output of the salary calculator for one employee and one
//! (year, month) pair.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The aggregated payroll figures for one employee in one month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayrollSummary {
    /// Days marked WORKED in the target month.
    pub worked_days: u32,
    /// Days marked OFF in the target month.
    pub off_days_taken: u32,
    /// Extra paid days from month-length and full-attendance incentives.
    pub bonus_days: u32,
    /// The employee's custom rate if set, else the role's default rate.
    pub effective_daily_rate: Decimal,
    /// `(worked_days + bonus_days) * effective_daily_rate`.
    pub gross_salary: Decimal,
    /// Advance cap for the month. Bonus days are excluded from the base:
    /// advances draw against work actually performed.
    pub max_advance_limit: Decimal,
    /// Sum of advances whose timestamp falls in the target month.
    pub total_advanced: Decimal,
    /// `max(0, max_advance_limit - total_advanced)`. Never negative.
    pub remaining_advance_limit: Decimal,
    /// `gross_salary - total_advanced`. May go negative when advances
    /// exceed gross salary; that over-advanced state is surfaced, not
    /// floored away.
    pub net_payout: Decimal,
    /// Currency tag from configuration (e.g., "VND").
    pub currency: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_serializes_decimals_as_strings() {
        let summary = PayrollSummary {
            worked_days: 20,
            off_days_taken: 0,
            bonus_days: 3,
            effective_daily_rate: Decimal::from(200_000),
            gross_salary: Decimal::from(4_600_000),
            max_advance_limit: Decimal::from(2_800_000),
            total_advanced: Decimal::ZERO,
            remaining_advance_limit: Decimal::from(2_800_000),
            net_payout: Decimal::from(4_600_000),
            currency: "VND".to_string(),
        };

        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["worked_days"], 20);
        assert_eq!(json["gross_salary"], "4600000");
        assert_eq!(json["currency"], "VND");
    }

    #[test]
    fn test_summary_round_trip() {
        let summary = PayrollSummary {
            worked_days: 10,
            off_days_taken: 2,
            bonus_days: 1,
            effective_daily_rate: Decimal::from(160_000),
            gross_salary: Decimal::from(1_760_000),
            max_advance_limit: Decimal::from(1_120_000),
            total_advanced: Decimal::from(2_000_000),
            remaining_advance_limit: Decimal::ZERO,
            net_payout: Decimal::from(-240_000),
            currency: "VND".to_string(),
        };

        let json = serde_json::to_string(&summary).unwrap();
        let deserialized: PayrollSummary = serde_json::from_str(&json).unwrap();
        assert_eq!(summary, deserialized);
        // Over-advanced months keep their negative payout.
        assert!(deserialized.net_payout < Decimal::ZERO);
    }
}
