//! Monthly salary calculation.
//!
//! This module aggregates one employee's attendance marks and cash
//! advances for a target month into a [`PayrollSummary`]. The calculation
//! is a pure function of its inputs and the record store; it performs no
//! writes.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;

use crate::config::CafeConfig;
use crate::models::{AttendanceStatus, PayrollSummary};
use crate::store::OpsStore;

/// Returns the number of calendar days in the given month, or `None` for
/// an invalid year/month pair.
pub fn days_in_month(year: i32, month: u32) -> Option<u32> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let next_first = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?
    };
    Some(next_first.signed_duration_since(first).num_days() as u32)
}

/// Calculates the payroll summary for one employee and one month.
///
/// Months are 1-based (chrono convention). Returns `None` — an absence,
/// not an error — when the employee does not exist, holds the manager
/// role (manager pay is not modeled), the role has no configured rate, or
/// the year/month pair is invalid.
///
/// The steps, in order:
/// 1. Resolve the effective daily rate (custom override, else role rate).
/// 2. Count WORKED and OFF marks whose date matches the target year and
///    month field-by-field; marks for other months are ignored.
/// 3. Add bonus days: the long-month bonus when the month has exactly 31
///    days, and the full-attendance bonus when no off day was taken and
///    at least one day was worked. Bonuses are additive.
/// 4. Gross salary pays worked plus bonus days at the effective rate.
/// 5. The advance cap is `worked_days * rate * ratio` — bonus days are
///    deliberately excluded from the advance base.
/// 6. Sum advances whose timestamp falls in the target month.
/// 7. The remaining limit is floored at zero; the net payout is not, so
///    an over-advanced month surfaces as a negative payout.
pub fn calculate_salary(
    employee_id: &str,
    year: i32,
    month: u32,
    store: &dyn OpsStore,
    config: &CafeConfig,
) -> Option<PayrollSummary> {
    let employee = store.employee(employee_id)?;
    if employee.is_manager() {
        return None;
    }

    let effective_daily_rate = match employee.custom_rate {
        Some(rate) => rate,
        None => config.daily_rate(employee.role)?,
    };

    let month_days = days_in_month(year, month)?;

    let mut worked_days: u32 = 0;
    let mut off_days_taken: u32 = 0;
    for (date, status) in store.attendance_for(employee_id) {
        if date.year() == year && date.month() == month {
            match status {
                AttendanceStatus::Worked => worked_days += 1,
                AttendanceStatus::Off => off_days_taken += 1,
            }
        }
    }

    let bonus = config.bonus();
    let mut bonus_days: u32 = 0;
    if month_days == bonus.long_month_days {
        bonus_days += bonus.long_month_bonus_days;
    }
    if off_days_taken == 0 && worked_days > 0 {
        bonus_days += bonus.full_attendance_bonus_days;
    }

    let total_paid_days = worked_days + bonus_days;
    // normalize() drops the trailing zero scale the ratio multiplication
    // introduces, so amounts serialize as "2800000" rather than "2800000.0".
    let gross_salary = (Decimal::from(total_paid_days) * effective_daily_rate).normalize();

    let max_advance_limit =
        (Decimal::from(worked_days) * effective_daily_rate * config.advance_ratio()).normalize();

    let total_advanced = store
        .advances_for(employee_id)
        .iter()
        .filter(|adv| adv.date.year() == year && adv.date.month() == month)
        .map(|adv| adv.amount)
        .sum::<Decimal>()
        .normalize();

    let remaining_advance_limit = (max_advance_limit - total_advanced)
        .max(Decimal::ZERO)
        .normalize();
    let net_payout = (gross_salary - total_advanced).normalize();

    Some(PayrollSummary {
        worked_days,
        off_days_taken,
        bonus_days,
        effective_daily_rate,
        gross_salary,
        max_advance_limit,
        total_advanced,
        remaining_advance_limit,
        net_payout,
        currency: config.currency().to_string(),
    })
}
