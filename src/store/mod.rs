//! Persistence port for the cafe operations engine.
//!
//! The calculators in [`crate::payroll`] and [`crate::costing`] read and
//! write records only through the [`OpsStore`] trait, never through
//! ambient state. [`MemoryStore`] is the shipped implementation; a
//! relational backend would implement the same trait.

mod memory;

use std::collections::HashMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::error::OpsResult;
use crate::models::{Advance, AttendanceStatus, Employee, Material, Role, UsageEvent};

pub use memory::MemoryStore;

/// A partial update to an employee record.
///
/// `None` fields are left unchanged. `custom_rate` is doubly optional so
/// that an explicit null can clear an existing override.
#[derive(Debug, Clone, Default)]
pub struct EmployeeUpdate {
    /// New display name.
    pub name: Option<String>,
    /// New role.
    pub role: Option<Role>,
    /// New password.
    pub password: Option<String>,
    /// `Some(Some(rate))` sets an override, `Some(None)` clears it,
    /// `None` leaves it untouched.
    pub custom_rate: Option<Option<Decimal>>,
}

/// A partial update to a material catalog entry.
#[derive(Debug, Clone, Default)]
pub struct MaterialUpdate {
    /// New display name.
    pub name: Option<String>,
    /// New unit of measure.
    pub unit: Option<String>,
    /// New package size.
    pub package_size: Option<Decimal>,
    /// New package price. Historical usage events keep their stored cost.
    pub package_price: Option<Decimal>,
}

/// Per-entity read/insert/update/delete methods over the record store.
///
/// Read methods return owned copies so implementations are free to guard
/// their state with locks. All writes are single-record; there is no
/// cross-record transaction requirement.
pub trait OpsStore: Send + Sync {
    /// Returns all employees.
    fn employees(&self) -> Vec<Employee>;

    /// Returns one employee by id.
    fn employee(&self, id: &str) -> Option<Employee>;

    /// Inserts a new employee.
    fn insert_employee(&self, employee: Employee);

    /// Applies a partial update to an employee.
    fn update_employee(&self, id: &str, update: EmployeeUpdate) -> OpsResult<Employee>;

    /// Deletes an employee, cascading to their attendance marks and
    /// advances.
    fn delete_employee(&self, id: &str) -> OpsResult<()>;

    /// Returns all attendance marks for an employee, keyed by date.
    fn attendance_for(&self, employee_id: &str) -> HashMap<NaiveDate, AttendanceStatus>;

    /// Returns the mark for one (employee, date) pair, if any.
    fn attendance_mark(&self, employee_id: &str, date: NaiveDate) -> Option<AttendanceStatus>;

    /// Creates or overwrites the mark for one (employee, date) pair.
    fn set_attendance_mark(&self, employee_id: &str, date: NaiveDate, status: AttendanceStatus);

    /// Removes the mark for one (employee, date) pair, returning the day
    /// to the untracked state.
    fn clear_attendance_mark(&self, employee_id: &str, date: NaiveDate);

    /// Returns all advances for an employee.
    fn advances_for(&self, employee_id: &str) -> Vec<Advance>;

    /// Appends an advance record.
    fn insert_advance(&self, advance: Advance);

    /// Returns all materials.
    fn materials(&self) -> Vec<Material>;

    /// Returns one material by id.
    fn material(&self, id: &str) -> Option<Material>;

    /// Inserts a new material.
    fn insert_material(&self, material: Material);

    /// Applies a partial update to a material.
    fn update_material(&self, id: &str, update: MaterialUpdate) -> OpsResult<Material>;

    /// Deletes a material. Fails while usage events still reference it.
    fn delete_material(&self, id: &str) -> OpsResult<()>;

    /// Appends a usage event with its already-computed cost.
    fn insert_usage(&self, event: UsageEvent);

    /// Returns usage events within an optional inclusive date range,
    /// newest first.
    fn usage_between(&self, start: Option<NaiveDate>, end: Option<NaiveDate>) -> Vec<UsageEvent>;
}
