//! In-memory implementation of the persistence port.
//!
//! Records live in `RwLock`-guarded maps. Suitable for the
//! single-user-at-a-time usage model; last writer wins when the store is
//! shared.

use std::collections::HashMap;
use std::sync::RwLock;

use chrono::NaiveDate;

use crate::error::{OpsError, OpsResult};
use crate::models::{Advance, AttendanceStatus, Employee, Material, UsageEvent};

use super::{EmployeeUpdate, MaterialUpdate, OpsStore};

#[derive(Debug, Default)]
struct Records {
    employees: HashMap<String, Employee>,
    attendance: HashMap<String, HashMap<NaiveDate, AttendanceStatus>>,
    advances: HashMap<String, Vec<Advance>>,
    materials: HashMap<String, Material>,
    usage: Vec<UsageEvent>,
}

/// An in-memory [`OpsStore`].
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: RwLock<Records>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, Records> {
        self.records.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, Records> {
        self.records.write().unwrap_or_else(|e| e.into_inner())
    }
}

impl OpsStore for MemoryStore {
    fn employees(&self) -> Vec<Employee> {
        let mut employees: Vec<Employee> = self.read().employees.values().cloned().collect();
        employees.sort_by(|a, b| a.id.cmp(&b.id));
        employees
    }

    fn employee(&self, id: &str) -> Option<Employee> {
        self.read().employees.get(id).cloned()
    }

    fn insert_employee(&self, employee: Employee) {
        self.write().employees.insert(employee.id.clone(), employee);
    }

    fn update_employee(&self, id: &str, update: EmployeeUpdate) -> OpsResult<Employee> {
        let mut records = self.write();
        let employee = records
            .employees
            .get_mut(id)
            .ok_or_else(|| OpsError::EmployeeNotFound { id: id.to_string() })?;

        if let Some(name) = update.name {
            employee.name = name;
        }
        if let Some(role) = update.role {
            employee.role = role;
        }
        if let Some(password) = update.password {
            employee.password = Some(password);
        }
        if let Some(custom_rate) = update.custom_rate {
            employee.custom_rate = custom_rate;
        }

        Ok(employee.clone())
    }

    fn delete_employee(&self, id: &str) -> OpsResult<()> {
        let mut records = self.write();
        if records.employees.remove(id).is_none() {
            return Err(OpsError::EmployeeNotFound { id: id.to_string() });
        }
        // Cascade: the employee's attendance and advances go with them.
        records.attendance.remove(id);
        records.advances.remove(id);
        Ok(())
    }

    fn attendance_for(&self, employee_id: &str) -> HashMap<NaiveDate, AttendanceStatus> {
        self.read()
            .attendance
            .get(employee_id)
            .cloned()
            .unwrap_or_default()
    }

    fn attendance_mark(&self, employee_id: &str, date: NaiveDate) -> Option<AttendanceStatus> {
        self.read()
            .attendance
            .get(employee_id)
            .and_then(|marks| marks.get(&date))
            .copied()
    }

    fn set_attendance_mark(&self, employee_id: &str, date: NaiveDate, status: AttendanceStatus) {
        self.write()
            .attendance
            .entry(employee_id.to_string())
            .or_default()
            .insert(date, status);
    }

    fn clear_attendance_mark(&self, employee_id: &str, date: NaiveDate) {
        let mut records = self.write();
        if let Some(marks) = records.attendance.get_mut(employee_id) {
            marks.remove(&date);
            if marks.is_empty() {
                records.attendance.remove(employee_id);
            }
        }
    }

    fn advances_for(&self, employee_id: &str) -> Vec<Advance> {
        self.read()
            .advances
            .get(employee_id)
            .cloned()
            .unwrap_or_default()
    }

    fn insert_advance(&self, advance: Advance) {
        self.write()
            .advances
            .entry(advance.employee_id.clone())
            .or_default()
            .push(advance);
    }

    fn materials(&self) -> Vec<Material> {
        let mut materials: Vec<Material> = self.read().materials.values().cloned().collect();
        materials.sort_by(|a, b| a.id.cmp(&b.id));
        materials
    }

    fn material(&self, id: &str) -> Option<Material> {
        self.read().materials.get(id).cloned()
    }

    fn insert_material(&self, material: Material) {
        self.write().materials.insert(material.id.clone(), material);
    }

    fn update_material(&self, id: &str, update: MaterialUpdate) -> OpsResult<Material> {
        let mut records = self.write();
        let material = records
            .materials
            .get_mut(id)
            .ok_or_else(|| OpsError::MaterialNotFound { id: id.to_string() })?;

        if let Some(name) = update.name {
            material.name = name;
        }
        if let Some(unit) = update.unit {
            material.unit = unit;
        }
        if let Some(package_size) = update.package_size {
            material.package_size = package_size;
        }
        if let Some(package_price) = update.package_price {
            material.package_price = package_price;
        }

        Ok(material.clone())
    }

    fn delete_material(&self, id: &str) -> OpsResult<()> {
        let mut records = self.write();
        if !records.materials.contains_key(id) {
            return Err(OpsError::MaterialNotFound { id: id.to_string() });
        }
        if records.usage.iter().any(|e| e.material_id == id) {
            return Err(OpsError::validation(
                "material has recorded usage and cannot be deleted",
            ));
        }
        records.materials.remove(id);
        Ok(())
    }

    fn insert_usage(&self, event: UsageEvent) {
        self.write().usage.push(event);
    }

    fn usage_between(&self, start: Option<NaiveDate>, end: Option<NaiveDate>) -> Vec<UsageEvent> {
        let records = self.read();
        let mut events: Vec<UsageEvent> = records
            .usage
            .iter()
            .filter(|e| start.is_none_or(|s| e.date >= s))
            .filter(|e| end.is_none_or(|s| e.date <= s))
            .cloned()
            .collect();
        events.sort_by(|a, b| b.date.cmp(&a.date));
        events
    }
}
