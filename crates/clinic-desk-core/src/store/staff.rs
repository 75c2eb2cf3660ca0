//! Staff store operations.

use chrono::NaiveDate;

use super::{schema, Store, StoreError, StoreResult};
use crate::ids;
use crate::models::{Staff, StaffStatus};

/// HR form fields for a new staff member.
#[derive(Debug, Clone, Default)]
pub struct NewStaff {
    pub name: String,
    pub role: String,
    pub phone: String,
    pub email: String,
    pub date_of_birth: Option<NaiveDate>,
    pub join_date: Option<NaiveDate>,
    pub monthly_salary: f64,
}

impl Store {
    /// Load the full staff collection.
    pub fn list_staff(&self) -> StoreResult<Vec<Staff>> {
        self.read_collection(schema::STAFF)
    }

    /// Create a new active staff member.
    pub fn create_staff(&self, form: NewStaff) -> StoreResult<Staff> {
        if form.name.trim().is_empty() {
            return Err(StoreError::Validation("staff name is required".into()));
        }
        if form.role.trim().is_empty() {
            return Err(StoreError::Validation("staff role is required".into()));
        }

        let mut staff = self.list_staff()?;
        let id = ids::next_id(ids::STAFF_PREFIX, staff.iter().map(|s| s.id.as_str()));
        let mut member = Staff::new(id, form.name, form.role, form.phone, form.email);
        member.date_of_birth = form.date_of_birth;
        if let Some(join_date) = form.join_date {
            member.join_date = join_date;
        }
        member.monthly_salary = form.monthly_salary;

        staff.push(member.clone());
        self.write_collection(schema::STAFF, &staff)?;
        Ok(member)
    }

    /// Apply an edited form to an existing staff member. Status and the
    /// leave start date are untouched; an absent join date keeps the
    /// stored one.
    pub fn edit_staff(&self, id: &str, form: NewStaff) -> StoreResult<Staff> {
        if form.name.trim().is_empty() {
            return Err(StoreError::Validation("staff name is required".into()));
        }
        if form.role.trim().is_empty() {
            return Err(StoreError::Validation("staff role is required".into()));
        }

        let mut member = self
            .get_staff(id)?
            .ok_or_else(|| StoreError::NotFound(format!("staff {}", id)))?;
        member.name = form.name;
        member.role = form.role;
        member.phone = form.phone;
        member.email = form.email;
        member.date_of_birth = form.date_of_birth;
        if let Some(join_date) = form.join_date {
            member.join_date = join_date;
        }
        member.monthly_salary = form.monthly_salary;

        self.update_staff(&member)?;
        Ok(member)
    }

    /// Replace an existing staff record by ID.
    pub fn update_staff(&self, member: &Staff) -> StoreResult<bool> {
        let mut staff = self.list_staff()?;
        match staff.iter_mut().find(|s| s.id == member.id) {
            Some(slot) => {
                *slot = member.clone();
                self.write_collection(schema::STAFF, &staff)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Get a staff member by ID.
    pub fn get_staff(&self, id: &str) -> StoreResult<Option<Staff>> {
        Ok(self.list_staff()?.into_iter().find(|s| s.id == id))
    }

    /// Set a staff member's status and persist. Moving to `leave` stamps
    /// the leave start date; returning to `active` clears it.
    pub fn set_staff_status(
        &self,
        id: &str,
        status: StaffStatus,
        today: NaiveDate,
    ) -> StoreResult<Staff> {
        let mut staff = self.list_staff()?;
        let member = staff
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or_else(|| StoreError::NotFound(format!("staff {}", id)))?;
        member.transition(status, today);
        let updated = member.clone();
        self.write_collection(schema::STAFF, &staff)?;
        Ok(updated)
    }

    /// Delete a staff member by filter-out-and-resave. Salary and
    /// attendance records referencing the member are left in place.
    pub fn delete_staff(&self, id: &str) -> StoreResult<bool> {
        let mut staff = self.list_staff()?;
        let before = staff.len();
        staff.retain(|s| s.id != id);
        if staff.len() == before {
            return Ok(false);
        }
        self.write_collection(schema::STAFF, &staff)?;
        Ok(true)
    }
}

/// Resolve a staff ID to a display name, tolerating dangling references.
pub fn staff_display_name(staff: &[Staff], id: &str) -> String {
    staff
        .iter()
        .find(|s| s.id == id)
        .map(|s| s.name.clone())
        .unwrap_or_else(|| "Unknown Staff".to_string())
}
