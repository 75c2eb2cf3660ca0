//! Attendance store operations.
//!
//! Marking an entry `leave` carries a cross-entity side effect: the
//! referenced staff record moves to `leave` with its start date stamped.

use chrono::NaiveDate;

use super::{schema, Store, StoreError, StoreResult};
use crate::ids;
use crate::models::{Attendance, AttendanceStatus, StaffStatus};

/// Register form fields for a new attendance entry.
#[derive(Debug, Clone)]
pub struct NewAttendance {
    pub staff_id: String,
    pub date: NaiveDate,
    pub time: Option<String>,
    pub status: AttendanceStatus,
    pub notes: Option<String>,
}

impl Store {
    /// Load the full attendance collection.
    pub fn list_attendance(&self) -> StoreResult<Vec<Attendance>> {
        self.read_collection(schema::ATTENDANCE)
    }

    /// Record an attendance entry. A `leave` entry also moves the
    /// referenced staff member to leave.
    pub fn record_attendance(&self, form: NewAttendance) -> StoreResult<Attendance> {
        if form.staff_id.trim().is_empty() {
            return Err(StoreError::Validation("staff is required".into()));
        }

        let mut entries = self.list_attendance()?;
        let id = ids::next_id(
            ids::ATTENDANCE_PREFIX,
            entries.iter().map(|a| a.id.as_str()),
        );
        let mut entry = Attendance::new(id, form.staff_id, form.date, form.status);
        entry.time = form.time;
        entry.notes = form.notes;

        entries.push(entry.clone());
        self.write_collection(schema::ATTENDANCE, &entries)?;

        if entry.status == AttendanceStatus::Leave {
            self.propagate_leave(&entry.staff_id, entry.date)?;
        }
        Ok(entry)
    }

    /// Set an attendance entry's status and persist, with the same
    /// leave propagation as recording.
    pub fn set_attendance_status(
        &self,
        id: &str,
        status: AttendanceStatus,
    ) -> StoreResult<Attendance> {
        let mut entries = self.list_attendance()?;
        let entry = entries
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or_else(|| StoreError::NotFound(format!("attendance {}", id)))?;
        entry.status = status;
        let updated = entry.clone();
        self.write_collection(schema::ATTENDANCE, &entries)?;

        if updated.status == AttendanceStatus::Leave {
            self.propagate_leave(&updated.staff_id, updated.date)?;
        }
        Ok(updated)
    }

    /// Delete an attendance entry by filter-out-and-resave.
    pub fn delete_attendance(&self, id: &str) -> StoreResult<bool> {
        let mut entries = self.list_attendance()?;
        let before = entries.len();
        entries.retain(|a| a.id != id);
        if entries.len() == before {
            return Ok(false);
        }
        self.write_collection(schema::ATTENDANCE, &entries)?;
        Ok(true)
    }

    /// Move the referenced staff member to leave. A dangling staff
    /// reference is tolerated; the attendance entry stands alone.
    fn propagate_leave(&self, staff_id: &str, from: NaiveDate) -> StoreResult<()> {
        let mut staff = self.list_staff()?;
        if let Some(member) = staff.iter_mut().find(|s| s.id == staff_id) {
            member.transition(StaffStatus::Leave, from);
            self.write_collection(schema::STAFF, &staff)?;
        }
        Ok(())
    }
}
