//! Attendance register export.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::escape_csv;
use crate::models::{Attendance, Staff};
use crate::store::staff_display_name;

/// One row of the attendance register.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttendanceRow {
    /// Entry ID
    pub entry_id: String,
    /// Referenced staff ID
    pub staff_id: String,
    /// Staff display name; "Unknown Staff" for dangling references
    pub staff_name: String,
    /// Attendance date
    pub date: NaiveDate,
    /// Clock-in time as entered
    pub time: Option<String>,
    /// Stored status string
    pub status: String,
    /// Notes
    pub notes: Option<String>,
}

/// Attendance register with resolved staff names.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttendanceRegister {
    /// Export date
    pub exported_on: NaiveDate,
    /// Register rows
    pub rows: Vec<AttendanceRow>,
}

impl AttendanceRegister {
    /// Build the register from the attendance and staff collections.
    pub fn build(entries: &[Attendance], staff: &[Staff], today: NaiveDate) -> Self {
        let rows = entries
            .iter()
            .map(|entry| AttendanceRow {
                entry_id: entry.id.clone(),
                staff_id: entry.staff_id.clone(),
                staff_name: staff_display_name(staff, &entry.staff_id),
                date: entry.date,
                time: entry.time.clone(),
                status: entry.status.as_str().to_string(),
                notes: entry.notes.clone(),
            })
            .collect();
        Self {
            exported_on: today,
            rows,
        }
    }

    /// Export to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Export to CSV format.
    pub fn to_csv(&self) -> String {
        let mut csv = String::new();
        csv.push_str("entry_id,staff_id,staff_name,date,time,status,notes\n");
        for row in &self.rows {
            csv.push_str(&format!(
                "{},{},{},{},{},{},{}\n",
                escape_csv(&row.entry_id),
                escape_csv(&row.staff_id),
                escape_csv(&row.staff_name),
                row.date,
                row.time.as_deref().unwrap_or(""),
                row.status,
                escape_csv(row.notes.as_deref().unwrap_or("")),
            ));
        }
        csv
    }
}
