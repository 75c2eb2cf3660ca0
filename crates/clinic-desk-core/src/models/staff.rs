//! Staff models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Staff status. Records persisted without a status are active.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StaffStatus {
    #[default]
    Active,
    Leave,
    Left,
}

impl StaffStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            StaffStatus::Active => "active",
            StaffStatus::Leave => "leave",
            StaffStatus::Left => "left",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "active" => Some(StaffStatus::Active),
            "leave" => Some(StaffStatus::Leave),
            "left" => Some(StaffStatus::Left),
            _ => None,
        }
    }
}

/// A staff member record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Staff {
    /// Sequential type-prefixed ID (`s-01`, ...)
    pub id: String,
    /// Full name
    pub name: String,
    /// Role (e.g., "Dentist", "Receptionist")
    pub role: String,
    /// Status - absent in stored JSON means active
    #[serde(default)]
    pub status: StaffStatus,
    /// Date of birth
    pub date_of_birth: Option<NaiveDate>,
    /// Date of joining
    pub join_date: NaiveDate,
    /// Monthly base salary
    pub monthly_salary: f64,
    /// Contact phone
    pub phone: String,
    /// Contact email
    pub email: String,
    /// Stamped when the member goes on leave; cleared on return to active
    pub leave_start_date: Option<NaiveDate>,
}

impl Staff {
    /// Create a new active staff member joining today.
    pub fn new(id: String, name: String, role: String, phone: String, email: String) -> Self {
        Self {
            id,
            name,
            role,
            status: StaffStatus::Active,
            date_of_birth: None,
            join_date: chrono::Local::now().date_naive(),
            monthly_salary: 0.0,
            phone,
            email,
            leave_start_date: None,
        }
    }

    /// Move to a new status, maintaining the leave stamp.
    pub fn transition(&mut self, status: StaffStatus, today: NaiveDate) {
        match status {
            StaffStatus::Leave => {
                if self.status != StaffStatus::Leave {
                    self.leave_start_date = Some(today);
                }
            }
            StaffStatus::Active => self.leave_start_date = None,
            StaffStatus::Left => {}
        }
        self.status = status;
    }
}
