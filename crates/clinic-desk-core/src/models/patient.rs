//! Patient models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Patient status. Records persisted without a status belong to the
/// `active` bucket, so deserialization defaults there.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PatientStatus {
    #[default]
    Active,
    Inactive,
}

impl PatientStatus {
    /// Stable wire/display string.
    pub fn as_str(&self) -> &'static str {
        match self {
            PatientStatus::Active => "active",
            PatientStatus::Inactive => "inactive",
        }
    }

    /// Parse from the stable wire string.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "active" => Some(PatientStatus::Active),
            "inactive" => Some(PatientStatus::Inactive),
            _ => None,
        }
    }
}

/// A patient record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Patient {
    /// Sequential type-prefixed ID (`p-01`, `p-02`, ...)
    pub id: String,
    /// Patient name
    pub name: String,
    /// Contact phone - soft uniqueness check on create
    pub phone: String,
    /// Date of birth
    pub date_of_birth: Option<NaiveDate>,
    /// Gender as entered on the intake form
    pub gender: Option<String>,
    /// Status - absent in stored JSON means active
    #[serde(default)]
    pub status: PatientStatus,
    /// Postal address
    pub address: Option<String>,
    /// Free-text medical history
    pub medical_history: Option<String>,
    /// Date the record was added
    pub added_on: NaiveDate,
}

impl Patient {
    /// Create a new patient with required fields, added today.
    pub fn new(id: String, name: String, phone: String) -> Self {
        Self {
            id,
            name,
            phone,
            date_of_birth: None,
            gender: None,
            status: PatientStatus::Active,
            address: None,
            medical_history: None,
            added_on: chrono::Local::now().date_naive(),
        }
    }

    /// Check whether the patient is in the active bucket.
    pub fn is_active(&self) -> bool {
        self.status == PatientStatus::Active
    }
}
