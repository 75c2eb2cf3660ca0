//! Appointment models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Default appointment slot length in minutes.
pub const DEFAULT_APPOINTMENT_MINUTES: u32 = 60;

/// Appointment status. Any status is reachable from any other; the
/// original system deliberately has no transition guards.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AppointmentStatus {
    #[default]
    Scheduled,
    Confirmed,
    Completed,
    Cancelled,
}

impl AppointmentStatus {
    /// Stable wire/display string.
    pub fn as_str(&self) -> &'static str {
        match self {
            AppointmentStatus::Scheduled => "scheduled",
            AppointmentStatus::Confirmed => "confirmed",
            AppointmentStatus::Completed => "completed",
            AppointmentStatus::Cancelled => "cancelled",
        }
    }

    /// Parse from the stable wire string.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "scheduled" => Some(AppointmentStatus::Scheduled),
            "confirmed" => Some(AppointmentStatus::Confirmed),
            "completed" => Some(AppointmentStatus::Completed),
            "cancelled" => Some(AppointmentStatus::Cancelled),
            _ => None,
        }
    }
}

/// Appointment priority.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    #[default]
    Normal,
    High,
    Urgent,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Normal => "normal",
            Priority::High => "high",
            Priority::Urgent => "urgent",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "normal" => Some(Priority::Normal),
            "high" => Some(Priority::High),
            "urgent" => Some(Priority::Urgent),
            _ => None,
        }
    }
}

fn default_duration() -> u32 {
    DEFAULT_APPOINTMENT_MINUTES
}

/// An appointment record. References a patient by ID; the reference is
/// not enforced and may dangle after patient deletion.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Appointment {
    /// Sequential type-prefixed ID (`a-01`, ...)
    pub id: String,
    /// Referenced patient ID
    pub patient_id: String,
    /// Appointment date
    pub date: NaiveDate,
    /// Appointment time as entered (e.g., "10:30")
    pub time: String,
    /// Slot length in minutes, 60 when absent
    #[serde(default = "default_duration")]
    pub duration_minutes: u32,
    /// Treatment description
    pub treatment: String,
    /// Status - absent in stored JSON means scheduled
    #[serde(default)]
    pub status: AppointmentStatus,
    /// Priority - absent means normal
    #[serde(default)]
    pub priority: Priority,
    /// Free-text notes
    pub notes: Option<String>,
}

impl Appointment {
    /// Create a new scheduled appointment.
    pub fn new(
        id: String,
        patient_id: String,
        date: NaiveDate,
        time: String,
        treatment: String,
    ) -> Self {
        Self {
            id,
            patient_id,
            date,
            time,
            duration_minutes: DEFAULT_APPOINTMENT_MINUTES,
            treatment,
            status: AppointmentStatus::Scheduled,
            priority: Priority::Normal,
            notes: None,
        }
    }
}
