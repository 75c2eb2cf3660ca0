//! Attendance models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Attendance status. Always explicit; marking `leave` side-effects the
/// referenced staff record (handled at the store layer).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AttendanceStatus {
    Present,
    Late,
    Absent,
    Leave,
}

impl AttendanceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AttendanceStatus::Present => "present",
            AttendanceStatus::Late => "late",
            AttendanceStatus::Absent => "absent",
            AttendanceStatus::Leave => "leave",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "present" => Some(AttendanceStatus::Present),
            "late" => Some(AttendanceStatus::Late),
            "absent" => Some(AttendanceStatus::Absent),
            "leave" => Some(AttendanceStatus::Leave),
            _ => None,
        }
    }
}

/// A single attendance entry for one staff member on one date.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Attendance {
    /// Sequential type-prefixed ID (`at-01`, ...)
    pub id: String,
    /// Referenced staff ID
    pub staff_id: String,
    /// Attendance date
    pub date: NaiveDate,
    /// Clock-in time as entered (e.g., "08:45")
    pub time: Option<String>,
    /// Recorded status
    pub status: AttendanceStatus,
    /// Free-text notes
    pub notes: Option<String>,
}

impl Attendance {
    /// Create a new attendance entry.
    pub fn new(id: String, staff_id: String, date: NaiveDate, status: AttendanceStatus) -> Self {
        Self {
            id,
            staff_id,
            date,
            time: None,
            status,
            notes: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_wire_strings() {
        for s in ["present", "late", "absent", "leave"] {
            let parsed = AttendanceStatus::parse(s).unwrap();
            assert_eq!(parsed.as_str(), s);
        }
        assert_eq!(AttendanceStatus::parse("holiday"), None);
    }

    #[test]
    fn test_serde_roundtrip() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 14).unwrap();
        let entry = Attendance::new("at-01".into(), "s-01".into(), date, AttendanceStatus::Late);
        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.contains("\"late\""));
        let back: Attendance = serde_json::from_str(&json).unwrap();
        assert_eq!(back, entry);
    }
}
