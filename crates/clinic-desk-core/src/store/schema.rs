//! SQLite schema definition.

/// Complete database schema for clinic-desk.
///
/// One row per entity collection: `value` is the JSON array of records,
/// mirroring the storage layout of the original system (one namespaced
/// key per collection).
pub const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS collections (
    name TEXT PRIMARY KEY,
    value TEXT NOT NULL,
    updated_at TEXT NOT NULL DEFAULT (datetime('now'))
);
"#;

/// Patient collection key.
pub const PATIENTS: &str = "clinic.patients";
/// Appointment collection key.
pub const APPOINTMENTS: &str = "clinic.appointments";
/// Invoice collection key.
pub const INVOICES: &str = "clinic.invoices";
/// Staff collection key.
pub const STAFF: &str = "clinic.staff";
/// Salary collection key.
pub const SALARIES: &str = "clinic.salaries";
/// Attendance collection key.
pub const ATTENDANCE: &str = "clinic.attendance";

#[cfg(test)]
mod tests {
    use super::*;
    use rusqlite::Connection;

    #[test]
    fn test_schema_valid() {
        let conn = Connection::open_in_memory().unwrap();
        let result = conn.execute_batch(SCHEMA);
        assert!(result.is_ok(), "Schema should be valid SQL: {:?}", result);
    }

    #[test]
    fn test_collection_keys_namespaced() {
        for key in [PATIENTS, APPOINTMENTS, INVOICES, STAFF, SALARIES, ATTENDANCE] {
            assert!(key.starts_with("clinic."));
        }
    }
}
