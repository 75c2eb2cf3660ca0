//! Sequential, type-prefixed record identifiers.
//!
//! Every collection assigns IDs of the form `{prefix}-{NN}` (`p-01`,
//! `a-02`, ...). The next ID is found by scanning existing records for the
//! maximum numeric suffix, so a gap left below the max is never refilled
//! (deleting the current max record does free its suffix for the next
//! create). Malformed IDs are ignored by the scan.

/// Patient ID prefix.
pub const PATIENT_PREFIX: &str = "p";
/// Appointment ID prefix.
pub const APPOINTMENT_PREFIX: &str = "a";
/// Invoice ID prefix.
pub const INVOICE_PREFIX: &str = "i";
/// Staff ID prefix.
pub const STAFF_PREFIX: &str = "s";
/// Salary ID prefix.
pub const SALARY_PREFIX: &str = "sl";
/// Attendance ID prefix.
pub const ATTENDANCE_PREFIX: &str = "at";

/// Generate the next sequential ID for a prefix from existing IDs.
///
/// Suffixes are zero-padded to two digits; beyond 99 the number simply
/// widens (`p-100`), which the scan still matches.
pub fn next_id<'a, I>(prefix: &str, existing: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let max = existing
        .into_iter()
        .filter_map(|id| suffix_of(prefix, id))
        .max()
        .unwrap_or(0);
    format!("{}-{:02}", prefix, max + 1)
}

/// Extract the numeric suffix of `{prefix}-{digits}`, or `None` for any
/// other shape (wrong prefix, empty or non-numeric suffix).
fn suffix_of(prefix: &str, id: &str) -> Option<u64> {
    let rest = id.strip_prefix(prefix)?.strip_prefix('-')?;
    if rest.is_empty() || !rest.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    rest.parse().ok()
}
