//! Named filter predicates over entity collections.
//!
//! Each filter is a pure function from a full collection to a subset.
//! The string vocabulary is the public filter API and must stay stable:
//! `all|active|inactive` (patients), `all|today|week|month` (time windows),
//! `all|scheduled|confirmed|completed|cancelled` (appointment status),
//! `all|paid|unpaid` (billing), `all|active|leave|left` (staff),
//! `all|paid|pending` (salaries).
//!
//! Date windows are computed against an injected `today` so callers (and
//! tests) control the clock; the FFI layer passes the local date.

use chrono::{Datelike, Days, NaiveDate};

use super::{FilterError, FilterResult};
use crate::models::{
    Appointment, AppointmentStatus, Attendance, Invoice, InvoiceStatus, Patient, PatientStatus,
    Salary, SalaryStatus, Staff, StaffStatus,
};

// =========================================================================
// Filter vocabulary
// =========================================================================

/// Patient list filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PatientFilter {
    #[default]
    All,
    Status(PatientStatus),
}

impl PatientFilter {
    pub fn parse(s: &str) -> FilterResult<Self> {
        match s {
            "all" => Ok(PatientFilter::All),
            _ => PatientStatus::parse(s)
                .map(PatientFilter::Status)
                .ok_or_else(|| FilterError::Unknown(s.to_string())),
        }
    }
}

/// Appointment status filter, combined with a [`TimeWindow`] by AND.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppointmentFilter {
    #[default]
    All,
    Status(AppointmentStatus),
}

impl AppointmentFilter {
    pub fn parse(s: &str) -> FilterResult<Self> {
        match s {
            "all" => Ok(AppointmentFilter::All),
            _ => AppointmentStatus::parse(s)
                .map(AppointmentFilter::Status)
                .ok_or_else(|| FilterError::Unknown(s.to_string())),
        }
    }
}

/// Invoice list filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InvoiceFilter {
    #[default]
    All,
    Status(InvoiceStatus),
}

impl InvoiceFilter {
    pub fn parse(s: &str) -> FilterResult<Self> {
        match s {
            "all" => Ok(InvoiceFilter::All),
            _ => InvoiceStatus::parse(s)
                .map(InvoiceFilter::Status)
                .ok_or_else(|| FilterError::Unknown(s.to_string())),
        }
    }
}

/// Staff list filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StaffFilter {
    #[default]
    All,
    Status(StaffStatus),
}

impl StaffFilter {
    pub fn parse(s: &str) -> FilterResult<Self> {
        match s {
            "all" => Ok(StaffFilter::All),
            _ => StaffStatus::parse(s)
                .map(StaffFilter::Status)
                .ok_or_else(|| FilterError::Unknown(s.to_string())),
        }
    }
}

/// Salary list filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SalaryFilter {
    #[default]
    All,
    Status(SalaryStatus),
}

impl SalaryFilter {
    pub fn parse(s: &str) -> FilterResult<Self> {
        match s {
            "all" => Ok(SalaryFilter::All),
            _ => SalaryStatus::parse(s)
                .map(SalaryFilter::Status)
                .ok_or_else(|| FilterError::Unknown(s.to_string())),
        }
    }
}

// =========================================================================
// Date windows
// =========================================================================

/// Time window filter for appointments and attendance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeWindow {
    #[default]
    All,
    Today,
    Week,
    Month,
}

impl TimeWindow {
    pub fn parse(s: &str) -> FilterResult<Self> {
        match s {
            "all" => Ok(TimeWindow::All),
            "today" => Ok(TimeWindow::Today),
            "week" => Ok(TimeWindow::Week),
            "month" => Ok(TimeWindow::Month),
            _ => Err(FilterError::Unknown(s.to_string())),
        }
    }

    /// Inclusive date bounds of this window around `today`, or `None`
    /// for [`TimeWindow::All`].
    pub fn bounds(&self, today: NaiveDate) -> Option<(NaiveDate, NaiveDate)> {
        match self {
            TimeWindow::All => None,
            TimeWindow::Today => Some((today, today)),
            TimeWindow::Week => Some(week_bounds(today)),
            TimeWindow::Month => Some(month_bounds(today)),
        }
    }

    /// Whether `date` falls inside this window around `today`.
    pub fn contains(&self, date: NaiveDate, today: NaiveDate) -> bool {
        match self.bounds(today) {
            None => true,
            Some((start, end)) => start <= date && date <= end,
        }
    }
}

/// Sunday-to-Saturday week containing `today`, inclusive.
fn week_bounds(today: NaiveDate) -> (NaiveDate, NaiveDate) {
    let back = today.weekday().num_days_from_sunday() as u64;
    let start = today.checked_sub_days(Days::new(back)).unwrap_or(today);
    let end = start.checked_add_days(Days::new(6)).unwrap_or(start);
    (start, end)
}

/// First to last calendar day of the month containing `today`, inclusive.
fn month_bounds(today: NaiveDate) -> (NaiveDate, NaiveDate) {
    let first =
        NaiveDate::from_ymd_opt(today.year(), today.month(), 1).unwrap_or(today);
    let next_first = if today.month() == 12 {
        NaiveDate::from_ymd_opt(today.year() + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(today.year(), today.month() + 1, 1)
    };
    let last = next_first
        .and_then(|d| d.pred_opt())
        .unwrap_or(first);
    (first, last)
}

// =========================================================================
// Predicates
// =========================================================================

/// Narrow a patient collection by filter.
pub fn filter_patients(patients: &[Patient], filter: PatientFilter) -> Vec<Patient> {
    patients
        .iter()
        .filter(|p| match filter {
            PatientFilter::All => true,
            PatientFilter::Status(status) => p.status == status,
        })
        .cloned()
        .collect()
}

/// Narrow an appointment collection by time window AND status filter.
pub fn filter_appointments(
    appointments: &[Appointment],
    window: TimeWindow,
    filter: AppointmentFilter,
    today: NaiveDate,
) -> Vec<Appointment> {
    appointments
        .iter()
        .filter(|a| window.contains(a.date, today))
        .filter(|a| match filter {
            AppointmentFilter::All => true,
            AppointmentFilter::Status(status) => a.status == status,
        })
        .cloned()
        .collect()
}

/// Narrow an invoice collection by filter.
pub fn filter_invoices(invoices: &[Invoice], filter: InvoiceFilter) -> Vec<Invoice> {
    invoices
        .iter()
        .filter(|i| match filter {
            InvoiceFilter::All => true,
            InvoiceFilter::Status(status) => i.status == status,
        })
        .cloned()
        .collect()
}

/// Narrow a staff collection by filter.
pub fn filter_staff(staff: &[Staff], filter: StaffFilter) -> Vec<Staff> {
    staff
        .iter()
        .filter(|s| match filter {
            StaffFilter::All => true,
            StaffFilter::Status(status) => s.status == status,
        })
        .cloned()
        .collect()
}

/// Narrow a salary collection by filter.
pub fn filter_salaries(salaries: &[Salary], filter: SalaryFilter) -> Vec<Salary> {
    salaries
        .iter()
        .filter(|s| match filter {
            SalaryFilter::All => true,
            SalaryFilter::Status(status) => s.status == status,
        })
        .cloned()
        .collect()
}

/// Narrow an attendance collection by time window.
pub fn filter_attendance(
    attendance: &[Attendance],
    window: TimeWindow,
    today: NaiveDate,
) -> Vec<Attendance> {
    attendance
        .iter()
        .filter(|a| window.contains(a.date, today))
        .cloned()
        .collect()
}
