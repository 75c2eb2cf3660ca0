//! Clinic-Desk Core Library
//!
//! Local-first record management for a small clinic: patients,
//! appointments, billing, staff, salaries and attendance, persisted as
//! JSON collections in an embedded key-value store.
//!
//! # Architecture
//!
//! ```text
//!                      UI (render adapter, out of scope)
//!                                   │ FFI
//!                         ┌─────────▼─────────┐
//!                         │    ClinicCore     │  filter strings + page in,
//!                         └─────────┬─────────┘  clamped pages out
//!               ┌───────────────────┼───────────────────┐
//!               │                   │                   │
//!          ┌────▼────┐        ┌─────▼─────┐       ┌─────▼─────┐
//!          │  query  │        │   store   │       │  export   │
//!          │ filters │        │ JSON k/v  │       │ registers │
//!          │ + pages │        │ + CRUD    │       │ CSV/JSON  │
//!          └─────────┘        └───────────┘       └───────────┘
//! ```
//!
//! # Listing contract
//!
//! Every listing runs the same cycle: named filter → fixed-size page
//! (10 records, 1-based) → render. A fresh filter starts at page 1;
//! after a mutation the caller's current page is re-clamped, so deleting
//! the last record of the last page moves the view back one page.
//!
//! # Modules
//!
//! - [`store`]: SQLite-backed key-value persistence and per-entity CRUD
//! - [`models`]: Domain types (Patient, Appointment, Invoice, ...)
//! - [`query`]: Pure filter predicates and the pagination engine
//! - [`search`]: Fuzzy directory lookup (name/phone)
//! - [`export`]: Billing and attendance register export

pub mod export;
pub mod ids;
pub mod models;
pub mod query;
pub mod search;
pub mod store;

// Re-export commonly used types
pub use models::{
    Appointment, AppointmentStatus, Attendance, AttendanceStatus, Invoice, InvoiceStatus, Patient,
    PatientStatus, PaymentMethod, Priority, Salary, SalaryStatus, Staff, StaffStatus,
    TreatmentLine,
};
pub use query::{
    clamp_page, filter_appointments, filter_attendance, filter_invoices, filter_patients,
    filter_salaries, filter_staff, paginate, AppointmentFilter, FilterError, InvoiceFilter, Page,
    PatientFilter, SalaryFilter, StaffFilter, TimeWindow, PAGE_SIZE,
};
pub use store::{
    patient_display_name, staff_display_name, NewAppointment, NewAttendance, NewInvoice,
    NewPatient, NewSalary, NewStaff, PaidOutcome, Store, StoreError,
};

// UniFFI setup - using proc macros
uniffi::setup_scaffolding!();

use chrono::NaiveDate;
use std::sync::{Arc, Mutex};

// =========================================================================
// FFI Error Type
// =========================================================================

#[derive(Debug, thiserror::Error, uniffi::Error)]
pub enum ClinicError {
    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Validation failed: {0}")]
    ValidationError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<StoreError> for ClinicError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::NotFound(what) => ClinicError::NotFound(what),
            StoreError::Validation(why) => ClinicError::ValidationError(why),
            other => ClinicError::StorageError(other.to_string()),
        }
    }
}

impl From<FilterError> for ClinicError {
    fn from(e: FilterError) -> Self {
        ClinicError::InvalidInput(e.to_string())
    }
}

impl From<serde_json::Error> for ClinicError {
    fn from(e: serde_json::Error) -> Self {
        ClinicError::SerializationError(e.to_string())
    }
}

impl<T> From<std::sync::PoisonError<T>> for ClinicError {
    fn from(e: std::sync::PoisonError<T>) -> Self {
        ClinicError::StorageError(format!("Lock poisoned: {}", e))
    }
}

// =========================================================================
// Factory Functions (exported to FFI)
// =========================================================================

/// Open or create a store at the given path.
#[uniffi::export]
pub fn open_store(path: String) -> Result<Arc<ClinicCore>, ClinicError> {
    let store = Store::open(&path)?;
    Ok(Arc::new(ClinicCore {
        store: Arc::new(Mutex::new(store)),
    }))
}

/// Create an in-memory store (for testing).
#[uniffi::export]
pub fn open_store_in_memory() -> Result<Arc<ClinicCore>, ClinicError> {
    let store = Store::open_in_memory()?;
    Ok(Arc::new(ClinicCore {
        store: Arc::new(Mutex::new(store)),
    }))
}

// =========================================================================
// Main API Object
// =========================================================================

/// Thread-safe store wrapper for FFI.
#[derive(uniffi::Object)]
pub struct ClinicCore {
    store: Arc<Mutex<Store>>,
}

fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

fn parse_date(s: &str) -> Result<NaiveDate, ClinicError> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|_| ClinicError::InvalidInput(format!("invalid date: {}", s)))
}

fn parse_opt_date(s: Option<String>) -> Result<Option<NaiveDate>, ClinicError> {
    s.map(|d| parse_date(&d)).transpose()
}

fn parse_status<T>(s: &str, parse: fn(&str) -> Option<T>) -> Result<T, ClinicError> {
    parse(s).ok_or_else(|| ClinicError::InvalidInput(format!("unknown status: {}", s)))
}

#[uniffi::export]
impl ClinicCore {
    // =========================================================================
    // Patient Operations
    // =========================================================================

    /// Register a new patient.
    pub fn create_patient(&self, form: FfiNewPatient) -> Result<FfiPatient, ClinicError> {
        let store = self.store.lock()?;
        let patient = store.create_patient(NewPatient {
            name: form.name,
            phone: form.phone,
            date_of_birth: parse_opt_date(form.date_of_birth)?,
            gender: form.gender,
            address: form.address,
            medical_history: form.medical_history,
        })?;
        Ok(patient.into())
    }

    /// List patients for a filter and page. Pass page 1 after changing
    /// the filter.
    pub fn patient_page(&self, filter: String, page: u32) -> Result<FfiPatientPage, ClinicError> {
        let store = self.store.lock()?;
        let filter = PatientFilter::parse(&filter)?;
        Ok(patient_page_of(&store, filter, page as usize)?)
    }

    /// Fuzzy-search patients by name or phone.
    pub fn search_patients(
        &self,
        query: String,
        limit: u32,
    ) -> Result<Vec<FfiPatient>, ClinicError> {
        let store = self.store.lock()?;
        let patients = store.list_patients()?;
        Ok(search::search_patients(&patients, &query, limit as usize)
            .into_iter()
            .map(|hit| hit.record.into())
            .collect())
    }

    /// Apply an edited intake form to an existing patient.
    pub fn update_patient(
        &self,
        id: String,
        form: FfiNewPatient,
    ) -> Result<FfiPatient, ClinicError> {
        let store = self.store.lock()?;
        let patient = store.edit_patient(
            &id,
            NewPatient {
                name: form.name,
                phone: form.phone,
                date_of_birth: parse_opt_date(form.date_of_birth)?,
                gender: form.gender,
                address: form.address,
                medical_history: form.medical_history,
            },
        )?;
        Ok(patient.into())
    }

    /// Set a patient's status (`active`/`inactive`).
    pub fn set_patient_status(&self, id: String, status: String) -> Result<FfiPatient, ClinicError> {
        let store = self.store.lock()?;
        let status = parse_status(&status, PatientStatus::parse)?;
        Ok(store.set_patient_status(&id, status)?.into())
    }

    /// Delete a patient and return the refreshed, re-clamped page.
    pub fn delete_patient(
        &self,
        id: String,
        filter: String,
        page: u32,
    ) -> Result<FfiPatientPage, ClinicError> {
        let store = self.store.lock()?;
        let filter = PatientFilter::parse(&filter)?;
        store.delete_patient(&id)?;
        Ok(patient_page_of(&store, filter, page as usize)?)
    }

    // =========================================================================
    // Appointment Operations
    // =========================================================================

    /// Book a new appointment.
    pub fn create_appointment(
        &self,
        form: FfiNewAppointment,
    ) -> Result<FfiAppointment, ClinicError> {
        let store = self.store.lock()?;
        let priority = parse_status(&form.priority, Priority::parse)?;
        let appointment = store.create_appointment(NewAppointment {
            patient_id: form.patient_id,
            date: parse_date(&form.date)?,
            time: form.time,
            duration_minutes: form.duration_minutes,
            treatment: form.treatment,
            priority,
            notes: form.notes,
        })?;
        let patients = store.list_patients()?;
        Ok(ffi_appointment(&appointment, &patients))
    }

    /// List appointments for a time window (`all|today|week|month`) and a
    /// status filter (`all|scheduled|confirmed|completed|cancelled`),
    /// combined with AND.
    pub fn appointment_page(
        &self,
        window: String,
        status_filter: String,
        page: u32,
    ) -> Result<FfiAppointmentPage, ClinicError> {
        let store = self.store.lock()?;
        let window = TimeWindow::parse(&window)?;
        let filter = AppointmentFilter::parse(&status_filter)?;
        Ok(appointment_page_of(&store, window, filter, page as usize)?)
    }

    /// Apply an edited booking form to an existing appointment
    /// (reschedules included).
    pub fn update_appointment(
        &self,
        id: String,
        form: FfiNewAppointment,
    ) -> Result<FfiAppointment, ClinicError> {
        let store = self.store.lock()?;
        let priority = parse_status(&form.priority, Priority::parse)?;
        let appointment = store.edit_appointment(
            &id,
            NewAppointment {
                patient_id: form.patient_id,
                date: parse_date(&form.date)?,
                time: form.time,
                duration_minutes: form.duration_minutes,
                treatment: form.treatment,
                priority,
                notes: form.notes,
            },
        )?;
        let patients = store.list_patients()?;
        Ok(ffi_appointment(&appointment, &patients))
    }

    /// Set an appointment's status; any transition is accepted.
    pub fn set_appointment_status(
        &self,
        id: String,
        status: String,
    ) -> Result<FfiAppointment, ClinicError> {
        let store = self.store.lock()?;
        let status = parse_status(&status, AppointmentStatus::parse)?;
        let appointment = store.set_appointment_status(&id, status)?;
        let patients = store.list_patients()?;
        Ok(ffi_appointment(&appointment, &patients))
    }

    /// Delete an appointment and return the refreshed, re-clamped page.
    pub fn delete_appointment(
        &self,
        id: String,
        window: String,
        status_filter: String,
        page: u32,
    ) -> Result<FfiAppointmentPage, ClinicError> {
        let store = self.store.lock()?;
        let window = TimeWindow::parse(&window)?;
        let filter = AppointmentFilter::parse(&status_filter)?;
        store.delete_appointment(&id)?;
        Ok(appointment_page_of(&store, window, filter, page as usize)?)
    }

    // =========================================================================
    // Billing Operations
    // =========================================================================

    /// Raise a new invoice; totals derived from the treatment lines.
    pub fn create_invoice(&self, form: FfiNewInvoice) -> Result<FfiInvoice, ClinicError> {
        let store = self.store.lock()?;
        let payment_method = form
            .payment_method
            .map(|m| parse_status(&m, PaymentMethod::parse))
            .transpose()?;
        let invoice = store.create_invoice(NewInvoice {
            patient_id: form.patient_id,
            date: parse_date(&form.date)?,
            due_date: parse_date(&form.due_date)?,
            payment_method,
            treatments: form.treatments.into_iter().map(Into::into).collect(),
        })?;
        let patients = store.list_patients()?;
        Ok(ffi_invoice(&invoice, &patients, today()))
    }

    /// List invoices for a filter (`all|paid|unpaid`) and page.
    pub fn invoice_page(&self, filter: String, page: u32) -> Result<FfiInvoicePage, ClinicError> {
        let store = self.store.lock()?;
        let filter = InvoiceFilter::parse(&filter)?;
        Ok(invoice_page_of(&store, filter, page as usize)?)
    }

    /// Mark an invoice paid. For online payments the outcome flags that a
    /// receipt number is still required.
    pub fn mark_invoice_paid(&self, id: String) -> Result<FfiPaidOutcome, ClinicError> {
        let store = self.store.lock()?;
        let outcome = store.mark_invoice_paid(&id, today())?;
        let patients = store.list_patients()?;
        Ok(FfiPaidOutcome {
            invoice: ffi_invoice(&outcome.invoice, &patients, today()),
            awaiting_receipt: outcome.awaiting_receipt,
        })
    }

    /// Capture the receipt number for a paid online invoice.
    pub fn set_invoice_receipt(
        &self,
        id: String,
        receipt_number: String,
    ) -> Result<FfiInvoice, ClinicError> {
        let store = self.store.lock()?;
        let invoice = store.set_invoice_receipt(&id, receipt_number)?;
        let patients = store.list_patients()?;
        Ok(ffi_invoice(&invoice, &patients, today()))
    }

    /// Revert an invoice to unpaid.
    pub fn mark_invoice_unpaid(&self, id: String) -> Result<FfiInvoice, ClinicError> {
        let store = self.store.lock()?;
        let invoice = store.mark_invoice_unpaid(&id)?;
        let patients = store.list_patients()?;
        Ok(ffi_invoice(&invoice, &patients, today()))
    }

    /// Delete an invoice and return the refreshed, re-clamped page.
    pub fn delete_invoice(
        &self,
        id: String,
        filter: String,
        page: u32,
    ) -> Result<FfiInvoicePage, ClinicError> {
        let store = self.store.lock()?;
        let filter = InvoiceFilter::parse(&filter)?;
        store.delete_invoice(&id)?;
        Ok(invoice_page_of(&store, filter, page as usize)?)
    }

    /// Export the billing register as JSON.
    pub fn export_billing_json(&self) -> Result<String, ClinicError> {
        let store = self.store.lock()?;
        let register = export::BillingRegister::build(
            &store.list_invoices()?,
            &store.list_patients()?,
            today(),
        );
        Ok(register.to_json()?)
    }

    /// Export the billing register as CSV.
    pub fn export_billing_csv(&self) -> Result<String, ClinicError> {
        let store = self.store.lock()?;
        let register = export::BillingRegister::build(
            &store.list_invoices()?,
            &store.list_patients()?,
            today(),
        );
        Ok(register.to_csv())
    }

    // =========================================================================
    // Staff Operations
    // =========================================================================

    /// Add a new staff member.
    pub fn create_staff(&self, form: FfiNewStaff) -> Result<FfiStaff, ClinicError> {
        let store = self.store.lock()?;
        let member = store.create_staff(NewStaff {
            name: form.name,
            role: form.role,
            phone: form.phone,
            email: form.email,
            date_of_birth: parse_opt_date(form.date_of_birth)?,
            join_date: parse_opt_date(form.join_date)?,
            monthly_salary: form.monthly_salary,
        })?;
        Ok(member.into())
    }

    /// List staff for a filter (`all|active|leave|left`) and page.
    pub fn staff_page(&self, filter: String, page: u32) -> Result<FfiStaffPage, ClinicError> {
        let store = self.store.lock()?;
        let filter = StaffFilter::parse(&filter)?;
        Ok(staff_page_of(&store, filter, page as usize)?)
    }

    /// Fuzzy-search staff by name or phone.
    pub fn search_staff(&self, query: String, limit: u32) -> Result<Vec<FfiStaff>, ClinicError> {
        let store = self.store.lock()?;
        let staff = store.list_staff()?;
        Ok(search::search_staff(&staff, &query, limit as usize)
            .into_iter()
            .map(|hit| hit.record.into())
            .collect())
    }

    /// Apply an edited form to an existing staff member.
    pub fn update_staff(&self, id: String, form: FfiNewStaff) -> Result<FfiStaff, ClinicError> {
        let store = self.store.lock()?;
        let member = store.edit_staff(
            &id,
            NewStaff {
                name: form.name,
                role: form.role,
                phone: form.phone,
                email: form.email,
                date_of_birth: parse_opt_date(form.date_of_birth)?,
                join_date: parse_opt_date(form.join_date)?,
                monthly_salary: form.monthly_salary,
            },
        )?;
        Ok(member.into())
    }

    /// Set a staff member's status (`active`/`leave`/`left`).
    pub fn set_staff_status(&self, id: String, status: String) -> Result<FfiStaff, ClinicError> {
        let store = self.store.lock()?;
        let status = parse_status(&status, StaffStatus::parse)?;
        Ok(store.set_staff_status(&id, status, today())?.into())
    }

    /// Delete a staff member and return the refreshed, re-clamped page.
    pub fn delete_staff(
        &self,
        id: String,
        filter: String,
        page: u32,
    ) -> Result<FfiStaffPage, ClinicError> {
        let store = self.store.lock()?;
        let filter = StaffFilter::parse(&filter)?;
        store.delete_staff(&id)?;
        Ok(staff_page_of(&store, filter, page as usize)?)
    }

    // =========================================================================
    // Salary Operations
    // =========================================================================

    /// Create a monthly salary record.
    pub fn create_salary(&self, form: FfiNewSalary) -> Result<FfiSalary, ClinicError> {
        let store = self.store.lock()?;
        let salary = store.create_salary(NewSalary {
            staff_id: form.staff_id,
            month: form.month,
            year: form.year,
            basic_salary: form.basic_salary,
            total_allowance: form.total_allowance,
            total_deduction: form.total_deduction,
        })?;
        let staff = store.list_staff()?;
        Ok(ffi_salary(&salary, &staff))
    }

    /// List salaries for a filter (`all|paid|pending`) and page.
    pub fn salary_page(&self, filter: String, page: u32) -> Result<FfiSalaryPage, ClinicError> {
        let store = self.store.lock()?;
        let filter = SalaryFilter::parse(&filter)?;
        Ok(salary_page_of(&store, filter, page as usize)?)
    }

    /// Set a salary record's status (`paid`/`pending`).
    pub fn set_salary_status(&self, id: String, status: String) -> Result<FfiSalary, ClinicError> {
        let store = self.store.lock()?;
        let status = parse_status(&status, SalaryStatus::parse)?;
        let salary = store.set_salary_status(&id, status, today())?;
        let staff = store.list_staff()?;
        Ok(ffi_salary(&salary, &staff))
    }

    /// Delete a salary record and return the refreshed, re-clamped page.
    pub fn delete_salary(
        &self,
        id: String,
        filter: String,
        page: u32,
    ) -> Result<FfiSalaryPage, ClinicError> {
        let store = self.store.lock()?;
        let filter = SalaryFilter::parse(&filter)?;
        store.delete_salary(&id)?;
        Ok(salary_page_of(&store, filter, page as usize)?)
    }

    // =========================================================================
    // Attendance Operations
    // =========================================================================

    /// Record an attendance entry. A `leave` entry also moves the staff
    /// member to leave.
    pub fn record_attendance(&self, form: FfiNewAttendance) -> Result<FfiAttendance, ClinicError> {
        let store = self.store.lock()?;
        let status = parse_status(&form.status, AttendanceStatus::parse)?;
        let entry = store.record_attendance(NewAttendance {
            staff_id: form.staff_id,
            date: parse_date(&form.date)?,
            time: form.time,
            status,
            notes: form.notes,
        })?;
        let staff = store.list_staff()?;
        Ok(ffi_attendance(&entry, &staff))
    }

    /// List attendance for a time window (`all|today|week|month`) and page.
    pub fn attendance_page(
        &self,
        window: String,
        page: u32,
    ) -> Result<FfiAttendancePage, ClinicError> {
        let store = self.store.lock()?;
        let window = TimeWindow::parse(&window)?;
        Ok(attendance_page_of(&store, window, page as usize)?)
    }

    /// Set an attendance entry's status, with leave propagation.
    pub fn set_attendance_status(
        &self,
        id: String,
        status: String,
    ) -> Result<FfiAttendance, ClinicError> {
        let store = self.store.lock()?;
        let status = parse_status(&status, AttendanceStatus::parse)?;
        let entry = store.set_attendance_status(&id, status)?;
        let staff = store.list_staff()?;
        Ok(ffi_attendance(&entry, &staff))
    }

    /// Delete an attendance entry and return the refreshed, re-clamped page.
    pub fn delete_attendance(
        &self,
        id: String,
        window: String,
        page: u32,
    ) -> Result<FfiAttendancePage, ClinicError> {
        let store = self.store.lock()?;
        let window = TimeWindow::parse(&window)?;
        store.delete_attendance(&id)?;
        Ok(attendance_page_of(&store, window, page as usize)?)
    }

    /// Export the attendance register as JSON.
    pub fn export_attendance_json(&self) -> Result<String, ClinicError> {
        let store = self.store.lock()?;
        let register = export::AttendanceRegister::build(
            &store.list_attendance()?,
            &store.list_staff()?,
            today(),
        );
        Ok(register.to_json()?)
    }

    /// Export the attendance register as CSV.
    pub fn export_attendance_csv(&self) -> Result<String, ClinicError> {
        let store = self.store.lock()?;
        let register = export::AttendanceRegister::build(
            &store.list_attendance()?,
            &store.list_staff()?,
            today(),
        );
        Ok(register.to_csv())
    }
}

// =========================================================================
// Page assembly helpers
// =========================================================================

fn patient_page_of(
    store: &Store,
    filter: PatientFilter,
    page: usize,
) -> Result<FfiPatientPage, ClinicError> {
    let patients = store.list_patients()?;
    let filtered = filter_patients(&patients, filter);
    let page = paginate(&filtered, page);
    Ok(FfiPatientPage {
        items: page.items.into_iter().map(Into::into).collect(),
        page: page.page as u32,
        total_pages: page.total_pages as u32,
    })
}

fn appointment_page_of(
    store: &Store,
    window: TimeWindow,
    filter: AppointmentFilter,
    page: usize,
) -> Result<FfiAppointmentPage, ClinicError> {
    let appointments = store.list_appointments()?;
    let patients = store.list_patients()?;
    let filtered = filter_appointments(&appointments, window, filter, today());
    let page = paginate(&filtered, page);
    Ok(FfiAppointmentPage {
        items: page
            .items
            .iter()
            .map(|a| ffi_appointment(a, &patients))
            .collect(),
        page: page.page as u32,
        total_pages: page.total_pages as u32,
    })
}

fn invoice_page_of(
    store: &Store,
    filter: InvoiceFilter,
    page: usize,
) -> Result<FfiInvoicePage, ClinicError> {
    let invoices = store.list_invoices()?;
    let patients = store.list_patients()?;
    let filtered = filter_invoices(&invoices, filter);
    let page = paginate(&filtered, page);
    Ok(FfiInvoicePage {
        items: page
            .items
            .iter()
            .map(|i| ffi_invoice(i, &patients, today()))
            .collect(),
        page: page.page as u32,
        total_pages: page.total_pages as u32,
    })
}

fn staff_page_of(
    store: &Store,
    filter: StaffFilter,
    page: usize,
) -> Result<FfiStaffPage, ClinicError> {
    let staff = store.list_staff()?;
    let filtered = filter_staff(&staff, filter);
    let page = paginate(&filtered, page);
    Ok(FfiStaffPage {
        items: page.items.into_iter().map(Into::into).collect(),
        page: page.page as u32,
        total_pages: page.total_pages as u32,
    })
}

fn salary_page_of(
    store: &Store,
    filter: SalaryFilter,
    page: usize,
) -> Result<FfiSalaryPage, ClinicError> {
    let salaries = store.list_salaries()?;
    let staff = store.list_staff()?;
    let filtered = filter_salaries(&salaries, filter);
    let page = paginate(&filtered, page);
    Ok(FfiSalaryPage {
        items: page.items.iter().map(|s| ffi_salary(s, &staff)).collect(),
        page: page.page as u32,
        total_pages: page.total_pages as u32,
    })
}

fn attendance_page_of(
    store: &Store,
    window: TimeWindow,
    page: usize,
) -> Result<FfiAttendancePage, ClinicError> {
    let entries = store.list_attendance()?;
    let staff = store.list_staff()?;
    let filtered = filter_attendance(&entries, window, today());
    let page = paginate(&filtered, page);
    Ok(FfiAttendancePage {
        items: page.items.iter().map(|a| ffi_attendance(a, &staff)).collect(),
        page: page.page as u32,
        total_pages: page.total_pages as u32,
    })
}

// =========================================================================
// FFI Types
// =========================================================================

/// FFI-safe patient intake form.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiNewPatient {
    pub name: String,
    pub phone: String,
    pub date_of_birth: Option<String>,
    pub gender: Option<String>,
    pub address: Option<String>,
    pub medical_history: Option<String>,
}

/// FFI-safe patient.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiPatient {
    pub id: String,
    pub name: String,
    pub phone: String,
    pub date_of_birth: Option<String>,
    pub gender: Option<String>,
    pub status: String,
    pub address: Option<String>,
    pub medical_history: Option<String>,
    pub added_on: String,
}

impl From<Patient> for FfiPatient {
    fn from(patient: Patient) -> Self {
        Self {
            id: patient.id,
            name: patient.name,
            phone: patient.phone,
            date_of_birth: patient.date_of_birth.map(|d| d.to_string()),
            gender: patient.gender,
            status: patient.status.as_str().to_string(),
            address: patient.address,
            medical_history: patient.medical_history,
            added_on: patient.added_on.to_string(),
        }
    }
}

/// FFI-safe patient page.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiPatientPage {
    pub items: Vec<FfiPatient>,
    pub page: u32,
    pub total_pages: u32,
}

/// FFI-safe appointment booking form.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiNewAppointment {
    pub patient_id: String,
    pub date: String,
    pub time: String,
    pub duration_minutes: Option<u32>,
    pub treatment: String,
    pub priority: String,
    pub notes: Option<String>,
}

/// FFI-safe appointment with its patient join resolved.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiAppointment {
    pub id: String,
    pub patient_id: String,
    pub patient_name: String,
    pub date: String,
    pub time: String,
    pub duration_minutes: u32,
    pub treatment: String,
    pub status: String,
    pub priority: String,
    pub notes: Option<String>,
}

fn ffi_appointment(appointment: &Appointment, patients: &[Patient]) -> FfiAppointment {
    FfiAppointment {
        id: appointment.id.clone(),
        patient_id: appointment.patient_id.clone(),
        patient_name: patient_display_name(patients, &appointment.patient_id),
        date: appointment.date.to_string(),
        time: appointment.time.clone(),
        duration_minutes: appointment.duration_minutes,
        treatment: appointment.treatment.clone(),
        status: appointment.status.as_str().to_string(),
        priority: appointment.priority.as_str().to_string(),
        notes: appointment.notes.clone(),
    }
}

/// FFI-safe appointment page.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiAppointmentPage {
    pub items: Vec<FfiAppointment>,
    pub page: u32,
    pub total_pages: u32,
}

/// FFI-safe treatment line.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiTreatmentLine {
    pub treatment: String,
    pub amount: f64,
    pub discount: f64,
}

impl From<FfiTreatmentLine> for TreatmentLine {
    fn from(line: FfiTreatmentLine) -> Self {
        TreatmentLine {
            treatment: line.treatment,
            amount: line.amount,
            discount: line.discount,
        }
    }
}

impl From<TreatmentLine> for FfiTreatmentLine {
    fn from(line: TreatmentLine) -> Self {
        Self {
            treatment: line.treatment,
            amount: line.amount,
            discount: line.discount,
        }
    }
}

/// FFI-safe invoice form.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiNewInvoice {
    pub patient_id: String,
    pub date: String,
    pub due_date: String,
    pub payment_method: Option<String>,
    pub treatments: Vec<FfiTreatmentLine>,
}

/// FFI-safe invoice with its patient join and derived overdue flag.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiInvoice {
    pub id: String,
    pub patient_id: String,
    pub patient_name: String,
    pub date: String,
    pub due_date: String,
    pub status: String,
    pub overdue: bool,
    pub payment_method: Option<String>,
    pub treatments: Vec<FfiTreatmentLine>,
    pub subtotal: f64,
    pub total_discount: f64,
    pub total: f64,
    pub paid_date: Option<String>,
    pub receipt_number: Option<String>,
}

fn ffi_invoice(invoice: &Invoice, patients: &[Patient], today: NaiveDate) -> FfiInvoice {
    FfiInvoice {
        id: invoice.id.clone(),
        patient_id: invoice.patient_id.clone(),
        patient_name: patient_display_name(patients, &invoice.patient_id),
        date: invoice.date.to_string(),
        due_date: invoice.due_date.to_string(),
        status: invoice.status.as_str().to_string(),
        overdue: invoice.is_overdue(today),
        payment_method: invoice.payment_method.map(|m| m.as_str().to_string()),
        treatments: invoice.treatments.iter().cloned().map(Into::into).collect(),
        subtotal: invoice.subtotal,
        total_discount: invoice.total_discount,
        total: invoice.total,
        paid_date: invoice.paid_date.map(|d| d.to_string()),
        receipt_number: invoice.receipt_number.clone(),
    }
}

/// FFI-safe invoice page.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiInvoicePage {
    pub items: Vec<FfiInvoice>,
    pub page: u32,
    pub total_pages: u32,
}

/// FFI-safe mark-paid outcome.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiPaidOutcome {
    pub invoice: FfiInvoice,
    pub awaiting_receipt: bool,
}

/// FFI-safe staff form.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiNewStaff {
    pub name: String,
    pub role: String,
    pub phone: String,
    pub email: String,
    pub date_of_birth: Option<String>,
    pub join_date: Option<String>,
    pub monthly_salary: f64,
}

/// FFI-safe staff member.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiStaff {
    pub id: String,
    pub name: String,
    pub role: String,
    pub status: String,
    pub date_of_birth: Option<String>,
    pub join_date: String,
    pub monthly_salary: f64,
    pub phone: String,
    pub email: String,
    pub leave_start_date: Option<String>,
}

impl From<Staff> for FfiStaff {
    fn from(member: Staff) -> Self {
        Self {
            id: member.id,
            name: member.name,
            role: member.role,
            status: member.status.as_str().to_string(),
            date_of_birth: member.date_of_birth.map(|d| d.to_string()),
            join_date: member.join_date.to_string(),
            monthly_salary: member.monthly_salary,
            phone: member.phone,
            email: member.email,
            leave_start_date: member.leave_start_date.map(|d| d.to_string()),
        }
    }
}

/// FFI-safe staff page.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiStaffPage {
    pub items: Vec<FfiStaff>,
    pub page: u32,
    pub total_pages: u32,
}

/// FFI-safe salary form.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiNewSalary {
    pub staff_id: String,
    pub month: u32,
    pub year: i32,
    pub basic_salary: f64,
    pub total_allowance: f64,
    pub total_deduction: f64,
}

/// FFI-safe salary record with its staff join resolved.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiSalary {
    pub id: String,
    pub staff_id: String,
    pub staff_name: String,
    pub month: u32,
    pub year: i32,
    pub basic_salary: f64,
    pub total_allowance: f64,
    pub total_deduction: f64,
    pub net_salary: f64,
    pub status: String,
    pub paid_date: Option<String>,
}

fn ffi_salary(salary: &Salary, staff: &[Staff]) -> FfiSalary {
    FfiSalary {
        id: salary.id.clone(),
        staff_id: salary.staff_id.clone(),
        staff_name: staff_display_name(staff, &salary.staff_id),
        month: salary.month,
        year: salary.year,
        basic_salary: salary.basic_salary,
        total_allowance: salary.total_allowance,
        total_deduction: salary.total_deduction,
        net_salary: salary.net_salary,
        status: salary.status.as_str().to_string(),
        paid_date: salary.paid_date.map(|d| d.to_string()),
    }
}

/// FFI-safe salary page.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiSalaryPage {
    pub items: Vec<FfiSalary>,
    pub page: u32,
    pub total_pages: u32,
}

/// FFI-safe attendance form.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiNewAttendance {
    pub staff_id: String,
    pub date: String,
    pub time: Option<String>,
    pub status: String,
    pub notes: Option<String>,
}

/// FFI-safe attendance entry with its staff join resolved.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiAttendance {
    pub id: String,
    pub staff_id: String,
    pub staff_name: String,
    pub date: String,
    pub time: Option<String>,
    pub status: String,
    pub notes: Option<String>,
}

fn ffi_attendance(entry: &Attendance, staff: &[Staff]) -> FfiAttendance {
    FfiAttendance {
        id: entry.id.clone(),
        staff_id: entry.staff_id.clone(),
        staff_name: staff_display_name(staff, &entry.staff_id),
        date: entry.date.to_string(),
        time: entry.time.clone(),
        status: entry.status.as_str().to_string(),
        notes: entry.notes.clone(),
    }
}

/// FFI-safe attendance page.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiAttendancePage {
    pub items: Vec<FfiAttendance>,
    pub page: u32,
    pub total_pages: u32,
}
