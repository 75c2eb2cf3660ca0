//! Patient store operations.

use chrono::NaiveDate;

use super::{schema, Store, StoreError, StoreResult};
use crate::ids;
use crate::models::{Patient, PatientStatus};

/// Intake form fields for a new patient.
#[derive(Debug, Clone, Default)]
pub struct NewPatient {
    pub name: String,
    pub phone: String,
    pub date_of_birth: Option<NaiveDate>,
    pub gender: Option<String>,
    pub address: Option<String>,
    pub medical_history: Option<String>,
}

impl Store {
    /// Load the full patient collection.
    pub fn list_patients(&self) -> StoreResult<Vec<Patient>> {
        self.read_collection(schema::PATIENTS)
    }

    /// Create a new patient. Validates required fields and rejects a
    /// duplicate phone number; nothing is saved on failure.
    pub fn create_patient(&self, form: NewPatient) -> StoreResult<Patient> {
        if form.name.trim().is_empty() {
            return Err(StoreError::Validation("patient name is required".into()));
        }
        if form.phone.trim().is_empty() {
            return Err(StoreError::Validation("patient phone is required".into()));
        }

        let mut patients = self.list_patients()?;
        if patients.iter().any(|p| p.phone == form.phone) {
            return Err(StoreError::Validation(format!(
                "a patient with phone {} already exists",
                form.phone
            )));
        }

        let id = ids::next_id(ids::PATIENT_PREFIX, patients.iter().map(|p| p.id.as_str()));
        let mut patient = Patient::new(id, form.name, form.phone);
        patient.date_of_birth = form.date_of_birth;
        patient.gender = form.gender;
        patient.address = form.address;
        patient.medical_history = form.medical_history;

        patients.push(patient.clone());
        self.write_collection(schema::PATIENTS, &patients)?;
        Ok(patient)
    }

    /// Apply an edited intake form to an existing patient. Same validation
    /// as creation; the duplicate-phone check skips the record itself.
    /// Status and the added-on date are untouched.
    pub fn edit_patient(&self, id: &str, form: NewPatient) -> StoreResult<Patient> {
        if form.name.trim().is_empty() {
            return Err(StoreError::Validation("patient name is required".into()));
        }
        if form.phone.trim().is_empty() {
            return Err(StoreError::Validation("patient phone is required".into()));
        }

        let patients = self.list_patients()?;
        if patients.iter().any(|p| p.phone == form.phone && p.id != id) {
            return Err(StoreError::Validation(format!(
                "a patient with phone {} already exists",
                form.phone
            )));
        }

        let mut patient = patients
            .into_iter()
            .find(|p| p.id == id)
            .ok_or_else(|| StoreError::NotFound(format!("patient {}", id)))?;
        patient.name = form.name;
        patient.phone = form.phone;
        patient.date_of_birth = form.date_of_birth;
        patient.gender = form.gender;
        patient.address = form.address;
        patient.medical_history = form.medical_history;

        self.update_patient(&patient)?;
        Ok(patient)
    }

    /// Replace an existing patient record by ID.
    pub fn update_patient(&self, patient: &Patient) -> StoreResult<bool> {
        let mut patients = self.list_patients()?;
        match patients.iter_mut().find(|p| p.id == patient.id) {
            Some(slot) => {
                *slot = patient.clone();
                self.write_collection(schema::PATIENTS, &patients)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Get a patient by ID.
    pub fn get_patient(&self, id: &str) -> StoreResult<Option<Patient>> {
        Ok(self.list_patients()?.into_iter().find(|p| p.id == id))
    }

    /// Set a patient's status and persist. Active <-> inactive, either way.
    pub fn set_patient_status(&self, id: &str, status: PatientStatus) -> StoreResult<Patient> {
        let mut patients = self.list_patients()?;
        let patient = patients
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| StoreError::NotFound(format!("patient {}", id)))?;
        patient.status = status;
        let updated = patient.clone();
        self.write_collection(schema::PATIENTS, &patients)?;
        Ok(updated)
    }

    /// Delete a patient by filter-out-and-resave. Appointments and
    /// invoices referencing the patient are left in place; their lookups
    /// render as "Unknown Patient".
    pub fn delete_patient(&self, id: &str) -> StoreResult<bool> {
        let mut patients = self.list_patients()?;
        let before = patients.len();
        patients.retain(|p| p.id != id);
        if patients.len() == before {
            return Ok(false);
        }
        self.write_collection(schema::PATIENTS, &patients)?;
        Ok(true)
    }
}

/// Resolve a patient ID to a display name, tolerating dangling references.
pub fn patient_display_name(patients: &[Patient], id: &str) -> String {
    patients
        .iter()
        .find(|p| p.id == id)
        .map(|p| p.name.clone())
        .unwrap_or_else(|| "Unknown Patient".to_string())
}
