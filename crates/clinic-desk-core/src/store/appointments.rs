//! Appointment store operations.

use chrono::NaiveDate;

use super::{schema, Store, StoreError, StoreResult};
use crate::ids;
use crate::models::{Appointment, AppointmentStatus, Priority, DEFAULT_APPOINTMENT_MINUTES};

/// Booking form fields for a new appointment.
#[derive(Debug, Clone)]
pub struct NewAppointment {
    pub patient_id: String,
    pub date: NaiveDate,
    pub time: String,
    pub duration_minutes: Option<u32>,
    pub treatment: String,
    pub priority: Priority,
    pub notes: Option<String>,
}

impl Store {
    /// Load the full appointment collection.
    pub fn list_appointments(&self) -> StoreResult<Vec<Appointment>> {
        self.read_collection(schema::APPOINTMENTS)
    }

    /// Create a new scheduled appointment. Overlapping slots are
    /// deliberately not rejected.
    pub fn create_appointment(&self, form: NewAppointment) -> StoreResult<Appointment> {
        if form.patient_id.trim().is_empty() {
            return Err(StoreError::Validation("patient is required".into()));
        }
        if form.treatment.trim().is_empty() {
            return Err(StoreError::Validation("treatment is required".into()));
        }
        if form.time.trim().is_empty() {
            return Err(StoreError::Validation("time is required".into()));
        }

        let mut appointments = self.list_appointments()?;
        let id = ids::next_id(
            ids::APPOINTMENT_PREFIX,
            appointments.iter().map(|a| a.id.as_str()),
        );
        let mut appointment =
            Appointment::new(id, form.patient_id, form.date, form.time, form.treatment);
        appointment.duration_minutes = form.duration_minutes.unwrap_or(DEFAULT_APPOINTMENT_MINUTES);
        appointment.priority = form.priority;
        appointment.notes = form.notes;

        appointments.push(appointment.clone());
        self.write_collection(schema::APPOINTMENTS, &appointments)?;
        Ok(appointment)
    }

    /// Apply an edited booking form to an existing appointment, covering
    /// reschedules. Status is untouched.
    pub fn edit_appointment(&self, id: &str, form: NewAppointment) -> StoreResult<Appointment> {
        if form.patient_id.trim().is_empty() {
            return Err(StoreError::Validation("patient is required".into()));
        }
        if form.treatment.trim().is_empty() {
            return Err(StoreError::Validation("treatment is required".into()));
        }
        if form.time.trim().is_empty() {
            return Err(StoreError::Validation("time is required".into()));
        }

        let mut appointment = self
            .get_appointment(id)?
            .ok_or_else(|| StoreError::NotFound(format!("appointment {}", id)))?;
        appointment.patient_id = form.patient_id;
        appointment.date = form.date;
        appointment.time = form.time;
        appointment.duration_minutes = form.duration_minutes.unwrap_or(DEFAULT_APPOINTMENT_MINUTES);
        appointment.treatment = form.treatment;
        appointment.priority = form.priority;
        appointment.notes = form.notes;

        self.update_appointment(&appointment)?;
        Ok(appointment)
    }

    /// Replace an existing appointment record by ID.
    pub fn update_appointment(&self, appointment: &Appointment) -> StoreResult<bool> {
        let mut appointments = self.list_appointments()?;
        match appointments.iter_mut().find(|a| a.id == appointment.id) {
            Some(slot) => {
                *slot = appointment.clone();
                self.write_collection(schema::APPOINTMENTS, &appointments)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Get an appointment by ID.
    pub fn get_appointment(&self, id: &str) -> StoreResult<Option<Appointment>> {
        Ok(self.list_appointments()?.into_iter().find(|a| a.id == id))
    }

    /// Set an appointment's status and persist. Any status is reachable
    /// from any other; there are no transition guards.
    pub fn set_appointment_status(
        &self,
        id: &str,
        status: AppointmentStatus,
    ) -> StoreResult<Appointment> {
        let mut appointments = self.list_appointments()?;
        let appointment = appointments
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or_else(|| StoreError::NotFound(format!("appointment {}", id)))?;
        appointment.status = status;
        let updated = appointment.clone();
        self.write_collection(schema::APPOINTMENTS, &appointments)?;
        Ok(updated)
    }

    /// Delete an appointment by filter-out-and-resave.
    pub fn delete_appointment(&self, id: &str) -> StoreResult<bool> {
        let mut appointments = self.list_appointments()?;
        let before = appointments.len();
        appointments.retain(|a| a.id != id);
        if appointments.len() == before {
            return Ok(false);
        }
        self.write_collection(schema::APPOINTMENTS, &appointments)?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup_store() -> Store {
        Store::open_in_memory().unwrap()
    }

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn booking(patient_id: &str) -> NewAppointment {
        NewAppointment {
            patient_id: patient_id.into(),
            date: day(2024, 3, 14),
            time: "10:30".into(),
            duration_minutes: None,
            treatment: "Cleaning".into(),
            priority: Priority::Normal,
            notes: None,
        }
    }

    #[test]
    fn test_create_defaults() {
        let store = setup_store();
        let appointment = store.create_appointment(booking("p-01")).unwrap();
        assert_eq!(appointment.id, "a-01");
        assert_eq!(appointment.duration_minutes, 60);
        assert_eq!(appointment.status, AppointmentStatus::Scheduled);
    }

    #[test]
    fn test_missing_treatment_rejected() {
        let store = setup_store();
        let mut form = booking("p-01");
        form.treatment = "".into();
        let err = store.create_appointment(form).unwrap_err();
        assert!(matches!(err, StoreError::Validation(_)));
    }

    #[test]
    fn test_overlapping_slots_allowed() {
        let store = setup_store();
        store.create_appointment(booking("p-01")).unwrap();
        // Same patient, same slot - accepted by design
        let second = store.create_appointment(booking("p-01")).unwrap();
        assert_eq!(second.id, "a-02");
        assert_eq!(store.list_appointments().unwrap().len(), 2);
    }

    #[test]
    fn test_any_status_transition_accepted() {
        let store = setup_store();
        let appointment = store.create_appointment(booking("p-01")).unwrap();

        // completed -> scheduled has no guard
        store
            .set_appointment_status(&appointment.id, AppointmentStatus::Completed)
            .unwrap();
        let back = store
            .set_appointment_status(&appointment.id, AppointmentStatus::Scheduled)
            .unwrap();
        assert_eq!(back.status, AppointmentStatus::Scheduled);
    }

    #[test]
    fn test_edit_reschedules_and_keeps_status() {
        let store = setup_store();
        let appointment = store.create_appointment(booking("p-01")).unwrap();
        store
            .set_appointment_status(&appointment.id, AppointmentStatus::Confirmed)
            .unwrap();

        let edited = store
            .edit_appointment(
                &appointment.id,
                NewAppointment {
                    date: day(2024, 3, 21),
                    time: "14:00".into(),
                    duration_minutes: Some(30),
                    ..booking("p-01")
                },
            )
            .unwrap();
        assert_eq!(edited.date, day(2024, 3, 21));
        assert_eq!(edited.time, "14:00");
        assert_eq!(edited.duration_minutes, 30);
        assert_eq!(edited.status, AppointmentStatus::Confirmed);

        let back = store.get_appointment(&appointment.id).unwrap().unwrap();
        assert_eq!(back, edited);
    }

    #[test]
    fn test_edit_unknown_appointment() {
        let store = setup_store();
        let err = store
            .edit_appointment("a-99", booking("p-01"))
            .unwrap_err();
        assert!(matches!(err, StoreError::NotFound(_)));
    }

    #[test]
    fn test_delete_appointment() {
        let store = setup_store();
        let appointment = store.create_appointment(booking("p-01")).unwrap();
        assert!(store.delete_appointment(&appointment.id).unwrap());
        assert!(store.list_appointments().unwrap().is_empty());
    }
}
