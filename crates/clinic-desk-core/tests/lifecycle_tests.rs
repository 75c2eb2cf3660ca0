//! End-to-end lifecycle tests over an in-memory store.
//!
//! Exercises the full cycle the FFI surface exposes: create records,
//! list them through named filters and fixed-size pages, move them
//! through status changes, and delete them with page re-clamping.

use clinic_desk_core::{
    open_store_in_memory, ClinicCore, ClinicError, FfiNewAttendance, FfiNewInvoice,
    FfiNewPatient, FfiNewSalary, FfiNewStaff, FfiTreatmentLine,
};
use std::sync::Arc;

fn core() -> Arc<ClinicCore> {
    open_store_in_memory().unwrap()
}

fn add_patient(core: &ClinicCore, name: &str, phone: &str) -> String {
    core.create_patient(FfiNewPatient {
        name: name.to_string(),
        phone: phone.to_string(),
        date_of_birth: None,
        gender: None,
        address: None,
        medical_history: None,
    })
    .unwrap()
    .id
}

fn add_staff(core: &ClinicCore, name: &str, phone: &str) -> String {
    core.create_staff(FfiNewStaff {
        name: name.to_string(),
        role: "Dentist".to_string(),
        phone: phone.to_string(),
        email: format!("{}@clinic.test", phone),
        date_of_birth: None,
        join_date: Some("2026-01-05".to_string()),
        monthly_salary: 4000.0,
    })
    .unwrap()
    .id
}

fn add_invoice(core: &ClinicCore, patient_id: &str, amount: f64) -> String {
    core.create_invoice(FfiNewInvoice {
        patient_id: patient_id.to_string(),
        date: "2026-08-01".to_string(),
        due_date: "2026-08-15".to_string(),
        payment_method: Some("online".to_string()),
        treatments: vec![FfiTreatmentLine {
            treatment: "Root canal".to_string(),
            amount,
            discount: 0.0,
        }],
    })
    .unwrap()
    .id
}

#[test]
fn test_patient_ids_are_sequential_and_prefixed() {
    let core = core();
    assert_eq!(add_patient(&core, "Asha", "555-0001"), "p-01");
    assert_eq!(add_patient(&core, "Ben", "555-0002"), "p-02");
    assert_eq!(add_patient(&core, "Cara", "555-0003"), "p-03");
}

#[test]
fn test_gap_left_by_deletion_is_not_refilled() {
    let core = core();
    add_patient(&core, "Asha", "555-0001");
    add_patient(&core, "Ben", "555-0002");
    core.delete_patient("p-01".to_string(), "all".to_string(), 1)
        .unwrap();
    assert_eq!(add_patient(&core, "Cara", "555-0003"), "p-03");
}

#[test]
fn test_duplicate_phone_is_rejected_and_nothing_saved() {
    let core = core();
    add_patient(&core, "Asha", "555-0001");
    let err = core
        .create_patient(FfiNewPatient {
            name: "Imposter".to_string(),
            phone: "555-0001".to_string(),
            date_of_birth: None,
            gender: None,
            address: None,
            medical_history: None,
        })
        .unwrap_err();
    assert!(matches!(err, ClinicError::ValidationError(_)));

    let page = core.patient_page("all".to_string(), 1).unwrap();
    assert_eq!(page.items.len(), 1);
}

#[test]
fn test_pagination_is_fixed_at_ten() {
    let core = core();
    for i in 0..23 {
        add_patient(&core, &format!("Patient {}", i), &format!("555-1{:03}", i));
    }

    let first = core.patient_page("all".to_string(), 1).unwrap();
    assert_eq!(first.items.len(), 10);
    assert_eq!(first.page, 1);
    assert_eq!(first.total_pages, 3);

    let last = core.patient_page("all".to_string(), 3).unwrap();
    assert_eq!(last.items.len(), 3);
    assert_eq!(last.page, 3);
}

#[test]
fn test_out_of_range_pages_clamp_instead_of_failing() {
    let core = core();
    for i in 0..5 {
        add_patient(&core, &format!("Patient {}", i), &format!("555-2{:03}", i));
    }

    let clamped = core.patient_page("all".to_string(), 99).unwrap();
    assert_eq!(clamped.page, 1);
    assert_eq!(clamped.items.len(), 5);

    let low = core.patient_page("all".to_string(), 0).unwrap();
    assert_eq!(low.page, 1);
}

#[test]
fn test_empty_collection_page_is_one_of_zero() {
    let core = core();
    let page = core.patient_page("all".to_string(), 1).unwrap();
    assert!(page.items.is_empty());
    assert_eq!(page.page, 1);
    assert_eq!(page.total_pages, 0);
}

#[test]
fn test_deleting_the_only_record_of_the_last_page_reclamps() {
    let core = core();
    let patient_id = add_patient(&core, "Asha", "555-0001");
    // 21 invoices: 3 pages, a single record on page 3.
    let mut last_id = String::new();
    for i in 0..21 {
        last_id = add_invoice(&core, &patient_id, 100.0 + i as f64);
    }

    let before = core.invoice_page("all".to_string(), 3).unwrap();
    assert_eq!(before.items.len(), 1);
    assert_eq!(before.total_pages, 3);

    let after = core
        .delete_invoice(last_id, "all".to_string(), 3)
        .unwrap();
    assert_eq!(after.page, 2);
    assert_eq!(after.total_pages, 2);
    assert_eq!(after.items.len(), 10);
}

#[test]
fn test_unknown_filter_name_surfaces_as_invalid_input() {
    let core = core();
    let err = core.patient_page("archived".to_string(), 1).unwrap_err();
    assert!(matches!(err, ClinicError::InvalidInput(_)));
}

#[test]
fn test_status_filter_listing_tracks_transitions() {
    let core = core();
    let id = add_patient(&core, "Asha", "555-0001");
    add_patient(&core, "Ben", "555-0002");

    core.set_patient_status(id.clone(), "inactive".to_string())
        .unwrap();

    let inactive = core.patient_page("inactive".to_string(), 1).unwrap();
    assert_eq!(inactive.items.len(), 1);
    assert_eq!(inactive.items[0].id, id);

    let active = core.patient_page("active".to_string(), 1).unwrap();
    assert_eq!(active.items.len(), 1);
    assert_eq!(active.items[0].id, "p-02");
}

#[test]
fn test_edit_forms_update_records_in_place() {
    let core = core();
    let patient_id = add_patient(&core, "Asha Rao", "555-0001");

    let edited = core
        .update_patient(
            patient_id.clone(),
            FfiNewPatient {
                name: "Asha Rao-Mehta".to_string(),
                phone: "555-0009".to_string(),
                date_of_birth: Some("1990-04-02".to_string()),
                gender: None,
                address: Some("12 Clinic Rd".to_string()),
                medical_history: None,
            },
        )
        .unwrap();
    assert_eq!(edited.id, patient_id);
    assert_eq!(edited.name, "Asha Rao-Mehta");
    assert_eq!(edited.phone, "555-0009");
    assert_eq!(edited.status, "active");

    // The edit is visible through the listing, not appended as a new record
    let page = core.patient_page("all".to_string(), 1).unwrap();
    assert_eq!(page.items.len(), 1);
    assert_eq!(page.items[0].name, "Asha Rao-Mehta");

    let staff_id = add_staff(&core, "Dr. Mehta", "555-9001");
    let promoted = core
        .update_staff(
            staff_id,
            FfiNewStaff {
                name: "Dr. Mehta".to_string(),
                role: "Senior Dentist".to_string(),
                phone: "555-9001".to_string(),
                email: "mehta@clinic.test".to_string(),
                date_of_birth: None,
                join_date: None,
                monthly_salary: 5200.0,
            },
        )
        .unwrap();
    assert_eq!(promoted.role, "Senior Dentist");
    assert_eq!(promoted.join_date, "2026-01-05");
}

#[test]
fn test_appointment_reschedule_keeps_status() {
    let core = core();
    let patient_id = add_patient(&core, "Asha Rao", "555-0001");
    let appointment = core
        .create_appointment(clinic_desk_core::FfiNewAppointment {
            patient_id: patient_id.clone(),
            date: "2026-09-01".to_string(),
            time: "10:30".to_string(),
            duration_minutes: None,
            treatment: "Cleaning".to_string(),
            priority: "normal".to_string(),
            notes: None,
        })
        .unwrap();
    core.set_appointment_status(appointment.id.clone(), "confirmed".to_string())
        .unwrap();

    let moved = core
        .update_appointment(
            appointment.id,
            clinic_desk_core::FfiNewAppointment {
                patient_id,
                date: "2026-09-08".to_string(),
                time: "09:00".to_string(),
                duration_minutes: Some(30),
                treatment: "Cleaning".to_string(),
                priority: "high".to_string(),
                notes: Some("rescheduled".to_string()),
            },
        )
        .unwrap();
    assert_eq!(moved.date, "2026-09-08");
    assert_eq!(moved.duration_minutes, 30);
    assert_eq!(moved.status, "confirmed");
    assert_eq!(moved.priority, "high");
}

#[test]
fn test_appointment_booking_and_unguarded_transitions() {
    let core = core();
    let patient_id = add_patient(&core, "Asha Rao", "555-0001");

    let appointment = core
        .create_appointment(clinic_desk_core::FfiNewAppointment {
            patient_id,
            date: "2026-09-01".to_string(),
            time: "10:30".to_string(),
            duration_minutes: None,
            treatment: "Cleaning".to_string(),
            priority: "normal".to_string(),
            notes: None,
        })
        .unwrap();
    assert_eq!(appointment.id, "a-01");
    assert_eq!(appointment.status, "scheduled");
    assert_eq!(appointment.duration_minutes, 60);
    assert_eq!(appointment.patient_name, "Asha Rao");

    // No transition guards: completed can go straight back to scheduled.
    core.set_appointment_status(appointment.id.clone(), "completed".to_string())
        .unwrap();
    let back = core
        .set_appointment_status(appointment.id, "scheduled".to_string())
        .unwrap();
    assert_eq!(back.status, "scheduled");

    let page = core
        .appointment_page("all".to_string(), "scheduled".to_string(), 1)
        .unwrap();
    assert_eq!(page.items.len(), 1);
}

#[test]
fn test_online_payment_is_a_two_step_interaction() {
    let core = core();
    let patient_id = add_patient(&core, "Asha", "555-0001");
    let invoice_id = add_invoice(&core, &patient_id, 250.0);

    let outcome = core.mark_invoice_paid(invoice_id.clone()).unwrap();
    assert!(outcome.awaiting_receipt);
    assert_eq!(outcome.invoice.status, "paid");
    assert!(outcome.invoice.paid_date.is_some());
    assert!(outcome.invoice.receipt_number.is_none());

    let settled = core
        .set_invoice_receipt(invoice_id.clone(), "RCP-1001".to_string())
        .unwrap();
    assert_eq!(settled.receipt_number.as_deref(), Some("RCP-1001"));

    // Reverting keeps the invoice listable as unpaid again.
    let reverted = core.mark_invoice_unpaid(invoice_id).unwrap();
    assert_eq!(reverted.status, "unpaid");
    let unpaid = core.invoice_page("unpaid".to_string(), 1).unwrap();
    assert_eq!(unpaid.items.len(), 1);
}

#[test]
fn test_invoice_totals_and_patient_join() {
    let core = core();
    let patient_id = add_patient(&core, "Asha Rao", "555-0001");
    core.create_invoice(FfiNewInvoice {
        patient_id: patient_id.clone(),
        date: "2026-08-01".to_string(),
        due_date: "2026-08-15".to_string(),
        payment_method: Some("cash".to_string()),
        treatments: vec![
            FfiTreatmentLine {
                treatment: "Scaling".to_string(),
                amount: 120.0,
                discount: 20.0,
            },
            FfiTreatmentLine {
                treatment: "Filling".to_string(),
                amount: 80.0,
                discount: 0.0,
            },
        ],
    })
    .unwrap();

    let page = core.invoice_page("all".to_string(), 1).unwrap();
    let invoice = &page.items[0];
    assert_eq!(invoice.subtotal, 200.0);
    assert_eq!(invoice.total_discount, 20.0);
    assert_eq!(invoice.total, 180.0);
    assert_eq!(invoice.patient_name, "Asha Rao");
}

#[test]
fn test_invoice_for_deleted_patient_renders_unknown() {
    let core = core();
    let patient_id = add_patient(&core, "Asha", "555-0001");
    add_invoice(&core, &patient_id, 90.0);
    core.delete_patient(patient_id, "all".to_string(), 1)
        .unwrap();

    let page = core.invoice_page("all".to_string(), 1).unwrap();
    assert_eq!(page.items[0].patient_name, "Unknown Patient");
}

#[test]
fn test_leave_attendance_moves_staff_to_leave() {
    let core = core();
    let staff_id = add_staff(&core, "Dr. Mehta", "555-9001");

    core.record_attendance(FfiNewAttendance {
        staff_id: staff_id.clone(),
        date: "2026-08-26".to_string(),
        time: None,
        status: "leave".to_string(),
        notes: Some("Family emergency".to_string()),
    })
    .unwrap();

    let on_leave = core.staff_page("leave".to_string(), 1).unwrap();
    assert_eq!(on_leave.items.len(), 1);
    assert_eq!(on_leave.items[0].id, staff_id);
    assert_eq!(
        on_leave.items[0].leave_start_date.as_deref(),
        Some("2026-08-26")
    );
}

#[test]
fn test_present_attendance_leaves_staff_status_alone() {
    let core = core();
    let staff_id = add_staff(&core, "Dr. Mehta", "555-9001");

    core.record_attendance(FfiNewAttendance {
        staff_id: staff_id.clone(),
        date: "2026-08-26".to_string(),
        time: Some("08:55".to_string()),
        status: "present".to_string(),
        notes: None,
    })
    .unwrap();

    let active = core.staff_page("active".to_string(), 1).unwrap();
    assert_eq!(active.items.len(), 1);
}

#[test]
fn test_salary_paid_stamps_and_pending_clears() {
    let core = core();
    let staff_id = add_staff(&core, "Dr. Mehta", "555-9001");
    let salary = core
        .create_salary(FfiNewSalary {
            staff_id: staff_id.clone(),
            month: 8,
            year: 2026,
            basic_salary: 4000.0,
            total_allowance: 500.0,
            total_deduction: 200.0,
        })
        .unwrap();
    assert_eq!(salary.net_salary, 4300.0);
    assert_eq!(salary.status, "pending");
    assert_eq!(salary.staff_name, "Dr. Mehta");

    let paid = core
        .set_salary_status(salary.id.clone(), "paid".to_string())
        .unwrap();
    assert!(paid.paid_date.is_some());

    let pending = core
        .set_salary_status(salary.id, "pending".to_string())
        .unwrap();
    assert!(pending.paid_date.is_none());
}

#[test]
fn test_invalid_month_is_rejected() {
    let core = core();
    let staff_id = add_staff(&core, "Dr. Mehta", "555-9001");
    let err = core
        .create_salary(FfiNewSalary {
            staff_id,
            month: 13,
            year: 2026,
            basic_salary: 4000.0,
            total_allowance: 0.0,
            total_deduction: 0.0,
        })
        .unwrap_err();
    assert!(matches!(err, ClinicError::ValidationError(_)));
}

#[test]
fn test_status_change_on_missing_record_is_not_found() {
    let core = core();
    let err = core
        .set_patient_status("p-99".to_string(), "inactive".to_string())
        .unwrap_err();
    assert!(matches!(err, ClinicError::NotFound(_)));
}

#[test]
fn test_search_finds_patients_by_partial_name_and_phone() {
    let core = core();
    add_patient(&core, "Asha Rao", "555-0001");
    add_patient(&core, "Benjamin Okafor", "555-0002");

    let by_name = core.search_patients("benjamin".to_string(), 5).unwrap();
    assert_eq!(by_name[0].name, "Benjamin Okafor");

    let by_phone = core.search_patients("555-0001".to_string(), 5).unwrap();
    assert_eq!(by_phone[0].name, "Asha Rao");
}

#[test]
fn test_billing_export_includes_header_and_rows() {
    let core = core();
    let patient_id = add_patient(&core, "Asha Rao", "555-0001");
    add_invoice(&core, &patient_id, 250.0);

    let csv = core.export_billing_csv().unwrap();
    let mut lines = csv.lines();
    let header = lines.next().unwrap();
    assert!(header.contains("patient_name"));
    assert!(lines.next().unwrap().contains("Asha Rao"));

    let json = core.export_billing_json().unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed["rows"].as_array().unwrap().len(), 1);
}
