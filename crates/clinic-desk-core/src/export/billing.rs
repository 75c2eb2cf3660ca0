//! Billing register export.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::escape_csv;
use crate::models::{Invoice, Patient};
use crate::store::patient_display_name;

/// One row of the billing register.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BillingRow {
    /// Invoice ID
    pub invoice_id: String,
    /// Referenced patient ID
    pub patient_id: String,
    /// Patient display name; "Unknown Patient" for dangling references
    pub patient_name: String,
    /// Issue date
    pub date: NaiveDate,
    /// Due date
    pub due_date: NaiveDate,
    /// Stored status string (paid/unpaid)
    pub status: String,
    /// Derived at export time: unpaid and past due
    pub overdue: bool,
    /// Invoice total
    pub total: f64,
    /// Paid date, if stamped
    pub paid_date: Option<NaiveDate>,
}

/// Billing register: one row per invoice with resolved patient names.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BillingRegister {
    /// Export date (drives the overdue derivation)
    pub exported_on: NaiveDate,
    /// Register rows
    pub rows: Vec<BillingRow>,
    /// Sum of all invoice totals
    pub grand_total: f64,
    /// Sum of unpaid invoice totals
    pub outstanding_total: f64,
}

impl BillingRegister {
    /// Build the register from the invoice and patient collections.
    pub fn build(invoices: &[Invoice], patients: &[Patient], today: NaiveDate) -> Self {
        let rows: Vec<BillingRow> = invoices
            .iter()
            .map(|invoice| BillingRow {
                invoice_id: invoice.id.clone(),
                patient_id: invoice.patient_id.clone(),
                patient_name: patient_display_name(patients, &invoice.patient_id),
                date: invoice.date,
                due_date: invoice.due_date,
                status: invoice.status.as_str().to_string(),
                overdue: invoice.is_overdue(today),
                total: invoice.total,
                paid_date: invoice.paid_date,
            })
            .collect();

        let grand_total = invoices.iter().map(|i| i.total).sum();
        let outstanding_total = invoices
            .iter()
            .filter(|i| i.status == crate::models::InvoiceStatus::Unpaid)
            .map(|i| i.total)
            .sum();

        Self {
            exported_on: today,
            rows,
            grand_total,
            outstanding_total,
        }
    }

    /// Export to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Export to CSV format.
    pub fn to_csv(&self) -> String {
        let mut csv = String::new();
        csv.push_str("invoice_id,patient_id,patient_name,date,due_date,status,overdue,total,paid_date\n");
        for row in &self.rows {
            csv.push_str(&format!(
                "{},{},{},{},{},{},{},{},{}\n",
                escape_csv(&row.invoice_id),
                escape_csv(&row.patient_id),
                escape_csv(&row.patient_name),
                row.date,
                row.due_date,
                row.status,
                row.overdue,
                row.total,
                row.paid_date.map(|d| d.to_string()).unwrap_or_default(),
            ));
        }
        csv
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{InvoiceStatus, TreatmentLine};

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn make_invoice(id: &str, patient_id: &str, total: f64) -> Invoice {
        Invoice::new(
            id.into(),
            patient_id.into(),
            day(2024, 3, 1),
            day(2024, 3, 10),
            vec![TreatmentLine {
                treatment: "Cleaning".into(),
                amount: total,
                discount: 0.0,
            }],
        )
    }

    #[test]
    fn test_register_resolves_names_and_totals() {
        let patients = vec![Patient::new("p-01".into(), "Amira Khan".into(), "555".into())];
        let mut paid = make_invoice("i-01", "p-01", 80.0);
        paid.status = InvoiceStatus::Paid;
        let invoices = vec![paid, make_invoice("i-02", "p-09", 40.0)];

        let register = BillingRegister::build(&invoices, &patients, day(2024, 3, 20));
        assert_eq!(register.rows[0].patient_name, "Amira Khan");
        assert_eq!(register.rows[1].patient_name, "Unknown Patient");
        assert_eq!(register.grand_total, 120.0);
        assert_eq!(register.outstanding_total, 40.0);
        assert!(register.rows[1].overdue);
        assert!(!register.rows[0].overdue);
    }

    #[test]
    fn test_csv_has_header_and_rows() {
        let patients = vec![Patient::new("p-01".into(), "Amira, Khan".into(), "555".into())];
        let invoices = vec![make_invoice("i-01", "p-01", 80.0)];

        let register = BillingRegister::build(&invoices, &patients, day(2024, 3, 5));
        let csv = register.to_csv();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("invoice_id,"));
        assert!(lines[1].contains("\"Amira, Khan\""));
    }

    #[test]
    fn test_json_export() {
        let register = BillingRegister::build(&[], &[], day(2024, 3, 5));
        let json = register.to_json().unwrap();
        assert!(json.contains("grand_total"));
    }
}
