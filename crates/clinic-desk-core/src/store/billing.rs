//! Invoice store operations.

use chrono::NaiveDate;

use super::{schema, Store, StoreError, StoreResult};
use crate::ids;
use crate::models::{Invoice, InvoiceStatus, PaymentMethod, TreatmentLine};

/// Billing form fields for a new invoice.
#[derive(Debug, Clone)]
pub struct NewInvoice {
    pub patient_id: String,
    pub date: NaiveDate,
    pub due_date: NaiveDate,
    pub payment_method: Option<PaymentMethod>,
    pub treatments: Vec<TreatmentLine>,
}

/// Result of marking an invoice paid. Online payments are a two-step
/// interaction: the paid status is incomplete until a receipt number is
/// captured with [`Store::set_invoice_receipt`].
#[derive(Debug, Clone, PartialEq)]
pub struct PaidOutcome {
    pub invoice: Invoice,
    pub awaiting_receipt: bool,
}

impl Store {
    /// Load the full invoice collection.
    pub fn list_invoices(&self) -> StoreResult<Vec<Invoice>> {
        self.read_collection(schema::INVOICES)
    }

    /// Create a new unpaid invoice; totals derived from the lines.
    pub fn create_invoice(&self, form: NewInvoice) -> StoreResult<Invoice> {
        if form.patient_id.trim().is_empty() {
            return Err(StoreError::Validation("patient is required".into()));
        }
        if form.treatments.is_empty() {
            return Err(StoreError::Validation(
                "at least one treatment line is required".into(),
            ));
        }

        let mut invoices = self.list_invoices()?;
        let id = ids::next_id(ids::INVOICE_PREFIX, invoices.iter().map(|i| i.id.as_str()));
        let mut invoice = Invoice::new(
            id,
            form.patient_id,
            form.date,
            form.due_date,
            form.treatments,
        );
        invoice.payment_method = form.payment_method;

        invoices.push(invoice.clone());
        self.write_collection(schema::INVOICES, &invoices)?;
        Ok(invoice)
    }

    /// Get an invoice by ID.
    pub fn get_invoice(&self, id: &str) -> StoreResult<Option<Invoice>> {
        Ok(self.list_invoices()?.into_iter().find(|i| i.id == id))
    }

    /// Mark an invoice paid, stamping the paid date. For online payments
    /// the outcome reports that a receipt number is still required.
    pub fn mark_invoice_paid(&self, id: &str, paid_on: NaiveDate) -> StoreResult<PaidOutcome> {
        let mut invoices = self.list_invoices()?;
        let invoice = invoices
            .iter_mut()
            .find(|i| i.id == id)
            .ok_or_else(|| StoreError::NotFound(format!("invoice {}", id)))?;
        invoice.status = InvoiceStatus::Paid;
        invoice.paid_date = Some(paid_on);
        let updated = invoice.clone();
        self.write_collection(schema::INVOICES, &invoices)?;
        Ok(PaidOutcome {
            awaiting_receipt: updated.awaiting_receipt(),
            invoice: updated,
        })
    }

    /// Capture the receipt number for a paid online invoice, completing
    /// the two-step payment flow.
    pub fn set_invoice_receipt(&self, id: &str, receipt_number: String) -> StoreResult<Invoice> {
        if receipt_number.trim().is_empty() {
            return Err(StoreError::Validation("receipt number is required".into()));
        }
        let mut invoices = self.list_invoices()?;
        let invoice = invoices
            .iter_mut()
            .find(|i| i.id == id)
            .ok_or_else(|| StoreError::NotFound(format!("invoice {}", id)))?;
        invoice.receipt_number = Some(receipt_number);
        let updated = invoice.clone();
        self.write_collection(schema::INVOICES, &invoices)?;
        Ok(updated)
    }

    /// Revert an invoice to unpaid. The paid date is kept as the source
    /// system does; the next mark-paid re-stamps it.
    pub fn mark_invoice_unpaid(&self, id: &str) -> StoreResult<Invoice> {
        let mut invoices = self.list_invoices()?;
        let invoice = invoices
            .iter_mut()
            .find(|i| i.id == id)
            .ok_or_else(|| StoreError::NotFound(format!("invoice {}", id)))?;
        invoice.status = InvoiceStatus::Unpaid;
        let updated = invoice.clone();
        self.write_collection(schema::INVOICES, &invoices)?;
        Ok(updated)
    }

    /// Delete an invoice by filter-out-and-resave.
    pub fn delete_invoice(&self, id: &str) -> StoreResult<bool> {
        let mut invoices = self.list_invoices()?;
        let before = invoices.len();
        invoices.retain(|i| i.id != id);
        if invoices.len() == before {
            return Ok(false);
        }
        self.write_collection(schema::INVOICES, &invoices)?;
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

    fn billing_form(method: Option<PaymentMethod>) -> NewInvoice {
        NewInvoice {
            patient_id: "p-01".into(),
            date: day(2024, 3, 1),
            due_date: day(2024, 3, 15),
            payment_method: method,
            treatments: vec![TreatmentLine {
                treatment: "Cleaning".into(),
                amount: 80.0,
                discount: 5.0,
            }],
        }
    }

    #[test]
    fn test_create_computes_totals() {
        let store = setup_store();
        let invoice = store.create_invoice(billing_form(None)).unwrap();
        assert_eq!(invoice.id, "i-01");
        assert_eq!(invoice.subtotal, 80.0);
        assert_eq!(invoice.total, 75.0);
        assert_eq!(invoice.status, InvoiceStatus::Unpaid);
    }

    #[test]
    fn test_empty_treatments_rejected() {
        let store = setup_store();
        let mut form = billing_form(None);
        form.treatments.clear();
        let err = store.create_invoice(form).unwrap_err();
        assert!(matches!(err, StoreError::Validation(_)));
    }

    #[test]
    fn test_mark_paid_stamps_date() {
        let store = setup_store();
        let invoice = store
            .create_invoice(billing_form(Some(PaymentMethod::Cash)))
            .unwrap();

        let outcome = store
            .mark_invoice_paid(&invoice.id, day(2024, 3, 5))
            .unwrap();
        assert!(!outcome.awaiting_receipt);
        assert_eq!(outcome.invoice.status, InvoiceStatus::Paid);
        assert_eq!(outcome.invoice.paid_date, Some(day(2024, 3, 5)));
    }

    #[test]
    fn test_online_payment_is_two_step() {
        let store = setup_store();
        let invoice = store
            .create_invoice(billing_form(Some(PaymentMethod::Online)))
            .unwrap();

        let outcome = store
            .mark_invoice_paid(&invoice.id, day(2024, 3, 5))
            .unwrap();
        assert!(outcome.awaiting_receipt);

        let completed = store
            .set_invoice_receipt(&invoice.id, "RCPT-2024-031".into())
            .unwrap();
        assert!(!completed.awaiting_receipt());
        assert_eq!(completed.receipt_number.as_deref(), Some("RCPT-2024-031"));
    }

    #[test]
    fn test_revert_to_unpaid_keeps_paid_date() {
        let store = setup_store();
        let invoice = store
            .create_invoice(billing_form(Some(PaymentMethod::Card)))
            .unwrap();
        store
            .mark_invoice_paid(&invoice.id, day(2024, 3, 5))
            .unwrap();

        let reverted = store.mark_invoice_unpaid(&invoice.id).unwrap();
        assert_eq!(reverted.status, InvoiceStatus::Unpaid);
        // Faithful to the source: the stamp survives the revert
        assert_eq!(reverted.paid_date, Some(day(2024, 3, 5)));

        // Re-paying overwrites it
        let outcome = store
            .mark_invoice_paid(&invoice.id, day(2024, 4, 1))
            .unwrap();
        assert_eq!(outcome.invoice.paid_date, Some(day(2024, 4, 1)));
    }
}
