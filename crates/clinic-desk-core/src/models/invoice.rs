//! Invoice and billing models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Invoice status. Records persisted without a status are unpaid.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceStatus {
    Paid,
    #[default]
    Unpaid,
}

impl InvoiceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            InvoiceStatus::Paid => "paid",
            InvoiceStatus::Unpaid => "unpaid",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "paid" => Some(InvoiceStatus::Paid),
            "unpaid" => Some(InvoiceStatus::Unpaid),
            _ => None,
        }
    }
}

/// Payment method. Online payments require a follow-up receipt number
/// before the paid status is considered complete.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    Cash,
    Card,
    Online,
}

impl PaymentMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Cash => "cash",
            PaymentMethod::Card => "card",
            PaymentMethod::Online => "online",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "cash" => Some(PaymentMethod::Cash),
            "card" => Some(PaymentMethod::Card),
            "online" => Some(PaymentMethod::Online),
            _ => None,
        }
    }
}

/// A single billed treatment line.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TreatmentLine {
    /// Treatment description (e.g., "Root canal")
    pub treatment: String,
    /// Gross amount
    pub amount: f64,
    /// Discount on this line, 0 when absent
    #[serde(default)]
    pub discount: f64,
}

/// An invoice record. References a patient by ID; the reference may
/// dangle after patient deletion and is rendered as "Unknown Patient".
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Invoice {
    /// Sequential type-prefixed ID (`i-01`, ...)
    pub id: String,
    /// Referenced patient ID
    pub patient_id: String,
    /// Issue date
    pub date: NaiveDate,
    /// Payment due date
    pub due_date: NaiveDate,
    /// Status - absent in stored JSON means unpaid
    #[serde(default)]
    pub status: InvoiceStatus,
    /// Payment method, if chosen
    pub payment_method: Option<PaymentMethod>,
    /// Billed treatment lines
    #[serde(default)]
    pub treatments: Vec<TreatmentLine>,
    /// Sum of line amounts
    pub subtotal: f64,
    /// Sum of line discounts
    pub total_discount: f64,
    /// subtotal - total_discount
    pub total: f64,
    /// Stamped when the invoice is marked paid. Not cleared on a
    /// paid -> unpaid revert; re-stamped on the next payment.
    pub paid_date: Option<NaiveDate>,
    /// Receipt number captured for online payments
    pub receipt_number: Option<String>,
}

impl Invoice {
    /// Create a new unpaid invoice; totals derived from the lines.
    pub fn new(
        id: String,
        patient_id: String,
        date: NaiveDate,
        due_date: NaiveDate,
        treatments: Vec<TreatmentLine>,
    ) -> Self {
        let mut invoice = Self {
            id,
            patient_id,
            date,
            due_date,
            status: InvoiceStatus::Unpaid,
            payment_method: None,
            treatments,
            subtotal: 0.0,
            total_discount: 0.0,
            total: 0.0,
            paid_date: None,
            receipt_number: None,
        };
        invoice.recompute_totals();
        invoice
    }

    /// Recompute subtotal, total discount and total from the lines.
    pub fn recompute_totals(&mut self) {
        self.subtotal = self.treatments.iter().map(|t| t.amount).sum();
        self.total_discount = self.treatments.iter().map(|t| t.discount).sum();
        self.total = self.subtotal - self.total_discount;
    }

    /// Derived display status: unpaid and past the due date. Never stored.
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        self.status == InvoiceStatus::Unpaid && self.due_date < today
    }

    /// Whether a paid online invoice still awaits its receipt number.
    pub fn awaiting_receipt(&self) -> bool {
        self.status == InvoiceStatus::Paid
            && self.payment_method == Some(PaymentMethod::Online)
            && self.receipt_number.is_none()
    }
}
