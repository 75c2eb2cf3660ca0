//! Salary models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Salary payment status. Records persisted without a status are pending.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SalaryStatus {
    Paid,
    #[default]
    Pending,
}

impl SalaryStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SalaryStatus::Paid => "paid",
            SalaryStatus::Pending => "pending",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "paid" => Some(SalaryStatus::Paid),
            "pending" => Some(SalaryStatus::Pending),
            _ => None,
        }
    }
}

/// A monthly salary record for one staff member.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Salary {
    /// Sequential type-prefixed ID (`sl-01`, ...)
    pub id: String,
    /// Referenced staff ID
    pub staff_id: String,
    /// Month (1-12)
    pub month: u32,
    /// Year
    pub year: i32,
    /// Base salary for the month
    pub basic_salary: f64,
    /// Sum of allowances
    pub total_allowance: f64,
    /// Sum of deductions
    pub total_deduction: f64,
    /// basic + allowance - deduction
    pub net_salary: f64,
    /// Status - absent in stored JSON means pending
    #[serde(default)]
    pub status: SalaryStatus,
    /// Stamped when the salary is marked paid
    pub paid_date: Option<NaiveDate>,
}

impl Salary {
    /// Create a new pending salary record; net derived from components.
    pub fn new(
        id: String,
        staff_id: String,
        month: u32,
        year: i32,
        basic_salary: f64,
        total_allowance: f64,
        total_deduction: f64,
    ) -> Self {
        let mut salary = Self {
            id,
            staff_id,
            month,
            year,
            basic_salary,
            total_allowance,
            total_deduction,
            net_salary: 0.0,
            status: SalaryStatus::Pending,
            paid_date: None,
        };
        salary.recompute_net();
        salary
    }

    /// Recompute the net salary from its components.
    pub fn recompute_net(&mut self) {
        self.net_salary = self.basic_salary + self.total_allowance - self.total_deduction;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_net_salary_derived() {
        let salary = Salary::new("sl-01".into(), "s-01".into(), 3, 2024, 2400.0, 300.0, 120.0);
        assert_eq!(salary.net_salary, 2580.0);
        assert_eq!(salary.status, SalaryStatus::Pending);
    }

    #[test]
    fn test_missing_status_deserializes_pending() {
        let json = r#"{"id":"sl-02","staff_id":"s-01","month":4,"year":2024,
                       "basic_salary":2400.0,"total_allowance":0.0,
                       "total_deduction":0.0,"net_salary":2400.0,"paid_date":null}"#;
        let salary: Salary = serde_json::from_str(json).unwrap();
        assert_eq!(salary.status, SalaryStatus::Pending);
    }
}
