//! Salary store operations.

use chrono::NaiveDate;

use super::{schema, Store, StoreError, StoreResult};
use crate::ids;
use crate::models::{Salary, SalaryStatus};

/// Payroll form fields for a new salary record.
#[derive(Debug, Clone)]
pub struct NewSalary {
    pub staff_id: String,
    pub month: u32,
    pub year: i32,
    pub basic_salary: f64,
    pub total_allowance: f64,
    pub total_deduction: f64,
}

impl Store {
    /// Load the full salary collection.
    pub fn list_salaries(&self) -> StoreResult<Vec<Salary>> {
        self.read_collection(schema::SALARIES)
    }

    /// Create a new pending salary record; net derived from components.
    pub fn create_salary(&self, form: NewSalary) -> StoreResult<Salary> {
        if form.staff_id.trim().is_empty() {
            return Err(StoreError::Validation("staff is required".into()));
        }
        if !(1..=12).contains(&form.month) {
            return Err(StoreError::Validation(format!(
                "month {} out of range",
                form.month
            )));
        }

        let mut salaries = self.list_salaries()?;
        let id = ids::next_id(ids::SALARY_PREFIX, salaries.iter().map(|s| s.id.as_str()));
        let salary = Salary::new(
            id,
            form.staff_id,
            form.month,
            form.year,
            form.basic_salary,
            form.total_allowance,
            form.total_deduction,
        );

        salaries.push(salary.clone());
        self.write_collection(schema::SALARIES, &salaries)?;
        Ok(salary)
    }

    /// Get a salary record by ID.
    pub fn get_salary(&self, id: &str) -> StoreResult<Option<Salary>> {
        Ok(self.list_salaries()?.into_iter().find(|s| s.id == id))
    }

    /// Set a salary record's status and persist. Marking paid stamps the
    /// paid date; reverting to pending clears it.
    pub fn set_salary_status(
        &self,
        id: &str,
        status: SalaryStatus,
        today: NaiveDate,
    ) -> StoreResult<Salary> {
        let mut salaries = self.list_salaries()?;
        let salary = salaries
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or_else(|| StoreError::NotFound(format!("salary {}", id)))?;
        salary.status = status;
        salary.paid_date = match status {
            SalaryStatus::Paid => Some(today),
            SalaryStatus::Pending => None,
        };
        let updated = salary.clone();
        self.write_collection(schema::SALARIES, &salaries)?;
        Ok(updated)
    }

    /// Delete a salary record by filter-out-and-resave.
    pub fn delete_salary(&self, id: &str) -> StoreResult<bool> {
        let mut salaries = self.list_salaries()?;
        let before = salaries.len();
        salaries.retain(|s| s.id != id);
        if salaries.len() == before {
            return Ok(false);
        }
        self.write_collection(schema::SALARIES, &salaries)?;
        Ok(true)
    }
}
