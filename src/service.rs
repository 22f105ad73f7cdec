//! Domain service for the employee directory.
//!
//! Orchestrates the store and the reporting resolver. Handlers call into
//! this layer; it never touches HTTP types.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use crate::error::{DirectoryError, DirectoryResult};
use crate::models::{Compensation, Employee, NewCompensation, NewEmployee, ReportingStructure};
use crate::reporting;
use crate::store::EmployeeStore;

pub struct EmployeeService {
    store: Arc<dyn EmployeeStore>,
}

impl EmployeeService {
    pub fn new(store: Arc<dyn EmployeeStore>) -> Self {
        Self { store }
    }

    /// Create an employee under a freshly assigned id.
    pub async fn create_employee(&self, fields: NewEmployee) -> DirectoryResult<Employee> {
        let employee = fields.into_employee(Uuid::new_v4().to_string());
        self.store.insert_employee(&employee).await?;
        info!("Created employee {}", employee.employee_id);
        Ok(employee)
    }

    /// Point lookup. Empty ids resolve to nothing without a store call.
    pub async fn employee_by_id(&self, id: &str) -> DirectoryResult<Option<Employee>> {
        if id.is_empty() {
            return Ok(None);
        }
        Ok(self.store.fetch_with_direct_reports(id).await?)
    }

    /// Replace every field of an existing employee, keeping its id.
    /// Returns the stored record, or `None` when the id is unknown.
    pub async fn replace_employee(
        &self,
        id: &str,
        fields: NewEmployee,
    ) -> DirectoryResult<Option<Employee>> {
        if id.is_empty() {
            return Ok(None);
        }
        let replacement = fields.into_employee(id.to_string());
        if self.store.replace_employee(id, &replacement).await? {
            info!("Replaced employee {}", id);
            Ok(Some(replacement))
        } else {
            Ok(None)
        }
    }

    /// Total direct and indirect reports under `id`. See [`crate::reporting`].
    pub async fn reporting_structure(
        &self,
        id: &str,
    ) -> DirectoryResult<Option<ReportingStructure>> {
        reporting::resolve(self.store.as_ref(), id).await
    }

    /// Record a compensation data point. The referenced employee must exist.
    pub async fn create_compensation(
        &self,
        fields: NewCompensation,
    ) -> DirectoryResult<Compensation> {
        if self
            .store
            .fetch_with_direct_reports(&fields.employee_id)
            .await?
            .is_none()
        {
            return Err(DirectoryError::UnknownEmployee {
                employee_id: fields.employee_id,
            });
        }
        let compensation = Compensation {
            compensation_id: Uuid::new_v4().to_string(),
            employee_id: fields.employee_id,
            salary: fields.salary,
            effective_date: fields.effective_date,
        };
        self.store.insert_compensation(&compensation).await?;
        info!(
            "Created compensation {} for employee {}",
            compensation.compensation_id, compensation.employee_id
        );
        Ok(compensation)
    }

    /// Compensation history for an employee, most recent effective date
    /// first. Unknown employees yield an empty history.
    pub async fn compensations_for(&self, employee_id: &str) -> DirectoryResult<Vec<Compensation>> {
        if employee_id.is_empty() {
            return Ok(Vec::new());
        }
        Ok(self.store.compensations_for(employee_id).await?)
    }
}
