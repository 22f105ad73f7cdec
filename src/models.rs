//! Domain models for the employee directory.
//!
//! All types serialize in camelCase, which is the wire format the REST API
//! and the bundled seed data share.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Shallow reference to another employee, as carried in a manager's
/// direct-report list.
///
/// Only the id is meaningful. Consumers re-fetch the full record before
/// relying on anything else, and the id is not guaranteed to resolve; the
/// reporting resolver treats an unresolvable reference as corrupted data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeRef {
    pub employee_id: String,
}

impl EmployeeRef {
    pub fn new(employee_id: impl Into<String>) -> Self {
        Self {
            employee_id: employee_id.into(),
        }
    }
}

/// An employee record as stored and served.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub employee_id: String,
    pub first_name: String,
    pub last_name: String,
    pub position: String,
    pub department: String,
    /// Immediate reports only, in list order. Empty for individual
    /// contributors; omitted in JSON input is treated as empty.
    #[serde(default)]
    pub direct_reports: Vec<EmployeeRef>,
}

/// Employee fields accepted on create and replace. The id is never
/// client-supplied: create assigns a fresh one, replace keeps the existing
/// one, and an id present in the request body is ignored.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewEmployee {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub position: String,
    #[serde(default)]
    pub department: String,
    #[serde(default)]
    pub direct_reports: Vec<EmployeeRef>,
}

impl NewEmployee {
    /// Materialize a full record under the given id.
    pub fn into_employee(self, employee_id: String) -> Employee {
        Employee {
            employee_id,
            first_name: self.first_name,
            last_name: self.last_name,
            position: self.position,
            department: self.department,
            direct_reports: self.direct_reports,
        }
    }
}

/// One compensation data point for an employee.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Compensation {
    pub compensation_id: String,
    pub employee_id: String,
    pub salary: Decimal,
    pub effective_date: DateTime<Utc>,
}

/// Compensation fields accepted on create.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCompensation {
    pub employee_id: String,
    pub salary: Decimal,
    pub effective_date: DateTime<Utc>,
}

/// Result of resolving the reporting structure under an employee.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportingStructure {
    /// The root employee, including its immediate direct-report references.
    pub employee: Employee,
    /// Total count of direct and indirect reports under the root. Each
    /// distinct employee counts once, however many chains reach it.
    pub number_of_reports: u32,
}
