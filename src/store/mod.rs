//! Persistence layer for the employee directory.
//!
//! The service and the reporting resolver talk to storage exclusively
//! through [`EmployeeStore`], so backends are pluggable: [`MemoryStore`]
//! for local runs and tests, Postgres behind the `database` feature.

use anyhow::Result;
use async_trait::async_trait;

use crate::models::{Compensation, Employee};

pub mod memory;
pub use memory::MemoryStore;

#[cfg(feature = "database")]
pub mod postgres;
#[cfg(feature = "database")]
pub use postgres::PgEmployeeStore;

/// Storage operations for employee and compensation records.
#[async_trait]
pub trait EmployeeStore: Send + Sync {
    /// Insert a new employee row. The id must already be assigned.
    async fn insert_employee(&self, employee: &Employee) -> Result<()>;

    /// Fetch an employee together with its immediate direct-report
    /// references, one level deep. Returns `None` for an unknown id.
    async fn fetch_with_direct_reports(&self, id: &str) -> Result<Option<Employee>>;

    /// Replace every field of an existing employee, keeping its id.
    /// Returns `false` when the id is unknown.
    async fn replace_employee(&self, id: &str, employee: &Employee) -> Result<bool>;

    /// Insert a compensation row.
    async fn insert_compensation(&self, compensation: &Compensation) -> Result<()>;

    /// All compensation rows for an employee, most recent effective date
    /// first. Unknown employees yield an empty list.
    async fn compensations_for(&self, employee_id: &str) -> Result<Vec<Compensation>>;
}
