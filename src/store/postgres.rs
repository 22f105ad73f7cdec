//! PostgreSQL implementation of [`EmployeeStore`].
//!
//! All SQL is runtime-checked (`sqlx::query`, not `sqlx::query!`) so the
//! crate compiles without a database connection. Direct-report lists live in
//! their own table keyed by manager, with an explicit sort order so the list
//! round-trips exactly as submitted.

use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::{FromRow, PgPool, Postgres, Transaction};

use super::EmployeeStore;
use crate::models::{Compensation, Employee, EmployeeRef};

#[derive(Debug, FromRow)]
struct EmployeeRow {
    employee_id: String,
    first_name: String,
    last_name: String,
    position: String,
    department: String,
}

impl EmployeeRow {
    fn into_employee(self, direct_reports: Vec<EmployeeRef>) -> Employee {
        Employee {
            employee_id: self.employee_id,
            first_name: self.first_name,
            last_name: self.last_name,
            position: self.position,
            department: self.department,
            direct_reports,
        }
    }
}

#[derive(Debug, FromRow)]
struct CompensationRow {
    compensation_id: String,
    employee_id: String,
    salary: Decimal,
    effective_date: DateTime<Utc>,
}

impl From<CompensationRow> for Compensation {
    fn from(row: CompensationRow) -> Self {
        Compensation {
            compensation_id: row.compensation_id,
            employee_id: row.employee_id,
            salary: row.salary,
            effective_date: row.effective_date,
        }
    }
}

/// Postgres-backed [`EmployeeStore`].
pub struct PgEmployeeStore {
    pool: PgPool,
}

impl PgEmployeeStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Apply the bundled schema migrations.
    pub async fn run_migrations(&self) -> Result<()> {
        sqlx::migrate!("./migrations")
            .run(&self.pool)
            .await
            .context("failed to run employee directory migrations")
    }
}

async fn insert_report_rows(
    tx: &mut Transaction<'_, Postgres>,
    manager_id: &str,
    reports: &[EmployeeRef],
) -> Result<()> {
    for (idx, report) in reports.iter().enumerate() {
        sqlx::query(
            "INSERT INTO direct_reports (manager_id, report_id, sort_order) \
             VALUES ($1, $2, $3)",
        )
        .bind(manager_id)
        .bind(&report.employee_id)
        .bind(idx as i32)
        .execute(&mut **tx)
        .await
        .context("failed to insert direct report row")?;
    }
    Ok(())
}

#[async_trait]
impl EmployeeStore for PgEmployeeStore {
    async fn insert_employee(&self, employee: &Employee) -> Result<()> {
        let mut tx = self
            .pool
            .begin()
            .await
            .context("failed to begin transaction")?;

        sqlx::query(
            "INSERT INTO employees (employee_id, first_name, last_name, position, department) \
             VALUES ($1, $2, $3, $4, $5)",
        )
        .bind(&employee.employee_id)
        .bind(&employee.first_name)
        .bind(&employee.last_name)
        .bind(&employee.position)
        .bind(&employee.department)
        .execute(&mut *tx)
        .await
        .context("failed to insert employee")?;

        insert_report_rows(&mut tx, &employee.employee_id, &employee.direct_reports).await?;

        tx.commit()
            .await
            .context("failed to commit employee insert")?;
        Ok(())
    }

    async fn fetch_with_direct_reports(&self, id: &str) -> Result<Option<Employee>> {
        let row = sqlx::query_as::<_, EmployeeRow>(
            "SELECT employee_id, first_name, last_name, position, department \
             FROM employees WHERE employee_id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .context("failed to fetch employee")?;

        let Some(row) = row else {
            return Ok(None);
        };

        let report_ids: Vec<String> = sqlx::query_scalar(
            "SELECT report_id FROM direct_reports WHERE manager_id = $1 ORDER BY sort_order",
        )
        .bind(id)
        .fetch_all(&self.pool)
        .await
        .context("failed to fetch direct reports")?;

        let reports = report_ids.into_iter().map(EmployeeRef::new).collect();
        Ok(Some(row.into_employee(reports)))
    }

    async fn replace_employee(&self, id: &str, employee: &Employee) -> Result<bool> {
        let mut tx = self
            .pool
            .begin()
            .await
            .context("failed to begin transaction")?;

        let updated = sqlx::query(
            "UPDATE employees \
             SET first_name = $2, last_name = $3, position = $4, department = $5 \
             WHERE employee_id = $1",
        )
        .bind(id)
        .bind(&employee.first_name)
        .bind(&employee.last_name)
        .bind(&employee.position)
        .bind(&employee.department)
        .execute(&mut *tx)
        .await
        .context("failed to update employee")?;

        if updated.rows_affected() == 0 {
            // Dropping the transaction rolls back.
            return Ok(false);
        }

        sqlx::query("DELETE FROM direct_reports WHERE manager_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .context("failed to clear direct report rows")?;

        insert_report_rows(&mut tx, id, &employee.direct_reports).await?;

        tx.commit()
            .await
            .context("failed to commit employee replace")?;
        Ok(true)
    }

    async fn insert_compensation(&self, compensation: &Compensation) -> Result<()> {
        sqlx::query(
            "INSERT INTO compensation (compensation_id, employee_id, salary, effective_date) \
             VALUES ($1, $2, $3, $4)",
        )
        .bind(&compensation.compensation_id)
        .bind(&compensation.employee_id)
        .bind(compensation.salary)
        .bind(compensation.effective_date)
        .execute(&self.pool)
        .await
        .context("failed to insert compensation")?;
        Ok(())
    }

    async fn compensations_for(&self, employee_id: &str) -> Result<Vec<Compensation>> {
        let rows = sqlx::query_as::<_, CompensationRow>(
            "SELECT compensation_id, employee_id, salary, effective_date \
             FROM compensation WHERE employee_id = $1 \
             ORDER BY effective_date DESC",
        )
        .bind(employee_id)
        .fetch_all(&self.pool)
        .await
        .context("failed to fetch compensation history")?;

        Ok(rows.into_iter().map(Compensation::from).collect())
    }
}
