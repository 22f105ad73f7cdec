//! In-memory store backend.
//!
//! Default backend for local runs and tests. State lives in process memory
//! and is usually loaded from seed JSON at startup; see [`crate::seed`].

use std::collections::HashMap;

use anyhow::Result;
use async_trait::async_trait;
use tokio::sync::RwLock;

use super::EmployeeStore;
use crate::models::{Compensation, Employee};

/// Process-local [`EmployeeStore`] with concurrent read access.
#[derive(Default)]
pub struct MemoryStore {
    employees: RwLock<HashMap<String, Employee>>,
    compensations: RwLock<Vec<Compensation>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bulk-load employees, replacing any existing rows with the same id.
    pub async fn seed(&self, employees: Vec<Employee>) {
        let mut map = self.employees.write().await;
        for employee in employees {
            map.insert(employee.employee_id.clone(), employee);
        }
    }

    pub async fn employee_count(&self) -> usize {
        self.employees.read().await.len()
    }
}

#[async_trait]
impl EmployeeStore for MemoryStore {
    async fn insert_employee(&self, employee: &Employee) -> Result<()> {
        self.employees
            .write()
            .await
            .insert(employee.employee_id.clone(), employee.clone());
        Ok(())
    }

    async fn fetch_with_direct_reports(&self, id: &str) -> Result<Option<Employee>> {
        Ok(self.employees.read().await.get(id).cloned())
    }

    async fn replace_employee(&self, id: &str, employee: &Employee) -> Result<bool> {
        let mut map = self.employees.write().await;
        if !map.contains_key(id) {
            return Ok(false);
        }
        map.insert(id.to_string(), employee.clone());
        Ok(true)
    }

    async fn insert_compensation(&self, compensation: &Compensation) -> Result<()> {
        self.compensations.write().await.push(compensation.clone());
        Ok(())
    }

    async fn compensations_for(&self, employee_id: &str) -> Result<Vec<Compensation>> {
        let rows = self.compensations.read().await;
        let mut matching: Vec<Compensation> = rows
            .iter()
            .filter(|c| c.employee_id == employee_id)
            .cloned()
            .collect();
        // Stable sort keeps insertion order for equal effective dates.
        matching.sort_by(|a, b| b.effective_date.cmp(&a.effective_date));
        Ok(matching)
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use rust_decimal::Decimal;

    use super::*;
    use crate::models::EmployeeRef;

    fn sample_employee(id: &str) -> Employee {
        Employee {
            employee_id: id.to_string(),
            first_name: "Test".to_string(),
            last_name: "Employee".to_string(),
            position: "Developer".to_string(),
            department: "Engineering".to_string(),
            direct_reports: vec![EmployeeRef::new("other")],
        }
    }

    fn sample_compensation(employee_id: &str, salary: i64, year: i32) -> Compensation {
        Compensation {
            compensation_id: format!("comp-{year}"),
            employee_id: employee_id.to_string(),
            salary: Decimal::new(salary, 0),
            effective_date: Utc.with_ymd_and_hms(year, 1, 1, 0, 0, 0).unwrap(),
        }
    }

    #[tokio::test]
    async fn insert_then_fetch_round_trips() {
        let store = MemoryStore::new();
        store.insert_employee(&sample_employee("emp-1")).await.unwrap();

        let fetched = store
            .fetch_with_direct_reports("emp-1")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(fetched.first_name, "Test");
        assert_eq!(fetched.direct_reports.len(), 1);
    }

    #[tokio::test]
    async fn fetch_unknown_returns_none() {
        let store = MemoryStore::new();
        assert!(store
            .fetch_with_direct_reports("missing")
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn replace_unknown_returns_false() {
        let store = MemoryStore::new();
        let replaced = store
            .replace_employee("missing", &sample_employee("missing"))
            .await
            .unwrap();
        assert!(!replaced);
    }

    #[tokio::test]
    async fn replace_overwrites_all_fields() {
        let store = MemoryStore::new();
        store.insert_employee(&sample_employee("emp-1")).await.unwrap();

        let mut replacement = sample_employee("emp-1");
        replacement.position = "Lead Developer".to_string();
        replacement.direct_reports.clear();
        assert!(store.replace_employee("emp-1", &replacement).await.unwrap());

        let fetched = store
            .fetch_with_direct_reports("emp-1")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(fetched.position, "Lead Developer");
        assert!(fetched.direct_reports.is_empty());
    }

    #[tokio::test]
    async fn compensations_sorted_most_recent_first() {
        let store = MemoryStore::new();
        for year in [2017, 2019, 2018] {
            store
                .insert_compensation(&sample_compensation("emp-1", 50_000, year))
                .await
                .unwrap();
        }
        store
            .insert_compensation(&sample_compensation("emp-2", 60_000, 2020))
            .await
            .unwrap();

        let rows = store.compensations_for("emp-1").await.unwrap();
        let years: Vec<i32> = rows
            .iter()
            .map(|c| c.effective_date.format("%Y").to_string().parse().unwrap())
            .collect();
        assert_eq!(years, vec![2019, 2018, 2017]);
    }

    #[tokio::test]
    async fn compensations_for_unknown_employee_is_empty() {
        let store = MemoryStore::new();
        assert!(store.compensations_for("missing").await.unwrap().is_empty());
    }
}
