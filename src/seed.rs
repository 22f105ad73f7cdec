//! Seed data for the in-memory backend.
//!
//! A seed document is a JSON array of employees in the wire format. The
//! bundled document contains a small reporting tree plus a deliberately
//! cyclic pair of records for exercising the resolver's corrupted-data
//! handling.

use anyhow::{Context, Result};

use crate::models::Employee;
use crate::store::MemoryStore;

const DEFAULT_SEED: &str = include_str!("../data/employee_seed_data.json");

/// Parse a seed document.
pub fn parse(json: &str) -> Result<Vec<Employee>> {
    serde_json::from_str(json).context("failed to parse employee seed data")
}

/// The employees bundled with the binary.
pub fn default_employees() -> Result<Vec<Employee>> {
    parse(DEFAULT_SEED)
}

/// Load employees into a memory store, from `path` when given, otherwise
/// from the bundled seed. Returns the number of employees loaded.
pub async fn seed_memory_store(store: &MemoryStore, path: Option<&str>) -> Result<usize> {
    let employees = match path {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read seed file {path}"))?;
            parse(&raw)?
        }
        None => default_employees()?,
    };
    let count = employees.len();
    store.seed(employees).await;
    Ok(count)
}
