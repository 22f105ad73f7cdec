//! Employee directory service.
//!
//! Employee and compensation records behind a REST API, with
//! reporting-structure resolution on top: counting every direct and
//! indirect report under an employee while refusing cyclic management
//! graphs.
//!
//! ## Architecture
//! HTTP handlers delegate to [`service::EmployeeService`], which drives the
//! [`store::EmployeeStore`] trait and the [`reporting`] resolver. Storage is
//! in-memory by default; a Postgres backend sits behind the `database`
//! feature.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use employee_directory::seed;
//! use employee_directory::service::EmployeeService;
//! use employee_directory::store::MemoryStore;
//!
//! # async fn run() -> anyhow::Result<()> {
//! let store = MemoryStore::new();
//! seed::seed_memory_store(&store, None).await?;
//!
//! let service = EmployeeService::new(Arc::new(store));
//! let structure = service
//!     .reporting_structure("16a596ae-edd3-4847-99fe-c4518e82c86f")
//!     .await?;
//! assert!(structure.is_some());
//! # Ok(())
//! # }
//! ```

// Core error handling
pub mod error;

// Wire and storage types
pub mod models;

// Persistence trait and backends
pub mod store;

// Reporting-structure traversal
pub mod reporting;

// CRUD orchestration over the store
pub mod service;

// Seed data loading for the in-memory backend
pub mod seed;

// REST API surface
pub mod api;

// Public re-exports
pub use error::{DirectoryError, DirectoryResult};
pub use models::{Compensation, Employee, EmployeeRef, ReportingStructure};
pub use service::EmployeeService;
