//! REST API module for the employee directory.
//!
//! Thin HTTP layer over [`crate::service::EmployeeService`]: handlers
//! deserialize, delegate, and map outcomes to status codes. Domain rules
//! live below this layer.

pub mod employee_routes;

pub use employee_routes::{create_employee_router, AppState};
