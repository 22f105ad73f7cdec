//! Error types for the employee directory.

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type DirectoryResult<T> = Result<T, DirectoryError>;

/// Failures surfaced by the directory service.
///
/// Absence is not a failure: lookups return `Ok(None)` for unknown ids and
/// the API layer turns that into 404. These variants are genuine faults,
/// either corrupted reporting data or a broken store.
#[derive(Debug, Error)]
pub enum DirectoryError {
    /// The reporting graph re-entered an employee already on the active
    /// traversal path.
    #[error("circular reference in reporting structure at employee {employee_id}")]
    CircularReference { employee_id: String },

    /// A direct-report reference points at an id the store cannot resolve.
    #[error("employee {employee_id} references direct report {report_id}, which does not exist")]
    DanglingReport {
        employee_id: String,
        report_id: String,
    },

    /// An operation referenced an employee that must exist but does not.
    #[error("referenced employee {employee_id} does not exist")]
    UnknownEmployee { employee_id: String },

    /// Underlying store failure.
    #[error("store error: {0}")]
    Store(#[from] anyhow::Error),
}
