//! Reporting-structure resolution.
//!
//! Counts all direct and indirect reports under an employee by walking the
//! direct-report graph. The store hands back one level of references per
//! fetch, so the walk re-fetches each report before descending; store round
//! trips equal the number of employees visited.
//!
//! The walk is depth-first over an explicit frame stack rather than
//! recursion, so arbitrarily deep hierarchies cannot exhaust the call
//! stack. Reports are visited in list order, which makes the first id
//! re-encountered on the active path, and therefore the employee a cycle
//! error names, deterministic.

use std::collections::HashSet;

use crate::error::{DirectoryError, DirectoryResult};
use crate::models::{Employee, ReportingStructure};
use crate::store::EmployeeStore;

/// One entry of the traversal stack: an employee plus the index of the next
/// direct report to visit under it.
struct Frame {
    employee: Employee,
    next_report: usize,
}

/// Resolve the reporting structure rooted at `root_id`.
///
/// Returns `Ok(None)` for an empty or unknown root id; the store is not
/// contacted at all when the id is empty. Re-encountering an employee
/// already on the active path fails with
/// [`DirectoryError::CircularReference`] naming that employee. A
/// direct-report id the store cannot resolve fails with
/// [`DirectoryError::DanglingReport`]. An employee reachable through more
/// than one chain counts once and is expanded only on first visit.
pub async fn resolve(
    store: &dyn EmployeeStore,
    root_id: &str,
) -> DirectoryResult<Option<ReportingStructure>> {
    if root_id.is_empty() {
        return Ok(None);
    }
    let Some(root) = store.fetch_with_direct_reports(root_id).await? else {
        return Ok(None);
    };

    // Ids on the active path from the root to the current frame. A report
    // pointing back into this set closes a management cycle.
    let mut on_path: HashSet<String> = HashSet::new();
    // Ids whose subtrees are fully counted. A report pointing into this set
    // is a shared subordinate and is skipped, not an error.
    let mut finished: HashSet<String> = HashSet::new();
    let mut number_of_reports: u32 = 0;

    on_path.insert(root.employee_id.clone());
    let mut stack = vec![Frame {
        employee: root.clone(),
        next_report: 0,
    }];

    while !stack.is_empty() {
        let top = stack.len() - 1;
        let next = {
            let frame = &mut stack[top];
            if frame.next_report < frame.employee.direct_reports.len() {
                let report_id = frame.employee.direct_reports[frame.next_report]
                    .employee_id
                    .clone();
                frame.next_report += 1;
                Some((frame.employee.employee_id.clone(), report_id))
            } else {
                None
            }
        };

        match next {
            Some((manager_id, report_id)) => {
                if on_path.contains(&report_id) {
                    return Err(DirectoryError::CircularReference {
                        employee_id: report_id,
                    });
                }
                if finished.contains(&report_id) {
                    continue;
                }
                number_of_reports += 1;
                let Some(report) = store.fetch_with_direct_reports(&report_id).await? else {
                    return Err(DirectoryError::DanglingReport {
                        employee_id: manager_id,
                        report_id,
                    });
                };
                on_path.insert(report_id);
                stack.push(Frame {
                    employee: report,
                    next_report: 0,
                });
            }
            None => {
                if let Some(done) = stack.pop() {
                    on_path.remove(&done.employee.employee_id);
                    finished.insert(done.employee.employee_id);
                }
            }
        }
    }

    Ok(Some(ReportingStructure {
        employee: root,
        number_of_reports,
    }))
}
