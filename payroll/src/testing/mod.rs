//! Shared helpers for unit tests.

use crate::store::RecordTree;
use crate::types::Employee;

/// A deterministic employee for `id`: name `"Employee <id>"`, salary
/// `id * 100`.
pub fn employee(id: i32) -> Employee {
    Employee::new(id, format!("Employee {id}"), f64::from(id) * 100.0)
}

/// Build a tree by inserting `employee(id)` for each id, in order.
pub fn tree_with_ids(ids: &[i32]) -> RecordTree<Employee> {
    ids.iter().copied().map(employee).collect()
}

/// The ids of a tree in iteration order.
pub fn ids(tree: &RecordTree<Employee>) -> Vec<i32> {
    tree.iter().map(|e| e.id().get()).collect()
}
