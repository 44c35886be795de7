//! Invariant checking for deterministic simulation testing.
//!
//! The reference model mirrors the store's contract with a `BTreeMap`, and
//! the checker compares the two after each operation.

// Simulation code legitimately needs cloning for test data
#![allow(clippy::disallowed_methods)]

use std::collections::BTreeMap;

use crate::store::{RecordTree, UpdateOutcome};
use crate::types::{Employee, EmployeeId};

/// What the store is expected to contain.
///
/// Follows the same rules as [`RecordTree`]: inserting an existing key is
/// ignored, and update is remove followed by insert.
#[derive(Debug, Default)]
pub struct ReferenceModel {
    records: BTreeMap<EmployeeId, Employee>,
}

impl ReferenceModel {
    /// Create an empty model.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, employee: Employee) -> bool {
        if self.records.contains_key(&employee.id()) {
            return false;
        }
        self.records.insert(employee.id(), employee);
        true
    }

    #[must_use]
    pub fn find(&self, id: EmployeeId) -> Option<&Employee> {
        self.records.get(&id)
    }

    pub fn remove(&mut self, id: EmployeeId) -> bool {
        self.records.remove(&id).is_some()
    }

    pub fn update(&mut self, id: EmployeeId, employee: Employee) -> UpdateOutcome {
        let removed = self.remove(id);
        let inserted = self.insert(employee);
        UpdateOutcome { removed, inserted }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in ascending id order.
    pub fn records(&self) -> impl Iterator<Item = &Employee> {
        self.records.values()
    }
}

/// An invariant violation detected during simulation.
#[derive(Debug, Clone)]
pub struct InvariantViolation {
    /// Description of the violation.
    pub description: String,
    /// Operation index where it was detected.
    pub operation_index: usize,
    /// Additional context.
    pub context: String,
}

/// Checker for store invariants.
#[derive(Debug, Default)]
pub struct InvariantChecker {
    /// Detected violations.
    violations: Vec<InvariantViolation>,
}

impl InvariantChecker {
    /// Create a new invariant checker.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            violations: Vec::new(),
        }
    }

    /// Get all violations.
    #[must_use]
    pub fn violations(&self) -> &[InvariantViolation] {
        &self.violations
    }

    /// Check if any violations were detected.
    #[must_use]
    pub const fn has_violations(&self) -> bool {
        !self.violations.is_empty()
    }

    /// Take all recorded violations, leaving the checker empty.
    pub fn take_violations(&mut self) -> Vec<InvariantViolation> {
        std::mem::take(&mut self.violations)
    }

    /// Add a violation.
    pub fn add_violation(&mut self, violation: InvariantViolation) {
        self.violations.push(violation);
    }

    /// Record a violation if the store and the model answered an operation
    /// differently.
    pub fn check_result<T: PartialEq + std::fmt::Debug>(
        &mut self,
        operation: &str,
        actual: &T,
        expected: &T,
        operation_index: usize,
    ) {
        if actual != expected {
            self.violations.push(InvariantViolation {
                description: format!("{operation} result differs from model"),
                operation_index,
                context: format!("store: {actual:?}, model: {expected:?}"),
            });
        }
    }

    /// Check that the tree keeps its ordering invariant.
    pub fn check_ordering(&mut self, tree: &RecordTree<Employee>, operation_index: usize) {
        if let Err(e) = tree.check_invariants() {
            self.violations.push(InvariantViolation {
                description: "Search tree ordering broken".to_string(),
                operation_index,
                context: e.to_string(),
            });
        }
    }

    /// Check that the tree holds exactly the model's records, in order.
    pub fn check_contents(
        &mut self,
        tree: &RecordTree<Employee>,
        model: &ReferenceModel,
        operation_index: usize,
    ) {
        let count = tree.count();
        if count != model.len() {
            self.violations.push(InvariantViolation {
                description: "Record count differs from model".to_string(),
                operation_index,
                context: format!("store: {count}, model: {}", model.len()),
            });
        }

        let exported = tree.export_ordered();
        let expected: Vec<&Employee> = model.records().collect();
        if exported != expected {
            let first_difference = exported
                .iter()
                .zip(&expected)
                .position(|(a, b)| a != b)
                .unwrap_or_else(|| exported.len().min(expected.len()));
            self.violations.push(InvariantViolation {
                description: "Ordered export differs from model".to_string(),
                operation_index,
                context: format!("first difference at position {first_difference}"),
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{employee, tree_with_ids};

    #[test]
    fn test_model_duplicate_insert_is_noop() {
        let mut model = ReferenceModel::new();
        assert!(model.insert(employee(1)));
        assert!(!model.insert(Employee::new(1, "Other", 0.0)));
        assert_eq!(model.find(EmployeeId(1)), Some(&employee(1)));
        assert_eq!(model.len(), 1);
    }

    #[test]
    fn test_model_update_absent_key_inserts() {
        let mut model = ReferenceModel::new();
        let outcome = model.update(EmployeeId(4), employee(5));
        assert!(!outcome.removed);
        assert!(outcome.inserted);
        assert_eq!(model.len(), 1);
    }

    #[test]
    fn test_matching_tree_and_model_pass() {
        let tree = tree_with_ids(&[2, 1, 3]);
        let mut model = ReferenceModel::new();
        for id in [1, 2, 3] {
            model.insert(employee(id));
        }

        let mut checker = InvariantChecker::new();
        checker.check_ordering(&tree, 0);
        checker.check_contents(&tree, &model, 0);
        assert!(!checker.has_violations(), "{:?}", checker.violations());
    }

    #[test]
    fn test_missing_record_is_reported() {
        let tree = tree_with_ids(&[1, 2]);
        let mut model = ReferenceModel::new();
        for id in [1, 2, 3] {
            model.insert(employee(id));
        }

        let mut checker = InvariantChecker::new();
        checker.check_contents(&tree, &model, 4);
        let violations = checker.take_violations();
        assert_eq!(violations.len(), 2);
        assert!(violations.iter().all(|v| v.operation_index == 4));
        assert!(!checker.has_violations());
    }

    #[test]
    fn test_result_mismatch_is_reported() {
        let mut checker = InvariantChecker::new();
        checker.check_result("remove", &true, &true, 0);
        checker.check_result("remove", &false, &true, 1);
        assert_eq!(checker.violations().len(), 1);
        assert_eq!(checker.violations()[0].operation_index, 1);
    }
}
