//! In-memory record store.
//!
//! Records are kept in an unbalanced binary search tree keyed by
//! [`Keyed::key`]. Every node exclusively owns its two child slots, so the
//! tree has no shared pointers, no parent links and no cycles.
//!
//! # Invariants
//!
//! - For every node, all keys in the left subtree are strictly smaller and
//!   all keys in the right subtree are strictly greater.
//! - Keys are therefore unique across the store.
//!
//! The tree is never rebalanced. Inserting keys in sorted order produces a
//! chain and every operation on it is O(n).
//!
//! # Usage
//!
//! ```
//! use payroll::store::RecordTree;
//! use payroll::types::{Employee, EmployeeId};
//!
//! let mut tree = RecordTree::new();
//! assert!(tree.insert(Employee::new(2, "Ada", 100.0)));
//! assert!(tree.insert(Employee::new(1, "Alan", 90.0)));
//!
//! // Duplicate keys are ignored; the first record wins.
//! assert!(!tree.insert(Employee::new(2, "Grace", 500.0)));
//! assert_eq!(tree.find(EmployeeId(2)).map(Employee::name), Some("Ada"));
//!
//! let ids: Vec<_> = tree.iter().map(Employee::id).collect();
//! assert_eq!(ids, vec![EmployeeId(1), EmployeeId(2)]);
//! ```

use std::fmt;

mod iter;
mod node;
mod tree;

pub use iter::Iter;
pub use node::Node;
pub use tree::{OrderViolation, RecordTree, UpdateOutcome};

/// A record that can be stored in a [`RecordTree`].
///
/// The key must stay fixed while the record is in the tree. Records are only
/// ever re-keyed by removing them and inserting a replacement.
pub trait Keyed {
    /// The key type. Ordering on this type defines the tree layout.
    type Key: Ord + Copy + fmt::Debug;

    /// The key of this record.
    fn key(&self) -> Self::Key;
}
