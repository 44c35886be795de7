//! Binary search tree holding the records.
//!
//! Every operation walks the tree with a loop or an explicit stack, never by
//! recursion, so a chain-shaped tree costs time but not call stack. That
//! includes dropping the tree.

use std::cmp::Ordering;
use std::fmt;

use crate::store::iter::Iter;
use crate::store::node::{Link, Node};
use crate::store::Keyed;

/// A binary search tree of records with unique keys.
///
/// Not thread-safe. Callers sharing a tree across threads must wrap it in a
/// lock; every mutation may restructure the tree from the root down.
#[derive(Debug)]
pub struct RecordTree<R> {
    root: Link<R>,
}

impl<R> Default for RecordTree<R> {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of [`RecordTree::update`].
///
/// Update is a removal followed by an insert, and the two steps succeed or
/// fail independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpdateOutcome {
    /// The old key was present and its record was removed.
    pub removed: bool,
    /// The replacement record was inserted. False when its key was already
    /// taken by another record (the insert was ignored).
    pub inserted: bool,
}

/// Two neighbouring records that are not in strictly ascending key order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderViolation {
    /// In-order position of the offending record.
    pub position: usize,
    /// Human-readable description including both keys.
    pub description: String,
}

impl fmt::Display for OrderViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "order violation at position {}: {}",
            self.position, self.description
        )
    }
}

impl std::error::Error for OrderViolation {}

/// What replaces a removed node, plus the record taken out of it.
struct Detached<R> {
    subtree: Link<R>,
    removed: R,
}

impl<R> RecordTree<R> {
    /// Create an empty tree.
    #[must_use]
    pub const fn new() -> Self {
        Self { root: None }
    }

    /// The root node, if any.
    #[must_use]
    pub fn root(&self) -> Option<&Node<R>> {
        self.root.as_deref()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Iterate over the records in ascending key order.
    #[must_use]
    pub fn iter(&self) -> Iter<'_, R> {
        Iter::new(self.root())
    }

    /// Collect the records in ascending key order.
    ///
    /// The tree is walked again on every call; nothing is cached.
    #[must_use]
    pub fn export_ordered(&self) -> Vec<&R> {
        self.iter().collect()
    }

    /// Number of records, counted by walking the whole tree.
    #[must_use]
    pub fn count(&self) -> usize {
        self.iter().count()
    }

    /// Number of nodes on the longest root-to-leaf path. Zero when empty.
    #[must_use]
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut stack: Vec<(&Node<R>, usize)> = self.root().map(|n| (n, 1)).into_iter().collect();
        while let Some((node, depth)) = stack.pop() {
            if node.is_leaf() {
                height = height.max(depth);
                continue;
            }
            for child in [node.left(), node.right()].into_iter().flatten() {
                stack.push((child, depth + 1));
            }
        }
        height
    }

    /// Render every record on its own line, in ascending key order.
    ///
    /// `render` picks the display form of each record, e.g. a salary
    /// precision. Pass `|r| r` to use the record's own `Display`.
    #[must_use]
    pub fn render_in_order<'a, F, D>(&'a self, render: F) -> String
    where
        F: Fn(&'a R) -> D,
        D: fmt::Display,
    {
        self.iter()
            .map(|record| render(record).to_string())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl<R> Drop for RecordTree<R> {
    fn drop(&mut self) {
        // Detach children before each node is dropped so that no drop glue
        // ever recurses into a subtree.
        let mut pending: Vec<Box<Node<R>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.take());
            pending.extend(node.right.take());
        }
    }
}

impl<R: Keyed> RecordTree<R> {
    /// Insert a record.
    ///
    /// If a record with the same key already exists, the tree is left as is
    /// and `record` is dropped. Returns whether a node was added.
    pub fn insert(&mut self, record: R) -> bool {
        let key = record.key();
        let mut slot = &mut self.root;
        while let Some(node) = slot {
            slot = match key.cmp(&node.record.key()) {
                Ordering::Less => &mut node.left,
                Ordering::Greater => &mut node.right,
                Ordering::Equal => {
                    tracing::trace!(?key, "duplicate key ignored");
                    return false;
                }
            };
        }
        tracing::trace!(?key, "node created");
        *slot = Some(Box::new(Node::leaf(record)));
        true
    }

    /// Look up the record stored under `key`.
    #[must_use]
    pub fn find(&self, key: R::Key) -> Option<&R> {
        let mut current = self.root();
        while let Some(node) = current {
            current = match key.cmp(&node.record.key()) {
                Ordering::Less => node.left(),
                Ordering::Greater => node.right(),
                Ordering::Equal => return Some(node.record()),
            };
        }
        None
    }

    /// Whether a record is stored under `key`.
    #[must_use]
    pub fn contains(&self, key: R::Key) -> bool {
        self.find(key).is_some()
    }

    /// Remove the record stored under `key`.
    ///
    /// Returns false, leaving the tree untouched, if the key is absent.
    pub fn remove(&mut self, key: R::Key) -> bool {
        self.take(key).is_some()
    }

    /// Remove and return the record stored under `key`.
    pub fn take(&mut self, key: R::Key) -> Option<R> {
        let slot = Self::slot_for(&mut self.root, key);
        let node = slot.take()?;
        let Detached { subtree, removed } = Self::unlink(node);
        *slot = subtree;
        Some(removed)
    }

    /// Replace the record under `key` with `record`.
    ///
    /// This is exactly `remove(key)` followed by `insert(record)`, with no
    /// rollback:
    ///
    /// - same key: the attributes are replaced;
    /// - different key: the record moves to `record.key()`;
    /// - `key` absent: behaves like a plain insert;
    /// - `record.key()` already held by another record: the old record is
    ///   still removed and the insert is ignored.
    pub fn update(&mut self, key: R::Key, record: R) -> UpdateOutcome {
        let removed = self.remove(key);
        let inserted = self.insert(record);
        if !removed || !inserted {
            tracing::trace!(?key, removed, inserted, "partial update");
        }
        UpdateOutcome { removed, inserted }
    }

    /// Check that keys are strictly ascending in order, which holds iff every
    /// node satisfies the search-tree ordering.
    pub fn check_invariants(&self) -> Result<(), OrderViolation> {
        let mut previous: Option<R::Key> = None;
        for (position, record) in self.iter().enumerate() {
            let key = record.key();
            if let Some(prev) = previous.filter(|prev| *prev >= key) {
                return Err(OrderViolation {
                    position,
                    description: format!("key {key:?} follows {prev:?}"),
                });
            }
            previous = Some(key);
        }
        Ok(())
    }

    /// The slot holding `key`, or the empty slot where it would be inserted.
    fn slot_for(root: &mut Link<R>, key: R::Key) -> &mut Link<R> {
        let mut slot = root;
        loop {
            let ordering = match slot.as_deref() {
                Some(node) => key.cmp(&node.record.key()),
                None => return slot,
            };
            if ordering == Ordering::Equal {
                return slot;
            }
            if let Some(node) = slot {
                slot = if ordering == Ordering::Less {
                    &mut node.left
                } else {
                    &mut node.right
                };
            }
        }
    }

    /// Remove `node` itself, returning whatever takes its place.
    fn unlink(mut node: Box<Node<R>>) -> Detached<R> {
        tracing::trace!(key = ?node.record.key(), "node removed");
        let Some(left) = node.left.take() else {
            return Detached {
                subtree: node.right.take(),
                removed: node.record,
            };
        };
        // The successor is the leftmost node of the right subtree. Its record
        // takes over this node; its own node is spliced out.
        let Some(successor) = Self::take_min(&mut node.right) else {
            return Detached {
                subtree: Some(left),
                removed: node.record,
            };
        };
        tracing::trace!(key = ?successor.key(), "successor promoted");
        node.left = Some(left);
        let removed = std::mem::replace(&mut node.record, successor);
        Detached {
            subtree: Some(node),
            removed,
        }
    }

    /// Splice out the leftmost node below `slot` and return its record.
    ///
    /// The leftmost node has no left child, so its right child simply takes
    /// its place.
    fn take_min(slot: &mut Link<R>) -> Option<R> {
        let mut slot = slot;
        while slot.as_deref().is_some_and(|node| node.left.is_some()) {
            if let Some(node) = slot {
                slot = &mut node.left;
            }
        }
        let mut min = slot.take()?;
        *slot = min.right.take();
        Some(min.record)
    }
}

impl<'a, R> IntoIterator for &'a RecordTree<R> {
    type Item = &'a R;
    type IntoIter = Iter<'a, R>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<R: Keyed> Extend<R> for RecordTree<R> {
    /// Insert every record in turn; duplicates are ignored as with `insert`.
    fn extend<I: IntoIterator<Item = R>>(&mut self, records: I) {
        for record in records {
            self.insert(record);
        }
    }
}

impl<R: Keyed> FromIterator<R> for RecordTree<R> {
    fn from_iter<I: IntoIterator<Item = R>>(records: I) -> Self {
        let mut tree = Self::new();
        tree.extend(records);
        tree
    }
}
