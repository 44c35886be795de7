//! Tree nodes.

/// An owned, possibly empty, child slot.
pub(super) type Link<R> = Option<Box<Node<R>>>;

/// A single tree node: one record plus two exclusively owned subtrees.
#[derive(Debug)]
pub struct Node<R> {
    pub(super) record: R,
    pub(super) left: Link<R>,
    pub(super) right: Link<R>,
}

impl<R> Node<R> {
    /// Create a leaf node holding `record`.
    pub(super) const fn leaf(record: R) -> Self {
        Self {
            record,
            left: None,
            right: None,
        }
    }

    #[must_use]
    pub const fn record(&self) -> &R {
        &self.record
    }

    #[must_use]
    pub fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    #[must_use]
    pub fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    #[must_use]
    pub const fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leaf_has_no_children() {
        let node = Node::leaf(5);
        assert!(node.is_leaf());
        assert!(node.left().is_none());
        assert!(node.right().is_none());
        assert_eq!(*node.record(), 5);
    }

    #[test]
    fn test_node_with_child_is_not_leaf() {
        let mut node = Node::leaf(5);
        node.right = Some(Box::new(Node::leaf(8)));
        assert!(!node.is_leaf());
        assert_eq!(node.right().map(|n| *n.record()), Some(8));
    }
}
