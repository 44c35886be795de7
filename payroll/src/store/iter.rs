//! In-order traversal.
//!
//! The iterator keeps an explicit stack of pending ancestors instead of
//! recursing, so walking a degenerate (chain-shaped) tree costs heap, not
//! call stack.

use crate::store::node::Node;

/// Ascending-key iterator over the records of a [`RecordTree`].
///
/// Created by [`RecordTree::iter`].
///
/// [`RecordTree`]: crate::store::RecordTree
/// [`RecordTree::iter`]: crate::store::RecordTree::iter
#[derive(Debug)]
pub struct Iter<'a, R> {
    /// Nodes whose left subtree has been fully pushed but which have not been
    /// yielded yet. The top of the stack is the next record to yield.
    pending: Vec<&'a Node<R>>,
}

impl<'a, R> Iter<'a, R> {
    pub(super) fn new(root: Option<&'a Node<R>>) -> Self {
        let mut iter = Self {
            pending: Vec::new(),
        };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut node: Option<&'a Node<R>>) {
        while let Some(current) = node {
            self.pending.push(current);
            node = current.left();
        }
    }
}

impl<'a, R> Iterator for Iter<'a, R> {
    type Item = &'a R;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.pending.pop()?;
        self.push_left_spine(node.right());
        Some(node.record())
    }
}

impl<R> std::iter::FusedIterator for Iter<'_, R> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(value: i32, left: Option<Node<i32>>, right: Option<Node<i32>>) -> Node<i32> {
        Node {
            record: value,
            left: left.map(Box::new),
            right: right.map(Box::new),
        }
    }

    #[test]
    fn test_iter_empty() {
        let mut iter: Iter<'_, i32> = Iter::new(None);
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn test_iter_visits_left_node_right() {
        //       4
        //     /   \
        //    2     6
        //   / \     \
        //  1   3     7
        let root = node(
            4,
            Some(node(2, Some(Node::leaf(1)), Some(Node::leaf(3)))),
            Some(node(6, None, Some(Node::leaf(7)))),
        );
        let values: Vec<i32> = Iter::new(Some(&root)).copied().collect();
        assert_eq!(values, vec![1, 2, 3, 4, 6, 7]);
    }

    #[test]
    fn test_iter_right_leaning_chain() {
        let root = node(1, None, Some(node(2, None, Some(node(3, None, None)))));
        let values: Vec<i32> = Iter::new(Some(&root)).copied().collect();
        assert_eq!(values, vec![1, 2, 3]);
    }
}
