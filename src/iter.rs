//! Borrowing in-order iteration.

use std::iter::FusedIterator;

use crate::node::{Link, Node};

/// An iterator over a tree's keys in sorted order.
///
/// Instead of recursing, it keeps the unvisited left spine on an explicit
/// stack: popping a node yields its key, then pushes the left spine of the
/// node's right subtree. The stack never holds more nodes than the tree is
/// tall.
#[derive(Debug)]
pub struct Iter<'a, K> {
    stack: Vec<&'a Node<K>>,
}

impl<'a, K> Iter<'a, K> {
    pub(crate) fn new(root: &'a Link<K>) -> Self {
        let mut iter = Self { stack: Vec::new() };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut link: &'a Link<K>) {
        while let Some(node) = link.as_deref() {
            self.stack.push(node);
            link = &node.left;
        }
    }
}

impl<'a, K> Iterator for Iter<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(&node.right);
        Some(&node.key)
    }
}

impl<K> FusedIterator for Iter<'_, K> {}

#[cfg(test)]
mod tests {
    use crate::tree::{Avl, Bst};

    #[test]
    fn test_yields_keys_in_sorted_order() {
        let tree: Bst<i32> = [7, 2, 56, 8, 23, 3].into_iter().collect();

        let keys: Vec<i32> = tree.iter().copied().collect();
        assert_eq!(keys, [2, 3, 7, 8, 23, 56]);
    }

    #[test]
    fn test_duplicates_come_out_adjacent() {
        let tree: Avl<i32> = [3, 1, 3, 2, 3].into_iter().collect();

        let keys: Vec<i32> = tree.iter().copied().collect();
        assert_eq!(keys, [1, 2, 3, 3, 3]);
    }

    #[test]
    fn test_empty_tree_iterates_nothing() {
        let tree = Bst::<i32>::new();
        assert_eq!(tree.iter().next(), None);
    }

    #[test]
    fn test_exhausted_iterator_stays_exhausted() {
        let mut tree = Avl::new();
        tree.insert(1);

        let mut iter = tree.iter();
        assert_eq!(iter.next(), Some(&1));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn test_for_loop_over_a_borrowed_tree() {
        let tree: Avl<i32> = (1..=4).collect();

        let mut total = 0;
        for key in &tree {
            total += *key;
        }
        assert_eq!(total, 10);
    }
}
