//! The building blocks trees are made of: nodes and the owning links
//! between them.

/// An owning edge in a tree: either empty or the unique owner of a subtree.
///
/// Mutating operations pass links around as `&mut Link<K>` so that a callee
/// can replace the subtree hanging off the edge in place, which is exactly
/// what rotations and splices do.
pub type Link<K> = Option<Box<Node<K>>>;

/// A single node: one key, up to two children, and a cached height.
///
/// The height of a leaf is 1 and the height of an empty link is 0. Every
/// structural mutation refreshes the cache bottom-up, so reading it is O(1).
#[derive(Clone, Debug)]
pub struct Node<K> {
    pub(crate) key: K,
    pub(crate) left: Link<K>,
    pub(crate) right: Link<K>,
    pub(crate) height: usize,
}

/// Which child edges of a node are occupied.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Degree {
    /// A leaf; neither child is present.
    None,
    /// Only the left child is present.
    OnlyLeft,
    /// Only the right child is present.
    OnlyRight,
    /// Both children are present.
    Both,
}

impl<K> Node<K> {
    pub(crate) fn new(key: K) -> Self {
        Self {
            key,
            left: None,
            right: None,
            height: 1,
        }
    }

    /// The key stored in this node.
    pub fn key(&self) -> &K {
        &self.key
    }

    /// The left child edge.
    pub fn left(&self) -> &Link<K> {
        &self.left
    }

    /// The right child edge.
    pub fn right(&self) -> &Link<K> {
        &self.right
    }

    /// The cached height of the subtree rooted here.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Which of this node's child edges are occupied.
    pub fn degree(&self) -> Degree {
        match (&self.left, &self.right) {
            (None, None) => Degree::None,
            (Some(_), None) => Degree::OnlyLeft,
            (None, Some(_)) => Degree::OnlyRight,
            (Some(_), Some(_)) => Degree::Both,
        }
    }

    /// Consumes a detached node and returns its key.
    pub fn into_key(self: Box<Self>) -> K {
        self.key
    }

    /// Adjusts the height of `self` to be the max of its children's
    /// heights + 1.
    pub(crate) fn fix_height(&mut self) {
        self.height = height(&self.left).max(height(&self.right)) + 1;
    }

    /// The difference in height between the right and left subtrees. See
    /// [the Wikipedia page][wiki] for more details.
    ///
    /// [wiki]: https://en.wikipedia.org/wiki/AVL_tree#Balance_factor
    pub(crate) fn balance_factor(&self) -> isize {
        height(&self.right) as isize - height(&self.left) as isize
    }
}

/// The cached height of the subtree behind a link, 0 for an empty link.
pub fn height<K>(link: &Link<K>) -> usize {
    link.as_deref().map_or(0, |node| node.height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_link_has_height_zero() {
        let link: Link<i32> = None;
        assert_eq!(height(&link), 0);
    }

    #[test]
    fn test_new_node_is_a_leaf() {
        let node = Node::new(7);
        assert_eq!(node.height(), 1);
        assert_eq!(node.degree(), Degree::None);
        assert_eq!(*node.key(), 7);
    }

    #[test]
    fn test_degree_tracks_children() {
        let mut node = Node::new(2);
        node.left = Some(Box::new(Node::new(1)));
        assert_eq!(node.degree(), Degree::OnlyLeft);

        node.right = Some(Box::new(Node::new(3)));
        assert_eq!(node.degree(), Degree::Both);

        node.left = None;
        assert_eq!(node.degree(), Degree::OnlyRight);
    }

    #[test]
    fn test_fix_height_uses_the_taller_child() {
        let mut tall = Node::new(2);
        tall.right = Some(Box::new(Node::new(3)));
        tall.fix_height();

        let mut node = Node::new(1);
        node.right = Some(Box::new(tall));
        node.left = Some(Box::new(Node::new(0)));
        node.fix_height();

        assert_eq!(node.height(), 3);
        assert_eq!(node.balance_factor(), 1);
    }
}
