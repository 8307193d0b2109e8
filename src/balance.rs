//! Rebalancing policies.
//!
//! A [`Tree`](crate::Tree) is generic over a [`Balance`] policy that runs at
//! every link on the way back up from a structural mutation. The policy is a
//! marker type, so choosing between a plain and a height-balanced tree is a
//! compile-time decision with no per-node cost.

use crate::node::{height, Link, Node};

/// A rebalancing policy, invoked at an owning link after the subtree below
/// it has been mutated.
///
/// Implementations must leave the cached height of the node at the link
/// correct, and must be a no-op on an empty link. `rebalance` is called at
/// every link on the unwind path of an insertion, removal, or extraction,
/// including links whose subtrees did not change shape.
pub trait Balance {
    /// Restores this policy's shape guarantee at `link`.
    fn rebalance<K>(link: &mut Link<K>);
}

/// The do-nothing policy: keep the height cache fresh and leave the shape
/// alone. Trees using it degenerate to linked lists under sorted insertion.
pub enum Unbalanced {}

impl Balance for Unbalanced {
    fn rebalance<K>(link: &mut Link<K>) {
        if let Some(node) = link {
            node.fix_height();
        }
    }
}

/// The AVL policy: after refreshing the height, rotate whenever the balance
/// factor of the node at the link reaches ±2. Given children that already
/// satisfy the AVL bound, one single or double rotation restores it, so every
/// node ends up with a balance factor in `{-1, 0, 1}`.
pub enum HeightBalanced {}

impl Balance for HeightBalanced {
    fn rebalance<K>(link: &mut Link<K>) {
        let Some(node) = link else {
            return;
        };
        // See https://en.wikipedia.org/wiki/AVL_tree#Rebalancing for terminology.
        node.fix_height();
        match node.balance_factor() {
            2 => {
                if balance_factor(&node.right) <= -1 {
                    rotate_right(&mut node.right);
                }
                rotate_left(link);
            }
            -2 => {
                if balance_factor(&node.left) >= 1 {
                    rotate_left(&mut node.left);
                }
                rotate_right(link);
            }
            _ => {}
        }

        if cfg!(debug_assertions) {
            if let Some(node) = link {
                let left_height = height(&node.left);
                let right_height = height(&node.right);
                assert_eq!(node.height, left_height.max(right_height) + 1);
                assert!(left_height.abs_diff(right_height) <= 1);
            }
        }
    }
}

/// The balance factor of the node behind a link, 0 for an empty link.
fn balance_factor<K>(link: &Link<K>) -> isize {
    link.as_deref().map_or(0, Node::balance_factor)
}

/// Rotate the subtree at `link` to the right. This moves the left child up
/// vertically and the old root down vertically. Used to rebalance when the
/// left child is too tall. As such, it must only be called when there _is_ a
/// left child.
///
/// ## Panics
///
/// When called on an empty link or a node without a left child.
///
/// # Diagram
///
/// Roughly speaking, we want to perform this transformation:
///
/// ```text
///      link                 link
///       |                    |
///    old_root             new_root
///     /     \              /     \
/// new_root   z  rotate -> x    old_root
///  / \                            /  \
/// x   y                          y    z
/// ```
fn rotate_right<K>(link: &mut Link<K>) {
    let mut old_root = link.take().expect("Rotating a tree requires a root");
    let mut new_root = old_root.left.take().expect("Rotate right => left child");

    old_root.left = new_root.right.take();
    old_root.fix_height();

    new_root.right = Some(old_root);
    new_root.fix_height();
    *link = Some(new_root);
}

fn rotate_left<K>(link: &mut Link<K>) {
    let mut old_root = link.take().expect("Rotating a tree requires a root");
    let mut new_root = old_root.right.take().expect("Rotate left => right child");

    old_root.right = new_root.left.take();
    old_root.fix_height();

    new_root.left = Some(old_root);
    new_root.fix_height();
    *link = Some(new_root);
}
