//! Read-only walks over borrowed tree structure.
//!
//! Everything here consumes a tree through [`Tree::root`](crate::Tree::root)
//! and the read accessors on [`Node`], so it works the same on any flavor of
//! tree, including shapes loaded from a dump that no insertion order would
//! produce.
//!
//! # Examples
//!
//! ```
//! use avltree::{traverse, Avl};
//!
//! let tree: Avl<i32> = [2, 1, 3].into_iter().collect();
//!
//! let mut keys = Vec::new();
//! traverse::pre_order(tree.root(), |key| keys.push(*key));
//! assert_eq!(keys, [2, 1, 3]);
//!
//! assert_eq!(traverse::count_nodes(tree.root()), 3);
//! assert!(traverse::is_perfect(tree.root()));
//! ```

use std::collections::VecDeque;
use std::fmt;

use crate::node::{Degree, Link, Node};

/// The height of a subtree recomputed by walking it, ignoring the cached
/// values. O(n); used to cross-check the caches.
pub fn depth<K>(link: &Link<K>) -> usize {
    match link.as_deref() {
        None => 0,
        Some(node) => depth(&node.left).max(depth(&node.right)) + 1,
    }
}

/// The number of nodes in a subtree.
pub fn count_nodes<K>(link: &Link<K>) -> usize {
    match link.as_deref() {
        None => 0,
        Some(node) => count_nodes(&node.left) + count_nodes(&node.right) + 1,
    }
}

/// Visits every key in sorted order: left subtree, node, right subtree.
pub fn in_order<K, F: FnMut(&K)>(link: &Link<K>, mut visit: F) {
    fn go<K, F: FnMut(&K)>(link: &Link<K>, visit: &mut F) {
        if let Some(node) = link.as_deref() {
            go(&node.left, visit);
            visit(&node.key);
            go(&node.right, visit);
        }
    }
    go(link, &mut visit);
}

/// Visits every key parents-first: node, left subtree, right subtree. This
/// is the order the [codec](crate::codec) writes.
pub fn pre_order<K, F: FnMut(&K)>(link: &Link<K>, mut visit: F) {
    fn go<K, F: FnMut(&K)>(link: &Link<K>, visit: &mut F) {
        if let Some(node) = link.as_deref() {
            visit(&node.key);
            go(&node.left, visit);
            go(&node.right, visit);
        }
    }
    go(link, &mut visit);
}

/// Visits every key children-first: left subtree, right subtree, node.
pub fn post_order<K, F: FnMut(&K)>(link: &Link<K>, mut visit: F) {
    fn go<K, F: FnMut(&K)>(link: &Link<K>, visit: &mut F) {
        if let Some(node) = link.as_deref() {
            go(&node.left, visit);
            go(&node.right, visit);
            visit(&node.key);
        }
    }
    go(link, &mut visit);
}

/// Visits every key a level at a time, top to bottom, left to right within
/// a level.
pub fn level_order<K, F: FnMut(&K)>(link: &Link<K>, mut visit: F) {
    let mut queue = VecDeque::new();
    if let Some(node) = link.as_deref() {
        queue.push_back(node);
    }
    while let Some(node) = queue.pop_front() {
        visit(&node.key);
        if let Some(left) = node.left.as_deref() {
            queue.push_back(left);
        }
        if let Some(right) = node.right.as_deref() {
            queue.push_back(right);
        }
    }
}

/// Finds a node holding the given key by breadth-first search, comparing for
/// equality only. Unlike [`Tree::search`](crate::Tree::search) this assumes
/// nothing about where keys sit, at the price of visiting every node in the
/// worst case.
pub fn find<'a, K: PartialEq>(link: &'a Link<K>, key: &K) -> Option<&'a Node<K>> {
    let mut queue = VecDeque::new();
    if let Some(node) = link.as_deref() {
        queue.push_back(node);
    }
    while let Some(node) = queue.pop_front() {
        if node.key == *key {
            return Some(node);
        }
        if let Some(left) = node.left.as_deref() {
            queue.push_back(left);
        }
        if let Some(right) = node.right.as_deref() {
            queue.push_back(right);
        }
    }
    None
}

/// Whether every node has either zero or two children. Vacuously true for
/// the empty tree.
pub fn is_full<K>(link: &Link<K>) -> bool {
    match link.as_deref() {
        None => true,
        Some(node) => match node.degree() {
            Degree::None => true,
            Degree::Both => is_full(&node.left) && is_full(&node.right),
            Degree::OnlyLeft | Degree::OnlyRight => false,
        },
    }
}

/// Whether every level except possibly the last is fully occupied and the
/// last level's nodes are packed to the left. Vacuously true for the empty
/// tree.
pub fn is_complete<K>(link: &Link<K>) -> bool {
    complete_at(link, 0, count_nodes(link))
}

/// A tree is complete exactly when numbering the root 0 and the children of
/// node `i` as `2i + 1` / `2i + 2` assigns every node an index below the
/// node count.
fn complete_at<K>(link: &Link<K>, index: usize, count: usize) -> bool {
    match link.as_deref() {
        None => true,
        Some(_) if index >= count => false,
        Some(node) => {
            complete_at(&node.left, 2 * index + 1, count)
                && complete_at(&node.right, 2 * index + 2, count)
        }
    }
}

/// Whether every internal node has two children and every leaf sits on the
/// same, last level. Vacuously true for the empty tree.
pub fn is_perfect<K>(link: &Link<K>) -> bool {
    perfect_at(link, 0, depth(link))
}

fn perfect_at<K>(link: &Link<K>, level: usize, depth: usize) -> bool {
    match link.as_deref() {
        None => true,
        Some(node) => match node.degree() {
            Degree::None => depth == level + 1,
            Degree::Both => {
                perfect_at(&node.left, level + 1, depth)
                    && perfect_at(&node.right, level + 1, depth)
            }
            Degree::OnlyLeft | Degree::OnlyRight => false,
        },
    }
}

/// Whether the subtrees under every node differ in height by at most one.
/// Recomputes heights by walking rather than trusting the caches, so it can
/// vouch for trees built by hand or loaded from a dump.
pub fn is_balanced<K>(link: &Link<K>) -> bool {
    let mut queue = VecDeque::new();
    if let Some(node) = link.as_deref() {
        queue.push_back(node);
    }
    while let Some(node) = queue.pop_front() {
        if depth(&node.left).abs_diff(depth(&node.right)) > 1 {
            return false;
        }
        if let Some(left) = node.left.as_deref() {
            queue.push_back(left);
        }
        if let Some(right) = node.right.as_deref() {
            queue.push_back(right);
        }
    }
    true
}

/// Whether two subtrees have the same shape with equal keys node for node.
/// Two empty links are equal; an empty link never equals an occupied one.
pub fn structural_eq<K: PartialEq>(a: &Link<K>, b: &Link<K>) -> bool {
    match (a.as_deref(), b.as_deref()) {
        (None, None) => true,
        (Some(a), Some(b)) => {
            a.key == b.key
                && a.degree() == b.degree()
                && structural_eq(&a.left, &b.left)
                && structural_eq(&a.right, &b.right)
        }
        _ => false,
    }
}

/// Writes the subtree sideways: right subtree first, then the node's key and
/// cached height indented four spaces per level, then the left subtree.
/// Rotate the output a quarter turn clockwise in your head to see the usual
/// root-at-the-top picture. The empty tree writes nothing.
pub fn render<K: fmt::Display, W: fmt::Write>(link: &Link<K>, out: &mut W) -> fmt::Result {
    render_at(link, 0, out)
}

fn render_at<K: fmt::Display, W: fmt::Write>(
    link: &Link<K>,
    depth: usize,
    out: &mut W,
) -> fmt::Result {
    let Some(node) = link.as_deref() else {
        return Ok(());
    };
    render_at(&node.right, depth + 1, out)?;
    writeln!(out, "{:indent$}{} {}", "", node.key, node.height, indent = 4 * depth)?;
    render_at(&node.left, depth + 1, out)
}
