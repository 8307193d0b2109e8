//! Binary search trees over ordered keys with a pluggable rebalancing
//! policy, the height-balanced (AVL) flavor being the default.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and remove stored keys. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores one key and
//! sometimes has child `Node`s. The most important invariants of the trees
//! in this crate are:
//!
//! 1. For every `Node`, all the `Node`s in its left subtree have a key less
//!    than or equal to its own key.
//! 2. For every `Node`, all the `Node`s in its right subtree have a key
//!    greater than its own key.
//!
//! > Note the "or equal" in the first invariant: inserting a key that is
//! > already present keeps both copies, so these trees behave as multisets
//! > and equal keys come back out adjacent during sorted iteration.
//!
//! The benefits of these invariants are many. For instance, searching for
//! keys takes `O(height)` (where `height` is defined as the number of nodes
//! on the longest path from the root `Node` to a leaf). BSTs also naturally
//! support sorted iteration by visiting the left subtree, then the subtree
//! root, then the right subtree.
//!
//! ## Height balance
//!
//! A plain BST's height depends entirely on insertion order: sorted input
//! produces a linked list. [`Tree`] therefore takes a [`Balance`] policy as
//! a type parameter, run at every link on the way back up from a mutation.
//! [`Avl`] rotates subtrees whenever two sibling heights drift more than one
//! apart, keeping the height logarithmic in the number of keys; [`Bst`]
//! leaves the shape alone.
//!
//! ```
//! use avltree::{Avl, Bst};
//!
//! let chain: Bst<i32> = (1..=7).collect();
//! let packed: Avl<i32> = (1..=7).collect();
//!
//! assert_eq!(chain.height(), 7);
//! assert_eq!(packed.height(), 3);
//! assert!(chain.iter().eq(packed.iter()));
//! ```
//!
//! ## Dumps
//!
//! Trees serialize to a line of whitespace-separated pre-order tokens with
//! `#` marking empty links (see [`codec`]), and the [`traverse`] module
//! reports on trees of any shape, including ones read back from such dumps.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod balance;
pub mod codec;
pub mod iter;
pub mod node;
pub mod traverse;
pub mod tree;

pub use balance::{Balance, HeightBalanced, Unbalanced};
pub use codec::DecodeError;
pub use iter::Iter;
pub use node::{Degree, Link, Node};
pub use tree::{Avl, Bst, Tree};
