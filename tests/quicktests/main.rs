//! Randomized tests driving whole trees against a sorted-vector reference
//! model.

use quickcheck::{Arbitrary, Gen};

use avltree::{Balance, Tree};

mod avl;
mod bst;
mod codec;

/// An enum for the various kinds of "things" to do to
/// a search tree in a quicktest.
#[derive(Copy, Clone, Debug)]
enum Op<K> {
    /// Insert the K into the tree.
    Insert(K),
    /// Remove one node holding K from the tree.
    Remove(K),
    /// Remove and return the smallest key.
    ExtractMin,
    /// Remove and return the largest key.
    ExtractMax,
}

impl<K: Arbitrary> Arbitrary for Op<K> {
    /// Tells quickcheck how to randomly choose an operation.
    fn arbitrary(g: &mut Gen) -> Self {
        match g.choose(&[0, 1, 2, 3]).unwrap() {
            0 => Op::Insert(K::arbitrary(g)),
            1 => Op::Remove(K::arbitrary(g)),
            2 => Op::ExtractMin,
            3 => Op::ExtractMax,
            _ => unreachable!(),
        }
    }
}

/// Applies a set of operations to a tree and to a sorted vector holding the
/// same multiset of keys. Every operation must agree between the two about
/// what it found or removed.
fn do_ops<B: Balance>(ops: &[Op<i8>], tree: &mut Tree<i8, B>, model: &mut Vec<i8>) {
    for op in ops {
        match op {
            Op::Insert(key) => {
                tree.insert(*key);
                let at = model.partition_point(|k| k <= key);
                model.insert(at, *key);
            }
            Op::Remove(key) => {
                let found = model.iter().position(|k| k == key);
                if let Some(at) = found {
                    model.remove(at);
                }
                assert_eq!(tree.remove(key), found.is_some());
            }
            Op::ExtractMin => {
                let expected = if model.is_empty() {
                    None
                } else {
                    Some(model.remove(0))
                };
                assert_eq!(tree.extract_min(), expected);
            }
            Op::ExtractMax => {
                assert_eq!(tree.extract_max(), model.pop());
            }
        }
    }
}

/// The tree's whole content in sorted order.
fn contents<B>(tree: &Tree<i8, B>) -> Vec<i8> {
    tree.iter().copied().collect()
}
