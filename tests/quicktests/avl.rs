use avltree::{traverse, Avl, Link};

use crate::{contents, do_ops, Op};

/// Recounts heights through a subtree, checking every cached height and the
/// balance bound on the way. Returns the recounted height.
fn check_invariants(link: &Link<i8>) -> usize {
    let Some(node) = link.as_deref() else {
        return 0;
    };
    let left = check_invariants(node.left());
    let right = check_invariants(node.right());

    assert_eq!(node.height(), left.max(right) + 1, "bad cache at {}", node.key());
    assert!(left.abs_diff(right) <= 1, "unbalanced at {}", node.key());
    left.max(right) + 1
}

quickcheck::quickcheck! {
    fn fuzz_matches_a_sorted_vector(ops: Vec<Op<i8>>) -> bool {
        let mut tree = Avl::new();
        let mut model = Vec::new();

        do_ops(&ops, &mut tree, &mut model);
        contents(&tree) == model
    }
}

quickcheck::quickcheck! {
    fn invariants_hold_after_churn(ops: Vec<Op<i8>>) -> bool {
        let mut tree = Avl::new();
        let mut model = Vec::new();

        do_ops(&ops, &mut tree, &mut model);
        check_invariants(tree.root());
        traverse::is_balanced(tree.root())
    }
}

quickcheck::quickcheck! {
    fn balanced_after_every_single_insert(xs: Vec<i8>) -> bool {
        let mut tree = Avl::new();
        for x in xs {
            tree.insert(x);
            check_invariants(tree.root());
        }
        true
    }
}

quickcheck::quickcheck! {
    fn height_stays_logarithmic(xs: Vec<u16>) -> bool {
        let tree: Avl<u16> = xs.iter().copied().collect();

        // With n nodes an AVL tree is at most ~1.44 lg(n + 2) tall.
        tree.height() as f64 <= 1.45 * ((xs.len() + 2) as f64).log2()
    }
}

quickcheck::quickcheck! {
    fn extractions_agree_with_min_and_max(xs: Vec<i8>) -> bool {
        let mut low: Avl<i8> = xs.iter().copied().collect();
        let mut high = low.clone();

        while !low.is_empty() {
            let peeked = low.min().copied();
            if low.extract_min() != peeked {
                return false;
            }
            let peeked = high.max().copied();
            if high.extract_max() != peeked {
                return false;
            }
        }
        high.is_empty()
    }
}
