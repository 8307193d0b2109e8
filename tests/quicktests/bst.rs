use avltree::{Bst, Link};

use crate::{contents, do_ops, Op};

/// Recounts heights through a subtree, checking every cached height on the
/// way. A plain tree makes no balance promise, so that is all it checks.
fn check_heights(link: &Link<i8>) -> usize {
    let Some(node) = link.as_deref() else {
        return 0;
    };
    let left = check_heights(node.left());
    let right = check_heights(node.right());

    assert_eq!(node.height(), left.max(right) + 1, "bad cache at {}", node.key());
    left.max(right) + 1
}

quickcheck::quickcheck! {
    fn fuzz_matches_a_sorted_vector(ops: Vec<Op<i8>>) -> bool {
        let mut tree = Bst::new();
        let mut model = Vec::new();

        do_ops(&ops, &mut tree, &mut model);
        contents(&tree) == model
    }
}

quickcheck::quickcheck! {
    fn heights_stay_correct_under_churn(ops: Vec<Op<i8>>) -> bool {
        let mut tree = Bst::new();
        let mut model = Vec::new();

        do_ops(&ops, &mut tree, &mut model);
        check_heights(tree.root());
        true
    }
}

quickcheck::quickcheck! {
    fn iterates_sorted_with_duplicates_kept(xs: Vec<i8>) -> bool {
        let tree: Bst<i8> = xs.iter().copied().collect();
        let mut sorted = xs;
        sorted.sort();

        contents(&tree) == sorted
    }
}

quickcheck::quickcheck! {
    fn search_agrees_with_the_model(ops: Vec<Op<i8>>, probes: Vec<i8>) -> bool {
        let mut tree = Bst::new();
        let mut model = Vec::new();
        do_ops(&ops, &mut tree, &mut model);

        probes
            .iter()
            .all(|probe| tree.search(probe).is_some() == model.contains(probe))
    }
}
