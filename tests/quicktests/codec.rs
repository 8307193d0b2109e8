use avltree::{Avl, Bst};

quickcheck::quickcheck! {
    fn round_trips_structurally(xs: Vec<i16>) -> bool {
        let tree: Bst<i16> = xs.iter().copied().collect();

        let mut out = Vec::new();
        tree.serialize(&mut out).unwrap();
        let back = Bst::<i16>::deserialize(&mut &out[..]).unwrap();

        back == tree
    }
}

quickcheck::quickcheck! {
    fn round_trips_preserve_heights(xs: Vec<i16>) -> bool {
        let tree: Avl<i16> = xs.iter().copied().collect();

        let mut out = Vec::new();
        tree.serialize(&mut out).unwrap();
        let back = Avl::<i16>::deserialize(&mut &out[..]).unwrap();

        // The sideways rendering includes every cached height, so equal
        // renderings mean equal shapes with equal caches.
        format!("{}", back) == format!("{}", tree)
    }
}

quickcheck::quickcheck! {
    fn serialized_token_count_is_one_sentinel_per_link(xs: Vec<i8>) -> bool {
        let tree: Avl<i8> = xs.iter().copied().collect();

        let mut out = Vec::new();
        tree.serialize(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        // n keys and n + 1 empty links.
        let tokens: Vec<&str> = text.split_whitespace().collect();
        let sentinels = tokens.iter().filter(|t| **t == "#").count();
        tokens.len() == 2 * xs.len() + 1 && sentinels == xs.len() + 1
    }
}
