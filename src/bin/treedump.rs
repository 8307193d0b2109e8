//! Prints a report about a serialized tree file.
//!
//! Reads the pre-order token format written by `Tree::serialize` and dumps
//! the tree sideways together with its traversal orders, size figures, and
//! shape verdicts. The tree is reported exactly as dumped; nothing is
//! rebalanced on the way in.

use std::env;
use std::fs::File;
use std::io::BufReader;

use anyhow::{bail, Context, Result};
use avltree::{traverse, Bst};

fn main() -> Result<()> {
    let mut args = env::args().skip(1);
    let path = match (args.next(), args.next()) {
        (Some(path), None) => path,
        (None, _) => bail!("Please provide a file name."),
        (Some(_), Some(_)) => bail!("Too many arguments."),
    };

    let file = File::open(&path).with_context(|| format!("Cannot open file {}", path))?;
    let tree: Bst<i64> = Bst::deserialize(&mut BufReader::new(file))
        .with_context(|| format!("Cannot read a tree from {}", path))?;

    print!("{}", tree);

    print!("In    Order: ");
    traverse::in_order(tree.root(), |key| print!("{} ", key));
    println!();

    print!("Pre   Order: ");
    traverse::pre_order(tree.root(), |key| print!("{} ", key));
    println!();

    print!("Post  Order: ");
    traverse::post_order(tree.root(), |key| print!("{} ", key));
    println!();

    print!("Level Order: ");
    traverse::level_order(tree.root(), |key| print!("{} ", key));
    println!();

    println!("HEIGHT: {}", tree.height());
    println!("NODES: {}", traverse::count_nodes(tree.root()));

    println!("FULL: {}", traverse::is_full(tree.root()));
    println!("COMPLETE: {}", traverse::is_complete(tree.root()));
    println!("PERFECT: {}", traverse::is_perfect(tree.root()));
    println!("BALANCED: {}", traverse::is_balanced(tree.root()));

    Ok(())
}
