//! Text serialization for trees.
//!
//! The format is a pre-order walk: every node writes its key followed by one
//! space, every empty link writes `#` followed by one space, so a tree can
//! be rebuilt from a single forward read with no lookahead. The empty tree
//! is `"# "`. Keys must render as a single whitespace-free token that is
//! not `#`; integer keys are the usual payload.
//!
//! # Examples
//!
//! ```
//! use avltree::{codec, Bst};
//!
//! let tree: Bst<i32> = [2, 1, 3].into_iter().collect();
//!
//! let mut out = Vec::new();
//! codec::serialize(tree.root(), &mut out).unwrap();
//! assert_eq!(&out[..], b"2 1 # # 3 # # ");
//!
//! let decoded = codec::deserialize::<i32, _>(&mut &out[..]).unwrap();
//! assert!(avltree::traverse::structural_eq(tree.root(), &decoded));
//! ```

use std::fmt;
use std::io::{self, BufRead, Write};
use std::str::FromStr;

use thiserror::Error;

use crate::node::{Link, Node};

/// The token standing for an empty link.
const ABSENT: &str = "#";

/// What went wrong while decoding a serialized tree.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The input ended where a key or `#` token was still required.
    #[error("unexpected end of input while reading a tree")]
    UnexpectedEof,
    /// A token that is neither `#` nor a parseable key.
    #[error("invalid token {0:?} in tree input")]
    BadToken(String),
    /// The underlying reader failed.
    #[error("tree input could not be read")]
    Io(#[from] io::Error),
}

/// Writes the subtree behind `link` to `out` in the pre-order token format.
pub fn serialize<K, W>(link: &Link<K>, out: &mut W) -> io::Result<()>
where
    K: fmt::Display,
    W: Write,
{
    match link.as_deref() {
        None => write!(out, "{} ", ABSENT),
        Some(node) => {
            write!(out, "{} ", node.key)?;
            serialize(&node.left, out)?;
            serialize(&node.right, out)
        }
    }
}

/// Reads one pre-order term from `input` and rebuilds the subtree it
/// describes, recomputing cached heights bottom-up along the way.
///
/// Consumes exactly the tokens belonging to the term; anything after them is
/// left unread. The shape is taken as-is, so this accepts trees no sequence
/// of ordered insertions would produce.
pub fn deserialize<K, R>(input: &mut R) -> Result<Link<K>, DecodeError>
where
    K: FromStr,
    R: BufRead,
{
    let Some(token) = next_token(input)? else {
        return Err(DecodeError::UnexpectedEof);
    };
    if token == ABSENT {
        return Ok(None);
    }
    let key = token.parse().map_err(|_| DecodeError::BadToken(token))?;

    let mut node = Box::new(Node::new(key));
    node.left = deserialize(input)?;
    node.right = deserialize(input)?;
    node.fix_height();
    Ok(Some(node))
}

/// Pulls the next whitespace-delimited token out of the reader, or `None`
/// at end of input.
fn next_token<R: BufRead>(input: &mut R) -> Result<Option<String>, DecodeError> {
    let mut token = Vec::new();
    loop {
        let (used, done) = {
            let buf = input.fill_buf()?;
            if buf.is_empty() {
                break;
            }
            let mut used = 0;
            let mut done = false;
            for &byte in buf {
                used += 1;
                if byte.is_ascii_whitespace() {
                    if token.is_empty() {
                        continue;
                    }
                    done = true;
                    break;
                }
                token.push(byte);
            }
            (used, done)
        };
        input.consume(used);
        if done {
            break;
        }
    }
    if token.is_empty() {
        return Ok(None);
    }
    String::from_utf8(token)
        .map(Some)
        .map_err(|err| DecodeError::BadToken(String::from_utf8_lossy(err.as_bytes()).into_owned()))
}
