//! Search trees over any ordered key type, generic over a rebalancing
//! policy.

use std::cmp::Ordering;
use std::fmt;
use std::io;
use std::marker::PhantomData;
use std::str::FromStr;

use crate::balance::{Balance, HeightBalanced, Unbalanced};
use crate::codec::{self, DecodeError};
use crate::iter::Iter;
use crate::node::{self, Degree, Link, Node};
use crate::traverse;

/// A binary search tree storing keys in sorted order, parameterized over the
/// [`Balance`] policy run at every link on the way back up from a structural
/// mutation.
///
/// Equal keys are kept rather than overwritten: inserting a duplicate routes
/// it into the left subtree, so the tree behaves as a multiset.
///
/// # Examples
///
/// ```
/// use avltree::Avl;
///
/// let mut index = Avl::new();
/// for key in [99, 39, 30, 35, 69, 24, 36, 53, 53, 2] {
///     index.insert(key);
/// }
///
/// assert_eq!(index.search(&53), Some(&53));
/// assert_eq!(index.height(), 4);
///
/// let sorted: Vec<i32> = index.iter().copied().collect();
/// assert_eq!(sorted, [2, 24, 30, 35, 36, 39, 53, 53, 69, 99]);
/// ```
pub struct Tree<K, B = HeightBalanced> {
    root: Link<K>,
    balance: PhantomData<B>,
}

/// A self-balancing tree: [`Tree`] under the [`HeightBalanced`] policy. Its
/// height stays logarithmic in the number of keys no matter the insertion
/// order.
pub type Avl<K> = Tree<K, HeightBalanced>;

/// A plain search tree: [`Tree`] under the [`Unbalanced`] policy. Its shape
/// is entirely determined by the order keys arrive in.
pub type Bst<K> = Tree<K, Unbalanced>;

impl<K, B> Tree<K, B> {
    /// Generate a new, empty tree.
    pub fn new() -> Self {
        Self {
            root: None,
            balance: PhantomData,
        }
    }

    /// Whether the tree holds no keys at all.
    ///
    /// # Examples
    ///
    /// ```
    /// use avltree::Avl;
    ///
    /// let mut tree = Avl::new();
    /// assert!(tree.is_empty());
    ///
    /// tree.insert(1);
    /// assert!(!tree.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// The height of the tree: the number of nodes on the longest path from
    /// the root down to a leaf, 0 for an empty tree. Read from the cache, so
    /// this is O(1).
    pub fn height(&self) -> usize {
        node::height(&self.root)
    }

    /// Borrows the link holding the root node, for read-only structure
    /// walks such as the ones in [`traverse`](crate::traverse).
    ///
    /// There is no mutable counterpart; all mutation goes through the tree
    /// so the policy and the height caches stay maintained.
    pub fn root(&self) -> &Link<K> {
        &self.root
    }

    /// Visits the keys in sorted order without consuming the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use avltree::Avl;
    ///
    /// let tree: Avl<i32> = [2, 3, 1].into_iter().collect();
    /// let mut keys = tree.iter();
    ///
    /// assert_eq!(keys.next(), Some(&1));
    /// assert_eq!(keys.next(), Some(&2));
    /// assert_eq!(keys.next(), Some(&3));
    /// assert_eq!(keys.next(), None);
    /// ```
    pub fn iter(&self) -> Iter<'_, K> {
        Iter::new(&self.root)
    }

    /// Potentially finds the given key in this tree by binary descent. If no
    /// node holds an equal key, `None` is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use avltree::Avl;
    ///
    /// let tree: Avl<i32> = [7, 2, 56].into_iter().collect();
    ///
    /// assert_eq!(tree.search(&56), Some(&56));
    /// assert_eq!(tree.search(&222), None);
    /// ```
    pub fn search(&self, key: &K) -> Option<&K>
    where
        K: Ord,
    {
        search_in(&self.root, key)
    }

    /// The smallest key, i.e. the leftmost node. `None` when empty.
    pub fn min(&self) -> Option<&K> {
        min_of(&self.root)
    }

    /// The largest key, i.e. the rightmost node. `None` when empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use avltree::Avl;
    ///
    /// let tree: Avl<i32> = [7, 2, 56].into_iter().collect();
    ///
    /// assert_eq!(tree.min(), Some(&2));
    /// assert_eq!(tree.max(), Some(&56));
    /// ```
    pub fn max(&self) -> Option<&K> {
        max_of(&self.root)
    }

    /// Writes the tree to `out` as whitespace-separated pre-order tokens,
    /// one key or `#` (for an empty link) per token, each followed by a
    /// single space. See [`codec`](crate::codec) for the format.
    ///
    /// # Examples
    ///
    /// ```
    /// use avltree::Bst;
    ///
    /// let tree: Bst<i32> = [2, 1, 3].into_iter().collect();
    /// let mut out = Vec::new();
    /// tree.serialize(&mut out).unwrap();
    ///
    /// assert_eq!(&out[..], b"2 1 # # 3 # # ");
    /// ```
    pub fn serialize<W>(&self, out: &mut W) -> io::Result<()>
    where
        K: fmt::Display,
        W: io::Write,
    {
        codec::serialize(&self.root, out)
    }

    /// Reads one tree from `input` in the format written by
    /// [`serialize`](Self::serialize), rebuilding height caches bottom-up.
    /// The shape is taken as-is; nothing is reordered or rebalanced, and
    /// input past the end of the tree is left unread.
    ///
    /// # Examples
    ///
    /// ```
    /// use avltree::Bst;
    ///
    /// let mut input = &b"2 1 # # 3 # # "[..];
    /// let tree = Bst::<i32>::deserialize(&mut input).unwrap();
    ///
    /// assert_eq!(tree.iter().copied().collect::<Vec<_>>(), [1, 2, 3]);
    /// ```
    pub fn deserialize<R>(input: &mut R) -> Result<Self, DecodeError>
    where
        K: FromStr,
        R: io::BufRead,
    {
        let root = codec::deserialize(input)?;
        Ok(Self {
            root,
            balance: PhantomData,
        })
    }
}

impl<K, B> Tree<K, B>
where
    B: Balance,
{
    /// Inserts the given key into the tree. Keys equal to an existing one
    /// are kept and descend into the left subtree, so inserting never
    /// overwrites anything.
    ///
    /// # Examples
    ///
    /// ```
    /// use avltree::Avl;
    ///
    /// let mut tree = Avl::new();
    /// tree.insert(2);
    /// tree.insert(2);
    /// tree.insert(1);
    ///
    /// assert_eq!(tree.iter().copied().collect::<Vec<_>>(), [1, 2, 2]);
    /// ```
    pub fn insert(&mut self, key: K)
    where
        K: Ord,
    {
        insert_at::<K, B>(&mut self.root, key);
    }

    /// Removes the shallowest node equal to the given key and reports
    /// whether one was found. With duplicates present, exactly one is
    /// removed per call.
    ///
    /// The removed node is replaced by its in-order successor when it has
    /// two children, by its only child when it has one, and by nothing when
    /// it is a leaf.
    ///
    /// # Examples
    ///
    /// ```
    /// use avltree::Avl;
    ///
    /// let mut tree: Avl<i32> = [2, 1, 3].into_iter().collect();
    ///
    /// assert!(tree.remove(&2));
    /// assert!(!tree.remove(&2));
    /// assert_eq!(tree.search(&2), None);
    /// ```
    pub fn remove(&mut self, key: &K) -> bool
    where
        K: Ord,
    {
        remove_at::<K, B>(&mut self.root, key)
    }

    /// Removes the smallest key and returns it, or `None` when empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use avltree::Avl;
    ///
    /// let mut tree: Avl<i32> = [5, 3, 8].into_iter().collect();
    ///
    /// assert_eq!(tree.extract_min(), Some(3));
    /// assert_eq!(tree.extract_min(), Some(5));
    /// assert_eq!(tree.extract_min(), Some(8));
    /// assert_eq!(tree.extract_min(), None);
    /// ```
    pub fn extract_min(&mut self) -> Option<K> {
        self.extract_min_node().map(Node::into_key)
    }

    /// Removes the largest key and returns it, or `None` when empty.
    pub fn extract_max(&mut self) -> Option<K> {
        self.extract_max_node().map(Node::into_key)
    }

    /// Like [`extract_min`](Self::extract_min) but returns the detached
    /// node itself, childless and with its height reset.
    pub fn extract_min_node(&mut self) -> Option<Box<Node<K>>> {
        if self.is_empty() {
            return None;
        }
        Some(take_min::<K, B>(&mut self.root))
    }

    /// Like [`extract_max`](Self::extract_max) but returns the detached
    /// node itself, childless and with its height reset.
    pub fn extract_max_node(&mut self) -> Option<Box<Node<K>>> {
        if self.is_empty() {
            return None;
        }
        Some(take_max::<K, B>(&mut self.root))
    }
}

impl<K, B> Default for Tree<K, B> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, B> Clone for Tree<K, B>
where
    K: Clone,
{
    fn clone(&self) -> Self {
        Self {
            root: self.root.clone(),
            balance: PhantomData,
        }
    }
}

impl<K, B> fmt::Debug for Tree<K, B>
where
    K: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tree").field("root", &self.root).finish()
    }
}

/// Renders the tree sideways, root at the left margin, one node per line
/// with its cached height, right subtree above and left subtree below.
///
/// # Examples
///
/// ```
/// use avltree::Avl;
///
/// let tree: Avl<i32> = [2, 1, 3].into_iter().collect();
///
/// assert_eq!(format!("{}", tree), "    3 1\n2 2\n    1 1\n");
/// ```
impl<K, B> fmt::Display for Tree<K, B>
where
    K: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        traverse::render(&self.root, f)
    }
}

/// Structural equality: same shape and equal keys node for node. Trees
/// under different policies compare fine, so a rebalanced copy of a tree
/// only equals the original if their shapes agree.
impl<K, B, C> PartialEq<Tree<K, C>> for Tree<K, B>
where
    K: PartialEq,
{
    fn eq(&self, other: &Tree<K, C>) -> bool {
        traverse::structural_eq(&self.root, &other.root)
    }
}

impl<K, B> Eq for Tree<K, B> where K: Eq {}

impl<K, B> FromIterator<K> for Tree<K, B>
where
    K: Ord,
    B: Balance,
{
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<K, B> Extend<K> for Tree<K, B>
where
    K: Ord,
    B: Balance,
{
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<'a, K, B> IntoIterator for &'a Tree<K, B> {
    type Item = &'a K;
    type IntoIter = Iter<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

fn insert_at<K, B>(link: &mut Link<K>, key: K)
where
    K: Ord,
    B: Balance,
{
    match link {
        None => *link = Some(Box::new(Node::new(key))),
        Some(node) => match key.cmp(&node.key) {
            // Ties go left so duplicates stack up as ancestors' left
            // descendants and come back out adjacent in sorted order.
            Ordering::Less | Ordering::Equal => insert_at::<K, B>(&mut node.left, key),
            Ordering::Greater => insert_at::<K, B>(&mut node.right, key),
        },
    }
    B::rebalance(link);
}

fn remove_at<K, B>(link: &mut Link<K>, key: &K) -> bool
where
    K: Ord,
    B: Balance,
{
    let removed = match link {
        None => return false,
        Some(node) => match key.cmp(&node.key) {
            Ordering::Less => remove_at::<K, B>(&mut node.left, key),
            Ordering::Greater => remove_at::<K, B>(&mut node.right, key),
            Ordering::Equal => {
                let mut node = link.take().expect("Removing a key => a node to remove");
                *link = match node.degree() {
                    Degree::None => None,
                    Degree::OnlyLeft => node.left.take(),
                    Degree::OnlyRight => node.right.take(),
                    Degree::Both => {
                        // Unconditionally promote the in-order successor:
                        // the smallest key of the right subtree.
                        node.key = take_min::<K, B>(&mut node.right).into_key();
                        Some(node)
                    }
                };
                true
            }
        },
    };
    B::rebalance(link);
    removed
}

/// Detaches the leftmost node of a non-empty subtree, reattaching that
/// node's right child in its place and rebalancing the walked path.
fn take_min<K, B>(link: &mut Link<K>) -> Box<Node<K>>
where
    B: Balance,
{
    let taken = match link {
        Some(node) if node.left.is_some() => take_min::<K, B>(&mut node.left),
        _ => {
            let mut node = link.take().expect("Extracting min => a non-empty subtree");
            *link = node.right.take();
            node.height = 1;
            node
        }
    };
    B::rebalance(link);
    taken
}

fn take_max<K, B>(link: &mut Link<K>) -> Box<Node<K>>
where
    B: Balance,
{
    let taken = match link {
        Some(node) if node.right.is_some() => take_max::<K, B>(&mut node.right),
        _ => {
            let mut node = link.take().expect("Extracting max => a non-empty subtree");
            *link = node.left.take();
            node.height = 1;
            node
        }
    };
    B::rebalance(link);
    taken
}

fn search_in<'a, K: Ord>(link: &'a Link<K>, key: &K) -> Option<&'a K> {
    let node = link.as_deref()?;
    match key.cmp(&node.key) {
        Ordering::Less => search_in(&node.left, key),
        Ordering::Greater => search_in(&node.right, key),
        Ordering::Equal => Some(&node.key),
    }
}

fn min_of<K>(link: &Link<K>) -> Option<&K> {
    let mut node = link.as_deref()?;
    while let Some(left) = node.left.as_deref() {
        node = left;
    }
    Some(&node.key)
}

fn max_of<K>(link: &Link<K>) -> Option<&K> {
    let mut node = link.as_deref()?;
    while let Some(right) = node.right.as_deref() {
        node = right;
    }
    Some(&node.key)
}
