//! An unbalanced Binary Search Tree of unique values. Every `Node` exclusively owns its
//! children so there are no parent pointers and no reference counting: removing a node (or
//! dropping the tree) is all it takes to reclaim it.
//!
//! # Examples
//!
//! ```
//! use datastructs::tree::{Order, Tree};
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert_eq!(tree.min(), None);
//! assert_eq!(tree.search(&7), None);
//!
//! for value in [45, 10, 7, 12, 90, 50, 2] {
//!     tree.insert(value);
//! }
//!
//! assert_eq!(tree.min(), Some(&2));
//! assert_eq!(tree.search(&7), Some(&7));
//!
//! // Removing a node returns its value.
//! assert_eq!(tree.remove(&7), Some(7));
//!
//! let sorted: Vec<_> = tree.traverse(Order::InOrder).copied().collect();
//! assert_eq!(sorted, [2, 10, 12, 45, 50, 90]);
//! ```
//!
//! Nothing rebalances the tree. Inserting values in sorted order builds a tree whose height is
//! its length, and the recursive operations recurse that deep.

use std::cmp::Ordering;
use std::fmt;
use std::iter::FusedIterator;
use std::mem;
use std::vec;

type Link<T> = Option<Box<Node<T>>>;

/// The order in which [`Tree::traverse`] visits nodes.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Order {
    /// Left subtree, then the node, then the right subtree. Yields values in ascending order.
    InOrder,
    /// The node, then its left subtree, then its right subtree.
    PreOrder,
    /// Left subtree, then right subtree, then the node.
    PostOrder,
}

/// A Binary Search Tree. This can be used for inserting, searching, and removing values.
/// Inserting a value that is already present does nothing.
#[derive(Clone)]
pub struct Tree<T> {
    root: Link<T>,
    len: usize,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Tree<T> {
    // Dropping `Box<Node>` recursively would recurse as deep as the tree is tall, which for a
    // tree built from sorted input is its length.
    fn drop(&mut self) {
        let mut stack: Vec<Box<Node<T>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

impl<T> Tree<T> {
    /// Generate a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// The number of values stored in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree holds no values.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// The number of nodes on the longest path from the root to a leaf. An empty tree has a
    /// height of 0 and a tree with just a root has a height of 1.
    pub fn height(&self) -> usize {
        self.root.as_ref().map_or(0, |root| root.height())
    }

    /// Removes every value from the tree.
    pub fn clear(&mut self) {
        *self = Self::new();
    }

    /// Inserts the value into the tree. Returns whether the value was added, i.e. `false` if
    /// an equal value was already present (in which case the tree is unchanged).
    ///
    /// # Examples
    ///
    /// ```
    /// use datastructs::tree::Tree;
    ///
    /// let mut tree = Tree::new();
    ///
    /// assert!(tree.insert(1));
    /// assert!(!tree.insert(1));
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn insert(&mut self, value: T) -> bool
    where
        T: Ord,
    {
        let inserted = match self.root.as_mut() {
            Some(root) => root.insert(value),
            None => {
                self.root = Some(Node::new_boxed(value));
                true
            }
        };
        if inserted {
            self.len += 1;
        }

        self.check_invariants();
        inserted
    }

    /// Potentially finds the stored value equal to the given one. If no node holds it, `None`
    /// is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use datastructs::tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1);
    ///
    /// assert_eq!(tree.search(&1), Some(&1));
    /// assert_eq!(tree.search(&42), None);
    /// ```
    pub fn search(&self, value: &T) -> Option<&T>
    where
        T: Ord,
    {
        self.root.as_ref().and_then(|root| root.search(value))
    }

    /// Whether the tree holds a value equal to the given one.
    pub fn contains(&self, value: &T) -> bool
    where
        T: Ord,
    {
        self.search(value).is_some()
    }

    /// The smallest value in the tree, found by walking left from the root.
    pub fn min(&self) -> Option<&T> {
        self.root.as_ref().map(|root| root.min())
    }

    /// The largest value in the tree, found by walking right from the root.
    pub fn max(&self) -> Option<&T> {
        self.root.as_ref().map(|root| root.max())
    }

    /// Removes the node holding the given value from the tree and returns its value. If the
    /// tree does not hold the value, nothing happens.
    ///
    /// A node with two children takes on the value of its in-order successor (the smallest
    /// value of its right subtree) and the successor's node is spliced out instead.
    ///
    /// # Examples
    ///
    /// ```
    /// use datastructs::tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1);
    ///
    /// assert_eq!(tree.remove(&1), Some(1));
    /// assert_eq!(tree.remove(&1), None);
    /// assert_eq!(tree.search(&1), None);
    /// ```
    pub fn remove(&mut self, value: &T) -> Option<T>
    where
        T: Ord,
    {
        let removed = Node::remove(&mut self.root, value);
        if removed.is_some() {
            self.len -= 1;
        }

        self.check_invariants();
        removed
    }

    /// Collects every value of the tree in the given [`Order`]. The values are gathered up
    /// front so the returned iterator can't observe a half-visited tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use datastructs::tree::{Order, Tree};
    ///
    /// let tree: Tree<_> = [2, 1, 3].into_iter().collect();
    ///
    /// assert!(tree.traverse(Order::InOrder).eq(&[1, 2, 3]));
    /// assert!(tree.traverse(Order::PreOrder).eq(&[2, 1, 3]));
    /// assert!(tree.traverse(Order::PostOrder).eq(&[1, 3, 2]));
    /// ```
    pub fn traverse(&self, order: Order) -> Traversal<'_, T> {
        let mut values = Vec::with_capacity(self.len);
        Node::traverse(&self.root, order, &mut values);

        Traversal {
            values: values.into_iter(),
        }
    }

    /// A lazy iterator over the values in ascending order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(&self.root, self.len)
    }

    /// In tests, after every mutation, assert that the BST invariant and the cached length
    /// still hold.
    fn check_invariants(&self)
    where
        T: Ord,
    {
        if cfg!(test) {
            let mut count = 0;
            let mut previous: Option<&T> = None;
            for value in self.iter() {
                if let Some(previous) = previous {
                    assert!(previous < value, "in-order values must strictly increase");
                }
                previous = Some(value);
                count += 1;
            }
            assert_eq!(count, self.len);
        }
    }
}

impl<T> fmt::Debug for Tree<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T> PartialEq for Tree<T>
where
    T: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T> Eq for Tree<T> where T: Eq {}

impl<T> Extend<T> for Tree<T>
where
    T: Ord,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T> FromIterator<T> for Tree<T>
where
    T: Ord,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<'a, T> IntoIterator for &'a Tree<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// A `Node` has a value and up to two children. Empty children are `None`.
#[derive(Clone)]
struct Node<T> {
    value: T,
    left: Link<T>,
    right: Link<T>,
}

impl<T> Node<T> {
    fn new_boxed(value: T) -> Box<Self> {
        Box::new(Self {
            value,
            left: None,
            right: None,
        })
    }

    fn height(&self) -> usize {
        let left_height = self.left.as_ref().map_or(0, |n| n.height());
        let right_height = self.right.as_ref().map_or(0, |n| n.height());
        left_height.max(right_height) + 1
    }

    fn insert(&mut self, value: T) -> bool
    where
        T: Ord,
    {
        let child = match value.cmp(&self.value) {
            Ordering::Less => &mut self.left,
            Ordering::Equal => return false,
            Ordering::Greater => &mut self.right,
        };

        match child {
            Some(child) => child.insert(value),
            None => {
                *child = Some(Self::new_boxed(value));
                true
            }
        }
    }

    fn search(&self, value: &T) -> Option<&T>
    where
        T: Ord,
    {
        match value.cmp(&self.value) {
            Ordering::Less => self.left.as_ref()?.search(value),
            Ordering::Equal => Some(&self.value),
            Ordering::Greater => self.right.as_ref()?.search(value),
        }
    }

    fn min(&self) -> &T {
        self.left.as_ref().map_or(&self.value, |left| left.min())
    }

    fn max(&self) -> &T {
        self.right.as_ref().map_or(&self.value, |right| right.max())
    }

    /// Removes `value` from the subtree hanging off of `link`, returning it if it was there.
    fn remove(link: &mut Link<T>, value: &T) -> Option<T>
    where
        T: Ord,
    {
        let node = link.as_mut()?;
        match value.cmp(&node.value) {
            Ordering::Less => Self::remove(&mut node.left, value),
            Ordering::Greater => Self::remove(&mut node.right, value),

            // If we have two children we promote this node's successor. That is, the smallest
            // node in this node's right subtree. It has no left child so taking it out of the
            // right subtree is a plain splice.
            Ordering::Equal if node.left.is_some() && node.right.is_some() => {
                let successor = Self::take_smallest(&mut node.right)?;
                Some(mem::replace(&mut node.value, successor))
            }

            // Zero or one child: whichever child exists takes this node's place.
            Ordering::Equal => {
                let Node { value, left, right } = *link.take()?;
                *link = left.or(right);
                Some(value)
            }
        }
    }

    /// Detaches the smallest node of the subtree hanging off of `link`, splicing its right
    /// child into its place, and returns its value.
    fn take_smallest(link: &mut Link<T>) -> Option<T> {
        let node = link.as_mut()?;
        if node.left.is_some() {
            return Self::take_smallest(&mut node.left);
        }

        let Node { value, right, .. } = *link.take()?;
        *link = right;
        Some(value)
    }

    fn traverse<'a>(link: &'a Link<T>, order: Order, values: &mut Vec<&'a T>) {
        let Some(node) = link else {
            return;
        };

        match order {
            Order::InOrder => {
                Self::traverse(&node.left, order, values);
                values.push(&node.value);
                Self::traverse(&node.right, order, values);
            }
            Order::PreOrder => {
                values.push(&node.value);
                Self::traverse(&node.left, order, values);
                Self::traverse(&node.right, order, values);
            }
            Order::PostOrder => {
                Self::traverse(&node.left, order, values);
                Self::traverse(&node.right, order, values);
                values.push(&node.value);
            }
        }
    }
}

/// The values of a [`Tree`] in the [`Order`] given to [`Tree::traverse`].
pub struct Traversal<'a, T> {
    values: vec::IntoIter<&'a T>,
}

impl<'a, T> Iterator for Traversal<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.values.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.values.size_hint()
    }
}

impl<T> ExactSizeIterator for Traversal<'_, T> {}
impl<T> FusedIterator for Traversal<'_, T> {}

/// A lazy in-order iterator over a [`Tree`]. It keeps the path of nodes whose left subtrees
/// are being visited so it only ever holds `O(height)` references.
pub struct Iter<'a, T> {
    stack: Vec<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    fn new(root: &'a Link<T>, len: usize) -> Self {
        let mut iter = Self {
            stack: Vec::new(),
            remaining: len,
        };
        iter.push_left_spine(root.as_deref());
        iter
    }

    fn push_left_spine(&mut self, mut node: Option<&'a Node<T>>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left.as_deref();
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right.as_deref());
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}

#[cfg(test)]
mod tests {
    use super::*;

    /// Builds the tree
    ///
    /// ```text
    ///          45
    ///        /    \
    ///      10      90
    ///     /  \    /
    ///    7   12  50
    ///   /
    ///  2
    /// ```
    fn sample_tree() -> Tree<i32> {
        [45, 10, 7, 12, 90, 50, 2].into_iter().collect()
    }

    fn traversed(tree: &Tree<i32>, order: Order) -> Vec<i32> {
        tree.traverse(order).copied().collect()
    }

    #[test]
    fn empty_tree() {
        let tree: Tree<i32> = Tree::new();

        assert!(tree.is_empty());
        assert_eq!(tree.len(), 0);
        assert_eq!(tree.height(), 0);
        assert_eq!(tree.min(), None);
        assert_eq!(tree.max(), None);
        assert_eq!(tree.search(&1), None);
        assert_eq!(tree.traverse(Order::InOrder).count(), 0);
        assert_eq!(tree.iter().next(), None);
    }

    #[test]
    fn playground_scenario() {
        let mut tree = sample_tree();

        assert_eq!(tree.min(), Some(&2));
        assert_eq!(tree.max(), Some(&90));
        assert_eq!(tree.search(&7), Some(&7));

        assert_eq!(tree.remove(&7), Some(7));
        assert_eq!(tree.search(&7), None);
        assert_eq!(traversed(&tree, Order::InOrder), [2, 10, 12, 45, 50, 90]);
    }

    #[test]
    fn traversal_orders() {
        let tree = sample_tree();

        assert_eq!(traversed(&tree, Order::InOrder), [2, 7, 10, 12, 45, 50, 90]);
        assert_eq!(traversed(&tree, Order::PreOrder), [45, 10, 7, 2, 12, 90, 50]);
        assert_eq!(traversed(&tree, Order::PostOrder), [2, 7, 12, 10, 50, 90, 45]);
        assert_eq!(tree.traverse(Order::PreOrder).len(), 7);
    }

    #[test]
    fn insert_duplicate_is_a_no_op() {
        let mut tree = sample_tree();

        assert!(!tree.insert(12));
        assert!(!tree.insert(45));
        assert_eq!(tree.len(), 7);
        assert_eq!(traversed(&tree, Order::PreOrder), [45, 10, 7, 2, 12, 90, 50]);
    }

    #[test]
    fn delete_with_no_children() {
        let mut tree = sample_tree();

        assert_eq!(tree.remove(&12), Some(12));
        assert_eq!(traversed(&tree, Order::PreOrder), [45, 10, 7, 2, 90, 50]);
    }

    #[test]
    fn delete_with_only_left_child() {
        let mut tree = sample_tree();

        // 90 only has 50 to its left, which takes its place.
        assert_eq!(tree.remove(&90), Some(90));
        assert_eq!(traversed(&tree, Order::PreOrder), [45, 10, 7, 2, 12, 50]);
    }

    #[test]
    fn delete_with_only_right_child() {
        let mut tree: Tree<_> = [5, 3, 7, 9].into_iter().collect();

        assert_eq!(tree.remove(&7), Some(7));
        assert_eq!(traversed(&tree, Order::PreOrder), [5, 3, 9]);
    }

    #[test]
    fn delete_with_successor_leaf() {
        let mut tree = sample_tree();

        // 10's successor is 12, a leaf.
        assert_eq!(tree.remove(&10), Some(10));
        assert_eq!(traversed(&tree, Order::PreOrder), [45, 12, 7, 2, 90, 50]);
    }

    #[test]
    fn delete_with_deeper_successor() {
        let mut tree: Tree<_> = [5, 3, 9, 7, 10, 8].into_iter().collect();

        // 5's successor is 7, which has a right child (8) that must be spliced up.
        assert_eq!(tree.remove(&5), Some(5));
        assert_eq!(traversed(&tree, Order::PreOrder), [7, 3, 9, 8, 10]);
        assert_eq!(traversed(&tree, Order::InOrder), [3, 7, 8, 9, 10]);
    }

    #[test]
    fn delete_root() {
        let mut tree = Tree::new();
        tree.insert(5);

        assert_eq!(tree.remove(&5), Some(5));
        assert!(tree.is_empty());
        assert_eq!(tree.search(&5), None);
        assert_eq!(tree.min(), None);
    }

    #[test]
    fn delete_root_with_two_children() {
        let mut tree = sample_tree();

        assert_eq!(tree.remove(&45), Some(45));
        assert_eq!(traversed(&tree, Order::PreOrder), [50, 10, 7, 2, 12, 90]);
    }

    #[test]
    fn delete_missing_value() {
        let mut tree = sample_tree();

        assert_eq!(tree.remove(&11), None);
        assert_eq!(tree.remove(&100), None);
        assert_eq!(tree.len(), 7);
        assert_eq!(traversed(&tree, Order::PreOrder), [45, 10, 7, 2, 12, 90, 50]);

        let mut empty: Tree<i32> = Tree::new();
        assert_eq!(empty.remove(&1), None);
    }

    #[test]
    fn sorted_input_degenerates_into_a_list() {
        let tree: Tree<_> = (0..500).collect();

        assert_eq!(tree.height(), 500);
        assert_eq!(tree.min(), Some(&0));
        assert_eq!(tree.max(), Some(&499));
        assert!(tree.iter().copied().eq(0..500));
    }

    #[test]
    fn height() {
        let mut tree = Tree::new();
        assert_eq!(tree.height(), 0);

        tree.insert(2);
        assert_eq!(tree.height(), 1);

        tree.insert(1);
        tree.insert(3);
        assert_eq!(tree.height(), 2);

        tree.insert(4);
        assert_eq!(tree.height(), 3);

        tree.remove(&4);
        assert_eq!(tree.height(), 2);
    }

    #[test]
    fn clear_and_reuse() {
        let mut tree = sample_tree();
        tree.clear();

        assert!(tree.is_empty());
        assert!(tree.insert(1));
        assert_eq!(tree.len(), 1);
    }

    #[test]
    fn clone_is_independent() {
        let mut tree = sample_tree();
        let copy = tree.clone();

        tree.remove(&45);

        assert_eq!(copy.len(), 7);
        assert_eq!(copy.search(&45), Some(&45));
        assert_ne!(tree, copy);
    }

    #[test]
    fn equality_ignores_shape() {
        let balanced: Tree<_> = [2, 1, 3].into_iter().collect();
        let skewed: Tree<_> = [1, 2, 3].into_iter().collect();

        assert_eq!(balanced, skewed);
        assert_eq!(format!("{:?}", skewed), "{1, 2, 3}");
    }

    #[test]
    fn works_with_owned_values() {
        let mut tree: Tree<String> = ["pear", "apple", "fig"]
            .iter()
            .map(|s| s.to_string())
            .collect();

        assert_eq!(tree.min().map(String::as_str), Some("apple"));
        assert_eq!(tree.remove(&"pear".to_string()), Some("pear".to_string()));
        assert_eq!(tree.max().map(String::as_str), Some("fig"));
    }
}
