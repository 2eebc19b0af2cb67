//! A doubly linked list. Every node points at both its `next` and `previous` neighbor so the
//! list can be walked, pushed to, and popped from either end.
//!
//! # Examples
//!
//! ```
//! use datastructs::list::LinkedList;
//!
//! let mut list = LinkedList::new();
//! assert_eq!(list.to_string(), "Empty LinkedList");
//!
//! list.push_back(1);
//! list.push_back(2);
//! list.push_back(3);
//!
//! list[2] = 44;
//! list.insert(0, 12).unwrap();
//! assert_eq!(list.to_string(), "12, 1, 2, 44");
//!
//! list.reverse();
//! assert_eq!(list.to_string(), "44, 2, 1, 12");
//!
//! // Inserting past the end is an error rather than a panic.
//! assert!(list.insert(10, 0).is_err());
//! ```

use std::error::Error;
use std::fmt;
use std::iter::FusedIterator;
use std::marker::PhantomData;
use std::mem;
use std::ops::{Index, IndexMut};
use std::ptr::NonNull;

/// Errors from positional [`LinkedList`] operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListError {
    /// The index was past the end of the list.
    IndexOutOfBounds {
        /// The index that was asked for.
        index: usize,
        /// The length of the list at the time.
        len: usize,
    },
}

impl fmt::Display for ListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IndexOutOfBounds { index, len } => {
                write!(f, "index {} out of bounds for list of length {}", index, len)
            }
        }
    }
}

impl Error for ListError {}

type Link<T> = Option<NonNull<Node<T>>>;

struct Node<T> {
    value: T,
    next: Link<T>,
    previous: Link<T>,
}

/// A doubly linked list owning its values.
pub struct LinkedList<T> {
    head: Link<T>,
    tail: Link<T>,
    len: usize,
    // The list owns its nodes even though it only holds pointers to them.
    marker: PhantomData<Box<Node<T>>>,
}

// SAFETY: The list owns its nodes exclusively and hands out references to them only through
// `&self`/`&mut self`, exactly like `Vec<T>`.
unsafe impl<T: Send> Send for LinkedList<T> {}
// SAFETY: See above. Shared access never mutates through the node pointers.
unsafe impl<T: Sync> Sync for LinkedList<T> {}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for LinkedList<T> {
    fn drop(&mut self) {
        while self.pop_front().is_some() {}
    }
}

impl<T> LinkedList<T> {
    /// Generate a new, empty `LinkedList`.
    pub fn new() -> Self {
        Self {
            head: None,
            tail: None,
            len: 0,
            marker: PhantomData,
        }
    }

    /// The number of values in the list.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the list holds no values.
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// The first value of the list, if any.
    pub fn first(&self) -> Option<&T> {
        // SAFETY: `head` is a live node owned by this list. Borrowing `self` keeps it alive and
        // unaliased by any `&mut` for the lifetime of the returned reference.
        self.head.map(|node| unsafe { &(*node.as_ptr()).value })
    }

    /// The last value of the list, if any.
    pub fn last(&self) -> Option<&T> {
        // SAFETY: As in `first`.
        self.tail.map(|node| unsafe { &(*node.as_ptr()).value })
    }

    /// A mutable reference to the first value of the list, if any.
    pub fn first_mut(&mut self) -> Option<&mut T> {
        // SAFETY: As in `first`, and `&mut self` guarantees no other reference into the list.
        self.head.map(|node| unsafe { &mut (*node.as_ptr()).value })
    }

    /// A mutable reference to the last value of the list, if any.
    pub fn last_mut(&mut self) -> Option<&mut T> {
        // SAFETY: As in `first_mut`.
        self.tail.map(|node| unsafe { &mut (*node.as_ptr()).value })
    }

    /// Appends a value to the back of the list.
    pub fn push_back(&mut self, value: T) {
        let node = Self::new_node(value, self.tail, None);
        match self.tail {
            // SAFETY: `tail` is a live node owned by this list and `&mut self` means nothing else
            // is looking at it.
            Some(mut tail) => unsafe { tail.as_mut().next = Some(node) },
            None => self.head = Some(node),
        }
        self.tail = Some(node);
        self.len += 1;

        self.check_invariants();
    }

    /// Prepends a value to the front of the list.
    pub fn push_front(&mut self, value: T) {
        let node = Self::new_node(value, None, self.head);
        match self.head {
            // SAFETY: As in `push_back`.
            Some(mut head) => unsafe { head.as_mut().previous = Some(node) },
            None => self.tail = Some(node),
        }
        self.head = Some(node);
        self.len += 1;

        self.check_invariants();
    }

    /// Removes and returns the first value of the list.
    pub fn pop_front(&mut self) -> Option<T> {
        let head = self.head?;
        // SAFETY: `head` belongs to this list.
        Some(unsafe { self.unlink(head) })
    }

    /// Removes and returns the last value of the list.
    pub fn pop_back(&mut self) -> Option<T> {
        let tail = self.tail?;
        // SAFETY: `tail` belongs to this list.
        Some(unsafe { self.unlink(tail) })
    }

    /// A reference to the value at `index`, or `None` if the index is past the end.
    pub fn get(&self, index: usize) -> Option<&T> {
        // SAFETY: As in `first`.
        self.node_at(index)
            .map(|node| unsafe { &(*node.as_ptr()).value })
    }

    /// A mutable reference to the value at `index`, or `None` if the index is past the end.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        // SAFETY: As in `first_mut`.
        self.node_at(index)
            .map(|node| unsafe { &mut (*node.as_ptr()).value })
    }

    /// Inserts `value` so that it ends up at `index`, shifting everything after it back by one.
    /// Any index up to and including `len()` is valid.
    ///
    /// # Examples
    ///
    /// ```
    /// use datastructs::list::{LinkedList, ListError};
    ///
    /// let mut list: LinkedList<_> = [1, 3].into_iter().collect();
    ///
    /// list.insert(1, 2).unwrap();
    /// list.insert(3, 4).unwrap();
    /// assert_eq!(list.to_string(), "1, 2, 3, 4");
    ///
    /// assert_eq!(list.insert(5, 5), Err(ListError::IndexOutOfBounds { index: 5, len: 4 }));
    /// ```
    pub fn insert(&mut self, index: usize, value: T) -> Result<(), ListError> {
        if index > self.len {
            return Err(ListError::IndexOutOfBounds {
                index,
                len: self.len,
            });
        }

        match self.node_at(index) {
            // `node_at` only misses at `index == len`.
            None => self.push_back(value),
            Some(mut next) => {
                // SAFETY: `next` is a live node of this list and `&mut self` means nothing else
                // is looking at it or at its `previous` neighbor.
                let previous = unsafe { next.as_ref().previous };
                let node = Self::new_node(value, previous, Some(next));
                unsafe { next.as_mut().previous = Some(node) };
                match previous {
                    // SAFETY: As above.
                    Some(mut previous) => unsafe { previous.as_mut().next = Some(node) },
                    None => self.head = Some(node),
                }
                self.len += 1;

                self.check_invariants();
            }
        }

        Ok(())
    }

    /// Inserts every value of `values` starting at `index`, keeping their order. The bounds
    /// are checked before anything is inserted.
    pub fn insert_all<I>(&mut self, index: usize, values: I) -> Result<(), ListError>
    where
        I: IntoIterator<Item = T>,
    {
        if index > self.len {
            return Err(ListError::IndexOutOfBounds {
                index,
                len: self.len,
            });
        }

        for (offset, value) in values.into_iter().enumerate() {
            self.insert(index + offset, value)?;
        }
        Ok(())
    }

    /// Removes and returns the value at `index`.
    pub fn remove(&mut self, index: usize) -> Result<T, ListError> {
        let node = self.node_at(index).ok_or(ListError::IndexOutOfBounds {
            index,
            len: self.len,
        })?;

        // SAFETY: `node_at` only returns nodes of this list.
        Ok(unsafe { self.unlink(node) })
    }

    /// Moves every value of `other` onto the end of this list, leaving `other` empty.
    pub fn append(&mut self, other: &mut Self) {
        match (self.tail, other.head) {
            (_, None) => {}
            (None, Some(_)) => mem::swap(self, other),
            (Some(mut tail), Some(mut other_head)) => {
                // SAFETY: Both nodes are live and owned by lists we hold `&mut` to. Once linked,
                // ownership of `other`'s nodes moves to `self` and `other` forgets them below.
                unsafe {
                    tail.as_mut().next = Some(other_head);
                    other_head.as_mut().previous = Some(tail);
                }
                self.tail = other.tail.take();
                other.head = None;
                self.len += mem::take(&mut other.len);

                self.check_invariants();
            }
        }
    }

    /// Removes every value from the list.
    pub fn clear(&mut self) {
        while self.pop_front().is_some() {}
    }

    /// Reverses the list in place by swapping every node's `next` and `previous` links.
    pub fn reverse(&mut self) {
        let mut current = self.head;
        while let Some(mut node) = current {
            // SAFETY: `node` is a live node of this list and `&mut self` means nothing else is
            // looking at it.
            let node = unsafe { node.as_mut() };
            mem::swap(&mut node.next, &mut node.previous);
            current = node.previous;
        }
        mem::swap(&mut self.head, &mut self.tail);

        self.check_invariants();
    }

    /// An iterator over references to the values, front to back.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            head: self.head,
            tail: self.tail,
            len: self.len,
            marker: PhantomData,
        }
    }

    /// An iterator over mutable references to the values, front to back.
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut {
            head: self.head,
            tail: self.tail,
            len: self.len,
            marker: PhantomData,
        }
    }

    fn new_node(value: T, previous: Link<T>, next: Link<T>) -> NonNull<Node<T>> {
        NonNull::from(Box::leak(Box::new(Node {
            value,
            next,
            previous,
        })))
    }

    /// Walks from whichever end is closer to the node at `index`.
    fn node_at(&self, index: usize) -> Link<T> {
        if index >= self.len {
            return None;
        }

        // SAFETY: Every `next`/`previous` link of a node in this list points at another live
        // node of this list, and we only read the links.
        if index < self.len / 2 {
            let mut node = self.head?;
            for _ in 0..index {
                node = unsafe { node.as_ref().next }?;
            }
            Some(node)
        } else {
            let mut node = self.tail?;
            for _ in index + 1..self.len {
                node = unsafe { node.as_ref().previous }?;
            }
            Some(node)
        }
    }

    /// Detaches `node` from its neighbors, frees it, and returns its value.
    ///
    /// # Safety
    ///
    /// `node` must be a node of this list. It is dangling once this returns.
    unsafe fn unlink(&mut self, node: NonNull<Node<T>>) -> T {
        // SAFETY: Nodes are allocated with `Box::new` in `new_node`, and the caller guarantees
        // this one is ours. After relinking its neighbors nothing points at it anymore.
        let node = unsafe { Box::from_raw(node.as_ptr()) };
        match node.previous {
            Some(mut previous) => unsafe { previous.as_mut().next = node.next },
            None => self.head = node.next,
        }
        match node.next {
            Some(mut next) => unsafe { next.as_mut().previous = node.previous },
            None => self.tail = node.previous,
        }
        self.len -= 1;

        self.check_invariants();
        node.value
    }

    /// In tests, after every mutation, assert that the links agree in both directions and
    /// with the cached length.
    fn check_invariants(&self) {
        if cfg!(test) {
            let mut count = 0;
            let mut previous: Link<T> = None;
            let mut current = self.head;
            while let Some(node) = current {
                // SAFETY: Read-only walk over nodes of this list.
                let node_ref = unsafe { node.as_ref() };
                assert_eq!(node_ref.previous, previous);
                previous = Some(node);
                current = node_ref.next;
                count += 1;
            }
            assert_eq!(previous, self.tail);
            assert_eq!(count, self.len);
        }
    }
}

impl<T> Index<usize> for LinkedList<T> {
    type Output = T;

    /// # Panics
    ///
    /// When `index` is past the end of the list.
    fn index(&self, index: usize) -> &T {
        match self.get(index) {
            Some(value) => value,
            None => panic!("index {} out of bounds for list of length {}", index, self.len),
        }
    }
}

impl<T> IndexMut<usize> for LinkedList<T> {
    /// # Panics
    ///
    /// When `index` is past the end of the list.
    fn index_mut(&mut self, index: usize) -> &mut T {
        let len = self.len;
        match self.get_mut(index) {
            Some(value) => value,
            None => panic!("index {} out of bounds for list of length {}", index, len),
        }
    }
}

impl<T> fmt::Display for LinkedList<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "Empty LinkedList");
        }

        for (i, value) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", value)?;
        }
        Ok(())
    }
}

impl<T> fmt::Debug for LinkedList<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Clone for LinkedList<T>
where
    T: Clone,
{
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T> PartialEq for LinkedList<T>
where
    T: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T> Eq for LinkedList<T> where T: Eq {}

impl<T> Extend<T> for LinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push_back(value);
        }
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T> IntoIterator for LinkedList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter(self)
    }
}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut LinkedList<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

/// Borrowing iterator over a [`LinkedList`].
pub struct Iter<'a, T> {
    head: Link<T>,
    tail: Link<T>,
    len: usize,
    marker: PhantomData<&'a Node<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.len == 0 {
            return None;
        }
        let node = self.head?;
        // SAFETY: The list is borrowed for `'a` and `len` stops us before the cursors cross.
        let node = unsafe { &*node.as_ptr() };
        self.head = node.next;
        self.len -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.len == 0 {
            return None;
        }
        let node = self.tail?;
        // SAFETY: As in `next`.
        let node = unsafe { &*node.as_ptr() };
        self.tail = node.previous;
        self.len -= 1;
        Some(&node.value)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}

/// Mutably borrowing iterator over a [`LinkedList`].
pub struct IterMut<'a, T> {
    head: Link<T>,
    tail: Link<T>,
    len: usize,
    marker: PhantomData<&'a mut Node<T>>,
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.len == 0 {
            return None;
        }
        let node = self.head?;
        // SAFETY: The list is mutably borrowed for `'a` and `len` guarantees each node is
        // yielded at most once, so the returned references never alias.
        let node = unsafe { &mut *node.as_ptr() };
        self.head = node.next;
        self.len -= 1;
        Some(&mut node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<T> DoubleEndedIterator for IterMut<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.len == 0 {
            return None;
        }
        let node = self.tail?;
        // SAFETY: As in `next`.
        let node = unsafe { &mut *node.as_ptr() };
        self.tail = node.previous;
        self.len -= 1;
        Some(&mut node.value)
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {}
impl<T> FusedIterator for IterMut<'_, T> {}

/// Owning iterator over a [`LinkedList`].
pub struct IntoIter<T>(LinkedList<T>);

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.0.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.0.len, Some(self.0.len))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        self.0.pop_back()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}
impl<T> FusedIterator for IntoIter<T> {}
