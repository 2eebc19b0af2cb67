//! A first-in, first-out queue. Values are `enqueue`d at the back and `dequeue`d from the
//! front.
//!
//! # Examples
//!
//! ```
//! use datastructs::queue::Queue;
//!
//! let mut queue = Queue::new();
//! queue.enqueue(1);
//! queue.enqueue(5);
//! queue.enqueue(6);
//!
//! assert_eq!(queue.to_string(), "[1, 5, 6]");
//! assert_eq!(queue.peek(), Some(&1));
//!
//! assert_eq!(queue.dequeue(), Some(1));
//! assert_eq!(queue.len(), 2);
//! ```

use std::collections::VecDeque;
use std::fmt;

/// A FIFO queue backed by a ring buffer so both ends are `O(1)`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Queue<T> {
    values: VecDeque<T>,
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Queue<T> {
    /// Generate a new, empty `Queue`.
    pub fn new() -> Self {
        Self {
            values: VecDeque::new(),
        }
    }

    /// The number of values waiting in the queue.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the queue holds no values.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The value that the next `dequeue` would return.
    pub fn peek(&self) -> Option<&T> {
        self.values.front()
    }

    /// Adds a value to the back of the queue.
    pub fn enqueue(&mut self, value: T) {
        self.values.push_back(value);
    }

    /// Removes the value at the front of the queue. `None` when the queue is empty.
    pub fn dequeue(&mut self) -> Option<T> {
        self.values.pop_front()
    }
}

impl<T> fmt::Display for Queue<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, value) in self.values.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", value)?;
        }
        write!(f, "]")
    }
}

impl<T> Extend<T> for Queue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.values.extend(iter);
    }
}

impl<T> FromIterator<T> for Queue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}
