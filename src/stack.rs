//! A last-in, first-out stack.
//!
//! # Examples
//!
//! ```
//! use datastructs::stack::Stack;
//!
//! let mut stack = Stack::new();
//! assert_eq!(stack.top(), None);
//!
//! stack.push(1);
//! stack.push(4);
//! stack.push(6);
//!
//! // Printed from the top down.
//! assert_eq!(stack.to_string(), "[6, 4, 1]");
//!
//! assert_eq!(stack.pop(), Some(6));
//! assert_eq!(stack.top(), Some(&4));
//! ```

use std::fmt;

/// A LIFO stack backed by a `Vec` whose end is the top of the stack.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Stack<T> {
    values: Vec<T>,
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Stack<T> {
    /// Generate a new, empty `Stack`.
    pub fn new() -> Self {
        Self { values: Vec::new() }
    }

    /// The number of values on the stack.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the stack holds no values.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The most recently pushed value.
    pub fn top(&self) -> Option<&T> {
        self.values.last()
    }

    /// Pushes a value onto the top of the stack.
    pub fn push(&mut self, value: T) {
        self.values.push(value);
    }

    /// Removes the value on top of the stack. `None` when the stack is empty.
    pub fn pop(&mut self) -> Option<T> {
        self.values.pop()
    }
}

impl<T> fmt::Display for Stack<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, value) in self.values.iter().rev().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", value)?;
        }
        write!(f, "]")
    }
}

impl<T> Extend<T> for Stack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.values.extend(iter);
    }
}

impl<T> FromIterator<T> for Stack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}
