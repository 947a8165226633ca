//! LIFO storage for the evaluator.
//!
//! The stack knows nothing about parsing. It only enforces that reads from an
//! empty stack are reported instead of panicking.

use thiserror::Error;

/// Failure of a stack read.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Error)]
pub enum StackError {
    #[error("pop from an empty stack")]
    EmptyPop,
    #[error("peek at an empty stack")]
    EmptyPeek,
}

/// Vec-backed last-in, first-out container.
#[derive(Clone, Debug)]
pub struct Stack<T> {
    items: Vec<T>,
}

impl<T> Stack<T> {
    /// Create an empty stack.
    pub fn new() -> Self {
        Stack { items: Vec::new() }
    }

    /// Push `item` on top. Never fails.
    #[inline]
    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    /// Remove and return the top item.
    ///
    /// # Errors
    ///
    /// Returns [`StackError::EmptyPop`] if the stack holds no items.
    #[inline]
    pub fn pop(&mut self) -> Result<T, StackError> {
        self.items.pop().ok_or(StackError::EmptyPop)
    }

    /// Borrow the top item without removing it.
    ///
    /// # Errors
    ///
    /// Returns [`StackError::EmptyPeek`] if the stack holds no items.
    #[inline]
    pub fn peek(&self) -> Result<&T, StackError> {
        self.items.last().ok_or(StackError::EmptyPeek)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of items currently on the stack.
    #[inline]
    pub fn size(&self) -> usize {
        self.items.len()
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}
