//! LIFO and FIFO container collaborators for the calculator pipeline.
//!
//! The converter keeps pending operators on a [`Stack`] and finished postfix
//! tokens in a [`Queue`]; the evaluator keeps intermediate values on a
//! [`Stack`]. Both containers own their elements exclusively and live for a
//! single calculation.
//!
//! Removal from an empty container is an error, not a panic: `pop`, `dequeue`
//! and `peek` return [`EmptyContainerError`] so callers can surface a
//! malformed expression instead of aborting.
//!
//! # Backing storage
//!
//! `Stack` wraps a `Vec` (push/pop at the back), `Queue` wraps a `VecDeque`
//! (push at the back, pop at the front). Both ends are O(1), amortized for
//! growth.

use std::collections::VecDeque;
use std::fmt;

use thiserror::Error;

/// Which container reported an empty-removal error.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ContainerKind {
    Stack,
    Queue,
}

impl fmt::Display for ContainerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContainerKind::Stack => f.write_str("stack"),
            ContainerKind::Queue => f.write_str("queue"),
        }
    }
}

/// Error returned by `pop`, `dequeue`, or `peek` on an empty container.
///
/// In the calculator this surfaces as a malformed expression: an operator
/// with too few operands pops an empty value stack.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Error)]
#[error("{kind} is empty")]
pub struct EmptyContainerError {
    /// Which container was empty.
    pub kind: ContainerKind,
}

/// A LIFO container.
///
/// `push` and `pop` operate on the same end; the top is the most recently
/// pushed element.
#[derive(Clone, Debug, Default)]
pub struct Stack<T> {
    items: Vec<T>,
}

impl<T> Stack<T> {
    /// Create an empty stack.
    pub fn new() -> Self {
        Stack { items: Vec::new() }
    }

    /// True if the stack holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of elements on the stack.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Push a value onto the top of the stack.
    #[inline]
    pub fn push(&mut self, value: T) {
        self.items.push(value);
    }

    /// Remove and return the top value.
    pub fn pop(&mut self) -> Result<T, EmptyContainerError> {
        self.items.pop().ok_or(EmptyContainerError {
            kind: ContainerKind::Stack,
        })
    }

    /// Return the top value without removing it.
    pub fn peek(&self) -> Result<&T, EmptyContainerError> {
        self.items.last().ok_or(EmptyContainerError {
            kind: ContainerKind::Stack,
        })
    }
}

/// A FIFO container.
///
/// `enqueue` inserts at the tail, `dequeue` removes at the head.
#[derive(Clone, Debug, Default)]
pub struct Queue<T> {
    items: VecDeque<T>,
}

impl<T> Queue<T> {
    /// Create an empty queue.
    pub fn new() -> Self {
        Queue {
            items: VecDeque::new(),
        }
    }

    /// True if the queue holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of elements in the queue.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Insert a value at the tail of the queue.
    #[inline]
    pub fn enqueue(&mut self, value: T) {
        self.items.push_back(value);
    }

    /// Remove and return the head value.
    pub fn dequeue(&mut self) -> Result<T, EmptyContainerError> {
        self.items.pop_front().ok_or(EmptyContainerError {
            kind: ContainerKind::Queue,
        })
    }

    /// Return the head value without removing it.
    pub fn peek(&self) -> Result<&T, EmptyContainerError> {
        self.items.front().ok_or(EmptyContainerError {
            kind: ContainerKind::Queue,
        })
    }
}

#[cfg(test)]
mod tests;
