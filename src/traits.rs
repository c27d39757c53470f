//! Common traits for priority queue containers
//!
//! This module provides the [`PriorityQueue`] trait, the in-process API surface
//! shared by min-priority queues in this crate, and the [`HeapError`] type its
//! fallible operations return.
//!
//! Unlike the panicking or `Option`-returning accessors of
//! `std::collections::BinaryHeap`, empty-container access is reported as an
//! error so callers can propagate it with `?`.

use std::fmt;

/// Error type for priority queue operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeapError {
    /// The queue holds no elements, so no minimum exists
    EmptyContainer,
    /// An absent value was offered for insertion
    InvalidArgument,
}

impl fmt::Display for HeapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeapError::EmptyContainer => {
                write!(f, "priority queue is empty")
            }
            HeapError::InvalidArgument => {
                write!(f, "cannot insert an absent value")
            }
        }
    }
}

impl std::error::Error for HeapError {}

/// Result alias for priority queue operations
pub type Result<T, E = HeapError> = std::result::Result<T, E>;

/// Base trait for min-priority queue containers
///
/// Elements are their own priority: `T: Ord` is the only ordering used, and
/// the smallest element is always served first.
///
/// # Example
///
/// ```rust
/// use quaternary_heap::{HeapError, PriorityQueue, QuaternaryHeap};
///
/// let mut heap = QuaternaryHeap::new();
/// heap.insert(3);
/// heap.insert(1);
/// heap.insert(2);
///
/// assert_eq!(heap.peek_min(), Ok(&1));
/// assert_eq!(heap.remove_min(), Ok(1));
/// assert_eq!(heap.len(), 2);
/// assert_eq!(heap.try_insert(None), Err(HeapError::InvalidArgument));
/// ```
pub trait PriorityQueue<T: Ord> {
    /// Creates a new empty queue
    fn new() -> Self;

    /// Returns the number of elements in the queue
    fn len(&self) -> usize;

    /// Returns true if the queue is empty
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Inserts an element, taking ownership of it
    ///
    /// # Time Complexity
    /// O(log n), plus amortized O(1) for storage growth.
    fn insert(&mut self, item: T);

    /// Inserts an element that may be absent
    ///
    /// # Errors
    /// Returns `HeapError::InvalidArgument` for `None`; the queue is left
    /// unchanged.
    fn try_insert(&mut self, item: Option<T>) -> Result<()> {
        let item = item.ok_or(HeapError::InvalidArgument)?;
        self.insert(item);
        Ok(())
    }

    /// Returns the minimum element without removing it
    ///
    /// # Errors
    /// Returns `HeapError::EmptyContainer` if the queue is empty.
    ///
    /// # Time Complexity
    /// O(1)
    fn peek_min(&self) -> Result<&T>;

    /// Removes and returns the minimum element
    ///
    /// # Errors
    /// Returns `HeapError::EmptyContainer` if the queue is empty; the queue is
    /// left unchanged.
    ///
    /// # Time Complexity
    /// O(log n)
    fn remove_min(&mut self) -> Result<T>;
}
