//! Quaternary Heap Priority Queue for Rust
//!
//! This crate provides a generic min-priority queue backed by a 4-ary array
//! heap, meant as a building block for schedulers, graph search and event
//! simulation.
//!
//! # Features
//!
//! - **QuaternaryHeap**: O(log n) insert and remove-min; O(1) peek-min;
//!   storage doubles on demand starting from 5 slots
//! - **PriorityQueue**: the trait the heap is used through, with
//!   error-returning accessors instead of panics
//!
//! # Example
//!
//! ```rust
//! use quaternary_heap::{HeapError, PriorityQueue, QuaternaryHeap};
//!
//! let mut heap = QuaternaryHeap::new();
//! heap.insert(5);
//! assert_eq!(heap.peek_min(), Ok(&5));
//! assert_eq!(heap.size(), 1);
//! assert_eq!(heap.remove_min(), Ok(5));
//! assert_eq!(heap.remove_min(), Err(HeapError::EmptyContainer));
//! ```

pub mod quaternary;
pub mod traits;

// Re-export the main types for convenience
pub use quaternary::QuaternaryHeap;
pub use traits::{HeapError, PriorityQueue, Result};
