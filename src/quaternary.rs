//! Quaternary (4-ary) array heap
//!
//! A min-heap laid out in a single contiguous slot array where the node at
//! index `i` has children `4i + 1 ..= 4i + 4` and parent `(i - 1) / 4`.
//!
//! Compared to a binary heap, a branching factor of 4 halves the tree height
//! (`log4 n` levels), so sift-down touches fewer levels at the cost of up to
//! four comparisons per level. Sift-up still does a single comparison per
//! level.
//!
//! # Storage
//!
//! Slots are `Option<T>` in an exactly sized boxed slice. Indices `0..len` are
//! always `Some` and everything past `len` is `None`. When an insertion finds
//! every slot occupied the slice is reallocated at twice its size, starting
//! from [`DEFAULT_CAPACITY`].
//!
//! # Time Complexity
//!
//! | Operation    | Complexity              |
//! |--------------|-------------------------|
//! | `insert`     | O(log n), amortized O(1) growth |
//! | `remove_min` | O(log n)                |
//! | `peek_min`   | O(1)                    |
//! | `len`        | O(1)                    |
//!
//! # Example
//!
//! ```rust
//! use quaternary_heap::{PriorityQueue, QuaternaryHeap};
//!
//! let mut heap = QuaternaryHeap::new();
//! for x in [10, 3, 7, 1, 9, 2] {
//!     heap.insert(x);
//! }
//!
//! assert_eq!(heap.len(), 6);
//! assert_eq!(heap.peek_min(), Ok(&1));
//!
//! let mut drained = Vec::new();
//! while let Ok(x) = heap.remove_min() {
//!     drained.push(x);
//! }
//! assert_eq!(drained, vec![1, 2, 3, 7, 9, 10]);
//! ```

use log::trace;

use crate::traits::{HeapError, PriorityQueue, Result};

/// Number of children per node
pub const ARITY: usize = 4;

/// Slot count of a heap created with [`PriorityQueue::new`]
pub const DEFAULT_CAPACITY: usize = 5;

/// A min-priority queue backed by a 4-ary array heap
#[derive(Debug, Clone)]
pub struct QuaternaryHeap<T> {
    /// Heap-ordered slots; `slots[..len]` are occupied
    slots: Box<[Option<T>]>,
    len: usize,
}

impl<T: Ord> PriorityQueue<T> for QuaternaryHeap<T> {
    fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    fn len(&self) -> usize {
        self.len
    }

    fn insert(&mut self, item: T) {
        if self.len == self.slots.len() {
            self.grow();
        }

        let idx = self.len;
        self.slots[idx] = Some(item);
        self.len += 1;
        self.sift_up(idx);
    }

    fn peek_min(&self) -> Result<&T> {
        if self.len == 0 {
            return Err(HeapError::EmptyContainer);
        }
        Ok(self.slots[0]
            .as_ref()
            .expect("non-empty heap must have a root"))
    }

    fn remove_min(&mut self) -> Result<T> {
        if self.len == 0 {
            return Err(HeapError::EmptyContainer);
        }

        let last = self.len - 1;
        self.slots.swap(0, last);
        let min = self.slots[last]
            .take()
            .expect("occupied slot below len must hold a value");
        self.len = last;

        if self.len > 0 {
            self.sift_down(0);
        }

        Ok(min)
    }
}

impl<T: Ord> QuaternaryHeap<T> {
    /// Creates an empty heap with exactly `capacity` slots
    ///
    /// A capacity of zero is allowed; the first insertion then allocates
    /// [`DEFAULT_CAPACITY`] slots.
    pub fn with_capacity(capacity: usize) -> Self {
        let mut slots = Vec::with_capacity(capacity);
        slots.resize_with(capacity, || None);
        Self {
            slots: slots.into_boxed_slice(),
            len: 0,
        }
    }

    /// Returns the number of elements in the heap
    ///
    /// Same as [`PriorityQueue::len`].
    pub fn size(&self) -> usize {
        self.len
    }

    /// Returns the number of slots currently allocated
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Drops every element, keeping the allocated slots
    pub fn clear(&mut self) {
        for slot in &mut self.slots[..self.len] {
            *slot = None;
        }
        self.len = 0;
    }

    /// Reallocates the slots at double the size, moving occupied slots in order
    fn grow(&mut self) {
        let old_capacity = self.slots.len();
        let new_capacity = (old_capacity * 2).max(DEFAULT_CAPACITY);

        let mut slots = Vec::with_capacity(new_capacity);
        slots.extend(self.slots.iter_mut().map(Option::take));
        slots.resize_with(new_capacity, || None);
        self.slots = slots.into_boxed_slice();

        trace!(
            "grew heap storage from {} to {} slots ({} occupied)",
            old_capacity,
            new_capacity,
            self.len
        );
    }

    /// Move element at index up while its parent is strictly greater
    fn sift_up(&mut self, mut index: usize) {
        // Slots below `len` are all `Some`, so comparing the options compares
        // the elements.
        while index > 0 {
            let parent = (index - 1) / ARITY;
            if self.slots[parent] > self.slots[index] {
                self.slots.swap(index, parent);
                index = parent;
            } else {
                break;
            }
        }
    }

    /// Move element at index down, always swapping with the smallest child
    fn sift_down(&mut self, mut index: usize) {
        loop {
            let first_child = index * ARITY + 1;
            if first_child >= self.len {
                break;
            }
            let end = (first_child + ARITY).min(self.len);

            // Strict comparison: the leftmost of equal children wins, and a
            // child equal to the current element never moves.
            let mut smallest = index;
            for child in first_child..end {
                if self.slots[child] < self.slots[smallest] {
                    smallest = child;
                }
            }

            if smallest == index {
                break;
            }
            self.slots.swap(index, smallest);
            index = smallest;
        }
    }
}

impl<T: Ord> Default for QuaternaryHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> Extend<T> for QuaternaryHeap<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.insert(item);
        }
    }
}

impl<T: Ord> FromIterator<T> for QuaternaryHeap<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut heap = Self::with_capacity(iter.size_hint().0.max(DEFAULT_CAPACITY));
        heap.extend(iter);
        heap
    }
}
