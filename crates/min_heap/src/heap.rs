use std::fmt;

use dynamic_array::DynamicArray;

use crate::error::{HeapError, Result};
use crate::sift::{heapify, percolate_down};
use crate::storage::parent;

/// Binary min-heap backed by a [`DynamicArray`].
///
/// The slot at `i` is never smaller than the slot at `(i - 1) / 2`.
#[derive(Clone, Debug)]
pub struct MinHeap<T> {
    heap: DynamicArray<T>,
}

impl<T> MinHeap<T> {
    pub fn new() -> Self {
        Self {
            heap: DynamicArray::new(),
        }
    }

    pub fn size(&self) -> usize {
        self.heap.length()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Drops every element and starts over with a fresh backing array.
    pub fn clear(&mut self) {
        self.heap = DynamicArray::new();
    }

    /// Backing array in heap layout.
    pub fn as_array(&self) -> &DynamicArray<T> {
        &self.heap
    }
}

impl<T: Ord> MinHeap<T> {
    pub fn add(&mut self, value: T) {
        self.heap.append(value);
        self.percolate_up(self.heap.length() - 1);
    }

    pub fn get_min(&self) -> Result<&T> {
        if self.is_empty() {
            return Err(HeapError::Empty);
        }
        Ok(self.heap.get_at_index(0)?)
    }

    pub fn remove_min(&mut self) -> Result<T> {
        if self.is_empty() {
            return Err(HeapError::Empty);
        }
        let last = self.heap.length() - 1;
        self.heap.swap(0, last);
        let min = self.heap.remove_at_index(last)?;
        if !self.heap.is_empty() {
            percolate_down(&mut self.heap, 0, None);
        }
        Ok(min)
    }

    /// Replaces the contents with a copy of `values`, then restores heap order
    /// bottom-up. Later changes to `values` do not reach the heap.
    pub fn build_heap(&mut self, values: &DynamicArray<T>)
    where
        T: Clone,
    {
        self.heap = values.iter().cloned().collect();
        heapify(&mut self.heap);
    }

    fn percolate_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = parent(index);
            if self.heap[index] >= self.heap[parent] {
                break;
            }
            self.heap.swap(index, parent);
            index = parent;
        }
    }
}

impl<T> Default for MinHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> FromIterator<T> for MinHeap<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut heap = MinHeap::new();
        for value in iter {
            heap.add(value);
        }
        heap
    }
}

impl<T: fmt::Display> fmt::Display for MinHeap<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("HEAP [")?;
        for (i, value) in self.heap.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{value}")?;
        }
        f.write_str("]")
    }
}
