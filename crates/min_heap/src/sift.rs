use crate::storage::{HeapStorage, left_child};

/// Sifts the element at `index` down until neither child is smaller.
///
/// Only slots below `max_index` (clamped to the storage length) take part, so
/// a sorted suffix can be kept out of the heap. When both children are smaller
/// the element trades places with the lesser one, the left child on ties.
pub fn percolate_down<S>(store: &mut S, index: usize, max_index: Option<usize>)
where
    S: HeapStorage + ?Sized,
{
    let len = store.len();
    let end = max_index.map_or(len, |max| max.min(len));

    let mut parent = index;
    loop {
        let left = left_child(parent);
        if left >= end {
            break;
        }
        let right = left + 1;

        let mut child = left;
        if right < end && store.item(right) < store.item(left) {
            child = right;
        }

        if store.item(parent) <= store.item(child) {
            break;
        }
        store.swap_items(parent, child);
        parent = child;
    }
}

/// Establishes heap order bottom-up, from the last internal node to the root.
pub fn heapify<S>(store: &mut S)
where
    S: HeapStorage + ?Sized,
{
    for index in (0..store.len() / 2).rev() {
        percolate_down(store, index, None);
    }
}
