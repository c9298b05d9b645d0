use crate::sift::{heapify, percolate_down};
use crate::storage::HeapStorage;

/// Sorts `store` ascending in place.
///
/// Each round swaps the current minimum to the end of the shrinking heap
/// window, which leaves the storage descending; a final pass of swaps reverses
/// it. No auxiliary buffer is used.
pub fn heapsort<S>(store: &mut S)
where
    S: HeapStorage + ?Sized,
{
    let len = store.len();
    if len < 2 {
        return;
    }

    heapify(store);

    for end in (1..len).rev() {
        store.swap_items(0, end);
        percolate_down(store, 0, Some(end));
    }

    for i in 0..len / 2 {
        store.swap_items(i, len - 1 - i);
    }
}
