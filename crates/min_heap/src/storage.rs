use dynamic_array::DynamicArray;

/// Flat, index-addressed storage that can be viewed as a complete binary tree.
///
/// Implementors only need element access and swaps; every index handed to
/// them is already below [`len`](HeapStorage::len).
pub trait HeapStorage {
    type Item: Ord;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn item(&self, index: usize) -> &Self::Item;
    fn swap_items(&mut self, a: usize, b: usize);
}

impl<T: Ord> HeapStorage for [T] {
    type Item = T;

    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    fn item(&self, index: usize) -> &T {
        &self[index]
    }

    fn swap_items(&mut self, a: usize, b: usize) {
        self.swap(a, b);
    }
}

impl<T: Ord> HeapStorage for DynamicArray<T> {
    type Item = T;

    fn len(&self) -> usize {
        self.length()
    }

    fn item(&self, index: usize) -> &T {
        &self[index]
    }

    fn swap_items(&mut self, a: usize, b: usize) {
        self.swap(a, b);
    }
}

#[inline]
pub(crate) fn parent(index: usize) -> usize {
    (index - 1) / 2
}

#[inline]
pub(crate) fn left_child(index: usize) -> usize {
    2 * index + 1
}
