use std::fmt;
use std::ops::{Index, IndexMut};

use crate::CAPACITY_POLICY;
use crate::error::{ArrayError, Result};
use crate::fixed_store::FixedStore;

/// Growable array over a [`FixedStore`].
///
/// - Slots `[0, len)` always hold values; slots `[len, capacity)` are empty.
/// - Appending to a full array doubles the capacity.
/// - Removing from a sparse array (see [`CapacityPolicy`](crate::CapacityPolicy))
///   reallocates it smaller before the element is taken out.
#[derive(Clone, Debug)]
pub struct DynamicArray<T> {
    size: usize,
    data: FixedStore<T>,
}

impl<T> DynamicArray<T> {
    pub fn new() -> Self {
        Self {
            size: 0,
            data: FixedStore::new(CAPACITY_POLICY.initial_capacity),
        }
    }

    pub fn length(&self) -> usize {
        self.size
    }

    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            slots: self.data.slots()[..self.size].iter(),
        }
    }

    pub fn get_at_index(&self, index: usize) -> Result<&T> {
        self.check_index(index)?;
        self.data.get(index)?.ok_or(self.out_of_bounds(index))
    }

    pub fn get_mut_at_index(&mut self, index: usize) -> Result<&mut T> {
        self.check_index(index)?;
        let err = self.out_of_bounds(index);
        self.data.get_mut(index)?.ok_or(err)
    }

    pub fn set_at_index(&mut self, index: usize, value: T) -> Result<()> {
        self.check_index(index)?;
        self.data.set(index, Some(value))?;
        Ok(())
    }

    /// Swaps two live elements.
    ///
    /// # Panics
    ///
    /// Panics if `a` or `b` is not below [`length`](Self::length).
    pub fn swap(&mut self, a: usize, b: usize) {
        assert!(
            a < self.size && b < self.size,
            "swap indices ({a}, {b}) out of bounds for length {}",
            self.size
        );
        self.data.slots_mut().swap(a, b);
    }

    /// Moves the live elements into a new store of `new_capacity` slots.
    ///
    /// Silently does nothing when `new_capacity` is zero or smaller than the
    /// current length.
    pub fn resize(&mut self, new_capacity: usize) {
        if new_capacity < self.size || new_capacity < 1 {
            return;
        }
        self.relocate(new_capacity);
    }

    pub fn append(&mut self, value: T) {
        if self.size == self.capacity() {
            self.resize(self.capacity() * CAPACITY_POLICY.growth_factor);
        }
        self.data.slots_mut()[self.size] = Some(value);
        self.size += 1;
    }

    /// Inserts `value` at `index`, shifting `[index, len)` one slot right.
    /// `index == len` appends.
    pub fn insert_at_index(&mut self, index: usize, value: T) -> Result<()> {
        if index > self.size {
            return Err(self.out_of_bounds(index));
        }
        if self.size == self.capacity() {
            self.resize(self.capacity() * CAPACITY_POLICY.growth_factor);
        }
        // The empty slot at `size` rotates down to `index`.
        self.data.slots_mut()[index..=self.size].rotate_right(1);
        self.data.slots_mut()[index] = Some(value);
        self.size += 1;
        Ok(())
    }

    /// Removes and returns the element at `index`, shifting the tail left.
    ///
    /// The shrink check runs against the length before removal.
    pub fn remove_at_index(&mut self, index: usize) -> Result<T> {
        self.check_index(index)?;

        let policy = CAPACITY_POLICY;
        let capacity = self.capacity();
        if capacity > policy.min_shrink_capacity && capacity > policy.shrink_divisor * self.size {
            let target = (policy.growth_factor * self.size).max(policy.min_shrink_capacity);
            self.relocate(target);
        }

        let err = self.out_of_bounds(index);
        let value = self.data.take(index)?.ok_or(err)?;
        self.data.slots_mut()[index..self.size].rotate_left(1);
        self.size -= 1;
        Ok(value)
    }

    /// Copies `length` elements starting at `start_index` into a new array.
    ///
    /// `start_index` must name a live element, so slicing an empty array
    /// always fails, even with `length == 0`.
    pub fn slice(&self, start_index: usize, length: usize) -> Result<Self>
    where
        T: Clone,
    {
        if start_index >= self.size {
            return Err(self.out_of_bounds(start_index));
        }
        match start_index.checked_add(length) {
            Some(end) if end <= self.size => {}
            _ => return Err(self.out_of_bounds(start_index)),
        }
        Ok(self.iter().skip(start_index).take(length).cloned().collect())
    }

    /// Appends a copy of every element of `other`, in order.
    pub fn merge(&mut self, other: &Self)
    where
        T: Clone,
    {
        for value in other {
            self.append(value.clone());
        }
    }

    pub fn map<U, F>(&self, map_func: F) -> DynamicArray<U>
    where
        F: FnMut(&T) -> U,
    {
        self.iter().map(map_func).collect()
    }

    pub fn filter<F>(&self, mut filter_func: F) -> Self
    where
        T: Clone,
        F: FnMut(&T) -> bool,
    {
        self.iter().filter(|value| filter_func(*value)).cloned().collect()
    }

    /// Left fold in index order.
    ///
    /// Returns `initializer` unchanged when the array is empty. Without an
    /// initializer the first element seeds the accumulator.
    pub fn reduce<F>(&self, mut reduce_func: F, initializer: Option<T>) -> Option<T>
    where
        T: Clone,
        F: FnMut(T, &T) -> T,
    {
        let mut items = self.iter();
        let Some(first) = items.next() else {
            return initializer;
        };
        let seed = match initializer {
            Some(init) => reduce_func(init, first),
            None => first.clone(),
        };
        Some(items.fold(seed, reduce_func))
    }

    fn relocate(&mut self, new_capacity: usize) {
        let mut store = FixedStore::new(new_capacity);
        let live = &mut self.data.slots_mut()[..self.size];
        for (dst, src) in store.slots_mut().iter_mut().zip(live) {
            *dst = src.take();
        }
        self.data = store;
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index < self.size {
            Ok(())
        } else {
            Err(self.out_of_bounds(index))
        }
    }

    fn out_of_bounds(&self, index: usize) -> ArrayError {
        ArrayError::OutOfBounds {
            index,
            len: self.size,
        }
    }
}

impl<T> Default for DynamicArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for DynamicArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut array = DynamicArray::new();
        for value in iter {
            array.append(value);
        }
        array
    }
}

impl<T> From<Vec<T>> for DynamicArray<T> {
    fn from(values: Vec<T>) -> Self {
        values.into_iter().collect()
    }
}

impl<T: PartialEq> PartialEq for DynamicArray<T> {
    fn eq(&self, other: &Self) -> bool {
        self.size == other.size && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for DynamicArray<T> {}

/// # Panics
///
/// Panics if `index` is not below [`length`](DynamicArray::length).
impl<T> Index<usize> for DynamicArray<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        match self.get_at_index(index) {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<T> IndexMut<usize> for DynamicArray<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        match self.get_mut_at_index(index) {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<'a, T> IntoIterator for &'a DynamicArray<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<T: fmt::Display> fmt::Display for DynamicArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DYN_ARR Size/Cap: {}/{} [", self.size, self.capacity())?;
        for (i, value) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{value}")?;
        }
        f.write_str("]")
    }
}

pub struct Iter<'a, T> {
    slots: std::slice::Iter<'a, Option<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        self.slots.next().and_then(Option::as_ref)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.slots.size_hint()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
