use std::fmt;

use crate::error::{ArrayError, Result};

/// Preallocated, fixed-length run of slots.
///
/// Every slot is either empty or holds one value. The length never changes
/// after construction; growing means allocating a new store.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FixedStore<T> {
    slots: Box<[Option<T>]>,
}

impl<T> FixedStore<T> {
    pub fn new(len: usize) -> Self {
        Self {
            slots: std::iter::repeat_with(|| None).take(len).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn get(&self, index: usize) -> Result<Option<&T>> {
        self.slots
            .get(index)
            .map(Option::as_ref)
            .ok_or(self.out_of_bounds(index))
    }

    pub fn get_mut(&mut self, index: usize) -> Result<Option<&mut T>> {
        let len = self.len();
        self.slots
            .get_mut(index)
            .map(Option::as_mut)
            .ok_or(ArrayError::OutOfBounds { index, len })
    }

    /// Stores `value` (or clears the slot with `None`), returning what was there.
    pub fn set(&mut self, index: usize, value: Option<T>) -> Result<Option<T>> {
        let len = self.len();
        let slot = self
            .slots
            .get_mut(index)
            .ok_or(ArrayError::OutOfBounds { index, len })?;
        Ok(std::mem::replace(slot, value))
    }

    /// Empties the slot and hands back its value.
    pub fn take(&mut self, index: usize) -> Result<Option<T>> {
        self.set(index, None)
    }

    pub(crate) fn slots(&self) -> &[Option<T>] {
        &self.slots
    }

    pub(crate) fn slots_mut(&mut self) -> &mut [Option<T>] {
        &mut self.slots
    }

    fn out_of_bounds(&self, index: usize) -> ArrayError {
        ArrayError::OutOfBounds {
            index,
            len: self.len(),
        }
    }
}

impl<T: fmt::Display> fmt::Display for FixedStore<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "STAT_ARR Size: {} [", self.len())?;
        for (i, slot) in self.slots.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            match slot {
                Some(value) => write!(f, "{value}")?,
                None => f.write_str("None")?,
            }
        }
        f.write_str("]")
    }
}
