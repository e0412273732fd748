//! The growable handle array.
//!
//! A [`DynamicArray`] is one contiguous buffer plus a logical capacity.
//! Growth is geometric (see [`crate::config`]), deletion compacts by
//! shifting later elements left, and the buffer is never shrunk until
//! [`DynamicArray::teardown`].

use std::fmt;

use log::{debug, trace, warn};
use opvec_core::ArrayError;

use crate::config;

/// An ordered, growable array of opaque elements.
///
/// Elements are `Copy` values (typically [`opvec_core::Handle`]) that the
/// array stores and returns unchanged. The array owns its buffer, never the
/// data its elements designate: dropping or tearing down the array releases
/// slots, not payloads.
///
/// Elements are always returned by value. Nothing hands out an address
/// into the buffer that could outlive a call that grows it.
pub struct DynamicArray<T> {
    /// Live elements. `buffer.len()` is the element count; the allocation
    /// always has room for at least `capacity` elements.
    buffer: Vec<T>,
    /// Logical capacity: 0, or `INITIAL_CAPACITY * GROWTH_FACTOR^k`.
    capacity: usize,
}

impl<T: Copy> DynamicArray<T> {
    /// Create an empty array. Nothing is allocated until the first growth.
    pub const fn new() -> Self {
        Self {
            buffer: Vec::new(),
            capacity: 0,
        }
    }

    /// Create an empty array with room for at least `min_capacity` elements.
    pub fn with_capacity(min_capacity: usize) -> Result<Self, ArrayError> {
        let mut array = Self::new();
        array.reserve(min_capacity)?;
        Ok(array)
    }

    /// Number of elements currently stored.
    pub fn count(&self) -> usize {
        self.buffer.len()
    }

    /// Number of slots allocated.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Whether the array holds no elements.
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Ensure room for at least `min_capacity` elements.
    ///
    /// A no-op when the capacity is already sufficient. Otherwise the
    /// capacity doubles (starting from [`config::INITIAL_CAPACITY`]) until it
    /// reaches `min_capacity`. Count and elements are never changed.
    ///
    /// On failure the array is left exactly as it was: the new capacity is
    /// only recorded once the allocation has succeeded.
    pub fn reserve(&mut self, min_capacity: usize) -> Result<(), ArrayError> {
        trace!(
            "reserve: count = {}, capacity = {}, min_capacity = {min_capacity}",
            self.count(),
            self.capacity
        );

        if min_capacity <= self.capacity {
            return Ok(());
        }

        let Some(new_capacity) = config::grown_capacity(self.capacity, min_capacity) else {
            warn!("reserve: capacity overflow growing to {min_capacity} slots");
            return Err(ArrayError::OutOfMemory {
                requested: usize::MAX,
            });
        };

        let additional = new_capacity - self.buffer.len();
        if let Err(e) = self.buffer.try_reserve_exact(additional) {
            warn!("reserve: allocating {new_capacity} slots failed: {e}");
            return Err(ArrayError::from_reserve(new_capacity, e));
        }

        debug!(
            "reserve: grew from {} to {new_capacity} slots",
            self.capacity
        );
        self.capacity = new_capacity;
        Ok(())
    }

    /// Append `element` after the last element, growing if needed.
    pub fn add(&mut self, element: T) -> Result<(), ArrayError> {
        trace!("add: count = {}", self.count());

        let required = self
            .count()
            .checked_add(1)
            .ok_or(ArrayError::OutOfMemory {
                requested: usize::MAX,
            })?;
        self.reserve(required)?;

        // `reserve` guarantees room, so this never reallocates.
        self.buffer.push(element);
        Ok(())
    }

    /// The element at `index`.
    pub fn get(&self, index: usize) -> Result<T, ArrayError> {
        trace!("get: index = {index}, count = {}", self.count());

        self.buffer
            .get(index)
            .copied()
            .ok_or_else(|| self.out_of_bounds(index))
    }

    /// Overwrite the element at `index`. Cannot append.
    pub fn set(&mut self, index: usize, element: T) -> Result<(), ArrayError> {
        trace!("set: index = {index}, count = {}", self.count());

        let count = self.count();
        match self.buffer.get_mut(index) {
            Some(slot) => {
                *slot = element;
                Ok(())
            }
            None => Err(ArrayError::OutOfBounds { index, count }),
        }
    }

    /// Remove the element at `index` and return it.
    ///
    /// Later elements shift left by one, keeping their order. Capacity is
    /// unchanged. Callers that do not want the element can ignore it.
    pub fn delete(&mut self, index: usize) -> Result<T, ArrayError> {
        trace!("delete: index = {index}, count = {}", self.count());

        let removed = self.get(index)?;
        self.shift_left(index);
        Ok(removed)
    }

    /// Exchange the elements at `index_a` and `index_b`.
    ///
    /// Both indices are read before anything is written, so an invalid
    /// index leaves the array untouched. Swapping an index with itself is
    /// a no-op.
    pub fn swap(&mut self, index_a: usize, index_b: usize) -> Result<(), ArrayError> {
        trace!(
            "swap: index_a = {index_a}, index_b = {index_b}, count = {}",
            self.count()
        );

        let a = self.get(index_a)?;
        let b = self.get(index_b)?;
        self.set(index_a, b)?;
        self.set(index_b, a)
    }

    /// Call `visitor` on every element in ascending index order.
    ///
    /// The array is borrowed for the whole pass, so the visitor cannot
    /// mutate it.
    pub fn apply<F>(&self, mut visitor: F)
    where
        F: FnMut(T),
    {
        trace!("apply: count = {}", self.count());

        for &element in &self.buffer {
            visitor(element);
        }
    }

    /// Release the buffer and return to the empty state.
    ///
    /// The array can be used again afterwards. Calling this on an empty
    /// array is a no-op.
    pub fn teardown(&mut self) {
        trace!(
            "teardown: count = {}, capacity = {}",
            self.count(),
            self.capacity
        );

        self.buffer = Vec::new();
        self.capacity = 0;
    }

    /// Iterate over the elements by value.
    pub fn iter(&self) -> std::iter::Copied<std::slice::Iter<'_, T>> {
        self.buffer.iter().copied()
    }

    /// Copy the elements out into a `Vec`.
    pub fn to_vec(&self) -> Vec<T> {
        self.buffer.clone()
    }

    /// Close the gap at `index` and drop the last slot from the count.
    ///
    /// `index` must be below the count.
    fn shift_left(&mut self, index: usize) {
        let last = self.buffer.len() - 1;
        if index < last {
            self.buffer.copy_within(index + 1.., index);
        }
        self.buffer.truncate(last);
    }

    fn out_of_bounds(&self, index: usize) -> ArrayError {
        ArrayError::OutOfBounds {
            index,
            count: self.count(),
        }
    }
}

impl<T: Copy> Default for DynamicArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Copy + fmt::Debug> fmt::Debug for DynamicArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DynamicArray")
            .field("count", &self.count())
            .field("capacity", &self.capacity)
            .field("elements", &self.buffer)
            .finish()
    }
}

impl<'a, T: Copy> IntoIterator for &'a DynamicArray<T> {
    type Item = T;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
