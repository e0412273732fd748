//! Internally synchronized wrapper around [`DynamicArray`].
//!
//! A plain [`DynamicArray`] must be serialized by its owner. [`SharedArray`]
//! puts the array behind a `Mutex` so it can be shared across threads
//! (typically inside an `Arc`) and mutated through `&self`.

use std::sync::{Mutex, MutexGuard, PoisonError};

use opvec_core::ArrayError;

use crate::array::DynamicArray;

/// A [`DynamicArray`] guarded by a mutex.
///
/// Every call takes the lock for its own duration only, so a sequence of
/// calls is not atomic: an index read by one call may be stale by the next.
/// Use [`SharedArray::with`] to run several operations under one lock.
pub struct SharedArray<T> {
    inner: Mutex<DynamicArray<T>>,
}

impl<T: Copy> SharedArray<T> {
    /// Create an empty shared array.
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(DynamicArray::new()),
        }
    }

    /// Wrap an existing array.
    pub fn from_array(array: DynamicArray<T>) -> Self {
        Self {
            inner: Mutex::new(array),
        }
    }

    /// Take the lock.
    ///
    /// A panic in another thread cannot leave the array half-updated (each
    /// operation validates before it writes), so a poisoned lock is
    /// recovered instead of reported.
    fn lock(&self) -> MutexGuard<'_, DynamicArray<T>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Run `f` with exclusive access to the array.
    pub fn with<R>(&self, f: impl FnOnce(&mut DynamicArray<T>) -> R) -> R {
        f(&mut self.lock())
    }

    /// See [`DynamicArray::count`].
    pub fn count(&self) -> usize {
        self.lock().count()
    }

    /// See [`DynamicArray::capacity`].
    pub fn capacity(&self) -> usize {
        self.lock().capacity()
    }

    /// See [`DynamicArray::is_empty`].
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// See [`DynamicArray::reserve`].
    pub fn reserve(&self, min_capacity: usize) -> Result<(), ArrayError> {
        self.lock().reserve(min_capacity)
    }

    /// See [`DynamicArray::add`].
    pub fn add(&self, element: T) -> Result<(), ArrayError> {
        self.lock().add(element)
    }

    /// See [`DynamicArray::get`].
    pub fn get(&self, index: usize) -> Result<T, ArrayError> {
        self.lock().get(index)
    }

    /// See [`DynamicArray::set`].
    pub fn set(&self, index: usize, element: T) -> Result<(), ArrayError> {
        self.lock().set(index, element)
    }

    /// See [`DynamicArray::delete`].
    pub fn delete(&self, index: usize) -> Result<T, ArrayError> {
        self.lock().delete(index)
    }

    /// See [`DynamicArray::swap`].
    pub fn swap(&self, index_a: usize, index_b: usize) -> Result<(), ArrayError> {
        self.lock().swap(index_a, index_b)
    }

    /// See [`DynamicArray::apply`].
    ///
    /// The lock is held for the whole traversal. The visitor must not call
    /// back into this `SharedArray`; doing so deadlocks.
    pub fn apply<F>(&self, visitor: F)
    where
        F: FnMut(T),
    {
        self.lock().apply(visitor);
    }

    /// See [`DynamicArray::teardown`].
    pub fn teardown(&self) {
        self.lock().teardown();
    }

    /// Copy the current elements out.
    pub fn to_vec(&self) -> Vec<T> {
        self.lock().to_vec()
    }

    /// Unwrap into the plain array.
    pub fn into_inner(self) -> DynamicArray<T> {
        self.inner.into_inner().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<T: Copy> Default for SharedArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Copy> From<DynamicArray<T>> for SharedArray<T> {
    fn from(array: DynamicArray<T>) -> Self {
        Self::from_array(array)
    }
}
