//! Reusable array fixtures.
//!
//! - [`handles`]: `n` distinct, non-null handles in ascending order.
//! - [`filled_array`]: a [`DynamicArray`] built by adding [`handles`].
//! - [`Payloads`]: caller-owned data whose addresses serve as handles.
//! - [`Recorder`]: a visitor that records what it was called with.

use opvec_array::DynamicArray;
use opvec_core::Handle;

/// Token offset so no fixture handle is [`Handle::NULL`].
const TOKEN_BASE: usize = 0x1000;

/// `n` distinct raw-token handles, ascending.
pub fn handles(n: usize) -> Vec<Handle> {
    (0..n).map(|i| Handle::from_raw(TOKEN_BASE + i)).collect()
}

/// An array holding [`handles(n)`](handles), added in order.
///
/// # Panics
///
/// Panics if growth fails, which only happens for absurd `n`.
pub fn filled_array(n: usize) -> DynamicArray<Handle> {
    let mut array = DynamicArray::new();
    for handle in handles(n) {
        array.add(handle).expect("fixture growth failed");
    }
    array
}

/// Caller-owned payloads whose addresses are stored as pointer handles.
///
/// Lets tests check that the array hands back exactly the address it was
/// given and never touches what it designates.
pub struct Payloads {
    items: Vec<String>,
}

impl Payloads {
    /// `n` payloads named `item-0`, `item-1`, ...
    pub fn new(n: usize) -> Self {
        Self {
            items: (0..n).map(|i| format!("item-{i}")).collect(),
        }
    }

    /// Pointer handles to each payload, in order.
    pub fn handles(&self) -> Vec<Handle> {
        self.items.iter().map(Handle::from).collect()
    }

    /// Resolve a handle produced by [`Payloads::handles`] back to its payload.
    pub fn resolve(&self, handle: Handle) -> Option<&str> {
        self.items
            .iter()
            .find(|item| Handle::from(*item) == handle)
            .map(String::as_str)
    }

    /// The payloads themselves.
    pub fn items(&self) -> &[String] {
        &self.items
    }
}

/// A visitor that records every element it is called with.
pub struct Recorder<T> {
    seen: Vec<T>,
}

impl<T> Recorder<T> {
    pub fn new() -> Self {
        Self { seen: Vec::new() }
    }

    /// The visitor closure to pass to `apply`.
    pub fn visitor(&mut self) -> impl FnMut(T) + '_ {
        move |element| self.seen.push(element)
    }

    /// Elements in the order they were visited.
    pub fn seen(&self) -> &[T] {
        &self.seen
    }

    /// Number of visitor calls.
    pub fn calls(&self) -> usize {
        self.seen.len()
    }
}

impl<T> Default for Recorder<T> {
    fn default() -> Self {
        Self::new()
    }
}
