//! Benchmark workloads for the opvec handle array.
//!
//! - [`SIZES`]: element counts used across all benches
//! - [`build_array`]: an array filled by repeated `add`, as a caller would
//! - [`presized_array`]: the same contents after a single up-front `reserve`

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use opvec_array::DynamicArray;
use opvec_core::Handle;

/// Element counts: one growth step, a few hundred, and tens of thousands.
pub const SIZES: [usize; 3] = [16, 512, 65_536];

/// Fill an array with `n` token handles through `add` only.
///
/// # Panics
///
/// Panics if growth fails.
pub fn build_array(n: usize) -> DynamicArray<Handle> {
    let mut array = DynamicArray::new();
    for i in 0..n {
        array.add(Handle::from_raw(i + 1)).expect("bench growth failed");
    }
    array
}

/// Fill an array with `n` token handles after reserving room for all of
/// them, so no `add` reallocates.
///
/// # Panics
///
/// Panics if the reservation fails.
pub fn presized_array(n: usize) -> DynamicArray<Handle> {
    let mut array = DynamicArray::with_capacity(n).expect("bench reserve failed");
    for i in 0..n {
        array.add(Handle::from_raw(i + 1)).expect("bench add failed");
    }
    array
}
