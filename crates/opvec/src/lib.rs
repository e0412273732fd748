//! opvec: a growable, ordered array of opaque handles.
//!
//! This is the top-level facade crate that re-exports the public Rust API
//! from the opvec sub-crates. The C API lives in `opvec-ffi`.
//!
//! # Quick start
//!
//! ```rust
//! use opvec::prelude::*;
//!
//! let names = [String::from("a"), String::from("b"), String::from("c")];
//!
//! let mut array = DynamicArray::new();
//! for name in &names {
//!     array.add(Handle::from(name)).unwrap();
//! }
//! array.delete(1).unwrap();
//!
//! assert_eq!(array.get(0), Ok(Handle::from(&names[0])));
//! assert_eq!(array.get(1), Ok(Handle::from(&names[2])));
//! assert_eq!(array.count(), 2);
//! assert_eq!(array.capacity(), 8);
//!
//! assert!(matches!(array.get(2), Err(ArrayError::OutOfBounds { .. })));
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `opvec-core` | `Handle`, `ArrayError` |
//! | [`array`] | `opvec-array` | `DynamicArray`, `SharedArray`, growth constants |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types (`opvec-core`).
///
/// The opaque [`types::Handle`] element and the [`types::ArrayError`]
/// returned by every fallible operation.
pub use opvec_core as types;

/// The array itself (`opvec-array`).
///
/// [`array::DynamicArray`] for single-owner use, [`array::SharedArray`]
/// when the array must be shared across threads.
pub use opvec_array as array;

/// Common imports for typical opvec usage.
///
/// ```rust
/// use opvec::prelude::*;
/// ```
pub mod prelude {
    pub use opvec_array::{DynamicArray, SharedArray, GROWTH_FACTOR, INITIAL_CAPACITY};
    pub use opvec_core::{ArrayError, Handle};
}
