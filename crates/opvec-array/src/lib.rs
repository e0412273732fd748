//! Growable ordered array of opaque handles.
//!
//! # Architecture
//!
//! ```text
//! DynamicArray<T: Copy>
//! ├── Vec<T> buffer        (len = count, allocation ≥ capacity)
//! └── capacity             (0, or 8 · 2^k, see `config`)
//!
//! SharedArray<T>           (Mutex<DynamicArray<T>> for cross-thread use)
//! ```
//!
//! # Ownership
//!
//! The array owns its buffer, never the data its elements designate.
//! Elements are `Copy` handles returned by value; the caller keeps
//! ownership of whatever they point at.
//!
//! # Errors
//!
//! Every fallible operation returns [`ArrayError`] and leaves the array in
//! its prior valid state on failure. Buffer growth uses `try_reserve`, so
//! allocation failure is reported rather than aborting the process.
//!
//! # Logging
//!
//! Operations emit `trace` records through the [`log`] facade, growth emits
//! `debug`, and allocation failure emits `warn`. No logger is installed.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod array;
pub mod config;
pub mod shared;

pub use array::DynamicArray;
pub use config::{GROWTH_FACTOR, INITIAL_CAPACITY};
pub use opvec_core::{ArrayError, Handle};
pub use shared::SharedArray;
