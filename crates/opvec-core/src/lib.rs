//! Core types for the opvec handle array.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the opaque [`Handle`] stored by the array and the [`ArrayError`]
//! returned by every fallible operation.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod handle;

pub use error::ArrayError;
pub use handle::Handle;
