//! Test fixtures for opvec development.
//!
//! Provides deterministic handle sequences, pre-filled arrays, and a
//! [`Recorder`] visitor for checking traversal order.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::{filled_array, handles, Payloads, Recorder};
