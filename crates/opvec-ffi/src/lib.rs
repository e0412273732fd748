//! C FFI bindings for the opvec handle array.
//!
//! Exposes the array to C as a caller-owned [`OpvecArray`] value and one
//! function per operation. Every function returns an [`OpvecStatus`] code
//! (as `i32`) except the infallible `opvec_count` and `opvec_capacity`.
//! This is the only crate in the workspace that contains `unsafe` code.
//!
//! ```c
//! OpvecArray arr;
//! opvec_init(&arr);
//! opvec_add(&arr, &some_object);
//! void *out;
//! opvec_get(&arr, 0, &out);
//! opvec_free(&arr);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]

/// Run an FFI body, converting a panic into [`OpvecStatus::Panicked`].
///
/// `return` inside the body returns from the guarded closure, not from
/// the enclosing function.
macro_rules! ffi_guard {
    ($body:block) => {
        match std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| -> i32 { $body })) {
            Ok(status) => status,
            Err(_) => {
                log::error!("panic caught at FFI boundary");
                $crate::status::OpvecStatus::Panicked as i32
            }
        }
    };
}

pub mod array;
pub mod status;

pub use array::OpvecArray;
pub use status::OpvecStatus;
