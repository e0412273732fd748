//! C-compatible status codes.
//!
//! [`OpvecStatus`] is a `repr(i32)` enum covering every outcome of the C
//! API. Conversions from [`ArrayError`] are provided.

use opvec_core::ArrayError;

/// C-compatible status code returned by all fallible FFI functions.
///
/// `Ok` = 0, all errors are negative. Values are ABI-stable.
#[repr(i32)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OpvecStatus {
    /// Success.
    Ok = 0,
    /// A required pointer (array, output slot, or visitor) was null.
    NullArgument = -1,
    /// Index is not below the current element count.
    OutOfBounds = -2,
    /// The backing buffer could not be grown.
    OutOfMemory = -3,
    /// A Rust panic was caught at the FFI boundary.
    Panicked = -128,
}

impl From<&ArrayError> for OpvecStatus {
    fn from(e: &ArrayError) -> Self {
        match e {
            ArrayError::OutOfBounds { .. } => OpvecStatus::OutOfBounds,
            ArrayError::OutOfMemory { .. } => OpvecStatus::OutOfMemory,
        }
    }
}

impl<T> From<&Result<T, ArrayError>> for OpvecStatus {
    fn from(r: &Result<T, ArrayError>) -> Self {
        match r {
            Ok(_) => OpvecStatus::Ok,
            Err(e) => OpvecStatus::from(e),
        }
    }
}
