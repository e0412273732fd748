//! Error types for array operations.
//!
//! Each variant maps to one status code at the C boundary (see
//! `opvec-ffi`). A null array or visitor cannot be expressed through the
//! Rust API, so the `NullArgument` code has no variant here.

use std::collections::TryReserveError;
use std::error::Error;
use std::fmt;

/// Errors returned by `DynamicArray` operations.
///
/// Every failing operation leaves the array exactly as it was before the
/// call, so callers may retry or tear down after any error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArrayError {
    /// The index is not below the current element count
    /// (`OPVEC_STATUS_OUT_OF_BOUNDS`).
    OutOfBounds {
        /// The rejected index.
        index: usize,
        /// Element count at the time of the call.
        count: usize,
    },
    /// The backing buffer could not be grown (`OPVEC_STATUS_OUT_OF_MEMORY`).
    ///
    /// Also reported when the grown capacity is not representable, so a
    /// request that could never succeed does not panic.
    OutOfMemory {
        /// Capacity, in slots, that growth was attempting to reach.
        /// `usize::MAX` when the doubling itself overflowed.
        requested: usize,
    },
}

impl ArrayError {
    /// Whether the failure is an environment condition that may succeed
    /// on retry after other memory is released.
    ///
    /// Out-of-bounds is a caller contract violation and never succeeds
    /// unchanged.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::OutOfMemory { .. })
    }

    /// Map a failed `try_reserve` into an out-of-memory error for the
    /// capacity that was being reserved.
    pub fn from_reserve(requested: usize, _source: TryReserveError) -> Self {
        Self::OutOfMemory { requested }
    }
}

impl fmt::Display for ArrayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds { index, count } => {
                write!(f, "index {index} out of bounds for array of {count} elements")
            }
            Self::OutOfMemory { requested } if *requested == usize::MAX => {
                write!(f, "out of memory: capacity overflow")
            }
            Self::OutOfMemory { requested } => {
                write!(f, "out of memory: cannot grow to {requested} slots")
            }
        }
    }
}

impl Error for ArrayError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_bounds_display_names_index_and_count() {
        let e = ArrayError::OutOfBounds { index: 3, count: 2 };
        assert_eq!(e.to_string(), "index 3 out of bounds for array of 2 elements");
    }

    #[test]
    fn out_of_memory_display() {
        let e = ArrayError::OutOfMemory { requested: 64 };
        assert_eq!(e.to_string(), "out of memory: cannot grow to 64 slots");
        let e = ArrayError::OutOfMemory {
            requested: usize::MAX,
        };
        assert_eq!(e.to_string(), "out of memory: capacity overflow");
    }

    #[test]
    fn only_out_of_memory_is_retryable() {
        assert!(ArrayError::OutOfMemory { requested: 8 }.is_retryable());
        assert!(!ArrayError::OutOfBounds { index: 0, count: 0 }.is_retryable());
    }

    #[test]
    fn from_reserve_keeps_requested_capacity() {
        let source = Vec::<u64>::new().try_reserve(usize::MAX).unwrap_err();
        assert_eq!(
            ArrayError::from_reserve(16, source),
            ArrayError::OutOfMemory { requested: 16 }
        );
    }
}
