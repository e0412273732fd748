//! Array lifecycle and element FFI: init, reserve, add, get, set, delete,
//! swap, apply, free.
//!
//! The C caller owns the [`OpvecArray`] value itself (usually on its stack).
//! Its `inner` pointer is null in the empty state and otherwise points at a
//! boxed `DynamicArray<*mut c_void>` created by this module. The box is only
//! created once a reservation has succeeded, so a failed first growth
//! leaves the value empty.

use std::ffi::c_void;

use opvec_array::DynamicArray;
use opvec_core::ArrayError;

use crate::status::OpvecStatus;

type RawArray = DynamicArray<*mut c_void>;

/// Visitor callback for [`opvec_apply`]: called once per element.
pub type OpvecVisitor = unsafe extern "C" fn(item: *mut c_void);

/// A handle array owned by the C caller.
///
/// Initialize with [`opvec_init`] before any other call and release with
/// [`opvec_free`]. The field is private to the library; C code must not
/// read or write it.
#[repr(C)]
#[derive(Debug)]
pub struct OpvecArray {
    /// Library-owned state. Null when the array is empty and unallocated.
    pub inner: *mut c_void,
}

impl OpvecArray {
    /// The empty, unallocated state.
    pub const EMPTY: OpvecArray = OpvecArray {
        inner: std::ptr::null_mut(),
    };

    /// Borrow the boxed array, if one has been allocated.
    #[allow(unsafe_code)]
    fn array(&self) -> Option<&RawArray> {
        // SAFETY: a non-null `inner` was produced by `Box::into_raw` in
        // `with_array_mut` and is only released by `opvec_free`.
        unsafe { self.inner.cast::<RawArray>().as_ref() }
    }

    /// Run `f` against the boxed array, or against a fresh empty array when
    /// none is allocated yet.
    ///
    /// The fresh array is boxed and kept only if `f` succeeded and left it
    /// with a non-zero capacity.
    #[allow(unsafe_code)]
    fn with_array_mut<R>(
        &mut self,
        f: impl FnOnce(&mut RawArray) -> Result<R, ArrayError>,
    ) -> Result<R, ArrayError> {
        // SAFETY: as in `array`; `&mut self` guarantees exclusive access.
        if let Some(array) = unsafe { self.inner.cast::<RawArray>().as_mut() } {
            return f(array);
        }

        let mut fresh = RawArray::new();
        let out = f(&mut fresh)?;
        if fresh.capacity() > 0 {
            self.inner = Box::into_raw(Box::new(fresh)).cast();
        }
        Ok(out)
    }

    /// Release the boxed array, if any, and return to the empty state.
    #[allow(unsafe_code)]
    fn release(&mut self) {
        if !self.inner.is_null() {
            // SAFETY: `inner` came from `Box::into_raw` and is reset to null
            // immediately, so it is freed exactly once.
            drop(unsafe { Box::from_raw(self.inner.cast::<RawArray>()) });
        }
        *self = Self::EMPTY;
    }

    fn count(&self) -> usize {
        self.array().map_or(0, RawArray::count)
    }

    fn capacity(&self) -> usize {
        self.array().map_or(0, RawArray::capacity)
    }
}

fn status<T>(result: &Result<T, ArrayError>) -> i32 {
    OpvecStatus::from(result) as i32
}

/// Reset `vec` to the empty state.
///
/// Prior contents are forgotten, not released: call [`opvec_free`] first
/// on an array that may hold an allocation. `vec` may point at
/// uninitialized memory.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn opvec_init(vec: *mut OpvecArray) -> i32 {
    ffi_guard!({
        if vec.is_null() {
            return OpvecStatus::NullArgument as i32;
        }
        // SAFETY: vec is non-null and writable per caller contract; `write`
        // does not read the possibly uninitialized old value.
        unsafe { vec.write(OpvecArray::EMPTY) };
        OpvecStatus::Ok as i32
    })
}

/// Ensure room for at least `min_capacity` elements.
///
/// Returns `OPVEC_STATUS_OUT_OF_MEMORY` and leaves the array unchanged if
/// growth fails.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn opvec_reserve(vec: *mut OpvecArray, min_capacity: usize) -> i32 {
    ffi_guard!({
        // SAFETY: vec is null or points at an initialized OpvecArray.
        let Some(vec) = (unsafe { vec.as_mut() }) else {
            return OpvecStatus::NullArgument as i32;
        };
        status(&vec.with_array_mut(|a| a.reserve(min_capacity)))
    })
}

/// Append `item` after the last element.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn opvec_add(vec: *mut OpvecArray, item: *mut c_void) -> i32 {
    ffi_guard!({
        // SAFETY: vec is null or points at an initialized OpvecArray.
        let Some(vec) = (unsafe { vec.as_mut() }) else {
            return OpvecStatus::NullArgument as i32;
        };
        status(&vec.with_array_mut(|a| a.add(item)))
    })
}

/// Write the element at `index` to `item_out`.
///
/// `item_out` is left untouched on failure.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn opvec_get(
    vec: *const OpvecArray,
    index: usize,
    item_out: *mut *mut c_void,
) -> i32 {
    ffi_guard!({
        // SAFETY: vec is null or points at an initialized OpvecArray.
        let Some(vec) = (unsafe { vec.as_ref() }) else {
            return OpvecStatus::NullArgument as i32;
        };
        if item_out.is_null() {
            return OpvecStatus::NullArgument as i32;
        }
        let result = match vec.array() {
            Some(array) => array.get(index),
            None => Err(ArrayError::OutOfBounds { index, count: 0 }),
        };
        if let Ok(item) = result {
            // SAFETY: item_out is non-null and writable per caller contract.
            unsafe { item_out.write(item) };
        }
        status(&result)
    })
}

/// Overwrite the element at `index` with `item`. Cannot append.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn opvec_set(vec: *mut OpvecArray, index: usize, item: *mut c_void) -> i32 {
    ffi_guard!({
        // SAFETY: vec is null or points at an initialized OpvecArray.
        let Some(vec) = (unsafe { vec.as_mut() }) else {
            return OpvecStatus::NullArgument as i32;
        };
        status(&vec.with_array_mut(|a| a.set(index, item)))
    })
}

/// Remove the element at `index`, shifting later elements left.
///
/// If `item_out` is non-null the removed element is written to it.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn opvec_delete(
    vec: *mut OpvecArray,
    index: usize,
    item_out: *mut *mut c_void,
) -> i32 {
    ffi_guard!({
        // SAFETY: vec is null or points at an initialized OpvecArray.
        let Some(vec) = (unsafe { vec.as_mut() }) else {
            return OpvecStatus::NullArgument as i32;
        };
        let result = vec.with_array_mut(|a| a.delete(index));
        if let Ok(item) = result {
            if !item_out.is_null() {
                // SAFETY: item_out is non-null and writable per caller contract.
                unsafe { item_out.write(item) };
            }
        }
        status(&result)
    })
}

/// Exchange the elements at `index_a` and `index_b`.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn opvec_swap(vec: *mut OpvecArray, index_a: usize, index_b: usize) -> i32 {
    ffi_guard!({
        // SAFETY: vec is null or points at an initialized OpvecArray.
        let Some(vec) = (unsafe { vec.as_mut() }) else {
            return OpvecStatus::NullArgument as i32;
        };
        status(&vec.with_array_mut(|a| a.swap(index_a, index_b)))
    })
}

/// Call `func` on every element in ascending index order.
///
/// `func` must not modify `vec`; doing so is undefined behavior.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn opvec_apply(vec: *const OpvecArray, func: Option<OpvecVisitor>) -> i32 {
    ffi_guard!({
        // SAFETY: vec is null or points at an initialized OpvecArray.
        let Some(vec) = (unsafe { vec.as_ref() }) else {
            return OpvecStatus::NullArgument as i32;
        };
        let Some(func) = func else {
            return OpvecStatus::NullArgument as i32;
        };
        if let Some(array) = vec.array() {
            // SAFETY: func is a valid callback per caller contract and does
            // not touch `vec` while the traversal runs.
            array.apply(|item| unsafe { func(item) });
        }
        OpvecStatus::Ok as i32
    })
}

/// Release the array's buffer and reset it to the empty state.
///
/// Stored elements are not freed. Safe to call on an empty array.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn opvec_free(vec: *mut OpvecArray) -> i32 {
    ffi_guard!({
        // SAFETY: vec is null or points at an initialized OpvecArray.
        let Some(vec) = (unsafe { vec.as_mut() }) else {
            return OpvecStatus::NullArgument as i32;
        };
        vec.release();
        OpvecStatus::Ok as i32
    })
}

/// Number of elements in the array; 0 if `vec` is null.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn opvec_count(vec: *const OpvecArray) -> usize {
    // SAFETY: vec is null or points at an initialized OpvecArray.
    unsafe { vec.as_ref() }.map_or(0, OpvecArray::count)
}

/// Number of allocated slots; 0 if `vec` is null.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn opvec_capacity(vec: *const OpvecArray) -> usize {
    // SAFETY: vec is null or points at an initialized OpvecArray.
    unsafe { vec.as_ref() }.map_or(0, OpvecArray::capacity)
}

#[cfg(test)]
#[allow(unsafe_code)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::ptr::null_mut;

    fn item(n: usize) -> *mut c_void {
        std::ptr::with_exposed_provenance_mut(n)
    }

    fn new_array() -> OpvecArray {
        let mut vec = OpvecArray::EMPTY;
        assert_eq!(opvec_init(&mut vec), 0);
        vec
    }

    thread_local! {
        static VISITED: RefCell<Vec<usize>> = const { RefCell::new(Vec::new()) };
    }

    unsafe extern "C" fn record(item: *mut c_void) {
        VISITED.with(|v| v.borrow_mut().push(item.expose_provenance()));
    }

    #[test]
    fn init_writes_empty_state() {
        let mut vec = OpvecArray {
            inner: item(0xbad),
        };
        assert_eq!(opvec_init(&mut vec), OpvecStatus::Ok as i32);
        assert!(vec.inner.is_null());
        assert_eq!(opvec_count(&vec), 0);
        assert_eq!(opvec_capacity(&vec), 0);
    }

    #[test]
    fn null_array_is_null_argument_everywhere() {
        let null = OpvecStatus::NullArgument as i32;
        let mut out = null_mut();
        assert_eq!(opvec_init(null_mut()), null);
        assert_eq!(opvec_reserve(null_mut(), 8), null);
        assert_eq!(opvec_add(null_mut(), item(1)), null);
        assert_eq!(opvec_get(std::ptr::null(), 0, &mut out), null);
        assert_eq!(opvec_set(null_mut(), 0, item(1)), null);
        assert_eq!(opvec_delete(null_mut(), 0, &mut out), null);
        assert_eq!(opvec_swap(null_mut(), 0, 0), null);
        assert_eq!(opvec_apply(std::ptr::null(), Some(record)), null);
        assert_eq!(opvec_free(null_mut()), null);
        assert_eq!(opvec_count(std::ptr::null()), 0);
        assert_eq!(opvec_capacity(std::ptr::null()), 0);
    }

    #[test]
    fn null_output_and_visitor_are_null_argument() {
        let mut vec = new_array();
        assert_eq!(opvec_add(&mut vec, item(1)), 0);
        assert_eq!(
            opvec_get(&vec, 0, null_mut()),
            OpvecStatus::NullArgument as i32
        );
        assert_eq!(opvec_apply(&vec, None), OpvecStatus::NullArgument as i32);
        assert_eq!(opvec_free(&mut vec), 0);
    }

    #[test]
    fn add_get_round_trip() {
        let mut vec = new_array();
        for n in 1..=9 {
            assert_eq!(opvec_add(&mut vec, item(n)), 0);
        }
        assert_eq!(opvec_count(&vec), 9);
        assert_eq!(opvec_capacity(&vec), 16);

        let mut out = null_mut();
        assert_eq!(opvec_get(&vec, 8, &mut out), 0);
        assert_eq!(out, item(9));
        assert_eq!(opvec_free(&mut vec), 0);
    }

    #[test]
    fn get_on_empty_is_out_of_bounds_and_output_untouched() {
        let vec = new_array();
        let mut out = item(0x55);
        assert_eq!(
            opvec_get(&vec, 0, &mut out),
            OpvecStatus::OutOfBounds as i32
        );
        assert_eq!(out, item(0x55));
    }

    #[test]
    fn set_delete_swap_on_empty_do_not_allocate() {
        let mut vec = new_array();
        let oob = OpvecStatus::OutOfBounds as i32;
        assert_eq!(opvec_set(&mut vec, 0, item(1)), oob);
        assert_eq!(opvec_delete(&mut vec, 0, null_mut()), oob);
        assert_eq!(opvec_swap(&mut vec, 0, 0), oob);
        assert!(vec.inner.is_null());
    }

    #[test]
    fn delete_writes_removed_item_when_requested() {
        let mut vec = new_array();
        for n in [10, 20, 30] {
            opvec_add(&mut vec, item(n));
        }
        let mut out = null_mut();
        assert_eq!(opvec_delete(&mut vec, 1, &mut out), 0);
        assert_eq!(out, item(20));
        assert_eq!(opvec_delete(&mut vec, 0, null_mut()), 0);
        assert_eq!(opvec_count(&vec), 1);
        assert_eq!(opvec_get(&vec, 0, &mut out), 0);
        assert_eq!(out, item(30));
        assert_eq!(opvec_free(&mut vec), 0);
    }

    #[test]
    fn swap_and_set() {
        let mut vec = new_array();
        for n in [1, 2, 3] {
            opvec_add(&mut vec, item(n));
        }
        assert_eq!(opvec_swap(&mut vec, 0, 2), 0);
        assert_eq!(opvec_set(&mut vec, 1, item(7)), 0);
        assert_eq!(opvec_swap(&mut vec, 0, 3), OpvecStatus::OutOfBounds as i32);

        VISITED.with(|v| v.borrow_mut().clear());
        assert_eq!(opvec_apply(&vec, Some(record)), 0);
        VISITED.with(|v| assert_eq!(*v.borrow(), vec![3, 7, 1]));
        assert_eq!(opvec_free(&mut vec), 0);
    }

    #[test]
    fn apply_on_empty_calls_nothing() {
        let vec = new_array();
        VISITED.with(|v| v.borrow_mut().clear());
        assert_eq!(opvec_apply(&vec, Some(record)), 0);
        VISITED.with(|v| assert!(v.borrow().is_empty()));
    }

    #[test]
    fn failed_first_reserve_stays_unallocated() {
        let mut vec = new_array();
        assert_eq!(
            opvec_reserve(&mut vec, usize::MAX),
            OpvecStatus::OutOfMemory as i32
        );
        assert!(vec.inner.is_null());
        assert_eq!(opvec_capacity(&vec), 0);
    }

    #[test]
    fn failed_growth_keeps_contents() {
        let mut vec = new_array();
        opvec_add(&mut vec, item(1));
        assert_eq!(
            opvec_reserve(&mut vec, usize::MAX / 4 + 1),
            OpvecStatus::OutOfMemory as i32
        );
        assert_eq!(opvec_capacity(&vec), 8);
        let mut out = null_mut();
        assert_eq!(opvec_get(&vec, 0, &mut out), 0);
        assert_eq!(out, item(1));
        assert_eq!(opvec_free(&mut vec), 0);
    }

    #[test]
    fn reserve_zero_does_not_allocate() {
        let mut vec = new_array();
        assert_eq!(opvec_reserve(&mut vec, 0), 0);
        assert!(vec.inner.is_null());
    }

    #[test]
    fn free_is_idempotent_and_array_reusable() {
        let mut vec = new_array();
        opvec_add(&mut vec, item(1));
        assert_eq!(opvec_free(&mut vec), 0);
        assert_eq!(opvec_free(&mut vec), 0);
        assert!(vec.inner.is_null());

        assert_eq!(opvec_add(&mut vec, item(2)), 0);
        assert_eq!(opvec_count(&vec), 1);
        assert_eq!(opvec_free(&mut vec), 0);
    }
}
