//! The opaque [`Handle`] element type.

use std::fmt;

/// A reference-sized opaque value stored by the array.
///
/// A handle designates caller-owned data: a raw pointer, an index into
/// some other table, or any other token that fits in a `usize`. The array
/// stores and returns handles unchanged and never dereferences, copies,
/// or frees what they designate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct Handle(usize);

impl Handle {
    /// The all-zero handle. It is an ordinary value to the array.
    pub const NULL: Handle = Handle(0);

    /// Wrap a raw token.
    pub const fn from_raw(raw: usize) -> Self {
        Self(raw)
    }

    /// The raw token this handle wraps.
    pub const fn into_raw(self) -> usize {
        self.0
    }

    /// Wrap the address of caller-owned data.
    ///
    /// The pointer's provenance is exposed so [`Handle::as_ptr`] can hand
    /// back a usable pointer. Nothing here keeps the pointee alive.
    pub fn from_ptr<T>(ptr: *const T) -> Self {
        Self(ptr.expose_provenance())
    }

    /// Reinterpret the handle as a pointer to `T`.
    ///
    /// Producing the pointer is safe; dereferencing it is only valid if the
    /// handle was built from a live `T` by [`Handle::from_ptr`].
    pub fn as_ptr<T>(self) -> *mut T {
        std::ptr::with_exposed_provenance_mut(self.0)
    }

    /// Whether this is [`Handle::NULL`].
    pub const fn is_null(self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x}", self.0)
    }
}

impl From<usize> for Handle {
    fn from(v: usize) -> Self {
        Self(v)
    }
}

impl<T> From<&T> for Handle {
    fn from(r: &T) -> Self {
        Self::from_ptr(r as *const T)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pointer_handle_points_back_at_data() {
        let value = 17u32;
        let h = Handle::from(&value);
        assert_eq!(h.as_ptr::<u32>().cast_const(), &value as *const u32);
        assert!(!h.is_null());
    }

    #[test]
    fn raw_token_is_preserved() {
        let h = Handle::from_raw(0xdead_beef);
        assert_eq!(h.into_raw(), 0xdead_beef);
        assert_eq!(Handle::from(5usize), Handle::from_raw(5));
    }

    #[test]
    fn null_handle() {
        assert!(Handle::NULL.is_null());
        assert!(Handle::as_ptr::<u8>(Handle::NULL).is_null());
    }

    #[test]
    fn display_is_hex() {
        assert_eq!(Handle::from_raw(255).to_string(), "0xff");
    }
}
