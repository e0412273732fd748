//! Growth policy constants.
//!
//! Capacity is fixed at build time: the first growth allocates
//! [`INITIAL_CAPACITY`] slots and every later growth multiplies by
//! [`GROWTH_FACTOR`] until the request fits.

/// Slots allocated by the first growth of an empty array.
pub const INITIAL_CAPACITY: usize = 8;

/// Multiplier applied on every subsequent growth.
pub const GROWTH_FACTOR: usize = 2;

/// Compute the capacity an array must grow to so that it holds `required`
/// slots.
///
/// Starts from `current` (or [`INITIAL_CAPACITY`] when `current` is 0) and
/// multiplies by [`GROWTH_FACTOR`] until the result is at least `required`.
/// The result is therefore always `INITIAL_CAPACITY * GROWTH_FACTOR^k` for
/// an array that has only ever grown through this function.
///
/// Returns `None` if the multiplication overflows `usize`. Callers check
/// `required <= current` themselves; in that case this returns `current`
/// unchanged (or [`INITIAL_CAPACITY`] when both are 0).
pub fn grown_capacity(current: usize, required: usize) -> Option<usize> {
    let mut capacity = if current == 0 {
        INITIAL_CAPACITY
    } else {
        current
    };
    while capacity < required {
        capacity = capacity.checked_mul(GROWTH_FACTOR)?;
    }
    Some(capacity)
}
