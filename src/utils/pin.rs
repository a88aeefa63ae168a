use core::pin::Pin;

pub(crate) fn iter_pin_mut<T>(slice: Pin<&mut [T]>) -> impl Iterator<Item = Pin<&mut T>> {
    // SAFETY: `std` _could_ make this unsound if it were to decide Pin's
    // invariants aren't required to transmit through slices. Otherwise this has
    // the same safety as a normal field pin projection.
    unsafe { slice.get_unchecked_mut() }
        .iter_mut()
        .map(|t| unsafe { Pin::new_unchecked(t) })
}

/// Returns a pinned mutable reference to the element at `index`, or `None`
/// if out of bounds.
pub(crate) fn get_pin_mut<T>(slice: Pin<&mut [T]>, index: usize) -> Option<Pin<&mut T>> {
    // SAFETY: the element is never moved out of the slice, this has the same
    // safety as `iter_pin_mut`.
    unsafe {
        slice
            .get_unchecked_mut()
            .get_mut(index)
            .map(|t| Pin::new_unchecked(t))
    }
}
