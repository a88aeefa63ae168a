//! Per-slot wakers for the runtime-map futures.
//!
//! Every slot is polled with its own waker, which marks the slot as ready
//! and then wakes the parent task. The parent only re-polls the slots which
//! were marked, so one busy operation doesn't cause its idle siblings to be
//! polled over and over again.
//!
//! Without `std` there is no lock to share the readiness markers behind, and
//! every pending slot is polled with the parent's waker instead.

#[cfg(not(feature = "std"))]
mod no_std;
#[cfg(feature = "std")]
mod readiness_vec;
#[cfg(feature = "std")]
mod waker_vec;

#[cfg(not(feature = "std"))]
pub(crate) use no_std::WakerVec;
#[cfg(feature = "std")]
pub(crate) use waker_vec::WakerVec;
