//! Utilities to implement the different futures of this crate.

mod maybe_done;
#[cfg(feature = "alloc")]
mod pin;
mod poll_state;
#[cfg(feature = "alloc")]
mod wakers;

pub(crate) use maybe_done::MaybeDone;
#[cfg(feature = "alloc")]
pub(crate) use pin::{get_pin_mut, iter_pin_mut};
pub(crate) use poll_state::PollState;
#[cfg(feature = "alloc")]
pub(crate) use wakers::WakerVec;

/// Emit a trace-level event when the `tracing` feature is enabled.
macro_rules! trace {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        tracing::trace!($($arg)*);
    };
}

pub(crate) use trace;
