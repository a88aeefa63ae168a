/// Enumerate the current poll state of a slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PollState {
    /// Polling the associated future.
    Pending,
    /// The future has completed and its output is parked in the slot.
    Ready,
    /// The output has been read out of the slot.
    Consumed,
}
