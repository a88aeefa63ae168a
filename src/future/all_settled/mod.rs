use core::future::Future;

#[cfg(feature = "alloc")]
pub(crate) mod map;
pub(crate) mod tuple;

/// Wait for every keyed operation to settle, capturing each success or
/// failure as an [`Outcome`][crate::Outcome].
pub trait AllSettled {
    /// The resulting output type.
    type Output;

    /// Which kind of future are we turning this into?
    type Future: Future<Output = Self::Output>;

    /// Start every operation, and wait for all of them to settle.
    ///
    /// All operations are invoked before this method returns. The returned
    /// future polls every one of them concurrently and never short-circuits:
    /// it resolves once the last operation has completed, with each key
    /// mapped to [`Outcome::Fulfilled`][crate::Outcome::Fulfilled] or
    /// [`Outcome::Rejected`][crate::Outcome::Rejected]. Failures are kept as
    /// data, so the future itself never fails.
    fn all_settled(self) -> Self::Future;
}
