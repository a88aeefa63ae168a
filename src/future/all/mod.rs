use core::future::Future;

#[cfg(feature = "alloc")]
pub(crate) mod map;
pub(crate) mod tuple;

/// Wait for every keyed operation to complete successfully, or abort early on
/// error.
///
/// Each operation is started up front and the outputs are handed back under
/// the key of the operation that produced them. When an operation fails, the
/// resulting future resolves to that error and the outputs of all other
/// operations are discarded.
pub trait All {
    /// The resulting output type.
    type Output;

    /// The error type returned by the operations.
    type Error;

    /// Which kind of future are we turning this into?
    type Future: Future<Output = Result<Self::Output, Self::Error>>;

    /// Start every operation, and wait for all of them to complete
    /// successfully or for the first one to fail.
    ///
    /// All operations are invoked before this method returns. The returned
    /// future polls every one of them concurrently, and resolves to the keyed
    /// outputs once all have succeeded.
    ///
    /// # Errors
    ///
    /// Resolves to the error of the first failure observed. When multiple
    /// operations fail on the same wake-up, the one earliest in entry order
    /// wins.
    fn all(self) -> Self::Future;
}
