use std::collections::TryReserveError;

/// The error type returned when a particle system can't be built.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Backing storage for the requested particle count could not be allocated.
    #[error("unable to allocate storage for {count} particles")]
    Allocation {
        /// Requested particle count.
        count: usize,
        /// Underlying allocator failure.
        #[source]
        source: TryReserveError,
    },
}

impl Error {
    pub(crate) fn allocation(count: usize) -> impl FnOnce(TryReserveError) -> Error {
        move |source| Error::Allocation { count, source }
    }
}
