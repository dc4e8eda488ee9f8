use nuphase_driver::error::NuphaseDriverError;
use thiserror::Error;

/// An error produced by [`Controller`](crate::Controller) helpers that touch the filesystem.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum NuphaseError {
    #[allow(missing_docs)]
    #[error("{0}")]
    Driver(#[from] NuphaseDriverError),
    #[allow(missing_docs)]
    #[error("{0}")]
    Io(#[from] std::io::Error),
    #[cfg(feature = "event-file")]
    #[allow(missing_docs)]
    #[error("{0}")]
    Csv(#[from] csv::Error),
}
