use std::path::PathBuf;

use nuphase_core::link::LinkError;
use thiserror::Error;

/// An error produced by [`Spidev`](crate::Spidev).
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum SpidevError {
    /// The device file could not be opened.
    #[error("Failed to open {path}: {1}", path = .0.display())]
    Open(PathBuf, std::io::Error),
    /// The device rejected the SPI mode.
    #[error("Failed to set SPI mode {1} on {path}: {2}", path = .0.display())]
    Mode(PathBuf, u8, std::io::Error),
    /// The bus enable GPIO could not be driven.
    #[error("Failed to enable bus drivers with GPIO {0}: {1}")]
    Gpio(u32, std::io::Error),
    /// The bus is not open.
    #[error("No bus {0}")]
    NoBus(usize),
    /// A transfer failed.
    #[error("{0}")]
    Io(#[from] std::io::Error),
}

// GRCOV_EXCL_START
impl From<SpidevError> for LinkError {
    fn from(val: SpidevError) -> LinkError {
        LinkError::new(val.to_string())
    }
}
// GRCOV_EXCL_STOP
