use nuphase_core::{
    firmware::registers::{NUM_BUFFERS, RAM_DEPTH},
    link::{Frame, LinkError},
};
use thiserror::Error;

/// A interface for error handling in nuphase-driver.
#[derive(Error, Debug, PartialEq, Clone)]
#[non_exhaustive]
pub enum NuphaseDriverError {
    /// Frame length is not 4 bytes.
    #[error("Frame length ({0}) must be {len}", len = Frame::LEN)]
    InvalidFrame(usize),
    /// Bus index does not name an attached board.
    #[error("Device {0} is not attached")]
    InvalidDevice(usize),

    /// Register address is out of range.
    #[error("Register address ({0}) is out of range ([1, {1}))")]
    RegisterOutOfRange(usize, usize),
    /// Channel is out of range.
    #[error("Channel ({0}) is out of range ([0, {1}))")]
    ChannelOutOfRange(usize, usize),
    /// RAM address range is out of range.
    #[error("RAM address range ({0}..{1}) is out of range ([0, {max}])", max = RAM_DEPTH)]
    RamAddressOutOfRange(usize, usize),
    /// Buffer index is out of range.
    #[error("Buffer index ({0}) is out of range ([0, {max}))", max = NUM_BUFFERS)]
    BufferOutOfRange(usize),
    /// Beam index is out of range.
    #[error("Beam ({0}) is out of range ([0, {1}))")]
    BeamOutOfRange(usize, usize),
    /// Threshold is wider than 20 bits.
    #[error("Threshold ({0:#X}) is out of range ([0, 0xFFFFF])")]
    ThresholdOutOfRange(u32),
    /// Number of attenuator values does not match the attached channels.
    #[error("Number of attenuator values ({0}) must be {1}")]
    AttenuatorCountOutOfRange(usize, usize),
    /// Scaler selector is out of range.
    #[error("Scaler selector ({0}) is out of range ([0, {1}])")]
    ScalerSelectorOutOfRange(u8, u8),

    /// Error in the Link.
    #[error("{0}")]
    Link(#[from] LinkError),
}

impl NuphaseDriverError {
    /// Checks if the error was raised by the transport.
    #[must_use]
    pub const fn is_transport_fault(&self) -> bool {
        matches!(self, Self::Link(_))
    }

    /// Checks if the error is an argument range violation.
    #[must_use]
    pub const fn is_out_of_range(&self) -> bool {
        matches!(
            self,
            Self::RegisterOutOfRange(..)
                | Self::ChannelOutOfRange(..)
                | Self::RamAddressOutOfRange(..)
                | Self::BufferOutOfRange(_)
                | Self::BeamOutOfRange(..)
                | Self::ThresholdOutOfRange(_)
                | Self::AttenuatorCountOutOfRange(..)
                | Self::ScalerSelectorOutOfRange(..)
        )
    }
}
