use crate::firmware::Topology;

use super::{error::LinkError, Frame};

/// A trait that provides the interface with the boards.
///
/// Every board sits on its own bus; `bus` is `0` for the master and `1` for the
/// slave. A link exchanges exactly one [`Frame`] per call and never retries.
pub trait Link: Send {
    /// Opens the link.
    fn open(&mut self, topology: &Topology) -> Result<(), LinkError>;

    /// Closes the link.
    fn close(&mut self) -> Result<(), LinkError>;

    /// Writes a frame to the board on `bus`.
    fn send(&mut self, bus: usize, tx: &Frame) -> Result<(), LinkError>;

    /// Clocks one frame out of the board on `bus`.
    fn receive(&mut self, bus: usize) -> Result<Frame, LinkError>;

    /// Checks if the link is open.
    #[must_use]
    fn is_open(&self) -> bool;

    /// Returns [`LinkError::closed`] if the link is not open.
    fn ensure_is_open(&self) -> Result<(), LinkError> {
        if self.is_open() {
            Ok(())
        } else {
            Err(LinkError::closed())
        }
    }
}

impl Link for Box<dyn Link> {
    fn open(&mut self, topology: &Topology) -> Result<(), LinkError> {
        self.as_mut().open(topology)
    }

    fn close(&mut self) -> Result<(), LinkError> {
        self.as_mut().close()
    }

    fn send(&mut self, bus: usize, tx: &Frame) -> Result<(), LinkError> {
        self.as_mut().send(bus, tx)
    }

    fn receive(&mut self, bus: usize) -> Result<Frame, LinkError> {
        self.as_mut().receive(bus)
    }

    fn is_open(&self) -> bool {
        self.as_ref().is_open()
    }
}
