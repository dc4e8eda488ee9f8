mod atten;
mod control;
mod identify;
mod scaler;
mod threshold;
mod waveform;

use nuphase_core::{
    firmware::{registers::*, Device, Topology},
    link::{Frame, Link},
};

use super::SyncState;
use crate::error::NuphaseDriverError;

/// A struct to run board operations over a [`Link`].
///
/// Every operation validates its arguments before the first transaction and
/// aborts on the first failing transaction.
pub struct Sender<'a, L: Link> {
    pub(crate) link: &'a mut L,
    pub(crate) topology: Topology,
    pub(crate) sync_state: &'a mut SyncState,
}

impl<'a, L: Link> Sender<'a, L> {
    #[doc(hidden)]
    pub fn new(link: &'a mut L, topology: Topology, sync_state: &'a mut SyncState) -> Self {
        Self {
            link,
            topology,
            sync_state,
        }
    }

    /// The attached boards.
    #[must_use]
    pub const fn topology(&self) -> &Topology {
        &self.topology
    }

    /// State of the last synchronized write.
    #[must_use]
    pub const fn sync_state(&self) -> SyncState {
        *self.sync_state
    }

    /// Writes raw bytes to the board on `bus`.
    ///
    /// Fails with [`NuphaseDriverError::InvalidFrame`] unless `data` is exactly 4 bytes,
    /// and with [`NuphaseDriverError::InvalidDevice`] unless `bus` names an attached board.
    pub fn write(&mut self, bus: usize, data: &[u8]) -> Result<(), NuphaseDriverError> {
        let frame =
            Frame::from_slice(data).ok_or(NuphaseDriverError::InvalidFrame(data.len()))?;
        let device = self.device(bus)?;
        self.send(device, frame)
    }

    /// Reads one frame from the board on `bus`.
    pub fn read(&mut self, bus: usize) -> Result<Frame, NuphaseDriverError> {
        let device = self.device(bus)?;
        self.receive(device)
    }

    /// Reads the register at `address`.
    pub fn read_register(
        &mut self,
        device: Device,
        address: usize,
    ) -> Result<Frame, NuphaseDriverError> {
        self.check_device(device)?;
        if !self.topology.variant.is_valid_register(address) {
            return Err(NuphaseDriverError::RegisterOutOfRange(
                address,
                self.topology.variant.max_register_address,
            ));
        }
        self.send(device, Frame::command(SET_READ_REG, address as u8))?;
        self.receive(device)
    }

    /// Writes `frame` to every attached board, master last.
    ///
    /// With a slave attached the writes are bracketed by asserting and releasing
    /// the master sync line so that both boards act on the same clock edge.
    pub fn synchronized(&mut self, frame: Frame) -> Result<(), NuphaseDriverError> {
        if !self.topology.dual_board {
            return self.send(Device::Master, frame);
        }
        tracing::debug!("Synchronized write: {:?}", frame);
        self.send(Device::Master, Frame::command(SYNC, SYNC_ASSERT))?;
        self.transition(SyncState::SyncAsserted);
        self.send(Device::Slave, frame)?;
        self.transition(SyncState::SlaveWritten);
        self.send(Device::Master, frame)?;
        self.transition(SyncState::MasterWritten);
        self.send(Device::Master, Frame::command(SYNC, SYNC_RELEASE))?;
        self.transition(SyncState::SyncReleased);
        self.transition(SyncState::Idle);
        Ok(())
    }

    /// Releases the master sync line and resets the sync state.
    pub fn release_sync(&mut self) -> Result<(), NuphaseDriverError> {
        self.send(Device::Master, Frame::command(SYNC, SYNC_RELEASE))?;
        self.transition(SyncState::Idle);
        Ok(())
    }
}

impl<L: Link> Sender<'_, L> {
    fn transition(&mut self, state: SyncState) {
        tracing::trace!("Sync state: {} -> {}", self.sync_state, state);
        *self.sync_state = state;
    }

    fn device(&self, bus: usize) -> Result<Device, NuphaseDriverError> {
        Device::from_idx(bus)
            .filter(|&dev| self.topology.contains(dev))
            .ok_or(NuphaseDriverError::InvalidDevice(bus))
    }

    pub(crate) fn check_device(&self, device: Device) -> Result<(), NuphaseDriverError> {
        if self.topology.contains(device) {
            Ok(())
        } else {
            Err(NuphaseDriverError::InvalidDevice(device.idx()))
        }
    }

    pub(crate) fn send(&mut self, device: Device, frame: Frame) -> Result<(), NuphaseDriverError> {
        tracing::trace!("{}: send {:?}", device, frame);
        self.link.ensure_is_open()?;
        self.link.send(device.idx(), &frame)?;
        Ok(())
    }

    pub(crate) fn receive(&mut self, device: Device) -> Result<Frame, NuphaseDriverError> {
        self.link.ensure_is_open()?;
        let frame = self.link.receive(device.idx())?;
        tracing::trace!("{}: receive {:?}", device, frame);
        Ok(frame)
    }

    pub(crate) fn read_registers(
        &mut self,
        device: Device,
        addresses: impl IntoIterator<Item = u8>,
    ) -> Result<Vec<Frame>, NuphaseDriverError> {
        addresses
            .into_iter()
            .map(|addr| self.read_register(device, addr as usize))
            .collect()
    }
}
