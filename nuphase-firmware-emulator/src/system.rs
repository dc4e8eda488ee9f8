use nuphase_core::{
    firmware::{registers::*, Device, Topology},
    link::Frame,
};

use crate::BoardEmulator;

/// Every board of a [`Topology`] wired together.
///
/// The sync line driven by the master through [`SYNC`] reaches every other board.
pub struct SystemEmulator {
    boards: Vec<BoardEmulator>,
}

impl SystemEmulator {
    /// Creates one board per device of `topology`.
    #[must_use]
    pub fn new(topology: &Topology) -> Self {
        Self {
            boards: topology
                .devices()
                .map(|dev| BoardEmulator::new(dev, topology.variant))
                .collect(),
        }
    }

    /// The board of `device`, if attached.
    #[must_use]
    pub fn board(&self, device: Device) -> Option<&BoardEmulator> {
        self.boards.get(device.idx())
    }

    /// Mutable access to the board of `device`, if attached.
    pub fn board_mut(&mut self, device: Device) -> Option<&mut BoardEmulator> {
        self.boards.get_mut(device.idx())
    }

    /// Writes `frame` to the board on `bus`. Returns `false` if there is no such board.
    pub fn send(&mut self, bus: usize, frame: &Frame) -> bool {
        let Some(board) = self.boards.get_mut(bus) else {
            return false;
        };
        board.send(frame);
        if bus == Device::Master.idx() && frame.address() == SYNC {
            let asserted = frame.payload()[2] & SYNC_ASSERT != 0;
            self.boards
                .iter_mut()
                .skip(1)
                .for_each(|b| b.set_sync(asserted));
        }
        true
    }

    /// Reads one frame from the board on `bus`.
    pub fn receive(&mut self, bus: usize) -> Option<Frame> {
        self.boards.get_mut(bus).map(BoardEmulator::receive)
    }
}

impl std::ops::Deref for SystemEmulator {
    type Target = [BoardEmulator];

    fn deref(&self) -> &Self::Target {
        &self.boards
    }
}

impl std::ops::DerefMut for SystemEmulator {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.boards
    }
}
