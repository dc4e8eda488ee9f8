use super::{BoardVariant, Device};

/// The boards attached to a link.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Topology {
    /// Revision of the boards.
    pub variant: BoardVariant,
    /// Whether a slave board is paired with the master.
    pub dual_board: bool,
}

impl Topology {
    /// A single master board.
    #[must_use]
    pub const fn single(variant: BoardVariant) -> Self {
        Self {
            variant,
            dual_board: false,
        }
    }

    /// A master board paired with a slave board.
    #[must_use]
    pub const fn dual(variant: BoardVariant) -> Self {
        Self {
            variant,
            dual_board: true,
        }
    }

    /// Number of attached boards.
    #[must_use]
    pub const fn num_boards(&self) -> usize {
        if self.dual_board {
            2
        } else {
            1
        }
    }

    /// Checks if `device` is attached.
    #[must_use]
    pub const fn contains(&self, device: Device) -> bool {
        match device {
            Device::Master => true,
            Device::Slave => self.dual_board,
        }
    }

    /// The attached devices, master first.
    pub fn devices(&self) -> impl DoubleEndedIterator<Item = Device> {
        Device::ALL.into_iter().take(self.num_boards())
    }
}
