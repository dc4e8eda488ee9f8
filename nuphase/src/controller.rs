use std::ops::Range;

use derive_more::Deref;
use getset::{CopyGetters, Getters, MutGetters};
use nuphase_core::{
    firmware::{BoardVariant, Topology},
    link::Link,
};
use nuphase_driver::{
    error::NuphaseDriverError,
    firmware::{version::FirmwareIdentity, DataManagerStatus, SystemEvent},
    transmission::{Sender, SyncState},
};

/// The option of [`Controller`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ControllerOption {
    /// The board revision.
    pub variant: BoardVariant,
    /// Whether a slave board is attached.
    pub dual_board: bool,
}

impl ControllerOption {
    /// The boards described by this option.
    #[must_use]
    pub const fn topology(&self) -> Topology {
        Topology {
            variant: self.variant,
            dual_board: self.dual_board,
        }
    }
}

/// A controller for a master board and an optional slave board.
///
/// All operations to the boards are done through this struct. It dereferences to the
/// [`Topology`] of the attached boards.
#[derive(Deref, Getters, MutGetters, CopyGetters)]
pub struct Controller<L: Link> {
    /// The link to the boards.
    #[getset(get = "pub", get_mut = "pub")]
    link: L,
    /// The attached boards.
    #[getset(get_copy = "pub")]
    #[deref]
    topology: Topology,
    /// State of the last synchronized write.
    #[getset(get_copy = "pub")]
    sync_state: SyncState,
}

impl<L: Link> Controller<L> {
    /// Equivalent to [`Self::open_with_option`] with default [`ControllerOption`].
    pub fn open(link: L) -> Result<Self, NuphaseDriverError> {
        Self::open_with_option(link, ControllerOption::default())
    }

    /// Opens the link and brings every board to a known idle state.
    pub fn open_with_option(mut link: L, option: ControllerOption) -> Result<Self, NuphaseDriverError> {
        let topology = option.topology();
        tracing::info!(
            "Opening {} controller ({} board(s))",
            topology.variant,
            topology.num_boards()
        );
        link.open(&topology)?;

        let mut cnt = Self {
            link,
            topology,
            sync_state: SyncState::Idle,
        };
        cnt.sender().board_init()?;
        Ok(cnt)
    }

    /// Returns the [`Sender`] running board operations over the link.
    pub fn sender(&mut self) -> Sender<'_, L> {
        Sender::new(&mut self.link, self.topology, &mut self.sync_state)
    }

    /// Firmware version, build date and identifier of every attached board.
    pub fn identify(&mut self) -> Result<Vec<FirmwareIdentity>, NuphaseDriverError> {
        self.sender().identify()
    }

    /// Buffer manager state of every attached board, master first.
    pub fn data_manager_status(&mut self) -> Result<Vec<DataManagerStatus>, NuphaseDriverError> {
        let topology = self.topology;
        let mut sender = self.sender();
        topology
            .devices()
            .map(|dev| sender.data_manager_status(dev))
            .collect()
    }

    /// Reads every channel of every attached board over the RAM lines in `addresses`.
    pub fn read_system_event(
        &mut self,
        addresses: Range<usize>,
    ) -> Result<SystemEvent, NuphaseDriverError> {
        self.sender().read_system_event(addresses)
    }

    /// Releases the sync line and closes the link.
    pub fn close(mut self) -> Result<(), NuphaseDriverError> {
        self.close_impl()
    }
}

impl<L: Link> Controller<L> {
    fn close_impl(&mut self) -> Result<(), NuphaseDriverError> {
        if !self.link.is_open() {
            return Ok(());
        }
        tracing::info!("Closing controller");
        self.sender().release_sync()?;
        self.link.close()?;
        Ok(())
    }
}

impl<L: Link> Drop for Controller<L> {
    fn drop(&mut self) {
        if !self.link.is_open() {
            return;
        }
        let _ = self.close_impl();
    }
}
