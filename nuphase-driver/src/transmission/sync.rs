use derive_more::Display;

/// Progress of a synchronized write.
///
/// A synchronized write moves through every state in declaration order and ends
/// in [`SyncState::Idle`]. If a transaction fails, the state is left at the last
/// step that completed, which tells whether the master sync line is still asserted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Display)]
pub enum SyncState {
    /// No synchronized write in progress.
    #[default]
    Idle,
    /// Sync asserted on the master.
    SyncAsserted,
    /// Frame written to the slave.
    SlaveWritten,
    /// Frame written to the master.
    MasterWritten,
    /// Sync released on the master.
    SyncReleased,
}

impl SyncState {
    /// Checks if the master sync line is held asserted.
    #[must_use]
    pub const fn is_sync_asserted(&self) -> bool {
        matches!(
            self,
            Self::SyncAsserted | Self::SlaveWritten | Self::MasterWritten
        )
    }
}
