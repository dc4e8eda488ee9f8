pub use crate::{
    controller::{Controller, ControllerOption},
    error::NuphaseError,
};

#[cfg(feature = "event-file")]
pub use crate::event_file::{save_event, write_event};
#[cfg(feature = "link-audit")]
pub use crate::link::{Audit, AuditOption};
#[cfg(feature = "link-nop")]
pub use crate::link::Nop;

pub use nuphase_core::{
    codec::{ScalerPair, TriggerInfo},
    firmware::{BoardVariant, Device, DnaByteOrder, ScalerWindow, Topology},
    link::{Frame, Link, LinkError},
};
pub use nuphase_driver::{
    error::NuphaseDriverError,
    firmware::{
        version::{FirmwareDate, FirmwareIdentity, FirmwareVersion},
        DataManagerStatus, EventMetadata, ExtTriggerConfig, ScalerReadout, SystemEvent, Waveform,
        WindowScalers,
    },
    transmission::{Sender, SyncState},
};
