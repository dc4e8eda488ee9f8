mod event;
mod scaler;
mod status;
mod trigger;
/// Firmware version and board identity.
pub mod version;

pub use event::{SystemEvent, Waveform};
pub use scaler::{ScalerReadout, WindowScalers};
pub use status::{DataManagerStatus, EventMetadata};
pub use trigger::ExtTriggerConfig;
