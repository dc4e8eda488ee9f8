mod device;
/// Register addresses and command payloads.
pub mod registers;
mod topology;
mod variant;

pub use device::Device;
pub use topology::Topology;
pub use variant::{BoardVariant, DnaByteOrder, ScalerWindow};
