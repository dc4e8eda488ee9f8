#![warn(missing_docs)]

//! Register-level emulator of nuphase digitizer boards.

mod board;
pub mod params;
mod system;

pub use board::BoardEmulator;
pub use system::SystemEmulator;
