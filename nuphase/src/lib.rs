#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]

//! Controller for nuphase phased-array digitizer boards.
//!
//! A [`Controller`] owns a [`Link`](nuphase_core::link::Link) to one master board and
//! an optional slave board, initializes them on open and gives access to every board
//! operation through [`Controller::sender`].

/// The [`Controller`].
pub mod controller;
/// Errors of this crate.
pub mod error;
#[cfg(feature = "event-file")]
/// Waveform file persistence.
pub mod event_file;
/// Links backed by the firmware emulator.
pub mod link;
/// Common imports.
pub mod prelude;

pub use nuphase_core as core;
pub use nuphase_driver as driver;

pub use controller::{Controller, ControllerOption};
