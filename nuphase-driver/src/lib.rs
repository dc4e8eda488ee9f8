#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![warn(rustdoc::unescaped_backticks)]

//! Register protocol driver for nuphase digitizer boards.
//!
//! [`transmission::Sender`] turns every board operation into the ordered frame
//! sequence the firmware expects, including the sync bracket that keeps a master
//! and a slave board in step.

/// Driver error.
pub mod error;
/// Typed values read back from the firmware.
pub mod firmware;
/// Operation sequencing over a [`Link`](nuphase_core::link::Link).
pub mod transmission;

pub use nuphase_core as core;
