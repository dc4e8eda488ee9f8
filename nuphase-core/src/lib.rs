#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![warn(rustdoc::unescaped_backticks)]

//! Core traits and types for nuphase digitizer boards.
//!
//! This crate has no hardware access. It describes the 4-byte register link, the
//! register address space of each board revision and the bit layouts of every
//! logical value carried by the registers.

/// Bit-exact packing and unpacking of register fields.
pub mod codec;
/// Register map, board variants and device identities.
pub mod firmware;
/// A interface to the register transaction link.
pub mod link;
