//! Identity reported by an emulated board.

/// Firmware tag.
pub const FIRMWARE_TAG: u8 = 0x0E;
/// Firmware major version.
pub const FIRMWARE_VERSION_MAJOR: u8 = 0x01;
/// Firmware minor version.
pub const FIRMWARE_VERSION_MINOR: u8 = 0x03;

/// Firmware build year.
pub const FIRMWARE_YEAR: u16 = 2019;
/// Firmware build month.
pub const FIRMWARE_MONTH: u8 = 3;
/// Firmware build day.
pub const FIRMWARE_DAY: u8 = 15;

// Bytes 0, 3 and 6 equal the DNA register addresses, so forward-order boards
// read these back unchanged.
/// Board identifier of the emulated master.
pub const DNA_MASTER: u64 = 0x3A06_12D4_0507_EE04;
/// Board identifier of the emulated slave.
pub const DNA_SLAVE: u64 = 0x3A06_12D4_0507_EF04;

/// Software trigger code reported in the last trigger type.
pub const TRIG_TYPE_SOFTWARE: u8 = 0x01;
