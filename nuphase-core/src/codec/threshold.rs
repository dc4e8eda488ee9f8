use crate::link::Frame;

/// Width mask of a trigger threshold.
pub const THRESHOLD_MASK: u32 = 0xF_FFFF;

/// Packs a threshold into the write frame for `address`.
#[must_use]
pub const fn encode_threshold(address: u8, threshold: u32) -> Frame {
    Frame::with_value(address, threshold & THRESHOLD_MASK)
}

/// Unpacks a threshold register.
#[must_use]
pub const fn decode_threshold(frame: &Frame) -> u32 {
    frame.value() & THRESHOLD_MASK
}
