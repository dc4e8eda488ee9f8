use crate::link::Frame;

const fn byte(frame: &Frame, i: usize) -> u64 {
    frame.to_bytes()[i] as u64
}

/// Assembles a 40-bit event or trigger counter from its `lo` and `hi` registers.
///
/// Byte 3 of `hi` lands on both bits `[32, 40)` and `[24, 32)`; the firmware
/// exposes no other source for bits `[24, 32)`.
#[must_use]
pub const fn decode_counter(lo: &Frame, hi: &Frame) -> u64 {
    byte(hi, 1) << 40
        | byte(hi, 3) << 32
        | byte(hi, 3) << 24
        | byte(lo, 1) << 16
        | byte(lo, 2) << 8
        | byte(lo, 3)
}

/// Assembles the 48-bit trigger time from its `lo` and `hi` registers.
#[must_use]
pub const fn decode_trigger_time(lo: &Frame, hi: &Frame) -> u64 {
    byte(hi, 1) << 40
        | byte(hi, 2) << 32
        | byte(hi, 3) << 24
        | byte(lo, 1) << 16
        | byte(lo, 2) << 8
        | byte(lo, 3)
}

/// Assembles the timestamp latched on the last external trigger.
#[must_use]
pub const fn decode_latched_timestamp(lo: &Frame, hi: &Frame) -> u64 {
    (hi.value() as u64) << 24 | lo.value() as u64
}

/// Decodes the 24-bit deadtime counter.
#[must_use]
pub const fn decode_deadtime(frame: &Frame) -> u32 {
    frame.value()
}
