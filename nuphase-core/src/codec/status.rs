use crate::link::Frame;

/// Trigger information latched with the last event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct TriggerInfo {
    /// Beam mask of the last phased trigger.
    pub last_beam: u16,
    /// Trigger type code.
    pub trig_type: u8,
    /// Buffer the event was written to.
    pub buffer_no: u8,
}

/// Decodes the firmware version register into `(tag, major, minor)`.
#[must_use]
pub const fn decode_firmware_version(frame: &Frame) -> (u8, u8, u8) {
    let [tag, _, v] = frame.payload();
    (tag, v >> 4, v & 0x0F)
}

/// Decodes the firmware date register into `(year, month, day)`.
#[must_use]
pub const fn decode_firmware_date(frame: &Frame) -> (u16, u8, u8) {
    let [b1, b2, b3] = frame.payload();
    ((b1 as u16) << 4 | (b2 as u16) >> 4, b2 & 0x0F, b3)
}

/// Decodes the data-valid flag of the status register.
#[must_use]
pub const fn decode_data_valid(frame: &Frame) -> bool {
    frame.payload()[2] & 0x10 != 0
}

/// Decodes the trigger information register.
#[must_use]
pub const fn decode_trigger_info(frame: &Frame) -> TriggerInfo {
    let [b1, b2, b3] = frame.payload();
    TriggerInfo {
        last_beam: ((b2 as u16) & 0x7F) << 8 | b3 as u16,
        trig_type: (b1 & 0x01) << 1 | (b2 & 0x80) >> 7,
        buffer_no: (b1 & 0xC0) >> 6,
    }
}

/// Packs the external trigger input configuration into a write frame for `address`.
#[must_use]
pub const fn encode_ext_trigger_config(
    address: u8,
    enable: bool,
    use_gate: bool,
    gate: u16,
) -> Frame {
    Frame::new(
        address,
        [(gate >> 8) as u8, gate as u8, (use_gate as u8) << 1 | enable as u8],
    )
}
