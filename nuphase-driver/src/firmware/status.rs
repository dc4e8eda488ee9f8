use nuphase_core::{
    codec::{self, TriggerInfo},
    link::Frame,
};

/// Buffer manager state of one board, decoded from the data manager status register.
#[bitfield_struct::bitfield(u32)]
#[derive(PartialEq, Eq)]
pub struct DataManagerStatus {
    /// One bit per buffer holding an unread event.
    #[bits(4)]
    pub buffer_flags: u8,
    #[bits(4)]
    __: u8,
    /// Set when every buffer holds an unread event.
    pub buffers_full: bool,
    #[bits(3)]
    __: u8,
    /// Buffer the next event is written to.
    #[bits(2)]
    pub current_buffer: u8,
    #[bits(2)]
    __: u8,
    /// Type of the last trigger.
    #[bits(2)]
    pub last_trig_type: u8,
    #[bits(14)]
    __: u16,
}

impl From<&Frame> for DataManagerStatus {
    fn from(frame: &Frame) -> Self {
        Self::from_bits(frame.value())
    }
}

/// Counters and trigger information latched with the current readout buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EventMetadata {
    /// Event counter.
    pub event_count: u64,
    /// Trigger counter.
    pub trigger_count: u64,
    /// Trigger timestamp.
    pub trigger_time: u64,
    /// Deadtime counter.
    pub deadtime: u32,
    /// Trigger information.
    pub trigger_info: TriggerInfo,
    /// Slow (low) and fast (hi) scaler counts latched with the event.
    pub scaler: codec::ScalerPair,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zeroed() {
        let status = DataManagerStatus::from(&Frame::from_bytes([0x07, 0, 0, 0]));
        assert_eq!(0, status.current_buffer());
        assert_eq!(0, status.buffer_flags());
        assert!(!status.buffers_full());
        assert_eq!(0, status.last_trig_type());
    }

    #[rstest::rstest]
    #[test]
    #[case(0b1111, true, 3, 2, [0x07, 0xFE, 0xF1, 0xFF])]
    #[case(0b0101, false, 1, 1, [0x07, 0x01, 0x10, 0x05])]
    #[case(0b0000, true, 0, 3, [0x07, 0x03, 0x01, 0xF0])]
    fn decode(
        #[case] flags: u8,
        #[case] full: bool,
        #[case] current: u8,
        #[case] trig: u8,
        #[case] bytes: [u8; 4],
    ) {
        let status = DataManagerStatus::from(&Frame::from_bytes(bytes));
        assert_eq!(flags, status.buffer_flags());
        assert_eq!(full, status.buffers_full());
        assert_eq!(current, status.current_buffer());
        assert_eq!(trig, status.last_trig_type());
    }
}
