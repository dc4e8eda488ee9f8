use crate::link::Frame;

/// Width mask of one packed scaler count.
pub const SCALER_MASK: u16 = 0x0FFF;

/// Two 12-bit scaler counts read through one scaler selector.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct ScalerPair {
    /// Count carried in the low 12 bits.
    pub low: u16,
    /// Count carried in the high 12 bits.
    pub hi: u16,
}

/// Unpacks the scaler pair in the scaler readout register.
#[must_use]
pub const fn decode_scaler_pair(frame: &Frame) -> ScalerPair {
    let [b1, b2, b3] = frame.payload();
    ScalerPair {
        low: ((b2 as u16) & 0x0F) << 8 | b3 as u16,
        hi: (b1 as u16) << 4 | (b2 as u16) >> 4,
    }
}
