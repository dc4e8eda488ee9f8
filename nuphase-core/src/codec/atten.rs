use crate::{firmware::registers::ATTENUATOR_0, link::Frame};

/// Number of attenuator values packed in one register.
pub const ATTENUATORS_PER_REGISTER: usize = 3;

/// Packs attenuator values into consecutive attenuator register writes.
///
/// Each register holds three values with the first one in the lowest byte. The
/// last register is zero-filled when `values` does not divide evenly.
#[must_use]
pub fn encode_attenuators(values: &[u8]) -> Vec<Frame> {
    values
        .chunks(ATTENUATORS_PER_REGISTER)
        .enumerate()
        .map(|(i, chunk)| {
            let mut payload = [0u8; ATTENUATORS_PER_REGISTER];
            chunk
                .iter()
                .enumerate()
                .for_each(|(j, &v)| payload[ATTENUATORS_PER_REGISTER - 1 - j] = v);
            Frame::new(ATTENUATOR_0 + i as u8, payload)
        })
        .collect()
}

/// Unpacks `count` attenuator values from attenuator register reads.
#[must_use]
pub fn decode_attenuators(frames: &[Frame], count: usize) -> Vec<u8> {
    frames
        .iter()
        .flat_map(|f| f.payload().into_iter().rev())
        .take(count)
        .collect()
}
