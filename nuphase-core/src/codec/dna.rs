use crate::{firmware::DnaByteOrder, link::Frame};

fn source(frame: &Frame, order: DnaByteOrder) -> [u8; Frame::LEN] {
    let mut bytes = frame.to_bytes();
    if order == DnaByteOrder::Reversed {
        bytes.reverse();
    }
    bytes
}

/// Assembles the 64-bit board identifier from the `low`, `mid` and `high` DNA registers.
///
/// Bytes `0..3` of each response, reversed or not according to `order`, land on
/// bits `[0, 24)`, `[24, 48)` and `[48, 64)` respectively; only the first two
/// bytes of `high` fit. In forward order byte 0 is the echoed register address.
#[must_use]
pub fn decode_dna(low: &Frame, mid: &Frame, high: &Frame, order: DnaByteOrder) -> u64 {
    let pack = |frame: &Frame, take: usize, shift: u32| {
        source(frame, order)
            .iter()
            .take(take)
            .enumerate()
            .fold(0u64, |acc, (i, &b)| acc | (b as u64) << (shift + 8 * i as u32))
    };
    pack(low, 3, 0) | pack(mid, 3, 24) | pack(high, 2, 48)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reversed() {
        let low = Frame::from_bytes([0x04, 0x03, 0x02, 0x01]);
        let mid = Frame::from_bytes([0x05, 0x06, 0x05, 0x04]);
        let high = Frame::from_bytes([0x06, 0x00, 0x08, 0x07]);
        assert_eq!(
            0x0807_0605_0403_0201,
            decode_dna(&low, &mid, &high, DnaByteOrder::Reversed)
        );
    }

    #[test]
    fn forward() {
        let low = Frame::from_bytes([0x04, 0x01, 0x02, 0x03]);
        let mid = Frame::from_bytes([0x05, 0x11, 0x12, 0x13]);
        let high = Frame::from_bytes([0x06, 0x21, 0x22, 0x23]);
        assert_eq!(
            0x2106_1211_0502_0104,
            decode_dna(&low, &mid, &high, DnaByteOrder::Forward)
        );
    }
}
