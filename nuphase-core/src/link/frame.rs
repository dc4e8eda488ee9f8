use derive_more::Debug;
use zerocopy::{FromBytes, Immutable, IntoBytes, KnownLayout};

/// One register transaction on the link.
///
/// Byte 0 is the register address (or command), bytes 1 to 3 are the 24-bit
/// payload, most significant byte first.
#[derive(
    Clone, Copy, PartialEq, Eq, Default, Debug, IntoBytes, FromBytes, Immutable, KnownLayout,
)]
#[debug("{:02X?}", self.0)]
#[repr(C)]
pub struct Frame([u8; 4]);

impl Frame {
    /// The number of bytes exchanged by every transaction.
    pub const LEN: usize = 4;

    /// Creates a new [`Frame`] from an address and a 3-byte payload.
    #[must_use]
    pub const fn new(address: u8, payload: [u8; 3]) -> Self {
        Self([address, payload[0], payload[1], payload[2]])
    }

    /// Creates a command frame carrying a single value in the lowest payload byte.
    #[must_use]
    pub const fn command(address: u8, value: u8) -> Self {
        Self([address, 0x00, 0x00, value])
    }

    /// Creates a new [`Frame`] from an address and the low 24 bits of `value`.
    #[must_use]
    pub const fn with_value(address: u8, value: u32) -> Self {
        Self([address, (value >> 16) as u8, (value >> 8) as u8, value as u8])
    }

    /// Creates a [`Frame`] from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 4]) -> Self {
        Self(bytes)
    }

    /// Reinterprets a byte slice as a [`Frame`], or returns `None` if the slice is not
    /// exactly [`Frame::LEN`] bytes long.
    #[must_use]
    pub fn from_slice(data: &[u8]) -> Option<Self> {
        Self::read_from_bytes(data).ok()
    }

    /// The register address.
    #[must_use]
    pub const fn address(&self) -> u8 {
        self.0[0]
    }

    /// The 24-bit payload bytes.
    #[must_use]
    pub const fn payload(&self) -> [u8; 3] {
        [self.0[1], self.0[2], self.0[3]]
    }

    /// The payload as an integer.
    #[must_use]
    pub const fn value(&self) -> u32 {
        (self.0[1] as u32) << 16 | (self.0[2] as u32) << 8 | self.0[3] as u32
    }

    /// The raw bytes.
    #[must_use]
    pub const fn to_bytes(&self) -> [u8; 4] {
        self.0
    }
}

impl From<[u8; 4]> for Frame {
    fn from(bytes: [u8; 4]) -> Self {
        Self(bytes)
    }
}

impl std::ops::Index<usize> for Frame {
    type Output = u8;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_size() {
        assert_eq!(Frame::LEN, size_of::<Frame>());
    }

    #[test]
    fn layout() {
        let frame = Frame::new(0x6D, [0x01, 0x02, 0x03]);
        assert_eq!([0x6D, 0x01, 0x02, 0x03], frame.as_bytes());
        assert_eq!(0x6D, frame.address());
        assert_eq!([0x01, 0x02, 0x03], frame.payload());
        assert_eq!(0x010203, frame.value());
        assert_eq!(0x02, frame[2]);
        assert_eq!(frame, Frame::with_value(0x6D, 0xFF01_0203));
    }

    #[test]
    fn command() {
        assert_eq!([39, 0, 0, 1], Frame::command(39, 1).to_bytes());
    }

    #[rstest::rstest]
    #[test]
    #[case(None, &[])]
    #[case(None, &[1, 2, 3])]
    #[case(Some(Frame::from_bytes([1, 2, 3, 4])), &[1, 2, 3, 4])]
    #[case(None, &[1, 2, 3, 4, 5])]
    fn from_slice(#[case] expect: Option<Frame>, #[case] data: &[u8]) {
        assert_eq!(expect, Frame::from_slice(data));
    }

    #[test]
    fn debug() {
        assert_eq!("[27, 00, 00, 01]", format!("{:?}", Frame::command(0x27, 1)));
    }
}
