use derive_more::{Debug, Display};
use nuphase_core::{codec, firmware::Device, link::Frame};

/// Firmware version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[display("v{}.{} (tag {:#04X})", major, minor, tag)]
pub struct FirmwareVersion {
    /// Build tag.
    pub tag: u8,
    /// Major version number.
    pub major: u8,
    /// Minor version number.
    pub minor: u8,
}

impl From<&Frame> for FirmwareVersion {
    fn from(frame: &Frame) -> Self {
        let (tag, major, minor) = codec::decode_firmware_version(frame);
        Self { tag, major, minor }
    }
}

/// Firmware build date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[display("{:04}-{:02}-{:02}", year, month, day)]
pub struct FirmwareDate {
    #[allow(missing_docs)]
    pub year: u16,
    #[allow(missing_docs)]
    pub month: u8,
    #[allow(missing_docs)]
    pub day: u8,
}

impl From<&Frame> for FirmwareDate {
    fn from(frame: &Frame) -> Self {
        let (year, month, day) = codec::decode_firmware_date(frame);
        Self { year, month, day }
    }
}

/// Firmware version, build date and identifier of one board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[display(
    "{}: firmware = {}, date = {}, DNA = {:#018X}",
    device,
    version,
    date,
    dna
)]
#[debug("{}", self)]
pub struct FirmwareIdentity {
    /// The board.
    pub device: Device,
    /// Firmware version.
    pub version: FirmwareVersion,
    /// Firmware build date.
    pub date: FirmwareDate,
    /// 64-bit board identifier.
    pub dna: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version() {
        let v = FirmwareVersion::from(&Frame::from_bytes([0x01, 0x0A, 0x00, 0x21]));
        assert_eq!(
            FirmwareVersion {
                tag: 0x0A,
                major: 2,
                minor: 1
            },
            v
        );
        assert_eq!("v2.1 (tag 0x0A)", v.to_string());
    }

    #[test]
    fn date() {
        let d = FirmwareDate::from(&Frame::from_bytes([0x02, 0x7E, 0x39, 0x05]));
        assert_eq!("2019-09-05", d.to_string());
    }

    #[test]
    fn identity() {
        let id = FirmwareIdentity {
            device: Device::Slave,
            version: FirmwareVersion {
                tag: 1,
                major: 3,
                minor: 4,
            },
            date: FirmwareDate {
                year: 2020,
                month: 1,
                day: 31,
            },
            dna: 0x0123_4567_89AB_CDEF,
        };
        assert_eq!(
            "slave: firmware = v3.4 (tag 0x01), date = 2020-01-31, DNA = 0x0123456789ABCDEF",
            id.to_string()
        );
        assert_eq!(id.to_string(), format!("{:?}", id));
    }
}
