use derive_more::Display;

/// A board on the link.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Display)]
pub enum Device {
    /// The master board, on bus 0. It owns the sync line.
    #[display("master")]
    Master,
    /// The slave board, on bus 1.
    #[display("slave")]
    Slave,
}

impl Device {
    /// Both devices, master first.
    pub const ALL: [Device; 2] = [Device::Master, Device::Slave];

    /// The bus index of the device.
    #[must_use]
    pub const fn idx(self) -> usize {
        match self {
            Device::Master => 0,
            Device::Slave => 1,
        }
    }

    /// Returns the device on bus `idx`.
    #[must_use]
    pub const fn from_idx(idx: usize) -> Option<Self> {
        match idx {
            0 => Some(Device::Master),
            1 => Some(Device::Slave),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[rstest::rstest]
    #[test]
    #[case(Some(Device::Master), 0)]
    #[case(Some(Device::Slave), 1)]
    #[case(None, 2)]
    fn from_idx(#[case] expect: Option<Device>, #[case] idx: usize) {
        assert_eq!(expect, Device::from_idx(idx));
        if let Some(dev) = expect {
            assert_eq!(idx, dev.idx());
        }
    }

    #[test]
    fn display() {
        assert_eq!("master", Device::Master.to_string());
        assert_eq!("slave", Device::Slave.to_string());
    }
}
