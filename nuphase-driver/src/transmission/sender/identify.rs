use nuphase_core::{
    codec,
    firmware::{registers::*, Device},
    link::Link,
};

use super::Sender;
use crate::{
    error::NuphaseDriverError,
    firmware::{
        version::{FirmwareDate, FirmwareIdentity, FirmwareVersion},
        EventMetadata,
    },
};

impl<L: Link> Sender<'_, L> {
    /// Reads the firmware version of `device`.
    pub fn firmware_version(
        &mut self,
        device: Device,
    ) -> Result<FirmwareVersion, NuphaseDriverError> {
        self.read_register(device, FIRMWARE_VER as usize)
            .map(|f| FirmwareVersion::from(&f))
    }

    /// Reads the firmware build date of `device`.
    pub fn firmware_date(&mut self, device: Device) -> Result<FirmwareDate, NuphaseDriverError> {
        self.read_register(device, FIRMWARE_DATE as usize)
            .map(|f| FirmwareDate::from(&f))
    }

    /// Reads the 64-bit identifier of `device`.
    pub fn dna(&mut self, device: Device) -> Result<u64, NuphaseDriverError> {
        let low = self.read_register(device, DNA_LOW as usize)?;
        let mid = self.read_register(device, DNA_MID as usize)?;
        let high = self.read_register(device, DNA_HIGH as usize)?;
        Ok(codec::decode_dna(
            &low,
            &mid,
            &high,
            self.topology.variant.dna_byte_order,
        ))
    }

    /// Reads the firmware version, build date and identifier of `device`.
    pub fn identity(&mut self, device: Device) -> Result<FirmwareIdentity, NuphaseDriverError> {
        Ok(FirmwareIdentity {
            device,
            version: self.firmware_version(device)?,
            date: self.firmware_date(device)?,
            dna: self.dna(device)?,
        })
    }

    /// Reads the identity of every attached board, master first.
    pub fn identify(&mut self) -> Result<Vec<FirmwareIdentity>, NuphaseDriverError> {
        let topology = self.topology;
        topology.devices().map(|dev| self.identity(dev)).collect()
    }

    /// Reads the counters and trigger information latched with the current readout buffer.
    pub fn event_metadata(&mut self, device: Device) -> Result<EventMetadata, NuphaseDriverError> {
        let f = self.read_registers(
            device,
            [
                EVENT_COUNTER_LO,
                EVENT_COUNTER_HI,
                TRIGGER_COUNTER_LO,
                TRIGGER_COUNTER_HI,
                TRIGGER_TIME_LO,
                TRIGGER_TIME_HI,
                DEADTIME,
                TRIGGER_INFO,
                EVENT_SCALER,
            ],
        )?;
        Ok(EventMetadata {
            event_count: codec::decode_counter(&f[0], &f[1]),
            trigger_count: codec::decode_counter(&f[2], &f[3]),
            trigger_time: codec::decode_trigger_time(&f[4], &f[5]),
            deadtime: codec::decode_deadtime(&f[6]),
            trigger_info: codec::decode_trigger_info(&f[7]),
            scaler: codec::decode_scaler_pair(&f[8]),
        })
    }
}

#[cfg(test)]
mod tests {
    use nuphase_core::firmware::{BoardVariant, Topology};

    use super::{
        super::tests::{MockLink, DUAL, SINGLE},
        *,
    };
    use crate::transmission::SyncState;

    #[test]
    fn identity_beacon() -> anyhow::Result<()> {
        let mut link = MockLink::new();
        link.reply(0, FIRMWARE_VER, [1, 0x05, 0x00, 0x12]);
        link.reply(0, FIRMWARE_DATE, [2, 0x7E, 0x2A, 0x10]);
        link.reply(0, DNA_LOW, [0x04, 0x03, 0x02, 0x01]);
        link.reply(0, DNA_MID, [0x05, 0x06, 0x05, 0x04]);
        link.reply(0, DNA_HIGH, [0x06, 0x00, 0x08, 0x07]);
        let mut state = SyncState::Idle;
        let mut sender = Sender::new(&mut link, SINGLE, &mut state);
        let id = sender.identity(Device::Master)?;
        assert_eq!(
            FirmwareVersion {
                tag: 5,
                major: 1,
                minor: 2
            },
            id.version
        );
        assert_eq!(
            FirmwareDate {
                year: 2018,
                month: 10,
                day: 16
            },
            id.date
        );
        assert_eq!(0x0807_0605_0403_0201, id.dna);
        Ok(())
    }

    #[test]
    fn dna_nuphase() -> anyhow::Result<()> {
        let mut link = MockLink::new();
        link.reply(1, DNA_LOW, [DNA_LOW, 0x01, 0x02, 0x03]);
        link.reply(1, DNA_MID, [DNA_MID, 0x04, 0x05, 0x06]);
        link.reply(1, DNA_HIGH, [DNA_HIGH, 0x07, 0x08, 0xFF]);
        let mut state = SyncState::Idle;
        let mut sender = Sender::new(
            &mut link,
            Topology::dual(BoardVariant::NUPHASE),
            &mut state,
        );
        assert_eq!(0x0706_0504_0502_0104, sender.dna(Device::Slave)?);
        Ok(())
    }

    #[test]
    fn identify() -> anyhow::Result<()> {
        let mut link = MockLink::new();
        let mut state = SyncState::Idle;
        let mut sender = Sender::new(&mut link, DUAL, &mut state);
        let ids = sender.identify()?;
        assert_eq!(
            vec![Device::Master, Device::Slave],
            ids.iter().map(|id| id.device).collect::<Vec<_>>()
        );
        Ok(())
    }

    #[test]
    fn event_metadata() -> anyhow::Result<()> {
        let mut link = MockLink::new();
        link.reply(0, EVENT_COUNTER_LO, [10, 0, 0, 7]);
        link.reply(0, TRIGGER_COUNTER_LO, [12, 0, 1, 0]);
        link.reply(0, TRIGGER_TIME_HI, [15, 0, 0, 1]);
        link.reply(0, DEADTIME, [16, 0, 0, 9]);
        link.reply(0, TRIGGER_INFO, [17, 0x80, 0x00, 0x04]);
        link.reply(0, EVENT_SCALER, [19, 0x01, 0x20, 0x03]);
        let mut state = SyncState::Idle;
        let mut sender = Sender::new(&mut link, SINGLE, &mut state);
        let meta = sender.event_metadata(Device::Master)?;
        assert_eq!(7, meta.event_count);
        assert_eq!(0x100, meta.trigger_count);
        assert_eq!(1 << 24, meta.trigger_time);
        assert_eq!(9, meta.deadtime);
        assert_eq!(4, meta.trigger_info.last_beam);
        assert_eq!(2, meta.trigger_info.buffer_no);
        assert_eq!(0x003, meta.scaler.low);
        assert_eq!(0x012, meta.scaler.hi);
        Ok(())
    }
}
