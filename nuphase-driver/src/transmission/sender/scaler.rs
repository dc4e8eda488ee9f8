use nuphase_core::{
    codec::{self, ScalerPair},
    firmware::{registers::*, Device, ScalerWindow},
    link::{Frame, Link},
};

use super::Sender;
use crate::{error::NuphaseDriverError, firmware::ScalerReadout};

impl<L: Link> Sender<'_, L> {
    /// Latches the scaler counters of `device`.
    pub fn update_scalers(&mut self, device: Device) -> Result<(), NuphaseDriverError> {
        self.check_device(device)?;
        self.send(device, Frame::command(UPDATE_SCALERS, 0x01))
    }

    /// Routes the scaler pair at `selector` to the scaler readout register of `device`.
    pub fn select_scaler(&mut self, device: Device, selector: u8) -> Result<(), NuphaseDriverError> {
        self.check_device(device)?;
        let max = self.topology.variant.max_scaler_selector;
        if selector > max {
            return Err(NuphaseDriverError::ScalerSelectorOutOfRange(selector, max));
        }
        self.send(device, Frame::command(SCALER_SELECT, selector))
    }

    /// Reads the currently selected scaler pair of `device`.
    pub fn read_single_scaler(&mut self, device: Device) -> Result<ScalerPair, NuphaseDriverError> {
        self.read_register(device, SCALER_READ as usize)
            .map(|f| codec::decode_scaler_pair(&f))
    }

    /// Reads the timestamp `device` latched on the last external trigger.
    pub fn latched_timestamp(&mut self, device: Device) -> Result<u64, NuphaseDriverError> {
        let lo = self.read_register(device, EXT_TRIG_TIMESTAMP_LO as usize)?;
        let hi = self.read_register(device, EXT_TRIG_TIMESTAMP_HI as usize)?;
        Ok(codec::decode_latched_timestamp(&lo, &hi))
    }

    /// Latches and reads every scaler of `device`.
    ///
    /// The first selector of each window carries the window total and the first
    /// beam; every later selector carries two beams.
    pub fn read_scalers(&mut self, device: Device) -> Result<ScalerReadout, NuphaseDriverError> {
        let variant = self.topology.variant;
        self.update_scalers(device)?;

        let mut readout = ScalerReadout::default();
        for window in ScalerWindow::ALL {
            let pair = self.scaler_at(device, variant.scaler_selector(window, 0))?;
            let scalers = readout.window_mut(window);
            scalers.total = pair.low;
            scalers.beams.push(pair.hi);
        }

        readout.latched_timestamp = self.latched_timestamp(device)?;

        for i in 1..variant.scaler_selectors_per_window {
            for window in ScalerWindow::ALL {
                let pair = self.scaler_at(device, variant.scaler_selector(window, i))?;
                readout
                    .window_mut(window)
                    .beams
                    .extend([pair.low, pair.hi]);
            }
        }
        tracing::debug!(
            "{}: scalers {} / {} / {}",
            device,
            readout.instantaneous.total,
            readout.one_second.total,
            readout.gated.total
        );
        Ok(readout)
    }
}

impl<L: Link> Sender<'_, L> {
    fn scaler_at(&mut self, device: Device, selector: u8) -> Result<ScalerPair, NuphaseDriverError> {
        self.select_scaler(device, selector)?;
        self.read_single_scaler(device)
    }
}

#[cfg(test)]
mod tests {
    use nuphase_core::firmware::{BoardVariant, Topology};

    use super::{
        super::tests::{sent, MockLink, SINGLE},
        *,
    };
    use crate::transmission::SyncState;

    #[test]
    fn select_out_of_range() {
        let mut link = MockLink::new();
        let mut state = SyncState::Idle;
        let mut sender = Sender::new(&mut link, SINGLE, &mut state);
        assert_eq!(
            Err(NuphaseDriverError::ScalerSelectorOutOfRange(39, 38)),
            sender.select_scaler(Device::Master, 39)
        );
        assert!(link.sent.is_empty());
    }

    #[test]
    fn read_scalers_order() -> anyhow::Result<()> {
        let mut link = MockLink::new();
        let mut state = SyncState::Idle;
        let mut sender = Sender::new(&mut link, SINGLE, &mut state);
        sender.read_scalers(Device::Master)?;

        let selectors = sent(&link)
            .into_iter()
            .filter(|(_, f)| f[0] == SCALER_SELECT)
            .map(|(_, f)| f[3])
            .collect::<Vec<_>>();
        let mut expect = vec![0, 16, 8];
        (1..8).for_each(|i| expect.extend([i, i + 16, i + 8]));
        assert_eq!(expect, selectors);

        let frames = sent(&link);
        assert_eq!((0, [40, 0, 0, 1]), frames[0]);
        assert_eq!((0, [0x6D, 0, 0, 44]), frames[7]);
        assert_eq!((0, [0x6D, 0, 0, 45]), frames[8]);
        Ok(())
    }

    #[test]
    fn read_scalers_values() -> anyhow::Result<()> {
        let mut link = MockLink::new();
        // instantaneous, one-second and gated totals, then beams 1 and 2 of each window
        [
            [0x03, 0x00, 0x10, 0x64],
            [0x03, 0x00, 0x20, 0x0A],
            [0x03, 0x00, 0x30, 0x05],
            [0x03, 0x12, 0x34, 0x56],
            [0x03, 0x00, 0x00, 0x01],
            [0x03, 0x00, 0x00, 0x02],
        ]
        .into_iter()
        .for_each(|bytes| link.reply(0, SCALER_READ, bytes));
        link.reply(0, EXT_TRIG_TIMESTAMP_LO, [44, 0x01, 0x02, 0x03]);
        link.reply(0, EXT_TRIG_TIMESTAMP_HI, [45, 0, 0, 0x04]);
        let mut state = SyncState::Idle;
        let mut sender = Sender::new(&mut link, SINGLE, &mut state);
        let readout = sender.read_scalers(Device::Master)?;

        assert_eq!(100, readout.instantaneous.total);
        assert_eq!(10, readout.one_second.total);
        assert_eq!(5, readout.gated.total);
        assert_eq!(
            &[0x001, 0x456, 0x123],
            &readout.window(ScalerWindow::Instantaneous).beams[..3]
        );
        assert_eq!(&[0x002, 0x001, 0x000], &readout.one_second.beams[..3]);
        assert_eq!(&[0x003, 0x002, 0x000], &readout.gated.beams[..3]);
        assert_eq!(15, readout.instantaneous.beams.len());
        assert_eq!(0x04_01_02_03, readout.latched_timestamp);
        Ok(())
    }

    #[test]
    fn read_scalers_nuphase() -> anyhow::Result<()> {
        let mut link = MockLink::new();
        let mut state = SyncState::Idle;
        let mut sender = Sender::new(
            &mut link,
            Topology::dual(BoardVariant::NUPHASE),
            &mut state,
        );
        let readout = sender.read_scalers(Device::Slave)?;
        assert_eq!(17, readout.gated.beams.len());
        assert!(link.sent.iter().all(|(bus, _)| *bus == 1));
        assert!(link
            .sent
            .iter()
            .filter(|(_, f)| f[0] == SCALER_SELECT)
            .all(|(_, f)| f[3] <= 47));
        Ok(())
    }

    #[test]
    fn slave_rejected_in_single_board_mode() {
        let mut link = MockLink::new();
        let mut state = SyncState::Idle;
        let mut sender = Sender::new(&mut link, SINGLE, &mut state);
        assert_eq!(
            Err(NuphaseDriverError::InvalidDevice(1)),
            sender.read_scalers(Device::Slave)
        );
    }
}
