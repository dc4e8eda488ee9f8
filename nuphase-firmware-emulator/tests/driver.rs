use nuphase_core::{
    firmware::{registers::*, BoardVariant, Device, ScalerWindow, Topology},
    link::{Frame, Link, LinkError},
};
use nuphase_driver::{
    firmware::ExtTriggerConfig,
    transmission::{Sender, SyncState},
};
use nuphase_firmware_emulator::{params::*, BoardEmulator, SystemEmulator};

struct EmulatorLink {
    system: SystemEmulator,
}

impl EmulatorLink {
    fn board(&self, device: Device) -> &BoardEmulator {
        &self.system[device.idx()]
    }
}

impl Link for EmulatorLink {
    fn open(&mut self, _: &Topology) -> Result<(), LinkError> {
        Ok(())
    }

    fn close(&mut self) -> Result<(), LinkError> {
        Ok(())
    }

    fn send(&mut self, bus: usize, tx: &Frame) -> Result<(), LinkError> {
        self.system
            .send(bus, tx)
            .then_some(())
            .ok_or(LinkError::new("no board"))
    }

    fn receive(&mut self, bus: usize) -> Result<Frame, LinkError> {
        self.system.receive(bus).ok_or(LinkError::new("no board"))
    }

    fn is_open(&self) -> bool {
        true
    }
}

fn with_sender<T>(
    topology: Topology,
    f: impl FnOnce(&mut Sender<'_, EmulatorLink>) -> T,
) -> (EmulatorLink, T) {
    let mut link = EmulatorLink {
        system: SystemEmulator::new(&topology),
    };
    let mut sync_state = SyncState::default();
    let r = f(&mut Sender::new(&mut link, topology, &mut sync_state));
    (link, r)
}

#[rstest::rstest]
#[test]
#[case(Topology::single(BoardVariant::BEACON))]
#[case(Topology::dual(BoardVariant::BEACON))]
#[case(Topology::dual(BoardVariant::NUPHASE))]
fn board_init_leaves_boards_idle(#[case] topology: Topology) -> anyhow::Result<()> {
    let (link, status) = with_sender(topology, |sender| {
        sender.software_trigger()?;
        sender.board_init()
    });
    let status = status?;

    assert_eq!(topology.num_boards(), status.len());
    status.iter().for_each(|s| {
        assert_eq!(0, s.buffer_flags());
        assert_eq!(0, s.current_buffer());
        assert!(!s.buffers_full());
    });
    topology.devices().for_each(|dev| {
        let board = link.board(dev);
        assert!(!board.is_sync_asserted());
        assert!(board.held().is_empty());
        assert_eq!(0, board.event_count());
        assert_eq!(DEFAULT_PRE_TRIGGER as u32, board.register(PRE_TRIGGER));
        assert_eq!(0, board.register(CAL_PULSE));
        assert_eq!(0, board.register(TRIGGER_ENABLE) & 0x01);
        assert_eq!(0xFF << 8, board.register(EXT_TRIG_CONFIG));
    });
    Ok(())
}

#[test]
fn synchronized_trigger_reaches_both_boards() -> anyhow::Result<()> {
    let topology = Topology::dual(BoardVariant::BEACON);
    let (link, r) = with_sender(topology, |sender| {
        sender.event_init()?;
        sender.software_trigger()?;
        sender.software_trigger()?;
        Ok::<_, anyhow::Error>(sender.sync_state())
    });
    assert_eq!(SyncState::Idle, r?);
    assert_eq!(2, link.board(Device::Master).event_count());
    assert_eq!(2, link.board(Device::Slave).event_count());
    assert_eq!(0b0011, link.board(Device::Slave).buffer_flags());
    assert_eq!(
        link.board(Device::Master).write_buffer(),
        link.board(Device::Slave).write_buffer()
    );
    Ok(())
}

#[test]
fn identify() -> anyhow::Result<()> {
    let topology = Topology::dual(BoardVariant::NUPHASE);
    let (_, ids) = with_sender(topology, |sender| sender.identify());
    let ids = ids?;

    assert_eq!(2, ids.len());
    assert_eq!(DNA_MASTER, ids[0].dna);
    assert_eq!(DNA_SLAVE, ids[1].dna);
    ids.iter().for_each(|id| {
        assert_eq!(FIRMWARE_VERSION_MAJOR, id.version.major);
        assert_eq!(FIRMWARE_VERSION_MINOR, id.version.minor);
        assert_eq!(FIRMWARE_YEAR, id.date.year);
    });
    Ok(())
}

#[test]
fn read_system_event() -> anyhow::Result<()> {
    let topology = Topology::dual(BoardVariant::BEACON);
    let (_, event) = with_sender(topology, |sender| {
        sender.event_init()?;
        sender.software_trigger()?;
        sender.set_readout_buffer(0)?;
        sender.read_system_event(0..2)
    });
    let event = event?;

    assert_eq!(8, event.master.len());
    assert_eq!(4, event.slave.len());
    assert_eq!(32, event.num_samples());
    event.waveforms().for_each(|wf| {
        let expect = (0..32)
            .map(|i| (i + 16 * wf.channel() + 3) as u8)
            .collect::<Vec<_>>();
        assert_eq!(expect, wf.samples());
    });
    Ok(())
}

#[test]
fn read_scalers() -> anyhow::Result<()> {
    let topology = Topology::single(BoardVariant::BEACON);
    let (_, readout) = with_sender(topology, |sender| sender.read_scalers(Device::Master));
    let readout = readout?;

    [
        (ScalerWindow::Instantaneous, 0u16),
        (ScalerWindow::Gated, 16),
        (ScalerWindow::OneSecond, 32),
    ]
    .into_iter()
    .for_each(|(window, base)| {
        let scalers = readout.window(window);
        assert_eq!(base, scalers.total);
        assert_eq!((base + 1..base + 16).collect::<Vec<_>>(), scalers.beams);
    });
    Ok(())
}

#[test]
fn thresholds_read_back() -> anyhow::Result<()> {
    let topology = Topology::single(BoardVariant::BEACON);
    let (_, thresholds) = with_sender(topology, |sender| {
        (0..BoardVariant::BEACON.num_beams)
            .try_for_each(|beam| sender.set_threshold(Device::Master, beam, 1000 + beam as u32))?;
        sender.read_thresholds(Device::Master)
    });
    assert_eq!(
        (0..24).map(|b| 1000 + b).collect::<Vec<u32>>(),
        thresholds?
    );
    Ok(())
}

#[test]
fn attenuators_applied() -> anyhow::Result<()> {
    let topology = Topology::dual(BoardVariant::BEACON);
    let values = (1..=12).collect::<Vec<u8>>();
    let (link, read_back) = with_sender(topology, |sender| {
        sender.set_attenuators(&values)?;
        sender.attenuators()
    });
    assert_eq!(values, read_back?);
    assert_eq!(&values[..8], link.board(Device::Master).attenuators());
    assert_eq!(&values[8..], link.board(Device::Slave).attenuators());
    Ok(())
}

#[test]
fn ext_trigger_config() -> anyhow::Result<()> {
    let topology = Topology::single(BoardVariant::BEACON);
    let (link, r) = with_sender(topology, |sender| {
        sender.configure_ext_trigger(ExtTriggerConfig {
            enable: true,
            use_gate: true,
            gate: 0x1234,
        })
    });
    r?;
    assert_eq!(0x12_34_03, link.board(Device::Master).register(EXT_TRIG_CONFIG));
    Ok(())
}
