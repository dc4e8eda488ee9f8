use nuphase::{
    core::firmware::{registers::*, BoardVariant, Device},
    link::{Audit, AuditOption},
    Controller, ControllerOption,
};

mod link;

pub fn open(variant: BoardVariant, dual_board: bool) -> anyhow::Result<Controller<Audit>> {
    Ok(Controller::open_with_option(
        Audit::new(AuditOption::default()),
        ControllerOption {
            variant,
            dual_board,
        },
    )?)
}

#[rstest::rstest]
#[test]
#[case(BoardVariant::BEACON)]
#[case(BoardVariant::NUPHASE)]
fn board_init_reports_idle_buffers(#[case] variant: BoardVariant) -> anyhow::Result<()> {
    let mut cnt = open(variant, false)?;
    let status = cnt.data_manager_status()?;
    assert_eq!(1, status.len());
    assert_eq!(0, status[0].current_buffer());
    assert_eq!(0, status[0].buffer_flags());
    assert!(!status[0].buffers_full());
    Ok(())
}

#[rstest::rstest]
#[test]
#[case(0)]
#[case(128)]
#[case(1000)]
fn read_register_out_of_range(#[case] address: usize) -> anyhow::Result<()> {
    let mut cnt = open(BoardVariant::NUPHASE, false)?;
    cnt.link_mut().clear_trace();
    assert!(cnt
        .sender()
        .read_register(Device::Master, address)
        .is_err_and(|e| e.is_out_of_range()));
    assert!(cnt.link().trace().is_empty());
    Ok(())
}

#[test]
fn slave_rejected_in_single_board_mode() -> anyhow::Result<()> {
    let mut cnt = open(BoardVariant::BEACON, false)?;
    cnt.link_mut().clear_trace();
    let mut sender = cnt.sender();
    assert!(sender.read_register(Device::Slave, 1).is_err());
    assert!(sender.set_threshold(Device::Slave, 0, 100).is_err());
    assert!(sender.read_channel(Device::Slave, 0, 0..1).is_err());
    assert!(sender.write(1, &[FORCE_TRIGGER, 0, 0, 1]).is_err());
    assert!(cnt.link().trace().is_empty());
    Ok(())
}

#[test]
fn buffer_clear_is_idempotent() -> anyhow::Result<()> {
    let mut cnt = open(BoardVariant::BEACON, true)?;
    let mut sender = cnt.sender();
    sender.software_trigger()?;
    sender.software_trigger()?;
    sender.buffer_clear(0b0001)?;
    let first = cnt.data_manager_status()?;
    cnt.sender().buffer_clear(0b0001)?;
    assert_eq!(first, cnt.data_manager_status()?);
    assert_eq!(0b0010, first[0].buffer_flags());
    Ok(())
}
