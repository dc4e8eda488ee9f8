use nuphase::{
    core::firmware::{registers::*, BoardVariant, Device},
    link::Transaction,
    prelude::*,
};

use crate::open;

#[test]
fn records_two_phase_read() -> anyhow::Result<()> {
    let mut cnt = open(BoardVariant::BEACON, false)?;
    cnt.link_mut().clear_trace();
    let frame = cnt
        .sender()
        .read_register(Device::Master, PRE_TRIGGER as usize)?;
    assert_eq!([PRE_TRIGGER, 0, 0, DEFAULT_PRE_TRIGGER], frame.to_bytes());
    assert_eq!(
        &[
            Transaction::Send(Device::Master, Frame::command(SET_READ_REG, PRE_TRIGGER)),
            Transaction::Receive(Device::Master, frame),
        ],
        cnt.link().trace()
    );
    Ok(())
}

#[test]
fn fail_after() -> anyhow::Result<()> {
    let mut cnt = open(BoardVariant::BEACON, false)?;
    cnt.link_mut().fail_after(1);
    assert!(cnt.sender().read_register(Device::Master, 1).is_err_and(|e| e.is_transport_fault()));
    assert!(cnt.sender().reset().is_err());
    cnt.link_mut().repair();
    cnt.sender().reset()?;
    Ok(())
}

#[test]
fn emulator_access() -> anyhow::Result<()> {
    let mut cnt = open(BoardVariant::BEACON, true)?;
    cnt.link_mut()
        .emulator_mut(Device::Slave)
        .ok_or(anyhow::anyhow!("no slave"))?
        .set_dna(0x0123_4567_89AB_CDEF);
    let ids = cnt.identify()?;
    assert_eq!(0x0123_4567_89AB_CDEF, ids[1].dna);
    assert_eq!(2, cnt.link().len());
    assert!(cnt.link().emulator(Device::Master).is_some());
    Ok(())
}
