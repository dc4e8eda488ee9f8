use nuphase::prelude::*;

#[test]
fn nop() -> anyhow::Result<()> {
    let mut cnt = Controller::open(Nop::new())?;
    assert_eq!(1, cnt.identify()?.len());
    cnt.sender().software_trigger()?;
    assert!(cnt.sender().data_valid(Device::Master)?);

    cnt.link_mut().close()?;
    assert!(cnt
        .sender()
        .software_trigger()
        .is_err_and(|e| e.is_transport_fault()));
    Ok(())
}
