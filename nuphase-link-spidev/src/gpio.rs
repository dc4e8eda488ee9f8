use std::path::Path;

pub(crate) const SYSFS_GPIO: &str = "/sys/class/gpio";

/// Exports `gpio` under the sysfs GPIO tree at `root` and drives it low.
///
/// Does nothing if the pin is already exported.
pub(crate) fn drive_low(root: &Path, gpio: u32) -> std::io::Result<()> {
    let pin = root.join(format!("gpio{gpio}"));
    if pin.join("value").is_file() {
        tracing::debug!("GPIO {} is already exported", gpio);
        return Ok(());
    }
    tracing::info!("Enabling bus drivers with GPIO {}", gpio);
    std::fs::write(root.join("export"), gpio.to_string())?;
    std::fs::write(pin.join("direction"), "out")?;
    std::fs::write(pin.join("value"), "0")
}
