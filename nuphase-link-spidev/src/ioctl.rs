use std::{fs::File, os::fd::AsRawFd};

/// spidev ioctl numbers (from linux/spi/spidev.h)
///
/// `_IOW('k', nr, T)` is `(1 << 30) | (size_of::<T>() << 16) | ('k' << 8) | nr`.
mod ioctls {
    use std::os::raw::c_ulong;

    const fn iow(nr: u8, size: usize) -> c_ulong {
        (1 << 30) | ((size as c_ulong) << 16) | ((SPI_IOC_MAGIC as c_ulong) << 8) | nr as c_ulong
    }

    pub const SPI_IOC_MAGIC: u8 = b'k';

    pub const SPI_IOC_WR_MODE: c_ulong = iow(1, std::mem::size_of::<u8>());
    pub const SPI_IOC_WR_MAX_SPEED_HZ: c_ulong = iow(4, std::mem::size_of::<u32>());
}

fn check(ret: libc::c_int) -> std::io::Result<()> {
    if ret < 0 {
        Err(std::io::Error::last_os_error())
    } else {
        Ok(())
    }
}

pub(crate) fn set_mode(file: &File, mode: u8) -> std::io::Result<()> {
    // SAFETY: SPI_IOC_WR_MODE reads one byte from the pointer, which outlives the call.
    check(unsafe {
        libc::ioctl(
            file.as_raw_fd(),
            ioctls::SPI_IOC_WR_MODE as _,
            &mode as *const u8,
        )
    })
}

pub(crate) fn set_max_speed_hz(file: &File, hz: u32) -> std::io::Result<()> {
    // SAFETY: SPI_IOC_WR_MAX_SPEED_HZ reads one u32 from the pointer, which outlives the call.
    check(unsafe {
        libc::ioctl(
            file.as_raw_fd(),
            ioctls::SPI_IOC_WR_MAX_SPEED_HZ as _,
            &hz as *const u32,
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_numbers() {
        assert_eq!(0x4001_6B01, ioctls::SPI_IOC_WR_MODE);
        assert_eq!(0x4004_6B04, ioctls::SPI_IOC_WR_MAX_SPEED_HZ);
    }

    #[test]
    fn not_a_spi_device() -> anyhow::Result<()> {
        let file = tempfile::tempfile()?;
        assert!(set_mode(&file, 0).is_err());
        assert!(set_max_speed_hz(&file, 10_000_000).is_err());
        Ok(())
    }
}
