#![warn(missing_docs)]

//! A [`Link`] to nuphase boards over the Linux spidev interface.
//!
//! Each board sits on its own SPI bus. Every transaction is a half-duplex transfer of
//! exactly 4 bytes.

mod error;
mod gpio;
mod ioctl;

use std::{
    fs::File,
    io::{Read, Write},
    path::{Path, PathBuf},
};

use nuphase_core::{
    firmware::{Device, Topology},
    link::{Frame, Link, LinkError},
};

pub use error::SpidevError;

/// The option of [`Spidev`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpidevOption {
    /// Device file of the master board bus.
    pub master_path: PathBuf,
    /// Device file of the slave board bus.
    pub slave_path: PathBuf,
    /// Maximum SPI clock speed in Hz.
    pub clock_hz: u32,
    /// SPI mode.
    pub mode: u8,
    /// Sysfs GPIO that enables the bus drivers when driven low.
    pub bus_enable_gpio: Option<u32>,
}

impl Default for SpidevOption {
    fn default() -> Self {
        Self {
            master_path: PathBuf::from("/dev/spidev1.0"),
            slave_path: PathBuf::from("/dev/spidev2.0"),
            clock_hz: 10_000_000,
            mode: 0,
            bus_enable_gpio: Some(60),
        }
    }
}

impl SpidevOption {
    /// Device file of the bus `device` sits on.
    #[must_use]
    pub fn path(&self, device: Device) -> &Path {
        match device {
            Device::Master => &self.master_path,
            Device::Slave => &self.slave_path,
        }
    }
}

/// A [`Link`] over spidev device files.
pub struct Spidev {
    option: SpidevOption,
    buses: Vec<File>,
}

impl Spidev {
    /// Creates a new [`Spidev`].
    #[must_use]
    pub const fn new(option: SpidevOption) -> Self {
        Self {
            option,
            buses: Vec::new(),
        }
    }

    /// The option this link was created with.
    #[must_use]
    pub const fn option(&self) -> &SpidevOption {
        &self.option
    }
}

impl Spidev {
    fn open_bus(&self, device: Device) -> Result<File, SpidevError> {
        let path = self.option.path(device);
        let file = File::options()
            .read(true)
            .write(true)
            .open(path)
            .map_err(|e| SpidevError::Open(path.to_path_buf(), e))?;
        ioctl::set_mode(&file, self.option.mode)
            .map_err(|e| SpidevError::Mode(path.to_path_buf(), self.option.mode, e))?;
        if let Err(e) = ioctl::set_max_speed_hz(&file, self.option.clock_hz) {
            tracing::warn!(
                "{}: {} Hz is not supported ({}), keeping the current clock",
                path.display(),
                self.option.clock_hz,
                e
            );
        }
        tracing::info!("{}: opened {}", device, path.display());
        Ok(file)
    }

    fn bus(&mut self, bus: usize) -> Result<&mut File, SpidevError> {
        self.buses.get_mut(bus).ok_or(SpidevError::NoBus(bus))
    }
}

impl Link for Spidev {
    fn open(&mut self, topology: &Topology) -> Result<(), LinkError> {
        if let Some(gpio) = self.option.bus_enable_gpio {
            gpio::drive_low(Path::new(gpio::SYSFS_GPIO), gpio)
                .map_err(|e| SpidevError::Gpio(gpio, e))?;
        }
        self.buses = topology
            .devices()
            .map(|dev| self.open_bus(dev))
            .collect::<Result<_, _>>()?;
        Ok(())
    }

    fn close(&mut self) -> Result<(), LinkError> {
        tracing::info!("Closing {} spidev bus(es)", self.buses.len());
        self.buses.clear();
        Ok(())
    }

    fn send(&mut self, bus: usize, tx: &Frame) -> Result<(), LinkError> {
        self.bus(bus)?
            .write_all(&tx.to_bytes())
            .map_err(SpidevError::from)?;
        Ok(())
    }

    fn receive(&mut self, bus: usize) -> Result<Frame, LinkError> {
        let mut buf = [0u8; Frame::LEN];
        self.bus(bus)?
            .read_exact(&mut buf)
            .map_err(SpidevError::from)?;
        Ok(Frame::from_bytes(buf))
    }

    fn is_open(&self) -> bool {
        !self.buses.is_empty()
    }
}
