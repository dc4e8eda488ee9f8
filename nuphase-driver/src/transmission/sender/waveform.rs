use std::ops::Range;

use nuphase_core::{
    firmware::{registers::*, Device},
    link::{Frame, Link},
};

use super::Sender;
use crate::{
    error::NuphaseDriverError,
    firmware::{SystemEvent, Waveform},
};

impl<L: Link> Sender<'_, L> {
    /// Reads the 16 sample bytes stored at RAM line `address` of the selected channel.
    pub fn read_ram_address(
        &mut self,
        device: Device,
        address: usize,
    ) -> Result<[u8; RAM_LINE_BYTES], NuphaseDriverError> {
        self.check_device(device)?;
        self.check_ram_range(&(address..address + 1))?;
        self.ram_line(device, address)
    }

    /// Reads one channel of `device` over the RAM lines in `addresses`.
    pub fn read_channel(
        &mut self,
        device: Device,
        channel: usize,
        addresses: Range<usize>,
    ) -> Result<Waveform, NuphaseDriverError> {
        self.check_device(device)?;
        self.check_channel_range(device, &(channel..channel + 1))?;
        self.check_ram_range(&addresses)?;
        self.channel(device, channel, addresses)
    }

    /// Reads the `channels` of `device` over the RAM lines in `addresses`.
    pub fn read_board_event(
        &mut self,
        device: Device,
        channels: Range<usize>,
        addresses: Range<usize>,
    ) -> Result<Vec<Waveform>, NuphaseDriverError> {
        self.check_device(device)?;
        self.check_channel_range(device, &channels)?;
        self.check_ram_range(&addresses)?;
        tracing::debug!(
            "{}: reading channels {:?} over RAM lines {:?}",
            device,
            channels,
            addresses
        );
        channels
            .map(|ch| self.channel(device, ch, addresses.clone()))
            .collect()
    }

    /// Reads every channel of every attached board over the RAM lines in `addresses`.
    pub fn read_system_event(
        &mut self,
        addresses: Range<usize>,
    ) -> Result<SystemEvent, NuphaseDriverError> {
        self.check_ram_range(&addresses)?;
        let variant = self.topology.variant;
        let master =
            self.read_board_event(Device::Master, 0..variant.master_channels, addresses.clone())?;
        let slave = if self.topology.dual_board {
            self.read_board_event(Device::Slave, 0..variant.slave_channels, addresses)?
        } else {
            Vec::new()
        };
        Ok(SystemEvent { master, slave })
    }
}

impl<L: Link> Sender<'_, L> {
    fn check_channel_range(
        &self,
        device: Device,
        channels: &Range<usize>,
    ) -> Result<(), NuphaseDriverError> {
        let num_channels = self.topology.variant.channels(device);
        if channels.start > channels.end || channels.end > num_channels {
            return Err(NuphaseDriverError::ChannelOutOfRange(
                channels.end.max(channels.start + 1) - 1,
                num_channels,
            ));
        }
        Ok(())
    }

    fn check_ram_range(&self, addresses: &Range<usize>) -> Result<(), NuphaseDriverError> {
        if addresses.start > addresses.end || addresses.end > RAM_DEPTH {
            return Err(NuphaseDriverError::RamAddressOutOfRange(
                addresses.start,
                addresses.end,
            ));
        }
        Ok(())
    }

    fn channel(
        &mut self,
        device: Device,
        channel: usize,
        addresses: Range<usize>,
    ) -> Result<Waveform, NuphaseDriverError> {
        self.send(device, Frame::command(CHANNEL, 1 << channel))?;
        let mut samples = Vec::with_capacity(addresses.len() * RAM_LINE_BYTES);
        for address in addresses {
            samples.extend(self.ram_line(device, address)?);
        }
        Ok(Waveform::new(device, channel, samples))
    }

    fn ram_line(
        &mut self,
        device: Device,
        address: usize,
    ) -> Result<[u8; RAM_LINE_BYTES], NuphaseDriverError> {
        let mask = self.topology.variant.ram_address_mask;
        self.send(device, Frame::command(RAM_ADDRESS, address as u8 & mask))?;
        let mut line = [0; RAM_LINE_BYTES];
        for (chunk, dst) in (RAM_CHUNK_0..).zip(line.chunks_exact_mut(Frame::LEN)) {
            self.send(device, Frame::command(chunk, 0x00))?;
            dst.copy_from_slice(&self.receive(device)?.to_bytes());
        }
        Ok(line)
    }
}
