mod data_manager;
mod memory;
mod scaler;

use nuphase_core::{
    codec::{self, ScalerPair},
    firmware::{registers::*, BoardVariant, Device, DnaByteOrder},
    link::Frame,
};

use crate::params::*;
use data_manager::DataManager;
use memory::Memory;
use scaler::Scalers;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ReadSelect {
    Register(u8),
    Chunk(u8),
}

/// Emulates the register interface of one board.
///
/// Frames written while the sync line is asserted that the firmware acts on
/// synchronously are held and applied when the sync line is released.
pub struct BoardEmulator {
    device: Device,
    variant: BoardVariant,
    registers: [u32; 256],
    read_select: ReadSelect,
    sync: bool,
    held: Vec<Frame>,
    data_manager: DataManager,
    memory: Memory,
    scalers: Scalers,
    dna: u64,
    latched_timestamp: u64,
    attenuators: Vec<u8>,
    adc_resets: usize,
    dclk_resets: usize,
    clock: u64,
    broken: bool,
}

impl BoardEmulator {
    /// Creates a powered-up board with event 0 already captured in every buffer.
    #[must_use]
    pub fn new(device: Device, variant: BoardVariant) -> Self {
        let num_channels = variant.channels(device);
        Self {
            device,
            variant,
            registers: [0; 256],
            read_select: ReadSelect::Register(0),
            sync: false,
            held: Vec::new(),
            data_manager: DataManager::default(),
            memory: Memory::new(num_channels),
            scalers: Scalers::new(variant.max_scaler_selector),
            dna: match device {
                Device::Master => DNA_MASTER,
                Device::Slave => DNA_SLAVE,
            },
            latched_timestamp: 0,
            attenuators: vec![0; num_channels],
            adc_resets: 0,
            dclk_resets: 0,
            clock: 0,
            broken: false,
        }
    }

    /// Makes the board ignore writes and answer reads with zeros.
    pub fn break_down(&mut self) {
        self.broken = true;
    }

    /// Undoes [`Self::break_down`].
    pub fn repair(&mut self) {
        self.broken = false;
    }

    /// The board identity.
    #[must_use]
    pub const fn device(&self) -> Device {
        self.device
    }

    /// The board revision.
    #[must_use]
    pub const fn variant(&self) -> &BoardVariant {
        &self.variant
    }

    /// Number of transactions seen so far.
    #[must_use]
    pub const fn clock(&self) -> u64 {
        self.clock
    }

    /// Whether the sync line is asserted.
    #[must_use]
    pub const fn is_sync_asserted(&self) -> bool {
        self.sync
    }

    /// Frames held until the sync line is released.
    #[must_use]
    pub fn held(&self) -> &[Frame] {
        &self.held
    }

    /// Board identifier.
    #[must_use]
    pub const fn dna(&self) -> u64 {
        self.dna
    }

    /// Sets the board identifier.
    ///
    /// Forward-order boards echo the register address in bytes 0, 3 and 6, so only
    /// the other bytes are read back.
    pub fn set_dna(&mut self, dna: u64) {
        self.dna = dna;
    }

    /// Raw content of a configuration register.
    #[must_use]
    pub const fn register(&self, address: u8) -> u32 {
        self.registers[address as usize]
    }

    /// Overwrites a configuration register.
    pub fn set_register(&mut self, address: u8, value: u32) {
        self.registers[address as usize] = value & 0x00FF_FFFF;
    }

    /// Attenuator values currently applied to the channels.
    #[must_use]
    pub fn attenuators(&self) -> &[u8] {
        &self.attenuators
    }

    /// Number of ADC resets applied.
    #[must_use]
    pub const fn adc_resets(&self) -> usize {
        self.adc_resets
    }

    /// Number of DCLK resets applied.
    #[must_use]
    pub const fn dclk_resets(&self) -> usize {
        self.dclk_resets
    }

    /// One bit per buffer holding an unread event.
    #[must_use]
    pub const fn buffer_flags(&self) -> u8 {
        self.data_manager.flags
    }

    /// Buffer the next event is written to.
    #[must_use]
    pub const fn write_buffer(&self) -> usize {
        self.data_manager.write_buffer
    }

    /// Event counter.
    #[must_use]
    pub const fn event_count(&self) -> u64 {
        self.data_manager.event_count
    }

    /// Buffer selected for readout.
    #[must_use]
    pub const fn readout_buffer(&self) -> usize {
        self.registers[READOUT_BUFFER as usize] as usize % NUM_BUFFERS
    }

    /// Samples of `channel` stored in `buffer`.
    #[must_use]
    pub fn ram(&self, buffer: usize, channel: usize) -> &[u8] {
        self.memory.channel(buffer, channel)
    }

    /// Mutable samples of `channel` stored in `buffer`.
    pub fn ram_mut(&mut self, buffer: usize, channel: usize) -> &mut [u8] {
        self.memory.channel_mut(buffer, channel)
    }

    /// Sets the live counts behind `selector`; they become visible on the next latch.
    pub fn set_scaler(&mut self, selector: u8, pair: ScalerPair) {
        self.scalers.set(selector, pair);
    }

    /// Sets the timestamp latched on the external trigger input.
    pub fn set_latched_timestamp(&mut self, timestamp: u64) {
        self.latched_timestamp = timestamp & 0xFFFF_FFFF_FFFF;
    }

    /// Drives the sync line. Held frames are applied on the falling edge.
    pub fn set_sync(&mut self, asserted: bool) {
        let release = self.sync && !asserted;
        self.sync = asserted;
        if release {
            std::mem::take(&mut self.held)
                .iter()
                .for_each(|frame| self.apply(frame));
        }
    }

    /// Writes one frame to the board.
    pub fn send(&mut self, frame: &Frame) {
        if self.broken {
            return;
        }
        self.clock += 1;
        match frame.address() {
            SET_READ_REG => self.read_select = ReadSelect::Register(frame.payload()[2]),
            addr if (RAM_CHUNK_0..RAM_CHUNK_0 + RAM_CHUNKS).contains(&addr) => {
                self.read_select = ReadSelect::Chunk(addr - RAM_CHUNK_0)
            }
            SYNC => self.set_sync(frame.payload()[2] & SYNC_ASSERT != 0),
            addr if self.sync && Self::is_synchronous(addr) => self.held.push(*frame),
            _ => self.apply(frame),
        }
    }

    /// Reads one frame from the board, answering the last read selection.
    #[must_use]
    pub fn receive(&mut self) -> Frame {
        if self.broken {
            return Frame::default();
        }
        self.clock += 1;
        match self.read_select {
            ReadSelect::Register(addr) => Frame::with_value(addr, self.read_register(addr)),
            ReadSelect::Chunk(chunk) => {
                let channel = self.registers[CHANNEL as usize].trailing_zeros() as usize;
                let address = (self.registers[RAM_ADDRESS as usize]
                    & self.variant.ram_address_mask as u32) as usize;
                self.memory
                    .line(self.readout_buffer(), channel, address)
                    .and_then(|line| Frame::from_slice(&line[chunk as usize * Frame::LEN..][..Frame::LEN]))
                    .unwrap_or_default()
            }
        }
    }
}

impl BoardEmulator {
    const fn is_synchronous(address: u8) -> bool {
        matches!(
            address,
            RESET
                | DCLK_RESET
                | BUFFER
                | EVENT_COUNTER_RESET
                | FORCE_TRIGGER
                | EXT_TRIG_CONFIG
                | TRIGGER_TO_DATA_MANAGER
        )
    }

    fn apply(&mut self, frame: &Frame) {
        let [_, b2, b3] = frame.payload();
        match frame.address() {
            RESET if b3 & RESET_BOARD != 0 => self.reset(),
            RESET if b3 & RESET_ADC != 0 => self.adc_resets += 1,
            DCLK_RESET => self.dclk_resets += 1,
            BUFFER if b2 == BUFFER_SET_INDEX => self.data_manager.set_write_buffer(b3),
            BUFFER => self.data_manager.clear(b3),
            EVENT_COUNTER_RESET => self.data_manager.reset_counters(),
            FORCE_TRIGGER => self.trigger(),
            UPDATE_SCALERS => self.scalers.latch(),
            ATTENUATOR_APPLY => self.apply_attenuators(),
            addr => self.registers[addr as usize] = frame.value(),
        }
    }

    fn reset(&mut self) {
        self.registers = [0; 256];
        self.held.clear();
        self.data_manager = DataManager::default();
        self.scalers.clear();
    }

    fn trigger(&mut self) {
        if let Some(buffer) = self.data_manager.trigger(self.clock, TRIG_TYPE_SOFTWARE) {
            self.memory.capture(buffer, self.data_manager.event_count);
        }
    }

    fn apply_attenuators(&mut self) {
        let frames = (0..)
            .map(|i| ATTENUATOR_0 + i)
            .take(self.attenuators.len().div_ceil(codec::ATTENUATORS_PER_REGISTER))
            .map(|addr| Frame::with_value(addr, self.registers[addr as usize]))
            .collect::<Vec<_>>();
        self.attenuators = codec::decode_attenuators(&frames, self.attenuators.len());
    }

    fn dna_register(&self, address: u8) -> u32 {
        let d = self.dna.to_le_bytes();
        let payload = match self.variant.dna_byte_order {
            DnaByteOrder::Reversed => match address {
                DNA_LOW => [d[2], d[1], d[0]],
                DNA_MID => [d[5], d[4], d[3]],
                _ => [0x00, d[7], d[6]],
            },
            // byte 0 of the response is the address echo
            DnaByteOrder::Forward => match address {
                DNA_LOW => [d[1], d[2], 0x00],
                DNA_MID => [d[4], d[5], 0x00],
                _ => [d[7], 0x00, 0x00],
            },
        };
        Frame::new(address, payload).value()
    }

    fn trigger_info(&self) -> u32 {
        let dm = &self.data_manager;
        let trig_type = dm.last_trig_type as u32;
        (dm.last_buffer as u32 & 0x03) << 22 | (trig_type >> 1 & 0x01) << 16 | (trig_type & 0x01) << 15
    }

    fn read_register(&self, address: u8) -> u32 {
        const LO: u64 = 0x00FF_FFFF;
        let dm = &self.data_manager;
        match address {
            FIRMWARE_VER => {
                (FIRMWARE_TAG as u32) << 16
                    | (FIRMWARE_VERSION_MAJOR as u32) << 4
                    | FIRMWARE_VERSION_MINOR as u32
            }
            FIRMWARE_DATE => {
                (FIRMWARE_YEAR as u32) << 12 | (FIRMWARE_MONTH as u32) << 8 | FIRMWARE_DAY as u32
            }
            SCALER_READ => {
                let pair = self
                    .scalers
                    .read(self.registers[SCALER_SELECT as usize] as u8);
                (pair.hi as u32) << 12 | pair.low as u32
            }
            DNA_LOW | DNA_MID | DNA_HIGH => self.dna_register(address),
            DATA_MANAGER_STATUS => dm.status(),
            STATUS => ((dm.flags != 0) as u32) << 4,
            EVENT_COUNTER_LO => (dm.event_count & LO) as u32,
            EVENT_COUNTER_HI => (dm.event_count >> 24 & LO) as u32,
            TRIGGER_COUNTER_LO => (dm.trigger_count & LO) as u32,
            TRIGGER_COUNTER_HI => (dm.trigger_count >> 24 & LO) as u32,
            TRIGGER_TIME_LO => (dm.trigger_time & LO) as u32,
            TRIGGER_TIME_HI => (dm.trigger_time >> 24 & LO) as u32,
            DEADTIME => dm.deadtime & LO as u32,
            TRIGGER_INFO => self.trigger_info(),
            EVENT_SCALER => {
                let pair = self.scalers.read(0);
                (pair.hi as u32) << 12 | pair.low as u32
            }
            EXT_TRIG_TIMESTAMP_LO => (self.latched_timestamp & LO) as u32,
            EXT_TRIG_TIMESTAMP_HI => (self.latched_timestamp >> 24 & LO) as u32,
            addr => self.registers[addr as usize],
        }
    }
}
