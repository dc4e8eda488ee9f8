use derive_more::Display;

use super::Device;

/// Byte order of the board identifier registers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DnaByteOrder {
    /// Register bytes 0..3 are taken as they arrive.
    Forward,
    /// Register bytes are reversed before bytes 0..3 are taken.
    Reversed,
}

/// Counting window of a scaler.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display)]
pub enum ScalerWindow {
    /// Free-running counts, refreshed at about 0.1 Hz.
    #[display("instantaneous")]
    Instantaneous,
    /// Counts accumulated over one second.
    #[display("one-second")]
    OneSecond,
    /// Counts accumulated only while the external gate is open.
    #[display("gated")]
    Gated,
}

impl ScalerWindow {
    /// Every window, in the order the scaler scan reads them.
    pub const ALL: [ScalerWindow; 3] = [
        ScalerWindow::Instantaneous,
        ScalerWindow::OneSecond,
        ScalerWindow::Gated,
    ];

    /// The position of the window's selector block in units of the variant stride.
    #[must_use]
    const fn block(self) -> u8 {
        match self {
            ScalerWindow::Instantaneous => 0,
            ScalerWindow::Gated => 1,
            ScalerWindow::OneSecond => 2,
        }
    }
}

/// Static description of a board revision.
///
/// Revisions differ only in the values of this table; protocol logic never branches
/// on the revision itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display)]
#[display("{}", name)]
pub struct BoardVariant {
    /// Human readable name.
    pub name: &'static str,
    /// Analog channels on the master board.
    pub master_channels: usize,
    /// Analog channels on the slave board.
    pub slave_channels: usize,
    /// Number of phased-array beams.
    pub num_beams: usize,
    /// Byte order of the DNA registers.
    pub dna_byte_order: DnaByteOrder,
    /// Exclusive upper bound of the register address space.
    pub max_register_address: usize,
    /// Address of the threshold register of beam 0.
    pub threshold_base: u8,
    /// Distance between the selector blocks of two scaler windows.
    pub scaler_window_stride: u8,
    /// Number of selectors in one scaler window.
    pub scaler_selectors_per_window: u8,
    /// Largest accepted scaler selector.
    pub max_scaler_selector: u8,
    /// Mask applied to RAM addresses before they are written.
    pub ram_address_mask: u8,
}

impl BoardVariant {
    /// 24-beam revision with a 4-channel slave and a 256-register map.
    pub const BEACON: Self = Self {
        name: "beacon",
        master_channels: 8,
        slave_channels: 4,
        num_beams: 24,
        dna_byte_order: DnaByteOrder::Reversed,
        max_register_address: 256,
        threshold_base: 0x80,
        scaler_window_stride: 8,
        scaler_selectors_per_window: 8,
        max_scaler_selector: 38,
        ram_address_mask: 0xFF,
    };

    /// 16-beam revision with an 8-channel slave and a 128-register map.
    pub const NUPHASE: Self = Self {
        name: "nuphase",
        master_channels: 8,
        slave_channels: 8,
        num_beams: 16,
        dna_byte_order: DnaByteOrder::Forward,
        max_register_address: 128,
        threshold_base: 0x56,
        scaler_window_stride: 16,
        scaler_selectors_per_window: 9,
        max_scaler_selector: 47,
        ram_address_mask: 0x7F,
    };

    /// Every known variant.
    pub const ALL: [BoardVariant; 2] = [Self::BEACON, Self::NUPHASE];

    /// Looks a variant up by name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|v| v.name.eq_ignore_ascii_case(name))
    }

    /// Number of analog channels on `device`.
    #[must_use]
    pub const fn channels(&self, device: Device) -> usize {
        match device {
            Device::Master => self.master_channels,
            Device::Slave => self.slave_channels,
        }
    }

    /// Checks if `address` can be passed to a register read.
    #[must_use]
    pub const fn is_valid_register(&self, address: usize) -> bool {
        address >= 1 && address < self.max_register_address
    }

    /// Address of the threshold register of `beam`, if the beam exists.
    #[must_use]
    pub const fn threshold_address(&self, beam: usize) -> Option<u8> {
        if beam < self.num_beams {
            Some(self.threshold_base + beam as u8)
        } else {
            None
        }
    }

    /// Scaler selector of the `index`-th slot of `window`.
    #[must_use]
    pub const fn scaler_selector(&self, window: ScalerWindow, index: u8) -> u8 {
        window.block() * self.scaler_window_stride + index
    }

    /// Number of beam counts a full scan of one window produces.
    ///
    /// Selector 0 carries the window total and one beam, every other selector two beams.
    #[must_use]
    pub const fn scaler_beams_per_window(&self) -> usize {
        2 * self.scaler_selectors_per_window as usize - 1
    }

    /// Number of attenuator values for the given board combination.
    #[must_use]
    pub const fn num_attenuators(&self, dual_board: bool) -> usize {
        if dual_board {
            self.master_channels + self.slave_channels
        } else {
            self.master_channels
        }
    }
}

impl Default for BoardVariant {
    fn default() -> Self {
        Self::BEACON
    }
}
