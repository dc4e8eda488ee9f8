//! Register map shared by every board revision.
//!
//! Status registers are read-only and are accessed with the two-phase read
//! (`SET_READ_REG` then a plain read). Command registers act on write; writing them
//! again repeats the pulse. Configuration registers hold their payload and read back
//! what was last written.

/// Firmware version (read).
pub const FIRMWARE_VER: u8 = 0x01;
/// Firmware build date (read).
pub const FIRMWARE_DATE: u8 = 0x02;
/// Currently selected scaler pair (read).
pub const SCALER_READ: u8 = 0x03;
/// Board identifier, lower 3 bytes (read).
pub const DNA_LOW: u8 = 0x04;
/// Board identifier, middle 3 bytes (read).
pub const DNA_MID: u8 = 0x05;
/// Board identifier, upper 2 bytes (read).
pub const DNA_HIGH: u8 = 0x06;
/// Data manager status (read).
pub const DATA_MANAGER_STATUS: u8 = 0x07;
/// General status, bit 4 of the last byte is the data-valid flag (read).
pub const STATUS: u8 = 0x08;
/// Event counter, lower word (read).
pub const EVENT_COUNTER_LO: u8 = 0x0A;
/// Event counter, upper word (read).
pub const EVENT_COUNTER_HI: u8 = 0x0B;
/// Trigger counter, lower word (read).
pub const TRIGGER_COUNTER_LO: u8 = 0x0C;
/// Trigger counter, upper word (read).
pub const TRIGGER_COUNTER_HI: u8 = 0x0D;
/// Trigger timestamp, lower word (read).
pub const TRIGGER_TIME_LO: u8 = 0x0E;
/// Trigger timestamp, upper word (read).
pub const TRIGGER_TIME_HI: u8 = 0x0F;
/// Accumulated deadtime (read).
pub const DEADTIME: u8 = 0x10;
/// Last beam, trigger type and buffer number of the last event (read).
pub const TRIGGER_INFO: u8 = 0x11;
/// Scaler pair latched with the last event (read).
pub const EVENT_SCALER: u8 = 0x13;
/// First of the four RAM chunk select registers (command).
pub const RAM_CHUNK_0: u8 = 0x23;
/// Number of RAM chunks per RAM line.
pub const RAM_CHUNKS: u8 = 4;
/// Sync line between master and slave (command, master only).
pub const SYNC: u8 = 0x27;
/// Latches the free-running scaler counters (command).
pub const UPDATE_SCALERS: u8 = 0x28;
/// Scaler output selector (config).
pub const SCALER_SELECT: u8 = 0x29;
/// Calibration pulser / RF switch (config).
pub const CAL_PULSE: u8 = 0x2A;
/// External trigger latched timestamp, lower 24 bits (read).
pub const EXT_TRIG_TIMESTAMP_LO: u8 = 0x2C;
/// External trigger latched timestamp, upper 24 bits (read).
pub const EXT_TRIG_TIMESTAMP_HI: u8 = 0x2D;
/// First of the packed attenuator registers (config).
pub const ATTENUATOR_0: u8 = 0x32;
/// Applies the attenuator registers (command).
pub const ATTENUATOR_APPLY: u8 = 0x35;
/// DCLK reset (command).
pub const DCLK_RESET: u8 = 0x37;
/// Software trigger (command).
pub const FORCE_TRIGGER: u8 = 0x40;
/// One-hot readout channel select (config).
pub const CHANNEL: u8 = 0x41;
/// RAM address of the readout line (config).
pub const RAM_ADDRESS: u8 = 0x45;
/// External trigger input configuration (config).
pub const EXT_TRIG_CONFIG: u8 = 0x4B;
/// Pre-trigger window (config).
pub const PRE_TRIGGER: u8 = 0x4C;
/// Buffer management: clear flags or set the write index (command).
pub const BUFFER: u8 = 0x4D;
/// Active readout buffer (config).
pub const READOUT_BUFFER: u8 = 0x4E;
/// Phased trigger enable, bit 0 of the last byte (config).
pub const TRIGGER_ENABLE: u8 = 0x52;
/// Phased trigger routing to the data manager (config).
pub const TRIGGER_TO_DATA_MANAGER: u8 = 0x54;
/// Trigger verification mode (config).
pub const TRIGGER_VERIFICATION: u8 = 0x55;
/// Picks the register returned by the next read (command).
pub const SET_READ_REG: u8 = 0x6D;
/// Resets the event counter and the timestamp (command).
pub const EVENT_COUNTER_RESET: u8 = 0x7E;
/// Board and ADC reset (command).
pub const RESET: u8 = 0x7F;

/// Payload of [`SYNC`] asserting the sync line.
pub const SYNC_ASSERT: u8 = 0x01;
/// Payload of [`SYNC`] releasing the sync line.
pub const SYNC_RELEASE: u8 = 0x00;
/// Payload of [`RESET`] resetting the whole board.
pub const RESET_BOARD: u8 = 0x01;
/// Payload of [`RESET`] resetting the ADCs.
pub const RESET_ADC: u8 = 0x04;
/// Payload of [`CAL_PULSE`] enabling the pulser.
pub const CAL_PULSE_ON: u8 = 0x03;
/// Second payload byte of [`BUFFER`] selecting the write-index operation.
pub const BUFFER_SET_INDEX: u8 = 0x01;
/// Buffer clear flags covering every buffer.
pub const BUFFER_CLEAR_ALL: u8 = 0x0F;
/// Number of event buffers.
pub const NUM_BUFFERS: usize = 4;
/// Default pre-trigger window.
pub const DEFAULT_PRE_TRIGGER: u8 = 6;
/// Number of RAM lines per channel.
pub const RAM_DEPTH: usize = 128;
/// Bytes returned by one RAM line (four chunks of four bytes).
pub const RAM_LINE_BYTES: usize = 16;
