use nuphase_core::{
    codec,
    firmware::{registers::*, Device},
    link::{Frame, Link},
};

use super::Sender;
use crate::{
    error::NuphaseDriverError,
    firmware::{DataManagerStatus, ExtTriggerConfig},
};

impl<L: Link> Sender<'_, L> {
    /// Resets every board.
    pub fn reset(&mut self) -> Result<(), NuphaseDriverError> {
        tracing::info!("Resetting boards");
        self.synchronized(Frame::command(RESET, RESET_BOARD))
    }

    /// Resets the ADCs of every board.
    pub fn reset_adc(&mut self) -> Result<(), NuphaseDriverError> {
        tracing::info!("Resetting ADCs");
        self.synchronized(Frame::command(RESET, RESET_ADC))
    }

    /// Sends a DCLK reset pulse to every board.
    pub fn dclk_reset(&mut self) -> Result<(), NuphaseDriverError> {
        self.synchronized(Frame::command(DCLK_RESET, 0x01))
    }

    /// Clears the buffer flags set in `flags` on every board.
    pub fn buffer_clear(&mut self, flags: u8) -> Result<(), NuphaseDriverError> {
        self.synchronized(Frame::command(BUFFER, flags & BUFFER_CLEAR_ALL))
    }

    /// Sets the buffer the next event is written to.
    pub fn set_buffer_index(&mut self, index: usize) -> Result<(), NuphaseDriverError> {
        if index >= NUM_BUFFERS {
            return Err(NuphaseDriverError::BufferOutOfRange(index));
        }
        self.synchronized(Frame::new(BUFFER, [0x00, BUFFER_SET_INDEX, index as u8]))
    }

    /// Resets the event counter and the timestamp of every board.
    pub fn reset_event_counter(&mut self) -> Result<(), NuphaseDriverError> {
        self.synchronized(Frame::command(EVENT_COUNTER_RESET, 0x01))
    }

    /// Triggers every board.
    pub fn software_trigger(&mut self) -> Result<(), NuphaseDriverError> {
        tracing::debug!("Software trigger");
        self.synchronized(Frame::command(FORCE_TRIGGER, 0x01))
    }

    /// Configures the external trigger input of every board.
    pub fn configure_ext_trigger(
        &mut self,
        config: ExtTriggerConfig,
    ) -> Result<(), NuphaseDriverError> {
        self.synchronized(codec::encode_ext_trigger_config(
            EXT_TRIG_CONFIG,
            config.enable,
            config.use_gate,
            config.gate,
        ))
    }

    /// Routes the phased trigger to the data manager of every board.
    pub fn enable_trigger_to_data_manager(
        &mut self,
        enable: bool,
    ) -> Result<(), NuphaseDriverError> {
        self.synchronized(Frame::command(TRIGGER_TO_DATA_MANAGER, enable as u8))
    }

    /// Switches the calibration pulser, master first.
    pub fn cal_pulse(&mut self, enable: bool) -> Result<(), NuphaseDriverError> {
        let value = if enable { CAL_PULSE_ON } else { 0x00 };
        let topology = self.topology;
        topology
            .devices()
            .try_for_each(|dev| self.send(dev, Frame::command(CAL_PULSE, value)))
    }

    /// Selects the buffer to read out, master first.
    pub fn set_readout_buffer(&mut self, buffer: usize) -> Result<(), NuphaseDriverError> {
        if buffer >= NUM_BUFFERS {
            return Err(NuphaseDriverError::BufferOutOfRange(buffer));
        }
        let topology = self.topology;
        topology
            .devices()
            .try_for_each(|dev| self.send(dev, Frame::command(READOUT_BUFFER, buffer as u8)))
    }

    /// Sets the pre-trigger window, slave first.
    pub fn set_pre_trigger(&mut self, value: u8) -> Result<(), NuphaseDriverError> {
        let topology = self.topology;
        topology
            .devices()
            .rev()
            .try_for_each(|dev| self.send(dev, Frame::command(PRE_TRIGGER, value)))
    }

    /// Sets the phased trigger enable bit and the verification mode of `device`.
    ///
    /// The other bits of the trigger enable register are preserved.
    pub fn enable_phased_trigger(
        &mut self,
        device: Device,
        enable: bool,
        verification: bool,
    ) -> Result<(), NuphaseDriverError> {
        let [b1, b2, b3] = self
            .read_register(device, TRIGGER_ENABLE as usize)?
            .payload();
        let b3 = if enable { b3 | 0x01 } else { b3 & !0x01 };
        self.send(device, Frame::new(TRIGGER_ENABLE, [b1, b2, b3]))?;
        self.send(
            device,
            Frame::command(TRIGGER_VERIFICATION, verification as u8),
        )
    }

    /// Brings every board to a known idle state.
    ///
    /// Returns the data manager status of every attached board, master first.
    pub fn board_init(&mut self) -> Result<Vec<DataManagerStatus>, NuphaseDriverError> {
        tracing::info!(
            "Initializing {} board(s) ({})",
            self.topology.num_boards(),
            self.topology.variant
        );
        self.release_sync()?;
        self.configure_ext_trigger(ExtTriggerConfig::default())?;
        self.enable_trigger_to_data_manager(false)?;
        let topology = self.topology;
        topology
            .devices()
            .try_for_each(|dev| self.enable_phased_trigger(dev, false, false))?;
        self.cal_pulse(false)?;
        self.set_pre_trigger(DEFAULT_PRE_TRIGGER)?;
        self.buffer_clear(BUFFER_CLEAR_ALL)?;
        self.set_buffer_index(0)?;
        self.reset_event_counter()?;
        self.set_readout_buffer(0)?;
        let status = topology
            .devices()
            .map(|dev| self.data_manager_status(dev))
            .collect::<Result<Vec<_>, _>>()?;
        tracing::debug!("Data manager status: {:?}", status);
        Ok(status)
    }

    /// Resets the buffer manager and the event counters for a new run.
    pub fn event_init(&mut self) -> Result<(), NuphaseDriverError> {
        tracing::debug!("Initializing event buffers");
        self.release_sync()?;
        self.buffer_clear(BUFFER_CLEAR_ALL)?;
        self.set_buffer_index(0)?;
        self.reset_event_counter()?;
        self.set_readout_buffer(0)
    }

    /// Reads the buffer manager state of `device`.
    pub fn data_manager_status(
        &mut self,
        device: Device,
    ) -> Result<DataManagerStatus, NuphaseDriverError> {
        self.read_register(device, DATA_MANAGER_STATUS as usize)
            .map(|f| DataManagerStatus::from(&f))
    }

    /// Checks if `device` holds valid data.
    pub fn data_valid(&mut self, device: Device) -> Result<bool, NuphaseDriverError> {
        self.read_register(device, STATUS as usize)
            .map(|f| codec::decode_data_valid(&f))
    }
}
