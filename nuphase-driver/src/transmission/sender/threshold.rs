use nuphase_core::{
    codec::{self, THRESHOLD_MASK},
    firmware::Device,
    link::Link,
};

use super::Sender;
use crate::error::NuphaseDriverError;

impl<L: Link> Sender<'_, L> {
    /// Sets the trigger threshold of `beam` on `device`.
    pub fn set_threshold(
        &mut self,
        device: Device,
        beam: usize,
        threshold: u32,
    ) -> Result<(), NuphaseDriverError> {
        self.check_device(device)?;
        let address = self.threshold_address(beam)?;
        if threshold > THRESHOLD_MASK {
            return Err(NuphaseDriverError::ThresholdOutOfRange(threshold));
        }
        self.send(device, codec::encode_threshold(address, threshold))
    }

    /// Reads the trigger threshold of `beam` on `device`.
    pub fn read_threshold(&mut self, device: Device, beam: usize) -> Result<u32, NuphaseDriverError> {
        let address = self.threshold_address(beam)?;
        self.read_register(device, address as usize)
            .map(|f| codec::decode_threshold(&f))
    }

    /// Reads the trigger thresholds of every beam on `device`.
    pub fn read_thresholds(&mut self, device: Device) -> Result<Vec<u32>, NuphaseDriverError> {
        (0..self.topology.variant.num_beams)
            .map(|beam| self.read_threshold(device, beam))
            .collect()
    }
}

impl<L: Link> Sender<'_, L> {
    fn threshold_address(&self, beam: usize) -> Result<u8, NuphaseDriverError> {
        let variant = self.topology.variant;
        variant
            .threshold_address(beam)
            .ok_or(NuphaseDriverError::BeamOutOfRange(beam, variant.num_beams))
    }
}
