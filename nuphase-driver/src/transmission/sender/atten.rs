use itertools::Itertools;
use nuphase_core::{
    codec::{self, ATTENUATORS_PER_REGISTER},
    firmware::{registers::*, Device},
    link::{Frame, Link},
};

use super::Sender;
use crate::error::NuphaseDriverError;

impl<L: Link> Sender<'_, L> {
    /// Sets the attenuators of every attached channel, master channels first.
    pub fn set_attenuators(&mut self, values: &[u8]) -> Result<(), NuphaseDriverError> {
        let topology = self.topology;
        let expect = topology.variant.num_attenuators(topology.dual_board);
        if values.len() != expect {
            return Err(NuphaseDriverError::AttenuatorCountOutOfRange(
                values.len(),
                expect,
            ));
        }
        tracing::debug!("Set attenuators: [{}]", values.iter().format(", "));

        let (master, slave) = values.split_at(topology.variant.master_channels);
        topology.devices().try_for_each(|dev| {
            let values = match dev {
                Device::Master => master,
                Device::Slave => slave,
            };
            codec::encode_attenuators(values)
                .into_iter()
                .try_for_each(|frame| self.send(dev, frame))?;
            self.send(dev, Frame::command(ATTENUATOR_APPLY, 0x00))
        })
    }

    /// Reads the attenuators of every attached channel, master channels first.
    pub fn attenuators(&mut self) -> Result<Vec<u8>, NuphaseDriverError> {
        let topology = self.topology;
        topology
            .devices()
            .map(|dev| {
                let channels = topology.variant.channels(dev);
                let registers = channels.div_ceil(ATTENUATORS_PER_REGISTER) as u8;
                let frames =
                    self.read_registers(dev, (0..registers).map(|i| ATTENUATOR_0 + i))?;
                Ok::<_, NuphaseDriverError>(codec::decode_attenuators(&frames, channels))
            })
            .flatten_ok()
            .collect()
    }
}
