use derive_more::Deref;
use nuphase_core::firmware::Device;

/// Raw samples of one channel over a RAM address range, in address then chunk order.
#[derive(Debug, Clone, PartialEq, Eq, Deref)]
pub struct Waveform {
    device: Device,
    channel: usize,
    #[deref]
    samples: Vec<u8>,
}

impl Waveform {
    pub(crate) const fn new(device: Device, channel: usize, samples: Vec<u8>) -> Self {
        Self {
            device,
            channel,
            samples,
        }
    }

    /// The board the samples were read from.
    #[must_use]
    pub const fn device(&self) -> Device {
        self.device
    }

    /// The channel the samples were read from.
    #[must_use]
    pub const fn channel(&self) -> usize {
        self.channel
    }

    /// The raw samples.
    #[must_use]
    pub fn samples(&self) -> &[u8] {
        &self.samples
    }
}

/// Waveforms of every channel of every attached board.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SystemEvent {
    /// Master board waveforms, one per channel.
    pub master: Vec<Waveform>,
    /// Slave board waveforms, empty in single-board mode.
    pub slave: Vec<Waveform>,
}

impl SystemEvent {
    /// Every waveform, master channels first.
    pub fn waveforms(&self) -> impl Iterator<Item = &Waveform> {
        self.master.iter().chain(self.slave.iter())
    }

    /// Number of samples per waveform.
    #[must_use]
    pub fn num_samples(&self) -> usize {
        self.master.first().map_or(0, |w| w.len())
    }
}
