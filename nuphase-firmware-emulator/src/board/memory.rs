use nuphase_core::firmware::registers::{NUM_BUFFERS, RAM_DEPTH, RAM_LINE_BYTES};

const CHANNEL_BYTES: usize = RAM_DEPTH * RAM_LINE_BYTES;

/// Waveform RAM: one region per buffer and channel.
pub(crate) struct Memory {
    num_channels: usize,
    ram: Vec<u8>,
}

impl Memory {
    pub(crate) fn new(num_channels: usize) -> Self {
        let mut memory = Self {
            num_channels,
            ram: vec![0x00; NUM_BUFFERS * num_channels * CHANNEL_BYTES],
        };
        (0..NUM_BUFFERS).for_each(|buffer| memory.capture(buffer, 0));
        memory
    }

    #[must_use]
    pub(crate) const fn sample(event: u64, channel: usize, index: usize) -> u8 {
        (index as u64 + 16 * channel as u64 + 3 * event) as u8
    }

    /// Fills `buffer` with the samples of `event`.
    pub(crate) fn capture(&mut self, buffer: usize, event: u64) {
        (0..self.num_channels).for_each(|ch| {
            self.channel_mut(buffer, ch)
                .iter_mut()
                .enumerate()
                .for_each(|(i, s)| *s = Self::sample(event, ch, i));
        });
    }

    fn offset(&self, buffer: usize, channel: usize) -> usize {
        (buffer * self.num_channels + channel) * CHANNEL_BYTES
    }

    pub(crate) fn channel(&self, buffer: usize, channel: usize) -> &[u8] {
        let offset = self.offset(buffer, channel);
        &self.ram[offset..offset + CHANNEL_BYTES]
    }

    pub(crate) fn channel_mut(&mut self, buffer: usize, channel: usize) -> &mut [u8] {
        let offset = self.offset(buffer, channel);
        &mut self.ram[offset..offset + CHANNEL_BYTES]
    }

    /// The RAM line at `address`, or `None` if `channel` does not exist.
    pub(crate) fn line(&self, buffer: usize, channel: usize, address: usize) -> Option<&[u8]> {
        (channel < self.num_channels).then(|| {
            let start = (address % RAM_DEPTH) * RAM_LINE_BYTES;
            &self.channel(buffer, channel)[start..start + RAM_LINE_BYTES]
        })
    }
}
