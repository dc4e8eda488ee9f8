use nuphase_core::firmware::registers::{BUFFER_CLEAR_ALL, NUM_BUFFERS};

#[derive(Default)]
pub(crate) struct DataManager {
    pub(crate) flags: u8,
    pub(crate) write_buffer: usize,
    pub(crate) last_buffer: usize,
    pub(crate) last_trig_type: u8,
    pub(crate) event_count: u64,
    pub(crate) trigger_count: u64,
    pub(crate) trigger_time: u64,
    pub(crate) deadtime: u32,
}

impl DataManager {
    pub(crate) const fn is_full(&self) -> bool {
        self.flags & BUFFER_CLEAR_ALL == BUFFER_CLEAR_ALL
    }

    pub(crate) fn clear(&mut self, flags: u8) {
        self.flags &= !(flags & BUFFER_CLEAR_ALL);
    }

    pub(crate) fn set_write_buffer(&mut self, index: u8) {
        self.write_buffer = index as usize % NUM_BUFFERS;
    }

    pub(crate) fn reset_counters(&mut self) {
        self.event_count = 0;
        self.trigger_count = 0;
        self.trigger_time = 0;
    }

    /// Marks the write buffer as holding an event and returns it, or `None` if every
    /// buffer is occupied.
    pub(crate) fn trigger(&mut self, time: u64, trig_type: u8) -> Option<usize> {
        self.trigger_count += 1;
        if self.is_full() {
            self.deadtime += 1;
            return None;
        }
        let buffer = self.write_buffer;
        self.flags |= 1 << buffer;
        self.event_count += 1;
        self.trigger_time = time;
        self.last_trig_type = trig_type;
        self.last_buffer = buffer;
        self.write_buffer = (1..=NUM_BUFFERS)
            .map(|i| (buffer + i) % NUM_BUFFERS)
            .find(|&b| self.flags & (1 << b) == 0)
            .unwrap_or((buffer + 1) % NUM_BUFFERS);
        Some(buffer)
    }

    pub(crate) fn status(&self) -> u32 {
        (self.last_trig_type as u32 & 0x03) << 16
            | (self.write_buffer as u32) << 12
            | (self.is_full() as u32) << 8
            | self.flags as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fills_every_buffer() {
        let mut dm = DataManager::default();
        assert_eq!(Some(0), dm.trigger(10, 1));
        assert_eq!(Some(1), dm.trigger(20, 1));
        assert_eq!(Some(2), dm.trigger(30, 1));
        assert_eq!(Some(3), dm.trigger(40, 1));
        assert!(dm.is_full());
        assert_eq!(None, dm.trigger(50, 1));
        assert_eq!(4, dm.event_count);
        assert_eq!(5, dm.trigger_count);
        assert_eq!(1, dm.deadtime);
        assert_eq!(40, dm.trigger_time);
    }

    #[test]
    fn skips_occupied_buffers() {
        let mut dm = DataManager::default();
        dm.trigger(0, 1);
        dm.trigger(0, 1);
        dm.clear(0b0001);
        dm.set_write_buffer(3);
        assert_eq!(Some(3), dm.trigger(0, 1));
        assert_eq!(0, dm.write_buffer);
    }

    #[test]
    fn status() {
        let mut dm = DataManager::default();
        assert_eq!(0, dm.status());
        (0..4).for_each(|_| {
            dm.trigger(0, 1);
        });
        assert_eq!(0x01_01_0F, dm.status());
    }
}
