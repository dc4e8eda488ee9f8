use nuphase_core::{
    firmware::Topology,
    link::{Frame, Link, LinkError},
};
use nuphase_firmware_emulator::SystemEmulator;

/// A [`Link`] to emulated boards that records nothing.
#[derive(Default)]
pub struct Nop {
    is_open: bool,
    system: Option<SystemEmulator>,
}

impl Nop {
    /// Creates a new [`Nop`].
    #[must_use]
    pub const fn new() -> Self {
        Self {
            is_open: false,
            system: None,
        }
    }

    fn system(&mut self) -> Result<&mut SystemEmulator, LinkError> {
        self.system.as_mut().ok_or_else(LinkError::closed)
    }
}

impl Link for Nop {
    fn open(&mut self, topology: &Topology) -> Result<(), LinkError> {
        self.system = Some(SystemEmulator::new(topology));
        self.is_open = true;
        Ok(())
    }

    fn close(&mut self) -> Result<(), LinkError> {
        self.is_open = false;
        Ok(())
    }

    fn send(&mut self, bus: usize, tx: &Frame) -> Result<(), LinkError> {
        self.system()?.send(bus, tx);
        Ok(())
    }

    fn receive(&mut self, bus: usize) -> Result<Frame, LinkError> {
        Ok(self.system()?.receive(bus).unwrap_or_default())
    }

    fn is_open(&self) -> bool {
        self.is_open
    }
}
