use nuphase_core::{
    firmware::{Device, Topology},
    link::{Frame, Link, LinkError},
};
use nuphase_firmware_emulator::{BoardEmulator, SystemEmulator};

/// One transaction recorded by [`Audit`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transaction {
    Send(Device, Frame),
    Receive(Device, Frame),
}

#[derive(Default, Clone, Copy)]
pub struct AuditOption {
    /// Fail every transaction from the start.
    pub broken: bool,
    /// Fail every transaction after this many have succeeded.
    pub fail_after: Option<usize>,
}

/// A [`Link`] to emulated boards recording every transaction.
pub struct Audit {
    option: AuditOption,
    is_open: bool,
    system: SystemEmulator,
    trace: Vec<Transaction>,
    broken: bool,
    fail_after: Option<usize>,
}

impl std::ops::Deref for Audit {
    type Target = [BoardEmulator];

    fn deref(&self) -> &Self::Target {
        &self.system
    }
}

impl std::ops::DerefMut for Audit {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.system
    }
}

impl Audit {
    pub fn new(option: AuditOption) -> Self {
        Self {
            option,
            is_open: false,
            system: SystemEmulator::new(&Topology::default()),
            trace: Vec::new(),
            broken: false,
            fail_after: None,
        }
    }

    pub fn break_down(&mut self) {
        self.broken = true;
    }

    pub fn repair(&mut self) {
        self.broken = false;
        self.fail_after = None;
    }

    /// Lets `n` more transactions succeed, then fails every later one.
    pub fn fail_after(&mut self, n: usize) {
        self.fail_after = Some(n);
    }

    pub fn trace(&self) -> &[Transaction] {
        &self.trace
    }

    pub fn clear_trace(&mut self) {
        self.trace.clear();
    }

    /// Every written frame, in order.
    pub fn sent(&self) -> impl Iterator<Item = (Device, Frame)> + '_ {
        self.trace.iter().filter_map(|t| match *t {
            Transaction::Send(dev, frame) => Some((dev, frame)),
            Transaction::Receive(..) => None,
        })
    }

    pub fn emulator(&self, device: Device) -> Option<&BoardEmulator> {
        self.system.board(device)
    }

    pub fn emulator_mut(&mut self, device: Device) -> Option<&mut BoardEmulator> {
        self.system.board_mut(device)
    }

    fn transact(&mut self, bus: usize) -> Result<Device, LinkError> {
        if self.broken {
            return Err(LinkError::new("broken"));
        }
        if let Some(n) = self.fail_after.as_mut() {
            if *n == 0 {
                self.broken = true;
                return Err(LinkError::new("broken"));
            }
            *n -= 1;
        }
        Device::from_idx(bus)
            .filter(|_| bus < self.system.len())
            .ok_or_else(|| LinkError::new(format!("No board on bus {}", bus)))
    }
}

impl Link for Audit {
    fn open(&mut self, topology: &Topology) -> Result<(), LinkError> {
        self.system = SystemEmulator::new(topology);
        self.trace.clear();
        self.broken = self.option.broken;
        self.fail_after = self.option.fail_after;
        self.is_open = true;
        Ok(())
    }

    fn close(&mut self) -> Result<(), LinkError> {
        self.is_open = false;
        Ok(())
    }

    fn send(&mut self, bus: usize, tx: &Frame) -> Result<(), LinkError> {
        let device = self.transact(bus)?;
        self.system.send(bus, tx);
        self.trace.push(Transaction::Send(device, *tx));
        Ok(())
    }

    fn receive(&mut self, bus: usize) -> Result<Frame, LinkError> {
        let device = self.transact(bus)?;
        let frame = self.system.receive(bus).unwrap_or_default();
        self.trace.push(Transaction::Receive(device, frame));
        Ok(frame)
    }

    fn is_open(&self) -> bool {
        self.is_open
    }
}
