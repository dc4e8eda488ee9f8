/// External trigger input configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtTriggerConfig {
    /// Accept triggers on the external input.
    pub enable: bool,
    /// Stretch the external trigger with the gate generator.
    pub use_gate: bool,
    /// Gate generator length in clock cycles.
    pub gate: u16,
}

impl Default for ExtTriggerConfig {
    fn default() -> Self {
        Self {
            enable: false,
            use_gate: false,
            gate: 0xFF,
        }
    }
}
