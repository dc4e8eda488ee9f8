use nuphase_core::firmware::ScalerWindow;

/// Scaler counts of one counting window.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WindowScalers {
    /// Total trigger count.
    pub total: u16,
    /// Per-beam trigger counts.
    pub beams: Vec<u16>,
}

/// A full scaler scan of one board.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ScalerReadout {
    /// Free-running counts.
    pub instantaneous: WindowScalers,
    /// Counts over the last second.
    pub one_second: WindowScalers,
    /// Counts while the external gate was open.
    pub gated: WindowScalers,
    /// Timestamp latched on the last external trigger.
    pub latched_timestamp: u64,
}

impl ScalerReadout {
    /// The counts of `window`.
    #[must_use]
    pub const fn window(&self, window: ScalerWindow) -> &WindowScalers {
        match window {
            ScalerWindow::Instantaneous => &self.instantaneous,
            ScalerWindow::OneSecond => &self.one_second,
            ScalerWindow::Gated => &self.gated,
        }
    }

    pub(crate) fn window_mut(&mut self, window: ScalerWindow) -> &mut WindowScalers {
        match window {
            ScalerWindow::Instantaneous => &mut self.instantaneous,
            ScalerWindow::OneSecond => &mut self.one_second,
            ScalerWindow::Gated => &mut self.gated,
        }
    }
}
