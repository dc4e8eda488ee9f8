use nuphase_core::codec::{ScalerPair, SCALER_MASK};

/// Scaler counters, addressed by scaler selector.
pub(crate) struct Scalers {
    live: Vec<ScalerPair>,
    latched: Vec<ScalerPair>,
}

impl Scalers {
    pub(crate) fn new(max_selector: u8) -> Self {
        let live = (0..=max_selector as u16)
            .map(|sel| ScalerPair {
                low: (2 * sel) & SCALER_MASK,
                hi: (2 * sel + 1) & SCALER_MASK,
            })
            .collect::<Vec<_>>();
        Self {
            latched: vec![ScalerPair::default(); live.len()],
            live,
        }
    }

    pub(crate) fn latch(&mut self) {
        self.latched.clone_from(&self.live);
    }

    pub(crate) fn clear(&mut self) {
        self.latched.fill(ScalerPair::default());
    }

    pub(crate) fn set(&mut self, selector: u8, pair: ScalerPair) {
        if let Some(p) = self.live.get_mut(selector as usize) {
            *p = ScalerPair {
                low: pair.low & SCALER_MASK,
                hi: pair.hi & SCALER_MASK,
            };
        }
    }

    pub(crate) fn read(&self, selector: u8) -> ScalerPair {
        self.latched
            .get(selector as usize)
            .copied()
            .unwrap_or_default()
    }
}
