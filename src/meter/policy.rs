//! Meter policy selection.
//!
//! The cloak meter and the sweep counter are two policies behind the same
//! advance/bars contract. The MODE button cycles between them at runtime;
//! switching constructs a fresh meter in the new policy's initial state.

use crate::config::{CLOAK_TICK_MS, SWEEP_TICK_MS};
use crate::meter::decay::CloakMeter;
use crate::meter::motion::AccelSample;
use crate::meter::sweep::SweepCounter;

/// Selectable meter policies.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MeterMode {
    /// Motion-decay charge meter.
    Cloak,
    /// Display sweep demo.
    Sweep,
}

impl MeterMode {
    /// Next mode in the cycle.
    pub fn next(self) -> Self {
        match self {
            MeterMode::Cloak => MeterMode::Sweep,
            MeterMode::Sweep => MeterMode::Cloak,
        }
    }

    /// Footer label for the display.
    pub fn label(self) -> &'static str {
        match self {
            MeterMode::Cloak => "CLOAK",
            MeterMode::Sweep => "SWEEP",
        }
    }
}

/// Active meter state for the selected policy.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Meter {
    Cloak(CloakMeter),
    Sweep(SweepCounter),
}

impl Meter {
    /// Fresh meter in the given mode's initial state.
    pub fn new(mode: MeterMode) -> Self {
        match mode {
            MeterMode::Cloak => Meter::Cloak(CloakMeter::new()),
            MeterMode::Sweep => Meter::Sweep(SweepCounter::new()),
        }
    }

    pub fn mode(&self) -> MeterMode {
        match self {
            Meter::Cloak(_) => MeterMode::Cloak,
            Meter::Sweep(_) => MeterMode::Sweep,
        }
    }

    /// Advance one tick.
    ///
    /// Returns the post-deadzone movement magnitude, always zero for the
    /// sweep policy, which ignores the sensor.
    pub fn advance(&mut self, sample: AccelSample) -> i32 {
        match self {
            Meter::Cloak(m) => m.advance(sample),
            Meter::Sweep(s) => {
                s.advance();
                0
            }
        }
    }

    /// Raw level, for logging.
    pub fn level(&self) -> i32 {
        match self {
            Meter::Cloak(m) => m.level(),
            Meter::Sweep(s) => s.level() as i32,
        }
    }

    /// Bars to light, in `[0, STATUS_BAR_COUNT]`.
    pub fn bars(&self) -> u8 {
        match self {
            Meter::Cloak(m) => m.bars(),
            Meter::Sweep(s) => s.bars(),
        }
    }

    /// Tick cadence for this policy (ms).
    pub fn tick_ms(&self) -> u64 {
        match self.mode() {
            MeterMode::Cloak => CLOAK_TICK_MS,
            MeterMode::Sweep => SWEEP_TICK_MS,
        }
    }
}
