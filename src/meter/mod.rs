//! Meter subsystem - the update-and-render core.
//!
//! One tick is: peek the sensor, advance the active policy, project the
//! level onto the bar bank. The pure pieces (`motion`, `decay`, `sweep`,
//! `policy`) are host-testable through `lib.rs`; `task` is the embedded
//! sampling glue that drives them.

pub mod decay;
pub mod motion;
pub mod policy;
pub mod sweep;
pub mod task;

use crate::meter::policy::MeterMode;
use defmt::Format;

/// One frame's worth of meter state, sent to the UI task after every
/// update so the display is repainted in full.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Format)]
pub struct MeterFrame {
    pub mode: MeterMode,
    pub filled: u8,
}
