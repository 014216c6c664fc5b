//! Demo sweep counter - ping-pongs the bar count between empty and full.

use crate::config::STATUS_BAR_COUNT;

/// Bouncing counter in `[0, STATUS_BAR_COUNT]`.
///
/// Each tick adds the current direction. Direction flips on the tick that
/// lands on a bound, so the flipped direction takes effect on the
/// following tick; no clamping is needed beyond the bounce rule.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SweepCounter {
    level: i8,
    direction: i8,
}

impl SweepCounter {
    pub const fn new() -> Self {
        Self {
            level: 0,
            direction: 1,
        }
    }

    /// Advance one tick.
    pub fn advance(&mut self) {
        self.level += self.direction;
        if self.level == 0 || self.level == STATUS_BAR_COUNT as i8 {
            self.direction = -self.direction;
        }
    }

    pub fn level(&self) -> i8 {
        self.level
    }

    pub fn direction(&self) -> i8 {
        self.direction
    }

    /// Bars to light: the counter is already a bar count.
    pub fn bars(&self) -> u8 {
        self.level as u8
    }
}

impl Default for SweepCounter {
    fn default() -> Self {
        Self::new()
    }
}
