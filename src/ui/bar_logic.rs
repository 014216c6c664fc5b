//! Bar-bank projection - maps a filled count onto the status slots.

use crate::config::STATUS_BAR_COUNT;

/// Visual state of one status slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BarState {
    Empty,
    Full,
}

/// The fixed bank of status slots, leftmost first.
pub type BarBank = [BarState; STATUS_BAR_COUNT];

/// Recompute the whole bank from a filled count.
///
/// Slot `i` is full iff `i < filled`. Every call rebuilds all slots, so
/// no stale slot state can survive a level change.
pub fn bar_states(filled: u8) -> BarBank {
    core::array::from_fn(|i| {
        if (i as u8) < filled {
            BarState::Full
        } else {
            BarState::Empty
        }
    })
}
