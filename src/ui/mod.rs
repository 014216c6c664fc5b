//! User interface subsystem - OLED status display + MODE button.
//!
//! The UI task repaints the full meter frame whenever the meter task
//! delivers a new one; the button task feeds debounced MODE presses back
//! to the meter task.
//!
//! ## Components
//!
//! - **Display**: SSD1306 128×64 OLED via I²C
//! - **Button**: one tactile switch with debouncing (MODE)

pub mod bar_logic;
pub mod buttons;
pub mod display;

use defmt::Format;

/// Physical button events (after debouncing).
#[derive(Clone, Copy, PartialEq, Eq, Format)]
pub enum ButtonEvent {
    /// Cycle to the next meter policy.
    Mode,
}
