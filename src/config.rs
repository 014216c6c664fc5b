//! Application-wide constants and compile-time configuration.
//!
//! All hardware pin assignments, timing parameters, and meter tuning
//! constants live here so they can be adjusted in one place.

// Cloak meter

/// Charge drained per tick while motion is detected.
pub const CLOAK_DRAIN_PER_TICK: i32 = 100;

/// Charge restored per tick while still.
///
/// Deliberately smaller than the drain rate: activity empties the meter
/// faster than stillness refills it.
pub const CLOAK_RECHARGE_PER_TICK: i32 = 62;

/// Full charge. The product of the two rates, so a complete drain takes
/// exactly `CLOAK_RECHARGE_PER_TICK` ticks and a complete recharge
/// exactly `CLOAK_DRAIN_PER_TICK` ticks.
pub const CLOAK_LEVEL_MAX: i32 = CLOAK_DRAIN_PER_TICK * CLOAK_RECHARGE_PER_TICK;

/// Summed per-axis sample delta (milli-g) at or below which a tick is
/// treated as stillness. Suppresses idle sensor jitter.
pub const MOTION_DEADZONE: i32 = 150;

/// Cloak meter sampling cadence (ms).
pub const CLOAK_TICK_MS: u64 = 100;

/// Sweep demo cadence (ms).
pub const SWEEP_TICK_MS: u64 = 1000;

// Status bar bank

/// Number of status bar slots.
pub const STATUS_BAR_COUNT: usize = 10;

/// Slot sprite width (px). One byte per sprite row.
pub const STATUS_BAR_WIDTH: u32 = 8;

/// Slot sprite height (px).
pub const STATUS_BAR_HEIGHT: u32 = 40;

/// Left edge of the first slot (px).
pub const STATUS_BAR_X_ORIGIN: i32 = 14;

/// Horizontal pitch between slots (px).
pub const STATUS_BAR_X_OFFSET: i32 = 10;

/// Top edge of the slot bank (px).
pub const STATUS_BAR_Y_ORIGIN: i32 = 12;

// Accelerometer

/// LIS3DH I²C address (SA0 low).
pub const LIS3DH_ADDR: u8 = 0x18;

// GPIO pin assignments (nRF52840-DK defaults)
//
// These are logical names; actual `embassy_nrf::peripherals::*` types are
// selected in `main.rs`.  Adjust for your custom PCB.
//
//   Button MODE    → P0.11
//   OLED  I²C SDA  → P0.26
//   OLED  I²C SCL  → P0.27
//   Accel I²C SDA  → P0.30
//   Accel I²C SCL  → P0.31

/// Button debounce time (ms).
pub const BUTTON_DEBOUNCE_MS: u64 = 50;
