//! Unified error type for cloakwatch.
//!
//! We avoid `alloc` - all error variants carry only fixed-size data.
//! Implements `defmt::Format` for efficient on-target logging.

use defmt::Format;

/// Top-level error type used across the application.
#[derive(Debug, Format)]
pub enum Error {
    /// The accelerometer reported a fault.
    Sensor(SensorError),

    /// I²C transaction to the display failed.
    Display,
}

/// Accelerometer faults (keeps the enum `Copy`-friendly).
#[derive(Debug, Clone, Copy, Format)]
pub enum SensorError {
    /// I²C bus transaction failed.
    Bus,
    /// WHO_AM_I returned an unexpected chip id.
    WrongChipId(u8),
}

// Convenience conversions

impl From<SensorError> for Error {
    fn from(e: SensorError) -> Self {
        Error::Sensor(e)
    }
}
