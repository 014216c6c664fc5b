//! Accelerometer subsystem - LIS3DH over I²C.
//!
//! The driver puts the sensor into continuous measurement mode at init,
//! so the output registers always hold the latest conversion; a peek is a
//! plain register read with last-known-value semantics and never waits on
//! the sensor.

pub mod lis3dh;

pub use lis3dh::Lis3dh;
