//! Host-testable library interface for cloakwatch.
//!
//! This module exposes the pure logic core - the meter state machines,
//! motion-magnitude extraction, and the bar-bank projection - so it can
//! be tested on the host (no embedded hardware required).
//!
//! Usage: `cargo test`
//!
//! Note: The embedded binary uses main.rs with #![no_std] and #![no_main]
//! behind the `embedded` feature. This lib.rs provides a separate entry
//! point for host-based testing.

#![cfg_attr(not(test), no_std)]

pub mod config;

pub mod meter {
    pub mod decay;
    pub mod motion;
    pub mod policy;
    pub mod sweep;
}

pub mod ui {
    pub mod bar_logic;
}

// ═══════════════════════════════════════════════════════════════════════════
// Unit Tests
// ═══════════════════════════════════════════════════════════════════════════
