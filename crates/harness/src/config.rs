//! Configuration system for the verification harness.
//!
//! This module defines the configuration structures used to parameterize a run. It provides:
//! 1. **Defaults:** Baseline constants (clock period, reset length, handshake bound).
//! 2. **Structures:** Clock and harness configuration with per-field defaults.
//! 3. **Enums:** Simulated time units.
//!
//! Configuration is supplied via JSON (`Config::from_json`) or use `Config::default()`.

use serde::Deserialize;

/// Default configuration constants for the harness.
///
/// These values define the baseline when not explicitly overridden in a
/// JSON configuration document.
mod defaults {
    /// Default clock period, in units of [`super::TimeUnit`] (10 ns).
    pub const CLOCK_PERIOD: u64 = 10;

    /// Default number of falling edges to hold reset asserted.
    pub const RESET_CYCLES: u32 = 2;

    /// Default handshake poll bound, in rising edges.
    ///
    /// A handshake that has not completed within this many cycles is
    /// reported as a timeout rather than polled forever.
    pub const HANDSHAKE_TIMEOUT: u32 = 50;
}

/// Simulated time units for the clock period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum TimeUnit {
    /// Picoseconds.
    Ps,
    /// Nanoseconds.
    #[default]
    #[serde(alias = "NS")]
    Ns,
    /// Microseconds.
    Us,
}

/// Clock generator parameters: one full period and its unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ClockConfig {
    /// Full clock period, in `unit`s.
    pub period: u64,
    /// Time unit the period is expressed in.
    pub unit: TimeUnit,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            period: defaults::CLOCK_PERIOD,
            unit: TimeUnit::default(),
        }
    }
}

/// Root harness configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Clock generator parameters.
    pub clock: ClockConfig,
    /// Falling edges to hold reset asserted.
    pub reset_cycles: u32,
    /// Rising edges to poll a handshake before reporting a timeout.
    pub handshake_timeout: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            clock: ClockConfig::default(),
            reset_cycles: defaults::RESET_CYCLES,
            handshake_timeout: defaults::HANDSHAKE_TIMEOUT,
        }
    }
}

impl Config {
    /// Deserializes a configuration from a JSON document.
    ///
    /// Missing fields fall back to the defaults, so a partial override like
    /// `{"handshake_timeout": 200}` is valid.
    ///
    /// # Errors
    ///
    /// Returns the underlying `serde_json` error if the document is malformed.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
