//! Clocked-bus transaction driver/checker harness.
//!
//! This crate implements a generic verification harness for simulated hardware with the following:
//! 1. **Signals:** Named, width-masked signal handles with explicit `set`/`get` mutation points.
//! 2. **Driver:** A bus transaction driver (drive, await handshake, sample, verify) that is
//!    parameterized over the signal set rather than duplicated per protocol.
//! 3. **Checks:** Element-wise response comparison and status-code verification with a
//!    structured failure taxonomy.
//! 4. **Simulation:** An in-process signal interface and clock with drive-settle-sample
//!    edge ordering for plugging in device-under-test models.
//! 5. **Reporting:** Per-run statistics (cycles, words driven/sampled, handshakes, verdicts).

/// Common types (failure taxonomy).
pub mod common;
/// Harness configuration (defaults, clock period/unit, timeout bounds).
pub mod config;
/// Bus transaction driver, transaction records, and response checks.
pub mod driver;
/// Signal handles, clock edges, and the collaborator seam traits.
pub mod signal;
/// In-process simulation: signal store plus clock, driven by a DUT model.
pub mod sim;
/// Per-run statistics collection.
pub mod stats;

/// Failure taxonomy for every check the harness performs.
pub use crate::common::BenchError;
/// Root configuration type; use `Config::default()` or deserialize from JSON.
pub use crate::config::Config;
/// The bus transaction driver; construct with `BusDriver::new` over any signal interface.
pub use crate::driver::BusDriver;
/// In-process simulated collaborator; owns the signal store and the clock.
pub use crate::sim::Simulation;
