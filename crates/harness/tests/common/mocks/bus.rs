//! Mockall-backed bus implementing both collaborator traits.
//!
//! Lets driver tests assert call-level behavior (what was driven, how many
//! edges were waited) without standing up a full simulation. The provided
//! `is_asserted` method is intentionally not mocked so it keeps routing
//! through `get`.

use busbench_core::common::BenchError;
use busbench_core::signal::{Clock, Edge, Signal, SignalInterface};
use mockall::mock;

mock! {
    pub Bus {}

    impl SignalInterface for Bus {
        fn lookup(&self, name: &str) -> Result<Signal, BenchError>;
        fn set(&mut self, signal: Signal, value: u64);
        fn get(&self, signal: Signal) -> u64;
    }

    impl Clock for Bus {
        fn wait_edge(&mut self, edge: Edge);
        fn cycle(&self) -> u64;
    }
}
