//! Named, width-masked signal registry.
//!
//! This module implements the signal storage behind the in-process simulation. It provides:
//! 1. **Registration:** Declaring a port by name and bit width, yielding a `Signal` handle.
//! 2. **Access:** Width-masked writes and reads at handle granularity.
//! 3. **Lookup:** Name resolution matching the ports a real design would declare.
//!
//! Handles are plain indices into this store and are only valid for the store that
//! issued them.

use std::collections::HashMap;

use crate::common::BenchError;
use crate::signal::{Signal, SignalInterface};

/// One declared port: its name, width mask, and current value.
#[derive(Debug, Clone)]
struct Slot {
    name: String,
    mask: u64,
    value: u64,
}

/// Registry of named signals with declared bit widths.
///
/// Writes are masked to the declared width, mirroring how an HDL port truncates
/// an oversized drive. All signals reset to zero at registration.
#[derive(Debug, Clone, Default)]
pub struct SignalStore {
    slots: Vec<Slot>,
    names: HashMap<String, Signal>,
}

/// Returns the value mask for a port of `width` bits (1..=64).
const fn mask_for(width: u32) -> u64 {
    if width >= u64::BITS {
        u64::MAX
    } else {
        (1_u64 << width) - 1
    }
}

impl SignalStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares a port named `name` that is `width` bits wide.
    ///
    /// Registration is idempotent: declaring an existing name returns the
    /// original handle and leaves the declared width and value untouched.
    ///
    /// # Panics
    ///
    /// Debug builds panic on a width outside `1..=64`; a zero-width port has
    /// no mask and a wider one does not fit the value type.
    pub fn register(&mut self, name: &str, width: u32) -> Signal {
        debug_assert!(
            (1..=u64::BITS).contains(&width),
            "signal width must be 1..=64"
        );
        if let Some(&signal) = self.names.get(name) {
            return signal;
        }
        let signal = Signal(self.slots.len());
        self.slots.push(Slot {
            name: name.to_string(),
            mask: mask_for(width),
            value: 0,
        });
        let _ = self.names.insert(name.to_string(), signal);
        signal
    }

    /// Returns the declared name of a signal.
    pub fn name(&self, signal: Signal) -> &str {
        &self.slots[signal.0].name
    }

    /// Number of declared ports.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns `true` if no ports have been declared.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

impl SignalInterface for SignalStore {
    fn lookup(&self, name: &str) -> Result<Signal, BenchError> {
        self.names
            .get(name)
            .copied()
            .ok_or_else(|| BenchError::UnknownSignal {
                name: name.to_string(),
            })
    }

    fn set(&mut self, signal: Signal, value: u64) {
        let slot = &mut self.slots[signal.0];
        slot.value = value & slot.mask;
    }

    fn get(&self, signal: Signal) -> u64 {
        self.slots[signal.0].value
    }
}
