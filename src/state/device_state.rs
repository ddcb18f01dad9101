// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Lock-guarded power state.

use parking_lot::Mutex;

use crate::types::PowerState;

/// Tracked state of the emulated plug.
///
/// The lock is held only for the duration of a single read or write, never
/// across serialization or I/O.
#[derive(Debug, Default)]
pub struct DeviceState {
    power: Mutex<PowerState>,
}

impl DeviceState {
    /// Creates a new state store with the relay off.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current power state.
    #[must_use]
    pub fn power(&self) -> PowerState {
        *self.power.lock()
    }

    /// Sets the power state, returning the previous one.
    pub fn set_power(&self, state: PowerState) -> PowerState {
        std::mem::replace(&mut *self.power.lock(), state)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::thread;

    use super::*;

    #[test]
    fn starts_off() {
        assert_eq!(DeviceState::new().power(), PowerState::Off);
    }

    #[test]
    fn set_power_returns_previous() {
        let state = DeviceState::new();
        assert_eq!(state.set_power(PowerState::On), PowerState::Off);
        assert_eq!(state.set_power(PowerState::On), PowerState::On);
        assert_eq!(state.set_power(PowerState::Off), PowerState::On);
        assert_eq!(state.power(), PowerState::Off);
    }

    #[test]
    fn concurrent_writers_leave_a_defined_state() {
        let state = Arc::new(DeviceState::new());

        let handles: Vec<_> = (0..16)
            .map(|i| {
                let state = Arc::clone(&state);
                thread::spawn(move || {
                    for _ in 0..1000 {
                        state.set_power(PowerState::from(i % 2 == 0));
                        let seen = state.power();
                        assert!(matches!(seen, PowerState::On | PowerState::Off));
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        assert!(matches!(state.power(), PowerState::On | PowerState::Off));
    }
}
