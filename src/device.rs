// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The emulated smart plug and its command dispatcher.
//!
//! [`MockDevice`] is owned by the server and shared with every request
//! handler through an `Arc`. Each operation is a short synchronous critical
//! section; nothing here awaits.
//!
//! # Examples
//!
//! ```
//! use tasmota_mock::MockDevice;
//! use tasmota_mock::response::{PowerResponse, Reply};
//! use tasmota_mock::types::PowerState;
//!
//! let device = MockDevice::new();
//!
//! let reply = device.dispatch("Power On").unwrap();
//! assert_eq!(reply, Reply::Power(PowerResponse::new(PowerState::On)));
//! assert_eq!(device.power_status().state(), PowerState::On);
//!
//! assert!(device.dispatch("UnknownCommand").unwrap_err().is_not_found());
//! ```

use crate::command::Command;
use crate::error::CommandError;
use crate::response::{EnergyTotalResponse, PowerResponse, Reply};
use crate::state::DeviceState;
use crate::types::{EnergyTotals, PowerState};

/// A single-relay plug with fixed energy readings.
#[derive(Debug, Default)]
pub struct MockDevice {
    state: DeviceState,
    energy: EnergyTotals,
}

impl MockDevice {
    /// Creates a device that is switched off and reports
    /// [`EnergyTotals::FIXED`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the state store.
    #[must_use]
    pub fn state(&self) -> &DeviceState {
        &self.state
    }

    /// Parses `raw` and executes the matching command.
    ///
    /// # Errors
    ///
    /// Returns [`CommandError::UnknownCommand`] if `raw` does not name a
    /// supported command. Device state is left untouched in that case.
    pub fn dispatch(&self, raw: &str) -> Result<Reply, CommandError> {
        let command = raw.parse::<Command>().inspect_err(|_| {
            tracing::warn!(cmnd = %raw, "Unknown command");
        })?;
        Ok(self.execute(command))
    }

    /// Executes an already parsed command.
    #[must_use]
    pub fn execute(&self, command: Command) -> Reply {
        if command.is_mutating() {
            tracing::info!(%command, "Executing command");
        } else {
            tracing::debug!(%command, "Executing command");
        }
        match command {
            Command::EnergyTotal => self.energy_total().into(),
            Command::PowerOn => self.power_on().into(),
            Command::PowerOff => self.power_off().into(),
            Command::PowerStatus => self.power_status().into(),
        }
    }

    /// Switches the relay on.
    #[must_use]
    pub fn power_on(&self) -> PowerResponse {
        self.switch(PowerState::On)
    }

    /// Switches the relay off.
    #[must_use]
    pub fn power_off(&self) -> PowerResponse {
        self.switch(PowerState::Off)
    }

    /// Reports the current relay state without changing it.
    #[must_use]
    pub fn power_status(&self) -> PowerResponse {
        PowerResponse::new(self.state.power())
    }

    /// Reports the fixed energy totals.
    #[must_use]
    pub fn energy_total(&self) -> EnergyTotalResponse {
        EnergyTotalResponse::new(self.energy)
    }

    fn switch(&self, target: PowerState) -> PowerResponse {
        let previous = self.state.set_power(target);
        if previous != target {
            tracing::debug!(from = %previous, to = %target, "Power state changed");
        }
        PowerResponse::new(target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_powered_off() {
        let device = MockDevice::new();
        assert_eq!(device.power_status().state(), PowerState::Off);
    }

    #[test]
    fn power_on_then_status() {
        let device = MockDevice::new();
        assert_eq!(device.power_on().state(), PowerState::On);
        assert_eq!(device.power_status().state(), PowerState::On);
    }

    #[test]
    fn power_off_then_status() {
        let device = MockDevice::new();
        device.state().set_power(PowerState::On);
        assert_eq!(device.power_off().state(), PowerState::Off);
        assert_eq!(device.power_status().state(), PowerState::Off);
    }

    #[test]
    fn repeated_power_on_is_idempotent() {
        let device = MockDevice::new();
        for _ in 0..3 {
            assert_eq!(device.power_on().state(), PowerState::On);
        }
        assert_eq!(device.state().power(), PowerState::On);
    }

    #[test]
    fn repeated_power_off_is_idempotent() {
        let device = MockDevice::new();
        device.state().set_power(PowerState::On);
        for _ in 0..3 {
            assert_eq!(device.power_off().state(), PowerState::Off);
        }
        assert_eq!(device.state().power(), PowerState::Off);
    }

    #[test]
    fn energy_total_ignores_power_state() {
        let device = MockDevice::new();
        let before = device.energy_total();
        let _ = device.power_on();
        assert_eq!(device.energy_total(), before);
        assert_eq!(*before.totals(), EnergyTotals::FIXED);
    }

    #[test]
    fn dispatch_routes_every_command() {
        let device = MockDevice::new();

        assert_eq!(
            device.dispatch("EnergyTotal").unwrap(),
            Reply::EnergyTotal(EnergyTotalResponse::new(EnergyTotals::FIXED))
        );
        assert_eq!(
            device.dispatch("power on").unwrap(),
            Reply::Power(PowerResponse::new(PowerState::On))
        );
        assert_eq!(
            device.dispatch("Power").unwrap(),
            Reply::Power(PowerResponse::new(PowerState::On))
        );
        assert_eq!(
            device.dispatch("POWER OFF").unwrap(),
            Reply::Power(PowerResponse::new(PowerState::Off))
        );
        assert_eq!(
            device.dispatch("power").unwrap(),
            Reply::Power(PowerResponse::new(PowerState::Off))
        );
    }

    #[test]
    fn unknown_command_leaves_state_untouched() {
        let device = MockDevice::new();
        let _ = device.power_on();

        let err = device.dispatch("Power Toggle").unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(device.state().power(), PowerState::On);
    }
}
