// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Commands understood by the mock device.
//!
//! | `cmnd` value | Variant | Reply |
//! |--------------|---------|-------|
//! | `EnergyTotal` | [`Command::EnergyTotal`] | `{"EnergyTotal":{...}}` |
//! | `Power On` | [`Command::PowerOn`] | `{"POWER":"ON"}` |
//! | `Power Off` | [`Command::PowerOff`] | `{"POWER":"OFF"}` |
//! | `Power` | [`Command::PowerStatus`] | `{"POWER":"<current>"}` |
//!
//! Matching is case-insensitive: the raw value is lowercased and compared
//! against the literal tokens above, embedded space included. No trimming
//! or whitespace folding is applied, so `"Power  On"` is not recognized.
//!
//! # Examples
//!
//! ```
//! use tasmota_mock::command::Command;
//!
//! let cmd: Command = "power on".parse().unwrap();
//! assert_eq!(cmd, Command::PowerOn);
//! assert_eq!(cmd.to_http_command(), "Power On");
//!
//! assert!("Dimmer 50".parse::<Command>().is_err());
//! ```

use std::fmt;
use std::str::FromStr;

use crate::error::CommandError;
use crate::types::PowerState;

/// A command the mock device can execute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// Report the fixed energy totals.
    EnergyTotal,
    /// Switch the relay on.
    PowerOn,
    /// Switch the relay off.
    PowerOff,
    /// Report the current relay state.
    PowerStatus,
}

impl Command {
    /// Every supported command.
    pub const ALL: [Self; 4] = [
        Self::EnergyTotal,
        Self::PowerOn,
        Self::PowerOff,
        Self::PowerStatus,
    ];

    /// Returns the command name without payload, e.g. `"Power"`.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::EnergyTotal => "EnergyTotal",
            Self::PowerOn | Self::PowerOff | Self::PowerStatus => "Power",
        }
    }

    /// Returns the command payload, if any.
    #[must_use]
    pub const fn payload(&self) -> Option<&'static str> {
        match self {
            Self::PowerOn => Some(PowerState::On.as_str()),
            Self::PowerOff => Some(PowerState::Off.as_str()),
            Self::EnergyTotal | Self::PowerStatus => None,
        }
    }

    /// Returns the canonical `cmnd` value a Tasmota client would send.
    ///
    /// Format: `<name> <payload>` in title case, or just `<name>`.
    #[must_use]
    pub const fn to_http_command(&self) -> &'static str {
        match self {
            Self::EnergyTotal => "EnergyTotal",
            Self::PowerOn => "Power On",
            Self::PowerOff => "Power Off",
            Self::PowerStatus => "Power",
        }
    }

    /// Returns `true` if executing the command changes device state.
    #[must_use]
    pub const fn is_mutating(&self) -> bool {
        matches!(self, Self::PowerOn | Self::PowerOff)
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_http_command())
    }
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "energytotal" => Ok(Self::EnergyTotal),
            "power on" => Ok(Self::PowerOn),
            "power off" => Ok(Self::PowerOff),
            "power" => Ok(Self::PowerStatus),
            _ => Err(CommandError::UnknownCommand(s.to_string())),
        }
    }
}
