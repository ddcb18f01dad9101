// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Power response body.

use serde::{Deserialize, Serialize};

use crate::types::PowerState;

/// Response to a Power command.
///
/// The mock emulates a single-relay plug, so only the unindexed `POWER` key
/// is ever emitted.
///
/// # Examples
///
/// ```
/// use tasmota_mock::response::PowerResponse;
/// use tasmota_mock::types::PowerState;
///
/// let json = serde_json::to_string(&PowerResponse::new(PowerState::Off)).unwrap();
/// assert_eq!(json, r#"{"POWER":"OFF"}"#);
///
/// let parsed: PowerResponse = serde_json::from_str(r#"{"POWER": "ON"}"#).unwrap();
/// assert_eq!(parsed.state(), PowerState::On);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PowerResponse {
    #[serde(rename = "POWER")]
    power: PowerState,
}

impl PowerResponse {
    /// Creates a response reporting `state`.
    #[must_use]
    pub const fn new(state: PowerState) -> Self {
        Self { power: state }
    }

    /// Returns the reported power state.
    #[must_use]
    pub const fn state(&self) -> PowerState {
        self.power
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_power_response() {
        let response: PowerResponse = serde_json::from_str(r#"{"POWER": "OFF"}"#).unwrap();
        assert_eq!(response.state(), PowerState::Off);
    }

    #[test]
    fn missing_power_key_is_rejected() {
        assert!(serde_json::from_str::<PowerResponse>(r#"{"POWER1": "ON"}"#).is_err());
    }
}
