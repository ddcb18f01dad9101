// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! JSON payloads returned by the mock device.
//!
//! Each response type mirrors the body a real Tasmota plug sends for the
//! corresponding command. They also deserialize, so tests and clients can
//! read them back.

mod energy;
mod power;

use serde::Serialize;

pub use energy::EnergyTotalResponse;
pub use power::PowerResponse;

/// The payload produced by one dispatched command.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Reply {
    /// Reply to `Power`, `Power On` and `Power Off`.
    Power(PowerResponse),
    /// Reply to `EnergyTotal`.
    EnergyTotal(EnergyTotalResponse),
}

impl From<PowerResponse> for Reply {
    fn from(response: PowerResponse) -> Self {
        Self::Power(response)
    }
}

impl From<EnergyTotalResponse> for Reply {
    fn from(response: EnergyTotalResponse) -> Self {
        Self::EnergyTotal(response)
    }
}
