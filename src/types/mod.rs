// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Value types shared by the dispatcher, the state store and the responses.
//!
//! # Types
//!
//! - [`PowerState`] - On/Off state of the emulated relay
//! - [`EnergyTotals`] - Fixed energy readings reported by `EnergyTotal`

mod energy;
mod power;

pub use energy::EnergyTotals;
pub use power::PowerState;
