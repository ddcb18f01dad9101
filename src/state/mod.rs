// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device state store.
//!
//! [`DeviceState`] owns the only mutable value in the mock, the relay power
//! state, and mediates every access through a mutex.
//!
//! # Examples
//!
//! ```
//! use tasmota_mock::state::DeviceState;
//! use tasmota_mock::types::PowerState;
//!
//! let state = DeviceState::new();
//! assert_eq!(state.power(), PowerState::Off);
//!
//! state.set_power(PowerState::On);
//! assert_eq!(state.power(), PowerState::On);
//! ```

mod device_state;

pub use device_state::DeviceState;
