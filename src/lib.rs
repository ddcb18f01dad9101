// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `tasmota_mock` - A mock Tasmota smart plug for testing HTTP clients.
//!
//! The server emulates the `/cm?cmnd=...` endpoint of a single-relay plug
//! with energy monitoring, so client code can be exercised without real
//! hardware.
//!
//! # Supported Commands
//!
//! - **`Power On` / `Power Off`**: switch the emulated relay
//! - **`Power`**: report the current relay state
//! - **`EnergyTotal`**: report fixed energy totals
//!
//! Command matching is case-insensitive. Anything else is answered with 404.
//!
//! # Quick Start
//!
//! ```no_run
//! use std::sync::Arc;
//! use tasmota_mock::{MockDevice, Server, ServerConfig};
//!
//! #[tokio::main]
//! async fn main() -> tasmota_mock::Result<()> {
//!     let config = ServerConfig::new().with_port(8080);
//!     let server = Server::bind(&config, Arc::new(MockDevice::new())).await?;
//!
//!     // GET http://<host>:8080/cm?cmnd=Power%20On -> {"POWER":"ON"}
//!     server.run().await
//! }
//! ```
//!
//! # Without HTTP
//!
//! ```
//! use tasmota_mock::MockDevice;
//! use tasmota_mock::types::PowerState;
//!
//! let device = MockDevice::new();
//! device.dispatch("power on")?;
//! assert_eq!(device.state().power(), PowerState::On);
//! # Ok::<(), tasmota_mock::CommandError>(())
//! ```

pub mod command;
mod device;
pub mod error;
pub mod response;
pub mod server;
pub mod state;
pub mod types;

pub use command::Command;
pub use device::MockDevice;
pub use error::{CommandError, Error, Result, ValueError};
pub use response::{EnergyTotalResponse, PowerResponse, Reply};
pub use server::{COMMAND_PATH, LogLevel, Server, ServerConfig};
pub use state::DeviceState;
pub use types::{EnergyTotals, PowerState};
