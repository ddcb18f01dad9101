// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the mock server.
//!
//! Two layers of failure exist: [`CommandError`] covers a single request
//! (unknown command, response encoding), while [`Error`] covers the process
//! itself (binding the listener, serving connections).

use thiserror::Error;

/// The main error type for this crate.
#[derive(Debug, Error)]
pub enum Error {
    /// Error occurred while handling a command.
    #[error("command error: {0}")]
    Command(#[from] CommandError),

    /// Binding or serving the listener failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The configured listen address is unusable.
    #[error("invalid address: {0}")]
    InvalidAddress(String),
}

/// Errors related to value validation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueError {
    /// An invalid power state string was provided.
    #[error("invalid power state: {0}")]
    InvalidPowerState(String),
}

/// Errors produced while dispatching a single command.
#[derive(Debug, Error)]
pub enum CommandError {
    /// The `cmnd` value does not name a supported command.
    #[error("unknown command: {0:?}")]
    UnknownCommand(String),

    /// The reply payload could not be serialized.
    #[error("could not encode json: {0}")]
    Encode(#[from] serde_json::Error),
}

impl CommandError {
    /// Returns `true` if the command was not recognized.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::UnknownCommand(_))
    }
}

/// A specialized Result type for this crate.
pub type Result<T> = std::result::Result<T, Error>;
