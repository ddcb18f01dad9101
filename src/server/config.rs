// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Listener configuration.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::str::FromStr;
use std::time::Duration;

use tracing_subscriber::filter::LevelFilter;

use crate::error::Error;

/// Configuration for the mock server listener.
///
/// # Examples
///
/// ```
/// use std::net::{IpAddr, Ipv4Addr};
/// use std::time::Duration;
/// use tasmota_mock::ServerConfig;
///
/// // Listen on 0.0.0.0:8080
/// let config = ServerConfig::new();
/// assert_eq!(config.port(), 8080);
///
/// // Loopback on an ephemeral port
/// let config = ServerConfig::new()
///     .with_listen(IpAddr::V4(Ipv4Addr::LOCALHOST))
///     .with_port(0)
///     .with_request_timeout(Duration::from_secs(1));
/// assert_eq!(config.socket_addr().to_string(), "127.0.0.1:0");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    listen: IpAddr,
    port: u16,
    request_timeout: Duration,
}

impl ServerConfig {
    /// Default listen address (all interfaces).
    pub const DEFAULT_LISTEN: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
    /// Default port.
    pub const DEFAULT_PORT: u16 = 8080;
    /// Default per-request timeout.
    pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(3);

    /// Creates a configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the listen address.
    #[must_use]
    pub fn with_listen(mut self, listen: IpAddr) -> Self {
        self.listen = listen;
        self
    }

    /// Parses and sets the listen address.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidAddress` if `listen` is not an IP address.
    pub fn with_listen_str(self, listen: &str) -> Result<Self, Error> {
        let addr = IpAddr::from_str(listen).map_err(|_| Error::InvalidAddress(listen.to_string()))?;
        Ok(self.with_listen(addr))
    }

    /// Sets the port. `0` lets the OS pick one.
    #[must_use]
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Sets the per-request timeout.
    #[must_use]
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Returns the listen address.
    #[must_use]
    pub fn listen(&self) -> IpAddr {
        self.listen
    }

    /// Returns the port.
    #[must_use]
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Returns the per-request timeout.
    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        self.request_timeout
    }

    /// Returns the socket address to bind.
    #[must_use]
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.listen, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen: Self::DEFAULT_LISTEN,
            port: Self::DEFAULT_PORT,
            request_timeout: Self::DEFAULT_REQUEST_TIMEOUT,
        }
    }
}

/// Log verbosity for the binary.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, clap::ValueEnum)]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => LevelFilter::TRACE,
            LogLevel::Debug => LevelFilter::DEBUG,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Warn => LevelFilter::WARN,
            LogLevel::Error => LevelFilter::ERROR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_device_firmware_port() {
        let config = ServerConfig::default();
        assert_eq!(config.listen(), ServerConfig::DEFAULT_LISTEN);
        assert_eq!(config.port(), 8080);
        assert_eq!(config.request_timeout(), Duration::from_secs(3));
        assert_eq!(config.socket_addr().to_string(), "0.0.0.0:8080");
    }

    #[test]
    fn listen_str_accepts_ipv6() {
        let config = ServerConfig::new().with_listen_str("::1").unwrap().with_port(9000);
        assert_eq!(config.socket_addr().to_string(), "[::1]:9000");
    }

    #[test]
    fn listen_str_rejects_hostnames() {
        let err = ServerConfig::new().with_listen_str("localhost").unwrap_err();
        assert!(matches!(err, Error::InvalidAddress(ref s) if s == "localhost"));
    }

    #[test]
    fn log_level_to_filter() {
        assert_eq!(LevelFilter::from(LogLevel::Trace), LevelFilter::TRACE);
        assert_eq!(LevelFilter::from(LogLevel::default()), LevelFilter::INFO);
        assert_eq!(LevelFilter::from(LogLevel::Error), LevelFilter::ERROR);
    }
}
