// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `tasmota-mock` binary: serves a mock Tasmota plug until Ctrl+C.

use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use tasmota_mock::{LogLevel, MockDevice, Server, ServerConfig};

#[derive(Debug, Parser)]
#[command(version, about = "Mock HTTP server emulating a Tasmota smart plug")]
struct Args {
    /// IP address to listen on
    #[arg(long, default_value = "0.0.0.0")]
    listen: String,

    /// Port to listen on
    #[arg(short, long, default_value_t = ServerConfig::DEFAULT_PORT)]
    port: u16,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = ServerConfig::DEFAULT_REQUEST_TIMEOUT.as_secs())]
    request_timeout: u64,

    /// Log verbosity
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    log_level: LogLevel,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(args.log_level)
        .init();

    let config = ServerConfig::new()
        .with_listen_str(&args.listen)?
        .with_port(args.port)
        .with_request_timeout(Duration::from_secs(args.request_timeout));

    tracing::info!("tasmota-mock {} starting", env!("CARGO_PKG_VERSION"));

    let server = Server::bind(&config, Arc::new(MockDevice::new()))
        .await
        .inspect_err(|e| tracing::error!("Could not listen on {}: {}", config.socket_addr(), e))?;
    server.run().await?;

    tracing::info!("tasmota-mock shutdown complete");
    Ok(())
}
