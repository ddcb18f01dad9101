// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! HTTP front end of the mock device.
//!
//! The command handler is mounted at [`COMMAND_PATH`] and at the server
//! root, accepting any method. Every request runs as its own task; the
//! shared [`MockDevice`] is passed to handlers as axum state.
//!
//! # Examples
//!
//! ```no_run
//! use std::sync::Arc;
//! use tasmota_mock::{MockDevice, Server, ServerConfig};
//!
//! #[tokio::main]
//! async fn main() -> tasmota_mock::Result<()> {
//!     let server = Server::bind(&ServerConfig::new(), Arc::new(MockDevice::new())).await?;
//!     server.run().await
//! }
//! ```

mod config;
mod handler;

use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::any;
use tokio::net::TcpListener;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::device::MockDevice;
use crate::error::Result;

pub use config::{LogLevel, ServerConfig};
pub use handler::{ENCODE_FAILURE_BODY, NOT_FOUND_BODY};

/// Path of the Tasmota command endpoint.
pub const COMMAND_PATH: &str = "/cm";

/// Builds the router serving `device`.
#[must_use]
pub fn router(device: Arc<MockDevice>, config: &ServerConfig) -> Router {
    Router::new()
        .route(COMMAND_PATH, any(handler::handle_cmnd))
        .route("/", any(handler::handle_cmnd))
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            config.request_timeout(),
        ))
        .layer(TraceLayer::new_for_http())
        .with_state(device)
}

/// A bound, not yet running, mock server.
pub struct Server {
    listener: TcpListener,
    router: Router,
    local_addr: SocketAddr,
}

impl Server {
    /// Binds the listener described by `config`.
    ///
    /// # Errors
    ///
    /// Returns `Error::Io` if the address cannot be bound.
    pub async fn bind(config: &ServerConfig, device: Arc<MockDevice>) -> Result<Self> {
        let listener = TcpListener::bind(config.socket_addr()).await?;
        let local_addr = listener.local_addr()?;
        tracing::info!("Starting server on {}", local_addr);

        Ok(Self {
            listener,
            router: router(device, config),
            local_addr,
        })
    }

    /// Returns the address the listener is bound to.
    #[must_use]
    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    /// Serves requests until `shutdown` completes, then drains in-flight
    /// requests.
    ///
    /// # Errors
    ///
    /// Returns `Error::Io` if serving fails.
    pub async fn run_until<F>(self, shutdown: F) -> Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        axum::serve(self.listener, self.router)
            .with_graceful_shutdown(shutdown)
            .await?;
        tracing::info!("Server on {} shut down", self.local_addr);
        Ok(())
    }

    /// Serves requests until Ctrl+C is received.
    ///
    /// # Errors
    ///
    /// Returns `Error::Io` if serving fails.
    pub async fn run(self) -> Result<()> {
        self.run_until(async {
            match tokio::signal::ctrl_c().await {
                Ok(()) => tracing::info!("Received shutdown signal"),
                Err(e) => tracing::error!("Failed to listen for shutdown signal: {}", e),
            }
        })
        .await
    }
}
