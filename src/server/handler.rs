// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The `/cm` request handler.

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::{HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::device::MockDevice;
use crate::error::CommandError;

/// Body sent for unrecognized commands.
pub const NOT_FOUND_BODY: &str = "404 page not found\n";

/// Body sent when a reply cannot be encoded.
pub const ENCODE_FAILURE_BODY: &str = "could not encode json";

/// Handles `?cmnd=<command>` for any HTTP method.
///
/// Only the first `cmnd` pair counts; later repeats are ignored. A missing
/// or malformed query is treated as an empty command and therefore answered
/// with 404.
#[allow(clippy::unused_async)]
#[tracing::instrument(skip_all, fields(cmnd = tracing::field::Empty))]
pub(crate) async fn handle_cmnd(
    State(device): State<Arc<MockDevice>>,
    query: Option<Query<Vec<(String, String)>>>,
) -> Result<Response, CommandError> {
    let cmnd = query.map(|Query(pairs)| first_cmnd(pairs)).unwrap_or_default();
    tracing::Span::current().record("cmnd", cmnd.as_str());

    let reply = device.dispatch(&cmnd)?;
    json_response(&reply)
}

fn first_cmnd(pairs: Vec<(String, String)>) -> String {
    pairs
        .into_iter()
        .find_map(|(key, value)| (key == "cmnd").then_some(value))
        .unwrap_or_default()
}

/// Encodes `payload` as an `application/json` 200 response.
fn json_response<T: Serialize + ?Sized>(payload: &T) -> Result<Response, CommandError> {
    let body = serde_json::to_vec(payload)?;
    Ok((
        [(header::CONTENT_TYPE, HeaderValue::from_static("application/json"))],
        body,
    )
        .into_response())
}

impl IntoResponse for CommandError {
    fn into_response(self) -> Response {
        match self {
            Self::UnknownCommand(_) => (StatusCode::NOT_FOUND, NOT_FOUND_BODY).into_response(),
            Self::Encode(err) => {
                tracing::error!(error = %err, "Failed to encode reply");
                (StatusCode::INTERNAL_SERVER_ERROR, ENCODE_FAILURE_BODY).into_response()
            }
        }
    }
}
