// Copyright 2026 Bmn Contributors
// SPDX-License-Identifier: Apache-2.0

//! Error taxonomy for the lookup pipeline.

use thiserror::Error;

/// Errors surfaced by the fetch → extract → render pipeline.
///
/// Every variant terminates the run; there is no retry or degraded mode.
/// Malformed individual login blocks are not errors — they are kept with
/// empty fields.
#[derive(Debug, Error)]
pub enum Error {
    /// The server answered with a non-200 status.
    #[error("status code error: {status} {reason}")]
    Status { status: u16, reason: String },

    /// DNS, connection, or TLS failure below the HTTP layer.
    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    /// The site refuses to serve shared logins for this domain.
    #[error("This site has been barred from the bugmenot system.")]
    Barred,

    /// The response body could not be parsed as HTML at all.
    #[error("unparseable response: {0}")]
    Parse(String),

    /// Results could not be encoded as JSON.
    #[error(transparent)]
    Serialize(#[from] serde_json::Error),
}
