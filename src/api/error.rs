// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Error type for backend requests.
//!
//! Callers treat every variant as "request failed"; the variants only exist
//! to make log lines useful.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ApiError>;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Endpoint URL could not be built from the configured base.
    #[error("Invalid endpoint URL: {0}")]
    Url(#[from] url::ParseError),

    /// Connection, timeout, or client construction failure.
    #[error("HTTP error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Backend answered with a non-2xx status.
    #[error("Backend error ({status}): {body}")]
    Status { status: u16, body: String },

    /// Response body was not the expected JSON.
    #[error("Malformed response: {0}")]
    Decode(#[from] serde_json::Error),
}
