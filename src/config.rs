// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Startup configuration read from the environment.

use std::time::Duration;

use anyhow::{Context, Result};
use url::Url;

/// Backend base URL used when `ROSTER_BACKEND_URL` is unset.
pub const DEFAULT_BACKEND_URL: &str = "http://localhost/php-backend/";
/// Request timeout used when `ROSTER_TIMEOUT_SECS` is unset.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

const BACKEND_URL_VAR: &str = "ROSTER_BACKEND_URL";
const TIMEOUT_VAR: &str = "ROSTER_TIMEOUT_SECS";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    /// Directory holding the `*.php` endpoints; always ends with `/`.
    pub backend_url: Url,
    pub request_timeout: Duration,
}

impl AppConfig {
    /// Load configuration from process environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let backend_url = match lookup(BACKEND_URL_VAR).filter(|v| !v.trim().is_empty()) {
            Some(raw) => parse_base_url(raw.trim())
                .with_context(|| format!("Invalid {BACKEND_URL_VAR}: {raw:?}"))?,
            None => parse_base_url(DEFAULT_BACKEND_URL)?,
        };
        let mut config = Self {
            backend_url,
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        };

        if let Some(raw) = lookup(TIMEOUT_VAR).filter(|v| !v.trim().is_empty()) {
            let secs: u64 = raw
                .trim()
                .parse()
                .with_context(|| format!("Invalid {TIMEOUT_VAR}: {raw:?}"))?;
            anyhow::ensure!(secs > 0, "{TIMEOUT_VAR} must be greater than zero");
            config.request_timeout = Duration::from_secs(secs);
        }

        Ok(config)
    }
}

/// Parse a base URL and make sure endpoint names join underneath it.
pub fn parse_base_url(raw: &str) -> Result<Url> {
    let mut url = Url::parse(raw).context("Failed to parse URL")?;
    anyhow::ensure!(
        matches!(url.scheme(), "http" | "https"),
        "Backend URL must use http or https"
    );
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}
