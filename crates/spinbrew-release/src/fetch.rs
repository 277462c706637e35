//! Blocking HTTP retrieval of remote metadata documents.

use std::time::Duration;

use spinbrew_common::constants::FETCH_TIMEOUT_SECS;
use spinbrew_common::error::{BreweryError, Result};

fn unavailable(url: &str, reason: impl ToString) -> BreweryError {
    BreweryError::Unavailable {
        url: url.to_owned(),
        reason: reason.to_string(),
    }
}

/// Fetches the body of `url` as text.
///
/// Every fetch blocks the caller until a response arrives, fails, or the
/// timeout elapses.
///
/// # Errors
///
/// Returns [`BreweryError::NotFound`] on HTTP 404 (the requested document
/// does not exist, e.g. a BOM for an unknown release) and
/// [`BreweryError::Unavailable`] on transport failure or any other non-2xx
/// status.
pub fn fetch_text(url: &str) -> Result<String> {
    let client = reqwest::blocking::Client::builder()
        .timeout(Duration::from_secs(FETCH_TIMEOUT_SECS))
        .build()
        .map_err(|e| unavailable(url, e))?;

    tracing::debug!(url, "fetching metadata document");
    let response = client.get(url).send().map_err(|e| unavailable(url, e))?;

    if response.status() == reqwest::StatusCode::NOT_FOUND {
        return Err(BreweryError::NotFound {
            kind: "remote document",
            id: url.to_owned(),
        });
    }
    if !response.status().is_success() {
        return Err(unavailable(url, format!("HTTP {}", response.status())));
    }

    response.text().map_err(|e| unavailable(url, e))
}
