//! HTTP client for the three location endpoints.
//!
//! The API exposes read-only JSON arrays of display names:
//!
//! ```text
//! GET /countries
//! GET /country={country}/states
//! GET /country={country}/state={state}/cities
//! ```
//!
//! Path parameters are display names selected by the user, so they are
//! percent-encoded before interpolation.

use std::time::Duration;

use thiserror::Error;

/// Errors that can occur while fetching a location list.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport-level failure (connect error, timeout, ...).
    #[error("request to {url} failed: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a non-success status.
    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    /// The body was not a JSON array of strings.
    #[error("invalid response from {url}: {source}")]
    InvalidResponse {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

/// Thin wrapper around `reqwest::Client` bound to one API base URL.
#[derive(Debug, Clone)]
pub struct LocationClient {
    client: reqwest::Client,
    base_url: String,
}

impl LocationClient {
    /// Build a client. `timeout` bounds each request so a hung fetch
    /// settles as an error instead of spinning forever.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn countries(&self) -> Result<Vec<String>, ApiError> {
        self.fetch_list(&self.countries_url()).await
    }

    pub async fn states(&self, country: &str) -> Result<Vec<String>, ApiError> {
        self.fetch_list(&self.states_url(country)).await
    }

    pub async fn cities(&self, country: &str, state: &str) -> Result<Vec<String>, ApiError> {
        self.fetch_list(&self.cities_url(country, state)).await
    }

    fn countries_url(&self) -> String {
        format!("{}/countries", self.base_url)
    }

    fn states_url(&self, country: &str) -> String {
        format!("{}/country={}/states", self.base_url, encode_segment(country))
    }

    fn cities_url(&self, country: &str, state: &str) -> String {
        format!(
            "{}/country={}/state={}/cities",
            self.base_url,
            encode_segment(country),
            encode_segment(state)
        )
    }

    async fn fetch_list(&self, url: &str) -> Result<Vec<String>, ApiError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| ApiError::Network {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        response
            .json::<Vec<String>>()
            .await
            .map_err(|source| ApiError::InvalidResponse {
                url: url.to_string(),
                source,
            })
    }
}

/// Percent-encode a path segment. Display names can contain spaces and
/// punctuation; everything outside the unreserved set is escaped.
fn encode_segment(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for byte in s.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char)
            }
            _ => out.push_str(&format!("%{:02X}", byte)),
        }
    }
    out
}
