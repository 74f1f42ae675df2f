//! Synchronous client for the **zoo visitor API**.
//!
//! The endpoint returns one JSON document describing a full year of daily
//! visitor counts (see [`crate::models::YearRecord`]). The client performs a
//! single GET per call; there is no retry.
//!
//! ### Notes
//! - Network timeouts use a sane default (30s total, 10s connect).
//! - Transport failures (connection errors, non-2xx status) and malformed
//!   bodies (not JSON) surface as distinct [`ZooError`] variants.
//!
//! Typical usage:
//! ```no_run
//! # use zoo_visitors::Client;
//! let client = Client::default();
//! let payload = client.fetch_raw()?;
//! zoo_visitors::validate::validate(&payload)?;
//! # Ok::<(), zoo_visitors::ZooError>(())
//! ```

use crate::error::{Result, ZooError};
use reqwest::blocking::Client as HttpClient;
use reqwest::redirect::Policy;
use serde_json::Value;
use std::time::Duration;

/// Fixed endpoint serving the current year's visitor data.
pub const DEFAULT_API_URL: &str = "https://korkeasaarenkavijat.onrender.com/api/data/year";

#[derive(Debug, Clone)]
pub struct Client {
    pub url: String,
    http: HttpClient,
}

impl Default for Client {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}

impl Client {
    /// Build a client for `url`.
    pub fn new(url: impl Into<String>) -> Self {
        let http = HttpClient::builder()
            .timeout(Duration::from_secs(30)) // total request timeout
            .connect_timeout(Duration::from_secs(10)) // connect timeout
            .redirect(Policy::limited(5)) // cap redirects
            .user_agent(concat!("zoo_visitors/", env!("CARGO_PKG_VERSION")))
            .build()
            .expect("reqwest client build");
        Self {
            url: url.into(),
            http,
        }
    }

    /// Fetch the raw payload with a single GET.
    ///
    /// ### Errors
    /// - [`ZooError::Transport`]: network error or non-success HTTP status
    /// - [`ZooError::MalformedResponse`]: body is not valid JSON
    pub fn fetch_raw(&self) -> Result<Value> {
        log::info!("GET {}", self.url);
        let resp = self
            .http
            .get(&self.url)
            .send()
            .map_err(|e| ZooError::Transport(e.to_string()))?;

        let status = resp.status();
        log::debug!("response status {}", status);
        if !status.is_success() {
            return Err(ZooError::Transport(format!(
                "request failed with HTTP {status}"
            )));
        }

        let body = resp
            .text()
            .map_err(|e| ZooError::Transport(format!("reading body: {e}")))?;
        serde_json::from_str(&body).map_err(ZooError::MalformedResponse)
    }
}
