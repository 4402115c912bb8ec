//! Blocking HTTP client for the home lights REST API
//!
//! This crate provides a minimal client for the two read endpoints of the
//! lights service and the [`LightSource`] seam the state crate polls through:
//!
//! - `GET /lights` lists every light
//! - `GET /lights/{id}` returns the power state and brightness of one light
//!
//! Every failure (connection, status, body) comes back as a [`ClientError`]
//! value; nothing in here panics on bad input from the wire.

mod error;
pub mod payload;

pub use error::{ClientError, Result};
pub use payload::{LightDetail, LightSummary};

use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

/// Where light data comes from
///
/// Implemented over HTTP by [`LightsClient`]; tests implement it in memory.
pub trait LightSource {
    /// Fetch the full listing of lights
    fn fetch_all(&self) -> Result<Vec<LightSummary>>;

    /// Fetch the detail record for a single light
    fn fetch_one(&self, id: &str) -> Result<LightDetail>;
}

impl<S: LightSource + ?Sized> LightSource for &S {
    fn fetch_all(&self) -> Result<Vec<LightSummary>> {
        (**self).fetch_all()
    }

    fn fetch_one(&self, id: &str) -> Result<LightDetail> {
        (**self).fetch_one(id)
    }
}

/// A minimal client for the lights API
#[derive(Debug, Clone)]
pub struct LightsClient {
    agent: ureq::Agent,
    base_url: String,
}

impl LightsClient {
    /// Create a client for `http://{host}:{port}` with default timeouts
    pub fn new(host: &str, port: u16) -> Self {
        Self::with_timeouts(host, port, Duration::from_secs(5), Duration::from_secs(10))
    }

    /// Create a client with explicit connect and read timeouts
    pub fn with_timeouts(host: &str, port: u16, connect: Duration, read: Duration) -> Self {
        Self {
            agent: ureq::AgentBuilder::new()
                .timeout_connect(connect)
                .timeout_read(read)
                .build(),
            base_url: format!("http://{}:{}", host, port),
        }
    }

    /// Root URL every request is built from
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET /lights`
    pub fn get_lights(&self) -> Result<Vec<LightSummary>> {
        self.get_json("/lights")
    }

    /// `GET /lights/{id}`
    pub fn get_light(&self, id: &str) -> Result<LightDetail> {
        self.get_json(&format!("/lights/{}", id))
    }

    /// Check that the server answers the listing endpoint with 200 OK
    pub fn is_reachable(&self) -> bool {
        let url = format!("{}/lights", self.base_url);
        match self.agent.get(&url).call() {
            Ok(response) => response.status() == 200,
            Err(e) => {
                debug!("Reachability check against {} failed: {}", url, e);
                false
            }
        }
    }

    fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        debug!("GET {}", url);

        let response = self.agent.get(&url).call().map_err(|e| match e {
            ureq::Error::Status(code, _) => ClientError::Status(code),
            other => ClientError::Network(other.to_string()),
        })?;

        // ureq only errors on 4xx/5xx; anything but 200 is still a failure here
        if response.status() != 200 {
            return Err(ClientError::Status(response.status()));
        }

        let body = response
            .into_string()
            .map_err(|e| ClientError::Network(e.to_string()))?;

        serde_json::from_str(&body).map_err(|e| ClientError::Parse(e.to_string()))
    }
}

impl LightSource for LightsClient {
    fn fetch_all(&self) -> Result<Vec<LightSummary>> {
        self.get_lights()
    }

    fn fetch_one(&self, id: &str) -> Result<LightDetail> {
        self.get_light(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_base_url() {
        let client = LightsClient::new("localhost", 8080);
        assert_eq!(client.base_url(), "http://localhost:8080");
    }

    #[test]
    fn test_client_with_timeouts() {
        let client = LightsClient::with_timeouts(
            "127.0.0.1",
            3000,
            Duration::from_millis(100),
            Duration::from_millis(200),
        );
        assert_eq!(client.base_url(), "http://127.0.0.1:3000");
    }

    #[test]
    fn test_error_is_network() {
        assert!(ClientError::Network("refused".to_string()).is_network());
        assert!(!ClientError::Status(404).is_network());
        assert!(!ClientError::Parse("eof".to_string()).is_network());
    }
}
