//! Blocking HTTP source against the Treasury CSV endpoints.

use std::time::Duration;

use reqwest::blocking::Client;
use tracing::debug;

use parcurve_core::{RateSource, SourceError};

use crate::config::EndpointConfig;

/// Fetches par yield CSVs from home.treasury.gov.
///
/// Requests block until the full body arrives. There is no timeout and no
/// retry; a stalled request stalls the caller.
pub struct TreasuryHttpSource {
    client: Client,
    endpoints: EndpointConfig,
}

impl TreasuryHttpSource {
    /// Creates a source for the given endpoints.
    pub fn new(endpoints: EndpointConfig) -> Result<Self, SourceError> {
        let client = Client::builder()
            .user_agent(endpoints.user_agent.clone())
            .timeout(None::<Duration>)
            .build()
            .map_err(|e| SourceError::Http {
                url: String::new(),
                message: e.to_string(),
            })?;
        Ok(Self { client, endpoints })
    }

    /// Endpoint configuration in use.
    #[must_use]
    pub fn endpoints(&self) -> &EndpointConfig {
        &self.endpoints
    }

    fn get_text(&self, url: &str) -> Result<String, SourceError> {
        debug!(url, "GET");
        let http_error = |e: reqwest::Error| SourceError::Http {
            url: url.to_string(),
            message: e.to_string(),
        };

        let response = self
            .client
            .get(url)
            .send()
            .map_err(http_error)?
            .error_for_status()
            .map_err(http_error)?;
        let body = response.text().map_err(http_error)?;
        debug!(url, bytes = body.len(), "Response received");
        Ok(body)
    }
}

impl RateSource for TreasuryHttpSource {
    fn fetch_year(&self, year: i32) -> Result<String, SourceError> {
        self.get_text(&self.endpoints.yearly_url(year))
    }

    fn fetch_archive(&self) -> Result<String, SourceError> {
        self.get_text(&self.endpoints.archive_url)
    }
}
