//! Blocking HTTP client for the zip-distance service.

use std::time::Duration;

use serde_json::Value;
use url::Url;

use super::{DistanceLookup, LookupError, ZipDistanceConfig};

/// [`DistanceLookup`] backed by the zipcodeapi.com `distance.json` endpoint.
///
/// The body is decoded whatever the HTTP status: the service reports
/// problems as JSON bodies carrying `error_msg`, and those need to reach the
/// caller.
#[derive(Debug, Clone)]
pub struct ZipCodeApiClient {
    http: reqwest::blocking::Client,
    base_url: Url,
    api_key: String,
    unit: String,
}

impl ZipCodeApiClient {
    /// Builds a client with the configured connect timeout.
    pub fn new(config: &ZipDistanceConfig) -> Result<Self, LookupError> {
        let base_url = Url::parse(&config.base_url).map_err(|source| LookupError::BaseUrl {
            url: config.base_url.clone(),
            source,
        })?;
        if base_url.cannot_be_a_base() {
            return Err(LookupError::CannotBeABase(config.base_url.clone()));
        }

        let http = reqwest::blocking::Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .build()
            .map_err(LookupError::Client)?;

        Ok(Self {
            http,
            base_url,
            api_key: config.api_key.clone(),
            unit: config.unit.clone(),
        })
    }

    /// The request URL for one lookup. Every segment is percent-encoded.
    pub fn endpoint(&self, origin: &str, candidate: &str) -> Result<Url, LookupError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| LookupError::CannotBeABase(self.base_url.to_string()))?
            .pop_if_empty()
            .extend([
                self.api_key.as_str(),
                "distance.json",
                origin,
                candidate,
                self.unit.as_str(),
            ]);
        Ok(url)
    }
}

impl DistanceLookup for ZipCodeApiClient {
    fn distance(&self, origin: &str, candidate: &str) -> Result<Value, LookupError> {
        let url = self.endpoint(origin, candidate)?;
        tracing::debug!(origin, candidate, "requesting zip distance");

        let response = self.http.get(url).send()?;
        let status = response.status();
        let body = response.text()?;

        serde_json::from_str(&body).map_err(|source| LookupError::MalformedBody {
            status: status.as_u16(),
            source,
        })
    }
}
