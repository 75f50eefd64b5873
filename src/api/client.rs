//! REST Countries client.
//!
//! Two endpoints are used:
//! - `GET {base}/name/{query}` for name lookups
//! - `GET {base}/all` for the full dataset (random mode)
//!
//! One attempt per call. No retries, no timeout beyond reqwest's defaults.

use async_trait::async_trait;
use log::{debug, warn};

use super::source::{CountrySource, FetchError};
use super::types::RawCountry;

pub const DEFAULT_BASE_URL: &str = "https://restcountries.com/v3.1";

/// Fields requested from `/all`. The provider rejects `/all` without a
/// field filter, and the filtered payload is a fraction of the full one.
const ALL_FIELDS: &str =
    "cca3,name,continents,capital,currencies,languages,maps,population,flags";

/// restcountries.com API client
pub struct RestCountriesClient {
    base_url: String,
    client: reqwest::Client,
}

impl RestCountriesClient {
    /// Creates a new client.
    ///
    /// # Arguments
    /// * `base_url` - Optional custom base URL (defaults to the public v3.1 API)
    pub fn new(base_url: Option<String>) -> Self {
        let base_url = base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_countries(&self, request: reqwest::RequestBuilder) -> Result<Vec<RawCountry>, FetchError> {
        let response = request
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        debug!("restcountries response status: {}", response.status());

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let err_body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            warn!("restcountries API error: {} - {}", status, err_body);
            return Err(FetchError::Api {
                status,
                message: err_body,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        let countries: Vec<RawCountry> =
            serde_json::from_str(&body).map_err(|e| FetchError::Parse(e.to_string()))?;
        debug!("Parsed {} countries ({} bytes)", countries.len(), body.len());
        Ok(countries)
    }
}

#[async_trait]
impl CountrySource for RestCountriesClient {
    fn name(&self) -> &str {
        "restcountries"
    }

    async fn search(&self, query: &str) -> Result<Vec<RawCountry>, FetchError> {
        let url = format!("{}/name/{}", self.base_url, query);
        self.get_countries(self.client.get(url)).await
    }

    async fn all(&self) -> Result<Vec<RawCountry>, FetchError> {
        let url = format!("{}/all", self.base_url);
        self.get_countries(self.client.get(url).query(&[("fields", ALL_FIELDS)]))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_base_url() {
        let client = RestCountriesClient::new(None);
        assert_eq!(client.base_url(), DEFAULT_BASE_URL);
    }

    #[test]
    fn test_trailing_slash_trimmed() {
        let client = RestCountriesClient::new(Some("http://localhost:9000/v3.1/".into()));
        assert_eq!(client.base_url(), "http://localhost:9000/v3.1");
    }
}
