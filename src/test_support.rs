//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::Mutex;

use async_trait::async_trait;

use crate::api::types::{RawFlags, RawMaps};
use crate::api::{CountrySource, FetchError, RawCountry, RawCurrency, RawName};
use crate::core::config::ResolvedConfig;
use crate::core::state::App;

/// An in-memory source that records which endpoint was hit.
pub struct FakeSource {
    countries: Vec<RawCountry>,
    fail: bool,
    search_calls: Mutex<Vec<String>>,
    all_calls: Mutex<usize>,
}

impl FakeSource {
    pub fn with_countries(countries: Vec<RawCountry>) -> Self {
        Self {
            countries,
            fail: false,
            search_calls: Mutex::new(Vec::new()),
            all_calls: Mutex::new(0),
        }
    }

    /// A source whose every request fails at the network level.
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::with_countries(Vec::new())
        }
    }

    pub fn search_calls(&self) -> Vec<String> {
        self.search_calls.lock().unwrap().clone()
    }

    pub fn all_calls(&self) -> usize {
        *self.all_calls.lock().unwrap()
    }
}

#[async_trait]
impl CountrySource for FakeSource {
    fn name(&self) -> &str {
        "fake"
    }

    async fn search(&self, query: &str) -> Result<Vec<RawCountry>, FetchError> {
        self.search_calls.lock().unwrap().push(query.to_string());
        if self.fail {
            return Err(FetchError::Network("connection refused".into()));
        }
        Ok(self.countries.clone())
    }

    async fn all(&self) -> Result<Vec<RawCountry>, FetchError> {
        *self.all_calls.lock().unwrap() += 1;
        if self.fail {
            return Err(FetchError::Network("connection refused".into()));
        }
        Ok(self.countries.clone())
    }
}

/// A complete raw record: Euro currency, population 1234567.
pub fn raw_country(code: &str, name: &str) -> RawCountry {
    RawCountry {
        cca3: code.to_string(),
        name: Some(RawName {
            common: name.to_string(),
        }),
        continents: Some(vec!["Europe".to_string()]),
        capital: Some(vec![format!("Capital of {name}")]),
        currencies: vec![(
            "EUR".to_string(),
            RawCurrency {
                name: "Euro".to_string(),
                symbol: "€".to_string(),
            },
        )],
        languages: vec![("lng".to_string(), format!("Language of {name}"))],
        maps: RawMaps {
            google_maps: format!("https://maps.example/{code}"),
        },
        population: Some(1234567),
        flags: RawFlags {
            png: format!("https://flags.example/{code}.png"),
        },
    }
}

/// Creates a test App with default config.
pub fn test_app() -> App {
    App::from_config(&ResolvedConfig::default())
}
