use std::fmt;

use async_trait::async_trait;
use log::{debug, info};
use rand::seq::SliceRandom;

use super::types::RawCountry;

/// Errors that can occur while fetching countries.
///
/// Callers collapse every variant into "no results"; the variants exist for
/// the log file.
#[derive(Debug)]
pub enum FetchError {
    /// Network-level failure (DNS, connection refused, reset).
    Network(String),
    /// The provider answered with a non-success status.
    Api { status: u16, message: String },
    /// The body was not a JSON array of countries.
    Parse(String),
    /// Random mode got an empty dataset to pick from.
    EmptyDataset,
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Network(msg) => write!(f, "network error: {msg}"),
            FetchError::Api { status, message } => {
                write!(f, "API error (HTTP {status}): {message}")
            }
            FetchError::Parse(msg) => write!(f, "parse error: {msg}"),
            FetchError::EmptyDataset => write!(f, "provider returned no countries"),
        }
    }
}

impl std::error::Error for FetchError {}

/// Which of the two requests to issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchMode {
    /// Name-filtered lookup. The text is used verbatim.
    Search(String),
    /// Full dataset, then one record picked uniformly at random.
    Random,
}

/// A provider of raw country records.
///
/// The production implementation talks to restcountries.com; tests swap in
/// a fake.
#[async_trait]
pub trait CountrySource: Send + Sync {
    /// Returns the name of the source.
    fn name(&self) -> &str;

    /// Countries whose name matches `query`.
    async fn search(&self, query: &str) -> Result<Vec<RawCountry>, FetchError>;

    /// The full, unfiltered dataset.
    async fn all(&self) -> Result<Vec<RawCountry>, FetchError>;
}

/// Performs exactly one request against `source` for the given mode.
pub async fn fetch(source: &dyn CountrySource, mode: &FetchMode) -> Result<Vec<RawCountry>, FetchError> {
    match mode {
        FetchMode::Search(query) => {
            info!("Searching {} for {:?}", source.name(), query);
            source.search(query).await
        }
        FetchMode::Random => {
            info!("Fetching full dataset from {} for random pick", source.name());
            let all = source.all().await?;
            debug!("Picking from {} countries", all.len());
            pick_random(all).map(|country| vec![country])
        }
    }
}

fn pick_random(countries: Vec<RawCountry>) -> Result<RawCountry, FetchError> {
    countries
        .choose(&mut rand::thread_rng())
        .cloned()
        .ok_or(FetchError::EmptyDataset)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{FakeSource, raw_country};

    #[tokio::test]
    async fn test_search_uses_name_endpoint_only() {
        let source = FakeSource::with_countries(vec![raw_country("FRA", "France")]);
        let result = fetch(&source, &FetchMode::Search("france".into())).await.unwrap();

        assert_eq!(result.len(), 1);
        assert_eq!(source.search_calls(), vec!["france".to_string()]);
        assert_eq!(source.all_calls(), 0);
    }

    #[tokio::test]
    async fn test_random_uses_full_dataset_and_yields_one() {
        let source = FakeSource::with_countries(vec![
            raw_country("FRA", "France"),
            raw_country("DEU", "Germany"),
            raw_country("ITA", "Italy"),
        ]);

        for _ in 0..10 {
            let result = fetch(&source, &FetchMode::Random).await.unwrap();
            assert_eq!(result.len(), 1);
            assert!(["FRA", "DEU", "ITA"].contains(&result[0].cca3.as_str()));
        }
        assert_eq!(source.all_calls(), 10);
        assert!(source.search_calls().is_empty());
    }

    #[tokio::test]
    async fn test_random_on_empty_dataset_fails() {
        let source = FakeSource::with_countries(vec![]);
        let result = fetch(&source, &FetchMode::Random).await;
        assert!(matches!(result, Err(FetchError::EmptyDataset)));
    }

    #[tokio::test]
    async fn test_failure_propagates_unchanged() {
        let source = FakeSource::failing();
        let result = fetch(&source, &FetchMode::Search("x".into())).await;
        assert!(matches!(result, Err(FetchError::Network(_))));
    }

    #[test]
    fn test_fetch_error_display() {
        let err = FetchError::Api { status: 404, message: "Not Found".into() };
        assert_eq!(err.to_string(), "API error (HTTP 404): Not Found");
    }
}
