#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::adapters::ticketmaster::{DEFAULT_AVAILABILITY_ENDPOINT, DEFAULT_DISCOVERY_ENDPOINT};
use crate::core::{ConfigProvider, SearchQuery};
use crate::utils::error::{ConcertError, Result};
use crate::utils::validation::{self, Validate};
use toml_config::TomlConfig;

pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;
pub const DEFAULT_AVAILABILITY_BATCH_SIZE: usize = 50;

/// 執行一次搜尋所需的完整設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FinderConfig {
    pub api_key: String,
    pub artist_name: String,
    pub city: String,
    pub classification: String,
    pub discovery_endpoint: String,
    pub availability_endpoint: String,
    pub timeout_seconds: u64,
    pub availability_batch_size: usize,
}

impl Default for FinderConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            artist_name: String::new(),
            city: String::new(),
            classification: "music".to_string(),
            discovery_endpoint: DEFAULT_DISCOVERY_ENDPOINT.to_string(),
            availability_endpoint: DEFAULT_AVAILABILITY_ENDPOINT.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
            availability_batch_size: DEFAULT_AVAILABILITY_BATCH_SIZE,
        }
    }
}

impl FinderConfig {
    pub fn new(
        api_key: impl Into<String>,
        artist_name: impl Into<String>,
        city: impl Into<String>,
    ) -> Self {
        Self {
            api_key: api_key.into(),
            artist_name: artist_name.into(),
            city: city.into(),
            ..Self::default()
        }
    }

    /// 以 TOML 檔案中有設定的欄位覆寫目前的值
    pub fn merge_toml(&mut self, file: &TomlConfig) {
        if let Some(api) = &file.api {
            if let Some(key) = &api.key {
                self.api_key = key.clone();
            }
            if let Some(endpoint) = &api.discovery_endpoint {
                self.discovery_endpoint = endpoint.clone();
            }
            if let Some(endpoint) = &api.availability_endpoint {
                self.availability_endpoint = endpoint.clone();
            }
            if let Some(timeout) = api.timeout_seconds {
                self.timeout_seconds = timeout;
            }
        }

        if let Some(search) = &file.search {
            if let Some(artist) = &search.artist {
                self.artist_name = artist.clone();
            }
            if let Some(city) = &search.city {
                self.city = city.clone();
            }
            if let Some(classification) = &search.classification {
                self.classification = classification.clone();
            }
        }

        if let Some(batch_size) = file.availability.as_ref().and_then(|a| a.batch_size) {
            self.availability_batch_size = batch_size;
        }
    }

    pub fn search_query(&self) -> SearchQuery {
        SearchQuery::new(&self.artist_name, &self.city).with_classification(&self.classification)
    }
}

fn reject_unresolved_placeholder(field_name: &str, value: &str) -> Result<()> {
    if value.contains("${") {
        return Err(ConcertError::ConfigValidationError {
            field: field_name.to_string(),
            message: format!("Environment variable placeholder was not resolved: {}", value),
        });
    }
    Ok(())
}

impl Validate for FinderConfig {
    fn validate(&self) -> Result<()> {
        if self.api_key.is_empty() {
            return Err(ConcertError::MissingConfigError {
                field: "api_key".to_string(),
            });
        }
        reject_unresolved_placeholder("api_key", &self.api_key)?;
        validation::validate_non_empty_string("artist_name", &self.artist_name)?;
        validation::validate_non_empty_string("city", &self.city)?;
        validation::validate_non_empty_string("classification", &self.classification)?;
        validation::validate_url("discovery_endpoint", &self.discovery_endpoint)?;
        validation::validate_url("availability_endpoint", &self.availability_endpoint)?;
        validation::validate_range("timeout_seconds", self.timeout_seconds, 1, 300)?;
        validation::validate_positive_number(
            "availability_batch_size",
            self.availability_batch_size,
            1,
        )?;
        Ok(())
    }
}

impl ConfigProvider for FinderConfig {
    fn api_key(&self) -> &str {
        &self.api_key
    }

    fn discovery_endpoint(&self) -> &str {
        &self.discovery_endpoint
    }

    fn availability_endpoint(&self) -> &str {
        &self.availability_endpoint
    }

    fn timeout_seconds(&self) -> u64 {
        self.timeout_seconds
    }

    fn availability_batch_size(&self) -> usize {
        self.availability_batch_size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_point_at_ticketmaster() {
        let config = FinderConfig::new("key", "Phish", "Denver");

        assert_eq!(
            config.discovery_endpoint,
            "https://app.ticketmaster.com/discovery/v2/events"
        );
        assert_eq!(config.availability_batch_size, 50);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_missing_api_key_fails_validation() {
        let config = FinderConfig::new("", "Phish", "Denver");
        assert!(matches!(
            config.validate(),
            Err(ConcertError::MissingConfigError { .. })
        ));
    }

    #[test]
    fn test_unresolved_placeholder_fails_validation() {
        let config = FinderConfig::new("${TICKETMASTER_API_KEY}", "Phish", "Denver");
        assert!(matches!(
            config.validate(),
            Err(ConcertError::ConfigValidationError { .. })
        ));
    }

    #[test]
    fn test_zero_batch_size_fails_validation() {
        let mut config = FinderConfig::new("key", "Phish", "Denver");
        config.availability_batch_size = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_search_query_carries_classification() {
        let mut config = FinderConfig::new("key", "Phish", "Denver");
        config.classification = "comedy".to_string();

        let query = config.search_query();
        assert_eq!(query.artist_name, "Phish");
        assert_eq!(query.city, "Denver");
        assert_eq!(query.classification, "comedy");
    }
}
