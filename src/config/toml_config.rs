use crate::utils::error::{ConcertError, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    pub api: Option<ApiConfig>,
    pub search: Option<SearchConfig>,
    pub availability: Option<AvailabilityConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiConfig {
    pub key: Option<String>,
    pub discovery_endpoint: Option<String>,
    pub availability_endpoint: Option<String>,
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchConfig {
    pub artist: Option<String>,
    pub city: Option<String>,
    pub classification: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AvailabilityConfig {
    pub batch_size: Option<usize>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(ConcertError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| ConcertError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${TICKETMASTER_API_KEY})，未設定的保留原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| ConcertError::ConfigError {
            message: format!("Invalid placeholder pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FinderConfig;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
[api]
key = "abc123"
discovery_endpoint = "https://api.example.com/events"
timeout_seconds = 10

[search]
artist = "Phish"
city = "Denver"

[availability]
batch_size = 20
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        let api = config.api.as_ref().unwrap();

        assert_eq!(api.key.as_deref(), Some("abc123"));
        assert_eq!(api.timeout_seconds, Some(10));
        assert_eq!(config.search.as_ref().unwrap().artist.as_deref(), Some("Phish"));
        assert_eq!(config.availability.as_ref().unwrap().batch_size, Some(20));
    }

    #[test]
    fn test_sections_are_optional() {
        let config = TomlConfig::from_toml_str("[search]\ncity = \"Austin\"\n").unwrap();

        let mut finder = FinderConfig::new("key", "Spoon", "Denver");
        finder.merge_toml(&config);

        assert_eq!(finder.city, "Austin");
        assert_eq!(finder.artist_name, "Spoon");
        assert_eq!(finder.api_key, "key");
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("CONCERT_FINDER_TEST_KEY", "from-env");

        let config =
            TomlConfig::from_toml_str("[api]\nkey = \"${CONCERT_FINDER_TEST_KEY}\"\n").unwrap();
        assert_eq!(config.api.unwrap().key.as_deref(), Some("from-env"));

        std::env::remove_var("CONCERT_FINDER_TEST_KEY");
    }

    #[test]
    fn test_unset_env_var_is_left_in_place() {
        let config = TomlConfig::from_toml_str(
            "[api]\nkey = \"${CONCERT_FINDER_SURELY_UNSET_VARIABLE}\"\n",
        )
        .unwrap();

        assert_eq!(
            config.api.unwrap().key.as_deref(),
            Some("${CONCERT_FINDER_SURELY_UNSET_VARIABLE}")
        );
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let result = TomlConfig::from_toml_str("[api\nkey = ");
        assert!(matches!(
            result,
            Err(ConcertError::ConfigValidationError { .. })
        ));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[search]\nartist = \"Khruangbin\"\ncity = \"Houston\"\n")
            .unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(
            config.search.unwrap().artist.as_deref(),
            Some("Khruangbin")
        );
    }
}
