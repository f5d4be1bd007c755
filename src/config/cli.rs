use crate::config::toml_config::TomlConfig;
use crate::config::FinderConfig;
use crate::core::formatter::OutputFormat;
use crate::utils::error::Result;
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "concert-finder")]
#[command(about = "Find concerts for an artist in a city and check ticket availability")]
pub struct CliConfig {
    #[arg(long, help = "TOML config file; command line flags take precedence")]
    pub config: Option<String>,

    #[arg(long, help = "Ticketmaster API key")]
    pub api_key: Option<String>,

    #[arg(long)]
    pub artist: Option<String>,

    #[arg(long)]
    pub city: Option<String>,

    #[arg(long, help = "Classification filter [default: music]")]
    pub classification: Option<String>,

    #[arg(long)]
    pub discovery_endpoint: Option<String>,

    #[arg(long)]
    pub availability_endpoint: Option<String>,

    #[arg(long)]
    pub timeout_seconds: Option<u64>,

    #[arg(long, help = "Maximum event ids per availability request [default: 50]")]
    pub batch_size: Option<usize>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub output: OutputFormat,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// 依序套用預設值、TOML 檔案與命令列參數
    pub fn resolve(&self) -> Result<FinderConfig> {
        let mut config = FinderConfig::default();

        if let Some(path) = &self.config {
            tracing::debug!("Loading config file: {}", path);
            config.merge_toml(&TomlConfig::from_file(path)?);
        }

        if let Some(api_key) = &self.api_key {
            config.api_key = api_key.clone();
        }
        if let Some(artist) = &self.artist {
            config.artist_name = artist.clone();
        }
        if let Some(city) = &self.city {
            config.city = city.clone();
        }
        if let Some(classification) = &self.classification {
            config.classification = classification.clone();
        }
        if let Some(endpoint) = &self.discovery_endpoint {
            config.discovery_endpoint = endpoint.clone();
        }
        if let Some(endpoint) = &self.availability_endpoint {
            config.availability_endpoint = endpoint.clone();
        }
        if let Some(timeout) = self.timeout_seconds {
            config.timeout_seconds = timeout;
        }
        if let Some(batch_size) = self.batch_size {
            config.availability_batch_size = batch_size;
        }

        Ok(config)
    }
}
