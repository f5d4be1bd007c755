use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConcertError {
    #[error("Request to Ticketmaster API failed: {0}")]
    Request(reqwest::Error),

    #[error("Ticketmaster API returned HTTP {status} for {endpoint}")]
    HttpStatus { endpoint: String, status: u16 },

    #[error("Failed to decode API response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration validation failed for {field}: {message}")]
    ConfigValidationError { field: String, message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Upstream,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ConcertError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ConcertError::Request(_) => ErrorCategory::Network,
            ConcertError::HttpStatus { .. } | ConcertError::Decode(_) => ErrorCategory::Upstream,
            ConcertError::IoError(_) => ErrorCategory::System,
            ConcertError::ConfigError { .. }
            | ConcertError::MissingConfigError { .. }
            | ConcertError::InvalidConfigValueError { .. }
            | ConcertError::ConfigValidationError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Network | ErrorCategory::Upstream => ErrorSeverity::Medium,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    /// 給終端使用者看的簡短訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            ConcertError::Request(e) if e.is_timeout() => {
                "The Ticketmaster API did not answer in time".to_string()
            }
            ConcertError::Request(_) => "Could not reach the Ticketmaster API".to_string(),
            ConcertError::HttpStatus { status, .. } => {
                format!("The Ticketmaster API rejected the request (HTTP {})", status)
            }
            ConcertError::Decode(_) => {
                "The Ticketmaster API returned data in an unexpected shape".to_string()
            }
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            ConcertError::Request(_) => "Check your network connection and try again",
            ConcertError::HttpStatus { status: 401, .. }
            | ConcertError::HttpStatus { status: 403, .. } => {
                "Check that the API key is valid for the Discovery and Inventory Status APIs"
            }
            ConcertError::HttpStatus { status: 429, .. } => {
                "The API quota was exceeded, wait a moment before retrying"
            }
            ConcertError::HttpStatus { .. } | ConcertError::Decode(_) => {
                "Verify the configured endpoints point at the Ticketmaster API"
            }
            ConcertError::IoError(_) => "Check file permissions and available disk space",
            ConcertError::ConfigError { .. }
            | ConcertError::MissingConfigError { .. }
            | ConcertError::InvalidConfigValueError { .. }
            | ConcertError::ConfigValidationError { .. } => {
                "Review the command line flags and the TOML config file"
            }
        }
    }

    /// 單行的錯誤訊息與建議，供 CLI 輸出
    pub fn diagnostic_line(&self) -> String {
        format!(
            "❌ {} 💡 {}",
            self.user_friendly_message(),
            self.recovery_suggestion()
        )
    }

    /// 依嚴重程度決定程式結束碼
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, ConcertError>;
