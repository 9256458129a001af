use thiserror::Error;

#[derive(Error, Debug)]
pub enum SajuError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("API returned {status} for {endpoint}: {body}")]
    ApiStatusError {
        status: u16,
        endpoint: String,
        body: String,
    },

    #[error("WebSocket error: {0}")]
    WebSocketError(#[from] tokio_tungstenite::tungstenite::Error),

    #[error("Monitor connection lost after {attempts} reconnect attempts")]
    ReconnectExhausted { attempts: u32 },

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Background task failed: {0}")]
    TaskError(#[from] tokio::task::JoinError),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Unknown zodiac id: {id}")]
    UnknownZodiac { id: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Missing configuration field: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Validation error: {message}")]
    ValidationError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Configuration,
    Input,
    Data,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl SajuError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            SajuError::ApiError(_)
            | SajuError::ApiStatusError { .. }
            | SajuError::WebSocketError(_)
            | SajuError::ReconnectExhausted { .. } => ErrorCategory::Network,
            SajuError::ConfigError { .. }
            | SajuError::MissingConfigError { .. }
            | SajuError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            SajuError::UnknownZodiac { .. } | SajuError::ValidationError { .. } => {
                ErrorCategory::Input
            }
            SajuError::CsvError(_) | SajuError::SerializationError(_) => ErrorCategory::Data,
            SajuError::IoError(_) | SajuError::TaskError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // 4xx is the caller's fault, 5xx and transport failures may pass on retry
            SajuError::ApiStatusError { status, .. } if *status < 500 => ErrorSeverity::High,
            SajuError::ApiStatusError { .. }
            | SajuError::ApiError(_)
            | SajuError::WebSocketError(_)
            | SajuError::ReconnectExhausted { .. } => ErrorSeverity::Medium,
            SajuError::UnknownZodiac { .. }
            | SajuError::ValidationError { .. }
            | SajuError::ConfigError { .. }
            | SajuError::MissingConfigError { .. }
            | SajuError::InvalidConfigValueError { .. }
            | SajuError::CsvError(_)
            | SajuError::SerializationError(_) => ErrorSeverity::High,
            SajuError::IoError(_) | SajuError::TaskError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn is_retryable(&self) -> bool {
        self.severity() == ErrorSeverity::Medium
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            SajuError::ApiError(_) => {
                "Check that the backend is reachable and api.base_url is correct".to_string()
            }
            SajuError::ApiStatusError { status, .. } if *status == 401 || *status == 403 => {
                "Check the admin credentials for this backend".to_string()
            }
            SajuError::ApiStatusError { status, .. } if *status >= 500 => {
                "The backend failed; retry later".to_string()
            }
            SajuError::ApiStatusError { .. } => "Check the request arguments".to_string(),
            SajuError::WebSocketError(_) | SajuError::ReconnectExhausted { .. } => {
                "Check monitor.ws_url and that the monitor endpoint is running".to_string()
            }
            SajuError::UnknownZodiac { .. } => format!(
                "Use one of: {}",
                crate::domain::model::ZodiacId::ALL
                    .iter()
                    .map(|z| z.as_str())
                    .collect::<Vec<_>>()
                    .join(", ")
            ),
            SajuError::ConfigError { .. }
            | SajuError::MissingConfigError { .. }
            | SajuError::InvalidConfigValueError { .. } => {
                "Fix the configuration file or command-line flags".to_string()
            }
            SajuError::ValidationError { .. } => "Check the input values".to_string(),
            SajuError::CsvError(_) | SajuError::SerializationError(_) => {
                "The data could not be encoded or decoded; check the backend response".to_string()
            }
            SajuError::IoError(_) => "Check file paths and permissions".to_string(),
            SajuError::TaskError(_) => "This is a bug; rerun with --verbose and report it".to_string(),
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Network => format!("Network problem: {}", self),
            ErrorCategory::Configuration => format!("Configuration problem: {}", self),
            ErrorCategory::Input => format!("Invalid input: {}", self),
            ErrorCategory::Data => format!("Data problem: {}", self),
            ErrorCategory::System => format!("System problem: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, SajuError>;
