use crate::core::backoff::{DEFAULT_BASE_DELAY, DEFAULT_MAX_ATTEMPTS};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{Result, SajuError};
use crate::utils::validation::{
    validate_http_url, validate_positive_number, validate_ws_url, Validate,
};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";
pub const DEFAULT_WS_URL: &str = "ws://localhost:8000/ws/monitor";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 10;
pub const DEFAULT_CHANNEL_CAPACITY: usize = 64;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub monitor: MonitorConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiConfig {
    pub base_url: Option<String>,
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MonitorConfig {
    pub ws_url: Option<String>,
    pub max_reconnect_attempts: Option<u32>,
    pub reconnect_base_delay_ms: Option<u64>,
    pub channel_capacity: Option<usize>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
    pub json: Option<bool>,
}

impl TomlConfig {
    /// Loads a config file, substituting `${VAR}` references first.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| SajuError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value; unknown vars stay as-is.
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| SajuError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn with_api_base_url(mut self, url: Option<String>) -> Self {
        if let Some(url) = url {
            tracing::debug!("api.base_url overridden to {}", url);
            self.api.base_url = Some(url);
        }
        self
    }

    pub fn with_ws_url(mut self, url: Option<String>) -> Self {
        if let Some(url) = url {
            tracing::debug!("monitor.ws_url overridden to {}", url);
            self.monitor.ws_url = Some(url);
        }
        self
    }

    pub fn log_level(&self) -> Option<&str> {
        self.logging.level.as_deref()
    }

    pub fn json_logs(&self) -> bool {
        self.logging.json.unwrap_or(false)
    }
}

impl ConfigProvider for TomlConfig {
    fn api_base_url(&self) -> &str {
        self.api.base_url.as_deref().unwrap_or(DEFAULT_API_BASE_URL)
    }

    fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.api.timeout_seconds.unwrap_or(DEFAULT_TIMEOUT_SECONDS))
    }

    fn ws_url(&self) -> &str {
        self.monitor.ws_url.as_deref().unwrap_or(DEFAULT_WS_URL)
    }

    fn max_reconnect_attempts(&self) -> u32 {
        self.monitor
            .max_reconnect_attempts
            .unwrap_or(DEFAULT_MAX_ATTEMPTS)
    }

    fn reconnect_base_delay(&self) -> Duration {
        self.monitor
            .reconnect_base_delay_ms
            .map(Duration::from_millis)
            .unwrap_or(DEFAULT_BASE_DELAY)
    }

    fn channel_capacity(&self) -> usize {
        self.monitor
            .channel_capacity
            .unwrap_or(DEFAULT_CHANNEL_CAPACITY)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validate_http_url("api.base_url", self.api_base_url())?;
        validate_ws_url("monitor.ws_url", self.ws_url())?;
        validate_positive_number("api.timeout_seconds", self.request_timeout().as_secs(), 1)?;
        validate_positive_number(
            "monitor.channel_capacity",
            self.channel_capacity() as u64,
            1,
        )?;

        if let Some(level) = self.log_level() {
            let valid_levels = ["trace", "debug", "info", "warn", "error"];
            if !valid_levels.contains(&level) {
                return Err(SajuError::InvalidConfigValueError {
                    field: "logging.level".to_string(),
                    value: level.to_string(),
                    reason: format!("Valid levels: {}", valid_levels.join(", ")),
                });
            }
        }

        Ok(())
    }
}
