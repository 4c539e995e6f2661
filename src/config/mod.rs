use crate::utils::error::{Result, SampleError};
use crate::utils::validation::{self, Validate};
use serde::Deserialize;
use std::path::Path;

pub const DEFAULT_MESSAGE: &str = "it has been a success";
pub const DEFAULT_LOG_FILTER: &str = "mailer_sample=info";

/// Environment variable naming an optional TOML config file.
pub const CONFIG_PATH_ENV: &str = "MAILER_SAMPLE_CONFIG";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SampleConfig {
    #[serde(default)]
    pub notification: NotificationConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct NotificationConfig {
    pub message: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoggingConfig {
    pub filter: Option<String>,
    pub format: Option<LogFormat>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

impl SampleConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(SampleError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| SampleError::ConfigParseError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Loads the file named by `MAILER_SAMPLE_CONFIG`, or defaults when unset.
    pub fn from_env() -> Result<Self> {
        match std::env::var_os(CONFIG_PATH_ENV) {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    pub fn message(&self) -> &str {
        self.notification.message.as_deref().unwrap_or(DEFAULT_MESSAGE)
    }
}

impl LoggingConfig {
    pub fn filter(&self) -> &str {
        self.filter.as_deref().unwrap_or(DEFAULT_LOG_FILTER)
    }

    pub fn format(&self) -> LogFormat {
        self.format.unwrap_or_default()
    }
}

impl Validate for SampleConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_non_empty("notification.message", self.message())?;
        validation::validate_single_line("notification.message", self.message())?;
        validation::validate_non_empty("logging.filter", self.logging.filter())?;
        Ok(())
    }
}
