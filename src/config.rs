//! Configuration management for the interview client

use crate::error::{InterviewError, Result};
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub api: ApiConfig,
    pub storage: StorageConfig,
    pub interview: InterviewConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    pub state_dir: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterviewConfig {
    /// Primary answers scoring below this get the question's follow-up
    pub follow_up_threshold: u8,
    pub welcome_delay_ms: u64,
    pub advance_delay_ms: u64,
    pub completion_delay_ms: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub color_output: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    Console,
    Json,
    Markdown,
    Text,
}

impl Default for InterviewConfig {
    fn default() -> Self {
        Self {
            follow_up_threshold: 70,
            welcome_delay_ms: 2000,
            advance_delay_ms: 1500,
            completion_delay_ms: 2000,
        }
    }
}

impl InterviewConfig {
    /// Same rules, no pauses between turns
    pub fn immediate() -> Self {
        Self {
            welcome_delay_ms: 0,
            advance_delay_ms: 0,
            completion_delay_ms: 0,
            ..Self::default()
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        let state_dir = dirs::data_local_dir()
            .or_else(dirs::home_dir)
            .unwrap_or_else(|| PathBuf::from("."))
            .join("ai-interviewer");

        Self {
            api: ApiConfig {
                base_url: "http://localhost:8000".to_string(),
                timeout_secs: 120,
            },
            storage: StorageConfig { state_dir },
            interview: InterviewConfig::default(),
            output: OutputConfig {
                format: OutputFormat::Console,
                color_output: true,
            },
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load from an explicit path, writing defaults there if it does not exist yet
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = toml::from_str(&content)
                .map_err(|e| InterviewError::Configuration(format!("Failed to parse config: {}", e)))?;
            Ok(config)
        } else {
            let config = Self::default();
            config.save_to(path)?;
            Ok(config)
        }
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| InterviewError::Configuration(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("ai-interviewer")
            .join("config.toml")
    }

    /// Set a scalar value addressed as `section.key`
    pub fn set_value(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "api.base_url" => self.api.base_url = value.trim_end_matches('/').to_string(),
            "api.timeout_secs" => self.api.timeout_secs = parse_value(key, value)?,
            "storage.state_dir" => self.storage.state_dir = PathBuf::from(value),
            "interview.follow_up_threshold" => {
                let threshold: u8 = parse_value(key, value)?;
                if threshold > 100 {
                    return Err(InterviewError::Configuration(format!(
                        "{} must be between 0 and 100, got {}",
                        key, threshold
                    )));
                }
                self.interview.follow_up_threshold = threshold;
            }
            "interview.welcome_delay_ms" => self.interview.welcome_delay_ms = parse_value(key, value)?,
            "interview.advance_delay_ms" => self.interview.advance_delay_ms = parse_value(key, value)?,
            "interview.completion_delay_ms" => {
                self.interview.completion_delay_ms = parse_value(key, value)?
            }
            "output.format" => {
                self.output.format = crate::cli::parse_output_format(value)
                    .map_err(InterviewError::Configuration)?
            }
            "output.color_output" => self.output.color_output = parse_value(key, value)?,
            _ => {
                return Err(InterviewError::Configuration(format!(
                    "Unknown configuration key: {}",
                    key
                )))
            }
        }
        Ok(())
    }
}

fn parse_value<T>(key: &str, value: &str) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let parsed = value
        .trim()
        .parse::<T>()
        .with_context(|| format!("Invalid value for {}: {}", key, value))?;
    Ok(parsed)
}
