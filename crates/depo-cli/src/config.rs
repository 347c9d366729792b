//! Configuration management for the CLI.

use crate::error::{CliError, Result};
use depo_domain::DEFAULT_TEMPERATURE;
use depo_extractor::AnalyzerConfig;
use depo_ingest::{InputPolicy, DEFAULT_MAX_BYTES, DEFAULT_WARN_BYTES};
use depo_llm::gemini::{DEFAULT_ENDPOINT, DEFAULT_MODEL, DEFAULT_TIMEOUT_SECS};
use depo_llm::GeminiConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variables consulted for the API key, in order.
pub const API_KEY_VARS: [&str; 2] = ["GEMINI_API_KEY", "API_KEY"];

/// CLI configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Extraction service settings
    #[serde(default)]
    pub service: ServiceSettings,

    /// Input size limits
    #[serde(default)]
    pub limits: Limits,

    /// Global settings
    #[serde(default)]
    pub settings: Settings,
}

/// Extraction service settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceSettings {
    /// Model name
    #[serde(default = "default_model")]
    pub model: String,

    /// API base URL
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// HTTP timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Sampling temperature
    #[serde(default = "default_temperature")]
    pub temperature: f32,
}

/// Input size limits, in bytes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Limits {
    /// Warn above this size
    #[serde(default = "default_warn_bytes")]
    pub warn_bytes: u64,

    /// Reject above this size
    #[serde(default = "default_max_bytes")]
    pub max_bytes: u64,
}

/// Global CLI settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Enable colored output
    #[serde(default = "default_true")]
    pub color: bool,

    /// Default output format
    #[serde(default = "default_format")]
    pub format: OutputFormat,
}

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Table format
    Table,
    /// JSON format
    Json,
    /// Sectioned CSV
    Csv,
    /// Quiet (minimal) format
    Quiet,
}

impl Config {
    /// Get the default configuration file path.
    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or_else(|| CliError::Config("Could not find home directory".into()))?;
        Ok(home.join(".depo").join("config.toml"))
    }

    /// Resolve an explicit path or fall back to the default.
    pub fn resolve_path(path: Option<&Path>) -> Result<PathBuf> {
        match path {
            Some(path) => Ok(path.to_path_buf()),
            None => Self::default_path(),
        }
    }

    /// Load configuration from file, or defaults when it does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = fs::read_to_string(path)?;
            let config: Config = toml::from_str(&contents)?;
            config.validate()?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to file.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Create parent directory if it doesn't exist
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(path, self.to_toml()?)?;
        Ok(())
    }

    /// Serialize to TOML.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| CliError::Config(format!("Failed to serialize config: {}", e)))
    }

    /// Check values that would otherwise fail later in the pipeline.
    pub fn validate(&self) -> Result<()> {
        self.analyzer_config().validate().map_err(CliError::Config)?;
        if self.limits.warn_bytes > self.limits.max_bytes {
            return Err(CliError::Config(format!(
                "limits.warn_bytes ({}) exceeds limits.max_bytes ({})",
                self.limits.warn_bytes, self.limits.max_bytes
            )));
        }
        if self.service.timeout_secs == 0 {
            return Err(CliError::Config("service.timeout_secs must be greater than 0".into()));
        }
        Ok(())
    }

    /// Analysis client configuration.
    pub fn analyzer_config(&self) -> AnalyzerConfig {
        AnalyzerConfig {
            temperature: self.service.temperature,
        }
    }

    /// Input size policy.
    pub fn input_policy(&self) -> InputPolicy {
        InputPolicy {
            warn_bytes: self.limits.warn_bytes,
            max_bytes: self.limits.max_bytes,
        }
    }

    /// Provider configuration for the given key.
    pub fn gemini_config(&self, api_key: String) -> GeminiConfig {
        GeminiConfig::new(api_key)
            .with_model(&self.service.model)
            .with_endpoint(&self.service.endpoint)
            .with_timeout_secs(self.service.timeout_secs)
    }
}

/// Pick the API key: explicit flag first, then the environment.
///
/// Blank values are skipped. A missing key is a configuration error; the
/// placeholder value is passed through and rejected by provider validation.
pub fn resolve_api_key(flag: Option<&str>) -> Result<String> {
    resolve_api_key_with(flag, |name| std::env::var(name).ok())
}

/// [`resolve_api_key`] with an injectable environment lookup.
pub fn resolve_api_key_with<F>(flag: Option<&str>, lookup: F) -> Result<String>
where
    F: Fn(&str) -> Option<String>,
{
    flag.map(str::to_string)
        .into_iter()
        .chain(API_KEY_VARS.iter().filter_map(|name| lookup(*name)))
        .map(|key| key.trim().to_string())
        .find(|key| !key.is_empty())
        .ok_or_else(|| {
            CliError::Config(
                "No API key found. Pass --api-key or set GEMINI_API_KEY (a .env file works too)."
                    .into(),
            )
        })
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self {
            model: default_model(),
            endpoint: default_endpoint(),
            timeout_secs: default_timeout_secs(),
            temperature: default_temperature(),
        }
    }
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            warn_bytes: default_warn_bytes(),
            max_bytes: default_max_bytes(),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            color: true,
            format: OutputFormat::Table,
        }
    }
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

fn default_temperature() -> f32 {
    DEFAULT_TEMPERATURE
}

fn default_warn_bytes() -> u64 {
    DEFAULT_WARN_BYTES
}

fn default_max_bytes() -> u64 {
    DEFAULT_MAX_BYTES
}

fn default_true() -> bool {
    true
}

fn default_format() -> OutputFormat {
    OutputFormat::Table
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::TempDir;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.service.model, "gemini-2.5-pro");
        assert_eq!(config.service.temperature, 0.2);
        assert_eq!(config.limits.warn_bytes, 10 * 1024 * 1024);
        assert_eq!(config.limits.max_bytes, 50 * 1024 * 1024);
        assert!(config.settings.color);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let config: Config = toml::from_str("[service]\nmodel = \"gemini-2.5-flash\"\n").unwrap();
        assert_eq!(config.service.model, "gemini-2.5-flash");
        assert_eq!(config.service.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.limits, Limits::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.settings.format = OutputFormat::Csv;
        config.limits.warn_bytes = 1024;
        config.save_to(&path).unwrap();

        assert_eq!(Config::load_from(&path).unwrap(), config);
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let config = Config::load_from(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[service]\ntemperature = 5.0\n").unwrap();
        assert!(matches!(Config::load_from(&path), Err(CliError::Config(_))));

        fs::write(&path, "[limits]\nwarn_bytes = 100\nmax_bytes = 10\n").unwrap();
        assert!(matches!(Config::load_from(&path), Err(CliError::Config(_))));
    }

    #[test]
    fn test_api_key_precedence() {
        let lookup = env(&[("GEMINI_API_KEY", "gemini-key"), ("API_KEY", "generic-key")]);
        assert_eq!(resolve_api_key_with(Some("flag-key"), &lookup).unwrap(), "flag-key");
        assert_eq!(resolve_api_key_with(None, &lookup).unwrap(), "gemini-key");

        let lookup = env(&[("API_KEY", "generic-key")]);
        assert_eq!(resolve_api_key_with(None, lookup).unwrap(), "generic-key");
    }

    #[test]
    fn test_blank_api_keys_are_skipped() {
        let lookup = env(&[("GEMINI_API_KEY", "  "), ("API_KEY", "generic-key")]);
        assert_eq!(resolve_api_key_with(Some(""), lookup).unwrap(), "generic-key");
    }

    #[test]
    fn test_missing_api_key() {
        let result = resolve_api_key_with(None, env(&[]));
        assert!(matches!(result, Err(CliError::Config(_))));
    }

    #[test]
    fn test_placeholder_key_fails_provider_validation() {
        let config = Config::default().gemini_config("your_api_key_here".to_string());
        assert!(config.validate().is_err());
    }
}
