//! Configuration for the analysis client

use depo_domain::DEFAULT_TEMPERATURE;
use serde::{Deserialize, Serialize};

/// Highest sampling temperature the service accepts
pub const MAX_TEMPERATURE: f32 = 2.0;

/// Configuration for the [`AnalysisClient`](crate::AnalysisClient)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    /// Sampling temperature sent with every request
    #[serde(default = "default_temperature")]
    pub temperature: f32,
}

impl AnalyzerConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if !self.temperature.is_finite() || !(0.0..=MAX_TEMPERATURE).contains(&self.temperature) {
            return Err(format!(
                "temperature must be between 0.0 and {}, got {}",
                MAX_TEMPERATURE, self.temperature
            ));
        }
        Ok(())
    }

    /// Fully deterministic preset
    pub fn deterministic() -> Self {
        Self { temperature: 0.0 }
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            temperature: DEFAULT_TEMPERATURE,
        }
    }
}

fn default_temperature() -> f32 {
    DEFAULT_TEMPERATURE
}
