//! Configuration management for the service analyzer

use crate::constants::{
    API_KEY_ENV, DEFAULT_GEMINI_BASE_URL, DEFAULT_GEMINI_MODEL, DEFAULT_OUTPUT_FILE, ENV_PREFIX,
};
use crate::error::{AnalyzerError, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    pub gemini: GeminiConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeminiConfig {
    #[serde(default)]
    pub api_key: String,

    #[serde(default = "default_gemini_model")]
    pub model: String,

    #[serde(default = "default_gemini_base_url")]
    pub base_url: String,

    /// No timeout unless set
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_output_path")]
    pub path: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: default_output_path(),
        }
    }
}

// Default functions
fn default_gemini_model() -> String {
    DEFAULT_GEMINI_MODEL.to_string()
}

fn default_gemini_base_url() -> String {
    DEFAULT_GEMINI_BASE_URL.to_string()
}

fn default_output_path() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT_FILE)
}

impl AnalyzerConfig {
    /// Load configuration, taking the credential from `GOOGLE_API_KEY`
    pub fn load(config_file: Option<&Path>) -> Result<Self> {
        let api_key = std::env::var(API_KEY_ENV).ok().filter(|key| !key.trim().is_empty());
        Self::load_with(config_file, api_key)
    }

    /// Layer defaults, an optional file, `ANALYZER__*` variables and the
    /// credential, in increasing precedence, then validate.
    pub fn load_with(config_file: Option<&Path>, api_key: Option<String>) -> Result<Self> {
        let mut builder = Config::builder()
            .set_default("gemini.model", DEFAULT_GEMINI_MODEL)
            .and_then(|b| b.set_default("gemini.base_url", DEFAULT_GEMINI_BASE_URL))
            .and_then(|b| b.set_default("output.path", DEFAULT_OUTPUT_FILE))
            .map_err(|e| AnalyzerError::Config(format!("Failed to set defaults: {}", e)))?;

        if let Some(path) = config_file {
            if !path.exists() {
                return Err(AnalyzerError::Config(format!(
                    "Config file not found: {}",
                    path.display()
                )));
            }
            builder = builder.add_source(File::from(path).required(true));
        }

        let settings = builder
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .set_override_option("gemini.api_key", api_key)
            .map_err(|e| AnalyzerError::Config(format!("Failed to apply credential: {}", e)))?
            .build()
            .map_err(|e| AnalyzerError::Config(format!("Failed to read config: {}", e)))?;

        let config: Self = settings
            .try_deserialize()
            .map_err(|e| AnalyzerError::Config(format!("Failed to parse config: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.gemini.api_key.trim().is_empty() {
            return Err(AnalyzerError::Config(format!(
                "Google API key is required (set {})",
                API_KEY_ENV
            )));
        }

        if self.gemini.model.trim().is_empty() {
            return Err(AnalyzerError::Config("Gemini model name is required".to_string()));
        }

        if self.output.path.as_os_str().is_empty() {
            return Err(AnalyzerError::Config("Output path is required".to_string()));
        }

        Ok(())
    }
}
