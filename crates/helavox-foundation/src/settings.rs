//! Application settings
//!
//! Layered configuration: built-in defaults, an optional TOML file, then
//! `HELAVOX_`-prefixed environment variables, each layer overriding the last.

use std::collections::HashMap;
use std::path::Path;

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Top-level application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Text-frontend settings
    #[serde(default)]
    pub text: TextSettings,
    /// Acoustic-model settings
    #[serde(default)]
    pub synthesis: SynthesisSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            text: TextSettings::default(),
            synthesis: SynthesisSettings::default(),
        }
    }
}

/// Settings for the text-to-phoneme frontend.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TextSettings {
    /// Extra abbreviation entries merged into the built-in table.
    /// Keys are abbreviations, values their full-word expansions.
    #[serde(default)]
    pub abbreviations: HashMap<String, String>,
}

/// Settings for the external acoustic model.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SynthesisSettings {
    /// Enable/disable synthesis (phoneme output only when disabled)
    pub enabled: bool,
    /// Acoustic model checkpoint path
    pub model_path: Option<String>,
    /// Acoustic model config path
    pub model_config_path: Option<String>,
    /// Vocoder checkpoint path
    pub vocoder_path: Option<String>,
    /// Vocoder config path
    pub vocoder_config_path: Option<String>,
    /// Output sample rate in Hz
    pub sample_rate: u32,
}

impl Default for SynthesisSettings {
    fn default() -> Self {
        SynthesisSettings {
            enabled: false,
            model_path: None,
            model_config_path: None,
            vocoder_path: None,
            vocoder_config_path: None,
            sample_rate: 22_050,
        }
    }
}

impl Settings {
    /// Load settings from a specific config file path (for tests)
    pub fn from_path(config_path: impl AsRef<Path>) -> Result<Self, AppError> {
        let mut builder = Config::builder();

        builder = builder.add_source(File::from(config_path.as_ref()).required(true));
        builder = builder.add_source(Environment::with_prefix("HELAVOX").separator("__"));

        let config = builder
            .build()
            .map_err(|e| AppError::Config(format!("Failed to build config: {}", e)))?;

        let settings: Settings = config
            .try_deserialize()
            .map_err(|e| AppError::Config(format!("Failed to deserialize settings: {}", e)))?;

        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from the default location, if present, plus environment
    /// variable overrides.
    pub fn new() -> Result<Self, AppError> {
        let mut builder = Config::builder();

        let config_path = Path::new("config/default.toml");
        if config_path.exists() {
            tracing::info!("Loading configuration from: {}", config_path.display());
            builder = builder.add_source(File::from(config_path).required(true));
        } else {
            tracing::debug!(
                "No configuration file at 'config/default.toml'. Using defaults and environment variables."
            );
        }

        builder = builder.add_source(Environment::with_prefix("HELAVOX").separator("__"));

        let config = builder
            .build()
            .map_err(|e| AppError::Config(format!("Failed to build config: {}", e)))?;

        // An absent file and no env overrides deserializes to all-defaults.
        let settings: Settings = config
            .try_deserialize()
            .map_err(|e| AppError::Config(format!("Failed to deserialize settings: {}", e)))?;

        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> Result<(), AppError> {
        if self.synthesis.sample_rate == 0 {
            return Err(AppError::Config(
                "synthesis.sample_rate must be non-zero".into(),
            ));
        }
        for (key, word) in &self.text.abbreviations {
            if key.is_empty() || word.is_empty() {
                return Err(AppError::Config(
                    "text.abbreviations entries must have non-empty keys and values".into(),
                ));
            }
        }
        Ok(())
    }
}
