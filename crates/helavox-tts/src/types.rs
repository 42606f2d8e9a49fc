//! Configuration types for the synthesis boundary

use serde::{Deserialize, Serialize};

use helavox_foundation::SynthesisSettings;

/// Acoustic model configuration
///
/// Mirrors the checkpoint/config pairs a Tacotron-style synthesizer is
/// constructed from: an acoustic model and a vocoder.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SynthesisConfig {
    /// Enable/disable synthesis
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

impl Default for SynthesisConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            model_path: None,
            model_config_path: None,
            vocoder_path: None,
            vocoder_config_path: None,
            sample_rate: 22_050,
        }
    }
}

impl From<&SynthesisSettings> for SynthesisConfig {
    fn from(settings: &SynthesisSettings) -> Self {
        Self {
            enabled: settings.enabled,
            model_path: settings.model_path.clone(),
            model_config_path: settings.model_config_path.clone(),
            vocoder_path: settings.vocoder_path.clone(),
            vocoder_config_path: settings.vocoder_config_path.clone(),
            sample_rate: settings.sample_rate,
        }
    }
}
