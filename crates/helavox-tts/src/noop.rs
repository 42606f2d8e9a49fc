//! No-operation acoustic model for testing and wiring
//!
//! Produces an empty waveform for any phoneme string. Lets the CLI and
//! tests exercise the full pipeline without a neural backend present.

use async_trait::async_trait;

use crate::engine::{AcousticModel, SynthesisEvent};
use crate::error::{SynthesisError, SynthesisResult};
use crate::next_synthesis_id;
use crate::types::SynthesisConfig;

#[derive(Debug, Clone, Default)]
pub struct NoOpModel {
    config: SynthesisConfig,
    initialized: bool,
}

impl NoOpModel {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AcousticModel for NoOpModel {
    fn name(&self) -> &str {
        "noop"
    }

    async fn is_available(&self) -> bool {
        true
    }

    async fn initialize(&mut self, config: SynthesisConfig) -> SynthesisResult<()> {
        self.config = config;
        self.initialized = true;
        Ok(())
    }

    async fn synthesize(&mut self, phonemes: &str) -> SynthesisResult<SynthesisEvent> {
        if !self.initialized {
            return Err(SynthesisError::ModelNotAvailable(
                "NoOpModel used before initialize".into(),
            ));
        }
        let synthesis_id = next_synthesis_id();
        tracing::debug!(synthesis_id, phoneme_len = phonemes.len(), "no-op synthesis");
        Ok(SynthesisEvent::Audio {
            synthesis_id,
            samples: Vec::new(),
            sample_rate: self.config.sample_rate,
        })
    }

    fn config(&self) -> &SynthesisConfig {
        &self.config
    }

    async fn shutdown(&mut self) -> SynthesisResult<()> {
        self.initialized = false;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_noop_lifecycle() {
        let mut model = NoOpModel::new();
        assert_eq!(model.name(), "noop");
        assert!(model.is_available().await);

        // synthesize before initialize is an error
        let err = model.synthesize("kaʈa").await.unwrap_err();
        assert!(matches!(err, SynthesisError::ModelNotAvailable(_)));

        model.initialize(SynthesisConfig::default()).await.unwrap();
        match model.synthesize("kaʈa").await.unwrap() {
            SynthesisEvent::Audio {
                samples,
                sample_rate,
                ..
            } => {
                assert!(samples.is_empty());
                assert_eq!(sample_rate, 22_050);
            }
            other => panic!("unexpected event: {other:?}"),
        }

        model.shutdown().await.unwrap();
    }

    #[test]
    fn test_synthesis_ids_are_unique() {
        let a = next_synthesis_id();
        let b = next_synthesis_id();
        assert_ne!(a, b);
    }

    #[test]
    fn test_config_from_settings() {
        let mut settings = helavox_foundation::SynthesisSettings::default();
        settings.enabled = true;
        settings.model_path = Some("models/tacotron2.pth".into());
        let config = SynthesisConfig::from(&settings);
        assert!(config.enabled);
        assert_eq!(config.model_path.as_deref(), Some("models/tacotron2.pth"));
    }
}
