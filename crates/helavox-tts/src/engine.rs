//! Acoustic model abstraction and synthesis events

use async_trait::async_trait;

use crate::error::SynthesisResult;
use crate::types::SynthesisConfig;

/// Synthesis event types
#[derive(Debug, Clone)]
pub enum SynthesisEvent {
    /// Synthesis started for the given phoneme string
    Started {
        synthesis_id: u64,
        phonemes: String,
    },
    /// Synthesized waveform available
    Audio {
        synthesis_id: u64,
        samples: Vec<f32>,
        sample_rate: u32,
    },
    /// Synthesis failed with error
    Failed { synthesis_id: u64, error: String },
}

/// Core acoustic model interface
///
/// Accepts the phoneme string the text frontend emits and returns a
/// waveform. Implementations wrap specific model backends; the pipeline's
/// contract on them is only "consumes the phoneme string verbatim".
#[async_trait]
pub trait AcousticModel: Send + Sync {
    /// Get backend name/identifier
    fn name(&self) -> &str;

    /// Check if the backend is usable (checkpoints present, runtime loaded)
    async fn is_available(&self) -> bool;

    /// Initialize the backend with configuration
    async fn initialize(&mut self, config: SynthesisConfig) -> SynthesisResult<()>;

    /// Synthesize a phoneme string to audio
    async fn synthesize(&mut self, phonemes: &str) -> SynthesisResult<SynthesisEvent>;

    /// Get current configuration
    fn config(&self) -> &SynthesisConfig;

    /// Shutdown the backend and release resources
    async fn shutdown(&mut self) -> SynthesisResult<()>;
}
