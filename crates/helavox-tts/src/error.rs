//! Error types for the synthesis boundary

use thiserror::Error;

/// Synthesis error types
#[derive(Error, Debug)]
pub enum SynthesisError {
    /// Model backend is not available or not installed
    #[error("Acoustic model not available: {0}")]
    ModelNotAvailable(String),

    /// Checkpoint or config could not be loaded
    #[error("Model load failed: {0}")]
    ModelLoad(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Inference failed
    #[error("Synthesis failed: {0}")]
    Synthesis(String),

    /// Invalid phoneme input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// IO error (checkpoint files, audio output)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for synthesis operations
pub type SynthesisResult<T> = Result<T, SynthesisError>;
