//! Acoustic-model boundary for HelaVox
//!
//! The text frontend emits a phoneme string; everything downstream, the
//! neural acoustic model, vocoder, and voice conversion, lives behind the
//! [`AcousticModel`] trait defined here. This crate carries the boundary
//! types and a no-op implementation; real model backends plug in from
//! outside.

use std::sync::atomic::{AtomicU64, Ordering};

pub mod engine;
pub mod error;
pub mod noop;
pub mod types;

pub use engine::{AcousticModel, SynthesisEvent};
pub use error::{SynthesisError, SynthesisResult};
pub use noop::NoOpModel;
pub use types::SynthesisConfig;

/// Generates unique synthesis IDs
static SYNTHESIS_ID_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Generate a unique synthesis ID
pub fn next_synthesis_id() -> u64 {
    SYNTHESIS_ID_COUNTER.fetch_add(1, Ordering::SeqCst)
}
