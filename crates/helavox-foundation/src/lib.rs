//! Foundation types for HelaVox
//!
//! Shared error taxonomy and application configuration used by the text
//! frontend, the synthesis boundary, and the CLI.

pub mod error;
pub mod settings;

pub use error::*;
pub use settings::*;
