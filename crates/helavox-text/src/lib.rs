//! Sinhala text-to-phoneme frontend for HelaVox
//!
//! Converts free-form Sinhala (and mixed Sinhala/Latin/digit) text into a
//! phoneme string for a neural acoustic model. Three pure stages run in a
//! fixed order: abbreviation expansion, numeral expansion, and
//! grapheme-to-phoneme conversion. All lookup tables are built once and
//! shared by reference; no stage mutates state, so a single pipeline can
//! serve arbitrarily many concurrent callers.

pub mod abbrev;
pub mod g2p;
pub mod numerals;
pub mod pipeline;
pub mod script;

pub use abbrev::{AbbreviationExpander, AbbreviationTable};
pub use g2p::GraphemeToPhoneme;
pub use numerals::NumeralExpander;
pub use pipeline::{StageOutputs, TextPipeline};
pub use script::ScriptMaps;
