//! Pipeline orchestrator
//!
//! Runs the three stages in fixed order: abbreviation expansion, numeral
//! expansion, grapheme-to-phoneme conversion. The resulting phoneme string
//! is the sole input the acoustic model consumes.

use helavox_foundation::TextSettings;

use crate::abbrev::{AbbreviationExpander, AbbreviationTable};
use crate::g2p::GraphemeToPhoneme;
use crate::numerals::NumeralExpander;

/// Intermediate output of each stage, for diagnostics.
#[derive(Debug, Clone)]
pub struct StageOutputs {
    pub expanded_abbreviations: String,
    pub expanded_numerals: String,
    pub phonemes: String,
}

/// The full text-to-phoneme pipeline.
///
/// All tables are built in `new` and never mutated; a single pipeline can be
/// shared by reference across any number of threads.
pub struct TextPipeline {
    abbrev: AbbreviationExpander,
    numerals: NumeralExpander,
    g2p: GraphemeToPhoneme,
}

impl TextPipeline {
    pub fn new(settings: &TextSettings) -> Self {
        Self {
            abbrev: AbbreviationExpander::new(AbbreviationTable::with_entries(
                &settings.abbreviations,
            )),
            numerals: NumeralExpander::new(),
            g2p: GraphemeToPhoneme::new(),
        }
    }

    /// Convert raw text to a phoneme string.
    pub fn phonemize(&self, text: &str) -> String {
        self.run(text).phonemes
    }

    /// Convert raw text, keeping each stage's intermediate output.
    pub fn run(&self, text: &str) -> StageOutputs {
        let expanded_abbreviations = self.abbrev.expand(text);
        tracing::debug!(text = %expanded_abbreviations, "after abbreviation expansion");

        let expanded_numerals = self.numerals.expand(&expanded_abbreviations);
        tracing::debug!(text = %expanded_numerals, "after numeral expansion");

        let phonemes = self.g2p.convert(&expanded_numerals);
        tracing::debug!(%phonemes, "phonemized");

        StageOutputs {
            expanded_abbreviations,
            expanded_numerals,
            phonemes,
        }
    }
}

impl Default for TextPipeline {
    fn default() -> Self {
        Self::new(&TextSettings::default())
    }
}
