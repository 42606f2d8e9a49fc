//! Grapheme-to-phoneme conversion
//!
//! Scans text left to right by Unicode grapheme cluster and emits a phoneme
//! string. Sinhala consonants carry the implicit vowel `a` until a dependent
//! vowel sign overrides it or the virama suppresses it. Anything outside the
//! script tables (Latin, digits, punctuation, whitespace) passes through
//! unchanged, so the conversion is total over arbitrary UTF-8.

use unicode_segmentation::UnicodeSegmentation;

use crate::script::{ScriptMaps, INHERENT_VOWEL, VIRAMA};

/// One emitted unit of output.
///
/// A consonant emission stays mutable until the next emission begins: a
/// trailing vowel sign rewrites its vowel, a virama clears it.
enum Emission {
    /// Pass-through text or a fixed phoneme (independent vowel, special sign).
    Text(String),
    /// A consonant phoneme plus its current vowel, if any.
    Consonant {
        base: &'static str,
        vowel: Option<&'static str>,
    },
}

/// Grapheme-to-phoneme converter over the shared script tables.
pub struct GraphemeToPhoneme {
    maps: &'static ScriptMaps,
}

impl GraphemeToPhoneme {
    pub fn new() -> Self {
        Self {
            maps: ScriptMaps::global(),
        }
    }

    /// Convert text to a phoneme string.
    ///
    /// Deterministic and infallible: identical input yields byte-identical
    /// output, and unmapped content is copied through rather than rejected.
    pub fn convert(&self, text: &str) -> String {
        let mut emissions: Vec<Emission> = Vec::new();

        for cluster in text.graphemes(true) {
            for c in cluster.chars() {
                self.emit(&mut emissions, c);
            }
        }

        let mut out = String::with_capacity(text.len());
        for emission in emissions {
            match emission {
                Emission::Text(s) => out.push_str(&s),
                Emission::Consonant { base, vowel } => {
                    out.push_str(base);
                    if let Some(v) = vowel {
                        out.push_str(v);
                    }
                }
            }
        }
        out
    }

    fn emit(&self, emissions: &mut Vec<Emission>, c: char) {
        if let Some(ph) = self.maps.independent_vowel(c) {
            emissions.push(Emission::Text(ph.to_string()));
        } else if let Some(base) = self.maps.consonant(c) {
            emissions.push(Emission::Consonant {
                base,
                vowel: Some(INHERENT_VOWEL),
            });
        } else if let Some(ph) = self.maps.vowel_sign(c) {
            // Rewrites the implicit vowel of the consonant just emitted; with
            // no consonant in scope the sign is copied through instead.
            match emissions.last_mut() {
                Some(Emission::Consonant { vowel, .. }) => *vowel = Some(ph),
                _ => push_text(emissions, c),
            }
        } else if c == VIRAMA {
            match emissions.last_mut() {
                Some(Emission::Consonant { vowel, .. }) => *vowel = None,
                _ => push_text(emissions, c),
            }
        } else if let Some(ph) = self.maps.special_sign(c) {
            emissions.push(Emission::Text(ph.to_string()));
        } else {
            push_text(emissions, c);
        }
    }
}

/// Append a pass-through character, extending a trailing text run if present.
fn push_text(emissions: &mut Vec<Emission>, c: char) {
    match emissions.last_mut() {
        Some(Emission::Text(s)) => s.push(c),
        _ => emissions.push(Emission::Text(c.to_string())),
    }
}

impl Default for GraphemeToPhoneme {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn g2p() -> GraphemeToPhoneme {
        GraphemeToPhoneme::new()
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(g2p().convert(""), "");
    }

    #[test]
    fn test_bare_consonants_carry_inherent_vowel() {
        assert_eq!(g2p().convert("කට"), "kaʈa");
    }

    #[test]
    fn test_vowel_sign_overrides_inherent_vowel() {
        assert_eq!(g2p().convert("කා"), "kaː");
        assert_eq!(g2p().convert("කි"), "ki");
        assert_eq!(g2p().convert("කෝ"), "koː");
    }

    #[test]
    fn test_virama_suppresses_inherent_vowel() {
        assert_eq!(g2p().convert("ක්"), "k");
        // syllable-final consonant inside a word
        assert_eq!(g2p().convert("කන්ද"), "kanda");
    }

    #[test]
    fn test_independent_vowels() {
        assert_eq!(g2p().convert("අම්මා"), "ammaː");
        assert_eq!(g2p().convert("එක"), "eka");
    }

    #[test]
    fn test_special_sign_appends_standalone_phoneme() {
        assert_eq!(g2p().convert("කං"), "kaŋ");
    }

    #[test]
    fn test_orphan_sign_passes_through() {
        // vowel sign and virama with no consonant in scope
        assert_eq!(g2p().convert("ා"), "ා");
        assert_eq!(g2p().convert("්"), "්");
        assert_eq!(g2p().convert(" ි"), " ි");
    }

    #[test]
    fn test_non_sinhala_passes_through() {
        assert_eq!(g2p().convert("hello"), "hello");
        assert_eq!(g2p().convert("123, ok!"), "123, ok!");
    }

    #[test]
    fn test_mixed_script() {
        let out = g2p().convert("hello කට");
        assert_eq!(out, "hello kaʈa");
    }

    #[test]
    fn test_whitespace_preserved() {
        assert_eq!(g2p().convert("කට මට"), "kaʈa maʈa");
    }

    #[test]
    fn test_deterministic() {
        let input = "සුභ උදෑසනක්, hello 123!";
        assert_eq!(g2p().convert(input), g2p().convert(input));
    }

    #[test]
    fn test_conjunct_with_zwj() {
        // ක + virama + ZWJ + ර + ි : the sign attaches to the second
        // consonant; the ZWJ itself is pass-through.
        let out = g2p().convert("ක්\u{200D}රි");
        assert_eq!(out, "k\u{200D}ri");
    }
}
