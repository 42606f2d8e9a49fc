//! Sinhala script tables
//!
//! Four disjoint mappings over the Sinhala Unicode block (U+0D80..U+0DFF),
//! each keyed by a single code point: independent vowels, consonants,
//! dependent vowel signs (matras), and special signs (anusvara/visarga).
//! The virama is not a map entry; it suppresses the implicit vowel of the
//! preceding consonant and is handled structurally by the converter.

use std::collections::HashMap;

use once_cell::sync::Lazy;

/// Al-lakuna (hal kirima), the Sinhala virama.
pub const VIRAMA: char = '\u{0DCA}';

/// The implicit vowel a bare consonant letter carries.
pub const INHERENT_VOWEL: &str = "a";

const INDEPENDENT_VOWELS: &[(char, &str)] = &[
    ('අ', "a"),
    ('ආ', "aː"),
    ('ඇ', "æ"),
    ('ඈ', "æː"),
    ('ඉ', "i"),
    ('ඊ', "iː"),
    ('උ', "u"),
    ('ඌ', "uː"),
    ('ඍ', "ri"),
    ('ඎ', "riː"),
    ('ඏ', "ilu"),
    ('ඐ', "iluː"),
    ('එ', "e"),
    ('ඒ', "eː"),
    ('ඓ', "ai"),
    ('ඔ', "o"),
    ('ඕ', "oː"),
    ('ඖ', "au"),
];

const CONSONANTS: &[(char, &str)] = &[
    ('ක', "k"),
    ('ඛ', "kʰ"),
    ('ග', "g"),
    ('ඝ', "gʰ"),
    ('ඞ', "ŋ"),
    ('ඟ', "ⁿg"),
    ('ච', "c"),
    ('ඡ', "cʰ"),
    ('ජ', "ɟ"),
    ('ඣ', "ɟʰ"),
    ('ඤ', "ɲ"),
    ('ඥ', "ɟɲ"),
    ('ඦ', "ⁿɟ"),
    ('ට', "ʈ"),
    ('ඨ', "ʈʰ"),
    ('ඩ', "ɖ"),
    ('ඪ', "ɖʰ"),
    ('ණ', "ɳ"),
    ('ඬ', "ⁿɖ"),
    ('ත', "t"),
    ('ථ', "tʰ"),
    ('ද', "d"),
    ('ධ', "dʰ"),
    ('න', "n"),
    ('ඳ', "ⁿd"),
    ('ප', "p"),
    ('ඵ', "pʰ"),
    ('බ', "b"),
    ('භ', "bʰ"),
    ('ම', "m"),
    ('ඹ', "ᵐb"),
    ('ය', "j"),
    ('ර', "r"),
    ('ල', "l"),
    ('ව', "ʋ"),
    ('ශ', "ʃ"),
    ('ෂ', "ʂ"),
    ('ස', "s"),
    ('හ', "h"),
    ('ළ', "ɭ"),
    ('ෆ', "f"),
];

const VOWEL_SIGNS: &[(char, &str)] = &[
    ('ා', "aː"),
    ('ැ', "æ"),
    ('ෑ', "æː"),
    ('ි', "i"),
    ('ී', "iː"),
    ('ු', "u"),
    ('ූ', "uː"),
    ('ෘ', "ru"),
    ('ෙ', "e"),
    ('ේ', "eː"),
    ('ෛ', "ai"),
    ('ො', "o"),
    ('ෝ', "oː"),
    ('ෞ', "au"),
    ('ෟ', "lu"),
    ('ෲ', "ruː"),
    ('ෳ', "luː"),
];

const SPECIAL_SIGNS: &[(char, &str)] = &[
    // anusvara
    ('ං', "ŋ"),
    // visarga
    ('ඃ', "h"),
];

static MAPS: Lazy<ScriptMaps> = Lazy::new(ScriptMaps::build);

/// The four script mappings, built once per process.
pub struct ScriptMaps {
    independent_vowels: HashMap<char, &'static str>,
    consonants: HashMap<char, &'static str>,
    vowel_signs: HashMap<char, &'static str>,
    special_signs: HashMap<char, &'static str>,
}

impl ScriptMaps {
    /// Shared read-only instance.
    pub fn global() -> &'static ScriptMaps {
        &MAPS
    }

    fn build() -> Self {
        ScriptMaps {
            independent_vowels: INDEPENDENT_VOWELS.iter().copied().collect(),
            consonants: CONSONANTS.iter().copied().collect(),
            vowel_signs: VOWEL_SIGNS.iter().copied().collect(),
            special_signs: SPECIAL_SIGNS.iter().copied().collect(),
        }
    }

    pub fn independent_vowel(&self, c: char) -> Option<&'static str> {
        self.independent_vowels.get(&c).copied()
    }

    pub fn consonant(&self, c: char) -> Option<&'static str> {
        self.consonants.get(&c).copied()
    }

    pub fn vowel_sign(&self, c: char) -> Option<&'static str> {
        self.vowel_signs.get(&c).copied()
    }

    pub fn special_sign(&self, c: char) -> Option<&'static str> {
        self.special_signs.get(&c).copied()
    }

    /// Check the table invariants: no code point keyed in more than one map,
    /// the virama keyed in none, and every phoneme value non-empty.
    pub fn verify_disjoint(&self) -> Result<(), String> {
        let tables: [(&str, &HashMap<char, &'static str>); 4] = [
            ("independent_vowels", &self.independent_vowels),
            ("consonants", &self.consonants),
            ("vowel_signs", &self.vowel_signs),
            ("special_signs", &self.special_signs),
        ];

        let mut seen: HashMap<char, &str> = HashMap::new();
        for (name, table) in tables {
            for (&key, &value) in table {
                if value.is_empty() {
                    return Err(format!("{name}: empty phoneme for {key:?}"));
                }
                if key == VIRAMA {
                    return Err(format!("{name}: virama must not be a map key"));
                }
                if let Some(other) = seen.insert(key, name) {
                    return Err(format!("{key:?} appears in both {other} and {name}"));
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_maps_are_disjoint_and_non_empty() {
        ScriptMaps::global().verify_disjoint().unwrap();
    }

    #[test]
    fn test_known_mappings() {
        let maps = ScriptMaps::global();
        assert_eq!(maps.independent_vowel('අ'), Some("a"));
        assert_eq!(maps.independent_vowel('ආ'), Some("aː"));
        assert_eq!(maps.consonant('ක'), Some("k"));
        assert_eq!(maps.consonant('ග'), Some("g"));
        assert_eq!(maps.vowel_sign('ා'), Some("aː"));
        assert_eq!(maps.vowel_sign('ි'), Some("i"));
        assert_eq!(maps.special_sign('ං'), Some("ŋ"));
        assert_eq!(maps.special_sign('ඃ'), Some("h"));
    }

    #[test]
    fn test_virama_is_unmapped() {
        let maps = ScriptMaps::global();
        assert!(maps.consonant(VIRAMA).is_none());
        assert!(maps.vowel_sign(VIRAMA).is_none());
    }

    #[test]
    fn test_latin_is_unmapped() {
        let maps = ScriptMaps::global();
        assert!(maps.consonant('k').is_none());
        assert!(maps.independent_vowel('a').is_none());
    }
}
