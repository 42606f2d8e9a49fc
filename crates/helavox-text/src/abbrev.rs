//! Abbreviation expansion
//!
//! Two passes over the input. The time pass matches a fixed two-variant
//! grammar: `<h>.<mm><suffix> <period>` and `<period> <h>.<mm><suffix>`,
//! where the period marker is one of the two time-of-day abbreviations.
//! The generic pass then substitutes every remaining abbreviation key,
//! longest key first. Both passes are total; unmatched text is untouched,
//! and expanded full words never re-match a key, so the passes cannot
//! cascade.

use std::collections::HashMap;

/// The two time-of-day period markers (before-noon, after-noon).
pub const TIME_PERIOD_MARKERS: [&str; 2] = ["පෙ.ව.", "ප.ව."];

/// Linking word inserted between hour and a non-zero minute.
const HOUR_MINUTE_LINK: &str = "යි";

const DEFAULT_ABBREVIATIONS: &[(&str, &str)] = &[
    ("රු.", "රුපියල්"),
    ("පෙ.ව.", "පෙරවරු"),
    ("ප.ව.", "පස්වරු"),
    ("$", "ඩොලර්"),
];

/// Immutable abbreviation table with a fixed substitution order.
///
/// Rules are sorted longest key first (ties broken lexicographically) so no
/// short key matches inside a longer one.
pub struct AbbreviationTable {
    rules: Vec<(String, String)>,
}

impl AbbreviationTable {
    pub fn new() -> Self {
        Self::with_entries(&HashMap::new())
    }

    /// Build the table from the defaults plus extra configured entries.
    /// Extra entries may override a default's expansion but not remove it.
    pub fn with_entries(extra: &HashMap<String, String>) -> Self {
        let mut merged: HashMap<String, String> = DEFAULT_ABBREVIATIONS
            .iter()
            .map(|&(k, v)| (k.to_string(), v.to_string()))
            .collect();
        for (k, v) in extra {
            merged.insert(k.clone(), v.clone());
        }

        let mut rules: Vec<(String, String)> = merged.into_iter().collect();
        rules.sort_by(|a, b| {
            b.0.chars()
                .count()
                .cmp(&a.0.chars().count())
                .then_with(|| a.0.cmp(&b.0))
        });
        Self { rules }
    }

    pub fn lookup(&self, key: &str) -> Option<&str> {
        self.rules
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    fn rules(&self) -> &[(String, String)] {
        &self.rules
    }
}

impl Default for AbbreviationTable {
    fn default() -> Self {
        Self::new()
    }
}

/// Expands unit and time abbreviations into full words.
pub struct AbbreviationExpander {
    table: AbbreviationTable,
}

impl AbbreviationExpander {
    pub fn new(table: AbbreviationTable) -> Self {
        Self { table }
    }

    /// Expand all abbreviations in `text`. Pure and total.
    pub fn expand(&self, text: &str) -> String {
        let with_times = self.expand_times(text);
        self.expand_generic(&with_times)
    }

    /// Time-expression pass. At each position the hour-first variant is
    /// tried before the period-first variant, preserving the grammar's
    /// precedence.
    fn expand_times(&self, text: &str) -> String {
        let chars: Vec<char> = text.chars().collect();
        let mut out = String::with_capacity(text.len());
        let mut i = 0;

        while i < chars.len() {
            if let Some((replacement, next)) = self
                .match_hour_first(&chars, i)
                .or_else(|| self.match_period_first(&chars, i))
            {
                tracing::debug!(from = %chars[i..next].iter().collect::<String>(),
                                to = %replacement,
                                "expanded time expression");
                out.push_str(&replacement);
                i = next;
            } else {
                out.push(chars[i]);
                i += 1;
            }
        }
        out
    }

    /// `<h>.<mm><suffix> <period>` starting at `i`.
    fn match_hour_first(&self, chars: &[char], i: usize) -> Option<(String, usize)> {
        let (hour, minute, mut pos) = match_clock(chars, i)?;

        // suffix glyphs glued to the minute; a period marker starting inside
        // the run ends it
        let suffix_start = pos;
        while pos < chars.len()
            && !chars[pos].is_whitespace()
            && match_marker(chars, pos).is_none()
        {
            pos += 1;
        }
        let suffix: String = chars[suffix_start..pos].iter().collect();

        while pos < chars.len() && chars[pos].is_whitespace() {
            pos += 1;
        }
        let marker = match_marker(chars, pos)?;
        pos += marker.chars().count();
        let period_word = self.table.lookup(marker)?;

        let rendered = if minute == "00" {
            format!("{hour}{suffix} {period_word}")
        } else {
            format!("{hour} {HOUR_MINUTE_LINK} {minute}{suffix} {period_word}")
        };
        Some((rendered, pos))
    }

    /// `<period> <h>.<mm><suffix>` starting at `i`.
    fn match_period_first(&self, chars: &[char], i: usize) -> Option<(String, usize)> {
        let marker = match_marker(chars, i)?;
        let mut pos = i + marker.chars().count();
        let period_word = self.table.lookup(marker)?;

        while pos < chars.len() && chars[pos].is_whitespace() {
            pos += 1;
        }
        let (hour, minute, mut pos) = match_clock(chars, pos)?;

        let suffix_start = pos;
        while pos < chars.len() && !chars[pos].is_whitespace() {
            pos += 1;
        }
        let suffix: String = chars[suffix_start..pos].iter().collect();

        let rendered = if minute == "00" {
            format!("{period_word} {hour}{suffix}")
        } else {
            format!("{period_word} {hour} {HOUR_MINUTE_LINK} {minute}{suffix}")
        };
        Some((rendered, pos))
    }

    /// Generic pass: every key replaced wherever it occurs, in the table's
    /// fixed longest-first order. Covers the currency marker and any period
    /// marker left standing outside a time expression.
    fn expand_generic(&self, text: &str) -> String {
        let mut result = text.to_string();
        for (key, word) in self.table.rules() {
            if result.contains(key.as_str()) {
                tracing::debug!(%key, %word, "expanded abbreviation");
                result = result.replace(key.as_str(), word);
            }
        }
        result
    }
}

impl Default for AbbreviationExpander {
    fn default() -> Self {
        Self::new(AbbreviationTable::new())
    }
}

/// `<1-2 digits>.<exactly 2 digits>` at `i`. Returns (hour, minute, next).
fn match_clock(chars: &[char], i: usize) -> Option<(String, String, usize)> {
    let mut pos = i;
    let hour_start = pos;
    while pos < chars.len() && chars[pos].is_ascii_digit() && pos - hour_start < 2 {
        pos += 1;
    }
    if pos == hour_start {
        return None;
    }
    let mut hour_end = pos;

    // two-digit hour followed by a third digit cannot be a clock reading,
    // but a one-digit retry can still match (mirrors greedy-with-backtrack)
    loop {
        if chars.get(hour_end) == Some(&'.') {
            let m0 = chars.get(hour_end + 1).copied().filter(char::is_ascii_digit);
            let m1 = chars.get(hour_end + 2).copied().filter(char::is_ascii_digit);
            if let (Some(m0), Some(m1)) = (m0, m1) {
                // minutes are exactly two digits; any further digit belongs
                // to the caller's suffix run
                let hour: String = chars[hour_start..hour_end].iter().collect();
                let minute: String = [m0, m1].iter().collect();
                return Some((hour, minute, hour_end + 3));
            }
        }
        if hour_end > hour_start + 1 {
            hour_end -= 1;
        } else {
            return None;
        }
    }
}

/// Match one of the period markers at `i`, longest first.
fn match_marker(chars: &[char], i: usize) -> Option<&'static str> {
    TIME_PERIOD_MARKERS.iter().copied().find(|marker| {
        marker
            .chars()
            .enumerate()
            .all(|(k, mc)| chars.get(i + k) == Some(&mc))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expander() -> AbbreviationExpander {
        AbbreviationExpander::default()
    }

    #[test]
    fn test_currency_abbreviation() {
        let out = expander().expand("රු. 1000ක්");
        assert_eq!(out, "රුපියල් 1000ක්");
    }

    #[test]
    fn test_dollar_expands_anywhere() {
        let out = expander().expand("$ 50ක් වටිනවා");
        assert_eq!(out, "ඩොලර් 50ක් වටිනවා");
    }

    #[test]
    fn test_time_period_first_zero_minutes() {
        let out = expander().expand("පෙ.ව. 8.00ට");
        assert_eq!(out, "පෙරවරු 8ට");
    }

    #[test]
    fn test_time_period_first_nonzero_minutes() {
        let out = expander().expand("පෙ.ව. 8.30ට");
        assert_eq!(out, "පෙරවරු 8 යි 30ට");
    }

    #[test]
    fn test_time_hour_first_zero_minutes() {
        let out = expander().expand("2.00ට ප.ව.");
        assert_eq!(out, "2ට පස්වරු");
    }

    #[test]
    fn test_time_hour_first_nonzero_minutes() {
        let out = expander().expand("2.30ට ප.ව.");
        assert_eq!(out, "2 යි 30ට පස්වරු");
    }

    #[test]
    fn test_standalone_period_marker() {
        let out = expander().expand("පෙ.ව. රැස්වීම");
        assert_eq!(out, "පෙරවරු රැස්වීම");
    }

    #[test]
    fn test_marker_glued_to_suffixless_time() {
        // no whitespace between the minute digits and the marker
        let out = expander().expand("8.30පෙ.ව.");
        assert_eq!(out, "8 යි 30 පෙරවරු");
    }

    #[test]
    fn test_unmatched_text_is_untouched() {
        let text = "සාමාන්‍ය වාක්‍යයක්";
        assert_eq!(expander().expand(text), text);
        assert_eq!(expander().expand("hello"), "hello");
        assert_eq!(expander().expand(""), "");
    }

    #[test]
    fn test_decimal_without_marker_is_not_a_time() {
        assert_eq!(expander().expand("3.14 වටිනවා"), "3.14 වටිනවා");
    }

    #[test]
    fn test_idempotent() {
        let once = expander().expand("රු. 1000ක් පෙ.ව. 8.30ට $ 50");
        let twice = expander().expand(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_extra_entries_merge_and_sort() {
        let mut extra = HashMap::new();
        extra.insert("කි.මී.".to_string(), "කිලෝමීටර්".to_string());
        let table = AbbreviationTable::with_entries(&extra);
        assert_eq!(table.lookup("කි.මී."), Some("කිලෝමීටර්"));
        assert_eq!(table.lookup("රු."), Some("රුපියල්"));

        let expander = AbbreviationExpander::new(table);
        assert_eq!(expander.expand("කි.මී. 5"), "කිලෝමීටර් 5");
    }

    #[test]
    fn test_longest_key_wins() {
        let mut extra = HashMap::new();
        extra.insert("ග.".to_string(), "ගණන".to_string());
        extra.insert("ග.අ.".to_string(), "ගණන් අධිකාරී".to_string());
        let expander = AbbreviationExpander::new(AbbreviationTable::with_entries(&extra));
        assert_eq!(expander.expand("ග.අ. පැමිණියා"), "ගණන් අධිකාරී පැමිණියා");
    }

    #[test]
    fn test_full_sample_sentence() {
        let out = expander().expand(
            "මම රු. 1000ක් ගෙවුවා. පෙ.ව. 8.30ට පැමිණෙන්න. ප.ව. 2.00ට රැස්වීම තියෙනවා. $ 50ක් වටිනවා.",
        );
        assert_eq!(
            out,
            "මම රුපියල් 1000ක් ගෙවුවා. පෙරවරු 8 යි 30ට පැමිණෙන්න. පස්වරු 2ට රැස්වීම තියෙනවා. ඩොලර් 50ක් වටිනවා."
        );
    }
}
