//! Numeral-to-word expansion
//!
//! Replaces embedded Arabic-numeral tokens with their Sinhala word
//! equivalents. A token is a contiguous ASCII digit run with an optional
//! decimal point (consumed only when a digit follows it). Everything
//! around the token, currency glyphs, grouping commas, Sinhala case
//! suffixes, stays verbatim next to the expansion. Text with no numeral
//! tokens passes through unchanged; nothing here can fail.
//!
//! Naming follows standard colloquial Sinhala: irregular teens, terminal
//! vs. combining forms for exact tens, and multiplier prefixes over the
//! group words for hundreds, thousands, lakhs and kotis.

/// Cardinal words for 0-9.
const ONES: [&str; 10] = [
    "බිංදුව",
    "එක",
    "දෙක",
    "තුන",
    "හතර",
    "පහ",
    "හය",
    "හත",
    "අට",
    "නවය",
];

/// Cardinal words for 10-19.
const TEENS: [&str; 10] = [
    "දහය",
    "එකොළහ",
    "දොළහ",
    "දහතුන",
    "දාහතර",
    "පහළොව",
    "දාසය",
    "දාහත",
    "දහඅට",
    "දහනවය",
];

/// Exact multiples of ten, 20-90.
const TENS_TERMINAL: [&str; 8] = [
    "විස්ස",
    "තිහ",
    "හතළිහ",
    "පනහ",
    "හැට",
    "හැත්තෑව",
    "අසූව",
    "අනූව",
];

/// Combining forms of the tens, joined directly to a ones word (21 = විසිඑක).
const TENS_COMBINING: [&str; 8] = [
    "විසි",
    "තිස්",
    "හතළිස්",
    "පනස්",
    "හැට",
    "හැත්තෑ",
    "අසූ",
    "අනූ",
];

/// Combining forms of 1-9, used as multiplier prefixes over the group
/// words (එක්දහස්, දෙසිය, පන්ලක්ෂ, ...).
const ONES_COMBINING: [&str; 9] = [
    "එක්",
    "දෙ",
    "තුන්",
    "හාර",
    "පන්",
    "හය",
    "හත්",
    "අට",
    "නව",
];

/// Combining forms of 10-19 (literary teens, පසළොස්වක-style).
const TEENS_COMBINING: [&str; 10] = [
    "දස",
    "එකොළොස්",
    "දොළොස්",
    "තෙළෙස්",
    "තුදුස්",
    "පසළොස්",
    "සොළොස්",
    "සතළොස්",
    "අටළොස්",
    "එකුන්විසි",
];

/// Spoken word for the decimal point.
const DECIMAL_WORD: &str = "දශම";

const LAKH: u64 = 100_000;
const KOTI: u64 = 10_000_000;

/// Expands numeral tokens into Sinhala words.
pub struct NumeralExpander;

impl NumeralExpander {
    pub fn new() -> Self {
        Self
    }

    /// Expand every numeral token in `text`. Pure and total.
    pub fn expand(&self, text: &str) -> String {
        let chars: Vec<char> = text.chars().collect();
        let mut out = String::with_capacity(text.len());
        let mut i = 0;

        while i < chars.len() {
            if !chars[i].is_ascii_digit() {
                out.push(chars[i]);
                i += 1;
                continue;
            }

            let int_start = i;
            while i < chars.len() && chars[i].is_ascii_digit() {
                i += 1;
            }
            let int_part: String = chars[int_start..i].iter().collect();

            // a decimal point counts only when another digit follows it;
            // a bare trailing dot is sentence punctuation
            let mut frac_part: Option<String> = None;
            if i + 1 < chars.len() && chars[i] == '.' && chars[i + 1].is_ascii_digit() {
                i += 1;
                let frac_start = i;
                while i < chars.len() && chars[i].is_ascii_digit() {
                    i += 1;
                }
                frac_part = Some(chars[frac_start..i].iter().collect());
            }

            let words = spell_token(&int_part, frac_part.as_deref());
            tracing::debug!(token = %int_part, ?frac_part, %words, "expanded numeral");
            out.push_str(&words);
        }
        out
    }
}

impl Default for NumeralExpander {
    fn default() -> Self {
        Self::new()
    }
}

fn spell_token(int_part: &str, frac_part: Option<&str>) -> String {
    // runs too long for u64 are spelled digit by digit, keeping the
    // expander total
    let int_words = match int_part.parse::<u64>() {
        Ok(n) => cardinal(n),
        Err(_) => spell_digits(int_part),
    };
    match frac_part {
        None => int_words,
        Some(frac) => format!("{} {} {}", int_words, DECIMAL_WORD, spell_digits(frac)),
    }
}

/// Each digit spelled individually, space separated.
fn spell_digits(digits: &str) -> String {
    let words: Vec<&str> = digits
        .chars()
        .filter_map(|c| c.to_digit(10))
        .map(|d| ONES[d as usize])
        .collect();
    words.join(" ")
}

/// Full cardinal for `n`.
fn cardinal(n: u64) -> String {
    if n == 0 {
        return ONES[0].to_string();
    }

    let mut parts: Vec<String> = Vec::new();
    let mut rest = n;

    let kotis = rest / KOTI;
    rest %= KOTI;
    if kotis > 0 {
        parts.push(group(kotis, "කෝටි", "කෝටිය", rest == 0));
    }

    let lakhs = rest / LAKH;
    rest %= LAKH;
    if lakhs > 0 {
        parts.push(group(lakhs, "ලක්ෂ", "ලක්ෂය", rest == 0));
    }

    let thousands = rest / 1_000;
    rest %= 1_000;
    if thousands > 0 {
        parts.push(group(thousands, "දහස්", "දහස", rest == 0));
    }

    let hundreds = rest / 100;
    rest %= 100;
    if hundreds > 0 {
        parts.push(hundreds_group(hundreds, rest == 0));
    }

    if rest > 0 {
        parts.push(under_hundred(rest));
    }

    parts.join(" ")
}

/// 1-99, terminal form.
fn under_hundred(n: u64) -> String {
    debug_assert!((1..100).contains(&n));
    match n {
        1..=9 => ONES[n as usize].to_string(),
        10..=19 => TEENS[(n - 10) as usize].to_string(),
        _ => {
            let tens = (n / 10 - 2) as usize;
            let ones = (n % 10) as usize;
            if ones == 0 {
                TENS_TERMINAL[tens].to_string()
            } else {
                // combining tens join the ones word with no space
                format!("{}{}", TENS_COMBINING[tens], ONES[ones])
            }
        }
    }
}

/// A group of thousands/lakhs/kotis: multiplier count joined to the group
/// word. `exact` selects the terminal form (nothing follows); otherwise the
/// combining form precedes the remainder.
fn group(count: u64, combining: &str, terminal: &str, exact: bool) -> String {
    let word = if exact { terminal } else { combining };
    if count < 100 {
        format!("{}{}", multiplier(count), word)
    } else {
        // only koti counts can get here
        format!("{} {}", cardinal(count), word)
    }
}

/// Combining multiplier form for 1-99, joined directly to a group word
/// (25 → විසිපන්, giving විසිපන්දහස්).
fn multiplier(n: u64) -> String {
    debug_assert!((1..100).contains(&n));
    match n {
        1..=9 => ONES_COMBINING[(n - 1) as usize].to_string(),
        10..=19 => TEENS_COMBINING[(n - 10) as usize].to_string(),
        _ => {
            let tens = (n / 10 - 2) as usize;
            let ones = (n % 10) as usize;
            if ones == 0 {
                TENS_COMBINING[tens].to_string()
            } else {
                format!("{}{}", TENS_COMBINING[tens], ONES_COMBINING[ones - 1])
            }
        }
    }
}

/// Hundreds use සිය/සියය and drop the එක් prefix for a bare 100.
fn hundreds_group(count: u64, exact: bool) -> String {
    debug_assert!((1..10).contains(&count));
    let word = if exact { "සියය" } else { "සිය" };
    match count {
        1 => {
            if exact {
                word.to_string()
            } else {
                format!("එක{}", word)
            }
        }
        _ => format!("{}{}", ONES_COMBINING[(count - 1) as usize], word),
    }
}
