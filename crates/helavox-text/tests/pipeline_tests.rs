//! End-to-end tests for the text-to-phoneme pipeline

use std::sync::Arc;
use std::thread;

use helavox_foundation::TextSettings;
use helavox_text::{GraphemeToPhoneme, ScriptMaps, TextPipeline};

#[test]
fn empty_input_yields_empty_output() {
    assert_eq!(TextPipeline::default().phonemize(""), "");
}

#[test]
fn plain_latin_passes_through_unchanged() {
    let pipeline = TextPipeline::default();
    assert_eq!(pipeline.phonemize("hello"), "hello");
    assert_eq!(pipeline.phonemize("hello, world!"), "hello, world!");
}

#[test]
fn mixed_script_preserves_latin_and_converts_sinhala() {
    let out = TextPipeline::default().phonemize("hello කට");
    assert!(out.contains("hello"));
    assert!(out.contains("kaʈa"));
    assert!(!out.contains('ක'));
}

#[test]
fn currency_time_and_numerals_compose() {
    let pipeline = TextPipeline::default();

    // the currency marker expands first, the amount in the later stage
    let stages = pipeline.run("රු. 10ක්");
    assert_eq!(stages.expanded_abbreviations, "රුපියල් 10ක්");
    assert_eq!(stages.expanded_numerals, "රුපියල් දහයක්");

    // zero-minute time collapses before numerals are spelled
    let stages = pipeline.run("පෙ.ව. 8.00ට");
    assert_eq!(stages.expanded_abbreviations, "පෙරවරු 8ට");
    assert_eq!(stages.expanded_numerals, "පෙරවරු අටට");

    // non-zero minutes keep the linking word through every stage
    let stages = pipeline.run("පෙ.ව. 8.30ට");
    assert_eq!(stages.expanded_abbreviations, "පෙරවරු 8 යි 30ට");
    assert_eq!(stages.expanded_numerals, "පෙරවරු අට යි තිහට");
}

#[test]
fn g2p_is_deterministic() {
    let g2p = GraphemeToPhoneme::new();
    let input = "සුභ උදෑසනක් hello 123";
    let a = g2p.convert(input);
    let b = g2p.convert(input);
    assert_eq!(a.as_bytes(), b.as_bytes());
}

#[test]
fn script_tables_are_disjoint() {
    ScriptMaps::global().verify_disjoint().unwrap();
}

#[test]
fn pipeline_output_contains_no_digits_for_numeric_input() {
    let out = TextPipeline::default().phonemize("අද 250ක් ආවා");
    assert!(!out.chars().any(|c| c.is_ascii_digit()));
}

#[test]
fn configured_abbreviations_reach_the_pipeline() {
    let mut settings = TextSettings::default();
    settings
        .abbreviations
        .insert("කි.මී.".to_string(), "කිලෝමීටර්".to_string());
    let pipeline = TextPipeline::new(&settings);

    let stages = pipeline.run("කි.මී. 5");
    assert_eq!(stages.expanded_abbreviations, "කිලෝමීටර් 5");
}

#[test]
fn pipeline_is_shareable_across_threads() {
    let pipeline = Arc::new(TextPipeline::default());
    let expected = pipeline.phonemize("පෙ.ව. 8.30ට කට 123");

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let pipeline = Arc::clone(&pipeline);
            let expected = expected.clone();
            thread::spawn(move || {
                for _ in 0..50 {
                    assert_eq!(pipeline.phonemize("පෙ.ව. 8.30ට කට 123"), expected);
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
}
