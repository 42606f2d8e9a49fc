//! HelaVox CLI
//!
//! Phonemizes Sinhala text on the command line and optionally drives the
//! acoustic-model boundary. Text content never fails; a non-zero exit means
//! a configuration or IO problem.

use std::io::Read;
use std::path::PathBuf;

use clap::Parser;

use helavox_foundation::Settings;
use helavox_text::TextPipeline;
use helavox_tts::{AcousticModel, NoOpModel, SynthesisConfig, SynthesisEvent};

#[derive(Parser, Debug)]
#[command(name = "helavox", about = "Sinhala text-to-phoneme frontend")]
struct Cli {
    /// Text to phonemize; reads stdin when omitted or "-"
    text: Option<String>,

    /// Path to a TOML configuration file
    #[arg(long, env = "HELAVOX_CONFIG")]
    config: Option<PathBuf>,

    /// Print each stage's intermediate output
    #[arg(long)]
    show_stages: bool,

    /// Run the phonemes through the acoustic-model boundary
    #[arg(long)]
    synthesize: bool,
}

fn init_logging() {
    let log_level = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    tracing_subscriber::fmt().with_env_filter(log_level).init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let settings = match &cli.config {
        Some(path) => Settings::from_path(path)?,
        None => Settings::new()?,
    };

    let text = match cli.text.as_deref() {
        Some("-") | None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
        Some(text) => text.to_string(),
    };

    let pipeline = TextPipeline::new(&settings.text);
    let stages = pipeline.run(&text);

    if cli.show_stages {
        println!("abbreviations: {}", stages.expanded_abbreviations);
        println!("numerals:      {}", stages.expanded_numerals);
        println!("phonemes:      {}", stages.phonemes);
    } else {
        println!("{}", stages.phonemes);
    }

    if cli.synthesize || settings.synthesis.enabled {
        let mut model = NoOpModel::new();
        model
            .initialize(SynthesisConfig::from(&settings.synthesis))
            .await?;
        match model.synthesize(&stages.phonemes).await? {
            SynthesisEvent::Audio {
                synthesis_id,
                samples,
                sample_rate,
            } => {
                tracing::info!(
                    synthesis_id,
                    samples = samples.len(),
                    sample_rate,
                    backend = model.name(),
                    "synthesis complete"
                );
            }
            SynthesisEvent::Started { .. } => {}
            SynthesisEvent::Failed { error, .. } => {
                anyhow::bail!("synthesis failed: {error}");
            }
        }
        model.shutdown().await?;
    }

    Ok(())
}
