//! Render practice text to a WAV file with the trainer's timing

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use cwtrainer_output::render::ToneRenderer;
use cwtrainer_tools::config::TrainerConfig;
use cwtrainer_tools::wav::write_wav_file;

/// CW trainer synthesis tool
#[derive(Parser)]
#[command(name = "cwt-synth")]
#[command(about = "Render text to Morse audio")]
struct Cli {
    /// Output WAV file
    #[arg(short, long)]
    output: PathBuf,

    /// Text to render
    #[arg(short, long)]
    text: Option<String>,

    /// Read the text from a file instead
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Sample rate in Hz
    #[arg(long, default_value = "48000")]
    sample_rate: u32,

    /// Amplitude (0.0 to 1.0)
    #[arg(short, long, default_value = "0.5")]
    amplitude: f32,

    /// Configuration file (TOML)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose {
        tracing::Level::INFO
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_target(false)
        .init();

    let config = TrainerConfig::load(cli.config.as_deref())?;
    let timing = config.timing()?;

    let text = if let Some(text) = cli.text {
        text
    } else if let Some(file) = cli.file {
        std::fs::read_to_string(&file)
            .with_context(|| format!("Failed to read input file: {:?}", file))?
    } else {
        anyhow::bail!("Either --text or --file must be specified");
    };

    let renderer = ToneRenderer::new(timing, cli.sample_rate as f32, cli.amplitude);
    let samples = renderer.render_text(&text);
    if samples.is_empty() {
        anyhow::bail!("No renderable characters in input");
    }

    write_wav_file(&samples, &cli.output, cli.sample_rate)?;
    info!("Rendered {} input characters", text.trim().len());
    println!(
        "✓ Wrote {} samples to {:?}",
        samples.len(),
        cli.output
    );
    Ok(())
}
