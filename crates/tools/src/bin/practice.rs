//! Interactive Morse practice on the terminal

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use cwtrainer_engine::session::PracticeSession;
use cwtrainer_output::queue::{command_queue, QUEUE_CAPACITY};
use cwtrainer_output::sink::NullToneSink;
use cwtrainer_output::worker::spawn_worker;
use cwtrainer_tools::config::TrainerConfig;
use cwtrainer_tools::practice::{run, PracticeOpts};
use cwtrainer_tools::terminal::TerminalPulseSink;

/// CW trainer practice tool
#[derive(Parser)]
#[command(name = "cwt-practice")]
#[command(about = "Interactive Morse practice with timed decoding")]
struct Cli {
    /// Configuration file (TOML)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Emit session snapshots as JSON lines
    #[arg(long)]
    json: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Enable debug output
    #[arg(long)]
    debug: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.debug {
        tracing::Level::DEBUG
    } else if cli.verbose {
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

    let (commands, receiver) = command_queue(QUEUE_CAPACITY);
    let session = PracticeSession::new(config.session(), commands)?;
    let worker = spawn_worker(
        receiver,
        timing,
        session.volume_handle(),
        Box::new(NullToneSink),
        Box::new(TerminalPulseSink),
    )?;

    let result = run(session, PracticeOpts { json: cli.json });

    // Block until the worker finishes its last element before exiting
    worker.shutdown();
    result
}
