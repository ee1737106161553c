use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use clap::Parser;
use solver::{process_datasets, Recorder};
use tracing::info;
use tracing_subscriber::filter::{LevelFilter, Targets};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Parser)]
struct Args {
    /// Path to an input file; standard input when omitted
    input: Option<PathBuf>,

    /// Record each dataset and its answer as JSON files into this directory
    #[arg(short, long)]
    record_to_directory: Option<PathBuf>,

    /// A log level among "off", "error", "warn", "info", "debug", "trace"
    #[arg(short, long, default_value = "info")]
    log_level: LevelFilter,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    initialize_logging(args.log_level);

    let mut recorder = if let Some(dir_path) = args.record_to_directory {
        Some(Recorder::new(dir_path)?)
    } else {
        None
    };

    // Answers go to stdout; logging stays on stderr.
    let stdout = std::io::stdout().lock();
    match args.input {
        Some(path) => {
            info!(input = %path.display());
            let input = BufReader::new(File::open(&path)?);
            process_datasets(input, stdout, &mut recorder)
        }
        None => process_datasets(std::io::stdin().lock(), stdout, &mut recorder),
    }
}

fn initialize_logging(level: LevelFilter) {
    let format = tracing_subscriber::fmt::format()
        .with_target(false)
        .compact();

    let filter = Targets::new().with_default(level);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .event_format(format)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}
