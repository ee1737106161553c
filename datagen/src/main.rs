use std::io::Write;

use clap::Parser;
use prospect::{write_dataset, Dataset};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;
use tracing_subscriber::filter::{LevelFilter, Targets};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Emit a random well-formed input stream for the mining-area solver.
#[derive(Parser)]
struct Args {
    /// How many datasets to emit
    #[arg(short, long, default_value_t = 10)]
    num_datasets: usize,

    /// Town height
    #[arg(long, default_value_t = 10)]
    height: i32,

    /// Town width
    #[arg(long, default_value_t = 10)]
    width: i32,

    /// Number of resource kinds per dataset
    #[arg(short, long, default_value_t = 4)]
    kinds: usize,

    /// Maximum number of deposits per kind
    #[arg(short, long, default_value_t = 6)]
    max_deposits: usize,

    /// RNG seed
    #[arg(long)]
    seed: Option<u64>,

    /// A log level among "off", "error", "warn", "info", "debug", "trace"
    #[arg(short, long, default_value = "info")]
    log_level: LevelFilter,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    initialize_logging(args.log_level);

    // Get a random seed
    let seed = args.seed.unwrap_or_else(rand::random);
    info!(seed);
    let mut rng = StdRng::seed_from_u64(seed);

    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{}", args.num_datasets)?;
    for _ in 0..args.num_datasets {
        let dataset = Dataset::random(
            &mut rng,
            args.height,
            args.width,
            args.kinds,
            args.max_deposits,
        );
        write_dataset(&mut stdout, &dataset)?;
    }
    stdout.flush()?;
    Ok(())
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
