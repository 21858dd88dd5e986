// main.rs - Console front end: `life <size>` or `life <file> <size>`

use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use life::pacing::{AutoRun, Pacer, StepOnInput};
use life::screen::TerminalScreen;
use life::{Config, LifeError, Pacing, Simulation, StabilityRule, DEFAULT_GENERATIONS};

/// Conway's Game of Life on a walled board, one generation per keypress.
#[derive(Parser, Debug)]
#[command(name = "life", version, about)]
struct Args {
    /// `<SIZE>` for a random board, or `<FILE> <SIZE>` to read the board from a file.
    #[arg(value_name = "[FILE] SIZE")]
    positionals: Vec<String>,

    /// Number of generations to run.
    #[arg(long, default_value_t = DEFAULT_GENERATIONS)]
    generations: u64,

    /// Seed for the random board, for reproducible runs.
    #[arg(long)]
    seed: Option<u64>,

    /// Start from a named pattern (glider, blinker, block, toad, beacon, r-pentomino).
    #[arg(long)]
    pattern: Option<String>,

    /// Advance automatically every <MILLIS> instead of waiting for Enter.
    #[arg(long, value_name = "MILLIS")]
    auto: Option<u64>,

    /// Stop once two generations compare as stable (`any` or `all` cells matching).
    #[arg(long, value_name = "RULE")]
    stop_when_stable: Option<StabilityRule>,

    /// More log output on stderr (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) => {
            // Usage problems are reported but are not failures.
            err.print().context("failed to print usage")?;
            return Ok(());
        }
    };
    init_logging(args.verbose);

    let mut config = match Config::from_positionals(&args.positionals, args.pattern, args.seed) {
        Ok(config) => config,
        Err(LifeError::InvalidArguments(message)) => {
            println!("{message}");
            return Ok(());
        }
        Err(err) => return Err(err.into()),
    };
    config.generations = args.generations;
    config.stop_when_stable = args.stop_when_stable;
    if let Some(millis) = args.auto {
        config.pacing = Pacing::Auto(Duration::from_millis(millis));
    }

    let board = match config.build_board() {
        Ok(board) => board,
        Err(err @ LifeError::FileOpen { .. }) => {
            tracing::debug!(error = ?err, "seed file unavailable");
            println!("{err}");
            return Ok(());
        }
        Err(err) => return Err(err).context("failed to build the initial board"),
    };

    let mut pacer: Box<dyn Pacer> = match config.pacing {
        Pacing::StepOnInput => Box::new(StepOnInput::stdin()),
        Pacing::Auto(interval) => Box::new(AutoRun::new(interval)),
    };
    let mut screen = TerminalScreen::stdout();

    Simulation::new(board, config.generations)
        .stop_when_stable(config.stop_when_stable)
        .run(&mut screen, pacer.as_mut())
        .context("simulation aborted")?;

    Ok(())
}
