// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Magic ring search binary.
//!
//! ## Usage
//!
//! ```bash
//! magic-ring 5
//! magic-ring --stats --log-level info 3
//! magic-ring            # prompts for n
//! ```

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use clap::Parser;
use magic_ring_search::solver::search_with_statistics;
use magic_ring_search::{RingError, RingSize};
use tracing::{error, info, Level};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Find every magic n-gon ring and the largest concatenated solution string
#[derive(Parser, Debug)]
#[command(name = "magic-ring")]
#[command(version)]
#[command(about = "Search for magic 3-, 4- and 5-gon rings", long_about = None)]
struct Args {
    /// Number of sides n, in range [3, 5]; prompts on stdin when omitted
    n: Option<String>,

    /// Log search counters when the search completes
    #[arg(long)]
    stats: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short = 'l', long, default_value = "warn")]
    log_level: String,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let level = match args.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::WARN,
    };
    // Counters are logged at info
    let level = if args.stats { level.max(Level::INFO) } else { level };

    // RUST_LOG overrides --log-level; logs go to stderr
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::default().add_directive(level.into()));
    FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .compact()
        .init();

    let size = match read_size(args.n.as_deref()) {
        Ok(size) => size,
        Err(err) => {
            error!("{}", err);
            return ExitCode::FAILURE;
        }
    };

    let (report, statistics) = search_with_statistics(size);
    if args.stats {
        for (name, value) in statistics.entries() {
            info!("{}: {}", name, value);
        }
    }

    print!("{}", report);
    ExitCode::SUCCESS
}

/// Parse n from the argument, or prompt for it when there is none.
fn read_size(arg: Option<&str>) -> Result<RingSize, RingError> {
    match arg {
        Some(text) => text.parse(),
        None => {
            print!("Enter a natural number (in range [3, 5]): ");
            let _ = io::stdout().flush();
            let mut line = String::new();
            io::stdin()
                .lock()
                .read_line(&mut line)
                .map_err(|_| RingError::InvalidArgument { input: String::new() })?;
            line.parse()
        }
    }
}
