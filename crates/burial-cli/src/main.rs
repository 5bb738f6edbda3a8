mod cli;
mod config;
mod error;
mod logging;
mod progress;

use crate::cli::Cli;
use crate::error::Result;
use crate::progress::CliProgressHandler;
use burial::surface::progress::ProgressReporter;
use burial::surface::shrake::DotSurface;
use burial::workflows::annotate::{self, BatchSummary};
use clap::Parser;
use tracing::{debug, info, warn};

fn main() {
    match run_app() {
        Ok(summary) => {
            println!(
                "Batch finished: {} written, {} skipped, {} failed of {} systems.",
                summary.written, summary.skipped, summary.failed, summary.total
            );
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn run_app() -> Result<BatchSummary> {
    let cli = Cli::parse();
    logging::setup_logging(cli.verbose, cli.quiet, &cli.log_file)?;

    info!("burial v{} starting up.", env!("CARGO_PKG_VERSION"));
    debug!("Full CLI arguments parsed: {:?}", &cli);

    let batch_config = config::resolve(&cli)?;

    let progress_handler = CliProgressHandler::new();
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());
    let mut backend = DotSurface::new();

    let summary = annotate::run(&batch_config, &mut backend, &reporter)?;
    if summary.failed > 0 {
        warn!(
            failed = summary.failed,
            "Some systems failed; see the log above for details"
        );
    }
    Ok(summary)
}
