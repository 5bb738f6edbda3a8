use super::ratio;
use crate::core::io::manifest::{self, ManifestError, SystemRecord};
use crate::core::io::results::{LedgerError, ResultRecord, ResultsLedger};
use crate::surface::backend::SurfaceBackend;
use crate::surface::config::SurfaceConfig;
use crate::surface::measure::{self, MeasureError};
use crate::surface::progress::{Progress, ProgressReporter};
use std::path::PathBuf;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Where the batch gets its list of systems from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SystemSource {
    /// A directory of per-system subdirectories with the fixed
    /// `receptor.pdb` / `ligand_files/` layout.
    DataDir(PathBuf),
    /// A pre-built CSV listing explicit protein and ligand paths.
    PathTable(PathBuf),
}

#[derive(Debug, Clone)]
pub struct AnnotateConfig {
    pub source: SystemSource,
    /// Results table, created on first append and extended afterwards.
    pub result_csv: PathBuf,
    pub surface: SurfaceConfig,
    /// Re-measure systems already present in the results table. Prior
    /// rows are kept; consumers take the last row per system id.
    pub overwrite: bool,
}

/// Errors that abort the whole batch. Anything scoped to a single system
/// is logged and counted instead.
#[derive(Debug, Error)]
pub enum BatchError {
    #[error(transparent)]
    Manifest(#[from] ManifestError),
    #[error(transparent)]
    Ledger(#[from] LedgerError),
}

#[derive(Debug, Error)]
enum SystemError {
    #[error("Missing input file '{0}'")]
    MissingFile(PathBuf),
    #[error(transparent)]
    Measure(#[from] MeasureError),
}

/// Counts for the finished batch. `total` is the manifest size;
/// `written + skipped + failed == total`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BatchSummary {
    pub total: usize,
    pub written: usize,
    pub skipped: usize,
    pub failed: usize,
}

/// Runs the batch: resolve the manifest, measure each unprocessed system
/// through `backend`, and append its ratios to the results table.
///
/// A failure inside one system (unreadable file, parse error, degenerate
/// surface) is logged at WARN and counted in `failed`; the batch then
/// moves on to the next system. Only manifest or ledger failures abort.
pub fn run<B: SurfaceBackend>(
    config: &AnnotateConfig,
    backend: &mut B,
    reporter: &ProgressReporter,
) -> Result<BatchSummary, BatchError> {
    let mut ledger = ResultsLedger::open(&config.result_csv)?;
    let systems = resolve_systems(&config.source)?;

    info!(
        total = systems.len(),
        already_processed = ledger.processed_count(),
        results = %config.result_csv.display(),
        "Starting burial annotation batch"
    );
    reporter.report(Progress::TaskStart {
        total_steps: systems.len() as u64,
    });

    let mut summary = BatchSummary {
        total: systems.len(),
        ..BatchSummary::default()
    };
    for system in &systems {
        if ledger.is_processed(&system.system_id) && !config.overwrite {
            debug!(system_id = %system.system_id, "Already processed; skipping");
            summary.skipped += 1;
            reporter.report(Progress::TaskIncrement);
            continue;
        }

        match annotate_system(system, config, backend, &mut ledger) {
            Ok(()) => summary.written += 1,
            Err(BatchStep::Fatal(err)) => return Err(err),
            Err(BatchStep::System(err)) => {
                warn!(
                    system_id = %system.system_id,
                    error = %err,
                    "System failed; continuing with the rest of the batch"
                );
                summary.failed += 1;
            }
        }
        reporter.report(Progress::TaskIncrement);
    }
    reporter.report(Progress::TaskFinish);

    info!(
        written = summary.written,
        skipped = summary.skipped,
        failed = summary.failed,
        "Batch finished"
    );
    Ok(summary)
}

enum BatchStep {
    /// Ledger append failures abort; losing rows silently defeats the
    /// point of an append-only table.
    Fatal(BatchError),
    System(SystemError),
}

fn annotate_system<B: SurfaceBackend>(
    system: &SystemRecord,
    config: &AnnotateConfig,
    backend: &mut B,
    ledger: &mut ResultsLedger,
) -> Result<(), BatchStep> {
    for path in [&system.protein_path, &system.ligand_path] {
        if !path.is_file() {
            return Err(BatchStep::System(SystemError::MissingFile(path.clone())));
        }
    }

    let areas = measure::measure_system(
        backend,
        &config.surface,
        &system.protein_path,
        &system.ligand_path,
    )
    .map_err(|err| BatchStep::System(SystemError::Measure(err)))?;

    let ratios = ratio::burial_ratios(&areas);
    if ratios.buried_ratio.is_none() || ratios.control_ratio.is_none() {
        warn!(
            system_id = %system.system_id,
            "Zero-area denominator; recording undefined ratio"
        );
    }

    ledger
        .append(&ResultRecord {
            system_id: system.system_id.clone(),
            buried_lipid_ratio: ratios.buried_ratio,
            control_ratio: ratios.control_ratio,
        })
        .map_err(|err| BatchStep::Fatal(BatchError::Ledger(err)))?;

    debug!(
        system_id = %system.system_id,
        buried = ?ratios.buried_ratio,
        control = ?ratios.control_ratio,
        "Annotation written"
    );
    Ok(())
}

fn resolve_systems(source: &SystemSource) -> Result<Vec<SystemRecord>, ManifestError> {
    match source {
        SystemSource::DataDir(path) => manifest::discover_systems(path),
        SystemSource::PathTable(path) => manifest::read_path_table(path),
    }
}
