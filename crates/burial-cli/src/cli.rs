use clap::Parser;
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    version,
    about = "Annotates protein-ligand systems with buried-surface-area ratios, appending one row per system to a results table.",
    help_template = HELP_TEMPLATE,
)]
#[command(group = clap::ArgGroup::new("source").required(true).multiple(false))]
pub struct Cli {
    /// Directory of per-system subdirectories, each holding a
    /// 'receptor.pdb' and a 'ligand_files/' subdirectory.
    #[arg(short, long, value_name = "DIR", group = "source")]
    pub data_dir: Option<PathBuf>,

    /// CSV listing explicit paths instead of a data directory
    /// (columns: system_id,protein_path,ligand_path).
    #[arg(long, value_name = "PATH", group = "source")]
    pub path_csv: Option<PathBuf>,

    /// Results table to create or extend [default: buried_ratio.csv]
    #[arg(short, long, value_name = "PATH")]
    pub result_csv: Option<PathBuf>,

    /// Path to a settings file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Sphere sampling density level, 0 (coarsest) to 4 (finest) [default: 2]
    #[arg(long, value_name = "INT")]
    pub dot_density: Option<u8>,

    /// Measure solvent-accessible surface (true) or bare van der Waals
    /// surface (false) [default: true]
    #[arg(long, value_name = "BOOL", action = clap::ArgAction::Set)]
    pub dot_solvent: Option<bool>,

    /// Solvent probe radius in Angstroms [default: 1.4]
    #[arg(long, value_name = "FLOAT")]
    pub probe_radius: Option<f64>,

    /// Re-measure systems already present in the results table.
    #[arg(long)]
    pub overwrite: bool,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}
