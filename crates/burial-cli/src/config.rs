use crate::cli::Cli;
use crate::error::{CliError, Result};
use burial::surface::config::SurfaceConfig;
use burial::workflows::annotate::{AnnotateConfig, SystemSource};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

const DEFAULT_RESULT_CSV: &str = "buried_ratio.csv";

/// Optional overrides read from a TOML settings file. Every field the
/// command line accepts can also live here; explicit flags win over the
/// file, and the file wins over built-in defaults.
#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct FileSettings {
    #[serde(rename = "result-csv")]
    pub result_csv: Option<PathBuf>,
    #[serde(rename = "dot-density")]
    pub dot_density: Option<u8>,
    #[serde(rename = "dot-solvent")]
    pub dot_solvent: Option<bool>,
    #[serde(rename = "probe-radius")]
    pub probe_radius: Option<f64>,
    pub overwrite: Option<bool>,
}

impl FileSettings {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| CliError::SettingsFile {
            path: path.to_path_buf(),
            source: e.into(),
        })?;
        let settings = toml::from_str(&content).map_err(|e| CliError::SettingsFile {
            path: path.to_path_buf(),
            source: e.into(),
        })?;
        debug!(path = %path.display(), "Settings file loaded");
        Ok(settings)
    }
}

/// Resolves the final batch configuration from the parsed command line
/// and the optional settings file.
pub fn resolve(cli: &Cli) -> Result<AnnotateConfig> {
    let file = match &cli.config {
        Some(path) => FileSettings::load(path)?,
        None => FileSettings::default(),
    };

    let defaults = SurfaceConfig::default();
    let surface = SurfaceConfig::new(
        cli.dot_solvent
            .or(file.dot_solvent)
            .unwrap_or(defaults.dot_solvent),
        cli.dot_density
            .or(file.dot_density)
            .unwrap_or(defaults.dot_density),
        cli.probe_radius
            .or(file.probe_radius)
            .unwrap_or(defaults.probe_radius),
    )?;

    let source = match (&cli.data_dir, &cli.path_csv) {
        (Some(dir), _) => SystemSource::DataDir(dir.clone()),
        (None, Some(table)) => SystemSource::PathTable(table.clone()),
        // Unreachable in practice; the argument group requires one.
        (None, None) => {
            return Err(CliError::Other(anyhow::anyhow!(
                "Either a data directory or a path table must be given"
            )));
        }
    };

    Ok(AnnotateConfig {
        source,
        result_csv: cli
            .result_csv
            .clone()
            .or(file.result_csv)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_RESULT_CSV)),
        surface,
        overwrite: cli.overwrite || file.overwrite.unwrap_or(false),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::io::Write;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).unwrap()
    }

    #[test]
    fn defaults_apply_without_a_settings_file() {
        let cli = parse(&["burial", "--data-dir", "/data"]);
        let config = resolve(&cli).unwrap();

        assert_eq!(config.source, SystemSource::DataDir(PathBuf::from("/data")));
        assert_eq!(config.result_csv, PathBuf::from(DEFAULT_RESULT_CSV));
        assert_eq!(config.surface, SurfaceConfig::default());
        assert!(!config.overwrite);
    }

    #[test]
    fn settings_file_overrides_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("burial.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "dot-density = 4").unwrap();
        writeln!(file, "probe-radius = 1.2").unwrap();
        writeln!(file, "result-csv = \"custom.csv\"").unwrap();

        let cli = parse(&[
            "burial",
            "--data-dir",
            "/data",
            "--config",
            path.to_str().unwrap(),
        ]);
        let config = resolve(&cli).unwrap();

        assert_eq!(config.surface.dot_density, 4);
        assert_eq!(config.surface.probe_radius, 1.2);
        assert_eq!(config.result_csv, PathBuf::from("custom.csv"));
    }

    #[test]
    fn explicit_flags_override_the_settings_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("burial.toml");
        std::fs::write(&path, "dot-density = 4\n").unwrap();

        let cli = parse(&[
            "burial",
            "--data-dir",
            "/data",
            "--config",
            path.to_str().unwrap(),
            "--dot-density",
            "0",
        ]);
        let config = resolve(&cli).unwrap();
        assert_eq!(config.surface.dot_density, 0);
    }

    #[test]
    fn out_of_range_density_is_rejected() {
        let cli = parse(&["burial", "--data-dir", "/data", "--dot-density", "9"]);
        assert!(matches!(resolve(&cli), Err(CliError::Surface(_))));
    }

    #[test]
    fn unknown_settings_keys_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("burial.toml");
        std::fs::write(&path, "dots-density = 4\n").unwrap();

        let cli = parse(&[
            "burial",
            "--data-dir",
            "/data",
            "--config",
            path.to_str().unwrap(),
        ]);
        assert!(matches!(resolve(&cli), Err(CliError::SettingsFile { .. })));
    }
}
