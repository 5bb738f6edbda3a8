use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::warn;

/// The fixed name of the protein structure file inside a system directory.
const RECEPTOR_FILE: &str = "receptor.pdb";
/// The fixed name of the ligand subdirectory inside a system directory.
const LIGAND_DIR: &str = "ligand_files";

/// One row of the system manifest: an identifier plus the two structure
/// file paths the measurement needs.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SystemRecord {
    pub system_id: String,
    pub protein_path: PathBuf,
    pub ligand_path: PathBuf,
}

#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("Failed to read data directory '{path}': {source}", path = path.display())]
    DataDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to read path table '{path}': {source}", path = path.display())]
    PathTable {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

/// Resolves systems from a data directory laid out as
/// `<data_dir>/<system_id>/receptor.pdb` plus
/// `<data_dir>/<system_id>/ligand_files/<file>`.
///
/// Subdirectories and ligand files are visited in lexicographic order so
/// reruns produce the same manifest. A system whose `ligand_files`
/// directory is missing or empty is logged at WARN and left out of the
/// manifest; it never aborts discovery.
pub fn discover_systems(data_dir: &Path) -> Result<Vec<SystemRecord>, ManifestError> {
    let wrap = |source| ManifestError::DataDir {
        path: data_dir.to_path_buf(),
        source,
    };

    let mut subdirs: Vec<PathBuf> = fs::read_dir(data_dir)
        .map_err(wrap)?
        .collect::<Result<Vec<_>, _>>()
        .map_err(wrap)?
        .into_iter()
        .map(|entry| entry.path())
        .filter(|path| path.is_dir())
        .collect();
    subdirs.sort();

    let mut records = Vec::with_capacity(subdirs.len());
    for system_path in subdirs {
        let system_id = match system_path.file_name().and_then(|n| n.to_str()) {
            Some(name) => name.to_string(),
            None => continue,
        };

        match first_ligand_file(&system_path) {
            Some(ligand_path) => records.push(SystemRecord {
                system_id,
                protein_path: system_path.join(RECEPTOR_FILE),
                ligand_path,
            }),
            None => {
                warn!(
                    system_id = %system_id,
                    "No ligand file found under '{}'; system excluded from batch",
                    system_path.join(LIGAND_DIR).display()
                );
            }
        }
    }

    Ok(records)
}

/// Reads a pre-built path table: a headered CSV with columns
/// `system_id,protein_path,ligand_path`.
pub fn read_path_table(path: &Path) -> Result<Vec<SystemRecord>, ManifestError> {
    let wrap = |source| ManifestError::PathTable {
        path: path.to_path_buf(),
        source,
    };

    let mut reader = csv::Reader::from_path(path).map_err(wrap)?;
    reader
        .deserialize()
        .collect::<Result<Vec<SystemRecord>, _>>()
        .map_err(wrap)
}

fn first_ligand_file(system_path: &Path) -> Option<PathBuf> {
    let ligand_dir = system_path.join(LIGAND_DIR);
    let mut files: Vec<PathBuf> = fs::read_dir(&ligand_dir)
        .ok()?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_file())
        .collect();
    files.sort();
    files.into_iter().next()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;

    fn make_system(root: &Path, id: &str, ligand_files: &[&str]) {
        let system = root.join(id);
        fs::create_dir_all(system.join(LIGAND_DIR)).unwrap();
        File::create(system.join(RECEPTOR_FILE)).unwrap();
        for name in ligand_files {
            File::create(system.join(LIGAND_DIR).join(name)).unwrap();
        }
    }

    #[test]
    fn discovers_systems_in_sorted_order() {
        let dir = tempfile::tempdir().unwrap();
        make_system(dir.path(), "2xyz", &["lig.sdf"]);
        make_system(dir.path(), "1abc", &["b.sdf", "a.sdf"]);

        let records = discover_systems(dir.path()).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].system_id, "1abc");
        assert_eq!(
            records[0].ligand_path,
            dir.path().join("1abc").join(LIGAND_DIR).join("a.sdf")
        );
        assert_eq!(
            records[0].protein_path,
            dir.path().join("1abc").join(RECEPTOR_FILE)
        );
        assert_eq!(records[1].system_id, "2xyz");
    }

    #[test]
    fn empty_ligand_dir_excludes_system_without_aborting() {
        let dir = tempfile::tempdir().unwrap();
        make_system(dir.path(), "1abc", &[]);
        make_system(dir.path(), "2xyz", &["lig.sdf"]);

        let records = discover_systems(dir.path()).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].system_id, "2xyz");
    }

    #[test]
    fn missing_ligand_dir_is_treated_like_empty() {
        let dir = tempfile::tempdir().unwrap();
        let system = dir.path().join("1abc");
        fs::create_dir_all(&system).unwrap();
        File::create(system.join(RECEPTOR_FILE)).unwrap();

        let records = discover_systems(dir.path()).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn missing_data_dir_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let result = discover_systems(&dir.path().join("nope"));
        assert!(matches!(result, Err(ManifestError::DataDir { .. })));
    }

    #[test]
    fn reads_path_table_csv() {
        let dir = tempfile::tempdir().unwrap();
        let table = dir.path().join("paths.csv");
        let mut file = File::create(&table).unwrap();
        writeln!(file, "system_id,protein_path,ligand_path").unwrap();
        writeln!(file, "1abc,/data/1abc/receptor.pdb,/data/1abc/lig.sdf").unwrap();
        writeln!(file, "2xyz,/data/2xyz/receptor.pdb,/data/2xyz/lig.sdf").unwrap();

        let records = read_path_table(&table).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].system_id, "1abc");
        assert_eq!(
            records[1].ligand_path,
            PathBuf::from("/data/2xyz/lig.sdf")
        );
    }

    #[test]
    fn malformed_path_table_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let table = dir.path().join("paths.csv");
        let mut file = File::create(&table).unwrap();
        writeln!(file, "system_id,protein_path,ligand_path").unwrap();
        writeln!(file, "only-one-column").unwrap();

        assert!(matches!(
            read_path_table(&table),
            Err(ManifestError::PathTable { .. })
        ));
    }
}
