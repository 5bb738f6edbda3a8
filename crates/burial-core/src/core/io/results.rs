use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// One output row of the results table.
///
/// `None` is the undefined-ratio marker; it serializes as an empty CSV
/// field and deserializes back to `None`, so degenerate systems stay
/// machine-readable without resorting to NaN sentinels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultRecord {
    pub system_id: String,
    pub buried_lipid_ratio: Option<f64>,
    pub control_ratio: Option<f64>,
}

#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("Failed to read results table '{path}': {source}", path = path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error("Failed to append to results table '{path}': {source}", path = path.display())]
    Append {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error("I/O error on results table '{path}': {source}", path = path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// The append-only results table plus the set of system ids already in it.
///
/// The table is created with a header on the first append and never
/// rewritten afterwards; each append opens the file, writes one row, and
/// closes it again. The processed set is read once when the ledger is
/// opened and supports resumable reruns: a system id already present is
/// skipped unless the caller asks for an overwrite pass.
#[derive(Debug)]
pub struct ResultsLedger {
    path: PathBuf,
    processed: HashSet<String>,
}

impl ResultsLedger {
    /// Opens the ledger at `path`, reading the processed set if the table
    /// already exists. A missing table is not an error; it is created on
    /// the first append.
    pub fn open(path: &Path) -> Result<Self, LedgerError> {
        let mut processed = HashSet::new();
        if path.exists() {
            let mut reader = csv::Reader::from_path(path).map_err(|source| LedgerError::Read {
                path: path.to_path_buf(),
                source,
            })?;
            for row in reader.deserialize::<ResultRecord>() {
                let record = row.map_err(|source| LedgerError::Read {
                    path: path.to_path_buf(),
                    source,
                })?;
                processed.insert(record.system_id);
            }
        }
        Ok(Self {
            path: path.to_path_buf(),
            processed,
        })
    }

    /// Returns whether a system id is already present in the table.
    pub fn is_processed(&self, system_id: &str) -> bool {
        self.processed.contains(system_id)
    }

    /// The number of system ids already present.
    pub fn processed_count(&self) -> usize {
        self.processed.len()
    }

    /// Appends one record, writing the header first if the table is new.
    pub fn append(&mut self, record: &ResultRecord) -> Result<(), LedgerError> {
        let write_header = !self.path.exists();

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|source| LedgerError::Io {
                path: self.path.clone(),
                source,
            })?;

        let mut writer = csv::WriterBuilder::new()
            .has_headers(write_header)
            .from_writer(file);
        writer
            .serialize(record)
            .and_then(|_| writer.flush().map_err(csv::Error::from))
            .map_err(|source| LedgerError::Append {
                path: self.path.clone(),
                source,
            })?;

        self.processed.insert(record.system_id.clone());
        Ok(())
    }
}
