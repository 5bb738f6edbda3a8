//! Provides input/output functionality for the annotation pipeline.
//!
//! This module contains the structure file readers (PDB and SDF) behind a
//! unified trait-based interface, the system manifest resolver that maps
//! system identifiers to file paths, and the append-only results ledger.

pub mod manifest;
pub mod pdb;
pub mod results;
pub mod sdf;
pub mod traits;

use crate::core::models::atom::AtomRole;
use crate::core::models::structure::Structure;
use pdb::PdbFile;
use sdf::SdfFile;
use std::path::Path;
use thiserror::Error;
use traits::StructureFile;

/// Errors arising when loading a structure file of any supported format.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Unsupported structure file extension for '{0}'")]
    UnsupportedFormat(String),

    #[error(transparent)]
    Pdb(#[from] pdb::PdbError),

    #[error(transparent)]
    Sdf(#[from] sdf::SdfError),
}

/// Loads a structure from a path, selecting the reader by file extension.
///
/// `.pdb` and `.ent` files are read as PDB; `.sdf`, `.mol`, and `.mdl` as
/// MDL V2000. Every atom is assigned `role`, except that PDB water residues
/// keep [`AtomRole::Water`] so solvent exclusion can find them.
pub fn load_structure(path: &Path, label: &str, role: AtomRole) -> Result<Structure, LoadError> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();

    let structure = match extension.as_str() {
        "pdb" | "ent" => PdbFile::read_from_path(path)?,
        "sdf" | "mol" | "mdl" => SdfFile::read_from_path(path)?,
        _ => return Err(LoadError::UnsupportedFormat(path.display().to_string())),
    };

    let mut relabelled = Structure::new(label);
    for mut atom in structure.atoms().iter().cloned() {
        if atom.role != AtomRole::Water {
            atom.role = role;
        }
        relabelled.push(atom);
    }
    Ok(relabelled)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn unsupported_extension_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("structure.xyz");
        std::fs::write(&path, "not a structure").unwrap();

        let result = load_structure(&path, "pocket", AtomRole::Protein);
        assert!(matches!(result, Err(LoadError::UnsupportedFormat(_))));
    }

    #[test]
    fn pdb_load_assigns_requested_role_but_keeps_water() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("receptor.pdb");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(
            file,
            "ATOM      1  CA  ALA A   1       0.000   0.000   0.000  1.00  0.00           C"
        )
        .unwrap();
        writeln!(
            file,
            "HETATM    2  O   HOH A 101       5.000   0.000   0.000  1.00  0.00           O"
        )
        .unwrap();

        let structure = load_structure(&path, "pocket", AtomRole::Protein).unwrap();
        assert_eq!(structure.label(), "pocket");
        assert_eq!(structure.atoms()[0].role, AtomRole::Protein);
        assert_eq!(structure.atoms()[1].role, AtomRole::Water);
    }
}
