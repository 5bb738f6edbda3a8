use super::SurfaceTriple;
use super::backend::{SurfaceBackend, SurfaceSession};
use super::config::SurfaceConfig;
use super::error::SurfaceError;
use crate::core::io::{self, LoadError};
use crate::core::models::atom::AtomRole;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

const POCKET_LABEL: &str = "pocket";
const LIGAND_LABEL: &str = "ligand";
const COMPLEX_LABEL: &str = "complex";

#[derive(Debug, Error)]
pub enum MeasureError {
    #[error("Failed to load structure from '{path}': {source}")]
    Load {
        path: String,
        #[source]
        source: LoadError,
    },
    #[error("Surface computation failed: {0}")]
    Surface(#[from] SurfaceError),
}

/// Measures the three areas a burial ratio is built from.
///
/// The protein and ligand are loaded as separate objects, hydrogens are
/// added to the protein (ligand files are expected to carry their own),
/// the two are merged into a complex, and solvent atoms are excluded from
/// every object before the per-object areas are read back. The session
/// guarantees the backend starts empty and is wiped again afterwards, so
/// consecutive systems cannot see each other's atoms.
pub fn measure_system<B: SurfaceBackend>(
    backend: &mut B,
    config: &SurfaceConfig,
    protein_path: &Path,
    ligand_path: &Path,
) -> Result<SurfaceTriple, MeasureError> {
    let protein = io::load_structure(protein_path, POCKET_LABEL, AtomRole::Protein).map_err(
        |source| MeasureError::Load {
            path: protein_path.display().to_string(),
            source,
        },
    )?;
    let ligand = io::load_structure(ligand_path, LIGAND_LABEL, AtomRole::Ligand).map_err(
        |source| MeasureError::Load {
            path: ligand_path.display().to_string(),
            source,
        },
    )?;
    debug!(
        protein_atoms = protein.len(),
        ligand_atoms = ligand.len(),
        "Structures loaded"
    );

    let mut session = SurfaceSession::begin(backend, config);
    session.load(protein, POCKET_LABEL)?;
    session.load(ligand, LIGAND_LABEL)?;
    session.add_hydrogens(POCKET_LABEL)?;
    session.combine(&[LIGAND_LABEL, POCKET_LABEL], COMPLEX_LABEL)?;
    session.exclude_solvent();

    let triple = SurfaceTriple {
        ligand_area: session.area(LIGAND_LABEL)?,
        protein_area: session.area(POCKET_LABEL)?,
        complex_area: session.area(COMPLEX_LABEL)?,
    };
    debug!(
        ligand_area = triple.ligand_area,
        protein_area = triple.protein_area,
        complex_area = triple.complex_area,
        "Areas measured"
    );
    Ok(triple)
}
