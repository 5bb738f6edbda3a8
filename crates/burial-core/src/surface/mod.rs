//! # Surface Module
//!
//! This module implements the surface-measurement engine: the stateful layer
//! that turns a pair of structure files into the three surface areas the
//! buried-ratio arithmetic needs.
//!
//! ## Architecture
//!
//! - **Capability Boundary** ([`backend`]) - The [`backend::SurfaceBackend`]
//!   trait is the library-agnostic seam; any surface implementation
//!   satisfying it can be swapped in. The scoped
//!   [`backend::SurfaceSession`] guarantees backend state is reset between
//!   systems on every exit path.
//! - **Bundled Backend** ([`shrake`]) - Dot-sampled (Shrake-Rupley style)
//!   surface areas over a uniform neighbor grid.
//! - **Sampling Configuration** ([`config`]) - Dot density, surface
//!   definition (solvent-accessible vs. van der Waals), probe radius.
//! - **Preparation** ([`hydrogens`]) - Valence-based hydrogen addition for
//!   protein structures loaded from heavy-atom-only files.
//! - **Measurement Procedure** ([`measure`]) - The fixed load / prepare /
//!   combine / exclude-solvent / measure sequence for one system.
//! - **Progress Monitoring** ([`progress`]) - Callback-based progress
//!   reporting consumed by front-ends.
//! - **Error Handling** ([`error`]) - Engine-specific error types.

pub mod backend;
pub mod config;
pub(crate) mod dots;
pub mod error;
pub(crate) mod grid;
pub mod hydrogens;
pub mod measure;
pub mod progress;
pub mod shrake;

/// The three areas measured for one protein-ligand system, in square
/// Angstroms: ligand alone, protein alone, and the combined complex, all
/// under the same sampling configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceTriple {
    pub ligand_area: f64,
    pub protein_area: f64,
    pub complex_area: f64,
}
