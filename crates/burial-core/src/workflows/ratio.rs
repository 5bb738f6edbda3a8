use crate::surface::SurfaceTriple;

/// The two annotations derived from one system's areas.
///
/// A ratio is `None` when its denominator is zero, which happens when an
/// object lost every atom to solvent exclusion or a degenerate input
/// produced no surface. Undefined ratios are recorded as empty fields
/// rather than a sentinel value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RatioPair {
    /// Fraction of the ligand surface buried against the protein,
    /// `(ligand + protein - complex) / (2 * ligand)`.
    pub buried_ratio: Option<f64>,
    /// Sanity check, `complex / protein`. Values near 1 mean the ligand
    /// barely changes the protein surface.
    pub control_ratio: Option<f64>,
}

/// Derives burial annotations from the three measured areas.
pub fn burial_ratios(areas: &SurfaceTriple) -> RatioPair {
    let buried_ratio = if areas.ligand_area == 0.0 {
        None
    } else {
        Some((areas.ligand_area + areas.protein_area - areas.complex_area) / (2.0 * areas.ligand_area))
    };
    let control_ratio = if areas.protein_area == 0.0 {
        None
    } else {
        Some(areas.complex_area / areas.protein_area)
    };
    RatioPair {
        buried_ratio,
        control_ratio,
    }
}
