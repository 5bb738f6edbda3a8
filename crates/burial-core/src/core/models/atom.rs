use super::element::Element;
use nalgebra::Point3;
use std::str::FromStr;

/// Represents the role or classification of an atom within a loaded structure.
///
/// Roles drive the two decisions this pipeline makes about atoms: solvent
/// exclusion (water atoms are ignored during surface measurement) and
/// hydrogen addition (only protein atoms are topped up).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum AtomRole {
    /// Protein atom, from the receptor structure.
    Protein,
    /// Ligand atom, from the bound small molecule.
    Ligand,
    /// Water molecule atom, excluded from all surface areas.
    Water,
    /// Unknown or unclassified atom role.
    #[default]
    Other,
}

/// Represents an atom in a loaded structure.
///
/// Only the properties the surface measurement needs are carried: the name
/// (for diagnostics), the element (which supplies radii), the position, and
/// the role. Connectivity is inferred geometrically where required rather
/// than stored.
#[derive(Debug, Clone, PartialEq)]
pub struct Atom {
    /// The name of the atom (e.g., "CA", "N", "O1").
    pub name: String,
    /// The chemical element, which supplies van der Waals and covalent radii.
    pub element: Element,
    /// The 3D coordinates of the atom in Angstroms.
    pub position: Point3<f64>,
    /// The role of the atom in the loaded structure.
    pub role: AtomRole,
}

impl Atom {
    /// Creates a new `Atom`.
    pub fn new(name: &str, element: Element, position: Point3<f64>, role: AtomRole) -> Self {
        Self {
            name: name.to_string(),
            element,
            position,
            role,
        }
    }

    /// Returns whether this atom belongs to a solvent molecule.
    pub fn is_solvent(&self) -> bool {
        self.role == AtomRole::Water
    }
}

impl FromStr for AtomRole {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "protein" | "receptor" | "pocket" => Ok(AtomRole::Protein),
            "ligand" => Ok(AtomRole::Ligand),
            "water" | "solvent" => Ok(AtomRole::Water),
            "other" | "unknown" => Ok(AtomRole::Other),
            _ => Err(()),
        }
    }
}
