use std::str::FromStr;

/// Residue names treated as solvent when marking atoms for exclusion.
///
/// Covers crystallographic water conventions and the common force-field
/// water model names.
static SOLVENT_RESIDUES: phf::Set<&'static str> = phf::phf_set! {
    "HOH", "WAT", "H2O", "DOD", "SOL", "TIP", "TIP3", "TIP4", "SPC",
};

/// Returns whether a residue name denotes a solvent molecule.
///
/// The comparison is case-insensitive for names up to four characters,
/// matching the conventions of PDB-style files.
pub fn is_solvent_residue(name: &str) -> bool {
    let upper = name.trim().to_ascii_uppercase();
    SOLVENT_RESIDUES.contains(upper.as_str())
}

/// Chemical elements encountered in protein-ligand structures.
///
/// The set is intentionally limited to elements that occur in proteins,
/// common ligands, and frequent crystallographic additives. Anything else
/// parses as [`Element::Other`], which carries a generic radius so that
/// surface measurement degrades gracefully instead of failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Element {
    Hydrogen,
    Carbon,
    Nitrogen,
    Oxygen,
    Fluorine,
    Phosphorus,
    Sulfur,
    Chlorine,
    Bromine,
    Iodine,
    Selenium,
    Zinc,
    Magnesium,
    Calcium,
    Iron,
    Sodium,
    Potassium,
    #[default]
    Other,
}

impl Element {
    /// The van der Waals radius in Angstroms (Bondi-style values).
    pub const fn vdw_radius(&self) -> f64 {
        match self {
            Element::Hydrogen => 1.10,
            Element::Carbon => 1.70,
            Element::Nitrogen => 1.55,
            Element::Oxygen => 1.52,
            Element::Fluorine => 1.47,
            Element::Phosphorus => 1.80,
            Element::Sulfur => 1.80,
            Element::Chlorine => 1.75,
            Element::Bromine => 1.85,
            Element::Iodine => 1.98,
            Element::Selenium => 1.90,
            Element::Zinc => 2.10,
            Element::Magnesium => 1.73,
            Element::Calcium => 2.31,
            Element::Iron => 2.05,
            Element::Sodium => 2.27,
            Element::Potassium => 2.75,
            Element::Other => 1.70,
        }
    }

    /// The single-bond covalent radius in Angstroms, used for inferring
    /// heavy-atom connectivity by distance.
    pub const fn covalent_radius(&self) -> f64 {
        match self {
            Element::Hydrogen => 0.31,
            Element::Carbon => 0.76,
            Element::Nitrogen => 0.71,
            Element::Oxygen => 0.66,
            Element::Fluorine => 0.57,
            Element::Phosphorus => 1.07,
            Element::Sulfur => 1.05,
            Element::Chlorine => 1.02,
            Element::Bromine => 1.20,
            Element::Iodine => 1.39,
            Element::Selenium => 1.20,
            Element::Zinc => 1.22,
            Element::Magnesium => 1.41,
            Element::Calcium => 1.76,
            Element::Iron => 1.32,
            Element::Sodium => 1.66,
            Element::Potassium => 2.03,
            Element::Other => 0.77,
        }
    }

    /// The typical valence, used to estimate how many hydrogens a heavy
    /// atom is missing. Zero means "never add hydrogens" (metals, unknowns).
    pub const fn typical_valence(&self) -> usize {
        match self {
            Element::Hydrogen => 1,
            Element::Carbon => 4,
            Element::Nitrogen => 3,
            Element::Oxygen => 2,
            Element::Fluorine => 1,
            Element::Phosphorus => 5,
            Element::Sulfur => 2,
            Element::Chlorine => 1,
            Element::Bromine => 1,
            Element::Iodine => 1,
            Element::Selenium => 2,
            _ => 0,
        }
    }

    /// Typical X-H bond length in Angstroms for placed hydrogens.
    pub const fn hydrogen_bond_length(&self) -> f64 {
        match self {
            Element::Carbon => 1.09,
            Element::Nitrogen => 1.01,
            Element::Oxygen => 0.96,
            Element::Sulfur => 1.34,
            _ => 1.0,
        }
    }

    /// Guesses an element from a PDB-style atom name when no element column
    /// is present. Leading digits are stripped (e.g. `1HG1`), then the first
    /// alphabetic character decides, with a two-character check for the
    /// halogens and metals that collide with single-letter symbols.
    pub fn from_atom_name(name: &str) -> Self {
        let trimmed: String = name
            .trim()
            .chars()
            .skip_while(|c| c.is_ascii_digit())
            .collect();
        let upper = trimmed.to_ascii_uppercase();

        for width in [2, 1] {
            if upper.len() >= width {
                if let Ok(element) = upper[..width].parse() {
                    return element;
                }
            }
        }
        Element::Other
    }
}

impl FromStr for Element {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "H" | "D" => Ok(Element::Hydrogen),
            "C" => Ok(Element::Carbon),
            "N" => Ok(Element::Nitrogen),
            "O" => Ok(Element::Oxygen),
            "F" => Ok(Element::Fluorine),
            "P" => Ok(Element::Phosphorus),
            "S" => Ok(Element::Sulfur),
            "CL" => Ok(Element::Chlorine),
            "BR" => Ok(Element::Bromine),
            "I" => Ok(Element::Iodine),
            "SE" => Ok(Element::Selenium),
            "ZN" => Ok(Element::Zinc),
            "MG" => Ok(Element::Magnesium),
            "CA" => Ok(Element::Calcium),
            "FE" => Ok(Element::Iron),
            "NA" => Ok(Element::Sodium),
            "K" => Ok(Element::Potassium),
            _ => Err(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solvent_residues_match_common_water_names() {
        assert!(is_solvent_residue("HOH"));
        assert!(is_solvent_residue("wat"));
        assert!(is_solvent_residue(" SOL "));
        assert!(!is_solvent_residue("LIG"));
        assert!(!is_solvent_residue("ALA"));
    }

    #[test]
    fn from_str_parses_symbols_case_insensitively() {
        assert_eq!("C".parse::<Element>(), Ok(Element::Carbon));
        assert_eq!("cl".parse::<Element>(), Ok(Element::Chlorine));
        assert_eq!(" Fe ".parse::<Element>(), Ok(Element::Iron));
        assert_eq!("Xx".parse::<Element>(), Err(()));
    }

    #[test]
    fn from_atom_name_strips_leading_digits() {
        assert_eq!(Element::from_atom_name("1HG1"), Element::Hydrogen);
        assert_eq!(Element::from_atom_name("2HB"), Element::Hydrogen);
    }

    #[test]
    fn from_atom_name_prefers_two_character_symbols() {
        assert_eq!(Element::from_atom_name("CL1"), Element::Chlorine);
        assert_eq!(Element::from_atom_name("BR"), Element::Bromine);
        // CA in an atom-name context parses as calcium; PDB readers that know
        // the residue context pass the element column instead.
        assert_eq!(Element::from_atom_name("CB"), Element::Carbon);
        assert_eq!(Element::from_atom_name("OD1"), Element::Oxygen);
    }

    #[test]
    fn unknown_element_gets_generic_radius() {
        assert_eq!(Element::from_atom_name("Q?"), Element::Other);
        assert!(Element::Other.vdw_radius() > 0.0);
        assert_eq!(Element::Other.typical_valence(), 0);
    }

    #[test]
    fn radii_are_positive_and_ordered_sensibly() {
        assert!(Element::Hydrogen.vdw_radius() < Element::Carbon.vdw_radius());
        assert!(Element::Hydrogen.covalent_radius() < Element::Carbon.covalent_radius());
        assert!(Element::Potassium.vdw_radius() > Element::Sodium.vdw_radius());
    }
}
