use super::atom::{Atom, AtomRole};

/// A loaded molecular structure: a labelled, flat collection of atoms.
///
/// Structures are the unit the surface engine operates on. They are created
/// by the file readers, optionally extended with hydrogens, and merged into
/// a combined complex before measurement. No connectivity is stored; the
/// engine infers neighbor relationships geometrically when it needs them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Structure {
    label: String,
    atoms: Vec<Atom>,
}

impl Structure {
    /// Creates a new, empty structure with the given label.
    pub fn new(label: &str) -> Self {
        Self {
            label: label.to_string(),
            atoms: Vec::new(),
        }
    }

    /// The label this structure was loaded under.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Appends an atom to the structure.
    pub fn push(&mut self, atom: Atom) {
        self.atoms.push(atom);
    }

    /// All atoms, in load order.
    pub fn atoms(&self) -> &[Atom] {
        &self.atoms
    }

    /// Mutable access to all atoms.
    pub fn atoms_mut(&mut self) -> &mut [Atom] {
        &mut self.atoms
    }

    /// The number of atoms in the structure.
    pub fn len(&self) -> usize {
        self.atoms.len()
    }

    /// Returns whether the structure contains no atoms.
    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty()
    }

    /// Returns an iterator over atoms with a specific role.
    pub fn atoms_by_role(&self, role: AtomRole) -> impl Iterator<Item = &Atom> {
        self.atoms.iter().filter(move |atom| atom.role == role)
    }

    /// Builds a new structure containing copies of the atoms of each source,
    /// in the order given. Used to form the combined protein-ligand complex.
    pub fn merged(label: &str, sources: &[&Structure]) -> Self {
        let mut combined = Structure::new(label);
        combined.atoms = sources
            .iter()
            .flat_map(|s| s.atoms.iter().cloned())
            .collect();
        combined
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::element::Element;
    use nalgebra::Point3;

    fn atom(name: &str, role: AtomRole) -> Atom {
        Atom::new(name, Element::Carbon, Point3::origin(), role)
    }

    #[test]
    fn push_and_query() {
        let mut s = Structure::new("pocket");
        assert!(s.is_empty());

        s.push(atom("CA", AtomRole::Protein));
        s.push(atom("O", AtomRole::Water));

        assert_eq!(s.label(), "pocket");
        assert_eq!(s.len(), 2);
        assert_eq!(s.atoms_by_role(AtomRole::Protein).count(), 1);
        assert_eq!(s.atoms_by_role(AtomRole::Water).count(), 1);
        assert_eq!(s.atoms_by_role(AtomRole::Ligand).count(), 0);
    }

    #[test]
    fn merged_preserves_source_order_and_roles() {
        let mut protein = Structure::new("pocket");
        protein.push(atom("CA", AtomRole::Protein));
        protein.push(atom("CB", AtomRole::Protein));

        let mut ligand = Structure::new("ligand");
        ligand.push(atom("C1", AtomRole::Ligand));

        let complex = Structure::merged("complex", &[&ligand, &protein]);
        assert_eq!(complex.label(), "complex");
        assert_eq!(complex.len(), 3);
        assert_eq!(complex.atoms()[0].role, AtomRole::Ligand);
        assert_eq!(complex.atoms()[1].name, "CA");

        // Sources are untouched.
        assert_eq!(protein.len(), 2);
        assert_eq!(ligand.len(), 1);
    }
}
