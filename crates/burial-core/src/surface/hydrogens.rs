use crate::core::models::atom::Atom;
use crate::core::models::element::Element;
use crate::core::models::structure::Structure;
use crate::surface::grid::NeighborGrid;
use nalgebra::{Point3, Vector3};

/// Distance tolerance added to the covalent radii sum when inferring bonds.
const BOND_TOLERANCE: f64 = 0.4;
/// Grid cell size covering the largest plausible covalent contact.
const BOND_GRID_CELL: f64 = 3.5;

/// Tops up heavy atoms to their typical valence with geometrically placed
/// hydrogens.
///
/// Structure files from crystallography routinely omit hydrogens, which
/// would understate surface areas under a fixed radius set. Connectivity is
/// inferred by covalent-distance: two atoms are bonded when their separation
/// is within the sum of covalent radii plus a tolerance. The deficit against
/// the element's typical valence is filled with hydrogens placed at standard
/// bond lengths: opposite the bonded-neighbor centroid for a single
/// hydrogen, on a fixed tetrahedral-style direction table otherwise. The
/// placement is deliberately naive; the dot sampling only needs hydrogen
/// spheres in approximately the right place.
///
/// Returns the number of hydrogens added.
pub fn add_hydrogens(structure: &mut Structure) -> usize {
    let positions: Vec<Point3<f64>> = structure.atoms().iter().map(|a| a.position).collect();
    let grid = NeighborGrid::new(&positions, BOND_GRID_CELL);

    let mut new_atoms = Vec::new();
    for (idx, atom) in structure.atoms().iter().enumerate() {
        if atom.element == Element::Hydrogen {
            continue;
        }
        let valence = atom.element.typical_valence();
        if valence == 0 {
            continue;
        }

        let neighbors = bonded_neighbors(structure, &grid, idx);
        if neighbors.len() >= valence {
            continue;
        }
        let needed = valence - neighbors.len();

        let directions = hydrogen_directions(structure, atom, &neighbors, needed);
        let bond_length = atom.element.hydrogen_bond_length();
        for direction in directions {
            new_atoms.push(Atom::new(
                "H",
                Element::Hydrogen,
                atom.position + direction * bond_length,
                atom.role,
            ));
        }
    }

    let added = new_atoms.len();
    for atom in new_atoms {
        structure.push(atom);
    }
    added
}

fn bonded_neighbors(structure: &Structure, grid: &NeighborGrid, idx: usize) -> Vec<usize> {
    let atom = &structure.atoms()[idx];
    grid.candidates(&atom.position)
        .into_iter()
        .filter(|&j| j != idx)
        .filter(|&j| {
            let other = &structure.atoms()[j];
            let max_dist =
                atom.element.covalent_radius() + other.element.covalent_radius() + BOND_TOLERANCE;
            (other.position - atom.position).norm() <= max_dist
        })
        .collect()
}

fn hydrogen_directions(
    structure: &Structure,
    atom: &Atom,
    neighbors: &[usize],
    needed: usize,
) -> Vec<Vector3<f64>> {
    if needed == 1 && !neighbors.is_empty() {
        // Single missing hydrogen: point away from the bonded neighbors.
        let centroid: Vector3<f64> = neighbors
            .iter()
            .map(|&j| structure.atoms()[j].position - atom.position)
            .sum::<Vector3<f64>>()
            / neighbors.len() as f64;
        if centroid.norm() > 1e-9 {
            return vec![-centroid.normalize()];
        }
    }
    fixed_directions(needed)
}

/// Fixed direction tables for 1..=4 hydrogens; more than four falls back to
/// an equatorial ring.
fn fixed_directions(n: usize) -> Vec<Vector3<f64>> {
    match n {
        0 => Vec::new(),
        1 => vec![Vector3::new(0.0, 0.0, 1.0)],
        2 => vec![Vector3::new(0.0, 0.0, 1.0), Vector3::new(0.0, 0.0, -1.0)],
        3 => vec![
            Vector3::new(1.0, 0.0, 0.0),
            Vector3::new(-0.5, 0.866, 0.0),
            Vector3::new(-0.5, -0.866, 0.0),
        ],
        // Tetrahedral: alternating cube corners.
        4 => vec![
            Vector3::new(1.0, 1.0, 1.0),
            Vector3::new(1.0, -1.0, -1.0),
            Vector3::new(-1.0, 1.0, -1.0),
            Vector3::new(-1.0, -1.0, 1.0),
        ],
        n => {
            let mut dirs = Vec::with_capacity(n);
            for i in 0..n {
                let angle = std::f64::consts::TAU * i as f64 / n as f64;
                dirs.push(Vector3::new(angle.cos(), angle.sin(), 0.0));
            }
            dirs
        }
    }
    .into_iter()
    .map(|v| v.normalize())
    .collect()
}
