use nalgebra::Point3;

/// A uniform cell grid over atom centers for neighbor candidate lookup.
///
/// Cell size is chosen by the caller as the maximum interaction distance,
/// so any sphere pair that can intersect is found by scanning the 27 cells
/// around a query point.
pub struct NeighborGrid {
    cell_size: f64,
    min_bounds: Point3<f64>,
    cells: std::collections::HashMap<(i32, i32, i32), Vec<usize>>,
}

impl NeighborGrid {
    /// Builds a grid over `positions` with the given cell size.
    pub fn new(positions: &[Point3<f64>], cell_size: f64) -> Self {
        let mut min_bounds = Point3::new(f64::MAX, f64::MAX, f64::MAX);
        for p in positions {
            min_bounds.x = min_bounds.x.min(p.x);
            min_bounds.y = min_bounds.y.min(p.y);
            min_bounds.z = min_bounds.z.min(p.z);
        }
        if positions.is_empty() {
            min_bounds = Point3::origin();
        }

        let mut cells: std::collections::HashMap<(i32, i32, i32), Vec<usize>> =
            std::collections::HashMap::new();
        let mut grid = Self {
            cell_size,
            min_bounds,
            cells: std::collections::HashMap::new(),
        };
        for (i, p) in positions.iter().enumerate() {
            cells.entry(grid.cell_of(p)).or_default().push(i);
        }
        grid.cells = cells;
        grid
    }

    fn cell_of(&self, p: &Point3<f64>) -> (i32, i32, i32) {
        let shifted = p - self.min_bounds;
        (
            (shifted.x / self.cell_size).floor() as i32,
            (shifted.y / self.cell_size).floor() as i32,
            (shifted.z / self.cell_size).floor() as i32,
        )
    }

    /// Returns the indices of all atoms in the query point's cell and the
    /// 26 surrounding cells.
    pub fn candidates(&self, p: &Point3<f64>) -> Vec<usize> {
        let (ix, iy, iz) = self.cell_of(p);
        let mut candidates = Vec::new();
        for dx in -1..=1 {
            for dy in -1..=1 {
                for dz in -1..=1 {
                    if let Some(indices) = self.cells.get(&(ix + dx, iy + dy, iz + dz)) {
                        candidates.extend_from_slice(indices);
                    }
                }
            }
        }
        candidates
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_nearby_atoms_and_skips_distant_ones() {
        let positions = vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(100.0, 0.0, 0.0),
        ];
        let grid = NeighborGrid::new(&positions, 5.0);

        let near = grid.candidates(&positions[0]);
        assert!(near.contains(&0));
        assert!(near.contains(&1));
        assert!(!near.contains(&2));

        let far = grid.candidates(&positions[2]);
        assert!(far.contains(&2));
        assert!(!far.contains(&0));
    }

    #[test]
    fn neighbors_across_cell_boundaries_are_found() {
        // Two atoms straddling a cell boundary at distance < cell_size.
        let positions = vec![Point3::new(4.9, 0.0, 0.0), Point3::new(5.1, 0.0, 0.0)];
        let grid = NeighborGrid::new(&positions, 5.0);
        let candidates = grid.candidates(&positions[0]);
        assert!(candidates.contains(&1));
    }

    #[test]
    fn empty_input_yields_no_candidates() {
        let grid = NeighborGrid::new(&[], 5.0);
        assert!(grid.candidates(&Point3::origin()).is_empty());
    }
}
