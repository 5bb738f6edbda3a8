use super::backend::SurfaceBackend;
use super::config::SurfaceConfig;
use super::dots::{point_count, unit_sphere_points};
use super::error::SurfaceError;
use super::grid::NeighborGrid;
use super::hydrogens;
use crate::core::models::structure::Structure;
use nalgebra::Point3;
use std::collections::HashMap;
use std::f64::consts::PI;
use tracing::debug;

/// One loaded object: its atoms plus a parallel per-atom ignore mask.
#[derive(Debug, Clone)]
struct DotObject {
    structure: Structure,
    ignored: Vec<bool>,
}

impl DotObject {
    fn new(structure: Structure) -> Self {
        let ignored = vec![false; structure.len()];
        Self { structure, ignored }
    }
}

/// The bundled dot-sampling surface backend.
///
/// Implements the classic Shrake-Rupley construction: each atom carries a
/// precomputed near-uniform sphere point set scaled to its radius (van der
/// Waals radius, inflated by the probe radius under the solvent-accessible
/// definition); a point survives if it lies inside no other atom's sphere,
/// and the surviving fraction weights the atom's `4*pi*r^2` contribution.
/// Neighbor candidates come from a uniform cell grid rather than an
/// all-pairs scan.
#[derive(Debug, Default)]
pub struct DotSurface {
    config: SurfaceConfig,
    objects: HashMap<String, DotObject>,
}

impl DotSurface {
    pub fn new() -> Self {
        Self::default()
    }

    fn object(&self, label: &str) -> Result<&DotObject, SurfaceError> {
        self.objects
            .get(label)
            .ok_or_else(|| SurfaceError::UnknownLabel(label.to_string()))
    }
}

impl SurfaceBackend for DotSurface {
    fn configure(&mut self, config: &SurfaceConfig) {
        self.config = config.clone();
    }

    fn load(&mut self, structure: Structure, label: &str) -> Result<(), SurfaceError> {
        if self.objects.contains_key(label) {
            return Err(SurfaceError::DuplicateLabel(label.to_string()));
        }
        self.objects
            .insert(label.to_string(), DotObject::new(structure));
        Ok(())
    }

    fn add_hydrogens(&mut self, label: &str) -> Result<(), SurfaceError> {
        let object = self
            .objects
            .get_mut(label)
            .ok_or_else(|| SurfaceError::UnknownLabel(label.to_string()))?;
        let added = hydrogens::add_hydrogens(&mut object.structure);
        object.ignored.resize(object.structure.len(), false);
        debug!(label, added, "Hydrogens added");
        Ok(())
    }

    fn combine(&mut self, sources: &[&str], label: &str) -> Result<(), SurfaceError> {
        if sources.is_empty() {
            return Err(SurfaceError::EmptyCombine);
        }
        if self.objects.contains_key(label) {
            return Err(SurfaceError::DuplicateLabel(label.to_string()));
        }
        let mut parts = Vec::with_capacity(sources.len());
        for &source in sources {
            parts.push(&self.object(source)?.structure);
        }
        let combined = Structure::merged(label, &parts);
        self.objects
            .insert(label.to_string(), DotObject::new(combined));
        Ok(())
    }

    fn exclude_solvent(&mut self) {
        for object in self.objects.values_mut() {
            for (mask, atom) in object.ignored.iter_mut().zip(object.structure.atoms()) {
                *mask = atom.is_solvent();
            }
        }
    }

    fn area(&self, label: &str) -> Result<f64, SurfaceError> {
        let object = self.object(label)?;
        let probe = self.config.effective_probe();

        let mut positions: Vec<Point3<f64>> = Vec::new();
        let mut radii: Vec<f64> = Vec::new();
        for (atom, &skip) in object.structure.atoms().iter().zip(&object.ignored) {
            if skip {
                continue;
            }
            positions.push(atom.position);
            radii.push(atom.element.vdw_radius() + probe);
        }
        if positions.is_empty() {
            return Err(SurfaceError::EmptyObject(label.to_string()));
        }

        let max_radius = radii.iter().cloned().fold(0.0, f64::max);
        let grid = NeighborGrid::new(&positions, 2.0 * max_radius);
        let sphere = unit_sphere_points(point_count(self.config.dot_density));

        let mut total = 0.0;
        for (i, (&center_radius, center)) in radii.iter().zip(&positions).enumerate() {
            let neighbors: Vec<usize> = grid
                .candidates(center)
                .into_iter()
                .filter(|&j| j != i)
                .filter(|&j| {
                    let reach = center_radius + radii[j];
                    (positions[j] - center).norm_squared() < reach * reach
                })
                .collect();

            let accessible = sphere
                .iter()
                .filter(|dir| {
                    let point = center + **dir * center_radius;
                    !neighbors.iter().any(|&j| {
                        (positions[j] - point).norm_squared() < radii[j] * radii[j]
                    })
                })
                .count();

            let fraction = accessible as f64 / sphere.len() as f64;
            total += fraction * 4.0 * PI * center_radius * center_radius;
        }

        Ok(total)
    }

    fn reset(&mut self) {
        self.objects.clear();
        self.config = SurfaceConfig::default();
    }
}
