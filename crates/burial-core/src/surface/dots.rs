use nalgebra::Vector3;
use std::f64::consts::{PI, TAU};

/// Point counts per dot-density level 0..=4.
///
/// The ladder roughly quadruples the sampling resolution per step, in line
/// with the icosahedral subdivision counts dot-surface implementations
/// traditionally use.
const POINTS_PER_DENSITY: [usize; 5] = [32, 92, 252, 492, 972];

/// Returns the number of sphere points used at a given density level.
///
/// Levels above the supported range saturate at the densest ladder entry;
/// range validation belongs to `SurfaceConfig`, not here.
pub fn point_count(dot_density: u8) -> usize {
    let idx = (dot_density as usize).min(POINTS_PER_DENSITY.len() - 1);
    POINTS_PER_DENSITY[idx]
}

/// Generates `n` near-uniform unit vectors via the golden-spiral (Fibonacci
/// lattice) construction.
///
/// The set is deterministic, so repeated measurements of the same input are
/// bit-identical.
pub fn unit_sphere_points(n: usize) -> Vec<Vector3<f64>> {
    let golden_angle = PI * (3.0 - 5.0_f64.sqrt());
    let mut points = Vec::with_capacity(n);

    for i in 0..n {
        let z = 1.0 - 2.0 * (i as f64 + 0.5) / n as f64;
        let ring_radius = (1.0 - z * z).sqrt();
        let azimuth = (golden_angle * i as f64) % TAU;
        points.push(Vector3::new(
            ring_radius * azimuth.cos(),
            ring_radius * azimuth.sin(),
            z,
        ));
    }

    points
}
