use thiserror::Error;

/// The radius of the rolling water probe in Angstroms, used when the
/// solvent-accessible surface definition is selected.
pub const DEFAULT_PROBE_RADIUS: f64 = 1.4;

/// The highest supported dot density level.
pub const MAX_DOT_DENSITY: u8 = 4;

#[derive(Debug, Error, PartialEq, Clone)]
pub enum ConfigError {
    #[error("dot_density must be in 0..={MAX_DOT_DENSITY}, got {0}")]
    DotDensityOutOfRange(u8),
    #[error("probe_radius must be non-negative, got {0}")]
    NegativeProbeRadius(f64),
}

/// Sampling configuration for surface measurement.
///
/// `dot_solvent` switches between the solvent-accessible surface (atom
/// radii inflated by `probe_radius`) and the bare van der Waals envelope.
/// `dot_density` selects the angular sampling resolution; higher is more
/// accurate and more expensive.
#[derive(Debug, Clone, PartialEq)]
pub struct SurfaceConfig {
    pub dot_solvent: bool,
    pub dot_density: u8,
    pub probe_radius: f64,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            dot_solvent: true,
            dot_density: 2,
            probe_radius: DEFAULT_PROBE_RADIUS,
        }
    }
}

impl SurfaceConfig {
    /// Builds a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if `dot_density` exceeds
    /// [`MAX_DOT_DENSITY`] or `probe_radius` is negative.
    pub fn new(dot_solvent: bool, dot_density: u8, probe_radius: f64) -> Result<Self, ConfigError> {
        if dot_density > MAX_DOT_DENSITY {
            return Err(ConfigError::DotDensityOutOfRange(dot_density));
        }
        if probe_radius < 0.0 {
            return Err(ConfigError::NegativeProbeRadius(probe_radius));
        }
        Ok(Self {
            dot_solvent,
            dot_density,
            probe_radius,
        })
    }

    /// The effective probe radius: zero under the van der Waals surface
    /// definition, the configured probe otherwise.
    pub fn effective_probe(&self) -> f64 {
        if self.dot_solvent {
            self.probe_radius
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_documented_values() {
        let config = SurfaceConfig::default();
        assert!(config.dot_solvent);
        assert_eq!(config.dot_density, 2);
        assert_eq!(config.probe_radius, DEFAULT_PROBE_RADIUS);
    }

    #[test]
    fn validates_dot_density_range() {
        assert!(SurfaceConfig::new(true, 0, 1.4).is_ok());
        assert!(SurfaceConfig::new(true, 4, 1.4).is_ok());
        assert_eq!(
            SurfaceConfig::new(true, 5, 1.4),
            Err(ConfigError::DotDensityOutOfRange(5))
        );
    }

    #[test]
    fn validates_probe_radius() {
        assert_eq!(
            SurfaceConfig::new(true, 2, -0.1),
            Err(ConfigError::NegativeProbeRadius(-0.1))
        );
    }

    #[test]
    fn vdw_mode_zeroes_the_probe() {
        let sas = SurfaceConfig::new(true, 2, 1.4).unwrap();
        let vdw = SurfaceConfig::new(false, 2, 1.4).unwrap();
        assert_eq!(sas.effective_probe(), 1.4);
        assert_eq!(vdw.effective_probe(), 0.0);
    }
}
