use super::config::SurfaceConfig;
use super::error::SurfaceError;
use crate::core::models::structure::Structure;

/// The capability interface for surface-area computation.
///
/// A backend is a stateful workspace: structures are loaded under string
/// labels, prepared (hydrogen addition, solvent exclusion), optionally
/// combined into new labelled objects, and measured. The pipeline is
/// written entirely against this trait, so a different surface
/// implementation can be swapped in without touching the batch logic.
///
/// Backends are mutable workspaces, not value types: `reset` must return
/// the backend to its freshly constructed state, and callers are expected
/// to go through [`SurfaceSession`] rather than calling `reset` by hand.
pub trait SurfaceBackend {
    /// Applies a sampling configuration to subsequent area computations.
    fn configure(&mut self, config: &SurfaceConfig);

    /// Loads a structure under a label.
    ///
    /// # Errors
    ///
    /// Returns [`SurfaceError::DuplicateLabel`] if the label is taken.
    fn load(&mut self, structure: Structure, label: &str) -> Result<(), SurfaceError>;

    /// Adds hydrogens to the object under `label`.
    ///
    /// # Errors
    ///
    /// Returns [`SurfaceError::UnknownLabel`] if nothing is loaded under
    /// `label`.
    fn add_hydrogens(&mut self, label: &str) -> Result<(), SurfaceError>;

    /// Builds a new object under `label` containing the atoms of every
    /// source object, in the order given.
    ///
    /// # Errors
    ///
    /// Fails if `sources` is empty, a source label is unknown, or `label`
    /// is already taken.
    fn combine(&mut self, sources: &[&str], label: &str) -> Result<(), SurfaceError>;

    /// Marks all solvent atoms in all loaded objects as ignored for area
    /// computation, clearing any previous ignore marks first.
    fn exclude_solvent(&mut self);

    /// Computes the total surface area of the object under `label`, in
    /// square Angstroms, under the current configuration.
    ///
    /// # Errors
    ///
    /// Fails if the label is unknown or the object has no measurable atoms.
    fn area(&self, label: &str) -> Result<f64, SurfaceError>;

    /// Clears all loaded objects and restores the default configuration.
    fn reset(&mut self);
}

/// A scoped measurement session over a backend.
///
/// Backend state is process-wide and mutable; leftover atoms from one
/// system would corrupt every measurement after it. The session makes the
/// isolation contract structural: `begin` resets and configures the
/// backend, and `Drop` resets it again, so the workspace is clean on every
/// exit path including early `?` returns.
pub struct SurfaceSession<'a, B: SurfaceBackend> {
    backend: &'a mut B,
}

impl<'a, B: SurfaceBackend> SurfaceSession<'a, B> {
    /// Starts a session: resets the backend and applies `config`.
    pub fn begin(backend: &'a mut B, config: &SurfaceConfig) -> Self {
        backend.reset();
        backend.configure(config);
        Self { backend }
    }

    pub fn load(&mut self, structure: Structure, label: &str) -> Result<(), SurfaceError> {
        self.backend.load(structure, label)
    }

    pub fn add_hydrogens(&mut self, label: &str) -> Result<(), SurfaceError> {
        self.backend.add_hydrogens(label)
    }

    pub fn combine(&mut self, sources: &[&str], label: &str) -> Result<(), SurfaceError> {
        self.backend.combine(sources, label)
    }

    pub fn exclude_solvent(&mut self) {
        self.backend.exclude_solvent();
    }

    pub fn area(&self, label: &str) -> Result<f64, SurfaceError> {
        self.backend.area(label)
    }
}

impl<B: SurfaceBackend> Drop for SurfaceSession<'_, B> {
    fn drop(&mut self) {
        self.backend.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::atom::{Atom, AtomRole};
    use crate::core::models::element::Element;
    use nalgebra::Point3;

    /// Minimal backend that records its lifecycle calls.
    #[derive(Default)]
    struct RecordingBackend {
        resets: usize,
        loaded: Vec<String>,
        configured: Option<SurfaceConfig>,
    }

    impl SurfaceBackend for RecordingBackend {
        fn configure(&mut self, config: &SurfaceConfig) {
            self.configured = Some(config.clone());
        }

        fn load(&mut self, _structure: Structure, label: &str) -> Result<(), SurfaceError> {
            if self.loaded.iter().any(|l| l == label) {
                return Err(SurfaceError::DuplicateLabel(label.to_string()));
            }
            self.loaded.push(label.to_string());
            Ok(())
        }

        fn add_hydrogens(&mut self, label: &str) -> Result<(), SurfaceError> {
            if self.loaded.iter().any(|l| l == label) {
                Ok(())
            } else {
                Err(SurfaceError::UnknownLabel(label.to_string()))
            }
        }

        fn combine(&mut self, sources: &[&str], label: &str) -> Result<(), SurfaceError> {
            if sources.is_empty() {
                return Err(SurfaceError::EmptyCombine);
            }
            self.load(Structure::new(label), label)
        }

        fn exclude_solvent(&mut self) {}

        fn area(&self, label: &str) -> Result<f64, SurfaceError> {
            if self.loaded.iter().any(|l| l == label) {
                Ok(1.0)
            } else {
                Err(SurfaceError::UnknownLabel(label.to_string()))
            }
        }

        fn reset(&mut self) {
            self.resets += 1;
            self.loaded.clear();
            self.configured = None;
        }
    }

    fn tiny_structure(label: &str) -> Structure {
        let mut s = Structure::new(label);
        s.push(Atom::new(
            "C",
            Element::Carbon,
            Point3::origin(),
            AtomRole::Ligand,
        ));
        s
    }

    #[test]
    fn session_resets_on_begin_and_drop() {
        let mut backend = RecordingBackend::default();
        {
            let mut session = SurfaceSession::begin(&mut backend, &SurfaceConfig::default());
            session.load(tiny_structure("ligand"), "ligand").unwrap();
        }
        assert_eq!(backend.resets, 2);
        assert!(backend.loaded.is_empty());
    }

    #[test]
    fn session_resets_even_when_work_fails_midway() {
        let mut backend = RecordingBackend::default();
        let result: Result<(), SurfaceError> = (|| {
            let mut session = SurfaceSession::begin(&mut backend, &SurfaceConfig::default());
            session.load(tiny_structure("ligand"), "ligand")?;
            session.load(tiny_structure("ligand"), "ligand")?; // duplicate
            Ok(())
        })();
        assert!(matches!(result, Err(SurfaceError::DuplicateLabel(_))));
        assert_eq!(backend.resets, 2);
        assert!(backend.loaded.is_empty());
    }

    #[test]
    fn begin_applies_the_configuration() {
        let mut backend = RecordingBackend::default();
        let config = SurfaceConfig::new(false, 3, 1.4).unwrap();
        {
            let _session = SurfaceSession::begin(&mut backend, &config);
            // Configuration applied during the session...
        }
        // ...and cleared by the final reset.
        assert!(backend.configured.is_none());
    }
}
