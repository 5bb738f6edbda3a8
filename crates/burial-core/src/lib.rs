//! # Burial Core Library
//!
//! A library for annotating protein-ligand complexes with buried-surface-area
//! ratios, computed by dot-sampled (Shrake-Rupley style) surface measurement.
//!
//! ## Architectural Philosophy
//!
//! The library is designed with a strict three-layer architecture to ensure a
//! clear separation of concerns, making it modular, testable, and extensible.
//!
//! - **[`core`]: The Foundation.** Contains stateless data models
//!   (`Structure`, `Atom`, `Element`) and I/O utilities: structure file
//!   readers, the system manifest resolver, and the append-only results
//!   ledger.
//!
//! - **[`surface`]: The Measurement Engine.** This stateful layer owns the
//!   `SurfaceBackend` capability trait, the scoped `SurfaceSession` resource
//!   that guarantees state isolation between systems, and the bundled
//!   dot-sampling backend.
//!
//! - **[`workflows`]: The Public API.** The highest-level, user-facing layer.
//!   It ties the `surface` engine and `core` I/O together into the complete
//!   batch annotation procedure, `workflows::annotate::run`.

pub mod core;
pub mod surface;
pub mod workflows;
