//! High-level entry points for batch burial annotation.
//!
//! This layer ties the IO and surface layers together: it resolves a set of
//! protein/ligand systems, measures each one through a surface backend, and
//! appends the derived ratios to an on-disk results ledger. Callers that
//! only need a single ratio can use [`ratio`] directly.

pub mod annotate;
pub mod ratio;
