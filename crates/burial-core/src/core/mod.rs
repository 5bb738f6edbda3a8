//! # Core Module
//!
//! This module provides the fundamental building blocks for representing and
//! loading protein-ligand systems in Burial, serving as the stateless
//! foundation of the library.
//!
//! ## Overview
//!
//! The core module implements the data structures and I/O utilities the batch
//! annotation pipeline is built on: molecular structures and their atoms,
//! element property tables, structure file readers, the system manifest
//! resolver, and the append-only results ledger.
//!
//! ## Architecture
//!
//! The module is organized into specialized submodules:
//!
//! - **Molecular Representation** ([`models`]) - Data structures for atoms,
//!   elements, and whole structures
//! - **File I/O** ([`io`]) - Structure file readers (PDB, SDF), system
//!   manifests, and the results table

pub mod io;
pub mod models;
