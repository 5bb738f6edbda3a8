//! # Core Models Module
//!
//! This module contains the fundamental data structures used to represent
//! protein-ligand systems in Burial.
//!
//! ## Key Components
//!
//! - [`atom`] - Individual atom representation with coordinates, element, and role
//! - [`element`] - Chemical element tables: van der Waals radii, covalent radii,
//!   typical valences, and solvent residue classification
//! - [`structure`] - A loaded molecular structure: a labelled, flat collection
//!   of atoms that can be merged into a complex
//!
//! ## Usage
//!
//! ```ignore
//! use burial::core::models::{atom::{Atom, AtomRole}, element::Element, structure::Structure};
//! use nalgebra::Point3;
//!
//! let mut structure = Structure::new("pocket");
//! structure.push(Atom::new("CA", Element::Carbon, Point3::origin(), AtomRole::Protein));
//! ```

pub mod atom;
pub mod element;
pub mod structure;
