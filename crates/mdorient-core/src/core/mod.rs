//! # Core Module
//!
//! Stateless building blocks for trajectory post-processing: data models for
//! topologies, trajectories and output series, file I/O, and the geometric
//! primitives the engine is built on.
//!
//! ## Architecture
//!
//! - **Data Representation** ([`models`]) - Atoms, residues, topologies, frames and series
//! - **File I/O** ([`io`]) - PDB/GRO/XTC readers and the orientation series format
//! - **Utilities** ([`utils`]) - Angle geometry and residue/atom name classification

pub mod io;
pub mod models;
pub mod utils;
