//! # mdorient Core Library
//!
//! Ligand orientation analysis for molecular-dynamics trajectories: for each
//! frame, the angle between a vector defined by two ligand atoms and the +Z
//! axis.
//!
//! ## Architectural Philosophy
//!
//! The library follows a three-layer architecture so that each concern can be
//! tested on its own.
//!
//! - **[`core`]: The Foundation.** Stateless data models (`Topology`,
//!   `Trajectory`, `OrientationSeries`), angle geometry and the PDB, GRO, XTC
//!   and series file formats.
//!
//! - **[`engine`]: The Logic Core.** Run configuration, atom selection
//!   resolution and the `OrientationComputer`, which processes frames in
//!   parallel while keeping their order.
//!
//! - **[`workflows`]: The Public API.** Loads inputs from disk, runs the engine
//!   and writes the result, reporting progress along the way.

pub mod core;
pub mod engine;
pub mod workflows;
