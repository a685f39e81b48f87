//! # Core Models Module
//!
//! Data structures describing a simulated system and its trajectory.
//!
//! ## Key Components
//!
//! - [`atom`] - Individual atom identity, role and reference coordinates
//! - [`residue`] - Residue grouping with per-name atom lookup
//! - [`topology`] - Static atom/residue naming and indexing for a whole system
//! - [`builder`] - Incremental topology construction from file records
//! - [`trajectory`] - Time-stamped frames of coordinates sharing one atom ordering
//! - [`series`] - The per-frame (time, angle) output series
//!
//! ## Usage
//!
//! ```ignore
//! use mdorient::core::models::builder::TopologyBuilder;
//!
//! let mut builder = TopologyBuilder::new();
//! builder.add_atom(1, "C1", "LIG", 1, 'A', Point3::origin());
//! let topology = builder.build();
//! assert_eq!(topology.select("LIG", "C1"), vec![0]);
//! ```

pub mod atom;
pub mod builder;
pub mod residue;
pub mod series;
pub mod topology;
pub mod trajectory;
