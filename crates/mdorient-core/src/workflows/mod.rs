//! # Workflows Module
//!
//! High-level entry points that tie the `core` and `engine` layers together
//! into complete analyses.
//!
//! ## Overview
//!
//! A workflow takes a fully resolved configuration, loads its inputs from disk,
//! runs the engine and hands back the result. Each phase is announced through a
//! [`ProgressReporter`](crate::engine::progress::ProgressReporter) so front ends
//! can show what is happening.
//!
//! ## Architecture
//!
//! - **Orientation Workflow** ([`orient`]) - Loads a topology and trajectory,
//!   validates the ligand atom selections and computes the per-frame
//!   orientation series, which [`orient::write_series`] persists atomically.

pub mod orient;
