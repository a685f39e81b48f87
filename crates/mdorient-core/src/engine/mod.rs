//! # Engine Module
//!
//! The computational layer of mdorient: it turns an already loaded topology and
//! trajectory into a per-frame orientation series.
//!
//! ## Overview
//!
//! The engine resolves atom selections against a topology, checks that the
//! trajectory agrees with it, and measures the angle between a two-atom ligand
//! vector and the +Z axis in every frame. Frames are processed in parallel when
//! the `parallel` feature is enabled; results always come back in frame order.
//!
//! ## Architecture
//!
//! - **Configuration** ([`config`]) - Run parameters, atom selections and the degenerate-vector policy
//! - **Orientation** ([`orientation`]) - The per-frame angle computation
//! - **Progress Monitoring** ([`progress`]) - Progress events for front ends
//! - **Error Handling** ([`error`]) - Engine-specific error types
//!
//! Selection lookup lives in `utils::query`.

pub mod config;
pub mod error;
pub mod orientation;
pub mod progress;
pub mod utils;
