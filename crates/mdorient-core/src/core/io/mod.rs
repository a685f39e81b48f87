//! Provides input/output functionality for coordinate and series files.
//!
//! Topologies and trajectories are read from PDB and GRO text files, and from
//! XTC when the `xtc` feature is enabled. The [`format`] module picks a reader by
//! file extension; [`series`] writes and reads the two-column orientation output.

pub mod format;
pub mod gro;
pub mod pdb;
pub mod series;
pub mod traits;
#[cfg(feature = "xtc")]
pub mod xtc;

/// Returns the trimmed text in byte columns `start..end`, or `""` when the line
/// is too short.
pub(crate) fn slice_and_trim(line: &str, start: usize, end: usize) -> &str {
    let end = end.min(line.len());
    line.get(start..end).unwrap_or("").trim()
}
