use std::path::PathBuf;
use thiserror::Error;

use super::config::AtomSelection;
use crate::core::io::format::LoadError;
use crate::core::io::series::SeriesError;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Failed to load {kind} from '{path}': {source}", path = .path.display())]
    InputLoad {
        kind: &'static str,
        path: PathBuf,
        #[source]
        source: LoadError,
    },

    #[error("Selection '{selection}' matched no atoms")]
    SelectionNotFound { selection: AtomSelection },

    #[error("Selection '{selection}' matched {count} atoms (indices {indices:?}); exactly one is required", count = .indices.len())]
    SelectionAmbiguous {
        selection: AtomSelection,
        indices: Vec<usize>,
    },

    #[error(
        "Topology has {topology_atoms} atoms but trajectory frames have {trajectory_atoms}"
    )]
    TopologyMismatch {
        topology_atoms: usize,
        trajectory_atoms: usize,
    },

    #[error("Zero-length orientation vector in frame {frame} (t = {time_ps} ps)")]
    DegenerateVector { frame: usize, time_ps: f64 },

    #[error("Failed to write output to '{path}': {source}", path = .path.display())]
    Output {
        path: PathBuf,
        #[source]
        source: SeriesError,
    },
}
