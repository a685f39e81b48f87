use nalgebra::Point3;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum TrajectoryError {
    #[error("Frame {frame} has {found} atoms, expected {expected}")]
    AtomCountMismatch {
        frame: usize,
        expected: usize,
        found: usize,
    },
}

/// One sampled instant of a simulation.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    /// Simulation time in picoseconds.
    pub time_ps: f64,
    /// Per-atom coordinates in Angstroms, addressed by topology index.
    pub positions: Vec<Point3<f64>>,
}

impl Frame {
    pub fn new(time_ps: f64, positions: Vec<Point3<f64>>) -> Self {
        Self { time_ps, positions }
    }

    pub fn n_atoms(&self) -> usize {
        self.positions.len()
    }
}

/// An ordered, immutable sequence of frames sharing one atom ordering.
///
/// Construction checks that every frame carries the same number of atoms, so
/// downstream code may index any frame with an index valid for the first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Trajectory {
    frames: Vec<Frame>,
    n_atoms: usize,
}

impl Trajectory {
    /// Creates a trajectory from frames in simulation order.
    ///
    /// # Errors
    ///
    /// Returns [`TrajectoryError::AtomCountMismatch`] for the first frame whose
    /// atom count differs from frame 0.
    pub fn new(frames: Vec<Frame>) -> Result<Self, TrajectoryError> {
        let n_atoms = frames.first().map_or(0, Frame::n_atoms);
        if let Some((frame, found)) = frames
            .iter()
            .map(Frame::n_atoms)
            .enumerate()
            .find(|&(_, n)| n != n_atoms)
        {
            return Err(TrajectoryError::AtomCountMismatch {
                frame,
                expected: n_atoms,
                found,
            });
        }
        Ok(Self { frames, n_atoms })
    }

    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    pub fn n_frames(&self) -> usize {
        self.frames.len()
    }

    /// Atom count shared by every frame; zero for an empty trajectory.
    pub fn n_atoms(&self) -> usize {
        self.n_atoms
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}
