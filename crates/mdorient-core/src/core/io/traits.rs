use crate::core::models::topology::Topology;
use crate::core::models::trajectory::Trajectory;
use std::error::Error;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Defines the interface for reading a [`Topology`] from a structure file.
///
/// Implementors handle format-specific parsing; the path-based convenience
/// method is shared.
pub trait TopologyFile {
    /// The error type for I/O and parse failures.
    type Error: Error + From<io::Error>;

    /// Reads a topology from a buffered reader.
    ///
    /// # Arguments
    ///
    /// * `reader` - The buffered reader to read from.
    ///
    /// # Return
    ///
    /// Returns the parsed topology. Formats holding several models or frames
    /// contribute only the first one.
    ///
    /// # Errors
    ///
    /// Returns an error if parsing fails or I/O operations encounter issues.
    fn read_topology(reader: &mut impl BufRead) -> Result<Topology, Self::Error>;

    /// Reads a topology from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or parsing fails.
    fn read_topology_from_path<P: AsRef<Path>>(path: P) -> Result<Topology, Self::Error> {
        let file = File::open(path)?;
        let mut reader = BufReader::new(file);
        Self::read_topology(&mut reader)
    }
}

/// Defines the interface for reading a time-ordered [`Trajectory`] from a text
/// coordinate file.
pub trait TrajectoryFile {
    /// The error type for I/O and parse failures.
    type Error: Error + From<io::Error>;

    /// Reads every frame from a buffered reader, in file order.
    ///
    /// # Errors
    ///
    /// Returns an error if parsing fails, frames disagree on their atom count,
    /// or I/O operations encounter issues.
    fn read_trajectory(reader: &mut impl BufRead) -> Result<Trajectory, Self::Error>;

    /// Reads every frame from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or parsing fails.
    fn read_trajectory_from_path<P: AsRef<Path>>(path: P) -> Result<Trajectory, Self::Error> {
        let file = File::open(path)?;
        let mut reader = BufReader::new(file);
        Self::read_trajectory(&mut reader)
    }
}
