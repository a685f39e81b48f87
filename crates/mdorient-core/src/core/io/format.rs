use super::gro::{GroError, GroFile};
use super::pdb::{PdbError, PdbFile};
use super::traits::{TopologyFile, TrajectoryFile};
#[cfg(feature = "xtc")]
use super::xtc::{XtcError, XtcFile};
use crate::core::models::topology::Topology;
use crate::core::models::trajectory::Trajectory;
use std::fmt;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

/// Coordinate file formats understood by the loaders, chosen by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StructureFormat {
    Pdb,
    Gro,
    Xtc,
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Unrecognized file extension for '{0}' (expected .pdb, .ent, .gro or .xtc)")]
    UnknownFormat(String),
    #[error("{0} files carry no atom names and cannot be used as a topology")]
    NotATopology(StructureFormat),
    #[error("XTC support is not enabled in this build (rebuild with the `xtc` feature)")]
    XtcUnavailable,
    #[error("PDB: {0}")]
    Pdb(#[from] PdbError),
    #[error("GRO: {0}")]
    Gro(#[from] GroError),
    #[cfg(feature = "xtc")]
    #[error("{0}")]
    Xtc(#[from] XtcError),
}

impl StructureFormat {
    pub fn from_path(path: &Path) -> Result<Self, LoadError> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        match extension.as_deref() {
            Some("pdb") | Some("ent") => Ok(Self::Pdb),
            Some("gro") => Ok(Self::Gro),
            Some("xtc") => Ok(Self::Xtc),
            _ => Err(LoadError::UnknownFormat(path.display().to_string())),
        }
    }
}

impl fmt::Display for StructureFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                StructureFormat::Pdb => "PDB",
                StructureFormat::Gro => "GRO",
                StructureFormat::Xtc => "XTC",
            }
        )
    }
}

/// Reads a topology from `path`, dispatching on its extension.
///
/// # Errors
///
/// Returns [`LoadError`] if the extension is unknown, names a format without
/// atom names, or the file cannot be read or parsed.
pub fn load_topology(path: &Path) -> Result<Topology, LoadError> {
    let format = StructureFormat::from_path(path)?;
    debug!("Reading {} topology from {:?}", format, path);
    match format {
        StructureFormat::Pdb => Ok(PdbFile::read_topology_from_path(path)?),
        StructureFormat::Gro => Ok(GroFile::read_topology_from_path(path)?),
        StructureFormat::Xtc => Err(LoadError::NotATopology(format)),
    }
}

/// Reads every frame of the trajectory at `path`, dispatching on its extension.
///
/// # Errors
///
/// Returns [`LoadError`] if the extension is unknown, XTC support is not
/// compiled in, or the file cannot be read or parsed.
pub fn load_trajectory(path: &Path) -> Result<Trajectory, LoadError> {
    let format = StructureFormat::from_path(path)?;
    debug!("Reading {} trajectory from {:?}", format, path);
    match format {
        StructureFormat::Pdb => Ok(PdbFile::read_trajectory_from_path(path)?),
        StructureFormat::Gro => Ok(GroFile::read_trajectory_from_path(path)?),
        StructureFormat::Xtc => load_xtc(path),
    }
}

#[cfg(feature = "xtc")]
fn load_xtc(path: &Path) -> Result<Trajectory, LoadError> {
    Ok(XtcFile::read_trajectory_from_path(path)?)
}

#[cfg(not(feature = "xtc"))]
fn load_xtc(_path: &Path) -> Result<Trajectory, LoadError> {
    Err(LoadError::XtcUnavailable)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;

    #[test]
    fn from_path_recognizes_extensions_case_insensitively() {
        assert_eq!(
            StructureFormat::from_path(Path::new("a/complex.PDB")).unwrap(),
            StructureFormat::Pdb
        );
        assert_eq!(
            StructureFormat::from_path(Path::new("x.ent")).unwrap(),
            StructureFormat::Pdb
        );
        assert_eq!(
            StructureFormat::from_path(Path::new("md.gro")).unwrap(),
            StructureFormat::Gro
        );
        assert_eq!(
            StructureFormat::from_path(Path::new("md_noPBC.xtc")).unwrap(),
            StructureFormat::Xtc
        );
    }

    #[test]
    fn from_path_rejects_unknown_extensions() {
        assert!(matches!(
            StructureFormat::from_path(Path::new("traj.dcd")),
            Err(LoadError::UnknownFormat(_))
        ));
        assert!(matches!(
            StructureFormat::from_path(Path::new("noext")),
            Err(LoadError::UnknownFormat(_))
        ));
    }

    #[test]
    fn xtc_is_not_a_topology() {
        let err = load_topology(&PathBuf::from("md.xtc")).unwrap_err();
        assert!(matches!(err, LoadError::NotATopology(StructureFormat::Xtc)));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_topology(&dir.path().join("absent.gro")).unwrap_err();
        assert!(matches!(err, LoadError::Gro(GroError::Io(_))));
    }

    #[test]
    fn gro_topology_and_trajectory_load_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lig.gro");
        fs::write(
            &path,
            "lig t= 5.0\n    2\n    1LIG     C1    1   0.000   0.000   0.000\n    1LIG     O1    2   0.000   0.000   0.100\n   1.0 1.0 1.0\n",
        )
        .unwrap();

        let topology = load_topology(&path).unwrap();
        let trajectory = load_trajectory(&path).unwrap();
        assert_eq!(topology.n_atoms(), 2);
        assert_eq!(trajectory.n_frames(), 1);
        assert_eq!(trajectory.frames()[0].time_ps, 5.0);
    }

    #[cfg(not(feature = "xtc"))]
    #[test]
    fn xtc_trajectory_requires_feature() {
        let err = load_trajectory(&PathBuf::from("md.xtc")).unwrap_err();
        assert!(matches!(err, LoadError::XtcUnavailable));
    }
}
