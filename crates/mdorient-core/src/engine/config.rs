use serde::Deserialize;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),
    #[error("Parameter must not be empty: {0}")]
    EmptyParameter(&'static str),
    #[error("Invalid degenerate-vector policy '{0}' (expected 'fail' or 'sentinel')")]
    InvalidPolicy(String),
}

/// A single atom named by its residue name and atom name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AtomSelection {
    pub residue_name: String,
    pub atom_name: String,
}

impl AtomSelection {
    pub fn new(residue_name: &str, atom_name: &str) -> Self {
        Self {
            residue_name: residue_name.to_string(),
            atom_name: atom_name.to_string(),
        }
    }
}

impl fmt::Display for AtomSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "resname {} and name {}", self.residue_name, self.atom_name)
    }
}

/// What to do with a frame whose two atoms coincide, leaving no direction to
/// measure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DegeneratePolicy {
    /// Abort the computation at the first such frame.
    #[default]
    Fail,
    /// Record NaN for the frame and carry on.
    Sentinel,
}

impl FromStr for DegeneratePolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fail" => Ok(Self::Fail),
            "sentinel" | "nan" => Ok(Self::Sentinel),
            _ => Err(ConfigError::InvalidPolicy(s.to_string())),
        }
    }
}

impl fmt::Display for DegeneratePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DegeneratePolicy::Fail => write!(f, "fail"),
            DegeneratePolicy::Sentinel => write!(f, "sentinel"),
        }
    }
}

/// Fully resolved parameters of one orientation run.
#[derive(Debug, Clone, PartialEq)]
pub struct OrientationConfig {
    pub trajectory_path: PathBuf,
    pub topology_path: PathBuf,
    pub ligand_residue_name: String,
    pub atom1_name: String,
    pub atom2_name: String,
    pub output_path: PathBuf,
    pub degenerate_policy: DegeneratePolicy,
}

impl OrientationConfig {
    /// Selection for the atom at the tail of the orientation vector.
    pub fn tail_selection(&self) -> AtomSelection {
        AtomSelection::new(&self.ligand_residue_name, &self.atom1_name)
    }

    /// Selection for the atom at the head of the orientation vector.
    pub fn head_selection(&self) -> AtomSelection {
        AtomSelection::new(&self.ligand_residue_name, &self.atom2_name)
    }
}

#[derive(Default)]
pub struct OrientationConfigBuilder {
    trajectory_path: Option<PathBuf>,
    topology_path: Option<PathBuf>,
    ligand_residue_name: Option<String>,
    atom1_name: Option<String>,
    atom2_name: Option<String>,
    output_path: Option<PathBuf>,
    degenerate_policy: DegeneratePolicy,
}

impl OrientationConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn trajectory_path(mut self, path: PathBuf) -> Self {
        self.trajectory_path = Some(path);
        self
    }
    pub fn topology_path(mut self, path: PathBuf) -> Self {
        self.topology_path = Some(path);
        self
    }
    pub fn ligand_residue_name(mut self, name: &str) -> Self {
        self.ligand_residue_name = Some(name.to_string());
        self
    }
    pub fn atom1_name(mut self, name: &str) -> Self {
        self.atom1_name = Some(name.to_string());
        self
    }
    pub fn atom2_name(mut self, name: &str) -> Self {
        self.atom2_name = Some(name.to_string());
        self
    }
    pub fn output_path(mut self, path: PathBuf) -> Self {
        self.output_path = Some(path);
        self
    }
    pub fn degenerate_policy(mut self, policy: DegeneratePolicy) -> Self {
        self.degenerate_policy = policy;
        self
    }

    pub fn build(self) -> Result<OrientationConfig, ConfigError> {
        fn required_name(value: Option<String>, key: &'static str) -> Result<String, ConfigError> {
            let value = value.ok_or(ConfigError::MissingParameter(key))?;
            let trimmed = value.trim();
            if trimmed.is_empty() {
                return Err(ConfigError::EmptyParameter(key));
            }
            Ok(trimmed.to_string())
        }
        fn required_path(value: Option<PathBuf>, key: &'static str) -> Result<PathBuf, ConfigError> {
            let value = value.ok_or(ConfigError::MissingParameter(key))?;
            if value.as_os_str().is_empty() {
                return Err(ConfigError::EmptyParameter(key));
            }
            Ok(value)
        }

        Ok(OrientationConfig {
            trajectory_path: required_path(self.trajectory_path, "trajectory_path")?,
            topology_path: required_path(self.topology_path, "topology_path")?,
            ligand_residue_name: required_name(self.ligand_residue_name, "ligand_residue_name")?,
            atom1_name: required_name(self.atom1_name, "atom1_name")?,
            atom2_name: required_name(self.atom2_name, "atom2_name")?,
            output_path: required_path(self.output_path, "output_path")?,
            degenerate_policy: self.degenerate_policy,
        })
    }
}
