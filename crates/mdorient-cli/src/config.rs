use crate::cli::OrientArgs;
use crate::error::{CliError, Result};
use mdorient::engine::config::{DegeneratePolicy, OrientationConfig, OrientationConfigBuilder};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct PartialInputConfig {
    trajectory: Option<PathBuf>,
    topology: Option<PathBuf>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct PartialSelectionConfig {
    #[serde(rename = "ligand-residue")]
    ligand_residue: Option<String>,
    atom1: Option<String>,
    atom2: Option<String>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct PartialOutputConfig {
    path: Option<PathBuf>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct PartialAnalysisConfig {
    #[serde(rename = "degenerate-policy")]
    degenerate_policy: Option<DegeneratePolicy>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
pub struct PartialOrientConfig {
    input: Option<PartialInputConfig>,
    selection: Option<PartialSelectionConfig>,
    output: Option<PartialOutputConfig>,
    analysis: Option<PartialAnalysisConfig>,
}

fn require<T>(value: Option<T>, key: &str, flag: &str) -> Result<T> {
    value.ok_or_else(|| {
        CliError::Config(format!(
            "A value for '{}' is required either in the config file or via {}.",
            key, flag
        ))
    })
}

impl PartialOrientConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from file: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }

    /// Loads `args.config` when given, otherwise starts from an empty
    /// configuration.
    pub fn load(args: &OrientArgs) -> Result<Self> {
        match &args.config {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    pub fn merge_with_cli(mut self, args: &OrientArgs) -> Result<OrientationConfig> {
        self.apply_set_values(&args.set_values)?;

        let input = self.input.take().unwrap_or_default();
        let selection = self.selection.take().unwrap_or_default();
        let output = self.output.take().unwrap_or_default();
        let analysis = self.analysis.take().unwrap_or_default();

        let trajectory = require(
            args.trajectory.clone().or(input.trajectory),
            "input.trajectory",
            "--traj",
        )?;
        let topology = require(
            args.topology.clone().or(input.topology),
            "input.topology",
            "--top",
        )?;
        let ligand = require(
            args.ligand.clone().or(selection.ligand_residue),
            "selection.ligand-residue",
            "--ligand",
        )?;
        let atom1 = require(
            args.atom1.clone().or(selection.atom1),
            "selection.atom1",
            "--atom1",
        )?;
        let atom2 = require(
            args.atom2.clone().or(selection.atom2),
            "selection.atom2",
            "--atom2",
        )?;
        let output_path = require(
            args.output.clone().or(output.path),
            "output.path",
            "--out",
        )?;
        let policy = args
            .degenerate_policy
            .or(analysis.degenerate_policy)
            .unwrap_or_default();

        OrientationConfigBuilder::new()
            .trajectory_path(trajectory)
            .topology_path(topology)
            .ligand_residue_name(&ligand)
            .atom1_name(&atom1)
            .atom2_name(&atom2)
            .output_path(output_path)
            .degenerate_policy(policy)
            .build()
            .map_err(|e| CliError::Config(e.to_string()))
    }

    fn apply_set_values(&mut self, set_values: &[String]) -> Result<()> {
        for kv_pair in set_values {
            let Some((key, value_str)) = kv_pair.split_once('=') else {
                return Err(CliError::Config(format!(
                    "Invalid --set format: '{}'. Expected KEY=VALUE.",
                    kv_pair
                )));
            };

            match key {
                "input.trajectory" => {
                    self.input.get_or_insert_with(Default::default).trajectory =
                        Some(PathBuf::from(value_str));
                }
                "input.topology" => {
                    self.input.get_or_insert_with(Default::default).topology =
                        Some(PathBuf::from(value_str));
                }
                "selection.ligand-residue" => {
                    self.selection
                        .get_or_insert_with(Default::default)
                        .ligand_residue = Some(value_str.to_string());
                }
                "selection.atom1" => {
                    self.selection.get_or_insert_with(Default::default).atom1 =
                        Some(value_str.to_string());
                }
                "selection.atom2" => {
                    self.selection.get_or_insert_with(Default::default).atom2 =
                        Some(value_str.to_string());
                }
                "output.path" => {
                    self.output.get_or_insert_with(Default::default).path =
                        Some(PathBuf::from(value_str));
                }
                "analysis.degenerate-policy" => {
                    self.analysis
                        .get_or_insert_with(Default::default)
                        .degenerate_policy = Some(
                        value_str
                            .parse::<DegeneratePolicy>()
                            .map_err(|e| CliError::Config(e.to_string()))?,
                    );
                }
                _ => {
                    return Err(CliError::Config(format!(
                        "Unsupported configuration key for --set: '{}'",
                        key
                    )));
                }
            }
        }
        Ok(())
    }
}
