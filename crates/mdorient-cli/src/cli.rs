use clap::{Args, Parser, Subcommand};
use mdorient::core::models::atom::AtomRole;
use mdorient::engine::config::DegeneratePolicy;
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    author = "mdorient developers",
    version,
    about = "mdorient - Per-frame ligand orientation angles from molecular-dynamics trajectories.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Set the number of threads for parallel computation.
    /// Defaults to the number of available logical cores.
    #[arg(short = 'j', long, global = true, value_name = "NUM")]
    pub threads: Option<usize>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compute the angle between a two-atom ligand vector and the +Z axis for every frame.
    Orient(OrientArgs),
    /// List the atoms of a topology file, to help choose selections.
    Atoms(AtomsArgs),
}

/// Arguments for the `orient` subcommand.
///
/// Every parameter may instead come from the `--config` file; values given
/// here take precedence.
#[derive(Args, Debug)]
pub struct OrientArgs {
    // --- Inputs ---
    /// Trajectory file (.xtc, .gro or .pdb).
    #[arg(short = 't', long = "traj", value_name = "PATH")]
    pub trajectory: Option<PathBuf>,

    /// Topology file providing residue and atom names (.gro or .pdb).
    #[arg(short = 'p', long = "top", value_name = "PATH")]
    pub topology: Option<PathBuf>,

    // --- Selection ---
    /// Residue name of the ligand (e.g., 'LIG').
    #[arg(short = 'l', long = "ligand", value_name = "RESNAME")]
    pub ligand: Option<String>,

    /// Atom at the tail of the orientation vector.
    #[arg(long, value_name = "NAME")]
    pub atom1: Option<String>,

    /// Atom at the head of the orientation vector.
    #[arg(long, value_name = "NAME")]
    pub atom2: Option<String>,

    // --- Output ---
    /// Path for the two-column (time, angle) output file.
    #[arg(short = 'o', long = "out", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// How to treat frames where both atoms coincide: 'fail' or 'sentinel' (NaN).
    #[arg(long, value_name = "POLICY")]
    pub degenerate_policy: Option<DegeneratePolicy>,

    /// Path to a configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S selection.atom1=C12
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE", num_args(0..))]
    pub set_values: Vec<String>,
}

/// Arguments for the `atoms` subcommand.
#[derive(Args, Debug)]
pub struct AtomsArgs {
    /// Topology file to inspect (.gro or .pdb).
    #[arg(short = 'p', long = "top", required = true, value_name = "PATH")]
    pub topology: PathBuf,

    /// Only list atoms of residues with this name.
    #[arg(short, long, value_name = "RESNAME")]
    pub residue: Option<String>,

    /// Only list atoms with this role: backbone, sidechain, ligand, water, ion or other.
    #[arg(long, value_name = "ROLE", value_parser = parse_role)]
    pub role: Option<AtomRole>,
}

fn parse_role(s: &str) -> Result<AtomRole, String> {
    s.parse().map_err(|_| {
        format!("unknown role '{s}' (expected backbone, sidechain, ligand, water, ion or other)")
    })
}
