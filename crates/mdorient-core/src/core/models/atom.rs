use nalgebra::Point3;
use std::fmt;
use std::str::FromStr;

/// Represents the role or classification of an atom within a simulated system.
///
/// Roles are assigned from residue and atom names when a topology is built, and
/// are used to separate ligand atoms from the macromolecule and solvent when
/// listing candidate selections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum AtomRole {
    /// Backbone atom of a standard amino-acid residue (e.g., N, CA, C, O).
    Backbone,
    /// Sidechain atom of a standard amino-acid residue.
    Sidechain,
    /// Atom of a small molecule that is neither protein, water, nor ion.
    Ligand,
    /// Solvent water atom.
    Water,
    /// Monatomic ion (e.g., NA, CL).
    Ion,
    /// Unknown or unclassified atom role.
    #[default]
    Other,
}

/// A single atom of a topology.
///
/// `index` is the zero-based position of the atom in the topology and is the
/// index used to address coordinates in every trajectory frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Atom {
    /// Zero-based index into every frame's coordinate array.
    pub index: usize,
    /// Serial number as written in the source file.
    pub serial: usize,
    /// The name of the atom (e.g., "CA", "C12").
    pub name: String,
    /// Name of the parent residue (e.g., "ALA", "LIG").
    pub residue_name: String,
    /// Sequence number of the parent residue from the source file.
    pub residue_number: isize,
    /// Chain identifier; formats without chains use `' '`.
    pub chain_id: char,
    /// The role of the atom in the simulated system.
    pub role: AtomRole,
    /// Reference coordinates from the topology file, in Angstroms.
    pub position: Point3<f64>,
}

impl Atom {
    /// Creates a new `Atom` with an unclassified role.
    ///
    /// # Arguments
    ///
    /// * `index` - The zero-based topology index.
    /// * `name` - The name of the atom.
    /// * `residue_name` - The name of the residue this atom belongs to.
    /// * `residue_number` - The sequence number of that residue.
    /// * `position` - The reference coordinates of the atom.
    pub fn new(
        index: usize,
        name: &str,
        residue_name: &str,
        residue_number: isize,
        position: Point3<f64>,
    ) -> Self {
        Self {
            index,
            serial: index + 1,
            name: name.to_string(),
            residue_name: residue_name.to_string(),
            residue_number,
            chain_id: ' ',
            role: AtomRole::default(),
            position,
        }
    }
}

impl FromStr for AtomRole {
    type Err = ();

    /// Parses a string into an `AtomRole`.
    ///
    /// Matching is case-insensitive and accepts the common spellings of
    /// "sidechain".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "backbone" => Ok(AtomRole::Backbone),
            "sidechain" | "side-chain" | "side_chain" => Ok(AtomRole::Sidechain),
            "ligand" => Ok(AtomRole::Ligand),
            "water" => Ok(AtomRole::Water),
            "ion" => Ok(AtomRole::Ion),
            "other" | "unknown" => Ok(AtomRole::Other),
            _ => Err(()),
        }
    }
}

impl fmt::Display for AtomRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                AtomRole::Backbone => "backbone",
                AtomRole::Sidechain => "sidechain",
                AtomRole::Ligand => "ligand",
                AtomRole::Water => "water",
                AtomRole::Ion => "ion",
                AtomRole::Other => "other",
            }
        )
    }
}
