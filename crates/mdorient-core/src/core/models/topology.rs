use super::atom::{Atom, AtomRole};
use super::residue::Residue;

/// Static naming and indexing metadata for a simulated system.
///
/// A topology maps atom identities (residue name, atom name) onto the stable
/// integer indices used to address coordinates in every trajectory frame. It is
/// built once, by a [`TopologyBuilder`](super::builder::TopologyBuilder), and is
/// read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Topology {
    pub(crate) atoms: Vec<Atom>,
    pub(crate) residues: Vec<Residue>,
}

impl Topology {
    /// Returns the number of atoms in the topology.
    pub fn n_atoms(&self) -> usize {
        self.atoms.len()
    }

    /// Returns the number of residues in the topology.
    pub fn n_residues(&self) -> usize {
        self.residues.len()
    }

    /// Returns all atoms in index order.
    pub fn atoms(&self) -> &[Atom] {
        &self.atoms
    }

    /// Retrieves an atom by its topology index.
    pub fn atom(&self, index: usize) -> Option<&Atom> {
        self.atoms.get(index)
    }

    /// Returns all residues in file order.
    pub fn residues(&self) -> &[Residue] {
        &self.residues
    }

    /// Returns an iterator over every residue named `name`.
    pub fn residues_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Residue> + 'a {
        self.residues.iter().filter(move |r| r.name == name)
    }

    /// Returns an iterator over all atoms with the given role.
    pub fn atoms_with_role(&self, role: AtomRole) -> impl Iterator<Item = &Atom> {
        self.atoms.iter().filter(move |a| a.role == role)
    }

    /// Collects the indices of every atom named `atom_name` inside any residue
    /// named `residue_name`.
    ///
    /// The result is sorted in ascending index order. Names are compared exactly;
    /// no wildcard or case folding is applied.
    ///
    /// # Arguments
    ///
    /// * `residue_name` - The residue name to match (e.g., "LIG").
    /// * `atom_name` - The atom name to match within those residues.
    ///
    /// # Return
    ///
    /// All matching indices; empty if nothing matches.
    pub fn select(&self, residue_name: &str, atom_name: &str) -> Vec<usize> {
        let mut indices: Vec<usize> = self
            .residues_named(residue_name)
            .flat_map(|r| r.atom_indices_by_name(atom_name).iter().copied())
            .collect();
        indices.sort_unstable();
        indices
    }
}
