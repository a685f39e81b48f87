use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Residue {
    pub number: isize,                            // Residue sequence number from source file
    pub name: String,                             // Name of the residue (e.g., "ALA", "LIG")
    pub chain_id: char,                           // Chain identifier, ' ' when the format has none
    pub(crate) atoms: Vec<usize>,                 // Topology indices of atoms in this residue
    atom_name_map: HashMap<String, Vec<usize>>,   // Atom name to every index carrying it
}

impl Residue {
    pub(crate) fn new(number: isize, name: &str, chain_id: char) -> Self {
        Self {
            number,
            name: name.to_string(),
            chain_id,
            atoms: Vec::new(),
            atom_name_map: HashMap::new(),
        }
    }

    pub(crate) fn add_atom(&mut self, atom_name: &str, atom_index: usize) {
        self.atoms.push(atom_index);
        self.atom_name_map
            .entry(atom_name.to_string())
            .or_default()
            .push(atom_index);
    }

    pub fn atoms(&self) -> &[usize] {
        &self.atoms
    }

    /// Returns every atom index in this residue named `name`.
    ///
    /// Well-formed residues yield at most one index; duplicates are kept so that
    /// callers can detect ambiguous names.
    pub fn atom_indices_by_name(&self, name: &str) -> &[usize] {
        self.atom_name_map
            .get(name)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}
