use super::atom::Atom;
use super::residue::Residue;
use super::topology::Topology;
use crate::core::utils::identifiers::classify_atom;
use nalgebra::Point3;

/// Incrementally assembles a [`Topology`] from atom records in file order.
///
/// A new residue is opened whenever the residue number, residue name or chain
/// identifier differs from the previous atom's, which matches how PDB and GRO
/// files delimit residues (including GRO's wrap-around of residue numbers).
#[derive(Debug, Default)]
pub struct TopologyBuilder {
    topology: Topology,
    current_residue: Option<(isize, String, char)>,
}

impl TopologyBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_atom(
        &mut self,
        serial: usize,
        name: &str,
        residue_name: &str,
        residue_number: isize,
        chain_id: char,
        position: Point3<f64>,
    ) -> &mut Self {
        let same_residue = matches!(
            &self.current_residue,
            Some((number, res_name, chain))
                if *number == residue_number && res_name == residue_name && *chain == chain_id
        );
        if !same_residue {
            self.topology
                .residues
                .push(Residue::new(residue_number, residue_name, chain_id));
            self.current_residue = Some((residue_number, residue_name.to_string(), chain_id));
        }

        let index = self.topology.atoms.len();
        let mut atom = Atom::new(index, name, residue_name, residue_number, position);
        atom.serial = serial;
        atom.chain_id = chain_id;

        if let Some(residue) = self.topology.residues.last_mut() {
            residue.add_atom(name, index);
        }
        self.topology.atoms.push(atom);
        self
    }

    pub fn n_atoms(&self) -> usize {
        self.topology.atoms.len()
    }

    pub fn build(mut self) -> Topology {
        for atom in &mut self.topology.atoms {
            atom.role = classify_atom(&atom.residue_name, &atom.name);
        }
        self.topology
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::atom::AtomRole;

    #[test]
    fn consecutive_atoms_share_a_residue() {
        let mut builder = TopologyBuilder::new();
        builder
            .add_atom(1, "C1", "LIG", 1, ' ', Point3::origin())
            .add_atom(2, "C2", "LIG", 1, ' ', Point3::origin());
        let topology = builder.build();
        assert_eq!(topology.n_residues(), 1);
        assert_eq!(topology.residues()[0].atoms(), &[0, 1]);
    }

    #[test]
    fn residue_number_change_opens_new_residue() {
        let mut builder = TopologyBuilder::new();
        builder
            .add_atom(1, "OW", "SOL", 99999, ' ', Point3::origin())
            .add_atom(2, "OW", "SOL", 0, ' ', Point3::origin())
            .add_atom(3, "OW", "SOL", 1, ' ', Point3::origin());
        let topology = builder.build();
        assert_eq!(topology.n_residues(), 3);
    }

    #[test]
    fn chain_change_opens_new_residue_with_same_number() {
        let mut builder = TopologyBuilder::new();
        builder
            .add_atom(1, "CA", "ALA", 1, 'A', Point3::origin())
            .add_atom(2, "CA", "ALA", 1, 'B', Point3::origin());
        let topology = builder.build();
        assert_eq!(topology.n_residues(), 2);
        assert_eq!(topology.residues()[1].chain_id, 'B');
    }

    #[test]
    fn build_assigns_roles_and_keeps_serials() {
        let mut builder = TopologyBuilder::new();
        builder
            .add_atom(10, "CA", "GLY", 1, 'A', Point3::origin())
            .add_atom(11, "C7", "LIG", 2, 'A', Point3::new(1.0, 0.0, 0.0));
        assert_eq!(builder.n_atoms(), 2);
        let topology = builder.build();
        assert_eq!(topology.atoms()[0].role, AtomRole::Backbone);
        assert_eq!(topology.atoms()[1].role, AtomRole::Ligand);
        assert_eq!(topology.atoms()[1].serial, 11);
        assert_eq!(topology.atoms()[1].index, 1);
    }
}
