use crate::core::models::atom::AtomRole;
use phf::{Set, phf_set};

static BACKBONE_ATOM_NAMES: Set<&'static str> = phf_set! {
    "N", "H", "HN", "CA", "HA", "C", "O", "OXT", "H1", "H2", "H3", "NT",
    "HT1", "HT2", "HT3", "OT1", "OT2", "OC1", "OC2", "HA1", "HA2", "HA3", "1HA", "2HA",
};

static AMINO_ACID_NAMES: Set<&'static str> = phf_set! {
    "ALA", "ARG", "ASN", "ASP", "CYS", "GLN", "GLU", "GLY", "HIS", "ILE",
    "LEU", "LYS", "MET", "PHE", "PRO", "SER", "THR", "TRP", "TYR", "VAL",
    "HSD", "HSE", "HSP", "HID", "HIE", "HIP", "CYX", "CYM", "ASH", "GLH", "LYN",
    "NALA", "CALA", "ACE", "NME", "NH2",
};

static WATER_RESIDUE_NAMES: Set<&'static str> = phf_set! {
    "SOL", "WAT", "HOH", "H2O", "TIP3", "TIP4", "TIP5", "SPC", "T3P", "T4P",
};

static ION_RESIDUE_NAMES: Set<&'static str> = phf_set! {
    "NA", "CL", "K", "MG", "CA2", "ZN", "SOD", "CLA", "POT", "CAL", "NA+", "CL-", "K+",
};

pub fn is_backbone_atom(atom_name: &str) -> bool {
    BACKBONE_ATOM_NAMES.contains(atom_name.trim())
}

pub fn is_amino_acid(residue_name: &str) -> bool {
    AMINO_ACID_NAMES.contains(residue_name.trim())
}

pub fn is_water(residue_name: &str) -> bool {
    WATER_RESIDUE_NAMES.contains(residue_name.trim())
}

pub fn is_ion(residue_name: &str) -> bool {
    ION_RESIDUE_NAMES.contains(residue_name.trim())
}

/// Assigns an [`AtomRole`] from residue and atom names alone.
///
/// Anything that is not a recognized amino acid, water or ion is treated as a
/// ligand atom.
pub fn classify_atom(residue_name: &str, atom_name: &str) -> AtomRole {
    if is_amino_acid(residue_name) {
        if is_backbone_atom(atom_name) {
            AtomRole::Backbone
        } else {
            AtomRole::Sidechain
        }
    } else if is_water(residue_name) {
        AtomRole::Water
    } else if is_ion(residue_name) {
        AtomRole::Ion
    } else if residue_name.trim().is_empty() {
        AtomRole::Other
    } else {
        AtomRole::Ligand
    }
}
