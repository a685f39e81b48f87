use crate::cli::AtomsArgs;
use crate::error::{CliError, Result};
use mdorient::core::io::format::load_topology;
use mdorient::core::models::atom::{Atom, AtomRole};
use mdorient::core::models::topology::Topology;
use tracing::info;

pub async fn run(args: AtomsArgs) -> Result<()> {
    info!("Loading topology from {:?}", &args.topology);
    let topology = load_topology(&args.topology).map_err(|e| CliError::FileParsing {
        path: args.topology.clone(),
        source: e.into(),
    })?;

    let rows = atom_table(&topology, args.residue.as_deref(), args.role);
    if rows.is_empty() {
        if let Some(residue) = &args.residue {
            if !topology.atoms().iter().any(|atom| atom.residue_name == *residue) {
                return Err(CliError::Argument(format!(
                    "No residue named '{}' in {}",
                    residue,
                    args.topology.display()
                )));
            }
        }
    }

    println!(
        "{:>7} {:>6} {:<5} {:<5} {:<9}",
        "INDEX", "RESID", "RES", "NAME", "ROLE"
    );
    for row in &rows {
        println!("{}", row);
    }
    println!(
        "{} of {} atom(s) listed.",
        rows.len(),
        topology.n_atoms()
    );
    Ok(())
}

fn atom_table(topology: &Topology, residue: Option<&str>, role: Option<AtomRole>) -> Vec<String> {
    let atoms: Box<dyn Iterator<Item = &Atom> + '_> = match role {
        Some(role) => Box::new(topology.atoms_with_role(role)),
        None => Box::new(topology.atoms().iter()),
    };
    atoms
        .filter(|atom| residue.is_none_or(|name| atom.residue_name == name))
        .map(|atom| {
            format!(
                "{:>7} {:>6} {:<5} {:<5} {:<9}",
                atom.index,
                atom.residue_number,
                atom.residue_name,
                atom.name,
                atom.role.to_string()
            )
        })
        .collect()
}
