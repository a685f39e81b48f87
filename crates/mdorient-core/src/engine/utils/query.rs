use crate::core::models::topology::Topology;
use crate::engine::config::AtomSelection;
use crate::engine::error::EngineError;

/// Resolves `selection` to the single atom index it names.
///
/// # Errors
///
/// Returns [`EngineError::SelectionNotFound`] when nothing matches and
/// [`EngineError::SelectionAmbiguous`] when more than one atom does.
pub fn resolve_selection(
    topology: &Topology,
    selection: &AtomSelection,
) -> Result<usize, EngineError> {
    let indices = topology.select(&selection.residue_name, &selection.atom_name);
    match indices.as_slice() {
        [] => Err(EngineError::SelectionNotFound {
            selection: selection.clone(),
        }),
        [index] => Ok(*index),
        _ => Err(EngineError::SelectionAmbiguous {
            selection: selection.clone(),
            indices,
        }),
    }
}
