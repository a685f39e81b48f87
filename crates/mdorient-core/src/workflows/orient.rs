use crate::core::io::format::{load_topology, load_trajectory};
use crate::core::io::series::{SeriesError, SeriesFile};
use crate::core::models::series::OrientationSeries;
use crate::engine::config::OrientationConfig;
use crate::engine::error::EngineError;
use crate::engine::orientation::OrientationComputer;
use crate::engine::progress::{Progress, ProgressReporter};
use crate::engine::utils::query::resolve_selection;
use std::io::BufWriter;
use std::path::Path;
use tracing::{info, instrument};

#[instrument(skip_all, name = "orientation_workflow")]
pub fn run(
    config: &OrientationConfig,
    reporter: &ProgressReporter,
) -> Result<OrientationSeries, EngineError> {
    // === Phase 1: Load topology and validate selections ===
    reporter.report(Progress::PhaseStart {
        name: "Loading Topology",
    });
    let topology =
        load_topology(&config.topology_path).map_err(|source| EngineError::InputLoad {
            kind: "topology",
            path: config.topology_path.clone(),
            source,
        })?;
    info!(
        "Loaded topology with {} atoms in {} residues.",
        topology.n_atoms(),
        topology.n_residues()
    );

    // Fail on a bad selection before paying for the trajectory read.
    resolve_selection(&topology, &config.tail_selection())?;
    resolve_selection(&topology, &config.head_selection())?;
    reporter.report(Progress::PhaseFinish);

    // === Phase 2: Load trajectory ===
    reporter.report(Progress::PhaseStart {
        name: "Loading Trajectory",
    });
    let trajectory =
        load_trajectory(&config.trajectory_path).map_err(|source| EngineError::InputLoad {
            kind: "trajectory",
            path: config.trajectory_path.clone(),
            source,
        })?;
    info!("Loaded trajectory with {} frames.", trajectory.n_frames());
    reporter.report(Progress::PhaseFinish);

    // === Phase 3: Per-frame orientation ===
    reporter.report(Progress::PhaseStart {
        name: "Computing Orientation",
    });
    let series = OrientationComputer::new(config.degenerate_policy)
        .with_reporter(reporter)
        .compute(
            &trajectory,
            &topology,
            &config.ligand_residue_name,
            &config.atom1_name,
            &config.atom2_name,
        )?;
    reporter.report(Progress::PhaseFinish);

    Ok(series)
}

/// Writes `series` to `path` so that the file either appears complete or not
/// at all.
///
/// The rows are written to a temporary file beside `path`, which is renamed
/// over the destination once everything has been flushed. On Unix the file is
/// created with the same mode a plain `File::create` would give it.
pub fn write_series(series: &OrientationSeries, path: &Path) -> Result<(), EngineError> {
    let output_error = |source: SeriesError| EngineError::Output {
        path: path.to_path_buf(),
        source,
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut builder = tempfile::Builder::new();
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        // 0o666 minus the umask, not the 0o600 of a private temp file.
        builder.permissions(std::fs::Permissions::from_mode(0o666));
    }
    let mut temp = builder
        .tempfile_in(dir)
        .map_err(|e| output_error(e.into()))?;
    {
        let mut writer = BufWriter::new(temp.as_file_mut());
        SeriesFile::write_to(series, &mut writer).map_err(output_error)?;
    }
    temp.persist(path)
        .map_err(|e| output_error(SeriesError::Io(e.error)))?;

    info!("Wrote {} rows to {:?}.", series.len(), path);
    Ok(())
}
