use crate::core::models::series::{OrientationSample, OrientationSeries};
use crate::core::models::topology::Topology;
use crate::core::models::trajectory::{Frame, Trajectory};
use crate::core::utils::geometry::{angle_to_axis, displacement};
use crate::engine::config::{AtomSelection, DegeneratePolicy};
use crate::engine::error::EngineError;
use crate::engine::progress::{Progress, ProgressReporter};
use crate::engine::utils::query::resolve_selection;
use nalgebra::{Unit, Vector3};
use tracing::{debug, info, instrument, warn};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Reference direction every orientation vector is measured against.
pub fn reference_axis() -> Unit<Vector3<f64>> {
    Vector3::z_axis()
}

/// Computes, for every frame, the angle between a two-atom ligand vector and
/// the +Z axis.
///
/// The vector runs from `atom1` (tail) to `atom2` (head). Both atoms are looked
/// up once in the topology and must each match exactly one atom; the same
/// indices are then used for every frame.
///
/// # Examples
///
/// ```
/// use mdorient::core::models::builder::TopologyBuilder;
/// use mdorient::core::models::trajectory::{Frame, Trajectory};
/// use mdorient::engine::config::DegeneratePolicy;
/// use mdorient::engine::orientation::OrientationComputer;
/// use nalgebra::Point3;
///
/// let mut builder = TopologyBuilder::new();
/// builder
///     .add_atom(1, "C1", "LIG", 1, ' ', Point3::origin())
///     .add_atom(2, "O1", "LIG", 1, ' ', Point3::origin());
/// let topology = builder.build();
///
/// let frame = Frame::new(0.0, vec![Point3::origin(), Point3::new(1.0, 0.0, 0.0)]);
/// let trajectory = Trajectory::new(vec![frame]).unwrap();
///
/// let series = OrientationComputer::new(DegeneratePolicy::Fail)
///     .compute(&trajectory, &topology, "LIG", "C1", "O1")
///     .unwrap();
/// assert!((series.samples()[0].angle_deg - 90.0).abs() < 1e-9);
/// ```
pub struct OrientationComputer<'a> {
    policy: DegeneratePolicy,
    axis: Unit<Vector3<f64>>,
    reporter: Option<&'a ProgressReporter<'a>>,
}

impl<'a> OrientationComputer<'a> {
    pub fn new(policy: DegeneratePolicy) -> Self {
        Self {
            policy,
            axis: reference_axis(),
            reporter: None,
        }
    }

    pub fn with_reporter(mut self, reporter: &'a ProgressReporter<'a>) -> Self {
        self.reporter = Some(reporter);
        self
    }

    fn report(&self, event: Progress) {
        if let Some(reporter) = self.reporter {
            reporter.report(event);
        }
    }

    /// Produces one (time, angle) sample per frame, in frame order.
    ///
    /// # Errors
    ///
    /// Selection and atom-count errors are returned before any frame is
    /// processed. Under [`DegeneratePolicy::Fail`], a zero-length vector yields
    /// [`EngineError::DegenerateVector`] for the lowest-indexed such frame.
    #[instrument(skip_all, name = "orientation_compute", fields(frames = trajectory.n_frames()))]
    pub fn compute(
        &self,
        trajectory: &Trajectory,
        topology: &Topology,
        ligand_residue_name: &str,
        atom1_name: &str,
        atom2_name: &str,
    ) -> Result<OrientationSeries, EngineError> {
        let tail = resolve_selection(topology, &AtomSelection::new(ligand_residue_name, atom1_name))?;
        let head = resolve_selection(topology, &AtomSelection::new(ligand_residue_name, atom2_name))?;
        debug!("Resolved tail atom to index {} and head atom to index {}.", tail, head);

        if !trajectory.is_empty() && trajectory.n_atoms() != topology.n_atoms() {
            return Err(EngineError::TopologyMismatch {
                topology_atoms: topology.n_atoms(),
                trajectory_atoms: trajectory.n_atoms(),
            });
        }

        self.report(Progress::TaskStart {
            total_steps: trajectory.n_frames() as u64,
        });

        let frame_angle = |frame: &Frame| {
            let vector = displacement(&frame.positions[tail], &frame.positions[head]);
            let angle = angle_to_axis(&vector, &self.axis);
            self.report(Progress::TaskIncrement);
            angle
        };

        #[cfg(feature = "parallel")]
        let angles: Vec<Option<f64>> = trajectory.frames().par_iter().map(frame_angle).collect();
        #[cfg(not(feature = "parallel"))]
        let angles: Vec<Option<f64>> = trajectory.frames().iter().map(frame_angle).collect();

        self.report(Progress::TaskFinish);

        let mut samples = Vec::with_capacity(angles.len());
        for (index, (frame, angle)) in trajectory.frames().iter().zip(angles).enumerate() {
            let angle_deg = match (angle, self.policy) {
                (Some(angle), _) => angle,
                (None, DegeneratePolicy::Fail) => {
                    return Err(EngineError::DegenerateVector {
                        frame: index,
                        time_ps: frame.time_ps,
                    });
                }
                (None, DegeneratePolicy::Sentinel) => f64::NAN,
            };
            samples.push(OrientationSample {
                time_ps: frame.time_ps,
                angle_deg,
            });
        }

        let series = OrientationSeries::new(samples);
        let degenerate = series.degenerate_count();
        if degenerate > 0 {
            warn!(
                "{} of {} frames had a zero-length orientation vector and were recorded as NaN.",
                degenerate,
                series.len()
            );
        }
        info!("Computed orientation angles for {} frames.", series.len());
        Ok(series)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::builder::TopologyBuilder;
    use nalgebra::Point3;

    fn ligand_topology() -> Topology {
        let mut builder = TopologyBuilder::new();
        builder
            .add_atom(1, "CA", "ALA", 1, 'A', Point3::origin())
            .add_atom(2, "C1", "LIG", 2, 'A', Point3::origin())
            .add_atom(3, "O1", "LIG", 2, 'A', Point3::origin());
        builder.build()
    }

    fn frame_with_vector(time_ps: f64, tail: Point3<f64>, v: Vector3<f64>) -> Frame {
        Frame::new(time_ps, vec![Point3::new(5.0, 5.0, 5.0), tail, tail + v])
    }

    fn trajectory_of(vectors: &[Vector3<f64>]) -> Trajectory {
        let frames = vectors
            .iter()
            .enumerate()
            .map(|(i, v)| frame_with_vector(i as f64 * 10.0, Point3::new(1.0, 2.0, 3.0), *v))
            .collect();
        Trajectory::new(frames).unwrap()
    }

    #[test]
    fn axis_aligned_vectors_give_cardinal_angles() {
        let trajectory = trajectory_of(&[
            Vector3::new(0.0, 0.0, 1.0),
            Vector3::new(0.0, 0.0, -1.0),
            Vector3::new(1.0, 0.0, 0.0),
        ]);
        let series = OrientationComputer::new(DegeneratePolicy::Fail)
            .compute(&trajectory, &ligand_topology(), "LIG", "C1", "O1")
            .unwrap();

        let times: Vec<f64> = series.iter().map(|s| s.time_ps).collect();
        assert_eq!(times, vec![0.0, 10.0, 20.0]);
        for (sample, expected) in series.iter().zip([0.0, 180.0, 90.0]) {
            assert!((sample.angle_deg - expected).abs() < 1e-9);
        }
    }

    #[test]
    fn fixed_angle_is_reproduced_in_every_frame() {
        let theta: f64 = 37.5;
        let rad = theta.to_radians();
        let vectors: Vec<Vector3<f64>> = (0..50)
            .map(|i| {
                let phi = i as f64 * 0.3;
                let scale = 0.5 + i as f64 * 0.1;
                Vector3::new(rad.sin() * phi.cos(), rad.sin() * phi.sin(), rad.cos()) * scale
            })
            .collect();
        let trajectory = trajectory_of(&vectors);

        let series = OrientationComputer::new(DegeneratePolicy::Fail)
            .compute(&trajectory, &ligand_topology(), "LIG", "C1", "O1")
            .unwrap();
        assert_eq!(series.len(), trajectory.n_frames());
        for sample in &series {
            assert!((sample.angle_deg - theta).abs() < 1e-2);
        }
    }

    #[test]
    fn selection_errors_precede_frame_processing() {
        // Every frame is degenerate, so any per-frame work would fail with
        // DegenerateVector instead.
        let trajectory = trajectory_of(&[Vector3::zeros(), Vector3::zeros()]);
        let computer = OrientationComputer::new(DegeneratePolicy::Fail);

        let err = computer
            .compute(&trajectory, &ligand_topology(), "LIG", "C1", "N9")
            .unwrap_err();
        assert!(matches!(err, EngineError::SelectionNotFound { .. }));

        let mut builder = TopologyBuilder::new();
        builder
            .add_atom(1, "C1", "LIG", 1, ' ', Point3::origin())
            .add_atom(2, "C1", "LIG", 2, ' ', Point3::origin())
            .add_atom(3, "O1", "LIG", 2, ' ', Point3::origin());
        let ambiguous = builder.build();
        let err = computer
            .compute(&trajectory, &ambiguous, "LIG", "C1", "O1")
            .unwrap_err();
        match err {
            EngineError::SelectionAmbiguous { indices, .. } => assert_eq!(indices, vec![0, 1]),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn atom_count_mismatch_is_rejected() {
        let frames = vec![Frame::new(0.0, vec![Point3::origin(); 4])];
        let trajectory = Trajectory::new(frames).unwrap();
        let err = OrientationComputer::new(DegeneratePolicy::Fail)
            .compute(&trajectory, &ligand_topology(), "LIG", "C1", "O1")
            .unwrap_err();
        assert!(matches!(
            err,
            EngineError::TopologyMismatch {
                topology_atoms: 3,
                trajectory_atoms: 4
            }
        ));
    }

    #[test]
    fn fail_policy_reports_first_degenerate_frame() {
        let trajectory = trajectory_of(&[
            Vector3::z(),
            Vector3::zeros(),
            Vector3::x(),
            Vector3::zeros(),
        ]);
        let err = OrientationComputer::new(DegeneratePolicy::Fail)
            .compute(&trajectory, &ligand_topology(), "LIG", "C1", "O1")
            .unwrap_err();
        match err {
            EngineError::DegenerateVector { frame, time_ps } => {
                assert_eq!(frame, 1);
                assert_eq!(time_ps, 10.0);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn sentinel_policy_records_nan_and_keeps_going() {
        let trajectory = trajectory_of(&[Vector3::z(), Vector3::zeros(), Vector3::x()]);
        let series = OrientationComputer::new(DegeneratePolicy::Sentinel)
            .compute(&trajectory, &ligand_topology(), "LIG", "C1", "O1")
            .unwrap();
        assert_eq!(series.len(), 3);
        assert!(series.samples()[0].angle_deg.abs() < 1e-9);
        assert!(series.samples()[1].angle_deg.is_nan());
        assert!((series.samples()[2].angle_deg - 90.0).abs() < 1e-9);
        assert_eq!(series.degenerate_count(), 1);
    }

    #[test]
    fn empty_trajectory_yields_empty_series() {
        let trajectory = Trajectory::new(Vec::new()).unwrap();
        let series = OrientationComputer::new(DegeneratePolicy::Fail)
            .compute(&trajectory, &ligand_topology(), "LIG", "C1", "O1")
            .unwrap();
        assert!(series.is_empty());
    }

    #[test]
    fn reporter_sees_one_increment_per_frame() {
        use std::sync::atomic::{AtomicU64, Ordering};
        let increments = AtomicU64::new(0);
        let reporter = ProgressReporter::with_callback(Box::new(|event| {
            if let Progress::TaskIncrement = event {
                increments.fetch_add(1, Ordering::Relaxed);
            }
        }));
        let trajectory = trajectory_of(&[Vector3::z(); 7]);
        OrientationComputer::new(DegeneratePolicy::Fail)
            .with_reporter(&reporter)
            .compute(&trajectory, &ligand_topology(), "LIG", "C1", "O1")
            .unwrap();
        drop(reporter);
        assert_eq!(increments.load(Ordering::Relaxed), 7);
    }
}
