use crate::core::models::trajectory::{Frame, Trajectory, TrajectoryError};
use nalgebra::Point3;
use std::path::Path;
use thiserror::Error;
use tracing::debug;
use xdrfile::{Frame as XdrFrame, Trajectory as _, XTCTrajectory};

const NM_TO_ANGSTROM: f64 = 10.0;

#[derive(Debug, Error)]
pub enum XtcError {
    #[error("XTC error: {0}")]
    Xdr(#[from] xdrfile::Error),
    #[error("Inconsistent data: {0}")]
    Inconsistency(#[from] TrajectoryError),
}

/// Compressed GROMACS trajectory, read through the `xdrfile` bindings.
///
/// XTC is binary and seekable, so unlike the text formats it is read from a
/// path rather than a buffered reader.
pub struct XtcFile;

impl XtcFile {
    pub fn read_trajectory_from_path<P: AsRef<Path>>(path: P) -> Result<Trajectory, XtcError> {
        let mut traj = XTCTrajectory::open_read(path.as_ref())?;
        let n_atoms = traj.get_num_atoms()?;
        debug!("XTC header reports {} atoms.", n_atoms);

        let mut frame = XdrFrame::with_len(n_atoms);
        let mut frames = Vec::new();
        loop {
            match traj.read(&mut frame) {
                Ok(()) => {
                    let positions = frame
                        .coords
                        .iter()
                        .map(|c| {
                            Point3::new(
                                f64::from(c[0]) * NM_TO_ANGSTROM,
                                f64::from(c[1]) * NM_TO_ANGSTROM,
                                f64::from(c[2]) * NM_TO_ANGSTROM,
                            )
                        })
                        .collect();
                    frames.push(Frame::new(f64::from(frame.time), positions));
                }
                Err(err) if err.is_eof() => break,
                Err(err) => return Err(err.into()),
            }
        }
        Ok(Trajectory::new(frames)?)
    }
}
