use super::slice_and_trim;
use super::traits::{TopologyFile, TrajectoryFile};
use crate::core::models::builder::TopologyBuilder;
use crate::core::models::topology::Topology;
use crate::core::models::trajectory::{Frame, Trajectory, TrajectoryError};
use nalgebra::Point3;
use std::io::{self, BufRead};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PdbError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Parse error on line {line}: {kind}")]
    Parse { line: usize, kind: PdbParseErrorKind },
    #[error("Inconsistent data: {0}")]
    Inconsistency(String),
    #[error("Missing required record: {0}")]
    MissingRecord(String),
}

#[derive(Debug, Error)]
pub enum PdbParseErrorKind {
    #[error("Invalid integer format in columns {columns} (value: '{value}')")]
    InvalidInt { columns: String, value: String },
    #[error("Invalid float format in columns {columns} (value: '{value}')")]
    InvalidFloat { columns: String, value: String },
    #[error("Required field in columns {columns} is empty")]
    MissingRequiredField { columns: String },
    #[error("Line is too short for ATOM/HETATM record (must be at least 54 chars)")]
    LineTooShort,
}

impl From<TrajectoryError> for PdbError {
    fn from(e: TrajectoryError) -> Self {
        PdbError::Inconsistency(e.to_string())
    }
}

#[derive(Debug, Clone, PartialEq)]
struct AtomRecord {
    serial: usize,
    name: String,
    residue_name: String,
    chain_id: char,
    residue_number: isize,
    position: Point3<f64>,
}

fn parse_float(line: &str, line_num: usize, start: usize, end: usize) -> Result<f64, PdbError> {
    let value = slice_and_trim(line, start, end);
    value.parse().map_err(|_| PdbError::Parse {
        line: line_num,
        kind: PdbParseErrorKind::InvalidFloat {
            columns: format!("{}-{}", start + 1, end),
            value: value.into(),
        },
    })
}

fn parse_atom_record(line: &str, line_num: usize, fallback_serial: usize) -> Result<AtomRecord, PdbError> {
    if line.len() < 54 {
        return Err(PdbError::Parse {
            line: line_num,
            kind: PdbParseErrorKind::LineTooShort,
        });
    }

    let name = slice_and_trim(line, 12, 16);
    if name.is_empty() {
        return Err(PdbError::Parse {
            line: line_num,
            kind: PdbParseErrorKind::MissingRequiredField {
                columns: "13-16".into(),
            },
        });
    }
    // Columns 18-21 also admit the 4-character names written by CHARMM tools.
    let residue_name = slice_and_trim(line, 17, 21);
    let chain_id = slice_and_trim(line, 21, 22).chars().next().unwrap_or(' ');

    let res_seq_str = slice_and_trim(line, 22, 26);
    let residue_number: isize = res_seq_str.parse().map_err(|_| PdbError::Parse {
        line: line_num,
        kind: PdbParseErrorKind::InvalidInt {
            columns: "23-26".into(),
            value: res_seq_str.into(),
        },
    })?;

    // Serials overflow to "*****" or hybrid-36 in very large systems.
    let serial = slice_and_trim(line, 6, 11).parse().unwrap_or(fallback_serial);

    let x = parse_float(line, line_num, 30, 38)?;
    let y = parse_float(line, line_num, 38, 46)?;
    let z = parse_float(line, line_num, 46, 54)?;

    Ok(AtomRecord {
        serial,
        name: name.to_string(),
        residue_name: residue_name.to_string(),
        chain_id,
        residue_number,
        position: Point3::new(x, y, z),
    })
}

/// Splits a PDB stream into models of atom records.
///
/// Files without MODEL records form a single model unless END records split
/// them. With `first_only`, parsing stops at the end of the first model.
fn read_models(reader: &mut impl BufRead, first_only: bool) -> Result<Vec<Vec<AtomRecord>>, PdbError> {
    let mut models: Vec<Vec<AtomRecord>> = Vec::new();
    let mut current: Vec<AtomRecord> = Vec::new();
    let mut in_model = false;

    for (line_num, line_res) in reader.lines().enumerate() {
        let line = line_res?;
        let line_num = line_num + 1;

        match slice_and_trim(&line, 0, 6) {
            "MODEL" => {
                if !current.is_empty() {
                    models.push(std::mem::take(&mut current));
                    if first_only {
                        break;
                    }
                }
                in_model = true;
            }
            "ATOM" | "HETATM" => {
                let record = parse_atom_record(&line, line_num, current.len() + 1)?;
                current.push(record);
            }
            "ENDMDL" => {
                if !in_model {
                    return Err(PdbError::Inconsistency(format!(
                        "ENDMDL without matching MODEL on line {}",
                        line_num
                    )));
                }
                models.push(std::mem::take(&mut current));
                in_model = false;
                if first_only {
                    break;
                }
            }
            // VMD and some other writers separate frames with bare END records.
            "END" => {
                if !current.is_empty() {
                    models.push(std::mem::take(&mut current));
                    if first_only {
                        break;
                    }
                }
                in_model = false;
            }
            _ => {}
        }
    }
    if !current.is_empty() {
        models.push(current);
    }

    models.retain(|m| !m.is_empty());
    if models.is_empty() {
        return Err(PdbError::MissingRecord("ATOM/HETATM records".into()));
    }
    Ok(models)
}

pub struct PdbFile;

impl TopologyFile for PdbFile {
    type Error = PdbError;

    fn read_topology(reader: &mut impl BufRead) -> Result<Topology, Self::Error> {
        let mut models = read_models(reader, true)?;
        let first = models.swap_remove(0);

        let mut builder = TopologyBuilder::new();
        for record in &first {
            builder.add_atom(
                record.serial,
                &record.name,
                &record.residue_name,
                record.residue_number,
                record.chain_id,
                record.position,
            );
        }
        Ok(builder.build())
    }
}

impl TrajectoryFile for PdbFile {
    type Error = PdbError;

    /// Reads each MODEL as one frame.
    ///
    /// PDB carries no simulation time, so frame `i` is stamped `i` ps.
    fn read_trajectory(reader: &mut impl BufRead) -> Result<Trajectory, Self::Error> {
        let models = read_models(reader, false)?;
        let frames = models
            .into_iter()
            .enumerate()
            .map(|(i, model)| Frame::new(i as f64, model.into_iter().map(|r| r.position).collect()))
            .collect();
        Ok(Trajectory::new(frames)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn atom_line(serial: usize, name: &str, res: &str, chain: char, res_seq: isize, x: f64, y: f64, z: f64) -> String {
        format!(
            "HETATM{:>5} {:<4} {:<4}{}{:>4}    {:>8.3}{:>8.3}{:>8.3}  1.00  0.00           C",
            serial, name, res, chain, res_seq, x, y, z
        )
    }

    fn two_model_pdb() -> String {
        [
            "REMARK test".to_string(),
            "MODEL        1".to_string(),
            atom_line(1, "C1", "LIG", 'A', 1, 0.0, 0.0, 0.0),
            atom_line(2, "O1", "LIG", 'A', 1, 0.0, 0.0, 1.5),
            "ENDMDL".to_string(),
            "MODEL        2".to_string(),
            atom_line(1, "C1", "LIG", 'A', 1, 1.0, 1.0, 1.0),
            atom_line(2, "O1", "LIG", 'A', 1, 2.0, 1.0, 1.0),
            "ENDMDL".to_string(),
            "END".to_string(),
        ]
        .join("\n")
    }

    #[test]
    fn read_topology_uses_first_model() {
        let topology = PdbFile::read_topology(&mut Cursor::new(two_model_pdb())).unwrap();
        assert_eq!(topology.n_atoms(), 2);
        assert_eq!(topology.n_residues(), 1);
        let o1 = topology.atom(1).unwrap();
        assert_eq!(o1.name, "O1");
        assert_eq!(o1.residue_name, "LIG");
        assert_eq!(o1.chain_id, 'A');
        assert_eq!(o1.serial, 2);
        assert_eq!(o1.position, Point3::new(0.0, 0.0, 1.5));
    }

    #[test]
    fn read_trajectory_yields_one_frame_per_model() {
        let traj = PdbFile::read_trajectory(&mut Cursor::new(two_model_pdb())).unwrap();
        assert_eq!(traj.n_frames(), 2);
        assert_eq!(traj.n_atoms(), 2);
        let times: Vec<f64> = traj.frames().iter().map(|f| f.time_ps).collect();
        assert_eq!(times, vec![0.0, 1.0]);
        assert_eq!(traj.frames()[1].positions[1], Point3::new(2.0, 1.0, 1.0));
    }

    #[test]
    fn file_without_models_is_a_single_frame() {
        let content = format!(
            "{}\n{}\nEND\n",
            atom_line(1, "N", "ALA", 'A', 1, 1.0, 2.0, 3.0),
            atom_line(2, "CA", "ALA", 'A', 1, 2.0, 2.0, 3.0)
        );
        let traj = PdbFile::read_trajectory(&mut Cursor::new(content)).unwrap();
        assert_eq!(traj.n_frames(), 1);
        assert_eq!(traj.n_atoms(), 2);
    }

    #[test]
    fn end_records_separate_frames() {
        let mut lines = Vec::new();
        for z in [1.0_f64, -1.0, 0.0] {
            lines.push(atom_line(1, "C1", "LIG", ' ', 1, 0.0, 0.0, 0.0));
            lines.push(atom_line(2, "O1", "LIG", ' ', 1, 1.0 - z.abs(), 0.0, z));
            lines.push("END".to_string());
        }
        let content = lines.join("\n");

        let traj = PdbFile::read_trajectory(&mut Cursor::new(content.clone())).unwrap();
        assert_eq!(traj.n_frames(), 3);
        assert_eq!(traj.n_atoms(), 2);
        assert_eq!(traj.frames()[1].positions[1], Point3::new(0.0, 0.0, -1.0));
        assert_eq!(traj.frames()[2].time_ps, 2.0);

        let topology = PdbFile::read_topology(&mut Cursor::new(content)).unwrap();
        assert_eq!(topology.n_atoms(), 2);
    }

    #[test]
    fn four_character_residue_names_are_kept() {
        let content = atom_line(1, "OH2", "TIP3", 'W', 7, 0.0, 0.0, 0.0);
        let topology = PdbFile::read_topology(&mut Cursor::new(content)).unwrap();
        assert_eq!(topology.atoms()[0].residue_name, "TIP3");
        assert_eq!(topology.atoms()[0].chain_id, 'W');
    }

    #[test]
    fn short_atom_line_is_rejected() {
        let content = "ATOM      1  CA  ALA A   1      11.104";
        let err = PdbFile::read_topology(&mut Cursor::new(content)).unwrap_err();
        assert!(matches!(
            err,
            PdbError::Parse {
                line: 1,
                kind: PdbParseErrorKind::LineTooShort
            }
        ));
    }

    #[test]
    fn invalid_coordinate_reports_columns() {
        let mut line = atom_line(1, "C1", "LIG", 'A', 1, 0.0, 0.0, 0.0);
        line.replace_range(30..38, "   abc.d");
        let err = PdbFile::read_topology(&mut Cursor::new(line)).unwrap_err();
        match err {
            PdbError::Parse {
                kind: PdbParseErrorKind::InvalidFloat { columns, .. },
                ..
            } => assert_eq!(columns, "31-38"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn models_with_different_atom_counts_are_rejected() {
        let content = [
            "MODEL        1".to_string(),
            atom_line(1, "C1", "LIG", 'A', 1, 0.0, 0.0, 0.0),
            atom_line(2, "O1", "LIG", 'A', 1, 0.0, 0.0, 1.0),
            "ENDMDL".to_string(),
            "MODEL        2".to_string(),
            atom_line(1, "C1", "LIG", 'A', 1, 0.0, 0.0, 0.0),
            "ENDMDL".to_string(),
        ]
        .join("\n");
        let err = PdbFile::read_trajectory(&mut Cursor::new(content)).unwrap_err();
        assert!(matches!(err, PdbError::Inconsistency(_)));
    }

    #[test]
    fn empty_input_is_missing_atoms() {
        let err = PdbFile::read_topology(&mut Cursor::new("REMARK nothing\nEND\n")).unwrap_err();
        assert!(matches!(err, PdbError::MissingRecord(_)));
    }
}
