use super::slice_and_trim;
use super::traits::{TopologyFile, TrajectoryFile};
use crate::core::models::builder::TopologyBuilder;
use crate::core::models::topology::Topology;
use crate::core::models::trajectory::{Frame, Trajectory, TrajectoryError};
use nalgebra::Point3;
use std::io::{self, BufRead};
use thiserror::Error;

const NM_TO_ANGSTROM: f64 = 10.0;
const DEFAULT_COORDINATE_WIDTH: usize = 8;
const COORDINATE_START: usize = 20;

#[derive(Debug, Error)]
pub enum GroError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Parse error on line {line}: {kind}")]
    Parse { line: usize, kind: GroParseErrorKind },
    #[error("Unexpected end of file in frame {frame}: {detail}")]
    Truncated { frame: usize, detail: String },
    #[error("Inconsistent data: {0}")]
    Inconsistency(String),
    #[error("Missing required record: {0}")]
    MissingRecord(String),
}

#[derive(Debug, Error)]
pub enum GroParseErrorKind {
    #[error("Invalid atom count '{0}'")]
    InvalidAtomCount(String),
    #[error("Invalid integer format in columns {columns} (value: '{value}')")]
    InvalidInt { columns: String, value: String },
    #[error("Invalid float format in columns {columns} (value: '{value}')")]
    InvalidFloat { columns: String, value: String },
    #[error("Line is too short for an atom record")]
    LineTooShort,
}

impl From<TrajectoryError> for GroError {
    fn from(e: TrajectoryError) -> Self {
        GroError::Inconsistency(e.to_string())
    }
}

#[derive(Debug, Clone, PartialEq)]
struct AtomRecord {
    residue_number: isize,
    residue_name: String,
    name: String,
    serial: usize,
    position: Point3<f64>,
}

#[derive(Debug, Clone, PartialEq)]
struct GroFrame {
    time_ps: Option<f64>,
    atoms: Vec<AtomRecord>,
}

/// Extracts the simulation time from a title such as
/// `"Protein in water t= 100.00000 step= 50000"`.
fn parse_title_time(title: &str) -> Option<f64> {
    let mut tokens = title.split_whitespace();
    while let Some(token) = tokens.next() {
        if token == "t=" {
            return tokens.next().and_then(|v| v.parse().ok());
        }
        if let Some(value) = token.strip_prefix("t=") {
            return value.parse().ok();
        }
    }
    None
}

/// Width of each coordinate field, inferred from the spacing of decimal points
/// so that files written with extra precision are read correctly.
fn coordinate_width(line: &str) -> usize {
    let Some(rest) = line.get(COORDINATE_START..) else {
        return DEFAULT_COORDINATE_WIDTH;
    };
    rest.find('.')
        .and_then(|first| rest[first + 1..].find('.').map(|second| second + 1))
        .unwrap_or(DEFAULT_COORDINATE_WIDTH)
}

fn parse_atom_line(line: &str, line_num: usize, width: usize) -> Result<AtomRecord, GroError> {
    let coords_end = COORDINATE_START + 3 * width;
    if line.len() < coords_end {
        return Err(GroError::Parse {
            line: line_num,
            kind: GroParseErrorKind::LineTooShort,
        });
    }

    let res_num_str = slice_and_trim(line, 0, 5);
    let residue_number: isize = res_num_str.parse().map_err(|_| GroError::Parse {
        line: line_num,
        kind: GroParseErrorKind::InvalidInt {
            columns: "1-5".into(),
            value: res_num_str.into(),
        },
    })?;
    let serial_str = slice_and_trim(line, 15, 20);
    let serial: usize = serial_str.parse().map_err(|_| GroError::Parse {
        line: line_num,
        kind: GroParseErrorKind::InvalidInt {
            columns: "16-20".into(),
            value: serial_str.into(),
        },
    })?;

    let mut xyz = [0.0f64; 3];
    for (axis, value) in xyz.iter_mut().enumerate() {
        let start = COORDINATE_START + axis * width;
        let field = slice_and_trim(line, start, start + width);
        *value = field.parse::<f64>().map_err(|_| GroError::Parse {
            line: line_num,
            kind: GroParseErrorKind::InvalidFloat {
                columns: format!("{}-{}", start + 1, start + width),
                value: field.into(),
            },
        })? * NM_TO_ANGSTROM;
    }

    Ok(AtomRecord {
        residue_number,
        residue_name: slice_and_trim(line, 5, 10).to_string(),
        name: slice_and_trim(line, 10, 15).to_string(),
        serial,
        position: Point3::new(xyz[0], xyz[1], xyz[2]),
    })
}

/// Reads consecutive GRO frames. Each frame is a title line, an atom count,
/// one line per atom and a box line.
fn read_frames(reader: &mut impl BufRead, first_only: bool) -> Result<Vec<GroFrame>, GroError> {
    let mut lines = reader.lines().enumerate().map(|(i, l)| (i + 1, l)).peekable();
    let mut frames = Vec::new();

    while let Some((_, title)) = lines.next() {
        let title = title?;
        let frame_idx = frames.len();
        // An empty title is legal; a blank line with only blanks after it is
        // trailing padding.
        if title.trim().is_empty() {
            match lines.peek() {
                None => break,
                Some((_, Ok(next))) if next.trim().is_empty() => continue,
                Some(_) => {}
            }
        }

        let (count_line_num, count_line) = lines.next().ok_or_else(|| GroError::Truncated {
            frame: frame_idx,
            detail: "missing atom count".into(),
        })?;
        let count_line = count_line?;
        let n_atoms: usize = count_line.trim().parse().map_err(|_| GroError::Parse {
            line: count_line_num,
            kind: GroParseErrorKind::InvalidAtomCount(count_line.trim().into()),
        })?;

        let mut atoms = Vec::with_capacity(n_atoms);
        let mut width = DEFAULT_COORDINATE_WIDTH;
        for i in 0..n_atoms {
            let (line_num, line) = lines.next().ok_or_else(|| GroError::Truncated {
                frame: frame_idx,
                detail: format!("expected {} atoms, found {}", n_atoms, i),
            })?;
            let line = line?;
            if i == 0 {
                width = coordinate_width(&line);
            }
            atoms.push(parse_atom_line(&line, line_num, width)?);
        }

        let (_, box_line) = lines.next().ok_or_else(|| GroError::Truncated {
            frame: frame_idx,
            detail: "missing box vectors".into(),
        })?;
        box_line?;

        frames.push(GroFrame {
            time_ps: parse_title_time(&title),
            atoms,
        });
        if first_only {
            break;
        }
    }

    if frames.is_empty() {
        return Err(GroError::MissingRecord("GRO frame".into()));
    }
    Ok(frames)
}

pub struct GroFile;

impl TopologyFile for GroFile {
    type Error = GroError;

    fn read_topology(reader: &mut impl BufRead) -> Result<Topology, Self::Error> {
        let mut frames = read_frames(reader, true)?;
        let first = frames.swap_remove(0);

        let mut builder = TopologyBuilder::new();
        for atom in &first.atoms {
            builder.add_atom(
                atom.serial,
                &atom.name,
                &atom.residue_name,
                atom.residue_number,
                ' ',
                atom.position,
            );
        }
        Ok(builder.build())
    }
}

impl TrajectoryFile for GroFile {
    type Error = GroError;

    /// Reads every frame. Frames whose title lacks a `t=` token are stamped
    /// with their zero-based index in ps.
    fn read_trajectory(reader: &mut impl BufRead) -> Result<Trajectory, Self::Error> {
        let frames = read_frames(reader, false)?
            .into_iter()
            .enumerate()
            .map(|(i, frame)| {
                Frame::new(
                    frame.time_ps.unwrap_or(i as f64),
                    frame.atoms.into_iter().map(|a| a.position).collect(),
                )
            })
            .collect();
        Ok(Trajectory::new(frames)?)
    }
}
