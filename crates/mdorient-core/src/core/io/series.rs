use crate::core::models::series::OrientationSeries;
use std::io::{self, Write};
use thiserror::Error;

/// Header line written above the data rows.
pub const SERIES_HEADER: &str = "# Time(ps) Angle(deg)";

#[derive(Debug, Error)]
pub enum SeriesError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Plain-text two-column series, as consumed by the plotting scripts.
///
/// Rows are `time angle`, each fixed to two decimals and separated by a single
/// space. NaN angles are written as `nan`.
pub struct SeriesFile;

fn format_value(value: f64) -> String {
    if value.is_nan() {
        "nan".to_string()
    } else {
        format!("{:.2}", value)
    }
}

impl SeriesFile {
    pub fn write_to(series: &OrientationSeries, writer: &mut impl Write) -> Result<(), SeriesError> {
        writeln!(writer, "{}", SERIES_HEADER)?;
        for sample in series {
            writeln!(
                writer,
                "{} {}",
                format_value(sample.time_ps),
                format_value(sample.angle_deg)
            )?;
        }
        writer.flush()?;
        Ok(())
    }
}
