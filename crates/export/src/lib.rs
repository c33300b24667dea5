//! Export helpers for sampled orientations (CSV and JSON).

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use serde::Serialize;
use thiserror::Error;

/// One sampled orientation, ready for serialization.
///
/// Angles are `(α, δ, W)` for the raw frame and `(x, y, z)` for VSOP87.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrientationRecord {
    pub body: String,
    pub julian_date: f64,
    pub millennia: f64,
    pub frame: String,
    pub angle_1_deg: f64,
    pub angle_2_deg: f64,
    pub angle_3_deg: f64,
}

/// Errors surfaced while writing exported samples.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to write output: {0}")]
    Io(#[from] io::Error),
    #[error("failed to encode CSV: {0}")]
    Csv(#[from] ::csv::Error),
    #[error("failed to encode JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Create a writer for the target path, handling stdout (`-`) by convention.
pub fn writer_for_path(path: &Path) -> io::Result<Box<dyn Write>> {
    if path == Path::new("-") {
        return Ok(Box::new(BufWriter::new(io::stdout())));
    }
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let file = File::create(path)?;
    Ok(Box::new(BufWriter::new(file)))
}

pub mod csv {
    use std::io::Write;

    use super::{ExportError, OrientationRecord};

    /// Write records with a header row taken from the field names.
    pub fn write_records<W: Write>(
        writer: W,
        records: &[OrientationRecord],
    ) -> Result<(), ExportError> {
        let mut out = ::csv::Writer::from_writer(writer);
        for record in records {
            out.serialize(record)?;
        }
        out.flush()?;
        Ok(())
    }
}

pub mod json {
    use std::io::Write;

    use serde::Serialize;
    use serde_json::to_writer_pretty;

    use super::{ExportError, OrientationRecord};

    #[derive(Serialize)]
    struct Document<'a> {
        count: usize,
        samples: &'a [OrientationRecord],
    }

    /// Write a pretty-printed `{ "count": n, "samples": [...] }` document.
    pub fn write_records<W: Write>(
        mut writer: W,
        records: &[OrientationRecord],
    ) -> Result<(), ExportError> {
        let document = Document {
            count: records.len(),
            samples: records,
        };
        to_writer_pretty(&mut writer, &document)?;
        writeln!(writer)?;
        writer.flush()?;
        Ok(())
    }
}
