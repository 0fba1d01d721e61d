use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use thiserror::Error;

use super::model::{MappingRow, WavelengthMap};

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Failure to load a calibration map file.
///
/// There is no partial-success mode: the first bad line fails the whole
/// load.
#[derive(Debug, Error)]
pub enum MapError {
    #[error("reading map file: {0}")]
    Io(#[from] io::Error),

    #[error("map file line {line}: expected two integer columns, got {text:?}")]
    Parse { line: usize, text: String },
}

// ---------------------------------------------------------------------------
// Mapping loader
// ---------------------------------------------------------------------------

/// Load a pixel→wavelength calibration map from a text file.
///
/// Expected format: one row per line, two integer columns (pixel index,
/// wavelength in nm) separated by whitespace:
///
/// ```text
/// # pixel  wavelength [nm]
/// 227 280
/// 228 285
/// ```
///
/// Lines starting with `#` and blank lines are skipped. Row order is
/// preserved; the i-th pixel and i-th wavelength always come from the
/// same source row.
pub fn load_mapping(path: &Path) -> Result<WavelengthMap, MapError> {
    let file = File::open(path)?;
    read_mapping(BufReader::new(file))
}

/// Parse a calibration map from any buffered reader.
///
/// This is the seam `load_mapping` is built on; tests feed it in-memory
/// text via `io::Cursor`.
pub fn read_mapping<R: BufRead>(reader: R) -> Result<WavelengthMap, MapError> {
    let mut rows = Vec::new();

    for (line_no, line) in reader.lines().enumerate() {
        let line = line?;
        let text = line.trim();
        if text.is_empty() || text.starts_with('#') {
            continue;
        }

        rows.push(parse_row(text).ok_or_else(|| MapError::Parse {
            // 1-based, matching what an editor shows
            line: line_no + 1,
            text: text.to_string(),
        })?);
    }

    Ok(WavelengthMap::from_rows(rows))
}

/// Parse one data line into a row: exactly two integer tokens.
fn parse_row(text: &str) -> Option<MappingRow> {
    let mut tokens = text.split_whitespace();
    let pixel = tokens.next()?.parse().ok()?;
    let wavelength = tokens.next()?.parse().ok()?;
    if tokens.next().is_some() {
        return None;
    }
    Some(MappingRow { pixel, wavelength })
}
