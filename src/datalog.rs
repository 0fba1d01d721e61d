use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};

// ---------------------------------------------------------------------------
// Datalog writer: one comma-separated line per call
// ---------------------------------------------------------------------------

/// How to open the log file for a write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogMode {
    /// Truncate or create the file. Used once for the wavelength heading.
    Create,
    /// Open for append, creating if missing. Used per capture.
    Append,
}

/// Serialize `values` as comma-joined decimal text with a trailing
/// newline and write them to `path` as one line.
///
/// The file handle is opened and closed inside this call, so nothing is
/// held open between captures. An empty `values` slice writes a bare
/// newline. No rotation, no size limit, no atomicity guarantee.
pub fn write_line(path: &Path, values: &[u32], mode: LogMode) -> Result<()> {
    let mut file = open(path, mode)?;

    let line = values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(",");
    writeln!(file, "{line}").with_context(|| format!("writing to log file {}", path.display()))?;

    Ok(())
}

fn open(path: &Path, mode: LogMode) -> Result<File> {
    match mode {
        LogMode::Create => File::create(path),
        LogMode::Append => OpenOptions::new().create(true).append(true).open(path),
    }
    .with_context(|| format!("opening log file {} ({mode:?})", path.display()))
}
