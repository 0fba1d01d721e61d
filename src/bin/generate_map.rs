//! Generate a sample pixel→wavelength calibration map file.
//!
//! Writes `sample_map.txt`: tab-separated rows covering detector pixels
//! 227..=364 with wavelengths spanning 280..=1017 nm, the range a real
//! calibration of this sensor covers.

use std::fs::File;
use std::io::Write;

use anyhow::{Context, Result};
use serde::Serialize;

const OUTPUT_PATH: &str = "sample_map.txt";

const FIRST_PIXEL: u32 = 227;
const LAST_PIXEL: u32 = 364;
const FIRST_WAVELENGTH: f64 = 280.0;
const LAST_WAVELENGTH: f64 = 1017.0;

#[derive(Serialize)]
struct Row {
    pixel: u32,
    wavelength: u32,
}

/// Linear pixel→wavelength interpolation, rounded to whole nanometres.
fn wavelength_for(pixel: u32) -> u32 {
    let t = (pixel - FIRST_PIXEL) as f64 / (LAST_PIXEL - FIRST_PIXEL) as f64;
    (FIRST_WAVELENGTH + t * (LAST_WAVELENGTH - FIRST_WAVELENGTH)).round() as u32
}

fn main() -> Result<()> {
    let mut file =
        File::create(OUTPUT_PATH).with_context(|| format!("creating {OUTPUT_PATH}"))?;
    writeln!(file, "# pixel\twavelength [nm]")?;

    let mut writer = csv::WriterBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .from_writer(file);

    for pixel in FIRST_PIXEL..=LAST_PIXEL {
        writer.serialize(Row {
            pixel,
            wavelength: wavelength_for(pixel),
        })?;
    }
    writer.flush()?;

    println!(
        "Wrote {} map rows (pixels {FIRST_PIXEL}..={LAST_PIXEL}, \
         {FIRST_WAVELENGTH}..={LAST_WAVELENGTH} nm) to {OUTPUT_PATH}",
        LAST_PIXEL - FIRST_PIXEL + 1
    );
    Ok(())
}
