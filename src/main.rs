mod capture;
mod data;
mod datalog;

use std::path::Path;

use anyhow::{Context, Result};
use log::info;

use capture::{FrameSource, SimulatedSpectrometer};
use data::filter::align;
use data::loader::load_mapping;
use datalog::LogMode;

const MAP_PATH: &str = "sample_map.txt";
const LOG_PATH: &str = "datalog.txt";
const NUM_FRAMES: usize = 3;
const RNG_SEED: u64 = 42;

fn main() -> Result<()> {
    env_logger::init();

    let map_path = Path::new(MAP_PATH);
    let map = load_mapping(map_path).with_context(|| {
        format!(
            "loading calibration map {} (run the generate_map binary to create a sample)",
            map_path.display()
        )
    })?;
    let range = map
        .pixel_range()
        .context("calibration map has no data rows")?;

    info!(
        "loaded {} map rows covering pixels {}..={}",
        map.len(),
        range.start,
        range.stop
    );
    if let (Some(first), Some(last)) = (
        map.wavelength_at(range.start),
        map.wavelength_at(range.stop),
    ) {
        info!(
            "pixel {} is {first}nm, pixel {} is {last}nm",
            range.start, range.stop
        );
    }

    // Wavelength heading first, truncating any previous log
    let log_path = Path::new(LOG_PATH);
    let wavelengths: Vec<u32> = map.wavelengths().collect();
    datalog::write_line(log_path, &wavelengths, LogMode::Create)?;

    let mut device = SimulatedSpectrometer::new(RNG_SEED);
    for i in 0..NUM_FRAMES {
        let frame = device.capture_frame()?.into_frame();
        let counts = align(&frame, range.start, range.stop);
        info!("frame {}: {} counts in range", i + 1, counts.len());
        datalog::write_line(log_path, &counts, LogMode::Append)?;
    }

    info!(
        "logged {NUM_FRAMES} captures to {} under a {}-wavelength heading",
        log_path.display(),
        wavelengths.len()
    );
    Ok(())
}
