use anyhow::Result;

use crate::data::model::Frame;

// ---------------------------------------------------------------------------
// Capture collaborator interface
// ---------------------------------------------------------------------------

/// One capture's worth of data as the device reports it: counts for
/// pixel numbers `1..=num_pixels`, in ascending pixel order.
#[derive(Debug, Clone)]
pub struct CaptureReply {
    pub num_pixels: usize,
    pub pixels: Vec<u32>,
}

impl CaptureReply {
    /// Build the pixel-number → count frame by zipping pixel numbers
    /// `1..=num_pixels` with the reported counts.
    pub fn into_frame(self) -> Frame {
        (1..=self.num_pixels as u32).zip(self.pixels).collect()
    }
}

/// The seam between this datalogger and the spectrometer hardware.
///
/// A real driver would talk to the device here; the communication stack
/// itself is out of scope for this crate.
pub trait FrameSource {
    /// Perform one synchronous capture and return the full frame.
    fn capture_frame(&mut self) -> Result<CaptureReply>;
}

// ---------------------------------------------------------------------------
// Simulated spectrometer
// ---------------------------------------------------------------------------

/// Number of detector pixels on the simulated sensor.
pub const SENSOR_PIXELS: usize = 392;

/// A deterministic stand-in for the spectrometer so the example runs
/// without hardware: a dark-level baseline plus a few Gaussian emission
/// peaks over the pixel axis, with seeded shot noise.
pub struct SimulatedSpectrometer {
    rng: SimpleRng,
}

impl SimulatedSpectrometer {
    pub fn new(seed: u64) -> Self {
        SimulatedSpectrometer {
            rng: SimpleRng::new(seed),
        }
    }

    fn count_at(&mut self, pixel: u32) -> u32 {
        // Emission peaks: (center pixel, width, amplitude)
        const PEAKS: [(f64, f64, f64); 3] = [
            (260.0, 12.0, 3000.0),
            (305.0, 25.0, 1800.0),
            (344.0, 8.0, 900.0),
        ];
        const DARK_LEVEL: f64 = 450.0;
        const NOISE_SIGMA: f64 = 20.0;

        let x = pixel as f64;
        let signal: f64 = PEAKS
            .iter()
            .map(|&(mu, sigma, amp)| gaussian(x, mu, sigma, amp))
            .sum();

        (DARK_LEVEL + signal + self.rng.gauss(0.0, NOISE_SIGMA)).max(0.0) as u32
    }
}

impl FrameSource for SimulatedSpectrometer {
    fn capture_frame(&mut self) -> Result<CaptureReply> {
        let pixels: Vec<u32> = (1..=SENSOR_PIXELS as u32).map(|p| self.count_at(p)).collect();
        Ok(CaptureReply {
            num_pixels: SENSOR_PIXELS,
            pixels,
        })
    }
}

fn gaussian(x: f64, mu: f64, sigma: f64, amplitude: f64) -> f64 {
    amplitude * (-(x - mu).powi(2) / (2.0 * sigma.powi(2))).exp()
}

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}
