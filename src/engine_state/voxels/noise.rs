//! Layered simplex noise.
//!
//! A [`LayeredNoise`] sums several octaves of simplex noise, each at twice the frequency
//! and `roughness` times the amplitude of the previous one, then maps the sum from
//! `[-1, 1]` to `[0, 1]` and raises it to the `redistribution` power. Exponents above one
//! flatten valleys and sharpen peaks.

use noise::{NoiseFn, Simplex};
use serde::{Deserialize, Serialize};

/// Shape of a layered noise field.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct NoiseOptions {
    /// Number of summed octaves
    pub octaves: u32,
    /// Frequency of the first octave
    pub frequency: f64,
    /// Amplitude multiplier between octaves
    pub roughness: f64,
    /// Exponent applied to the normalized sum
    pub redistribution: f64,
}

/// A deterministic `[0, 1]` scalar field over world coordinates.
#[derive(Clone, Debug)]
pub struct LayeredNoise {
    simplex: Simplex,
    options: NoiseOptions,
}

impl LayeredNoise {
    pub fn new(seed: u32, options: NoiseOptions) -> Self {
        Self {
            simplex: Simplex::new(seed),
            options,
        }
    }

    pub fn options(&self) -> NoiseOptions {
        self.options
    }

    /// Samples the 2D field.
    pub fn sample2(&self, x: f64, y: f64) -> f64 {
        self.layered(|frequency| self.simplex.get([x * frequency, y * frequency]))
    }

    fn layered(&self, octave: impl Fn(f64) -> f64) -> f64 {
        let mut total = 0.0;
        let mut max = 0.0;
        let mut frequency = self.options.frequency;
        let mut amplitude = 1.0;

        for _ in 0..self.options.octaves {
            total += octave(frequency) * amplitude;
            max += amplitude;
            frequency *= 2.0;
            amplitude *= self.options.roughness;
        }

        if max == 0.0 {
            return 0.0;
        }

        let normalized = ((1.0 + total / max) / 2.0).clamp(0.0, 1.0);
        normalized.powf(self.options.redistribution)
    }
}
