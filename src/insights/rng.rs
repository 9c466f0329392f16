//! Injectable random source for cosmetic figures
//!
//! Production uses an xmur3-seeded mulberry32 generator keyed on the
//! calendar date, so displayed figures fluctuate once per day while staying
//! reproducible within it. Tests substitute a fixed sequence.

use chrono::{Datelike, NaiveDate};

/// Source of uniform values in [0, 1)
pub trait RandomSource {
    fn next_unit(&mut self) -> f64;

    /// Uniform value in [min, max)
    fn between(&mut self, min: f64, max: f64) -> f64 {
        min + (max - min) * self.next_unit()
    }
}

/// mulberry32 stream seeded with an xmur3 hash of the date string
#[derive(Debug, Clone)]
pub struct DailyRng {
    state: u32,
}

impl DailyRng {
    /// Seed from a calendar date (`YYYY-M-D`, no zero padding, matching the
    /// original seed format)
    pub fn for_date(date: NaiveDate) -> Self {
        let seed = format!("{}-{}-{}", date.year(), date.month(), date.day());
        Self::from_seed_str(&seed)
    }

    /// Seed from an arbitrary string
    pub fn from_seed_str(seed: &str) -> Self {
        Self {
            state: xmur3(seed),
        }
    }
}

impl RandomSource for DailyRng {
    fn next_unit(&mut self) -> f64 {
        self.state = self.state.wrapping_add(0x6D2B_79F5);
        let t = self.state;
        let mut r = (t ^ (t >> 15)).wrapping_mul(1 | t);
        r ^= r.wrapping_add((r ^ (r >> 7)).wrapping_mul(61 | r));
        ((r ^ (r >> 14)) as f64) / 4_294_967_296.0
    }
}

fn xmur3(seed: &str) -> u32 {
    let mut h: u32 = 1_779_033_703 ^ seed.len() as u32;
    for byte in seed.bytes() {
        h = (h ^ byte as u32).wrapping_mul(3_432_918_353);
        h = h.rotate_left(13);
    }
    h = (h ^ (h >> 16)).wrapping_mul(2_246_822_507) ^ (h ^ (h >> 13)).wrapping_mul(3_266_489_909);
    h ^ (h >> 16)
}

/// Replays a fixed sequence; for tests
#[derive(Debug, Clone)]
pub struct FixedSource {
    values: Vec<f64>,
    index: usize,
}

impl FixedSource {
    pub fn new(values: Vec<f64>) -> Self {
        Self { values, index: 0 }
    }
}

impl RandomSource for FixedSource {
    fn next_unit(&mut self) -> f64 {
        let value = self.values[self.index % self.values.len()];
        self.index += 1;
        value
    }
}
