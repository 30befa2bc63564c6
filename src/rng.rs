//! Random helpers
//!
//! Everything draws from a caller-supplied RNG so runs stay reproducible
//! for a given seed.

use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Uniform integer in the inclusive range `[min, max]`.
///
/// Bounds given in the wrong order are swapped, so the result always lies
/// between the two arguments.
pub fn random_int<R: Rng + ?Sized>(rng: &mut R, min: i32, max: i32) -> i32 {
    let (lo, hi) = if min <= max { (min, max) } else { (max, min) };
    rng.random_range(lo..=hi)
}

/// Opaque colour with each channel drawn independently from `[0, 255]`
pub fn random_color<R: Rng + ?Sized>(rng: &mut R) -> Rgb {
    Rgb {
        r: random_int(rng, 0, 255) as u8,
        g: random_int(rng, 0, 255) as u8,
        b: random_int(rng, 0, 255) as u8,
    }
}

/// An opaque RGB colour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// CSS form, e.g. `rgb(12,200,7)`
impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({},{},{})", self.r, self.g, self.b)
    }
}
