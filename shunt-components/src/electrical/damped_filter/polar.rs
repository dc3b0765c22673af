use std::fmt;

use num_complex::Complex64;
#[cfg(feature = "serde")]
use serde::Serialize;

use crate::electrical::damped_filter::report::format::fixed;

/// A phasor in polar form: magnitude and angle in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Polar {
    /// Magnitude `|z|`.
    pub magnitude: f64,
    /// Angle of `z` in degrees, in `(-180, 180]`.
    pub angle_deg: f64,
}

impl From<Complex64> for Polar {
    fn from(z: Complex64) -> Self {
        Self {
            magnitude: z.norm(),
            angle_deg: z.arg().to_degrees(),
        }
    }
}

/// Formats as `"|z| ∠ angle°"`, honoring the requested precision
/// (two decimals by default). Non-finite parts print as `nan`/`inf`.
impl fmt::Display for Polar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision().unwrap_or(2);
        write!(
            f,
            "{} ∠ {}°",
            fixed(self.magnitude, precision),
            fixed(self.angle_deg, precision)
        )
    }
}
