use num_complex::Complex64;
#[cfg(feature = "serde")]
use serde::Serialize;
use uom::si::{f64::Power, power::watt};

use crate::electrical::damped_filter::{PerElement, PhasorSet};

/// Number of phases in the star connection.
pub(crate) const PHASES: f64 = 3.0;

/// Complex power `S = V·I*` (VA) absorbed by each element of one leg.
///
/// The real part is active power and the imaginary part is reactive power
/// (positive for the inductor, negative for the capacitor). Use the
/// `three_phase_*` methods for bank totals.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct PowerSet {
    /// Single-phase complex power per element.
    pub per_phase: PerElement<Complex64>,
}

impl PowerSet {
    /// Computes `V·conj(I)` for every element.
    #[must_use]
    pub fn from_phasors(phasors: &PhasorSet) -> Self {
        Self {
            per_phase: phasors
                .voltage
                .zip_with(phasors.current, |v, i| v * i.conj()),
        }
    }

    /// Complex power of all three phases together.
    #[must_use]
    pub fn three_phase(&self) -> PerElement<Complex64> {
        self.per_phase.map(|s| s * PHASES)
    }

    /// Three-phase active power per element.
    ///
    /// Only the resistor and the inductor's series resistance dissipate, so
    /// the capacitor's entry is zero up to rounding.
    #[must_use]
    pub fn three_phase_active(&self) -> PerElement<Power> {
        self.three_phase().map(|s| Power::new::<watt>(s.re))
    }

    /// Three-phase reactive power per element, in var (stored as [`Power`]).
    #[must_use]
    pub fn three_phase_reactive(&self) -> PerElement<Power> {
        self.three_phase().map(|s| Power::new::<watt>(s.im))
    }

    /// Three-phase apparent power `|S|` per element, in VA (stored as [`Power`]).
    #[must_use]
    pub fn three_phase_apparent(&self) -> PerElement<Power> {
        self.three_phase().map(|s| Power::new::<watt>(s.norm()))
    }
}
