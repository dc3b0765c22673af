use num_complex::Complex64;
#[cfg(feature = "serde")]
use serde::Serialize;

use crate::electrical::damped_filter::CircuitParameters;

/// Complex impedances (Ω) of a filter leg at the network frequency.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct ImpedanceSet {
    /// `Z_R = R`.
    pub resistor: Complex64,
    /// `Z_L = r + jωL`.
    pub inductor: Complex64,
    /// `Z_C = −j/(ωC)`.
    pub capacitor: Complex64,
    /// `Z_RL = Z_R ∥ Z_L`.
    pub parallel_rl: Complex64,
    /// `Z_F = Z_RL + Z_C`, the impedance seen from the leg terminals.
    pub filter: Complex64,
}

impl ImpedanceSet {
    /// Builds every element impedance from the component values.
    ///
    /// Nothing is validated here. With `ω = 0` or `C = 0` the capacitor
    /// impedance is infinite, and with `R = 0` and `r = 0` the parallel
    /// combination is undefined; those results propagate as non-finite
    /// values.
    #[must_use]
    pub fn synthesize(parameters: &CircuitParameters) -> Self {
        let omega = parameters.omega();

        let resistor = Complex64::new(parameters.r_ohm(), 0.0);
        let inductor = Complex64::new(parameters.r_inductor_ohm(), omega * parameters.l_henry());
        let capacitor = Complex64::new(0.0, -1.0 / (omega * parameters.c_farad()));
        let parallel_rl = parallel(resistor, inductor);

        Self {
            resistor,
            inductor,
            capacitor,
            parallel_rl,
            filter: parallel_rl + capacitor,
        }
    }
}

/// Combines two impedances in parallel: `(1/a + 1/b)⁻¹`.
#[must_use]
pub fn parallel(a: Complex64, b: Complex64) -> Complex64 {
    (a.inv() + b.inv()).inv()
}
