use num_complex::Complex64;
#[cfg(feature = "serde")]
use serde::Serialize;
use uom::si::{electric_potential::volt, f64::ElectricPotential};

use crate::electrical::damped_filter::{ImpedanceSet, PerElement};

/// Current (A) and voltage (V) phasors of each element in one filter leg.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct PhasorSet {
    /// Element currents `I_R`, `I_L`, `I_C`, `I_F`.
    pub current: PerElement<Complex64>,
    /// Element voltages `V_R`, `V_L`, `V_C`, `V_F`.
    pub voltage: PerElement<Complex64>,
}

impl PhasorSet {
    /// Distributes the phase voltage of a star-connected leg over its elements.
    ///
    /// The leg sees `V_line / √3` and draws `I_F = V_phase / Z_F`. The
    /// resistor and inductor share the voltage of the parallel block
    /// (`I_F·Z_RL`), the capacitor takes `I_F·Z_C`, and each element current
    /// follows from Ohm's law on its own impedance.
    ///
    /// The capacitor current is computed as `V_C / Z_C` rather than copied from
    /// `I_F`. In this series topology both are the same phasor up to rounding.
    #[must_use]
    pub fn distribute(line_voltage: ElectricPotential, impedances: &ImpedanceSet) -> Self {
        let phase_voltage = Complex64::from(line_voltage.get::<volt>() / 3.0_f64.sqrt());

        let i_f = phase_voltage / impedances.filter;

        let v_r = i_f * impedances.parallel_rl;
        let v_l = i_f * impedances.parallel_rl;
        let v_c = i_f * impedances.capacitor;
        let v_f = v_r + v_c;

        let voltage = PerElement {
            resistor: v_r,
            inductor: v_l,
            capacitor: v_c,
            filter: v_f,
        };

        let current = PerElement {
            resistor: v_r / impedances.resistor,
            inductor: v_l / impedances.inductor,
            capacitor: v_c / impedances.capacitor,
            filter: i_f,
        };

        Self { current, voltage }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::electrical::damped_filter::test_utils::{
        reference_line_voltage, reference_parameters,
    };

    fn reference_phasors() -> PhasorSet {
        let z = ImpedanceSet::synthesize(&reference_parameters());
        PhasorSet::distribute(reference_line_voltage(), &z)
    }

    #[test]
    fn filter_voltage_is_the_phase_voltage() {
        let p = reference_phasors();
        assert_relative_eq!(p.voltage.filter.re, 34_500.0 / 3.0_f64.sqrt(), max_relative = 1e-12);
        assert_relative_eq!(p.voltage.filter.im, 0.0, epsilon = 1e-6);
    }

    #[test]
    fn reference_magnitudes() {
        let p = reference_phasors();

        assert_relative_eq!(p.current.filter.norm(), 66.907_193_835, max_relative = 1e-9);
        assert_relative_eq!(p.current.resistor.norm(), 3.884_355_892_8, max_relative = 1e-9);
        assert_relative_eq!(p.current.inductor.norm(), 66.557_318_140, max_relative = 1e-9);
        assert_relative_eq!(p.voltage.resistor.norm(), 862.327_008_200, max_relative = 1e-9);
        assert_relative_eq!(p.voltage.capacitor.norm(), 20_774.533_979_6, max_relative = 1e-9);
    }

    #[test]
    fn parallel_block_shares_voltage() {
        let p = reference_phasors();
        assert_eq!(p.voltage.resistor, p.voltage.inductor);
    }

    #[test]
    fn parallel_currents_sum_to_line_current() {
        let p = reference_phasors();
        let sum = p.current.resistor + p.current.inductor;
        assert_relative_eq!(sum.re, p.current.filter.re, max_relative = 1e-9);
        assert_relative_eq!(sum.im, p.current.filter.im, max_relative = 1e-9);
    }

    #[test]
    fn capacitor_carries_line_current() {
        let p = reference_phasors();
        assert_relative_eq!(p.current.capacitor.re, p.current.filter.re, max_relative = 1e-9);
        assert_relative_eq!(p.current.capacitor.im, p.current.filter.im, max_relative = 1e-12);
    }
}
