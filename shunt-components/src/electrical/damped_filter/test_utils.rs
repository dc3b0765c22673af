//! Shared fixtures for damped filter unit tests.
//!
//! The reference scenario is a 34.5 kV, 60 Hz filter tuned near the fifth
//! harmonic, built from a 2 × 2 arrangement of cells per phase.

use std::f64::consts::PI;

use uom::si::{
    angular_velocity::radian_per_second,
    capacitance::microfarad,
    electric_potential::kilovolt,
    electrical_resistance::ohm,
    f64::{AngularVelocity, Capacitance, ElectricPotential, ElectricalResistance, Inductance},
    inductance::millihenry,
};

use crate::electrical::damped_filter::{CellArrangement, CircuitParameters, FilterStudy};

pub(crate) fn reference_parameters() -> CircuitParameters {
    CircuitParameters {
        resistance: ElectricalResistance::new::<ohm>(222.0),
        inductor_resistance: ElectricalResistance::new::<ohm>(0.792),
        inductance: Inductance::new::<millihenry>(34.303),
        capacitance: Capacitance::new::<microfarad>(8.543),
        angular_frequency: AngularVelocity::new::<radian_per_second>(2.0 * PI * 60.0),
    }
}

pub(crate) fn reference_line_voltage() -> ElectricPotential {
    ElectricPotential::new::<kilovolt>(34.5)
}

pub(crate) fn reference_arrangement() -> CellArrangement {
    CellArrangement::new(2, 2, 1.3).expect("reference arrangement must be valid")
}

pub(crate) fn reference_study() -> FilterStudy {
    FilterStudy::run(
        &reference_parameters(),
        reference_line_voltage(),
        &reference_arrangement(),
    )
    .expect("reference filter must be valid")
}
