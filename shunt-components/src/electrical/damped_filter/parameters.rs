use uom::si::{
    angular_velocity::radian_per_second,
    capacitance::farad,
    electrical_resistance::ohm,
    f64::{AngularVelocity, Capacitance, ElectricalResistance, Inductance},
    inductance::henry,
};

/// Component values of one filter leg and the network angular frequency.
///
/// Values are stored as `uom` quantities, so callers may supply them in any
/// unit (the usual ones are mH for `L` and µF for `C`).
///
/// Construction does not validate anything. [`tuning_frequency`] rejects
/// non-positive `L` or `C`; the other stages evaluate whatever they are given.
///
/// [`tuning_frequency`]: super::tuning_frequency
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircuitParameters {
    /// Damping resistance `R`.
    pub resistance: ElectricalResistance,
    /// Series resistance `r` of the inductor; zero for an ideal inductor.
    pub inductor_resistance: ElectricalResistance,
    /// Inductance `L`.
    pub inductance: Inductance,
    /// Capacitance `C`.
    pub capacitance: Capacitance,
    /// Network angular frequency `ω`.
    pub angular_frequency: AngularVelocity,
}

// SI accessors used by the phasor stages.
impl CircuitParameters {
    pub(crate) fn r_ohm(&self) -> f64 {
        self.resistance.get::<ohm>()
    }

    pub(crate) fn r_inductor_ohm(&self) -> f64 {
        self.inductor_resistance.get::<ohm>()
    }

    pub(crate) fn l_henry(&self) -> f64 {
        self.inductance.get::<henry>()
    }

    pub(crate) fn c_farad(&self) -> f64 {
        self.capacitance.get::<farad>()
    }

    pub(crate) fn omega(&self) -> f64 {
        self.angular_frequency.get::<radian_per_second>()
    }
}
