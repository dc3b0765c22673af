use std::f64::consts::PI;

use shunt_core::constraint::StrictlyPositive;
use uom::si::{
    capacitance::farad,
    f64::{Capacitance, Frequency, Inductance},
    frequency::hertz,
    inductance::henry,
};

use crate::electrical::damped_filter::FilterError;

/// Computes the tuning (resonant) frequency `f = 1 / (2π√(LC))`.
///
/// This is where the net reactance of the undamped LC branch vanishes.
///
/// # Errors
///
/// Returns [`FilterError::InvalidComponentValue`] if either `inductance` or
/// `capacitance` is zero, negative, or NaN.
pub fn tuning_frequency(
    inductance: Inductance,
    capacitance: Capacitance,
) -> Result<Frequency, FilterError> {
    let l = StrictlyPositive::new(inductance.get::<henry>())
        .map_err(FilterError::component("inductance"))?
        .into_inner();
    let c = StrictlyPositive::new(capacitance.get::<farad>())
        .map_err(FilterError::component("capacitance"))?
        .into_inner();

    Ok(Frequency::new::<hertz>(1.0 / (2.0 * PI * (l * c).sqrt())))
}
