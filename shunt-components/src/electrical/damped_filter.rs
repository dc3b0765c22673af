#![warn(missing_docs)]

//! Damped (second-order high-pass) harmonic filter connected in star.
//!
//! Each phase leg is a resistor `R` in parallel with a lossy inductor
//! (`r + jωL`), the pair in series with a capacitor `C`:
//!
//! ```text
//!   line ──┬── R ──┬── C ── neutral
//!          └─ r,L ─┘
//! ```
//!
//! The analysis runs as a single pipeline:
//!
//! 1. [`tuning_frequency`] checks `L` and `C` and finds the resonance,
//! 2. [`ImpedanceSet::synthesize`] builds every element impedance,
//! 3. [`PhasorSet::distribute`] splits the phase voltage into element
//!    currents and voltages,
//! 4. [`PowerSet::from_phasors`] computes complex power per element,
//! 5. [`CapacitorBank::size`] rates the capacitor cells for the `C` branch.
//!
//! [`FilterAnalysis::run`] chains steps 1–4 and [`FilterStudy::run`] adds
//! step 5. Results are numeric first; [`FilterReport`] and [`Summary`] render
//! them as text.
//!
//! # Example
//!
//! ```rust
//! use shunt_components::electrical::damped_filter::{
//!     CellArrangement, CircuitParameters, FilterStudy,
//! };
//! use uom::si::{
//!     angular_velocity::radian_per_second,
//!     capacitance::microfarad,
//!     electric_potential::kilovolt,
//!     electrical_resistance::ohm,
//!     f64::{AngularVelocity, Capacitance, ElectricPotential, ElectricalResistance, Inductance},
//!     frequency::hertz,
//!     inductance::millihenry,
//! };
//!
//! # fn main() -> Result<(), shunt_components::electrical::damped_filter::FilterError> {
//! let parameters = CircuitParameters {
//!     resistance: ElectricalResistance::new::<ohm>(222.0),
//!     inductor_resistance: ElectricalResistance::new::<ohm>(0.792),
//!     inductance: Inductance::new::<millihenry>(34.303),
//!     capacitance: Capacitance::new::<microfarad>(8.543),
//!     angular_frequency: AngularVelocity::new::<radian_per_second>(
//!         2.0 * std::f64::consts::PI * 60.0,
//!     ),
//! };
//! let arrangement = CellArrangement::new(2, 2, 1.3)?;
//!
//! let study = FilterStudy::run(
//!     &parameters,
//!     ElectricPotential::new::<kilovolt>(34.5),
//!     &arrangement,
//! )?;
//!
//! assert!((study.analysis.tuning_frequency.get::<hertz>() - 294.0).abs() < 0.1);
//! assert_eq!(study.bank.cell_count, 12);
//! # Ok(())
//! # }
//! ```

mod analysis;
mod capacitor_bank;
mod element;
mod error;
mod impedance;
mod parameters;
mod phasor;
mod polar;
mod power;
mod report;
mod tuning;

#[cfg(test)]
pub(crate) mod test_utils;

pub use analysis::{FilterAnalysis, FilterStudy};
pub use capacitor_bank::{CapacitorBank, CellArrangement};
pub use element::PerElement;
pub use error::FilterError;
pub use impedance::{ImpedanceSet, parallel};
pub use parameters::CircuitParameters;
pub use phasor::PhasorSet;
pub use polar::Polar;
pub use power::PowerSet;
pub use report::{FilterReport, Summary};
pub use tuning::tuning_frequency;
