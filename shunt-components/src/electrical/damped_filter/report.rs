//! Text rendering of filter results.
//!
//! [`FilterReport`] is the per-element table (impedance, current, voltage,
//! power) and [`Summary`] is the filter/cell/bank overview. Both only format
//! values already computed by [`FilterAnalysis`] and [`FilterStudy`].

pub(crate) mod format;

use std::fmt;

use num_complex::Complex64;
#[cfg(feature = "serde")]
use serde::Serialize;
use uom::si::{
    capacitance::microfarad,
    electric_potential::kilovolt,
    frequency::hertz,
    power::{kilowatt, megawatt},
};

use crate::electrical::damped_filter::{FilterAnalysis, FilterStudy, PerElement, Polar};

use format::{fixed, fixed_complex, general, general_complex};

const MEGA: f64 = 1e6;

/// Per-element results as display strings.
///
/// Phasors read `"|z| ∠ angle°"` with two decimals. Powers are three-phase
/// totals: active MW for the resistor, reactive MVAr for the inductor and
/// capacitor, complex MVA for the whole filter.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct FilterReport {
    /// Element impedances (Ω).
    #[cfg_attr(feature = "serde", serde(rename = "Impedancia"))]
    pub impedance: PerElement<String>,
    /// Element currents (A).
    #[cfg_attr(feature = "serde", serde(rename = "Corrente"))]
    pub current: PerElement<String>,
    /// Element voltages (V).
    #[cfg_attr(feature = "serde", serde(rename = "Tensao"))]
    pub voltage: PerElement<String>,
    /// Three-phase element powers.
    #[cfg_attr(feature = "serde", serde(rename = "Potencia"))]
    pub power: PerElement<String>,
}

impl FilterReport {
    /// Formats every per-element result of an analysis.
    #[must_use]
    pub fn new(analysis: &FilterAnalysis) -> Self {
        let z = &analysis.impedances;
        let impedance = PerElement {
            resistor: z.resistor,
            inductor: z.inductor,
            capacitor: z.capacitor,
            filter: z.filter,
        };

        let s = analysis.powers.three_phase().map(|s| s / MEGA);
        let power = PerElement {
            resistor: format!("{} MW", fixed(s.resistor.re, 2)),
            inductor: format!("{} MVAr", fixed(s.inductor.im, 2)),
            capacitor: format!("{} MVAr", fixed(s.capacitor.im, 2)),
            filter: format!("{} MVA", fixed_complex(s.filter, 2)),
        };

        Self {
            impedance: impedance.map(phasor),
            current: analysis.phasors.current.map(phasor),
            voltage: analysis.phasors.voltage.map(phasor),
            power,
        }
    }

    /// Returns `(category, values)` pairs in report order.
    pub fn categories(&self) -> [(&'static str, &PerElement<String>); 4] {
        [
            ("Impedancia", &self.impedance),
            ("Corrente", &self.current),
            ("Tensao", &self.voltage),
            ("Potencia", &self.power),
        ]
    }
}

fn phasor(z: Complex64) -> String {
    Polar::from(z).to_string()
}

impl fmt::Display for FilterReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (category, values) in self.categories() {
            writeln!(f, "=== {category} ===")?;
            for (element, value) in values.labeled() {
                writeln!(f, "{element}: {value}")?;
            }
            writeln!(f)?;
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Overview of the filter, its capacitor cells and the assembled bank.
#[derive(Debug, Clone, Copy)]
pub struct Summary<'a> {
    study: &'a FilterStudy,
}

impl<'a> Summary<'a> {
    /// Wraps a study for display.
    #[must_use]
    pub fn new(study: &'a FilterStudy) -> Self {
        Self { study }
    }
}

const RULE: &str = "=======================================";

impl fmt::Display for Summary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let FilterStudy {
            parameters,
            arrangement,
            analysis,
            bank,
        } = self.study;

        let filter_power = analysis.powers.three_phase().filter / MEGA;
        let voltage_ratio =
            analysis.phasors.voltage.capacitor.norm() / analysis.phasors.voltage.filter.norm();

        writeln!(f, "================ Filter ===============")?;
        writeln!(f, "Filter power: {} MVA", general_complex(filter_power, 2))?;
        writeln!(
            f,
            "Filter capacitance: {} uF",
            general(parameters.capacitance.get::<microfarad>(), 4)
        )?;
        writeln!(
            f,
            "Capacitor working voltage: {} kV  [{}]",
            general(bank.working_voltage.get::<kilovolt>(), 4),
            general(voltage_ratio, 3)
        )?;
        writeln!(
            f,
            "Capacitor voltage with overvoltage margin: {} kV",
            general(bank.design_voltage.get::<kilovolt>(), 4)
        )?;
        writeln!(
            f,
            "Tuning frequency: {} Hz",
            general(analysis.tuning_frequency.get::<hertz>(), 4)
        )?;
        writeln!(f, "{RULE}")?;
        writeln!(f)?;

        writeln!(f, "=========== Capacitor cells ===========")?;
        writeln!(
            f,
            "Cell count:        {}, series={}, parallel={}",
            bank.cell_count,
            arrangement.series(),
            arrangement.parallel()
        )?;
        writeln!(
            f,
            "Cell voltage:      {} kV",
            general(bank.cell_voltage.get::<kilovolt>(), 4)
        )?;
        writeln!(
            f,
            "Cell power:        {} kVAr",
            general(bank.cell_power.get::<kilowatt>(), 4)
        )?;
        writeln!(
            f,
            "Cell capacitance:  {} uF",
            general(bank.cell_capacitance.get::<microfarad>(), 4)
        )?;
        writeln!(f, "{RULE}")?;
        writeln!(f)?;

        writeln!(f, "================ Bank =================")?;
        writeln!(
            f,
            "Bank voltage:      {} kV",
            general(bank.bank_voltage.get::<kilovolt>(), 4)
        )?;
        writeln!(
            f,
            "Bank power:        {} MVAr",
            general(bank.bank_power.get::<megawatt>(), 4)
        )?;
        writeln!(
            f,
            "Bank capacitance:  {} uF",
            general(bank.bank_capacitance.get::<microfarad>(), 4)
        )?;
        writeln!(f, "{RULE}")
    }
}

impl FilterStudy {
    /// Per-element report of the solved filter.
    #[must_use]
    pub fn report(&self) -> FilterReport {
        FilterReport::new(&self.analysis)
    }

    /// Filter, cell and bank overview.
    #[must_use]
    pub fn summary(&self) -> Summary<'_> {
        Summary::new(self)
    }
}
