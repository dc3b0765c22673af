#[cfg(feature = "serde")]
use serde::Serialize;
use uom::si::{
    electric_potential::volt,
    f64::{ElectricPotential, Frequency},
    frequency::hertz,
};

use crate::electrical::damped_filter::{
    CapacitorBank, CellArrangement, CircuitParameters, FilterError, ImpedanceSet, PhasorSet,
    PowerSet, tuning_frequency,
};

/// Steady-state solution of one filter leg at the network frequency.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct FilterAnalysis {
    /// Frequency at which the LC branch resonates.
    pub tuning_frequency: Frequency,
    /// Element impedances.
    pub impedances: ImpedanceSet,
    /// Element currents and voltages.
    pub phasors: PhasorSet,
    /// Element complex powers (single phase).
    pub powers: PowerSet,
}

impl FilterAnalysis {
    /// Solves the filter for a given line-to-line voltage.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::InvalidComponentValue`] if the inductance or
    /// capacitance is not strictly positive. The check runs before any phasor
    /// arithmetic.
    pub fn run(
        parameters: &CircuitParameters,
        line_voltage: ElectricPotential,
    ) -> Result<Self, FilterError> {
        let _span = tracing::info_span!(
            "damped_filter",
            line_voltage = line_voltage.get::<volt>()
        )
        .entered();

        let tuning_frequency = tuning_frequency(parameters.inductance, parameters.capacitance)?;
        let impedances = ImpedanceSet::synthesize(parameters);
        let phasors = PhasorSet::distribute(line_voltage, &impedances);
        let powers = PowerSet::from_phasors(&phasors);

        tracing::debug!(
            tuning_frequency = tuning_frequency.get::<hertz>(),
            z_filter = %impedances.filter,
            i_filter = %phasors.current.filter,
            s_filter = %powers.per_phase.filter,
            "solved filter leg"
        );

        Ok(Self {
            tuning_frequency,
            impedances,
            phasors,
            powers,
        })
    }
}

/// A solved filter together with its sized capacitor bank.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct FilterStudy {
    /// Component values the filter was solved with.
    #[cfg_attr(feature = "serde", serde(skip))]
    pub parameters: CircuitParameters,
    /// Cell arrangement the bank was sized with.
    #[cfg_attr(feature = "serde", serde(skip))]
    pub arrangement: CellArrangement,
    /// Filter solution.
    pub analysis: FilterAnalysis,
    /// Capacitor bank ratings.
    pub bank: CapacitorBank,
}

impl FilterStudy {
    /// Solves the filter and rates the bank for its capacitor branch.
    ///
    /// # Errors
    ///
    /// Propagates [`FilterError`] from [`FilterAnalysis::run`].
    pub fn run(
        parameters: &CircuitParameters,
        line_voltage: ElectricPotential,
        arrangement: &CellArrangement,
    ) -> Result<Self, FilterError> {
        let analysis = FilterAnalysis::run(parameters, line_voltage)?;
        let bank = CapacitorBank::size(
            arrangement,
            analysis.phasors.voltage.capacitor,
            analysis.powers.per_phase.capacitor,
            parameters.angular_frequency,
        );

        Ok(Self {
            parameters: *parameters,
            arrangement: *arrangement,
            analysis,
            bank,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::{f64::Inductance, inductance::millihenry};

    use crate::electrical::damped_filter::test_utils::{
        reference_line_voltage, reference_parameters, reference_study,
    };

    #[test]
    fn invalid_inductance_stops_the_pipeline() {
        let parameters = CircuitParameters {
            inductance: Inductance::new::<millihenry>(0.0),
            ..reference_parameters()
        };
        assert!(matches!(
            FilterAnalysis::run(&parameters, reference_line_voltage()),
            Err(FilterError::InvalidComponentValue {
                component: "inductance",
                ..
            })
        ));
    }

    #[test]
    fn study_keeps_its_inputs() {
        let study = reference_study();
        assert_eq!(study.parameters, reference_parameters());
        assert_eq!(study.arrangement.cell_count(), 12);
    }

    #[test]
    fn reference_results_are_finite() {
        let analysis = reference_study().analysis;
        let z = analysis.impedances;
        for value in [z.resistor, z.inductor, z.capacitor, z.parallel_rl, z.filter] {
            assert!(value.is_finite());
        }
        for (_, value) in analysis.phasors.current.labeled() {
            assert!(value.is_finite());
        }
        for (_, value) in analysis.phasors.voltage.labeled() {
            assert!(value.is_finite());
        }
        for (_, value) in analysis.powers.per_phase.labeled() {
            assert!(value.is_finite());
        }
    }
}
