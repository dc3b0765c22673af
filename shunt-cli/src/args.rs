use std::f64::consts::PI;

use clap::Parser;
use shunt_components::electrical::damped_filter::{
    CellArrangement, CircuitParameters, FilterError,
};
use uom::si::{
    angular_velocity::radian_per_second,
    capacitance::microfarad,
    electric_potential::kilovolt,
    electrical_resistance::ohm,
    f64::{AngularVelocity, Capacitance, ElectricPotential, ElectricalResistance, Inductance},
    inductance::millihenry,
};

/// Steady-state analysis and capacitor-bank sizing of a damped harmonic
/// filter connected in star.
///
/// Defaults describe a 34.5 kV, 60 Hz filter tuned near the fifth harmonic.
#[derive(Debug, Clone, Parser)]
#[command(name = "shunt", version)]
pub(crate) struct Cli {
    /// Damping resistance R, in ohms
    #[arg(long, default_value_t = 222.0)]
    pub resistance: f64,

    /// Series resistance r of the inductor, in ohms (0 for an ideal inductor)
    #[arg(long, default_value_t = 0.792)]
    pub inductor_resistance: f64,

    /// Inductance L, in millihenries
    #[arg(long, default_value_t = 34.303)]
    pub inductance: f64,

    /// Capacitance C, in microfarads
    #[arg(long, default_value_t = 8.543)]
    pub capacitance: f64,

    /// Line-to-line network voltage, in kilovolts
    #[arg(long, default_value_t = 34.5)]
    pub line_voltage: f64,

    /// Network frequency, in hertz
    #[arg(long, default_value_t = 60.0)]
    pub frequency: f64,

    /// Overvoltage margin applied to capacitor cell ratings
    #[arg(long, default_value_t = 1.3)]
    pub overvoltage_margin: f64,

    /// Capacitor cells in series per phase
    #[arg(long, default_value_t = 2)]
    pub series: u32,

    /// Capacitor cells in parallel at each series position
    #[arg(long, default_value_t = 2)]
    pub parallel: u32,

    /// Print the results as JSON instead of text
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    pub(crate) fn circuit_parameters(&self) -> CircuitParameters {
        CircuitParameters {
            resistance: ElectricalResistance::new::<ohm>(self.resistance),
            inductor_resistance: ElectricalResistance::new::<ohm>(self.inductor_resistance),
            inductance: Inductance::new::<millihenry>(self.inductance),
            capacitance: Capacitance::new::<microfarad>(self.capacitance),
            angular_frequency: AngularVelocity::new::<radian_per_second>(
                2.0 * PI * self.frequency,
            ),
        }
    }

    pub(crate) fn line_voltage(&self) -> ElectricPotential {
        ElectricPotential::new::<kilovolt>(self.line_voltage)
    }

    pub(crate) fn cell_arrangement(&self) -> Result<CellArrangement, FilterError> {
        CellArrangement::new(self.series, self.parallel, self.overvoltage_margin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use clap::CommandFactory;
    use uom::si::{electric_potential::volt, inductance::henry};

    #[test]
    fn command_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn defaults_are_the_reference_filter() {
        let cli = Cli::parse_from(["shunt"]);
        let parameters = cli.circuit_parameters();

        assert_relative_eq!(parameters.inductance.get::<henry>(), 34.303e-3);
        assert_relative_eq!(
            parameters.angular_frequency.get::<radian_per_second>(),
            120.0 * PI,
            max_relative = 1e-12
        );
        assert_relative_eq!(cli.line_voltage().get::<volt>(), 34_500.0);
        assert_eq!(cli.cell_arrangement().unwrap().cell_count(), 12);
        assert!(!cli.json);
    }

    #[test]
    fn overrides() {
        let cli = Cli::parse_from([
            "shunt",
            "--frequency",
            "50",
            "--series",
            "3",
            "--parallel",
            "4",
            "--json",
        ]);

        assert_relative_eq!(
            cli.circuit_parameters()
                .angular_frequency
                .get::<radian_per_second>(),
            100.0 * PI,
            max_relative = 1e-12
        );
        assert_eq!(cli.cell_arrangement().unwrap().cell_count(), 36);
        assert!(cli.json);
    }

    #[test]
    fn zero_series_count_fails_at_arrangement() {
        let cli = Cli::parse_from(["shunt", "--series", "0"]);
        assert!(matches!(
            cli.cell_arrangement(),
            Err(FilterError::InvalidCellConfiguration { .. })
        ));
    }
}
