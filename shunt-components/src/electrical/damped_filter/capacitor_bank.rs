use num_complex::Complex64;
#[cfg(feature = "serde")]
use serde::Serialize;
use shunt_core::constraint::{Constrained, StrictlyPositive};
use uom::si::{
    angular_velocity::radian_per_second,
    capacitance::farad,
    electric_potential::volt,
    f64::{AngularVelocity, Capacitance, ElectricPotential, Power},
    power::watt,
};

use crate::electrical::damped_filter::{FilterError, power::PHASES};

/// How capacitor cells are wired to build the `C` branch of each phase.
///
/// Each phase has `series` positions, each made of `parallel` cells. Cell
/// ratings include the overvoltage `margin` (usually a bit above one).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellArrangement {
    series: Constrained<u32, StrictlyPositive>,
    parallel: Constrained<u32, StrictlyPositive>,
    margin: Constrained<f64, StrictlyPositive>,
    cell_count: u32,
}

impl CellArrangement {
    /// Creates a cell arrangement.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::InvalidCellConfiguration`] if either count is
    /// zero or the margin is not strictly positive, and
    /// [`FilterError::TooManyCells`] if `3 × series × parallel` overflows.
    pub fn new(series: u32, parallel: u32, margin: f64) -> Result<Self, FilterError> {
        let series_count =
            StrictlyPositive::new(series).map_err(FilterError::cell("series count"))?;
        let parallel_count =
            StrictlyPositive::new(parallel).map_err(FilterError::cell("parallel count"))?;
        let margin =
            StrictlyPositive::new(margin).map_err(FilterError::cell("overvoltage margin"))?;

        let cell_count = series
            .checked_mul(parallel)
            .and_then(|per_phase| per_phase.checked_mul(3))
            .ok_or(FilterError::TooManyCells { series, parallel })?;

        Ok(Self {
            series: series_count,
            parallel: parallel_count,
            margin,
            cell_count,
        })
    }

    /// Cells in series per phase.
    #[must_use]
    pub fn series(&self) -> u32 {
        self.series.get()
    }

    /// Cells in parallel at each series position.
    #[must_use]
    pub fn parallel(&self) -> u32 {
        self.parallel.get()
    }

    /// Overvoltage margin applied to the cell ratings.
    #[must_use]
    pub fn margin(&self) -> f64 {
        self.margin.get()
    }

    /// Total number of cells over the three phases.
    ///
    /// Always a multiple of three, one string per phase.
    #[must_use]
    pub fn cell_count(&self) -> u32 {
        self.cell_count
    }
}

/// Nominal ratings of the capacitor cells and of the assembled bank.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct CapacitorBank {
    /// Total number of cells, `3 × series × parallel`.
    pub cell_count: u32,
    /// Rated voltage of one cell, margin included.
    pub cell_voltage: ElectricPotential,
    /// Rated reactive power of one cell in var, margin included.
    pub cell_power: Power,
    /// Capacitance of one cell, from `Q = ωCV²`.
    pub cell_capacitance: Capacitance,
    /// Equivalent capacitance of one phase string.
    pub bank_capacitance: Capacitance,
    /// Working voltage across the capacitor branch, `|V_C|`.
    pub working_voltage: ElectricPotential,
    /// Capacitor branch voltage with the margin applied.
    pub design_voltage: ElectricPotential,
    /// Line-to-line rated voltage of the bank, `√3 × margin × |V_C|`.
    pub bank_voltage: ElectricPotential,
    /// Rated reactive power of the whole bank in var, `cell_count × cell_power`.
    pub bank_power: Power,
}

impl CapacitorBank {
    /// Rates the capacitor cells for a capacitor branch operating at
    /// `capacitor_voltage` and absorbing `capacitor_power` (single phase).
    ///
    /// `angular_frequency` is the network frequency at which the cells are
    /// rated.
    #[must_use]
    pub fn size(
        arrangement: &CellArrangement,
        capacitor_voltage: Complex64,
        capacitor_power: Complex64,
        angular_frequency: AngularVelocity,
    ) -> Self {
        let series = f64::from(arrangement.series());
        let parallel = f64::from(arrangement.parallel());
        let margin = arrangement.margin();
        let cell_count = arrangement.cell_count();
        let omega = angular_frequency.get::<radian_per_second>();

        let working_voltage = capacitor_voltage.norm();

        let cell_voltage = working_voltage * margin / series;
        let cell_power = PHASES * capacitor_power.norm() * margin.powi(2) / f64::from(cell_count);
        let cell_capacitance = 1.0 / (omega * cell_voltage.powi(2) / cell_power);
        let bank_capacitance = cell_capacitance * parallel / series;

        tracing::debug!(
            cell_count,
            cell_voltage,
            cell_power,
            cell_capacitance,
            "sized capacitor cells"
        );

        Self {
            cell_count,
            cell_voltage: ElectricPotential::new::<volt>(cell_voltage),
            cell_power: Power::new::<watt>(cell_power),
            cell_capacitance: Capacitance::new::<farad>(cell_capacitance),
            bank_capacitance: Capacitance::new::<farad>(bank_capacitance),
            working_voltage: ElectricPotential::new::<volt>(working_voltage),
            design_voltage: ElectricPotential::new::<volt>(margin * working_voltage),
            bank_voltage: ElectricPotential::new::<volt>(
                PHASES.sqrt() * margin * working_voltage,
            ),
            bank_power: Power::new::<watt>(f64::from(cell_count) * cell_power),
        }
    }
}
