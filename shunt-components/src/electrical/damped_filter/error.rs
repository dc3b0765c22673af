use shunt_core::constraint::ConstraintError;
use thiserror::Error;

/// Errors that may occur when analyzing a damped filter or sizing its bank.
///
/// Only explicit preconditions are reported here. Degenerate impedances
/// (e.g., `ω = 0`, or `R = 0` with an ideal inductor) are not errors; they
/// propagate as IEEE-754 infinities or NaNs through the phasor arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum FilterError {
    /// A reactive element has a non-positive value.
    ///
    /// A filter cannot be tuned with zero or negative inductance or
    /// capacitance.
    #[error("invalid {component}: {source}")]
    InvalidComponentValue {
        /// Which component was rejected (`"inductance"` or `"capacitance"`).
        component: &'static str,
        /// The violated constraint.
        #[source]
        source: ConstraintError,
    },

    /// The capacitor cell arrangement is not physical.
    ///
    /// Series and parallel counts must be at least one and the overvoltage
    /// margin must be positive.
    #[error("invalid capacitor cell {parameter}: {source}")]
    InvalidCellConfiguration {
        /// Which arrangement parameter was rejected.
        parameter: &'static str,
        /// The violated constraint.
        #[source]
        source: ConstraintError,
    },

    /// The arrangement has more cells than a `u32` can count.
    #[error("capacitor cell count 3 × {series} × {parallel} is too large")]
    TooManyCells {
        /// Cells in series per phase.
        series: u32,
        /// Cells in parallel at each series position.
        parallel: u32,
    },
}

impl FilterError {
    pub(crate) fn component(component: &'static str) -> impl FnOnce(ConstraintError) -> Self {
        move |source| Self::InvalidComponentValue { component, source }
    }

    pub(crate) fn cell(parameter: &'static str) -> impl FnOnce(ConstraintError) -> Self {
        move |source| Self::InvalidCellConfiguration { parameter, source }
    }
}
