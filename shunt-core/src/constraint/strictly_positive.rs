use std::cmp::Ordering;

use num_traits::Zero;

use crate::constraint::{Constrained, Constraint, ConstraintError, compare_to_zero};

/// Marker type enforcing that a value is strictly positive (`x > 0`).
///
/// Use it for quantities a physical model cannot accept at zero, like an
/// inductance or the number of capacitor cells in a string.
///
/// # Examples
///
/// ```
/// use shunt_core::constraint::{Constrained, StrictlyPositive};
///
/// // Generic constructor:
/// let a = Constrained::<_, StrictlyPositive>::new(2.5).unwrap();
/// assert_eq!(a.into_inner(), 2.5);
///
/// // Associated constructor:
/// let b = StrictlyPositive::new(3_u32).unwrap();
/// assert_eq!(b.as_ref(), &3);
///
/// // Error cases:
/// assert!(StrictlyPositive::new(0.0).is_err());
/// assert!(StrictlyPositive::new(-1.0).is_err());
/// assert!(StrictlyPositive::new(f64::NAN).is_err());
/// ```
///
/// Using with `uom` quantities:
///
/// ```
/// use shunt_core::constraint::StrictlyPositive;
/// use uom::si::{f64::Inductance, inductance::millihenry};
///
/// assert!(StrictlyPositive::new(Inductance::new::<millihenry>(34.3)).is_ok());
/// assert!(StrictlyPositive::new(Inductance::new::<millihenry>(0.0)).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct StrictlyPositive;

impl StrictlyPositive {
    /// Constructs `Constrained<T, StrictlyPositive>` if `value > 0`.
    ///
    /// # Errors
    ///
    /// - [`ConstraintError::Zero`] if the value equals zero.
    /// - [`ConstraintError::Negative`] if the value is less than zero.
    /// - [`ConstraintError::NotANumber`] if comparison is undefined (e.g., NaN).
    pub fn new<T: PartialOrd + Zero>(
        value: T,
    ) -> Result<Constrained<T, StrictlyPositive>, ConstraintError> {
        Constrained::<T, StrictlyPositive>::new(value)
    }
}

impl<T: PartialOrd + Zero> Constraint<T> for StrictlyPositive {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match compare_to_zero(value)? {
            Ordering::Greater => Ok(()),
            Ordering::Equal => Err(ConstraintError::Zero),
            Ordering::Less => Err(ConstraintError::Negative),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::{
        capacitance::microfarad,
        electrical_resistance::ohm,
        f64::{Capacitance, ElectricalResistance},
    };

    #[test]
    fn integers() {
        assert!(StrictlyPositive::new(1_u32).is_ok());
        assert_eq!(StrictlyPositive::new(0_u32), Err(ConstraintError::Zero));
        assert_eq!(StrictlyPositive::new(-4_i32), Err(ConstraintError::Negative));
    }

    #[test]
    fn floats() {
        assert!(StrictlyPositive::new(1e-12).is_ok());
        assert_eq!(StrictlyPositive::new(0.0), Err(ConstraintError::Zero));
        assert_eq!(StrictlyPositive::new(-0.5), Err(ConstraintError::Negative));
        assert_eq!(
            StrictlyPositive::new(f64::NAN),
            Err(ConstraintError::NotANumber)
        );
    }

    #[test]
    fn quantities() {
        let c = Capacitance::new::<microfarad>(8.543);
        assert!(StrictlyPositive::new(c).is_ok());

        let r = ElectricalResistance::new::<ohm>(0.0);
        assert!(matches!(
            StrictlyPositive::new(r),
            Err(ConstraintError::Zero)
        ));
    }
}
