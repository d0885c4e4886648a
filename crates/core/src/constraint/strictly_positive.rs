use std::cmp::Ordering;

use num_traits::Zero;

use super::{Constrained, Constraint, ConstraintError};

/// Marker type enforcing that a value is strictly positive (> 0).
///
/// `NaN` is rejected, since it does not compare greater than zero.
///
/// # Examples
///
/// ```
/// use lotka_core::constraint::{Constrained, ConstraintError, StrictlyPositive};
///
/// let dt = Constrained::<_, StrictlyPositive>::new(0.001).unwrap();
/// assert_eq!(dt.into_inner(), 0.001);
///
/// let rate = StrictlyPositive::new(0.8).unwrap();
/// assert_eq!(rate.as_ref(), &0.8);
///
/// assert_eq!(StrictlyPositive::new(0.0), Err(ConstraintError::Zero));
/// assert_eq!(StrictlyPositive::new(-1.0), Err(ConstraintError::Negative));
/// assert_eq!(StrictlyPositive::new(f64::NAN), Err(ConstraintError::NotANumber));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct StrictlyPositive;

impl StrictlyPositive {
    /// Constructs `Constrained<T, StrictlyPositive>` if the value is greater than zero.
    ///
    /// # Errors
    ///
    /// Fails if the value is zero, negative, or not a number.
    pub fn new<T: PartialOrd + Zero>(
        value: T,
    ) -> Result<Constrained<T, StrictlyPositive>, ConstraintError> {
        Constrained::<T, StrictlyPositive>::new(value)
    }
}

impl<T: PartialOrd + Zero> Constraint<T> for StrictlyPositive {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match value.partial_cmp(&T::zero()) {
            Some(Ordering::Greater) => Ok(()),
            Some(Ordering::Equal) => Err(ConstraintError::Zero),
            Some(Ordering::Less) => Err(ConstraintError::Negative),
            None => Err(ConstraintError::NotANumber),
        }
    }
}
