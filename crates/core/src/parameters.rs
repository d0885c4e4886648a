use crate::{
    error::{Error, strictly_positive},
    equilibrium::Equilibrium,
};

/// Coefficients of the Lotka-Volterra equations.
///
/// ```text
/// dx/dt = a·x − b·x·y
/// dy/dt = c·x·y − d·y
/// ```
///
/// All four must be strictly positive for a [`Simulation`](crate::Simulation)
/// to accept them.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Parameters {
    /// Prey growth rate.
    pub a: f64,
    /// Prey death rate per predator encounter.
    pub b: f64,
    /// Predator growth rate per prey encounter.
    pub c: f64,
    /// Predator death rate.
    pub d: f64,
}

impl Parameters {
    /// Creates a new set of coefficients without validating them.
    #[must_use]
    pub const fn new(a: f64, b: f64, c: f64, d: f64) -> Self {
        Self { a, b, c, d }
    }

    /// Checks that every coefficient is strictly positive.
    ///
    /// Coefficients are checked in the order `a`, `b`, `c`, `d` and the first
    /// violation is reported.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] naming the offending coefficient.
    pub fn validate(&self) -> Result<(), Error> {
        strictly_positive("a", self.a)?;
        strictly_positive("b", self.b)?;
        strictly_positive("c", self.c)?;
        strictly_positive("d", self.d)?;
        Ok(())
    }

    /// Returns the non-trivial fixed point `(d/c, a/b)` of the continuous system.
    #[must_use]
    pub fn equilibrium(&self) -> Equilibrium {
        Equilibrium {
            x: self.d / self.c,
            y: self.a / self.b,
        }
    }

    /// Evaluates the conserved quantity `H(x, y)`.
    ///
    /// ```text
    /// H(x, y) = −d·ln(x) + c·x + b·y − a·ln(y)
    /// ```
    ///
    /// `H` is constant along exact trajectories, so its drift over a run
    /// measures the error of the discretization.
    /// Returns `f64::NAN` when either population is not strictly positive,
    /// where `H` is undefined.
    #[must_use]
    pub fn invariant(&self, x: f64, y: f64) -> f64 {
        if x <= 0.0 || y <= 0.0 {
            return f64::NAN;
        }
        -self.d * x.ln() + self.c * x + self.b * y - self.a * y.ln()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    const PARAMS: Parameters = Parameters::new(0.8, 0.004, 0.002, 0.3);

    #[test]
    fn equilibrium_point() {
        let eq = PARAMS.equilibrium();
        assert_relative_eq!(eq.x, 150.0);
        assert_relative_eq!(eq.y, 200.0);
    }

    #[test]
    fn invariant_value() {
        let expected = -0.3 * 200_f64.ln() + 0.002 * 200.0 + 0.004 * 80.0 - 0.8 * 80_f64.ln();
        assert_relative_eq!(PARAMS.invariant(200.0, 80.0), expected);
    }

    #[test]
    fn invariant_outside_domain_is_nan() {
        assert!(PARAMS.invariant(0.0, 80.0).is_nan());
        assert!(PARAMS.invariant(200.0, 0.0).is_nan());
        assert!(PARAMS.invariant(-1.0, -1.0).is_nan());
    }

    #[test]
    fn validate_reports_first_bad_coefficient() {
        assert_eq!(PARAMS.validate(), Ok(()));

        let err = Parameters::new(0.8, -1.0, 0.0, 0.3).validate().unwrap_err();
        assert_eq!(err.argument(), "b");

        let err = Parameters::new(0.8, 0.004, 0.002, f64::NAN)
            .validate()
            .unwrap_err();
        assert_eq!(err.argument(), "d");
    }
}
