//! Conversions between absolute populations and coordinates relative to the
//! equilibrium point.
//!
//! Dividing by the equilibrium keeps both state variables near 1.0 whatever
//! the absolute population scale.

use crate::step::StepIntegrable;

/// The fixed point of the continuous system, used as a normalization anchor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Equilibrium {
    /// Prey population at equilibrium (`d/c`).
    pub x: f64,
    /// Predator population at equilibrium (`a/b`).
    pub y: f64,
}

impl Equilibrium {
    /// Normalizes absolute populations against this point.
    pub(crate) fn to_relative(self, x: f64, y: f64) -> Relative {
        Relative {
            x: x / self.x,
            y: y / self.y,
        }
    }

    /// Scales relative coordinates back to absolute populations.
    pub(crate) fn to_absolute(self, rel: Relative) -> (f64, f64) {
        (rel.x * self.x, rel.y * self.y)
    }
}

/// Populations divided by their equilibrium values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Relative {
    pub x: f64,
    pub y: f64,
}

/// Time derivative of a [`Relative`] state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct RelativeRate {
    pub dx: f64,
    pub dy: f64,
}

impl Relative {
    pub(crate) const EXTINCT: Self = Self { x: 0.0, y: 0.0 };

    /// Returns true if either coordinate has reached or crossed zero.
    pub(crate) fn is_depleted(self) -> bool {
        self.x <= 0.0 || self.y <= 0.0
    }
}

impl StepIntegrable<f64> for Relative {
    type Derivative = RelativeRate;

    fn step(&self, derivative: RelativeRate, delta: f64) -> Self {
        Self {
            x: self.x + derivative.dx * delta,
            y: self.y + derivative.dy * delta,
        }
    }
}
