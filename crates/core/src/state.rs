/// A recorded sample of the system.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct State {
    /// Absolute prey population.
    pub x: f64,
    /// Absolute predator population.
    pub y: f64,
    /// Conserved quantity at `(x, y)`, or `NaN` outside its domain.
    pub invariant: f64,
}

impl State {
    /// Returns true once the population floor has driven both species to zero.
    #[must_use]
    pub fn is_extinct(&self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }
}
