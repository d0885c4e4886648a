/// A trait for states that can be advanced by one explicit Euler step.
///
/// Implementors return `self + derivative * delta`, where the derivative is
/// taken with respect to `Delta` (time, for the predator-prey engine).
pub trait StepIntegrable<Delta> {
    /// The derivative of the type with respect to `Delta`.
    type Derivative;

    /// Returns the value after stepping with a derivative and step size.
    #[must_use]
    fn step(&self, derivative: Self::Derivative, delta: Delta) -> Self;
}
