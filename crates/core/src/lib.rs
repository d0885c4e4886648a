//! Fixed-step integration of the Lotka-Volterra predator-prey equations.
//!
//! - [`Parameters`]: the four model coefficients and the conserved invariant
//! - [`Simulation`]: the engine, which owns the current state and an
//!   append-only history of [`State`] samples
//! - [`Observer`]: a hook for watching or stopping a run as it progresses
//! - [`constraint`]: type-level numeric constraints used to validate inputs
//!
//! The engine performs no I/O. Reporting and input collection live in
//! separate crates.

pub mod constraint;
mod equilibrium;
mod error;
mod observer;
mod parameters;
pub mod simulation;
mod state;
mod step;

pub use equilibrium::Equilibrium;
pub use error::Error;
pub use observer::Observer;
pub use parameters::Parameters;
pub use simulation::Simulation;
pub use state::State;
pub use step::StepIntegrable;
