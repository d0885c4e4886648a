//! Fixed-step predator-prey simulation.
//!
//! The engine integrates the Lotka-Volterra equations with forward Euler in
//! coordinates relative to the equilibrium point:
//!
//! ```text
//! x_rel' = x_rel + a·(1 − y_rel)·x_rel·dt
//! y_rel' = y_rel + d·(x_rel − 1)·y_rel·dt
//! ```
//!
//! Every advance appends one [`State`] holding absolute populations and the
//! conserved invariant to an append-only history.
//!
//! # Example
//!
//! ```
//! use lotka_core::{Parameters, Simulation};
//!
//! let params = Parameters::new(0.8, 0.004, 0.002, 0.3);
//! let mut sim = Simulation::new(params, 200.0, 80.0, 0.001)?;
//! sim.run(1000);
//!
//! assert_eq!(sim.history().len(), 1001);
//! # Ok::<(), lotka_core::Error>(())
//! ```

mod action;
mod event;
mod outcome;

pub use action::Action;
pub use event::Event;
pub use outcome::{Outcome, Status};

use tracing::debug;

use crate::{
    Error, Observer, Parameters, State,
    equilibrium::{Equilibrium, Relative, RelativeRate},
    error::strictly_positive,
    step::StepIntegrable,
};

/// Upper bound on samples reserved ahead of a run; longer runs grow on demand.
const MAX_RESERVE: usize = 1 << 20;

/// A Lotka-Volterra simulation with its recorded history.
///
/// The history always holds at least one sample, the initial condition.
#[derive(Debug, Clone)]
pub struct Simulation {
    params: Parameters,
    dt: f64,
    equilibrium: Equilibrium,
    current: Relative,
    history: Vec<State>,
}

impl Simulation {
    /// Creates a simulation and records the initial condition.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if any coefficient, either initial
    /// population, or the time step is not strictly positive.
    /// Arguments are checked in the order `a`, `b`, `c`, `d`, `x0`, `y0`, `dt`.
    pub fn new(params: Parameters, x0: f64, y0: f64, dt: f64) -> Result<Self, Error> {
        params.validate()?;
        let x0 = strictly_positive("x0", x0)?;
        let y0 = strictly_positive("y0", y0)?;
        let dt = strictly_positive("dt", dt)?;

        let equilibrium = params.equilibrium();
        debug!(x_eq = equilibrium.x, y_eq = equilibrium.y, dt, "created simulation");

        Ok(Self {
            params,
            dt,
            equilibrium,
            current: equilibrium.to_relative(x0, y0),
            history: vec![State {
                x: x0,
                y: y0,
                invariant: params.invariant(x0, y0),
            }],
        })
    }

    /// Advances the simulation by one time step and records the result.
    ///
    /// If either species reaches or crosses zero, both are set to zero.
    pub fn evolve(&mut self) {
        let prev = self.current;

        let mut next = prev.step(self.rate(prev), self.dt);
        if next.is_depleted() {
            debug!(step = self.history.len(), "population floor reached");
            next = Relative::EXTINCT;
        }
        self.current = next;

        let (x, y) = self.equilibrium.to_absolute(next);
        self.history.push(State {
            x,
            y,
            invariant: self.params.invariant(x, y),
        });
    }

    /// Advances the simulation `steps` times.
    pub fn run(&mut self, steps: usize) {
        self.run_observed(steps, ());
    }

    /// Advances the simulation up to `steps` times, reporting each sample.
    ///
    /// The observer first sees the sample the run starts from, then the sample
    /// recorded by each advance. Returning [`Action::StopEarly`] ends the run
    /// and keeps everything recorded so far.
    pub fn run_observed<O>(&mut self, steps: usize, mut observer: O) -> Outcome
    where
        O: Observer<Event, Action>,
    {
        self.history.reserve(steps.min(MAX_RESERVE));

        if let Some(Action::StopEarly) = observer.observe(&self.latest_event()) {
            return Outcome {
                status: Status::StoppedByObserver,
                steps: 0,
            };
        }

        for taken in 1..=steps {
            self.evolve();

            if let Some(Action::StopEarly) = observer.observe(&self.latest_event()) {
                return Outcome {
                    status: Status::StoppedByObserver,
                    steps: taken,
                };
            }
        }

        Outcome {
            status: Status::Complete,
            steps,
        }
    }

    /// Returns every recorded sample in chronological order.
    #[must_use]
    pub fn history(&self) -> &[State] {
        &self.history
    }

    /// Returns the most recently recorded sample.
    #[must_use]
    pub fn current_state(&self) -> State {
        *self
            .history
            .last()
            .expect("history is seeded at construction")
    }

    #[must_use]
    pub fn parameters(&self) -> &Parameters {
        &self.params
    }

    #[must_use]
    pub fn dt(&self) -> f64 {
        self.dt
    }

    #[must_use]
    pub fn equilibrium(&self) -> Equilibrium {
        self.equilibrium
    }

    /// Number of advances performed since construction.
    #[must_use]
    pub fn steps_taken(&self) -> usize {
        self.history.len() - 1
    }

    /// Simulated time elapsed since construction.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn elapsed(&self) -> f64 {
        self.steps_taken() as f64 * self.dt
    }

    /// Computes the relative-coordinate derivative at `rel`.
    fn rate(&self, rel: Relative) -> RelativeRate {
        RelativeRate {
            dx: self.params.a * (1.0 - rel.y) * rel.x,
            dy: self.params.d * (rel.x - 1.0) * rel.y,
        }
    }

    fn latest_event(&self) -> Event {
        Event {
            step: self.steps_taken(),
            state: self.current_state(),
        }
    }
}
