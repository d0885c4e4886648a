use approx::assert_relative_eq;
use lotka_core::{
    Parameters, Simulation, State,
    simulation::{Action, Event, Status},
};

const PARAMS: Parameters = Parameters::new(0.8, 0.004, 0.002, 0.3);
const DT: f64 = 0.001;

#[test]
fn invariant_is_conserved_over_a_long_run() {
    let mut sim = Simulation::new(PARAMS, 200.0, 80.0, DT).unwrap();
    sim.run(1000);

    let history = sim.history();
    let h_initial = history.first().unwrap().invariant;
    let h_final = history.last().unwrap().invariant;

    assert_relative_eq!(h_final, h_initial, max_relative = 0.01);
    assert!(history.iter().all(|state| state.invariant.is_finite()));
}

#[test]
fn history_length_tracks_step_count() {
    for steps in [0, 1, 7, 250] {
        let mut sim = Simulation::new(PARAMS, 200.0, 80.0, DT).unwrap();
        sim.run(steps);
        assert_eq!(sim.history().len(), steps + 1);
        assert_eq!(sim.steps_taken(), steps);
    }
}

#[test]
fn first_sample_is_the_unmodified_initial_condition() {
    let mut sim = Simulation::new(PARAMS, 123.456, 78.9, DT).unwrap();
    sim.run(10);

    assert_eq!(
        sim.history()[0],
        State {
            x: 123.456,
            y: 78.9,
            invariant: PARAMS.invariant(123.456, 78.9),
        }
    );
}

#[test]
fn current_state_is_stable_between_advances() {
    let mut sim = Simulation::new(PARAMS, 200.0, 80.0, DT).unwrap();
    sim.run(42);

    let first = sim.current_state();
    let second = sim.current_state();

    assert_eq!(first, second);
    assert_eq!(Some(&first), sim.history().last());
}

#[test]
fn populations_oscillate_around_equilibrium() {
    let mut sim = Simulation::new(PARAMS, 200.0, 80.0, 0.01).unwrap();
    sim.run(5_000);

    let eq = sim.equilibrium();
    let history = sim.history();
    let (min_x, max_x) = history
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), s| {
            (lo.min(s.x), hi.max(s.x))
        });

    assert!(min_x < eq.x && eq.x < max_x);
    assert!(history.iter().all(|s| s.x > 0.0 && s.y > 0.0));
}

#[test]
fn observer_stops_on_extinction() {
    let params = Parameters::new(1.0, 1.0, 1.0, 1.0);
    let mut sim = Simulation::new(params, 1.0, 3.0, 1.0).unwrap();

    let outcome = sim.run_observed(100, |event: &Event| {
        event.state.is_extinct().then_some(Action::StopEarly)
    });

    assert_eq!(outcome.status, Status::StoppedByObserver);
    assert_eq!(outcome.steps, 1);
    assert!(sim.current_state().is_extinct());
    assert!(sim.current_state().invariant.is_nan());
}
