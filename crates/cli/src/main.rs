mod args;
mod config;
mod prompt;

use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use lotka_core::{
    Simulation,
    simulation::{Action, Event, Status},
};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::{
    args::Args,
    config::{FileConfig, Settings},
};

fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();

    let file = args
        .config
        .as_deref()
        .map(FileConfig::load)
        .transpose()?
        .unwrap_or_default();
    let settings = Settings::resolve(&args, file);
    settings.validate()?;

    let steps = match settings.steps {
        Some(steps) => steps,
        None => prompt::ask_steps(io::stdin().lock(), io::stdout())?,
    };

    let sim = simulate(&settings, steps, args.stop_on_extinction)
        .context("failed to set up simulation")?;

    lotka_report::write_csv_file(&settings.output, sim.history(), sim.dt())
        .context("failed to write results")?;
    println!(
        "Simulation finished. {} states written to {}.",
        sim.history().len(),
        settings.output.display()
    );

    #[cfg(feature = "plot")]
    if args.plot {
        lotka_report::PlotApp::from_history(sim.history(), sim.dt())
            .run("Lotka-Volterra")
            .map_err(|err| anyhow::anyhow!("failed to open plot window: {err}"))?;
    }

    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

/// Builds the engine from `settings` and advances it up to `steps` times.
fn simulate(
    settings: &Settings,
    steps: usize,
    stop_on_extinction: bool,
) -> Result<Simulation, lotka_core::Error> {
    let mut sim = Simulation::new(settings.params, settings.x0, settings.y0, settings.dt)?;
    info!(steps, dt = settings.dt, "running simulation");

    let mut extinct = false;
    let outcome = sim.run_observed(steps, |event: &Event| {
        if extinct || !event.state.is_extinct() {
            return None;
        }
        extinct = true;
        warn!(step = event.step, "both populations went extinct");
        stop_on_extinction.then_some(Action::StopEarly)
    });

    if outcome.status == Status::StoppedByObserver {
        info!(steps = outcome.steps, "stopped early");
    }
    report_drift(&sim);

    Ok(sim)
}

/// Logs how far the invariant moved over the run.
fn report_drift(sim: &Simulation) {
    let h_initial = sim.history()[0].invariant;
    let h_final = sim.current_state().invariant;

    if h_final.is_nan() {
        warn!("final state is outside the invariant's domain");
    } else {
        let drift = ((h_final - h_initial) / h_initial).abs();
        info!(h_initial, h_final, relative_drift = drift, "invariant check");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use lotka_core::Parameters;

    use crate::config::{DEFAULT_DT, DEFAULT_PARAMETERS, DEFAULT_X0, DEFAULT_Y0};

    fn settings(params: Parameters, x0: f64, y0: f64, dt: f64) -> Settings {
        Settings {
            params,
            x0,
            y0,
            dt,
            steps: None,
            output: "unused.csv".into(),
        }
    }

    #[test]
    fn default_run_matches_reference_step() {
        let settings = settings(DEFAULT_PARAMETERS, DEFAULT_X0, DEFAULT_Y0, DEFAULT_DT);

        let sim = simulate(&settings, 1, false).unwrap();

        assert_eq!(sim.history().len(), 2);
        assert_relative_eq!(sim.current_state().x, 200.096, max_relative = 1e-9);
        assert_relative_eq!(sim.current_state().y, 80.008, max_relative = 1e-9);
    }

    #[test]
    fn extinction_stops_only_when_asked() {
        let params = Parameters::new(1.0, 1.0, 1.0, 1.0);
        let settings = settings(params, 1.0, 3.0, 1.0);

        let stopped = simulate(&settings, 10, true).unwrap();
        assert_eq!(stopped.history().len(), 2);

        let full = simulate(&settings, 10, false).unwrap();
        assert_eq!(full.history().len(), 11);
        assert!(full.current_state().is_extinct());
    }

    #[test]
    fn engine_rejects_what_validation_would() {
        let settings = settings(DEFAULT_PARAMETERS, DEFAULT_X0, DEFAULT_Y0, 0.0);

        let err = simulate(&settings, 1, false).unwrap_err();

        assert_eq!(err.argument(), "dt");
    }
}
