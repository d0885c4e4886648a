use std::path::PathBuf;

use clap::Parser;

/// Command-line arguments.
///
/// Every model value is optional here so that a config file can supply it;
/// anything still missing falls back to the built-in defaults.
#[derive(Debug, Parser)]
#[command(name = "lotka", allow_negative_numbers = true)]
#[command(about = "Integrates the Lotka-Volterra predator-prey equations and writes the trajectory as CSV")]
pub struct Args {
    /// TOML configuration file
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Prey growth rate (a)
    #[arg(short = 'a', long)]
    pub prey_growth: Option<f64>,

    /// Prey death rate per predator encounter (b)
    #[arg(short = 'b', long)]
    pub prey_death: Option<f64>,

    /// Predator growth rate per prey encounter (c)
    #[arg(short = 'c', long)]
    pub predator_growth: Option<f64>,

    /// Predator death rate (d)
    #[arg(short = 'd', long)]
    pub predator_death: Option<f64>,

    /// Initial prey population
    #[arg(long)]
    pub x0: Option<f64>,

    /// Initial predator population
    #[arg(long)]
    pub y0: Option<f64>,

    /// Time step
    #[arg(long)]
    pub dt: Option<f64>,

    /// Number of steps; prompted for on stdin when not given anywhere
    #[arg(short = 'n', long)]
    pub steps: Option<usize>,

    /// Output CSV file
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Stop as soon as both populations are extinct
    #[arg(long)]
    pub stop_on_extinction: bool,

    /// Show the trajectory in a plot window after the run
    #[cfg(feature = "plot")]
    #[arg(long)]
    pub plot: bool,
}
