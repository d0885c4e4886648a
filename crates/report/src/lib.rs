//! Reporting for Lotka-Volterra simulation histories.
//!
//! - [`rows`] turns a history into tabular [`Row`]s with step index and time
//! - [`write_csv`] and [`write_csv_file`] emit them as CSV with the header
//!   `step,time,x,y,invariant`
//!
//! # Features
//!
//! - `plot` — Enables [`PlotApp`] for viewing a trajectory in an egui window.
//!   This feature adds dependencies on `eframe` and `egui_plot`.

mod csv_output;
mod error;
mod row;

#[cfg(feature = "plot")]
mod plot;

pub use csv_output::{write_csv, write_csv_file};
pub use error::Error;
pub use row::{Row, rows};

#[cfg(feature = "plot")]
pub use plot::PlotApp;
