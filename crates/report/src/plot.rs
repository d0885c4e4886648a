use eframe::egui;
use egui_plot::{Legend, Line, Plot, PlotPoint};
use lotka_core::State;

use crate::rows;

/// A runnable egui application showing a trajectory.
///
/// The left plot shows both populations over time; the right plot shows the
/// conserved invariant, whose drift reveals integration error.
pub struct PlotApp {
    populations: Vec<Series>,
    invariant: Series,
}

struct Series {
    name: String,
    points: Vec<PlotPoint>,
}

impl Series {
    fn new(name: &str, points: impl Iterator<Item = [f64; 2]>) -> Self {
        Self {
            name: name.to_string(),
            points: points.map(Into::into).collect(),
        }
    }
}

impl PlotApp {
    /// Builds the prey, predator, and invariant series for `history`.
    ///
    /// Samples with a `NaN` invariant are left out of the invariant series.
    #[must_use]
    pub fn from_history(history: &[State], dt: f64) -> Self {
        Self {
            populations: vec![
                Series::new("prey", rows(history, dt).map(|r| [r.time, r.x])),
                Series::new("predator", rows(history, dt).map(|r| [r.time, r.y])),
            ],
            invariant: Series::new(
                "invariant",
                rows(history, dt)
                    .filter(|r| !r.invariant.is_nan())
                    .map(|r| [r.time, r.invariant]),
            ),
        }
    }

    #[allow(clippy::missing_errors_doc)]
    pub fn run(self, name: &str) -> Result<(), eframe::Error> {
        eframe::run_native(
            name,
            eframe::NativeOptions::default(),
            Box::new(|_cc| Ok(Box::new(self))),
        )
    }
}

impl eframe::App for PlotApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.columns(2, |columns| {
                Plot::new("populations")
                    .legend(Legend::default())
                    .show(&mut columns[0], |plot_ui| {
                        for series in &self.populations {
                            let points = series.points.as_slice();
                            plot_ui.line(Line::new(points).name(&series.name));
                        }
                    });

                Plot::new("invariant")
                    .legend(Legend::default())
                    .show(&mut columns[1], |plot_ui| {
                        let series = &self.invariant;
                        plot_ui.line(Line::new(series.points.as_slice()).name(&series.name));
                    });
            });
        });
    }
}
