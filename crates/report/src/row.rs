use lotka_core::State;
use serde::Serialize;

/// One line of a simulation report.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Row {
    /// Index of the sample, starting at 0 for the initial condition.
    pub step: usize,
    /// Elapsed simulated time, `step × dt`.
    pub time: f64,
    pub x: f64,
    pub y: f64,
    pub invariant: f64,
}

/// Pairs each sample in `history` with its step index and elapsed time.
#[allow(clippy::cast_precision_loss)]
pub fn rows(history: &[State], dt: f64) -> impl Iterator<Item = Row> + '_ {
    history.iter().enumerate().map(move |(step, state)| Row {
        step,
        time: step as f64 * dt,
        x: state.x,
        y: state.y,
        invariant: state.invariant,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn time_is_step_times_dt() {
        let state = State {
            x: 1.0,
            y: 2.0,
            invariant: 3.0,
        };
        let history = [state; 4];

        let rows: Vec<_> = rows(&history, 0.25).collect();

        assert_eq!(rows.len(), 4);
        assert_eq!(rows[3].step, 3);
        assert_relative_eq!(rows[3].time, 0.75);
        assert_relative_eq!(rows[3].y, 2.0);
    }
}
