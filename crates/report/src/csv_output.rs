use std::{fs::File, io::Write, path::Path};

use csv::WriterBuilder;
use lotka_core::State;

use crate::{Error, rows};

const HEADER: [&str; 5] = ["step", "time", "x", "y", "invariant"];

/// Writes `history` as CSV, one row per sample after a header row.
///
/// Invariants outside their domain are written as `NaN`.
///
/// # Errors
///
/// Returns an error if serialization or the underlying writer fails.
pub fn write_csv<W: Write>(writer: W, history: &[State], dt: f64) -> Result<(), Error> {
    let mut csv = WriterBuilder::new().has_headers(false).from_writer(writer);

    csv.write_record(HEADER)?;
    for row in rows(history, dt) {
        csv.serialize(row)?;
    }
    csv.flush()?;

    Ok(())
}

/// Creates (or truncates) the file at `path` and writes `history` to it as CSV.
///
/// # Errors
///
/// Returns [`Error::Open`] if the file cannot be created, or any error from
/// [`write_csv`].
pub fn write_csv_file(path: impl AsRef<Path>, history: &[State], dt: f64) -> Result<(), Error> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|source| Error::Open {
        path: path.to_path_buf(),
        source,
    })?;
    write_csv(file, history, dt)
}

#[cfg(test)]
mod tests {
    use super::*;

    use lotka_core::{Parameters, Simulation};

    fn to_string(history: &[State], dt: f64) -> String {
        let mut buf = Vec::new();
        write_csv(&mut buf, history, dt).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn header_then_one_row_per_sample() {
        let params = Parameters::new(0.8, 0.004, 0.002, 0.3);
        let mut sim = Simulation::new(params, 200.0, 80.0, 0.5).unwrap();
        sim.run(3);

        let output = to_string(sim.history(), sim.dt());
        let lines: Vec<_> = output.lines().collect();

        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], "step,time,x,y,invariant");
        assert!(lines[1].starts_with("0,0.0,200.0,80.0,"));
        assert!(lines[4].starts_with("3,1.5,"));
    }

    #[test]
    fn extinct_invariant_is_written_as_nan() {
        let params = Parameters::new(1.0, 1.0, 1.0, 1.0);
        let mut sim = Simulation::new(params, 1.0, 3.0, 1.0).unwrap();
        sim.evolve();

        let output = to_string(sim.history(), sim.dt());

        assert_eq!(output.lines().nth(2), Some("1,1.0,0.0,0.0,NaN"));
    }

    #[test]
    fn empty_history_still_has_header() {
        assert_eq!(to_string(&[], 1.0), "step,time,x,y,invariant\n");
    }

    #[test]
    fn writes_file() {
        let path = std::env::temp_dir().join(format!("lotka-report-{}.csv", std::process::id()));
        let history = [State {
            x: 2.0,
            y: 4.0,
            invariant: 0.5,
        }];

        write_csv_file(&path, &history, 0.1).unwrap();
        let contents = std::fs::read_to_string(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(contents, "step,time,x,y,invariant\n0,0.0,2.0,4.0,0.5\n");
    }

    #[test]
    fn missing_directory_reports_path() {
        let path = std::env::temp_dir().join("lotka-report-missing-dir/out.csv");

        let err = write_csv_file(&path, &[], 1.0).unwrap_err();

        assert!(matches!(err, Error::Open { path: p, .. } if p == path));
    }
}
