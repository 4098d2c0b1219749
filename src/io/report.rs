//! Result CSV, per-iteration route listings, and the error log.

use std::fs::{self, File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::{Error, Result};
use crate::formulation::TourSolution;

/// Name of the result CSV inside the output directory.
pub const RESULTS_FILE: &str = "results.csv";

// CSV failures are file-write failures as far as the taxonomy is concerned.
fn csv_io(err: csv::Error) -> Error {
    Error::Io(std::io::Error::new(std::io::ErrorKind::Other, err))
}

/// One row of the result CSV, one per sweep weighting.
#[derive(Debug, Clone, Serialize)]
pub struct ResultRow {
    /// Weight on the time objective.
    pub time_factor: f64,
    /// Weight on the distance objective.
    pub distance_factor: f64,
    /// Wall-clock solve time for this weighting, in seconds.
    pub elapsed_seconds: f64,
    /// Optimal objective value under the weighted normalized costs.
    pub objective_value: f64,
    /// Realized tour total over the raw time matrix.
    pub time_total: f64,
    /// Realized tour total over the raw distance matrix.
    pub distance_total: f64,
}

/// Writes sweep output into one directory: `results.csv` plus one
/// `Route-{i}.txt` per iteration.
///
/// The CSV is truncated when the reporter is created and appended to (and
/// flushed) once per iteration, so rows from completed iterations survive a
/// later failure.
#[derive(Debug)]
pub struct Reporter {
    out_dir: PathBuf,
    csv_path: PathBuf,
}

impl Reporter {
    /// Creates the output directory if needed and truncates the result CSV,
    /// leaving just the header row.
    pub fn create(out_dir: &Path) -> Result<Self> {
        fs::create_dir_all(out_dir)?;
        let csv_path = out_dir.join(RESULTS_FILE);

        let mut writer = csv::Writer::from_path(&csv_path).map_err(csv_io)?;
        writer
            .write_record([
                "time_factor",
                "distance_factor",
                "elapsed_seconds",
                "objective_value",
                "time_total",
                "distance_total",
            ])
            .map_err(csv_io)?;
        writer.flush()?;

        Ok(Self {
            out_dir: out_dir.to_owned(),
            csv_path,
        })
    }

    /// Appends one result row and flushes it to disk.
    pub fn append_row(&self, row: &ResultRow) -> Result<()> {
        let file = OpenOptions::new().append(true).open(&self.csv_path)?;
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);
        writer.serialize(row).map_err(csv_io)?;
        writer.flush()?;
        Ok(())
    }

    /// Writes the route listing for iteration `index`.
    ///
    /// One line per selected edge; when the solution carries order values
    /// (MTZ), both endpoints' values are reported on the same line.
    pub fn write_route(&self, index: usize, solution: &TourSolution) -> Result<()> {
        let path = self.out_dir.join(format!("Route-{index}.txt"));
        let mut writer = BufWriter::new(File::create(path)?);
        for (i, j) in solution.selected_edges() {
            match &solution.order {
                Some(order) => writeln!(
                    writer,
                    "From city {i} to city {j} - order[{i}] = {} and order[{j}] = {}",
                    order[i], order[j]
                )?,
                None => writeln!(writer, "From city {i} to city {j}")?,
            }
        }
        writer.flush()?;
        Ok(())
    }

    /// Path of the result CSV.
    pub fn csv_path(&self) -> &Path {
        &self.csv_path
    }
}

/// Overwrites the error log at `path` with the failure's category, message,
/// and debug detail. Called once, at the top level, before the process exits.
pub fn write_error_log(path: &Path, error: &Error) -> std::io::Result<()> {
    let mut file = File::create(path)?;
    writeln!(file, "Error Kind: {}", error.category())?;
    writeln!(file, "Message: {error}")?;
    writeln!(file, "Detail: {error:?}")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::SquareMatrix;
    use std::time::Duration;

    fn two_cycle_solution(order: Option<Vec<f64>>) -> TourSolution {
        let mut assignment = SquareMatrix::new(2);
        assignment.set(0, 1, 1.0);
        assignment.set(1, 0, 1.0);
        TourSolution {
            assignment,
            objective: 1.0,
            elapsed: Duration::from_millis(10),
            order,
            cuts_added: 0,
        }
    }

    #[test]
    fn create_truncates_and_writes_the_header() {
        let dir = tempfile::tempdir().unwrap();
        let reporter = Reporter::create(dir.path()).unwrap();
        let row = ResultRow {
            time_factor: 0.1,
            distance_factor: 0.9,
            elapsed_seconds: 0.5,
            objective_value: 2.0,
            time_total: 12.0,
            distance_total: 34.0,
        };
        reporter.append_row(&row).unwrap();

        // Re-create: the old row must be gone.
        let reporter = Reporter::create(dir.path()).unwrap();
        let content = fs::read_to_string(reporter.csv_path()).unwrap();
        assert!(content.starts_with("time_factor,"));
        assert_eq!(content.lines().count(), 1);
    }

    #[test]
    fn rows_append_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let reporter = Reporter::create(dir.path()).unwrap();
        for k in 0..3 {
            reporter
                .append_row(&ResultRow {
                    time_factor: k as f64 / 10.0,
                    distance_factor: 1.0 - k as f64 / 10.0,
                    elapsed_seconds: 0.0,
                    objective_value: 0.0,
                    time_total: 0.0,
                    distance_total: 0.0,
                })
                .unwrap();
        }
        let content = fs::read_to_string(reporter.csv_path()).unwrap();
        assert_eq!(content.lines().count(), 4);
        assert!(content.lines().nth(2).unwrap().starts_with("0.1,"));
    }

    #[test]
    fn route_listing_names_selected_edges() {
        let dir = tempfile::tempdir().unwrap();
        let reporter = Reporter::create(dir.path()).unwrap();
        reporter
            .write_route(3, &two_cycle_solution(None))
            .unwrap();
        let content = fs::read_to_string(dir.path().join("Route-3.txt")).unwrap();
        assert!(content.contains("From city 0 to city 1"));
        assert!(content.contains("From city 1 to city 0"));
    }

    #[test]
    fn route_listing_reports_order_values_when_present() {
        let dir = tempfile::tempdir().unwrap();
        let reporter = Reporter::create(dir.path()).unwrap();
        reporter
            .write_route(0, &two_cycle_solution(Some(vec![0.0, 1.0])))
            .unwrap();
        let content = fs::read_to_string(dir.path().join("Route-0.txt")).unwrap();
        assert!(content.contains("order[0] = 0 and order[1] = 1"));
    }

    #[test]
    fn error_log_is_overwritten_with_category_and_message() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ErrorLog.txt");
        fs::write(&path, "stale content").unwrap();

        let err = Error::data_format("Data.dat", "expected '['");
        write_error_log(&path, &err).unwrap();
        let content = fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("Error Kind: Data Error"));
        assert!(content.contains("expected '['"));
        assert!(!content.contains("stale content"));
    }
}
