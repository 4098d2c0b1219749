//! The Pareto sweep: one solve per convex weighting, output routed to the
//! reporter as each iteration completes.

use log::info;

use crate::error::Result;
use crate::formulation::{dfj, mtz, Formulation, TourSolution};
use crate::io::{Reporter, ResultRow};
use crate::matrix::SquareMatrix;
use crate::model::CostModel;
use crate::weights::{sweep, WeightVector};

/// One point of the traced Pareto frontier.
#[derive(Debug, Clone)]
pub struct ParetoPoint {
    /// The weighting this point was solved under.
    pub weights: WeightVector,
    /// Optimal weighted-normalized objective.
    pub objective: f64,
    /// Realized tour total over the raw time matrix.
    pub time_total: f64,
    /// Realized tour total over the raw distance matrix.
    pub distance_total: f64,
}

/// Sums a raw cost matrix over the selected edges of an assignment.
///
/// Entries are weighted by the solved variable values, so at an integral
/// optimum this is exactly the tour total.
pub fn realized_total(raw: &SquareMatrix, assignment: &SquareMatrix) -> f64 {
    let n = raw.size();
    let mut total = 0.0;
    for i in 0..n {
        for j in 0..n {
            total += raw.get(i, j) * assignment.get(i, j);
        }
    }
    total
}

/// Runs the full 11-step sweep with the chosen formulation.
///
/// Each weighting gets a fresh model; the model and any cuts it accumulated
/// are dropped when its iteration ends. One CSV row and one route file are
/// written per completed iteration before the next one starts, so output
/// from finished iterations survives a later failure. The first failing
/// iteration aborts the sweep and propagates its error.
pub fn run(costs: &CostModel, formulation: Formulation, reporter: &Reporter) -> Result<Vec<ParetoPoint>> {
    let mut points = Vec::new();
    for (counter, weights) in sweep().enumerate() {
        info!(
            "iteration {counter}: time_factor={:.1}, distance_factor={:.1}",
            weights.time_factor, weights.distance_factor
        );

        let solution: TourSolution = match formulation {
            Formulation::Mtz => mtz::solve(costs, weights)?,
            Formulation::Dfj => dfj::solve(costs, weights)?,
        };

        let time_total = realized_total(costs.time(), &solution.assignment);
        let distance_total = realized_total(costs.distance(), &solution.assignment);
        info!(
            "iteration {counter}: objective={:.6}, time_total={time_total}, distance_total={distance_total}, cuts={}",
            solution.objective, solution.cuts_added
        );

        reporter.append_row(&ResultRow {
            time_factor: weights.time_factor,
            distance_factor: weights.distance_factor,
            elapsed_seconds: solution.elapsed.as_secs_f64(),
            objective_value: solution.objective,
            time_total,
            distance_total,
        })?;
        reporter.write_route(counter, &solution)?;

        points.push(ParetoPoint {
            weights,
            objective: solution.objective,
            time_total,
            distance_total,
        });
    }
    Ok(points)
}
