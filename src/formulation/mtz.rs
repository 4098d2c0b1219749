//! Static Miller-Tucker-Zemlin formulation.
//!
//! Auxiliary integer order variables, one per node, with big-M inequalities
//! that forbid every cycle not passing through node 0. No cut loop: a single
//! solve yields the tour.

use log::debug;

use crate::error::Result;
use crate::formulation::{add_degree_constraints, AssignmentVars, TourSolution};
use crate::model::CostModel;
use crate::solver::{Cmp, MilpModel};
use crate::weights::WeightVector;

/// Builds and solves the MTZ model for one weighting.
///
/// For every pair `(i, j)` with `i >= 1` and `i != j` the model carries
///
/// ```text
/// order[i] - order[j] + n * x[i][j] <= n - 1
/// ```
///
/// with `order[k]` integer in `[0, n-1]`. Node 0 is the anchor: no ordering
/// constraint originates from it, so the one cycle through node 0 survives.
pub fn solve(costs: &CostModel, weights: WeightVector) -> Result<TourSolution> {
    let n = costs.len();
    let mut model = MilpModel::new();
    let vars = AssignmentVars::build(&mut model, costs, weights);
    add_degree_constraints(&mut model, &vars);

    let order: Vec<_> = (0..n)
        .map(|_| model.add_integer_var(0.0, 0, n as i32 - 1))
        .collect();
    for i in 1..n {
        for j in 0..n {
            if i == j {
                continue;
            }
            model.add_constraint(
                vec![(order[i], 1.0), (order[j], -1.0), (vars.var(i, j), n as f64)],
                Cmp::Le,
                n as f64 - 1.0,
            );
        }
    }
    debug!(
        "MTZ model built: {} vars, {} constraints",
        model.num_vars(),
        model.num_constraints()
    );

    let solved = model.solve()?;
    Ok(TourSolution {
        assignment: vars.extract(&solved),
        objective: solved.objective(),
        elapsed: solved.elapsed(),
        order: Some(order.iter().map(|&u| solved.value(u)).collect()),
        cuts_added: 0,
    })
}
