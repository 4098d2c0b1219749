//! Dynamic Dantzig-Fulkerson-Johnson formulation.
//!
//! Starts from the bare assignment relaxation and eliminates illegal
//! sub-cycles on demand: solve, detect the shortest cycle in the solution,
//! and if it spans fewer than `n` nodes, register a cut forbidding it and
//! solve again. Cuts accumulate within one model and die with it.

use log::debug;

use crate::error::Result;
use crate::formulation::{add_degree_constraints, AssignmentVars, TourSolution};
use crate::model::CostModel;
use crate::solver::{Cmp, MilpModel, Var};
use crate::subtour::find_shortest_cycle;
use crate::weights::WeightVector;

/// Builds the cut forbidding the given subtour.
///
/// The inequality sums `x[tour[i]][tour[j]]` over **every** ordered pair of
/// the subtour's nodes, the `i = j` self-loop variables included, with
/// right-hand side `k - 1` for a subtour of length `k`. Summing the diagonal
/// terms is weaker than the textbook off-diagonal subtour-elimination cut;
/// it is kept as-is deliberately (the self-loop variables are otherwise
/// unconstrained and carry no objective weight, so at an optimum they stay
/// at zero and the cut still severs the detected cycle).
pub fn subtour_cut(vars: &AssignmentVars, tour: &[usize]) -> (Vec<(Var, f64)>, f64) {
    let mut terms = Vec::with_capacity(tour.len() * tour.len());
    for &i in tour {
        for &j in tour {
            terms.push((vars.var(i, j), 1.0));
        }
    }
    (terms, tour.len() as f64 - 1.0)
}

/// Builds and solves the DFJ model for one weighting.
///
/// Loop invariant: every registered cut excludes at least the 0/1 assignment
/// that triggered it, and the number of distinct 0/1 assignments is finite,
/// so the loop terminates. Solver failure at any point aborts the iteration
/// and propagates.
pub fn solve(costs: &CostModel, weights: WeightVector) -> Result<TourSolution> {
    let n = costs.len();
    let mut model = MilpModel::new();
    let vars = AssignmentVars::build(&mut model, costs, weights);
    add_degree_constraints(&mut model, &vars);
    debug!(
        "DFJ model built: {} vars, {} constraints",
        model.num_vars(),
        model.num_constraints()
    );

    let mut elapsed = std::time::Duration::ZERO;
    let mut cuts_added = 0;
    loop {
        let solved = model.solve()?;
        elapsed += solved.elapsed();

        let assignment = vars.extract(&solved);
        let cycle = find_shortest_cycle(&assignment);
        if cycle.len() == n {
            debug!("full tour reached after {cuts_added} cuts");
            return Ok(TourSolution {
                assignment,
                objective: solved.objective(),
                elapsed,
                order: None,
                cuts_added,
            });
        }

        debug!("subtour of length {} detected: {:?}", cycle.len(), cycle);
        let (terms, rhs) = subtour_cut(&vars, &cycle);
        model.add_constraint(terms, Cmp::Le, rhs);
        cuts_added += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::SquareMatrix;

    /// Two cheap pairs (0-1 and 2-3) with expensive cross edges, so the
    /// relaxation first settles on two 2-cycles.
    fn paired_instance() -> CostModel {
        let m = SquareMatrix::from_rows(vec![
            vec![0.0, 1.0, 10.0, 10.0],
            vec![1.0, 0.0, 10.0, 10.0],
            vec![10.0, 10.0, 0.0, 1.0],
            vec![10.0, 10.0, 1.0, 0.0],
        ])
        .unwrap();
        CostModel::new(m.clone(), m)
    }

    #[test]
    fn cut_covers_the_full_cross_product() {
        let costs = paired_instance();
        let mut model = MilpModel::new();
        let vars = AssignmentVars::build(&mut model, &costs, WeightVector::from_time_factor(0.5));
        let (terms, rhs) = subtour_cut(&vars, &[0, 1]);
        // 2x2 ordered pairs, self-loops included.
        assert_eq!(terms.len(), 4);
        assert!((rhs - 1.0).abs() < 1e-12);
        assert!(terms.contains(&(vars.var(0, 0), 1.0)));
        assert!(terms.contains(&(vars.var(0, 1), 1.0)));
        assert!(terms.contains(&(vars.var(1, 0), 1.0)));
        assert!(terms.contains(&(vars.var(1, 1), 1.0)));
    }

    #[test]
    fn two_cheap_pairs_converge_to_a_full_tour() {
        let costs = paired_instance();
        let solution = solve(&costs, WeightVector::from_time_factor(0.5)).unwrap();
        let cycle = find_shortest_cycle(&solution.assignment);
        assert_eq!(cycle.len(), 4, "accepted tour must span all nodes");
        assert!(solution.cuts_added >= 1, "the paired instance needs a cut");
    }

    #[test]
    fn already_connected_instance_needs_no_cut() {
        // Costs strongly favoring the cycle 0 -> 1 -> 2 -> 3 -> 0.
        let m = SquareMatrix::from_rows(vec![
            vec![0.0, 1.0, 50.0, 50.0],
            vec![50.0, 0.0, 1.0, 50.0],
            vec![50.0, 50.0, 0.0, 1.0],
            vec![1.0, 50.0, 50.0, 0.0],
        ])
        .unwrap();
        let costs = CostModel::new(m.clone(), m);
        let solution = solve(&costs, WeightVector::from_time_factor(1.0)).unwrap();
        assert_eq!(solution.cuts_added, 0);
        assert_eq!(find_shortest_cycle(&solution.assignment).len(), 4);
    }

    #[test]
    fn dfj_and_mtz_agree_on_the_objective() {
        let costs = paired_instance();
        let weights = WeightVector::from_time_factor(0.3);
        let dfj = solve(&costs, weights).unwrap();
        let mtz = crate::formulation::mtz::solve(&costs, weights).unwrap();
        assert!((dfj.objective - mtz.objective).abs() < 1e-6);
    }
}
