//! MILP formulations of the weighted tour problem.
//!
//! Both formulations share the assignment core: one binary edge variable per
//! ordered node pair, degree constraints forcing one outgoing and one
//! incoming selected edge per node, and an objective mixing the two
//! normalized cost matrices under the current weighting. They differ in how
//! subtours are excluded:
//!
//! - [`mtz`] — static order variables with big-M inequalities (one solve).
//! - [`dfj`] — assignment relaxation plus on-demand subtour cuts
//!   (solve → detect → cut loop).

pub mod dfj;
pub mod mtz;

use std::time::Duration;

use crate::matrix::SquareMatrix;
use crate::model::CostModel;
use crate::solver::{Cmp, MilpModel, Solved, Var};
use crate::weights::WeightVector;

/// Which formulation to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Formulation {
    /// Static Miller-Tucker-Zemlin order constraints.
    Mtz,
    /// Dynamic Dantzig-Fulkerson-Johnson subtour cuts.
    Dfj,
}

/// The accepted tour for one weighting, as produced by either formulation.
#[derive(Debug, Clone)]
pub struct TourSolution {
    /// Edge-variable values at the optimum (`> 0.5` means selected).
    pub assignment: SquareMatrix,
    /// Optimal objective value under the weighted normalized costs.
    pub objective: f64,
    /// Wall-clock time spent solving (summed over re-solves for DFJ).
    pub elapsed: Duration,
    /// Order-variable values, present for the MTZ formulation only.
    pub order: Option<Vec<f64>>,
    /// Number of subtour cuts added, zero for MTZ.
    pub cuts_added: usize,
}

impl TourSolution {
    /// Iterates the selected edges `(i, j)` in row-major order.
    pub fn selected_edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let n = self.assignment.size();
        (0..n).flat_map(move |i| {
            (0..n)
                .filter(move |&j| self.assignment.get(i, j) > crate::subtour::SELECTED)
                .map(move |j| (i, j))
        })
    }
}

/// The grid of edge-selection variables for one model.
///
/// The full n×n grid is created, diagonal included: the self-loop variables
/// carry zero objective weight and appear in no degree constraint, but the
/// DFJ cut deliberately sums over them (see [`dfj::subtour_cut`]).
#[derive(Debug)]
pub struct AssignmentVars {
    vars: Vec<Var>,
    n: usize,
}

impl AssignmentVars {
    /// Adds the edge variables and their objective coefficients to `model`.
    ///
    /// The coefficient of `x[i][j]` for `i != j` is
    /// `time_factor * time_normalized[i][j] + distance_factor * distance_normalized[i][j]`.
    pub fn build(model: &mut MilpModel, costs: &CostModel, weights: WeightVector) -> Self {
        let n = costs.len();
        let mut vars = Vec::with_capacity(n * n);
        for i in 0..n {
            for j in 0..n {
                let obj_coeff = if i != j {
                    weights.time_factor * costs.time_normalized().get(i, j)
                        + weights.distance_factor * costs.distance_normalized().get(i, j)
                } else {
                    0.0
                };
                vars.push(model.add_binary_var(obj_coeff));
            }
        }
        Self { vars, n }
    }

    /// Handle of the edge variable `x[i][j]`.
    pub fn var(&self, i: usize, j: usize) -> Var {
        self.vars[i * self.n + j]
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.n
    }

    /// Returns `true` if the grid is empty.
    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Reads the solved edge values back into an assignment matrix.
    pub fn extract(&self, solved: &Solved) -> SquareMatrix {
        let mut assignment = SquareMatrix::new(self.n);
        for i in 0..self.n {
            for j in 0..self.n {
                assignment.set(i, j, solved.value(self.var(i, j)));
            }
        }
        assignment
    }
}

/// Adds the degree constraints: each node has exactly one selected outgoing
/// and one selected incoming edge, self-loops excluded.
pub fn add_degree_constraints(model: &mut MilpModel, vars: &AssignmentVars) {
    let n = vars.len();
    for j in 0..n {
        let incoming: Vec<_> = (0..n)
            .filter(|&i| i != j)
            .map(|i| (vars.var(i, j), 1.0))
            .collect();
        model.add_constraint(incoming, Cmp::Eq, 1.0);
    }
    for i in 0..n {
        let outgoing: Vec<_> = (0..n)
            .filter(|&j| j != i)
            .map(|j| (vars.var(i, j), 1.0))
            .collect();
        model.add_constraint(outgoing, Cmp::Eq, 1.0);
    }
}
