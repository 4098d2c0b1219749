//! A retained-mode MILP model over the `microlp` engine.

use std::time::{Duration, Instant};

use log::debug;
use microlp::{ComparisonOp, LinearExpr, OptimizationDirection, Problem};

use crate::error::Result;

/// Handle to a decision variable in a [`MilpModel`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Var(usize);

/// Comparison operator of a linear constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cmp {
    /// Left-hand side equals the right-hand side.
    Eq,
    /// Left-hand side is at most the right-hand side.
    Le,
    /// Left-hand side is at least the right-hand side.
    Ge,
}

impl From<Cmp> for ComparisonOp {
    fn from(cmp: Cmp) -> Self {
        match cmp {
            Cmp::Eq => ComparisonOp::Eq,
            Cmp::Le => ComparisonOp::Le,
            Cmp::Ge => ComparisonOp::Ge,
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum VarKind {
    Binary,
    Integer { min: i32, max: i32 },
    Continuous { min: f64, max: f64 },
}

#[derive(Debug, Clone, Copy)]
struct VarSpec {
    kind: VarKind,
    obj_coeff: f64,
}

#[derive(Debug, Clone)]
struct Constraint {
    terms: Vec<(Var, f64)>,
    cmp: Cmp,
    rhs: f64,
}

/// One minimization model: variables, objective coefficients, constraints.
///
/// The model is retained on our side; each [`solve`](MilpModel::solve) call
/// hands the current description to the engine and blocks until it returns.
/// Constraints may be added after a solve (that is how subtour cuts arrive),
/// and the next solve sees them. Dropping the model releases everything —
/// nothing is shared across sweep iterations.
///
/// # Examples
///
/// ```
/// use pareto_tsp::solver::{Cmp, MilpModel};
///
/// // minimize x + 2y  s.t.  x + y >= 1,  x, y binary
/// let mut model = MilpModel::new();
/// let x = model.add_binary_var(1.0);
/// let y = model.add_binary_var(2.0);
/// model.add_constraint(vec![(x, 1.0), (y, 1.0)], Cmp::Ge, 1.0);
///
/// let solved = model.solve().unwrap();
/// assert!((solved.objective() - 1.0).abs() < 1e-6);
/// assert!(solved.value(x) > 0.5);
/// ```
#[derive(Debug, Default)]
pub struct MilpModel {
    vars: Vec<VarSpec>,
    constraints: Vec<Constraint>,
}

impl MilpModel {
    /// Creates an empty minimization model.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a 0/1 variable with the given objective coefficient.
    pub fn add_binary_var(&mut self, obj_coeff: f64) -> Var {
        self.push_var(VarSpec {
            kind: VarKind::Binary,
            obj_coeff,
        })
    }

    /// Adds an integer variable bounded to `[min, max]`.
    pub fn add_integer_var(&mut self, obj_coeff: f64, min: i32, max: i32) -> Var {
        self.push_var(VarSpec {
            kind: VarKind::Integer { min, max },
            obj_coeff,
        })
    }

    /// Adds a continuous variable bounded to `[min, max]`.
    pub fn add_continuous_var(&mut self, obj_coeff: f64, min: f64, max: f64) -> Var {
        self.push_var(VarSpec {
            kind: VarKind::Continuous { min, max },
            obj_coeff,
        })
    }

    fn push_var(&mut self, spec: VarSpec) -> Var {
        let var = Var(self.vars.len());
        self.vars.push(spec);
        var
    }

    /// Adds a linear constraint `sum(coeff * var) cmp rhs`.
    ///
    /// Valid before or after a solve; cuts added between solves take effect
    /// on the next solve.
    pub fn add_constraint(
        &mut self,
        terms: impl IntoIterator<Item = (Var, f64)>,
        cmp: Cmp,
        rhs: f64,
    ) {
        self.constraints.push(Constraint {
            terms: terms.into_iter().collect(),
            cmp,
            rhs,
        });
    }

    /// Number of variables in the model.
    pub fn num_vars(&self) -> usize {
        self.vars.len()
    }

    /// Number of constraints in the model, cuts included.
    pub fn num_constraints(&self) -> usize {
        self.constraints.len()
    }

    /// Solves the model to optimality, blocking until the engine returns.
    ///
    /// Infeasibility and every other engine failure surface as
    /// [`Error::Solver`](crate::Error::Solver).
    pub fn solve(&self) -> Result<Solved> {
        let mut problem = Problem::new(OptimizationDirection::Minimize);
        let handles: Vec<microlp::Variable> = self
            .vars
            .iter()
            .map(|spec| match spec.kind {
                VarKind::Binary => problem.add_integer_var(spec.obj_coeff, (0, 1)),
                VarKind::Integer { min, max } => problem.add_integer_var(spec.obj_coeff, (min, max)),
                VarKind::Continuous { min, max } => problem.add_var(spec.obj_coeff, (min, max)),
            })
            .collect();

        for constraint in &self.constraints {
            let mut expr = LinearExpr::empty();
            for &(var, coeff) in &constraint.terms {
                expr.add(handles[var.0], coeff);
            }
            problem.add_constraint(expr, constraint.cmp.into(), constraint.rhs);
        }

        debug!(
            "solving model: {} vars, {} constraints",
            self.vars.len(),
            self.constraints.len()
        );
        let started = Instant::now();
        let solution = problem.solve()?;
        let elapsed = started.elapsed();
        debug!(
            "solved in {:.3}s, objective {}",
            elapsed.as_secs_f64(),
            solution.objective()
        );

        Ok(Solved {
            values: handles.iter().map(|&h| solution[h]).collect(),
            objective: solution.objective(),
            elapsed,
        })
    }
}

/// A snapshot of variable values after a successful solve.
#[derive(Debug, Clone)]
pub struct Solved {
    values: Vec<f64>,
    objective: f64,
    elapsed: Duration,
}

impl Solved {
    /// Value of the given variable at the optimum.
    pub fn value(&self, var: Var) -> f64 {
        self.values[var.0]
    }

    /// Optimal objective value.
    pub fn objective(&self) -> f64 {
        self.objective
    }

    /// Wall-clock time the engine spent in the solve.
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }
}
