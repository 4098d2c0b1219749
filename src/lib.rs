//! # pareto-tsp
//!
//! Exact bi-objective Traveling-Salesman solving over a weighted complete
//! directed graph. A convex weighting of two objectives (travel time and
//! distance, each row-normalized) is swept from `(0, 1)` to `(1, 0)` in
//! steps of `0.1`, and each weighting is solved to optimality with one of
//! two MILP formulations, tracing a Pareto frontier.
//!
//! ## Modules
//!
//! - [`matrix`] — Dense square matrices and row-wise unit-vector scaling
//! - [`model`] — Cost model: raw + normalized matrices per objective
//! - [`weights`] — The fixed 11-step convex weighting sweep
//! - [`subtour`] — Shortest-cycle detection over an assignment solution
//! - [`solver`] — Retained MILP model over the external engine
//! - [`formulation`] — Static (MTZ) and dynamic cutting-plane (DFJ) models
//! - [`sweep`] — The Pareto sweep driver
//! - [`io`] — Data-file reader, result CSV, route files, error log

pub mod error;
pub mod formulation;
pub mod io;
pub mod matrix;
pub mod model;
pub mod solver;
pub mod subtour;
pub mod sweep;
pub mod weights;

pub use error::{Error, Result};
pub use formulation::Formulation;
pub use model::CostModel;
