//! Interface to the external MILP engine.
//!
//! The formulations never talk to [`microlp`] directly; they describe
//! variables and linear constraints against [`MilpModel`] and read values
//! back from a [`Solved`] snapshot. This keeps the engine swappable and the
//! formulation code free of solver-specific types.

mod model;

pub use model::{Cmp, MilpModel, Solved, Var};
