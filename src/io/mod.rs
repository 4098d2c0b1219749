//! File formats: the tokenized input data file, the result CSV, the
//! per-iteration route listings, and the error log.

mod data;
mod report;

pub use data::{load_cost_model, DataReader};
pub use report::{write_error_log, Reporter, ResultRow, RESULTS_FILE};
