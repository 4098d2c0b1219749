//! Command-line entry point: load the data file, run the sweep with the
//! chosen formulation, and report results. Any failure is written to the
//! error log and terminates the run; output from iterations that already
//! completed stays on disk.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use log::{error, info};

use pareto_tsp::io::{load_cost_model, write_error_log, Reporter};
use pareto_tsp::{sweep, Formulation, Result};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum FormulationArg {
    /// Static Miller-Tucker-Zemlin order constraints.
    Mtz,
    /// Dynamic Dantzig-Fulkerson-Johnson subtour cuts.
    Dfj,
}

impl From<FormulationArg> for Formulation {
    fn from(arg: FormulationArg) -> Self {
        match arg {
            FormulationArg::Mtz => Formulation::Mtz,
            FormulationArg::Dfj => Formulation::Dfj,
        }
    }
}

#[derive(Debug, Parser)]
#[command(version, about = "Bi-objective TSP Pareto sweep via MILP")]
struct Cli {
    /// Data file holding the time and distance matrices.
    #[arg(long, default_value = "Data.dat")]
    data: PathBuf,

    /// Directory receiving the result CSV and route files.
    #[arg(long, default_value = "ResultFiles")]
    out_dir: PathBuf,

    /// Which formulation to run.
    #[arg(long, value_enum, default_value_t = FormulationArg::Dfj)]
    formulation: FormulationArg,

    /// Error log written when the run fails.
    #[arg(long, default_value = "ErrorLog.txt")]
    error_log: PathBuf,
}

fn run(cli: &Cli) -> Result<()> {
    let costs = load_cost_model(&cli.data)?;
    info!(
        "loaded {} nodes from {}",
        costs.len(),
        cli.data.display()
    );

    let reporter = Reporter::create(&cli.out_dir)?;
    let points = sweep::run(&costs, cli.formulation.into(), &reporter)?;
    info!(
        "sweep complete: {} Pareto points in {}",
        points.len(),
        reporter.csv_path().display()
    );
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{}: {err}", err.category());
            if let Err(log_err) = write_error_log(&cli.error_log, &err) {
                error!("failed to write {}: {log_err}", cli.error_log.display());
            }
            ExitCode::FAILURE
        }
    }
}
