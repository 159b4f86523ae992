use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use cineplan::{console, solve_file, AppError, SolverConfig, SolverType};

/// Schedule festival films over the fewest days.
#[derive(Debug, Parser)]
#[command(name = "cineplan", version, about)]
struct Cli {
    /// Festival description to read.
    input: PathBuf,

    /// File rewritten with the best plan every time one is found.
    output: PathBuf,

    /// Solver to run; overrides the configuration file.
    #[arg(long, value_enum)]
    solver: Option<SolverArg>,

    /// TOML or YAML solver configuration.
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Random seed for reproducible runs.
    #[arg(long)]
    seed: Option<u64>,

    /// Stop after this many seconds.
    #[arg(long)]
    seconds: Option<u64>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum SolverArg {
    Exhaustive,
    Greedy,
    #[value(alias = "sa")]
    SimulatedAnnealing,
}

impl From<SolverArg> for SolverType {
    fn from(arg: SolverArg) -> Self {
        match arg {
            SolverArg::Exhaustive => SolverType::Exhaustive,
            SolverArg::Greedy => SolverType::Greedy,
            SolverArg::SimulatedAnnealing => SolverType::SimulatedAnnealing,
        }
    }
}

impl Cli {
    fn solver_config(&self) -> Result<SolverConfig, AppError> {
        let mut config = match &self.config {
            Some(path) => SolverConfig::load(path)?,
            None => SolverConfig::default(),
        };
        if let Some(solver) = self.solver {
            config = config.with_solver(solver.into());
        }
        if let Some(seed) = self.seed {
            config = config.with_random_seed(seed);
        }
        if let Some(seconds) = self.seconds {
            config = config.with_termination_seconds(seconds);
        }
        config.validate()?;
        Ok(config)
    }
}

fn run(cli: &Cli) -> Result<(), AppError> {
    let config = cli.solver_config()?;
    solve_file(&cli.input, &cli.output, &config)?;
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    console::init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
