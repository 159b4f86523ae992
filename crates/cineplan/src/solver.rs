//! Solver entry points that hide the scope and termination wiring.

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use cineplan_config::SolverConfig;
use cineplan_core::{FestivalLoader, ProblemModel};
use cineplan_solver::{
    Clock, PlanSink, SolverBuilder, SolverScope, SystemClock, TerminationBuilder,
};

use crate::error::AppError;
use crate::output::FileSink;

/// What a finished run achieved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub solver: &'static str,
    pub seed: u64,
    /// Day count of the last published plan.
    pub days: Option<usize>,
    pub proven_optimal: bool,
    pub steps: u64,
    pub elapsed: Duration,
}

/// Runs the configured solver on `model`, pushing every improved plan to `sink`.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use cineplan::run_solver;
/// use cineplan_config::{SolverConfig, SolverType};
/// use cineplan_core::ProblemModel;
/// use cineplan_solver::{CollectingSink, SystemClock};
///
/// let model = ProblemModel::new(["A", "B", "C"], [("A", "B")], 2).unwrap();
/// let config = SolverConfig::new().with_solver(SolverType::Greedy);
/// let mut sink = CollectingSink::new();
/// let summary = run_solver(&model, &config, &mut sink, Arc::new(SystemClock::new()));
/// assert_eq!(summary.days, Some(2));
/// assert_eq!(sink.len(), 1);
/// ```
pub fn run_solver(
    model: &ProblemModel,
    config: &SolverConfig,
    sink: &mut dyn PlanSink,
    clock: Arc<dyn Clock>,
) -> RunSummary {
    let mut solver = SolverBuilder::build(config);

    let mut scope = SolverScope::new(sink)
        .with_clock(clock)
        .with_termination(TerminationBuilder::build(config));
    if let Some(seed) = config.random_seed {
        scope = scope.with_seed(seed);
    }

    solver.solve(model, &mut scope);

    RunSummary {
        solver: solver.solver_name(),
        seed: scope.seed(),
        days: scope.best_days(),
        proven_optimal: scope.is_proven_optimal(),
        steps: scope.step_count(),
        elapsed: scope.elapsed(),
    }
}

/// Loads a festival from `input`, solves it and keeps `output` holding the
/// best plan found so far.
///
/// The clock starts before the input is read, so reported times include
/// loading.
///
/// # Errors
///
/// Fails on unreadable or malformed input, and when the last attempt to
/// write `output` failed.
pub fn solve_file(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    config: &SolverConfig,
) -> Result<RunSummary, AppError> {
    let clock: Arc<dyn Clock> = Arc::new(SystemClock::new());
    let festival = FestivalLoader::new().from_path(input)?;

    let mut sink = FileSink::new(output.as_ref(), &festival, clock.clone());
    let summary = run_solver(&festival.model, config, &mut sink, clock);

    if let Some(source) = sink.take_error() {
        return Err(AppError::Output {
            path: sink.path().to_path_buf(),
            source,
        });
    }
    if summary.days.is_none() {
        return Err(AppError::NoPlan);
    }
    Ok(summary)
}
