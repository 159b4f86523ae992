//! The solver trait shared by every algorithm.

use std::fmt::Debug;

use cineplan_core::ProblemModel;
use tracing::info;

use crate::scope::SolverScope;

/// A strategy that assigns every film of a model to days.
///
/// Solvers publish each improved plan through
/// [`SolverScope::update_best`], so the scope's sink always holds the best
/// plan found so far, even if the run is cut short.
pub trait Solver: Debug {
    fn solve(&mut self, model: &ProblemModel, solver_scope: &mut SolverScope<'_>);

    /// Returns the solver name used in log events.
    fn solver_name(&self) -> &'static str;
}

pub(crate) fn log_solve_start(solver: &'static str, model: &ProblemModel, seed: u64) {
    info!(
        event = "solve_start",
        solver,
        films = model.film_count(),
        restrictions = model.restriction_count(),
        cinemas = model.capacity(),
        lower_bound_days = model.lower_bound_days(),
        seed,
    );
}

pub(crate) fn log_solve_end(solver: &'static str, solver_scope: &SolverScope<'_>) {
    let duration = solver_scope.elapsed();
    let steps = solver_scope.step_count();
    let speed = if duration.as_secs_f64() > 0.0 {
        (steps as f64 / duration.as_secs_f64()) as u64
    } else {
        0
    };

    info!(
        event = "solve_end",
        solver,
        days = solver_scope.best_days().unwrap_or(0),
        proven_optimal = solver_scope.is_proven_optimal(),
        duration_ms = duration.as_millis() as u64,
        steps,
        cycles = solver_scope.cycle_count(),
        speed,
    );
}
