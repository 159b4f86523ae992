//! Best day count termination.

use super::Termination;
use crate::scope::SolverScope;

/// Terminates once a plan with at most `days` days has been published.
///
/// Pairs naturally with [`ProblemModel::lower_bound_days`]: once that bound
/// is reached no solver can do better.
///
/// [`ProblemModel::lower_bound_days`]: cineplan_core::ProblemModel::lower_bound_days
#[derive(Debug, Clone, Copy)]
pub struct BestDaysTermination {
    days: usize,
}

impl BestDaysTermination {
    pub fn new(days: usize) -> Self {
        Self { days }
    }
}

impl Termination for BestDaysTermination {
    fn is_terminated(&self, solver_scope: &SolverScope<'_>) -> bool {
        solver_scope.best_days().is_some_and(|best| best <= self.days)
    }
}
