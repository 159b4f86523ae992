//! Step and cycle count terminations.

use super::Termination;
use crate::scope::SolverScope;

/// Terminates after a number of steps (search nodes or annealing iterations).
#[derive(Debug, Clone, Copy)]
pub struct StepCountTermination {
    limit: u64,
}

impl StepCountTermination {
    pub fn new(limit: u64) -> Self {
        Self { limit }
    }
}

impl Termination for StepCountTermination {
    fn is_terminated(&self, solver_scope: &SolverScope<'_>) -> bool {
        solver_scope.step_count() >= self.limit
    }
}

/// Terminates once `limit` annealing cycles have completed.
///
/// A cycle only counts after its last iteration, so exactly `limit` cycles
/// run to completion.
#[derive(Debug, Clone, Copy)]
pub struct CycleCountTermination {
    limit: u64,
}

impl CycleCountTermination {
    pub fn new(limit: u64) -> Self {
        Self { limit }
    }
}

impl Termination for CycleCountTermination {
    fn is_terminated(&self, solver_scope: &SolverScope<'_>) -> bool {
        solver_scope.cycle_count() >= self.limit
    }
}
