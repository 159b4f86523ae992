//! Termination conditions for solver runs.
//!
//! The exhaustive solver ends on its own, but the annealing solver restarts
//! forever unless one of these conditions stops it. Every solver keeps the
//! last pushed plan valid, so stopping at any point is safe.

mod best_days;
mod composite;
mod count;
mod external;
mod time;

use std::fmt::Debug;

use crate::scope::SolverScope;

pub use best_days::BestDaysTermination;
pub use composite::OrTermination;
pub use count::{CycleCountTermination, StepCountTermination};
pub use external::ExternalTermination;
pub use time::TimeTermination;

/// Trait for determining when to stop solving.
pub trait Termination: Debug {
    /// Returns true if solving should terminate.
    fn is_terminated(&self, solver_scope: &SolverScope<'_>) -> bool;
}

/// Never terminates; the run ends when the solver does or the process is stopped.
#[derive(Debug, Clone, Copy, Default)]
pub struct NeverTerminate;

impl Termination for NeverTerminate {
    fn is_terminated(&self, _solver_scope: &SolverScope<'_>) -> bool {
        false
    }
}

#[cfg(test)]
mod tests;
