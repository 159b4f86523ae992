//! Time-based termination.

use std::time::Duration;

use super::Termination;
use crate::scope::SolverScope;

/// Terminates after a time limit, measured by the scope's clock.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use cineplan_solver::termination::TimeTermination;
///
/// // Terminate after 30 seconds
/// let term = TimeTermination::new(Duration::from_secs(30));
///
/// // Or use convenience constructors
/// let term = TimeTermination::seconds(30);
/// let term = TimeTermination::millis(500);
/// ```
#[derive(Debug, Clone)]
pub struct TimeTermination {
    limit: Duration,
}

impl TimeTermination {
    pub fn new(limit: Duration) -> Self {
        Self { limit }
    }

    pub fn millis(ms: u64) -> Self {
        Self::new(Duration::from_millis(ms))
    }

    pub fn seconds(secs: u64) -> Self {
        Self::new(Duration::from_secs(secs))
    }
}

impl Termination for TimeTermination {
    fn is_terminated(&self, solver_scope: &SolverScope<'_>) -> bool {
        solver_scope.elapsed() >= self.limit
    }
}
