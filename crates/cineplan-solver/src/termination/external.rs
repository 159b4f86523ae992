//! External termination via AtomicBool flag.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use super::Termination;
use crate::scope::SolverScope;

/// Terminates when an external flag is set.
///
/// Allows another thread or a signal handler to stop a run that would
/// otherwise go on forever.
///
/// # Example
///
/// ```
/// use std::sync::atomic::{AtomicBool, Ordering};
/// use std::sync::Arc;
/// use cineplan_solver::termination::ExternalTermination;
///
/// let flag = Arc::new(AtomicBool::new(false));
/// let term = ExternalTermination::new(flag.clone());
///
/// // Later:
/// flag.store(true, Ordering::SeqCst);
/// ```
#[derive(Debug, Clone)]
pub struct ExternalTermination {
    flag: Arc<AtomicBool>,
}

impl ExternalTermination {
    /// Creates a termination that checks the given flag.
    pub fn new(flag: Arc<AtomicBool>) -> Self {
        Self { flag }
    }
}

impl Termination for ExternalTermination {
    fn is_terminated(&self, _solver_scope: &SolverScope<'_>) -> bool {
        self.flag.load(Ordering::Relaxed)
    }
}
