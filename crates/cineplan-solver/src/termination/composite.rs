//! Composite termination.

use super::Termination;
use crate::scope::SolverScope;

/// Terminates when ANY child terminates.
///
/// # Examples
///
/// ```
/// use cineplan_solver::termination::{
///     CycleCountTermination, OrTermination, Termination, TimeTermination,
/// };
///
/// // Terminate after 30 seconds OR 50 restarts
/// let children: Vec<Box<dyn Termination>> = vec![
///     Box::new(TimeTermination::seconds(30)),
///     Box::new(CycleCountTermination::new(50)),
/// ];
/// let termination = OrTermination::new(children);
/// assert_eq!(termination.len(), 2);
/// ```
#[derive(Debug, Default)]
pub struct OrTermination {
    children: Vec<Box<dyn Termination>>,
}

impl OrTermination {
    pub fn new(children: Vec<Box<dyn Termination>>) -> Self {
        Self { children }
    }

    pub fn push(&mut self, child: Box<dyn Termination>) {
        self.children.push(child);
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

impl Termination for OrTermination {
    fn is_terminated(&self, solver_scope: &SolverScope<'_>) -> bool {
        self.children
            .iter()
            .any(|child| child.is_terminated(solver_scope))
    }
}
