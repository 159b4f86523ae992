//! Exhaustive search using branch-and-bound.
//!
//! Explores every partition of the films into capacity-bounded,
//! restriction-free days, depth first, pruning branches that cannot beat
//! the best day count found so far. Each improvement is published as soon
//! as it is found, so an interrupted run still leaves its best plan behind.
//!
//! # Search tree
//!
//! A node is a partial plan whose last day is still open. Its children are:
//!
//! - every unplaced film with a higher index than the open day's last film
//!   that is compatible with the open day, while the day has room;
//! - closing the open day and starting the next one with the smallest
//!   unplaced film.
//!
//! Films enter a day in increasing index order and days are started by
//! their smallest film, so every partition is visited exactly once.

mod search;

use cineplan_config::ExhaustiveSearchConfig;
use cineplan_core::{Plan, ProblemModel};
use tracing::info;

use crate::scope::SolverScope;
use crate::solver::{log_solve_end, log_solve_start, Solver};

use search::BranchAndBound;

/// Provably optimal solver; worst-case exponential in the film count.
///
/// # Example
///
/// ```
/// use cineplan_core::ProblemModel;
/// use cineplan_solver::{CollectingSink, ExhaustiveSolver, Solver, SolverScope};
///
/// let model = ProblemModel::new(["A", "B", "C", "D"], [("A", "B"), ("C", "D")], 2).unwrap();
/// let mut sink = CollectingSink::new();
/// let mut scope = SolverScope::new(&mut sink);
/// ExhaustiveSolver::new().solve(&model, &mut scope);
/// assert!(scope.is_proven_optimal());
/// assert_eq!(scope.best_days(), Some(2));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ExhaustiveSolver {
    node_limit: Option<u64>,
}

impl ExhaustiveSolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: &ExhaustiveSearchConfig) -> Self {
        Self {
            node_limit: config.node_limit,
        }
    }

    /// Gives up after exploring `limit` nodes; the result is then not proven optimal.
    pub fn with_node_limit(mut self, limit: u64) -> Self {
        self.node_limit = Some(limit);
        self
    }
}

impl Solver for ExhaustiveSolver {
    fn solve(&mut self, model: &ProblemModel, solver_scope: &mut SolverScope<'_>) {
        log_solve_start(self.solver_name(), model, solver_scope.seed());

        solver_scope.update_best(Plan::one_film_per_day(model));

        let mut search = BranchAndBound::new(model, self.node_limit);
        search.explore(solver_scope);

        if search.completed() {
            solver_scope.mark_proven_optimal();
        } else {
            info!(
                event = "search_stopped",
                nodes = search.nodes_explored(),
                best_days = search.best_days(),
            );
        }

        log_solve_end(self.solver_name(), solver_scope);
    }

    fn solver_name(&self) -> &'static str {
        "ExhaustiveSearch"
    }
}
