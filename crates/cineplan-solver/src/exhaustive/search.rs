//! Depth-first branch-and-bound state.

use cineplan_core::{Day, FilmId, Plan, ProblemModel};

use crate::scope::SolverScope;

/// Nodes between termination checks.
const TERMINATION_CHECK_INTERVAL: u64 = 1024;

/// Mutable search state, threaded through the recursion.
///
/// `days` is the partial plan; its last day is the open one. Placing a film
/// pushes onto it and backtracking pops, so siblings always see the state
/// their parent saw.
pub(super) struct BranchAndBound<'m> {
    model: &'m ProblemModel,
    days: Vec<Day>,
    placed: Vec<bool>,
    remaining: usize,
    best_days: usize,
    lower_bound: usize,
    node_limit: Option<u64>,
    nodes: u64,
    stopped: bool,
}

impl<'m> BranchAndBound<'m> {
    /// The incumbent starts as the one-film-per-day plan.
    pub(super) fn new(model: &'m ProblemModel, node_limit: Option<u64>) -> Self {
        let film_count = model.film_count();
        Self {
            model,
            days: Vec::new(),
            placed: vec![false; film_count],
            remaining: film_count,
            best_days: film_count,
            lower_bound: model.lower_bound_days(),
            node_limit,
            nodes: 0,
            stopped: false,
        }
    }

    pub(super) fn nodes_explored(&self) -> u64 {
        self.nodes
    }

    pub(super) fn best_days(&self) -> usize {
        self.best_days
    }

    /// True if the whole tree was explored or pruned.
    pub(super) fn completed(&self) -> bool {
        !self.stopped
    }

    pub(super) fn explore(&mut self, solver_scope: &mut SolverScope<'_>) {
        if self.stopped || self.best_days <= self.lower_bound {
            return;
        }
        if self.node_limit.is_some_and(|limit| self.nodes >= limit)
            || (self.nodes % TERMINATION_CHECK_INTERVAL == 0 && solver_scope.should_terminate())
        {
            self.stopped = true;
            return;
        }
        self.nodes += 1;
        solver_scope.increment_step_count();

        if self.remaining == 0 {
            if self.days.len() < self.best_days {
                self.best_days = self.days.len();
                solver_scope.update_best(Plan::from_days(self.days.iter().cloned()));
            }
            return;
        }

        if self.forced_days() >= self.best_days {
            return;
        }

        let capacity = self.model.capacity();
        if let Some(open) = self.days.len().checked_sub(1) {
            let day = &self.days[open];
            if day.len() < capacity {
                let start = day.last().map_or(0, |&last| last + 1);
                for film in start..self.model.film_count() {
                    if self.placed[film] || !self.model.compatible(film, &self.days[open]) {
                        continue;
                    }
                    self.place(film, open);
                    self.explore(solver_scope);
                    self.unplace(film, open);
                    if self.stopped || self.best_days <= self.lower_bound {
                        return;
                    }
                }
            }
        }

        if let Some(first) = self.placed.iter().position(|&p| !p) {
            self.days.push(Day::new());
            let open = self.days.len() - 1;
            self.place(first, open);
            self.explore(solver_scope);
            self.unplace(first, open);
            self.days.pop();
        }
    }

    /// Days any completion of this node must use: the closed days plus
    /// enough full days for the open day's films and every unplaced film.
    fn forced_days(&self) -> usize {
        let open_len = self.days.last().map_or(0, |d| d.len());
        let closed = self.days.len().saturating_sub(1);
        closed + (open_len + self.remaining).div_ceil(self.model.capacity())
    }

    fn place(&mut self, film: FilmId, day: usize) {
        self.days[day].push(film);
        self.placed[film] = true;
        self.remaining -= 1;
    }

    fn unplace(&mut self, film: FilmId, day: usize) {
        self.days[day].pop();
        self.placed[film] = false;
        self.remaining += 1;
    }
}
