//! Simulated annealing with random restarts.
//!
//! Each cycle seeds a fresh solution by running [`first_fit`] over a
//! shuffled film order, then relocates single films for up to
//! `iterations_per_cycle` consecutive non-improving steps, accepting worse
//! solutions with Boltzmann probability. Restriction violations are allowed
//! during the walk but priced at `violation_weight` each, and only
//! violation-free solutions are ever published.

mod acceptor;
mod neighbor;

use cineplan_config::SimulatedAnnealingConfig;
use cineplan_core::{FilmId, Plan, ProblemModel, Solution};
use rand::seq::SliceRandom;
use tracing::trace;

use crate::greedy::first_fit;
use crate::scope::SolverScope;
use crate::solver::{log_solve_end, log_solve_start, Solver};

pub use acceptor::BoltzmannAcceptor;
pub use neighbor::relocate_last_film;

/// Anytime local-search solver. Never proves optimality, so it runs until
/// the scope's termination fires.
///
/// # Example
///
/// ```
/// use cineplan_core::ProblemModel;
/// use cineplan_solver::{
///     CollectingSink, CycleCountTermination, SimulatedAnnealingSolver, Solver, SolverScope,
/// };
///
/// let model = ProblemModel::new(["A", "B", "C"], [("A", "B")], 2).unwrap();
/// let mut sink = CollectingSink::new();
/// let mut scope = SolverScope::new(&mut sink)
///     .with_seed(42)
///     .with_termination(Box::new(CycleCountTermination::new(3)));
/// SimulatedAnnealingSolver::new().solve(&model, &mut scope);
/// assert_eq!(scope.best_days(), Some(2));
/// ```
#[derive(Debug, Clone, Default)]
pub struct SimulatedAnnealingSolver {
    config: SimulatedAnnealingConfig,
}

impl SimulatedAnnealingSolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: SimulatedAnnealingConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SimulatedAnnealingConfig {
        &self.config
    }

    /// Publishes `solution` if it is the best this run has seen.
    fn promote(
        &self,
        solution: &Solution,
        optimal: &mut Option<usize>,
        solver_scope: &mut SolverScope<'_>,
    ) -> bool {
        if optimal.is_some_and(|days| solution.days >= days) {
            return false;
        }
        *optimal = Some(solution.days);
        solver_scope.update_best(solution.plan.compacted());
        true
    }
}

impl Solver for SimulatedAnnealingSolver {
    fn solve(&mut self, model: &ProblemModel, solver_scope: &mut SolverScope<'_>) {
        log_solve_start(self.solver_name(), model, solver_scope.seed());

        if model.film_count() == 0 {
            solver_scope.update_best(Plan::new());
            solver_scope.mark_proven_optimal();
            log_solve_end(self.solver_name(), solver_scope);
            return;
        }

        let weight = self.config.violation_weight;
        let mut acceptor =
            BoltzmannAcceptor::new(self.config.starting_temperature, self.config.cooling_rate);
        let mut order: Vec<FilmId> = (0..model.film_count()).collect();
        let mut optimal: Option<usize> = None;

        'cycles: while !solver_scope.should_terminate() {
            order.shuffle(solver_scope.rng());
            let mut current = Solution::new(first_fit(model, &order), model, weight);
            self.promote(&current, &mut optimal, solver_scope);

            acceptor.phase_started();
            let mut stale = 0;
            while stale < self.config.iterations_per_cycle {
                if solver_scope.should_terminate() {
                    break 'cycles;
                }

                let neighbor = relocate_last_film(
                    model,
                    &current,
                    solver_scope.rng(),
                    weight,
                    self.config.count_empty_days,
                );
                solver_scope.increment_step_count();

                let accepted = acceptor.is_accepted(current.cost, neighbor.cost, solver_scope.rng());
                acceptor.step_ended();
                if !accepted {
                    stale += 1;
                    continue;
                }

                current = neighbor;
                if current.is_feasible() && self.promote(&current, &mut optimal, solver_scope) {
                    stale = 0;
                } else {
                    stale += 1;
                }
            }

            let cycle = solver_scope.increment_cycle_count();
            trace!(
                event = "cycle_end",
                cycle,
                days = current.days,
                violations = current.violations,
                temperature = acceptor.temperature(),
                best_days = optimal,
            );
        }

        log_solve_end(self.solver_name(), solver_scope);
    }

    fn solver_name(&self) -> &'static str {
        "SimulatedAnnealing"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::CollectingSink;
    use crate::termination::{CycleCountTermination, StepCountTermination};
    use cineplan_test::{assert_valid_plan, random_model, scenario_a, scenario_b, scenario_c};

    fn anneal(
        model: &ProblemModel,
        config: SimulatedAnnealingConfig,
        seed: u64,
        cycles: u64,
    ) -> CollectingSink {
        let mut sink = CollectingSink::new();
        let mut scope = SolverScope::new(&mut sink)
            .with_seed(seed)
            .with_termination(Box::new(CycleCountTermination::new(cycles)));
        SimulatedAnnealingSolver::with_config(config).solve(model, &mut scope);
        drop(scope);
        sink
    }

    fn short_cycles() -> SimulatedAnnealingConfig {
        SimulatedAnnealingConfig {
            iterations_per_cycle: 200,
            ..SimulatedAnnealingConfig::default()
        }
    }

    #[test]
    fn test_published_plans_are_valid_and_improving() {
        for seed in 0..8 {
            let model = random_model(seed, 12, 0.3, 3);
            let sink = anneal(&model, short_cycles(), seed, 5);
            assert!(!sink.is_empty());
            for plan in sink.plans() {
                assert_valid_plan(&model, plan);
            }
            let days: Vec<_> = sink.plans().iter().map(Plan::day_count).collect();
            assert!(days.windows(2).all(|w| w[1] < w[0]), "{days:?}");
        }
    }

    #[test]
    fn test_small_scenarios_reach_optimum() {
        assert_eq!(anneal(&scenario_a(), short_cycles(), 1, 10).last().unwrap().day_count(), 2);
        assert_eq!(anneal(&scenario_b(), short_cycles(), 1, 10).last().unwrap().day_count(), 3);
        assert_eq!(anneal(&scenario_c(), short_cycles(), 1, 20).last().unwrap().day_count(), 3);
    }

    #[test]
    fn test_non_empty_day_counting_finds_optimum() {
        let config = SimulatedAnnealingConfig {
            count_empty_days: false,
            ..short_cycles()
        };
        let model = scenario_c();
        let sink = anneal(&model, config, 9, 10);
        assert_valid_plan(&model, sink.last().unwrap());
        assert_eq!(sink.last().unwrap().day_count(), 3);
    }

    #[test]
    fn test_walk_improvement_extends_cycle_budget() {
        let config = SimulatedAnnealingConfig {
            count_empty_days: false,
            ..short_cycles()
        };
        let budget = config.iterations_per_cycle;
        let mut improved_cycles = 0;
        for seed in 0..64 {
            for model in [scenario_c(), random_model(seed, 12, 0.3, 3)] {
                let mut sink = CollectingSink::new();
                let mut scope = SolverScope::new(&mut sink)
                    .with_seed(seed)
                    .with_termination(Box::new(CycleCountTermination::new(1)));
                SimulatedAnnealingSolver::with_config(config.clone()).solve(&model, &mut scope);
                let steps = scope.step_count();
                drop(scope);

                // A second plan from one cycle can only come from the walk.
                if sink.len() > 1 {
                    improved_cycles += 1;
                    assert!(steps > budget, "seed {seed}: {steps} steps");
                } else {
                    assert_eq!(steps, budget, "seed {seed}");
                }
            }
        }
        assert!(improved_cycles > 0);
    }

    #[test]
    fn test_same_seed_same_plans() {
        let model = random_model(21, 10, 0.3, 2);
        let a = anneal(&model, short_cycles(), 77, 4);
        let b = anneal(&model, short_cycles(), 77, 4);
        assert_eq!(a.plans(), b.plans());
    }

    #[test]
    fn test_cycle_count_termination_bounds_restarts() {
        let model = random_model(2, 8, 0.2, 2);
        let mut sink = CollectingSink::new();
        let mut scope = SolverScope::new(&mut sink)
            .with_seed(3)
            .with_termination(Box::new(CycleCountTermination::new(2)));
        SimulatedAnnealingSolver::with_config(short_cycles()).solve(&model, &mut scope);
        assert_eq!(scope.cycle_count(), 2);
        assert!(!scope.is_proven_optimal());
    }

    #[test]
    fn test_step_termination_inside_cycle() {
        let model = random_model(5, 8, 0.2, 2);
        let mut sink = CollectingSink::new();
        let mut scope = SolverScope::new(&mut sink)
            .with_seed(3)
            .with_termination(Box::new(StepCountTermination::new(50)));
        SimulatedAnnealingSolver::new().solve(&model, &mut scope);
        assert_eq!(scope.step_count(), 50);
        assert_eq!(scope.cycle_count(), 0);
        drop(scope);
        assert_valid_plan(&model, sink.last().unwrap());
    }

    #[test]
    fn test_empty_model_publishes_empty_plan() {
        let empty: [&str; 0] = [];
        let model = ProblemModel::new(empty, Vec::<(&str, &str)>::new(), 3).unwrap();
        let mut sink = CollectingSink::new();
        let mut scope = SolverScope::new(&mut sink);
        SimulatedAnnealingSolver::new().solve(&model, &mut scope);
        assert!(scope.is_proven_optimal());
        drop(scope);
        assert_eq!(sink.len(), 1);
        assert_eq!(sink.last().unwrap().day_count(), 0);
    }
}
