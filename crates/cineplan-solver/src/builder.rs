//! Wiring between [`SolverConfig`] and the solver implementations.

use cineplan_config::{SolverConfig, SolverType};

use crate::annealing::SimulatedAnnealingSolver;
use crate::exhaustive::ExhaustiveSolver;
use crate::greedy::GreedySolver;
use crate::solver::Solver;
use crate::termination::{
    BestDaysTermination, CycleCountTermination, NeverTerminate, OrTermination,
    StepCountTermination, Termination, TimeTermination,
};

/// Builds solvers from configuration.
pub struct SolverBuilder;

impl SolverBuilder {
    /// Builds the solver selected by `config.solver`.
    pub fn build(config: &SolverConfig) -> Box<dyn Solver> {
        match config.solver {
            SolverType::Exhaustive => {
                Box::new(ExhaustiveSolver::with_config(&config.exhaustive_search))
            }
            SolverType::Greedy => Box::new(GreedySolver::new()),
            SolverType::SimulatedAnnealing => Box::new(SimulatedAnnealingSolver::with_config(
                config.simulated_annealing.clone(),
            )),
        }
    }
}

/// Builds termination conditions from configuration.
pub struct TerminationBuilder;

impl TerminationBuilder {
    /// Combines every configured limit with OR semantics.
    ///
    /// Returns [`NeverTerminate`] when no limit is set.
    pub fn build(config: &SolverConfig) -> Box<dyn Termination> {
        let Some(termination) = &config.termination else {
            return Box::new(NeverTerminate);
        };

        let mut any = OrTermination::default();
        if let Some(limit) = termination.time_limit() {
            any.push(Box::new(TimeTermination::new(limit)));
        }
        if let Some(steps) = termination.step_count_limit {
            any.push(Box::new(StepCountTermination::new(steps)));
        }
        if let Some(cycles) = termination.cycle_count_limit {
            any.push(Box::new(CycleCountTermination::new(cycles)));
        }
        if let Some(days) = termination.best_days_limit {
            any.push(Box::new(BestDaysTermination::new(days)));
        }

        if any.is_empty() {
            Box::new(NeverTerminate)
        } else {
            Box::new(any)
        }
    }
}
