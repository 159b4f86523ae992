//! Solver-level scope.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use cineplan_core::Plan;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use crate::clock::{Clock, SystemClock};
use crate::sink::PlanSink;
use crate::termination::{NeverTerminate, Termination};

/// Everything a solver run owns besides the model: the random source, the
/// sink improved plans are pushed to, the clock, the termination condition
/// and the best plan published so far.
///
/// # Example
///
/// ```
/// use cineplan_core::Plan;
/// use cineplan_solver::{CollectingSink, SolverScope};
///
/// let mut sink = CollectingSink::new();
/// let mut scope = SolverScope::new(&mut sink).with_seed(7);
/// assert!(scope.update_best(Plan::from_days([vec![0], vec![1]])));
/// assert!(!scope.update_best(Plan::from_days([vec![1], vec![0]])));
/// assert!(scope.update_best(Plan::from_days([vec![0, 1]])));
/// drop(scope);
/// assert_eq!(sink.len(), 2);
/// ```
pub struct SolverScope<'a> {
    sink: &'a mut dyn PlanSink,
    clock: Arc<dyn Clock>,
    termination: Box<dyn Termination>,
    rng: ChaCha8Rng,
    seed: u64,
    best_plan: Option<Plan>,
    step_count: u64,
    cycle_count: u64,
    proven_optimal: bool,
}

impl<'a> SolverScope<'a> {
    /// Creates a scope with a random seed, a wall clock and no termination.
    pub fn new(sink: &'a mut dyn PlanSink) -> Self {
        let seed = rand::random();
        Self {
            sink,
            clock: Arc::new(SystemClock::new()),
            termination: Box::new(NeverTerminate),
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
            best_plan: None,
            step_count: 0,
            cycle_count: 0,
            proven_optimal: false,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = ChaCha8Rng::seed_from_u64(seed);
        self.seed = seed;
        self
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn with_termination(mut self, termination: Box<dyn Termination>) -> Self {
        self.termination = termination;
        self
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn rng(&mut self) -> &mut ChaCha8Rng {
        &mut self.rng
    }

    pub fn elapsed(&self) -> Duration {
        self.clock.elapsed()
    }

    pub fn step_count(&self) -> u64 {
        self.step_count
    }

    pub fn increment_step_count(&mut self) -> u64 {
        self.step_count += 1;
        self.step_count
    }

    pub fn cycle_count(&self) -> u64 {
        self.cycle_count
    }

    pub fn increment_cycle_count(&mut self) -> u64 {
        self.cycle_count += 1;
        self.cycle_count
    }

    pub fn best_plan(&self) -> Option<&Plan> {
        self.best_plan.as_ref()
    }

    pub fn best_days(&self) -> Option<usize> {
        self.best_plan.as_ref().map(Plan::day_count)
    }

    /// Records `plan` and pushes it to the sink if it uses strictly fewer
    /// days than the best plan so far. Returns whether it was recorded.
    pub fn update_best(&mut self, plan: Plan) -> bool {
        if self
            .best_plan
            .as_ref()
            .is_some_and(|best| plan.day_count() >= best.day_count())
        {
            return false;
        }

        debug!(
            event = "new_best",
            days = plan.day_count(),
            steps = self.step_count,
            elapsed_ms = self.elapsed().as_millis() as u64,
        );
        self.sink.push(&plan);
        self.best_plan = Some(plan);
        true
    }

    pub fn should_terminate(&self) -> bool {
        self.termination.is_terminated(self)
    }

    pub fn mark_proven_optimal(&mut self) {
        self.proven_optimal = true;
    }

    /// True once a solver has shown that no plan with fewer days exists.
    pub fn is_proven_optimal(&self) -> bool {
        self.proven_optimal
    }

    pub fn take_best_plan(self) -> Option<Plan> {
        self.best_plan
    }
}

impl fmt::Debug for SolverScope<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SolverScope")
            .field("clock", &self.clock)
            .field("termination", &self.termination)
            .field("seed", &self.seed)
            .field("best_days", &self.best_days())
            .field("step_count", &self.step_count)
            .field("cycle_count", &self.cycle_count)
            .field("proven_optimal", &self.proven_optimal)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use crate::sink::CollectingSink;
    use crate::termination::TimeTermination;
    use rand::Rng;

    #[test]
    fn test_update_best_only_on_strict_improvement() {
        let mut sink = CollectingSink::new();
        let mut scope = SolverScope::new(&mut sink);

        assert!(scope.update_best(Plan::from_days([vec![0], vec![1], vec![2]])));
        assert!(!scope.update_best(Plan::from_days([vec![0], vec![1], vec![2]])));
        assert!(scope.update_best(Plan::from_days([vec![0, 1], vec![2]])));
        assert_eq!(scope.best_days(), Some(2));
        drop(scope);

        let days: Vec<_> = sink.plans().iter().map(Plan::day_count).collect();
        assert_eq!(days, vec![3, 2]);
    }

    #[test]
    fn test_seeded_rng_is_reproducible() {
        let mut sink_a = CollectingSink::new();
        let mut sink_b = CollectingSink::new();
        let mut a = SolverScope::new(&mut sink_a).with_seed(99);
        let mut b = SolverScope::new(&mut sink_b).with_seed(99);

        let xs: Vec<u32> = (0..8).map(|_| a.rng().random()).collect();
        let ys: Vec<u32> = (0..8).map(|_| b.rng().random()).collect();
        assert_eq!(xs, ys);
        assert_eq!(a.seed(), 99);
    }

    #[test]
    fn test_termination_uses_injected_clock() {
        let clock = Arc::new(ManualClock::new());
        let mut sink = CollectingSink::new();
        let scope = SolverScope::new(&mut sink)
            .with_clock(clock.clone())
            .with_termination(Box::new(TimeTermination::seconds(2)));

        assert!(!scope.should_terminate());
        clock.advance(Duration::from_secs(2));
        assert!(scope.should_terminate());
    }

    #[test]
    fn test_counters() {
        let mut sink = CollectingSink::new();
        let mut scope = SolverScope::new(&mut sink);
        assert_eq!(scope.increment_step_count(), 1);
        assert_eq!(scope.increment_step_count(), 2);
        assert_eq!(scope.increment_cycle_count(), 1);
        assert_eq!(scope.step_count(), 2);
        assert_eq!(scope.cycle_count(), 1);
        assert!(!scope.is_proven_optimal());
        scope.mark_proven_optimal();
        assert!(scope.is_proven_optimal());
    }
}
