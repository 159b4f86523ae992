//! Destinations for improved plans.

use cineplan_core::Plan;

/// Receives every plan a solver publishes.
///
/// Solvers push a plan each time it improves on everything pushed before,
/// so the most recent push is always the best plan known. Implementations
/// should be quick; the solver waits for `push` to return.
///
/// Closures taking `&Plan` are sinks:
///
/// ```
/// use cineplan_core::Plan;
/// use cineplan_solver::PlanSink;
///
/// let mut days = Vec::new();
/// let mut sink = |plan: &Plan| days.push(plan.day_count());
/// sink.push(&Plan::from_days([vec![0], vec![1]]));
/// assert_eq!(days, vec![2]);
/// ```
pub trait PlanSink {
    fn push(&mut self, plan: &Plan);
}

impl<F: FnMut(&Plan)> PlanSink for F {
    fn push(&mut self, plan: &Plan) {
        self(plan)
    }
}

/// Keeps every pushed plan, oldest first.
#[derive(Debug, Clone, Default)]
pub struct CollectingSink {
    plans: Vec<Plan>,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn plans(&self) -> &[Plan] {
        &self.plans
    }

    /// The most recently pushed plan.
    pub fn last(&self) -> Option<&Plan> {
        self.plans.last()
    }

    pub fn len(&self) -> usize {
        self.plans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plans.is_empty()
    }
}

impl PlanSink for CollectingSink {
    fn push(&mut self, plan: &Plan) {
        self.plans.push(plan.clone());
    }
}

/// Discards every plan.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpSink;

impl PlanSink for NoOpSink {
    fn push(&mut self, _plan: &Plan) {}
}
