//! Costed plans for local search.

use crate::model::ProblemModel;
use crate::plan::Plan;

/// Penalty per co-scheduled restricted pair. Large enough that a single
/// violation outweighs any day count.
pub const DEFAULT_VIOLATION_WEIGHT: u64 = 1000;

/// A plan together with its day count, violation count and cost.
///
/// `cost = days + weight * violations`. The day count is tracked rather
/// than derived so that a local search can decide whether emptied days
/// still count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    pub plan: Plan,
    pub days: usize,
    pub violations: usize,
    pub cost: u64,
}

impl Solution {
    /// Wraps a plan, counting its violations against `model`.
    pub fn new(plan: Plan, model: &ProblemModel, weight: u64) -> Self {
        let days = plan.day_count();
        let violations = plan.violations(model);
        Self {
            plan,
            days,
            violations,
            cost: cost(days, violations, weight),
        }
    }

    /// Re-derives the cost after `days` or `violations` changed.
    pub fn recompute_cost(&mut self, weight: u64) {
        self.cost = cost(self.days, self.violations, weight);
    }

    pub fn is_feasible(&self) -> bool {
        self.violations == 0
    }
}

/// `days + weight * violations`.
#[inline]
pub fn cost(days: usize, violations: usize, weight: u64) -> u64 {
    days as u64 + weight * violations as u64
}
