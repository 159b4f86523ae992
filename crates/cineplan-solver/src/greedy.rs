//! Restriction-aware first-fit construction.

use cineplan_core::{Day, FilmId, Plan, ProblemModel};
use tracing::debug;

use crate::scope::SolverScope;
use crate::solver::{log_solve_end, log_solve_start, Solver};

/// Orders films by decreasing restriction degree, ties by ascending index.
pub fn restriction_degree_order(model: &ProblemModel) -> Vec<FilmId> {
    let mut order: Vec<FilmId> = (0..model.film_count()).collect();
    order.sort_by(|&a, &b| {
        model
            .film(b)
            .restriction_degree()
            .cmp(&model.film(a).restriction_degree())
            .then(a.cmp(&b))
    });
    order
}

/// Packs films into days in a single left-to-right pass.
///
/// Each film joins the current day unless that day is full or already holds
/// a film it is restricted against, in which case a new day is opened. The
/// result always satisfies capacity and restrictions, but the day count
/// depends on `order` and is not minimal in general.
///
/// # Example
///
/// ```
/// use cineplan_core::ProblemModel;
/// use cineplan_solver::greedy::first_fit;
///
/// let model = ProblemModel::new(["A", "B", "C"], [("A", "B")], 2).unwrap();
/// let plan = first_fit(&model, &[0, 1, 2]);
/// assert_eq!(plan.day_count(), 2);
/// assert_eq!(plan.day(0).as_slice(), &[0]);
/// assert_eq!(plan.day(1).as_slice(), &[1, 2]);
/// ```
pub fn first_fit(model: &ProblemModel, order: &[FilmId]) -> Plan {
    let capacity = model.capacity();
    let mut plan = Plan::new();
    let mut current = Day::new();

    for &film in order {
        if !current.is_empty()
            && (current.len() == capacity || !model.compatible(film, &current))
        {
            plan.push_day(std::mem::take(&mut current));
        }
        current.push(film);
    }
    if !current.is_empty() {
        plan.push_day(current);
    }
    plan
}

/// Builds one plan with [`first_fit`] and publishes it.
///
/// Uses [`restriction_degree_order`] unless an explicit order is given.
#[derive(Debug, Clone, Default)]
pub struct GreedySolver {
    order: Option<Vec<FilmId>>,
}

impl GreedySolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Packs films in the given order instead of by restriction degree.
    pub fn with_order(order: Vec<FilmId>) -> Self {
        Self { order: Some(order) }
    }
}

impl Solver for GreedySolver {
    fn solve(&mut self, model: &ProblemModel, solver_scope: &mut SolverScope<'_>) {
        log_solve_start(self.solver_name(), model, solver_scope.seed());

        let order = match &self.order {
            Some(order) => order.clone(),
            None => restriction_degree_order(model),
        };
        let plan = first_fit(model, &order);
        solver_scope.increment_step_count();

        debug!(
            event = "greedy_plan",
            days = plan.day_count(),
            lower_bound_days = model.lower_bound_days(),
        );
        if plan.day_count() == model.lower_bound_days() {
            solver_scope.mark_proven_optimal();
        }
        solver_scope.update_best(plan);

        log_solve_end(self.solver_name(), solver_scope);
    }

    fn solver_name(&self) -> &'static str {
        "Greedy"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::CollectingSink;
    use cineplan_test::{assert_valid_plan, random_model, triangle_model};

    #[test]
    fn test_degree_order_breaks_ties_by_index() {
        let model = ProblemModel::new(
            ["A", "B", "C", "D"],
            [("C", "A"), ("C", "B"), ("D", "B")],
            2,
        )
        .unwrap();
        // degrees: A=1, B=2, C=2, D=1
        assert_eq!(restriction_degree_order(&model), vec![1, 2, 0, 3]);
    }

    #[test]
    fn test_first_fit_opens_day_when_full() {
        let model = ProblemModel::new(["A", "B", "C"], Vec::<(&str, &str)>::new(), 2).unwrap();
        let plan = first_fit(&model, &[2, 1, 0]);
        assert_eq!(plan.day_count(), 2);
        assert_eq!(plan.day(0).as_slice(), &[2, 1]);
        assert_eq!(plan.day(1).as_slice(), &[0]);
    }

    #[test]
    fn test_first_fit_depends_on_order() {
        // A-B restricted, capacity 2: {A, C} {B, D} needs two days, but
        // A, B, C, D strands D on a third.
        let model = ProblemModel::new(["A", "B", "C", "D"], [("A", "B")], 2).unwrap();
        assert_eq!(first_fit(&model, &[0, 1, 2, 3]).day_count(), 3);
        assert_eq!(first_fit(&model, &[0, 2, 1, 3]).day_count(), 2);
    }

    #[test]
    fn test_greedy_solver_publishes_one_valid_plan() {
        let model = triangle_model();
        let mut sink = CollectingSink::new();
        let mut scope = SolverScope::new(&mut sink).with_seed(0);
        GreedySolver::new().solve(&model, &mut scope);
        drop(scope);

        assert_eq!(sink.len(), 1);
        assert_valid_plan(&model, sink.last().unwrap());
    }

    #[test]
    fn test_greedy_plans_are_always_valid() {
        for seed in 0..25 {
            let model = random_model(seed, 12, 0.3, 3);
            let plan = first_fit(&model, &restriction_degree_order(&model));
            assert_valid_plan(&model, &plan);
        }
    }

    #[test]
    fn test_given_order_is_used() {
        let model = ProblemModel::new(["A", "B"], Vec::<(&str, &str)>::new(), 1).unwrap();
        let mut sink = CollectingSink::new();
        let mut scope = SolverScope::new(&mut sink);
        GreedySolver::with_order(vec![1, 0]).solve(&model, &mut scope);
        drop(scope);
        assert_eq!(sink.last().unwrap().day(0).as_slice(), &[1]);
    }

    #[test]
    fn test_empty_model() {
        let empty: [&str; 0] = [];
        let model = ProblemModel::new(empty, Vec::<(&str, &str)>::new(), 2).unwrap();
        let mut sink = CollectingSink::new();
        let mut scope = SolverScope::new(&mut sink);
        GreedySolver::new().solve(&model, &mut scope);
        assert!(scope.is_proven_optimal());
        drop(scope);
        assert_eq!(sink.last().unwrap().day_count(), 0);
    }
}
