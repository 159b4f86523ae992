//! Single-film relocation moves.

use cineplan_core::{Day, ProblemModel, Solution};
use rand::Rng;

/// Moves the last film of a random non-empty day to another random day.
///
/// The target is drawn from `0..=day_count`, where `day_count` stands for
/// a new day appended at the end; existing targets must have a free slot.
/// The violation count is updated incrementally from the film's conflicts
/// with its old and new day. Days are never removed: with
/// `count_empty_days` an emptied day keeps counting, otherwise `days`
/// tracks only non-empty days.
///
/// `current` must hold at least one film.
pub fn relocate_last_film<R: Rng + ?Sized>(
    model: &ProblemModel,
    current: &Solution,
    rng: &mut R,
    violation_weight: u64,
    count_empty_days: bool,
) -> Solution {
    let mut neighbor = current.clone();
    let plan = &mut neighbor.plan;
    let day_count = plan.day_count();
    let capacity = model.capacity();

    let (from, to) = loop {
        let mut from = rng.random_range(0..day_count);
        while plan.day(from).is_empty() {
            from = rng.random_range(0..day_count);
        }
        let mut to = rng.random_range(0..=day_count);
        while to < day_count && plan.day(to).len() >= capacity {
            to = rng.random_range(0..=day_count);
        }
        if from != to {
            break (from, to);
        }
    };

    let source = plan.day_mut(from);
    let film = source[source.len() - 1];
    source.pop();
    let removed = model.conflicts(film, plan.day(from));

    if to == day_count {
        plan.push_day(Day::new());
    }
    let added = model.conflicts(film, plan.day(to));
    plan.day_mut(to).push(film);

    neighbor.violations = neighbor.violations + added - removed;
    if count_empty_days {
        neighbor.days = plan.day_count();
    } else {
        if plan.day(from).is_empty() {
            neighbor.days -= 1;
        }
        if plan.day(to).len() == 1 {
            neighbor.days += 1;
        }
    }
    neighbor.recompute_cost(violation_weight);
    neighbor
}
