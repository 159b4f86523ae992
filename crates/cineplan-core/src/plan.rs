//! Plans: ordered days of films, and their validity checker.

use smallvec::SmallVec;
use thiserror::Error;

use crate::model::{FilmId, ProblemModel};

/// The films projected on one day, in slot order.
pub type Day = SmallVec<[FilmId; 8]>;

/// First violation found by [`Plan::validate`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlanError {
    #[error("day {day} holds {len} films but only {capacity} cinemas exist")]
    Overfull {
        day: usize,
        len: usize,
        capacity: usize,
    },

    #[error("restricted films {a} and {b} share day {day}")]
    Restricted { day: usize, a: FilmId, b: FilmId },

    #[error("film {film} is not scheduled")]
    Missing { film: FilmId },

    #[error("film {film} is scheduled more than once")]
    Duplicate { film: FilmId },

    #[error("film {film} does not exist in the model")]
    UnknownFilm { film: FilmId },
}

/// An ordered assignment of films to days (day 1..N).
///
/// Days are never reordered; a day may be empty while a local search is
/// working on the plan, and [`Plan::compacted`] drops such days before the
/// plan is published.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Plan {
    days: Vec<Day>,
}

impl Plan {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_days<I, D>(days: I) -> Self
    where
        I: IntoIterator<Item = D>,
        D: IntoIterator<Item = FilmId>,
    {
        Self {
            days: days.into_iter().map(|d| d.into_iter().collect()).collect(),
        }
    }

    /// The trivial plan with one film per day, in film order.
    pub fn one_film_per_day(model: &ProblemModel) -> Self {
        Self::from_days((0..model.film_count()).map(|film| [film]))
    }

    pub fn days(&self) -> &[Day] {
        &self.days
    }

    pub fn day(&self, index: usize) -> &Day {
        &self.days[index]
    }

    pub fn day_mut(&mut self, index: usize) -> &mut Day {
        &mut self.days[index]
    }

    /// Number of days, empty ones included.
    pub fn day_count(&self) -> usize {
        self.days.len()
    }

    pub fn non_empty_day_count(&self) -> usize {
        self.days.iter().filter(|d| !d.is_empty()).count()
    }

    pub fn film_count(&self) -> usize {
        self.days.iter().map(|d| d.len()).sum()
    }

    /// Appends a day.
    pub fn push_day(&mut self, day: Day) {
        self.days.push(day);
    }

    pub fn last_day(&self) -> Option<&Day> {
        self.days.last()
    }

    /// Returns a copy without empty days.
    pub fn compacted(&self) -> Self {
        Self {
            days: self.days.iter().filter(|d| !d.is_empty()).cloned().collect(),
        }
    }

    /// Iterates `(day, slot, film)` triples, ordered by day then slot.
    pub fn assignments(&self) -> impl Iterator<Item = (usize, usize, FilmId)> + '_ {
        self.days.iter().enumerate().flat_map(|(day, films)| {
            films
                .iter()
                .enumerate()
                .map(move |(slot, &film)| (day, slot, film))
        })
    }

    /// Counts restricted pairs that share a day.
    pub fn violations(&self, model: &ProblemModel) -> usize {
        self.days
            .iter()
            .map(|day| {
                day.iter()
                    .enumerate()
                    .map(|(i, &film)| model.conflicts(film, &day[i + 1..]))
                    .sum::<usize>()
            })
            .sum()
    }

    /// Checks capacity, restriction-freeness and exact coverage of every film.
    ///
    /// Pure and order-independent: the same plan always yields the same
    /// verdict, so a plan accepted once is accepted again.
    ///
    /// # Example
    ///
    /// ```
    /// use cineplan_core::{Plan, PlanError, ProblemModel};
    ///
    /// let model = ProblemModel::new(["A", "B", "C"], [("A", "B")], 2).unwrap();
    /// assert!(Plan::from_days([vec![0, 2], vec![1]]).validate(&model).is_ok());
    /// assert_eq!(
    ///     Plan::from_days([vec![0, 1], vec![2]]).validate(&model),
    ///     Err(PlanError::Restricted { day: 0, a: 0, b: 1 }),
    /// );
    /// ```
    pub fn validate(&self, model: &ProblemModel) -> Result<(), PlanError> {
        let capacity = model.capacity();
        let mut seen = vec![false; model.film_count()];

        for (index, day) in self.days.iter().enumerate() {
            if day.len() > capacity {
                return Err(PlanError::Overfull {
                    day: index,
                    len: day.len(),
                    capacity,
                });
            }
            for (i, &film) in day.iter().enumerate() {
                let slot = seen
                    .get_mut(film)
                    .ok_or(PlanError::UnknownFilm { film })?;
                if *slot {
                    return Err(PlanError::Duplicate { film });
                }
                *slot = true;
                if let Some(&other) = day[..i].iter().find(|&&o| model.restricted(film, o)) {
                    return Err(PlanError::Restricted {
                        day: index,
                        a: other,
                        b: film,
                    });
                }
            }
        }

        match seen.iter().position(|&s| !s) {
            Some(film) => Err(PlanError::Missing { film }),
            None => Ok(()),
        }
    }

    pub fn is_valid(&self, model: &ProblemModel) -> bool {
        self.validate(model).is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model() -> ProblemModel {
        ProblemModel::new(["A", "B", "C", "D"], [("A", "B"), ("C", "D")], 2).unwrap()
    }

    #[test]
    fn test_valid_plan() {
        let plan = Plan::from_days([vec![0, 2], vec![1, 3]]);
        assert_eq!(plan.validate(&model()), Ok(()));
        assert_eq!(plan.violations(&model()), 0);
    }

    #[test]
    fn test_overfull_day() {
        let plan = Plan::from_days([vec![0, 2, 3], vec![1]]);
        assert_eq!(
            plan.validate(&model()),
            Err(PlanError::Overfull {
                day: 0,
                len: 3,
                capacity: 2
            })
        );
    }

    #[test]
    fn test_missing_and_duplicate_films() {
        let missing = Plan::from_days([vec![0, 2], vec![1]]);
        assert_eq!(missing.validate(&model()), Err(PlanError::Missing { film: 3 }));

        let duplicate = Plan::from_days([vec![0, 2], vec![1, 2]]);
        assert_eq!(
            duplicate.validate(&model()),
            Err(PlanError::Duplicate { film: 2 })
        );

        let unknown = Plan::from_days([vec![0, 9]]);
        assert_eq!(
            unknown.validate(&model()),
            Err(PlanError::UnknownFilm { film: 9 })
        );
    }

    #[test]
    fn test_violations_count_pairs_once() {
        let model =
            ProblemModel::new(["A", "B", "C"], [("A", "B"), ("B", "C"), ("A", "C")], 3).unwrap();
        let plan = Plan::from_days([vec![0, 1, 2]]);
        assert_eq!(plan.violations(&model), 3);
    }

    #[test]
    fn test_validation_is_order_independent() {
        let a = Plan::from_days([vec![2, 0], vec![3, 1]]);
        let b = Plan::from_days([vec![1, 3], vec![0, 2]]);
        assert!(a.is_valid(&model()));
        assert!(b.is_valid(&model()));
        assert!(a.is_valid(&model()));
    }

    #[test]
    fn test_compacted_drops_empty_days() {
        let plan = Plan::from_days([vec![0], vec![], vec![1, 2], vec![]]);
        assert_eq!(plan.day_count(), 4);
        assert_eq!(plan.non_empty_day_count(), 2);
        let compact = plan.compacted();
        assert_eq!(compact.day_count(), 2);
        assert_eq!(compact.day(1).as_slice(), &[1, 2]);
    }

    #[test]
    fn test_assignments_order() {
        let plan = Plan::from_days([vec![3, 1], vec![0]]);
        let all: Vec<_> = plan.assignments().collect();
        assert_eq!(all, vec![(0, 0, 3), (0, 1, 1), (1, 0, 0)]);
    }

    #[test]
    fn test_one_film_per_day() {
        let plan = Plan::one_film_per_day(&model());
        assert_eq!(plan.day_count(), 4);
        assert!(plan.is_valid(&model()));
    }
}
