//! The immutable festival problem: films, restrictions and cinema capacity.

use std::collections::HashMap;

use fixedbitset::FixedBitSet;

use crate::error::{ModelError, Result};

/// Stable index of a film inside a [`ProblemModel`].
pub type FilmId = usize;

/// A schedulable film.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Film {
    id: FilmId,
    title: String,
    restriction_degree: usize,
}

impl Film {
    pub fn id(&self) -> FilmId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Number of distinct films this film may not share a day with.
    pub fn restriction_degree(&self) -> usize {
        self.restriction_degree
    }
}

/// Films, their symmetric restriction relation and the per-day cinema count.
///
/// Built once through [`ProblemBuilder`] (or [`ProblemModel::new`]) and
/// read-only afterwards. The restriction relation is stored as one bit row
/// per film so [`ProblemModel::restricted`] is O(1).
///
/// # Example
///
/// ```
/// use cineplan_core::ProblemModel;
///
/// let model = ProblemModel::new(["A", "B", "C"], [("A", "B")], 2).unwrap();
/// assert_eq!(model.film_count(), 3);
/// assert!(model.restricted(0, 1));
/// assert!(!model.restricted(0, 2));
/// assert_eq!(model.lower_bound_days(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct ProblemModel {
    films: Vec<Film>,
    index: HashMap<String, FilmId>,
    restrictions: Vec<FixedBitSet>,
    restriction_count: usize,
    capacity: usize,
}

impl ProblemModel {
    /// Builds a model from film titles, restricted title pairs and a cinema count.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::UnknownFilm`] when a pair names a missing title,
    /// [`ModelError::Capacity`] when `cinemas < 1`, and
    /// [`ModelError::DuplicateFilm`] / [`ModelError::SelfRestriction`] for
    /// titles that would break the restriction relation.
    pub fn new<T, A, B>(
        titles: impl IntoIterator<Item = T>,
        restrictions: impl IntoIterator<Item = (A, B)>,
        cinemas: i64,
    ) -> Result<Self>
    where
        T: Into<String>,
        A: AsRef<str>,
        B: AsRef<str>,
    {
        let mut builder = ProblemBuilder::new();
        for title in titles {
            builder = builder.with_film(title);
        }
        for (a, b) in restrictions {
            builder = builder.with_restriction(a.as_ref(), b.as_ref());
        }
        builder.with_cinemas(cinemas).build()
    }

    /// Returns a builder for incremental construction.
    pub fn builder() -> ProblemBuilder {
        ProblemBuilder::new()
    }

    pub fn film_count(&self) -> usize {
        self.films.len()
    }

    pub fn films(&self) -> &[Film] {
        &self.films
    }

    /// # Panics
    ///
    /// Panics if `id` is out of range.
    pub fn film(&self, id: FilmId) -> &Film {
        &self.films[id]
    }

    /// Looks up a film by its title.
    pub fn film_id(&self, title: &str) -> Option<FilmId> {
        self.index.get(title).copied()
    }

    /// Slots per day.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of restriction pairs listed in the input (`l`), duplicates included.
    pub fn restriction_count(&self) -> usize {
        self.restriction_count
    }

    /// Returns true if films `a` and `b` may not share a day.
    #[inline]
    pub fn restricted(&self, a: FilmId, b: FilmId) -> bool {
        self.restrictions[a].contains(b)
    }

    /// Counts the films in `day` that are restricted against `film`.
    pub fn conflicts(&self, film: FilmId, day: &[FilmId]) -> usize {
        day.iter().filter(|&&other| self.restricted(film, other)).count()
    }

    /// Returns true if `film` is restricted against none of the films in `day`.
    pub fn compatible(&self, film: FilmId, day: &[FilmId]) -> bool {
        day.iter().all(|&other| !self.restricted(film, other))
    }

    /// Theoretical minimum number of days ignoring restrictions: `ceil(f / c)`.
    pub fn lower_bound_days(&self) -> usize {
        self.films.len().div_ceil(self.capacity)
    }
}

/// Incremental builder for [`ProblemModel`].
///
/// Validation is deferred to [`ProblemBuilder::build`], which fails on the
/// first inconsistency instead of guessing.
#[derive(Debug, Clone, Default)]
pub struct ProblemBuilder {
    titles: Vec<String>,
    pairs: Vec<(String, String)>,
    cinemas: i64,
}

impl ProblemBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a film; its id is its position in insertion order.
    pub fn with_film(mut self, title: impl Into<String>) -> Self {
        self.titles.push(title.into());
        self
    }

    /// Declares that two titles may not be projected on the same day.
    pub fn with_restriction(mut self, a: impl Into<String>, b: impl Into<String>) -> Self {
        self.pairs.push((a.into(), b.into()));
        self
    }

    /// Sets the number of cinemas, i.e. the slots available per day.
    pub fn with_cinemas(mut self, cinemas: i64) -> Self {
        self.cinemas = cinemas;
        self
    }

    pub fn build(self) -> Result<ProblemModel> {
        let film_count = self.titles.len();

        let mut index = HashMap::with_capacity(film_count);
        for (id, title) in self.titles.iter().enumerate() {
            if index.insert(title.clone(), id).is_some() {
                return Err(ModelError::DuplicateFilm {
                    title: title.clone(),
                });
            }
        }

        let lookup = |title: &str| {
            index
                .get(title)
                .copied()
                .ok_or_else(|| ModelError::UnknownFilm {
                    title: title.to_string(),
                })
        };

        let mut restrictions = vec![FixedBitSet::with_capacity(film_count); film_count];
        for (a, b) in &self.pairs {
            let fa = lookup(a)?;
            let fb = lookup(b)?;
            if fa == fb {
                return Err(ModelError::SelfRestriction { title: a.clone() });
            }
            restrictions[fa].insert(fb);
            restrictions[fb].insert(fa);
        }

        if self.cinemas < 1 {
            return Err(ModelError::Capacity {
                cinemas: self.cinemas,
            });
        }

        let films = self
            .titles
            .into_iter()
            .enumerate()
            .map(|(id, title)| Film {
                id,
                title,
                restriction_degree: restrictions[id].count_ones(..),
            })
            .collect();

        Ok(ProblemModel {
            films,
            index,
            restrictions,
            restriction_count: self.pairs.len(),
            capacity: self.cinemas as usize,
        })
    }
}
