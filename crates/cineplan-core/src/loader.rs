//! Festival instance loader.
//!
//! Turns a whitespace-delimited token stream into a validated
//! [`ProblemModel`] plus the cinema names used when rendering a plan.
//!
//! The expected token order is:
//!
//! ```raw
//! f                 number of films
//! title_1 .. title_f
//! l                 number of restriction pairs
//! a_1 b_1 .. a_l b_l
//! c                 number of cinemas
//! cinema_1 .. cinema_c
//! ```
//!
//! Titles and cinema names are single tokens. Loading stops at the first
//! problem; nothing is repaired or guessed.

use std::fs;
use std::io::Read;
use std::path::Path;
use std::str::SplitWhitespace;

use crate::error::{ModelError, ParseError, Result};
use crate::model::{ProblemBuilder, ProblemModel};

/// A loaded instance: the solver-facing model and the cinema names.
#[derive(Debug, Clone)]
pub struct Festival {
    pub model: ProblemModel,
    pub cinemas: Vec<String>,
}

/// Loads [`Festival`] instances from strings, readers or files.
///
/// # Example
///
/// ```
/// use cineplan_core::FestivalLoader;
///
/// let festival = FestivalLoader::new()
///     .from_str("3 Alien Brazil Casablanca 1 Alien Brazil 2 Rex Odeon")
///     .unwrap();
/// assert_eq!(festival.model.film_count(), 3);
/// assert_eq!(festival.model.capacity(), 2);
/// assert_eq!(festival.cinemas, vec!["Rex", "Odeon"]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct FestivalLoader;

impl FestivalLoader {
    pub fn new() -> Self {
        Self
    }

    pub fn from_path(&self, path: impl AsRef<Path>) -> Result<Festival> {
        let contents = fs::read_to_string(path)?;
        self.from_str(&contents)
    }

    pub fn from_reader<R: Read>(&self, mut reader: R) -> Result<Festival> {
        let mut contents = String::new();
        reader.read_to_string(&mut contents)?;
        self.from_str(&contents)
    }

    #[allow(clippy::should_implement_trait)]
    pub fn from_str(&self, input: &str) -> Result<Festival> {
        let mut sc = Scanner::new(input);
        let mut builder = ProblemBuilder::new();

        let film_count = sc.next_count("film count")?;
        for _ in 0..film_count {
            builder = builder.with_film(sc.next_token("film title")?);
        }

        let restriction_count = sc.next_count("restriction count")?;
        for _ in 0..restriction_count {
            let a = sc.next_token("restricted film title")?;
            let b = sc.next_token("restricted film title")?;
            builder = builder.with_restriction(a, b);
        }

        let cinema_count = sc.next_i64("cinema count")?;
        if cinema_count < 1 {
            return Err(ModelError::Capacity {
                cinemas: cinema_count,
            });
        }
        let mut cinemas = Vec::new();
        for _ in 0..cinema_count {
            cinemas.push(sc.next_token("cinema name")?.to_string());
        }

        let model = builder.with_cinemas(cinema_count).build()?;
        Ok(Festival { model, cinemas })
    }
}

struct Scanner<'a> {
    tokens: SplitWhitespace<'a>,
}

impl<'a> Scanner<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            tokens: input.split_whitespace(),
        }
    }

    fn next_token(&mut self, expected: &'static str) -> std::result::Result<&'a str, ParseError> {
        self.tokens
            .next()
            .ok_or(ParseError::UnexpectedEof { expected })
    }

    fn next_i64(&mut self, expected: &'static str) -> std::result::Result<i64, ParseError> {
        let token = self.next_token(expected)?;
        token.parse().map_err(|_| ParseError::InvalidNumber {
            token: token.to_string(),
            expected,
        })
    }

    fn next_count(&mut self, expected: &'static str) -> std::result::Result<usize, ParseError> {
        let value = self.next_i64(expected)?;
        usize::try_from(value).map_err(|_| ParseError::NegativeCount { value, expected })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
4
Alien Brazil Casablanca Dune
2
Alien Brazil
Casablanca Alien
2
Rex Odeon
";

    #[test]
    fn test_load_sample() {
        let festival = FestivalLoader::new().from_str(SAMPLE).unwrap();
        let model = &festival.model;
        assert_eq!(model.film_count(), 4);
        assert_eq!(model.restriction_count(), 2);
        assert_eq!(model.capacity(), 2);
        assert!(model.restricted(0, 1));
        assert!(model.restricted(0, 2));
        assert!(!model.restricted(1, 2));
        assert_eq!(festival.cinemas, vec!["Rex", "Odeon"]);
    }

    #[test]
    fn test_truncated_input() {
        let err = FestivalLoader::new().from_str("3 A B").unwrap_err();
        assert!(matches!(
            err,
            ModelError::Parse(ParseError::UnexpectedEof {
                expected: "film title"
            })
        ));

        let err = FestivalLoader::new().from_str("1 A 0 2 Rex").unwrap_err();
        assert!(matches!(
            err,
            ModelError::Parse(ParseError::UnexpectedEof {
                expected: "cinema name"
            })
        ));
    }

    #[test]
    fn test_oversized_cinema_count_reports_truncated_input() {
        let err = FestivalLoader::new()
            .from_str("1 A 0 4611686018427387904 Rex")
            .unwrap_err();
        assert!(matches!(
            err,
            ModelError::Parse(ParseError::UnexpectedEof {
                expected: "cinema name"
            })
        ));
    }

    #[test]
    fn test_invalid_and_negative_counts() {
        let err = FestivalLoader::new().from_str("two A B").unwrap_err();
        assert!(matches!(
            err,
            ModelError::Parse(ParseError::InvalidNumber { .. })
        ));

        let err = FestivalLoader::new().from_str("-1").unwrap_err();
        assert!(matches!(
            err,
            ModelError::Parse(ParseError::NegativeCount { value: -1, .. })
        ));
    }

    #[test]
    fn test_unknown_restricted_film_fails_immediately() {
        let err = FestivalLoader::new()
            .from_str("2 A B 1 A Zorro 1 Rex")
            .unwrap_err();
        assert!(matches!(err, ModelError::UnknownFilm { ref title } if title == "Zorro"));
    }

    #[test]
    fn test_non_positive_cinema_count() {
        let err = FestivalLoader::new().from_str("1 A 0 0").unwrap_err();
        assert!(matches!(err, ModelError::Capacity { cinemas: 0 }));
    }

    #[test]
    fn test_from_reader() {
        let festival = FestivalLoader::new()
            .from_reader(SAMPLE.as_bytes())
            .unwrap();
        assert_eq!(festival.model.film_count(), 4);
    }
}
