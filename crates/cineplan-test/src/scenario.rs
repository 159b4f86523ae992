//! Hand-built festivals.

use cineplan_core::ProblemModel;

fn titles(count: usize) -> Vec<String> {
    (0..count).map(|i| format!("F{i}")).collect()
}

/// `films` unrestricted films; the optimum is `ceil(films / cinemas)` days.
pub fn no_restrictions(films: usize, cinemas: i64) -> ProblemModel {
    ProblemModel::new(titles(films), Vec::<(String, String)>::new(), cinemas)
        .expect("fixture model is valid")
}

/// Four unrestricted films in two cinemas: two full days.
pub fn scenario_a() -> ProblemModel {
    no_restrictions(4, 2)
}

/// `A`, `B`, `C` with `A`-`B` restricted and a single cinema: three days.
pub fn scenario_b() -> ProblemModel {
    ProblemModel::new(["A", "B", "C"], [("A", "B")], 1).expect("fixture model is valid")
}

/// Six films in two cinemas with `A`, `B`, `C` mutually restricted.
///
/// Each triangle film gets its own day, paired with one of `D`, `E`, `F`,
/// so the optimum is three days.
pub fn scenario_c() -> ProblemModel {
    ProblemModel::new(
        ["A", "B", "C", "D", "E", "F"],
        [("A", "B"), ("B", "C"), ("A", "C")],
        2,
    )
    .expect("fixture model is valid")
}

/// The triangle of [`scenario_c`] with four cinemas.
///
/// Capacity alone allows two days, but the triangle forces three.
pub fn triangle_model() -> ProblemModel {
    ProblemModel::new(
        ["A", "B", "C", "D", "E", "F"],
        [("A", "B"), ("B", "C"), ("A", "C")],
        4,
    )
    .expect("fixture model is valid")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_shapes() {
        assert_eq!(scenario_a().lower_bound_days(), 2);
        assert_eq!(scenario_b().restriction_count(), 1);
        assert_eq!(scenario_c().restriction_count(), 3);
        assert_eq!(triangle_model().lower_bound_days(), 2);
        assert_eq!(no_restrictions(7, 3).film_id("F6"), Some(6));
    }
}
