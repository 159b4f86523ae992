//! Seeded random festivals.

use cineplan_core::ProblemModel;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Builds a festival where each pair of films is restricted with
/// probability `density`. The same arguments always give the same model.
pub fn random_model(seed: u64, films: usize, density: f64, cinemas: i64) -> ProblemModel {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let titles: Vec<String> = (0..films).map(|i| format!("F{i}")).collect();

    let mut pairs = Vec::new();
    for a in 0..films {
        for b in a + 1..films {
            if rng.random::<f64>() < density {
                pairs.push((titles[a].clone(), titles[b].clone()));
            }
        }
    }

    ProblemModel::new(titles, pairs, cinemas).expect("random model is valid")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_model() {
        let a = random_model(4, 10, 0.5, 3);
        let b = random_model(4, 10, 0.5, 3);
        assert_eq!(a.restriction_count(), b.restriction_count());
        for x in 0..10 {
            for y in 0..10 {
                assert_eq!(a.restricted(x, y), b.restricted(x, y));
            }
        }
    }

    #[test]
    fn test_density_extremes() {
        assert_eq!(random_model(1, 8, 0.0, 2).restriction_count(), 0);
        assert_eq!(random_model(1, 8, 1.0, 2).restriction_count(), 28);
    }
}
