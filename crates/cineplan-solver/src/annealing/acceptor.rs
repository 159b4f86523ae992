//! Boltzmann acceptance with geometric cooling.

use rand::Rng;

/// Simulated annealing acceptor - accepts worse moves with temperature-based probability.
///
/// Improving moves are always accepted. A move that does not lower the
/// cost is accepted with probability `exp((current - neighbor) / T)`,
/// which is 1 for equal costs and shrinks as the gap grows or `T` cools.
///
/// # Example
///
/// ```
/// use cineplan_solver::annealing::BoltzmannAcceptor;
///
/// let mut acceptor = BoltzmannAcceptor::new(1.0, 0.5);
/// assert_eq!(acceptor.acceptance_probability(10, 10), 1.0);
/// assert!((acceptor.acceptance_probability(10, 11) - (-1.0f64).exp()).abs() < 1e-12);
/// acceptor.step_ended();
/// assert_eq!(acceptor.temperature(), 0.5);
/// ```
#[derive(Debug, Clone)]
pub struct BoltzmannAcceptor {
    /// Temperature restored at the start of every cycle.
    starting_temperature: f64,
    /// Current temperature.
    current_temperature: f64,
    /// Multiplicative decay per iteration.
    cooling_rate: f64,
}

impl BoltzmannAcceptor {
    pub fn new(starting_temperature: f64, cooling_rate: f64) -> Self {
        Self {
            starting_temperature,
            current_temperature: starting_temperature,
            cooling_rate,
        }
    }

    pub fn temperature(&self) -> f64 {
        self.current_temperature
    }

    /// Restores the starting temperature.
    pub fn phase_started(&mut self) {
        self.current_temperature = self.starting_temperature;
    }

    /// Cools after every iteration, accepted or not.
    pub fn step_ended(&mut self) {
        self.current_temperature *= self.cooling_rate;
    }

    pub fn acceptance_probability(&self, current_cost: u64, neighbor_cost: u64) -> f64 {
        if neighbor_cost <= current_cost {
            return 1.0;
        }
        if self.current_temperature <= 0.0 {
            return 0.0;
        }
        let delta = current_cost as f64 - neighbor_cost as f64;
        (delta / self.current_temperature).exp()
    }

    /// Accepts improvements outright; otherwise draws `r` in `[0, 1)` and
    /// accepts iff `r <= p`.
    pub fn is_accepted<R: Rng + ?Sized>(
        &self,
        current_cost: u64,
        neighbor_cost: u64,
        rng: &mut R,
    ) -> bool {
        if neighbor_cost < current_cost {
            return true;
        }
        let r: f64 = rng.random();
        r <= self.acceptance_probability(current_cost, neighbor_cost)
    }
}

impl Default for BoltzmannAcceptor {
    fn default() -> Self {
        Self::new(0.99, 0.99)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_improving_moves_always_accepted() {
        let acceptor = BoltzmannAcceptor::new(1e-9, 0.5);
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        for _ in 0..100 {
            assert!(acceptor.is_accepted(1005, 5, &mut rng));
        }
    }

    #[test]
    fn test_equal_cost_always_accepted() {
        let acceptor = BoltzmannAcceptor::new(0.01, 0.99);
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        for _ in 0..100 {
            assert!(acceptor.is_accepted(7, 7, &mut rng));
        }
    }

    #[test]
    fn test_violation_is_practically_never_accepted() {
        let acceptor = BoltzmannAcceptor::default();
        assert_eq!(acceptor.acceptance_probability(5, 1005), 0.0);
    }

    #[test]
    fn test_probability_shrinks_as_temperature_cools() {
        let mut acceptor = BoltzmannAcceptor::new(10.0, 0.5);
        let hot = acceptor.acceptance_probability(3, 4);
        acceptor.step_ended();
        let cooler = acceptor.acceptance_probability(3, 4);
        assert!(cooler < hot);
        assert!(hot < 1.0);
        acceptor.phase_started();
        assert_eq!(acceptor.temperature(), 10.0);
    }

    #[test]
    fn test_frozen_acceptor_rejects_worse() {
        let acceptor = BoltzmannAcceptor::new(0.0, 0.5);
        assert_eq!(acceptor.acceptance_probability(3, 4), 0.0);
        assert_eq!(acceptor.acceptance_probability(4, 4), 1.0);
    }
}
