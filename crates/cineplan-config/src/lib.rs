//! Configuration system for cineplan.
//!
//! Load solver configuration from TOML or YAML files to pick a solver,
//! seed it, bound its runtime and tune simulated annealing without code
//! changes.
//!
//! # Examples
//!
//! ```
//! use cineplan_config::{SolverConfig, SolverType};
//! use std::time::Duration;
//!
//! let config = SolverConfig::from_toml_str(r#"
//!     solver = "simulated_annealing"
//!     random_seed = 7
//!
//!     [termination]
//!     seconds_spent_limit = 30
//!
//!     [simulated_annealing]
//!     cooling_rate = 0.995
//! "#).unwrap();
//!
//! assert_eq!(config.solver, SolverType::SimulatedAnnealing);
//! assert_eq!(config.time_limit(), Some(Duration::from_secs(30)));
//! assert_eq!(config.simulated_annealing.violation_weight, 1000);
//! ```

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Main solver configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct SolverConfig {
    /// Which solver to run.
    #[serde(default)]
    pub solver: SolverType,

    /// Random seed for reproducible results.
    #[serde(default)]
    pub random_seed: Option<u64>,

    /// Termination configuration.
    #[serde(default)]
    pub termination: Option<TerminationConfig>,

    /// Simulated annealing tuning.
    #[serde(default)]
    pub simulated_annealing: SimulatedAnnealingConfig,

    /// Exhaustive search limits.
    #[serde(default)]
    pub exhaustive_search: ExhaustiveSearchConfig,
}

impl SolverConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a file, choosing YAML for `.yaml`/`.yml`
    /// extensions and TOML otherwise.
    ///
    /// # Errors
    ///
    /// Returns error if the file doesn't exist or cannot be parsed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        match path.extension().and_then(|e| e.to_str()) {
            Some("yaml") | Some("yml") => Self::from_yaml_file(path),
            _ => Self::from_toml_file(path),
        }
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(s)?)
    }

    /// Selects the solver.
    pub fn with_solver(mut self, solver: SolverType) -> Self {
        self.solver = solver;
        self
    }

    /// Sets the termination time limit.
    pub fn with_termination_seconds(mut self, seconds: u64) -> Self {
        self.termination = Some(TerminationConfig {
            seconds_spent_limit: Some(seconds),
            ..self.termination.unwrap_or_default()
        });
        self
    }

    /// Sets the random seed.
    pub fn with_random_seed(mut self, seed: u64) -> Self {
        self.random_seed = Some(seed);
        self
    }

    /// Returns the termination time limit, if configured.
    pub fn time_limit(&self) -> Option<Duration> {
        self.termination.as_ref().and_then(|t| t.time_limit())
    }

    /// Rejects parameter values the solvers cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let sa = &self.simulated_annealing;
        if !(sa.starting_temperature > 0.0 && sa.starting_temperature.is_finite()) {
            return Err(ConfigError::Invalid(format!(
                "starting_temperature must be a positive number, got {}",
                sa.starting_temperature
            )));
        }
        if !(sa.cooling_rate > 0.0 && sa.cooling_rate <= 1.0) {
            return Err(ConfigError::Invalid(format!(
                "cooling_rate must be in (0, 1], got {}",
                sa.cooling_rate
            )));
        }
        if sa.iterations_per_cycle == 0 {
            return Err(ConfigError::Invalid(
                "iterations_per_cycle must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Solver selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SolverType {
    /// Branch and bound over every placement; provably optimal.
    #[default]
    Exhaustive,

    /// Single first-fit pass over films by decreasing restriction degree.
    Greedy,

    /// Restarting simulated annealing seeded by shuffled greedy plans.
    SimulatedAnnealing,
}

impl std::fmt::Display for SolverType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SolverType::Exhaustive => write!(f, "exhaustive"),
            SolverType::Greedy => write!(f, "greedy"),
            SolverType::SimulatedAnnealing => write!(f, "simulated_annealing"),
        }
    }
}

/// Termination configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct TerminationConfig {
    /// Maximum seconds to spend solving.
    pub seconds_spent_limit: Option<u64>,

    /// Maximum minutes to spend solving.
    pub minutes_spent_limit: Option<u64>,

    /// Maximum number of steps (search nodes or annealing iterations).
    pub step_count_limit: Option<u64>,

    /// Maximum number of annealing restarts.
    pub cycle_count_limit: Option<u64>,

    /// Stop once a plan with at most this many days is known.
    pub best_days_limit: Option<usize>,
}

impl TerminationConfig {
    /// Returns the time limit as a Duration, if any.
    pub fn time_limit(&self) -> Option<Duration> {
        let seconds =
            self.seconds_spent_limit.unwrap_or(0) + self.minutes_spent_limit.unwrap_or(0) * 60;
        if seconds > 0 {
            Some(Duration::from_secs(seconds))
        } else {
            None
        }
    }
}

/// Simulated annealing configuration.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "snake_case")]
pub struct SimulatedAnnealingConfig {
    /// Temperature at the start of every cycle.
    pub starting_temperature: f64,

    /// Multiplicative decay applied after every iteration.
    pub cooling_rate: f64,

    /// Cost added per co-scheduled restricted pair.
    pub violation_weight: u64,

    /// Iterations per cycle; reset whenever a better plan is found.
    pub iterations_per_cycle: u64,

    /// Whether a day emptied by a move still counts towards the day total.
    pub count_empty_days: bool,
}

impl Default for SimulatedAnnealingConfig {
    fn default() -> Self {
        Self {
            starting_temperature: 0.99,
            cooling_rate: 0.99,
            violation_weight: 1000,
            iterations_per_cycle: 10_000,
            count_empty_days: true,
        }
    }
}

/// Exhaustive search configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct ExhaustiveSearchConfig {
    /// Maximum number of nodes to explore (None = unlimited).
    #[serde(default)]
    pub node_limit: Option<u64>,
}
