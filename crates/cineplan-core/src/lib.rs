//! cineplan core - problem model and plan types
//!
//! This crate provides the fundamental abstractions shared by every solver:
//! - [`ProblemModel`]: films, their pairwise restrictions and cinema capacity
//! - [`Plan`] and [`Day`]: candidate assignments and the validity checker
//! - [`Solution`]: a plan costed for local search
//! - [`FestivalLoader`]: the token-stream input format

pub mod error;
pub mod loader;
pub mod model;
pub mod plan;
pub mod solution;

pub use error::{ModelError, ParseError, Result};
pub use loader::{Festival, FestivalLoader};
pub use model::{Film, FilmId, ProblemBuilder, ProblemModel};
pub use plan::{Day, Plan, PlanError};
pub use solution::{Solution, DEFAULT_VIOLATION_WEIGHT};
