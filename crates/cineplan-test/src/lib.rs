//! Shared test fixtures for cineplan crates.
//!
//! - [`scenario`] - small hand-built festivals with known optima
//! - [`random`] - seeded random festivals for property-style tests
//! - [`assert`] - plan validity assertions with readable failures
//!
//! # Usage
//!
//! Add as a dev-dependency in your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! cineplan-test = { workspace = true }
//! ```

pub mod assert;
pub mod random;
pub mod scenario;

pub use assert::assert_valid_plan;
pub use random::random_model;
pub use scenario::{no_restrictions, scenario_a, scenario_b, scenario_c, triangle_model};
