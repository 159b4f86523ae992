//! cineplan solver engine
//!
//! This crate provides the scheduling algorithms and the machinery they share:
//! - [`GreedySolver`]: restriction-aware first-fit construction
//! - [`ExhaustiveSolver`]: provably optimal branch-and-bound
//! - [`SimulatedAnnealingSolver`]: restarting local search
//! - [`SolverScope`], [`PlanSink`] and [`Clock`]: per-run state, the anytime
//!   output channel and injectable time
//! - Termination conditions and configuration wiring (builder module)

pub mod annealing;
pub mod builder;
pub mod clock;
pub mod exhaustive;
pub mod greedy;
pub mod scope;
pub mod sink;
pub mod solver;
pub mod termination;

pub use annealing::{BoltzmannAcceptor, SimulatedAnnealingSolver};
pub use builder::{SolverBuilder, TerminationBuilder};
pub use clock::{Clock, ManualClock, SystemClock};
pub use exhaustive::ExhaustiveSolver;
pub use greedy::GreedySolver;
pub use scope::SolverScope;
pub use sink::{CollectingSink, NoOpSink, PlanSink};
pub use solver::Solver;
pub use termination::{
    BestDaysTermination, CycleCountTermination, ExternalTermination, NeverTerminate,
    OrTermination, StepCountTermination, Termination, TimeTermination,
};
