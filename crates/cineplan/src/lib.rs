//! cineplan - schedule festival films over the fewest days
//!
//! Loads a festival (films, pairwise restrictions, cinemas), runs one of
//! three solvers and keeps an output file holding the best plan found so
//! far.
//!
//! # Example
//!
//! ```rust
//! use cineplan::prelude::*;
//!
//! let festival = FestivalLoader::new()
//!     .from_str("4 A B C D 2 A B C D 2 Rex Odeon")
//!     .unwrap();
//! let mut sink = CollectingSink::new();
//! let mut scope = SolverScope::new(&mut sink);
//! ExhaustiveSolver::new().solve(&festival.model, &mut scope);
//! assert_eq!(scope.best_days(), Some(2));
//! ```

pub mod console;
pub mod error;
pub mod output;

mod solver;

pub use error::AppError;
pub use output::{render_plan, FileSink};
pub use solver::{run_solver, solve_file, RunSummary};

pub use cineplan_config::{SolverConfig, SolverType};
pub use cineplan_core::{Festival, FestivalLoader, Plan, ProblemModel};

pub mod prelude {
    pub use cineplan_config::{SolverConfig, SolverType};
    pub use cineplan_core::{Festival, FestivalLoader, FilmId, Plan, ProblemModel};
    pub use cineplan_solver::{
        CollectingSink, ExhaustiveSolver, GreedySolver, PlanSink, SimulatedAnnealingSolver,
        Solver, SolverScope,
    };
}
