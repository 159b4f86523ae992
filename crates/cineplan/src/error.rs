//! Errors surfaced by the cineplan driver.

use std::path::PathBuf;

use cineplan_config::ConfigError;
use cineplan_core::ModelError;
use thiserror::Error;

/// Everything that can stop a run before or after solving.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("cannot load festival: {0}")]
    Model(#[from] ModelError),

    #[error("cannot load configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("cannot write plan to {}: {source}", path.display())]
    Output {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("solver finished without publishing a plan")]
    NoPlan,
}
