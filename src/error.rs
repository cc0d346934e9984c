//! Fatal error kinds with contractual process exit codes

use std::path::PathBuf;
use thiserror::Error;

/// Conditions that abort the run with a specific exit code.
///
/// Everything else flows through `anyhow` and exits with the generic code 1.
#[derive(Error, Debug)]
pub enum FatalError {
    #[error("configuration file {} is missing", path.display())]
    MissingConfig { path: PathBuf },

    #[error("source directory {} does not exist", path.display())]
    MissingSourceDir { path: PathBuf },
}

impl FatalError {
    pub fn exit_code(&self) -> i32 {
        match self {
            FatalError::MissingConfig { .. } => 1,
            FatalError::MissingSourceDir { .. } => 2,
        }
    }
}

/// Map any error chain to the process exit code.
pub fn exit_code(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<FatalError>().map(FatalError::exit_code).unwrap_or(1)
}
