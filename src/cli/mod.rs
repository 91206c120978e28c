pub mod charts;
pub mod format;
pub mod forms;
pub mod output;
pub mod shell;
pub mod tables;

use thiserror::Error;

use crate::errors::AtelierError;

/// Errors surfaced by the interactive shell.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] AtelierError),
    #[error("Input error: {0}")]
    Input(#[from] dialoguer::Error),
}

pub type CliResult<T> = std::result::Result<T, CliError>;
