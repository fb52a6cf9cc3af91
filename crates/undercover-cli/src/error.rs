//! Shell error types.

use std::io;

use thiserror::Error;
use undercover_core::{ConfigError, StateError};

/// Errors that end a terminal session.
#[derive(Debug, Error)]
pub enum CliError {
    /// Setup rejected.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Reveal session driven out of order.
    #[error("session error: {0}")]
    State(#[from] StateError),

    /// Terminal I/O failed.
    #[error("terminal error: {0}")]
    Io(#[from] io::Error),

    /// Input closed before the walk finished.
    #[error("input closed before every player saw their role")]
    InputClosed,
}
