//! Operations for model-based testing.
//!
//! Operations represent everything a presentation layer can do to a reveal
//! session. They are generated randomly by proptest and applied to both the
//! model and the real implementation.

use arbitrary::Arbitrary;
use undercover_core::{Role, StateError};

/// Operations that can be applied to a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Arbitrary)]
pub enum Operation {
    /// Current player taps to reveal.
    Reveal,

    /// Current player hides and passes the device.
    Advance,

    /// Presentation layer asks what is on screen.
    Peek,

    /// Abandon the session and start a new walk over the same config.
    Replay,
}

/// Result of applying an operation.
///
/// Compared between the model and the real implementation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OperationResult {
    /// A role is on screen.
    Shown {
        /// Zero-based slot being shown.
        player: usize,
        /// Role of that slot.
        role: Role,
        /// Secret word shown alongside, if any.
        word: Option<String>,
    },

    /// Device passed on; `None` once every player has looked.
    Moved {
        /// Next slot awaiting reveal.
        next: Option<usize>,
    },

    /// Nothing on screen.
    Hidden,

    /// A fresh walk started at the first player.
    Restarted,

    /// Operation rejected.
    Error(OperationError),
}

/// Expected rejections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationError {
    /// Advance before the current player revealed.
    NotRevealed,

    /// Any transition after the last player.
    Finished,
}

impl From<StateError> for OperationError {
    fn from(err: StateError) -> Self {
        match err {
            StateError::NotRevealed { .. } => Self::NotRevealed,
            StateError::Finished => Self::Finished,
        }
    }
}

impl OperationResult {
    /// Check if operation failed.
    pub fn is_err(&self) -> bool {
        matches!(self, Self::Error(_))
    }
}
