//! Reference reveal session.
//!
//! Tracks the walk with three plain fields (index, revealed, finished) and
//! applies the rules literally. Obviously correct rather than elegant.

use undercover_core::Role;

use super::operation::{Operation, OperationError, OperationResult};

/// Observable state for oracle comparison.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObservableState {
    /// Slot awaiting or showing a reveal; `None` once finished.
    pub current: Option<usize>,
    /// Whether a role is on screen.
    pub revealed: bool,
    /// Whether every player has looked.
    pub finished: bool,
}

/// Model of a reveal session.
#[derive(Debug, Clone)]
pub struct ModelSession {
    roles: Vec<Role>,
    secret_word: String,
    current_index: usize,
    revealed: bool,
    finished: bool,
}

impl ModelSession {
    /// Start a walk over `roles`.
    pub fn new(roles: Vec<Role>, secret_word: impl Into<String>) -> Self {
        Self {
            roles,
            secret_word: secret_word.into(),
            current_index: 0,
            revealed: false,
            finished: false,
        }
    }

    /// Apply an operation and return the result.
    ///
    /// The result should match the real implementation's result.
    pub fn apply(&mut self, op: Operation) -> OperationResult {
        match op {
            Operation::Reveal => self.apply_reveal(),
            Operation::Advance => self.apply_advance(),
            Operation::Peek => self.apply_peek(),
            Operation::Replay => {
                self.current_index = 0;
                self.revealed = false;
                self.finished = false;
                OperationResult::Restarted
            },
        }
    }

    /// Extract observable state for comparison.
    pub fn observable_state(&self) -> ObservableState {
        ObservableState {
            current: if self.finished { None } else { Some(self.current_index) },
            revealed: self.revealed,
            finished: self.finished,
        }
    }

    fn apply_reveal(&mut self) -> OperationResult {
        if self.finished {
            return OperationResult::Error(OperationError::Finished);
        }

        self.revealed = true;
        self.shown()
    }

    fn apply_advance(&mut self) -> OperationResult {
        if self.finished {
            return OperationResult::Error(OperationError::Finished);
        }
        if !self.revealed {
            return OperationResult::Error(OperationError::NotRevealed);
        }

        self.revealed = false;
        if self.current_index + 1 < self.roles.len() {
            self.current_index += 1;
            OperationResult::Moved { next: Some(self.current_index) }
        } else {
            self.finished = true;
            OperationResult::Moved { next: None }
        }
    }

    fn apply_peek(&self) -> OperationResult {
        if self.revealed && !self.finished { self.shown() } else { OperationResult::Hidden }
    }

    fn shown(&self) -> OperationResult {
        let role = self.roles[self.current_index];
        let word = match role {
            Role::Spy => None,
            Role::Civilian => Some(self.secret_word.clone()),
        };

        OperationResult::Shown { player: self.current_index, role, word }
    }
}
