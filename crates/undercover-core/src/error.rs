//! Core error types.

use thiserror::Error;

/// Errors from building a game configuration.
///
/// Every variant is recoverable: the caller re-prompts for valid input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Player count outside the supported range.
    #[error("player count {count} out of range [{min}, {max}]")]
    PlayerCountOutOfRange {
        /// Requested player count.
        count: usize,
        /// Smallest supported player count.
        min: usize,
        /// Largest supported player count.
        max: usize,
    },

    /// Spy count outside `[1, max_spies(players)]`.
    #[error("spy count {count} out of range [1, {max}]")]
    SpyCountOutOfRange {
        /// Requested spy count.
        count: usize,
        /// Largest spy count allowed for the player count.
        max: usize,
    },

    /// Spies must be at least one and strictly fewer than the players.
    #[error("cannot assign {spies} spies among {players} players")]
    InvalidSpyRatio {
        /// Requested spy count.
        spies: usize,
        /// Requested player count.
        players: usize,
    },

    /// Custom word mode with a word that is empty after trimming.
    #[error("custom secret word is empty")]
    EmptyCustomWord,

    /// Secret word is empty or carries surrounding whitespace.
    #[error("secret word must be non-empty and trimmed")]
    InvalidSecretWord,

    /// A session needs at least one role to walk.
    #[error("no roles to reveal")]
    EmptyRoles,
}

/// Errors from driving a reveal session with an out-of-order event.
///
/// These indicate a presentation-layer bug such as a double tap. The session
/// state is never changed by a rejected event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StateError {
    /// Tried to pass the device before the current player looked.
    #[error("player {player} has not revealed their role yet")]
    NotRevealed {
        /// Zero-based slot awaiting reveal.
        player: usize,
    },

    /// Every player has already seen their role.
    #[error("session already finished")]
    Finished,
}

impl StateError {
    /// Returns true if the caller can ignore this error and keep driving the
    /// session.
    ///
    /// Always true today; the session is defensive by construction.
    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::NotRevealed { .. } | Self::Finished => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_errors_are_recoverable() {
        assert!(StateError::NotRevealed { player: 2 }.is_recoverable());
        assert!(StateError::Finished.is_recoverable());
    }

    #[test]
    fn error_display() {
        let err = ConfigError::InvalidSpyRatio { spies: 3, players: 3 };
        assert_eq!(err.to_string(), "cannot assign 3 spies among 3 players");

        let err = StateError::NotRevealed { player: 1 };
        assert_eq!(err.to_string(), "player 1 has not revealed their role yet");
    }

    #[test]
    fn player_count_display_names_bounds() {
        let err = ConfigError::PlayerCountOutOfRange { count: 2, min: 3, max: 20 };
        assert_eq!(err.to_string(), "player count 2 out of range [3, 20]");
    }
}
