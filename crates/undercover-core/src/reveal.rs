//! Pass-and-reveal session.
//!
//! Walks the players of a [`GameConfig`] one at a time: the device is passed
//! to a player, they reveal their role privately, hide it, and pass on.
//!
//! # States
//!
//! ```text
//! AwaitingReveal(0) ──reveal──▶ Revealed(0) ──advance──▶ AwaitingReveal(1) ─ ...
//!                                                        Revealed(n-1) ──advance──▶ Finished
//! ```
//!
//! # Invariants
//!
//! - The player index never decreases
//! - Nothing is visible in `AwaitingReveal` or `Finished`
//! - A slot behind the current index is never shown again
//! - A rejected event leaves the state unchanged

use serde::{Deserialize, Serialize};

use crate::{
    error::{ConfigError, StateError},
    event::{RevealAction, RevealEvent},
    game_config::GameConfig,
    role::Role,
};

/// Session state, parameterized by the current player slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealState {
    /// Device is with player `i`; nothing on screen.
    AwaitingReveal(usize),
    /// Player `i` is looking at their role.
    Revealed(usize),
    /// Everyone has seen their role.
    Finished,
}

impl RevealState {
    /// Current player slot, or `None` once finished.
    pub fn index(self) -> Option<usize> {
        match self {
            Self::AwaitingReveal(i) | Self::Revealed(i) => Some(i),
            Self::Finished => None,
        }
    }
}

/// What a revealed player sees. Spies never get the word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoleView<'a> {
    /// "You are the spy".
    Spy,
    /// The shared secret word.
    Civilian {
        /// Word shared by every civilian.
        secret_word: &'a str,
    },
}

impl RoleView<'_> {
    /// The role behind this view.
    pub fn role(&self) -> Role {
        match self {
            Self::Spy => Role::Spy,
            Self::Civilian { .. } => Role::Civilian,
        }
    }

    /// The secret word, if this view carries one.
    pub fn secret_word(&self) -> Option<&str> {
        match self {
            Self::Spy => None,
            Self::Civilian { secret_word } => Some(secret_word),
        }
    }

    /// Detach the view from the session.
    pub fn to_owned_view(&self) -> OwnedRoleView {
        match self {
            Self::Spy => OwnedRoleView::Spy,
            Self::Civilian { secret_word } => {
                OwnedRoleView::Civilian { secret_word: (*secret_word).to_string() }
            },
        }
    }
}

/// Owned form of [`RoleView`], carried in [`RevealAction::ShowRole`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "role", rename_all = "lowercase")]
pub enum OwnedRoleView {
    /// "You are the spy".
    Spy,
    /// The shared secret word.
    Civilian {
        /// Word shared by every civilian.
        secret_word: String,
    },
}

impl OwnedRoleView {
    /// The role behind this view.
    pub fn role(&self) -> Role {
        match self {
            Self::Spy => Role::Spy,
            Self::Civilian { .. } => Role::Civilian,
        }
    }
}

/// "Player k of n" for pass prompts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    /// One-based player number.
    pub player: usize,
    /// Total number of players.
    pub total: usize,
}

/// Sequential reveal state machine.
///
/// Owns the [`GameConfig`] for the duration of the walk; [`reset`] hands it
/// back so the same layout can be replayed or dropped.
///
/// [`reset`]: RevealSession::reset
#[derive(Debug)]
pub struct RevealSession {
    config: GameConfig,
    state: RevealState,
}

impl RevealSession {
    /// Start a session at `AwaitingReveal(0)`.
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        if config.roles().is_empty() {
            return Err(ConfigError::EmptyRoles);
        }

        tracing::debug!(players = config.player_count(), "reveal session started");

        Ok(Self { config, state: RevealState::AwaitingReveal(0) })
    }

    /// Current state.
    pub fn state(&self) -> RevealState {
        self.state
    }

    /// Current player slot, or `None` once finished.
    pub fn current_index(&self) -> Option<usize> {
        self.state.index()
    }

    /// Whether every player has seen their role.
    pub fn is_finished(&self) -> bool {
        self.state == RevealState::Finished
    }

    /// Number of players in the walk.
    pub fn player_count(&self) -> usize {
        self.config.player_count()
    }

    /// Progress for the pass prompt, or `None` once finished.
    pub fn progress(&self) -> Option<Progress> {
        self.current_index().map(|i| Progress { player: i + 1, total: self.player_count() })
    }

    /// Reveal the current player's role.
    ///
    /// Idempotent while already revealed: returns the same view again.
    pub fn reveal(&mut self) -> Result<RoleView<'_>, StateError> {
        let slot = match self.state {
            RevealState::AwaitingReveal(i) => {
                self.state = RevealState::Revealed(i);
                tracing::debug!(player = i, "role revealed");
                i
            },
            RevealState::Revealed(i) => i,
            RevealState::Finished => {
                tracing::warn!("reveal ignored: session finished");
                return Err(StateError::Finished);
            },
        };

        Ok(self.view_of(slot))
    }

    /// Hide the current role and move to the next player.
    ///
    /// Only valid while revealed: a player must look before passing the
    /// device. Returns the new state.
    pub fn advance(&mut self) -> Result<RevealState, StateError> {
        match self.state {
            RevealState::Revealed(i) => {
                let next = i + 1;
                self.state = if next < self.player_count() {
                    RevealState::AwaitingReveal(next)
                } else {
                    RevealState::Finished
                };
                tracing::debug!(from = i, state = ?self.state, "advanced");
                Ok(self.state)
            },
            RevealState::AwaitingReveal(i) => {
                tracing::warn!(player = i, "advance ignored: role not revealed yet");
                Err(StateError::NotRevealed { player: i })
            },
            RevealState::Finished => {
                tracing::warn!("advance ignored: session finished");
                Err(StateError::Finished)
            },
        }
    }

    /// The role on screen, if any.
    ///
    /// `None` outside `Revealed`, so no caller can read ahead.
    pub fn current_role_view(&self) -> Option<RoleView<'_>> {
        match self.state {
            RevealState::Revealed(i) => Some(self.view_of(i)),
            RevealState::AwaitingReveal(_) | RevealState::Finished => None,
        }
    }

    /// Discard the session, returning its config for another round.
    pub fn reset(self) -> GameConfig {
        tracing::debug!(state = ?self.state, "reveal session reset");
        self.config
    }

    /// Process an event and return resulting actions.
    pub fn handle(&mut self, event: RevealEvent) -> Result<Vec<RevealAction>, StateError> {
        let total = self.player_count();

        let action = match event {
            RevealEvent::Reveal => {
                let view = self.reveal()?.to_owned_view();
                let player = self.current_index().unwrap_or(total);
                RevealAction::ShowRole { player, view }
            },
            RevealEvent::Advance => match self.advance()?.index() {
                Some(player) => RevealAction::PromptPass { player, total },
                None => RevealAction::Finished { total },
            },
        };

        Ok(vec![action])
    }

    fn view_of(&self, slot: usize) -> RoleView<'_> {
        match self.config.roles()[slot] {
            Role::Spy => RoleView::Spy,
            Role::Civilian => RoleView::Civilian { secret_word: self.config.secret_word() },
        }
    }
}
