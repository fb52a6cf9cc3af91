//! Immutable per-game configuration.

use std::fmt;

use crate::{config, error::ConfigError, role::Role};

/// Role layout and secret word for one game.
///
/// Constructed once per game by [`config::build_config`] (or the validating
/// [`GameConfig::from_parts`]) and immutable thereafter.
///
/// # Invariants
///
/// - `roles.len()` is within `[MIN_PLAYERS, MAX_PLAYERS]`
/// - Spy count is within `[1, max_spies(roles.len())]`
/// - `secret_word` is non-empty and has no surrounding whitespace
///
/// # Security
///
/// - **Debug Redaction**: The `Debug` impl prints only counts. The secret word
///   and which slots are spies must never reach logs.
#[derive(Clone, PartialEq, Eq)]
pub struct GameConfig {
    roles: Vec<Role>,
    secret_word: String,
}

impl GameConfig {
    /// Build a config from an explicit role layout and word, checking every
    /// invariant.
    ///
    /// Useful for replaying a known layout; normal play goes through
    /// [`config::build_config`].
    pub fn from_parts(roles: Vec<Role>, secret_word: impl Into<String>) -> Result<Self, ConfigError> {
        let secret_word = secret_word.into();
        let spies = roles.iter().filter(|role| role.is_spy()).count();

        config::check_counts(roles.len(), spies)?;

        if secret_word.is_empty() || secret_word.trim() != secret_word {
            return Err(ConfigError::InvalidSecretWord);
        }

        Ok(Self { roles, secret_word })
    }

    /// Assemble a config whose parts the configurator already validated.
    pub(crate) fn new_unchecked(roles: Vec<Role>, secret_word: String) -> Self {
        Self { roles, secret_word }
    }

    /// Roles indexed by player slot.
    pub fn roles(&self) -> &[Role] {
        &self.roles
    }

    /// Role of a single slot.
    pub fn role(&self, slot: usize) -> Option<Role> {
        self.roles.get(slot).copied()
    }

    /// The word every civilian sees.
    pub fn secret_word(&self) -> &str {
        &self.secret_word
    }

    /// Number of players.
    pub fn player_count(&self) -> usize {
        self.roles.len()
    }

    /// Number of spies.
    pub fn spy_count(&self) -> usize {
        self.roles.iter().filter(|role| role.is_spy()).count()
    }
}

impl fmt::Debug for GameConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GameConfig")
            .field("players", &self.player_count())
            .field("spies", &self.spy_count())
            .field("secret_word", &"<redacted>")
            .finish()
    }
}
