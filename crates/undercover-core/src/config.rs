//! Session configurator.
//!
//! Validates player/spy counts and the secret-word source, then produces an
//! immutable [`GameConfig`].
//!
//! ## Rules
//!
//! - Player count within `[MIN_PLAYERS, MAX_PLAYERS]`
//! - Spy count within `[1, max_spies(players)]`: at most `MAX_SPIES` and
//!   always fewer than the players
//! - Custom word mode requires a word that is non-empty after trimming
//!
//! The free functions are pure (randomness comes from the injected
//! [`Environment`]). [`SessionConfigurator`] wraps them as the mutable form
//! state a setup screen edits.

use std::fmt;

use rand::Rng;

use crate::{
    env::{EnvRng, Environment},
    error::ConfigError,
    game_config::GameConfig,
    role::Role,
    words::FALLBACK_WORD,
};

/// Fewest players a game supports.
pub const MIN_PLAYERS: usize = 3;

/// Most players a game supports.
pub const MAX_PLAYERS: usize = 20;

/// Absolute cap on spies regardless of player count.
pub const MAX_SPIES: usize = 3;

/// Where the secret word comes from.
#[derive(Clone, PartialEq, Eq, Default)]
pub enum WordMode {
    /// Pick uniformly from a word list.
    #[default]
    Random,
    /// Use a word typed by the host. Surrounding whitespace is ignored.
    Custom(String),
}

impl WordMode {
    /// Custom mode with the given word.
    pub fn custom(word: impl Into<String>) -> Self {
        Self::Custom(word.into())
    }
}

impl fmt::Debug for WordMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Random => write!(f, "Random"),
            Self::Custom(_) => write!(f, "Custom(<redacted>)"),
        }
    }
}

/// Largest spy count allowed for `player_count` players.
///
/// `max(1, min(MAX_SPIES, player_count - 1))`.
pub fn max_spies(player_count: usize) -> usize {
    player_count.saturating_sub(1).min(MAX_SPIES).max(1)
}

/// Spy count to keep after the player count changes.
///
/// Spies must stay strictly fewer than players: when `old_spy_count` no
/// longer fits it drops to `max(1, new_player_count - 1)`.
pub fn clamp_spy_count(new_player_count: usize, old_spy_count: usize) -> usize {
    if old_spy_count >= new_player_count {
        new_player_count.saturating_sub(1).max(1)
    } else {
        old_spy_count
    }
}

/// Check player and spy counts.
pub(crate) fn check_counts(player_count: usize, spy_count: usize) -> Result<(), ConfigError> {
    if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&player_count) {
        return Err(ConfigError::PlayerCountOutOfRange {
            count: player_count,
            min: MIN_PLAYERS,
            max: MAX_PLAYERS,
        });
    }

    let max = max_spies(player_count);
    if !(1..=max).contains(&spy_count) {
        return Err(ConfigError::SpyCountOutOfRange { count: spy_count, max });
    }

    Ok(())
}

/// Check whether a game can start, reporting the first violated rule.
pub fn check(player_count: usize, spy_count: usize, word_mode: &WordMode) -> Result<(), ConfigError> {
    check_counts(player_count, spy_count)?;

    if let WordMode::Custom(word) = word_mode
        && word.trim().is_empty()
    {
        return Err(ConfigError::EmptyCustomWord);
    }

    Ok(())
}

/// Whether a game can start with these settings.
pub fn validate(player_count: usize, spy_count: usize, word_mode: &WordMode) -> bool {
    check(player_count, spy_count, word_mode).is_ok()
}

/// Same as [`validate`]; the name a setup screen binds its start button to.
pub fn can_start(player_count: usize, spy_count: usize, word_mode: &WordMode) -> bool {
    validate(player_count, spy_count, word_mode)
}

/// Choose the secret word.
///
/// Random mode draws uniformly from `word_list`. An empty list, or a drawn
/// entry that is blank after trimming, yields [`FALLBACK_WORD`].
pub fn pick_secret_word<E, S>(
    env: &E,
    word_mode: &WordMode,
    word_list: &[S],
) -> Result<String, ConfigError>
where
    E: Environment,
    S: AsRef<str>,
{
    match word_mode {
        WordMode::Custom(word) => {
            let trimmed = word.trim();
            if trimmed.is_empty() {
                return Err(ConfigError::EmptyCustomWord);
            }
            Ok(trimmed.to_string())
        },
        WordMode::Random => {
            if word_list.is_empty() {
                tracing::warn!("word list is empty, using fallback word");
                return Ok(FALLBACK_WORD.to_string());
            }

            let index = EnvRng::new(env).gen_range(0..word_list.len());
            let picked = word_list.get(index).map(|w| w.as_ref().trim()).filter(|w| !w.is_empty());

            match picked {
                Some(word) => Ok(word.to_string()),
                None => {
                    tracing::warn!(index, "blank entry in word list, using fallback word");
                    Ok(FALLBACK_WORD.to_string())
                },
            }
        },
    }
}

/// Assign `spy_count` spies among `player_count` slots.
///
/// Partial Fisher–Yates over slot indices: each step draws from the slots not
/// yet chosen and swaps the pick out of that range, so every subset of size
/// `spy_count` is equally likely and no slot is drawn twice. O(player_count).
pub fn assign_roles<E: Environment>(
    env: &E,
    player_count: usize,
    spy_count: usize,
) -> Result<Vec<Role>, ConfigError> {
    if spy_count < 1 || spy_count >= player_count {
        return Err(ConfigError::InvalidSpyRatio { spies: spy_count, players: player_count });
    }

    let mut rng = EnvRng::new(env);
    let mut slots: Vec<usize> = (0..player_count).collect();
    let mut roles = vec![Role::Civilian; player_count];

    for drawn in 0..spy_count {
        // slots[drawn..] are still unchosen
        let pick = rng.gen_range(drawn..player_count);
        slots.swap(drawn, pick);
        roles[slots[drawn]] = Role::Spy;
    }

    Ok(roles)
}

/// Build the configuration for one game.
///
/// Fails with the violated rule if [`check`] rejects the settings.
pub fn build_config<E, S>(
    env: &E,
    player_count: usize,
    spy_count: usize,
    word_mode: &WordMode,
    word_list: &[S],
) -> Result<GameConfig, ConfigError>
where
    E: Environment,
    S: AsRef<str>,
{
    check(player_count, spy_count, word_mode)?;

    let secret_word = pick_secret_word(env, word_mode, word_list)?;
    let roles = assign_roles(env, player_count, spy_count)?;

    tracing::debug!(players = player_count, spies = spy_count, "built game config");

    Ok(GameConfig::new_unchecked(roles, secret_word))
}

/// Setup-screen state: the counts and word source a host is editing.
///
/// Setters keep the state inside the supported ranges, so a configurator can
/// only fail to start on an empty custom word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfigurator {
    player_count: usize,
    spy_count: usize,
    word_mode: WordMode,
}

impl Default for SessionConfigurator {
    fn default() -> Self {
        Self { player_count: 5, spy_count: 1, word_mode: WordMode::Random }
    }
}

impl SessionConfigurator {
    /// Create a configurator with the default setup (5 players, 1 spy, random
    /// word).
    pub fn new() -> Self {
        Self::default()
    }

    /// Current player count.
    pub fn player_count(&self) -> usize {
        self.player_count
    }

    /// Current spy count.
    pub fn spy_count(&self) -> usize {
        self.spy_count
    }

    /// Current word source.
    pub fn word_mode(&self) -> &WordMode {
        &self.word_mode
    }

    /// Set the player count, clamped to `[MIN_PLAYERS, MAX_PLAYERS]`.
    ///
    /// Re-clamps the spy count so it stays below the new player count.
    pub fn set_player_count(&mut self, count: usize) {
        let count = count.clamp(MIN_PLAYERS, MAX_PLAYERS);
        let spies = clamp_spy_count(count, self.spy_count);

        if spies != self.spy_count {
            tracing::debug!(players = count, from = self.spy_count, to = spies, "clamped spies");
        }

        self.player_count = count;
        self.spy_count = spies;
    }

    /// Set the spy count, clamped to `[1, max_spies()]`.
    pub fn set_spy_count(&mut self, count: usize) {
        self.spy_count = count.clamp(1, self.max_spies());
    }

    /// Set the word source.
    pub fn set_word_mode(&mut self, mode: WordMode) {
        self.word_mode = mode;
    }

    /// Largest spy count for the current player count.
    pub fn max_spies(&self) -> usize {
        max_spies(self.player_count)
    }

    /// Check the current settings.
    pub fn check(&self) -> Result<(), ConfigError> {
        check(self.player_count, self.spy_count, &self.word_mode)
    }

    /// Whether a game can start with the current settings.
    pub fn can_start(&self) -> bool {
        can_start(self.player_count, self.spy_count, &self.word_mode)
    }

    /// Build a game from the current settings.
    pub fn build<E, S>(&self, env: &E, word_list: &[S]) -> Result<GameConfig, ConfigError>
    where
        E: Environment,
        S: AsRef<str>,
    {
        build_config(env, self.player_count, self.spy_count, &self.word_mode, word_list)
    }
}
