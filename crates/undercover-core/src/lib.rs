//! Undercover Core
//!
//! Role assignment and pass-and-reveal session logic for the Undercover party
//! game: players share one device, most of them learn a secret word, a few
//! spies do not.
//!
//! # Architecture
//!
//! The core is a pure library that:
//! - Validates setup input and builds an immutable [`GameConfig`]
//! - Walks the players through a private reveal with [`RevealSession`]
//! - Uses the [`Environment`] trait for randomness (deterministic testing)
//!
//! No I/O, no timers, no global state. A presentation layer owns rendering and
//! calls into the core on discrete user events.
//!
//! # Components
//!
//! - [`SessionConfigurator`]: Setup-screen state and config builder
//! - [`GameConfig`]: Role layout plus secret word
//! - [`RevealSession`]: Sequential reveal state machine
//! - [`RevealEvent`]: Events fed into the session
//! - [`RevealAction`]: Actions produced by the session

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod config;
pub mod env;
mod error;
mod event;
mod game_config;
pub mod reveal;
mod role;
pub mod words;

pub use config::{
    MAX_PLAYERS, MAX_SPIES, MIN_PLAYERS, SessionConfigurator, WordMode, assign_roles, build_config,
    can_start, check, clamp_spy_count, max_spies, pick_secret_word, validate,
};
pub use env::{EnvRng, Environment};
pub use error::{ConfigError, StateError};
pub use event::{RevealAction, RevealEvent};
pub use game_config::GameConfig;
pub use reveal::{OwnedRoleView, Progress, RevealSession, RevealState, RoleView};
pub use role::Role;
pub use words::{DEFAULT_WORDS, FALLBACK_WORD};
