//! Undercover terminal shell.
//!
//! # Usage
//!
//! ```bash
//! # Five players, one spy, random word from the built-in list
//! undercover
//!
//! # Eight players, two spies, host-chosen word
//! undercover --players 8 --spies 2 --word "Lighthouse"
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod error;
mod shell;
mod system_env;

use std::io;

use clap::Parser;
use error::CliError;
use shell::Shell;
use system_env::SystemEnv;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};
use undercover_core::{
    ConfigError, DEFAULT_WORDS, RevealSession, SessionConfigurator, WordMode, check,
};

/// Undercover pass-and-play
#[derive(Parser, Debug)]
#[command(name = "undercover")]
#[command(about = "Hidden-role party game: pass the device, reveal, discuss")]
#[command(version)]
struct Args {
    /// Number of players (3-20)
    #[arg(short, long, default_value = "5")]
    players: usize,

    /// Number of spies (1 to min(3, players - 1))
    #[arg(short, long, default_value = "1")]
    spies: usize,

    /// Secret word; omit to pick one at random
    #[arg(short, long)]
    word: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn")]
    log_level: String,
}

/// Map arguments onto the setup state, rejecting anything out of range
/// instead of silently clamping it.
fn configurator_from_args(args: &Args) -> Result<SessionConfigurator, ConfigError> {
    let word_mode = args.word.clone().map_or(WordMode::Random, WordMode::Custom);
    check(args.players, args.spies, &word_mode)?;

    let mut configurator = SessionConfigurator::new();
    configurator.set_player_count(args.players);
    configurator.set_spy_count(args.spies);
    configurator.set_word_mode(word_mode);
    Ok(configurator)
}

fn run(args: &Args) -> Result<(), CliError> {
    let configurator = configurator_from_args(args)?;
    let env = SystemEnv::new();

    let mut shell = Shell::new(io::stdin().lock(), io::stdout().lock());

    loop {
        let config = configurator.build(&env, DEFAULT_WORDS)?;
        tracing::info!(?config, "game ready");

        let mut session = RevealSession::new(config)?;
        shell.run_session(&mut session)?;

        if !shell.confirm("New game with fresh roles?")? {
            break;
        }
    }

    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));

    // Logs go to stderr so they never land on the reveal screen.
    tracing_subscriber::registry().with(fmt::layer().with_writer(io::stderr)).with(filter).init();

    tracing::info!("Undercover starting");

    run(&args)?;

    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use undercover_harness::SimEnv;

    use super::*;

    fn args(players: usize, spies: usize, word: Option<&str>) -> Args {
        Args { players, spies, word: word.map(str::to_string), log_level: "warn".to_string() }
    }

    #[test]
    fn args_build_requested_game() {
        let configurator = configurator_from_args(&args(8, 2, Some("  Lighthouse "))).unwrap();
        let config = configurator.build(&SimEnv::with_seed(3), DEFAULT_WORDS).unwrap();

        assert_eq!(config.player_count(), 8);
        assert_eq!(config.spy_count(), 2);
        assert_eq!(config.secret_word(), "Lighthouse");
    }

    #[test]
    fn args_default_to_random_word() {
        let configurator = configurator_from_args(&args(5, 1, None)).unwrap();
        let config = configurator.build(&SimEnv::with_seed(4), DEFAULT_WORDS).unwrap();

        assert!(DEFAULT_WORDS.contains(&config.secret_word()));
    }

    #[test]
    fn out_of_range_args_are_rejected_not_clamped() {
        assert!(matches!(
            configurator_from_args(&args(2, 1, None)),
            Err(ConfigError::PlayerCountOutOfRange { count: 2, .. })
        ));
        assert!(matches!(
            configurator_from_args(&args(6, 4, None)),
            Err(ConfigError::SpyCountOutOfRange { count: 4, max: 3 })
        ));
        assert!(matches!(
            configurator_from_args(&args(6, 1, Some("  "))),
            Err(ConfigError::EmptyCustomWord)
        ));
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }
}
