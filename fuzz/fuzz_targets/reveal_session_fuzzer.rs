//! Fuzz target for [`RevealSession`] and the configurator feeding it
//!
//! Prevent role leakage via invalid setup input or out-of-order events
//!
//! # Strategy
//!
//! - Setup probing: Arbitrary player/spy counts and custom words, including
//!   out-of-range counts and whitespace-only words
//! - Event sequences: Arbitrary reveals, advances, peeks and replays
//! - Model comparison: Every result checked against `ModelSession`
//!
//! # Invariants
//!
//! - `build_config` succeeds exactly when `validate` says the game can start
//! - A built config has exactly the requested spies and a trimmed word
//! - Player index never decreases within one walk
//! - Nothing visible outside `Revealed`
//! - Spy views never carry the secret word
//! - Rejected events leave the state unchanged
//! - NEVER panic on any input

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use undercover_core::{
    DEFAULT_WORDS, RevealSession, RevealState, Role, WordMode, build_config, validate,
};
use undercover_harness::{ModelSession, Operation, OperationResult, SimEnv};

#[derive(Debug, Clone, Arbitrary)]
struct FuzzInput {
    seed: u64,
    players: u8,
    spies: u8,
    custom_word: Option<String>,
    ops: Vec<Operation>,
}

fuzz_target!(|input: FuzzInput| {
    let env = SimEnv::with_seed(input.seed);
    let players = usize::from(input.players);
    let spies = usize::from(input.spies);
    let word_mode = input.custom_word.clone().map_or(WordMode::Random, WordMode::Custom);

    let can_start = validate(players, spies, &word_mode);
    let config = match build_config(&env, players, spies, &word_mode, DEFAULT_WORDS) {
        Ok(config) => {
            assert!(can_start, "built a config validate rejected");
            config
        },
        Err(_) => {
            assert!(!can_start, "validate accepted a config build rejected");
            return;
        },
    };

    assert_eq!(config.player_count(), players);
    assert_eq!(config.spy_count(), spies);
    assert_eq!(config.secret_word().trim(), config.secret_word());
    assert!(!config.secret_word().is_empty());

    let roles = config.roles().to_vec();
    let word = config.secret_word().to_string();
    let mut model = ModelSession::new(roles.clone(), word.clone());
    let Ok(mut session) = RevealSession::new(config) else {
        panic!("valid config rejected by session");
    };

    let mut last_index = 0;

    for op in input.ops {
        let before = session.state();

        let real = match op {
            Operation::Reveal => match session.reveal() {
                Ok(view) => {
                    let player = session_index(before);
                    if view.role() == Role::Spy {
                        assert!(view.secret_word().is_none(), "spy saw the word");
                    }
                    OperationResult::Shown {
                        player,
                        role: view.role(),
                        word: view.secret_word().map(str::to_string),
                    }
                },
                Err(e) => OperationResult::Error(e.into()),
            },
            Operation::Advance => match session.advance() {
                Ok(state) => OperationResult::Moved { next: state.index() },
                Err(e) => OperationResult::Error(e.into()),
            },
            Operation::Peek => match session.current_role_view() {
                Some(view) => OperationResult::Shown {
                    player: session_index(before),
                    role: view.role(),
                    word: view.secret_word().map(str::to_string),
                },
                None => OperationResult::Hidden,
            },
            Operation::Replay => {
                let config = session.reset();
                let Ok(fresh) = RevealSession::new(config) else {
                    panic!("replayed config rejected by session");
                };
                session = fresh;
                last_index = 0;
                OperationResult::Restarted
            },
        };

        assert_eq!(model.apply(op), real, "model divergence on {op:?}");

        if real.is_err() {
            assert_eq!(session.state(), before, "rejected {op:?} changed state");
        }

        let index = session.current_index().unwrap_or(roles.len());
        assert!(index >= last_index, "index went backwards");
        last_index = index;

        if !matches!(session.state(), RevealState::Revealed(_)) {
            assert!(session.current_role_view().is_none(), "role visible outside reveal");
        }
    }
});

fn session_index(state: RevealState) -> usize {
    state.index().unwrap_or_default()
}
