//! Statistical tests for fair role assignment and word selection.
//!
//! All runs use a fixed seed, so a failure reproduces exactly. Tolerances are
//! several standard deviations wide for the trial counts used.
//!
//! # Oracle Pattern
//!
//! Each test tallies outcomes and checks them against the uniform split:
//! - Every spy subset of a given size equally likely
//! - Every slot equally likely to be a spy
//! - Every list entry equally likely to be the secret word

#![allow(clippy::unwrap_used)]

use undercover_core::{
    DEFAULT_WORDS, FALLBACK_WORD, Role, WordMode, assign_roles, build_config, pick_secret_word,
};
use undercover_harness::{SimEnv, Tally, binomial};

/// Helper: spy slots of one assignment, ascending.
fn spy_slots(roles: &[Role]) -> Vec<usize> {
    roles.iter().enumerate().filter(|(_, role)| role.is_spy()).map(|(slot, _)| slot).collect()
}

/// Oracle: every one of the C(players, spies) subsets shows up with roughly
/// equal frequency.
fn verify_uniform_subsets(seed: u64, players: usize, spies: usize, trials: usize, tolerance: f64) {
    let env = SimEnv::with_seed(seed);
    let mut tally = Tally::new();

    for _ in 0..trials {
        let roles = assign_roles(&env, players, spies).unwrap();
        tally.record(spy_slots(&roles));
    }

    let subsets = binomial(players as u64, spies as u64) as usize;
    assert_eq!(
        tally.distinct(),
        subsets,
        "expected all {subsets} subsets of {spies} among {players}, saw {}",
        tally.distinct()
    );

    let deviation = tally.max_relative_deviation(subsets);
    assert!(
        deviation < tolerance,
        "subset frequencies for ({players}, {spies}) deviate by {deviation:.3} (limit {tolerance})"
    );
}

#[test]
fn two_spies_among_five_uniform() {
    verify_uniform_subsets(0x5eed_0001, 5, 2, 20_000, 0.10);
}

#[test]
fn three_spies_among_four_uniform() {
    verify_uniform_subsets(0x5eed_0002, 4, 3, 8_000, 0.10);
}

#[test]
fn one_spy_among_three_uniform() {
    verify_uniform_subsets(0x5eed_0003, 3, 1, 6_000, 0.10);
}

#[test]
fn two_spies_among_six_chi_square() {
    let env = SimEnv::with_seed(0x5eed_0004);
    let mut tally = Tally::new();

    for _ in 0..30_000 {
        let roles = assign_roles(&env, 6, 2).unwrap();
        tally.record(spy_slots(&roles));
    }

    // 15 subsets, 14 degrees of freedom; 50 is far past the 0.999 quantile.
    let chi = tally.chi_square(15);
    assert!(chi < 50.0, "chi-square {chi:.2} too large for a uniform assignment");
}

#[test]
fn every_slot_equally_likely_with_twenty_players() {
    let env = SimEnv::with_seed(0x5eed_0005);
    let mut tally = Tally::new();

    for _ in 0..20_000 {
        let roles = assign_roles(&env, 20, 3).unwrap();
        for slot in spy_slots(&roles) {
            tally.record(slot);
        }
    }

    assert_eq!(tally.trials(), 60_000);
    let deviation = tally.max_relative_deviation(20);
    assert!(deviation < 0.10, "per-slot spy frequency deviates by {deviation:.3}");
}

#[test]
fn random_word_uniform_over_list() {
    let env = SimEnv::with_seed(0x5eed_0006);
    let words = ["Beach", "Zoo", "Hotel", "Train", "Park"];
    let mut tally = Tally::new();

    for _ in 0..25_000 {
        tally.record(pick_secret_word(&env, &WordMode::Random, &words).unwrap());
    }

    assert_eq!(tally.distinct(), words.len());
    let deviation = tally.max_relative_deviation(words.len());
    assert!(deviation < 0.08, "word frequencies deviate by {deviation:.3}");
}

#[test]
fn default_list_reaches_every_word() {
    let env = SimEnv::with_seed(0x5eed_0007);
    let mut tally = Tally::new();

    for _ in 0..4_000 {
        tally.record(pick_secret_word(&env, &WordMode::Random, DEFAULT_WORDS).unwrap());
    }

    for word in DEFAULT_WORDS {
        assert!(tally.count(&(*word).to_string()) > 0, "{word} never picked");
    }
}

#[test]
fn empty_list_always_falls_back() {
    let env = SimEnv::with_seed(0x5eed_0008);
    let empty: &[String] = &[];

    for _ in 0..10 {
        assert_eq!(pick_secret_word(&env, &WordMode::Random, empty).unwrap(), FALLBACK_WORD);
    }
}

#[test]
fn five_players_one_spy_single_word() {
    let env = SimEnv::with_seed(0x5eed_0009);
    let config = build_config(&env, 5, 1, &WordMode::Random, &["Beach"]).unwrap();

    assert_eq!(config.roles().len(), 5);
    assert_eq!(config.roles().iter().filter(|r| r.is_spy()).count(), 1);
    assert_eq!(config.secret_word(), "Beach");
}
