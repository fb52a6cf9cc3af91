//! Production Environment implementation using OS randomness.
//!
//! This module provides `SystemEnv`, the production implementation of the
//! `Environment` trait.

use undercover_core::Environment;

/// Production environment backed by `getrandom`.
///
/// Players sharing the device must not be able to predict who the spy is, so
/// spy slots and random words come from OS entropy.
#[derive(Clone, Default)]
pub struct SystemEnv;

impl SystemEnv {
    /// Create a new system environment.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Environment for SystemEnv {
    fn random_bytes(&self, buffer: &mut [u8]) {
        getrandom::fill(buffer).unwrap_or_else(|e| {
            // NOTE: This should never fail on supported platforms. Zeros keep
            // the game playable; the assignment is then predictable.
            tracing::error!("getrandom failed: {}", e);
            buffer.fill(0);
        });
    }
}
