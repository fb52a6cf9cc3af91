//! Seeded environment for deterministic tests.

use std::sync::{Arc, Mutex, PoisonError};

use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use undercover_core::Environment;

/// Deterministic environment backed by a seeded ChaCha RNG.
///
/// Clones share one stream, so a config built through any clone advances the
/// same sequence. The seed is logged on creation for reproduction.
#[derive(Clone)]
pub struct SimEnv {
    rng: Arc<Mutex<ChaCha8Rng>>,
    seed: u64,
}

impl SimEnv {
    /// Create an environment from a seed.
    pub fn with_seed(seed: u64) -> Self {
        tracing::debug!(seed, "sim env seeded");
        Self { rng: Arc::new(Mutex::new(ChaCha8Rng::seed_from_u64(seed))), seed }
    }

    /// Seed this environment was created with.
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl Environment for SimEnv {
    fn random_bytes(&self, buffer: &mut [u8]) {
        self.rng.lock().unwrap_or_else(PoisonError::into_inner).fill_bytes(buffer);
    }
}
