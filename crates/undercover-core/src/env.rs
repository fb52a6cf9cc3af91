//! Environment abstraction for deterministic testing.
//!
//! The `Environment` trait decouples game logic from the source of
//! randomness. This enables:
//!
//! - Deterministic Testing: a seeded RNG reproduces the exact role layout and
//!   word pick of a failing run.
//!
//! - Production Runtime: the binary draws from OS entropy without any change
//!   to the configurator.
//!
//! # Invariants
//!
//! - Determinism: Given the same seed, `random_bytes()` produces the same
//!   sequence
//! - Isolation: Implementations must not share global state

use rand::RngCore;

/// Abstract environment providing randomness.
///
/// Every random decision in the core (spy slots, random secret word) is drawn
/// through this trait, never from a global generator.
pub trait Environment: Clone + Send + Sync + 'static {
    /// Fills the provided buffer with random bytes.
    ///
    /// # Invariants
    ///
    /// - Determinism during tests: Given the same RNG seed, this produces the
    ///   same sequence of bytes
    /// - Unpredictability in production: Uses OS entropy so players cannot
    ///   predict who the spy is
    fn random_bytes(&self, buffer: &mut [u8]);

    /// Generates a random `u32`.
    fn random_u32(&self) -> u32 {
        let mut bytes = [0u8; 4];
        self.random_bytes(&mut bytes);
        u32::from_be_bytes(bytes)
    }

    /// Generates a random `u64`.
    fn random_u64(&self) -> u64 {
        let mut bytes = [0u8; 8];
        self.random_bytes(&mut bytes);
        u64::from_be_bytes(bytes)
    }
}

/// Adapter exposing an [`Environment`] as a [`rand::RngCore`].
///
/// Lets the configurator use `rand`'s unbiased range sampling while every
/// byte still comes from the injected environment.
pub struct EnvRng<'a, E: Environment> {
    env: &'a E,
}

impl<'a, E: Environment> EnvRng<'a, E> {
    /// Wrap an environment.
    pub fn new(env: &'a E) -> Self {
        Self { env }
    }
}

impl<E: Environment> RngCore for EnvRng<'_, E> {
    fn next_u32(&mut self) -> u32 {
        self.env.random_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.env.random_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.env.random_bytes(dest);
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.env.random_bytes(dest);
        Ok(())
    }
}


#[cfg(test)]
mod tests {
    use rand::Rng;

    use super::{testing::SeededEnv, *};

    #[test]
    fn same_seed_same_sequence() {
        let a = SeededEnv::new(7);
        let b = SeededEnv::new(7);

        let seq_a: Vec<u64> = (0..8).map(|_| a.random_u64()).collect();
        let seq_b: Vec<u64> = (0..8).map(|_| b.random_u64()).collect();

        assert_eq!(seq_a, seq_b);
    }

    #[test]
    fn clones_share_the_stream() {
        let env = SeededEnv::new(1);
        let clone = env.clone();

        let first = env.random_u64();
        let second = clone.random_u64();

        let fresh = SeededEnv::new(1);
        assert_eq!(first, fresh.random_u64());
        assert_eq!(second, fresh.random_u64());
    }

    #[test]
    fn env_rng_stays_in_range() {
        let env = SeededEnv::new(99);
        let mut rng = EnvRng::new(&env);

        for _ in 0..1000 {
            let n = rng.gen_range(0..5usize);
            assert!(n < 5);
        }
    }
}
