//! Seeded random number generation for board generation.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces the same sequence of boards
//! - **Serializable**: O(1) state capture and restore
//! - **Entropy fallback**: Unseeded sessions draw a seed from the OS
//!
//! ```
//! use lights_out::core::GameRng;
//!
//! let mut a = GameRng::new(7);
//! let mut b = GameRng::new(7);
//! assert_eq!(a.unit(), b.unit());
//! ```

use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Deterministic RNG backing `BoardEngine`.
///
/// Uses ChaCha8: fast, and stable across platforms so seeded boards
/// are reproducible.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG seeded from operating system entropy.
    ///
    /// The chosen seed is kept, so the run can still be replayed via `seed()`.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::thread_rng().next_u64())
    }

    /// Create from an optional seed, falling back to entropy.
    #[must_use]
    pub fn from_optional_seed(seed: Option<u64>) -> Self {
        seed.map_or_else(Self::from_entropy, Self::new)
    }

    /// The seed this generator was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Draw a uniform value in `[0, 1)`.
    pub fn unit(&mut self) -> f64 {
        self.inner.gen::<f64>()
    }

    /// Bernoulli trial: true with probability `chance`.
    ///
    /// The draw is compared with `<`, so `0.0` never succeeds and `1.0`
    /// always does.
    pub fn chance(&mut self, chance: f64) -> bool {
        self.unit() < chance
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

/// Serializable RNG state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determinism() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);

        for _ in 0..100 {
            assert_eq!(rng1.unit(), rng2.unit());
        }
    }

    #[test]
    fn test_different_seeds() {
        let mut rng1 = GameRng::new(1);
        let mut rng2 = GameRng::new(2);

        let seq1: Vec<_> = (0..10).map(|_| rng1.unit()).collect();
        let seq2: Vec<_> = (0..10).map(|_| rng2.unit()).collect();

        assert_ne!(seq1, seq2);
    }

    #[test]
    fn test_unit_range() {
        let mut rng = GameRng::new(3);
        for _ in 0..1000 {
            let u = rng.unit();
            assert!((0.0..1.0).contains(&u));
        }
    }

    #[test]
    fn test_chance_extremes() {
        let mut rng = GameRng::new(9);
        for _ in 0..500 {
            assert!(!rng.chance(0.0));
            assert!(rng.chance(1.0));
        }
    }

    #[test]
    fn test_optional_seed() {
        assert_eq!(GameRng::from_optional_seed(Some(11)).seed(), 11);
        // Entropy path just needs to produce a usable generator
        let mut rng = GameRng::from_optional_seed(None);
        assert!(rng.unit() < 1.0);
    }

    #[test]
    fn test_state_serialization() {
        let mut rng = GameRng::new(42);

        for _ in 0..100 {
            rng.unit();
        }

        let state = rng.state();
        let expected: Vec<_> = (0..10).map(|_| rng.unit()).collect();

        let mut restored = GameRng::from_state(&state);
        let actual: Vec<_> = (0..10).map(|_| restored.unit()).collect();

        assert_eq!(expected, actual);
    }

    #[test]
    fn test_state_serde() {
        let state = GameRngState {
            seed: 42,
            word_pos: 12345,
        };

        let json = serde_json::to_string(&state).unwrap();
        let deserialized: GameRngState = serde_json::from_str(&json).unwrap();

        assert_eq!(state, deserialized);
    }
}
