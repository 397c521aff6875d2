//! Deterministic random source
//!
//! Every stochastic decision in a game (rival identity, crisis rolls, flavor
//! line selection) draws from the single stream owned by the game state, in a
//! fixed call order. Two games seeded identically and fed the same choices
//! therefore stay identical turn for turn, and the stream position survives
//! a save/reload because the generator itself is serialized.

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RandomSource {
    seed: u64,
    rng: ChaCha8Rng,
}

impl RandomSource {
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Reset the stream to the start of `seed`
    pub fn reseed(&mut self, seed: u64) {
        self.seed = seed;
        self.rng = ChaCha8Rng::seed_from_u64(seed);
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Uniform draw in `[0, 1)`
    pub fn next_f64(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }

    /// Bernoulli trial with probability `p`
    pub fn chance(&mut self, p: f64) -> bool {
        self.next_f64() < p
    }

    /// Uniformly pick one element. `None` only for an empty slice.
    pub fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        items.choose(&mut self.rng)
    }
}

impl Default for RandomSource {
    fn default() -> Self {
        Self::seeded(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_stream() {
        let mut a = RandomSource::seeded(42);
        let mut b = RandomSource::seeded(42);
        for _ in 0..32 {
            assert_eq!(a.next_f64().to_bits(), b.next_f64().to_bits());
        }
    }

    #[test]
    fn test_reseed_restarts_stream() {
        let mut rng = RandomSource::seeded(7);
        let first: Vec<u64> = (0..5).map(|_| rng.next_f64().to_bits()).collect();
        rng.reseed(7);
        let again: Vec<u64> = (0..5).map(|_| rng.next_f64().to_bits()).collect();
        assert_eq!(first, again);
        assert_eq!(rng.seed(), 7);
    }

    #[test]
    fn test_choose_empty_is_none() {
        let mut rng = RandomSource::seeded(1);
        let empty: [&str; 0] = [];
        assert!(rng.choose(&empty).is_none());
    }

    #[test]
    fn test_choose_returns_member() {
        let mut rng = RandomSource::seeded(3);
        let items = ["a", "b", "c"];
        for _ in 0..50 {
            let picked = rng.choose(&items).unwrap();
            assert!(items.contains(picked));
        }
    }

    #[test]
    fn test_serde_preserves_position() {
        let mut rng = RandomSource::seeded(99);
        rng.next_f64();
        rng.next_f64();
        let json = serde_json::to_string(&rng).unwrap();
        let mut restored: RandomSource = serde_json::from_str(&json).unwrap();
        assert_eq!(rng, restored);
        assert_eq!(rng.next_f64().to_bits(), restored.next_f64().to_bits());
    }
}
