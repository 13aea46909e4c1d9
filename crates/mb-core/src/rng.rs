//! Random number generation for prize draws and cosmetic effects
//!
//! Uses a seeded ChaCha RNG for reproducibility. Gameplay decisions and
//! cosmetic effects should each own a separate `GameRng` so that confetti
//! never shifts which prize a seed produces.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Game random number generator
///
/// Wraps ChaCha8Rng for reproducible random number generation.
/// Note: RNG state is not serialized - a restored RNG restarts from its seed.
#[derive(Debug, Clone)]
pub struct GameRng {
    rng: ChaCha8Rng,
    seed: u64,
}

// Custom serialization - only serialize seed, recreate RNG on deserialize
impl Serialize for GameRng {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.seed.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for GameRng {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let seed = u64::deserialize(deserializer)?;
        Ok(GameRng::new(seed))
    }
}

impl GameRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create a new RNG with a random seed
    #[cfg(feature = "std")]
    pub fn from_entropy() -> Self {
        let seed = rand::random();
        Self::new(seed)
    }

    /// Get the seed used to create this RNG
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Returns 0..n-1, or 0 if n is 0.
    pub fn rn2(&mut self, n: u32) -> u32 {
        if n == 0 {
            return 0;
        }
        self.rng.gen_range(0..n)
    }

    /// Returns lo..=hi. The bounds may be given in either order.
    pub fn rn_range(&mut self, lo: i32, hi: i32) -> i32 {
        let (lo, hi) = if lo <= hi { (lo, hi) } else { (hi, lo) };
        self.rng.gen_range(lo..=hi)
    }

    /// Choose a random element from a slice
    pub fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            None
        } else {
            Some(&items[self.rn2(items.len() as u32) as usize])
        }
    }

    /// Derive an independent stream from this one, e.g. a cosmetic RNG
    /// seeded from the gameplay seed.
    pub fn fork(&self, salt: u64) -> Self {
        Self::new(self.seed ^ salt.rotate_left(17))
    }
}

#[cfg(feature = "std")]
impl Default for GameRng {
    fn default() -> Self {
        Self::from_entropy()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rn2_bounds() {
        let mut rng = GameRng::new(42);
        for _ in 0..1000 {
            let n = rng.rn2(10);
            assert!(n < 10);
        }
    }

    #[test]
    fn test_rn_range_symmetric() {
        let mut rng = GameRng::new(42);
        let mut seen_low = false;
        let mut seen_high = false;
        for _ in 0..2000 {
            let n = rng.rn_range(-6, 6);
            assert!((-6..=6).contains(&n));
            seen_low |= n == -6;
            seen_high |= n == 6;
        }
        assert!(seen_low && seen_high);
    }

    #[test]
    fn test_rn_range_swapped_bounds() {
        let mut rng = GameRng::new(7);
        for _ in 0..100 {
            let n = rng.rn_range(3, -3);
            assert!((-3..=3).contains(&n));
        }
        assert_eq!(rng.rn_range(5, 5), 5);
    }

    #[test]
    fn test_choose() {
        let mut rng = GameRng::new(42);
        let empty: [u8; 0] = [];
        assert!(rng.choose(&empty).is_none());
        let items = [1, 2, 3];
        for _ in 0..100 {
            assert!(items.contains(rng.choose(&items).unwrap()));
        }
    }

    #[test]
    fn test_reproducibility() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);

        for _ in 0..100 {
            assert_eq!(rng1.rn2(100), rng2.rn2(100));
        }
    }

    #[test]
    fn test_fork_is_distinct_and_stable() {
        let base = GameRng::new(42);
        let mut a = base.fork(1);
        let mut b = base.fork(1);
        assert_ne!(a.seed(), base.seed());
        for _ in 0..20 {
            assert_eq!(a.rn2(1000), b.rn2(1000));
        }
    }

    #[test]
    fn test_serde_keeps_seed() {
        let rng = GameRng::new(99);
        let json = serde_json::to_string(&rng).unwrap();
        assert_eq!(json, "99");
        let restored: GameRng = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.seed(), 99);
    }

    #[test]
    fn test_zero_inputs() {
        let mut rng = GameRng::new(42);
        assert_eq!(rng.rn2(0), 0);
    }
}
