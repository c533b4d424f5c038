use rand::seq::SliceRandom;
use rand_chacha::{
    rand_core::{RngCore, SeedableRng},
    ChaCha8Rng,
};

/// Deterministic generator for benchmark and test key sequences.
pub struct RNG {
    rng: ChaCha8Rng,
}
impl RNG {
    /// Creates a new generator using a random seed.
    pub fn new() -> Self {
        let seed: u64 = rand::random();
        RNG::from_seed(seed)
    }

    /// Creates a new generator using the provided seed
    pub fn from_seed(seed: u64) -> Self {
        let rng = ChaCha8Rng::seed_from_u64(seed);
        RNG { rng }
    }

    pub fn next_value(&mut self) -> u32 {
        self.rng.next_u32()
    }

    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        items.shuffle(&mut self.rng);
    }
}

impl Default for RNG {
    fn default() -> Self {
        RNG::new()
    }
}

/// Keys of the form `i * i mod modulus`, the synthetic sequence the bulk
/// insertion benchmark loads. Repeats are fine there; inserting a key that
/// is already present is a no-op.
pub fn quadratic_keys(count: u64, modulus: u64) -> impl Iterator<Item = u64> {
    (0..count).map(move |i| i.wrapping_mul(i) % modulus)
}

/// `count` distinct keys in shuffled order.
pub fn distinct_keys(rng: &mut RNG, count: u32) -> Vec<u32> {
    let mut keys: Vec<u32> = (0..count).collect();
    rng.shuffle(&mut keys);
    keys
}

#[cfg(test)]
mod tests {
    use super::{distinct_keys, quadratic_keys, RNG};

    #[test]
    fn same_seed_means_same_sequence() {
        let mut a = RNG::from_seed(99);
        let mut b = RNG::from_seed(99);
        for _ in 0..32 {
            assert_eq!(a.next_value(), b.next_value());
        }
    }

    #[test]
    fn quadratic_keys_stay_below_the_modulus() {
        assert!(quadratic_keys(10_000, 8_000_009).all(|key| key < 8_000_009));
    }

    #[test]
    fn distinct_keys_are_distinct() {
        let mut rng = RNG::from_seed(7);
        let mut keys = distinct_keys(&mut rng, 1000);
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), 1000);
    }
}
