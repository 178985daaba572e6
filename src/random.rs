//! Seeded pseudo-random generator for the shuffle stage.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use sha2::{Digest, Sha256};

/// Uniform generator over [0, 1); the same seed string reproduces the
/// same sequence. Built without a seed it draws from OS entropy.
pub struct SeededRandom {
    rng: StdRng,
}

impl SeededRandom {
    pub fn new(seed: Option<&str>) -> Self {
        let rng = match seed {
            Some(seed) => {
                let digest = Sha256::digest(seed.as_bytes());
                let mut bytes = [0u8; 8];
                bytes.copy_from_slice(&digest[..8]);
                StdRng::seed_from_u64(u64::from_le_bytes(bytes))
            }
            None => StdRng::from_entropy(),
        };
        Self { rng }
    }

    /// Next uniform float in [0, 1).
    pub fn next_f64(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }

    /// Uniform index in [0, bound).
    ///
    /// # Panics
    ///
    /// Panics if `bound` is zero.
    pub fn index(&mut self, bound: usize) -> usize {
        assert!(bound > 0, "index bound must be positive");
        (self.next_f64() * bound as f64) as usize
    }
}
