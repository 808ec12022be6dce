//! Uniform float sources for parameter initialization.
//!
//! The encoder never owns a generator. Initialization borrows anything that
//! implements [`UniformSource`], which every [`rand::Rng`] does, so tests can
//! inject a scripted source and applications can pick their own algorithm.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use sha2::{Digest, Sha256};

/// A capability that yields floats uniformly distributed over a range.
pub trait UniformSource {
    /// Draw a value in `[low, high]`. Returns `low` when the range is empty.
    fn uniform(&mut self, low: f32, high: f32) -> f32;
}

impl<R: Rng + ?Sized> UniformSource for R {
    fn uniform(&mut self, low: f32, high: f32) -> f32 {
        if low >= high {
            return low;
        }
        self.gen_range(low..=high)
    }
}

/// Build a reproducible generator from a global seed and a label.
///
/// Uses SHA-256 of (seed || label) to seed a ChaCha8 RNG, so different
/// labels under the same seed give independent streams.
pub fn seeded_source(seed: u64, label: &str) -> ChaCha8Rng {
    let mut hasher = Sha256::new();
    hasher.update(seed.to_le_bytes());
    hasher.update(label.as_bytes());
    let hash = hasher.finalize();

    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&hash[0..8]);
    ChaCha8Rng::seed_from_u64(u64::from_le_bytes(bytes))
}
