//! Randomness source for point generation.
//!
//! The generator only ever asks for two things: a uniform value in `[0, 1)`
//! and a fair sign. Any [`rand::Rng`] provides both, and tests can plug in a
//! fixed sequence to make output fully reproducible.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Supplies the random draws used by [`generate_with`](crate::generate_with).
pub trait Sampler {
    /// Uniform value in `[0, 1)`.
    fn unit(&mut self) -> f32;

    /// `1.0` or `-1.0` with equal probability.
    fn sign(&mut self) -> f32 {
        if self.unit() < 0.5 {
            1.0
        } else {
            -1.0
        }
    }
}

impl<R: Rng + ?Sized> Sampler for R {
    #[inline]
    fn unit(&mut self) -> f32 {
        self.gen()
    }
}

/// Fast RNG seeded from OS entropy.
pub fn entropy_rng() -> SmallRng {
    SmallRng::from_entropy()
}

/// Fast RNG with a fixed seed, for reproducible fields.
pub fn seeded_rng(seed: u64) -> SmallRng {
    SmallRng::seed_from_u64(seed)
}
