//! Seedable RNG wrapper for mock-data generation.
//!
//! Every random draw in the workspace goes through an explicit `EcoRng`
//! handed in by the caller, so a fixed seed always reproduces the same route
//! list.  There is no thread-local or global generator.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Deterministic RNG owned by a single session.
pub struct EcoRng(SmallRng);

impl EcoRng {
    pub fn new(seed: u64) -> Self {
        EcoRng(SmallRng::seed_from_u64(seed))
    }

    /// Derive an independent child generator, e.g. one for route generation
    /// and another for distance sampling, both reproducible from one seed.
    pub fn child(&mut self, offset: u64) -> EcoRng {
        let child_seed: u64 = self.0.r#gen::<u64>() ^ offset.wrapping_mul(MIXING_CONSTANT);
        EcoRng(SmallRng::seed_from_u64(child_seed))
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// Choose a random element from a slice.
    /// Returns `None` if the slice is empty.
    #[inline]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.0)
    }
}
