//! Seeded random source construction and permutation shuffling.
//!
//! Every stochastic operator in the crate draws from a caller-seeded
//! [`StdRng`] so runs are reproducible. Unseeded runs fall back to OS
//! entropy via [`rand::random`].

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Creates a deterministic RNG from a seed.
///
/// # Examples
///
/// ```
/// use u_dispatch::random::create_rng;
/// use rand::Rng;
///
/// let mut a = create_rng(42);
/// let mut b = create_rng(42);
/// assert_eq!(a.random_range(0..1000), b.random_range(0..1000));
/// ```
pub fn create_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Creates an RNG from `seed` when present, otherwise from OS entropy.
pub fn seed_or_random(seed: Option<u64>) -> StdRng {
    create_rng(seed.unwrap_or_else(rand::random))
}

/// Shuffles a slice in place (Fisher-Yates).
pub fn shuffle<T, R: Rng>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.random_range(0..=i);
        items.swap(i, j);
    }
}
