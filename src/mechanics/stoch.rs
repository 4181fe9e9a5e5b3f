/// Stochastic mechanics: uniform draws on a WyRand stream.
/// Callers own the generator; seeding is theirs to make explicit.
use bevy_prng::WyRand;
use rand_core::RngCore;

/// Uniform [0, 1) with 53 bits of mantissa.
#[inline]
pub fn uniform01(rng: &mut WyRand) -> f64 {
    ((rng.next_u64() >> 11) as f64) / ((1u64 << 53) as f64)
}

/// Uniform index in 0..n. Returns 0 for an empty range.
#[inline]
pub fn index_below(rng: &mut WyRand, n: usize) -> usize {
    if n == 0 {
        return 0;
    }
    ((uniform01(rng) * n as f64) as usize).min(n - 1)
}
