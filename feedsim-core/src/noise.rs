//! Deterministic noise primitives.
//!
//! Every "random" quantity in the simulation is a pure function of a seed
//! plus a salt, so repeated runs with the same seed are bit-identical.
//! A splitmix64 finalizer stands in for the original's trigonometric
//! hashing; distribution shape (bounded noise around a bias) is preserved.

/// splitmix64 finalizer: cheap, well-mixed 64-bit hash.
fn splitmix64(x: u64) -> u64 {
    let mut z = x.wrapping_add(0x9E37_79B9_7F4A_7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

/// Uniform value in [0, 1) derived from (seed, salt).
pub fn unit(seed: u64, salt: u64) -> f64 {
    let h = splitmix64(seed ^ salt.wrapping_mul(0x9E37_79B9_7F4A_7C15));
    // Take the top 53 bits so the quotient is exactly representable.
    (h >> 11) as f64 / (1u64 << 53) as f64
}

/// Symmetric noise in [-amplitude, amplitude] derived from (seed, salt).
pub fn signed(seed: u64, salt: u64, amplitude: f64) -> f64 {
    (unit(seed, salt) * 2.0 - 1.0) * amplitude
}

/// Slow sinusoidal drift over an item index, offset by the seed.
///
/// Gives neighboring indices correlated values, unlike `unit`, which is
/// what makes generated channel pools look like coherent populations
/// rather than white noise.
pub fn oscillation(index: usize, seed: u64, frequency: f64, amplitude: f64) -> f64 {
    amplitude * (index as f64 * frequency + (seed % 1_000) as f64 * 0.31).sin()
}
