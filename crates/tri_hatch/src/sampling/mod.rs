//! Blue-noise point sampling over a rectangular domain.
//!
//! This module defines the [`PositionSampling`] trait, the uniform [`SpatialGrid`]
//! used for neighborhood queries, and the Poisson disk sampler built on top of it.
use mint::Vector2;
use rand::RngCore;

pub mod grid;
pub mod poisson_disk;

pub use grid::SpatialGrid;
pub use poisson_disk::{PoissonDiskSampler, PoissonDiskSampling, SamplingDomain};

/// Trait for position sampling.
pub trait PositionSampling: Send + Sync {
    fn generate(&self, domain_extent: Vector2<f32>, rng: &mut dyn RngCore) -> Vec<Vector2<f32>>;
}

/// Generate a random float in the range [0, 1).
///
/// Uses the top 24 bits of a `u32` so every result is exactly representable
/// and strictly below one.
#[inline]
pub(crate) fn rand01(rng: &mut dyn RngCore) -> f32 {
    (rng.next_u32() >> 8) as f32 / (1u32 << 24) as f32
}

/// Generate a random integer in the inclusive range `[min, max]`.
///
/// Swapped bounds are accepted and normalized.
#[inline]
pub(crate) fn rand_between(rng: &mut dyn RngCore, min: u32, max: u32) -> u32 {
    let (lo, hi) = if min <= max { (min, max) } else { (max, min) };
    let span = (hi - lo) as u64 + 1;
    let offset = ((rng.next_u32() as u64 * span) >> 32) as u32;
    lo + offset
}
