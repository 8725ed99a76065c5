//! Poisson disk position sampling strategy.
//!
//! [`PoissonDiskSampler`] is a pull-based generator: every call to `next` does at
//! most `max_attempts` candidate checks per exhausted growth center and returns
//! the next accepted point, until no growth centers remain.
use std::f32::consts::TAU;
use std::iter::FusedIterator;

use glam::Vec2;
use mint::Vector2;
use rand::RngCore;
use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::sampling::{rand01, PositionSampling, SpatialGrid};

/// Default number of candidates generated around a growth center before it retires.
pub const DEFAULT_MAX_ATTEMPTS: usize = 30;

/// Configuration for one sampling run over `[0, width] x [0, height]`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SamplingDomain {
    /// Domain width in world units.
    pub width: f32,
    /// Domain height in world units.
    pub height: f32,
    /// Minimum distance between any two accepted points.
    pub minimum_distance: f32,
    /// Candidate attempts per growth center (`k`).
    pub max_attempts: usize,
}

impl SamplingDomain {
    /// Creates a domain with [`DEFAULT_MAX_ATTEMPTS`] attempts per point.
    pub fn new(width: f32, height: f32, minimum_distance: f32) -> Self {
        Self {
            width,
            height,
            minimum_distance,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }

    /// Sets the number of candidate attempts per growth center.
    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// Validates the domain, returning an error if invalid.
    pub fn validate(&self) -> Result<()> {
        if !(self.width.is_finite() && self.height.is_finite())
            || self.width <= 0.0
            || self.height <= 0.0
        {
            return Err(Error::InvalidConfig(
                "sampling domain width and height must be finite and > 0".into(),
            ));
        }
        if !self.minimum_distance.is_finite() || self.minimum_distance <= 0.0 {
            return Err(Error::InvalidConfig(
                "minimum_distance must be finite and > 0".into(),
            ));
        }
        if self.max_attempts == 0 {
            return Err(Error::InvalidConfig("max_attempts must be >= 1".into()));
        }
        Ok(())
    }

    #[inline]
    fn contains(&self, p: Vec2) -> bool {
        p.x >= 0.0 && p.x <= self.width && p.y >= 0.0 && p.y <= self.height
    }
}

/// Poisson disk sampling strategy.
#[derive(Debug, Clone)]
pub struct PoissonDiskSampling {
    /// Minimum distance between samples in world units.
    pub radius: f32,
    /// Candidate attempts per growth center.
    pub attempts: usize,
}

impl PoissonDiskSampling {
    /// Create a new PoissonDiskSampling with specified radius.
    pub fn new(radius: f32) -> Self {
        Self {
            radius,
            attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }

    /// Sets the number of candidate attempts per growth center.
    pub fn with_attempts(mut self, attempts: usize) -> Self {
        self.attempts = attempts;
        self
    }
}

impl PositionSampling for PoissonDiskSampling {
    fn generate(&self, domain_extent: Vector2<f32>, rng: &mut dyn RngCore) -> Vec<Vector2<f32>> {
        let domain = SamplingDomain::new(domain_extent.x, domain_extent.y, self.radius)
            .with_max_attempts(self.attempts);

        match PoissonDiskSampler::new(domain, rng) {
            Ok(sampler) => sampler.map(Into::into).collect(),
            Err(e) => {
                debug!("Poisson disk sampling skipped: {e}.");
                Vec::new()
            }
        }
    }
}

/// Lazy Bridson-style generator of blue-noise points.
///
/// Accepted points are yielded exactly once, seed first. The active list only
/// shrinks once a center retires and the grid only grows; when the active list
/// is empty the iterator is exhausted for good.
pub struct PoissonDiskSampler<'a> {
    domain: SamplingDomain,
    grid: SpatialGrid,
    active: Vec<Vec2>,
    rng: &'a mut dyn RngCore,
    seeded: bool,
    candidates_tried: usize,
    accepted: usize,
}

impl<'a> PoissonDiskSampler<'a> {
    /// Creates a sampler for `domain`, returning an error if the domain is invalid.
    pub fn new(domain: SamplingDomain, rng: &'a mut dyn RngCore) -> Result<Self> {
        domain.validate()?;
        let d = domain.minimum_distance;

        Ok(Self {
            domain,
            grid: SpatialGrid::new(domain.width, domain.height, d),
            active: Vec::new(),
            rng,
            seeded: false,
            candidates_tried: 0,
            accepted: 0,
        })
    }

    /// The domain this sampler runs over.
    pub fn domain(&self) -> &SamplingDomain {
        &self.domain
    }

    /// Total candidates generated so far, including the seed.
    pub fn candidates_tried(&self) -> usize {
        self.candidates_tried
    }

    /// Points yielded so far.
    pub fn accepted(&self) -> usize {
        self.accepted
    }

    /// Growth centers that have not yet retired.
    pub fn active_len(&self) -> usize {
        self.active.len()
    }

    /// Drains the sampler into a vector of all remaining points.
    pub fn into_points(self) -> Vec<Vec2> {
        self.collect()
    }

    fn accept(&mut self, point: Vec2) {
        self.grid.insert(point);
        self.active.push(point);
        self.accepted += 1;
    }

    fn is_valid_candidate(&self, candidate: Vec2) -> bool {
        if !self.domain.contains(candidate) {
            return false;
        }
        !self
            .grid
            .has_neighbor_within(candidate, self.domain.minimum_distance)
    }

    fn candidate_around(&mut self, center: Vec2) -> Vec2 {
        let d = self.domain.minimum_distance;
        let angle = rand01(self.rng) * TAU;
        let distance = d + rand01(self.rng) * d;
        center + Vec2::from_angle(angle) * distance
    }
}

impl Iterator for PoissonDiskSampler<'_> {
    type Item = Vec2;

    fn next(&mut self) -> Option<Vec2> {
        if !self.seeded {
            self.seeded = true;
            let seed = Vec2::new(
                rand01(self.rng) * self.domain.width,
                rand01(self.rng) * self.domain.height,
            );
            self.candidates_tried += 1;
            self.accept(seed);
            return Some(seed);
        }

        while let Some(&center) = self.active.last() {
            for _ in 0..self.domain.max_attempts {
                self.candidates_tried += 1;
                let candidate = self.candidate_around(center);
                if self.is_valid_candidate(candidate) {
                    self.accept(candidate);
                    return Some(candidate);
                }
            }

            self.active.pop();
            trace!(
                "Retired growth center ({:.2}, {:.2}); {} active remain.",
                center.x,
                center.y,
                self.active.len()
            );
        }

        None
    }
}

impl FusedIterator for PoissonDiskSampler<'_> {}
