//! Configuration surface for a canvas generation run.
use glam::Vec2;

use crate::error::{Error, Result};
use crate::hatch::HatchConfig;
use crate::sampling::poisson_disk::DEFAULT_MAX_ATTEMPTS;
use crate::sampling::SamplingDomain;

/// What an unsolvable triangle does to the run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum UnsolvablePolicy {
    /// Keep the triangle without stripes and continue.
    #[default]
    Skip,
    /// Stop the run and return the error.
    Abort,
}

/// Visible rectangle inside the padded sampling domain.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Viewbox {
    pub min: Vec2,
    pub size: Vec2,
}

impl Viewbox {
    pub fn max(&self) -> Vec2 {
        self.min + self.size
    }

    pub fn contains(&self, p: Vec2) -> bool {
        let max = self.max();
        p.x >= self.min.x && p.x <= max.x && p.y >= self.min.y && p.y <= max.y
    }
}

/// Configuration for a canvas generation run.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CanvasConfig {
    /// Visible canvas width.
    pub width: f32,
    /// Visible canvas height.
    pub height: f32,
    /// Margin sampled on every side beyond the visible canvas.
    pub bleed: f32,
    /// Minimum distance between sampled points.
    pub minimum_distance: f32,
    /// Candidate attempts per growth center.
    pub max_attempts: usize,
    pub hatch: HatchConfig,
    pub unsolvable: UnsolvablePolicy,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: 600.0,
            height: 600.0,
            bleed: 100.0,
            minimum_distance: 60.0,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            hatch: HatchConfig::default(),
            unsolvable: UnsolvablePolicy::Skip,
        }
    }
}

impl CanvasConfig {
    /// Creates a new [`CanvasConfig`] with the given visible size and default settings otherwise.
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            ..Default::default()
        }
    }

    /// Sets the bleed margin.
    pub fn with_bleed(mut self, bleed: f32) -> Self {
        self.bleed = bleed;
        self
    }

    /// Sets the minimum point distance.
    pub fn with_minimum_distance(mut self, minimum_distance: f32) -> Self {
        self.minimum_distance = minimum_distance;
        self
    }

    /// Sets the sampler attempts per growth center.
    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// Sets the hatching parameters.
    pub fn with_hatch(mut self, hatch: HatchConfig) -> Self {
        self.hatch = hatch;
        self
    }

    /// Sets the unsolvable-triangle policy.
    pub fn with_unsolvable_policy(mut self, policy: UnsolvablePolicy) -> Self {
        self.unsolvable = policy;
        self
    }

    /// Padded domain the sampler runs over: the canvas plus `bleed` on each side.
    pub fn sampling_domain(&self) -> SamplingDomain {
        SamplingDomain::new(
            self.width + self.bleed * 2.0,
            self.height + self.bleed * 2.0,
            self.minimum_distance,
        )
        .with_max_attempts(self.max_attempts)
    }

    /// Visible region in padded-domain coordinates.
    pub fn viewbox(&self) -> Viewbox {
        Viewbox {
            min: Vec2::splat(self.bleed),
            size: Vec2::new(self.width, self.height),
        }
    }

    /// Validates the configuration, returning an error if invalid.
    pub fn validate(&self) -> Result<()> {
        if !(self.width.is_finite() && self.height.is_finite())
            || self.width <= 0.0
            || self.height <= 0.0
        {
            return Err(Error::InvalidConfig(
                "canvas width and height must be finite and > 0".into(),
            ));
        }
        if !self.bleed.is_finite() || self.bleed < 0.0 {
            return Err(Error::InvalidConfig("bleed must be finite and >= 0".into()));
        }
        self.sampling_domain().validate()?;
        self.hatch.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_reference_build() {
        let config = CanvasConfig::default();
        assert_eq!((config.width, config.height), (600.0, 600.0));
        assert_eq!(config.bleed, 100.0);
        assert_eq!(config.minimum_distance, 60.0);
        assert_eq!(config.max_attempts, 30);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn sampling_domain_includes_bleed() {
        let config = CanvasConfig::new(300.0, 200.0).with_bleed(25.0);
        let domain = config.sampling_domain();
        assert_eq!((domain.width, domain.height), (350.0, 250.0));
        assert_eq!(domain.minimum_distance, config.minimum_distance);
    }

    #[test]
    fn viewbox_is_offset_by_bleed() {
        let config = CanvasConfig::new(300.0, 200.0).with_bleed(25.0);
        let viewbox = config.viewbox();
        assert_eq!(viewbox.min, Vec2::new(25.0, 25.0));
        assert_eq!(viewbox.max(), Vec2::new(325.0, 225.0));
        assert!(viewbox.contains(Vec2::new(25.0, 225.0)));
        assert!(!viewbox.contains(Vec2::new(10.0, 100.0)));
    }

    #[test]
    fn validate_rejects_bad_values() {
        let cases = [
            CanvasConfig::new(0.0, 100.0),
            CanvasConfig::new(100.0, f32::NAN),
            CanvasConfig::default().with_bleed(-1.0),
            CanvasConfig::default().with_minimum_distance(0.0),
            CanvasConfig::default().with_max_attempts(0),
            CanvasConfig::default().with_hatch(HatchConfig::default().with_max_retries(0)),
        ];
        for config in cases {
            assert!(matches!(config.validate(), Err(Error::InvalidConfig(_))));
        }
    }
}
