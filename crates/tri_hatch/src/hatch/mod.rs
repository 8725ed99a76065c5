//! Per-triangle hatch geometry.
//!
//! A [`Triangle`] is filled with parallel [`HatchLine`]s by choosing a base edge
//! the opposite vertex (the apex) projects onto, sweeping copies of that edge
//! toward the apex, and clipping each copy to the two remaining edges. See
//! [`TriangleHatcher`] for the edge-selection and sweep rules.
use glam::Vec2;

use crate::error::{Error, Result};
use crate::geometry::{cross, distance_to_segment, LENGTH_EPSILON_SQUARED};

pub mod hatcher;

pub use hatcher::{BaseEdge, TriangleHatcher};

/// Height-to-base ratio at or below which a triangle counts as flat.
pub const DEGENERATE_RATIO: f32 = 1e-6;

/// One cell of the triangulation. Winding order is not significant.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Triangle {
    pub a: Vec2,
    pub b: Vec2,
    pub c: Vec2,
}

impl Triangle {
    pub fn new(a: Vec2, b: Vec2, c: Vec2) -> Self {
        Self { a, b, c }
    }

    /// Vertices in construction order.
    pub fn points(&self) -> [Vec2; 3] {
        [self.a, self.b, self.c]
    }

    /// Vertices rotated by `offset`: `(pts[o], pts[o + 1], pts[o + 2])`, indices mod 3.
    ///
    /// The first two form the candidate base edge, the third is the apex.
    pub fn rotated(&self, offset: usize) -> (Vec2, Vec2, Vec2) {
        let pts = self.points();
        (pts[offset % 3], pts[(offset + 1) % 3], pts[(offset + 2) % 3])
    }

    /// The three boundary edges `ab`, `bc`, `ca`.
    pub fn edges(&self) -> [(Vec2, Vec2); 3] {
        [(self.a, self.b), (self.b, self.c), (self.c, self.a)]
    }

    /// Signed area; positive for counter-clockwise winding in a y-up frame.
    pub fn signed_area(&self) -> f32 {
        0.5 * cross(self.b - self.a, self.c - self.a)
    }

    /// Returns `true` if the vertices are (numerically) collinear or coincident.
    pub fn is_degenerate(&self) -> bool {
        let longest_sq = self
            .edges()
            .iter()
            .map(|(s, e)| s.distance_squared(*e))
            .fold(0.0f32, f32::max);
        if longest_sq <= LENGTH_EPSILON_SQUARED {
            return true;
        }
        cross(self.b - self.a, self.c - self.a).abs() <= DEGENERATE_RATIO * longest_sq
    }

    /// Distance from `point` to the nearest of the three edges.
    pub fn distance_to_boundary(&self, point: Vec2) -> f32 {
        self.edges()
            .iter()
            .map(|(s, e)| distance_to_segment(point, *s, *e))
            .fold(f32::INFINITY, f32::min)
    }

    /// Returns `true` if `point` lies inside the closed triangle or within `eps` of its boundary.
    pub fn contains(&self, point: Vec2, eps: f32) -> bool {
        let d1 = cross(self.b - self.a, point - self.a);
        let d2 = cross(self.c - self.b, point - self.b);
        let d3 = cross(self.a - self.c, point - self.c);
        let has_neg = d1 < 0.0 || d2 < 0.0 || d3 < 0.0;
        let has_pos = d1 > 0.0 || d2 > 0.0 || d3 > 0.0;
        if !(has_neg && has_pos) {
            return true;
        }
        self.distance_to_boundary(point) <= eps
    }
}

/// One clipped stripe segment.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HatchLine {
    pub from: Vec2,
    pub to: Vec2,
}

impl HatchLine {
    pub fn new(from: Vec2, to: Vec2) -> Self {
        Self { from, to }
    }

    pub fn midpoint(&self) -> Vec2 {
        (self.from + self.to) * 0.5
    }

    pub fn length(&self) -> f32 {
        self.from.distance(self.to)
    }
}

/// How stripe lines are fitted to the triangle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HatchMode {
    /// Clip each swept line against the two non-base edges.
    #[default]
    Clipped,
    /// Emit the raw translated base edge for interior stripes only; endpoints may
    /// leave the triangle.
    Translated,
}

/// Hatching parameters shared by every triangle of a run.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HatchConfig {
    /// Fewest stripes drawn in one triangle.
    pub min_stripes: u32,
    /// Most stripes drawn in one triangle.
    pub max_stripes: u32,
    /// Slack, in world units, for accepting the apex projection on the base edge.
    pub tolerance: f32,
    /// Upper bound on base-edge attempts per triangle.
    pub max_retries: usize,
    pub mode: HatchMode,
}

impl Default for HatchConfig {
    fn default() -> Self {
        Self {
            min_stripes: 8,
            max_stripes: 12,
            tolerance: 1.0,
            max_retries: 100,
            mode: HatchMode::Clipped,
        }
    }
}

impl HatchConfig {
    /// Sets the inclusive stripe-count range.
    pub fn with_stripe_range(mut self, min: u32, max: u32) -> Self {
        self.min_stripes = min;
        self.max_stripes = max;
        self
    }

    /// Sets the base-edge validation tolerance.
    pub fn with_tolerance(mut self, tolerance: f32) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Sets the retry budget.
    pub fn with_max_retries(mut self, max_retries: usize) -> Self {
        self.max_retries = max_retries;
        self
    }

    /// Sets the hatch mode.
    pub fn with_mode(mut self, mode: HatchMode) -> Self {
        self.mode = mode;
        self
    }

    /// Validates the configuration, returning an error if invalid.
    pub fn validate(&self) -> Result<()> {
        if self.min_stripes == 0 {
            return Err(Error::InvalidConfig("min_stripes must be >= 1".into()));
        }
        if self.min_stripes > self.max_stripes {
            return Err(Error::InvalidConfig(format!(
                "stripe range is empty: min {} > max {}",
                self.min_stripes, self.max_stripes
            )));
        }
        if !self.tolerance.is_finite() || self.tolerance < 0.0 {
            return Err(Error::InvalidConfig(
                "tolerance must be finite and >= 0".into(),
            ));
        }
        if self.max_retries == 0 {
            return Err(Error::InvalidConfig("max_retries must be >= 1".into()));
        }
        Ok(())
    }
}
