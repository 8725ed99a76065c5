//! End-to-end canvas generation: sample, triangulate, hatch.
//!
//! A [`CanvasConfig`] describes the visible canvas plus a bleed margin. Points are
//! sampled over the padded rectangle so triangles reach past the visible edges;
//! [`runner::generate_canvas`] hands them to a [`crate::triangulation::Triangulator`]
//! and hatches every resulting triangle independently.
use glam::Vec2;

use crate::hatch::{HatchLine, Triangle};

pub mod config;
pub mod events;
pub mod runner;

pub use config::{CanvasConfig, UnsolvablePolicy, Viewbox};

/// A triangle together with the stripes drawn inside it.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HatchedTriangle {
    pub triangle: Triangle,
    /// Empty when the triangle was skipped as unsolvable.
    pub lines: Vec<HatchLine>,
}

/// Output of one generation run, ready for a renderer.
#[non_exhaustive]
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Canvas {
    /// Every sampled point in padded-domain coordinates.
    pub points: Vec<Vec2>,
    pub triangles: Vec<HatchedTriangle>,
    /// Triangles left unhatched under [`UnsolvablePolicy::Skip`].
    pub skipped: usize,
    /// Visible region inside the padded domain.
    pub viewbox: Viewbox,
}

impl Canvas {
    /// Total hatch lines across all triangles.
    pub fn line_count(&self) -> usize {
        self.triangles.iter().map(|t| t.lines.len()).sum()
    }

    /// Iterates over every hatch line in triangle order.
    pub fn lines(&self) -> impl Iterator<Item = &HatchLine> {
        self.triangles.iter().flat_map(|t| t.lines.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_count_sums_over_triangles() {
        let tri = Triangle::new(Vec2::ZERO, Vec2::X, Vec2::Y);
        let line = HatchLine::new(Vec2::ZERO, Vec2::X);
        let canvas = Canvas {
            triangles: vec![
                HatchedTriangle {
                    triangle: tri,
                    lines: vec![line, line],
                },
                HatchedTriangle {
                    triangle: tri,
                    lines: Vec::new(),
                },
                HatchedTriangle {
                    triangle: tri,
                    lines: vec![line],
                },
            ],
            ..Default::default()
        };
        assert_eq!(canvas.line_count(), 3);
        assert_eq!(canvas.lines().count(), 3);
    }
}
