//! Base-edge selection and stripe sweeping for a single triangle.
use glam::Vec2;
use rand::RngCore;
use tracing::trace;

use crate::error::{Error, Result};
use crate::geometry::{intersect, is_between, project_onto_line};
use crate::hatch::{HatchConfig, HatchLine, HatchMode, Triangle, DEGENERATE_RATIO};
use crate::sampling::rand_between;

/// Clipped stripes shorter than this, relative to the base edge, are dropped.
const MIN_LINE_RATIO: f32 = 1e-5;

/// A rotation of the triangle whose apex projects onto its base edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BaseEdge {
    /// Start of the base edge.
    pub a: Vec2,
    /// End of the base edge.
    pub b: Vec2,
    /// Vertex opposite the base edge.
    pub apex: Vec2,
    /// Foot of the perpendicular from the apex onto the base line.
    pub projected: Vec2,
    /// Sweep direction, `apex - projected`.
    pub translation: Vec2,
    /// Rotation offset that produced this edge.
    pub offset: usize,
    /// Base-edge attempts spent, including the successful one.
    pub attempts: usize,
}

/// Fills triangles with parallel stripes.
///
/// Edge selection walks the three rotations starting at a given offset. A
/// rotation is rejected when its base edge has zero length, when the apex sits on
/// the base line, or when the apex projection falls outside the base segment by
/// more than `tolerance`. Since rotations repeat after three steps, at most
/// `min(max_retries, 3)` attempts are made; every non-degenerate triangle has a
/// valid rotation (its longest edge) within that window.
#[derive(Debug, Clone, Default)]
pub struct TriangleHatcher {
    config: HatchConfig,
}

impl TriangleHatcher {
    pub fn try_new(config: HatchConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn new(config: HatchConfig) -> Self {
        debug_assert!(config.validate().is_ok(), "invalid hatch config");
        Self { config }
    }

    pub fn config(&self) -> &HatchConfig {
        &self.config
    }

    /// Hatches `triangle` with a random starting rotation and a random stripe
    /// count from the configured range.
    pub fn hatch(&self, triangle: &Triangle, rng: &mut dyn RngCore) -> Result<Vec<HatchLine>> {
        let offset = rand_between(rng, 0, 2) as usize;
        let stripes = rand_between(rng, self.config.min_stripes, self.config.max_stripes);
        self.hatch_with(triangle, offset, stripes)
    }

    /// Hatches `triangle` deterministically from `start_offset` with `stripes` stripes.
    ///
    /// Clipped mode sweeps `i = 0..stripes` and keeps the lines whose clip
    /// against both side edges succeeds. The sweep stops short of the apex, so a
    /// triangle never yields more than `stripes` lines. Stripe `i = 0` is the
    /// base edge itself and is kept; drop `lines[0]` when the outline is drawn
    /// separately.
    pub fn hatch_with(
        &self,
        triangle: &Triangle,
        start_offset: usize,
        stripes: u32,
    ) -> Result<Vec<HatchLine>> {
        let base = self.select_base_edge(triangle, start_offset)?;
        let stripes = stripes.max(1);
        let lines = match self.config.mode {
            HatchMode::Clipped => sweep_clipped(&base, stripes),
            HatchMode::Translated => sweep_translated(&base, stripes),
        };
        trace!(
            "Hatched triangle with offset {} after {} attempt(s): {} of {} stripes kept.",
            base.offset,
            base.attempts,
            lines.len(),
            stripes
        );
        Ok(lines)
    }

    /// Finds the first valid base edge, starting at rotation `start_offset`.
    pub fn select_base_edge(&self, triangle: &Triangle, start_offset: usize) -> Result<BaseEdge> {
        let budget = self.config.max_retries.min(3);

        for attempt in 0..budget {
            let offset = (start_offset + attempt) % 3;
            let (a, b, apex) = triangle.rotated(offset);

            let projected = match project_onto_line(apex, a, b) {
                Ok(p) => p,
                Err(e) => {
                    trace!("Rotation {offset} rejected: {e}.");
                    continue;
                }
            };

            let translation = apex - projected;
            if translation.length() <= DEGENERATE_RATIO * a.distance(b) {
                trace!("Rotation {offset} rejected: apex lies on the base line.");
                continue;
            }

            if !is_between(a, b, projected, self.config.tolerance) {
                trace!("Rotation {offset} rejected: apex projects outside the base edge.");
                continue;
            }

            return Ok(BaseEdge {
                a,
                b,
                apex,
                projected,
                translation,
                offset,
                attempts: attempt + 1,
            });
        }

        Err(Error::TriangleUnsolvable { attempts: budget })
    }
}

fn sweep_clipped(base: &BaseEdge, stripes: u32) -> Vec<HatchLine> {
    let min_length = MIN_LINE_RATIO * base.a.distance(base.b);
    let mut lines = Vec::with_capacity(stripes as usize);
    for i in 0..stripes {
        let shift = base.translation * (i as f32 / stripes as f32);
        let a1 = base.a + shift;
        let b1 = base.b + shift;

        let (Some(from), Some(to)) = (
            intersect(a1, b1, base.a, base.apex),
            intersect(a1, b1, base.b, base.apex),
        ) else {
            continue;
        };
        if from.distance(to) <= min_length {
            continue;
        }
        lines.push(HatchLine::new(from, to));
    }
    lines
}

fn sweep_translated(base: &BaseEdge, stripes: u32) -> Vec<HatchLine> {
    (1..stripes)
        .map(|i| {
            let shift = base.translation * (i as f32 / stripes as f32);
            HatchLine::new(base.a + shift, base.b + shift)
        })
        .collect()
}
