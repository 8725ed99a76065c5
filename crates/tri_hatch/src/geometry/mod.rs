//! Planar vector helpers and segment primitives shared by sampling and hatching.
//!
//! Points and vectors are both [`glam::Vec2`]; it already provides addition,
//! subtraction, scaling, division and the dot product. This module adds the few
//! derived quantities the hatcher needs on top of it.
use glam::Vec2;

pub mod intersection;

pub use intersection::{intersect, is_between, project_onto_line};

/// A point on the canvas. Same type as a displacement vector.
pub type Point = Vec2;

/// Squared lengths at or below this are treated as zero.
pub const LENGTH_EPSILON_SQUARED: f32 = 1e-12;

/// Slack applied to solved segment parameters so that shared endpoints survive rounding.
pub const PARAM_EPSILON: f32 = 1e-5;

/// Scalar cross product `a.x * b.y - a.y * b.x` (twice the signed area of the spanned triangle).
#[inline]
pub fn cross(a: Vec2, b: Vec2) -> f32 {
    a.perp_dot(b)
}

/// Returns `true` if both components differ by at most `eps`.
#[inline]
pub fn approx_eq(a: Vec2, b: Vec2, eps: f32) -> bool {
    (a.x - b.x).abs() <= eps && (a.y - b.y).abs() <= eps
}

/// Euclidean distance from `point` to the closed segment `start..end`.
pub fn distance_to_segment(point: Vec2, start: Vec2, end: Vec2) -> f32 {
    let dir = end - start;
    let len_sq = dir.dot(dir);
    if len_sq <= LENGTH_EPSILON_SQUARED {
        return point.distance(start);
    }
    let t = ((point - start).dot(dir) / len_sq).clamp(0.0, 1.0);
    point.distance(start + dir * t)
}
