//! Projection, segment membership and segment-segment intersection.
use glam::Vec2;

use crate::error::{Error, Result};
use crate::geometry::{cross, LENGTH_EPSILON_SQUARED, PARAM_EPSILON};

/// Sine of the angle below which two directions count as parallel.
const PARALLEL_EPSILON: f32 = 1e-6;

/// Orthogonal projection of `apex` onto the infinite line through `line_a` and `line_b`.
///
/// Returns [`Error::DegenerateGeometry`] when the two line points coincide.
pub fn project_onto_line(apex: Vec2, line_a: Vec2, line_b: Vec2) -> Result<Vec2> {
    let dir = line_b - line_a;
    let len_sq = dir.dot(dir);
    if len_sq <= LENGTH_EPSILON_SQUARED {
        return Err(Error::DegenerateGeometry {
            start: line_a,
            end: line_b,
        });
    }
    let t = dir.dot(apex - line_a) / len_sq;
    Ok(line_a + dir * t)
}

/// Returns `true` if `point` lies on the segment `start..end`, allowing `tolerance`
/// world units of slack both along the segment and perpendicular to it.
///
/// The along-segment slack is converted to parameter space, so the accepted
/// parameter range is `[-tolerance / len, 1 + tolerance / len]`.
pub fn is_between(start: Vec2, end: Vec2, point: Vec2, tolerance: f32) -> bool {
    let dir = end - start;
    let len_sq = dir.dot(dir);
    if len_sq <= LENGTH_EPSILON_SQUARED {
        return point.distance(start) <= tolerance;
    }

    let len = len_sq.sqrt();
    let rel = point - start;
    let t = rel.dot(dir) / len_sq;
    let slack = tolerance / len;
    if t < -slack || t > 1.0 + slack {
        return false;
    }

    let perpendicular = cross(dir, rel).abs() / len;
    perpendicular <= tolerance
}

/// Intersection point of the segments `a_start..a_end` and `b_start..b_end`.
///
/// Solves the 2x2 parametric system with Cramer's rule. Returns `None` for
/// parallel (or zero-length) segments and when either parameter leaves `[0, 1]`.
pub fn intersect(a_start: Vec2, a_end: Vec2, b_start: Vec2, b_end: Vec2) -> Option<Vec2> {
    let r = a_end - a_start;
    let s = b_end - b_start;
    let denom = cross(r, s);
    if denom.abs() <= PARALLEL_EPSILON * r.length() * s.length() {
        return None;
    }

    let qp = b_start - a_start;
    let t = cross(qp, s) / denom;
    let u = cross(qp, r) / denom;

    let range = -PARAM_EPSILON..=1.0 + PARAM_EPSILON;
    if range.contains(&t) && range.contains(&u) {
        Some(a_start + r * t)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn intersect_crossing_segments() {
        let hit = intersect(
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, 0.0),
            Vec2::new(5.0, -5.0),
            Vec2::new(5.0, 5.0),
        );
        assert_eq!(hit, Some(Vec2::new(5.0, 0.0)));
    }

    #[test]
    fn intersect_parallel_segments_is_none() {
        let hit = intersect(
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, 0.0),
            Vec2::new(0.0, 5.0),
            Vec2::new(10.0, 5.0),
        );
        assert_eq!(hit, None);
    }

    #[test]
    fn intersect_outside_either_segment_is_none() {
        // Lines cross at (5, 0) but the second segment stops short of it.
        let hit = intersect(
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, 0.0),
            Vec2::new(5.0, 1.0),
            Vec2::new(5.0, 5.0),
        );
        assert_eq!(hit, None);

        // Crossing lies beyond the end of the first segment.
        let hit = intersect(
            Vec2::new(0.0, 0.0),
            Vec2::new(4.0, 0.0),
            Vec2::new(5.0, -5.0),
            Vec2::new(5.0, 5.0),
        );
        assert_eq!(hit, None);
    }

    #[test]
    fn intersect_shared_endpoint() {
        let a = Vec2::new(0.0, 0.0);
        let hit = intersect(a, Vec2::new(10.0, 0.0), a, Vec2::new(3.0, 7.0));
        assert_eq!(hit, Some(a));
    }

    #[test]
    fn intersect_zero_length_segment_is_none() {
        let p = Vec2::new(2.0, 2.0);
        assert_eq!(intersect(p, p, Vec2::ZERO, Vec2::new(4.0, 4.0)), None);
    }

    #[test]
    fn projection_lands_on_foot_of_perpendicular() {
        let p = project_onto_line(
            Vec2::new(3.0, 7.0),
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, 0.0),
        )
        .expect("non-degenerate line");
        assert_eq!(p, Vec2::new(3.0, 0.0));
    }

    #[test]
    fn projection_onto_extension_is_allowed() {
        let p = project_onto_line(
            Vec2::new(-4.0, 2.0),
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, 0.0),
        )
        .expect("non-degenerate line");
        assert_eq!(p, Vec2::new(-4.0, 0.0));
    }

    #[test]
    fn projection_onto_coincident_points_is_degenerate() {
        let a = Vec2::new(1.0, 1.0);
        let err = project_onto_line(Vec2::new(5.0, 5.0), a, a).unwrap_err();
        assert!(matches!(err, Error::DegenerateGeometry { start, end } if start == a && end == a));
    }

    #[test]
    fn is_between_accepts_points_on_segment() {
        let a = Vec2::new(0.0, 0.0);
        let b = Vec2::new(100.0, 0.0);
        assert!(is_between(a, b, Vec2::new(50.0, 0.0), 1.0));
        assert!(is_between(a, b, a, 1.0));
        assert!(is_between(a, b, b, 1.0));
    }

    #[test]
    fn is_between_applies_tolerance_in_world_units() {
        let a = Vec2::new(0.0, 0.0);
        let b = Vec2::new(100.0, 0.0);
        assert!(is_between(a, b, Vec2::new(-0.9, 0.0), 1.0));
        assert!(is_between(a, b, Vec2::new(100.9, 0.0), 1.0));
        assert!(!is_between(a, b, Vec2::new(-1.5, 0.0), 1.0));
        assert!(!is_between(a, b, Vec2::new(102.0, 0.0), 1.0));
    }

    #[test]
    fn is_between_rejects_points_off_the_line() {
        let a = Vec2::new(0.0, 0.0);
        let b = Vec2::new(100.0, 0.0);
        assert!(is_between(a, b, Vec2::new(50.0, 0.5), 1.0));
        assert!(!is_between(a, b, Vec2::new(50.0, 3.0), 1.0));
    }

    #[test]
    fn is_between_degenerate_segment_checks_distance() {
        let a = Vec2::new(5.0, 5.0);
        assert!(is_between(a, a, Vec2::new(5.5, 5.0), 1.0));
        assert!(!is_between(a, a, Vec2::new(7.0, 5.0), 1.0));
    }
}
