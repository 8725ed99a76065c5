//! Bowyer-Watson Delaunay triangulation used as the demo triangulator.
use std::collections::HashMap;

use glam::{DVec2, Vec2};
use tri_hatch::triangulation::Triangulator;

/// Incremental Bowyer-Watson triangulation in `f64`.
///
/// Quadratic in the number of points, which is fine for demo-sized canvases.
#[derive(Debug, Clone, Copy, Default)]
pub struct BowyerWatson;

#[derive(Clone, Copy)]
struct Circumcircle {
    center: DVec2,
    radius_sq: f64,
}

impl Circumcircle {
    fn of(a: DVec2, b: DVec2, c: DVec2) -> Option<Self> {
        let d = 2.0 * (a.x * (b.y - c.y) + b.x * (c.y - a.y) + c.x * (a.y - b.y));
        if d.abs() < 1e-12 {
            return None;
        }
        let (a2, b2, c2) = (a.length_squared(), b.length_squared(), c.length_squared());
        let center = DVec2::new(
            (a2 * (b.y - c.y) + b2 * (c.y - a.y) + c2 * (a.y - b.y)) / d,
            (a2 * (c.x - b.x) + b2 * (a.x - c.x) + c2 * (b.x - a.x)) / d,
        );
        Some(Self {
            center,
            radius_sq: center.distance_squared(a),
        })
    }

    fn contains(&self, p: DVec2) -> bool {
        p.distance_squared(self.center) < self.radius_sq
    }
}

impl Triangulator for BowyerWatson {
    fn triangulate(&self, points: &[Vec2]) -> Vec<usize> {
        let n = points.len();
        if n < 3 {
            return Vec::new();
        }

        let mut verts: Vec<DVec2> = points.iter().map(|p| p.as_dvec2()).collect();
        let (min, max) = verts.iter().fold(
            (DVec2::splat(f64::INFINITY), DVec2::splat(f64::NEG_INFINITY)),
            |(lo, hi), p| (lo.min(*p), hi.max(*p)),
        );
        let span = (max - min).max_element().max(1.0);
        let mid = (min + max) * 0.5;
        verts.push(mid + DVec2::new(-20.0 * span, -span));
        verts.push(mid + DVec2::new(0.0, 20.0 * span));
        verts.push(mid + DVec2::new(20.0 * span, -span));

        let mut tris: Vec<([usize; 3], Option<Circumcircle>)> = Vec::new();
        let super_tri = [n, n + 1, n + 2];
        tris.push((super_tri, circle_for(&verts, super_tri)));

        for i in 0..n {
            let p = verts[i];
            let (bad, good): (Vec<_>, Vec<_>) = tris
                .into_iter()
                .partition(|(_, circle)| circle.is_some_and(|c| c.contains(p)));

            let mut edge_count: HashMap<(usize, usize), usize> = HashMap::new();
            for (t, _) in &bad {
                for (a, b) in tri_edges(*t) {
                    *edge_count.entry(edge_key(a, b)).or_insert(0) += 1;
                }
            }

            tris = good;
            for (t, _) in &bad {
                for (a, b) in tri_edges(*t) {
                    if edge_count[&edge_key(a, b)] == 1 {
                        let new_tri = [a, b, i];
                        tris.push((new_tri, circle_for(&verts, new_tri)));
                    }
                }
            }
        }

        tris.into_iter()
            .filter(|(t, _)| t.iter().all(|&v| v < n))
            .flat_map(|(t, _)| t)
            .collect()
    }
}

fn circle_for(verts: &[DVec2], t: [usize; 3]) -> Option<Circumcircle> {
    Circumcircle::of(verts[t[0]], verts[t[1]], verts[t[2]])
}

fn tri_edges(t: [usize; 3]) -> [(usize, usize); 3] {
    [(t[0], t[1]), (t[1], t[2]), (t[2], t[0])]
}

fn edge_key(a: usize, b: usize) -> (usize, usize) {
    if a < b {
        (a, b)
    } else {
        (b, a)
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use tri_hatch::sampling::{PoissonDiskSampler, SamplingDomain};
    use tri_hatch::triangulation::triangles_from_indices;

    use super::*;

    #[test]
    fn too_few_points_yield_nothing() {
        let points = [Vec2::ZERO, Vec2::X];
        assert!(BowyerWatson.triangulate(&points).is_empty());
    }

    #[test]
    fn unit_square_splits_into_two_triangles() {
        let points = [
            Vec2::new(0.0, 0.0),
            Vec2::new(1.0, 0.0),
            Vec2::new(1.0, 1.0),
            Vec2::new(0.0, 1.0),
        ];
        let indices = BowyerWatson.triangulate(&points);
        let triangles = triangles_from_indices(&points, &indices).expect("valid indices");
        assert_eq!(triangles.len(), 2);
        let area: f32 = triangles.iter().map(|t| t.signed_area().abs()).sum();
        assert!((area - 1.0).abs() < 1e-6);
    }

    #[test]
    fn blue_noise_triangulation_has_empty_circumcircles() {
        let mut rng = StdRng::seed_from_u64(17);
        let domain = SamplingDomain::new(300.0, 300.0, 40.0);
        let points = PoissonDiskSampler::new(domain, &mut rng)
            .expect("valid domain")
            .into_points();

        let indices = BowyerWatson.triangulate(&points);
        assert_eq!(indices.len() % 3, 0);
        assert!(!indices.is_empty());

        let verts: Vec<DVec2> = points.iter().map(|p| p.as_dvec2()).collect();
        for t in indices.chunks_exact(3) {
            let circle = Circumcircle::of(verts[t[0]], verts[t[1]], verts[t[2]])
                .expect("non-degenerate triangle");
            for (i, v) in verts.iter().enumerate() {
                if t.contains(&i) {
                    continue;
                }
                assert!(v.distance_squared(circle.center) >= circle.radius_sq * (1.0 - 1e-9));
            }
        }
    }
}
