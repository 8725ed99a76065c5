//! Seam to an external triangulation.
//!
//! The crate does not triangulate points itself. A [`Triangulator`] maps the
//! sampled points to a flat list of vertex indices, read three at a time; this
//! module turns that list into [`Triangle`]s.
use glam::Vec2;

use crate::error::{Error, Result};
use crate::hatch::Triangle;

/// Maps a point set to triangles given as flat index triples into that set.
///
/// No winding order is assumed for the returned triples.
pub trait Triangulator {
    fn triangulate(&self, points: &[Vec2]) -> Vec<usize>;
}

impl<F> Triangulator for F
where
    F: Fn(&[Vec2]) -> Vec<usize>,
{
    fn triangulate(&self, points: &[Vec2]) -> Vec<usize> {
        self(points)
    }
}

/// Builds triangles from `indices`, read three at a time.
///
/// Fails with [`Error::InvalidTriangulation`] if the list length is not a
/// multiple of three or an index is out of range.
pub fn triangles_from_indices(points: &[Vec2], indices: &[usize]) -> Result<Vec<Triangle>> {
    if indices.len() % 3 != 0 {
        return Err(Error::InvalidTriangulation(format!(
            "index count {} is not a multiple of three",
            indices.len()
        )));
    }
    if let Some(&bad) = indices.iter().find(|&&i| i >= points.len()) {
        return Err(Error::InvalidTriangulation(format!(
            "index {bad} out of range for {} points",
            points.len()
        )));
    }

    Ok(indices
        .chunks_exact(3)
        .map(|t| Triangle::new(points[t[0]], points[t[1]], points[t[2]]))
        .collect())
}
