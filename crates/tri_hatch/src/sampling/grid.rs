//! Uniform bucket grid for constant-time neighborhood queries.
//!
//! This module defines [`SpatialGrid`], which partitions `[0, width] x [0, height]`
//! into square cells of side `minimum_distance / sqrt(2)`. With that cell size a
//! cell's diagonal equals the minimum distance, so a point set obeying the
//! minimum-distance invariant holds at most one point per cell.
use std::f32::consts::SQRT_2;

use glam::Vec2;

/// Uniform grid of point buckets over a bounded rectangle.
#[derive(Clone, Debug)]
pub struct SpatialGrid {
    cell_size: f32,
    cols: usize,
    rows: usize,
    cells: Vec<Vec<Vec2>>,
    len: usize,
}

impl SpatialGrid {
    /// Creates an empty grid covering `[0, width] x [0, height]`.
    ///
    /// `minimum_distance` must be positive; the sampler validates this before
    /// constructing a grid.
    pub fn new(width: f32, height: f32, minimum_distance: f32) -> Self {
        debug_assert!(minimum_distance > 0.0);
        let cell_size = minimum_distance / SQRT_2;
        let cols = (width.max(0.0) / cell_size).floor() as usize + 1;
        let rows = (height.max(0.0) / cell_size).floor() as usize + 1;

        Self {
            cell_size,
            cols,
            rows,
            cells: vec![Vec::new(); cols * rows],
            len: 0,
        }
    }

    /// Side length of one cell in world units.
    pub fn cell_size(&self) -> f32 {
        self.cell_size
    }

    /// Grid dimensions as `(columns, rows)`.
    pub fn dimensions(&self) -> (usize, usize) {
        (self.cols, self.rows)
    }

    /// Number of points stored.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Cell coordinates `(floor(x / cell), floor(y / cell))`, clamped to the grid.
    #[inline]
    pub fn cell_of(&self, point: Vec2) -> (usize, usize) {
        let x = ((point.x / self.cell_size).floor() as isize).clamp(0, self.cols as isize - 1);
        let y = ((point.y / self.cell_size).floor() as isize).clamp(0, self.rows as isize - 1);
        (x as usize, y as usize)
    }

    #[inline]
    fn index(&self, x: usize, y: usize) -> usize {
        y * self.cols + x
    }

    pub fn insert(&mut self, point: Vec2) {
        let (x, y) = self.cell_of(point);
        let idx = self.index(x, y);
        self.cells[idx].push(point);
        self.len += 1;
    }

    /// Points strictly closer than `radius` to `point`.
    ///
    /// Scans `ceil(radius / cell_size)` cells on each side of the cell holding
    /// `point`; for `radius == minimum_distance` this is a 5x5 window.
    pub fn neighbors_within(&self, point: Vec2, radius: f32) -> impl Iterator<Item = Vec2> + '_ {
        let span = self.span_for(radius);
        let (cx, cy) = self.cell_of(point);
        let x0 = cx.saturating_sub(span);
        let x1 = (cx + span + 1).min(self.cols);
        let y0 = cy.saturating_sub(span);
        let y1 = (cy + span + 1).min(self.rows);
        let radius_sq = radius * radius;

        (y0..y1)
            .flat_map(move |y| (x0..x1).map(move |x| self.index(x, y)))
            .flat_map(move |idx| self.cells[idx].iter().copied())
            .filter(move |p| p.distance_squared(point) < radius_sq)
    }

    /// Returns `true` if any stored point is strictly closer than `radius` to `point`.
    pub fn has_neighbor_within(&self, point: Vec2, radius: f32) -> bool {
        self.neighbors_within(point, radius).next().is_some()
    }

    fn span_for(&self, radius: f32) -> usize {
        if !radius.is_finite() || radius <= 0.0 {
            return 0;
        }
        (radius / self.cell_size).ceil() as usize
    }
}
