#![forbid(unsafe_code)]
//! tri_hatch: blue-noise triangulated line hatching.
//!
//! Modules:
//! - geometry: vector helpers, projection, segment membership and intersection
//! - sampling: spatial grid and the lazy Poisson disk sampler
//! - hatch: triangles, hatch lines, base-edge selection and stripe sweeping
//! - triangulation: seam to an external triangulator
//! - canvas: configuration, events, and the end-to-end generation runner
//!
//! For examples, see the `tri_hatch_examples` crate.
pub mod canvas;
pub mod error;
pub mod geometry;
pub mod hatch;
pub mod sampling;
pub mod triangulation;

/// Convenient re-exports for common types. Import with `use tri_hatch::prelude::*;`.
pub mod prelude {
    pub use crate::canvas::events::{
        CanvasEvent, CanvasEventKind, EventSink, FnSink, MultiSink, VecSink,
    };
    pub use crate::canvas::runner::{generate_canvas, CanvasGenerator};
    pub use crate::canvas::{
        Canvas, CanvasConfig, HatchedTriangle, UnsolvablePolicy, Viewbox,
    };
    pub use crate::error::{Error, Result};
    pub use crate::geometry::{intersect, is_between, project_onto_line, Point};
    pub use crate::hatch::{
        BaseEdge, HatchConfig, HatchLine, HatchMode, Triangle, TriangleHatcher,
    };
    pub use crate::sampling::{
        PoissonDiskSampler, PoissonDiskSampling, PositionSampling, SamplingDomain, SpatialGrid,
    };
    pub use crate::triangulation::{triangles_from_indices, Triangulator};
}
