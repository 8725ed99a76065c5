//! Error types and result alias for the crate.
//!
//! This module defines [`enum@crate::error::Error`] and the crate-wide [Result] alias. Variants cover
//! invalid configuration, degenerate geometry handed to the projection primitive,
//! triangles that admit no valid base edge, and malformed triangulation output.
use glam::Vec2;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[non_exhaustive]
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The two points defining a line coincide, so nothing can be projected onto it.
    #[error("degenerate geometry: line points {start} and {end} coincide")]
    DegenerateGeometry { start: Vec2, end: Vec2 },

    /// No rotation of the triangle yielded a base edge the apex projects onto.
    #[error("triangle unsolvable after {attempts} base-edge attempts")]
    TriangleUnsolvable { attempts: usize },

    #[error("invalid triangulation: {0}")]
    InvalidTriangulation(String),

    #[error("{0}")]
    Other(String),
}

impl From<String> for Error {
    fn from(value: String) -> Self {
        Error::Other(value)
    }
}

impl From<&str> for Error {
    fn from(value: &str) -> Self {
        Error::Other(value.to_owned())
    }
}
